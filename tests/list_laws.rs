//! Property-based tests for List.

#![cfg(feature = "persistent")]

use adtkit::persistent::List;
use adtkit::typeclass::FunctorMut;
use proptest::prelude::*;

fn list_strategy(max_size: usize) -> impl Strategy<Value = List<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(|vector| vector.into_iter().collect())
}

fn small_list() -> impl Strategy<Value = List<i32>> {
    list_strategy(20)
}

proptest! {
    #[test]
    fn prop_len_matches_iter_count(list in small_list()) {
        prop_assert_eq!(list.len(), list.iter().count());
    }

    #[test]
    fn prop_cons_adds_one_element(list in small_list(), element: i32) {
        let extended = List::cons(element, list.clone());
        prop_assert_eq!(extended.len(), list.len() + 1);
        prop_assert_eq!(extended.head(), Some(&element));
        prop_assert_eq!(extended.tail(), list);
    }

    #[test]
    fn prop_map_identity(list in small_list()) {
        prop_assert_eq!(list.map(|x| *x), list);
    }

    #[test]
    fn prop_map_composition(list in small_list()) {
        let function1 = |n: &i32| n.wrapping_add(1);
        let function2 = |n: &i32| n.wrapping_mul(3);
        prop_assert_eq!(list.map(function1).map(function2), list.map(|x| function2(&function1(x))));
    }

    #[test]
    fn prop_fmap_mut_agrees_with_map(list in small_list()) {
        let mut seen = 0;
        let mapped = list.clone().fmap_mut(|n| {
            seen += 1;
            n.wrapping_sub(1)
        });
        prop_assert_eq!(seen, list.len());
        prop_assert_eq!(mapped, list.map(|n| n.wrapping_sub(1)));
    }

    #[test]
    fn prop_fold_left_matches_vec(list in small_list()) {
        let expected = list.to_vec().into_iter().fold(0_i64, |acc, n| acc - i64::from(n));
        prop_assert_eq!(list.fold_left(0_i64, |acc, n| acc - i64::from(*n)), expected);
    }

    #[test]
    fn prop_fold_right_rebuilds(list in small_list()) {
        let rebuilt = list.fold_right(List::nil(), |x, rest| List::cons(*x, rest));
        prop_assert_eq!(rebuilt, list);
    }

    #[test]
    fn prop_foldable_trait_matches_inherent(list in small_list()) {
        let inherent = list.fold_right(Vec::new(), |x, mut acc| { acc.push(*x); acc });
        let through_trait = <&List<i32> as adtkit::typeclass::Foldable>::fold_right(&list, Vec::new(), |x, mut acc| { acc.push(*x); acc });
        prop_assert_eq!(inherent, through_trait);
        prop_assert_eq!(<&List<i32> as adtkit::typeclass::Foldable>::length(&&list), list.len());
    }

    #[test]
    fn prop_reverse_twice_is_identity(list in small_list()) {
        prop_assert_eq!(list.reverse().reverse(), list);
    }

    #[test]
    fn prop_append_length_adds(first in small_list(), second in small_list()) {
        prop_assert_eq!(first.append(&second).len(), first.len() + second.len());
    }

    #[test]
    fn prop_flat_map_singleton_is_identity(list in small_list()) {
        prop_assert_eq!(list.flat_map(|x| List::singleton(*x)), list);
    }

    #[test]
    fn prop_display_matches_joined_vec(list in small_list()) {
        let joined = list.to_vec().iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        prop_assert_eq!(list.to_string(), joined);
    }
}
