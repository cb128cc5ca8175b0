//! User lookups that used to be chains of null checks.

use adtkit::control::{Either, Maybe};
use serde::Deserialize;

use crate::error::WalkthroughError;

/// A street, possibly without a name on record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Street {
    /// Street name.
    pub name: Option<String>,
}

/// A postal address.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Address {
    /// Street part of the address.
    pub street: Option<Street>,
}

/// Display preferences.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Preferences {
    /// Colour theme.
    pub theme: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
        }
    }
}

/// A registered user.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Whether the user pays for premium features.
    #[serde(default)]
    pub premium: bool,
    /// Stored preferences.
    #[serde(default)]
    pub preferences: Preferences,
    /// Postal address.
    pub address: Option<Address>,
}

/// Renders the page for a signed in user, or the login page.
pub fn open_site(user: Option<&User>) -> String {
    Either::from_nullable(user, || ()).fold(
        |()| "showing login".to_string(),
        |user| format!("rendering page for {}", user.name),
    )
}

/// Premium users get their stored preferences, everyone else the defaults.
pub fn preferences(user: &User) -> Preferences {
    let account: Either<&str, &User> = if user.premium {
        Either::right(user)
    } else {
        Either::left("not premium")
    };
    account.fold(|_| Preferences::default(), |user| user.preferences.clone())
}

/// Walks `user.address.street.name`, stopping at the first missing link.
pub fn street_name(user: &User) -> Maybe<String> {
    Maybe::from_nullable(user.address.as_ref())
        .chain(|address| Maybe::from_nullable(address.street.as_ref()))
        .chain(|street| Maybe::from_nullable(street.name.clone()))
}

/// [`street_name`] with the `"no street"` fallback applied.
pub fn street_name_or_default(user: &User) -> String {
    street_name(user).fold(|| "no street".to_string(), |name| name)
}

/// [`street_name`] reporting which property was missing.
pub fn street_name_checked(user: &User) -> Either<WalkthroughError, String> {
    let missing = |property: &str| WalkthroughError::MissingProperty(property.to_string());
    Either::from_nullable(user.address.as_ref(), || missing("address"))
        .chain(|address| Either::from_nullable(address.street.as_ref(), || missing("street")))
        .chain(|street| Either::from_nullable(street.name.clone(), || missing("name")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user(address: Option<Address>) -> User {
        User {
            name: "Ada".to_string(),
            premium: false,
            preferences: Preferences::default(),
            address,
        }
    }

    #[rstest]
    fn open_site_branches_on_presence() {
        let ada = user(None);
        assert_eq!(open_site(Some(&ada)), "rendering page for Ada");
        assert_eq!(open_site(None), "showing login");
    }

    #[rstest]
    fn only_premium_users_keep_preferences() {
        let mut premium = user(None);
        premium.premium = true;
        premium.preferences.theme = "dark".to_string();
        let mut regular = premium.clone();
        regular.premium = false;

        assert_eq!(preferences(&premium).theme, "dark");
        assert_eq!(preferences(&regular).theme, "light");
    }

    #[rstest]
    #[case(None, "no street", "property address not found")]
    #[case(Some(Address { street: None }), "no street", "property street not found")]
    #[case(Some(Address { street: Some(Street { name: None }) }), "no street", "property name not found")]
    fn missing_links_fall_back(#[case] address: Option<Address>, #[case] fallback: &str, #[case] reason: &str) {
        let user = user(address);
        assert_eq!(street_name_or_default(&user), fallback);
        assert_eq!(street_name_checked(&user).fold(|error| error.to_string(), |name| name), reason);
    }

    #[rstest]
    fn full_address_yields_name() {
        let user = user(Some(Address {
            street: Some(Street {
                name: Some("Elm Street".to_string()),
            }),
        }));
        assert_eq!(street_name(&user), Maybe::some("Elm Street".to_string()));
        assert_eq!(street_name_checked(&user), Either::right("Elm Street".to_string()));
    }
}
