//! Reading properties out of untrusted JSON text.

use adtkit::control::Either;
use serde_json::Value;

use crate::error::WalkthroughError;

/// Parses `text` and follows the dotted `path` (`"profile.name"`) into it.
///
/// Each segment is one lookup; a missing or `null` field stops the walk.
/// Parse failures and missing properties both end up on the `Left` side.
///
/// ```
/// use adtkit_walkthrough::json::safe_prop;
///
/// let port = safe_prop(r#"{"port": 8080}"#, "port").fold(|_| 3000, |value| value.as_u64().unwrap_or(3000));
/// assert_eq!(port, 8080);
///
/// let name = safe_prop(r#"{"profile": {"name": "ada"}}"#, "profile.name")
///     .map(|value| value.as_str().map(str::to_uppercase).unwrap_or_default())
///     .fold(|_| "Property missing".to_string(), |name| name);
/// assert_eq!(name, "ADA");
/// ```
pub fn safe_prop(text: &str, path: &str) -> Either<WalkthroughError, Value> {
    Either::try_catch(|| serde_json::from_str::<Value>(text))
        .map_left(|error| WalkthroughError::InvalidJson(error.to_string()))
        .chain(|document| {
            path.split('.').fold(Either::right(document), |found, segment| {
                found.chain(|value| {
                    let field = value.get(segment).filter(|field| !field.is_null()).cloned();
                    Either::from_nullable(field, || WalkthroughError::MissingProperty(path.to_string()))
                })
            })
        })
}
