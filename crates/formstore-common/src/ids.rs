//! Typed ID wrappers for store-assigned integer keys.
//!
//! Each ID type is a newtype over `i64`, preventing accidental misuse
//! (e.g., passing a `UserId` where a `FormId` is expected).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Generate a newtype ID wrapper over `i64`.
///
/// The macro produces a struct with:
/// - `get()` returning the raw key
/// - `is_valid()` checking the key is a possible rowid (`>= 1`)
/// - `Display` and `FromStr` delegating to the inner integer
/// - `From<i64>` and `Into<i64>` conversions
macro_rules! typed_id {
    ($($(#[doc = $doc:expr])* $name:ident),+ $(,)?) => {
        $(
            $(#[doc = $doc])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(i64);

            impl $name {
                /// Return the raw integer key.
                #[must_use]
                pub fn get(self) -> i64 {
                    self.0
                }

                /// Whether this key could have been assigned by the store.
                #[must_use]
                pub fn is_valid(self) -> bool {
                    self.0 >= 1
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl FromStr for $name {
                type Err = ParseIntError;

                fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                    s.parse::<i64>().map(Self)
                }
            }

            impl From<i64> for $name {
                fn from(raw: i64) -> Self {
                    Self(raw)
                }
            }

            impl From<$name> for i64 {
                fn from(id: $name) -> Self {
                    id.0
                }
            }
        )+
    };
}

typed_id! {
    /// Identifier of the user that owns forms.
    UserId,
    /// Identifier of a form.
    FormId,
    /// Identifier of a form-instance snapshot.
    FormInstanceId,
}
