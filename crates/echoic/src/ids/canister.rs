use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    borrow::{Borrow, Cow},
    str::FromStr,
};

///
/// CanisterName
///
/// The logical name a canister is deployed under (e.g. "echo"), as keyed in
/// the deployment manifest.
///
/// Stored as `Cow<'static, str>` so known constants are zero-copy while
/// dynamic values (CLI flags, config files) allocate only when needed.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CanisterName(Cow<'static, str>);

impl CanisterName {
    pub const ECHO: Self = Self(Cow::Borrowed("echo"));

    #[must_use]
    pub const fn new(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }

    #[must_use]
    pub const fn owned(s: String) -> Self {
        Self(Cow::Owned(s))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into an owned string (avoids an extra allocation for owned variants).
    #[must_use]
    pub fn into_string(self) -> String {
        self.0.into_owned()
    }
}

impl FromStr for CanisterName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::owned(s.to_string()))
    }
}

impl From<&'static str> for CanisterName {
    fn from(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }
}

impl From<String> for CanisterName {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

impl From<CanisterName> for String {
    fn from(name: CanisterName) -> Self {
        name.into_string()
    }
}

impl AsRef<str> for CanisterName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for CanisterName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

///
/// TESTS
///
