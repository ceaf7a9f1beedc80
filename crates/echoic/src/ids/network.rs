use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    str::FromStr,
};
use thiserror::Error as ThisError;

///
/// Network
/// Identifies the deployment environment a canister id is resolved for.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Ic,

    #[default]
    Local,
}

impl Network {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ic => "ic",
            Self::Local => "local",
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = NetworkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ic" => Ok(Self::Ic),
            "local" => Ok(Self::Local),
            other => Err(NetworkParseError(other.to_string())),
        }
    }
}

///
/// NetworkParseError
///
/// A typo here must never silently select a different environment, so
/// parsing accepts exactly the known network names.
///

#[derive(Debug, ThisError)]
#[error("unknown network '{0}' (expected \"local\" or \"ic\")")]
pub struct NetworkParseError(String);

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::Network;

    #[test]
    fn as_str_and_display_agree() {
        assert_eq!(Network::Local.as_str(), "local");
        assert_eq!(Network::Ic.as_str(), "ic");
        assert_eq!(Network::Local.to_string(), "local");
        assert_eq!(Network::Ic.to_string(), "ic");
    }

    #[test]
    fn parses_known_networks_only() {
        assert_eq!("local".parse::<Network>().unwrap(), Network::Local);
        assert_eq!("ic".parse::<Network>().unwrap(), Network::Ic);

        let err = "staging".parse::<Network>().unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let net: Network = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(net, Network::Local);
        assert_eq!(serde_json::to_string(&Network::Ic).unwrap(), "\"ic\"");
    }
}
