//! Skeincoin network identities

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Network profile identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NetworkId {
    /// Production network
    #[serde(rename = "main")]
    Main,
    /// Public test network
    #[serde(rename = "test")]
    Testnet,
    /// Local regression-test network
    #[serde(rename = "regtest")]
    Regtest,
    /// In-process unit-test network
    #[serde(rename = "unittest")]
    UnitTest,
}

impl NetworkId {
    /// Every profile, in registry order
    pub const ALL: [NetworkId; 4] = [
        NetworkId::Main,
        NetworkId::Testnet,
        NetworkId::Regtest,
        NetworkId::UnitTest,
    ];

    /// Token used on the command line and in config files
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Testnet => "test",
            Self::Regtest => "regtest",
            Self::UnitTest => "unittest",
        }
    }

    /// Parse a token coming from a user-facing surface.
    ///
    /// Unlike [`FromStr`], this refuses the internal `unittest` token.
    pub fn from_cli_token(token: &str) -> Result<Self> {
        match token.parse()? {
            Self::UnitTest => Err(Error::InvalidNetwork(token.to_string())),
            id => Ok(id),
        }
    }
}

impl FromStr for NetworkId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "main" => Ok(Self::Main),
            "test" => Ok(Self::Testnet),
            "regtest" => Ok(Self::Regtest),
            "unittest" => Ok(Self::UnitTest),
            other => Err(Error::InvalidNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
