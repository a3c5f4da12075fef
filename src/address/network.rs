//! Network presets - the prefixes in common use

use std::fmt;
use std::str::FromStr;

/// Network a prefix belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
    Regtest,
}

impl Network {
    /// Address prefix for this network
    pub const fn prefix(self) -> &'static str {
        match self {
            Network::Mainnet => "bitcoincash",
            Network::Testnet => "bchtest",
            Network::Regtest => "bchreg",
        }
    }

    /// Network using `prefix`, if any (case-insensitive)
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        [Network::Mainnet, Network::Testnet, Network::Regtest]
            .into_iter()
            .find(|network| network.prefix().eq_ignore_ascii_case(prefix))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        };
        f.write_str(name)
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            "regtest" | "reg" => Ok(Network::Regtest),
            other => {
                Network::from_prefix(other).ok_or_else(|| format!("Unknown network: {}", s))
            }
        }
    }
}
