//! # Authentication Provider
//!
//! The identity/wallet provider a merchant site uses to authenticate the
//! buyer during checkout. The recognized set is closed; anything else is
//! rejected with a message enumerating the valid options.

use serde::{Deserialize, Serialize};

/// Recognized authentication providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// Internet Identity
    #[serde(rename = "II")]
    InternetIdentity,

    /// NFID wallet
    #[serde(rename = "NFID")]
    Nfid,
}

impl Provider {
    /// Every recognized provider, in display order
    pub const ALL: [Provider; 2] = [Provider::InternetIdentity, Provider::Nfid];

    /// Wire name of the provider
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::InternetIdentity => "II",
            Provider::Nfid => "NFID",
        }
    }

    /// Human-readable enumeration of the valid set (e.g., `"II or NFID"`)
    pub fn valid_set() -> String {
        let names: Vec<&str> = Provider::ALL.iter().map(|p| p.as_str()).collect();
        names.join(" or ")
    }

    /// Parse a wire name into a provider.
    ///
    /// The error message enumerates the full recognized set so an integrator
    /// can correct the value without consulting documentation.
    pub fn parse(input: &str) -> Result<Self, String> {
        Provider::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == input)
            .ok_or_else(|| {
                format!(
                    "unrecognized provider \"{}\": expected {}",
                    input,
                    Provider::valid_set()
                )
            })
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
