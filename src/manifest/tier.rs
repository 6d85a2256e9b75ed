//! Avatar tier definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Avatar tier, decided by the subdirectory a file lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Standard,
    Premium,
}

impl Tier {
    /// Tiers in manifest order.
    pub const ALL: [Tier; 2] = [Tier::Standard, Tier::Premium];

    /// Subdirectory name under the manifest root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Tier::Standard => "standard",
            Tier::Premium => "premium",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_order_and_names() {
        assert_eq!(Tier::ALL, [Tier::Standard, Tier::Premium]);
        assert_eq!(Tier::Premium.to_string(), "premium");
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Premium).unwrap(), "\"premium\"");
    }
}
