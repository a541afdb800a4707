//! Solana cluster definitions.
//!
//! A [`Cluster`] identifies which Solana network the client talks to and
//! carries the RPC endpoint plus explorer link formatting for that network.

use std::fmt;
use std::str::FromStr;

// ============================================================================
// Cluster
// ============================================================================

/// The Solana cluster the application is connected to.
///
/// Devnet is the default: the token-forge workflow (airdropped SOL, throwaway
/// mints) is a devnet workflow first and foremost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Cluster {
    /// Developer network with free airdrops.
    #[default]
    Devnet,
    /// Public test network.
    Testnet,
    /// The production network.
    MainnetBeta,
    /// A locally running test validator.
    Localnet,
}

impl Cluster {
    /// Returns the display name of the cluster.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Devnet => "devnet",
            Self::Testnet => "testnet",
            Self::MainnetBeta => "mainnet-beta",
            Self::Localnet => "localnet",
        }
    }

    /// Returns the JSON-RPC endpoint for this cluster.
    #[must_use]
    pub const fn rpc_url(&self) -> &'static str {
        match self {
            Self::Devnet => "https://api.devnet.solana.com",
            Self::Testnet => "https://api.testnet.solana.com",
            Self::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Self::Localnet => "http://127.0.0.1:8899",
        }
    }

    /// Builds the Solana Explorer link for a transaction signature.
    ///
    /// Non-mainnet clusters carry a `?cluster=` query parameter so the
    /// explorer resolves the signature against the right network.
    #[must_use]
    pub fn explorer_tx_url(&self, signature: &str) -> String {
        match self {
            Self::MainnetBeta => {
                format!("https://explorer.solana.com/tx/{signature}")
            }
            Self::Localnet => format!(
                "https://explorer.solana.com/tx/{signature}?cluster=custom&customUrl={}",
                self.rpc_url()
            ),
            _ => format!(
                "https://explorer.solana.com/tx/{signature}?cluster={}",
                self.as_str()
            ),
        }
    }

    /// Returns all selectable clusters in display order.
    #[must_use]
    #[allow(dead_code)] // Part of the cluster API
    pub const fn all() -> [Self; 4] {
        [
            Self::Devnet,
            Self::Testnet,
            Self::MainnetBeta,
            Self::Localnet,
        ]
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cluster {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "devnet" => Ok(Self::Devnet),
            "testnet" => Ok(Self::Testnet),
            "mainnet-beta" | "mainnet" => Ok(Self::MainnetBeta),
            "localnet" | "localhost" => Ok(Self::Localnet),
            other => Err(format!(
                "unknown cluster '{other}' (expected devnet, testnet, mainnet-beta or localnet)"
            )),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_cluster_is_devnet() {
        assert_eq!(Cluster::default(), Cluster::Devnet);
    }

    #[rstest]
    #[case(Cluster::Devnet, "devnet", "https://api.devnet.solana.com")]
    #[case(Cluster::Testnet, "testnet", "https://api.testnet.solana.com")]
    #[case(
        Cluster::MainnetBeta,
        "mainnet-beta",
        "https://api.mainnet-beta.solana.com"
    )]
    #[case(Cluster::Localnet, "localnet", "http://127.0.0.1:8899")]
    fn test_cluster_urls(#[case] cluster: Cluster, #[case] name: &str, #[case] rpc: &str) {
        assert_eq!(cluster.as_str(), name);
        assert_eq!(cluster.rpc_url(), rpc);
    }

    #[test]
    fn test_devnet_explorer_link() {
        let url = Cluster::Devnet.explorer_tx_url("5GqSig");
        assert_eq!(url, "https://explorer.solana.com/tx/5GqSig?cluster=devnet");
    }

    #[test]
    fn test_mainnet_explorer_link_has_no_cluster_param() {
        let url = Cluster::MainnetBeta.explorer_tx_url("5GqSig");
        assert_eq!(url, "https://explorer.solana.com/tx/5GqSig");
    }

    #[rstest]
    #[case("devnet", Cluster::Devnet)]
    #[case("Testnet", Cluster::Testnet)]
    #[case("mainnet", Cluster::MainnetBeta)]
    #[case("mainnet-beta", Cluster::MainnetBeta)]
    #[case("localhost", Cluster::Localnet)]
    fn test_from_str(#[case] input: &str, #[case] expected: Cluster) {
        assert_eq!(input.parse::<Cluster>().unwrap(), expected);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("algorand".parse::<Cluster>().is_err());
    }
}
