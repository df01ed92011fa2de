//! Network registry and built-in deployment documents.
//!
//! A network is one self-contained bridge deployment: an Ethereum root
//! chain plus the SKALE chains bridged to it. Chain names and token
//! catalogs never cross network boundaries.
//!
//! - [`SkaleNetwork`] - the known deployments (`mainnet`, `legacy`,
//!   `regression`, `testnet`)
//! - [`NetworkInfo`] - static per-network endpoints and feature flags
//! - [`builtin`] / [`builtin_graph`] - bundled deployment documents for
//!   the public networks

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::chain::ChainName;
use crate::config::BridgeConfig;
use crate::error::ConfigError;
use crate::graph::ConnectionGraph;

pub mod mainnet;
pub mod testnet;

/// A SKALE bridge deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkaleNetwork {
    /// The production deployment, rooted on Ethereum mainnet.
    Mainnet,
    /// The legacy staging deployment.
    Legacy,
    /// The internal regression-testing deployment.
    Regression,
    /// The public test deployment, rooted on Holesky.
    Testnet,
}

impl SkaleNetwork {
    /// Returns all networks in canonical order.
    #[must_use]
    pub const fn variants() -> &'static [Self] {
        &[Self::Mainnet, Self::Legacy, Self::Regression, Self::Testnet]
    }

    /// Returns the lower-case wire form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Legacy => "legacy",
            Self::Regression => "regression",
            Self::Testnet => "testnet",
        }
    }

    /// Returns `true` only for the production deployment.
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Mainnet)
    }
}

impl fmt::Display for SkaleNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown network name.
#[derive(Debug, thiserror::Error)]
#[error("unknown SKALE network `{0}`")]
pub struct SkaleNetworkError(String);

impl FromStr for SkaleNetwork {
    type Err = SkaleNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "legacy" => Ok(Self::Legacy),
            "regression" => Ok(Self::Regression),
            "testnet" => Ok(Self::Testnet),
            other => Err(SkaleNetworkError(other.to_owned())),
        }
    }
}

/// A capability a network exposes to its users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkFeature {
    /// Token transfers between the network's chains.
    Bridge,
    /// SKL staking against the root chain.
    Staking,
    /// Free test-token dispensing on SKALE chains.
    Faucet,
}

impl fmt::Display for NetworkFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bridge => "bridge",
            Self::Staking => "staking",
            Self::Faucet => "faucet",
        })
    }
}

/// Static endpoints and capabilities of one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkInfo {
    /// The network this row describes.
    pub network: SkaleNetwork,
    /// Base URL of the SKALE proxy serving the network's chains.
    pub proxy_base: &'static str,
    /// JSON-RPC endpoint of the Ethereum root chain.
    pub ethereum_rpc: &'static str,
    /// Block explorer of the Ethereum root chain.
    pub ethereum_explorer: &'static str,
    /// Capabilities this network exposes.
    pub features: &'static [NetworkFeature],
}

const MAINNET_INFO: NetworkInfo = NetworkInfo {
    network: SkaleNetwork::Mainnet,
    proxy_base: "https://mainnet.skalenodes.com",
    ethereum_rpc: "https://cloudflare-eth.com",
    ethereum_explorer: "https://etherscan.io",
    features: &[NetworkFeature::Bridge, NetworkFeature::Staking],
};

const LEGACY_INFO: NetworkInfo = NetworkInfo {
    network: SkaleNetwork::Legacy,
    proxy_base: "https://staging-v3.skalenodes.com",
    ethereum_rpc: "https://ethereum-holesky-rpc.publicnode.com",
    ethereum_explorer: "https://holesky.etherscan.io",
    features: &[NetworkFeature::Bridge, NetworkFeature::Staking],
};

const REGRESSION_INFO: NetworkInfo = NetworkInfo {
    network: SkaleNetwork::Regression,
    proxy_base: "https://regression-proxy.skalenodes.com",
    ethereum_rpc: "https://ethereum-holesky-rpc.publicnode.com",
    ethereum_explorer: "https://holesky.etherscan.io",
    features: &[NetworkFeature::Bridge],
};

const TESTNET_INFO: NetworkInfo = NetworkInfo {
    network: SkaleNetwork::Testnet,
    proxy_base: "https://testnet.skalenodes.com",
    ethereum_rpc: "https://ethereum-holesky-rpc.publicnode.com",
    ethereum_explorer: "https://holesky.etherscan.io",
    features: &[NetworkFeature::Bridge, NetworkFeature::Faucet],
};

impl NetworkInfo {
    /// Returns the registry row for a network.
    #[must_use]
    pub const fn for_network(network: SkaleNetwork) -> &'static Self {
        match network {
            SkaleNetwork::Mainnet => &MAINNET_INFO,
            SkaleNetwork::Legacy => &LEGACY_INFO,
            SkaleNetwork::Regression => &REGRESSION_INFO,
            SkaleNetwork::Testnet => &TESTNET_INFO,
        }
    }

    /// Returns `true` if the network exposes the given capability.
    #[must_use]
    pub fn supports(&self, feature: NetworkFeature) -> bool {
        self.features.contains(&feature)
    }

    /// Returns the JSON-RPC endpoint for a chain on this network.
    ///
    /// SKALE chains are served by the network proxy under `/v1/{chain}`;
    /// the root chain uses the network's Ethereum endpoint.
    #[must_use]
    pub fn rpc_url(&self, chain: &ChainName) -> String {
        if chain.is_mainnet() {
            self.ethereum_rpc.to_owned()
        } else {
            format!("{}/v1/{chain}", self.proxy_base)
        }
    }

    /// Returns the block explorer URL for a chain on this network.
    ///
    /// SKALE chain explorers are subdomains of the network proxy host;
    /// the root chain uses the network's Ethereum explorer.
    #[must_use]
    pub fn explorer_url(&self, chain: &ChainName) -> String {
        if chain.is_mainnet() {
            self.ethereum_explorer.to_owned()
        } else {
            let proxy_host = self
                .proxy_base
                .strip_prefix("https://")
                .unwrap_or(self.proxy_base);
            format!("https://{chain}.explorer.{proxy_host}")
        }
    }
}

/// Returns the bundled deployment document for a network.
///
/// Only the public networks ship documents with this crate; `Legacy` and
/// `Regression` deployments are described by external documents and return
/// `None` here.
#[must_use]
pub fn builtin(network: SkaleNetwork) -> Option<BridgeConfig> {
    match network {
        SkaleNetwork::Mainnet => Some(mainnet::config()),
        SkaleNetwork::Testnet => Some(testnet::config()),
        SkaleNetwork::Legacy | SkaleNetwork::Regression => None,
    }
}

/// Builds the validated connection graph for a network's bundled document.
///
/// Returns `None` when no document is bundled, mirroring [`builtin`].
#[must_use]
pub fn builtin_graph(network: SkaleNetwork) -> Option<Result<ConnectionGraph, ConfigError>> {
    builtin(network).map(ConnectionGraph::build)
}
