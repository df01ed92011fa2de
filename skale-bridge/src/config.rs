//! Deployment configuration schema.
//!
//! A [`BridgeConfig`] is the serde image of one network's deployment
//! document: the chain list, the token catalog, and the per-chain
//! connection maps. It is plain data; nothing is validated beyond field
//! shapes until [`ConnectionGraph::build`](crate::graph::ConnectionGraph::build)
//! is called on it.
//!
//! Built-in documents for the public networks live in [`crate::networks`];
//! [`BridgeConfig::from_json_file`] loads external ones.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::chain::{ChainInfo, ChainName};
use crate::edge::Edge;
use crate::error::ConfigError;
use crate::networks::SkaleNetwork;
use crate::token::{TokenMetadata, TokenSymbol, TokenType};

/// One token's deployment on one chain: its canonical contract address and
/// the outgoing connections to other chains.
///
/// `address` is `None` for pure routing placeholders and for the native
/// asset on the root chain. A zero address in the source document means
/// "not deployed yet" and is normalized to `None` during graph
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEntry {
    /// Canonical contract address on the owning chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Outgoing edges, keyed by destination chain.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub chains: BTreeMap<ChainName, Edge>,
}

impl TokenEntry {
    /// Creates an entry with no address and no connections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the canonical contract address.
    #[must_use]
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Adds an outgoing edge to a destination chain.
    #[must_use]
    pub fn with_chain(mut self, destination: ChainName, edge: Edge) -> Self {
        self.chains.insert(destination, edge);
        self
    }
}

/// Token entries for one token type on one chain, keyed by symbol.
pub type TokenConnections = BTreeMap<TokenSymbol, TokenEntry>;

/// All of one chain's token entries, keyed by token type.
pub type ChainConnections = BTreeMap<TokenType, TokenConnections>;

/// One network's complete deployment document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// The network this document describes.
    pub network: SkaleNetwork,
    /// Participating chains in canonical order; the first entry is the
    /// default origin and the second the default destination.
    pub chains: Vec<ChainInfo>,
    /// Network-wide token catalog.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tokens: BTreeMap<TokenSymbol, TokenMetadata>,
    /// Per-chain connection maps.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub connections: BTreeMap<ChainName, ChainConnections>,
}

impl BridgeConfig {
    /// Creates an empty document for the given network.
    #[must_use]
    pub fn new(network: SkaleNetwork) -> Self {
        Self {
            network,
            chains: Vec::new(),
            tokens: BTreeMap::new(),
            connections: BTreeMap::new(),
        }
    }

    /// Appends a chain to the chain list.
    #[must_use]
    pub fn with_chain(mut self, chain: ChainInfo) -> Self {
        self.chains.push(chain);
        self
    }

    /// Adds a token to the catalog.
    #[must_use]
    pub fn with_token(mut self, symbol: TokenSymbol, metadata: TokenMetadata) -> Self {
        self.tokens.insert(symbol, metadata);
        self
    }

    /// Adds a token entry under `origin` for the given type and symbol.
    #[must_use]
    pub fn with_connection(
        mut self,
        origin: ChainName,
        token_type: TokenType,
        symbol: TokenSymbol,
        entry: TokenEntry,
    ) -> Self {
        self.connections
            .entry(origin)
            .or_default()
            .entry(token_type)
            .or_default()
            .insert(symbol, entry);
        self
    }

    /// Parses a deployment document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid JSON
    /// for this schema.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads and parses a deployment document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are not a valid document.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
