//! The validated connection graph.
//!
//! [`ConnectionGraph::build`] consumes a [`BridgeConfig`], checks every
//! structural rule the bridge relies on, normalizes placeholder values,
//! and freezes the result. Construction is fail-fast: the first violation
//! aborts with a [`ConfigError`] naming the offending entry, and no
//! partially-valid graph is ever observable. All query methods borrow
//! immutably; reloading a deployment means building a new graph.
//!
//! Route resolution on a built graph lives in [`crate::resolver`].

use alloy_primitives::Address;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[cfg(feature = "telemetry")]
use tracing::{debug, instrument, warn};

use crate::chain::{ChainInfo, ChainName};
use crate::config::{BridgeConfig, ChainConnections, TokenEntry};
use crate::edge::Edge;
use crate::error::{ConfigError, UnknownTokenError};
use crate::networks::SkaleNetwork;
use crate::token::{TokenMetadata, TokenSymbol, TokenType};

/// A configuration oddity that is tolerated but worth surfacing.
///
/// Smells never fail construction; they are collected on the graph and
/// reported through [`ConnectionGraph::smells`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSmell {
    /// Both directions of a chain pair mark the same token as a clone, so
    /// neither side is canonical.
    MutualClone {
        /// Token type of the pair of entries.
        token_type: TokenType,
        /// Token symbol of the pair of entries.
        symbol: TokenSymbol,
        /// One endpoint of the pair.
        a: ChainName,
        /// The other endpoint of the pair.
        b: ChainName,
    },
}

impl fmt::Display for ConfigSmell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MutualClone {
                token_type,
                symbol,
                a,
                b,
            } => write!(
                f,
                "{token_type} `{symbol}` is marked clone in both directions between `{a}` and `{b}`"
            ),
        }
    }
}

/// An immutable, validated view of one network's bridge topology.
#[derive(Debug, Clone)]
pub struct ConnectionGraph {
    network: SkaleNetwork,
    chains: Vec<ChainInfo>,
    tokens: BTreeMap<TokenSymbol, TokenMetadata>,
    connections: BTreeMap<ChainName, ChainConnections>,
    smells: Vec<ConfigSmell>,
}

impl ConnectionGraph {
    /// Validates a deployment document and freezes it into a graph.
    ///
    /// Zero canonical addresses are normalized to `None`, and tolerated
    /// oddities are recorded as [`ConfigSmell`]s on the returned graph.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered, in deterministic
    /// document order. Nothing of the rejected document survives.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "graph_build", skip_all, fields(network = %config.network))
    )]
    pub fn build(mut config: BridgeConfig) -> Result<Self, ConfigError> {
        validate(&config)?;
        let smells = detect_smells(&config);
        #[cfg(feature = "telemetry")]
        for smell in &smells {
            warn!(%smell, "configuration smell");
        }
        normalize_addresses(&mut config);
        Ok(Self {
            network: config.network,
            chains: config.chains,
            tokens: config.tokens,
            connections: config.connections,
            smells,
        })
    }

    /// Returns the network this graph describes.
    #[must_use]
    pub const fn network(&self) -> SkaleNetwork {
        self.network
    }

    /// Returns the chains in canonical document order.
    pub fn chains(&self) -> impl Iterator<Item = &ChainInfo> {
        self.chains.iter()
    }

    /// Looks up a chain's registry entry.
    #[must_use]
    pub fn chain(&self, name: &ChainName) -> Option<&ChainInfo> {
        self.chains.iter().find(|chain| &chain.name == name)
    }

    /// Returns `true` if the chain participates in this network.
    #[must_use]
    pub fn contains_chain(&self, name: &ChainName) -> bool {
        self.chain(name).is_some()
    }

    /// Returns the first chain in canonical order, the UI's default
    /// origin.
    #[must_use]
    pub fn default_origin(&self) -> Option<&ChainName> {
        self.chains.first().map(|chain| &chain.name)
    }

    /// Returns the second chain in canonical order, the UI's default
    /// destination.
    #[must_use]
    pub fn default_destination(&self) -> Option<&ChainName> {
        self.chains.get(1).map(|chain| &chain.name)
    }

    /// Returns the token catalog.
    pub fn tokens(&self) -> impl Iterator<Item = (&TokenSymbol, &TokenMetadata)> {
        self.tokens.iter()
    }

    /// Looks up a token's catalog metadata.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTokenError`] if the symbol is not catalogued on
    /// this network.
    pub fn token_meta(&self, symbol: &TokenSymbol) -> Result<&TokenMetadata, UnknownTokenError> {
        self.tokens.get(symbol).ok_or_else(|| UnknownTokenError {
            network: self.network,
            symbol: symbol.clone(),
        })
    }

    /// Looks up a token entry on a chain.
    #[must_use]
    pub fn token_entry(
        &self,
        chain: &ChainName,
        token_type: TokenType,
        symbol: &TokenSymbol,
    ) -> Option<&TokenEntry> {
        self.connections
            .get(chain)?
            .get(&token_type)?
            .get(symbol)
    }

    /// Looks up the edge from `origin` to `destination` for one token.
    ///
    /// Pure and idempotent: the same coordinates always return the same
    /// edge on the same graph.
    #[must_use]
    pub fn edge(
        &self,
        origin: &ChainName,
        token_type: TokenType,
        symbol: &TokenSymbol,
        destination: &ChainName,
    ) -> Option<&Edge> {
        self.token_entry(origin, token_type, symbol)?
            .chains
            .get(destination)
    }

    /// Returns every chain reachable from `origin` for one token, whether
    /// directly or through a hub.
    #[must_use]
    pub fn destinations(
        &self,
        origin: &ChainName,
        token_type: TokenType,
        symbol: &TokenSymbol,
    ) -> BTreeSet<&ChainName> {
        self.token_entry(origin, token_type, symbol)
            .map(|entry| entry.chains.keys().collect())
            .unwrap_or_default()
    }

    /// Returns the canonical contract address of a token on a chain.
    ///
    /// `None` for the native asset on the root chain and for entries whose
    /// address is not deployed.
    #[must_use]
    pub fn canonical_address(
        &self,
        chain: &ChainName,
        token_type: TokenType,
        symbol: &TokenSymbol,
    ) -> Option<Address> {
        self.token_entry(chain, token_type, symbol)?.address
    }

    /// Returns the token types with at least one entry on `origin`.
    #[must_use]
    pub fn token_types(&self, origin: &ChainName) -> BTreeSet<TokenType> {
        self.connections
            .get(origin)
            .map(|types| types.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Returns the symbols of one token type with an entry on `origin`.
    pub fn symbols(
        &self,
        origin: &ChainName,
        token_type: TokenType,
    ) -> impl Iterator<Item = &TokenSymbol> {
        self.connections
            .get(origin)
            .and_then(|types| types.get(&token_type))
            .into_iter()
            .flat_map(BTreeMap::keys)
    }

    /// Returns the tolerated oddities recorded during construction.
    #[must_use]
    pub fn smells(&self) -> &[ConfigSmell] {
        &self.smells
    }
}

fn validate(config: &BridgeConfig) -> Result<(), ConfigError> {
    let network = config.network;

    if config.chains.is_empty() {
        return Err(ConfigError::EmptyChainList { network });
    }
    let mut listed: BTreeSet<&ChainName> = BTreeSet::new();
    for chain in &config.chains {
        if !listed.insert(&chain.name) {
            return Err(ConfigError::DuplicateChain {
                network,
                chain: chain.name.clone(),
            });
        }
    }

    for (origin, chain_conns) in &config.connections {
        if !listed.contains(origin) {
            return Err(ConfigError::UnknownOriginChain {
                network,
                origin: origin.clone(),
            });
        }
        for (token_type, tokens) in chain_conns {
            for (symbol, entry) in tokens {
                if !config.tokens.contains_key(symbol) {
                    return Err(ConfigError::UnlistedToken {
                        network,
                        origin: origin.clone(),
                        token_type: *token_type,
                        symbol: symbol.clone(),
                    });
                }
                for (destination, edge) in &entry.chains {
                    validate_edge(
                        config, &listed, origin, *token_type, symbol, entry, destination, edge,
                    )?;
                }
            }
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn validate_edge(
    config: &BridgeConfig,
    listed: &BTreeSet<&ChainName>,
    origin: &ChainName,
    token_type: TokenType,
    symbol: &TokenSymbol,
    entry: &TokenEntry,
    destination: &ChainName,
    edge: &Edge,
) -> Result<(), ConfigError> {
    let network = config.network;

    if !listed.contains(destination) {
        return Err(ConfigError::DanglingDestination {
            network,
            origin: origin.clone(),
            token_type,
            symbol: symbol.clone(),
            destination: destination.clone(),
        });
    }
    if destination == origin {
        return Err(ConfigError::SelfLoop {
            network,
            origin: origin.clone(),
            token_type,
            symbol: symbol.clone(),
        });
    }

    let Some(hub) = edge.hub() else {
        return Ok(());
    };

    if !listed.contains(hub) {
        return Err(ConfigError::UnknownHub {
            network,
            origin: origin.clone(),
            destination: destination.clone(),
            token_type,
            symbol: symbol.clone(),
            hub: hub.clone(),
        });
    }
    if hub == origin || hub == destination {
        return Err(ConfigError::HubIsEndpoint {
            network,
            origin: origin.clone(),
            destination: destination.clone(),
            token_type,
            symbol: symbol.clone(),
            hub: hub.clone(),
        });
    }

    // Hub routing is one indirection deep: both legs must exist in the
    // document as plain edges, never discovered by search.
    let outbound = entry.chains.get(hub);
    let inbound = config
        .connections
        .get(hub)
        .and_then(|types| types.get(&token_type))
        .and_then(|tokens| tokens.get(symbol))
        .and_then(|hub_entry| hub_entry.chains.get(destination));

    for (leg, leg_origin, leg_destination) in [
        (outbound, origin, hub),
        (inbound, hub, destination),
    ] {
        match leg {
            None => {
                return Err(ConfigError::HubLegMissing {
                    network,
                    origin: origin.clone(),
                    destination: destination.clone(),
                    token_type,
                    symbol: symbol.clone(),
                    hub: hub.clone(),
                    leg_origin: leg_origin.clone(),
                    leg_destination: leg_destination.clone(),
                });
            }
            Some(leg_edge) if leg_edge.is_hubbed() => {
                return Err(ConfigError::NestedHub {
                    network,
                    origin: origin.clone(),
                    destination: destination.clone(),
                    token_type,
                    symbol: symbol.clone(),
                    leg_origin: leg_origin.clone(),
                    leg_destination: leg_destination.clone(),
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}

fn detect_smells(config: &BridgeConfig) -> Vec<ConfigSmell> {
    let mut smells = Vec::new();
    for (origin, chain_conns) in &config.connections {
        for (token_type, tokens) in chain_conns {
            for (symbol, entry) in tokens {
                for (destination, edge) in &entry.chains {
                    // Each pair is inspected once, from its lesser endpoint.
                    if !edge.is_clone() || origin >= destination {
                        continue;
                    }
                    let reverse = config
                        .connections
                        .get(destination)
                        .and_then(|types| types.get(token_type))
                        .and_then(|reverse_tokens| reverse_tokens.get(symbol))
                        .and_then(|reverse_entry| reverse_entry.chains.get(origin));
                    if reverse.is_some_and(Edge::is_clone) {
                        smells.push(ConfigSmell::MutualClone {
                            token_type: *token_type,
                            symbol: symbol.clone(),
                            a: origin.clone(),
                            b: destination.clone(),
                        });
                    }
                }
            }
        }
    }
    smells
}

#[cfg_attr(not(feature = "telemetry"), allow(unused_variables))]
fn normalize_addresses(config: &mut BridgeConfig) {
    for (origin, chain_conns) in &mut config.connections {
        for (token_type, tokens) in &mut *chain_conns {
            for (symbol, entry) in &mut *tokens {
                if entry.address == Some(Address::ZERO) {
                    entry.address = None;
                    #[cfg(feature = "telemetry")]
                    debug!(
                        chain = %origin,
                        token_type = %token_type,
                        symbol = %symbol,
                        "normalized zero-address placeholder"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    fn europa() -> ChainName {
        "elated-tan-skat".parse().unwrap()
    }

    fn calypso() -> ChainName {
        "honorable-steel-rasalhague".parse().unwrap()
    }

    fn skl() -> TokenSymbol {
        "skl".parse().unwrap()
    }

    /// mainnet <-> europa directly; calypso reaches mainnet through europa.
    fn fixture() -> BridgeConfig {
        BridgeConfig::new(SkaleNetwork::Mainnet)
            .with_chain(ChainInfo::new(ChainName::mainnet()))
            .with_chain(ChainInfo::new(europa()).with_alias("Europa"))
            .with_chain(ChainInfo::new(calypso()).with_alias("Calypso"))
            .with_token(skl(), TokenMetadata::new("SKALE Network Token", "SKL"))
            .with_connection(
                ChainName::mainnet(),
                TokenType::Erc20,
                skl(),
                TokenEntry::new()
                    .with_address(address!("0x00c83aeCC790e8a4453e5dD3B0B4b3680501a7A7"))
                    .with_chain(europa(), Edge::direct())
                    .with_chain(calypso(), Edge::direct().via(europa())),
            )
            .with_connection(
                europa(),
                TokenType::Erc20,
                skl(),
                TokenEntry::new()
                    .with_address(address!("0xe0595a049d02b7674572b0d59cd4880db60edc50"))
                    .with_chain(ChainName::mainnet(), Edge::cloned())
                    .with_chain(calypso(), Edge::direct()),
            )
            .with_connection(
                calypso(),
                TokenType::Erc20,
                skl(),
                TokenEntry::new()
                    .with_address(address!("0x254c16a6176a072ca71fa600ca7c9cf7b07caf50"))
                    .with_chain(europa(), Edge::cloned())
                    .with_chain(ChainName::mainnet(), Edge::cloned().via(europa())),
            )
    }

    #[test]
    fn test_build_accepts_fixture() {
        let graph = ConnectionGraph::build(fixture()).unwrap();
        assert_eq!(graph.network(), SkaleNetwork::Mainnet);
        assert_eq!(graph.chains().count(), 3);
        assert!(graph.smells().is_empty());
    }

    #[test]
    fn test_build_rejects_empty_chain_list() {
        let config = BridgeConfig::new(SkaleNetwork::Mainnet);
        assert!(matches!(
            ConnectionGraph::build(config),
            Err(ConfigError::EmptyChainList { .. })
        ));
    }

    #[test]
    fn test_build_rejects_duplicate_chain() {
        let config = fixture().with_chain(ChainInfo::new(europa()));
        assert!(matches!(
            ConnectionGraph::build(config),
            Err(ConfigError::DuplicateChain { chain, .. }) if chain == europa()
        ));
    }

    #[test]
    fn test_build_rejects_unknown_origin() {
        let config = fixture().with_connection(
            "ghost-chain".parse().unwrap(),
            TokenType::Erc20,
            skl(),
            TokenEntry::new(),
        );
        assert!(matches!(
            ConnectionGraph::build(config),
            Err(ConfigError::UnknownOriginChain { origin, .. })
                if origin.as_str() == "ghost-chain"
        ));
    }

    #[test]
    fn test_build_rejects_dangling_destination() {
        let config = fixture().with_connection(
            ChainName::mainnet(),
            TokenType::Erc20,
            skl(),
            TokenEntry::new().with_chain("ghost-chain".parse().unwrap(), Edge::direct()),
        );
        let error = ConnectionGraph::build(config).unwrap_err();
        // The message names the unlisted chain for the operator.
        assert!(error.to_string().contains("ghost-chain"));
        match error {
            ConfigError::DanglingDestination { destination, .. } => {
                assert_eq!(destination.as_str(), "ghost-chain");
            }
            other => panic!("expected DanglingDestination, got {other}"),
        }
    }

    #[test]
    fn test_build_rejects_self_loop() {
        let config = fixture().with_connection(
            europa(),
            TokenType::Erc20,
            skl(),
            TokenEntry::new().with_chain(europa(), Edge::direct()),
        );
        assert!(matches!(
            ConnectionGraph::build(config),
            Err(ConfigError::SelfLoop { origin, .. }) if origin == europa()
        ));
    }

    #[test]
    fn test_build_rejects_unlisted_token() {
        let config = fixture().with_connection(
            europa(),
            TokenType::Erc20,
            "ghost".parse().unwrap(),
            TokenEntry::new(),
        );
        assert!(matches!(
            ConnectionGraph::build(config),
            Err(ConfigError::UnlistedToken { symbol, .. }) if symbol.as_str() == "ghost"
        ));
    }

    #[test]
    fn test_build_rejects_unknown_hub() {
        let config = fixture().with_connection(
            calypso(),
            TokenType::Erc20,
            skl(),
            TokenEntry::new()
                .with_chain(europa(), Edge::cloned())
                .with_chain(
                    ChainName::mainnet(),
                    Edge::cloned().via("ghost-hub".parse().unwrap()),
                ),
        );
        assert!(matches!(
            ConnectionGraph::build(config),
            Err(ConfigError::UnknownHub { hub, .. }) if hub.as_str() == "ghost-hub"
        ));
    }

    #[test]
    fn test_build_rejects_hub_equal_to_endpoint() {
        let config = fixture().with_connection(
            calypso(),
            TokenType::Erc20,
            skl(),
            TokenEntry::new()
                .with_chain(europa(), Edge::cloned())
                .with_chain(ChainName::mainnet(), Edge::cloned().via(ChainName::mainnet())),
        );
        assert!(matches!(
            ConnectionGraph::build(config),
            Err(ConfigError::HubIsEndpoint { .. })
        ));
    }

    #[test]
    fn test_build_rejects_missing_outbound_leg() {
        // calypso routes to mainnet via europa but lacks the calypso->europa edge.
        let config = fixture().with_connection(
            calypso(),
            TokenType::Erc20,
            skl(),
            TokenEntry::new().with_chain(ChainName::mainnet(), Edge::cloned().via(europa())),
        );
        assert!(matches!(
            ConnectionGraph::build(config),
            Err(ConfigError::HubLegMissing { leg_origin, .. }) if leg_origin == calypso()
        ));
    }

    #[test]
    fn test_build_rejects_missing_inbound_leg() {
        // europa loses its europa->mainnet edge, breaking calypso's hub route.
        let config = fixture().with_connection(
            europa(),
            TokenType::Erc20,
            skl(),
            TokenEntry::new().with_chain(calypso(), Edge::direct()),
        );
        assert!(matches!(
            ConnectionGraph::build(config),
            Err(ConfigError::HubLegMissing { leg_origin, .. }) if leg_origin == europa()
        ));
    }

    #[test]
    fn test_build_rejects_nested_hub() {
        // The europa->mainnet leg becomes hub-routed itself.
        let config = fixture().with_connection(
            europa(),
            TokenType::Erc20,
            skl(),
            TokenEntry::new()
                .with_chain(ChainName::mainnet(), Edge::cloned().via(calypso()))
                .with_chain(calypso(), Edge::direct()),
        );
        assert!(matches!(
            ConnectionGraph::build(config),
            Err(ConfigError::NestedHub { .. }) | Err(ConfigError::HubLegMissing { .. })
        ));
    }

    #[test]
    fn test_zero_address_normalized_to_none() {
        let config = fixture().with_connection(
            europa(),
            TokenType::Erc20,
            skl(),
            TokenEntry::new()
                .with_address(Address::ZERO)
                .with_chain(ChainName::mainnet(), Edge::cloned())
                .with_chain(calypso(), Edge::direct()),
        );
        let graph = ConnectionGraph::build(config).unwrap();
        assert_eq!(graph.canonical_address(&europa(), TokenType::Erc20, &skl()), None);
    }

    #[test]
    fn test_mutual_clone_is_smell_not_error() {
        let config = fixture().with_connection(
            ChainName::mainnet(),
            TokenType::Erc20,
            skl(),
            TokenEntry::new()
                .with_chain(europa(), Edge::cloned())
                .with_chain(calypso(), Edge::direct().via(europa())),
        );
        let graph = ConnectionGraph::build(config).unwrap();
        assert_eq!(graph.smells().len(), 1);
        assert!(matches!(
            &graph.smells()[0],
            ConfigSmell::MutualClone { a, b, .. }
                if *a == europa() && *b == ChainName::mainnet()
        ));
    }

    #[test]
    fn test_edge_lookup_is_idempotent() {
        let graph = ConnectionGraph::build(fixture()).unwrap();
        let first = graph.edge(&ChainName::mainnet(), TokenType::Erc20, &skl(), &europa());
        let second = graph.edge(&ChainName::mainnet(), TokenType::Erc20, &skl(), &europa());
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn test_destinations_include_hub_routed_chains() {
        let graph = ConnectionGraph::build(fixture()).unwrap();
        let reachable = graph.destinations(&ChainName::mainnet(), TokenType::Erc20, &skl());
        assert!(reachable.contains(&europa()));
        assert!(reachable.contains(&calypso()));

        let none = graph.destinations(&europa(), TokenType::Eth, &skl());
        assert!(none.is_empty());
    }

    #[test]
    fn test_default_origin_and_destination_follow_document_order() {
        let graph = ConnectionGraph::build(fixture()).unwrap();
        assert_eq!(graph.default_origin(), Some(&ChainName::mainnet()));
        assert_eq!(graph.default_destination(), Some(&europa()));
    }

    #[test]
    fn test_token_meta_unknown_symbol() {
        let graph = ConnectionGraph::build(fixture()).unwrap();
        let error = graph.token_meta(&"ghost".parse().unwrap()).unwrap_err();
        assert_eq!(error.symbol.as_str(), "ghost");
        assert_eq!(error.network, SkaleNetwork::Mainnet);
    }

    #[test]
    fn test_token_types_and_symbols() {
        let graph = ConnectionGraph::build(fixture()).unwrap();
        let types = graph.token_types(&europa());
        assert_eq!(types, BTreeSet::from([TokenType::Erc20]));
        let symbols: Vec<_> = graph.symbols(&europa(), TokenType::Erc20).collect();
        assert_eq!(symbols, vec![&skl()]);
        assert_eq!(graph.symbols(&europa(), TokenType::Erc721).count(), 0);
    }

    #[test]
    fn test_chain_lookup_and_display_alias() {
        let graph = ConnectionGraph::build(fixture()).unwrap();
        assert!(graph.contains_chain(&calypso()));
        assert!(!graph.contains_chain(&"ghost-chain".parse().unwrap()));
        assert_eq!(graph.chain(&europa()).unwrap().display_name(), "Europa");
    }

    #[test]
    fn test_json_document_end_to_end() {
        let raw = serde_json::json!({
            "network": "mainnet",
            "chains": [
                { "name": "mainnet", "alias": "Ethereum" },
                { "name": "elated-tan-skat", "alias": "Europa", "categories": ["hub"] }
            ],
            "tokens": {
                "skl": { "name": "SKALE Network Token", "symbol": "SKL" }
            },
            "connections": {
                "mainnet": {
                    "erc20": {
                        "skl": {
                            "address": "0x00c83aeCC790e8a4453e5dD3B0B4b3680501a7A7",
                            "chains": { "elated-tan-skat": {} }
                        }
                    }
                },
                "elated-tan-skat": {
                    "erc20": {
                        "skl": {
                            "address": "0x0000000000000000000000000000000000000000",
                            "chains": { "mainnet": { "clone": true } }
                        }
                    }
                }
            }
        })
        .to_string();

        let config = BridgeConfig::from_json_str(&raw).unwrap();
        let graph = ConnectionGraph::build(config).unwrap();
        assert!(graph.smells().is_empty());
        assert_eq!(graph.chain(&europa()).unwrap().display_name(), "Europa");
        assert!(
            graph
                .edge(&europa(), TokenType::Erc20, &skl(), &ChainName::mainnet())
                .unwrap()
                .is_clone()
        );
        // The zero placeholder parsed from JSON is gone after construction.
        assert_eq!(graph.canonical_address(&europa(), TokenType::Erc20, &skl()), None);
    }
}
