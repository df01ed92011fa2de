//! Error types for bridge configuration and route resolution.
//!
//! Three conditions are reported by this crate:
//!
//! - [`ConfigError`] - the deployment configuration is malformed or
//!   inconsistent. Raised while building a
//!   [`ConnectionGraph`](crate::graph::ConnectionGraph); the whole network
//!   configuration is rejected, never partially loaded.
//! - [`UnknownTokenError`] - a token symbol is not present in a network's
//!   token catalog.
//! - [`NoRouteError`] - no direct or one-hub path exists between the
//!   requested chains for the given token.
//!
//! [`BridgeError`] is the umbrella type returned by operations that can
//! fail in more than one of these ways. All three are ordinary values for
//! the caller to handle; nothing in this crate panics on bad input.

use crate::chain::ChainName;
use crate::networks::SkaleNetwork;
use crate::token::{TokenSymbol, TokenType};

/// Umbrella error for bridge operations.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The deployment configuration is malformed or inconsistent.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// The requested token is not in the network's catalog.
    #[error("{0}")]
    UnknownToken(#[from] UnknownTokenError),

    /// No supported path between the requested chains.
    #[error("{0}")]
    NoRoute(#[from] NoRouteError),
}

/// Malformed or inconsistent deployment configuration.
///
/// Raised during graph construction. Every variant names the network and
/// the chain/token coordinates of the offending entry, so the message can
/// be surfaced directly to an operator.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for the expected shape.
    #[error("failed to parse bridge configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("failed to read bridge configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The chain list is empty.
    #[error("{network}: chain list is empty")]
    EmptyChainList {
        /// Network whose configuration was rejected.
        network: SkaleNetwork,
    },

    /// The same chain appears twice in the chain list.
    #[error("{network}: chain `{chain}` is listed more than once")]
    DuplicateChain {
        /// Network whose configuration was rejected.
        network: SkaleNetwork,
        /// The repeated chain.
        chain: ChainName,
    },

    /// A connection block is keyed by a chain missing from the chain list.
    #[error("{network}: connection origin `{origin}` is not a listed chain")]
    UnknownOriginChain {
        /// Network whose configuration was rejected.
        network: SkaleNetwork,
        /// The unlisted origin chain.
        origin: ChainName,
    },

    /// An edge targets a chain missing from the chain list.
    #[error(
        "{network}: {token_type} token `{symbol}` on `{origin}` targets \
         `{destination}`, which is not a listed chain"
    )]
    DanglingDestination {
        /// Network whose configuration was rejected.
        network: SkaleNetwork,
        /// Chain owning the token entry.
        origin: ChainName,
        /// Token type of the entry.
        token_type: TokenType,
        /// Token symbol of the entry.
        symbol: TokenSymbol,
        /// The unlisted destination chain.
        destination: ChainName,
    },

    /// An edge connects a chain to itself.
    #[error("{network}: {token_type} token `{symbol}` on `{origin}` connects the chain to itself")]
    SelfLoop {
        /// Network whose configuration was rejected.
        network: SkaleNetwork,
        /// Chain owning the looping entry.
        origin: ChainName,
        /// Token type of the entry.
        token_type: TokenType,
        /// Token symbol of the entry.
        symbol: TokenSymbol,
    },

    /// A connection references a token symbol missing from the catalog.
    #[error("{network}: {token_type} token `{symbol}` on `{origin}` is not in the token catalog")]
    UnlistedToken {
        /// Network whose configuration was rejected.
        network: SkaleNetwork,
        /// Chain owning the token entry.
        origin: ChainName,
        /// Token type of the entry.
        token_type: TokenType,
        /// The uncatalogued symbol.
        symbol: TokenSymbol,
    },

    /// A hubbed edge routes through a chain missing from the chain list.
    #[error(
        "{network}: {token_type} token `{symbol}` routes `{origin}` -> `{destination}` \
         through `{hub}`, which is not a listed chain"
    )]
    UnknownHub {
        /// Network whose configuration was rejected.
        network: SkaleNetwork,
        /// Origin of the hubbed edge.
        origin: ChainName,
        /// Destination of the hubbed edge.
        destination: ChainName,
        /// Token type of the entry.
        token_type: TokenType,
        /// Token symbol of the entry.
        symbol: TokenSymbol,
        /// The unlisted hub chain.
        hub: ChainName,
    },

    /// A hubbed edge routes through one of its own endpoints.
    #[error(
        "{network}: {token_type} token `{symbol}` routes `{origin}` -> `{destination}` \
         through endpoint chain `{hub}`"
    )]
    HubIsEndpoint {
        /// Network whose configuration was rejected.
        network: SkaleNetwork,
        /// Origin of the hubbed edge.
        origin: ChainName,
        /// Destination of the hubbed edge.
        destination: ChainName,
        /// Token type of the entry.
        token_type: TokenType,
        /// Token symbol of the entry.
        symbol: TokenSymbol,
        /// The hub that is also an endpoint.
        hub: ChainName,
    },

    /// A leg of a hub route is itself hub-routed. Hub routing is exactly
    /// one indirection deep.
    #[error(
        "{network}: {token_type} token `{symbol}` leg `{leg_origin}` -> `{leg_destination}` \
         of the hub route `{origin}` -> `{destination}` is itself hub-routed"
    )]
    NestedHub {
        /// Network whose configuration was rejected.
        network: SkaleNetwork,
        /// Origin of the hubbed edge.
        origin: ChainName,
        /// Destination of the hubbed edge.
        destination: ChainName,
        /// Token type of the entry.
        token_type: TokenType,
        /// Token symbol of the entry.
        symbol: TokenSymbol,
        /// Origin of the offending leg.
        leg_origin: ChainName,
        /// Destination of the offending leg.
        leg_destination: ChainName,
    },

    /// A leg of a hub route does not exist in the connection map.
    #[error(
        "{network}: {token_type} token `{symbol}` routes `{origin}` -> `{destination}` \
         through `{hub}`, but the `{leg_origin}` -> `{leg_destination}` leg does not exist"
    )]
    HubLegMissing {
        /// Network whose configuration was rejected.
        network: SkaleNetwork,
        /// Origin of the hubbed edge.
        origin: ChainName,
        /// Destination of the hubbed edge.
        destination: ChainName,
        /// Token type of the entry.
        token_type: TokenType,
        /// Token symbol of the entry.
        symbol: TokenSymbol,
        /// The hub the route goes through.
        hub: ChainName,
        /// Origin of the missing leg.
        leg_origin: ChainName,
        /// Destination of the missing leg.
        leg_destination: ChainName,
    },
}

/// A token symbol that is not present in a network's token catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("token `{symbol}` is not registered on {network}")]
pub struct UnknownTokenError {
    /// Network whose catalog was queried.
    pub network: SkaleNetwork,
    /// The unknown symbol.
    pub symbol: TokenSymbol,
}

/// No direct or one-hub path between the requested chains.
///
/// The UI layer is expected to present this as "not supported"; there is
/// no fallback or retry at this level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoRouteError {
    /// Origin and destination are the same chain.
    #[error("{network}: cannot transfer {token_type} `{symbol}` from `{chain}` to itself")]
    SameChain {
        /// Network the route was requested on.
        network: SkaleNetwork,
        /// The chain named as both origin and destination.
        chain: ChainName,
        /// Requested token type.
        token_type: TokenType,
        /// Requested token symbol.
        symbol: TokenSymbol,
    },

    /// No edge connects the origin to the destination for this token.
    #[error(
        "{network}: no {token_type} connection for `{symbol}` \
         from `{origin}` to `{destination}`"
    )]
    NotConnected {
        /// Network the route was requested on.
        network: SkaleNetwork,
        /// Requested origin chain.
        origin: ChainName,
        /// Requested destination chain.
        destination: ChainName,
        /// Requested token type.
        token_type: TokenType,
        /// Requested token symbol.
        symbol: TokenSymbol,
    },

    /// The route requires a hub whose connecting leg is absent.
    ///
    /// Graph construction validates both legs of every hub route, so this
    /// variant is never produced for a graph that came out of
    /// [`ConnectionGraph::build`](crate::graph::ConnectionGraph::build).
    #[error(
        "{network}: {token_type} route for `{symbol}` from `{origin}` to `{destination}` \
         requires hub `{hub}`, but the `{leg_origin}` -> `{leg_destination}` leg is absent"
    )]
    HubLegMissing {
        /// Network the route was requested on.
        network: SkaleNetwork,
        /// Requested origin chain.
        origin: ChainName,
        /// Requested destination chain.
        destination: ChainName,
        /// Requested token type.
        token_type: TokenType,
        /// Requested token symbol.
        symbol: TokenSymbol,
        /// The hub the route goes through.
        hub: ChainName,
        /// Origin of the absent leg.
        leg_origin: ChainName,
        /// Destination of the absent leg.
        leg_destination: ChainName,
    },
}
