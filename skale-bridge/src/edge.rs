//! Connection edges between chains.
//!
//! An edge describes how a token crosses from one chain to another. In the
//! deployment JSON an edge is an object with up to three optional fields:
//!
//! - `{}` - plain transfer between chains sharing custody of the asset
//! - `{"clone": true}` - the origin side holds a minted clone; crossing
//!   this edge moves value back toward the canonical side
//! - `{"wrapper": "0x…"}` - the destination receives the asset through a
//!   wrapper contract instead of its default clone contract
//! - `{"hub": "chain"}` - the transfer is routed through an intermediate
//!   chain; composes with either of the above
//!
//! `clone` and `wrapper` are mutually exclusive; [`Edge`] makes the
//! conflict unrepresentable and deserialization rejects it.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::chain::ChainName;

/// What crossing an edge does to the token on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Both sides share custody of the same asset.
    Direct,
    /// The origin side holds a minted clone of the asset.
    Clone,
    /// The destination receives the asset through the given wrapper
    /// contract.
    Wrapper(Address),
}

/// A single connection from one chain to another for one token.
///
/// Constructed with [`Edge::direct`], [`Edge::cloned`], or
/// [`Edge::wrapped`], optionally routed through a hub with [`Edge::via`].
///
/// # Serialization
///
/// Round-trips through the raw optional-fields object described in the
/// module documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEdge", into = "RawEdge")]
pub struct Edge {
    kind: EdgeKind,
    hub: Option<ChainName>,
}

impl Edge {
    /// Creates a plain shared-custody edge.
    #[must_use]
    pub const fn direct() -> Self {
        Self {
            kind: EdgeKind::Direct,
            hub: None,
        }
    }

    /// Creates an edge whose origin side is a minted clone.
    #[must_use]
    pub const fn cloned() -> Self {
        Self {
            kind: EdgeKind::Clone,
            hub: None,
        }
    }

    /// Creates an edge delivering into a wrapper contract.
    #[must_use]
    pub const fn wrapped(wrapper: Address) -> Self {
        Self {
            kind: EdgeKind::Wrapper(wrapper),
            hub: None,
        }
    }

    /// Routes this edge through an intermediate hub chain.
    #[must_use]
    pub fn via(mut self, hub: ChainName) -> Self {
        self.hub = Some(hub);
        self
    }

    /// Returns what crossing this edge does.
    #[must_use]
    pub const fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// Returns the hub chain, if the edge is hub-routed.
    #[must_use]
    pub const fn hub(&self) -> Option<&ChainName> {
        self.hub.as_ref()
    }

    /// Returns `true` for a plain shared-custody edge.
    #[must_use]
    pub const fn is_direct(&self) -> bool {
        matches!(self.kind, EdgeKind::Direct)
    }

    /// Returns `true` if the origin side is a minted clone.
    #[must_use]
    pub const fn is_clone(&self) -> bool {
        matches!(self.kind, EdgeKind::Clone)
    }

    /// Returns the destination wrapper contract, if any.
    #[must_use]
    pub const fn wrapper(&self) -> Option<Address> {
        match self.kind {
            EdgeKind::Wrapper(address) => Some(address),
            EdgeKind::Direct | EdgeKind::Clone => None,
        }
    }

    /// Returns `true` if the edge is routed through a hub.
    #[must_use]
    pub const fn is_hubbed(&self) -> bool {
        self.hub.is_some()
    }
}

/// Error returned when an edge object sets both `clone` and `wrapper`.
#[derive(Debug, thiserror::Error)]
#[error("edge cannot set both `clone` and `wrapper`")]
pub struct EdgeFormatError;

/// The raw optional-fields shape edges take in deployment JSON.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawEdge {
    #[serde(default, skip_serializing_if = "is_false")]
    clone: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wrapper: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hub: Option<ChainName>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TryFrom<RawEdge> for Edge {
    type Error = EdgeFormatError;

    fn try_from(raw: RawEdge) -> Result<Self, Self::Error> {
        let kind = match (raw.clone, raw.wrapper) {
            (true, Some(_)) => return Err(EdgeFormatError),
            (true, None) => EdgeKind::Clone,
            (false, Some(wrapper)) => EdgeKind::Wrapper(wrapper),
            (false, None) => EdgeKind::Direct,
        };
        Ok(Self {
            kind,
            hub: raw.hub,
        })
    }
}

impl From<Edge> for RawEdge {
    fn from(edge: Edge) -> Self {
        let (clone, wrapper) = match edge.kind {
            EdgeKind::Direct => (false, None),
            EdgeKind::Clone => (true, None),
            EdgeKind::Wrapper(address) => (false, Some(address)),
        };
        Self {
            clone,
            wrapper,
            hub: edge.hub,
        }
    }
}
