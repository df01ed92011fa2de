//! Route resolution: turning an edge lookup into an executable plan.
//!
//! A [`TransferPlan`] names the legs a transfer crosses, at most two: the
//! direct edge, or the two fixed legs of a hub-routed edge. Resolution is
//! pure table lookup over a built [`ConnectionGraph`]; there is no path
//! search, and a plan either resolves completely or fails with a typed
//! error.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "telemetry")]
use tracing::{debug, instrument};

use crate::chain::ChainName;
use crate::edge::Edge;
use crate::error::{BridgeError, NoRouteError};
use crate::graph::ConnectionGraph;
use crate::networks::SkaleNetwork;
use crate::token::{TokenSymbol, TokenType};

/// What one leg of a transfer does to the token.
///
/// The resolver emits `Unlock`, `Burn`, and `Passthrough`, describing the
/// action on the leg's origin side. `Lock` and `Mint` name the
/// complementary far-side actions for consumers that render both ends of
/// a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferOp {
    /// Take the canonical asset into bridge custody.
    Lock,
    /// Release the canonical asset from bridge custody.
    Unlock,
    /// Mint clone supply on the receiving chain.
    Mint,
    /// Burn clone supply on the sending chain.
    Burn,
    /// Move the asset without changing its supply anywhere.
    Passthrough,
}

impl TransferOp {
    /// Returns the lower-case wire form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lock => "lock",
            Self::Unlock => "unlock",
            Self::Mint => "mint",
            Self::Burn => "burn",
            Self::Passthrough => "passthrough",
        }
    }

    /// Returns `true` if the operation changes token supply.
    #[must_use]
    pub const fn is_supply_change(self) -> bool {
        matches!(self, Self::Mint | Self::Burn)
    }

    /// Returns a short human description of the operation.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Lock => "lock the canonical asset in bridge custody",
            Self::Unlock => "release the canonical asset from bridge custody",
            Self::Mint => "mint clone supply on the receiving chain",
            Self::Burn => "burn clone supply on the sending chain",
            Self::Passthrough => "move the asset without changing supply",
        }
    }
}

impl fmt::Display for TransferOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One hop of a transfer plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferLeg {
    /// Chain the leg departs from.
    pub origin: ChainName,
    /// Chain the leg arrives on.
    pub destination: ChainName,
    /// Token contract on the origin chain, when deployed there.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_address: Option<Address>,
    /// Receiving contract on the destination chain: the edge's wrapper
    /// when present, otherwise the destination's canonical contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_address: Option<Address>,
    /// What this leg does to the token.
    pub operation: TransferOp,
}

/// A fully resolved transfer: one or two legs, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferPlan {
    /// Network the plan was resolved on.
    pub network: SkaleNetwork,
    /// Token type being moved.
    pub token_type: TokenType,
    /// Token symbol being moved.
    pub symbol: TokenSymbol,
    /// The legs to execute, in order.
    pub legs: Vec<TransferLeg>,
}

impl TransferPlan {
    /// Returns `true` for a single-leg plan.
    #[must_use]
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }

    /// Returns the intermediate chain of a two-leg plan.
    #[must_use]
    pub fn hub(&self) -> Option<&ChainName> {
        if self.legs.len() == 2 {
            self.legs.first().map(|leg| &leg.destination)
        } else {
            None
        }
    }
}

impl ConnectionGraph {
    /// Resolves the transfer plan from `origin` to `destination` for one
    /// token.
    ///
    /// A direct edge yields a one-leg plan. A hub-routed edge expands to
    /// exactly two legs, origin to hub and hub to destination; nothing is
    /// searched beyond that fixed expansion, and a plan only exists when
    /// every leg does.
    ///
    /// # Errors
    ///
    /// - [`NoRouteError::SameChain`] when origin and destination are equal
    /// - [`UnknownTokenError`](crate::error::UnknownTokenError) when the
    ///   symbol is not catalogued on this network
    /// - [`NoRouteError::NotConnected`] when no edge links the pair
    /// - [`NoRouteError::HubLegMissing`] when a hub leg is absent, which a
    ///   graph built through [`ConnectionGraph::build`] rules out
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "resolve_route", skip(self), fields(network = %self.network()))
    )]
    pub fn resolve(
        &self,
        origin: &ChainName,
        destination: &ChainName,
        token_type: TokenType,
        symbol: &TokenSymbol,
    ) -> Result<TransferPlan, BridgeError> {
        if origin == destination {
            return Err(NoRouteError::SameChain {
                network: self.network(),
                chain: origin.clone(),
                token_type,
                symbol: symbol.clone(),
            }
            .into());
        }
        self.token_meta(symbol)?;
        let Some(edge) = self.edge(origin, token_type, symbol, destination) else {
            return Err(NoRouteError::NotConnected {
                network: self.network(),
                origin: origin.clone(),
                destination: destination.clone(),
                token_type,
                symbol: symbol.clone(),
            }
            .into());
        };

        let legs = match edge.hub() {
            None => vec![self.leg(origin, destination, token_type, symbol, edge)],
            Some(hub) => {
                let missing = |leg_origin: &ChainName, leg_destination: &ChainName| {
                    NoRouteError::HubLegMissing {
                        network: self.network(),
                        origin: origin.clone(),
                        destination: destination.clone(),
                        token_type,
                        symbol: symbol.clone(),
                        hub: hub.clone(),
                        leg_origin: leg_origin.clone(),
                        leg_destination: leg_destination.clone(),
                    }
                };
                let outbound = self
                    .edge(origin, token_type, symbol, hub)
                    .ok_or_else(|| missing(origin, hub))?;
                let inbound = self
                    .edge(hub, token_type, symbol, destination)
                    .ok_or_else(|| missing(hub, destination))?;
                vec![
                    self.leg(origin, hub, token_type, symbol, outbound),
                    self.leg(hub, destination, token_type, symbol, inbound),
                ]
            }
        };

        let plan = TransferPlan {
            network: self.network(),
            token_type,
            symbol: symbol.clone(),
            legs,
        };
        #[cfg(feature = "telemetry")]
        debug!(legs = plan.legs.len(), "resolved transfer plan");
        Ok(plan)
    }

    fn leg(
        &self,
        origin: &ChainName,
        destination: &ChainName,
        token_type: TokenType,
        symbol: &TokenSymbol,
        edge: &Edge,
    ) -> TransferLeg {
        let source_address = self.canonical_address(origin, token_type, symbol);
        let destination_address = edge
            .wrapper()
            .or_else(|| self.canonical_address(destination, token_type, symbol));
        TransferLeg {
            origin: origin.clone(),
            destination: destination.clone(),
            source_address,
            destination_address,
            operation: classify_operation(edge, destination),
        }
    }
}

/// Classifies what crossing `edge` does on its origin side.
///
/// A clone edge destroys the origin's minted supply, except when it lands
/// on the root chain, where the canonical asset leaves bridge custody
/// instead. Everything else moves custody without touching supply.
fn classify_operation(edge: &Edge, leg_destination: &ChainName) -> TransferOp {
    if edge.is_clone() {
        if leg_destination.is_mainnet() {
            TransferOp::Unlock
        } else {
            TransferOp::Burn
        }
    } else {
        TransferOp::Passthrough
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ChainInfo;
    use crate::config::{BridgeConfig, TokenEntry};
    use crate::token::TokenMetadata;
    use alloy_primitives::address;

    const SKL_MAINNET: Address = address!("0x00c83aeCC790e8a4453e5dD3B0B4b3680501a7A7");
    const SKL_EUROPA: Address = address!("0xe0595a049d02b7674572b0d59cd4880db60edc50");
    const SKL_CALYPSO: Address = address!("0x254c16a6176a072ca71fa600ca7c9cf7b07caf50");
    const ETHC_EUROPA: Address = address!("0xD2Aaa00700000000000000000000000000000000");
    const USDC_MAINNET: Address = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
    const USDC_EUROPA: Address = address!("0x5f795bb52dac3085f578f4877d450e2929d2f13d");
    const USDC_NEBULA: Address = address!("0xcc205196288b7a26f6d43bbd68aaa98dde97276d");
    const USDC_NEBULA_WRAPPER: Address = address!("0xa5274efa35ebeff47c1510529d9a8812f95f5735");

    fn europa() -> ChainName {
        "elated-tan-skat".parse().unwrap()
    }

    fn calypso() -> ChainName {
        "honorable-steel-rasalhague".parse().unwrap()
    }

    fn nebula() -> ChainName {
        "green-giddy-denebola".parse().unwrap()
    }

    fn skl() -> TokenSymbol {
        "skl".parse().unwrap()
    }

    fn eth() -> TokenSymbol {
        "eth".parse().unwrap()
    }

    fn usdc() -> TokenSymbol {
        "usdc".parse().unwrap()
    }

    /// A miniature of the production topology: root chain, Europa hub,
    /// one clone-holding chain, one wrapper-receiving chain.
    fn graph() -> ConnectionGraph {
        let config = BridgeConfig::new(SkaleNetwork::Mainnet)
            .with_chain(ChainInfo::new(ChainName::mainnet()))
            .with_chain(ChainInfo::new(europa()))
            .with_chain(ChainInfo::new(calypso()))
            .with_chain(ChainInfo::new(nebula()))
            .with_token(eth(), TokenMetadata::new("Ether", "ETH"))
            .with_token(skl(), TokenMetadata::new("SKALE Network Token", "SKL"))
            .with_token(usdc(), TokenMetadata::new("USD Coin", "USDC").with_decimals(6))
            .with_connection(
                ChainName::mainnet(),
                TokenType::Eth,
                eth(),
                TokenEntry::new().with_chain(europa(), Edge::direct()),
            )
            .with_connection(
                ChainName::mainnet(),
                TokenType::Erc20,
                skl(),
                TokenEntry::new()
                    .with_address(SKL_MAINNET)
                    .with_chain(europa(), Edge::direct())
                    .with_chain(calypso(), Edge::direct().via(europa())),
            )
            .with_connection(
                ChainName::mainnet(),
                TokenType::Erc20,
                usdc(),
                TokenEntry::new()
                    .with_address(USDC_MAINNET)
                    .with_chain(europa(), Edge::direct()),
            )
            .with_connection(
                europa(),
                TokenType::Eth,
                eth(),
                TokenEntry::new()
                    .with_address(ETHC_EUROPA)
                    .with_chain(ChainName::mainnet(), Edge::cloned()),
            )
            .with_connection(
                europa(),
                TokenType::Erc20,
                skl(),
                TokenEntry::new()
                    .with_address(SKL_EUROPA)
                    .with_chain(ChainName::mainnet(), Edge::cloned())
                    .with_chain(calypso(), Edge::direct()),
            )
            .with_connection(
                europa(),
                TokenType::Erc20,
                usdc(),
                TokenEntry::new()
                    .with_address(USDC_EUROPA)
                    .with_chain(ChainName::mainnet(), Edge::cloned())
                    .with_chain(nebula(), Edge::wrapped(USDC_NEBULA_WRAPPER)),
            )
            .with_connection(
                calypso(),
                TokenType::Erc20,
                skl(),
                TokenEntry::new()
                    .with_address(SKL_CALYPSO)
                    .with_chain(europa(), Edge::cloned())
                    .with_chain(ChainName::mainnet(), Edge::cloned().via(europa())),
            )
            .with_connection(
                nebula(),
                TokenType::Erc20,
                usdc(),
                TokenEntry::new()
                    .with_address(USDC_NEBULA)
                    .with_chain(europa(), Edge::cloned()),
            );
        ConnectionGraph::build(config).unwrap()
    }

    #[test]
    fn test_direct_transfer_from_root_chain() {
        let plan = graph()
            .resolve(&ChainName::mainnet(), &europa(), TokenType::Erc20, &skl())
            .unwrap();
        assert!(plan.is_direct());
        assert_eq!(plan.hub(), None);
        let leg = &plan.legs[0];
        assert_eq!(leg.operation, TransferOp::Passthrough);
        assert_eq!(leg.source_address, Some(SKL_MAINNET));
        assert_eq!(leg.destination_address, Some(SKL_EUROPA));
    }

    #[test]
    fn test_hub_route_burns_then_unlocks() {
        let plan = graph()
            .resolve(&calypso(), &ChainName::mainnet(), TokenType::Erc20, &skl())
            .unwrap();
        assert_eq!(plan.legs.len(), 2);
        assert_eq!(plan.hub(), Some(&europa()));

        let first = &plan.legs[0];
        assert_eq!(first.origin, calypso());
        assert_eq!(first.destination, europa());
        assert_eq!(first.operation, TransferOp::Burn);
        assert_eq!(first.source_address, Some(SKL_CALYPSO));
        assert_eq!(first.destination_address, Some(SKL_EUROPA));

        let second = &plan.legs[1];
        assert_eq!(second.origin, europa());
        assert_eq!(second.destination, ChainName::mainnet());
        assert_eq!(second.operation, TransferOp::Unlock);
        assert_eq!(second.source_address, Some(SKL_EUROPA));
        assert_eq!(second.destination_address, Some(SKL_MAINNET));
    }

    #[test]
    fn test_hub_route_from_root_chain_is_two_passthroughs() {
        let plan = graph()
            .resolve(&ChainName::mainnet(), &calypso(), TokenType::Erc20, &skl())
            .unwrap();
        assert_eq!(plan.legs.len(), 2);
        assert_eq!(plan.hub(), Some(&europa()));
        assert_eq!(plan.legs[0].operation, TransferOp::Passthrough);
        assert_eq!(plan.legs[1].operation, TransferOp::Passthrough);
    }

    #[test]
    fn test_unconnected_pair_is_not_connected() {
        let error = graph()
            .resolve(&ChainName::mainnet(), &nebula(), TokenType::Erc20, &skl())
            .unwrap_err();
        assert!(matches!(
            error,
            BridgeError::NoRoute(NoRouteError::NotConnected { destination, .. })
                if destination == nebula()
        ));
    }

    #[test]
    fn test_unknown_symbol_is_unknown_token() {
        let error = graph()
            .resolve(&ChainName::mainnet(), &europa(), TokenType::Erc20, &"ghost".parse().unwrap())
            .unwrap_err();
        assert!(matches!(error, BridgeError::UnknownToken(_)));
    }

    #[test]
    fn test_same_chain_is_rejected() {
        let error = graph()
            .resolve(&europa(), &europa(), TokenType::Erc20, &skl())
            .unwrap_err();
        assert!(matches!(
            error,
            BridgeError::NoRoute(NoRouteError::SameChain { chain, .. }) if chain == europa()
        ));
    }

    #[test]
    fn test_wrapper_overrides_destination_address() {
        let plan = graph()
            .resolve(&europa(), &nebula(), TokenType::Erc20, &usdc())
            .unwrap();
        assert!(plan.is_direct());
        let leg = &plan.legs[0];
        assert_eq!(leg.operation, TransferOp::Passthrough);
        assert_eq!(leg.source_address, Some(USDC_EUROPA));
        assert_eq!(leg.destination_address, Some(USDC_NEBULA_WRAPPER));
    }

    #[test]
    fn test_native_asset_has_no_root_source_address() {
        let plan = graph()
            .resolve(&ChainName::mainnet(), &europa(), TokenType::Eth, &eth())
            .unwrap();
        let leg = &plan.legs[0];
        assert_eq!(leg.source_address, None);
        assert_eq!(leg.destination_address, Some(ETHC_EUROPA));
        assert_eq!(leg.operation, TransferOp::Passthrough);

        let back = graph()
            .resolve(&europa(), &ChainName::mainnet(), TokenType::Eth, &eth())
            .unwrap();
        assert_eq!(back.legs[0].operation, TransferOp::Unlock);
        assert_eq!(back.legs[0].destination_address, None);
    }

    #[test]
    fn test_plan_serializes_for_consumers() {
        let plan = graph()
            .resolve(&calypso(), &ChainName::mainnet(), TokenType::Erc20, &skl())
            .unwrap();
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["network"], "mainnet");
        assert_eq!(value["token_type"], "erc20");
        assert_eq!(value["symbol"], "skl");
        assert_eq!(value["legs"][0]["operation"], "burn");
        assert_eq!(value["legs"][1]["operation"], "unlock");
    }

    #[test]
    fn test_op_vocabulary() {
        for op in [
            TransferOp::Lock,
            TransferOp::Unlock,
            TransferOp::Mint,
            TransferOp::Burn,
            TransferOp::Passthrough,
        ] {
            let serialized = serde_json::to_string(&op).unwrap();
            assert_eq!(serialized, format!("\"{op}\""));
            assert!(!op.describe().is_empty());
        }
        assert!(TransferOp::Mint.is_supply_change());
        assert!(TransferOp::Burn.is_supply_change());
        assert!(!TransferOp::Lock.is_supply_change());
        assert!(!TransferOp::Unlock.is_supply_change());
        assert!(!TransferOp::Passthrough.is_supply_change());
    }
}
