//! The public test deployment, rooted on Holesky.
//!
//! A reduced mirror of the production topology: one liquidity hub
//! (`juicy-low-small-testnet`) with two sister chains behind it, and test
//! deployments of ETH, SKL, and USDC.

use std::sync::LazyLock;

use alloy_primitives::{Address, address};

use crate::chain::{ChainInfo, ChainName};
use crate::config::{BridgeConfig, TokenEntry};
use crate::edge::Edge;
use crate::networks::SkaleNetwork;
use crate::token::{TokenMetadata, TokenSymbol, TokenType};

// Holesky test deployments.
const SKL_HOLESKY: Address = address!("0x1f6a844dcbcd9bccc80a8c5f8c258c73eb0b4d7b");
const USDC_HOLESKY: Address = address!("0x85dd1bcc9b5643b0f9fc5db3f4cf8a4aaf6aa3a7");

// The EthErc20 predeploy, identical on every SKALE chain.
const ETH_CLONE: Address = address!("0xD2Aaa00700000000000000000000000000000000");

const SKL_EUROPA: Address = address!("0x089b54c2039c0c0d3f0c5f9c3f3d733d89aec2e2");
const USDC_EUROPA: Address = address!("0x9ec9ad8de2a39ea321bf507fcdaa1a539ac3db09");
const SKL_CALYPSO: Address = address!("0x4c1c27fb24b4c2494e91d7accd7a06025aa0b8a6");
const SKL_NEBULA: Address = address!("0x6b311dc1bd1535b42d0bcbfa2cd2e0ba07f0e2fd");

static CONFIG: LazyLock<BridgeConfig> = LazyLock::new(build);

/// Returns the test deployment document.
#[must_use]
pub fn config() -> BridgeConfig {
    CONFIG.clone()
}

fn europa() -> ChainName {
    ChainName::new("juicy-low-small-testnet").expect("static chain name is well-formed")
}

fn calypso() -> ChainName {
    ChainName::new("giant-half-dual-testnet").expect("static chain name is well-formed")
}

fn nebula() -> ChainName {
    ChainName::new("lanky-ill-funny-testnet").expect("static chain name is well-formed")
}

fn symbol(raw: &str) -> TokenSymbol {
    TokenSymbol::new(raw).expect("static token symbol is well-formed")
}

fn root_fanout(address: Option<Address>) -> TokenEntry {
    let mut entry = TokenEntry::new()
        .with_chain(europa(), Edge::direct())
        .with_chain(calypso(), Edge::direct().via(europa()))
        .with_chain(nebula(), Edge::direct().via(europa()));
    entry.address = address;
    entry
}

fn sister_clone(address: Address) -> TokenEntry {
    TokenEntry::new()
        .with_address(address)
        .with_chain(europa(), Edge::cloned())
        .with_chain(ChainName::mainnet(), Edge::cloned().via(europa()))
}

fn build() -> BridgeConfig {
    BridgeConfig::new(SkaleNetwork::Testnet)
        .with_chain(ChainInfo::new(ChainName::mainnet()).with_alias("Holesky"))
        .with_chain(
            ChainInfo::new(europa())
                .with_alias("Europa Testnet")
                .with_category("hub"),
        )
        .with_chain(ChainInfo::new(calypso()).with_alias("Calypso Testnet"))
        .with_chain(ChainInfo::new(nebula()).with_alias("Nebula Testnet"))
        .with_token(symbol("eth"), TokenMetadata::new("Ether", "ETH"))
        .with_token(symbol("skl"), TokenMetadata::new("SKALE", "SKL"))
        .with_token(
            symbol("usdc"),
            TokenMetadata::new("USD Coin", "USDC").with_decimals(6),
        )
        .with_connection(ChainName::mainnet(), TokenType::Eth, symbol("eth"), root_fanout(None))
        .with_connection(
            ChainName::mainnet(),
            TokenType::Erc20,
            symbol("skl"),
            root_fanout(Some(SKL_HOLESKY)),
        )
        .with_connection(
            ChainName::mainnet(),
            TokenType::Erc20,
            symbol("usdc"),
            TokenEntry::new()
                .with_address(USDC_HOLESKY)
                .with_chain(europa(), Edge::direct()),
        )
        .with_connection(
            europa(),
            TokenType::Eth,
            symbol("eth"),
            TokenEntry::new()
                .with_address(ETH_CLONE)
                .with_chain(ChainName::mainnet(), Edge::cloned())
                .with_chain(calypso(), Edge::direct())
                .with_chain(nebula(), Edge::direct()),
        )
        .with_connection(
            europa(),
            TokenType::Erc20,
            symbol("skl"),
            TokenEntry::new()
                .with_address(SKL_EUROPA)
                .with_chain(ChainName::mainnet(), Edge::cloned())
                .with_chain(calypso(), Edge::direct())
                .with_chain(nebula(), Edge::direct()),
        )
        .with_connection(
            europa(),
            TokenType::Erc20,
            symbol("usdc"),
            TokenEntry::new()
                .with_address(USDC_EUROPA)
                .with_chain(ChainName::mainnet(), Edge::cloned()),
        )
        .with_connection(calypso(), TokenType::Eth, symbol("eth"), sister_clone(ETH_CLONE))
        .with_connection(
            calypso(),
            TokenType::Erc20,
            symbol("skl"),
            sister_clone(SKL_CALYPSO),
        )
        .with_connection(nebula(), TokenType::Eth, symbol("eth"), sister_clone(ETH_CLONE))
        .with_connection(nebula(), TokenType::Erc20, symbol("skl"), sister_clone(SKL_NEBULA))
}
