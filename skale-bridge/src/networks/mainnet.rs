//! The production bridge deployment, rooted on Ethereum mainnet.
//!
//! Europa is the network's liquidity hub: every root-chain asset lands
//! there first, and transfers between the root chain and the other SKALE
//! chains are hub-routed through it. Sister chains hold minted clones
//! pointing back at Europa, and Europa fans wrapped assets out to them.

use std::sync::LazyLock;

use alloy_primitives::{Address, address};

use crate::chain::{ChainInfo, ChainName};
use crate::config::{BridgeConfig, TokenEntry};
use crate::edge::Edge;
use crate::networks::SkaleNetwork;
use crate::token::{TokenMetadata, TokenSymbol, TokenType};

// Root-chain canonical contracts.
// Verify: https://etherscan.io/token/0x00c83aeCC790e8a4453e5dD3B0B4b3680501a7A7
const SKL_MAINNET: Address = address!("0x00c83aeCC790e8a4453e5dD3B0B4b3680501a7A7");
// Verify: https://etherscan.io/token/0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48
const USDC_MAINNET: Address = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
// Verify: https://etherscan.io/token/0xdAC17F958D2ee523a2206206994597C13D831ec7
const USDT_MAINNET: Address = address!("0xdAC17F958D2ee523a2206206994597C13D831ec7");
// Verify: https://etherscan.io/token/0x6B175474E89094C44Da98b954EedeAC495271d0F
const DAI_MAINNET: Address = address!("0x6B175474E89094C44Da98b954EedeAC495271d0F");
// Verify: https://etherscan.io/token/0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599
const WBTC_MAINNET: Address = address!("0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599");

// The EthErc20 predeploy; ETH clones live at this address on every SKALE
// chain.
const ETH_CLONE: Address = address!("0xD2Aaa00700000000000000000000000000000000");

// Europa-held clones and wrapped-asset contracts.
const SKL_EUROPA: Address = address!("0xe0595a049d02b7674572b0d59cd4880db60edc50");
const USDC_EUROPA: Address = address!("0x5f795bb52dac3085f578f4877d450e2929d2f13d");
const USDT_EUROPA: Address = address!("0x1c0491e3396ad6a35f061c62387a95d7218fc515");
const DAI_EUROPA: Address = address!("0xd05c4be5f3be302d376518c9492ec0147fa5a718");
const WBTC_EUROPA: Address = address!("0xcb011e86df014a46f4e3ac3f3cbb114a4eb80870");
const RUBY_EUROPA: Address = address!("0x2b4e4899b53e8b7958c4591a6d02f9c0b5c50f8f");
const WETH_EUROPA: Address = address!("0xa5274efa35ebeff47c1510529d9a8812f95f5735");
const WUSDC_EUROPA: Address = address!("0x6c71319b1f2a28b6a0c6b06e3dc9a0d9f4b0e2c1");

// Sister-chain clones.
const SKL_CALYPSO: Address = address!("0x254c16a6176a072ca71fa600ca7c9cf7b07caf50");
const SKL_NEBULA: Address = address!("0x7f73b66d4e6e67bcdeaf277b9962addcdabbfc4d");
const SKL_TITAN: Address = address!("0x0a8a1bdcec5eb2fcf146910bcbf15c87e78b02da");
const USDC_CALYPSO: Address = address!("0x7cf76e740cb23b99337b21f392f22c47ad910c67");
const USDC_NEBULA: Address = address!("0xcc205196288b7a26f6d43bbd68aaa98dde97276d");
const USDC_TITAN: Address = address!("0x10b2f567ab196cebfdd36d0a135d4cfcbfea2e6e");
const RUBY_CALYPSO: Address = address!("0xe5e1b1ab3a332e2b1ba9b195f9dca0b09b1fdad5");

static CONFIG: LazyLock<BridgeConfig> = LazyLock::new(build);

/// Returns the production deployment document.
///
/// The document is built once and cached; callers receive a clone to
/// validate with [`ConnectionGraph::build`](crate::graph::ConnectionGraph::build)
/// or to amend before validating.
#[must_use]
pub fn config() -> BridgeConfig {
    CONFIG.clone()
}

fn europa() -> ChainName {
    ChainName::new("elated-tan-skat").expect("static chain name is well-formed")
}

fn calypso() -> ChainName {
    ChainName::new("honorable-steel-rasalhague").expect("static chain name is well-formed")
}

fn nebula() -> ChainName {
    ChainName::new("green-giddy-denebola").expect("static chain name is well-formed")
}

fn titan() -> ChainName {
    ChainName::new("parallel-stormy-spica").expect("static chain name is well-formed")
}

fn symbol(raw: &str) -> TokenSymbol {
    TokenSymbol::new(raw).expect("static token symbol is well-formed")
}

/// Root-chain entry bridged to Europa directly and to the sister chains
/// through it.
fn root_fanout(address: Option<Address>) -> TokenEntry {
    let mut entry = TokenEntry::new()
        .with_chain(europa(), Edge::direct())
        .with_chain(calypso(), Edge::direct().via(europa()))
        .with_chain(nebula(), Edge::direct().via(europa()))
        .with_chain(titan(), Edge::direct().via(europa()));
    entry.address = address;
    entry
}

/// Europa-held clone pointing back at the root chain, fanning the same
/// edge out to all three sister chains.
fn europa_fanout(address: Address, sister_edge: Edge) -> TokenEntry {
    TokenEntry::new()
        .with_address(address)
        .with_chain(ChainName::mainnet(), Edge::cloned())
        .with_chain(calypso(), sister_edge.clone())
        .with_chain(nebula(), sister_edge.clone())
        .with_chain(titan(), sister_edge)
}

/// Sister-chain clone returning to Europa directly and to the root chain
/// through it.
fn sister_clone(address: Address) -> TokenEntry {
    TokenEntry::new()
        .with_address(address)
        .with_chain(europa(), Edge::cloned())
        .with_chain(ChainName::mainnet(), Edge::cloned().via(europa()))
}

fn build() -> BridgeConfig {
    BridgeConfig::new(SkaleNetwork::Mainnet)
        .with_chain(ChainInfo::new(ChainName::mainnet()).with_alias("Ethereum"))
        .with_chain(
            ChainInfo::new(europa())
                .with_alias("Europa Liquidity Hub")
                .with_category("hub")
                .with_app("ruby", "Ruby Exchange"),
        )
        .with_chain(
            ChainInfo::new(calypso())
                .with_alias("Calypso NFT Hub")
                .with_category("hub")
                .with_category("nfts"),
        )
        .with_chain(
            ChainInfo::new(nebula())
                .with_alias("Nebula Gaming Hub")
                .with_category("hub")
                .with_category("games"),
        )
        .with_chain(
            ChainInfo::new(titan())
                .with_alias("Titan AI Hub")
                .with_category("hub")
                .with_category("ai"),
        )
        .with_token(symbol("eth"), TokenMetadata::new("Ether", "ETH"))
        .with_token(symbol("skl"), TokenMetadata::new("SKALE", "SKL"))
        .with_token(
            symbol("usdc"),
            TokenMetadata::new("USD Coin", "USDC").with_decimals(6),
        )
        .with_token(
            symbol("usdt"),
            TokenMetadata::new("Tether USD", "USDT").with_decimals(6),
        )
        .with_token(symbol("dai"), TokenMetadata::new("Dai Stablecoin", "DAI"))
        .with_token(
            symbol("wbtc"),
            TokenMetadata::new("Wrapped BTC", "WBTC").with_decimals(8),
        )
        .with_token(symbol("ruby"), TokenMetadata::new("Ruby", "RUBY"))
        // Root chain: ETH, SKL, and USDC reach every chain; the remaining
        // stables stop at Europa.
        .with_connection(ChainName::mainnet(), TokenType::Eth, symbol("eth"), root_fanout(None))
        .with_connection(
            ChainName::mainnet(),
            TokenType::Erc20,
            symbol("skl"),
            root_fanout(Some(SKL_MAINNET)),
        )
        .with_connection(
            ChainName::mainnet(),
            TokenType::Erc20,
            symbol("usdc"),
            root_fanout(Some(USDC_MAINNET)),
        )
        .with_connection(
            ChainName::mainnet(),
            TokenType::Erc20,
            symbol("usdt"),
            TokenEntry::new()
                .with_address(USDT_MAINNET)
                .with_chain(europa(), Edge::direct()),
        )
        .with_connection(
            ChainName::mainnet(),
            TokenType::Erc20,
            symbol("dai"),
            TokenEntry::new()
                .with_address(DAI_MAINNET)
                .with_chain(europa(), Edge::direct()),
        )
        .with_connection(
            ChainName::mainnet(),
            TokenType::Erc20,
            symbol("wbtc"),
            TokenEntry::new()
                .with_address(WBTC_MAINNET)
                .with_chain(europa(), Edge::direct()),
        )
        // Europa: clones of every root asset, plus the native RUBY.
        .with_connection(
            europa(),
            TokenType::Eth,
            symbol("eth"),
            europa_fanout(ETH_CLONE, Edge::wrapped(WETH_EUROPA)),
        )
        .with_connection(
            europa(),
            TokenType::Erc20,
            symbol("skl"),
            europa_fanout(SKL_EUROPA, Edge::direct()),
        )
        .with_connection(
            europa(),
            TokenType::Erc20,
            symbol("usdc"),
            europa_fanout(USDC_EUROPA, Edge::wrapped(WUSDC_EUROPA)),
        )
        .with_connection(
            europa(),
            TokenType::Erc20,
            symbol("usdt"),
            TokenEntry::new()
                .with_address(USDT_EUROPA)
                .with_chain(ChainName::mainnet(), Edge::cloned()),
        )
        .with_connection(
            europa(),
            TokenType::Erc20,
            symbol("dai"),
            TokenEntry::new()
                .with_address(DAI_EUROPA)
                .with_chain(ChainName::mainnet(), Edge::cloned()),
        )
        .with_connection(
            europa(),
            TokenType::Erc20,
            symbol("wbtc"),
            TokenEntry::new()
                .with_address(WBTC_EUROPA)
                .with_chain(ChainName::mainnet(), Edge::cloned()),
        )
        .with_connection(
            europa(),
            TokenType::Erc20,
            symbol("ruby"),
            TokenEntry::new()
                .with_address(RUBY_EUROPA)
                .with_chain(calypso(), Edge::direct()),
        )
        // Calypso.
        .with_connection(calypso(), TokenType::Eth, symbol("eth"), sister_clone(ETH_CLONE))
        .with_connection(
            calypso(),
            TokenType::Erc20,
            symbol("skl"),
            sister_clone(SKL_CALYPSO),
        )
        .with_connection(
            calypso(),
            TokenType::Erc20,
            symbol("usdc"),
            sister_clone(USDC_CALYPSO),
        )
        .with_connection(
            calypso(),
            TokenType::Erc20,
            symbol("ruby"),
            TokenEntry::new()
                .with_address(RUBY_CALYPSO)
                .with_chain(europa(), Edge::cloned()),
        )
        // Nebula.
        .with_connection(nebula(), TokenType::Eth, symbol("eth"), sister_clone(ETH_CLONE))
        .with_connection(
            nebula(),
            TokenType::Erc20,
            symbol("skl"),
            sister_clone(SKL_NEBULA),
        )
        .with_connection(
            nebula(),
            TokenType::Erc20,
            symbol("usdc"),
            sister_clone(USDC_NEBULA),
        )
        // Titan.
        .with_connection(titan(), TokenType::Eth, symbol("eth"), sister_clone(ETH_CLONE))
        .with_connection(titan(), TokenType::Erc20, symbol("skl"), sister_clone(SKL_TITAN))
        .with_connection(
            titan(),
            TokenType::Erc20,
            symbol("usdc"),
            sister_clone(USDC_TITAN),
        )
}
