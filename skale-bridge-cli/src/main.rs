//! Command-line inspector for SKALE bridge deployments.
//!
//! # Usage
//!
//! ```bash
//! # Validate the bundled production deployment
//! cargo run -p skale-bridge-cli -- check
//!
//! # List the chains of the test deployment
//! cargo run -p skale-bridge-cli -- --network testnet chains
//!
//! # Resolve a transfer plan as JSON
//! cargo run -p skale-bridge-cli -- route \
//!     --from honorable-steel-rasalhague --to mainnet --type erc20 skl --json
//!
//! # Validate an external deployment document
//! cargo run -p skale-bridge-cli -- --config ./bridge.json check
//! ```
//!
//! # Environment Variables
//!
//! - `SKALE_BRIDGE_NETWORK` — Network whose bundled deployment to use
//!   (default: `mainnet`)
//! - `SKALE_BRIDGE_CONFIG` — Deployment document to load instead of a
//!   bundled one
//! - `RUST_LOG` — Log level filter (default: `info`)

#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use skale_bridge::chain::ChainName;
use skale_bridge::config::BridgeConfig;
use skale_bridge::graph::ConnectionGraph;
use skale_bridge::networks::{self, NetworkInfo, SkaleNetwork};
use skale_bridge::resolver::TransferPlan;
use skale_bridge::token::{TokenSymbol, TokenType};

#[derive(Debug, Parser)]
#[command(
    name = "skale-bridge-cli",
    version,
    about = "Inspect SKALE bridge deployments and resolve transfer routes"
)]
struct Cli {
    /// Network whose bundled deployment document to use.
    #[arg(long, global = true, default_value = "mainnet", env = "SKALE_BRIDGE_NETWORK")]
    network: SkaleNetwork,

    /// Deployment document to load instead of a bundled one.
    #[arg(long, global = true, env = "SKALE_BRIDGE_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate the deployment document and report anything odd.
    Check,
    /// List the deployment's chains with their endpoints.
    Chains,
    /// List the token catalog, or the tokens present on one chain.
    Tokens {
        /// Restrict the listing to tokens deployed on this chain.
        #[arg(long)]
        origin: Option<ChainName>,
    },
    /// List every chain reachable from an origin for one token.
    Destinations {
        /// Origin chain.
        #[arg(long)]
        from: ChainName,
        /// Token standard to route.
        #[arg(long = "type", value_name = "TOKEN_TYPE")]
        token_type: TokenType,
        /// Token symbol to route.
        symbol: TokenSymbol,
    },
    /// Resolve the transfer plan between two chains for one token.
    Route {
        /// Origin chain.
        #[arg(long)]
        from: ChainName,
        /// Destination chain.
        #[arg(long)]
        to: ChainName,
        /// Token standard to route.
        #[arg(long = "type", value_name = "TOKEN_TYPE")]
        token_type: TokenType,
        /// Token symbol to route.
        symbol: TokenSymbol,
        /// Print the plan as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        tracing::error!("bridge inspection failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let graph = ConnectionGraph::build(config)?;

    match cli.command {
        Command::Check => check(&graph),
        Command::Chains => chains(&graph),
        Command::Tokens { origin } => tokens(&graph, origin.as_ref()),
        Command::Destinations {
            from,
            token_type,
            symbol,
        } => destinations(&graph, &from, token_type, &symbol),
        Command::Route {
            from,
            to,
            token_type,
            symbol,
            json,
        } => {
            let plan = graph.resolve(&from, &to, token_type, &symbol)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                render_plan(&plan);
            }
        }
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<BridgeConfig, Box<dyn std::error::Error>> {
    if let Some(path) = &cli.config {
        tracing::info!(path = %path.display(), "loading deployment document");
        return Ok(BridgeConfig::from_json_file(path)?);
    }
    networks::builtin(cli.network).ok_or_else(|| {
        format!(
            "no bundled deployment document for network `{}`; pass --config",
            cli.network
        )
        .into()
    })
}

fn check(graph: &ConnectionGraph) {
    println!(
        "{}: configuration valid, {} chains, {} tokens",
        graph.network(),
        graph.chains().count(),
        graph.tokens().count()
    );
    for smell in graph.smells() {
        println!("smell: {smell}");
    }
}

fn chains(graph: &ConnectionGraph) {
    let info = NetworkInfo::for_network(graph.network());
    for chain in graph.chains() {
        println!("{} ({})", chain.name, chain.display_name());
        println!("    rpc:      {}", info.rpc_url(&chain.name));
        println!("    explorer: {}", info.explorer_url(&chain.name));
        for app in chain.apps.values() {
            println!("    app:      {}", app.alias);
        }
    }
}

fn tokens(graph: &ConnectionGraph, origin: Option<&ChainName>) {
    match origin {
        None => {
            for (symbol, meta) in graph.tokens() {
                println!(
                    "{symbol}: {} ({}, {} decimals)",
                    meta.name, meta.symbol, meta.decimals
                );
            }
        }
        Some(origin) => {
            for token_type in graph.token_types(origin) {
                for symbol in graph.symbols(origin, token_type) {
                    match graph.canonical_address(origin, token_type, symbol) {
                        Some(address) => println!("{token_type} {symbol} at {address}"),
                        None => println!("{token_type} {symbol} (no contract address)"),
                    }
                }
            }
        }
    }
}

fn destinations(
    graph: &ConnectionGraph,
    from: &ChainName,
    token_type: TokenType,
    symbol: &TokenSymbol,
) {
    let reachable = graph.destinations(from, token_type, symbol);
    if reachable.is_empty() {
        tracing::warn!(%from, %token_type, %symbol, "no destinations");
        return;
    }
    for destination in reachable {
        println!("{destination}");
    }
}

fn render_plan(plan: &TransferPlan) {
    let via = plan
        .hub()
        .map_or_else(String::new, |hub| format!(" via {hub}"));
    println!(
        "{} {} on {}: {} leg(s){via}",
        plan.token_type,
        plan.symbol,
        plan.network,
        plan.legs.len()
    );
    for (index, leg) in plan.legs.iter().enumerate() {
        println!(
            "  {}. {} -> {}: {} ({})",
            index + 1,
            leg.origin,
            leg.destination,
            leg.operation,
            leg.operation.describe()
        );
        if let Some(address) = leg.source_address {
            println!("     from contract {address}");
        }
        if let Some(address) = leg.destination_address {
            println!("     to contract   {address}");
        }
    }
}
