#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for the SKALE token bridge.
//!
//! This crate models a bridge deployment as a validated connection graph:
//! which chains participate, which tokens are catalogued, and which edges
//! link them, including hub-routed edges that cross an intermediate chain.
//! On top of the graph it resolves transfer plans of one or two legs,
//! with the custody and supply action of every leg spelled out.
//!
//! # Overview
//!
//! Deployments are described by a [`config::BridgeConfig`] document,
//! either bundled (see [`networks`]) or loaded from JSON. Building a
//! [`graph::ConnectionGraph`] validates the document as a whole; a graph
//! therefore never contains dangling destinations, self-loops, or hub
//! routes deeper than one indirection. Everything after construction is
//! pure, synchronous lookup suitable for embedding under a UI or a
//! service.
//!
//! # Modules
//!
//! - [`chain`] - Chain names and per-chain registry entries
//! - [`config`] - The deployment document schema and loading helpers
//! - [`edge`] - Connection edges between chains
//! - [`error`] - Typed configuration, catalog, and routing errors
//! - [`graph`] - The validated connection graph and its query API
//! - [`networks`] - Network registry and bundled deployment documents
//! - [`resolver`] - Transfer plan resolution over a built graph
//! - [`token`] - Token symbols, standards, and catalog metadata
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation of graph construction
//!   and route resolution

pub mod chain;
pub mod config;
pub mod edge;
pub mod error;
pub mod graph;
pub mod networks;
pub mod resolver;
pub mod token;
