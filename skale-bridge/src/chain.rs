//! Chain naming and per-chain registry entries.
//!
//! SKALE chains are addressed by generated lower-case names such as
//! `elated-tan-skat`; the Ethereum root chain is always named `mainnet`.
//!
//! - [`ChainName`] - validated chain name newtype
//! - [`ChainInfo`] - registry entry: display alias, categories, hosted apps
//! - [`AppInfo`] - a named destination hosted on a chain

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The reserved name of the Ethereum root chain.
const MAINNET: &str = "mainnet";

/// A validated SKALE chain name.
///
/// Names are lower-case, non-empty, drawn from `[a-z0-9-]`, and never start
/// or end with a hyphen. The root chain carries the reserved name
/// `mainnet`; everything else is a SKALE chain.
///
/// # Serialization
///
/// Serializes to/from the plain string form: `"elated-tan-skat"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainName(String);

impl ChainName {
    /// Creates a chain name, validating the format.
    ///
    /// # Errors
    ///
    /// Returns [`ChainNameError`] if the input is empty, contains a
    /// character outside `[a-z0-9-]`, or starts or ends with a hyphen.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, ChainNameError> {
        let name = name.into();
        if is_well_formed(&name) {
            Ok(Self(name))
        } else {
            Err(ChainNameError(name))
        }
    }

    /// Returns the name of the Ethereum root chain.
    #[must_use]
    pub fn mainnet() -> Self {
        Self(MAINNET.to_owned())
    }

    /// Returns the raw string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the Ethereum root chain.
    #[must_use]
    pub fn is_mainnet(&self) -> bool {
        self.0 == MAINNET
    }
}

fn is_well_formed(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

impl fmt::Display for ChainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ChainName> for String {
    fn from(value: ChainName) -> Self {
        value.0
    }
}

/// Error returned when parsing an invalid chain name.
///
/// A valid chain name is non-empty, lower-case `[a-z0-9-]`, and does not
/// start or end with a hyphen.
#[derive(Debug, thiserror::Error)]
#[error("invalid chain name `{0}`")]
pub struct ChainNameError(String);

impl FromStr for ChainName {
    type Err = ChainNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ChainName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ChainName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(de::Error::custom)
    }
}

/// A named destination hosted on a chain.
///
/// Apps share the chain's bridge contracts; they exist so the UI can offer
/// "transfer to app X on chain Y" without a separate chain entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    /// Human-readable app name.
    pub alias: String,
}

/// A chain registry entry.
///
/// Carries everything the UI needs to present a chain: the raw name, an
/// optional display alias, category tags, and the apps hosted on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInfo {
    /// The chain's canonical name.
    pub name: ChainName,
    /// Human-readable display name, when the raw name is not presentable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Category tags such as `hub` or `games`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Apps hosted on this chain, keyed by app identifier.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub apps: BTreeMap<String, AppInfo>,
}

impl ChainInfo {
    /// Creates an entry with no alias, categories, or apps.
    #[must_use]
    pub fn new(name: ChainName) -> Self {
        Self {
            name,
            alias: None,
            categories: Vec::new(),
            apps: BTreeMap::new(),
        }
    }

    /// Sets the display alias.
    #[must_use]
    pub fn with_alias<S: Into<String>>(mut self, alias: S) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Adds a category tag.
    #[must_use]
    pub fn with_category<S: Into<String>>(mut self, category: S) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Adds a hosted app.
    #[must_use]
    pub fn with_app<K: Into<String>, A: Into<String>>(mut self, key: K, alias: A) -> Self {
        self.apps.insert(key.into(), AppInfo { alias: alias.into() });
        self
    }

    /// Returns the display alias, falling back to the raw chain name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.alias.as_deref().unwrap_or_else(|| self.name.as_str())
    }
}
