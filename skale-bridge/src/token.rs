//! Token identification and catalog metadata.
//!
//! - [`TokenSymbol`] - case-folded token symbol newtype (`"skl"`, `"usdc"`)
//! - [`TokenType`] - the bridged token standards (`eth`, `erc20`, ...)
//! - [`TokenMetadata`] - per-network display metadata for a token

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

/// A validated, case-folded token symbol.
///
/// Symbols are case-insensitive: input is folded to lower case on
/// construction, so `"SKL"`, `"Skl"`, and `"skl"` all name the same token.
/// After folding, symbols must be non-empty and drawn from `[a-z0-9_-]`.
///
/// # Serialization
///
/// Serializes to the folded string form: `"skl"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenSymbol(String);

impl TokenSymbol {
    /// Creates a token symbol, folding case and validating the format.
    ///
    /// # Errors
    ///
    /// Returns [`TokenSymbolError`] if the folded input is empty or
    /// contains a character outside `[a-z0-9_-]`.
    pub fn new<S: AsRef<str>>(symbol: S) -> Result<Self, TokenSymbolError> {
        let folded = symbol.as_ref().to_lowercase();
        let valid = !folded.is_empty()
            && folded
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-');
        if valid {
            Ok(Self(folded))
        } else {
            Err(TokenSymbolError(symbol.as_ref().to_owned()))
        }
    }

    /// Returns the folded string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TokenSymbol> for String {
    fn from(value: TokenSymbol) -> Self {
        value.0
    }
}

/// Error returned when parsing an invalid token symbol.
#[derive(Debug, thiserror::Error)]
#[error("invalid token symbol `{0}`")]
pub struct TokenSymbolError(String);

impl FromStr for TokenSymbol {
    type Err = TokenSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for TokenSymbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TokenSymbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(de::Error::custom)
    }
}

/// The token standards the bridge moves.
///
/// `Eth` is the chain-native asset; the rest are the usual Ethereum
/// contract standards. Connection maps are partitioned by this type, so
/// the same symbol can exist independently as, say, an ERC-20 and an
/// ERC-721 collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// The native asset of the root chain.
    Eth,
    /// Fungible ERC-20 tokens.
    Erc20,
    /// Non-fungible ERC-721 tokens.
    Erc721,
    /// ERC-721 tokens with on-chain token URI metadata.
    Erc721Meta,
    /// Multi-token ERC-1155 collections.
    Erc1155,
}

impl TokenType {
    /// Returns all token types in canonical order.
    #[must_use]
    pub const fn variants() -> &'static [Self] {
        &[
            Self::Eth,
            Self::Erc20,
            Self::Erc721,
            Self::Erc721Meta,
            Self::Erc1155,
        ]
    }

    /// Returns the lower-case wire form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eth => "eth",
            Self::Erc20 => "erc20",
            Self::Erc721 => "erc721",
            Self::Erc721Meta => "erc721meta",
            Self::Erc1155 => "erc1155",
        }
    }

    /// Returns `true` for fungible standards (native ETH and ERC-20).
    #[must_use]
    pub const fn is_fungible(self) -> bool {
        matches!(self, Self::Eth | Self::Erc20)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown token type.
#[derive(Debug, thiserror::Error)]
#[error("unknown token type `{0}`")]
pub struct TokenTypeError(String);

impl FromStr for TokenType {
    type Err = TokenTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eth" => Ok(Self::Eth),
            "erc20" => Ok(Self::Erc20),
            "erc721" => Ok(Self::Erc721),
            "erc721meta" => Ok(Self::Erc721Meta),
            "erc1155" => Ok(Self::Erc1155),
            other => Err(TokenTypeError(other.to_owned())),
        }
    }
}

/// Display metadata for a token, shared by every chain in a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Full token name, e.g. `"SKALE Network Token"`.
    pub name: String,
    /// Display symbol in its conventional casing, e.g. `"SKL"`.
    pub symbol: String,
    /// Decimal places; defaults to 18 when omitted.
    #[serde(default = "default_decimals")]
    pub decimals: u8,
    /// Icon location for UI layers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

const fn default_decimals() -> u8 {
    18
}

impl TokenMetadata {
    /// Creates metadata with 18 decimals and no icon.
    #[must_use]
    pub fn new<N: Into<String>, S: Into<String>>(name: N, symbol: S) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals: default_decimals(),
            icon_url: None,
        }
    }

    /// Sets the decimal places.
    #[must_use]
    pub const fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    /// Sets the icon location.
    #[must_use]
    pub fn with_icon_url<S: Into<String>>(mut self, icon_url: S) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }
}
