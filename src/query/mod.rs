//! Layout configuration from `key=value&...` strings.
//!
//! Parses strings like `?w=800&h=600&cards=12&device=desktop` (from a URL,
//! a settings blob, or a test fixture) into a [`LayoutRequest`], which then
//! resolves device constraints and produces a
//! [`LayoutConfig`](crate::LayoutConfig).
//!
//! # Example
//!
//! ```
//! use cardgrid::query;
//!
//! let result = query::parse("w=800&h=600&cards=12&device=desktop&orientation=landscape");
//! assert!(result.warnings.is_empty());
//!
//! let config = result.request.to_config().expect("complete request");
//! let layout = config.compute().expect("12 cards fit");
//! assert!(layout.cols >= layout.rows);
//! ```
//!
//! # Keys
//!
//! | key | value |
//! |-----|-------|
//! | `w`, `width` | container width in pixels |
//! | `h`, `height` | container height in pixels |
//! | `cards`, `count` | number of cards |
//! | `device` | `mobile` / `phone`, `tablet`, `desktop` |
//! | `orientation` | `portrait`, `landscape` (and `-primary`/`-secondary`) |
//! | `dpr`, `zoom` | device pixel ratio, optional trailing `x` |
//! | `touch` | boolean |
//! | `optimize` | boolean; shrink cards for large decks and dense screens |

mod parse;
pub mod request;

pub use request::{LayoutRequest, RequestError};

use alloc::string::String;
use alloc::vec::Vec;

/// Result of parsing a configuration string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed request.
    pub request: LayoutRequest,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from configuration parsing.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    #[error("duplicate key {key}={value}")]
    DuplicateKey { key: String, value: String },
    /// A key is not part of the layout configuration.
    #[error("unrecognized key {key}={value}")]
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    #[error("invalid value {value:?} for {key}: {reason}")]
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a configuration string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (request, warnings) = parse::parse_query(query);
    ParseResult { request, warnings }
}
