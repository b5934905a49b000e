//! # Data Compare
//!
//! Finds the keys of an origin file that appear in none of the files of a
//! target folder.
//!
//! ## Features
//!
//! - **Key types**: IPv4 addresses, domain names and URLs, validated by regex
//!   and normalized before comparison
//! - **Formats**: CSV, spreadsheets (xlsx/xlsm/xls/ods) and plain text in;
//!   CSV, xlsx and plain text out
//! - **Tolerant**: headers, comments and other noise are filtered out
//! - **Configurable**: TOML config file plus command-line flags
//!
//! ## Architecture
//!
//! The run is a straight pipeline:
//!
//! - `formats`: reads raw records and writes the result column, picked by extension
//! - `pipeline::KeyExtractor`: turns records into a `KeySet` through a `KeyValidator`
//! - `pipeline::compare`: origin keys minus the union of target keys
//!
//! ## Example
//!
//! ```rust
//! use data_compare::core::{KeySet, KeyType};
//! use data_compare::pipeline::{compare, KeyExtractor};
//!
//! let extractor = KeyExtractor::new(KeyType::Domain);
//! let origin = extractor.extract(&["example.com", "notfound.com"]).keys;
//! let targets: KeySet = ["example.com"].into_iter().collect();
//!
//! let result = compare(KeyType::Domain, &origin, &targets);
//! assert_eq!(result.keys, vec!["notfound.com"]);
//! ```

pub mod cli;
pub mod core;
pub mod formats;
pub mod pipeline;
pub mod utils;
pub mod validators;

// Re-export commonly used types
pub use crate::core::{
    Config, DataCompareError, FormatHandler, KeySet, KeyType, KeyValidator, NonMatchResult,
    Result, RunContext, RunSummary, TargetErrorPolicy,
};

pub use formats::FileFormat;
pub use pipeline::{run, RunOptions, RunReport};
pub use validators::{all_validators, get_validator};
