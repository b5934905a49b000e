pub mod config;
pub mod error;
pub mod results;
pub mod traits;

pub use config::{Config, TargetErrorPolicy};
pub use error::{DataCompareError, Result};
pub use results::{KeySet, KeyType, NonMatchResult, RunContext, RunSummary};
pub use traits::{FormatHandler, KeyValidator};
