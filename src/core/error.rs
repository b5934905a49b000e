use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataCompareError {
    #[error("Input not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Unsupported file format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("File is not valid UTF-8: {0}")]
    Encoding(PathBuf),

    #[error("Spreadsheet error in {path}: {message}")]
    Spreadsheet { path: PathBuf, message: String },

    #[error("Failed to render output: {0}")]
    Render(String),

    #[error("Failed to write output {path}: {message}")]
    Output { path: PathBuf, message: String },

    #[error("Could not process target file {path}: {source}")]
    TargetFile {
        path: PathBuf,
        #[source]
        source: Box<DataCompareError>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DataCompareError {
    pub fn unsupported(path: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            path: path.into(),
            extension: extension.into(),
        }
    }

    pub fn output(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Output {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Process exit code for this error.
    ///
    /// Code 2 is left to clap for usage errors. Target file failures report
    /// the code of the underlying error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound(_) => 3,
            Self::UnsupportedFormat { .. } => 4,
            Self::Output { .. } => 5,
            Self::TargetFile { source, .. } => source.exit_code(),
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DataCompareError>;
