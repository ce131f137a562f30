use react_dts_parser::ParseError;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type CommonResult<T> = Result<T, CommonError>;

/// Failure to turn component source into a declaration
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CommonError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        CommonError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, CommonError::Parse(_))
    }
}
