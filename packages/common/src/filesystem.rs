use crate::error::{CommonError, CommonResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Source file access, abstracted for testing
pub trait FileSystem {
    /// Read a whole file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> CommonResult<String>;
}

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> CommonResult<String> {
        std::fs::read_to_string(path).map_err(|err| CommonError::io(path, err))
    }
}

/// In-memory file system for testing
pub struct MockFileSystem {
    pub files: HashMap<PathBuf, String>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> CommonResult<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            CommonError::io(path, std::io::Error::from(std::io::ErrorKind::NotFound))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_file_system() {
        let mut fs = MockFileSystem::new();
        fs.add_file("/src/Button.jsx", "export default class Button {}");

        assert_eq!(
            fs.read_to_string(Path::new("/src/Button.jsx")).unwrap(),
            "export default class Button {}"
        );
    }

    #[test]
    fn test_mock_missing_file_is_io_error() {
        let fs = MockFileSystem::new();
        let err = fs.read_to_string(Path::new("/nope.jsx")).unwrap_err();

        assert!(matches!(err, CommonError::Io { .. }));
    }
}
