use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{DomainError, Page, PageSource};

/// Location of the page assets
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub dir: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public"),
        }
    }
}

/// Reads pages from a directory on every load, so edits apply without a restart
#[derive(Debug, Clone)]
pub struct FilePageSource {
    dir: PathBuf,
}

impl FilePageSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, page: Page) -> PathBuf {
        self.dir.join(page.file_name())
    }
}

#[async_trait]
impl PageSource for FilePageSource {
    async fn load(&self, page: Page) -> Result<String, DomainError> {
        let path = self.path_for(page);

        tokio::fs::read_to_string(&path).await.map_err(|e| {
            DomainError::internal(format!("Failed to read {}: {}", path.display(), e))
        })
    }
}
