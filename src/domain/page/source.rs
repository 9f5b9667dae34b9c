use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::DomainError;

/// Pages the gateway can serve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Shown on a referer denial
    AccessDenied,
    /// Shown for unmatched routes
    NotFound,
    /// Template for the presentation page with `${key}` and `${timestamp}`
    KeyTemplate,
}

impl Page {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::AccessDenied => "accessdenied.html",
            Self::NotFound => "404.html",
            Self::KeyTemplate => "keysite.html",
        }
    }

    /// Minimal page used when the asset cannot be read.
    ///
    /// The key template has none: serving a key page without the template
    /// is a fault.
    pub fn fallback(&self) -> Option<&'static str> {
        match self {
            Self::AccessDenied => Some(
                "<!DOCTYPE html><html><head><title>Access Denied</title></head>\
                 <body><h1>Access Denied</h1></body></html>",
            ),
            Self::NotFound => Some(
                "<!DOCTYPE html><html><head><title>Not Found</title></head>\
                 <body><h1>404 - Not Found</h1></body></html>",
            ),
            Self::KeyTemplate => None,
        }
    }
}

/// Read-only source of page assets
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn load(&self, page: Page) -> Result<String, DomainError>;
}
