//! Domain layer - Core admission types and collaborator traits

pub mod admission;
pub mod credential;
pub mod error;
pub mod identity;
pub mod page;
pub mod token;

pub use admission::{AdmissionFilter, AdmissionOutcome, AdmissionPolicy, RateLimitConfig};
pub use credential::{AccessCredential, KeyBroker};
pub use error::DomainError;
pub use identity::ClientIdentity;
pub use page::{render_key_page, Page, PageSource};
pub use token::SessionToken;
