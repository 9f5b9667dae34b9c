//! API request/response types

pub mod error;
pub mod json;
pub mod keys;

pub use error::{
    ApiError, ApiErrorResponse, ApiErrorType, ACCESS_DENIED_MESSAGE, GENERIC_FAULT_MESSAGE,
};
pub use json::Json;
pub use keys::{
    require_field, CheckKeyRequest, CheckKeyResponse, ValidateTokenRequest, ValidateTokenResponse,
};
