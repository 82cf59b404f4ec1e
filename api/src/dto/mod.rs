//! Data transfer objects for the HTTP boundary.

pub mod error_dto;
pub mod token_dto;

pub use error_dto::ErrorResponse;
pub use token_dto::{TokenRequest, TokenResponse};
