//! Domain entities.

pub mod claims;

pub use claims::{TokenClaims, TOKEN_TTL_SECONDS};
