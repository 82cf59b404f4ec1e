//! # TokenMint API
//!
//! actix-web boundary for the TokenMint provider: the OAuth2 token endpoint,
//! the public key endpoint, Basic credential extraction and the mapping from
//! domain errors to HTTP responses.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
