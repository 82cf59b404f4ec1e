//! Route handlers.

pub mod oauth;
