//! Keystore access: loading an RSA private key and certificate from a
//! password-protected PKCS#12 container and caching the resulting key
//! material for the process lifetime.
//!
//! The container is read exactly once at startup; `KeyMaterialCache::reload`
//! is the only way to pick up a replaced container afterwards.

mod cache;
mod config;
mod loader;
mod material;

#[cfg(test)]
pub(crate) mod tests;

pub use cache::KeyMaterialCache;
pub use config::KeyStoreConfig;
pub use loader::KeyStoreLoader;
pub use material::KeyMaterial;
