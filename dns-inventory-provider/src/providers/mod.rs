//! Provider implementations.

pub mod cloudflare;

pub use cloudflare::CloudflareProvider;
