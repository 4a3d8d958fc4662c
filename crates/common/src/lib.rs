//! Shared utilities for the Achados e Perdidos API

pub mod config;
pub mod crypto;
pub mod error;

pub use config::Config;
pub use crypto::{hash_secret, verify_secret_hash};
pub use error::{Error, Result};
