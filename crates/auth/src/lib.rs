//! Admin session middleware for the Achados e Perdidos API
//!
//! Provides JWT issue/validation and an axum extractor that works with any
//! state implementing `FromRef<S>` for `AuthConfig`. Every `/admin/*` route
//! authenticates per request through the extractor; there is no session
//! store, the token is self-contained.

mod claims;
mod config;
mod error;
mod extractors;
mod jwt;

pub use claims::AdminClaims;
pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::AdminUser;
pub use jwt::{emitir_token, validar_token};
