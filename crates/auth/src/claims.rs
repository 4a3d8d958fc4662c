//! JWT claims types

use serde::{Deserialize, Serialize};

/// Claims carried by an admin session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Subject (admin username)
    pub sub: String,
    /// Issued at (unix seconds)
    pub iat: u64,
    /// Expires at (unix seconds)
    pub exp: u64,
}
