//! API route handlers
//!
//! Static routes live here; everything that talks to the upstream movie API
//! is in `movies`.

pub mod movies;

use crate::error::ServerError;

/// Home route (GET /)
pub async fn home() -> &'static str {
    "testing home route"
}

/// Secret route (GET /secret)
pub async fn secret() -> &'static str {
    "Shhhhhh"
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
