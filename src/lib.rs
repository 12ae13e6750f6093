//! OMDb Proxy - HTTP proxy server for the OMDb movie-information API
//!
//! This crate provides a small HTTP server that relays movie lookups to the
//! OMDb API (<http://www.omdbapi.com/>), optionally reshaping the response.
//!
//! # Endpoints
//!
//! - `GET /` - Static home-route text
//! - `GET /secret` - Static text
//! - `GET /movie` - Proxies a fixed lookup (`t=the+big+lebowski`) and relays
//!   the raw upstream body
//! - `GET /movie/{moviename}` - Proxies a lookup for the raw path segment
//! - `POST /movies` - Reads `moviename` from a JSON or form body, proxies the
//!   lookup, and returns only the upstream `imdbRating` field
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use proxy::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     proxy::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod omdb;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
