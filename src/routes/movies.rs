//! Movie proxy routes
//!
//! Each handler issues at most one outbound call to the upstream OMDb API and
//! relays either the raw body or the extracted `imdbRating` field.

use crate::error::{ServerError, ServerResult};
use crate::omdb;
use crate::state::ServerState;
use axum::extract::{FromRequest, Form, Json, Path, Request, State};
use axum::http::header::CONTENT_TYPE;
use serde::Deserialize;
use std::sync::Arc;

/// Body of a POST /movies lookup
#[derive(Debug, Deserialize)]
pub struct MovieRequest {
    /// Title to look up; the first space is replaced with `+` before forwarding
    pub moviename: String,
}

/// Extractor accepting `MovieRequest` as either a JSON or URL-encoded form body
///
/// Mirrors the generic body decoding applied before routing: clients may send
/// `application/json` or `application/x-www-form-urlencoded` interchangeably.
pub struct MovieBody(pub MovieRequest);

impl<S> FromRequest<S> for MovieBody
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(body) = Form::<MovieRequest>::from_request(req, state)
                .await
                .map_err(|e| ServerError::BadRequest(e.to_string()))?;
            Ok(Self(body))
        } else {
            let Json(body) = Json::<MovieRequest>::from_request(req, state)
                .await
                .map_err(|e| ServerError::BadRequest(e.to_string()))?;
            Ok(Self(body))
        }
    }
}

/// Fixed movie lookup (GET /movie)
///
/// Forwards a hard-wired `t=the+big+lebowski` query and relays the raw
/// upstream body.
pub async fn get_movie(State(state): State<Arc<ServerState>>) -> ServerResult<String> {
    omdb::fetch_raw(&state, omdb::DEFAULT_TITLE_QUERY).await
}

/// Path-parameter movie lookup (GET /movie/{moviename})
///
/// The path segment is forwarded verbatim as the title query; no space
/// substitution or additional encoding is applied.
pub async fn get_movie_by_name(
    State(state): State<Arc<ServerState>>,
    Path(moviename): Path<String>,
) -> ServerResult<String> {
    omdb::fetch_raw(&state, &moviename).await
}

/// Body-driven rating lookup (POST /movies)
///
/// Reads `moviename` from the request body, forwards the lookup, and returns
/// only the value of the upstream document's `imdbRating` field.
pub async fn post_movies(
    State(state): State<Arc<ServerState>>,
    MovieBody(body): MovieBody,
) -> ServerResult<String> {
    let query = omdb::title_query(&body.moviename);
    omdb::fetch_rating(&state, &query).await
}
