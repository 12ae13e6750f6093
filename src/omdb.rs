//! Upstream OMDb API access
//!
//! Query construction and the outbound calls the proxy routes forward to.
//! OMDb lookups are plain GETs of the form `<base>?t=<query>`; the query is
//! whatever the route derived from the incoming request.

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use serde_json::Value;

/// Query used by the fixed `GET /movie` route.
pub const DEFAULT_TITLE_QUERY: &str = "the+big+lebowski";

/// Build the title query for a client-supplied movie name.
///
/// Only the first space is replaced with `+`; remaining spaces pass through
/// unescaped. No other URL encoding is performed.
pub fn title_query(moviename: &str) -> String {
    moviename.replacen(' ', "+", 1)
}

/// Build the full upstream lookup URL for a title query.
pub fn lookup_url(base: &str, query: &str) -> String {
    format!("{base}?t={query}")
}

/// Fetch the raw upstream body for a title query.
pub async fn fetch_raw(state: &ServerState, query: &str) -> ServerResult<String> {
    let url = lookup_url(&state.config.upstream_url, query);
    tracing::debug!(url = %url, "Forwarding lookup to upstream");

    let body = state.http.get(url).send().await?.text().await?;
    Ok(body)
}

/// Fetch the upstream document for a title query and extract `imdbRating`.
pub async fn fetch_rating(state: &ServerState, query: &str) -> ServerResult<String> {
    let body = fetch_raw(state, query).await?;
    let document: Value = serde_json::from_str(&body)?;
    extract_rating(&document)
}

/// Pull the `imdbRating` field out of an upstream response document.
///
/// OMDb serializes the rating as a JSON string (e.g. `"8.1"`, or `"N/A"` for
/// unrated titles); the raw string is relayed as-is.
pub fn extract_rating(document: &Value) -> ServerResult<String> {
    document
        .get("imdbRating")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ServerError::UpstreamBody("missing imdbRating field".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_query_replaces_only_first_space() {
        assert_eq!(title_query("true grit"), "true+grit");
        assert_eq!(title_query("the big lebowski"), "the+big lebowski");
        assert_eq!(title_query("solaris"), "solaris");
    }

    #[test]
    fn test_title_query_leaves_other_characters_alone() {
        // No percent-encoding is applied, matching the proxy's minimal escaping.
        assert_eq!(title_query("what's up doc?"), "what's+up doc?");
    }

    #[test]
    fn test_lookup_url() {
        assert_eq!(
            lookup_url("http://www.omdbapi.com/", DEFAULT_TITLE_QUERY),
            "http://www.omdbapi.com/?t=the+big+lebowski"
        );
    }

    #[test]
    fn test_extract_rating() {
        let doc = json!({"Title": "True Grit", "imdbRating": "7.6"});
        assert_eq!(extract_rating(&doc).unwrap(), "7.6");
    }

    #[test]
    fn test_extract_rating_missing_field() {
        let doc = json!({"Response": "False", "Error": "Movie not found!"});
        assert!(extract_rating(&doc).is_err());
    }

    #[test]
    fn test_extract_rating_wrong_type() {
        let doc = json!({"imdbRating": 7.6});
        assert!(extract_rating(&doc).is_err());
    }
}
