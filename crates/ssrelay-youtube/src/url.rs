//! URL construction for the search endpoint.

use url::Url;

/// Fixed search parameters: one video, ranked by relevance.
const SEARCH_PARAMS: &str = "part=snippet&type=video&maxResults=1&order=relevance";

/// Build the search URL for `query`.
///
/// The query is percent-encoded exactly once.
pub fn build_search_url(base: &Url, query: &str, api_key: &str) -> Url {
    let mut url = base.clone();
    url.set_query(Some(&format!(
        "{SEARCH_PARAMS}&q={}&key={}",
        urlencoding::encode(query),
        urlencoding::encode(api_key)
    )));
    url
}
