//! Inline HTML pages
//!
//! Pages are plain strings. Only the search results page takes input, and
//! that input is spliced in verbatim.

pub const INDEX: &str = include_str!("templates/index.html");
pub const LOGIN: &str = include_str!("templates/login.html");
pub const SEARCH: &str = include_str!("templates/search.html");
pub const BRUTE_FORCE: &str = include_str!("templates/brute_force.html");

const SEARCH_RESULTS: &str = include_str!("templates/search_results.html");
const QUERY_PLACEHOLDER: &str = "{{ query }}";

/// Render the search results page with `query` embedded without escaping
pub fn search_results(query: &str) -> String {
    SEARCH_RESULTS.replace(QUERY_PLACEHOLDER, query)
}
