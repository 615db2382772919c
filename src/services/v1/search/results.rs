use crate::requests::v1::search::SearchForm;
use crate::views;

/// Render the results page for a search term
///
/// The term is reflected into the page as-is. There is no search backend,
/// the two results shown are fixed placeholders.
pub fn results(request: SearchForm) -> String {
    ::tracing::debug!(query = %request.query, "Rendering search results");

    views::search_results(&request.query)
}
