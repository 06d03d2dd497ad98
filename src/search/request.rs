use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use super::SearchError;
use crate::types::SearchQuery;

/// Default JSearch endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://jsearch.p.rapidapi.com/search";
/// Value of the `X-RapidAPI-Host` header.
pub const RAPIDAPI_HOST: &str = "jsearch.p.rapidapi.com";
pub const API_KEY_HEADER: &str = "X-RapidAPI-Key";
pub const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// Fixed query parameters sent with every search, in request order.
pub const FIXED_PARAMS: [(&str, &str); 6] = [
	("page", "1"),
	("num_pages", "1"),
	("date_posted", "3days"),
	("country", "us"),
	("employment_types", "fulltime"),
	("radius", "8"),
];

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

/// Percent-encode a single query component.
#[must_use]
pub fn encode_component(value: &str) -> String {
	utf8_percent_encode(value, COMPONENT).to_string()
}

/// Build the full request URL for `query` against `endpoint`.
///
/// Any query string already present on `endpoint` is replaced.
pub fn build_url(endpoint: &str, query: &SearchQuery) -> Result<Url, SearchError> {
	let mut url = Url::parse(endpoint)?;

	let mut params = format!("query={}", encode_component(&query.query_string()));
	for (key, value) in FIXED_PARAMS {
		params.push('&');
		params.push_str(key);
		params.push('=');
		params.push_str(value);
	}
	url.set_query(Some(&params));

	Ok(url)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn query(title: &str, location: &str) -> SearchQuery {
		SearchQuery::from_raw(title, location).expect("valid query")
	}

	#[test]
	fn encodes_like_encode_uri_component() {
		assert_eq!(
			encode_component("Software Engineer jobs in Raleigh, NC"),
			"Software%20Engineer%20jobs%20in%20Raleigh%2C%20NC"
		);
		assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
	}

	#[test]
	fn builds_full_search_url() {
		let url = build_url(DEFAULT_ENDPOINT, &query("Software Engineer", "Raleigh, NC"))
			.expect("url");
		assert_eq!(
			url.as_str(),
			"https://jsearch.p.rapidapi.com/search?query=Software%20Engineer%20jobs%20in%20Raleigh%2C%20NC&page=1&num_pages=1&date_posted=3days&country=us&employment_types=fulltime&radius=8"
		);
	}

	#[test]
	fn decoded_query_round_trips_through_url_parser() {
		let url = build_url(DEFAULT_ENDPOINT, &query("Nurse", "Boston, MA")).expect("url");
		let pairs: Vec<(String, String)> = url
			.query_pairs()
			.map(|(k, v)| (k.into_owned(), v.into_owned()))
			.collect();
		assert_eq!(pairs[0], ("query".into(), "Nurse jobs in Boston, MA".into()));
		assert!(pairs.contains(&("radius".into(), "8".into())));
		assert_eq!(pairs.len(), 7);
	}

	#[test]
	fn replaces_existing_query_on_custom_endpoint() {
		let url = build_url("http://127.0.0.1:8080/search?stale=1", &query("a", "b"))
			.expect("url");
		assert!(!url.as_str().contains("stale"));
		assert!(url.as_str().starts_with("http://127.0.0.1:8080/search?query=a%20jobs%20in%20b"));
	}

	#[test]
	fn rejects_invalid_endpoint() {
		let err = build_url("not a url", &query("a", "b")).unwrap_err();
		assert!(matches!(err, SearchError::Url(_)));
	}
}
