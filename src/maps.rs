use url::Url;

/// Search endpoint the card links point at; the address rides along as the
/// `query` parameter.
const MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1";

/// Builds a Google Maps search link for a service address. The address is
/// escaped as submitted; nothing checks that it names a real place.
pub fn map_search_url(address: &str) -> String {
    let mut url = Url::parse(MAP_SEARCH_BASE).expect("static base url");
    url.query_pairs_mut().append_pair("query", address);

    url.to_string()
}
