use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Separator between platform names in [`Recommendation::platforms`]
pub const PLATFORM_DELIMITER: char = '|';

/// Everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped, as `encodeURIComponent` does
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A product suggestion as returned by the recommendation service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    /// Display name of the product
    pub product_name: String,
    /// Free-form grouping label (e.g., "Electronics")
    pub category: String,
    /// Human-readable reason the product was recommended
    pub explanation: String,
    /// Absolute or relative URL of the product image
    pub image_url: String,
    /// Platform names joined by [`PLATFORM_DELIMITER`] (e.g., "Amazon|Best Buy")
    pub platforms: String,
}

/// A search link for one platform a product is available on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformLink {
    pub platform: String,
    pub href: String,
}

/// Splits a delimited platform field into its ordered names.
///
/// Segments are kept verbatim, including empty ones, so `"Steam|"` yields
/// `["Steam", ""]`.
pub fn split_platforms(platforms: &str) -> Vec<&str> {
    platforms.split(PLATFORM_DELIMITER).collect()
}

/// Builds a search query URL for `"<product> <platform>"` against `search_base`
pub fn search_url(search_base: &Url, product_name: &str, platform: &str) -> String {
    let query = format!("{} {}", product_name, platform);
    let separator = if search_base.query().is_some() { '&' } else { '?' };
    format!(
        "{}{}q={}",
        search_base,
        separator,
        utf8_percent_encode(&query, URI_COMPONENT)
    )
}

impl Recommendation {
    /// Platform names in the order the service listed them
    pub fn platform_names(&self) -> Vec<&str> {
        split_platforms(&self.platforms)
    }

    /// One search link per platform, in platform order
    pub fn search_links(&self, search_base: &Url) -> Vec<PlatformLink> {
        self.platform_names()
            .into_iter()
            .map(|platform| PlatformLink {
                platform: platform.to_string(),
                href: search_url(search_base, &self.product_name, platform),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn google() -> Url {
        Url::parse("https://www.google.com/search").unwrap()
    }

    fn elden_ring() -> Recommendation {
        Recommendation {
            product_name: "Elden Ring".to_string(),
            category: "Games".to_string(),
            explanation: "Because you liked Dark Souls".to_string(),
            image_url: "https://img.example/elden.png".to_string(),
            platforms: "Steam|Epic".to_string(),
        }
    }

    #[test]
    fn test_split_platforms_preserves_order() {
        assert_eq!(
            split_platforms("Amazon|Best Buy|Newegg"),
            vec!["Amazon", "Best Buy", "Newegg"]
        );
    }

    #[test]
    fn test_split_platforms_single_entry() {
        assert_eq!(split_platforms("Amazon"), vec!["Amazon"]);
    }

    #[test]
    fn test_split_platforms_keeps_empty_segments() {
        assert_eq!(split_platforms(""), vec![""]);
        assert_eq!(split_platforms("Steam|"), vec!["Steam", ""]);
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = search_url(&google(), "Vintage Jacket", "Barnes & Noble");
        assert_eq!(
            url,
            "https://www.google.com/search?q=Vintage%20Jacket%20Barnes%20%26%20Noble"
        );
    }

    #[test]
    fn test_search_url_matches_uri_component_encoding() {
        assert_eq!(
            search_url(&google(), "Elden Ring", "Steam"),
            "https://www.google.com/search?q=Elden%20Ring%20Steam"
        );
        assert_eq!(
            search_url(&google(), "Dick's (Pro) Mat!", "R~E*I"),
            "https://www.google.com/search?q=Dick's%20(Pro)%20Mat!%20R~E*I"
        );
        assert_eq!(
            search_url(&google(), "Café", "a+b/c?"),
            "https://www.google.com/search?q=Caf%C3%A9%20a%2Bb%2Fc%3F"
        );
    }

    #[test]
    fn test_search_url_appends_to_existing_query() {
        let base = Url::parse("https://search.example/?hl=en").unwrap();
        assert_eq!(
            search_url(&base, "Tent", "REI"),
            "https://search.example/?hl=en&q=Tent%20REI"
        );
    }

    #[test]
    fn test_search_links_one_per_platform() {
        let links = elden_ring().search_links(&google());

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].platform, "Steam");
        assert_eq!(
            links[0].href,
            "https://www.google.com/search?q=Elden%20Ring%20Steam"
        );
        assert_eq!(links[1].platform, "Epic");
        assert!(links[1].href.contains("Elden%20Ring%20Epic"));
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "product_name": "Smart Speaker",
            "category": "Electronics",
            "explanation": "Because you liked headphones",
            "image_url": "/img/speaker.png",
            "platforms": "Amazon|Best Buy",
            "product_id": 42
        }"#;

        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.product_name, "Smart Speaker");
        assert_eq!(rec.platform_names(), vec!["Amazon", "Best Buy"]);
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let json = r#"{
            "product_name": "Smart Speaker",
            "category": "Electronics",
            "explanation": "Because you liked headphones",
            "image_url": "/img/speaker.png"
        }"#;

        assert!(serde_json::from_str::<Recommendation>(json).is_err());
    }
}
