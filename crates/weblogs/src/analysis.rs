//! Geo data-quality checks for weblog feeds.
//!
//! Upstream geolocation occasionally emits nonsense locations (ocean
//! coordinates, placeholder strings). This module flags such entries so they
//! can be inspected before the feed reaches dashboards. The generator side
//! never consults these rules; this is strictly a consumer-side check.

use crate::models::WeblogEntry;

/// Substrings that indicate a non-geographic or garbage location value.
const SUSPECT_KEYWORDS: [&str; 12] = [
    "ocean",
    "sea",
    "water",
    "pacific",
    "atlantic",
    "indian",
    "arctic",
    "southern",
    "equatorial",
    "international waters",
    "to the right of japan",
    "unspecified",
];

/// Placeholder values that geolocation providers use when lookup fails.
const PLACEHOLDER_VALUES: [&str; 3] = ["n/a", "unknown", "none"];

/// Returns the entries whose country, region, or city looks like a bad
/// geolocation result. Matching is case-insensitive.
pub fn find_problematic(entries: &[WeblogEntry]) -> Vec<&WeblogEntry> {
    entries.iter().filter(|e| has_suspect_geo(e)).collect()
}

fn has_suspect_geo(entry: &WeblogEntry) -> bool {
    [&entry.country, &entry.region, &entry.city]
        .into_iter()
        .map(|field| field.to_lowercase())
        .any(|field| {
            SUSPECT_KEYWORDS.iter().any(|kw| field.contains(kw))
                || PLACEHOLDER_VALUES.iter().any(|p| field == *p)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn entry_with_geo(country: &str, region: &str, city: &str) -> WeblogEntry {
        WeblogEntry {
            timestamp: datetime!(2024-03-20 10:00:00),
            visitor_id: "visitor_001".to_string(),
            session_id: "sess_0123456789abcdef".to_string(),
            page_visited: "/".to_string(),
            page_title: "eGain - Customer Engagement Platform".to_string(),
            ip_address: "192.168.0.10".to_string(),
            user_agent: "Mozilla/5.0 (Unknown)".to_string(),
            referrer: String::new(),
            language: "en-US".to_string(),
            screen_resolution: "1920x1080".to_string(),
            viewport_size: "1400x900".to_string(),
            device_type: "desktop".to_string(),
            operating_system: "Windows 10".to_string(),
            browser: "Chrome 91.0.4472.124".to_string(),
            country: country.to_string(),
            region: region.to_string(),
            city: city.to_string(),
            isp: "Comcast Cable".to_string(),
            utm_source: "direct".to_string(),
            utm_medium: String::new(),
            utm_campaign: String::new(),
            page_load_time_ms: 900,
            time_on_page_seconds: 40,
            scroll_depth_percent: 35,
            clicks_count: 1,
            is_bounce: false,
            is_converted: false,
            conversion_type: String::new(),
            engagement_score: 4.2,
        }
    }

    #[test]
    fn test_clean_entries_pass() {
        let entries = vec![
            entry_with_geo("United States", "California", "San Francisco"),
            entry_with_geo("Germany", "Bavaria", "Munich"),
        ];
        assert!(find_problematic(&entries).is_empty());
    }

    #[test]
    fn test_flags_keyword_in_any_geo_field() {
        let entries = vec![
            entry_with_geo("Pacific Ocean", "", ""),
            entry_with_geo("Japan", "To the Right of Japan", "Tokyo"),
            entry_with_geo("United States", "California", "Underwater City"),
        ];
        assert_eq!(find_problematic(&entries).len(), 3);
    }

    #[test]
    fn test_flags_placeholder_values() {
        let entries = vec![
            entry_with_geo("N/A", "California", "San Francisco"),
            entry_with_geo("United States", "unknown", "San Francisco"),
            entry_with_geo("United States", "California", "None"),
        ];
        assert_eq!(find_problematic(&entries).len(), 3);
    }

    #[test]
    fn test_placeholder_must_match_whole_field() {
        // "Nones" contains "none" as a substring but is not a placeholder
        let entries = vec![entry_with_geo("United States", "California", "Nones")];
        assert!(find_problematic(&entries).is_empty());
    }
}
