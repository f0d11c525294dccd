use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

/// Serde codec for weblog timestamps.
///
/// The wire format is ISO-8601 with exactly three subsecond digits and a
/// literal trailing `Z`, e.g. `2024-03-15T13:45:12.000Z`. Every consumer of
/// the feed (API, dashboards, analysis) expects this exact shape.
pub mod timestamp_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::PrimitiveDateTime;
    use time::format_description::BorrowedFormatItem;
    use time::macros::format_description;

    const FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );

    pub fn serialize<S>(timestamp: &PrimitiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = timestamp
            .format(&FORMAT)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<PrimitiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        PrimitiveDateTime::parse(&text, &FORMAT).map_err(serde::de::Error::custom)
    }
}

/// One page view within a visitor session.
///
/// This is the atomic unit of the analytics feed: static visitor/session
/// fields copied onto every row, plus per-view engagement metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeblogEntry {
    #[serde(with = "timestamp_ms")]
    pub timestamp: PrimitiveDateTime,
    pub visitor_id: String,
    pub session_id: String,
    pub page_visited: String,
    pub page_title: String,
    pub ip_address: String,
    pub user_agent: String,
    pub referrer: String,
    pub language: String,
    pub screen_resolution: String,
    pub viewport_size: String,
    pub device_type: String,
    pub operating_system: String,
    pub browser: String,
    pub country: String,
    pub region: String,
    pub city: String,
    pub isp: String,
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
    pub page_load_time_ms: u32,
    pub time_on_page_seconds: u32,
    pub scroll_depth_percent: u8,
    pub clicks_count: u8,
    pub is_bounce: bool,
    pub is_converted: bool,
    pub conversion_type: String,
    pub engagement_score: f64,
}

impl WeblogEntry {
    /// Checks the field constraints that the schema types alone cannot
    /// express. Returns a human-readable reason on the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if self.scroll_depth_percent > 100 {
            return Err(format!(
                "scroll_depth_percent {} out of range [0, 100]",
                self.scroll_depth_percent
            ));
        }
        if !(1.0..=10.0).contains(&self.engagement_score) {
            return Err(format!(
                "engagement_score {} out of range [1.0, 10.0]",
                self.engagement_score
            ));
        }
        if self.is_converted && self.conversion_type.is_empty() {
            return Err("converted entry is missing a conversion_type".to_string());
        }
        if !self.is_converted && !self.conversion_type.is_empty() {
            return Err(format!(
                "non-converted entry carries conversion_type {:?}",
                self.conversion_type
            ));
        }
        Ok(())
    }
}

/// Wire and file wrapper for a set of weblog entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeblogBatch {
    pub weblogs: Vec<WeblogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample_entry() -> WeblogEntry {
        WeblogEntry {
            timestamp: datetime!(2024-03-15 13:45:12),
            visitor_id: "visitor_001".to_string(),
            session_id: "sess_0123456789abcdef".to_string(),
            page_visited: "/pricing".to_string(),
            page_title: "Pricing & Plans - eGain".to_string(),
            ip_address: "192.168.14.27".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10; Win64; x64)".to_string(),
            referrer: "https://www.google.com/".to_string(),
            language: "en-US".to_string(),
            screen_resolution: "1920x1080".to_string(),
            viewport_size: "1400x900".to_string(),
            device_type: "desktop".to_string(),
            operating_system: "Windows 10".to_string(),
            browser: "Chrome 91.0.4472.124".to_string(),
            country: "United States".to_string(),
            region: "California".to_string(),
            city: "San Francisco".to_string(),
            isp: "Comcast Cable".to_string(),
            utm_source: "google".to_string(),
            utm_medium: "cpc".to_string(),
            utm_campaign: "brand_search".to_string(),
            page_load_time_ms: 1200,
            time_on_page_seconds: 95,
            scroll_depth_percent: 70,
            clicks_count: 2,
            is_bounce: false,
            is_converted: false,
            conversion_type: String::new(),
            engagement_score: 6.4,
        }
    }

    #[test]
    fn test_timestamp_serializes_with_milliseconds_and_z() {
        let entry = sample_entry();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["timestamp"], "2024-03-15T13:45:12.000Z");
    }

    #[test]
    fn test_timestamp_round_trip() {
        let entry = sample_entry();
        let json = serde_json::to_string(&entry).unwrap();
        let back: WeblogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_validate_accepts_well_formed_entry() {
        assert!(sample_entry().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_engagement() {
        let mut entry = sample_entry();
        entry.engagement_score = 0.4;
        assert!(entry.validate().is_err());

        entry.engagement_score = 10.5;
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_conversion_mismatch() {
        let mut entry = sample_entry();
        entry.is_converted = true;
        assert!(entry.validate().is_err());

        entry.conversion_type = "demo_request".to_string();
        assert!(entry.validate().is_ok());

        entry.is_converted = false;
        assert!(entry.validate().is_err());
    }
}
