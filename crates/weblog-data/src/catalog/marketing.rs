//! Marketing attribution model: UTM sources, referrers, conversion types.

/// A traffic source with its allowed mediums and campaigns. Direct traffic
/// carries empty medium/campaign tags.
#[derive(Debug, Clone)]
pub struct UtmSource {
    pub name: &'static str,
    pub weight: f64,
    pub mediums: Vec<&'static str>,
    pub campaigns: Vec<&'static str>,
}

/// The four recorded conversion events.
pub const CONVERSION_TYPES: [&str; 4] = [
    "whitepaper_download",
    "contact_form",
    "demo_request",
    "newsletter_signup",
];

pub fn default_sources() -> Vec<UtmSource> {
    vec![
        UtmSource {
            name: "direct",
            weight: 0.4,
            mediums: vec![""],
            campaigns: vec![""],
        },
        UtmSource {
            name: "google",
            weight: 0.25,
            mediums: vec!["organic", "cpc", "email"],
            campaigns: vec!["brand_search", "sem_spain", "brand_awareness", "q1_promo"],
        },
        UtmSource {
            name: "bing",
            weight: 0.1,
            mediums: vec!["organic", "cpc"],
            campaigns: vec!["brand_search", "lead_gen_q1"],
        },
        UtmSource {
            name: "linkedin",
            weight: 0.1,
            mediums: vec!["social", "paid"],
            campaigns: vec!["brand_awareness", "lead_gen_q1"],
        },
        UtmSource {
            name: "newsletter",
            weight: 0.08,
            mediums: vec!["email"],
            campaigns: vec!["march_newsletter", "q1_promo"],
        },
        UtmSource {
            name: "twitter",
            weight: 0.04,
            mediums: vec!["social"],
            campaigns: vec!["brand_awareness"],
        },
        UtmSource {
            name: "facebook",
            weight: 0.03,
            mediums: vec!["social", "paid"],
            campaigns: vec!["brand_awareness", "lead_gen_q1"],
        },
    ]
}

/// Referrer distribution. Deliberately independent of the UTM source drawn
/// for a session; the feed tolerates the mismatch.
pub fn default_referrers() -> Vec<(&'static str, f64)> {
    vec![
        ("", 0.4),
        ("https://www.google.com/", 0.2),
        ("https://www.bing.com/", 0.1),
        ("https://www.linkedin.com/company/egain", 0.08),
        ("https://www.google.com/search?q=customer+engagement+software", 0.07),
        ("https://www.google.com/search?q=ai+customer+service+trends+2024", 0.05),
        ("https://t.co/abc123", 0.03),
        ("https://www.egain.com/blog/ai-customer-service-trends", 0.04),
        ("https://www.egain.com/solutions/financial-services", 0.02),
        ("https://www.egain.com/", 0.01),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_are_well_formed() {
        let sources = default_sources();
        assert_eq!(sources.len(), 7);

        let total: f64 = sources.iter().map(|s| s.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);

        for source in &sources {
            assert!(!source.mediums.is_empty(), "{} has no mediums", source.name);
            assert!(
                !source.campaigns.is_empty(),
                "{} has no campaigns",
                source.name
            );
        }
    }

    #[test]
    fn test_direct_traffic_has_empty_tags() {
        let sources = default_sources();
        let direct = sources.iter().find(|s| s.name == "direct").unwrap();
        assert_eq!(direct.mediums, vec![""]);
        assert_eq!(direct.campaigns, vec![""]);
    }

    #[test]
    fn test_referrer_weights_sum_to_one() {
        let total: f64 = default_referrers().iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
