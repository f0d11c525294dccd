//! Site page model and transition graph.
//!
//! Pages form a small Markov-style graph: each page carries a weighted
//! transition table whose targets are other page paths or the synthetic
//! [`EXIT`] state. The catalog is built once and validated for referential
//! closure before any journey runs.

use crate::error::GenError;

/// Synthetic transition target that ends a journey.
pub const EXIT: &str = "exit";

/// Reaching this page ends the journey after its record is emitted.
pub const TERMINAL_PAGE: &str = "/contact";

/// Static description of one site page.
#[derive(Debug, Clone)]
pub struct PageSpec {
    pub path: &'static str,
    pub title: &'static str,
    pub conversion_probability: f64,
    pub avg_time_on_page_seconds: f64,
    pub bounce_probability: f64,
    /// Weighted next steps; targets are page paths or [`EXIT`].
    pub transitions: Vec<(&'static str, f64)>,
}

/// Immutable, closure-checked collection of pages.
#[derive(Debug, Clone)]
pub struct PageCatalog {
    pages: Vec<PageSpec>,
}

impl PageCatalog {
    /// Builds a catalog, verifying that every transition target except
    /// [`EXIT`] is itself a defined page.
    pub fn new(pages: Vec<PageSpec>) -> Result<Self, GenError> {
        let catalog = Self { pages };
        catalog.check_closure()?;
        Ok(catalog)
    }

    /// The built-in site model.
    pub fn builtin() -> Self {
        Self::new(default_pages()).expect("builtin page catalog is closed")
    }

    pub fn get(&self, path: &str) -> Result<&PageSpec, GenError> {
        self.pages
            .iter()
            .find(|p| p.path == path)
            .ok_or_else(|| GenError::MissingPageDefinition(path.to_string()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pages.iter().map(|p| p.path)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn check_closure(&self) -> Result<(), GenError> {
        for page in &self.pages {
            for (target, _) in &page.transitions {
                if *target != EXIT && self.pages.iter().all(|p| p.path != *target) {
                    return Err(GenError::MissingPageDefinition(target.to_string()));
                }
            }
        }
        Ok(())
    }
}

/// Entry-page candidates per UTM source; unmapped sources land on the
/// homepage.
pub fn entry_pages(utm_source: &str) -> &'static [&'static str] {
    match utm_source {
        "direct" => &["/"],
        "google" => &["/", "/pricing", "/products/chatbot-solutions"],
        "bing" => &["/", "/products/customer-engagement"],
        "linkedin" => &["/solutions/enterprise", "/about/careers"],
        "newsletter" => &["/blog/ai-customer-service-trends", "/resources/whitepapers"],
        "twitter" => &["/blog/ai-customer-service-trends"],
        "facebook" => &["/"],
        _ => &["/"],
    }
}

fn default_pages() -> Vec<PageSpec> {
    vec![
        PageSpec {
            path: "/",
            title: "eGain - Customer Engagement Platform",
            conversion_probability: 0.02,
            avg_time_on_page_seconds: 45.0,
            bounce_probability: 0.3,
            transitions: vec![
                ("/pricing", 0.25),
                ("/products/chatbot-solutions", 0.2),
                ("/solutions/financial-services", 0.15),
                ("/products/customer-engagement", 0.15),
                ("/about/careers", 0.1),
                ("/contact", 0.05),
                (EXIT, 0.1),
            ],
        },
        PageSpec {
            path: "/pricing",
            title: "Pricing & Plans - eGain",
            conversion_probability: 0.15,
            avg_time_on_page_seconds: 120.0,
            bounce_probability: 0.15,
            transitions: vec![
                ("/contact", 0.4),
                ("/products/chatbot-solutions", 0.2),
                ("/", 0.15),
                ("/solutions/enterprise", 0.1),
                (EXIT, 0.15),
            ],
        },
        PageSpec {
            path: "/products/chatbot-solutions",
            title: "AI Chatbot Solutions - eGain",
            conversion_probability: 0.08,
            avg_time_on_page_seconds: 90.0,
            bounce_probability: 0.2,
            transitions: vec![
                ("/pricing", 0.3),
                ("/case-studies/bank-of-america", 0.25),
                ("/contact", 0.2),
                ("/", 0.1),
                (EXIT, 0.15),
            ],
        },
        PageSpec {
            path: "/solutions/financial-services",
            title: "Financial Services Customer Engagement - eGain",
            conversion_probability: 0.12,
            avg_time_on_page_seconds: 105.0,
            bounce_probability: 0.18,
            transitions: vec![
                ("/case-studies/bank-of-america", 0.35),
                ("/pricing", 0.25),
                ("/contact", 0.2),
                ("/", 0.1),
                (EXIT, 0.1),
            ],
        },
        PageSpec {
            path: "/resources/whitepapers",
            title: "Free Whitepapers & Resources - eGain",
            conversion_probability: 0.25,
            avg_time_on_page_seconds: 180.0,
            bounce_probability: 0.1,
            transitions: vec![
                ("/blog/ai-customer-service-trends", 0.3),
                ("/products/customer-engagement", 0.25),
                ("/contact", 0.2),
                ("/", 0.15),
                (EXIT, 0.1),
            ],
        },
        PageSpec {
            path: "/about/careers",
            title: "Careers at eGain - Join Our Team",
            conversion_probability: 0.05,
            avg_time_on_page_seconds: 75.0,
            bounce_probability: 0.25,
            transitions: vec![("/", 0.4), ("/contact", 0.3), (EXIT, 0.3)],
        },
        PageSpec {
            path: "/products/customer-engagement",
            title: "Customer Engagement Solutions - eGain",
            conversion_probability: 0.1,
            avg_time_on_page_seconds: 95.0,
            bounce_probability: 0.2,
            transitions: vec![
                ("/pricing", 0.35),
                ("/products/chatbot-solutions", 0.2),
                ("/contact", 0.2),
                ("/", 0.15),
                (EXIT, 0.1),
            ],
        },
        PageSpec {
            path: "/solutions/enterprise",
            title: "Enterprise Customer Engagement Solutions - eGain",
            conversion_probability: 0.14,
            avg_time_on_page_seconds: 110.0,
            bounce_probability: 0.15,
            transitions: vec![
                ("/pricing", 0.4),
                ("/contact", 0.3),
                ("/case-studies/bank-of-america", 0.15),
                ("/", 0.1),
                (EXIT, 0.05),
            ],
        },
        PageSpec {
            path: "/solutions/healthcare",
            title: "Healthcare Customer Engagement Solutions - eGain",
            conversion_probability: 0.11,
            avg_time_on_page_seconds: 100.0,
            bounce_probability: 0.2,
            transitions: vec![
                ("/pricing", 0.35),
                ("/contact", 0.25),
                ("/", 0.2),
                (EXIT, 0.2),
            ],
        },
        PageSpec {
            path: "/blog/ai-customer-service-trends",
            title: "AI Customer Service Trends 2024 - eGain Blog",
            conversion_probability: 0.03,
            avg_time_on_page_seconds: 210.0,
            bounce_probability: 0.4,
            transitions: vec![
                ("/resources/whitepapers", 0.3),
                ("/products/chatbot-solutions", 0.25),
                ("/", 0.2),
                (EXIT, 0.25),
            ],
        },
        PageSpec {
            path: "/case-studies/bank-of-america",
            title: "Bank of America Case Study - eGain",
            conversion_probability: 0.18,
            avg_time_on_page_seconds: 150.0,
            bounce_probability: 0.12,
            transitions: vec![
                ("/contact", 0.4),
                ("/pricing", 0.3),
                ("/solutions/financial-services", 0.15),
                ("/", 0.1),
                (EXIT, 0.05),
            ],
        },
        PageSpec {
            path: "/products/knowledge-management",
            title: "Knowledge Management Solutions - eGain",
            conversion_probability: 0.09,
            avg_time_on_page_seconds: 85.0,
            bounce_probability: 0.22,
            transitions: vec![
                ("/pricing", 0.3),
                ("/contact", 0.25),
                ("/", 0.2),
                (EXIT, 0.25),
            ],
        },
        PageSpec {
            path: "/contact",
            title: "Contact Us - eGain",
            conversion_probability: 0.35,
            avg_time_on_page_seconds: 60.0,
            bounce_probability: 0.05,
            transitions: vec![(EXIT, 1.0)],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_closed() {
        let catalog = PageCatalog::builtin();
        assert_eq!(catalog.len(), 13);

        for path in catalog.paths() {
            assert!(catalog.get(path).is_ok());
        }
    }

    #[test]
    fn test_missing_transition_target_rejected_at_build() {
        let pages = vec![PageSpec {
            path: "/",
            title: "Home",
            conversion_probability: 0.1,
            avg_time_on_page_seconds: 30.0,
            bounce_probability: 0.2,
            transitions: vec![("/nowhere", 0.5), (EXIT, 0.5)],
        }];

        assert_eq!(
            PageCatalog::new(pages).unwrap_err(),
            GenError::MissingPageDefinition("/nowhere".to_string())
        );
    }

    #[test]
    fn test_unknown_page_lookup_fails_fast() {
        let catalog = PageCatalog::builtin();
        assert_eq!(
            catalog.get("/no-such-page").unwrap_err(),
            GenError::MissingPageDefinition("/no-such-page".to_string())
        );
    }

    #[test]
    fn test_contact_only_exits() {
        let catalog = PageCatalog::builtin();
        let contact = catalog.get(TERMINAL_PAGE).unwrap();
        assert_eq!(contact.transitions, vec![(EXIT, 1.0)]);
    }

    #[test]
    fn test_entry_pages_fall_back_to_homepage() {
        assert_eq!(entry_pages("direct"), &["/"]);
        assert_eq!(entry_pages("linkedin").len(), 2);
        assert_eq!(entry_pages("some-unknown-source"), &["/"]);
    }

    #[test]
    fn test_entry_pages_exist_in_catalog() {
        let catalog = PageCatalog::builtin();
        for source in [
            "direct",
            "google",
            "bing",
            "linkedin",
            "newsletter",
            "twitter",
            "facebook",
        ] {
            for path in entry_pages(source) {
                assert!(catalog.get(path).is_ok(), "{path} missing for {source}");
            }
        }
    }
}
