//! Session journey simulation.
//!
//! A journey is a walk over the page transition graph: from the entry page,
//! each step emits one page visit with derived engagement metrics, then
//! either terminates (bounce, terminal page, exhausted step budget, `exit`
//! transition) or moves to a sampled next page. Termination is guaranteed by
//! the step budget; cycles are otherwise allowed.

use rand::Rng;
use rand_distr::{Distribution, Exp, Gamma};

use crate::catalog::{CONVERSION_TYPES, EXIT, PageCatalog, TERMINAL_PAGE};
use crate::error::GenError;
use crate::generators::profile::UserType;
use crate::sampler::{pick_uniform, pick_weighted};

/// Mean session duration in minutes for the exponential duration draw.
const SESSION_DURATION_MEAN_MINUTES: f64 = 8.0;

/// One page view with its derived metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct PageVisit {
    pub page_visited: String,
    pub page_title: String,
    pub time_on_page_seconds: u32,
    pub scroll_depth_percent: u8,
    pub clicks_count: u8,
    pub page_load_time_ms: u32,
    pub engagement_score: f64,
    pub is_bounce: bool,
    pub is_converted: bool,
    pub conversion_type: String,
}

/// Walks one session through the page graph.
pub struct JourneyWalker<'a> {
    pages: &'a PageCatalog,
}

impl<'a> JourneyWalker<'a> {
    pub fn new(pages: &'a PageCatalog) -> Self {
        Self { pages }
    }

    /// Simulates one session starting at `entry_page`. Always emits at least
    /// one visit; fails fast if the walk reaches an undefined page.
    pub fn walk(
        &self,
        entry_page: &str,
        tech_affinity: f64,
        user_type: UserType,
        rng: &mut impl Rng,
    ) -> Result<Vec<PageVisit>, GenError> {
        let duration = Exp::new(1.0 / SESSION_DURATION_MEAN_MINUTES).unwrap();
        let session_minutes = duration.sample(rng).round().max(1.0) as u64;
        let max_steps = rng.gen_range(1..=session_minutes.min(8));

        let mut visits = Vec::new();
        let mut current = entry_page.to_string();

        for step in 0..max_steps {
            let page = self.pages.get(&current)?;

            let time_on_page = sample_time_on_page(page.avg_time_on_page_seconds, rng);
            let scroll_depth = sample_scroll_depth(time_on_page, tech_affinity, rng);
            let clicks = sample_clicks(page.path, rng)?;
            let page_load_time = sample_page_load_time(rng);
            let engagement_score =
                engagement_score(time_on_page, scroll_depth, clicks, tech_affinity, rng);

            let is_bounce = step == 0 && rng.r#gen::<f64>() < page.bounce_probability;

            let conversion_probability =
                page.conversion_probability * user_type.conversion_multiplier();
            let is_converted = rng.r#gen::<f64>() < conversion_probability;
            let conversion_type = if is_converted {
                pick_uniform(&CONVERSION_TYPES, rng)?.to_string()
            } else {
                String::new()
            };

            visits.push(PageVisit {
                page_visited: page.path.to_string(),
                page_title: page.title.to_string(),
                time_on_page_seconds: time_on_page,
                scroll_depth_percent: scroll_depth,
                clicks_count: clicks,
                page_load_time_ms: page_load_time,
                engagement_score,
                is_bounce,
                is_converted,
                conversion_type,
            });

            if is_bounce || page.path == TERMINAL_PAGE {
                break;
            }

            let next = pick_weighted(&page.transitions, |(_, w)| *w, rng)?.0;
            if next == EXIT {
                break;
            }
            current = next.to_string();
        }

        Ok(visits)
    }
}

/// Gamma-distributed dwell time around the page's average, floored at 10 s.
fn sample_time_on_page(avg_seconds: f64, rng: &mut impl Rng) -> u32 {
    let gamma = Gamma::new(2.0, avg_seconds / 2.0).unwrap();
    (gamma.sample(rng) as u32).max(10)
}

/// Scroll depth banded by dwell time, then shifted by tech affinity.
fn sample_scroll_depth(time_on_page: u32, tech_affinity: f64, rng: &mut impl Rng) -> u8 {
    let base: i32 = if time_on_page < 30 {
        rng.gen_range(20..=50)
    } else if time_on_page < 60 {
        rng.gen_range(40..=75)
    } else {
        rng.gen_range(60..=100)
    };

    let adjusted = base + ((tech_affinity - 0.75) * 20.0) as i32;
    adjusted.clamp(0, 100) as u8
}

/// Click counts differ by page intent: the contact form always gets at least
/// one, commercial pages more than content pages.
fn sample_clicks(path: &str, rng: &mut impl Rng) -> Result<u8, GenError> {
    let table: &[(u8, f64)] = if path == "/contact" {
        &[(1, 0.3), (2, 0.4), (3, 0.2), (4, 0.1)]
    } else if path == "/pricing" || path == "/products/chatbot-solutions" {
        &[(0, 0.2), (1, 0.4), (2, 0.3), (3, 0.1)]
    } else {
        &[(0, 0.5), (1, 0.4), (2, 0.1)]
    };

    Ok(pick_weighted(table, |(_, w)| *w, rng)?.0)
}

/// Load times with slow and fast outlier branches, checked in that order.
fn sample_page_load_time(rng: &mut impl Rng) -> u32 {
    if rng.r#gen::<f64>() < 0.05 {
        rng.gen_range(3000..=8000)
    } else if rng.r#gen::<f64>() < 0.1 {
        rng.gen_range(200..=600)
    } else {
        rng.gen_range(700..=2500)
    }
}

/// Average of four normalized engagement factors, scaled to a 1-10 score.
fn engagement_score(
    time_on_page: u32,
    scroll_depth: u8,
    clicks: u8,
    tech_affinity: f64,
    rng: &mut impl Rng,
) -> f64 {
    let factors = [
        time_on_page as f64 / 60.0,
        scroll_depth as f64 / 100.0,
        clicks as f64 / 3.0,
        tech_affinity,
    ];
    let base = factors.iter().sum::<f64>() / factors.len() as f64;

    let score = (base * 10.0 + rng.gen_range(-1.0..1.0)).clamp(1.0, 10.0);
    (score * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn walk_many(
        entry: &str,
        tech_affinity: f64,
        user_type: UserType,
        seed: u64,
        runs: usize,
    ) -> Vec<Vec<PageVisit>> {
        let catalog = PageCatalog::builtin();
        let walker = JourneyWalker::new(&catalog);
        let mut rng = StdRng::seed_from_u64(seed);
        (0..runs)
            .map(|_| walker.walk(entry, tech_affinity, user_type, &mut rng).unwrap())
            .collect()
    }

    #[test]
    fn test_every_journey_has_at_least_one_visit() {
        for journey in walk_many("/", 0.75, UserType::Casual, 1, 300) {
            assert!(!journey.is_empty());
            assert!(journey.len() <= 8);
        }
    }

    #[test]
    fn test_contact_entry_emits_exactly_one_record() {
        for journey in walk_many("/contact", 0.8, UserType::Buyer, 2, 100) {
            assert_eq!(journey.len(), 1);
            assert_eq!(journey[0].page_visited, "/contact");
        }
    }

    #[test]
    fn test_pricing_scenario_first_record() {
        let journeys = walk_many("/pricing", 0.9, UserType::Buyer, 3, 50);
        for journey in journeys {
            assert_eq!(journey[0].page_visited, "/pricing");
            assert_eq!(journey[0].page_title, "Pricing & Plans - eGain");
        }
    }

    #[test]
    fn test_metric_ranges() {
        for journey in walk_many("/", 0.95, UserType::Evaluator, 4, 300) {
            for visit in journey {
                assert!(visit.time_on_page_seconds >= 10);
                assert!(visit.scroll_depth_percent <= 100);
                assert!(visit.clicks_count <= 4);
                assert!((200..=8000).contains(&visit.page_load_time_ms));
                assert!((1.0..=10.0).contains(&visit.engagement_score));
            }
        }
    }

    #[test]
    fn test_bounce_only_on_first_visit() {
        for journey in walk_many("/blog/ai-customer-service-trends", 0.7, UserType::Casual, 5, 300)
        {
            for (step, visit) in journey.iter().enumerate() {
                if visit.is_bounce {
                    assert_eq!(step, 0, "bounce on step {step}");
                }
            }
        }
    }

    #[test]
    fn test_bounced_journey_ends_immediately() {
        for journey in walk_many("/", 0.7, UserType::Casual, 6, 300) {
            if journey[0].is_bounce {
                assert_eq!(journey.len(), 1);
            }
        }
    }

    #[test]
    fn test_conversion_type_coupling() {
        for journey in walk_many("/resources/whitepapers", 0.8, UserType::Buyer, 7, 300) {
            for visit in journey {
                if visit.is_converted {
                    assert!(CONVERSION_TYPES.contains(&visit.conversion_type.as_str()));
                } else {
                    assert!(visit.conversion_type.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_unknown_entry_page_fails_fast() {
        let catalog = PageCatalog::builtin();
        let walker = JourneyWalker::new(&catalog);
        let mut rng = StdRng::seed_from_u64(8);

        let result = walker.walk("/not-a-page", 0.8, UserType::Casual, &mut rng);
        assert_eq!(
            result.unwrap_err(),
            GenError::MissingPageDefinition("/not-a-page".to_string())
        );
    }

    #[test]
    fn test_walks_are_deterministic() {
        let a = walk_many("/", 0.8, UserType::Researcher, 9, 50);
        let b = walk_many("/", 0.8, UserType::Researcher, 9, 50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_contact_clicks_never_zero() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..200 {
            assert!(sample_clicks("/contact", &mut rng).unwrap() >= 1);
        }
    }
}
