//! Corpus assembly: profiles × sessions × journeys → sorted weblog records.

use std::collections::HashMap;

use rand::Rng;
use time::Duration;
use tracing::debug;
use weblogs::models::WeblogEntry;

use crate::catalog::{PageCatalog, entry_pages};
use crate::config::GenConfig;
use crate::error::GenError;
use crate::generators::{
    Attribution, JourneyWalker, MarketingGenerator, PageVisit, ProfileGenerator,
    TimestampGenerator, VisitorProfile,
};
use crate::sampler::pick_uniform;

/// A finished corpus: the sorted record stream plus summary counts.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub records: Vec<WeblogEntry>,
    pub summary: CorpusSummary,
}

/// Aggregate counts over a generated corpus. A reporting side artifact;
/// nothing downstream depends on it.
#[derive(Debug, Clone)]
pub struct CorpusSummary {
    pub total_records: usize,
    pub total_users: usize,
    pub total_sessions: usize,
    /// (country, record count) sorted by count descending.
    pub records_by_country: Vec<(String, usize)>,
    /// (device type, record count) sorted by count descending.
    pub records_by_device: Vec<(String, usize)>,
    pub conversions: usize,
    /// The five most visited pages with their view counts.
    pub top_pages: Vec<(String, usize)>,
}

impl CorpusSummary {
    fn from_records(records: &[WeblogEntry], total_users: usize, total_sessions: usize) -> Self {
        let mut by_country: HashMap<&str, usize> = HashMap::new();
        let mut by_device: HashMap<&str, usize> = HashMap::new();
        let mut by_page: HashMap<&str, usize> = HashMap::new();
        let mut conversions = 0;

        for record in records {
            *by_country.entry(record.country.as_str()).or_default() += 1;
            *by_device.entry(record.device_type.as_str()).or_default() += 1;
            *by_page.entry(record.page_visited.as_str()).or_default() += 1;
            if record.is_converted {
                conversions += 1;
            }
        }

        let mut top_pages = sorted_counts(by_page);
        top_pages.truncate(5);

        Self {
            total_records: records.len(),
            total_users,
            total_sessions,
            records_by_country: sorted_counts(by_country),
            records_by_device: sorted_counts(by_device),
            conversions,
            top_pages,
        }
    }

    /// Conversion rate over all records, in [0, 1].
    pub fn conversion_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            self.conversions as f64 / self.total_records as f64
        }
    }
}

fn sorted_counts(counts: HashMap<&str, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    // Count descending, name ascending for a deterministic report
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

/// Drives profile and journey generation across all visitors.
pub struct CorpusBuilder {
    config: GenConfig,
    pages: PageCatalog,
    profiles: ProfileGenerator,
    marketing: MarketingGenerator,
}

impl CorpusBuilder {
    /// Creates a builder over the built-in traffic catalogs.
    pub fn new(config: GenConfig) -> Self {
        Self {
            config,
            pages: PageCatalog::builtin(),
            profiles: ProfileGenerator::new(),
            marketing: MarketingGenerator::new(),
        }
    }

    pub fn with_pages(mut self, pages: PageCatalog) -> Self {
        self.pages = pages;
        self
    }

    /// Generates the full corpus. One visitor at a time, one session at a
    /// time; the single RNG handle is the only shared state.
    pub fn build(&self, rng: &mut impl Rng) -> Result<Corpus, GenError> {
        let timestamps = TimestampGenerator::new(self.config.start_date);
        let walker = JourneyWalker::new(&self.pages);

        let mut records = Vec::new();
        let mut total_sessions = 0;

        for user_index in 1..=self.config.num_users {
            let profile = self.profiles.generate(user_index, rng)?;
            debug!(
                visitor = %profile.user_id,
                user_type = profile.user_type.as_str(),
                sessions = profile.num_sessions,
                "generated profile"
            );

            for _ in 0..profile.num_sessions {
                total_sessions += 1;
                let session_id = synthesize_session_id(rng);

                let session_start = timestamps.session_start(
                    profile.location.timezone_offset,
                    profile.behavior_pattern,
                    rng,
                )?;
                let attribution = self.marketing.sample(rng)?;
                let entry_page = pick_uniform(entry_pages(&attribution.utm_source), rng)?;

                let journey = walker.walk(
                    entry_page,
                    profile.location.tech_affinity,
                    profile.user_type,
                    rng,
                )?;

                for (step, visit) in journey.into_iter().enumerate() {
                    let timestamp = session_start
                        + Duration::minutes(2 * step as i64)
                        + Duration::seconds(rng.gen_range(0..120));
                    records.push(assemble_record(
                        timestamp,
                        &profile,
                        &session_id,
                        &attribution,
                        visit,
                    ));
                }
            }
        }

        records.sort_by_key(|r| r.timestamp);

        let summary = CorpusSummary::from_records(&records, self.config.num_users, total_sessions);
        Ok(Corpus { records, summary })
    }
}

/// `sess_` plus 16 hex characters drawn from the corpus RNG.
fn synthesize_session_id(rng: &mut impl Rng) -> String {
    let bytes: [u8; 8] = rng.r#gen();
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!("sess_{hex}")
}

fn assemble_record(
    timestamp: time::PrimitiveDateTime,
    profile: &VisitorProfile,
    session_id: &str,
    attribution: &Attribution,
    visit: PageVisit,
) -> WeblogEntry {
    WeblogEntry {
        timestamp,
        visitor_id: profile.user_id.clone(),
        session_id: session_id.to_string(),
        page_visited: visit.page_visited,
        page_title: visit.page_title,
        ip_address: profile.ip_address.clone(),
        user_agent: profile.device.user_agent.clone(),
        referrer: attribution.referrer.clone(),
        language: profile.language.clone(),
        screen_resolution: profile.device.screen_resolution.clone(),
        viewport_size: profile.device.viewport_size.clone(),
        device_type: profile.device.device_type.as_str().to_string(),
        operating_system: profile.device.operating_system.clone(),
        browser: profile.device.browser.clone(),
        country: profile.location.country.clone(),
        region: profile.location.region.clone(),
        city: profile.location.city.clone(),
        isp: profile.location.isp.clone(),
        utm_source: attribution.utm_source.clone(),
        utm_medium: attribution.utm_medium.clone(),
        utm_campaign: attribution.utm_campaign.clone(),
        page_load_time_ms: visit.page_load_time_ms,
        time_on_page_seconds: visit.time_on_page_seconds,
        scroll_depth_percent: visit.scroll_depth_percent,
        clicks_count: visit.clicks_count,
        is_bounce: visit.is_bounce,
        is_converted: visit.is_converted,
        conversion_type: visit.conversion_type,
        engagement_score: visit.engagement_score,
    }
}
