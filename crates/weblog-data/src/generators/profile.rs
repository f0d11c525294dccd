//! Visitor profile generation.
//!
//! A profile is created once per visitor and reused across all of that
//! visitor's sessions, so location, device, and behavior stay consistent
//! within one generation run.

use rand::Rng;

use crate::error::GenError;
use crate::generators::device::{DeviceGenerator, SampledDevice};
use crate::generators::location::{LocationGenerator, SampledLocation};
use crate::generators::timestamp::BehaviorPattern;
use crate::sampler::{pick_uniform, pick_weighted};

/// Visitor intent archetype; drives session frequency and conversion odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    Researcher,
    Evaluator,
    Buyer,
    Casual,
    ReturningCustomer,
}

/// How often a user type comes back within the corpus window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFrequency {
    High,
    Medium,
    Low,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Researcher => "researcher",
            UserType::Evaluator => "evaluator",
            UserType::Buyer => "buyer",
            UserType::Casual => "casual",
            UserType::ReturningCustomer => "returning_customer",
        }
    }

    pub fn session_frequency(&self) -> SessionFrequency {
        match self {
            UserType::Researcher => SessionFrequency::High,
            UserType::Evaluator | UserType::ReturningCustomer => SessionFrequency::Medium,
            UserType::Buyer | UserType::Casual => SessionFrequency::Low,
        }
    }

    /// Scales page conversion probability. Buyers are the high-intent
    /// cohort; researchers read a lot and convert rarely.
    pub fn conversion_multiplier(&self) -> f64 {
        match self {
            UserType::Buyer => 2.0,
            UserType::Researcher => 0.5,
            _ => 1.0,
        }
    }
}

/// Traffic share per user type.
const USER_TYPE_WEIGHTS: [(UserType, f64); 5] = [
    (UserType::Researcher, 0.3),
    (UserType::Evaluator, 0.25),
    (UserType::Buyer, 0.15),
    (UserType::Casual, 0.2),
    (UserType::ReturningCustomer, 0.1),
];

/// Persistent per-visitor state for one generation run.
#[derive(Debug, Clone)]
pub struct VisitorProfile {
    pub user_id: String,
    pub user_type: UserType,
    pub behavior_pattern: BehaviorPattern,
    pub num_sessions: u32,
    pub location: SampledLocation,
    pub device: SampledDevice,
    pub ip_address: String,
    pub language: String,
}

pub struct ProfileGenerator {
    locations: LocationGenerator,
    devices: DeviceGenerator,
}

impl ProfileGenerator {
    pub fn new() -> Self {
        Self {
            locations: LocationGenerator::new(),
            devices: DeviceGenerator::new(),
        }
    }

    /// Builds the profile for visitor number `user_index` (1-based).
    pub fn generate(
        &self,
        user_index: usize,
        rng: &mut impl Rng,
    ) -> Result<VisitorProfile, GenError> {
        let user_id = format!("visitor_{user_index:03}");

        let location = self.locations.sample(rng)?;
        let user_type = pick_weighted(&USER_TYPE_WEIGHTS, |(_, w)| *w, rng)?.0;
        let device = self.devices.sample(location.tech_affinity, rng)?;

        let (num_sessions, behavior_pattern) = match user_type.session_frequency() {
            SessionFrequency::High => (rng.gen_range(8..=25), BehaviorPattern::Business),
            SessionFrequency::Medium => (
                rng.gen_range(3..=12),
                *pick_uniform(&[BehaviorPattern::Business, BehaviorPattern::Normal], rng)?,
            ),
            SessionFrequency::Low => (
                rng.gen_range(1..=6),
                *pick_uniform(&[BehaviorPattern::Normal, BehaviorPattern::Evening], rng)?,
            ),
        };

        let ip_address = synthesize_ip(&location.country, rng);
        let language = language_for_country(&location.country, rng);

        Ok(VisitorProfile {
            user_id,
            user_type,
            behavior_pattern,
            num_sessions,
            location,
            device,
            ip_address,
            language,
        })
    }
}

impl Default for ProfileGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Country-specific private-range prefix plus random host octets.
fn synthesize_ip(country: &str, rng: &mut impl Rng) -> String {
    let prefix = match country {
        "United States" | "Canada" => "192.168",
        "United Kingdom" => "10.0",
        "Germany" => "172.16",
        "Australia" => "10.1",
        "France" => "172.17",
        "Spain" => "10.2",
        _ => "192.168",
    };
    format!(
        "{prefix}.{}.{}",
        rng.gen_range(0..=255u16),
        rng.gen_range(1..=254u16)
    )
}

fn language_for_country(country: &str, rng: &mut impl Rng) -> String {
    let language = match country {
        "United States" => "en-US",
        "United Kingdom" => "en-GB",
        // Canadian traffic splits evenly between the two official languages
        "Canada" => {
            if rng.r#gen::<bool>() {
                "en-CA"
            } else {
                "fr-FR"
            }
        }
        "Australia" => "en-AU",
        "Germany" => "de-DE",
        "France" => "fr-FR",
        "Spain" => "es-ES",
        _ => "en-US",
    };
    language.to_string()
}
