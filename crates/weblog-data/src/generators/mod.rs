//! Samplers for every facet of a visitor:
//! - [`LocationGenerator`]: country → region → city with ISP and timezone
//! - [`DeviceGenerator`]: device class, browser, OS, and user-agent
//! - [`MarketingGenerator`]: UTM attribution and referrer
//! - [`TimestampGenerator`]: diurnal/weekday-biased session starts
//! - [`ProfileGenerator`]: persistent per-visitor profiles
//! - [`JourneyWalker`]: per-session page walks with engagement metrics

pub mod device;
pub mod journey;
pub mod location;
pub mod marketing;
pub mod profile;
pub mod timestamp;

pub use device::{DeviceGenerator, SampledDevice};
pub use journey::{JourneyWalker, PageVisit};
pub use location::{LocationGenerator, SampledLocation};
pub use marketing::{Attribution, MarketingGenerator};
pub use profile::{ProfileGenerator, SessionFrequency, UserType, VisitorProfile};
pub use timestamp::{BehaviorPattern, TimestampGenerator};
