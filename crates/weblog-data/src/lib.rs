//! Synthetic web-analytics data generation.
//!
//! This crate produces plausible visitor weblog corpora by sampling from
//! hand-authored weighted traffic models: a geographic tree, a device and
//! browser mix, marketing attribution, and a page-transition graph walked
//! once per session. All randomness flows through a single caller-supplied
//! RNG handle, so seeded runs reproduce bit-for-bit.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use weblog_data::prelude::*;
//!
//! let config = GenConfig {
//!     num_users: 50,
//!     seed: Some(12345),
//!     ..GenConfig::default()
//! };
//! let mut rng = config.rng();
//! let corpus = CorpusBuilder::new(config).build(&mut rng)?;
//!
//! println!("{} records, {} sessions", corpus.records.len(), corpus.summary.total_sessions);
//! ```

pub mod api;
pub mod builders;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generators;
pub mod sampler;

// Re-export the record model from the weblogs crate
pub use weblogs::models::{WeblogBatch, WeblogEntry};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::api::WeblogUploader;
    pub use crate::builders::{Corpus, CorpusBuilder, CorpusSummary};
    pub use crate::catalog::{DeviceType, PageCatalog};
    pub use crate::config::GenConfig;
    pub use crate::error::GenError;
    pub use crate::generators::{
        BehaviorPattern, DeviceGenerator, JourneyWalker, LocationGenerator, MarketingGenerator,
        ProfileGenerator, TimestampGenerator, UserType, VisitorProfile,
    };
    pub use crate::sampler::{pick_uniform, pick_weighted};
    pub use crate::{WeblogBatch, WeblogEntry};
}
