//! Static traffic-model catalogs.
//!
//! These are the hand-authored distributions everything else samples from:
//! geography, site pages, devices, and marketing attribution. Built once at
//! startup, read-only afterwards.

pub mod device;
pub mod location;
pub mod marketing;
pub mod pages;

pub use device::{
    BrowserSpec, DeviceClass, DeviceType, FALLBACK_USER_AGENT, OsSpec, default_devices,
    user_agent,
};
pub use location::{City, Country, Region, default_countries};
pub use marketing::{CONVERSION_TYPES, UtmSource, default_referrers, default_sources};
pub use pages::{EXIT, PageCatalog, PageSpec, TERMINAL_PAGE, entry_pages};
