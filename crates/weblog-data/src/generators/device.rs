//! Device sampling biased by visitor tech affinity.

use rand::Rng;
use tracing::debug;

use crate::catalog::{DeviceClass, DeviceType, FALLBACK_USER_AGENT, default_devices, user_agent};
use crate::error::GenError;
use crate::sampler::{pick_uniform, pick_weighted};

/// One sampled client device, ready to stamp onto weblog records.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledDevice {
    pub device_type: DeviceType,
    /// Browser name and version, e.g. `Chrome 93.0.4577.82`.
    pub browser: String,
    pub operating_system: String,
    pub screen_resolution: String,
    pub viewport_size: String,
    pub user_agent: String,
}

pub struct DeviceGenerator {
    classes: Vec<DeviceClass>,
}

impl DeviceGenerator {
    pub fn new() -> Self {
        Self {
            classes: default_devices(),
        }
    }

    /// Samples a device. Higher tech affinity shifts weight toward desktop
    /// (the site's tech audience browses from workstations).
    pub fn sample(&self, tech_affinity: f64, rng: &mut impl Rng) -> Result<SampledDevice, GenError> {
        let class = pick_weighted(
            &self.classes,
            |c| affinity_weight(c, tech_affinity),
            rng,
        )?;

        let browser = pick_weighted(&class.browsers, |b| b.weight, rng)?;
        let version = pick_uniform(&browser.versions, rng)?;
        let os = pick_weighted(&class.operating_systems, |o| o.weight, rng)?;
        let screen_resolution = pick_uniform(&class.screen_resolutions, rng)?;
        let viewport_size = pick_uniform(&class.viewport_sizes, rng)?;

        let user_agent = user_agent(class.device_type, browser.name, version, os.name)
            .unwrap_or_else(|| {
                debug!(
                    device = class.device_type.as_str(),
                    browser = browser.name,
                    "no user-agent template, using generic fallback"
                );
                FALLBACK_USER_AGENT.to_string()
            });

        Ok(SampledDevice {
            device_type: class.device_type,
            browser: format!("{} {}", browser.name, version),
            operating_system: os.name.to_string(),
            screen_resolution: screen_resolution.to_string(),
            viewport_size: viewport_size.to_string(),
            user_agent,
        })
    }
}

impl Default for DeviceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Perturbs a class's base traffic share by tech affinity, centered at the
/// 0.75 baseline. Never negative.
fn affinity_weight(class: &DeviceClass, tech_affinity: f64) -> f64 {
    let delta = tech_affinity - 0.75;
    let adjusted = match class.device_type {
        DeviceType::Desktop => class.base_weight + delta * 0.1,
        DeviceType::Mobile | DeviceType::Tablet => class.base_weight - delta * 0.05,
    };
    adjusted.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sampled_device_fields_are_populated() {
        let generator = DeviceGenerator::new();
        let mut rng = StdRng::seed_from_u64(31);

        for _ in 0..100 {
            let device = generator.sample(0.8, &mut rng).unwrap();
            assert!(device.browser.contains(' '), "browser carries a version");
            assert!(!device.operating_system.is_empty());
            assert!(device.screen_resolution.contains('x'));
            assert!(device.viewport_size.contains('x'));
            assert!(device.user_agent.starts_with("Mozilla/5.0"));
        }
    }

    #[test]
    fn test_affinity_weight_never_negative() {
        for class in default_devices() {
            for affinity in [0.0, 0.25, 0.5, 0.75, 1.0] {
                assert!(affinity_weight(&class, affinity) >= 0.0);
            }
        }
    }

    #[test]
    fn test_high_affinity_favors_desktop() {
        let devices = default_devices();
        let desktop = devices
            .iter()
            .find(|d| d.device_type == DeviceType::Desktop)
            .unwrap();
        assert!(affinity_weight(desktop, 0.95) > affinity_weight(desktop, 0.55));
    }

    #[test]
    fn test_deterministic_with_fixed_seed() {
        let generator = DeviceGenerator::new();
        let mut a = StdRng::seed_from_u64(8);
        let mut b = StdRng::seed_from_u64(8);

        for _ in 0..20 {
            assert_eq!(
                generator.sample(0.9, &mut a),
                generator.sample(0.9, &mut b)
            );
        }
    }
}
