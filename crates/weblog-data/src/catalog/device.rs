//! Device, browser, and operating-system traffic model.

use serde::{Deserialize, Serialize};

/// Returned when no user-agent template exists for a device/browser pair.
pub const FALLBACK_USER_AGENT: &str = "Mozilla/5.0 (Unknown)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Desktop,
    Mobile,
    Tablet,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "desktop",
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrowserSpec {
    pub name: &'static str,
    pub weight: f64,
    pub versions: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct OsSpec {
    pub name: &'static str,
    pub weight: f64,
}

/// One device class with everything needed to synthesize a plausible client.
#[derive(Debug, Clone)]
pub struct DeviceClass {
    pub device_type: DeviceType,
    /// Traffic share before tech-affinity adjustment.
    pub base_weight: f64,
    pub browsers: Vec<BrowserSpec>,
    pub operating_systems: Vec<OsSpec>,
    pub screen_resolutions: Vec<&'static str>,
    pub viewport_sizes: Vec<&'static str>,
}

fn browser(name: &'static str, weight: f64, versions: Vec<&'static str>) -> BrowserSpec {
    BrowserSpec {
        name,
        weight,
        versions,
    }
}

pub fn default_devices() -> Vec<DeviceClass> {
    vec![
        DeviceClass {
            device_type: DeviceType::Desktop,
            base_weight: 0.65,
            browsers: vec![
                browser("Chrome", 0.6, vec!["91.0.4472.124", "92.0.4515.107", "93.0.4577.82"]),
                browser("Firefox", 0.15, vec!["89.0", "90.0", "91.0"]),
                browser("Safari", 0.12, vec!["14.1.1", "14.1.2", "15.0"]),
                browser("Edge", 0.13, vec!["91.0.864.59", "92.0.902.67", "93.0.961.38"]),
            ],
            operating_systems: vec![
                OsSpec { name: "Windows 10", weight: 0.7 },
                OsSpec { name: "macOS 11.4", weight: 0.25 },
                OsSpec { name: "Ubuntu 20.04", weight: 0.05 },
            ],
            screen_resolutions: vec!["1920x1080", "1366x768", "1440x900", "2560x1440", "1600x900"],
            viewport_sizes: vec!["1400x900", "1366x768", "1200x800", "1440x766", "1600x900"],
        },
        DeviceClass {
            device_type: DeviceType::Mobile,
            base_weight: 0.28,
            browsers: vec![
                browser("Mobile Safari", 0.5, vec!["14.1.1", "14.1.2", "15.0"]),
                browser(
                    "Chrome Mobile",
                    0.4,
                    vec!["91.0.4472.120", "92.0.4515.115", "93.0.4577.62"],
                ),
                browser("Firefox Mobile", 0.1, vec!["89.0", "90.0", "91.0"]),
            ],
            operating_systems: vec![
                OsSpec { name: "iOS 14.6", weight: 0.5 },
                OsSpec { name: "Android 11", weight: 0.4 },
                OsSpec { name: "iOS 15.0", weight: 0.1 },
            ],
            screen_resolutions: vec!["375x812", "414x896", "390x844", "412x915", "360x800"],
            viewport_sizes: vec!["375x667", "414x736", "390x664", "412x774", "360x640"],
        },
        DeviceClass {
            device_type: DeviceType::Tablet,
            base_weight: 0.07,
            browsers: vec![
                browser("Mobile Safari", 0.7, vec!["14.1.1", "14.1.2", "15.0"]),
                browser("Chrome Mobile", 0.3, vec!["91.0.4472.120", "92.0.4515.115"]),
            ],
            operating_systems: vec![
                OsSpec { name: "iOS 14.6", weight: 0.6 },
                OsSpec { name: "Android 11", weight: 0.4 },
            ],
            screen_resolutions: vec!["834x1194", "1024x768", "800x1280", "768x1024"],
            viewport_sizes: vec!["834x1053", "1024x704", "800x1205", "768x954"],
        },
    ]
}

/// Synthesizes a user-agent string for a device/browser pair, substituting
/// the OS and version tokens. Returns `None` for unknown combinations; the
/// caller falls back to [`FALLBACK_USER_AGENT`].
pub fn user_agent(
    device_type: DeviceType,
    browser: &str,
    version: &str,
    os: &str,
) -> Option<String> {
    match (device_type, browser) {
        (DeviceType::Desktop, "Chrome") => {
            let platform = os
                .replace("macOS", "Macintosh; Intel Mac OS X")
                .replace("Ubuntu", "X11; Linux x86_64")
                .replace("Windows", "Windows NT");
            Some(format!(
                "Mozilla/5.0 ({platform}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version} Safari/537.36"
            ))
        }
        (DeviceType::Desktop, "Firefox") => {
            let platform = os
                .replace("macOS", "Macintosh")
                .replace("Ubuntu", "X11; Linux x86_64")
                .replace("Windows", "Windows NT");
            Some(format!(
                "Mozilla/5.0 ({platform}) Gecko/20100101 Firefox/{version}"
            ))
        }
        (DeviceType::Desktop, "Safari") => Some(format!(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/{version} Safari/605.1.15"
        )),
        (DeviceType::Desktop, "Edge") => Some(format!(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version} Safari/537.36 Edg/{version}"
        )),
        (DeviceType::Mobile, "Mobile Safari") => Some(format!(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 14_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/{version} Mobile/15E148 Safari/604.1"
        )),
        (DeviceType::Mobile, "Chrome Mobile") => Some(format!(
            "Mozilla/5.0 (Linux; Android 11; SM-G991B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version} Mobile Safari/537.36"
        )),
        (DeviceType::Mobile, "Firefox Mobile") => Some(format!(
            "Mozilla/5.0 (Mobile; rv:{version}) Gecko/{version} Firefox/{version}"
        )),
        (DeviceType::Tablet, "Mobile Safari") => Some(format!(
            "Mozilla/5.0 (iPad; CPU iPhone OS 14_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/{version} Mobile/15E148 Safari/604.1"
        )),
        (DeviceType::Tablet, "Chrome Mobile") => Some(format!(
            "Mozilla/5.0 (Linux; Android 11; SM-T870) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version} Safari/537.36"
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_devices_cover_all_types() {
        let devices = default_devices();
        assert_eq!(devices.len(), 3);

        let total: f64 = devices.iter().map(|d| d.base_weight).sum();
        assert!((total - 1.0).abs() < 1e-9);

        for device in &devices {
            assert!(!device.browsers.is_empty());
            assert!(!device.operating_systems.is_empty());
            assert!(!device.screen_resolutions.is_empty());
            assert!(!device.viewport_sizes.is_empty());
            for b in &device.browsers {
                assert!(!b.versions.is_empty());
            }
        }
    }

    #[test]
    fn test_desktop_chrome_user_agent() {
        let ua = user_agent(DeviceType::Desktop, "Chrome", "93.0.4577.82", "Windows 10").unwrap();
        assert!(ua.contains("Windows NT 10"));
        assert!(ua.contains("Chrome/93.0.4577.82"));
    }

    #[test]
    fn test_desktop_firefox_linux_user_agent() {
        let ua = user_agent(DeviceType::Desktop, "Firefox", "91.0", "Ubuntu 20.04").unwrap();
        assert!(ua.contains("X11; Linux x86_64"));
        assert!(ua.ends_with("Firefox/91.0"));
    }

    #[test]
    fn test_tablet_safari_uses_ipad_platform() {
        let ua = user_agent(DeviceType::Tablet, "Mobile Safari", "15.0", "iOS 14.6").unwrap();
        assert!(ua.contains("iPad"));
    }

    #[test]
    fn test_unknown_combination_yields_none() {
        assert!(user_agent(DeviceType::Tablet, "Firefox Mobile", "91.0", "Android 11").is_none());
        assert!(user_agent(DeviceType::Desktop, "Netscape", "4.0", "Windows 10").is_none());
    }

    #[test]
    fn test_every_cataloged_pair_has_a_template() {
        for device in default_devices() {
            for b in &device.browsers {
                assert!(
                    user_agent(device.device_type, b.name, b.versions[0], "Windows 10").is_some(),
                    "no template for {:?}/{}",
                    device.device_type,
                    b.name
                );
            }
        }
    }
}
