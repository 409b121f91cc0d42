//! Environment-driven scan settings

use crate::overlay::OutlineStyle;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Registry file used when neither a flag nor `PRODSCAN_REGISTRY` names one
pub const DEFAULT_REGISTRY_PATH: &str = "scanprods.json";

fn parse_env_u32(name: &str) -> Option<u32> {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
}

fn parse_env_rgb(name: &str) -> Option<[u8; 3]> {
    std::env::var(name).ok().and_then(|v| parse_rgb(&v))
}

/// Parse `"r,g,b"` into a color
pub fn parse_rgb(value: &str) -> Option<[u8; 3]> {
    let mut parts = value.split(',').map(|p| p.trim().parse::<u8>());
    let rgb = [
        parts.next()?.ok()?,
        parts.next()?.ok()?,
        parts.next()?.ok()?,
    ];
    if parts.next().is_some() {
        return None;
    }
    Some(rgb)
}

/// Settings shared by the still, live and batch paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanConfig {
    /// Downscale still images whose longest side exceeds this
    pub max_dim: Option<u32>,
    /// Outline drawn around symbols in live frames
    pub outline: OutlineStyle,
}

impl ScanConfig {
    /// Read settings from the environment, falling back to defaults
    ///
    /// - `PRODSCAN_MAX_DIM`: `0` or unset disables downscaling
    /// - `PRODSCAN_OUTLINE_THICKNESS`: clamped to 1..=16
    /// - `PRODSCAN_OUTLINE_COLOR`: `r,g,b`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_dim: parse_env_u32("PRODSCAN_MAX_DIM").filter(|&d| d > 0),
            outline: OutlineStyle {
                color: parse_env_rgb("PRODSCAN_OUTLINE_COLOR").unwrap_or(defaults.outline.color),
                thickness: parse_env_u32("PRODSCAN_OUTLINE_THICKNESS")
                    .map(|t| t.clamp(1, 16))
                    .unwrap_or(defaults.outline.thickness),
            },
        }
    }

    /// Process-wide settings, read from the environment once
    pub fn global() -> &'static ScanConfig {
        static CONFIG: OnceLock<ScanConfig> = OnceLock::new();
        CONFIG.get_or_init(Self::from_env)
    }
}

/// Registry path: explicit value, then `PRODSCAN_REGISTRY`, then the default
pub fn registry_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os("PRODSCAN_REGISTRY").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REGISTRY_PATH))
}
