use serde::{Deserialize, Serialize};

/// Viewer configuration, loadable from JSON.
///
/// Every field has a default so a partial (or empty) config file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Drawing surface size in device pixels.
    pub surface_width: f64,
    pub surface_height: f64,
    /// Latitude/longitude grid resolution.
    pub lat_lines: usize,
    pub lon_lines: usize,
    /// Explicit sphere radius; when absent, a quarter of the smaller surface
    /// dimension.
    pub radius: Option<f64>,
    /// Fixed tick rate for the frame driver.
    pub frame_rate_hz: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            surface_width: 800.0,
            surface_height: 600.0,
            lat_lines: 18,
            lon_lines: 36,
            radius: None,
            frame_rate_hz: 60.0,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(payload: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(payload).map_err(ConfigError::Parse)
    }

    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let payload = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json(&payload)
    }

    /// Sphere radius: explicit when configured, otherwise derived from the
    /// surface size.
    pub fn sphere_radius(&self) -> f64 {
        self.radius
            .unwrap_or_else(|| self.surface_width.min(self.surface_height) / 4.0)
    }

    /// Fixed per-tick delta in seconds.
    pub fn dt_s(&self) -> f64 {
        1.0 / self.frame_rate_hz
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}
