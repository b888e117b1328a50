use crate::shared::{Result, SizingError};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Cameras above this resolution are provisioned on the high tier
pub const HIGH_RESOLUTION_THRESHOLD_MP: f64 = 5.0;

/// Resolution tier of a camera; storage and licensing differ per tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionTier {
    Low,
    High,
}

impl ResolutionTier {
    pub const ALL: [ResolutionTier; 2] = [ResolutionTier::Low, ResolutionTier::High];

    pub fn from_megapixels(megapixels: f64) -> Self {
        if megapixels <= HIGH_RESOLUTION_THRESHOLD_MP {
            ResolutionTier::Low
        } else {
            ResolutionTier::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionTier::Low => "low",
            ResolutionTier::High => "high",
        }
    }
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn malformed(entry: &str, reason: String) -> anyhow::Error {
    SizingError::MalformedCatalogEntry {
        entry: entry.to_string(),
        reason,
    }
    .into()
}

/// A camera model the gateway line is certified against
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogCamera {
    model_name: String,
    manufacturer: String,
    minimum_firmware: String,
    notes: String,
    resolution_mp: f64,
    channel_cost: u32,
}

impl CatalogCamera {
    pub fn new(
        model_name: String,
        manufacturer: String,
        minimum_firmware: String,
        notes: String,
        resolution_mp: f64,
        channel_cost: u32,
    ) -> Result<Self> {
        if !model_name.chars().any(char::is_alphanumeric) {
            return Err(malformed(
                &manufacturer,
                format!("camera model name '{}' has no letters or digits", model_name),
            ));
        }
        if !resolution_mp.is_finite() || resolution_mp < 0.0 {
            return Err(malformed(
                &model_name,
                format!("resolution must be a non-negative number, got {}", resolution_mp),
            ));
        }
        if channel_cost < 1 {
            return Err(malformed(
                &model_name,
                "channel cost must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            model_name,
            manufacturer,
            minimum_firmware,
            notes,
            resolution_mp,
            channel_cost,
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn minimum_firmware(&self) -> &str {
        &self.minimum_firmware
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn resolution_mp(&self) -> f64 {
        self.resolution_mp
    }

    pub fn channel_cost(&self) -> u32 {
        self.channel_cost
    }

    pub fn tier(&self) -> ResolutionTier {
        ResolutionTier::from_megapixels(self.resolution_mp)
    }
}

/// A gateway hardware unit with its usable channel range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GatewayUnit {
    name: String,
    storage_tb: f64,
    low_channels: u32,
    high_channels: u32,
}

impl GatewayUnit {
    pub fn new(name: String, storage_tb: f64, low_channels: u32, high_channels: u32) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(malformed(
                "<unnamed unit>",
                "gateway unit name cannot be empty".to_string(),
            ));
        }
        if !storage_tb.is_finite() || storage_tb < 0.0 {
            return Err(malformed(
                &name,
                format!("storage must be a non-negative number, got {}", storage_tb),
            ));
        }
        if high_channels == 0 {
            return Err(malformed(
                &name,
                "high_channels must be at least 1".to_string(),
            ));
        }
        if low_channels > high_channels {
            return Err(malformed(
                &name,
                format!(
                    "low_channels ({}) exceeds high_channels ({})",
                    low_channels, high_channels
                ),
            ));
        }

        Ok(Self {
            name,
            storage_tb,
            low_channels,
            high_channels,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn storage_tb(&self) -> f64 {
        self.storage_tb
    }

    pub fn low_channels(&self) -> u32 {
        self.low_channels
    }

    pub fn high_channels(&self) -> u32 {
        self.high_channels
    }
}

/// Read-only reference data: compatible cameras and gateway units.
///
/// Declaration order is significant. Fuzzy-match ties resolve to the
/// earliest camera and recommender ties to the earliest unit type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    cameras: Vec<CatalogCamera>,
    units: Vec<GatewayUnit>,
}

impl Catalog {
    pub fn new(cameras: Vec<CatalogCamera>, units: Vec<GatewayUnit>) -> Result<Self> {
        let mut seen_models = HashSet::new();
        for camera in &cameras {
            if !seen_models.insert(camera.model_name().to_lowercase()) {
                return Err(malformed(
                    camera.model_name(),
                    "duplicate camera model name".to_string(),
                ));
            }
        }

        let mut seen_units = HashSet::new();
        for unit in &units {
            if !seen_units.insert(unit.name().to_lowercase()) {
                return Err(malformed(unit.name(), "duplicate gateway unit name".to_string()));
            }
        }

        Ok(Self { cameras, units })
    }

    pub fn cameras(&self) -> &[CatalogCamera] {
        &self.cameras
    }

    pub fn units(&self) -> &[GatewayUnit] {
        &self.units
    }

    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.cameras.iter().map(CatalogCamera::model_name)
    }

    /// Case-insensitive lookup by model name
    pub fn find_camera(&self, model_name: &str) -> Option<&CatalogCamera> {
        let wanted = model_name.trim().to_lowercase();
        self.cameras
            .iter()
            .find(|camera| camera.model_name().to_lowercase() == wanted)
    }

    pub fn cameras_in_tier(&self, tier: ResolutionTier) -> impl Iterator<Item = &CatalogCamera> {
        self.cameras.iter().filter(move |camera| camera.tier() == tier)
    }

    pub fn low_tier_cameras(&self) -> impl Iterator<Item = &CatalogCamera> {
        self.cameras_in_tier(ResolutionTier::Low)
    }

    pub fn high_tier_cameras(&self) -> impl Iterator<Item = &CatalogCamera> {
        self.cameras_in_tier(ResolutionTier::High)
    }
}
