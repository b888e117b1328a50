use crate::ports::outbound::CatalogReader;
use crate::shared::{Result, SizingError};
use crate::sizing::domain::{Catalog, CatalogCamera, GatewayUnit};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum catalog file size (10 MB)
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    cameras: Vec<CameraRecord>,
    #[serde(default)]
    units: Vec<UnitRecord>,
}

/// Integers are read signed so negative values surface as malformed
/// entries instead of YAML type errors.
#[derive(Debug, Deserialize)]
struct CameraRecord {
    model_name: String,
    #[serde(default)]
    manufacturer: String,
    #[serde(default)]
    minimum_firmware: String,
    #[serde(default)]
    notes: String,
    resolution_mp: f64,
    channel_cost: i64,
}

#[derive(Debug, Deserialize)]
struct UnitRecord {
    name: String,
    storage_tb: f64,
    low_channels: i64,
    high_channels: i64,
}

fn to_u32(entry: &str, field: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        SizingError::MalformedCatalogEntry {
            entry: entry.to_string(),
            reason: format!("{} must be a non-negative whole number, got {}", field, value),
        }
        .into()
    })
}

impl CameraRecord {
    fn into_camera(self) -> Result<CatalogCamera> {
        let channel_cost = to_u32(&self.model_name, "channel_cost", self.channel_cost)?;
        CatalogCamera::new(
            self.model_name,
            self.manufacturer,
            self.minimum_firmware,
            self.notes,
            self.resolution_mp,
            channel_cost,
        )
    }
}

impl UnitRecord {
    fn into_unit(self) -> Result<GatewayUnit> {
        let low_channels = to_u32(&self.name, "low_channels", self.low_channels)?;
        let high_channels = to_u32(&self.name, "high_channels", self.high_channels)?;
        GatewayUnit::new(self.name, self.storage_tb, low_channels, high_channels)
    }
}

/// YamlCatalogReader adapter for loading the catalog from a YAML file
///
/// ```yaml
/// cameras:
///   - model_name: P3245-LVE
///     manufacturer: Axis
///     minimum_firmware: "10.12"
///     resolution_mp: 2.0
///     channel_cost: 1
/// units:
///   - name: CC300-4TB
///     storage_tb: 4
///     low_channels: 1
///     high_channels: 10
/// ```
pub struct YamlCatalogReader {
    path: PathBuf,
}

impl YamlCatalogReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses and validates a catalog document
    ///
    /// # Errors
    /// - Invalid YAML or missing required fields
    /// - Any entry violating a catalog invariant (`MalformedCatalogEntry`)
    pub fn parse_catalog(content: &str) -> Result<Catalog> {
        let document: CatalogDocument = serde_yaml_ng::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog YAML: {}", e))?;

        let cameras = document
            .cameras
            .into_iter()
            .map(CameraRecord::into_camera)
            .collect::<Result<Vec<_>>>()?;
        let units = document
            .units
            .into_iter()
            .map(UnitRecord::into_unit)
            .collect::<Result<Vec<_>>>()?;

        Catalog::new(cameras, units)
    }

    /// Safely read the catalog file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self) -> Result<String> {
        let path = &self.path;
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read catalog metadata: {}", e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read catalog: {}", e))
    }

    fn read_error(&self, error: anyhow::Error) -> anyhow::Error {
        SizingError::CatalogReadError {
            path: self.path.clone(),
            details: error.to_string(),
        }
        .into()
    }
}

impl CatalogReader for YamlCatalogReader {
    fn read_catalog(&self) -> Result<Catalog> {
        let content = self.safe_read_file().map_err(|e| self.read_error(e))?;

        let catalog = Self::parse_catalog(&content).map_err(|e| {
            match e.downcast_ref::<SizingError>() {
                Some(SizingError::MalformedCatalogEntry { .. }) => e,
                _ => self.read_error(e),
            }
        })?;

        log::info!(
            "Loaded catalog from {}: {} camera(s), {} unit type(s)",
            self.path.display(),
            catalog.cameras().len(),
            catalog.units().len()
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID_CATALOG: &str = r#"
cameras:
  - model_name: Dome-4MP
    manufacturer: Acme
    minimum_firmware: "5.5.0"
    resolution_mp: 4.0
    channel_cost: 1
  - model_name: AV12176DN
    manufacturer: Arecont
    notes: "Multi-sensor; needs one channel per sensor"
    resolution_mp: 12.0
    channel_cost: 4
units:
  - name: CC300-4TB
    storage_tb: 4
    low_channels: 1
    high_channels: 10
"#;

    fn malformed_entry(err: &anyhow::Error) -> Option<&str> {
        match err.downcast_ref::<SizingError>() {
            Some(SizingError::MalformedCatalogEntry { entry, .. }) => Some(entry),
            _ => None,
        }
    }

    #[test]
    fn test_parse_valid_catalog() {
        let catalog = YamlCatalogReader::parse_catalog(VALID_CATALOG).unwrap();
        assert_eq!(catalog.cameras().len(), 2);
        assert_eq!(catalog.units().len(), 1);

        let camera = catalog.find_camera("av12176dn").unwrap();
        assert_eq!(camera.manufacturer(), "Arecont");
        assert_eq!(camera.minimum_firmware(), "");
        assert_eq!(camera.channel_cost(), 4);

        let unit = &catalog.units()[0];
        assert_eq!(unit.name(), "CC300-4TB");
        assert_eq!(unit.storage_tb(), 4.0);
        assert_eq!((unit.low_channels(), unit.high_channels()), (1, 10));
    }

    #[test]
    fn test_zero_channel_cost_is_malformed() {
        let content = r#"
cameras:
  - model_name: Dome-4MP
    resolution_mp: 4.0
    channel_cost: 0
"#;
        let err = YamlCatalogReader::parse_catalog(content).unwrap_err();
        assert_eq!(malformed_entry(&err), Some("Dome-4MP"));
    }

    #[test]
    fn test_negative_channels_are_malformed() {
        let content = r#"
units:
  - name: CC300-4TB
    storage_tb: 4
    low_channels: -1
    high_channels: 10
"#;
        let err = YamlCatalogReader::parse_catalog(content).unwrap_err();
        assert_eq!(malformed_entry(&err), Some("CC300-4TB"));
        assert!(err.to_string().contains("low_channels"));
    }

    #[test]
    fn test_inverted_channel_range_is_malformed() {
        let content = r#"
units:
  - name: CC500-8TB
    storage_tb: 8
    low_channels: 25
    high_channels: 12
"#;
        let err = YamlCatalogReader::parse_catalog(content).unwrap_err();
        assert_eq!(malformed_entry(&err), Some("CC500-8TB"));
    }

    #[test]
    fn test_read_catalog_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.yml");
        fs::write(&path, VALID_CATALOG).unwrap();

        let reader = YamlCatalogReader::new(&path);
        assert_eq!(reader.path(), path.as_path());
        let catalog = reader.read_catalog().unwrap();
        assert_eq!(catalog.cameras().len(), 2);
    }

    #[test]
    fn test_read_catalog_missing_file() {
        let dir = TempDir::new().unwrap();
        let reader = YamlCatalogReader::new(dir.path().join("missing.yml"));
        let err = reader.read_catalog().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SizingError>(),
            Some(SizingError::CatalogReadError { .. })
        ));
    }

    #[test]
    fn test_read_catalog_rejects_directory() {
        let dir = TempDir::new().unwrap();
        let reader = YamlCatalogReader::new(dir.path());
        let err = reader.read_catalog().unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_read_catalog_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.yml");
        fs::write(&path, "cameras: [[[broken").unwrap();

        let err = YamlCatalogReader::new(&path).read_catalog().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SizingError>(),
            Some(SizingError::CatalogReadError { .. })
        ));
        assert!(err.to_string().contains("Failed to parse catalog YAML"));
    }

    #[test]
    fn test_read_catalog_keeps_malformed_kind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.yml");
        fs::write(
            &path,
            "cameras:\n  - model_name: Dome\n    resolution_mp: -2\n    channel_cost: 1\n",
        )
        .unwrap();

        let err = YamlCatalogReader::new(&path).read_catalog().unwrap_err();
        assert_eq!(malformed_entry(&err), Some("Dome"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_catalog_rejects_symlink() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("catalog.yml");
        fs::write(&target, VALID_CATALOG).unwrap();
        let link = dir.path().join("link.yml");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = YamlCatalogReader::new(&link).read_catalog().unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }
}
