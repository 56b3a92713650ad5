//! Configuration for the backdrop terminal animation.
//!
//! Everything lives in one TOML file. The only value the app writes back is
//! the theme; the rest are tuning knobs read at start-up. Any key may be
//! left out and takes its default.

mod error;
mod paths;

use std::fs;
use std::path::Path;

use backdrop_core::Theme;
use backdrop_field::{Blob, BlobOptions, Entity, LinkStrategy, Point, PointOptions};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub use error::ConfigError;
pub use paths::{config_path, log_path};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Light or dark display theme.
    pub theme: Theme,
    /// Target frames per second.
    pub fps: u32,
    /// Fixed random seed. Unset means a new layout on every run.
    pub seed: Option<u64>,
    /// Heading shown over the point field.
    pub title: String,
    /// Line shown over the blob field.
    pub tagline: String,
    pub cell: CellConfig,
    pub points: PointConfig,
    pub blobs: BlobConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            fps: 60,
            seed: None,
            title: "portfolio".to_string(),
            tagline: "systems · networks · machine learning".to_string(),
            cell: CellConfig::default(),
            points: PointConfig::default(),
            blobs: BlobConfig::default(),
        }
    }
}

/// Logical pixel size of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellConfig {
    pub width: u16,
    pub height: u16,
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            width: 8,
            height: 16,
        }
    }
}

/// How proximity links are found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkIndex {
    #[default]
    Auto,
    Pairwise,
    Grid,
}

impl From<LinkIndex> for LinkStrategy {
    fn from(index: LinkIndex) -> Self {
        match index {
            LinkIndex::Auto => LinkStrategy::Auto,
            LinkIndex::Pairwise => LinkStrategy::Pairwise,
            LinkIndex::Grid => LinkStrategy::Grid,
        }
    }
}

/// Point field tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointConfig {
    pub count: usize,
    pub radius_min: f64,
    pub radius_max: f64,
    pub max_speed: f64,
    pub link_distance: f64,
    pub link_index: LinkIndex,
}

impl Default for PointConfig {
    fn default() -> Self {
        let options = PointOptions::default();
        Self {
            count: 90,
            radius_min: options.radius_min,
            radius_max: options.radius_max,
            max_speed: options.max_speed,
            link_distance: options.link_distance,
            link_index: LinkIndex::Auto,
        }
    }
}

impl PointConfig {
    /// Field options with the fixed colors filled in.
    pub fn options(&self) -> PointOptions {
        PointOptions {
            radius_min: self.radius_min,
            radius_max: self.radius_max,
            max_speed: self.max_speed,
            link_distance: self.link_distance,
            link_strategy: self.link_index.into(),
            ..PointOptions::default()
        }
    }
}

/// Blob field tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobConfig {
    pub count: usize,
    pub radius_min: f64,
    pub radius_max: f64,
    pub max_speed: f64,
}

impl Default for BlobConfig {
    fn default() -> Self {
        let options = BlobOptions::default();
        Self {
            count: 8,
            radius_min: options.radius_min,
            radius_max: options.radius_max,
            max_speed: options.max_speed,
        }
    }
}

impl BlobConfig {
    /// Field options with the fixed palette filled in.
    pub fn options(&self) -> BlobOptions {
        BlobOptions {
            radius_min: self.radius_min,
            radius_max: self.radius_max,
            max_speed: self.max_speed,
            ..BlobOptions::default()
        }
    }
}

impl Config {
    /// Load from the default location. Falls back to defaults (and logs
    /// why) if the file is missing, unreadable or invalid.
    pub fn load() -> Self {
        let path = match config_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("{e}; using default config");
                return Self::default();
            }
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using default config");
                Self::default()
            }
        }
    }

    /// Load and validate a config file. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the whole config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        write_file(path, &contents)
    }

    /// Reject values the fields cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if self.cell.width == 0 || self.cell.height == 0 {
            return Err(ConfigError::ZeroCellSize {
                width: self.cell.width,
                height: self.cell.height,
            });
        }
        Point::validate(&self.points.options())?;
        Blob::validate(&self.blobs.options())?;
        Ok(())
    }
}

/// Persist the theme preference into the file at `path`.
///
/// Other keys already in the file are kept. A file that does not parse is
/// left untouched and reported as an error.
pub fn save_theme(path: &Path, theme: Theme) -> Result<(), ConfigError> {
    let mut table = if path.exists() {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str::<toml::Table>(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        toml::Table::new()
    };

    let value = match theme {
        Theme::Dark => "dark",
        Theme::Light => "light",
    };
    table.insert("theme".to_string(), toml::Value::String(value.to_string()));

    let contents = toml::to_string_pretty(&table)?;
    write_file(path, &contents)?;
    debug!("saved theme {value} to {}", path.display());
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page() {
        let config = Config::default();
        assert_eq!(config.points.count, 90);
        assert_eq!(config.blobs.count, 8);
        assert_eq!(config.points.link_distance, 120.0);
        assert_eq!(config.fps, 60);
        assert_eq!(config.theme, Theme::Dark);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            theme: Theme::Light,
            seed: Some(42),
            points: PointConfig {
                count: 500,
                link_index: LinkIndex::Grid,
                ..PointConfig::default()
            },
            ..Config::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_readme_example_names_every_top_level_key() {
        let readme = include_str!("../../../README.md");
        let example = readme
            .split("```toml")
            .nth(1)
            .and_then(|rest| rest.split("```").next())
            .unwrap();
        let documented: toml::Table = toml::from_str(example).unwrap();
        let config = Config {
            seed: Some(42),
            ..Config::default()
        };
        let keys = toml::Table::try_from(&config).unwrap();

        for key in keys.keys() {
            assert!(documented.contains_key(key), "README example lacks `{key}`");
        }
        let parsed: Config = toml::from_str(example).unwrap();
        assert_eq!(parsed.tagline, Config::default().tagline);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = \"light\"\n\n[points]\ncount = 40\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.points.count, 40);
        assert_eq!(config.points.link_distance, 120.0);
        assert_eq!(config.blobs, BlobConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [not toml").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let zero_fps = Config {
            fps: 0,
            ..Config::default()
        };
        assert!(matches!(zero_fps.validate(), Err(ConfigError::ZeroFps)));

        let zero_cell = Config {
            cell: CellConfig {
                width: 0,
                height: 16,
            },
            ..Config::default()
        };
        assert!(matches!(
            zero_cell.validate(),
            Err(ConfigError::ZeroCellSize { .. })
        ));

        let negative_link = Config {
            points: PointConfig {
                link_distance: -3.0,
                ..PointConfig::default()
            },
            ..Config::default()
        };
        assert!(matches!(negative_link.validate(), Err(ConfigError::Field(_))));
    }

    #[test]
    fn test_link_index_maps_to_strategy() {
        let points = PointConfig {
            link_index: LinkIndex::Pairwise,
            ..PointConfig::default()
        };
        assert_eq!(points.options().link_strategy, LinkStrategy::Pairwise);
        assert_eq!(LinkStrategy::from(LinkIndex::Grid), LinkStrategy::Grid);
    }

    #[test]
    fn test_save_theme_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "fps = 30\n\n[points]\ncount = 12\n").unwrap();

        save_theme(&path, Theme::Light).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.fps, 30);
        assert_eq!(config.points.count, 12);
    }

    #[test]
    fn test_save_theme_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backdrop").join("config.toml");

        save_theme(&path, Theme::Light).unwrap();
        save_theme(&path, Theme::Dark).unwrap();

        assert_eq!(Config::load_from(&path).unwrap().theme, Theme::Dark);
    }

    #[test]
    fn test_save_theme_leaves_broken_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "fps = = 3").unwrap();

        assert!(save_theme(&path, Theme::Light).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "fps = = 3");
    }
}
