//! Configuration for shelfdb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a shelfdb instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all data files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── catalog.dat      (binary catalog file)
    ///     └── catalog.csv      (CSV export, written on demand)
    pub data_dir: PathBuf,

    /// File name of the binary catalog inside `data_dir`
    pub catalog_file: String,

    /// File name of the default CSV export inside `data_dir`
    pub export_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./shelfdb_data"),
            catalog_file: "catalog.dat".to_string(),
            export_file: "catalog.csv".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the binary catalog file
    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog_file)
    }

    /// Full path of the default CSV export file
    pub fn export_path(&self) -> PathBuf {
        self.data_dir.join(&self.export_file)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the binary catalog file name
    pub fn catalog_file(mut self, name: impl Into<String>) -> Self {
        self.config.catalog_file = name.into();
        self
    }

    /// Set the default CSV export file name
    pub fn export_file(mut self, name: impl Into<String>) -> Self {
        self.config.export_file = name.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
