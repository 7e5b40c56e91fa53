//! Report configuration loaded from an optional YAML file.
//!
//! Every key is optional; a missing file section falls back to
//! [`ReportConfig::default`].
//!
//! ```yaml
//! brand: Rapid Recon
//! json_filename: report.json
//! html_filename: report.html
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Settings shared by the binary and the document assembler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Product name shown in the navigation, page title and footer.
    pub brand: String,
    /// File name of the structured dump inside the output directory.
    pub json_filename: String,
    /// File name of the HTML report inside the output directory.
    pub html_filename: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            brand: "Rapid Recon".to_string(),
            json_filename: "report.json".to_string(),
            html_filename: "report.html".to_string(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from `path`, or return the defaults when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    #[instrument(level = "info", skip_all)]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&raw)?;
        info!(path = %path.display(), brand = %config.brand, "Loaded configuration");
        Ok(config)
    }

    /// Path of the structured dump under `output_dir`.
    pub fn json_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.json_filename)
    }

    /// Path of the HTML report under `output_dir`.
    pub fn html_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.html_filename)
    }
}
