//! Configuration handling for the site interactions

use crate::state::FieldSpec;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Delays used by timed interactions, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Simulated processing time of a form submission
    pub submit_delay_ms: u64,
    /// How long the success notice stays visible
    pub success_notice_ms: u64,
    /// How long a pressed button stays scaled down
    pub press_release_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1000,
            success_notice_ms: 5000,
            press_release_ms: 150,
        }
    }
}

impl TimingConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn success_notice(&self) -> Duration {
        Duration::from_millis(self.success_notice_ms)
    }

    pub fn press_release(&self) -> Duration {
        Duration::from_millis(self.press_release_ms)
    }
}

/// Button labels shown by the submission simulator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub sending: String,
    /// Restored when the control had no label of its own
    pub send: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            sending: "Sending...".to_string(),
            send: "Send".to_string(),
        }
    }
}

/// Element ids and markers the page components bind to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub form: String,
    pub submit_button: String,
    pub success_notice: String,
    /// Contact form fields, in form order
    pub fields: Vec<FieldSpec>,
    pub drawer: String,
    pub overlay: String,
    pub open_button: String,
    pub close_button: String,
    pub body: String,
    pub navigation: String,
    pub phone_button: String,
    /// Class of accordion toggle buttons
    pub accordion_button_class: String,
    /// Attribute marking navigation links for active-link highlighting
    pub nav_link_attribute: String,
    /// Class of navigation items with a hover lift
    pub nav_item_class: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            form: "contactForm".to_string(),
            submit_button: "submit-button".to_string(),
            success_notice: "formSuccess".to_string(),
            fields: FieldSpec::contact_defaults(),
            drawer: "mpr-drawer".to_string(),
            overlay: "mpr-overlay".to_string(),
            open_button: "mpr-open".to_string(),
            close_button: "mpr-close".to_string(),
            body: "body".to_string(),
            navigation: "navigation".to_string(),
            phone_button: "phone-number".to_string(),
            accordion_button_class: "mpr-drawer-accordion-btn".to_string(),
            nav_link_attribute: "data-nav".to_string(),
            nav_item_class: "nav-item".to_string(),
        }
    }
}

/// User configuration for the site interactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub timing: TimingConfig,
    pub labels: LabelConfig,
    /// Scroll offset past which the navigation bar gets its raised shadow
    pub scroll_shadow_threshold: f64,
    pub layout: PageLayout,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            labels: LabelConfig::default(),
            scroll_shadow_threshold: 100.0,
            layout: PageLayout::default(),
        }
    }
}

impl SiteConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("au.com", "morningtonpeninsularoofing", "mpr-site")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config dir, or defaults
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: SiteConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the platform config dir
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save configuration to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
