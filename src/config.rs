//! Panel configuration persistence
//!
//! Stores the committed pane widths and the auto-open delay in
//! `~/.config/slideout/config.yaml`. This is the external configuration
//! collaborator: the dimension store reports committed widths here
//! through the [`WidthSink`] contract.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::host::{PanelSettings, WidthSink};

/// Panel configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Last committed width of the main content pane
    #[serde(default = "default_content_width")]
    pub content_width: f64,

    /// Last committed width of the slideout pane
    #[serde(default = "default_slideout_width")]
    pub slideout_width: f64,

    /// Delay before an armed auto-open fires, in milliseconds
    #[serde(default = "default_auto_open_delay_ms")]
    pub auto_open_delay_ms: u64,
}

fn default_content_width() -> f64 {
    crate::dimensions::MINIMUM_CONTENT_WIDTH
}

fn default_slideout_width() -> f64 {
    crate::dimensions::DEFAULT_SLIDEOUT_WIDTH
}

fn default_auto_open_delay_ms() -> u64 {
    1500
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            content_width: default_content_width(),
            slideout_width: default_slideout_width(),
            auto_open_delay_ms: default_auto_open_delay_ms(),
        }
    }
}

impl PanelConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("no config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from an explicit path, falling back to defaults on
    /// any missing or malformed file
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("config file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk, creating the config directory if needed
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("no config directory available")?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(self).context("failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config to {}", path.display()))?;

        tracing::debug!("saved config to {}", path.display());
        Ok(())
    }

    pub fn auto_open_delay(&self) -> Duration {
        Duration::from_millis(self.auto_open_delay_ms)
    }
}

/// Shared handle wiring the config into the panel's collaborator traits.
///
/// Width commits update the in-memory config and save it immediately;
/// save failures are logged and otherwise ignored, geometry must never
/// fail because the disk did.
#[derive(Clone)]
pub struct ConfigHandle {
    inner: Rc<RefCell<PanelConfig>>,
}

impl ConfigHandle {
    pub fn new(config: PanelConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(config)),
        }
    }

    /// Snapshot of the current config
    pub fn get(&self) -> PanelConfig {
        self.inner.borrow().clone()
    }

    fn persist(&self) {
        if let Err(e) = self.inner.borrow().save() {
            tracing::warn!("failed to persist config: {e:#}");
        }
    }
}

impl WidthSink for ConfigHandle {
    fn content_width_committed(&self, width: f64) {
        self.inner.borrow_mut().content_width = width;
        self.persist();
    }

    fn slideout_width_committed(&self, width: f64) {
        self.inner.borrow_mut().slideout_width = width;
        self.persist();
    }
}

impl PanelSettings for ConfigHandle {
    fn auto_open_delay(&self) -> Duration {
        self.inner.borrow().auto_open_delay()
    }
}
