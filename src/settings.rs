//! Editor settings persisted as JSON under the user's config directory.
//!
//! A missing or malformed file falls back to defaults with a warning; out of
//! range values are normalized on load rather than rejected.

use crate::constants::{
    BUTTON_ZOOM_STEP, DUPLICATE_OFFSET, ICON_HIT_RADIUS, MAX_HISTORY_STATES, MAX_ZOOM, MIN_ZOOM,
    SESSION_TTL_SECS, WHEEL_ZOOM_STEP,
};
use crate::input::coords::ZoomLimits;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

const APP_DIR: &str = "mapboard";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Undo steps kept before the oldest is evicted
    pub max_history: usize,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom change per wheel notch
    pub wheel_zoom_step: f64,
    /// Zoom change per zoom button press
    pub button_zoom_step: f64,
    /// Hit circle radius of a size-1 icon, in canvas-local pixels
    pub icon_hit_radius: f64,
    /// Percent offset applied to duplicated icons
    pub duplicate_offset: f64,
    /// Idle seconds before a stored session is evicted
    pub session_ttl_secs: u64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            max_history: MAX_HISTORY_STATES,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            wheel_zoom_step: WHEEL_ZOOM_STEP,
            button_zoom_step: BUTTON_ZOOM_STEP,
            icon_hit_radius: ICON_HIT_RADIUS,
            duplicate_offset: DUPLICATE_OFFSET,
            session_ttl_secs: SESSION_TTL_SECS,
        }
    }
}

/// `<config_dir>/mapboard/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

impl EditorSettings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                warn!("No config directory on this platform, using default settings");
                Self::default()
            }
        }
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "Settings file not found, using defaults");
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings: EditorSettings = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings.normalized())
    }

    /// Write to the default location.
    pub fn save(&self) -> Result<()> {
        let path = default_settings_path().context("no config directory on this platform")?;
        self.save_to(&path)
    }

    /// Write atomically: serialize into a temp file beside `path`, then
    /// rename over it.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let dir = path
            .parent()
            .with_context(|| format!("{} has no parent directory", path.display()))?;
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

        let json = serde_json::to_string_pretty(self).context("serializing settings")?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("creating temp file in {}", dir.display()))?;
        tmp.write_all(json.as_bytes()).context("writing settings")?;
        tmp.persist(path)
            .with_context(|| format!("replacing {}", path.display()))?;
        debug!(path = %path.display(), "Settings saved");
        Ok(())
    }

    /// Clamp every field into a usable range.
    pub fn normalized(mut self) -> Self {
        self.max_history = self.max_history.max(1);

        if !(self.min_zoom.is_finite() && self.min_zoom > 0.0) {
            self.min_zoom = MIN_ZOOM;
        }
        if !(self.max_zoom.is_finite() && self.max_zoom > 0.0) {
            self.max_zoom = MAX_ZOOM;
        }
        if self.min_zoom > self.max_zoom {
            std::mem::swap(&mut self.min_zoom, &mut self.max_zoom);
        }

        if !(self.wheel_zoom_step.is_finite() && self.wheel_zoom_step > 0.0) {
            self.wheel_zoom_step = WHEEL_ZOOM_STEP;
        }
        if !(self.button_zoom_step.is_finite() && self.button_zoom_step > 0.0) {
            self.button_zoom_step = BUTTON_ZOOM_STEP;
        }
        if !(self.icon_hit_radius.is_finite() && self.icon_hit_radius > 0.0) {
            self.icon_hit_radius = ICON_HIT_RADIUS;
        }
        if !self.duplicate_offset.is_finite() {
            self.duplicate_offset = DUPLICATE_OFFSET;
        }
        if self.session_ttl_secs == 0 {
            self.session_ttl_secs = SESSION_TTL_SECS;
        }
        self
    }

    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits::new(self.min_zoom, self.max_zoom)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}
