//! Gizmo settings.
//!
//! A flat set of knobs supplied by the host's settings panel. Only
//! `allow_drag_beyond_bounds` and `lock_axis` influence drag handling; the rest
//! are passed through to presentation.
//!
//! # Example File
//!
//! ```toml
//! size = 300.0
//! allow_drag_beyond_bounds = false
//! lock_axis = true
//! use_colors = true
//! handle_size = 10.0
//! line_size = 2.0
//! show_labels = true
//! show_mode_toggle = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GizmoError, Result};

/// Gizmo settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GizmoSettings {
    /// Widget edge length in pixels (display only)
    pub size: f32,

    /// Relax the track clamp and accumulate rotation past a full turn
    pub allow_drag_beyond_bounds: bool,

    /// Keep the first chosen axis for the rest of a drag
    pub lock_axis: bool,

    /// Tint axes and handle with per-axis colors
    pub use_colors: bool,

    /// Handle radius in pixels
    pub handle_size: f32,

    /// Axis stroke width in pixels
    pub line_size: f32,

    /// Draw axis labels and readouts
    pub show_labels: bool,

    /// Show the move/rotate toggle button
    pub show_mode_toggle: bool,
}

impl Default for GizmoSettings {
    fn default() -> Self {
        Self {
            size: 300.0,
            allow_drag_beyond_bounds: false,
            lock_axis: true,
            use_colors: false,
            handle_size: 10.0,
            line_size: 2.0,
            show_labels: true,
            show_mode_toggle: true,
        }
    }
}

/// Partial settings update. Unset fields leave the current value alone.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPatch {
    pub size: Option<f32>,
    pub allow_drag_beyond_bounds: Option<bool>,
    pub lock_axis: Option<bool>,
    pub use_colors: Option<bool>,
    pub handle_size: Option<f32>,
    pub line_size: Option<f32>,
    pub show_labels: Option<bool>,
    pub show_mode_toggle: Option<bool>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl GizmoSettings {
    /// Merge a partial update. Values are taken as given, without range checks.
    pub fn merge(&mut self, patch: &SettingsPatch) {
        if let Some(v) = patch.size {
            self.size = v;
        }
        if let Some(v) = patch.allow_drag_beyond_bounds {
            self.allow_drag_beyond_bounds = v;
        }
        if let Some(v) = patch.lock_axis {
            self.lock_axis = v;
        }
        if let Some(v) = patch.use_colors {
            self.use_colors = v;
        }
        if let Some(v) = patch.handle_size {
            self.handle_size = v;
        }
        if let Some(v) = patch.line_size {
            self.line_size = v;
        }
        if let Some(v) = patch.show_labels {
            self.show_labels = v;
        }
        if let Some(v) = patch.show_mode_toggle {
            self.show_mode_toggle = v;
        }
    }

    /// Copy with a patch applied.
    pub fn merged(&self, patch: &SettingsPatch) -> Self {
        let mut settings = self.clone();
        settings.merge(patch);
        settings
    }

    /// Parse settings from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Encode settings as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load settings from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GizmoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        log::info!("Loaded gizmo settings from {:?}", path);
        Ok(settings)
    }

    /// Load settings from a file, falling back to defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No settings at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save settings to a file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        let io_err = |source| GizmoError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, content).map_err(io_err)?;
        log::info!("Saved gizmo settings to {:?}", path);
        Ok(())
    }

    /// Get the default settings path.
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|mut p| {
                p.push("inspace");
                p.push("gizmo.toml");
                p
            })
            .ok_or(GizmoError::NoConfigDir)
    }
}
