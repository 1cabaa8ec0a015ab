//! Drag replay scripts.
//!
//! A script is a TOML file describing a widget and a sequence of pointer and
//! mode events to feed through one gizmo.
//!
//! # Script Format
//!
//! ```toml
//! mode = "transform"
//! width = 120.0
//! height = 120.0
//!
//! [[step]]
//! action = "start"
//!
//! [[step]]
//! action = "move"
//! x = 90.0
//! y = 60.0
//!
//! [[step]]
//! action = "end"
//!
//! [[step]]
//! action = "settings"
//! patch = { allow_drag_beyond_bounds = true }
//! ```

use std::path::{Path, PathBuf};

use inspace_gizmo::{Bounds, GizmoController, GizmoError, OperatingMode, SettingsPatch};
use inspace_math::Vec2;
use serde::Deserialize;
use thiserror::Error;

/// Errors from loading or replaying a script
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Gizmo error: {0}")]
    Gizmo(#[from] GizmoError),

    #[error("Script has no steps")]
    Empty,
}

pub type ScriptResult<T> = Result<T, ScriptError>;

fn default_size() -> f32 {
    120.0
}

fn mounted() -> bool {
    true
}

/// One scripted event.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    Start {
        #[serde(default)]
        modifier: bool,
    },
    /// Pointer position in widget-local pixels
    Move {
        x: f32,
        y: f32,
        #[serde(default)]
        modifier: bool,
        /// Whether the surface is laid out; `false` sends the move without bounds
        #[serde(default = "mounted")]
        mounted: bool,
    },
    End,
    Cancel,
    Modifier {
        active: bool,
    },
    Toggle,
    Mode {
        mode: String,
    },
    Reset,
    Settings {
        patch: SettingsPatch,
    },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Start { .. } => "start",
            Step::Move { .. } => "move",
            Step::End => "end",
            Step::Cancel => "cancel",
            Step::Modifier { .. } => "modifier",
            Step::Toggle => "toggle",
            Step::Mode { .. } => "mode",
            Step::Reset => "reset",
            Step::Settings { .. } => "settings",
        }
    }
}

/// A parsed replay script.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default = "default_size")]
    pub width: f32,
    #[serde(default = "default_size")]
    pub height: f32,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Script {
    /// Parse a script from TOML.
    pub fn parse(content: &str) -> ScriptResult<Self> {
        let script: Script = toml::from_str(content)?;
        if script.steps.is_empty() {
            return Err(ScriptError::Empty);
        }
        Ok(script)
    }

    /// Load a script from a file.
    pub fn load(path: &Path) -> ScriptResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Starting mode, defaulting to transform.
    pub fn initial_mode(&self) -> ScriptResult<OperatingMode> {
        match &self.mode {
            Some(name) => Ok(name.parse()?),
            None => Ok(OperatingMode::default()),
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Feed one step to the gizmo.
    pub fn apply(&self, step: &Step, gizmo: &mut GizmoController) -> ScriptResult<()> {
        match step {
            Step::Start { modifier } => gizmo.on_drag_start(*modifier),
            Step::Move { x, y, modifier, mounted } => {
                let bounds = mounted.then(|| self.bounds());
                gizmo.on_drag_move(Vec2::new(*x, *y), bounds, *modifier);
            }
            Step::End => gizmo.on_drag_end(),
            Step::Cancel => gizmo.on_drag_cancel(),
            Step::Modifier { active } => gizmo.set_modifier(*active),
            Step::Toggle => {
                gizmo.toggle_mode();
            }
            Step::Mode { mode } => {
                gizmo.set_mode(mode.parse()?);
            }
            Step::Reset => gizmo.reset_pose(),
            Step::Settings { patch } => gizmo.update_settings(patch),
        }
        Ok(())
    }

    /// Replay every step, calling `after` with the step index once it is applied.
    pub fn run<F>(&self, gizmo: &mut GizmoController, mut after: F) -> ScriptResult<()>
    where
        F: FnMut(usize, &Step, &GizmoController),
    {
        for (i, step) in self.steps.iter().enumerate() {
            log::trace!("Step {}: {:?}", i, step);
            self.apply(step, gizmo)?;
            after(i, step, gizmo);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use inspace_gizmo::{Axis, GizmoSettings};

    const DRAG_X: &str = r#"
width = 120.0
height = 120.0

[[step]]
action = "start"

[[step]]
action = "move"
x = 90.0
y = 60.0

[[step]]
action = "end"
"#;

    #[test]
    fn test_parse_defaults() {
        let script = Script::parse(DRAG_X).unwrap();
        assert_eq!(script.steps.len(), 3);
        assert_eq!(script.steps[0], Step::Start { modifier: false });
        assert_eq!(script.initial_mode().unwrap(), OperatingMode::Transform);
        match &script.steps[1] {
            Step::Move { mounted, .. } => assert!(*mounted),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_replay_moves_x() {
        let script = Script::parse(DRAG_X).unwrap();
        let mut gizmo = GizmoController::new(script.initial_mode().unwrap(), GizmoSettings::default());
        let mut seen = Vec::new();
        script
            .run(&mut gizmo, |i, step, _| seen.push((i, step.name())))
            .unwrap();

        assert_eq!(seen, vec![(0, "start"), (1, "move"), (2, "end")]);
        assert_relative_eq!(gizmo.pose().position.x, 25.0);
        assert_eq!(gizmo.session_state().selected_axis, Axis::X);
    }

    #[test]
    fn test_unmounted_move_is_ignored() {
        let script = Script::parse(
            r#"
[[step]]
action = "start"

[[step]]
action = "move"
x = 90.0
y = 60.0
mounted = false
"#,
        )
        .unwrap();
        let mut gizmo = GizmoController::with_defaults();
        script.run(&mut gizmo, |_, _, _| {}).unwrap();
        assert_eq!(gizmo.pose().position.x, 0.0);
    }

    #[test]
    fn test_mode_and_settings_steps() {
        let script = Script::parse(
            r#"
mode = "rotate"

[[step]]
action = "settings"
patch = { use_colors = true }

[[step]]
action = "mode"
mode = "move"
"#,
        )
        .unwrap();
        let mut gizmo = GizmoController::new(script.initial_mode().unwrap(), GizmoSettings::default());
        assert_eq!(gizmo.mode(), OperatingMode::Rotate);

        script.run(&mut gizmo, |_, _, _| {}).unwrap();
        assert_eq!(gizmo.mode(), OperatingMode::Transform);
        assert!(gizmo.settings().use_colors);
    }

    #[test]
    fn test_bad_mode_is_gizmo_error() {
        let script = Script::parse("[[step]]\naction = \"mode\"\nmode = \"scale\"\n").unwrap();
        let mut gizmo = GizmoController::with_defaults();
        let err = script.run(&mut gizmo, |_, _, _| {}).unwrap_err();
        assert!(matches!(err, ScriptError::Gizmo(GizmoError::UnknownMode(_))));
    }

    #[test]
    fn test_empty_script_rejected() {
        assert!(matches!(Script::parse("width = 10.0\n"), Err(ScriptError::Empty)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Script::load(&dir.path().join("none.toml")).unwrap_err();
        assert!(matches!(err, ScriptError::Io { .. }));
    }
}
