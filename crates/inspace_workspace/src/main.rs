//! InSpace Workspace
//!
//! Headless host for the drag gizmo. Replays a TOML drag script through one
//! gizmo instance and prints the readout and preview transform after every
//! step.
//!
//! Run with: cargo run -p inspace_workspace -- demos/drag_x.toml [settings.toml]
//!
//! Settings are taken from the second argument, then `INSPACE_SETTINGS`, then
//! the user config directory. A missing file means defaults.

mod presenter;
mod script;

use std::path::PathBuf;
use std::process::ExitCode;

use inspace_gizmo::presentation::{PreviewShape, PreviewView};
use inspace_gizmo::{GizmoController, GizmoSettings};

use crate::presenter::{describe_widget, ConsolePresenter};
use crate::script::Script;

const SETTINGS_ENV: &str = "INSPACE_SETTINGS";

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let mut args = std::env::args().skip(1);
    let Some(script_path) = args.next().map(PathBuf::from) else {
        eprintln!("usage: inspace-workspace <script.toml> [settings.toml]");
        return ExitCode::from(2);
    };

    let settings = load_settings(args.next().map(PathBuf::from));
    match run(script_path, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Resolve and load settings, falling back to defaults on any error.
fn load_settings(arg: Option<PathBuf>) -> GizmoSettings {
    let path = match arg {
        Some(path) => Some(path),
        None => match std::env::var(SETTINGS_ENV) {
            Ok(path) if !path.is_empty() => {
                log::info!("Settings path from env: {}", path);
                Some(PathBuf::from(path))
            }
            _ => GizmoSettings::default_path()
                .map_err(|e| log::warn!("{}", e))
                .ok(),
        },
    };

    let Some(path) = path else {
        return GizmoSettings::default();
    };
    match GizmoSettings::load_or_default(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings from {:?}: {}, using defaults", path, e);
            GizmoSettings::default()
        }
    }
}

fn run(script_path: PathBuf, settings: GizmoSettings) -> script::ScriptResult<()> {
    let script = Script::load(&script_path)?;
    log::info!("Replaying {} steps from {:?}", script.steps.len(), script_path);

    println!("widget: {}", describe_widget(&settings));

    let mut gizmo = GizmoController::new(script.initial_mode()?, settings);
    gizmo.subscribe_mode(|mode| log::info!("Mode changed to {} ({})", mode, mode.label()));
    gizmo.attach_presenter(ConsolePresenter::new(PreviewView::Perspective, PreviewShape::Cube));

    script.run(&mut gizmo, |i, step, gizmo| {
        let snapshot = gizmo.snapshot();
        println!(
            "{:>3} {:<8} {:<16} {}",
            i,
            step.name(),
            snapshot.readout,
            snapshot.preview_transform
        );
    })?;

    let pose = gizmo.pose();
    println!(
        "final position {:?} rotation {:?}",
        pose.position.to_array(),
        pose.rotation.to_array()
    );
    Ok(())
}
