//! InSpace Gizmo - Drag Gizmo Core
//!
//! Turns 2D pointer drags on a flat widget into translations along, or
//! rotations around, one of three logical axes drawn as a fake isometric
//! projection.
//!
//! # Features
//!
//! - Nearest-axis selection with per-drag axis lock
//! - Rotation ring chosen from the initial drag direction
//! - Bounded or unbounded translation, wrapped or continuous rotation
//! - Move/rotate mode switching with change notification
//! - TOML settings with partial updates
//! - Render snapshots for a host-supplied presentation layer
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                 GizmoController                   │
//! │  ┌──────────────┐ ┌────────────┐ ┌─────────────┐ │
//! │  │ModeController│ │DragSession │ │    Pose     │ │
//! │  └──────────────┘ └────────────┘ └─────────────┘ │
//! │  ┌──────────────────────────────────────────────┐│
//! │  │     Manipulator (translate | rotate)          ││
//! │  └──────────────────────────────────────────────┘│
//! └──────────────────────────────────────────────────┘
//!                         │
//!                         ▼
//!                 ┌────────────────┐
//!                 │ RenderSnapshot │ ──► PresentationAdapter
//!                 └────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use inspace_gizmo::prelude::*;
//!
//! let mut gizmo = GizmoController::with_defaults();
//! let bounds = Bounds::new(120.0, 120.0);
//!
//! gizmo.on_drag_start(false);
//! gizmo.on_drag_move(Vec2::new(90.0, 60.0), Some(bounds), false);
//! gizmo.on_drag_end();
//!
//! assert_eq!(gizmo.pose().position.x, 25.0);
//! ```

pub mod axis;
pub mod controller;
pub mod display;
pub mod error;
pub mod manipulator;
pub mod mode;
pub mod pose;
pub mod presentation;
pub mod projection;
pub mod session;
pub mod settings;

pub use axis::{Axis, OperatingMode};
pub use controller::GizmoController;
pub use error::{GizmoError, Result};
pub use manipulator::{DragOutput, Manipulator};
pub use mode::{ListenerId, ModeController};
pub use pose::Pose;
pub use presentation::{PresentationAdapter, RenderSnapshot};
pub use projection::Bounds;
pub use session::DragSession;
pub use settings::{GizmoSettings, SettingsPatch};

pub mod prelude {
    //! Common imports for embedding a gizmo
    pub use crate::axis::{Axis, OperatingMode};
    pub use crate::controller::GizmoController;
    pub use crate::display::{axis_color, format_angle, format_progress, Color};
    pub use crate::error::{GizmoError, Result};
    pub use crate::manipulator::DragOutput;
    pub use crate::mode::ListenerId;
    pub use crate::pose::Pose;
    pub use crate::presentation::{
        MeshTransform, PresentationAdapter, PreviewShape, PreviewView, RenderSnapshot,
    };
    pub use crate::projection::Bounds;
    pub use crate::session::DragSession;
    pub use crate::settings::{GizmoSettings, SettingsPatch};
    pub use inspace_math::{Vec2, Vec3};
}
