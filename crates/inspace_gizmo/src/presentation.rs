//! What the rendering layer needs after each processed event.
//!
//! The core never draws. A host registers a [`PresentationAdapter`] (or polls
//! [`GizmoController::snapshot`](crate::GizmoController::snapshot)) and redraws
//! the SVG diagram and preview from a [`RenderSnapshot`].

use inspace_math::{clamp_magnitude, radians, Vec2, Vec3};

use crate::axis::{Axis, OperatingMode};
use crate::display::{format_angle, format_progress, handle_color, Color};
use crate::pose::Pose;
use crate::projection::{handle_on_axis, scalar_on_axis};
use crate::session::DragSession;
use crate::settings::GizmoSettings;

/// Furthest the drawn handle may sit along X or Y (inside the arrow head).
pub const ARROW_HEAD_LIMIT: f32 = 55.0;

/// Furthest the drawn handle may sit along the Z diagonal.
pub const Z_ARROW_HEAD_LIMIT: f32 = 38.0;

/// Position scale between pose units and preview scene units.
const MESH_UNITS_PER_SCENE_UNIT: f32 = 30.0;

/// Mesh size in pixels per scene unit of mesh scale.
const MESH_SIZE_PER_SCENE_UNIT: f32 = 60.0;

/// Default mesh size of the preview in pixels.
pub const DEFAULT_MESH_SIZE: f32 = 32.0;

/// Everything needed to redraw the widget.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSnapshot {
    pub mode: OperatingMode,
    pub session: DragSession,
    pub pose: Pose,
    /// Where to draw the handle
    pub handle: Vec2,
    pub handle_color: Color,
    /// Progress or angle readout for the current drag target
    pub readout: String,
    /// CSS transform for the preview box
    pub preview_transform: String,
}

impl RenderSnapshot {
    pub fn capture(
        mode: OperatingMode,
        session: &DragSession,
        pose: &Pose,
        settings: &GizmoSettings,
    ) -> Self {
        Self {
            mode,
            session: *session,
            pose: *pose,
            handle: visual_handle(mode, session, settings),
            handle_color: handle_color(mode, session, settings.use_colors),
            readout: readout(mode, session, pose),
            preview_transform: preview_transform(pose),
        }
    }
}

/// Receives a snapshot after every processed event.
pub trait PresentationAdapter {
    fn present(&mut self, snapshot: &RenderSnapshot);
}

impl<F> PresentationAdapter for F
where
    F: FnMut(&RenderSnapshot),
{
    fn present(&mut self, snapshot: &RenderSnapshot) {
        self(snapshot)
    }
}

/// Drawn handle position.
///
/// With the clamp relaxed the logical handle can leave the widget; the drawn
/// one stays inside the arrow head of its axis.
pub fn visual_handle(mode: OperatingMode, session: &DragSession, settings: &GizmoSettings) -> Vec2 {
    if mode != OperatingMode::Transform || !settings.allow_drag_beyond_bounds {
        return session.handle;
    }
    let axis = session.selected_axis;
    let limit = match axis {
        Axis::X | Axis::Y => ARROW_HEAD_LIMIT,
        Axis::Z => Z_ARROW_HEAD_LIMIT,
    };
    handle_on_axis(axis, clamp_magnitude(scalar_on_axis(axis, session.handle), limit))
}

/// Readout text: signed percent while moving, degrees while rotating.
pub fn readout(mode: OperatingMode, session: &DragSession, pose: &Pose) -> String {
    match mode {
        OperatingMode::Transform => {
            format!("{} {}", session.selected_axis.as_str().to_uppercase(), format_progress(session.progress))
        }
        OperatingMode::Rotate => match session.selected_rotation_plane {
            Some(axis) => format!(
                "{} {}",
                axis.as_str().to_uppercase(),
                format_angle(pose.rotation_around(axis))
            ),
            None => String::from("drag to rotate"),
        },
    }
}

/// CSS transform applied to the flat preview box.
pub fn preview_transform(pose: &Pose) -> String {
    let p = pose.position;
    let r = pose.rotation;
    format!(
        "translateX({}px) translateY({}px) translateZ({}px) rotateX({}deg) rotateY({}deg) rotateZ({}deg)",
        p.x, p.y, p.z, r.x, r.y, r.z
    )
}

/// Camera setup of the mesh preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewView {
    /// Free 3D orientation
    #[default]
    Perspective,
    /// Flat view: only rotation around Z is shown
    Flat,
}

/// Mesh shown in the 3D preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewShape {
    #[default]
    Cube,
    /// Four-sided cone
    Pyramid,
    Sphere,
}

impl PreviewShape {
    /// Bounding box of the mesh at `scale`, in scene units.
    pub fn extents(self, scale: f32) -> Vec3 {
        match self {
            PreviewShape::Cube => Vec3::splat(scale),
            PreviewShape::Pyramid => Vec3::new(scale * 1.4, scale * 1.2, scale * 1.4),
            PreviewShape::Sphere => Vec3::splat(scale * 1.2),
        }
    }
}

/// Placement of the 3D mesh preview in scene units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshTransform {
    pub translation: Vec3,
    /// Euler angles in radians, XYZ order
    pub rotation: Vec3,
    /// Uniform mesh scale
    pub scale: f32,
}

impl MeshTransform {
    /// Scene Y points up and scene Z toward the viewer. `mesh_size` is the
    /// preview mesh size in pixels.
    pub fn from_pose(pose: &Pose, view: PreviewView, mesh_size: f32) -> Self {
        let p = pose.position;
        let r = pose.rotation;
        let (rx, ry) = match view {
            PreviewView::Perspective => (radians(r.x), radians(r.y)),
            PreviewView::Flat => (0.0, 0.0),
        };
        Self {
            translation: Vec3::new(p.x, -p.y, p.z) * (1.0 / MESH_UNITS_PER_SCENE_UNIT),
            rotation: Vec3::new(rx, ry, radians(r.z)),
            scale: mesh_size / MESH_SIZE_PER_SCENE_UNIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_visual_handle_clamped_in_beyond_mode() {
        let settings = GizmoSettings {
            allow_drag_beyond_bounds: true,
            ..Default::default()
        };
        let mut session = DragSession::new();
        session.selected_axis = Axis::X;
        session.handle = Vec2::new(400.0, 0.0);
        assert_eq!(visual_handle(OperatingMode::Transform, &session, &settings), Vec2::new(55.0, 0.0));

        session.selected_axis = Axis::Z;
        session.handle = handle_on_axis(Axis::Z, -90.0);
        let drawn = visual_handle(OperatingMode::Transform, &session, &settings);
        assert_relative_eq!(scalar_on_axis(Axis::Z, drawn), -38.0, epsilon = 1e-4);
    }

    #[test]
    fn test_visual_handle_untouched_when_bounded() {
        let settings = GizmoSettings::default();
        let mut session = DragSession::new();
        session.handle = Vec2::new(60.0, 0.0);
        assert_eq!(visual_handle(OperatingMode::Transform, &session, &settings), Vec2::new(60.0, 0.0));
    }

    #[test]
    fn test_preview_transform() {
        let pose = Pose::new(Vec3::new(25.0, 0.0, -5.5), Vec3::new(0.0, 90.0, 0.0));
        assert_eq!(
            preview_transform(&pose),
            "translateX(25px) translateY(0px) translateZ(-5.5px) rotateX(0deg) rotateY(90deg) rotateZ(0deg)"
        );
    }

    #[test]
    fn test_mesh_transform_flat_view_drops_tilt() {
        let pose = Pose::new(Vec3::new(30.0, 15.0, 0.0), Vec3::new(90.0, 45.0, 180.0));
        let flat = MeshTransform::from_pose(&pose, PreviewView::Flat, DEFAULT_MESH_SIZE);
        assert_relative_eq!(flat.translation.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(flat.translation.y, -0.5, epsilon = 1e-6);
        assert_eq!(flat.rotation.x, 0.0);
        assert_relative_eq!(flat.rotation.z, inspace_math::consts::PI, epsilon = 1e-5);

        let persp = MeshTransform::from_pose(&pose, PreviewView::Perspective, DEFAULT_MESH_SIZE);
        assert_relative_eq!(persp.rotation.x, inspace_math::consts::PI / 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_mesh_scale_follows_size() {
        let mesh = MeshTransform::from_pose(&Pose::default(), PreviewView::Perspective, 90.0);
        assert_relative_eq!(mesh.scale, 1.5, epsilon = 1e-6);

        let pyramid = PreviewShape::Pyramid.extents(mesh.scale);
        assert_relative_eq!(pyramid.x, 2.1, epsilon = 1e-5);
        assert_relative_eq!(pyramid.y, 1.8, epsilon = 1e-5);
        assert_relative_eq!(PreviewShape::Sphere.extents(1.0).z, 1.2, epsilon = 1e-6);
        assert_eq!(PreviewShape::default().extents(2.0), Vec3::splat(2.0));
    }

    #[test]
    fn test_readout() {
        let mut session = DragSession::new();
        session.progress = 0.5;
        let pose = Pose::default();
        assert_eq!(readout(OperatingMode::Transform, &session, &pose), "X +50%");
        assert_eq!(readout(OperatingMode::Rotate, &session, &pose), "drag to rotate");
    }
}
