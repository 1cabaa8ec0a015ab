//! Text presenter for the headless workspace.

use inspace_gizmo::display::{axis_color, view_box};
use inspace_gizmo::presentation::{MeshTransform, PreviewShape, PreviewView, DEFAULT_MESH_SIZE};
use inspace_gizmo::{GizmoSettings, PresentationAdapter, RenderSnapshot};

/// Logs every snapshot the gizmo produces.
pub struct ConsolePresenter {
    view: PreviewView,
    shape: PreviewShape,
    frames: usize,
}

impl ConsolePresenter {
    pub fn new(view: PreviewView, shape: PreviewShape) -> Self {
        Self { view, shape, frames: 0 }
    }
}

impl PresentationAdapter for ConsolePresenter {
    fn present(&mut self, snapshot: &RenderSnapshot) {
        self.frames += 1;
        let mesh = MeshTransform::from_pose(&snapshot.pose, self.view, DEFAULT_MESH_SIZE);
        log::debug!(
            "frame {} [{}] handle=({:.1}, {:.1}) color={} {} {:?} at {:?} extents {:?}",
            self.frames,
            snapshot.mode.label(),
            snapshot.handle.x,
            snapshot.handle.y,
            snapshot.handle_color,
            snapshot.readout,
            self.shape,
            mesh.translation.to_array(),
            self.shape.extents(mesh.scale).to_array(),
        );
    }
}

/// Describe the widget chrome the settings ask for.
pub fn describe_widget(settings: &GizmoSettings) -> String {
    let axes: Vec<String> = inspace_gizmo::Axis::ALL
        .iter()
        .map(|&axis| format!("{}={}", axis, axis_color(Some(axis), settings.use_colors)))
        .collect();
    format!(
        "{}px viewBox=\"{}\" {} labels={} toggle={}",
        settings.size,
        view_box(settings.line_size, settings.handle_size),
        axes.join(" "),
        settings.show_labels,
        settings.show_mode_toggle,
    )
}
