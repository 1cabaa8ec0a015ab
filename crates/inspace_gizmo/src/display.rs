//! Colors and readout formatting.

use inspace_math::round_half_up;

use crate::axis::{Axis, OperatingMode};
use crate::session::DragSession;

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Idle handle fill
    pub const HANDLE_IDLE: Self = Self::rgb(0xF0, 0xF0, 0xF0);
    pub const X_AXIS: Self = Self::rgb(0xFF, 0x41, 0x36);
    pub const Y_AXIS: Self = Self::rgb(0x2E, 0xCC, 0x40);
    pub const Z_AXIS: Self = Self::rgb(0x00, 0x74, 0xD9);

    /// `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Stroke color for an axis, or neutral white when colors are off or no axis applies.
pub fn axis_color(axis: Option<Axis>, use_colors: bool) -> Color {
    match axis {
        Some(axis) if use_colors => match axis {
            Axis::X => Color::X_AXIS,
            Axis::Y => Color::Y_AXIS,
            Axis::Z => Color::Z_AXIS,
        },
        _ => Color::WHITE,
    }
}

/// Handle fill: tinted with the targeted axis while dragging, otherwise idle gray.
pub fn handle_color(mode: OperatingMode, session: &DragSession, use_colors: bool) -> Color {
    if !use_colors || !session.active {
        return Color::HANDLE_IDLE;
    }
    let target = match mode {
        OperatingMode::Transform => Some(session.selected_axis),
        OperatingMode::Rotate => session.selected_rotation_plane,
    };
    match target {
        Some(axis) => axis_color(Some(axis), true),
        None => Color::HANDLE_IDLE,
    }
}

/// Progress as a signed percentage, e.g. `+50%`, `-30%`, `0%`.
pub fn format_progress(value: f32) -> String {
    let percent = round_half_up(value * 100.0) as i32;
    if percent > 0 {
        format!("+{}%", percent)
    } else {
        format!("{}%", percent)
    }
}

/// Whole degrees with a degree sign.
pub fn format_angle(degrees: f32) -> String {
    format!("{}°", round_half_up(degrees) as i32)
}

/// SVG `viewBox` that leaves room for thick strokes and large handles.
pub fn view_box(line_size: f32, handle_size: f32) -> String {
    const BASE_SIZE: f32 = 120.0;
    let padding = (line_size * 1.5).max(handle_size * 1.5);
    let side = BASE_SIZE + padding * 2.0;
    format!("-{} -{} {} {}", side / 2.0, side / 2.0, side, side)
}
