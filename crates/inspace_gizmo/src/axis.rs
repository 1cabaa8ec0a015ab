//! Logical axes and operating modes.

use serde::{Deserialize, Serialize};

use crate::error::GizmoError;

/// One of the three logical axes.
///
/// In transform mode this is the translation axis; in rotate mode it is the
/// axis the rotation is performed around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in tie-break order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into a `Vec3`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Axis {
    type Err = GizmoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(GizmoError::UnknownAxis(s.to_string())),
        }
    }
}

/// Which manipulation the gizmo performs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingMode {
    /// Move along an axis
    #[default]
    Transform,
    /// Rotate around an axis
    Rotate,
}

impl OperatingMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            OperatingMode::Transform => OperatingMode::Rotate,
            OperatingMode::Rotate => OperatingMode::Transform,
        }
    }

    /// Label shown on the mode toggle.
    pub fn label(self) -> &'static str {
        match self {
            OperatingMode::Transform => "MOVE",
            OperatingMode::Rotate => "ROTATE",
        }
    }
}

impl std::fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperatingMode::Transform => write!(f, "transform"),
            OperatingMode::Rotate => write!(f, "rotate"),
        }
    }
}

impl std::str::FromStr for OperatingMode {
    type Err = GizmoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "transform" | "translate" | "move" => Ok(OperatingMode::Transform),
            "rotate" | "rotation" => Ok(OperatingMode::Rotate),
            _ => Err(GizmoError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_parse_roundtrip() {
        for axis in Axis::ALL {
            assert_eq!(axis.to_string().parse::<Axis>().unwrap(), axis);
        }
        assert_eq!(" Z ".parse::<Axis>().unwrap(), Axis::Z);
        assert!(matches!("w".parse::<Axis>(), Err(GizmoError::UnknownAxis(_))));
    }

    #[test]
    fn test_mode_toggled() {
        assert_eq!(OperatingMode::Transform.toggled(), OperatingMode::Rotate);
        assert_eq!(OperatingMode::Rotate.toggled(), OperatingMode::Transform);
        assert_eq!("move".parse::<OperatingMode>().unwrap(), OperatingMode::Transform);
    }
}
