//! Common geometry types shared across the workspace.

use glam::{Quat, Vec3};

// ---------------------------------------------------------------------------
// TranslationAxis
// ---------------------------------------------------------------------------

/// The local axis a cable slides along.
///
/// Vertical assemblies slide along Z, radial assemblies along X; the joint
/// synthesizer derives its locked/free DOF tables from this selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationAxis {
    X,
    Y,
    Z,
}

impl TranslationAxis {
    /// Unit vector of this axis in the body's local frame.
    pub const fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }

    /// Component index (0, 1, 2) of this axis.
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// The two axes orthogonal to this one.
    pub const fn orthogonal(self) -> [Self; 2] {
        match self {
            Self::X => [Self::Y, Self::Z],
            Self::Y => [Self::X, Self::Z],
            Self::Z => [Self::X, Self::Y],
        }
    }
}

// ---------------------------------------------------------------------------
// Pose
// ---------------------------------------------------------------------------

/// Position + orientation of a body or anchor frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Pose {
    pub const fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Pose at a position with identity orientation.
    pub const fn from_position(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

// ---------------------------------------------------------------------------
// Shapes
// ---------------------------------------------------------------------------

/// Capsule prototype shared by every link of an assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleShape {
    /// Half length of the cylindrical section (m).
    pub half_length: f32,
    /// Capsule radius (m).
    pub radius: f32,
    /// Local axis the capsule extends along.
    pub axis: TranslationAxis,
    /// Mass of one link (kg).
    pub mass: f32,
}

/// Axis-aligned box half extents, in the box's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    pub half_extents: Vec3,
}

impl BoxShape {
    pub const fn new(half_extents: Vec3) -> Self {
        Self { half_extents }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_units_are_orthonormal() {
        assert_eq!(TranslationAxis::X.unit(), Vec3::X);
        assert_eq!(TranslationAxis::Y.unit(), Vec3::Y);
        assert_eq!(TranslationAxis::Z.unit(), Vec3::Z);
        assert!(TranslationAxis::X.unit().dot(TranslationAxis::Y.unit()) < f32::EPSILON);
    }

    #[test]
    fn axis_orthogonal_excludes_self() {
        for axis in [TranslationAxis::X, TranslationAxis::Y, TranslationAxis::Z] {
            let [a, b] = axis.orthogonal();
            assert_ne!(a, axis);
            assert_ne!(b, axis);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn axis_index() {
        assert_eq!(TranslationAxis::X.index(), 0);
        assert_eq!(TranslationAxis::Y.index(), 1);
        assert_eq!(TranslationAxis::Z.index(), 2);
    }

    #[test]
    fn pose_default_is_identity() {
        let p = Pose::default();
        assert_eq!(p.position, Vec3::ZERO);
        assert!((p.orientation.w - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn pose_from_position() {
        let p = Pose::from_position(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(p.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(p.orientation, Quat::IDENTITY);
    }
}
