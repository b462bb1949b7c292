//! Stage unit/axis context.
//!
//! The host scene advertises an up axis and a meters-per-unit scale; the
//! generator computes in a canonical Z-up meter frame and re-orients
//! magnitudes on the way out. Nothing here assumes a fixed host convention.

use glam::Vec3;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// UpAxis
// ---------------------------------------------------------------------------

/// The host stage's up axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpAxis {
    X,
    Y,
    Z,
}

impl UpAxis {
    /// Component permutation mapping canonical (x, y, z-up) coordinates into
    /// the stage frame: output component `i` is sourced from canonical
    /// component `permutation()[i]`.
    pub const fn permutation(self) -> [usize; 3] {
        match self {
            Self::Z => [0, 1, 2],
            Self::Y => [1, 2, 0],
            Self::X => [2, 1, 0],
        }
    }
}

// ---------------------------------------------------------------------------
// StageContext
// ---------------------------------------------------------------------------

/// Unit and orientation context of the host stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageContext {
    /// Up axis of the stage.
    pub up_axis: UpAxis,
    /// Meters per stage distance unit.
    pub meters_per_unit: f32,
}

impl Default for StageContext {
    /// Z-up, centimeter units (the common scene-description default).
    fn default() -> Self {
        Self {
            up_axis: UpAxis::Z,
            meters_per_unit: 0.01,
        }
    }
}

impl StageContext {
    pub const fn new(up_axis: UpAxis, meters_per_unit: f32) -> Self {
        Self {
            up_axis,
            meters_per_unit,
        }
    }

    /// Scale factor normalizing stage-unit magnitudes into the build frame.
    pub fn scale_factor(&self) -> f32 {
        1.0 / (self.meters_per_unit * 100.0)
    }

    /// Re-orient a dimensions vector into the stage frame and apply the
    /// scale factor.
    pub fn orient_dim(&self, dim: Vec3) -> Vec3 {
        let p = self.up_axis.permutation();
        let s = self.scale_factor();
        Vec3::new(dim[p[0]] * s, dim[p[1]] * s, dim[p[2]] * s)
    }

    /// Re-orient a position vector into the stage frame, shifting the
    /// vertical component by `floor_offset` before scaling.
    pub fn orient_pos(&self, pos: Vec3, floor_offset: f32) -> Vec3 {
        let p = self.up_axis.permutation();
        let s = self.scale_factor();
        let mut out = Vec3::ZERO;
        for i in 0..3 {
            let mut v = pos[p[i]];
            if p[i] == 2 {
                v += floor_offset;
            }
            out[i] = v * s;
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutations() {
        assert_eq!(UpAxis::Z.permutation(), [0, 1, 2]);
        assert_eq!(UpAxis::Y.permutation(), [1, 2, 0]);
        assert_eq!(UpAxis::X.permutation(), [2, 1, 0]);
    }

    #[test]
    fn default_stage_has_unit_scale() {
        // 1 / (0.01 * 100) = 1
        let stage = StageContext::default();
        assert!((stage.scale_factor() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn meter_stage_scale() {
        let stage = StageContext::new(UpAxis::Z, 1.0);
        assert!((stage.scale_factor() - 0.01).abs() < f32::EPSILON);
    }

    #[test]
    fn orient_dim_z_up_identity_permutation() {
        let stage = StageContext::default();
        let out = stage.orient_dim(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(out, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn orient_dim_y_up_permutes() {
        let stage = StageContext::new(UpAxis::Y, 0.01);
        let out = stage.orient_dim(Vec3::new(1.0, 2.0, 3.0));
        // [1,2,0]: (y, z, x)
        assert_eq!(out, Vec3::new(2.0, 3.0, 1.0));
    }

    #[test]
    fn orient_dim_x_up_permutes() {
        let stage = StageContext::new(UpAxis::X, 0.01);
        let out = stage.orient_dim(Vec3::new(1.0, 2.0, 3.0));
        // [2,1,0]: (z, y, x)
        assert_eq!(out, Vec3::new(3.0, 2.0, 1.0));
    }

    #[test]
    fn orient_pos_applies_floor_offset_to_vertical() {
        let stage = StageContext::default();
        let out = stage.orient_pos(Vec3::new(1.0, 2.0, 3.0), -10.0);
        assert_eq!(out, Vec3::new(1.0, 2.0, -7.0));
    }

    #[test]
    fn orient_pos_y_up_offsets_permuted_component() {
        let stage = StageContext::new(UpAxis::Y, 0.01);
        let out = stage.orient_pos(Vec3::new(1.0, 2.0, 3.0), -10.0);
        // canonical z lands in output slot 1
        assert_eq!(out, Vec3::new(2.0, -7.0, 1.0));
    }
}
