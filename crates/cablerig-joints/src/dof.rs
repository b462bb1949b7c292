//! Per-degree-of-freedom motion specification.
//!
//! A six-DOF joint constrains three translations and three rotations; each
//! is described independently by a [`DofSpec`]. Two distinct "no motion"
//! encodings exist in the wild and both are preserved here: a zero-width
//! range ([`DofMotion::Locked`]) and an inverted range
//! ([`DofMotion::HardLocked`], low > high). Hosts that treat the two
//! identically may collapse them; hosts that distinguish them must not be
//! handed the wrong one.

use cablerig_core::error::ConfigError;
use cablerig_core::types::TranslationAxis;

// ---------------------------------------------------------------------------
// Dof
// ---------------------------------------------------------------------------

/// One of the six degrees of freedom of a joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dof {
    TransX,
    TransY,
    TransZ,
    RotX,
    RotY,
    RotZ,
}

impl Dof {
    /// All six DOFs, translations first.
    pub const ALL: [Self; 6] = [
        Self::TransX,
        Self::TransY,
        Self::TransZ,
        Self::RotX,
        Self::RotY,
        Self::RotZ,
    ];

    /// Translational DOF along the given local axis.
    pub const fn translation(axis: TranslationAxis) -> Self {
        match axis {
            TranslationAxis::X => Self::TransX,
            TranslationAxis::Y => Self::TransY,
            TranslationAxis::Z => Self::TransZ,
        }
    }

    /// Rotational DOF about the given local axis.
    pub const fn rotation(axis: TranslationAxis) -> Self {
        match axis {
            TranslationAxis::X => Self::RotX,
            TranslationAxis::Y => Self::RotY,
            TranslationAxis::Z => Self::RotZ,
        }
    }

    /// Index into a `[DofSpec; 6]` table.
    pub const fn index(self) -> usize {
        match self {
            Self::TransX => 0,
            Self::TransY => 1,
            Self::TransZ => 2,
            Self::RotX => 3,
            Self::RotY => 4,
            Self::RotZ => 5,
        }
    }

    pub const fn is_translation(self) -> bool {
        matches!(self, Self::TransX | Self::TransY | Self::TransZ)
    }

    /// Stable name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TransX => "transX",
            Self::TransY => "transY",
            Self::TransZ => "transZ",
            Self::RotX => "rotX",
            Self::RotY => "rotY",
            Self::RotZ => "rotZ",
        }
    }
}

// ---------------------------------------------------------------------------
// LimitSpring / Drive
// ---------------------------------------------------------------------------

/// Springback parameters of a bounded range's limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitSpring {
    /// Limit stiffness (N/m or Nm/rad).
    pub stiffness: f32,
    /// Limit damping.
    pub damping: f32,
    /// Distance from the bound at which the limit engages.
    pub contact_distance: f32,
}

/// Force-mode spring-damper drive on a DOF.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drive {
    /// Drive stiffness.
    pub stiffness: f32,
    /// Drive damping.
    pub damping: f32,
    /// Force cap (N or Nm).
    pub max_force: f32,
}

// ---------------------------------------------------------------------------
// DofMotion / DofSpec
// ---------------------------------------------------------------------------

/// Motion permitted on one DOF.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DofMotion {
    /// Unconstrained.
    Free,
    /// No motion, encoded as a zero-width range.
    Locked,
    /// No motion, encoded as an inverted range (low > high).
    HardLocked,
    /// Motion bounded to `[low, high]`.
    Limited { low: f32, high: f32 },
}

/// Full specification of one DOF: motion plus optional limit spring and
/// drive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DofSpec {
    pub motion: DofMotion,
    pub limit_spring: Option<LimitSpring>,
    pub drive: Option<Drive>,
}

impl DofSpec {
    pub const fn free() -> Self {
        Self {
            motion: DofMotion::Free,
            limit_spring: None,
            drive: None,
        }
    }

    pub const fn locked() -> Self {
        Self {
            motion: DofMotion::Locked,
            limit_spring: None,
            drive: None,
        }
    }

    pub const fn hard_locked() -> Self {
        Self {
            motion: DofMotion::HardLocked,
            limit_spring: None,
            drive: None,
        }
    }

    /// Bounded motion. A non-increasing range is a configuration error here;
    /// the inverted-range lock idiom goes through [`DofSpec::hard_locked`].
    pub fn limited(dof: Dof, low: f32, high: f32) -> Result<Self, ConfigError> {
        if low >= high {
            return Err(ConfigError::InvertedRange {
                dof: dof.name(),
                low,
                high,
            });
        }
        Ok(Self {
            motion: DofMotion::Limited { low, high },
            limit_spring: None,
            drive: None,
        })
    }

    pub const fn with_limit_spring(mut self, spring: LimitSpring) -> Self {
        self.limit_spring = Some(spring);
        self
    }

    pub const fn with_drive(mut self, drive: Drive) -> Self {
        self.drive = Some(drive);
        self
    }

    /// The range this spec encodes on the wire, if any.
    ///
    /// `Locked` is the zero-width `[0, 0]`; `HardLocked` is the inverted
    /// `[1, -1]`; `Free` has no range at all.
    pub const fn encoded_range(&self) -> Option<[f32; 2]> {
        match self.motion {
            DofMotion::Free => None,
            DofMotion::Locked => Some([0.0, 0.0]),
            DofMotion::HardLocked => Some([1.0, -1.0]),
            DofMotion::Limited { low, high } => Some([low, high]),
        }
    }

    pub const fn is_locked(&self) -> bool {
        matches!(self.motion, DofMotion::Locked | DofMotion::HardLocked)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
