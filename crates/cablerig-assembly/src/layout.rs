//! Assembly layout strategies and per-link pose computation.
//!
//! A single assembly hangs vertically between payload and table; two or
//! more are distributed evenly in azimuth around the payload's equator and
//! tilted by a shared elevation angle. The layout decides the translation
//! axis, the direction each assembly's links advance along, and the
//! constant per-assembly link orientation.

use glam::{Quat, Vec3};

use cablerig_core::math::yaw_pitch;
use cablerig_core::types::{Pose, TranslationAxis};

use crate::rig::RigParams;

/// Azimuth of assembly `index` out of `num_assemblies`, splitting the full
/// circle evenly.
#[allow(clippy::cast_precision_loss)]
pub fn azimuth(num_assemblies: usize, index: usize) -> f32 {
    index as f32 * std::f32::consts::TAU / num_assemblies as f32
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Link placement strategy, resolved once per build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layout {
    /// Links stacked straight up from the payload's top face.
    Vertical,
    /// Assemblies fanned around the payload's equator, tilted out of the
    /// horizontal plane by `elevation_angle` (0 = horizontal, pi/2 =
    /// vertical).
    Radial { elevation_angle: f32 },
}

impl Layout {
    /// Select the layout for an assembly count: a single assembly hangs
    /// vertically, two or more fan out radially.
    pub fn for_assembly_count(num_assemblies: usize, elevation_angle: f32) -> Self {
        if num_assemblies < 2 {
            Self::Vertical
        } else {
            Self::Radial { elevation_angle }
        }
    }

    /// The local axis links slide along in this layout.
    pub const fn translation_axis(&self) -> TranslationAxis {
        match self {
            Self::Vertical => TranslationAxis::Z,
            Self::Radial { .. } => TranslationAxis::X,
        }
    }

    /// Short name for diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Radial { .. } => "radial",
        }
    }

    /// Unit direction an assembly's links advance along, given its azimuth.
    pub fn direction(&self, azimuth: f32) -> Vec3 {
        match *self {
            Self::Vertical => Vec3::Z,
            Self::Radial { elevation_angle } => Vec3::new(
                azimuth.cos() * elevation_angle.cos(),
                azimuth.sin() * elevation_angle.cos(),
                elevation_angle.sin(),
            ),
        }
    }

    /// Constant orientation shared by every link of an assembly.
    ///
    /// The radial orientation is a yaw about +Z by the azimuth, then a
    /// pitch by the elevation about the yaw-rotated -Y axis. Yaw first,
    /// or the tilt axis is wrong for any assembly off azimuth 0.
    pub fn orientation(&self, azimuth: f32) -> Quat {
        match *self {
            Self::Vertical => Quat::IDENTITY,
            Self::Radial { elevation_angle } => yaw_pitch(azimuth, elevation_angle),
        }
    }

    /// Ordered poses of every link in assembly `index`.
    #[allow(clippy::cast_precision_loss)]
    pub fn link_poses(&self, params: &RigParams, index: usize) -> Vec<Pose> {
        let cfg = &params.config;
        let pitch = params.link_pitch;
        let half = params.capsule_half;

        match *self {
            Self::Vertical => {
                // Parallel vertical assemblies space out along Y; a single
                // assembly sits at y = 0.
                let y = (index as f32 - (cfg.num_assemblies / 2) as f32) * cfg.assembly_spacing;
                let z0 = cfg.load_height + cfg.payload_half_height + half;
                (0..params.num_links)
                    .map(|i| {
                        Pose::from_position(Vec3::new(0.0, y, z0 + i as f32 * pitch))
                    })
                    .collect()
            }
            Self::Radial { elevation_angle } => {
                let a = azimuth(cfg.num_assemblies, index);
                let radial = cfg.payload_radius + half * elevation_angle.cos();
                let start = Vec3::new(
                    radial * a.cos(),
                    radial * a.sin(),
                    cfg.load_height + half * elevation_angle.sin(),
                );
                let step = self.direction(a) * pitch;
                let orientation = self.orientation(a);
                (0..params.num_links)
                    .map(|i| Pose::new(start + step * i as f32, orientation))
                    .collect()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
