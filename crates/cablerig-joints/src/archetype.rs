//! The three joint archetypes.
//!
//! - **Cable**: one compliant-slide translation, the other two locked, all
//!   rotations free; the chain bends like a cable but barely stretches.
//! - **Fixed**: all six DOFs hard-locked (inverted-range encoding).
//! - **Universal**: translations and twist locked, swing bounded by a cone
//!   limit; used where a chain end meets a rigid anchor.

use cablerig_core::config::CablePolicy;
use cablerig_core::error::ConfigError;
use cablerig_core::types::TranslationAxis;

use crate::dof::{Dof, DofSpec, Drive, LimitSpring};

// ---------------------------------------------------------------------------
// JointKind
// ---------------------------------------------------------------------------

/// Archetype discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointKind {
    Cable,
    Fixed,
    Universal,
}

// ---------------------------------------------------------------------------
// JointArchetype
// ---------------------------------------------------------------------------

/// An immutable six-DOF constraint table.
///
/// Built once and shared by reference (catalog index) across every joint
/// instance that uses it; never deep-copied per joint.
#[derive(Debug, Clone, PartialEq)]
pub struct JointArchetype {
    kind: JointKind,
    dofs: [DofSpec; 6],
}

impl JointArchetype {
    /// Compliant sliding joint along `axis`.
    ///
    /// The slide DOF gets the policy's bounded range (a compressive margin
    /// up to near zero), a limit spring stiffer than the drive by the
    /// policy ratio, and a force drive capped at
    /// `max_force_factor * payload_mass * g`. The orthogonal translations
    /// are locked zero-width; all rotations stay free so the chain can
    /// bend.
    pub fn cable(
        axis: TranslationAxis,
        policy: &CablePolicy,
        payload_mass: f32,
    ) -> Result<Self, ConfigError> {
        policy.validate()?;

        let slide_dof = Dof::translation(axis);
        let slide = DofSpec::limited(slide_dof, policy.slide_range[0], policy.slide_range[1])?
            .with_limit_spring(LimitSpring {
                stiffness: policy.limit_stiffness(),
                damping: policy.limit_damping(),
                contact_distance: policy.contact_distance,
            })
            .with_drive(Drive {
                stiffness: policy.drive_stiffness,
                damping: policy.drive_damping,
                max_force: policy.max_force(payload_mass),
            });

        let mut dofs = [DofSpec::free(); 6];
        dofs[slide_dof.index()] = slide;
        for ortho in axis.orthogonal() {
            dofs[Dof::translation(ortho).index()] = DofSpec::locked();
        }

        Ok(Self {
            kind: JointKind::Cable,
            dofs,
        })
    }

    /// Fully rigid joint: all six DOFs hard-locked.
    pub const fn fixed() -> Self {
        Self {
            kind: JointKind::Fixed,
            dofs: [DofSpec::hard_locked(); 6],
        }
    }

    /// Universal joint about `axis`: no translation, no twist, swing
    /// bounded to the policy's cone angle.
    pub fn universal(axis: TranslationAxis, policy: &CablePolicy) -> Result<Self, ConfigError> {
        let cone = policy.cone_angle_limit;

        let mut dofs = [DofSpec::locked(); 6];
        for swing in axis.orthogonal() {
            let dof = Dof::rotation(swing);
            dofs[dof.index()] = DofSpec::limited(dof, -cone, cone)?;
        }

        Ok(Self {
            kind: JointKind::Universal,
            dofs,
        })
    }

    pub const fn kind(&self) -> JointKind {
        self.kind
    }

    /// Spec of a single DOF.
    pub const fn dof(&self, dof: Dof) -> &DofSpec {
        &self.dofs[dof.index()]
    }

    /// All six DOF specs, in [`Dof::ALL`] order.
    pub const fn dofs(&self) -> &[DofSpec; 6] {
        &self.dofs
    }

    /// The compliant-slide DOF of a cable archetype, if any.
    pub fn slide_dof(&self) -> Option<Dof> {
        Dof::ALL
            .into_iter()
            .find(|d| d.is_translation() && self.dof(*d).drive.is_some())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
