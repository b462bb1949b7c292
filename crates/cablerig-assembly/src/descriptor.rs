//! Emitted descriptor types: joint batches, structural anchors, and the
//! per-assembly bundle handed to the scene/physics collaborator.
//!
//! A [`JointBatch`] is the index-addressable form consumers instance
//! joints from: one archetype reference plus parallel arrays of body
//! indices and local anchor frames. Body indices address into the
//! collection named by the batch's [`BodySide`], never across assemblies.

use glam::{Quat, Vec3};

use cablerig_core::config::RigConfig;
use cablerig_core::error::IndexError;
use cablerig_core::types::{BoxShape, CapsuleShape, Pose};
use cablerig_joints::JointArchetype;

// ---------------------------------------------------------------------------
// PayloadInfo
// ---------------------------------------------------------------------------

/// Pose and mass of the shared payload body.
///
/// The payload is owned by the host scene; the builder only reads it to
/// compute attachment frames and force caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadInfo {
    pub pose: Pose,
    pub mass: f32,
    pub radius: f32,
    pub half_height: f32,
}

impl PayloadInfo {
    /// Payload derived from the build configuration: centered above the
    /// origin at load height, identity orientation.
    pub fn from_config(config: &RigConfig) -> Self {
        Self {
            pose: Pose::from_position(Vec3::new(0.0, 0.0, config.load_height)),
            mass: config.payload_mass,
            radius: config.payload_radius,
            half_height: config.payload_half_height,
        }
    }
}

// ---------------------------------------------------------------------------
// BodySide
// ---------------------------------------------------------------------------

/// The body collection a joint batch's indices address on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodySide {
    /// The assembly's own link collection.
    Links,
    /// The shared payload body (index 0).
    Payload,
    /// The assembly's structural anchor body (index 0).
    Anchor,
}

// ---------------------------------------------------------------------------
// JointBatch
// ---------------------------------------------------------------------------

/// One group of joints sharing an archetype, as parallel arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct JointBatch {
    /// Index into the assembly's archetype catalog.
    pub archetype: usize,
    /// Collection addressed by `body0` indices.
    pub side0: BodySide,
    /// Collection addressed by `body1` indices.
    pub side1: BodySide,
    pub body0: Vec<usize>,
    pub body1: Vec<usize>,
    pub local_pos0: Vec<Vec3>,
    pub local_pos1: Vec<Vec3>,
    pub local_rot0: Vec<Quat>,
    pub local_rot1: Vec<Quat>,
}

impl JointBatch {
    pub fn new(archetype: usize, side0: BodySide, side1: BodySide) -> Self {
        Self {
            archetype,
            side0,
            side1,
            body0: Vec::new(),
            body1: Vec::new(),
            local_pos0: Vec::new(),
            local_pos1: Vec::new(),
            local_rot0: Vec::new(),
            local_rot1: Vec::new(),
        }
    }

    /// Append one joint instance, keeping all six arrays in lockstep.
    #[allow(clippy::too_many_arguments)]
    pub fn push(
        &mut self,
        body0: usize,
        body1: usize,
        local_pos0: Vec3,
        local_pos1: Vec3,
        local_rot0: Quat,
        local_rot1: Quat,
    ) {
        self.body0.push(body0);
        self.body1.push(body1);
        self.local_pos0.push(local_pos0);
        self.local_pos1.push(local_pos1);
        self.local_rot0.push(local_rot0);
        self.local_rot1.push(local_rot1);
    }

    /// Number of joint instances in the batch.
    pub fn len(&self) -> usize {
        self.body0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body0.is_empty()
    }

    /// Whether all six parallel arrays have the same length.
    pub fn is_consistent(&self) -> bool {
        let n = self.body0.len();
        self.body1.len() == n
            && self.local_pos0.len() == n
            && self.local_pos1.len() == n
            && self.local_rot0.len() == n
            && self.local_rot1.len() == n
    }
}

// ---------------------------------------------------------------------------
// StructuralAnchor
// ---------------------------------------------------------------------------

/// What kind of structure the cable's far end fastens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    /// The shared table top (vertical layout).
    Table,
    /// A dedicated counterweight box (radial layout).
    Box,
}

/// Pose and extent of one assembly's structural anchor body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructuralAnchor {
    pub kind: AnchorKind,
    pub pose: Pose,
    pub shape: BoxShape,
}

// ---------------------------------------------------------------------------
// AssemblyDescriptor
// ---------------------------------------------------------------------------

/// Everything the scene/physics collaborator needs to instance one cable
/// assembly: the link prototype and poses, the archetype catalog, and the
/// three joint groups.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyDescriptor {
    /// Assembly ordinal within the build.
    pub index: usize,
    /// Capsule prototype shared by every link.
    pub capsule: CapsuleShape,
    /// Ordered link poses; the link at index 0 meets the payload.
    pub link_poses: Vec<Pose>,
    /// Archetype catalog referenced by the joint batches.
    pub archetypes: Vec<JointArchetype>,
    /// Interior link-to-link joints (`num_links - 1` instances).
    pub chain: JointBatch,
    /// Payload-to-first-link joint (always one instance).
    pub payload_attachment: JointBatch,
    /// Last-link-to-anchor joint (always one instance).
    pub structure_attachment: JointBatch,
    /// The structure this assembly fastens to.
    pub anchor: StructuralAnchor,
}

impl AssemblyDescriptor {
    pub fn num_links(&self) -> usize {
        self.link_poses.len()
    }

    /// Verify every link index in every batch is in range and the parallel
    /// arrays are consistent.
    ///
    /// Construction cannot produce an out-of-range index unless its
    /// bookkeeping is broken, so a failure here is fatal to the build.
    pub fn validate_indices(&self) -> Result<(), IndexError> {
        let n = self.num_links();
        for batch in [&self.chain, &self.payload_attachment, &self.structure_attachment] {
            debug_assert!(batch.is_consistent());
            for (side, indices) in [(batch.side0, &batch.body0), (batch.side1, &batch.body1)] {
                // payload and anchor are single bodies: only index 0 is valid
                let len = match side {
                    BodySide::Links => n,
                    BodySide::Payload | BodySide::Anchor => 1,
                };
                if let Some(&bad) = indices.iter().find(|&&i| i >= len) {
                    return Err(IndexError {
                        assembly: self.index,
                        index: bad,
                        len,
                    });
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
