//! In-memory reference consumer.
//!
//! [`SceneDocument`] resolves the builder's index-addressed batches into
//! flat body and joint tables, the way a host scene store would instance
//! them. It validates every descriptor before recording anything, so a
//! bad batch leaves the document untouched.

use glam::{Quat, Vec3};

use cablerig_assembly::{AssemblyDescriptor, BodySide, PayloadInfo};
use cablerig_core::error::IndexError;
use cablerig_core::types::Pose;
use cablerig_joints::JointKind;

use crate::sink::SceneSink;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// What a body slot in the document represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyRole {
    /// The shared payload (always slot 0).
    Payload,
    /// Link `link` of assembly `assembly`.
    Link { assembly: usize, link: usize },
    /// Structural anchor of assembly `assembly`.
    Anchor { assembly: usize },
}

/// One instanced rigid body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyRecord {
    pub role: BodyRole,
    pub pose: Pose,
}

/// One instanced joint, with body indices resolved into document slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointRecord {
    pub assembly: usize,
    pub kind: JointKind,
    pub body0: usize,
    pub body1: usize,
    pub local_pos0: Vec3,
    pub local_pos1: Vec3,
    pub local_rot0: Quat,
    pub local_rot1: Quat,
}

// ---------------------------------------------------------------------------
// SceneDocument
// ---------------------------------------------------------------------------

/// Flat body/joint tables built from one ingested descriptor batch.
#[derive(Debug, Default)]
pub struct SceneDocument {
    bodies: Vec<BodyRecord>,
    joints: Vec<JointRecord>,
    assembly_count: usize,
}

impl SceneDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bodies(&self) -> &[BodyRecord] {
        &self.bodies
    }

    pub fn joints(&self) -> &[JointRecord] {
        &self.joints
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    pub fn assembly_count(&self) -> usize {
        self.assembly_count
    }

    /// Joints of one assembly.
    pub fn assembly_joints(&self, assembly: usize) -> impl Iterator<Item = &JointRecord> {
        self.joints.iter().filter(move |j| j.assembly == assembly)
    }

    fn record_assembly(&mut self, descriptor: &AssemblyDescriptor) {
        let link_base = self.bodies.len();
        for pose in &descriptor.link_poses {
            self.bodies.push(BodyRecord {
                role: BodyRole::Link {
                    assembly: descriptor.index,
                    link: self.bodies.len() - link_base,
                },
                pose: *pose,
            });
        }
        let anchor_slot = self.bodies.len();
        self.bodies.push(BodyRecord {
            role: BodyRole::Anchor {
                assembly: descriptor.index,
            },
            pose: descriptor.anchor.pose,
        });

        let resolve = |side: BodySide, index: usize| match side {
            BodySide::Payload => 0,
            BodySide::Links => link_base + index,
            BodySide::Anchor => anchor_slot,
        };

        for batch in [
            &descriptor.chain,
            &descriptor.payload_attachment,
            &descriptor.structure_attachment,
        ] {
            let kind = descriptor.archetypes[batch.archetype].kind();
            for k in 0..batch.len() {
                self.joints.push(JointRecord {
                    assembly: descriptor.index,
                    kind,
                    body0: resolve(batch.side0, batch.body0[k]),
                    body1: resolve(batch.side1, batch.body1[k]),
                    local_pos0: batch.local_pos0[k],
                    local_pos1: batch.local_pos1[k],
                    local_rot0: batch.local_rot0[k],
                    local_rot1: batch.local_rot1[k],
                });
            }
        }
        self.assembly_count += 1;
    }
}

impl SceneSink for SceneDocument {
    fn ingest(
        &mut self,
        payload: &PayloadInfo,
        assemblies: &[AssemblyDescriptor],
    ) -> Result<(), IndexError> {
        // validate everything up front so nothing partial is recorded
        for descriptor in assemblies {
            descriptor.validate_indices()?;
        }

        self.bodies.push(BodyRecord {
            role: BodyRole::Payload,
            pose: payload.pose,
        });
        for descriptor in assemblies {
            self.record_assembly(descriptor);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "scene-document"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
