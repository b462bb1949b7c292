//! Per-assembly chain construction.
//!
//! Wires an assembly's links into a chain with interior compliant joints,
//! fastens link 0 to the payload and the last link to the structural
//! anchor, and computes the anchor body's own pose. All indices address
//! the assembly's own link collection.

use glam::{Quat, Vec3};

use cablerig_core::error::ConfigError;
use cablerig_core::types::{BoxShape, CapsuleShape, Pose};
use cablerig_joints::JointArchetype;

use crate::descriptor::{
    AnchorKind, AssemblyDescriptor, BodySide, JointBatch, PayloadInfo, StructuralAnchor,
};
use crate::layout::{azimuth, Layout};
use crate::rig::RigParams;

/// Catalog slot of the cable archetype (chain and payload joints).
const CABLE_SLOT: usize = 0;
/// Catalog slot of the universal archetype (structure joint).
const UNIVERSAL_SLOT: usize = 1;

// ---------------------------------------------------------------------------
// build_assembly
// ---------------------------------------------------------------------------

/// Build the descriptor for assembly `index`.
///
/// Interior joints connect consecutive links at their facing capsule ends
/// (`+half` on the earlier link, `-half` on the later), all sharing the
/// cable archetype. The payload joint is also a cable joint; the structure
/// joint is universal so the chain end can swing but not twist.
pub fn build_assembly(
    params: &RigParams,
    layout: Layout,
    payload: &PayloadInfo,
    index: usize,
) -> Result<AssemblyDescriptor, ConfigError> {
    let cfg = &params.config;
    let axis = layout.translation_axis();
    let half = params.capsule_half;
    let n = params.num_links;
    let along = axis.unit() * half;

    let link_poses = layout.link_poses(params, index);

    let archetypes = vec![
        JointArchetype::cable(axis, &cfg.cable, payload.mass)?,
        JointArchetype::universal(axis, &cfg.cable)?,
    ];

    // 1) Interior chain: link i's outward face meets link i+1's inward face.
    let mut chain = JointBatch::new(CABLE_SLOT, BodySide::Links, BodySide::Links);
    for i in 0..n - 1 {
        chain.push(i, i + 1, along, -along, Quat::IDENTITY, Quat::IDENTITY);
    }

    // 2) Payload to link 0. The payload keeps identity orientation in the
    //    radial layout, so the anchor frame itself is placed on the equator
    //    and rotated into the assembly's direction.
    let a = azimuth(cfg.num_assemblies, index);
    let (payload_pos, payload_rot) = match layout {
        Layout::Vertical => (
            Vec3::new(0.0, 0.0, payload.half_height),
            Quat::IDENTITY,
        ),
        Layout::Radial { .. } => (
            Vec3::new(payload.radius * a.cos(), payload.radius * a.sin(), 0.0),
            layout.orientation(a),
        ),
    };
    let mut payload_attachment = JointBatch::new(CABLE_SLOT, BodySide::Payload, BodySide::Links);
    payload_attachment.push(0, 0, payload_pos, -along, payload_rot, Quat::IDENTITY);

    // 3) Last link to the structural anchor, with the anchor-side frame
    //    recessed by the anchor's half depth along the attachment face.
    let (anchor, anchor_pos) = match layout {
        Layout::Vertical => table_anchor(params),
        Layout::Radial { .. } => box_anchor(params, layout, a, link_poses[n - 1].position),
    };
    let mut structure_attachment = JointBatch::new(UNIVERSAL_SLOT, BodySide::Links, BodySide::Anchor);
    structure_attachment.push(n - 1, 0, along, anchor_pos, Quat::IDENTITY, Quat::IDENTITY);

    let descriptor = AssemblyDescriptor {
        index,
        capsule: CapsuleShape {
            half_length: cfg.link_half_length,
            radius: cfg.link_radius,
            axis,
            mass: cfg.link_mass,
        },
        link_poses,
        archetypes,
        chain,
        payload_attachment,
        structure_attachment,
        anchor,
    };
    debug_assert!(descriptor.validate_indices().is_ok());
    Ok(descriptor)
}

// ---------------------------------------------------------------------------
// Anchor placement
// ---------------------------------------------------------------------------

/// Shared table top: centered over the origin, its underside at the height
/// the cable run requires.
fn table_anchor(params: &RigParams) -> (StructuralAnchor, Vec3) {
    let cfg = &params.config;
    let s = params.scale_factor;
    let half_thickness = cfg.table_thickness * s * 0.5;

    let anchor = StructuralAnchor {
        kind: AnchorKind::Table,
        pose: Pose::from_position(Vec3::new(
            0.0,
            0.0,
            params.table_height - half_thickness,
        )),
        shape: BoxShape::new(
            params.stage.orient_dim(Vec3::new(
                cfg.table_surface[0],
                cfg.table_surface[1],
                cfg.table_thickness,
            )) * 0.5,
        ),
    };
    (anchor, Vec3::new(0.0, 0.0, -half_thickness))
}

/// Dedicated counterweight box just past the last link, oriented with its
/// assembly.
fn box_anchor(
    params: &RigParams,
    layout: Layout,
    azimuth: f32,
    last_link: Vec3,
) -> (StructuralAnchor, Vec3) {
    let cfg = &params.config;
    let box_half = cfg.box_size * params.scale_factor * 0.5;
    let direction = layout.direction(azimuth);

    let anchor = StructuralAnchor {
        kind: AnchorKind::Box,
        pose: Pose::new(
            last_link + direction * (params.capsule_half + box_half),
            layout.orientation(azimuth),
        ),
        shape: BoxShape::new(params.stage.orient_dim(Vec3::splat(cfg.box_size)) * 0.5),
    };
    (anchor, layout.translation_axis().unit() * -box_half)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
