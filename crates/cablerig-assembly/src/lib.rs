//! Cable assembly construction: link-pose layouts, the per-assembly chain
//! builder, and the top-level orchestrator.
//!
//! # Pipeline
//!
//! ```text
//! RigConfig → RigParams → Layout → link poses → archetypes → JointBatches
//!             (derive)    (select)  (per assembly)            (chain + 2 attachments)
//! ```
//!
//! Every assembly depends only on the immutable parameters and the shared
//! payload pose, so the orchestrator builds all of them in parallel and
//! joins before returning the descriptor batch.

pub mod chain;
pub mod descriptor;
pub mod layout;
pub mod rig;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use chain::build_assembly;
pub use descriptor::{
    AnchorKind, AssemblyDescriptor, BodySide, JointBatch, PayloadInfo, StructuralAnchor,
};
pub use layout::Layout;
pub use rig::{build_assemblies, CableRig, RigParams};
