//! The seam between the assembly builder and the host scene/physics
//! collaborator.
//!
//! The builder emits index-addressed descriptor batches; whatever ingests
//! them (a scene document store, a physics engine bridge) implements
//! [`SceneSink`]. [`SceneDocument`] is the in-memory reference consumer:
//! it resolves batches into flat body/joint tables and enforces the index
//! invariants the builder promises.

pub mod document;
pub mod sink;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use document::{BodyRecord, BodyRole, JointRecord, SceneDocument};
pub use sink::SceneSink;
