//! Joint constraint synthesis: per-degree-of-freedom motion specs and the
//! three reusable joint archetypes (cable, fixed, universal).
//!
//! An archetype is an immutable DOF table built once per assembly and
//! referenced by every joint instance that shares it. Interior chain
//! joints are physically identical, so they all point at one record.

pub mod archetype;
pub mod dof;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use archetype::{JointArchetype, JointKind};
pub use dof::{Dof, DofMotion, DofSpec, Drive, LimitSpring};
