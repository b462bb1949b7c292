//! Collaborator-agnostic descriptor sink trait.
//!
//! Any host (scene document store, physics engine bridge, test double)
//! implements [`SceneSink`] and receives the complete descriptor batch in
//! one call. Ingestion is single-writer: the builder joins its parallel
//! workers first, then hands over everything through `&mut self`.

use cablerig_assembly::{AssemblyDescriptor, PayloadInfo};
use cablerig_core::error::IndexError;

/// Trait that concrete descriptor consumers must implement.
///
/// The consumer is responsible for:
/// - Instancing the shared payload body and each assembly's anchor body
/// - Instancing one rigid body per link pose from the capsule prototype
/// - Instancing joints from each batch's archetype and parallel arrays
pub trait SceneSink {
    /// Ingest one build's payload and assembly descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if any batch addresses a body outside its
    /// collection (an internal invariant violation); the sink must not
    /// keep a partial batch.
    fn ingest(
        &mut self,
        payload: &PayloadInfo,
        assemblies: &[AssemblyDescriptor],
    ) -> Result<(), IndexError>;

    /// Human-readable sink name (e.g., "scene-document").
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
