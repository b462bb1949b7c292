//! Shared foundation for the cablerig workspace: vector/quaternion helpers,
//! stage unit/axis context, common geometry types, configuration, and the
//! error taxonomy.
//!
//! Everything here is plain data and pure functions, with no engine or I/O
//! dependencies beyond TOML config loading.

pub mod config;
pub mod error;
pub mod math;
pub mod stage;
pub mod types;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use config::{CablePolicy, RigConfig, GRAVITY};
pub use error::{CablerigError, ConfigError, IndexError};
pub use stage::{StageContext, UpAxis};
pub use types::{BoxShape, CapsuleShape, Pose, TranslationAxis};
