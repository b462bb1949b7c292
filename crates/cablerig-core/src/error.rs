use thiserror::Error;

/// Top-level error type for the cablerig workspace.
#[derive(Debug, Error)]
pub enum CablerigError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Index error: {0}")]
    Index(#[from] IndexError),
}

/// Configuration errors.
///
/// All of these are detected before any descriptor is emitted: a build
/// either produces every assembly or nothing.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Degenerate link pitch: {0} (half length + 2*radius must be > 0)")]
    DegenerateLinkPitch(f32),

    #[error("Assembly length {length} yields zero links at pitch {pitch}")]
    NoLinks { length: f32, pitch: f32 },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: &'static str,
    },

    #[error("Inverted {dof} range: low {low} >= high {high}")]
    InvertedRange { dof: &'static str, low: f32, high: f32 },

    #[error("Stiffness must be positive, got {0}")]
    NonPositiveStiffness(f32),

    #[error("Damping must be positive, got {0}")]
    NonPositiveDamping(f32),

    #[error("Limit stiffness ratio {0} must exceed 1 (limit must be stiffer than drive)")]
    LimitNotStifferThanDrive(f32),
}

/// A body or joint index outside its assembly's link range.
///
/// Construction never produces these if its bookkeeping is correct; one
/// surfacing at ingestion is an internal invariant violation, not a
/// recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Assembly {assembly}: body index {index} out of range (len {len})")]
pub struct IndexError {
    pub assembly: usize,
    pub index: usize,
    pub len: usize,
}
