//! Build configuration for cable assemblies.
//!
//! [`RigConfig`] collects every tunable the generator consumes, with TOML
//! loading and fail-fast validation. Defaults reproduce the reference
//! parameterization this generator was tuned with.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Standard gravity (m/s^2), used for the slide-drive force cap.
pub const GRAVITY: f32 = 9.81;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_num_assemblies() -> usize {
    1
}
const fn default_assembly_length() -> f32 {
    1.0
}
const fn default_payload_mass() -> f32 {
    1.0
}
const fn default_load_height() -> f32 {
    2.0
}
const fn default_link_half_length() -> f32 {
    0.06
}
const fn default_link_radius() -> f32 {
    0.02
}
const fn default_link_mass() -> f32 {
    0.008
}
const fn default_assembly_spacing() -> f32 {
    15.0
}
const fn default_payload_radius() -> f32 {
    0.24
}
const fn default_payload_half_height() -> f32 {
    0.03
}
const fn default_table_thickness() -> f32 {
    6.0
}
const fn default_table_surface() -> [f32; 2] {
    [200.0, 100.0]
}
const fn default_box_size() -> f32 {
    12.0
}
const fn default_drive_stiffness() -> f32 {
    1e5
}
const fn default_drive_damping() -> f32 {
    1e3
}
const fn default_limit_stiffness_ratio() -> f32 {
    11.0
}
const fn default_max_force_factor() -> f32 {
    10.0
}
const fn default_contact_distance() -> f32 {
    1e-4
}
const fn default_slide_range() -> [f32; 2] {
    [-1.0, 0.01]
}
fn default_cone_angle_limit() -> f32 {
    160.0_f32.to_radians()
}

// ---------------------------------------------------------------------------
// CablePolicy
// ---------------------------------------------------------------------------

/// Numeric policy for the compliant sliding joint.
///
/// The slide DOF is driven by a spring-damper (`drive_stiffness`,
/// `drive_damping`) with a force cap proportional to payload weight, and
/// bounded by a limit spring that must be materially stiffer than the drive:
/// once the joint approaches its range boundary the limit, not the drive,
/// governs. A ratio at or below 1 makes the whole cable soft and it sags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CablePolicy {
    /// Spring stiffness of the slide drive (N/m).
    #[serde(default = "default_drive_stiffness")]
    pub drive_stiffness: f32,

    /// Damping of the slide drive (N*s/m).
    #[serde(default = "default_drive_damping")]
    pub drive_damping: f32,

    /// Limit-spring stiffness as a multiple of `drive_stiffness`. Must be > 1.
    #[serde(default = "default_limit_stiffness_ratio")]
    pub limit_stiffness_ratio: f32,

    /// Drive force cap as a multiple of payload weight (m*g).
    #[serde(default = "default_max_force_factor")]
    pub max_force_factor: f32,

    /// Contact distance at which the limit spring engages (m).
    #[serde(default = "default_contact_distance")]
    pub contact_distance: f32,

    /// Slide range `[low, high]`: a compressive margin up to near zero,
    /// approximating inextensibility with slight elasticity.
    #[serde(default = "default_slide_range")]
    pub slide_range: [f32; 2],

    /// Swing cone half-angle for the universal joint (radians).
    #[serde(default = "default_cone_angle_limit")]
    pub cone_angle_limit: f32,
}

impl Default for CablePolicy {
    fn default() -> Self {
        Self {
            drive_stiffness: default_drive_stiffness(),
            drive_damping: default_drive_damping(),
            limit_stiffness_ratio: default_limit_stiffness_ratio(),
            max_force_factor: default_max_force_factor(),
            contact_distance: default_contact_distance(),
            slide_range: default_slide_range(),
            cone_angle_limit: default_cone_angle_limit(),
        }
    }
}

impl CablePolicy {
    /// Limit-spring stiffness (N/m).
    pub fn limit_stiffness(&self) -> f32 {
        self.limit_stiffness_ratio * self.drive_stiffness
    }

    /// Limit-spring damping (N*s/m). The limit reuses the drive damping.
    pub const fn limit_damping(&self) -> f32 {
        self.drive_damping
    }

    /// Drive force cap for a given payload mass (N).
    pub fn max_force(&self, payload_mass: f32) -> f32 {
        self.max_force_factor * payload_mass * GRAVITY
    }

    /// Validate the policy. Returns Err on the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.drive_stiffness <= 0.0 {
            return Err(ConfigError::NonPositiveStiffness(self.drive_stiffness));
        }
        if self.drive_damping <= 0.0 {
            return Err(ConfigError::NonPositiveDamping(self.drive_damping));
        }
        if self.limit_stiffness_ratio <= 1.0 {
            return Err(ConfigError::LimitNotStifferThanDrive(
                self.limit_stiffness_ratio,
            ));
        }
        if self.slide_range[0] >= self.slide_range[1] {
            return Err(ConfigError::InvertedRange {
                dof: "slide",
                low: self.slide_range[0],
                high: self.slide_range[1],
            });
        }
        if self.contact_distance <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "contact_distance",
                message: "must be positive",
            });
        }
        if self.cone_angle_limit <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "cone_angle_limit",
                message: "must be positive",
            });
        }
        if self.max_force_factor <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "max_force_factor",
                message: "must be positive",
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// RigConfig
// ---------------------------------------------------------------------------

/// Complete configuration for one build request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigConfig {
    /// Number of cable assemblies. 1 selects the vertical layout, 2+ the
    /// radial layout.
    #[serde(default = "default_num_assemblies")]
    pub num_assemblies: usize,

    /// Target cable length (m). Link count is derived from this.
    #[serde(default = "default_assembly_length")]
    pub assembly_length: f32,

    /// Mass of the shared payload body (kg).
    #[serde(default = "default_payload_mass")]
    pub payload_mass: f32,

    /// Height of the payload center above the floor (m).
    #[serde(default = "default_load_height")]
    pub load_height: f32,

    /// Tilt of each radial assembly away from the equatorial plane
    /// (radians, 0 = horizontal, pi/2 = vertical). Ignored by the vertical
    /// layout.
    #[serde(default)]
    pub elevation_angle: f32,

    /// Half length of one link's cylindrical section (m).
    #[serde(default = "default_link_half_length")]
    pub link_half_length: f32,

    /// Capsule radius of one link (m).
    #[serde(default = "default_link_radius")]
    pub link_radius: f32,

    /// Mass of one link (kg).
    #[serde(default = "default_link_mass")]
    pub link_mass: f32,

    /// Y pitch between parallel vertical assemblies (m).
    #[serde(default = "default_assembly_spacing")]
    pub assembly_spacing: f32,

    /// Payload cylinder radius (m).
    #[serde(default = "default_payload_radius")]
    pub payload_radius: f32,

    /// Half height of the payload cylinder (m).
    #[serde(default = "default_payload_half_height")]
    pub payload_half_height: f32,

    /// Table top thickness, in stage units before scaling.
    #[serde(default = "default_table_thickness")]
    pub table_thickness: f32,

    /// Table surface dimensions `[x, y]`, in stage units before scaling.
    #[serde(default = "default_table_surface")]
    pub table_surface: [f32; 2],

    /// Counterweight box edge length, in stage units before scaling.
    #[serde(default = "default_box_size")]
    pub box_size: f32,

    /// Sliding-joint numeric policy.
    #[serde(default)]
    pub cable: CablePolicy,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            num_assemblies: default_num_assemblies(),
            assembly_length: default_assembly_length(),
            payload_mass: default_payload_mass(),
            load_height: default_load_height(),
            elevation_angle: 0.0,
            link_half_length: default_link_half_length(),
            link_radius: default_link_radius(),
            link_mass: default_link_mass(),
            assembly_spacing: default_assembly_spacing(),
            payload_radius: default_payload_radius(),
            payload_half_height: default_payload_half_height(),
            table_thickness: default_table_thickness(),
            table_surface: default_table_surface(),
            box_size: default_box_size(),
            cable: CablePolicy::default(),
        }
    }
}

impl RigConfig {
    /// Link pitch: the length one link occupies along the cable (m).
    pub fn link_pitch(&self) -> f32 {
        self.link_half_length + 2.0 * self.link_radius
    }

    /// Derived link count: `floor(assembly_length / pitch)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DegenerateLinkPitch`] for a non-positive pitch
    /// and [`ConfigError::NoLinks`] when the length yields zero links.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn num_links(&self) -> Result<usize, ConfigError> {
        let pitch = self.link_pitch();
        if pitch <= 0.0 {
            return Err(ConfigError::DegenerateLinkPitch(pitch));
        }
        let n = (self.assembly_length / pitch).floor();
        if n < 1.0 {
            return Err(ConfigError::NoLinks {
                length: self.assembly_length,
                pitch,
            });
        }
        Ok(n as usize)
    }

    /// Validate configuration. Returns Err on the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.num_links()?;
        if self.num_assemblies < 1 {
            return Err(ConfigError::InvalidValue {
                field: "num_assemblies",
                message: "must be at least 1",
            });
        }
        if self.payload_mass <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "payload_mass",
                message: "must be positive",
            });
        }
        if self.payload_radius <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "payload_radius",
                message: "must be positive",
            });
        }
        if self.link_mass <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "link_mass",
                message: "must be positive",
            });
        }
        self.cable.validate()
    }

    /// Load from a TOML file and validate.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ---- defaults ----

    #[test]
    fn rig_config_default_values() {
        let cfg = RigConfig::default();
        assert_eq!(cfg.num_assemblies, 1);
        assert!((cfg.assembly_length - 1.0).abs() < f32::EPSILON);
        assert!((cfg.load_height - 2.0).abs() < f32::EPSILON);
        assert!((cfg.link_half_length - 0.06).abs() < f32::EPSILON);
        assert!((cfg.link_radius - 0.02).abs() < f32::EPSILON);
        assert!((cfg.payload_radius - 0.24).abs() < f32::EPSILON);
        assert!((cfg.payload_half_height - 0.03).abs() < f32::EPSILON);
        assert!((cfg.assembly_spacing - 15.0).abs() < f32::EPSILON);
        assert!(cfg.elevation_angle.abs() < f32::EPSILON);
    }

    #[test]
    fn cable_policy_default_values() {
        let p = CablePolicy::default();
        assert!((p.drive_stiffness - 1e5).abs() < f32::EPSILON);
        assert!((p.drive_damping - 1e3).abs() < f32::EPSILON);
        assert!((p.limit_stiffness_ratio - 11.0).abs() < f32::EPSILON);
        assert!((p.contact_distance - 1e-4).abs() < f32::EPSILON);
        assert!((p.slide_range[0] - (-1.0)).abs() < f32::EPSILON);
        assert!((p.slide_range[1] - 0.01).abs() < f32::EPSILON);
        assert!((p.cone_angle_limit - 160.0_f32.to_radians()).abs() < 1e-6);
    }

    // ---- derived quantities ----

    #[test]
    fn link_pitch_from_defaults() {
        let cfg = RigConfig::default();
        // 0.06 + 2*0.02 = 0.1
        assert!((cfg.link_pitch() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn num_links_floor_division() {
        let cfg = RigConfig::default();
        assert_eq!(cfg.num_links().unwrap(), 10); // 1.0 / 0.1

        let cfg = RigConfig {
            assembly_length: 0.95,
            ..RigConfig::default()
        };
        assert_eq!(cfg.num_links().unwrap(), 9);
    }

    #[test]
    fn num_links_rejects_zero() {
        let cfg = RigConfig {
            assembly_length: 0.05,
            ..RigConfig::default()
        };
        assert!(matches!(cfg.num_links(), Err(ConfigError::NoLinks { .. })));
    }

    #[test]
    fn num_links_rejects_degenerate_pitch() {
        let cfg = RigConfig {
            link_half_length: 0.0,
            link_radius: 0.0,
            ..RigConfig::default()
        };
        assert!(matches!(
            cfg.num_links(),
            Err(ConfigError::DegenerateLinkPitch(_))
        ));
    }

    #[test]
    fn limit_stiffness_exceeds_drive_stiffness() {
        let p = CablePolicy::default();
        assert!(p.limit_stiffness() > p.drive_stiffness);
        assert!((p.limit_stiffness() - 11.0 * 1e5).abs() < 1.0);
        assert!((p.limit_damping() - p.drive_damping).abs() < f32::EPSILON);
    }

    #[test]
    fn max_force_scales_with_payload_weight() {
        let p = CablePolicy::default();
        assert!((p.max_force(2.0) - 10.0 * 2.0 * GRAVITY).abs() < 1e-3);
    }

    // ---- validation ----

    #[test]
    fn validate_default_ok() {
        assert!(RigConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_assemblies() {
        let cfg = RigConfig {
            num_assemblies: 0,
            ..RigConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidValue {
                field: "num_assemblies",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_non_positive_payload_mass() {
        let cfg = RigConfig {
            payload_mass: 0.0,
            ..RigConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_soft_limit_ratio() {
        let cfg = RigConfig {
            cable: CablePolicy {
                limit_stiffness_ratio: 1.0,
                ..CablePolicy::default()
            },
            ..RigConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::LimitNotStifferThanDrive(_))
        ));
    }

    #[test]
    fn validate_rejects_inverted_slide_range() {
        let cfg = RigConfig {
            cable: CablePolicy {
                slide_range: [0.01, -1.0],
                ..CablePolicy::default()
            },
            ..RigConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvertedRange { dof: "slide", .. })
        ));
    }

    #[test]
    fn validate_rejects_non_positive_stiffness() {
        let cfg = RigConfig {
            cable: CablePolicy {
                drive_stiffness: -1.0,
                ..CablePolicy::default()
            },
            ..RigConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositiveStiffness(_))
        ));
    }

    // ---- TOML ----

    #[test]
    fn toml_deserialization_with_overrides() {
        let toml_str = r"
            num_assemblies = 4
            assembly_length = 2.0
            payload_mass = 5.0
            elevation_angle = 0.5

            [cable]
            drive_stiffness = 2e5
        ";
        let cfg: RigConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.num_assemblies, 4);
        assert!((cfg.assembly_length - 2.0).abs() < f32::EPSILON);
        assert!((cfg.payload_mass - 5.0).abs() < f32::EPSILON);
        assert!((cfg.elevation_angle - 0.5).abs() < f32::EPSILON);
        assert!((cfg.cable.drive_stiffness - 2e5).abs() < 1.0);
        // untouched fields keep defaults
        assert!((cfg.cable.drive_damping - 1e3).abs() < f32::EPSILON);
        assert!((cfg.link_radius - 0.02).abs() < f32::EPSILON);
    }

    #[test]
    fn toml_empty_gives_defaults() {
        let cfg: RigConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, RigConfig::default());
    }

    #[test]
    fn from_file_roundtrip() {
        let dir = std::env::temp_dir().join("cablerig_test_config");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rig.toml");
        std::fs::write(
            &path,
            r"
            num_assemblies = 6
            assembly_length = 1.5
        ",
        )
        .unwrap();

        let cfg = RigConfig::from_file(&path).unwrap();
        assert_eq!(cfg.num_assemblies, 6);
        assert_eq!(cfg.num_links().unwrap(), 15);

        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn from_file_rejects_invalid() {
        let dir = std::env::temp_dir().join("cablerig_test_config_invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "assembly_length = 0.01").unwrap();

        assert!(RigConfig::from_file(&path).is_err());

        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn from_file_not_found() {
        assert!(RigConfig::from_file("/nonexistent/rig.toml").is_err());
    }
}
