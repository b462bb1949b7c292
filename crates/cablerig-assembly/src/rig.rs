//! Top-level build orchestration.
//!
//! [`RigParams::derive`] turns the raw configuration and stage context into
//! the derived quantities every assembly shares (link pitch and count,
//! scale factor, table height). [`build_assemblies`] then selects the
//! layout and builds one descriptor per assembly, in parallel, since
//! assemblies only read the shared parameters.

use rayon::prelude::*;

use cablerig_core::config::RigConfig;
use cablerig_core::error::ConfigError;
use cablerig_core::stage::StageContext;

use crate::chain::build_assembly;
use crate::descriptor::{AssemblyDescriptor, PayloadInfo};
use crate::layout::Layout;

// ---------------------------------------------------------------------------
// RigParams
// ---------------------------------------------------------------------------

/// Validated configuration plus the quantities derived from it once per
/// build. Immutable and shared read-only across assembly workers.
#[derive(Debug, Clone)]
pub struct RigParams {
    pub config: RigConfig,
    pub stage: StageContext,
    /// Links per assembly.
    pub num_links: usize,
    /// Length one link occupies along the cable (m).
    pub link_pitch: f32,
    /// Half of the pitch: the local offset of a link's capsule end (m).
    pub capsule_half: f32,
    /// Stage-unit normalization factor.
    pub scale_factor: f32,
    /// Top surface height of the table the vertical layout hangs from (m).
    pub table_height: f32,
    /// Vertical shift that would put the table surface at the origin (m).
    pub floor_offset: f32,
}

impl RigParams {
    /// Validate the configuration and derive the shared build parameters.
    ///
    /// Fails fast: no descriptor is built from a configuration that does
    /// not validate.
    pub fn derive(config: &RigConfig, stage: &StageContext) -> Result<Self, ConfigError> {
        config.validate()?;
        let link_pitch = config.link_pitch();
        let num_links = config.num_links()?;
        let scale_factor = stage.scale_factor();
        let table_height = config.load_height
            + config.payload_half_height
            + config.assembly_length
            + config.table_thickness * scale_factor;

        Ok(Self {
            config: config.clone(),
            stage: *stage,
            num_links,
            link_pitch,
            capsule_half: link_pitch * 0.5,
            scale_factor,
            table_height,
            floor_offset: -table_height,
        })
    }

    /// Layout resolved from the assembly count.
    pub fn layout(&self) -> Layout {
        Layout::for_assembly_count(self.config.num_assemblies, self.config.elevation_angle)
    }

    /// Express a build-frame position in the host stage's frame.
    ///
    /// Applies the floor offset so the table surface lands at the stage
    /// origin, then the stage's axis permutation and unit scale. Hosts use
    /// this when authoring the static geometry around the descriptors.
    pub fn stage_position(&self, position: glam::Vec3) -> glam::Vec3 {
        self.stage.orient_pos(position, self.floor_offset)
    }
}

// ---------------------------------------------------------------------------
// build_assemblies
// ---------------------------------------------------------------------------

/// Build every assembly descriptor for a configuration.
///
/// Assemblies are independent given the shared parameters and payload, so
/// they are built on parallel workers and joined before returning; the
/// result is ordered by assembly index either way. Fails without emitting
/// anything if the configuration is invalid.
pub fn build_assemblies(
    config: &RigConfig,
    payload: &PayloadInfo,
    stage: &StageContext,
) -> Result<Vec<AssemblyDescriptor>, ConfigError> {
    let params = RigParams::derive(config, stage)?;
    let layout = params.layout();

    let descriptors = (0..config.num_assemblies)
        .into_par_iter()
        .map(|index| build_assembly(&params, layout, payload, index))
        .collect::<Result<Vec<_>, ConfigError>>()?;

    log::info!(
        "cablerig: built {} {} assemblies ({} links, {} chain joints each)",
        descriptors.len(),
        layout.name(),
        params.num_links,
        params.num_links - 1
    );

    Ok(descriptors)
}

// ---------------------------------------------------------------------------
// CableRig
// ---------------------------------------------------------------------------

/// Convenience front end binding a configuration and stage context, with
/// the payload derived from the configuration.
#[derive(Debug, Clone)]
pub struct CableRig {
    config: RigConfig,
    stage: StageContext,
}

impl CableRig {
    /// Create a rig builder from a validated configuration.
    pub fn new(config: RigConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            stage: StageContext::default(),
        })
    }

    /// Override the stage context (default: Z-up, centimeter units).
    #[must_use]
    pub const fn with_stage(mut self, stage: StageContext) -> Self {
        self.stage = stage;
        self
    }

    pub const fn config(&self) -> &RigConfig {
        &self.config
    }

    /// The payload this rig hangs assemblies from.
    pub fn payload(&self) -> PayloadInfo {
        PayloadInfo::from_config(&self.config)
    }

    /// Build all assembly descriptors.
    pub fn build(&self) -> Result<Vec<AssemblyDescriptor>, ConfigError> {
        build_assemblies(&self.config, &self.payload(), &self.stage)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -- RigParams --

    #[test]
    fn derive_computes_shared_quantities() {
        let params = RigParams::derive(&RigConfig::default(), &StageContext::default()).unwrap();
        assert_eq!(params.num_links, 10);
        assert_relative_eq!(params.link_pitch, 0.1, epsilon = 1e-6);
        assert_relative_eq!(params.capsule_half, 0.05, epsilon = 1e-6);
        assert_relative_eq!(params.scale_factor, 1.0, epsilon = 1e-6);
        // 2.0 + 0.03 + 1.0 + 6.0
        assert_relative_eq!(params.table_height, 9.03, epsilon = 1e-4);
        assert_relative_eq!(params.floor_offset, -9.03, epsilon = 1e-4);
    }

    #[test]
    fn derive_rejects_invalid_config() {
        let cfg = RigConfig {
            assembly_length: 0.01,
            ..RigConfig::default()
        };
        assert!(RigParams::derive(&cfg, &StageContext::default()).is_err());
    }

    #[test]
    fn stage_position_puts_table_surface_at_origin() {
        use cablerig_core::stage::UpAxis;
        use glam::Vec3;

        let params = RigParams::derive(&RigConfig::default(), &StageContext::default()).unwrap();
        let top = params.stage_position(Vec3::new(0.0, 0.0, params.table_height));
        assert_relative_eq!(top.z, 0.0, epsilon = 1e-4);

        // payload ends up below the table by the cable run, in stage axes
        let params = RigParams::derive(
            &RigConfig::default(),
            &StageContext::new(UpAxis::Y, 0.01),
        )
        .unwrap();
        let payload = params.stage_position(Vec3::new(0.0, 0.0, 2.0));
        assert_relative_eq!(payload.y, 2.0 - params.table_height, epsilon = 1e-4);
    }

    #[test]
    fn layout_selection_by_count() {
        let mut cfg = RigConfig::default();
        let params = RigParams::derive(&cfg, &StageContext::default()).unwrap();
        assert_eq!(params.layout(), Layout::Vertical);

        cfg.num_assemblies = 4;
        cfg.elevation_angle = 0.7;
        let params = RigParams::derive(&cfg, &StageContext::default()).unwrap();
        assert_eq!(
            params.layout(),
            Layout::Radial {
                elevation_angle: 0.7
            }
        );
    }

    // -- build_assemblies --

    #[test]
    fn build_emits_one_descriptor_per_assembly_in_order() {
        let cfg = RigConfig {
            num_assemblies: 6,
            elevation_angle: 0.2,
            ..RigConfig::default()
        };
        let payload = PayloadInfo::from_config(&cfg);
        let descriptors =
            build_assemblies(&cfg, &payload, &StageContext::default()).unwrap();
        assert_eq!(descriptors.len(), 6);
        for (i, d) in descriptors.iter().enumerate() {
            assert_eq!(d.index, i);
        }
    }

    #[test]
    fn parallel_build_matches_serial() {
        let cfg = RigConfig {
            num_assemblies: 5,
            elevation_angle: 0.4,
            ..RigConfig::default()
        };
        let payload = PayloadInfo::from_config(&cfg);
        let stage = StageContext::default();
        let parallel = build_assemblies(&cfg, &payload, &stage).unwrap();

        let params = RigParams::derive(&cfg, &stage).unwrap();
        let layout = params.layout();
        let serial: Vec<_> = (0..cfg.num_assemblies)
            .map(|i| build_assembly(&params, layout, &payload, i).unwrap())
            .collect();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn build_fails_fast_without_partial_output() {
        let cfg = RigConfig {
            num_assemblies: 4,
            payload_mass: -1.0,
            ..RigConfig::default()
        };
        let payload = PayloadInfo::from_config(&cfg);
        assert!(build_assemblies(&cfg, &payload, &StageContext::default()).is_err());
    }

    // -- CableRig --

    #[test]
    fn cable_rig_builds_vertical_baseline() {
        let rig = CableRig::new(RigConfig::default()).unwrap();
        let descriptors = rig.build().unwrap();
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].num_links(), 10);
        assert_eq!(descriptors[0].chain.len(), 9);
    }

    #[test]
    fn cable_rig_rejects_invalid_config_up_front() {
        let cfg = RigConfig {
            num_assemblies: 0,
            ..RigConfig::default()
        };
        assert!(CableRig::new(cfg).is_err());
    }

    #[test]
    fn stage_override_reorients_anchor_extents() {
        use cablerig_core::stage::UpAxis;
        use glam::Vec3;

        let rig = CableRig::new(RigConfig::default())
            .unwrap()
            .with_stage(StageContext::new(UpAxis::Y, 0.01));
        let descriptors = rig.build().unwrap();
        // table dims (200, 100, 6) land permuted as (y, z, x) before halving
        assert_eq!(
            descriptors[0].anchor.shape.half_extents,
            Vec3::new(50.0, 3.0, 100.0)
        );
    }

    #[test]
    fn cable_rig_payload_from_config() {
        let rig = CableRig::new(RigConfig {
            payload_mass: 3.5,
            ..RigConfig::default()
        })
        .unwrap();
        assert!((rig.payload().mass - 3.5).abs() < f32::EPSILON);
    }
}
