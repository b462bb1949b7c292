//! Quaternion construction helpers shared by the layout code.

use glam::{Quat, Vec3};

/// Quaternion for a rotation of `angle` radians about an arbitrary axis.
///
/// The axis is normalized first; a zero axis yields the identity rotation.
pub fn quat_about_axis(axis: Vec3, angle: f32) -> Quat {
    match axis.try_normalize() {
        Some(n) => Quat::from_axis_angle(n, angle),
        None => Quat::IDENTITY,
    }
}

/// Orientation of a cable tilted out of the horizontal plane: a yaw about
/// +Z by `azimuth`, then a pitch about the yaw-rotated -Y axis by
/// `elevation`.
///
/// Composition order matters: pitching first would tilt about the wrong
/// axis for any azimuth other than 0. Applied to the local +X forward axis
/// this yields
/// `(cos(azimuth)cos(elevation), sin(azimuth)cos(elevation), sin(elevation))`.
pub fn yaw_pitch(azimuth: f32, elevation: f32) -> Quat {
    let yaw = quat_about_axis(Vec3::Z, azimuth);
    let pitch = quat_about_axis(Vec3::NEG_Y, elevation);
    yaw * pitch
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
