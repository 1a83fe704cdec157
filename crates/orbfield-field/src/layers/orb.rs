//! Orb layer: a Fibonacci-style point sphere that pulsates and rotates.

use std::f64::consts::PI;

use orbfield_core::{FieldConfig, Point};

/// Angular frequency of the radius pulsation, in radians per millisecond.
pub const PULSE_RATE: f64 = 0.001;

/// Radius swing of the pulsation, in pixels.
pub const PULSE_AMPLITUDE: f64 = 10.0;

/// Rotation speed about the vertical axis, in radians per millisecond.
pub const ROTATION_RATE: f64 = 0.0002;

/// Synchronized radius offset shared by every orb particle.
pub fn pulsate(t_ms: f64) -> f64 {
    (t_ms * PULSE_RATE).sin() * PULSE_AMPLITUDE
}

/// Current rotation of the sphere about its vertical axis.
pub fn rotation_angle(t_ms: f64) -> f64 {
    t_ms * ROTATION_RATE
}

/// A point in orb space. `y` is the vertical axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Rotate about the vertical axis, mixing only `x` and `z`.
    pub fn rotate_vertical(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.z * sin,
            y: self.y,
            z: self.z * cos + self.x * sin,
        }
    }
}

/// Polar and azimuthal angles of particle `index` out of `count`.
///
/// The polar angle is spaced evenly in cosine so the poles don't clump.
pub fn sphere_angles(index: u32, count: u32) -> (f64, f64) {
    let n = count as f64;
    let phi = (-1.0 + 2.0 * index as f64 / n).acos();
    let theta = (n * PI).sqrt() * phi;
    (phi, theta)
}

/// Hue in degrees for particle `index`, wrapping to 0 at `index == count`.
pub fn hue(index: u32, count: u32) -> f64 {
    (360.0 * index as f64 / count as f64) % 360.0
}

/// One orb particle for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbParticle {
    /// Position on the sphere before rotation.
    pub position: Vec3,
    /// Position after rotation about the vertical axis.
    pub rotated: Vec3,
    /// Orthographic projection onto the surface.
    pub screen: Point,
    pub hue: f64,
}

/// Place particle `index` of `count` on a sphere of base `radius` at `t_ms`.
pub fn orb_particle(index: u32, count: u32, radius: f64, t_ms: f64, center: Point) -> OrbParticle {
    let (phi, theta) = sphere_angles(index, count);
    let r = radius + pulsate(t_ms);

    let position = Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    );
    let rotated = position.rotate_vertical(rotation_angle(t_ms));

    OrbParticle {
        position,
        rotated,
        // Depth is dropped; later particles simply paint over earlier ones.
        screen: Point::new(rotated.x + center.x, rotated.y + center.y),
        hue: hue(index, count),
    }
}

/// All orb particles for one frame, in paint order.
pub fn orb_particles(
    config: &FieldConfig,
    t_ms: f64,
    center: Point,
) -> impl Iterator<Item = OrbParticle> + '_ {
    let count = config.particle_count;
    (0..count).map(move |i| orb_particle(i, count, config.orb_radius, t_ms, center))
}
