//! Dust layer: the looser ring of motes around the orb.
//!
//! Two placement laws are available. The wave law is a pure function of
//! time and index. The banded law adds a fresh random scatter to every mote
//! on every frame, so it can only be replayed with a seeded generator.

use std::f64::consts::TAU;

use orbfield_core::{DustLaw, FieldConfig, Point};
use rand::Rng;

use super::orb::{PULSE_RATE, pulsate};

/// Angular frequency of the banded drift-speed modulation.
pub const SPEED_MODULATION_RATE: f64 = 0.0001;

/// Band that mote `index` falls into when `count` motes share `bands` bands.
pub fn band_of(index: u32, count: u32, bands: u32) -> usize {
    let per_band = count as f64 / bands as f64;
    (index as f64 / per_band).floor() as usize
}

/// Drift speed of the banded law at `t_ms`, between `min_speed` and `max_speed`.
pub fn current_speed(config: &FieldConfig, t_ms: f64) -> f64 {
    let mid = (config.min_speed + config.max_speed) / 2.0;
    let half = (config.max_speed - config.min_speed) / 2.0;
    mid + (t_ms * SPEED_MODULATION_RATE).sin() * half
}

/// Position of mote `index` under the wave law.
pub fn wave_mote(index: u32, config: &FieldConfig, t_ms: f64, center: Point) -> Point {
    let j = index as f64;
    let angle = TAU * j / config.dust_count as f64 + t_ms * config.wave_drift;
    let distance = config.orb_radius
        + pulsate(t_ms)
        + (t_ms * PULSE_RATE + j).sin() * config.dust_max_distance;
    polar(center, distance, angle)
}

/// Position of mote `index` under the banded law.
///
/// `scatter` is a uniform sample in `[0, 1)`; `speed` is the frame's
/// [`current_speed`].
pub fn banded_mote(
    index: u32,
    config: &FieldConfig,
    t_ms: f64,
    speed: f64,
    scatter: f64,
    center: Point,
) -> Point {
    let bands = config.band_count as f64;
    let spread = config.dust_max_distance;
    let per_band = config.dust_count as f64 / bands;
    let j = index as f64;

    let band = band_of(index, config.dust_count, config.band_count) as f64;
    let band_position = (j % per_band) / per_band;
    let angle_offset = band_position * TAU;

    let distance_variation = (band_position * TAU).sin() * spread / 2.0;
    let random_scatter = scatter * spread - spread / 2.0;
    let distance = config.orb_radius
        + pulsate(t_ms)
        + distance_variation
        + random_scatter
        + band * spread / bands;

    let angle = (band / bands) * TAU + angle_offset + t_ms * speed;
    polar(center, distance, angle)
}

/// All dust motes for one frame, in paint order.
pub fn dust_motes<'a, R: Rng>(
    config: &'a FieldConfig,
    t_ms: f64,
    center: Point,
    rng: &'a mut R,
) -> impl Iterator<Item = Point> + 'a {
    let speed = current_speed(config, t_ms);
    (0..config.dust_count).map(move |j| match config.dust_law {
        DustLaw::Wave => wave_mote(j, config, t_ms, center),
        DustLaw::Banded => {
            let scatter = rng.gen_range(0.0..1.0);
            banded_mote(j, config, t_ms, speed, scatter, center)
        }
    })
}

fn polar(center: Point, distance: f64, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(center.x + distance * cos, center.y + distance * sin)
}
