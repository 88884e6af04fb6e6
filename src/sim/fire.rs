//! Player fire control
//!
//! Shots are rate limited by a nominal interval with a little timing jitter,
//! and each shot leaves the muzzle with a small random angular spray.

use std::f32::consts::TAU;

use anyhow::{Result, bail};
use glam::Vec2;

use super::entity::Projectile;
use super::rng::RandomSource;
use crate::polar_to_cartesian;
use crate::settings::Settings;

/// Build a projectile fired from `origin` toward `aim_angle` with spray
///
/// `spray_percent` is a fraction of a full turn: 1% allows up to ±3.6°.
pub fn add_projectile(
    origin: Vec2,
    aim_angle: f32,
    speed: f32,
    spray_percent: f32,
    rng: &mut impl RandomSource,
) -> Projectile {
    let max_spray = spray_percent / 100.0 * TAU;
    let angle = aim_angle + rng.uniform(-1.0, 1.0) * max_spray;
    Projectile::new(origin, polar_to_cartesian(speed, angle))
}

/// Decides when the player may fire and builds the shots
#[derive(Debug, Clone)]
pub struct FireController {
    base_interval_ms: f32,
    timing_error_percent: f32,
    spray_percent: f32,
    speed: f32,
    /// Milliseconds since the last confirmed shot
    since_last_shot_ms: f32,
}

impl FireController {
    /// Create a controller; `base_interval_ms` must be positive
    pub fn new(
        base_interval_ms: f32,
        timing_error_percent: f32,
        spray_percent: f32,
        speed: f32,
    ) -> Result<Self> {
        if !base_interval_ms.is_finite() || base_interval_ms <= 0.0 {
            bail!("fire interval must be a positive number of milliseconds, got {base_interval_ms}");
        }
        Ok(Self {
            base_interval_ms,
            timing_error_percent,
            spray_percent,
            speed,
            since_last_shot_ms: 0.0,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            settings.fire_interval_ms,
            settings.fire_timing_error_percent,
            settings.spray_percent,
            settings.projectile_speed,
        )
    }

    /// Accumulate elapsed frame time (seconds)
    pub fn update(&mut self, dt: f32) {
        self.since_last_shot_ms += dt * 1000.0;
    }

    pub fn since_last_shot_ms(&self) -> f32 {
        self.since_last_shot_ms
    }

    /// Jittered interval for this check
    pub fn jittered_interval_ms(&self, rng: &mut impl RandomSource) -> f32 {
        let error_range = self.timing_error_percent / 100.0 * self.base_interval_ms;
        self.base_interval_ms + rng.uniform(-1.0, 1.0) * error_range
    }

    /// Whether enough time has passed since the last confirmed shot
    ///
    /// Draws a fresh jitter on every call. Does not reset the timer; call
    /// [`FireController::update_last_shot_time`] once the shot is taken.
    pub fn can_shoot(&self, rng: &mut impl RandomSource) -> bool {
        self.since_last_shot_ms >= self.jittered_interval_ms(rng)
    }

    pub fn update_last_shot_time(&mut self) {
        self.since_last_shot_ms = 0.0;
    }

    /// Build a shot with this controller's speed and spray
    pub fn make_projectile(
        &self,
        origin: Vec2,
        aim_angle: f32,
        rng: &mut impl RandomSource,
    ) -> Projectile {
        add_projectile(origin, aim_angle, self.speed, self.spray_percent, rng)
    }
}
