//! Enemy spawning
//!
//! Once per frame the controller accumulates time and, when a full spawn
//! interval has passed and there is room, introduces one enemy somewhere in
//! the spawn zone but away from the player.

use std::f32::consts::PI;

use anyhow::{Result, bail};
use glam::Vec2;

use super::entity::Enemy;
use super::rng::RandomSource;
use crate::consts::SPAWN_MAX_ATTEMPTS;
use crate::polar_to_cartesian;
use crate::settings::{Settings, SpawnZone};

/// Width of the noise draw added to a seeking enemy's heading
const SEEK_NOISE_SPREAD: f32 = 2.0;
/// Scale applied to that draw (radians)
const SEEK_NOISE_SCALE: f32 = 0.3;

/// Decides when and where enemies appear
#[derive(Debug, Clone)]
pub struct SpawnController {
    max_enemies: u32,
    spawn_rate: f32,
    speed_min: f32,
    speed_max: f32,
    zone: SpawnZone,
    timer: f32,
}

impl SpawnController {
    /// Create a controller; `spawn_rate` must be positive
    pub fn new(max_enemies: u32, spawn_rate: f32) -> Result<Self> {
        if !spawn_rate.is_finite() || spawn_rate <= 0.0 {
            bail!("spawn_rate must be a positive number, got {spawn_rate}");
        }
        let defaults = Settings::default();
        Ok(Self {
            max_enemies,
            spawn_rate,
            speed_min: defaults.enemy_speed_min,
            speed_max: defaults.enemy_speed_max,
            zone: defaults.spawn_zone,
            timer: 0.0,
        })
    }

    /// Build from validated settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(settings.max_enemies, settings.spawn_rate)?
            .with_speed_range(settings.enemy_speed_min, settings.enemy_speed_max)
            .with_zone(settings.spawn_zone))
    }

    pub fn with_speed_range(mut self, min: f32, max: f32) -> Self {
        self.speed_min = min;
        self.speed_max = max;
        self
    }

    /// Override the spawn zone. Not validated here: an exclusion covering
    /// the whole zone exhausts the sampler and falls back to the zone corner.
    pub fn with_zone(mut self, zone: SpawnZone) -> Self {
        self.zone = zone;
        self
    }

    pub fn zone(&self) -> SpawnZone {
        self.zone
    }

    /// Seconds between spawns
    #[inline]
    pub fn interval(&self) -> f32 {
        1.0 / self.spawn_rate
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Restart the spawn interval
    pub fn reset(&mut self) {
        self.timer = 0.0;
    }

    /// Advance the timer and maybe produce a new enemy
    pub fn update(
        &mut self,
        dt: f32,
        alive_enemies: usize,
        rng: &mut impl RandomSource,
    ) -> Option<Enemy> {
        self.timer += dt;
        if self.timer >= self.interval() && alive_enemies < self.max_enemies as usize {
            self.timer = 0.0;
            Some(self.spawn_enemy(rng))
        } else {
            None
        }
    }

    /// Create an enemy at a random spawn position with a random heading
    pub fn spawn_enemy(&self, rng: &mut impl RandomSource) -> Enemy {
        let pos = self.spawn_position(rng);
        let vel = self.spawn_velocity(pos, rng);
        Enemy::new(pos, vel)
    }

    /// Rejection-sample a point in the zone outside the exclusion square
    pub fn spawn_position(&self, rng: &mut impl RandomSource) -> Vec2 {
        let extent = self.zone.half_extent;
        for _ in 0..SPAWN_MAX_ATTEMPTS {
            let x = rng.uniform(-extent, extent);
            let y = rng.uniform(-extent, extent);
            if !self.zone.excludes(x, y) {
                return Vec2::new(x, y);
            }
        }
        log::warn!(
            "No spawn position found in {SPAWN_MAX_ATTEMPTS} attempts (zone {:?}), using corner",
            self.zone
        );
        Vec2::splat(-extent)
    }

    /// Half the time head for the origin with some noise, otherwise wander
    pub fn spawn_velocity(&self, pos: Vec2, rng: &mut impl RandomSource) -> Vec2 {
        let speed = rng.uniform(self.speed_min, self.speed_max);
        let heading = if rng.coin_flip() {
            let noise = rng.uniform(-SEEK_NOISE_SPREAD, SEEK_NOISE_SPREAD) * SEEK_NOISE_SCALE;
            (-pos.y).atan2(-pos.x) + noise
        } else {
            rng.uniform(-PI, PI)
        };
        polar_to_cartesian(speed, heading)
    }
}
