//! Game settings
//!
//! Loaded from an optional JSON file; every field falls back to the
//! defaults the game shipped with. Validation runs once, up front, so the
//! simulation never has to second-guess its configuration.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::consts::{SPAWN_EXCLUSION_HALF_EXTENT, SPAWN_ZONE_HALF_EXTENT};

/// Square region enemies are spawned in, minus a central no-spawn square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnZone {
    /// Samples are drawn from [-half_extent, half_extent]²
    pub half_extent: f32,
    /// Samples inside [-exclusion, exclusion]² are rejected
    pub exclusion_half_extent: f32,
}

impl Default for SpawnZone {
    fn default() -> Self {
        Self {
            half_extent: SPAWN_ZONE_HALF_EXTENT,
            exclusion_half_extent: SPAWN_EXCLUSION_HALF_EXTENT,
        }
    }
}

impl SpawnZone {
    /// Whether a point falls inside the no-spawn square
    #[inline]
    pub fn excludes(&self, x: f32, y: f32) -> bool {
        x.abs() < self.exclusion_half_extent && y.abs() < self.exclusion_half_extent
    }
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Spawning ===
    /// Most enemies alive at once
    pub max_enemies: u32,
    /// Enemies per second
    pub spawn_rate: f32,
    /// Enemy speed range (units/second)
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    pub spawn_zone: SpawnZone,

    // === Firing ===
    /// Nominal time between shots (milliseconds)
    pub fire_interval_ms: f32,
    /// Shot timing jitter, percent of the interval
    pub fire_timing_error_percent: f32,
    /// Angular spray, percent of a full turn
    pub spray_percent: f32,
    /// Projectile speed (units/second)
    pub projectile_speed: f32,

    /// Run seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_enemies: 20,
            spawn_rate: 0.5,
            enemy_speed_min: 0.1,
            enemy_speed_max: 0.3,
            spawn_zone: SpawnZone::default(),

            fire_interval_ms: 200.0,
            fire_timing_error_percent: 2.0,
            spray_percent: 1.0,
            projectile_speed: 1.5,

            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json).context("parse settings json")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read settings: {}", path.display()))?;
        let settings = Self::from_json_str(&json)
            .with_context(|| format!("load settings: {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize settings")
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if !self.spawn_rate.is_finite() || self.spawn_rate <= 0.0 {
            bail!("spawn_rate must be a positive number, got {}", self.spawn_rate);
        }
        if !self.fire_interval_ms.is_finite() || self.fire_interval_ms <= 0.0 {
            bail!(
                "fire_interval_ms must be a positive number, got {}",
                self.fire_interval_ms
            );
        }
        for (name, value) in [
            ("fire_timing_error_percent", self.fire_timing_error_percent),
            ("spray_percent", self.spray_percent),
            ("projectile_speed", self.projectile_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("{name} must be a non-negative number, got {value}");
            }
        }
        if !self.enemy_speed_min.is_finite()
            || !self.enemy_speed_max.is_finite()
            || self.enemy_speed_min < 0.0
            || self.enemy_speed_min > self.enemy_speed_max
        {
            bail!(
                "enemy speed range must satisfy 0 <= min <= max, got [{}, {}]",
                self.enemy_speed_min,
                self.enemy_speed_max
            );
        }
        let zone = &self.spawn_zone;
        if !zone.half_extent.is_finite()
            || !zone.exclusion_half_extent.is_finite()
            || zone.half_extent <= 0.0
            || zone.exclusion_half_extent <= 0.0
        {
            bail!("spawn zone extents must be positive finite numbers, got {zone:?}");
        }
        // Samples span [-half_extent, half_extent]; that width must stay finite
        if !(2.0 * zone.half_extent).is_finite() {
            bail!("spawn zone is too large to sample, got {}", zone.half_extent);
        }
        if zone.exclusion_half_extent >= zone.half_extent {
            bail!(
                "spawn exclusion ({}) must be smaller than the spawn zone ({})",
                zone.exclusion_half_extent,
                zone.half_extent
            );
        }
        Ok(())
    }
}
