//! Game state
//!
//! Owns the pools, the controllers and the random source. Exactly one
//! [`super::tick`] call mutates it per frame.

use anyhow::Result;
use glam::Vec2;

use super::enemy::EnemyPool;
use super::fire::FireController;
use super::player::Player;
use super::projectile::ProjectilePool;
use super::rng::{RandomSource, SimRng};
use super::spawn::SpawnController;
use super::view::{EnemyView, PlayerView, ProjectileView};
use crate::settings::Settings;

/// Something that happened during a tick, for sound and effects
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    EnemySpawned { pos: Vec2 },
    ProjectileFired { angle: f32 },
    EnemyHit { pos: Vec2, hp_remaining: i32 },
    EnemyDestroyed { pos: Vec2 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimRng> {
    pub player: Player,
    pub enemies: EnemyPool,
    pub projectiles: ProjectilePool,
    pub spawner: SpawnController,
    pub fire: FireController,
    pub rng: R,
    /// Simulated seconds since start
    pub time: f32,
    /// Ticks run so far
    pub frame: u64,
    pub(crate) events: Vec<SimEvent>,
}

impl GameState<SimRng> {
    /// Create a state from validated settings, seeding from them when set
    pub fn new(settings: &Settings) -> Result<Self> {
        let rng = match settings.seed {
            Some(seed) => SimRng::seeded(seed),
            None => SimRng::from_entropy(),
        };
        log::info!("New game, seed {}", rng.seed());
        Self::with_rng(settings, rng)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a state with an explicit random source; settings are validated first
    pub fn with_rng(settings: &Settings, rng: R) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            player: Player::default(),
            enemies: EnemyPool::new(),
            projectiles: ProjectilePool::new(),
            spawner: SpawnController::from_settings(settings)?,
            fire: FireController::from_settings(settings)?,
            rng,
            time: 0.0,
            frame: 0,
            events: Vec::new(),
        })
    }

    /// Drop every entity and restart the spawn timer
    pub fn reset(&mut self) {
        self.enemies.clear();
        self.projectiles.clear();
        self.spawner.reset();
        self.fire.update_last_shot_time();
        self.events.clear();
    }

    /// Events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn enemy_views(&self) -> impl Iterator<Item = EnemyView> + '_ {
        self.enemies.iter().filter(|e| e.is_alive()).map(EnemyView::of)
    }

    pub fn projectile_views(&self) -> impl Iterator<Item = ProjectileView> + '_ {
        self.projectiles.iter().map(ProjectileView::of)
    }

    pub fn player_view(&self) -> PlayerView {
        PlayerView::of(&self.player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Enemy, Projectile};

    #[test]
    fn test_new_rejects_invalid_settings() {
        let settings = Settings {
            spawn_rate: 0.0,
            ..Default::default()
        };
        assert!(GameState::new(&settings).is_err());
    }

    #[test]
    fn test_with_rng_rejects_nan_speed() {
        let settings = Settings {
            enemy_speed_min: f32::NAN,
            enemy_speed_max: f32::NAN,
            ..Default::default()
        };
        let err = GameState::with_rng(&settings, SimRng::seeded(4)).unwrap_err();
        assert!(format!("{err:#}").contains("enemy speed range"));
    }

    #[test]
    fn test_seeded_state() {
        let settings = Settings {
            seed: Some(77),
            ..Default::default()
        };
        let state = GameState::new(&settings).unwrap();
        assert_eq!(state.rng.seed(), 77);
        assert!(state.enemies.is_empty());
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_reset_and_views() {
        let mut state = GameState::with_rng(&Settings::default(), SimRng::seeded(1)).unwrap();
        state.enemies.push(Enemy::new(Vec2::new(1.0, 1.0), Vec2::ZERO));
        state.projectiles.push(Projectile::new(Vec2::ZERO, Vec2::X));
        state.events.push(SimEvent::ProjectileFired { angle: 0.0 });

        assert_eq!(state.enemy_views().count(), 1);
        assert_eq!(state.projectile_views().count(), 1);
        assert_eq!(state.player_view().frame, 0);

        state.reset();
        assert!(state.enemies.is_empty());
        assert!(state.projectiles.is_empty());
        assert!(state.drain_events().is_empty());
    }
}
