//! Read-only views for the renderer
//!
//! Derived on demand from simulation state; nothing here feeds back into
//! the simulation.

use glam::Vec2;

use super::entity::{Enemy, Projectile};
use super::player::Player;
use crate::consts::*;

/// Sprite frame for an entity of the given age
#[inline]
pub fn animation_frame(life: f32, fps: f32, frame_count: u32) -> u32 {
    if frame_count == 0 {
        return 0;
    }
    let frame = (life * fps).floor().max(0.0) as u32;
    frame % frame_count
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyView {
    pub position: Vec2,
    pub frame: u32,
    /// Drawn half-size: shrinks with damage, grows in after spawning
    pub half_size: f32,
}

impl EnemyView {
    pub fn of(enemy: &Enemy) -> Self {
        let health_scale = 0.8 + (enemy.hit_points.max(0) as f32 / ENEMY_START_HP as f32) * 0.2;
        let spawn_scale = (enemy.spawn_effect / ENEMY_SPAWN_GROW_TIME).min(1.0);
        Self {
            position: enemy.pos,
            frame: animation_frame(enemy.life, ENEMY_ANIM_FPS, ENEMY_ANIM_FRAMES),
            half_size: ENEMY_BASE_HALF_SIZE * enemy.size * health_scale * spawn_scale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileView {
    pub position: Vec2,
    pub frame: u32,
}

impl ProjectileView {
    pub fn of(projectile: &Projectile) -> Self {
        Self {
            position: projectile.pos,
            frame: animation_frame(projectile.life, PROJECTILE_ANIM_FPS, PROJECTILE_ANIM_FRAMES),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub rotation: f32,
    pub frame: u32,
}

impl PlayerView {
    pub fn of(player: &Player) -> Self {
        Self {
            rotation: player.rotation,
            frame: player.frame(),
        }
    }
}
