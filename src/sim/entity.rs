//! Simulation entities
//!
//! Pure simulation records: position, velocity, age and health. Anything a
//! renderer wants beyond that is derived in [`super::view`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Result of applying damage to an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Hit points reached zero; the enemy is now dead
    Died,
    /// Enemy is still alive with this many hit points left
    Survived { hp_remaining: i32 },
}

/// An enemy entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds since spawn
    pub life: f32,
    /// Not authoritative once the enemy is dead (may go negative)
    pub hit_points: i32,
    /// Hit box and sprite size multiplier
    pub size: f32,
    /// Seconds since spawn, drives the grow-in effect
    pub spawn_effect: f32,
    alive: bool,
}

impl Enemy {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            life: 0.0,
            hit_points: ENEMY_START_HP,
            size: 1.0,
            spawn_effect: 0.0,
            alive: true,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Half-width of the square hit box
    #[inline]
    pub fn half_size(&self) -> f32 {
        ENEMY_BASE_HALF_SIZE * self.size
    }

    /// Apply damage; a dead enemy never comes back
    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        self.hit_points -= amount;
        if self.hit_points <= 0 {
            self.alive = false;
            DamageOutcome::Died
        } else {
            DamageOutcome::Survived {
                hp_remaining: self.hit_points,
            }
        }
    }

    /// Whether a point lies inside this enemy's hit box (always false once dead)
    pub fn contains_point(&self, point: Vec2) -> bool {
        if !self.alive {
            return false;
        }
        let half = self.half_size();
        point.x >= self.pos.x - half
            && point.x <= self.pos.x + half
            && point.y >= self.pos.y - half
            && point.y <= self.pos.y + half
    }

    /// Integrate motion and age, then wrap into the world
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.life += dt;
        self.spawn_effect += dt;
        self.pos = wrap_position(self.pos, WORLD_BOUND);
    }
}

/// A projectile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds since it was fired
    pub life: f32,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel, life: 0.0 }
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.life += dt;
    }

    /// Outside the world or past its lifetime
    pub fn is_expired(&self) -> bool {
        self.pos.x < -WORLD_BOUND
            || self.pos.x > WORLD_BOUND
            || self.pos.y < -WORLD_BOUND
            || self.pos.y > WORLD_BOUND
            || self.life > PROJECTILE_MAX_LIFE
    }
}

/// Teleport a coordinate past one bound to the opposite bound
#[inline]
pub fn wrap_coord(v: f32, bound: f32) -> f32 {
    if v > bound {
        -bound
    } else if v < -bound {
        bound
    } else {
        v
    }
}

/// Component-wise [`wrap_coord`]
#[inline]
pub fn wrap_position(pos: Vec2, bound: f32) -> Vec2 {
    Vec2::new(wrap_coord(pos.x, bound), wrap_coord(pos.y, bound))
}
