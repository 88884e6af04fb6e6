//! Llama Blaster - a top-down arcade shooter
//!
//! Core modules:
//! - `sim`: Entity simulation (spawning, motion, lifetimes, collisions)
//! - `settings`: Tunable configuration loaded from JSON
//!
//! Rendering, textures and input polling live outside this crate; the
//! simulation only exposes positions and animation frames for them to read.

pub mod settings;
pub mod sim;

pub use settings::{Settings, SpawnZone};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Half-width of the square world; entities live in [-B, B]²
    pub const WORLD_BOUND: f32 = 5.0;

    /// Longest a projectile may live before it is removed (seconds)
    pub const PROJECTILE_MAX_LIFE: f32 = 5.0;
    /// Projectile collision radius (accepted by the resolver, not used by the box test)
    pub const PROJECTILE_RADIUS: f32 = 0.08;
    /// Projectile sprite animation
    pub const PROJECTILE_ANIM_FPS: f32 = 10.0;
    pub const PROJECTILE_ANIM_FRAMES: u32 = 4;

    /// Enemy defaults
    pub const ENEMY_START_HP: i32 = 3;
    /// Half-width of the enemy hit box at size 1.0
    pub const ENEMY_BASE_HALF_SIZE: f32 = 0.15;
    /// Enemy sprite animation
    pub const ENEMY_ANIM_FPS: f32 = 8.0;
    pub const ENEMY_ANIM_FRAMES: u32 = 24;
    /// Time for a freshly spawned enemy to grow to full size (seconds)
    pub const ENEMY_SPAWN_GROW_TIME: f32 = 0.5;

    /// Spawn zone defaults: sample in [-ZONE, ZONE]², reject inside [-EXCL, EXCL]²
    pub const SPAWN_ZONE_HALF_EXTENT: f32 = 2.2;
    pub const SPAWN_EXCLUSION_HALF_EXTENT: f32 = 0.8;
    /// Rejection-sampling attempts before falling back to the zone corner
    pub const SPAWN_MAX_ATTEMPTS: u32 = 64;

    /// Player sprite animation
    pub const PLAYER_ANIM_FPS: f32 = 8.0;
    pub const PLAYER_ANIM_FRAMES: u32 = 24;

    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert a cursor position in screen space to a world aim angle
///
/// Screen coordinates have their origin top-left with y growing downward;
/// the player sits at the viewport center.
#[inline]
pub fn cursor_to_aim_angle(cursor: Vec2, viewport: Vec2) -> f32 {
    let center = viewport / 2.0;
    let dx = cursor.x - center.x;
    let dy = -(cursor.y - center.y);
    dy.atan2(dx)
}
