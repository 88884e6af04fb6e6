//! The player: a llama fixed at the world origin that turns to face the cursor

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PLAYER_ANIM_FPS, PLAYER_ANIM_FRAMES};
use crate::{cursor_to_aim_angle, normalize_angle};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Facing angle (radians in [-π, π), 0 = +x)
    pub rotation: f32,
    /// Animation frames per second
    pub animation_speed: f32,
    animation_time: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            animation_speed: PLAYER_ANIM_FPS,
            animation_time: 0.0,
        }
    }
}

impl Player {
    /// Always the world origin
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::ZERO
    }

    pub fn set_rotation(&mut self, angle: f32) {
        self.rotation = normalize_angle(angle);
    }

    /// Face the cursor given in screen coordinates
    pub fn aim_at_cursor(&mut self, cursor: Vec2, viewport: Vec2) {
        self.set_rotation(cursor_to_aim_angle(cursor, viewport));
    }

    pub fn update(&mut self, dt: f32) {
        self.animation_time += dt;
    }

    pub fn animation_time(&self) -> f32 {
        self.animation_time
    }

    /// Current sprite frame
    pub fn frame(&self) -> u32 {
        super::view::animation_frame(self.animation_time, self.animation_speed, PLAYER_ANIM_FRAMES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_aim_at_cursor() {
        let mut player = Player::default();
        player.aim_at_cursor(Vec2::new(0.0, 300.0), Vec2::new(800.0, 600.0));
        assert!((player.rotation.abs() - PI).abs() < 1e-6);
        assert_eq!(player.position(), Vec2::ZERO);
    }

    #[test]
    fn test_animation_cycles() {
        let mut player = Player::default();
        assert_eq!(player.frame(), 0);
        player.update(0.25);
        assert_eq!(player.frame(), 2);
        player.update(3.0);
        // 3.25s * 8 fps = 26 -> 26 % 24
        assert_eq!(player.frame(), 2);
    }
}
