//! Draw-command interface to the presentation layer
//!
//! The simulation never touches bitmaps or GPU state; it describes what
//! to draw through `Canvas` and the platform renderer decides how.
//! Positions are world coordinates; the implementation applies the
//! camera transform (`World::camera_position`).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Symbolic sprite identifiers; the renderer maps them to actual images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    Ship,
    /// One of the asteroid image variants
    Asteroid(u32),
}

/// Sink for per-frame draw commands, implemented by the renderer.
pub trait Canvas {
    /// Whether anything within `radius` of `position` lands on screen.
    /// Entities use this to skip off-screen draws.
    fn visible(&self, position: Vec2, radius: f32) -> bool;

    fn draw_sprite(&mut self, sprite: Sprite, position: Vec2, scale: f32, rotation: f32, alpha: f32);

    fn draw_circle(&mut self, radius: f32, position: Vec2, alpha: f32, color: u32);
}

/// A recorded draw command (see [`DrawList`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Sprite {
        sprite: Sprite,
        position: Vec2,
        scale: f32,
        rotation: f32,
        alpha: f32,
    },
    Circle {
        radius: f32,
        position: Vec2,
        alpha: f32,
        color: u32,
    },
}

/// Canvas that records commands instead of rasterizing.
///
/// Used by headless runs and tests to observe render output; everything
/// is considered visible.
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DrawList {
    fn visible(&self, _position: Vec2, _radius: f32) -> bool {
        true
    }

    fn draw_sprite(&mut self, sprite: Sprite, position: Vec2, scale: f32, rotation: f32, alpha: f32) {
        self.commands.push(DrawCommand::Sprite {
            sprite,
            position,
            scale,
            rotation,
            alpha,
        });
    }

    fn draw_circle(&mut self, radius: f32, position: Vec2, alpha: f32, color: u32) {
        self.commands.push(DrawCommand::Circle {
            radius,
            position,
            alpha,
            color,
        });
    }
}
