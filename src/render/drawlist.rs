//! Recorded frame of draw calls.
//!
//! Screens and game objects draw into a [`DrawList`] during the draw phase; the
//! backend replays it in `present`. Keeping the recording separate from the
//! backend lets the whole draw path run without a window.

use smallvec::SmallVec;

use crate::math::{Affine2D, Vec2};
use crate::render::{Color, ShapeRenderer, SpriteDrawer, TexelRegion, TextureId};

/// Outline geometry; the circle approximation (31 points) stays inline.
pub type OutlinePoints = SmallVec<[Vec2; 32]>;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Outline {
        points: OutlinePoints,
        transform: Affine2D,
        color: Color,
    },
    Sprite {
        texture: TextureId,
        transform: Affine2D,
        region: Option<TexelRegion>,
    },
}

#[derive(Debug, Clone)]
pub struct DrawList {
    pub clear_color: Color,
    pub commands: Vec<DrawCommand>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            clear_color: Color::BLACK,
            commands: Vec::new(),
        }
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands, keeping the allocation for the next frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn outline_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Outline { .. }))
            .count()
    }

    pub fn sprite_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .count()
    }
}

impl ShapeRenderer for DrawList {
    fn draw_outline(&mut self, points: &[Vec2], transform: &Affine2D, color: Color) {
        self.commands.push(DrawCommand::Outline {
            points: SmallVec::from_slice(points),
            transform: *transform,
            color,
        });
    }
}

impl SpriteDrawer for DrawList {
    fn draw_sprite(&mut self, texture: TextureId, transform: &Affine2D, region: Option<TexelRegion>) {
        self.commands.push(DrawCommand::Sprite {
            texture,
            transform: *transform,
            region,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order_and_clears() {
        let mut list = DrawList::new();
        list.draw_outline(&[Vec2::ZERO, Vec2::ONE], &Affine2D::IDENTITY, Color::RED);
        list.draw_sprite(TextureId(3), &Affine2D::IDENTITY, None);
        assert_eq!(list.len(), 2);
        assert_eq!(list.outline_count(), 1);
        assert_eq!(list.sprite_count(), 1);
        assert!(matches!(list.commands[1], DrawCommand::Sprite { texture: TextureId(3), .. }));

        list.clear();
        assert!(list.is_empty());
    }
}
