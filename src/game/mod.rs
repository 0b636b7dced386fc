//! Demo game: splash → menu → asteroid field.
//!
//! Screens are registered in [`screens`] in the order of the index constants
//! below, which is what [`NextGameState::set`](crate::resources::gamestate::NextGameState::set)
//! takes.

pub mod mainmenu;
pub mod playfield;
pub mod ship;
pub mod splash;

use crate::math::{Affine2D, Vec2};
use crate::render::{SpriteDrawer, TextureInfo};
use crate::resources::gamestate::GameScreen;

pub const SPLASH: usize = 0;
pub const MAIN_MENU: usize = 1;
pub const PLAYFIELD: usize = 2;

/// Pixel sizes of the demo's images, for backends that do not decode files.
pub const TEXTURE_SIZES: &[(&str, u32, u32)] = &[
    ("assets/images/splash.png", 256, 144),
    ("assets/images/menu.png", 128, 72),
    ("assets/images/ship.png", 64, 32),
    ("assets/images/asteroid.png", 48, 48),
    ("assets/images/bullet.png", 4, 4),
];

pub fn screens() -> Vec<Box<dyn GameScreen>> {
    vec![
        Box::new(splash::Splash::new()),
        Box::new(mainmenu::MainMenu::new()),
        Box::new(playfield::Playfield::new()),
    ]
}

/// Screen-space transform that fits `texture` inside `screen` keeping its
/// aspect ratio, centred.
pub fn fit_to_screen(texture: TextureInfo, (width, height): (u32, u32)) -> Affine2D {
    let screen = Vec2::new(width as f32, height as f32);
    let size = texture.size();
    if size.x <= 0.0 || size.y <= 0.0 {
        return Affine2D::IDENTITY;
    }
    let s = (screen.x / size.x).min(screen.y / size.y);
    let drawn = size * s;
    let offset = (screen - drawn) * 0.5;
    Affine2D::build_translation_v(offset) * Affine2D::build_scale_v(drawn)
}

/// Draw a whole texture fitted to the screen.
pub fn draw_backdrop(drawer: &mut dyn SpriteDrawer, texture: TextureInfo, screen: (u32, u32)) {
    drawer.draw_sprite(texture.id, &fit_to_screen(texture, screen), None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextureId;

    #[test]
    fn backdrop_is_letterboxed() {
        let texture = TextureInfo {
            id: TextureId(1),
            width: 100,
            height: 100,
        };
        let m = fit_to_screen(texture, (400, 200));
        assert_eq!(m * Vec2::ZERO, Vec2::new(100.0, 0.0));
        assert_eq!(m * Vec2::ONE, Vec2::new(300.0, 200.0));
    }
}
