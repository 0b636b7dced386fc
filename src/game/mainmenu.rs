use std::path::Path;

use crate::engine::EngineContext;
use crate::error::EngineResult;
use crate::game::{PLAYFIELD, draw_backdrop};
use crate::render::{DrawList, TextureInfo};
use crate::resources::gamestate::GameScreen;
use crate::resources::input::InputKey;

const MENU_IMAGE: &str = "assets/images/menu.png";

/// Enter starts a game, Escape quits.
#[derive(Debug, Default)]
pub struct MainMenu {
    image: Option<TextureInfo>,
}

impl MainMenu {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameScreen for MainMenu {
    fn name(&self) -> &'static str {
        "main_menu"
    }

    fn load(&mut self, ctx: &mut EngineContext) -> EngineResult<()> {
        self.image = Some(ctx.load_texture(Path::new(MENU_IMAGE), false)?);
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, _dt: f32) {
        if ctx.input.is_key_pressed(InputKey::Escape) {
            ctx.next_state.shutdown();
        } else if ctx.input.is_key_pressed(InputKey::Enter) {
            ctx.next_state.set(PLAYFIELD);
        }
    }

    fn draw(&self, ctx: &EngineContext, frame: &mut DrawList) {
        if let Some(image) = self.image {
            draw_backdrop(frame, image, ctx.screen_size);
        }
    }

    fn unload(&mut self, _ctx: &mut EngineContext) {
        self.image = None;
    }
}
