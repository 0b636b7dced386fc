use std::path::Path;

use crate::engine::EngineContext;
use crate::error::EngineResult;
use crate::game::{MAIN_MENU, draw_backdrop};
use crate::render::{DrawList, TextureInfo};
use crate::resources::gamestate::GameScreen;
use crate::resources::input::InputKey;

const SPLASH_TIME: f32 = 5.0;
const SPLASH_IMAGE: &str = "assets/images/splash.png";

/// Logo screen. Moves on to the menu after [`SPLASH_TIME`] seconds or when
/// Enter is released.
#[derive(Debug, Default)]
pub struct Splash {
    timer: f32,
    image: Option<TextureInfo>,
}

impl Splash {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time_left(&self) -> f32 {
        self.timer
    }
}

impl GameScreen for Splash {
    fn name(&self) -> &'static str {
        "splash"
    }

    fn load(&mut self, ctx: &mut EngineContext) -> EngineResult<()> {
        self.timer = SPLASH_TIME;
        self.image = Some(ctx.load_texture(Path::new(SPLASH_IMAGE), false)?);
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, dt: f32) {
        self.timer -= dt;
        if ctx.input.is_key_released(InputKey::Enter) || self.timer < 0.0 {
            ctx.next_state.set(MAIN_MENU);
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
