//! Asteroid field.
//!
//! World units are pixels with the origin at the screen centre. The arena is
//! walled in by four rectangle colliders that eat bullets; ship and asteroids
//! carry circle colliders and wrap around the arena edges instead.
//!
//! Collision handling:
//! - ship × asteroid (circle/circle rule) destroys the ship
//! - asteroid × asteroid (circle/circle rule) bounces the first asteroid
//! - bullet × wall (rect/rect rule) destroys the bullet
//! - bullet × asteroid is a point query against the asteroid's circle, done
//!   here since rect/circle pairs never collide

use std::path::Path;

use log::info;

use crate::components::collision::Collision;
use crate::components::group::Group;
use crate::components::sprite::Sprite;
use crate::engine::EngineContext;
use crate::error::EngineResult;
use crate::game::MAIN_MENU;
use crate::game::ship::{Drifting, Flying, ShipControls, heading};
use crate::gameobject::GameObject;
use crate::math::random::{random_f32, random_unit};
use crate::math::{Rect, Vec2};
use crate::render::DrawList;
use crate::resources::camera::Camera;
use crate::resources::gamestate::GameScreen;
use crate::resources::input::InputKey;
use crate::resources::objectmanager::{GameObjectManager, ObjectId};
use crate::systems::collision::CollisionRule;

pub const SHIP: &str = "ship";
pub const ASTEROID: &str = "asteroid";
pub const BULLET: &str = "bullet";
pub const WALL: &str = "wall";

const SHIP_SHEET: &str = "assets/sprites/ship.json";
const ASTEROID_SHEET: &str = "assets/sprites/asteroid.json";
const BULLET_SHEET: &str = "assets/sprites/bullet.json";

const SHIP_RADIUS: f32 = 14.0;
const ASTEROID_RADIUS: f32 = 24.0;
const BULLET_HALF: f32 = 2.0;
const BULLET_SPEED: f32 = 480.0;
const WALL_THICKNESS: f32 = 16.0;
const ASTEROID_COUNT: usize = 6;
/// Asteroids never spawn closer than this to the ship.
const SAFE_RADIUS: f32 = 160.0;
/// Seconds after the ship is lost before returning to the menu.
const GAME_OVER_DELAY: f32 = 2.0;

fn destroy_target(target: &mut GameObject, _other: &GameObject) {
    target.destroy();
}

/// Reflect the target's velocity away from the other object's centre.
fn bounce(target: &mut GameObject, other: &GameObject) {
    let normal = (target.position() - other.position()).normalize();
    if normal.is_zero() {
        return;
    }
    let v = target.velocity();
    let along = v.dot(normal);
    if along < 0.0 {
        target.set_velocity(v - normal * (2.0 * along));
    }
}

#[derive(Debug, Default)]
struct Sheets {
    ship: Option<Sprite>,
    asteroid: Option<Sprite>,
    bullet: Option<Sprite>,
}

#[derive(Debug, Default)]
pub struct Playfield {
    objects: GameObjectManager,
    camera: Option<Camera>,
    sheets: Sheets,
    ship: Option<ObjectId>,
    half_extents: Vec2,
    game_over_timer: Option<f32>,
    score: u32,
}

impl Playfield {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn objects(&self) -> &GameObjectManager {
        &self.objects
    }

    pub fn ship(&self) -> Option<ObjectId> {
        self.ship.filter(|id| self.objects.contains(*id))
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn count_group(&self, group: &str) -> usize {
        self.objects
            .iter()
            .filter(|(_, o)| o.get_component::<Group>().is_some_and(|g| g.name() == group))
            .count()
    }

    fn with_sprite(object: &mut GameObject, sheet: &Option<Sprite>) {
        if let Some(sprite) = sheet {
            object.add_component(sprite.clone());
        }
    }

    fn spawn_ship(&mut self) {
        let mut ship = GameObject::at(Vec2::ZERO);
        ship.add_component(Collision::circle(SHIP_RADIUS));
        ship.add_component(Group(SHIP));
        ship.add_component(ShipControls::default());
        Self::with_sprite(&mut ship, &self.sheets.ship);
        ship.change_state(Box::new(Drifting));
        self.ship = Some(self.objects.add(ship));
    }

    /// Random arena point away from the centre. Falls back to a corner on
    /// arenas too cramped to find one.
    fn random_spawn_point(&self) -> Vec2 {
        let h = self.half_extents;
        let safe = SAFE_RADIUS.min(h.x.min(h.y) * 0.5);
        for _ in 0..32 {
            let candidate = Vec2::new(random_f32(-h.x, h.x), random_f32(-h.y, h.y));
            if candidate.length() >= safe {
                return candidate;
            }
        }
        h
    }

    fn spawn_asteroids(&mut self) {
        for _ in 0..ASTEROID_COUNT {
            let position = self.random_spawn_point();
            let angle = random_unit() * std::f32::consts::TAU;
            let speed = random_f32(30.0, 90.0);
            let scale = random_f32(0.75, 1.5);

            let mut asteroid = GameObject::new(position, angle, Vec2::splat(scale));
            asteroid.set_velocity(Vec2::new(angle.cos(), angle.sin()) * speed);
            asteroid.add_component(Collision::circle(ASTEROID_RADIUS));
            asteroid.add_component(Group(ASTEROID));
            Self::with_sprite(&mut asteroid, &self.sheets.asteroid);
            self.objects.add(asteroid);
        }
    }

    fn spawn_walls(&mut self) {
        let h = self.half_extents;
        let t = WALL_THICKNESS;
        let walls = [
            Rect::new(Vec2::new(-h.x - t, h.y), Vec2::new(h.x + t, h.y + t)),
            Rect::new(Vec2::new(-h.x - t, -h.y - t), Vec2::new(h.x + t, -h.y)),
            Rect::new(Vec2::new(-h.x - t, -h.y), Vec2::new(-h.x, h.y)),
            Rect::new(Vec2::new(h.x, -h.y), Vec2::new(h.x + t, h.y)),
        ];
        for rect in walls {
            let mut wall = GameObject::default();
            wall.add_component(Collision::rect(rect));
            wall.add_component(Group(WALL));
            self.objects.add(wall);
        }
    }

    fn fire(&mut self) {
        let Some(ship) = self.ship().and_then(|id| self.objects.get(id)) else {
            return;
        };
        let nose = heading(ship);
        let mut bullet = GameObject::new(
            ship.position() + nose * (SHIP_RADIUS + BULLET_HALF),
            ship.rotation(),
            Vec2::ONE,
        );
        bullet.set_velocity(ship.velocity() + nose * BULLET_SPEED);
        bullet.add_component(Collision::rect_from_corners(
            Vec2::splat(-BULLET_HALF),
            Vec2::splat(BULLET_HALF),
        ));
        bullet.add_component(Group(BULLET));
        Self::with_sprite(&mut bullet, &self.sheets.bullet);
        bullet.change_state(Box::new(Flying));
        self.objects.add(bullet);
    }

    fn steer_ship(&mut self, ctx: &EngineContext) {
        let Some(ship) = self.ship().and_then(|id| self.objects.get_mut(id)) else {
            return;
        };
        let input = ctx.input;
        let mut turn = 0.0;
        if input.is_key_down(InputKey::Left) {
            turn += 1.0;
        }
        if input.is_key_down(InputKey::Right) {
            turn -= 1.0;
        }
        if let Some(controls) = ship.get_component_mut::<ShipControls>() {
            controls.thrust = input.is_key_down(InputKey::Up);
            controls.turn = turn;
        }
    }

    /// Keep circle-bodied objects inside the arena by wrapping them.
    fn wrap_positions(&mut self) {
        let h = self.half_extents;
        let ids: Vec<ObjectId> = self
            .objects
            .iter()
            .filter(|(_, o)| {
                o.get_component::<Group>()
                    .is_some_and(|g| g.name() == SHIP || g.name() == ASTEROID)
            })
            .map(|(id, _)| id)
            .collect();
        for id in ids {
            if let Some(object) = self.objects.get_mut(id) {
                let mut p = object.position();
                if p.x < -h.x {
                    p.x += 2.0 * h.x;
                } else if p.x > h.x {
                    p.x -= 2.0 * h.x;
                }
                if p.y < -h.y {
                    p.y += 2.0 * h.y;
                } else if p.y > h.y {
                    p.y -= 2.0 * h.y;
                }
                if p != object.position() {
                    object.set_position(p);
                }
            }
        }
    }

    /// Bullets hit asteroids when their centre lies inside the asteroid.
    fn shoot_asteroids(&mut self) {
        let mut bullets = Vec::new();
        let mut asteroids = Vec::new();
        for (id, object) in self.objects.iter() {
            if object.is_destroyed() {
                continue;
            }
            match object.get_component::<Group>().map(Group::name) {
                Some(BULLET) => bullets.push((id, object.position())),
                Some(ASTEROID) => asteroids.push(id),
                _ => {}
            }
        }

        for (bullet, point) in bullets {
            let hit = asteroids.iter().copied().find(|&asteroid| {
                self.objects
                    .get(asteroid)
                    .is_some_and(|a| !a.is_destroyed() && a.does_collide_with_point(point))
            });
            if let Some(asteroid) = hit {
                for id in [bullet, asteroid] {
                    if let Some(object) = self.objects.get_mut(id) {
                        object.destroy();
                    }
                }
                self.score += 1;
            }
        }
    }
}

impl GameScreen for Playfield {
    fn name(&self) -> &'static str {
        "playfield"
    }

    fn load(&mut self, ctx: &mut EngineContext) -> EngineResult<()> {
        let (width, height) = ctx.screen_size;
        self.half_extents = Vec2::new(width as f32, height as f32) * 0.5 - Vec2::splat(WALL_THICKNESS);
        self.camera = Some(Camera::for_screen(ctx.screen_size));
        self.sheets = Sheets {
            ship: Some(ctx.load_sprite(Path::new(SHIP_SHEET))?),
            asteroid: Some(ctx.load_sprite(Path::new(ASTEROID_SHEET))?),
            bullet: Some(ctx.load_sprite(Path::new(BULLET_SHEET))?),
        };
        self.game_over_timer = None;
        self.score = 0;

        self.objects.add_rule(CollisionRule::new(SHIP, ASTEROID, destroy_target));
        self.objects.add_rule(CollisionRule::new(ASTEROID, ASTEROID, bounce));
        self.objects.add_rule(CollisionRule::new(BULLET, WALL, destroy_target));

        self.spawn_walls();
        self.spawn_asteroids();
        self.spawn_ship();
        info!("Playfield ready with {} objects", self.objects.len());
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, dt: f32) {
        if ctx.input.is_key_pressed(InputKey::Escape) {
            ctx.next_state.set(MAIN_MENU);
            return;
        }

        self.steer_ship(ctx);
        if ctx.input.is_key_pressed(InputKey::Space) {
            self.fire();
        }

        self.objects.update_all(dt);
        self.wrap_positions();
        self.objects.collision_test();
        self.shoot_asteroids();

        // Destroyed objects leave on the next update_all; look one frame ahead.
        let ship_gone = self
            .ship()
            .and_then(|id| self.objects.get(id))
            .is_none_or(GameObject::is_destroyed);

        if let Some(timer) = self.game_over_timer.as_mut() {
            *timer -= dt;
            if *timer <= 0.0 {
                ctx.next_state.set(MAIN_MENU);
            }
        } else if ship_gone {
            info!("Ship lost, score {}", self.score);
            self.game_over_timer = Some(GAME_OVER_DELAY);
        } else if self.count_group(ASTEROID) == 0 {
            info!("Field cleared, score {}", self.score);
            ctx.next_state.reload();
        }
    }

    fn draw(&self, ctx: &EngineContext, frame: &mut DrawList) {
        let Some(camera) = self.camera else {
            return;
        };
        let view = camera.matrix();
        for (_, object) in self.objects.iter() {
            let outline = ctx.debug || object.get_component::<Sprite>().is_none();
            object.draw(&view, frame, outline);
        }
    }

    fn unload(&mut self, _ctx: &mut EngineContext) {
        self.objects = GameObjectManager::new();
        self.sheets = Sheets::default();
        self.camera = None;
        self.ship = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounce_reflects_approaching_velocity() {
        let mut a = GameObject::at(Vec2::new(-1.0, 0.0));
        a.set_velocity(Vec2::new(5.0, 1.0));
        let b = GameObject::at(Vec2::ZERO);
        bounce(&mut a, &b);
        assert_eq!(a.velocity(), Vec2::new(-5.0, 1.0));

        // already separating
        bounce(&mut a, &b);
        assert_eq!(a.velocity(), Vec2::new(-5.0, 1.0));
    }

    #[test]
    fn unloaded_playfield_is_empty() {
        let playfield = Playfield::new();
        assert!(playfield.objects().is_empty());
        assert_eq!(playfield.ship(), None);
        assert_eq!(playfield.count_group(ASTEROID), 0);
    }
}
