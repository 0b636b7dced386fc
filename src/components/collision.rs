//! Collision shapes.
//!
//! [`Collision`] is a closed set of shapes, one of which an object may carry
//! as its collision component. Every query takes the owning object as a
//! borrowed parameter and reads its *current* world state, so results are
//! correct even if either side moved since the last frame.
//!
//! # Tie-break rules
//!
//! The boundary rules differ on purpose and must stay distinct:
//!
//! | query            | rule                                   | edge contact |
//! |------------------|----------------------------------------|--------------|
//! | rect vs rect     | strict `<` / `>` on all four sides     | no collision |
//! | rect vs point    | inclusive `<=` / `>=` on all sides     | inside       |
//! | circle vs circle | squared distance `<` squared radii sum | no collision |
//! | circle vs point  | squared distance `<=` squared radius   | inside       |
//!
//! Rect and circle shapes are never compared with each other; such a query
//! answers `false`.

use std::f32::consts::TAU;

use crate::components::Component;
use crate::gameobject::GameObject;
use crate::math::{Affine2D, Rect, Vec2};
use crate::render::drawlist::OutlinePoints;
use crate::render::{Color, ShapeRenderer};

/// Segments used to approximate a circle outline.
pub const CIRCLE_SEGMENTS: usize = 30;

/// Color of debug outlines.
pub const DEBUG_OUTLINE_COLOR: Color = Color::RED;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollideType {
    Rect,
    Circle,
}

/// Axis-aligned rectangle in the owner's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectCollision {
    pub rect: Rect,
}

/// Circle centred on the owner's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleCollision {
    pub radius: f32,
}

/// World-space circle produced by [`CircleCollision::world_circle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldCircle {
    pub center: Vec2,
    pub radius: f32,
}

/// World-space bound of any collision shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldBound {
    Rect(Rect),
    Circle(WorldCircle),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collision {
    Rect(RectCollision),
    Circle(CircleCollision),
}

impl Component for Collision {}

impl RectCollision {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Both local corners mapped through the owner's world matrix, then
    /// normalized to min/max. Under rotation this is the box spanned by the
    /// two transformed corners, not the tight bound of all four.
    pub fn world_rect(&self, owner: &GameObject) -> Rect {
        let matrix = owner.matrix();
        Rect::new(matrix * self.rect.point1, matrix * self.rect.point2)
    }

    pub fn overlaps(a: &Rect, b: &Rect) -> bool {
        a.right() > b.left() && a.left() < b.right() && a.top() > b.bottom() && a.bottom() < b.top()
    }

    pub fn contains(rect: &Rect, point: Vec2) -> bool {
        point.x >= rect.left()
            && point.x <= rect.right()
            && point.y >= rect.bottom()
            && point.y <= rect.top()
    }

    pub fn does_collide_with(&self, owner: &GameObject, other: &GameObject) -> bool {
        match other.components().get::<Collision>() {
            Some(Collision::Rect(theirs)) => {
                Self::overlaps(&self.world_rect(owner), &theirs.world_rect(other))
            }
            _ => false,
        }
    }

    pub fn does_collide_with_point(&self, owner: &GameObject, point: Vec2) -> bool {
        Self::contains(&self.world_rect(owner), point)
    }

    pub fn outline(&self) -> OutlinePoints {
        OutlinePoints::from_slice(&self.rect.corners())
    }
}

impl CircleCollision {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Radius scaled by the owner's x scale only. A non-uniform y scale is
    /// ignored, so a stretched object keeps a round collider.
    pub fn world_radius(&self, owner: &GameObject) -> f32 {
        self.radius * owner.scale().x
    }

    pub fn world_circle(&self, owner: &GameObject) -> WorldCircle {
        WorldCircle {
            center: owner.position(),
            radius: self.world_radius(owner),
        }
    }

    pub fn overlaps(a: &WorldCircle, b: &WorldCircle) -> bool {
        let reach = a.radius + b.radius;
        (a.center - b.center).length_squared() < reach * reach
    }

    pub fn contains(circle: &WorldCircle, point: Vec2) -> bool {
        (circle.center - point).length_squared() <= circle.radius * circle.radius
    }

    pub fn does_collide_with(&self, owner: &GameObject, other: &GameObject) -> bool {
        match other.components().get::<Collision>() {
            Some(Collision::Circle(theirs)) => {
                Self::overlaps(&self.world_circle(owner), &theirs.world_circle(other))
            }
            _ => false,
        }
    }

    pub fn does_collide_with_point(&self, owner: &GameObject, point: Vec2) -> bool {
        Self::contains(&self.world_circle(owner), point)
    }

    /// Regular polygon of [`CIRCLE_SEGMENTS`] sides with the local radius.
    pub fn outline(&self) -> OutlinePoints {
        (0..CIRCLE_SEGMENTS)
            .map(|i| {
                let t = i as f32 * TAU / CIRCLE_SEGMENTS as f32;
                Vec2::new(t.cos(), t.sin()) * self.radius
            })
            .collect()
    }
}

impl Collision {
    pub fn rect(rect: Rect) -> Self {
        Collision::Rect(RectCollision::new(rect))
    }

    /// Rectangle from two local corner points.
    pub fn rect_from_corners(point1: Vec2, point2: Vec2) -> Self {
        Self::rect(Rect::new(point1, point2))
    }

    pub fn circle(radius: f32) -> Self {
        Collision::Circle(CircleCollision::new(radius))
    }

    pub fn collide_type(&self) -> CollideType {
        match self {
            Collision::Rect(_) => CollideType::Rect,
            Collision::Circle(_) => CollideType::Circle,
        }
    }

    pub fn world_bound(&self, owner: &GameObject) -> WorldBound {
        match self {
            Collision::Rect(r) => WorldBound::Rect(r.world_rect(owner)),
            Collision::Circle(c) => WorldBound::Circle(c.world_circle(owner)),
        }
    }

    /// Overlap test against `other`'s collision component. `false` when the
    /// other object has none or carries a different shape kind.
    pub fn does_collide_with(&self, owner: &GameObject, other: &GameObject) -> bool {
        match self {
            Collision::Rect(r) => r.does_collide_with(owner, other),
            Collision::Circle(c) => c.does_collide_with(owner, other),
        }
    }

    pub fn does_collide_with_point(&self, owner: &GameObject, point: Vec2) -> bool {
        match self {
            Collision::Rect(r) => r.does_collide_with_point(owner, point),
            Collision::Circle(c) => c.does_collide_with_point(owner, point),
        }
    }

    /// Local-space outline as a closed loop.
    pub fn outline(&self) -> OutlinePoints {
        match self {
            Collision::Rect(r) => r.outline(),
            Collision::Circle(c) => c.outline(),
        }
    }

    /// Debug-draw the outline under `display` (camera × world).
    pub fn draw(&self, renderer: &mut dyn ShapeRenderer, display: &Affine2D) {
        renderer.draw_outline(&self.outline(), display, DEBUG_OUTLINE_COLOR);
    }
}
