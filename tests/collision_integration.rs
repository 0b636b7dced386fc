//! Collision integration tests: the boundary rules of each query pairing and
//! the brute-force scene pass.

use msfrengine::components::collision::Collision;
use msfrengine::components::group::Group;
use msfrengine::events::collision::CollisionEvent;
use msfrengine::gameobject::GameObject;
use msfrengine::math::Vec2;
use msfrengine::resources::objectmanager::GameObjectManager;
use msfrengine::systems::collision::CollisionRule;

fn with_collision(position: Vec2, collision: Collision) -> GameObject {
    let mut object = GameObject::at(position);
    object.add_component(collision);
    object
}

fn unit_box(position: Vec2) -> GameObject {
    with_collision(position, Collision::rect_from_corners(Vec2::ZERO, Vec2::ONE))
}

#[test]
fn shared_rect_edge_is_not_a_collision_but_edge_point_is_inside() {
    let a = unit_box(Vec2::ZERO);
    let b = unit_box(Vec2::new(1.0, 0.0));
    assert!(!a.does_collide_with(&b));
    assert!(!b.does_collide_with(&a));
    assert!(a.does_collide_with_point(Vec2::new(1.0, 0.5)));
    assert!(a.does_collide_with_point(Vec2::new(1.0, 1.0)));
    assert!(!a.does_collide_with_point(Vec2::new(1.0001, 0.5)));

    let c = unit_box(Vec2::new(0.999, 0.0));
    assert!(a.does_collide_with(&c));
}

#[test]
fn touching_circles_do_not_collide() {
    let a = with_collision(Vec2::ZERO, Collision::circle(1.0));
    let touching = with_collision(Vec2::new(2.0, 0.0), Collision::circle(1.0));
    let overlapping = with_collision(Vec2::new(1.999, 0.0), Collision::circle(1.0));
    assert!(!a.does_collide_with(&touching));
    assert!(a.does_collide_with(&overlapping));
    assert!(overlapping.does_collide_with(&a));
}

#[test]
fn point_on_circle_boundary_is_inside() {
    let a = with_collision(Vec2::new(5.0, 5.0), Collision::circle(2.0));
    assert!(a.does_collide_with_point(Vec2::new(7.0, 5.0)));
    assert!(!a.does_collide_with_point(Vec2::new(7.01, 5.0)));
}

#[test]
fn circle_radius_follows_x_scale_only() {
    let mut a = with_collision(Vec2::ZERO, Collision::circle(1.0));
    a.set_scale(Vec2::new(3.0, 0.1));
    assert!(a.does_collide_with_point(Vec2::new(0.0, 2.9)));

    a.set_scale(Vec2::new(0.1, 3.0));
    assert!(!a.does_collide_with_point(Vec2::new(0.0, 0.2)));
}

#[test]
fn rect_and_circle_never_collide() {
    let rect = unit_box(Vec2::ZERO);
    let circle = with_collision(Vec2::new(0.5, 0.5), Collision::circle(5.0));
    assert!(!rect.does_collide_with(&circle));
    assert!(!circle.does_collide_with(&rect));
}

#[test]
fn missing_component_never_collides() {
    let rect = unit_box(Vec2::ZERO);
    let bare = GameObject::at(Vec2::new(0.5, 0.5));
    assert!(!rect.does_collide_with(&bare));
    assert!(!bare.does_collide_with(&rect));
    assert!(!bare.does_collide_with_point(Vec2::new(0.5, 0.5)));
}

#[test]
fn queries_see_movement_since_last_frame() {
    let a = unit_box(Vec2::ZERO);
    let mut b = unit_box(Vec2::new(5.0, 0.0));
    assert!(!a.does_collide_with(&b));
    b.set_position(Vec2::new(0.5, 0.5));
    assert!(a.does_collide_with(&b));
}

fn bump(target: &mut GameObject, _other: &GameObject) {
    target.update_position(Vec2::new(0.0, 10.0));
}

#[test]
fn scene_pass_reports_pairs_and_runs_rules() {
    let mut manager = GameObjectManager::new();
    let mut left = unit_box(Vec2::ZERO);
    left.add_component(Group("paddle"));
    let mut right = unit_box(Vec2::new(0.5, 0.0));
    right.add_component(Group("ball"));
    let far = unit_box(Vec2::new(50.0, 0.0));

    let l = manager.add(left);
    let r = manager.add(right);
    manager.add(far);
    manager.add_rule(CollisionRule::new("ball", "paddle", bump));

    let events = manager.collision_test();
    assert_eq!(events, vec![CollisionEvent { a: l, b: r }]);
    assert_eq!(events[0].other(l), Some(r));
    assert_eq!(manager.get(l).unwrap().position(), Vec2::ZERO);
    assert_eq!(manager.get(r).unwrap().position(), Vec2::new(0.5, 10.0));

    assert!(manager.collision_test().is_empty());
}
