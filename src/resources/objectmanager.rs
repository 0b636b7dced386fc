//! Scene-level owner of game objects.
//!
//! Objects live in insertion order and are addressed by [`ObjectId`]s that
//! are never reused. Destroyed objects are removed right after the update pass
//! that flagged them, so they are still visible to that frame's code but never
//! to the next frame's.

use log::debug;

use crate::events::collision::CollisionEvent;
use crate::gameobject::GameObject;
use crate::math::Affine2D;
use crate::render::Canvas;
use crate::systems::collision::{CollisionRule, collision_pairs, dispatch_rules};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub u64);

#[derive(Debug, Default)]
pub struct GameObjectManager {
    // `ids` stays sorted: ids grow monotonically and removal keeps order.
    ids: Vec<ObjectId>,
    objects: Vec<GameObject>,
    rules: Vec<CollisionRule>,
    next_id: u64,
}

impl GameObjectManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: GameObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.ids.push(id);
        self.objects.push(object);
        id
    }

    fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }

    pub fn get(&self, id: ObjectId) -> Option<&GameObject> {
        self.index_of(id).map(|i| &self.objects[i])
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.index_of(id).map(move |i| &mut self.objects[i])
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &GameObject)> {
        self.ids.iter().copied().zip(self.objects.iter())
    }

    pub fn add_rule(&mut self, rule: CollisionRule) {
        self.rules.push(rule);
    }

    /// Update every object, then drop the ones flagged destroyed.
    pub fn update_all(&mut self, dt: f32) {
        for object in &mut self.objects {
            object.update(dt);
        }
        if self.objects.iter().any(GameObject::is_destroyed) {
            self.remove_destroyed();
        }
    }

    fn remove_destroyed(&mut self) {
        let mut kept_ids = Vec::with_capacity(self.ids.len());
        let mut kept = Vec::with_capacity(self.objects.len());
        for (id, object) in self.ids.drain(..).zip(self.objects.drain(..)) {
            if object.is_destroyed() {
                debug!("Removing object {:?} ({})", id, object.current_state_name());
            } else {
                kept_ids.push(id);
                kept.push(object);
            }
        }
        self.ids = kept_ids;
        self.objects = kept;
    }

    pub fn draw_all<C: Canvas>(&self, camera: &Affine2D, canvas: &mut C, show_collision: bool) {
        for object in &self.objects {
            object.draw(camera, canvas, show_collision);
        }
    }

    /// Test every pair once, run matching collision rules and report the hits.
    pub fn collision_test(&mut self) -> Vec<CollisionEvent> {
        let pairs = collision_pairs(&self.objects);
        let mut events = Vec::with_capacity(pairs.len());
        for (i, j) in pairs {
            if !self.rules.is_empty() {
                dispatch_rules(&mut self.objects, &self.rules, i, j);
            }
            events.push(CollisionEvent {
                a: self.ids[i],
                b: self.ids[j],
            });
        }
        events
    }

    /// Drop every object. Rules are kept.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.objects.clear();
    }
}
