//! Collision event type.
//!
//! [`GameObjectManager::collision_test`](crate::resources::objectmanager::GameObjectManager::collision_test)
//! returns one [`CollisionEvent`] per overlapping pair found in a pass. Screens
//! can react to them directly (score, sounds, spawning) in addition to the
//! registered collision rules.

use crate::resources::objectmanager::ObjectId;

/// Two objects whose collision shapes overlap.
///
/// `a` was added to the manager before `b`. Additional collision details
/// (normals, penetration, etc.) can be added by extending this type when
/// needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub a: ObjectId,
    pub b: ObjectId,
}

impl CollisionEvent {
    pub fn involves(&self, id: ObjectId) -> bool {
        self.a == id || self.b == id
    }

    /// The participant that is not `id`, if `id` took part.
    pub fn other(&self, id: ObjectId) -> Option<ObjectId> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }
}
