//! Brute-force collision pass and group-based collision rules.
//!
//! Every unordered pair of objects is tested once, O(n²). There is no spatial
//! partitioning and no physical response: a hit only produces an index pair,
//! which the caller turns into events and rule dispatches.

use log::debug;

use crate::components::group::Group;
use crate::gameobject::GameObject;

/// Reaction to a collision. The first argument is the object in the rule's
/// `group_a`, the second the object in `group_b`. Only the first may change.
pub type CollisionCallback = fn(&mut GameObject, &GameObject);

/// Runs `callback` whenever an object of `group_a` hits one of `group_b`.
#[derive(Debug, Clone, Copy)]
pub struct CollisionRule {
    pub group_a: &'static str,
    pub group_b: &'static str,
    pub callback: CollisionCallback,
}

impl CollisionRule {
    pub fn new(group_a: &'static str, group_b: &'static str, callback: CollisionCallback) -> Self {
        Self {
            group_a,
            group_b,
            callback,
        }
    }

    /// Check if this rule matches the given groups and return indices in order.
    ///
    /// Returns `Some((index_a, index_b))` if the rule matches, with indices
    /// ordered to match `group_a` and `group_b` respectively.
    pub fn match_and_order(
        &self,
        index_a: usize,
        index_b: usize,
        group_a: &str,
        group_b: &str,
    ) -> Option<(usize, usize)> {
        if self.group_a == group_a && self.group_b == group_b {
            Some((index_a, index_b))
        } else if self.group_a == group_b && self.group_b == group_a {
            Some((index_b, index_a))
        } else {
            None
        }
    }
}

/// Index pairs `(i, j)` with `i < j` whose collision shapes overlap.
pub fn collision_pairs(objects: &[GameObject]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..objects.len() {
        for j in (i + 1)..objects.len() {
            if objects[i].does_collide_with(&objects[j]) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Invoke every rule matching the pair's groups.
pub fn dispatch_rules(objects: &mut [GameObject], rules: &[CollisionRule], i: usize, j: usize) {
    let (Some(group_i), Some(group_j)) = (group_of(&objects[i]), group_of(&objects[j])) else {
        return;
    };
    for rule in rules {
        if let Some((a, b)) = rule.match_and_order(i, j, group_i, group_j) {
            debug!("Collision rule {} x {} ({} -> {})", rule.group_a, rule.group_b, a, b);
            let (target, other) = pair_mut(objects, a, b);
            (rule.callback)(target, other);
        }
    }
}

fn group_of(object: &GameObject) -> Option<&'static str> {
    object.get_component::<Group>().map(Group::name)
}

/// Mutable access to `objects[a]` alongside shared access to `objects[b]`.
fn pair_mut(objects: &mut [GameObject], a: usize, b: usize) -> (&mut GameObject, &GameObject) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = objects.split_at_mut(b);
        (&mut left[a], &right[0])
    } else {
        let (left, right) = objects.split_at_mut(a);
        (&mut right[0], &left[b])
    }
}
