use crate::components::Component;

/// Collision group an object belongs to, matched by
/// [`CollisionRule`](crate::systems::collision::CollisionRule)s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(pub &'static str);

impl Group {
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl Component for Group {}
