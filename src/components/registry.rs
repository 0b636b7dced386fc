//! Type-keyed component storage.
//!
//! Each game object owns one [`ComponentRegistry`]. Components are boxed and
//! keyed by their [`TypeId`], which gives the "zero or one instance per kind"
//! rule for free. Lookups borrow; nothing here allocates on the read path.

use std::any::TypeId;

use rustc_hash::FxHashMap;

use crate::components::Component;

#[derive(Default)]
pub struct ComponentRegistry {
    components: FxHashMap<TypeId, Box<dyn Component>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `component`, dropping any previous component of the same kind.
    ///
    /// Returns `true` when an existing component was replaced.
    pub fn add<T: Component>(&mut self, component: T) -> bool {
        self.components
            .insert(TypeId::of::<T>(), Box::new(component))
            .is_some()
    }

    pub fn get<T: Component>(&self) -> Option<&T> {
        self.components
            .get(&TypeId::of::<T>())
            .and_then(|c| (**c).as_any().downcast_ref::<T>())
    }

    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .get_mut(&TypeId::of::<T>())
            .and_then(|c| (**c).as_any_mut().downcast_mut::<T>())
    }

    pub fn contains<T: Component>(&self) -> bool {
        self.components.contains_key(&TypeId::of::<T>())
    }

    /// Drop the component of kind `T`. Returns whether one was present.
    pub fn remove<T: Component>(&mut self) -> bool {
        self.components.remove(&TypeId::of::<T>()).is_some()
    }

    /// Drop every component.
    pub fn clear(&mut self) {
        self.components.clear();
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Forward the frame delta to every component.
    pub fn update(&mut self, dt: f32) {
        for component in self.components.values_mut() {
            component.update(dt);
        }
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("len", &self.components.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counter {
        ticks: f32,
    }
    impl Component for Counter {
        fn update(&mut self, dt: f32) {
            self.ticks += dt;
        }
    }

    struct Tracked {
        tag: u32,
        drops: Rc<Cell<usize>>,
    }
    impl Component for Tracked {}
    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn get_on_empty_registry_is_none() {
        let registry = ComponentRegistry::new();
        assert!(registry.get::<Counter>().is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn add_then_get_and_mutate() {
        let mut registry = ComponentRegistry::new();
        assert!(!registry.add(Counter { ticks: 0.0 }));
        registry.get_mut::<Counter>().unwrap().ticks = 2.0;
        assert_eq!(registry.get::<Counter>().unwrap().ticks, 2.0);
        assert!(registry.contains::<Counter>());
        assert!(!registry.contains::<Tracked>());
    }

    #[test]
    fn add_replaces_and_drops_previous() {
        let drops = Rc::new(Cell::new(0));
        let mut registry = ComponentRegistry::new();
        registry.add(Tracked { tag: 1, drops: drops.clone() });
        assert!(registry.add(Tracked { tag: 2, drops: drops.clone() }));

        assert_eq!(drops.get(), 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get::<Tracked>().unwrap().tag, 2);
    }

    #[test]
    fn remove_is_noop_when_absent() {
        let drops = Rc::new(Cell::new(0));
        let mut registry = ComponentRegistry::new();
        assert!(!registry.remove::<Tracked>());

        registry.add(Tracked { tag: 1, drops: drops.clone() });
        assert!(registry.remove::<Tracked>());
        assert_eq!(drops.get(), 1);
        assert!(!registry.remove::<Tracked>());
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn clear_and_drop_release_everything() {
        let drops = Rc::new(Cell::new(0));
        let mut registry = ComponentRegistry::new();
        registry.add(Tracked { tag: 1, drops: drops.clone() });
        registry.add(Counter { ticks: 0.0 });
        registry.clear();
        assert_eq!(drops.get(), 1);
        assert!(registry.is_empty());

        registry.add(Tracked { tag: 2, drops: drops.clone() });
        drop(registry);
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn update_reaches_every_component() {
        let mut registry = ComponentRegistry::new();
        registry.add(Counter { ticks: 0.0 });
        registry.update(0.25);
        registry.update(0.25);
        assert_eq!(registry.get::<Counter>().unwrap().ticks, 0.5);
    }
}
