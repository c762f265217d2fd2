//! Retained application handles.
//!
//! The runtime hands back a long-lived handle that the startup sequence never
//! inspects. Handles are parked here so a host that needs explicit lifetime
//! management has a single teardown point.

/// Identifier assigned to a retained instance, in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Numeric value of the identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Append-only store of application handles.
#[derive(Debug)]
pub struct InstanceRegistry<I> {
    instances: Vec<(InstanceId, I)>,
    next_id: u64,
}

impl<I> Default for InstanceRegistry<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> InstanceRegistry<I> {
    /// Empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            instances: Vec::new(),
            next_id: 0,
        }
    }

    /// Keep `instance` alive. Earlier instances are never replaced.
    pub fn retain(&mut self, instance: I) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        self.instances.push((id, instance));
        id
    }

    /// Handle registered under `id`, if it has not been torn down.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&I> {
        self.instances
            .iter()
            .find_map(|(candidate, instance)| (*candidate == id).then_some(instance))
    }

    /// Number of live handles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether no handle is retained.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Release every handle, oldest first, through `destroy`.
    ///
    /// Returns how many handles were released.
    pub fn teardown<F>(&mut self, mut destroy: F) -> usize
    where
        F: FnMut(I),
    {
        let drained = std::mem::take(&mut self.instances);
        let count = drained.len();
        for (_, instance) in drained {
            destroy(instance);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retain_appends_without_replacing() {
        let mut registry = InstanceRegistry::new();
        let first = registry.retain("first");
        let second = registry.retain("second");

        assert_ne!(first, second);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(first), Some(&"first"));
        assert_eq!(registry.get(second), Some(&"second"));
        assert!(first < second);
    }

    #[test]
    fn teardown_releases_in_creation_order() {
        let mut registry = InstanceRegistry::default();
        registry.retain(1);
        registry.retain(2);
        registry.retain(3);

        let mut released = Vec::new();
        assert_eq!(registry.teardown(|value| released.push(value)), 3);
        assert_eq!(released, vec![1, 2, 3]);
        assert!(registry.is_empty());
    }

    #[test]
    fn ids_keep_increasing_after_teardown() {
        let mut registry = InstanceRegistry::new();
        let before = registry.retain(());
        registry.teardown(drop);
        let after = registry.retain(());

        assert!(registry.get(before).is_none());
        assert_eq!(after.get(), before.get() + 1);
    }
}
