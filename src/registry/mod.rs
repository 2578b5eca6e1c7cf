//! The component registry consulted during schema generation.
//!
//! The registry is owned by the caller and only ever read here. It is
//! ordered: child element lists in generated fragments follow
//! registration order.

mod descriptor;
mod name;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

pub use descriptor::ComponentDescriptor;
pub use name::TagName;

/// Registry handle shared between the code that registers components and
/// the generators that read them later.
pub type SharedRegistry = Arc<RwLock<ComponentRegistry>>;

/// Ordered collection of component descriptors.
///
/// Registration appends; nothing is de-duplicated. Tag names are expected
/// to be unique, but keeping that true is the registering code's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentRegistry {
    components: Vec<ComponentDescriptor>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Wraps the registry in a [`SharedRegistry`] handle.
    #[must_use]
    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    /// Appends a descriptor.
    pub fn register(&mut self, component: ComponentDescriptor) {
        self.components.push(component);
    }

    /// Iterates descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.components.iter()
    }

    /// Returns the first descriptor registered under `tag`.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&ComponentDescriptor> {
        self.components.iter().find(|c| c.tag_name.as_str() == tag)
    }

    /// Number of registered descriptors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if nothing has been registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Tag names of every descriptor that lists `tag` as a parent, in
    /// registration order. Duplicate registrations yield duplicate names.
    #[must_use]
    pub fn children_of(&self, tag: &str) -> Vec<&TagName> {
        self.components
            .iter()
            .filter(|c| c.allows_parent(tag))
            .map(|c| &c.tag_name)
            .collect()
    }
}

impl FromIterator<ComponentDescriptor> for ComponentRegistry {
    fn from_iter<I: IntoIterator<Item = ComponentDescriptor>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ComponentRegistry {
    type Item = &'a ComponentDescriptor;
    type IntoIter = std::slice::Iter<'a, ComponentDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

/// Takes a read lock on a shared registry.
///
/// Readers never observe a half-applied registration (`register` is a
/// single push), so a lock poisoned by a panicking writer is still safe
/// to read.
pub(crate) fn read_registry(registry: &SharedRegistry) -> RwLockReadGuard<'_, ComponentRegistry> {
    registry.read().unwrap_or_else(PoisonError::into_inner)
}
