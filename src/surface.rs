//! Marker class surface.
//!
//! A [`MarkerSurface`] is whatever hosts the UI elements whose marker classes
//! drive presentation. Elements can be missing; every mutation on a missing
//! element is a no-op that reports the absence instead of failing.

use std::collections::{BTreeSet, HashMap};

/// Access to elements and their marker classes.
pub trait MarkerSurface {
    /// Returns true if an element with this id exists.
    fn has_element(&self, id: &str) -> bool;

    /// Returns true if the element exists and carries the class.
    fn has_class(&self, id: &str, class: &str) -> bool;

    /// Adds a class. Returns false (and does nothing) if the element is absent.
    fn add_class(&mut self, id: &str, class: &str) -> bool;

    /// Removes a class. Returns false (and does nothing) if the element is absent.
    fn remove_class(&mut self, id: &str, class: &str) -> bool;

    /// Flips a class and returns whether it is now present.
    ///
    /// Returns `None` (and does nothing) if the element is absent.
    fn toggle_class(&mut self, id: &str, class: &str) -> Option<bool> {
        if !self.has_element(id) {
            return None;
        }
        if self.has_class(id, class) {
            self.remove_class(id, class);
            Some(false)
        } else {
            self.add_class(id, class);
            Some(true)
        }
    }
}

/// In-memory element registry with per-element class sets.
#[derive(Debug, Clone, Default)]
pub struct MarkerBoard {
    elements: HashMap<String, BTreeSet<String>>,
}

impl MarkerBoard {
    /// Creates a board with no elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board with the given elements registered.
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut board = Self::new();
        for id in ids {
            board.register(id);
        }
        board
    }

    /// Registers an element. Existing classes are kept if it is already present.
    pub fn register(&mut self, id: impl Into<String>) {
        self.elements.entry(id.into()).or_default();
    }

    /// Removes an element and all its classes.
    pub fn unregister(&mut self, id: &str) -> bool {
        self.elements.remove(id).is_some()
    }

    /// Returns the classes of an element in sorted order.
    pub fn classes(&self, id: &str) -> Vec<&str> {
        self.elements
            .get(id)
            .map(|classes| classes.iter().map(|c| c.as_str()).collect())
            .unwrap_or_default()
    }

    /// Returns the number of registered elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl MarkerSurface for MarkerBoard {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|classes| classes.contains(class))
    }

    fn add_class(&mut self, id: &str, class: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(classes) => {
                classes.insert(class.to_string());
                true
            }
            None => {
                tracing::debug!(id, class, "add_class skipped, element absent");
                false
            }
        }
    }

    fn remove_class(&mut self, id: &str, class: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(classes) => {
                classes.remove(class);
                true
            }
            None => {
                tracing::debug!(id, class, "remove_class skipped, element absent");
                false
            }
        }
    }
}
