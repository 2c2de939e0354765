//! Pure state transitions for the todolists collection.
//!
//! # Design
//! `TodolistsState` is an ordered `Vec<TodolistDomain>`. Every transition is
//! a plain `&mut self` method with no I/O, so the store and the tests drive
//! exactly the same code. Lookups by id take the first match; a missing id
//! makes the local transitions no-ops.

use crate::types::{FilterValue, RequestStatus, Todolist, TodolistDomain};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodolistsState {
    items: Vec<TodolistDomain>,
}

impl TodolistsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current sequence and take the server's order as-is.
    pub fn replace_all(&mut self, todolists: Vec<Todolist>) {
        self.items = todolists.into_iter().map(TodolistDomain::from).collect();
    }

    /// Insert at the front, regardless of the server-reported `order`.
    pub fn add(&mut self, todolist: Todolist) {
        self.items.insert(0, TodolistDomain::from(todolist));
    }

    /// Returns `true` if a record was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn rename(&mut self, id: &str, title: &str) -> bool {
        self.update(id, |todo| todo.todolist.title = title.to_string())
    }

    pub fn set_filter(&mut self, id: &str, filter: FilterValue) -> bool {
        self.update(id, |todo| todo.filter = filter)
    }

    pub fn set_entity_status(&mut self, id: &str, status: RequestStatus) -> bool {
        self.update(id, |todo| todo.entity_status = status)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, id: &str) -> Option<&TodolistDomain> {
        self.items.iter().find(|todo| todo.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TodolistDomain> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[TodolistDomain] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|todo| todo.id() == id)
    }

    fn update(&mut self, id: &str, apply: impl FnOnce(&mut TodolistDomain)) -> bool {
        match self.items.iter_mut().find(|todo| todo.id() == id) {
            Some(todo) => {
                apply(todo);
                true
            }
            None => false,
        }
    }
}
