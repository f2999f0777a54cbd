//! Maps user input to store mutations.
//!
//! Every handled event runs the same sequence: mutate the store, persist it,
//! then render through the surface. Events that change nothing skip the last
//! two steps.

use crate::io::persist::{load_store, persist_store};
use crate::io::storage::KeyValueStorage;
use crate::model::Store;
use crate::ops::{self, OpError};
use crate::view::{self, Surface};

/// A user interaction, already resolved to the element it targets
#[derive(Debug)]
pub enum UiEvent<'a> {
    /// A list entry was clicked
    ListClicked(&'a str),
    /// A task's toggle was clicked; `checked` is its new state
    TaskToggled { task_id: &'a str, checked: bool },
    /// "Clear completed" was clicked
    ClearCompleted,
    /// "Delete list" was clicked
    DeleteList,
    /// The new-list form was submitted with this input field
    NewListSubmitted(&'a mut String),
    /// The new-task form was submitted with this input field
    NewTaskSubmitted(&'a mut String),
}

/// What the router did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Store changed, was persisted, and the full view was re-rendered
    Rendered,
    /// Store changed, was persisted, and only the count label was re-rendered
    CountRendered,
    /// Nothing changed; nothing persisted or rendered
    Ignored,
}

/// Owns the store for one session together with its storage and surface
pub struct EventRouter<S, V> {
    store: Store,
    storage: S,
    surface: V,
}

impl<S: KeyValueStorage, V: Surface> EventRouter<S, V> {
    /// Load the store from `storage` and show the initial view
    pub fn start(storage: S, surface: V) -> Self {
        let store = load_store(&storage);
        let mut router = EventRouter {
            store,
            storage,
            surface,
        };
        router.render();
        router
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut V {
        &mut self.surface
    }

    pub fn into_surface(self) -> V {
        self.surface
    }

    /// Handle one event to completion.
    ///
    /// Form submissions are always consumed here: an empty input does
    /// nothing, and a successful submission clears the input.
    pub fn dispatch(&mut self, event: UiEvent<'_>) -> Dispatch {
        match event {
            UiEvent::ListClicked(id) => {
                if !ops::select_list(&mut self.store, id) {
                    return Dispatch::Ignored;
                }
                self.commit()
            }
            UiEvent::TaskToggled { task_id, checked } => {
                if !ops::set_task_complete(&mut self.store, task_id, checked) {
                    return Dispatch::Ignored;
                }
                self.persist();
                if let Some(label) = view::render_count(&self.store) {
                    self.surface.show_count(&label);
                }
                Dispatch::CountRendered
            }
            UiEvent::ClearCompleted => {
                if self.store.selected_list().is_none() {
                    return Dispatch::Ignored;
                }
                let removed = ops::clear_completed_tasks(&mut self.store);
                tracing::debug!(removed, "cleared completed tasks");
                self.commit()
            }
            UiEvent::DeleteList => match ops::delete_selected_list(&mut self.store) {
                Ok(list) => {
                    tracing::debug!(list = %list.id, tasks = list.tasks.len(), "deleted list");
                    self.commit()
                }
                Err(OpError::NoListSelected | OpError::EmptyName) => Dispatch::Ignored,
            },
            UiEvent::NewListSubmitted(input) => {
                if ops::create_list(&mut self.store, input).is_err() {
                    return Dispatch::Ignored;
                }
                input.clear();
                self.commit()
            }
            UiEvent::NewTaskSubmitted(input) => {
                if ops::add_task(&mut self.store, input).is_err() {
                    return Dispatch::Ignored;
                }
                input.clear();
                self.commit()
            }
        }
    }

    fn commit(&mut self) -> Dispatch {
        self.persist();
        self.render();
        Dispatch::Rendered
    }

    /// A failed write leaves the in-memory store authoritative; the next
    /// successful write catches storage up.
    fn persist(&mut self) {
        if let Err(e) = persist_store(&self.store, &mut self.storage) {
            tracing::warn!(error = %e, "could not persist store");
        }
    }

    fn render(&mut self) {
        let tree = view::render(&self.store);
        self.surface.show(&tree);
    }
}
