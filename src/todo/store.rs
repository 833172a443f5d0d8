use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::api::client::ApiClient;
use crate::todo::models::{Status, Todo, TodoUpdate};

/// Completion of a backend call, delivered to the event loop and folded
/// into the store with [`TodoStore::apply`].
#[derive(Debug)]
pub enum StoreEvent {
    Loaded(Vec<Todo>),
    LoadFailed(String),
    Created(Todo),
    CreateFailed(String),
    Updated(Todo),
    UpdateFailed(String),
    Removed(String),
    RemoveFailed(String),
}

/// Single source of truth for the todo collection.
///
/// Every operation validates synchronously, then sends the network call to
/// the runtime; the result comes back as a [`StoreEvent`] on the channel
/// handed to [`TodoStore::new`]. `apply` is the only place local state is
/// reconciled with the backend, so whichever response arrives last wins.
/// A failed call never changes the collection, only the error message.
pub struct TodoStore {
    todos: Vec<Todo>,
    loading: bool,
    error: Option<String>,
    client: ApiClient,
    events: UnboundedSender<StoreEvent>,
}

impl TodoStore {
    pub fn new(client: ApiClient, events: UnboundedSender<StoreEvent>) -> Self {
        Self {
            todos: Vec::new(),
            loading: false,
            error: None,
            client,
            events,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// A create request is in flight. The UI uses this to hold off on
    /// duplicate submissions.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Fetch the full collection. On success the canonical collection is
    /// replaced wholesale, in the order the backend returned.
    pub fn load(&mut self) {
        self.error = None;
        let client = self.client.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let event = match client.list_todos().await {
                Ok(todos) => StoreEvent::Loaded(todos),
                Err(err) => {
                    warn!(error = %err, "failed to fetch todos");
                    StoreEvent::LoadFailed("Failed to fetch todos".to_string())
                }
            };
            let _ = events.send(event);
        });
    }

    /// Create a todo from `title`. Blank input (after trimming) is a silent
    /// no-op: no network call, no error flag. Returns whether a request was
    /// dispatched.
    pub fn create(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }

        self.error = None;
        self.loading = true;
        let title = title.to_string();
        let client = self.client.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let event = match client.create_todo(&title).await {
                Ok(todo) => StoreEvent::Created(todo),
                Err(err) => {
                    warn!(error = %err, "failed to add todo");
                    StoreEvent::CreateFailed("Failed to add todo".to_string())
                }
            };
            let _ = events.send(event);
        });
        true
    }

    /// Ask the backend to set the item's status. The target status is
    /// explicit; computing a toggle from current state is the caller's job.
    pub fn set_status(&mut self, id: &str, status: Status) {
        self.error = None;
        self.dispatch_update(id, TodoUpdate::status(status), "Failed to update todo");
    }

    /// Rename the item. A blank title, an unchanged title, or an unknown id
    /// is a silent no-op. Returns whether a request was dispatched.
    pub fn rename(&mut self, id: &str, new_title: &str) -> bool {
        let new_title = new_title.trim();
        if new_title.is_empty() {
            return false;
        }
        match self.find(id) {
            None => return false,
            Some(todo) if todo.title == new_title => return false,
            Some(_) => {}
        }

        self.error = None;
        self.dispatch_update(id, TodoUpdate::title(new_title.to_string()), "Failed to edit todo");
        true
    }

    /// Delete the item. The local entry is purged only once the backend
    /// acknowledges.
    pub fn remove(&mut self, id: &str) {
        self.error = None;
        let id = id.to_string();
        let client = self.client.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let event = match client.delete_todo(&id).await {
                Ok(()) => StoreEvent::Removed(id),
                Err(err) => {
                    warn!(error = %err, "failed to delete todo");
                    StoreEvent::RemoveFailed("Failed to delete todo".to_string())
                }
            };
            let _ = events.send(event);
        });
    }

    fn dispatch_update(&self, id: &str, update: TodoUpdate, failure_message: &'static str) {
        let id = id.to_string();
        let client = self.client.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let event = match client.update_todo(&id, &update).await {
                Ok(todo) => StoreEvent::Updated(todo),
                Err(err) => {
                    warn!(error = %err, %id, "todo update failed");
                    StoreEvent::UpdateFailed(failure_message.to_string())
                }
            };
            let _ = events.send(event);
        });
    }

    /// Fold a completed backend call into the canonical collection. The
    /// server's object replaces local state entirely; a result for an id
    /// that has since disappeared is dropped.
    pub fn apply(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::Loaded(todos) => {
                debug!(count = todos.len(), "loaded todos");
                self.todos = todos;
            }
            StoreEvent::Created(todo) => {
                // New items go to the front; the backend appends
                self.todos.insert(0, todo);
                self.loading = false;
            }
            StoreEvent::Updated(todo) => {
                if let Some(existing) = self.todos.iter_mut().find(|t| t.id == todo.id) {
                    *existing = todo;
                }
            }
            StoreEvent::Removed(id) => {
                self.todos.retain(|t| t.id != id);
            }
            StoreEvent::CreateFailed(message) => {
                self.error = Some(message);
                self.loading = false;
            }
            StoreEvent::LoadFailed(message)
            | StoreEvent::UpdateFailed(message)
            | StoreEvent::RemoveFailed(message) => {
                self.error = Some(message);
            }
        }
    }
}
