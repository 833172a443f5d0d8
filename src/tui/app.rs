use crossterm::event::KeyEvent;

use crate::todo::filters::{TodoStats, filter_todos, todo_stats};
use crate::todo::models::{StatusFilter, Todo};
use crate::todo::store::{StoreEvent, TodoStore};
use crate::tui::edit::InputState;
use crate::tui::handlers::{
    HelpModeAction, InputModeAction, KeyHandler, NormalModeAction, SearchModeAction,
};
use crate::tui::navigation::NavigationState;
use crate::tui::search::SearchState;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    /// Typing a title on the input line
    Input(InputKind),
    Search,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputKind {
    NewTodo,
    Rename { id: String },
}

pub struct App {
    pub store: TodoStore,
    pub mode: Mode,
    pub status_filter: StatusFilter,
    pub search: SearchState,
    pub input: InputState,
    pub navigation: NavigationState,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: TodoStore) -> Self {
        Self {
            store,
            mode: Mode::Normal,
            status_filter: StatusFilter::All,
            search: SearchState::new(),
            input: InputState::new(),
            navigation: NavigationState::new(),
            should_quit: false,
        }
    }

    /// The list as currently displayed: canonical collection narrowed by
    /// the active tab and search term, order preserved.
    pub fn visible_todos(&self) -> Vec<&Todo> {
        filter_todos(self.store.todos(), self.status_filter, &self.search.query)
    }

    /// Aggregates always cover the full collection, not the filtered view.
    pub fn stats(&self) -> TodoStats {
        todo_stats(self.store.todos())
    }

    pub fn selected_todo(&self) -> Option<&Todo> {
        self.visible_todos()
            .get(self.navigation.selected_index)
            .copied()
    }

    /// Fold a completed backend call into the store, then re-derive the
    /// selection so it stays inside the (possibly shrunken) visible list.
    pub fn apply_store_event(&mut self, event: StoreEvent) {
        self.store.apply(event);
        self.clamp_selection();
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match self.mode.clone() {
            Mode::Help => self.handle_help_mode_key(key_event),
            Mode::Search => self.handle_search_mode_key(key_event),
            Mode::Input(kind) => self.handle_input_mode_key(key_event, kind),
            Mode::Normal => self.handle_normal_mode_key(key_event),
        }
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Quit => {
                self.should_quit = true;
            }
            NormalModeAction::ClearSearch => {
                self.search.cancel_search();
                self.clamp_selection();
            }
            NormalModeAction::MoveSelectionUp => {
                self.navigation.move_selection_up();
            }
            NormalModeAction::MoveSelectionDown => {
                let len = self.visible_todos().len();
                self.navigation.move_selection_down(len);
            }
            NormalModeAction::ToggleSelectedItem => {
                // The flip is computed here, from the item's current status;
                // the store only ever sends an explicit target status
                if let Some((id, status)) =
                    self.selected_todo().map(|t| (t.id.clone(), t.status))
                {
                    self.store.set_status(&id, status.toggled());
                }
            }
            NormalModeAction::AddNewTodo => {
                self.input.clear();
                self.mode = Mode::Input(InputKind::NewTodo);
            }
            NormalModeAction::EditSelectedItem => {
                if let Some((id, title)) =
                    self.selected_todo().map(|t| (t.id.clone(), t.title.clone()))
                {
                    self.input.start(&title);
                    self.mode = Mode::Input(InputKind::Rename { id });
                }
            }
            NormalModeAction::DeleteSelectedItem => {
                if let Some(id) = self.selected_todo().map(|t| t.id.clone()) {
                    self.store.remove(&id);
                }
            }
            NormalModeAction::CycleStatusFilter => {
                self.status_filter = self.status_filter.next();
                self.clamp_selection();
            }
            NormalModeAction::Refresh => {
                self.store.load();
            }
            NormalModeAction::EnterSearchMode => {
                self.search.enter_search_mode();
                self.mode = Mode::Search;
                self.clamp_selection();
            }
            NormalModeAction::ToggleHelpMode => {
                self.mode = Mode::Help;
            }
            NormalModeAction::None => {}
        }
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_help_mode_key(key_event) {
            HelpModeAction::ExitHelpMode => {
                self.mode = Mode::Normal;
            }
            HelpModeAction::None => {}
        }
    }

    fn handle_search_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_search_mode_key(key_event) {
            SearchModeAction::CancelSearch => {
                self.search.cancel_search();
                self.mode = Mode::Normal;
                self.clamp_selection();
            }
            SearchModeAction::ConfirmSearch => {
                self.search.confirm_search();
                self.mode = Mode::Normal;
            }
            SearchModeAction::Backspace => {
                self.search.backspace();
                self.clamp_selection();
            }
            SearchModeAction::InsertChar(c) => {
                self.search.insert_char(c);
                self.clamp_selection();
            }
            SearchModeAction::None => {}
        }
    }

    fn handle_input_mode_key(&mut self, key_event: KeyEvent, kind: InputKind) {
        match KeyHandler::handle_input_mode_key(key_event) {
            InputModeAction::CancelInput => {
                self.input.clear();
                self.mode = Mode::Normal;
            }
            InputModeAction::ConfirmInput => {
                match kind {
                    InputKind::NewTodo => {
                        // One create at a time; the input stays open while a
                        // request is in flight
                        if self.store.is_loading() {
                            return;
                        }
                        self.store.create(&self.input.buffer);
                    }
                    InputKind::Rename { id } => {
                        self.store.rename(&id, &self.input.buffer);
                    }
                }
                self.input.clear();
                self.mode = Mode::Normal;
            }
            InputModeAction::Backspace => self.input.backspace(),
            InputModeAction::Delete => self.input.delete(),
            InputModeAction::MoveCursorLeft => self.input.move_cursor_left(),
            InputModeAction::MoveCursorRight => self.input.move_cursor_right(),
            InputModeAction::MoveCursorHome => self.input.move_cursor_home(),
            InputModeAction::MoveCursorEnd => self.input.move_cursor_end(),
            InputModeAction::InsertChar(c) => self.input.insert_char(c),
            InputModeAction::None => {}
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_todos().len();
        self.navigation.clamp(len);
    }
}
