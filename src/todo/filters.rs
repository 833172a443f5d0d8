use crate::todo::models::{StatusFilter, Todo};

/// Narrow `todos` to the visible subset: status filter first, then a
/// case-insensitive substring match on the title. Both criteria are
/// conjunctive and the original order is preserved. An empty search term
/// applies no search filtering.
pub fn filter_todos<'a>(
    todos: &'a [Todo],
    status_filter: StatusFilter,
    search_term: &str,
) -> Vec<&'a Todo> {
    let query = search_term.to_lowercase();

    todos
        .iter()
        .filter(|todo| status_filter.matches(todo.status))
        .filter(|todo| query.is_empty() || todo.title.to_lowercase().contains(&query))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub pending: usize,
    pub finished: usize,
    /// Percentage of finished items, rounded half away from zero.
    pub completion_rate: u8,
}

pub fn todo_stats(todos: &[Todo]) -> TodoStats {
    let total = todos.len();
    let finished = todos.iter().filter(|t| t.is_finished()).count();
    let pending = total - finished;

    let completion_rate = if total > 0 {
        (finished as f64 * 100.0 / total as f64).round() as u8
    } else {
        0
    };

    TodoStats {
        total,
        pending,
        finished,
        completion_rate,
    }
}
