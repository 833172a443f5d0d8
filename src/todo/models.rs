use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "to do")]
    Pending,
    #[serde(rename = "finished")]
    Finished,
}

impl Status {
    pub fn is_finished(self) -> bool {
        self == Status::Finished
    }

    /// The status a toggle request should ask the backend for. The backend
    /// only ever receives an explicit target status, never a "flip".
    pub fn toggled(self) -> Self {
        match self {
            Status::Pending => Status::Finished,
            Status::Finished => Status::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub status: Status,
    /// Assigned by the backend; naive UTC on the wire, display only.
    pub created_at: NaiveDateTime,
}

impl Todo {
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }
}

/// Fields of a `PUT /api/todos/{id}` request. Absent fields are omitted
/// from the payload so the backend leaves them untouched.
#[derive(Debug, Clone, Serialize)]
pub struct TodoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl TodoUpdate {
    pub fn title(title: String) -> Self {
        Self {
            title: Some(title),
            status: None,
        }
    }

    pub fn status(status: Status) -> Self {
        Self {
            title: None,
            status: Some(status),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Finished,
}

impl StatusFilter {
    pub fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == Status::Pending,
            StatusFilter::Finished => status == Status::Finished,
        }
    }

    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Pending,
            StatusFilter::Pending => StatusFilter::Finished,
            StatusFilter::Finished => StatusFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All Tasks",
            StatusFilter::Pending => "To Do",
            StatusFilter::Finished => "Finished",
        }
    }
}
