//! Task record model: a typed view over loosely-structured input data.
//!
//! Every field is optional on the wire. Defaults and the small closed
//! priority/status vocabularies are resolved here, once, so the aggregation
//! and formatting code never touches raw strings.

use serde::{Deserialize, Deserializer};

/// Report owner.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub username: Option<String>,
}

impl UserInfo {
    pub fn named(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    /// Display name, defaulting to 担当者 ("assignee").
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or("担当者")
    }
}

/// Task priority. Anything outside the three recognized values lands in
/// `Unknown` and is excluded from the priority breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
    #[default]
    Unknown,
}

impl Priority {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("high") => Priority::High,
            Some("medium") => Priority::Medium,
            Some("low") => Priority::Low,
            _ => Priority::Unknown,
        }
    }

    /// Japanese display label; `Unknown` renders as empty.
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "高",
            Priority::Medium => "中",
            Priority::Low => "低",
            Priority::Unknown => "",
        }
    }
}

/// Completion state. Only the literal status `"completed"` counts as done;
/// any other value, including absent, means pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    #[default]
    Pending,
}

impl TaskStatus {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("completed") => TaskStatus::Completed,
            _ => TaskStatus::Pending,
        }
    }
}

fn de_priority<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(Priority::parse(raw.as_deref()))
}

fn de_status<'de, D>(deserializer: D) -> Result<TaskStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(TaskStatus::parse(raw.as_deref()))
}

/// One task as handed to the engine. Immutable input: the engine never
/// mutates or persists these.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "de_priority")]
    pub priority: Priority,

    /// Either a `YYYY/MM/DD` token or an ISO-8601 timestamp.
    #[serde(default)]
    pub due_date: Option<String>,

    #[serde(default, deserialize_with = "de_status")]
    pub status: TaskStatus,

    #[serde(default)]
    pub created_by_username: Option<String>,

    /// Sort key only (lexical / ISO order); never parsed as a date.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_updated_at(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = Some(updated_at.into());
        self
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("タスク")
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Due date with empty strings normalized away.
    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn created_by(&self) -> &str {
        self.created_by_username.as_deref().unwrap_or("不明")
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Ranking key for the recently-completed section; absent sorts as the
    /// empty string, i.e. last under descending order.
    pub fn updated_at_key(&self) -> &str {
        self.updated_at.as_deref().unwrap_or("")
    }
}

/// The full input payload: user info plus the task list snapshot. The host
/// loader parses this from UTF-8 JSON; both fields tolerate absence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisInput {
    #[serde(default)]
    pub user: UserInfo,

    #[serde(default)]
    pub tasks: Vec<Task>,
}
