//! User actions on a list screen.

/// An action the user performs on the current list screen.
///
/// Row numbers are 1-based positions on the current page, as shown in the
/// rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    First,
    Previous,
    Next,
    Last,
    GoTo(usize),
    PageSize(usize),
    Toggle(usize),
    ToggleAll,
    ClearSelection,
    Sort(String),
    ClearSort,
    Open(usize),
    Filter(Option<String>),
}

/// What happened when an action was applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Whether any state changed.
    pub changed: bool,
    /// Text to show the user, if any.
    pub message: Option<String>,
}

impl Outcome {
    pub fn changed(changed: bool) -> Self {
        Self {
            changed,
            message: None,
        }
    }

    pub fn message(changed: bool, message: impl Into<String>) -> Self {
        Self {
            changed,
            message: Some(message.into()),
        }
    }
}
