//! Generic modal host and the remove-confirmation prompt.
//!
//! # Invariants
//! - A modal starts `Closed` and only moves between `Closed` and `Open`.
//! - The modal reports the user's answer and never acts on it.

/// Visibility of a modal surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

impl DialogState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Open/close control exposed to the controller.
pub trait ModalControl {
    fn open(&mut self);
    fn close(&mut self);
    fn is_open(&self) -> bool;
}

/// User answer reported by a confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResponse {
    /// Explicit "Yes".
    Confirm,
    /// Explicit "No".
    Cancel,
    /// Escape key or backdrop click; handled like `Cancel`.
    Dismiss,
}

impl DialogResponse {
    pub fn is_confirm(self) -> bool {
        matches!(self, Self::Confirm)
    }
}

/// Modal surface hosting arbitrary content.
#[derive(Debug, Clone, Default)]
pub struct Modal<C> {
    state: DialogState,
    content: C,
}

impl<C> Modal<C> {
    pub fn new(content: C) -> Self {
        Self {
            state: DialogState::Closed,
            content,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn content(&self) -> &C {
        &self.content
    }
}

impl<C> ModalControl for Modal<C> {
    fn open(&mut self) {
        self.state = DialogState::Open;
    }

    fn close(&mut self) {
        self.state = DialogState::Closed;
    }

    fn is_open(&self) -> bool {
        self.state.is_open()
    }
}

/// Yes/No prompt shown before a destructive action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    pub title: String,
    pub message: String,
    pub cancel_label: String,
    pub confirm_label: String,
}

impl Default for ConfirmationPrompt {
    fn default() -> Self {
        Self {
            title: "Are you sure?".to_string(),
            message: "Do you really want to remove this place?".to_string(),
            cancel_label: "No".to_string(),
            confirm_label: "Yes".to_string(),
        }
    }
}
