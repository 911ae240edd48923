//! Presentation projections handed to a host rendering surface.
//!
//! # Responsibility
//! - Project controller state into list and dialog views.
//! - Define the polymorphic surface a host renders them on.
//!
//! # Invariants
//! - Views hold no state of their own and never mutate application data.

pub mod dialog;
pub mod view;

use dialog::{ConfirmationPrompt, DialogState};
use view::PlaceListView;

/// Application title shown in the page header.
pub const APP_TITLE: &str = "PlacePicker";
/// Tagline shown below the application title.
pub const APP_TAGLINE: &str =
    "Create your personal collection of places you would like to visit or you have visited.";

/// Static page header content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHeader {
    pub title: &'static str,
    pub tagline: &'static str,
    /// Logo image reference and its alt text.
    pub logo: (&'static str, &'static str),
}

impl Default for PageHeader {
    fn default() -> Self {
        Self {
            title: APP_TITLE,
            tagline: APP_TAGLINE,
            logo: ("logo.png", "Stylized globe"),
        }
    }
}

/// Host surface capable of drawing the picker page.
pub trait RenderSurface {
    fn render_header(&mut self, header: &PageHeader);
    fn render_dialog(&mut self, state: DialogState, prompt: &ConfirmationPrompt);
    fn render_list(&mut self, view: &PlaceListView<'_>);
}
