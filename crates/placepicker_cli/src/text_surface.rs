//! Plain-text rendering surface for terminals.

use placepicker_core::{
    ConfirmationPrompt, DialogState, PageHeader, PlaceListContent, PlaceListView, RenderSurface,
};
use std::fmt::Write;

/// Accumulates one rendered page as text.
#[derive(Debug, Default)]
pub struct TextSurface {
    out: String,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rendered page and clears the buffer.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.out)
    }
}

impl RenderSurface for TextSurface {
    fn render_header(&mut self, header: &PageHeader) {
        let _ = writeln!(self.out, "== {} ==", header.title);
        let _ = writeln!(self.out, "{}", header.tagline);
    }

    fn render_dialog(&mut self, state: DialogState, prompt: &ConfirmationPrompt) {
        if !state.is_open() {
            return;
        }
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "[ {} ]", prompt.title);
        let _ = writeln!(self.out, "{}", prompt.message);
        let _ = writeln!(
            self.out,
            "  no  -> {}   yes -> {}   esc -> dismiss",
            prompt.cancel_label, prompt.confirm_label
        );
    }

    fn render_list(&mut self, view: &PlaceListView<'_>) {
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "{}", view.title);
        match view.render() {
            PlaceListContent::Fallback(text) => {
                let _ = writeln!(self.out, "  {text}");
            }
            PlaceListContent::Items(places) => {
                for place in places {
                    let _ = writeln!(self.out, "  [{}] {}", place.id, place.title);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TextSurface;
    use placepicker_core::{Catalog, FixedPosition, MemoryStorage, PlacePicker, Position};

    #[test]
    fn closed_dialog_is_not_drawn() {
        let picker = PlacePicker::new(Catalog::builtin(), MemoryStorage::new());
        let mut surface = TextSurface::new();
        picker.render(&mut surface);

        let page = surface.take();
        assert!(!page.contains("Are you sure?"));
        assert!(page.contains("Sorting places by distance..."));
        assert!(surface.take().is_empty());
    }

    #[test]
    fn sorted_catalog_lists_ids() {
        let mut picker = PlacePicker::new(Catalog::builtin(), MemoryStorage::new());
        picker.mount(&mut FixedPosition(Position::new(35.0, 135.7)));
        let mut surface = TextSurface::new();
        picker.render(&mut surface);

        let page = surface.take();
        assert!(page.contains("[p8] Japanese Temple"));
    }
}
