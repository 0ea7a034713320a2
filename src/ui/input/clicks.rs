//! Klick-Events: Punkt platzieren.

use super::{screen_pos_to_local, CanvasContext, InputState, PrimaryDragMode};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Linksklicks im Canvas.
    pub(crate) fn handle_clicks(&mut self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.clicked_by(egui::PointerButton::Primary) {
            return;
        }

        if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
            events.push(AppIntent::CanvasClicked {
                screen_pos: screen_pos_to_local(pointer_pos, ctx.response),
            });
        }
        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
