//! Drag-Start/-Update/-Ende auf Editor-Punkten.

use super::{screen_pos_to_local, CanvasContext, InputState, PrimaryDragMode};
use crate::app::AppIntent;

impl InputState {
    /// Erkennt Drag-Beginn an der Druckposition.
    pub(crate) fn handle_drag_start(&mut self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        // Druckposition statt aktueller Position: egui meldet den Drag erst nach Bewegung
        let press_pos = ctx
            .response
            .ctx
            .input(|i| i.pointer.press_origin())
            .or_else(|| ctx.response.interact_pointer_pos());

        if let Some(pointer_pos) = press_pos {
            events.push(AppIntent::PointDragStarted {
                screen_pos: screen_pos_to_local(pointer_pos, ctx.response),
            });
            self.primary_drag_mode = PrimaryDragMode::PointDrag;
        }
    }

    /// Meldet die aktuelle Zeigerposition während eines Drags.
    pub(crate) fn handle_drag_update(&mut self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        if self.primary_drag_mode != PrimaryDragMode::PointDrag
            || !ctx.response.dragged_by(egui::PointerButton::Primary)
        {
            return;
        }

        if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
            events.push(AppIntent::PointDragged {
                screen_pos: screen_pos_to_local(pointer_pos, ctx.response),
            });
        }
    }

    /// Beendet den Drag beim Loslassen.
    pub(crate) fn handle_drag_end(&mut self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        if self.primary_drag_mode == PrimaryDragMode::PointDrag
            && ctx.response.drag_stopped_by(egui::PointerButton::Primary)
        {
            events.push(AppIntent::PointDragEnded);
            self.primary_drag_mode = PrimaryDragMode::None;
        }
    }
}
