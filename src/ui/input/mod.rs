//! Canvas-Input-Handling: Maus-Events und Tastatur → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks` — Klick-Events (Punkt platzieren)
//! - `drag_primary` — Drag-Start/-Update/-Ende auf Editor-Punkten

mod clicks;
mod drag_primary;

use super::keyboard;
use crate::app::AppIntent;

/// Modus des primären (Links-)Drags im Canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    /// Drag eines Editor-Punkts
    PointDrag,
}

/// Bündelt die gemeinsamen Parameter für Canvas-Event-Verarbeitung.
pub(crate) struct CanvasContext<'a> {
    pub response: &'a egui::Response,
}

/// Verwaltet den Input-Zustand für den Canvas (Drag, Hover).
#[derive(Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
    last_hover: Option<glam::Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Maus, Drag und Tastatur.
    /// Alle Positionen sind relativ zur linken oberen Ecke des Canvas.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
    ) -> Vec<AppIntent> {
        let ctx = CanvasContext { response };
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(ui));

        self.handle_drag_start(&ctx, &mut events);
        self.handle_drag_update(&ctx, &mut events);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_clicks(&ctx, &mut events);
        self.handle_hover(&ctx, &mut events);

        events
    }

    /// Meldet Hover-Änderungen (auch das Verlassen des Canvas).
    fn handle_hover(&mut self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        let hover = ctx
            .response
            .hover_pos()
            .map(|pos| screen_pos_to_local(pos, ctx.response));
        if hover != self.last_hover {
            self.last_hover = hover;
            events.push(AppIntent::PointerMoved { screen_pos: hover });
        }
    }
}

/// Rechnet eine egui-Position in Canvas-lokale Pixel um.
pub(crate) fn screen_pos_to_local(pos: egui::Pos2, response: &egui::Response) -> glam::Vec2 {
    let local = pos - response.rect.min;
    glam::Vec2::new(local.x, local.y)
}
