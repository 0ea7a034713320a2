//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Segmente: {}{}",
                state.segment_count(),
                if state.builder.is_closed() {
                    " (geschlossen)"
                } else {
                    ""
                }
            ));

            if let Some(ref file) = state.ui.current_file {
                let filename = std::path::Path::new(file)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                ui.separator();
                ui.label(format!("Datei: {}", filename));
            }

            ui.separator();

            ui.label(format!(
                "Terme: {} | nächstes k: {}",
                state.term_count(),
                state.epicycles.next_frequency()
            ));

            ui.separator();

            ui.label(format!(
                "t = {:.3} | Skalierung: {:.2}x",
                state.epicycles.time().fract(),
                state.epicycles.scale()
            ));

            if state.paused {
                ui.separator();
                ui.label("⏸ Pausiert");
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
