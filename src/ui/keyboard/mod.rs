//! Keyboard-Shortcuts für den Canvas.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Ctrl+O (SVG importieren), Ctrl+S (Optionen speichern)
    let (modifiers, key_o_pressed, key_s_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::S),
        )
    });

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::ImportSvgRequested);
    }

    if modifiers.command && key_s_pressed {
        events.push(AppIntent::SaveOptionsRequested);
    }

    // Ohne Ctrl: Simulation und Editor
    if modifiers.command {
        return events;
    }

    let (
        key_e_pressed,
        key_w_pressed,
        key_j_pressed,
        key_k_pressed,
        key_r_pressed,
        key_space_pressed,
        key_c_pressed,
        key_exit_pressed,
    ) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::E),
            i.key_pressed(egui::Key::W),
            i.key_pressed(egui::Key::J),
            i.key_pressed(egui::Key::K),
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::Space),
            i.key_pressed(egui::Key::C),
            i.key_pressed(egui::Key::X) || i.key_pressed(egui::Key::Escape),
        )
    });

    if key_e_pressed {
        events.push(AppIntent::AddTermRequested);
    }
    if key_w_pressed {
        events.push(AppIntent::AddBatchRequested);
    }
    if key_j_pressed {
        events.push(AppIntent::ScaleDownRequested);
    }
    if key_k_pressed {
        events.push(AppIntent::ScaleUpRequested);
    }
    if key_r_pressed {
        events.push(AppIntent::ResetRequested);
    }
    if key_space_pressed {
        events.push(AppIntent::TogglePauseRequested);
    }
    if key_c_pressed {
        events.push(AppIntent::ClearPathRequested);
    }
    if key_exit_pressed {
        events.push(AppIntent::ExitRequested);
    }

    events
}
