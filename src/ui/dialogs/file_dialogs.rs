use crate::app::{AppIntent, UiState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // SVG-Import-Dialog
    if ui_state.show_import_dialog {
        ui_state.show_import_dialog = false;

        let mut dialog = rfd::FileDialog::new().add_filter("SVG", &["svg"]);
        if let Some(dir) = ui_state
            .current_file
            .as_ref()
            .and_then(|p| std::path::Path::new(p).parent())
        {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.pick_file() {
            events.push(AppIntent::SvgFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
