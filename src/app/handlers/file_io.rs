//! Handler für Datei-Operationen (SVG-Import, Optionen speichern).

use crate::app::state::to_complex;
use crate::app::AppState;
use crate::core::PathBuilder;
use crate::shared::EpicycleOptions;
use crate::svg;
use std::path::Path;

/// Abstand, unter dem importierte Endpunkte zu einem Editor-Punkt verschmelzen.
const MERGE_EPSILON: f64 = 1e-6;

/// Öffnet den SVG-Auswahldialog im nächsten Frame.
pub fn request_import(state: &mut AppState) {
    state.ui.show_import_dialog = true;
}

/// Importiert den ersten Pfad einer SVG-Datei und passt ihn in den Editor-Bereich ein.
///
/// Die Epizykel werden zurückgesetzt, da sie zum alten Pfad gehören.
pub fn import_svg(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let imported = svg::load_svg_file(Path::new(&path))?;
    let (min, max) = state.view.editor_rect();
    let fitted = svg::fit_into_rect(
        &imported,
        to_complex(min),
        to_complex(max),
        f64::from(state.options.import_margin_px),
    );

    state.builder = PathBuilder::from_path(fitted, MERGE_EPSILON);
    state.view.hovered_point = None;
    state.epicycles.reset();

    log::info!(
        "SVG importiert: {} ({} Segmente)",
        path,
        state.builder.path().segment_count()
    );
    state.ui.status_message = Some(format!(
        "{} Segmente importiert",
        state.builder.path().segment_count()
    ));
    state.ui.current_file = Some(path);
    Ok(())
}

/// Schreibt die aktuellen Optionen neben die Binary.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    let path = EpicycleOptions::config_path();
    state.options.save_to_file(&path)?;
    state.ui.status_message = Some(format!("Optionen gespeichert: {}", path.display()));
    Ok(())
}
