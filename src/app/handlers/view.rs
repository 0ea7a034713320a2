//! Handler für Viewport und Fensteraufteilung.

use crate::app::state::to_complex;
use crate::app::AppState;

/// Aktualisiert die Viewport-Größe; Kettenwurzel und Pfad-Ursprung folgen den Bereichsmitten.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
    let anchor = to_complex(state.view.epicycle_center());
    let origin = to_complex(state.view.editor_center());
    state.epicycles.set_anchor(anchor);
    state.epicycles.set_path_origin(origin);
    log::debug!("Viewport: {}x{}", size[0], size[1]);
}
