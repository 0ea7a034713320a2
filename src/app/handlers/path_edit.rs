//! Handler für den Pfad-Editor (Platzieren, Ziehen, Hover).

use crate::app::state::to_complex;
use crate::app::AppState;
use glam::Vec2;

fn pick_radius(state: &AppState) -> f64 {
    f64::from(state.options.pick_radius_px)
}

/// Platziert den nächsten Punkt an der Klickposition.
pub fn place_point(state: &mut AppState, screen_pos: Vec2) {
    let radius = pick_radius(state);
    match state.builder.place_point(to_complex(screen_pos), radius) {
        Some(id) => log::debug!(
            "Punkt {} platziert ({} Segmente, geschlossen: {})",
            id,
            state.builder.path().segment_count(),
            state.builder.is_closed()
        ),
        None => log::debug!("Pfad ist geschlossen, Klick ignoriert"),
    }
}

/// Greift den nächsten Punkt innerhalb des Pick-Radius.
pub fn begin_drag(state: &mut AppState, screen_pos: Vec2) {
    let radius = pick_radius(state);
    if let Some(id) = state.builder.begin_drag(to_complex(screen_pos), radius) {
        log::debug!("Drag auf Punkt {} begonnen", id);
    }
}

/// Verschiebt den gegriffenen Punkt.
pub fn drag(state: &mut AppState, screen_pos: Vec2) -> anyhow::Result<()> {
    state.builder.drag_to(to_complex(screen_pos))?;
    Ok(())
}

/// Lässt den gegriffenen Punkt los.
pub fn end_drag(state: &mut AppState) {
    state.builder.end_drag();
}

/// Bestimmt den Punkt unter dem Mauszeiger.
pub fn update_hover(state: &mut AppState, screen_pos: Option<Vec2>) {
    let radius = pick_radius(state);
    state.view.hovered_point =
        screen_pos.and_then(|pos| state.builder.pick(to_complex(pos), radius));
}

/// Entfernt Pfad und Punkte. Die Epizykel bleiben dem Reset-Command überlassen.
pub fn clear(state: &mut AppState) {
    state.builder.clear();
    state.view.hovered_point = None;
    state.ui.current_file = None;
    log::info!("Pfad gelöscht");
}

/// Frischt den Sample-Cache des Pfads für die Darstellung auf.
pub fn refresh_samples(state: &mut AppState) -> anyhow::Result<()> {
    if state.builder.path().is_empty() {
        return Ok(());
    }
    let count = state.options.path_sample_count(state.builder.path().segment_count());
    state.builder.path_mut().sample(count)?;
    Ok(())
}
