//! Handler für Epizykel-Kette und Simulationsuhr.

use crate::app::AppState;

/// Zieht `count` weitere Terme aus dem aktuellen Pfad.
///
/// Ohne Pfad wird nur eine Statusmeldung gesetzt.
pub fn add(state: &mut AppState, count: usize) -> anyhow::Result<()> {
    if state.builder.path().is_empty() {
        log::warn!("Kein Pfad vorhanden, Epizykel können nicht berechnet werden");
        state.ui.status_message = Some("Erst einen Pfad zeichnen oder importieren".to_string());
        return Ok(());
    }

    let result = state.epicycles.add_cycles(state.builder.path(), count);
    state.ui.status_message = None;
    result?;
    Ok(())
}

/// Multipliziert die Anzeige-Skalierung und übernimmt sie in die Optionen.
pub fn scale(state: &mut AppState, factor: f64) -> anyhow::Result<()> {
    state.epicycles.scale_by(factor)?;
    state.options.epicycle_scale = state.epicycles.scale();
    log::debug!("Epizykel-Skalierung: {:.3}", state.epicycles.scale());
    Ok(())
}

/// Leert die Kette und setzt Generator und Uhr zurück.
pub fn reset(state: &mut AppState) {
    state.epicycles.reset();
}

/// Hält die Simulationsuhr an oder setzt sie fort.
pub fn set_paused(state: &mut AppState, paused: bool) {
    state.paused = paused;
    log::info!("Simulation {}", if paused { "angehalten" } else { "fortgesetzt" });
}

/// Schreibt die Simulationszeit fort.
pub fn tick(state: &mut AppState, dt_ms: f64) -> anyhow::Result<()> {
    state.epicycles.tick(dt_ms)?;
    Ok(())
}
