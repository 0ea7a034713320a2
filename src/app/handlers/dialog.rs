//! Handler für Anwendungssteuerung.

use crate::app::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
