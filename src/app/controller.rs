//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Epizykel & Simulation ===
            AppCommand::AddEpicycles { count } => handlers::epicycles::add(state, count)?,
            AppCommand::ScaleEpicycles { factor } => handlers::epicycles::scale(state, factor)?,
            AppCommand::ResetEpicycles => handlers::epicycles::reset(state),
            AppCommand::SetPaused { paused } => handlers::epicycles::set_paused(state, paused),
            AppCommand::Tick { dt_ms } => handlers::epicycles::tick(state, dt_ms)?,

            // === Pfad-Editor ===
            AppCommand::RefreshPathSamples => handlers::path_edit::refresh_samples(state)?,
            AppCommand::PlacePoint { screen_pos } => {
                handlers::path_edit::place_point(state, screen_pos)
            }
            AppCommand::BeginPointDrag { screen_pos } => {
                handlers::path_edit::begin_drag(state, screen_pos)
            }
            AppCommand::DragPoint { screen_pos } => handlers::path_edit::drag(state, screen_pos)?,
            AppCommand::EndPointDrag => handlers::path_edit::end_drag(state),
            AppCommand::UpdateHover { screen_pos } => {
                handlers::path_edit::update_hover(state, screen_pos)
            }
            AppCommand::ClearPath => handlers::path_edit::clear(state),

            // === Datei-I/O ===
            AppCommand::RequestImportDialog => handlers::file_io::request_import(state),
            AppCommand::ImportSvg { path } => handlers::file_io::import_svg(state, path)?,
            AppCommand::SaveOptions => handlers::file_io::save_options(state)?,

            // === Viewport & Anwendungssteuerung ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
