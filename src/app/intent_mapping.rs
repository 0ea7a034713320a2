//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::AddTermRequested => vec![AppCommand::AddEpicycles { count: 1 }],
        AppIntent::AddBatchRequested => vec![AppCommand::AddEpicycles {
            count: state.options.batch_size,
        }],
        AppIntent::ScaleDownRequested => vec![AppCommand::ScaleEpicycles {
            factor: 1.0 / state.options.scale_step,
        }],
        AppIntent::ScaleUpRequested => vec![AppCommand::ScaleEpicycles {
            factor: state.options.scale_step,
        }],
        AppIntent::ResetRequested => vec![AppCommand::ResetEpicycles],
        AppIntent::TogglePauseRequested => vec![AppCommand::SetPaused {
            paused: !state.paused,
        }],
        AppIntent::ClearPathRequested => vec![AppCommand::ClearPath, AppCommand::ResetEpicycles],
        AppIntent::ImportSvgRequested => vec![AppCommand::RequestImportDialog],
        AppIntent::SvgFileSelected { path } => vec![AppCommand::ImportSvg { path }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ViewportResized { size } => {
            if size == state.view.viewport_size {
                Vec::new()
            } else {
                vec![AppCommand::SetViewportSize { size }]
            }
        }
        AppIntent::FrameAdvanced { dt_ms } => {
            if state.paused {
                vec![AppCommand::RefreshPathSamples]
            } else {
                vec![AppCommand::Tick { dt_ms }, AppCommand::RefreshPathSamples]
            }
        }
        AppIntent::CanvasClicked { screen_pos } => {
            // Klicks im Epizykel-Bereich werden ignoriert
            if state.view.is_in_editor(screen_pos) {
                vec![AppCommand::PlacePoint { screen_pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointDragStarted { screen_pos } => {
            vec![AppCommand::BeginPointDrag { screen_pos }]
        }
        AppIntent::PointDragged { screen_pos } => {
            if state.builder.dragging().is_some() {
                vec![AppCommand::DragPoint { screen_pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointDragEnded => vec![AppCommand::EndPointDrag],
        AppIntent::PointerMoved { screen_pos } => vec![AppCommand::UpdateHover { screen_pos }],
    }
}

#[cfg(test)]
mod tests;
