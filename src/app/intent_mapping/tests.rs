use crate::app::state::to_complex;
use crate::app::{AppCommand, AppIntent, AppState};
use glam::Vec2;

use super::map_intent_to_commands;

fn state_with_viewport() -> AppState {
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 400.0];
    state
}

#[test]
fn add_term_requested_maps_to_single_epicycle() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::AddTermRequested);

    assert_eq!(commands, vec![AppCommand::AddEpicycles { count: 1 }]);
}

#[test]
fn add_batch_requested_uses_batch_size_option() {
    let mut state = AppState::new();
    state.options.batch_size = 7;

    let commands = map_intent_to_commands(&state, AppIntent::AddBatchRequested);

    assert_eq!(commands, vec![AppCommand::AddEpicycles { count: 7 }]);
}

#[test]
fn scale_requests_use_scale_step_and_its_inverse() {
    let mut state = AppState::new();
    state.options.scale_step = 2.0;

    let up = map_intent_to_commands(&state, AppIntent::ScaleUpRequested);
    let down = map_intent_to_commands(&state, AppIntent::ScaleDownRequested);

    assert_eq!(up, vec![AppCommand::ScaleEpicycles { factor: 2.0 }]);
    assert_eq!(down, vec![AppCommand::ScaleEpicycles { factor: 0.5 }]);
}

#[test]
fn toggle_pause_inverts_current_state() {
    let mut state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::TogglePauseRequested);
    assert_eq!(commands, vec![AppCommand::SetPaused { paused: true }]);

    state.paused = true;
    let commands = map_intent_to_commands(&state, AppIntent::TogglePauseRequested);
    assert_eq!(commands, vec![AppCommand::SetPaused { paused: false }]);
}

#[test]
fn clear_path_requested_maps_to_two_commands_in_order() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ClearPathRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::ClearPath));
    assert!(matches!(commands[1], AppCommand::ResetEpicycles));
}

#[test]
fn frame_advanced_skips_tick_while_paused() {
    let mut state = AppState::new();

    let running = map_intent_to_commands(&state, AppIntent::FrameAdvanced { dt_ms: 16.0 });
    assert_eq!(
        running,
        vec![
            AppCommand::Tick { dt_ms: 16.0 },
            AppCommand::RefreshPathSamples
        ]
    );

    state.paused = true;
    let paused = map_intent_to_commands(&state, AppIntent::FrameAdvanced { dt_ms: 16.0 });
    assert_eq!(paused, vec![AppCommand::RefreshPathSamples]);
}

#[test]
fn canvas_click_only_places_points_in_editor_pane() {
    let state = state_with_viewport();

    let inside = map_intent_to_commands(
        &state,
        AppIntent::CanvasClicked {
            screen_pos: Vec2::new(100.0, 100.0),
        },
    );
    let outside = map_intent_to_commands(
        &state,
        AppIntent::CanvasClicked {
            screen_pos: Vec2::new(600.0, 100.0),
        },
    );

    assert_eq!(
        inside,
        vec![AppCommand::PlacePoint {
            screen_pos: Vec2::new(100.0, 100.0)
        }]
    );
    assert!(outside.is_empty());
}

#[test]
fn point_dragged_without_active_drag_is_ignored() {
    let mut state = state_with_viewport();
    let drag = AppIntent::PointDragged {
        screen_pos: Vec2::new(50.0, 50.0),
    };

    assert!(map_intent_to_commands(&state, drag.clone()).is_empty());

    state.builder.place_point(to_complex(Vec2::new(40.0, 40.0)), 10.0);
    state.builder.begin_drag(to_complex(Vec2::new(40.0, 40.0)), 10.0);
    assert_eq!(
        map_intent_to_commands(&state, drag),
        vec![AppCommand::DragPoint {
            screen_pos: Vec2::new(50.0, 50.0)
        }]
    );
}

#[test]
fn unchanged_viewport_size_emits_nothing() {
    let state = state_with_viewport();

    let same = map_intent_to_commands(&state, AppIntent::ViewportResized { size: [800.0, 400.0] });
    let changed =
        map_intent_to_commands(&state, AppIntent::ViewportResized { size: [1000.0, 400.0] });

    assert!(same.is_empty());
    assert_eq!(
        changed,
        vec![AppCommand::SetViewportSize {
            size: [1000.0, 400.0]
        }]
    );
}

#[test]
fn svg_file_selected_carries_path() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SvgFileSelected {
            path: "herz.svg".to_string(),
        },
    );

    assert!(matches!(
        commands.as_slice(),
        [AppCommand::ImportSvg { path }] if path == "herz.svg"
    ));
}
