use approx::assert_relative_eq;
use fourier_epicycles::app::state::{to_complex, to_screen};
use fourier_epicycles::{AppCommand, AppController, AppIntent, AppState};
use glam::Vec2;

const VIEWPORT: [f32; 2] = [800.0, 400.0];

/// Geschlossener Pfad aus zwei Segmenten im linken Bereich (7 Klicks).
const CLOSED_PATH_CLICKS: [(f32, f32); 7] = [
    (100.0, 100.0),
    (150.0, 80.0),
    (250.0, 80.0),
    (300.0, 100.0),
    (320.0, 200.0),
    (200.0, 320.0),
    (102.0, 101.0),
];

fn setup() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::ViewportResized { size: VIEWPORT })
        .expect("ViewportResized sollte ohne Fehler durchlaufen");
    (controller, state)
}

fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::CanvasClicked {
                screen_pos: Vec2::new(x, y),
            },
        )
        .expect("CanvasClicked sollte ohne Fehler durchlaufen");
}

fn setup_with_closed_path() -> (AppController, AppState) {
    let (mut controller, mut state) = setup();
    for (x, y) in CLOSED_PATH_CLICKS {
        click(&mut controller, &mut state, x, y);
    }
    (controller, state)
}

fn last_command(state: &AppState) -> &AppCommand {
    state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein")
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let (mut controller, mut state) = setup();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert_eq!(last_command(&state), &AppCommand::RequestExit);
}

#[test]
fn test_viewport_resize_moves_anchor_to_right_pane() {
    let (_, state) = setup();

    let anchor = to_screen(state.epicycles.anchor());
    assert_eq!(anchor, Vec2::new(600.0, 200.0));
}

#[test]
fn test_add_term_without_path_sets_status_and_keeps_chain_empty() {
    let (mut controller, mut state) = setup();

    controller
        .handle_intent(&mut state, AppIntent::AddTermRequested)
        .expect("AddTermRequested ohne Pfad sollte robust sein");

    assert_eq!(state.term_count(), 0);
    assert!(state.ui.status_message.is_some());
    assert_eq!(last_command(&state), &AppCommand::AddEpicycles { count: 1 });
}

#[test]
fn test_clicks_build_closed_two_segment_path() {
    let (mut controller, mut state) = setup_with_closed_path();

    assert_eq!(state.segment_count(), 2);
    assert!(state.builder.is_closed());
    // Der letzte Klick rastet auf den ersten Endpunkt ein
    assert_eq!(state.builder.points().len(), 6);

    click(&mut controller, &mut state, 50.0, 50.0);
    assert_eq!(state.builder.points().len(), 6);
}

#[test]
fn test_click_in_epicycle_pane_is_ignored() {
    let (mut controller, mut state) = setup();

    click(&mut controller, &mut state, 600.0, 100.0);

    assert!(state.builder.points().is_empty());
    assert!(state.command_log.entries().iter().all(|c| !matches!(c, AppCommand::PlacePoint { .. })));
}

#[test]
fn test_add_batch_adds_batch_size_terms_in_zigzag_order() {
    let (mut controller, mut state) = setup_with_closed_path();
    state.options.batch_size = 5;

    controller
        .handle_intent(&mut state, AppIntent::AddBatchRequested)
        .expect("AddBatchRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.term_count(), 5);
    let frequencies: Vec<i64> = state
        .epicycles
        .chain_snapshot()
        .iter()
        .map(|node| node.frequency)
        .collect();
    assert_eq!(frequencies, vec![0, 1, -1, 2, -2]);
    assert_eq!(state.epicycles.next_frequency(), 3);
}

#[test]
fn test_frame_advanced_ticks_unless_paused() {
    let (mut controller, mut state) = setup_with_closed_path();
    controller
        .handle_intent(&mut state, AppIntent::AddTermRequested)
        .expect("AddTermRequested sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::FrameAdvanced { dt_ms: 1000.0 })
        .expect("FrameAdvanced sollte ohne Fehler durchlaufen");
    assert_relative_eq!(state.epicycles.time(), 0.1, epsilon = 1e-12);
    assert!(state.builder.path().cached_samples().is_some());

    controller
        .handle_intent(&mut state, AppIntent::TogglePauseRequested)
        .expect("TogglePauseRequested sollte ohne Fehler durchlaufen");
    assert!(state.paused);

    controller
        .handle_intent(&mut state, AppIntent::FrameAdvanced { dt_ms: 1000.0 })
        .expect("FrameAdvanced sollte ohne Fehler durchlaufen");
    assert_relative_eq!(state.epicycles.time(), 0.1, epsilon = 1e-12);
    assert_eq!(last_command(&state), &AppCommand::RefreshPathSamples);
}

#[test]
fn test_negative_frame_time_is_reported_as_error() {
    let (mut controller, mut state) = setup();

    let result = controller.handle_intent(&mut state, AppIntent::FrameAdvanced { dt_ms: -5.0 });

    assert!(result.is_err());
    assert_eq!(state.epicycles.time(), 0.0);
}

#[test]
fn test_scale_intents_update_manager_and_options() {
    let (mut controller, mut state) = setup();
    let step = state.options.scale_step;

    controller
        .handle_intent(&mut state, AppIntent::ScaleUpRequested)
        .expect("ScaleUpRequested sollte ohne Fehler durchlaufen");
    assert_relative_eq!(state.epicycles.scale(), step, epsilon = 1e-12);
    assert_relative_eq!(state.options.epicycle_scale, step, epsilon = 1e-12);

    controller
        .handle_intent(&mut state, AppIntent::ScaleDownRequested)
        .expect("ScaleDownRequested sollte ohne Fehler durchlaufen");
    assert_relative_eq!(state.epicycles.scale(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_reset_keeps_path_and_clear_removes_both() {
    let (mut controller, mut state) = setup_with_closed_path();
    controller
        .handle_intent(&mut state, AppIntent::AddTermRequested)
        .expect("AddTermRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::FrameAdvanced { dt_ms: 500.0 })
        .expect("FrameAdvanced sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::ResetRequested)
        .expect("ResetRequested sollte ohne Fehler durchlaufen");
    assert_eq!(state.term_count(), 0);
    assert_eq!(state.epicycles.time(), 0.0);
    assert_eq!(state.epicycles.next_frequency(), 0);
    assert_eq!(state.segment_count(), 2);

    controller
        .handle_intent(&mut state, AppIntent::AddTermRequested)
        .expect("AddTermRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ClearPathRequested)
        .expect("ClearPathRequested sollte ohne Fehler durchlaufen");
    assert_eq!(state.segment_count(), 0);
    assert!(state.builder.points().is_empty());
    assert_eq!(state.term_count(), 0);
    assert_eq!(last_command(&state), &AppCommand::ResetEpicycles);
}

#[test]
fn test_dragging_endpoint_moves_owned_controls_and_both_segments() {
    let (mut controller, mut state) = setup_with_closed_path();
    let delta = Vec2::new(20.0, 10.0);

    let intents = [
        AppIntent::PointDragStarted {
            screen_pos: Vec2::new(301.0, 99.0),
        },
        AppIntent::PointDragged {
            screen_pos: Vec2::new(300.0, 100.0) + delta,
        },
        AppIntent::PointDragEnded,
    ];
    for intent in intents {
        controller
            .handle_intent(&mut state, intent)
            .expect("Drag-Intents sollten ohne Fehler durchlaufen");
    }

    let moved = to_complex(Vec2::new(320.0, 110.0));
    let segments = state.builder.path().segments();
    assert_eq!(segments[0].end(), moved);
    assert_eq!(segments[1].start(), moved);
    // Beide Steuerpunkte des Endpunkts bewegen sich mit
    assert_eq!(segments[0].controls()[2], to_complex(Vec2::new(270.0, 90.0)));
    assert_eq!(segments[1].controls()[1], to_complex(Vec2::new(340.0, 210.0)));
    assert_eq!(state.builder.dragging(), None);
}

#[test]
fn test_pointer_move_highlights_nearest_point() {
    let (mut controller, mut state) = setup_with_closed_path();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                screen_pos: Some(Vec2::new(152.0, 82.0)),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
    assert_eq!(state.view.hovered_point, Some(1));

    controller
        .handle_intent(&mut state, AppIntent::PointerMoved { screen_pos: None })
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
    assert_eq!(state.view.hovered_point, None);
}

#[test]
fn test_chain_tip_traces_path_mirrored_into_right_pane() {
    let (mut controller, mut state) = setup_with_closed_path();
    state.options.batch_size = 41;

    controller
        .handle_intent(&mut state, AppIntent::AddBatchRequested)
        .expect("AddBatchRequested sollte ohne Fehler durchlaufen");
    // slowdown 10: 2500 ms → t = 0.25 (Mitte des ersten Segments)
    controller
        .handle_intent(&mut state, AppIntent::FrameAdvanced { dt_ms: 2500.0 })
        .expect("FrameAdvanced sollte ohne Fehler durchlaufen");

    let t = state.epicycles.time();
    let expected = state
        .builder
        .path()
        .evaluate(t)
        .expect("Auswertung sollte gelingen")
        + to_complex(Vec2::new(400.0, 0.0));
    let tip = state.epicycles.tail_tip().expect("Kette sollte Glieder haben");

    assert!(
        (tip - expected).norm() < 8.0,
        "Spitze {tip} weicht zu stark von {expected} ab"
    );
}
