//! Builder für Render-Szenen aus dem AppState.

use crate::app::state::to_screen;
use crate::app::AppState;
use crate::shared::{RenderScene, SceneEpicycle, ScenePoint};
use glam::Vec2;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Der Pfad wird aus dem Sample-Cache gelesen; ist dieser veraltet,
/// bleibt die Polylinie bis zum nächsten Refresh leer.
pub fn build(state: &AppState) -> RenderScene {
    let builder = &state.builder;

    let path_polyline: Vec<Vec2> = builder
        .path()
        .cached_samples()
        .map(|samples| samples.iter().copied().map(to_screen).collect())
        .unwrap_or_default();

    let points: Vec<ScenePoint> = builder
        .points()
        .iter()
        .enumerate()
        .map(|(id, point)| ScenePoint {
            position: to_screen(point.position),
            is_endpoint: point.is_endpoint(),
            hovered: state.view.hovered_point == Some(id),
            dragged: builder.dragging() == Some(id),
        })
        .collect();

    let handles: Vec<[Vec2; 2]> = builder
        .handles()
        .map(|(control, endpoint)| [to_screen(control), to_screen(endpoint)])
        .collect();

    let epicycles: Vec<SceneEpicycle> = state
        .epicycles
        .chain_snapshot()
        .into_iter()
        .map(|node| SceneEpicycle {
            center: to_screen(node.origin),
            tip: to_screen(node.tip),
            radius: node.radius as f32,
            color: node.color,
        })
        .collect();

    RenderScene {
        viewport_size: state.view.viewport_size,
        divider_x: state.view.divider_x(),
        path_polyline,
        path_closed: builder.is_closed(),
        points,
        handles,
        epicycles,
        trail: state.epicycles.trail().map(to_screen).collect(),
        term_count: state.term_count(),
        next_frequency: state.epicycles.next_frequency(),
        time: state.epicycles.time(),
        paused: state.paused,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::state::to_complex;
    use crate::app::AppState;
    use glam::Vec2;

    fn state_with_segment() -> AppState {
        let mut state = AppState::new();
        for (x, y) in [(10.0, 10.0), (20.0, 10.0), (30.0, 20.0), (40.0, 40.0)] {
            state.builder.place_point(to_complex(Vec2::new(x, y)), 5.0);
        }
        state
    }

    #[test]
    fn build_empty_state_has_no_geometry() {
        let mut state = AppState::new();
        state.view.viewport_size = [800.0, 400.0];
        let scene = build(&state);
        assert_eq!(scene.divider_x, 400.0);
        assert!(!scene.has_path());
        assert!(!scene.has_epicycles());
        assert!(scene.points.is_empty());
    }

    #[test]
    fn build_reads_fresh_samples_only() {
        let mut state = state_with_segment();
        assert!(build(&state).path_polyline.is_empty());

        state.builder.path_mut().sample(16).expect("Sampling sollte gelingen");
        let scene = build(&state);
        assert_eq!(scene.path_polyline.len(), 16);
        assert_eq!(scene.path_polyline[0], Vec2::new(10.0, 10.0));
        assert_eq!(scene.path_polyline[15], Vec2::new(40.0, 40.0));
    }

    #[test]
    fn build_marks_hovered_and_dragged_points() {
        let mut state = state_with_segment();
        state.view.hovered_point = Some(1);
        state.builder.begin_drag(to_complex(Vec2::new(40.0, 40.0)), 5.0);

        let scene = build(&state);
        assert_eq!(scene.points.len(), 4);
        assert!(scene.points[0].is_endpoint);
        assert!(!scene.points[1].is_endpoint);
        assert!(scene.points[1].hovered);
        assert!(scene.points[3].dragged);
        assert_eq!(scene.handles.len(), 2);
    }

    #[test]
    fn build_exposes_chain_in_screen_space() {
        let mut state = state_with_segment();
        state
            .epicycles
            .add_cycles(state.builder.path(), 3)
            .expect("Terme sollten berechnet werden");
        let scene = build(&state);
        assert_eq!(scene.term_count, 3);
        assert_eq!(scene.epicycles.len(), 3);
        for pair in scene.epicycles.windows(2) {
            assert_eq!(pair[0].tip, pair[1].center);
        }
    }
}
