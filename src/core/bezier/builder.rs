//! Editor-Modell für das Zeichnen eines Pfads per Punkt-Platzierung und Drag.
//!
//! Platzierungsprotokoll: Endpunkt, Steuerpunkt, Steuerpunkt, Endpunkt, …
//! Jeder Endpunkt nach dem ersten schließt ein kubisches Segment aus den
//! drei vorherigen Punkten und sich selbst.
//!
//! Punkte und Segmente sind über einen expliziten bipartiten Index verknüpft:
//! jedes Segment kennt seine 4 Punkt-IDs nach Position, jeder Punkt die
//! Menge der `(Segment, Ecke)`-Paare, die ihn referenzieren.

use super::path::BezierPath;
use super::segment::BezierSegment;
use crate::core::error::{EpicycleError, Result};
use indexmap::IndexSet;
use num_complex::Complex64;

/// Index eines Punkts im Builder.
pub type PointId = usize;

/// Rolle eines Editor-Punkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRole {
    /// Segment-Endpunkt (liegt auf der Kurve)
    Endpoint,
    /// Steuerpunkt, der mit seinem Endpunkt mitwandert
    ControlPoint {
        /// Zugehöriger Endpunkt (`None`, solange der Endpunkt noch nicht platziert ist)
        owner: Option<PointId>,
    },
}

/// Ein platzierter Punkt mit seinen Segment-Referenzen.
#[derive(Debug, Clone)]
pub struct EditorPoint {
    /// Aktuelle Position
    pub position: Complex64,
    /// Endpunkt oder Steuerpunkt
    pub role: PointRole,
    refs: IndexSet<(usize, usize)>,
}

impl EditorPoint {
    fn new(position: Complex64, role: PointRole) -> Self {
        Self {
            position,
            role,
            refs: IndexSet::new(),
        }
    }

    /// Alle `(Segment-Index, Ecke)`-Paare, die diesen Punkt verwenden.
    pub fn references(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.refs.iter().copied()
    }

    /// Gibt `true` zurück, wenn der Punkt ein Endpunkt ist.
    pub fn is_endpoint(&self) -> bool {
        self.role == PointRole::Endpoint
    }
}

/// Baut einen geschlossenen Bézier-Pfad aus Benutzer-Eingaben auf.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    points: Vec<EditorPoint>,
    /// Punkt-IDs je Segment, nach Ecke geordnet
    segment_points: Vec<[PointId; 4]>,
    path: BezierPath,
    placed: usize,
    closed: bool,
    dragging: Option<PointId>,
}

impl PathBuilder {
    /// Erstellt einen leeren Builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rekonstruiert Punkte und Index aus einem fertigen Pfad (z.B. SVG-Import).
    ///
    /// Aufeinanderfolgende Segmente teilen sich ihren Endpunkt. Liegt das Ende
    /// des letzten Segments innerhalb `merge_eps` am Anfang, gilt der Pfad als
    /// geschlossen und der erste Endpunkt wird wiederverwendet.
    pub fn from_path(path: BezierPath, merge_eps: f64) -> Self {
        let mut builder = Self::new();
        let count = path.segment_count();
        for (index, segment) in path.segments().iter().enumerate() {
            let [p0, p1, p2, p3] = *segment.controls();
            let start = match builder.segment_points.last() {
                Some(previous) => previous[3],
                None => builder.push_point(p0, PointRole::Endpoint),
            };
            let c1 = builder.push_point(p1, PointRole::ControlPoint { owner: Some(start) });
            let c2 = builder.push_point(p2, PointRole::ControlPoint { owner: None });
            let closes = index + 1 == count && (p3 - builder.points[0].position).norm() <= merge_eps;
            let end = if closes {
                builder.closed = true;
                0
            } else {
                builder.push_point(p3, PointRole::Endpoint)
            };
            builder.points[c2].role = PointRole::ControlPoint { owner: Some(end) };
            builder.link_segment([start, c1, c2, end]);
        }
        builder.path = path;
        builder.placed = if count == 0 { 0 } else { 3 * count + 1 };
        builder
    }

    /// Aktueller Pfad (für Fourier-Analyse und Sampling).
    pub fn path(&self) -> &BezierPath {
        &self.path
    }

    /// Mutabler Pfad (Sample-Cache auffrischen).
    pub fn path_mut(&mut self) -> &mut BezierPath {
        &mut self.path
    }

    /// Alle platzierten Punkte.
    pub fn points(&self) -> &[EditorPoint] {
        &self.points
    }

    /// Punkt-IDs je Segment.
    pub fn segment_points(&self) -> &[[PointId; 4]] {
        &self.segment_points
    }

    /// Gibt `true` zurück, wenn der Pfad geschlossen wurde.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Aktuell gezogener Punkt.
    pub fn dragging(&self) -> Option<PointId> {
        self.dragging
    }

    /// Linien von Steuerpunkten zu ihrem Endpunkt (zum Zeichnen der Handles).
    pub fn handles(&self) -> impl Iterator<Item = (Complex64, Complex64)> + '_ {
        self.points.iter().filter_map(|p| match p.role {
            PointRole::ControlPoint { owner: Some(owner) } => {
                Some((p.position, self.points[owner].position))
            }
            _ => None,
        })
    }

    /// Platziert den nächsten Punkt gemäß Protokoll.
    ///
    /// Ein Endpunkt innerhalb `snap_radius` um den ersten Endpunkt schließt
    /// den Pfad. Nach dem Schließen werden weitere Klicks ignoriert (`None`).
    pub fn place_point(&mut self, position: Complex64, snap_radius: f64) -> Option<PointId> {
        if self.closed {
            return None;
        }

        let id = match self.placed % 3 {
            0 if self.points.is_empty() => self.push_point(position, PointRole::Endpoint),
            0 => {
                let closes = self.placed >= 3
                    && (self.points[0].position - position).norm() <= snap_radius;
                let end = if closes {
                    self.closed = true;
                    0
                } else {
                    self.push_point(position, PointRole::Endpoint)
                };
                // Die letzten drei platzierten Punkte bilden mit `end` das Segment
                let n = if closes {
                    self.points.len()
                } else {
                    self.points.len() - 1
                };
                let corners = [n - 3, n - 2, n - 1, end];
                self.points[n - 1].role = PointRole::ControlPoint { owner: Some(end) };
                let controls = corners.map(|id| self.points[id].position);
                self.path.push_segment(BezierSegment::new(controls));
                self.link_segment(corners);
                log::debug!(
                    "Segment {} angelegt{}",
                    self.segment_points.len() - 1,
                    if closes { " (Pfad geschlossen)" } else { "" }
                );
                end
            }
            1 => {
                let owner = self.points.len() - 1;
                self.push_point(position, PointRole::ControlPoint { owner: Some(owner) })
            }
            _ => self.push_point(position, PointRole::ControlPoint { owner: None }),
        };
        self.placed += 1;
        Some(id)
    }

    /// Nächster Punkt innerhalb `radius` um `position`.
    pub fn pick(&self, position: Complex64, radius: f64) -> Option<PointId> {
        self.points
            .iter()
            .enumerate()
            .map(|(id, p)| (id, (p.position - position).norm()))
            .filter(|(_, dist)| *dist <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    /// Beginnt einen Drag auf dem nächsten Punkt innerhalb `radius`.
    pub fn begin_drag(&mut self, position: Complex64, radius: f64) -> Option<PointId> {
        self.dragging = self.pick(position, radius);
        self.dragging
    }

    /// Zieht den gegriffenen Punkt nach `position`.
    ///
    /// Ein Endpunkt nimmt seine Steuerpunkte mit demselben Delta mit.
    /// Ohne aktiven Drag passiert nichts.
    pub fn drag_to(&mut self, position: Complex64) -> Result<()> {
        let Some(id) = self.dragging else {
            return Ok(());
        };
        let delta = position - self.points[id].position;
        self.move_point(id, position)?;

        if self.points[id].is_endpoint() {
            let children: Vec<PointId> = self
                .points
                .iter()
                .enumerate()
                .filter(|(_, p)| p.role == PointRole::ControlPoint { owner: Some(id) })
                .map(|(child, _)| child)
                .collect();
            for child in children {
                let target = self.points[child].position + delta;
                self.move_point(child, target)?;
            }
        }
        Ok(())
    }

    /// Beendet den Drag und gibt den losgelassenen Punkt zurück.
    pub fn end_drag(&mut self) -> Option<PointId> {
        self.dragging.take()
    }

    /// Setzt einen Punkt und propagiert die Position in alle referenzierenden Segmente.
    pub fn move_point(&mut self, id: PointId, position: Complex64) -> Result<()> {
        let len = self.points.len();
        let point = self
            .points
            .get_mut(id)
            .ok_or(EpicycleError::IndexOutOfRange {
                what: "Punkt",
                index: id,
                len,
            })?;
        point.position = position;
        let refs: Vec<(usize, usize)> = point.references().collect();
        for (segment, corner) in refs {
            self.path.update_control_point(segment, corner, position)?;
        }
        Ok(())
    }

    /// Entfernt alle Punkte und Segmente.
    pub fn clear(&mut self) {
        self.points.clear();
        self.segment_points.clear();
        self.path.clear();
        self.placed = 0;
        self.closed = false;
        self.dragging = None;
    }

    fn push_point(&mut self, position: Complex64, role: PointRole) -> PointId {
        self.points.push(EditorPoint::new(position, role));
        self.points.len() - 1
    }

    fn link_segment(&mut self, corners: [PointId; 4]) {
        let segment = self.segment_points.len();
        for (corner, id) in corners.iter().enumerate() {
            self.points[*id].refs.insert((segment, corner));
        }
        self.segment_points.push(corners);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn c(x: f64, y: f64) -> Complex64 {
        Complex64::new(x, y)
    }

    /// Zwei Segmente: E0 C1 C2 E3 C4 C5 E6
    fn two_segment_builder() -> PathBuilder {
        let mut builder = PathBuilder::new();
        for (i, p) in [
            c(0.0, 0.0),
            c(10.0, -20.0),
            c(40.0, -20.0),
            c(50.0, 0.0),
            c(60.0, 20.0),
            c(90.0, 20.0),
            c(100.0, 0.0),
        ]
        .into_iter()
        .enumerate()
        {
            assert_eq!(builder.place_point(p, 5.0), Some(i));
        }
        builder
    }

    #[test]
    fn test_placement_protocol_assigns_roles() {
        let builder = two_segment_builder();
        let roles: Vec<PointRole> = builder.points().iter().map(|p| p.role).collect();
        assert_eq!(
            roles,
            vec![
                PointRole::Endpoint,
                PointRole::ControlPoint { owner: Some(0) },
                PointRole::ControlPoint { owner: Some(3) },
                PointRole::Endpoint,
                PointRole::ControlPoint { owner: Some(3) },
                PointRole::ControlPoint { owner: Some(6) },
                PointRole::Endpoint,
            ]
        );
        assert_eq!(builder.path().segment_count(), 2);
        assert_eq!(builder.segment_points(), &[[0, 1, 2, 3], [3, 4, 5, 6]]);
    }

    #[test]
    fn test_shared_endpoint_references_both_segments() {
        let builder = two_segment_builder();
        let refs: Vec<(usize, usize)> = builder.points()[3].references().collect();
        assert_eq!(refs, vec![(0, 3), (1, 0)]);
        assert_eq!(builder.path().segments()[0].end(), builder.path().segments()[1].start());
    }

    #[test]
    fn test_dragging_endpoint_moves_owned_control_points_and_both_segments() {
        let mut builder = two_segment_builder();
        assert_eq!(builder.begin_drag(c(51.0, 1.0), 5.0), Some(3));
        builder.drag_to(c(50.0, 30.0)).unwrap();
        assert_eq!(builder.end_drag(), Some(3));

        let points = builder.points();
        assert_eq!(points[3].position, c(50.0, 30.0));
        assert_eq!(points[2].position, c(40.0, 10.0));
        assert_eq!(points[4].position, c(60.0, 50.0));
        // Fremde Steuerpunkte bleiben stehen
        assert_eq!(points[1].position, c(10.0, -20.0));

        let segments = builder.path().segments();
        assert_eq!(segments[0].controls()[2], c(40.0, 10.0));
        assert_eq!(segments[0].end(), c(50.0, 30.0));
        assert_eq!(segments[1].start(), c(50.0, 30.0));
        assert_eq!(segments[1].controls()[1], c(60.0, 50.0));
    }

    #[test]
    fn test_dragging_control_point_moves_only_itself() {
        let mut builder = two_segment_builder();
        builder.begin_drag(c(10.0, -20.0), 2.0);
        builder.drag_to(c(15.0, -25.0)).unwrap();
        builder.end_drag();
        assert_eq!(builder.points()[0].position, c(0.0, 0.0));
        assert_eq!(builder.path().segments()[0].controls()[1], c(15.0, -25.0));
    }

    #[test]
    fn test_drag_without_hit_is_noop() {
        let mut builder = two_segment_builder();
        let version = builder.path().version();
        assert_eq!(builder.begin_drag(c(500.0, 500.0), 5.0), None);
        builder.drag_to(c(0.0, 0.0)).unwrap();
        assert_eq!(builder.path().version(), version);
    }

    #[test]
    fn test_placing_endpoint_near_start_closes_path() {
        let mut builder = two_segment_builder();
        builder.place_point(c(100.0, 50.0), 5.0);
        builder.place_point(c(0.0, 50.0), 5.0);
        assert_eq!(builder.place_point(c(2.0, 1.0), 5.0), Some(0));
        assert!(builder.is_closed());
        assert_eq!(builder.path().segment_count(), 3);
        assert_eq!(builder.path().segments()[2].end(), c(0.0, 0.0));

        // Weitere Klicks werden ignoriert
        assert_eq!(builder.place_point(c(30.0, 30.0), 5.0), None);
        assert_eq!(builder.points().len(), 9);

        // Der gemeinsame Startpunkt bewegt Anfang und Ende des Pfads
        builder.move_point(0, c(-5.0, 0.0)).unwrap();
        let path = builder.path();
        assert_relative_eq!(path.evaluate(0.0).unwrap().re, -5.0);
        assert_relative_eq!(path.evaluate(1.0).unwrap().re, -5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_move_point_out_of_range() {
        let mut builder = PathBuilder::new();
        assert!(matches!(
            builder.move_point(0, c(0.0, 0.0)),
            Err(EpicycleError::IndexOutOfRange { what: "Punkt", .. })
        ));
    }

    #[test]
    fn test_from_path_merges_shared_and_closing_endpoints() {
        let path = BezierPath::from_segments(vec![
            BezierSegment::new([c(-3.0, 0.0), c(-3.0, 3.0), c(3.0, -3.0), c(3.0, 0.0)]),
            BezierSegment::new([c(3.0, 0.0), c(3.0, 3.0), c(-3.0, -3.0), c(-3.0, 0.0)]),
        ]);
        let builder = PathBuilder::from_path(path, 1e-9);
        assert!(builder.is_closed());
        assert_eq!(builder.points().len(), 6);
        assert_eq!(builder.segment_points(), &[[0, 1, 2, 3], [3, 4, 5, 0]]);
        assert_eq!(
            builder.points()[5].role,
            PointRole::ControlPoint { owner: Some(0) }
        );
    }

    #[test]
    fn test_clear_resets_protocol() {
        let mut builder = two_segment_builder();
        builder.clear();
        assert!(builder.points().is_empty());
        assert!(builder.path().is_empty());
        assert_eq!(builder.place_point(c(1.0, 1.0), 5.0), Some(0));
        assert_eq!(builder.points()[0].role, PointRole::Endpoint);
    }
}
