//! Stückweiser Pfad aus kubischen Segmenten mit versioniertem Sample-Cache.

use super::segment::BezierSegment;
use crate::core::error::{EpicycleError, Result};
use crate::core::path::{check_parameter, ParametricPath};
use num_complex::Complex64;

/// Zwischengespeicherte Samples mit der Pfad-Version ihrer Berechnung.
#[derive(Debug, Clone)]
struct SampleCache {
    version: u64,
    count: usize,
    points: Vec<Complex64>,
}

/// Geordnete Folge von Segmenten; Segment `i` endet, wo Segment `i+1` beginnt.
///
/// Die Topologie wird beim Aufbau hergestellt und bei der Auswertung nicht
/// erneut geprüft. Jede Mutation erhöht `version`; Samples mit älterer Version
/// werden beim nächsten Zugriff automatisch neu berechnet.
#[derive(Debug, Clone, Default)]
pub struct BezierPath {
    segments: Vec<BezierSegment>,
    version: u64,
    cache: Option<SampleCache>,
}

impl BezierPath {
    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Pfad aus vorhandenen Segmenten.
    pub fn from_segments(segments: Vec<BezierSegment>) -> Self {
        Self {
            segments,
            version: 0,
            cache: None,
        }
    }

    /// Anzahl der Segmente.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Gibt `true` zurück, wenn der Pfad keine Segmente hat.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Read-only Sicht auf alle Segmente.
    pub fn segments(&self) -> &[BezierSegment] {
        &self.segments
    }

    /// Monoton wachsender Änderungszähler.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Hängt ein Segment an.
    pub fn push_segment(&mut self, segment: BezierSegment) {
        self.segments.push(segment);
        self.version += 1;
    }

    /// Entfernt alle Segmente.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.version += 1;
    }

    /// Verschiebt einen Kontrollpunkt eines Segments (Hook für den Pfad-Editor).
    pub fn update_control_point(
        &mut self,
        segment_index: usize,
        corner_index: usize,
        point: Complex64,
    ) -> Result<()> {
        let len = self.segments.len();
        let segment = self
            .segments
            .get_mut(segment_index)
            .ok_or(EpicycleError::IndexOutOfRange {
                what: "Segment",
                index: segment_index,
                len,
            })?;
        segment.set_control(corner_index, point)?;
        self.version += 1;
        Ok(())
    }

    /// Wertet den Pfad bei `t ∈ [0, 1]` aus.
    ///
    /// Das Einheitsintervall wird gleichmäßig auf die Segmente verteilt;
    /// `t = 1` fällt auf `u = 1` des letzten Segments.
    pub fn evaluate(&self, t: f64) -> Result<Complex64> {
        let t = check_parameter(t)?;
        let n = self.segments.len();
        if n == 0 {
            return Err(EpicycleError::invalid("Pfad enthält keine Segmente"));
        }
        let scaled = t * n as f64;
        let index = (scaled.floor() as usize).min(n - 1);
        let u = scaled - index as f64;
        Ok(self.segments[index].point_at(u))
    }

    /// `n` gleichmäßig verteilte Punkte über den ganzen Pfad (`t_i = i / (n - 1)`).
    ///
    /// Ergebnisse werden pro (Version, n) gecacht.
    pub fn sample(&mut self, n: usize) -> Result<&[Complex64]> {
        if n < 2 {
            return Err(EpicycleError::invalid(format!(
                "mindestens 2 Samples erforderlich (erhalten: {n})"
            )));
        }
        let fresh = self
            .cache
            .as_ref()
            .is_some_and(|c| c.version == self.version && c.count == n);
        if !fresh {
            let points = (0..n)
                .map(|i| self.evaluate(i as f64 / (n - 1) as f64))
                .collect::<Result<Vec<_>>>()?;
            log::trace!("Pfad-Samples neu berechnet (Version {}, n = {n})", self.version);
            self.cache = Some(SampleCache {
                version: self.version,
                count: n,
                points,
            });
        }
        Ok(self
            .cache
            .as_ref()
            .map(|c| c.points.as_slice())
            .unwrap_or_default())
    }

    /// Zuletzt berechnete Samples, sofern sie zur aktuellen Version passen.
    pub fn cached_samples(&self) -> Option<&[Complex64]> {
        self.cache
            .as_ref()
            .filter(|c| c.version == self.version)
            .map(|c| c.points.as_slice())
    }

    /// Samples eines einzelnen Segments (zum Zeichnen).
    pub fn sample_segment(&self, index: usize, n: usize) -> Result<Vec<Complex64>> {
        let len = self.segments.len();
        self.segments
            .get(index)
            .map(|s| s.sample(n))
            .ok_or(EpicycleError::IndexOutOfRange {
                what: "Segment",
                index,
                len,
            })
    }

    /// Bounding Box als (min, max); `None` bei leerem Pfad.
    ///
    /// Basiert auf den Kontrollpunkten (konvexe Hülle umschließt die Kurve).
    pub fn control_bounds(&self) -> Option<(Complex64, Complex64)> {
        let mut points = self.segments.iter().flat_map(|s| s.controls().iter());
        let first = *points.next()?;
        Some(points.fold((first, first), |(min, max), p| {
            (
                Complex64::new(min.re.min(p.re), min.im.min(p.im)),
                Complex64::new(max.re.max(p.re), max.im.max(p.im)),
            )
        }))
    }
}

impl ParametricPath for BezierPath {
    fn at(&self, t: f64) -> Result<Complex64> {
        self.evaluate(t)
    }
}
