//! Einpassen importierter Pfade in den Editor-Bereich.

use crate::core::{BezierPath, BezierSegment};
use num_complex::Complex64;

/// Skaliert und verschiebt `path` gleichmäßig, sodass er mittig in das
/// Rechteck `[min, max]` abzüglich `margin` passt.
///
/// Grundlage ist die Bounding Box der Kontrollpunkte. Degenerierte Pfade
/// (Ausdehnung 0) werden nur zentriert.
pub fn fit_into_rect(path: &BezierPath, min: Complex64, max: Complex64, margin: f64) -> BezierPath {
    let Some((lo, hi)) = path.control_bounds() else {
        return path.clone();
    };

    let extent = hi - lo;
    let available = Complex64::new(
        (max.re - min.re - 2.0 * margin).max(0.0),
        (max.im - min.im - 2.0 * margin).max(0.0),
    );
    let scale = [
        (extent.re > 0.0).then(|| available.re / extent.re),
        (extent.im > 0.0).then(|| available.im / extent.im),
    ]
    .into_iter()
    .flatten()
    .fold(f64::INFINITY, f64::min);
    let scale = if scale.is_finite() { scale } else { 1.0 };

    let source_center = (lo + hi) * 0.5;
    let target_center = (min + max) * 0.5;

    BezierPath::from_segments(
        path.segments()
            .iter()
            .map(|segment| {
                let controls = *segment.controls();
                BezierSegment::new(controls.map(|p| target_center + (p - source_center) * scale))
            })
            .collect(),
    )
}
