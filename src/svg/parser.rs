//! Parser für das erste `<path d=…>`-Element einer SVG-Datei.
//!
//! Alle Befehle werden in kubische Segmente überführt: Linien und
//! Quadratische Kurven per Grad-Erhöhung, Bögen als Gerade (mit Warnung).
//! Subpfade werden durch Verbindungsgeraden zu einem geschlossenen Pfad verkettet.

use crate::core::{BezierPath, BezierSegment};
use anyhow::{bail, Context, Result};
use num_complex::Complex64;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;
use svgtypes::{PathParser, PathSegment};

/// Strecken kürzer als dies werden nicht als eigenes Segment angelegt.
const LENGTH_EPSILON: f64 = 1e-9;

/// Lädt eine SVG-Datei und liefert ihren ersten Pfad.
pub fn load_svg_file(path: &Path) -> Result<BezierPath> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("SVG-Datei konnte nicht gelesen werden: {}", path.display()))?;
    parse_svg(&content).with_context(|| format!("SVG-Import fehlgeschlagen: {}", path.display()))
}

/// Parst ein SVG-Dokument und liefert den Pfad des ersten `<path>`-Elements.
pub fn parse_svg(svg_content: &str) -> Result<BezierPath> {
    let data = extract_path_data(svg_content)?;
    parse_path_data(&data)
}

/// Liest das `d`-Attribut des ersten `<path>`-Elements.
pub fn extract_path_data(svg_content: &str) -> Result<String> {
    let mut reader = Reader::from_str(svg_content);
    reader.config_mut().trim_text(true);
    let mut buffer = Vec::new();

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if e.local_name().as_ref() == b"path" {
                    for attr in e.attributes().with_checks(false) {
                        let attr = attr?;
                        if attr.key.local_name().as_ref() == b"d" {
                            return Ok(attr.unescape_value()?.into_owned());
                        }
                    }
                    bail!("<path>-Element ohne d-Attribut");
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err).context("Fehler beim Parsen des SVG"),
            _ => {}
        }
        buffer.clear();
    }

    bail!("Kein <path>-Element im SVG gefunden")
}

/// Baut fortlaufend kubische Segmente aus Pfad-Befehlen.
#[derive(Default)]
struct SegmentBuilder {
    segments: Vec<BezierSegment>,
    current: Complex64,
    subpath_start: Complex64,
    last_cubic_ctrl: Option<Complex64>,
    last_quad_ctrl: Option<Complex64>,
    arcs_replaced: usize,
}

impl SegmentBuilder {
    fn move_to(&mut self, to: Complex64) {
        // Sprung zwischen Subpfaden wird zur Verbindungsgeraden
        if !self.segments.is_empty() {
            self.line_to(to);
        }
        self.current = to;
        self.subpath_start = to;
        self.reset_reflection();
    }

    fn line_to(&mut self, to: Complex64) {
        let from = self.current;
        if (to - from).norm() > LENGTH_EPSILON {
            let step = (to - from) / 3.0;
            self.push(from, from + step, from + step * 2.0, to);
        }
        self.current = to;
        self.reset_reflection();
    }

    fn quadratic_to(&mut self, ctrl: Complex64, to: Complex64) {
        let from = self.current;
        let c1 = from + (ctrl - from) * (2.0 / 3.0);
        let c2 = to + (ctrl - to) * (2.0 / 3.0);
        self.push(from, c1, c2, to);
        self.current = to;
        self.last_quad_ctrl = Some(ctrl);
        self.last_cubic_ctrl = None;
    }

    fn cubic_to(&mut self, ctrl1: Complex64, ctrl2: Complex64, to: Complex64) {
        let from = self.current;
        self.push(from, ctrl1, ctrl2, to);
        self.current = to;
        self.last_cubic_ctrl = Some(ctrl2);
        self.last_quad_ctrl = None;
    }

    fn close(&mut self) {
        let start = self.subpath_start;
        self.line_to(start);
    }

    /// Spiegelung des letzten Steuerpunkts am aktuellen Punkt (für S/T).
    fn reflect(&self, last: Option<Complex64>) -> Complex64 {
        match last {
            Some(ctrl) => self.current * 2.0 - ctrl,
            None => self.current,
        }
    }

    fn reset_reflection(&mut self) {
        self.last_cubic_ctrl = None;
        self.last_quad_ctrl = None;
    }

    fn push(&mut self, p0: Complex64, p1: Complex64, p2: Complex64, p3: Complex64) {
        self.segments.push(BezierSegment::new([p0, p1, p2, p3]));
    }

    fn finish(mut self) -> Result<BezierPath> {
        let Some(first) = self.segments.first().map(BezierSegment::start) else {
            bail!("SVG-Pfad enthält keine zeichenbaren Segmente");
        };
        if (self.current - first).norm() > LENGTH_EPSILON {
            log::debug!("SVG-Pfad offen, wird mit Gerade geschlossen");
            self.line_to(first);
        }
        if self.arcs_replaced > 0 {
            log::warn!(
                "{} Bogen-Segment(e) im SVG-Pfad durch Geraden ersetzt",
                self.arcs_replaced
            );
        }
        Ok(BezierPath::from_segments(self.segments))
    }
}

/// Parst SVG-Pfaddaten (`d`-Attribut) in einen geschlossenen Bézier-Pfad.
pub fn parse_path_data(data: &str) -> Result<BezierPath> {
    let mut builder = SegmentBuilder::default();

    for segment in PathParser::from(data) {
        let segment = segment.map_err(|err| anyhow::anyhow!("ungültige SVG-Pfaddaten: {err}"))?;
        let origin = builder.current;
        let point = |abs: bool, x: f64, y: f64| {
            if abs {
                Complex64::new(x, y)
            } else {
                origin + Complex64::new(x, y)
            }
        };

        match segment {
            PathSegment::MoveTo { abs, x, y } => builder.move_to(point(abs, x, y)),
            PathSegment::LineTo { abs, x, y } => builder.line_to(point(abs, x, y)),
            PathSegment::HorizontalLineTo { abs, x } => {
                let to = if abs {
                    Complex64::new(x, origin.im)
                } else {
                    origin + Complex64::new(x, 0.0)
                };
                builder.line_to(to);
            }
            PathSegment::VerticalLineTo { abs, y } => {
                let to = if abs {
                    Complex64::new(origin.re, y)
                } else {
                    origin + Complex64::new(0.0, y)
                };
                builder.line_to(to);
            }
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => builder.cubic_to(point(abs, x1, y1), point(abs, x2, y2), point(abs, x, y)),
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let ctrl1 = builder.reflect(builder.last_cubic_ctrl);
                builder.cubic_to(ctrl1, point(abs, x2, y2), point(abs, x, y));
            }
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                builder.quadratic_to(point(abs, x1, y1), point(abs, x, y))
            }
            PathSegment::SmoothQuadratic { abs, x, y } => {
                let ctrl = builder.reflect(builder.last_quad_ctrl);
                builder.quadratic_to(ctrl, point(abs, x, y));
            }
            PathSegment::EllipticalArc { abs, x, y, .. } => {
                builder.arcs_replaced += 1;
                builder.line_to(point(abs, x, y));
            }
            PathSegment::ClosePath { .. } => builder.close(),
        }
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn c(x: f64, y: f64) -> Complex64 {
        Complex64::new(x, y)
    }

    fn assert_continuous_and_closed(path: &BezierPath) {
        let segments = path.segments();
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
        let first = segments[0].start();
        let last = segments[segments.len() - 1].end();
        assert!((first - last).norm() <= LENGTH_EPSILON);
    }

    #[test]
    fn test_extract_first_path_element() {
        let svg = r#"<?xml version="1.0"?>
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10">
              <g><path id="a" d="M 0 0 L 1 1"/><path d="M 5 5"/></g>
            </svg>"#;
        assert_eq!(extract_path_data(svg).unwrap(), "M 0 0 L 1 1");
    }

    #[test]
    fn test_missing_path_is_error() {
        assert!(extract_path_data("<svg><rect/></svg>").is_err());
        assert!(extract_path_data("<svg><path/></svg>").is_err());
    }

    #[test]
    fn test_triangle_is_degree_elevated_and_closed() {
        let path = parse_path_data("M0,0 L30,0 L30,30 Z").unwrap();
        assert_eq!(path.segment_count(), 3);
        let first = &path.segments()[0];
        assert_eq!(first.controls()[1], c(10.0, 0.0));
        assert_eq!(first.controls()[2], c(20.0, 0.0));
        assert_continuous_and_closed(&path);
    }

    #[test]
    fn test_relative_and_axis_commands() {
        let path = parse_path_data("m10 10 h20 v20 H10 z").unwrap();
        let ends: Vec<Complex64> = path.segments().iter().map(BezierSegment::end).collect();
        assert_eq!(ends, vec![c(30.0, 10.0), c(30.0, 30.0), c(10.0, 30.0), c(10.0, 10.0)]);
    }

    #[test]
    fn test_smooth_cubic_reflects_previous_control() {
        let path = parse_path_data("M0 0 C0 10 10 10 10 0 S20 -10 20 0 Z").unwrap();
        let second = &path.segments()[1];
        assert_eq!(second.controls()[1], c(10.0, -10.0));
        assert_continuous_and_closed(&path);
    }

    #[test]
    fn test_quadratic_matches_original_curve() {
        let path = parse_path_data("M0 0 Q10 20 20 0 Z").unwrap();
        let quad = &path.segments()[0];
        // Quadratische Kurve bei u = 0.5: 0.25·P0 + 0.5·Q + 0.25·P1
        let mid = quad.point_at(0.5);
        assert_relative_eq!(mid.re, 10.0, epsilon = 1e-12);
        assert_relative_eq!(mid.im, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_subpaths_are_joined() {
        let path = parse_path_data("M0 0 L10 0 M20 20 L30 20").unwrap();
        assert_eq!(path.segment_count(), 4);
        assert_eq!(path.segments()[1].end(), c(20.0, 20.0));
        assert_continuous_and_closed(&path);
    }

    #[test]
    fn test_arc_is_replaced_by_line() {
        let path = parse_path_data("M0 0 A5 5 0 0 1 10 0 Z").unwrap();
        assert_eq!(path.segments()[0].end(), c(10.0, 0.0));
        assert_eq!(path.segments()[0].controls()[1], c(10.0 / 3.0, 0.0));
    }

    #[test]
    fn test_invalid_or_empty_data_is_error() {
        assert!(parse_path_data("").is_err());
        assert!(parse_path_data("M 0 0").is_err());
        assert!(parse_path_data("M 0 0 L x y").is_err());
    }
}
