//! Kubisches Bézier-Segment in Monom-Darstellung.
//!
//! Punkt bei `u`: `[Kontrollpunkte] · [Bernstein-Basis] · (1, u, u², u³)ᵀ`.
//! Die Koeffizienten werden bei jeder Änderung eines Kontrollpunkts sofort
//! neu berechnet, sodass Auswertung und Sampling nie veraltete Werte sehen.

use crate::core::error::{ensure_positive, EpicycleError, Result};
use glam::{DMat4, DVec4};
use num_complex::Complex64;

/// Transponierte Bernstein-Basis: Spalte `i` = Zeile `i` der Basis
/// `((1,-3,3,-1), (0,3,-6,3), (0,0,3,-3), (0,0,0,1))`.
fn bernstein_basis_t() -> DMat4 {
    DMat4::from_cols_array_2d(&[
        [1.0, -3.0, 3.0, -1.0],
        [0.0, 3.0, -6.0, 3.0],
        [0.0, 0.0, 3.0, -3.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Kubisches Segment aus 4 Kontrollpunkten `(P0, P1, P2, P3)`.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierSegment {
    controls: [Complex64; 4],
    /// Monom-Koeffizienten der x-Koordinate (1, u, u², u³)
    coeff_x: DVec4,
    /// Monom-Koeffizienten der y-Koordinate (1, u, u², u³)
    coeff_y: DVec4,
    /// Zeit-Reskalierung: effektives `u = u / max_t`
    max_t: f64,
}

impl BezierSegment {
    /// Erstellt ein Segment und berechnet die Koeffizientenmatrix.
    pub fn new(controls: [Complex64; 4]) -> Self {
        let mut segment = Self {
            controls,
            coeff_x: DVec4::ZERO,
            coeff_y: DVec4::ZERO,
            max_t: 1.0,
        };
        segment.recompute();
        segment
    }

    /// Setzt den Zeit-Reskalierungsfaktor (muss endlich und > 0 sein).
    pub fn with_max_t(mut self, max_t: f64) -> Result<Self> {
        self.max_t = ensure_positive("max_t", max_t)?;
        Ok(self)
    }

    /// Kontrollpunkte in Reihenfolge.
    pub fn controls(&self) -> &[Complex64; 4] {
        &self.controls
    }

    /// Zeit-Reskalierungsfaktor.
    pub fn max_t(&self) -> f64 {
        self.max_t
    }

    /// Startpunkt `P0`.
    pub fn start(&self) -> Complex64 {
        self.controls[0]
    }

    /// Endpunkt `P3`.
    pub fn end(&self) -> Complex64 {
        self.controls[3]
    }

    /// Ersetzt einen Kontrollpunkt und berechnet die Koeffizienten neu.
    pub fn set_control(&mut self, corner: usize, point: Complex64) -> Result<()> {
        let len = self.controls.len();
        let slot = self
            .controls
            .get_mut(corner)
            .ok_or(EpicycleError::IndexOutOfRange {
                what: "Eckpunkt",
                index: corner,
                len,
            })?;
        *slot = point;
        self.recompute();
        Ok(())
    }

    /// Wertet das Segment am lokalen Parameter `u` aus (ohne Bereichsprüfung).
    ///
    /// Intern gilt `u_eff = u / max_t`.
    pub fn point_at(&self, u: f64) -> Complex64 {
        let u = u / self.max_t;
        let mono = DVec4::new(1.0, u, u * u, u * u * u);
        Complex64::new(self.coeff_x.dot(mono), self.coeff_y.dot(mono))
    }

    /// Gleichmäßig verteilte Punkte über das Segment (inklusive Endpunkt).
    pub fn sample(&self, n: usize) -> Vec<Complex64> {
        match n {
            0 => Vec::new(),
            1 => vec![self.point_at(0.0)],
            _ => (0..n)
                .map(|i| self.point_at(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }

    fn recompute(&mut self) {
        let basis = bernstein_basis_t();
        let px = DVec4::new(
            self.controls[0].re,
            self.controls[1].re,
            self.controls[2].re,
            self.controls[3].re,
        );
        let py = DVec4::new(
            self.controls[0].im,
            self.controls[1].im,
            self.controls[2].im,
            self.controls[3].im,
        );
        self.coeff_x = basis * px;
        self.coeff_y = basis * py;
    }
}
