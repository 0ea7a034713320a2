//! Vertrag für parametrische Pfade `P: [0, 1] → ℂ`.
//!
//! Realteil = x, Imaginärteil = y (Bildschirmkoordinaten, y wächst nach unten).

use super::error::{EpicycleError, Result};
use num_complex::Complex64;

/// Periodischer Pfad mit Periode 1, auswertbar für `t ∈ [0, 1]`.
pub trait ParametricPath {
    /// Punkt des Pfads bei Parameter `t`.
    fn at(&self, t: f64) -> Result<Complex64>;
}

impl<P: ParametricPath + ?Sized> ParametricPath for &P {
    fn at(&self, t: f64) -> Result<Complex64> {
        (**self).at(t)
    }
}

/// Adapter für Closures als Pfadquelle (Tests, analytische Kurven).
#[derive(Debug, Clone, Copy)]
pub struct FnPath<F>(pub F);

impl<F> ParametricPath for FnPath<F>
where
    F: Fn(f64) -> Complex64,
{
    fn at(&self, t: f64) -> Result<Complex64> {
        check_parameter(t)?;
        Ok((self.0)(t))
    }
}

/// Sicht auf einen Pfad in Bildschirm-Orientierung: `q(t) = conj(P(t) - origin)`.
///
/// Die Epizykel drehen mit negiertem Winkel (y-Achse nach unten); über die
/// Konjugation landet die Kettenspitze wieder auf `P(t) - origin`.
#[derive(Debug, Clone, Copy)]
pub struct ScreenOriented<P> {
    inner: P,
    origin: Complex64,
}

impl<P> ScreenOriented<P> {
    /// Erstellt die Sicht mit `origin` als Ursprung (Mitte des Editor-Bereichs).
    pub fn new(inner: P, origin: Complex64) -> Self {
        Self { inner, origin }
    }
}

impl<P: ParametricPath> ParametricPath for ScreenOriented<P> {
    fn at(&self, t: f64) -> Result<Complex64> {
        Ok((self.inner.at(t)? - self.origin).conj())
    }
}

/// Prüft `t ∈ [0, 1]` (inklusive Randwert `t = 1`).
pub(crate) fn check_parameter(t: f64) -> Result<f64> {
    if t.is_finite() && (0.0..=1.0).contains(&t) {
        Ok(t)
    } else {
        Err(EpicycleError::invalid(format!(
            "Pfad-Parameter t = {t} liegt nicht in [0, 1]"
        )))
    }
}
