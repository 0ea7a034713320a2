//! Inkrementeller Fourier-Koeffizienten-Generator.
//!
//! Jeder Aufruf von [`FourierSeries::next`] integriert frisch über den
//! übergebenen Pfad, damit zwischenzeitliche Editor-Änderungen sofort in den
//! nächsten Term eingehen. Reihenfolge der Frequenzen: `0, 1, -1, 2, -2, …`.

use super::error::{ensure_positive, EpicycleError, Result};
use super::integrate::try_integrate;
use super::path::ParametricPath;
use num_complex::Complex64;
use std::f64::consts::TAU;

/// Standard-Schrittweite der Trapezregel.
pub const DEFAULT_INTEGRATION_STEP: f64 = 0.001;

/// Ein Term der Reihe: Frequenz `k` und komplexe Amplitude `c_k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourierCoefficient {
    /// Frequenz in Umläufen pro Periode
    pub frequency: i64,
    /// Komplexer Koeffizient
    pub value: Complex64,
}

impl FourierCoefficient {
    /// Betrag `|c_k|` (Radius des Epizykels).
    pub fn magnitude(&self) -> f64 {
        self.value.norm()
    }

    /// Phase `atan2(Im, Re)`.
    pub fn phase(&self) -> f64 {
        self.value.arg()
    }

    /// Beitrag `c_k · e^{i2πkt}` zum Zeitpunkt `t`.
    pub fn term_at(&self, t: f64) -> Complex64 {
        self.value * Complex64::from_polar(1.0, TAU * self.frequency as f64 * t)
    }
}

/// Berechnet `c_k = 1/(t1-t0) · ∫ P(t)·e^{-i2πkt} dt` über `[t0, t1]`.
pub fn coefficient<P>(path: &P, frequency: i64, t0: f64, t1: f64, step: f64) -> Result<Complex64>
where
    P: ParametricPath + ?Sized,
{
    let omega = -TAU * frequency as f64;
    let integral = try_integrate(
        |t| Ok::<_, EpicycleError>(path.at(t)? * Complex64::from_polar(1.0, omega * t)),
        t0,
        t1,
        step,
    )?;
    Ok(integral / (t1 - t0))
}

/// Rekonstruiert `Σ c_k e^{i2πkt}` aus einer Folge von Termen.
pub fn partial_sum<'a, I>(coefficients: I, t: f64) -> Complex64
where
    I: IntoIterator<Item = &'a FourierCoefficient>,
{
    coefficients
        .into_iter()
        .map(|c| c.term_at(t))
        .fold(Complex64::new(0.0, 0.0), |acc, term| acc + term)
}

/// Zick-Zack-Fortschaltung: `k ≤ 0 → |k| + 1`, sonst `-k`.
fn advance(k: i64) -> i64 {
    if k <= 0 {
        k.abs() + 1
    } else {
        -k
    }
}

/// Pull-basierter Generator mit Frequenz-Cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct FourierSeries {
    t0: f64,
    t1: f64,
    step: f64,
    skip_dc: bool,
    next_k: i64,
    started: bool,
}

impl Default for FourierSeries {
    fn default() -> Self {
        Self::new()
    }
}

impl FourierSeries {
    /// Volle Periode `[0, 1]`, Schrittweite [`DEFAULT_INTEGRATION_STEP`], mit DC-Term.
    pub fn new() -> Self {
        Self {
            t0: 0.0,
            t1: 1.0,
            step: DEFAULT_INTEGRATION_STEP,
            skip_dc: false,
            next_k: 0,
            started: false,
        }
    }

    /// Setzt die Integrationsgrenzen (`t0 < t1`, beide endlich).
    pub fn with_bounds(mut self, t0: f64, t1: f64) -> Result<Self> {
        if !t0.is_finite() || !t1.is_finite() || t1 <= t0 {
            return Err(EpicycleError::invalid(format!(
                "ungültiges Integrationsintervall [{t0}, {t1})"
            )));
        }
        self.t0 = t0;
        self.t1 = t1;
        Ok(self)
    }

    /// Setzt die Integrations-Schrittweite (endlich, > 0).
    pub fn with_step(mut self, step: f64) -> Result<Self> {
        self.step = ensure_positive("Integrations-Schrittweite", step)?;
        Ok(self)
    }

    /// Überspringt beim ersten Aufruf den DC-Term (`k = 0`).
    pub fn with_skip_dc(mut self, skip_dc: bool) -> Self {
        self.skip_dc = skip_dc;
        self
    }

    /// Integrationsgrenzen `(t0, t1)`.
    pub fn bounds(&self) -> (f64, f64) {
        (self.t0, self.t1)
    }

    /// Integrations-Schrittweite.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Gibt `true` zurück, wenn der DC-Term übersprungen wird.
    pub fn skips_dc(&self) -> bool {
        self.skip_dc
    }

    /// Frequenz, die der nächste Aufruf von [`Self::next`] berechnet.
    pub fn next_frequency(&self) -> i64 {
        if !self.started && self.skip_dc && self.next_k == 0 {
            1
        } else {
            self.next_k
        }
    }

    /// Berechnet den nächsten Koeffizienten und schaltet den Cursor weiter.
    ///
    /// Schlägt die Integration fehl, bleibt der Cursor stehen.
    pub fn next<P>(&mut self, path: &P) -> Result<FourierCoefficient>
    where
        P: ParametricPath + ?Sized,
    {
        let k = self.next_frequency();
        let value = coefficient(path, k, self.t0, self.t1, self.step)?;
        self.started = true;
        self.next_k = advance(k);
        Ok(FourierCoefficient { frequency: k, value })
    }

    /// Setzt den Cursor auf den Anfangszustand zurück.
    pub fn reset(&mut self) {
        self.next_k = 0;
        self.started = false;
    }

    /// Unendlicher, lazy Iterator über die weiteren Koeffizienten.
    pub fn coefficients<'a, P>(&'a mut self, path: &'a P) -> Coefficients<'a, P>
    where
        P: ParametricPath + ?Sized,
    {
        Coefficients { series: self, path }
    }
}

/// Iterator-Adapter über [`FourierSeries::next`].
pub struct Coefficients<'a, P: ?Sized> {
    series: &'a mut FourierSeries,
    path: &'a P,
}

impl<P> Iterator for Coefficients<'_, P>
where
    P: ParametricPath + ?Sized,
{
    type Item = Result<FourierCoefficient>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.series.next(self.path))
    }
}
