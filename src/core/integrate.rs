//! Trapezregel mit fester Schrittweite für komplexwertige Funktionen.

use super::error::{EpicycleError, Result};
use num_complex::Complex64;

/// Integriert `f` über `[a, b]` mit der Trapezregel.
///
/// Die Schrittanzahl ist `n = max(1, round(|b - a| / step))`, die tatsächliche
/// Schrittweite `h = (b - a) / n` teilt das Intervall exakt.
/// `a == b` liefert `0`, `a > b` das negierte Integral.
pub fn integrate<F>(mut f: F, a: f64, b: f64, step: f64) -> Result<Complex64>
where
    F: FnMut(f64) -> Complex64,
{
    try_integrate(|t| Ok::<_, EpicycleError>(f(t)), a, b, step)
}

/// Wie [`integrate`], aber für fehlbare Integranden (z.B. Pfad-Auswertung).
///
/// Der erste Fehler des Integranden bricht ab und wird zurückgegeben.
pub fn try_integrate<F, E>(mut f: F, a: f64, b: f64, step: f64) -> std::result::Result<Complex64, E>
where
    F: FnMut(f64) -> std::result::Result<Complex64, E>,
    E: From<EpicycleError>,
{
    let n = step_count(a, b, step)?;
    if n == 0 {
        return Ok(Complex64::new(0.0, 0.0));
    }

    let h = (b - a) / n as f64;
    let half_h = h / 2.0;

    let mut sum = Complex64::new(0.0, 0.0);
    let mut prev = f(a)?;
    for i in 1..=n {
        // Letzter Stützpunkt exakt auf `b`, nicht über akkumulierte Rundung
        let t = if i == n { b } else { a + h * i as f64 };
        let y = f(t)?;
        sum += (prev + y) * half_h;
        prev = y;
    }
    Ok(sum)
}

/// Schrittanzahl für `[a, b]`; `0` bei leerem Intervall.
fn step_count(a: f64, b: f64, step: f64) -> Result<usize> {
    if !(step.is_finite() && step > 0.0) {
        return Err(EpicycleError::invalid(format!(
            "Integrations-Schrittweite muss > 0 sein (erhalten: {step})"
        )));
    }
    if !a.is_finite() || !b.is_finite() {
        return Err(EpicycleError::invalid(format!(
            "Integrationsgrenzen müssen endlich sein (a = {a}, b = {b})"
        )));
    }
    if a == b {
        return Ok(0);
    }
    let n = ((b - a).abs() / step).round().max(1.0);
    Ok(n as usize)
}
