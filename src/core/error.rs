//! Fehler-Taxonomie des numerischen Kerns.
//!
//! Kern-Operationen klemmen keine Eingaben, sondern lehnen sie ab.

use thiserror::Error;

/// Fehler aus Integration, Pfad-Auswertung und Epizykel-Kette.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EpicycleError {
    /// Ungültiges Argument (Schrittweite, Intervall, Parameter `t`, Faktor)
    #[error("ungültiges Argument: {0}")]
    InvalidArgument(String),
    /// Index auf nicht existierendes Segment oder Eckpunkt
    #[error("{what}-Index {index} außerhalb des Bereichs (Anzahl: {len})")]
    IndexOutOfRange {
        /// Art des Index (z.B. "Segment", "Eckpunkt")
        what: &'static str,
        /// Angefragter Index
        index: usize,
        /// Anzahl gültiger Einträge
        len: usize,
    },
    /// Abfrage auf einer Kette ohne Epizykel
    #[error("Epizykel-Kette ist leer")]
    EmptyChain,
}

impl EpicycleError {
    /// Kurzform für `InvalidArgument` mit formatierter Nachricht.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Ergebnis-Typ des Kerns.
pub type Result<T> = std::result::Result<T, EpicycleError>;

/// Prüft, dass ein Faktor endlich und strikt positiv ist.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EpicycleError::invalid(format!(
            "{name} muss endlich und > 0 sein (erhalten: {value})"
        )))
    }
}
