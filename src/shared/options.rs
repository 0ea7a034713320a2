//! Zentrale Konfiguration für den Fourier-Epizykel-Zeichner.
//!
//! `EpicycleOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::ManagerConfig;
use serde::{Deserialize, Serialize};

// ── Simulation ──────────────────────────────────────────────────────

/// Verlangsamung der Simulationszeit (Sekunden Echtzeit je Umlauf).
pub const SLOWDOWN_DEFAULT: f64 = 10.0;
/// Anzeige-Skalierung der Epizykel-Radien.
pub const EPICYCLE_SCALE_DEFAULT: f64 = 1.0;
/// Faktor je Zoom-Schritt (J/K).
pub const EPICYCLE_SCALE_STEP: f64 = 1.25;
/// Anzahl Terme je Batch (W).
pub const BATCH_SIZE: usize = 50;
/// Schrittweite der Trapezregel.
pub const INTEGRATION_STEP: f64 = crate::core::DEFAULT_INTEGRATION_STEP;

// ── Editor ──────────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln (Hover, Drag, Schließen des Pfads).
pub const PICK_RADIUS_PX: f32 = 10.0;
/// Samples je Segment für die Pfad-Darstellung.
pub const PATH_SAMPLES_PER_SEGMENT: usize = 100;
/// Rand beim Einpassen importierter Pfade in Pixeln.
pub const IMPORT_MARGIN_PX: f32 = 40.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Hintergrund (RGBA: Fast-Schwarz).
pub const BACKGROUND_COLOR: [f32; 4] = [0.04, 0.04, 0.06, 1.0];
/// Zielfarbe des Ketten-Gradienten (RGBA: Weiß).
pub const CHAIN_HIGHLIGHT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der Spur (RGBA: Blau).
pub const PENCIL_COLOR: [f32; 4] = [0.2, 0.5, 1.0, 1.0];
/// Farbe des gezeichneten Pfads (RGBA: Weiß).
pub const PATH_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der Endpunkte (RGBA: Gelb).
pub const ENDPOINT_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Farbe der Steuerpunkte (RGBA: Magenta).
pub const CONTROL_POINT_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe der Handle-Linien (RGBA: Cyan).
pub const HANDLE_COLOR: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe hervorgehobener Punkte (RGBA: Weiß).
pub const HOVER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Fenster ─────────────────────────────────────────────────────────

/// Start-Fenstergröße [Breite, Höhe] in Pixeln.
pub const WINDOW_SIZE: [f32; 2] = [1600.0, 800.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `fourier_epicycles.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EpicycleOptions {
    // ── Simulation ──────────────────────────────────────────────
    /// Verlangsamung der Simulationszeit
    pub slowdown: f64,
    /// Anzeige-Skalierung der Radien
    pub epicycle_scale: f64,
    /// Faktor je Zoom-Schritt
    pub scale_step: f64,
    /// Anzahl Terme je Batch
    pub batch_size: usize,
    /// Schrittweite der Trapezregel
    pub integration_step: f64,
    /// DC-Term (k = 0) überspringen
    #[serde(default)]
    pub skip_dc_term: bool,
    /// Spurlänge in Frames (0 = slowdown × 60)
    #[serde(default)]
    pub trail_length: usize,

    // ── Editor ──────────────────────────────────────────────────
    /// Pick-Radius in Screen-Pixeln
    pub pick_radius_px: f32,
    /// Samples je Segment für die Pfad-Darstellung
    #[serde(default = "default_path_samples_per_segment")]
    pub path_samples_per_segment: usize,
    /// Rand beim Einpassen importierter Pfade
    #[serde(default = "default_import_margin_px")]
    pub import_margin_px: f32,

    // ── Farben ──────────────────────────────────────────────────
    /// Hintergrund
    pub background_color: [f32; 4],
    /// Zielfarbe des Ketten-Gradienten
    pub chain_highlight_color: [f32; 4],
    /// Farbe der Spur
    pub pencil_color: [f32; 4],
    /// Farbe des gezeichneten Pfads
    pub path_color: [f32; 4],
    /// Farbe der Endpunkte
    pub endpoint_color: [f32; 4],
    /// Farbe der Steuerpunkte
    pub control_point_color: [f32; 4],
    /// Farbe der Handle-Linien
    pub handle_color: [f32; 4],
    /// Farbe hervorgehobener Punkte
    #[serde(default = "default_hover_color")]
    pub hover_color: [f32; 4],

    // ── Fenster ─────────────────────────────────────────────────
    /// Start-Fenstergröße
    pub window_size: [f32; 2],
}

impl Default for EpicycleOptions {
    fn default() -> Self {
        Self {
            slowdown: SLOWDOWN_DEFAULT,
            epicycle_scale: EPICYCLE_SCALE_DEFAULT,
            scale_step: EPICYCLE_SCALE_STEP,
            batch_size: BATCH_SIZE,
            integration_step: INTEGRATION_STEP,
            skip_dc_term: false,
            trail_length: 0,

            pick_radius_px: PICK_RADIUS_PX,
            path_samples_per_segment: PATH_SAMPLES_PER_SEGMENT,
            import_margin_px: IMPORT_MARGIN_PX,

            background_color: BACKGROUND_COLOR,
            chain_highlight_color: CHAIN_HIGHLIGHT_COLOR,
            pencil_color: PENCIL_COLOR,
            path_color: PATH_COLOR,
            endpoint_color: ENDPOINT_COLOR,
            control_point_color: CONTROL_POINT_COLOR,
            handle_color: HANDLE_COLOR,
            hover_color: HOVER_COLOR,

            window_size: WINDOW_SIZE,
        }
    }
}

/// Serde-Default für `path_samples_per_segment` (Abwärtskompatibilität).
fn default_path_samples_per_segment() -> usize {
    PATH_SAMPLES_PER_SEGMENT
}

/// Serde-Default für `import_margin_px` (Abwärtskompatibilität).
fn default_import_margin_px() -> f32 {
    IMPORT_MARGIN_PX
}

/// Serde-Default für `hover_color` (Abwärtskompatibilität).
fn default_hover_color() -> [f32; 4] {
    HOVER_COLOR
}

impl EpicycleOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("fourier_epicycles"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("fourier_epicycles.toml")
    }

    /// Startwerte für den Epizykel-Manager.
    pub fn manager_config(&self) -> ManagerConfig {
        ManagerConfig {
            scale: self.epicycle_scale,
            slowdown: self.slowdown,
            integration_step: self.integration_step,
            skip_dc: self.skip_dc_term,
            trail_length: self.trail_length,
            background: self.background_color,
            highlight: self.chain_highlight_color,
        }
    }

    /// Sample-Anzahl für den gesamten Pfad (mindestens 2).
    pub fn path_sample_count(&self, segment_count: usize) -> usize {
        self.path_samples_per_segment
            .saturating_mul(segment_count)
            .max(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip_preserves_values() {
        let mut options = EpicycleOptions::default();
        options.slowdown = 4.0;
        options.skip_dc_term = true;
        let text = toml::to_string_pretty(&options).unwrap();
        let parsed: EpicycleOptions = toml::from_str(&text).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let full = toml::to_string(&EpicycleOptions::default()).unwrap();
        let optional = [
            "skip_dc_term",
            "trail_length",
            "hover_color",
            "path_samples_per_segment",
            "import_margin_px",
        ];
        let reduced: String = full
            .lines()
            .filter(|line| !optional.iter().any(|key| line.starts_with(key)))
            .map(|line| format!("{line}\n"))
            .collect();
        let parsed: EpicycleOptions = toml::from_str(&reduced).unwrap();
        assert_eq!(parsed, EpicycleOptions::default());
    }

    #[test]
    fn test_load_from_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("fourier_epicycles_nicht_vorhanden.toml");
        assert_eq!(EpicycleOptions::load_from_file(&path), EpicycleOptions::default());
    }

    #[test]
    fn test_manager_config_mirrors_options() {
        let options = EpicycleOptions::default();
        let config = options.manager_config();
        assert_eq!(config.slowdown, SLOWDOWN_DEFAULT);
        assert_eq!(config.highlight, CHAIN_HIGHLIGHT_COLOR);
        assert_eq!(options.path_sample_count(0), 2);
        assert_eq!(options.path_sample_count(3), 300);
    }

    #[test]
    fn test_path_sample_count_saturates() {
        let options = EpicycleOptions {
            path_samples_per_segment: usize::MAX,
            ..EpicycleOptions::default()
        };
        assert_eq!(options.path_sample_count(4), usize::MAX);
    }
}
