//! Application State — zentrale Datenhaltung.
//!
//! `AppState` ist das explizite Sitzungsobjekt: Pfad-Editor, Epizykel-Manager,
//! Ansicht und Optionen werden hier gebündelt und per Referenz weitergegeben.

use super::CommandLog;
use crate::core::{EpicycleManager, PathBuilder, PointId};
use crate::shared::EpicycleOptions;
use glam::Vec2;
use num_complex::Complex64;

/// Wandelt eine Screen-Position in einen Kern-Punkt.
pub fn to_complex(position: Vec2) -> Complex64 {
    Complex64::new(f64::from(position.x), f64::from(position.y))
}

/// Wandelt einen Kern-Punkt in eine Screen-Position.
pub fn to_screen(point: Complex64) -> Vec2 {
    Vec2::new(point.re as f32, point.im as f32)
}

/// View-bezogener Zustand (Fensteraufteilung, Hover).
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Punkt unter dem Mauszeiger
    pub hovered_point: Option<PointId>,
}

impl ViewState {
    /// Erstellt einen View-State ohne bekannte Viewport-Größe.
    pub fn new() -> Self {
        Self::default()
    }

    /// x-Position der Trennlinie (Mitte des Fensters).
    pub fn divider_x(&self) -> f32 {
        self.viewport_size[0] / 2.0
    }

    /// Rechteck des Editor-Bereichs als (min, max).
    pub fn editor_rect(&self) -> (Vec2, Vec2) {
        (
            Vec2::ZERO,
            Vec2::new(self.divider_x(), self.viewport_size[1]),
        )
    }

    /// Mitte des Editor-Bereichs (Bezugspunkt des Pfads).
    pub fn editor_center(&self) -> Vec2 {
        let (min, max) = self.editor_rect();
        (min + max) / 2.0
    }

    /// Mitte des Epizykel-Bereichs (Wurzel der Kette).
    pub fn epicycle_center(&self) -> Vec2 {
        Vec2::new(self.divider_x() * 1.5, self.viewport_size[1] / 2.0)
    }

    /// Gibt `true` zurück, wenn `position` im Editor-Bereich liegt.
    pub fn is_in_editor(&self, position: Vec2) -> bool {
        let (min, max) = self.editor_rect();
        position.cmpge(min).all() && position.cmplt(max).all()
    }
}

/// UI-bezogener Zustand (Dialoge, Statusmeldungen).
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// SVG-Auswahldialog beim nächsten Frame öffnen
    pub show_import_dialog: bool,
    /// Zuletzt importierte Datei
    pub current_file: Option<String>,
    /// Statusnachricht für die Status-Bar
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-State.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Pfad-Editor (Punkte, Segmente, Drag)
    pub builder: PathBuilder,
    /// Generator, Kette und Simulationsuhr
    pub epicycles: EpicycleManager,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EpicycleOptions,
    /// Simulationsuhr angehalten
    pub paused: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EpicycleOptions::default())
    }

    /// Erstellt einen App-State mit geladenen Optionen.
    ///
    /// Ungültige Simulationswerte werden durch Standardwerte ersetzt.
    pub fn with_options(options: EpicycleOptions) -> Self {
        let epicycles = EpicycleManager::new(options.manager_config()).unwrap_or_else(|e| {
            log::warn!("Ungültige Simulations-Optionen, verwende Standardwerte: {}", e);
            EpicycleManager::default()
        });
        Self {
            builder: PathBuilder::new(),
            epicycles,
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            paused: false,
            should_exit: false,
        }
    }

    /// Anzahl der Epizykel (für UI-Anzeige).
    pub fn term_count(&self) -> usize {
        self.epicycles.len()
    }

    /// Anzahl der Segmente (für UI-Anzeige).
    pub fn segment_count(&self) -> usize {
        self.builder.path().segment_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
