//! Render-Szene als expliziter Übergabevertrag zwischen App und Canvas.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie zeichnet.

use super::options::EpicycleOptions;
use glam::Vec2;

/// Ein Editor-Punkt in Screen-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePoint {
    /// Position in Pixeln
    pub position: Vec2,
    /// Endpunkt (sonst Steuerpunkt)
    pub is_endpoint: bool,
    /// Liegt innerhalb des Pick-Radius des Mauszeigers
    pub hovered: bool,
    /// Wird gerade gezogen
    pub dragged: bool,
}

/// Ein Kettenglied in Screen-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneEpicycle {
    /// Drehpunkt
    pub center: Vec2,
    /// Spitze
    pub tip: Vec2,
    /// Skalierter Radius in Pixeln
    pub radius: f32,
    /// Gradientenfarbe (RGBA)
    pub color: [f32; 4],
}

/// Read-only Daten für einen Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// x-Position der Trennlinie zwischen Editor und Epizykeln
    pub divider_x: f32,
    /// Abgetasteter Pfad (leer ohne Segmente)
    pub path_polyline: Vec<Vec2>,
    /// Pfad wurde geschlossen
    pub path_closed: bool,
    /// Editor-Punkte
    pub points: Vec<ScenePoint>,
    /// Linien Steuerpunkt → Endpunkt
    pub handles: Vec<[Vec2; 2]>,
    /// Kettenglieder von der Wurzel zur Spitze
    pub epicycles: Vec<SceneEpicycle>,
    /// Spur der Kettenspitze (älteste zuerst)
    pub trail: Vec<Vec2>,
    /// Anzahl Terme
    pub term_count: usize,
    /// Frequenz des nächsten Terms
    pub next_frequency: i64,
    /// Simulationszeit
    pub time: f64,
    /// Simulation angehalten
    pub paused: bool,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EpicycleOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein Pfad zum Zeichnen vorhanden ist.
    pub fn has_path(&self) -> bool {
        self.path_polyline.len() >= 2
    }

    /// Gibt zurück, ob Epizykel vorhanden sind.
    pub fn has_epicycles(&self) -> bool {
        !self.epicycles.is_empty()
    }
}
