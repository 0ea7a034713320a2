/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// `count` Fourier-Terme aus dem aktuellen Pfad ziehen
    AddEpicycles { count: usize },
    /// Anzeige-Skalierung der Epizykel multiplizieren
    ScaleEpicycles { factor: f64 },
    /// Kette, Generator und Uhr zurücksetzen
    ResetEpicycles,
    /// Simulationsuhr anhalten oder fortsetzen
    SetPaused { paused: bool },
    /// Simulationszeit um `dt_ms` fortschreiben
    Tick { dt_ms: f64 },
    /// Pfad-Samples für die Darstellung auffrischen
    RefreshPathSamples,
    /// Nächsten Punkt des Pfads platzieren
    PlacePoint { screen_pos: glam::Vec2 },
    /// Drag auf dem nächsten Punkt beginnen
    BeginPointDrag { screen_pos: glam::Vec2 },
    /// Gegriffenen Punkt verschieben
    DragPoint { screen_pos: glam::Vec2 },
    /// Drag beenden
    EndPointDrag,
    /// Hover-Punkt aktualisieren
    UpdateHover { screen_pos: Option<glam::Vec2> },
    /// Pfad und alle Punkte entfernen
    ClearPath,
    /// SVG-Auswahldialog anfordern
    RequestImportDialog,
    /// SVG-Datei importieren und in den Editor einpassen
    ImportSvg { path: String },
    /// Optionen in die Konfigurationsdatei schreiben
    SaveOptions,
    /// Viewport-Größe setzen (Anker und Pfad-Ursprung folgen)
    SetViewportSize { size: [f32; 2] },
    /// Anwendung beenden
    RequestExit,
}
