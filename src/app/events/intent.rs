/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Einen Fourier-Term hinzufügen (E)
    AddTermRequested,
    /// Einen Batch von Termen hinzufügen (W)
    AddBatchRequested,
    /// Epizykel verkleinern (J)
    ScaleDownRequested,
    /// Epizykel vergrößern (K)
    ScaleUpRequested,
    /// Epizykel zurücksetzen (R)
    ResetRequested,
    /// Simulation anhalten/fortsetzen (Leertaste)
    TogglePauseRequested,
    /// Gezeichneten Pfad löschen (C)
    ClearPathRequested,
    /// SVG-Auswahldialog öffnen (Ctrl+O)
    ImportSvgRequested,
    /// SVG-Datei wurde im Dialog ausgewählt
    SvgFileSelected { path: String },
    /// Optionen speichern (Ctrl+S)
    SaveOptionsRequested,
    /// Anwendung beenden (X / Esc)
    ExitRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Ein Frame ist vergangen
    FrameAdvanced { dt_ms: f64 },
    /// Linksklick ins Fenster (Screen-Koordinaten)
    CanvasClicked { screen_pos: glam::Vec2 },
    /// Drag-Lifecycle Start
    PointDragStarted { screen_pos: glam::Vec2 },
    /// Drag-Lifecycle Update
    PointDragged { screen_pos: glam::Vec2 },
    /// Drag-Lifecycle Ende
    PointDragEnded,
    /// Mauszeiger bewegt (None = außerhalb des Fensters)
    PointerMoved { screen_pos: Option<glam::Vec2> },
}
