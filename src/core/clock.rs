//! Simulationsuhr der Epizykel.

/// Skalare Simulationszeit `t`, fortgeschrieben um `Δt / slowdown` je Tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationClock {
    time: f64,
}

impl SimulationClock {
    /// Uhr bei `t = 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Simulationszeit.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Schreibt die Zeit um `delta_ms / 1000 / slowdown` fort und gibt die neue Zeit zurück.
    ///
    /// Argumente werden vom Aufrufer validiert.
    pub fn advance(&mut self, delta_ms: f64, slowdown: f64) -> f64 {
        self.time += delta_ms / 1000.0 / slowdown;
        self.time
    }

    /// Setzt die Uhr auf 0 zurück.
    pub fn reset(&mut self) {
        self.time = 0.0;
    }
}
