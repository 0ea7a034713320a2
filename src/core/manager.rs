//! Orchestrierung von Generator, Kette und Simulationsuhr.

use super::clock::SimulationClock;
use super::epicycle::{EpicycleChain, EpicycleNode};
use super::error::{ensure_positive, EpicycleError, Result};
use super::fourier::{FourierCoefficient, FourierSeries, DEFAULT_INTEGRATION_STEP};
use super::gradient::Rgba;
use super::path::{ParametricPath, ScreenOriented};
use num_complex::Complex64;
use std::collections::VecDeque;

/// Nominale Bildrate für die abgeleitete Spurlänge.
pub const NOMINAL_FPS: f64 = 60.0;

/// Startwerte des Managers (aus den Laufzeit-Optionen).
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerConfig {
    /// Anzeige-Skalierung der Radien
    pub scale: f64,
    /// Verlangsamung der Simulationszeit
    pub slowdown: f64,
    /// Schrittweite der Trapezregel
    pub integration_step: f64,
    /// DC-Term überspringen
    pub skip_dc: bool,
    /// Spurlänge in Frames (0 = slowdown × [`NOMINAL_FPS`])
    pub trail_length: usize,
    /// Hintergrundfarbe (Startpunkt der Gradienten)
    pub background: Rgba,
    /// Zielfarbe des Ketten-Gradienten
    pub highlight: Rgba,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            slowdown: 10.0,
            integration_step: DEFAULT_INTEGRATION_STEP,
            skip_dc: false,
            trail_length: 0,
            background: [0.0, 0.0, 0.0, 1.0],
            highlight: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Read-only Sicht auf ein Kettenglied für das Zeichnen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpicycleSnapshot {
    /// Drehpunkt
    pub origin: Complex64,
    /// Spitze
    pub tip: Complex64,
    /// Skalierter Radius
    pub radius: f64,
    /// Gradientenfarbe
    pub color: Rgba,
    /// Frequenz `k`
    pub frequency: i64,
}

/// Sitzungsobjekt für die Epizykel: Generator, Kette, Uhr und Skalierung.
#[derive(Debug, Clone)]
pub struct EpicycleManager {
    series: FourierSeries,
    chain: EpicycleChain,
    clock: SimulationClock,
    scale: f64,
    slowdown: f64,
    trail_length: usize,
    anchor: Complex64,
    path_origin: Complex64,
    /// Ursprung, mit dem die Koeffizienten der aktuellen Kette berechnet wurden
    basis_origin: Complex64,
    background: Rgba,
    highlight: Rgba,
}

impl Default for EpicycleManager {
    fn default() -> Self {
        let config = ManagerConfig::default();
        Self {
            series: FourierSeries::new(),
            chain: EpicycleChain::new(trail_capacity(config.trail_length, config.slowdown)),
            clock: SimulationClock::new(),
            scale: config.scale,
            slowdown: config.slowdown,
            trail_length: config.trail_length,
            anchor: Complex64::new(0.0, 0.0),
            path_origin: Complex64::new(0.0, 0.0),
            basis_origin: Complex64::new(0.0, 0.0),
            background: config.background,
            highlight: config.highlight,
        }
    }
}

impl EpicycleManager {
    /// Erstellt einen Manager; ungültige Faktoren werden abgelehnt.
    pub fn new(config: ManagerConfig) -> Result<Self> {
        let scale = ensure_positive("scale", config.scale)?;
        let slowdown = ensure_positive("slowdown", config.slowdown)?;
        let series = FourierSeries::new()
            .with_step(config.integration_step)?
            .with_skip_dc(config.skip_dc);
        Ok(Self {
            series,
            chain: EpicycleChain::new(trail_capacity(config.trail_length, slowdown)),
            scale,
            slowdown,
            trail_length: config.trail_length,
            background: config.background,
            highlight: config.highlight,
            ..Self::default()
        })
    }

    /// Zieht einen Koeffizienten und hängt ein neues Glied an.
    ///
    /// Bei einem Fehler bleibt die Kette unverändert.
    pub fn add_cycle<P>(&mut self, path: &P) -> Result<FourierCoefficient>
    where
        P: ParametricPath + ?Sized,
    {
        let basis_origin = if self.chain.is_empty() {
            self.path_origin
        } else {
            self.basis_origin
        };
        let view = ScreenOriented::new(path, basis_origin);
        let coefficient = self.series.next(&view)?;

        self.basis_origin = basis_origin;
        self.chain.push(
            coefficient.magnitude(),
            coefficient.frequency,
            coefficient.phase(),
        );
        self.chain.recolor(self.background, self.highlight);
        self.refresh_tips();
        log::debug!(
            "Epizykel {} hinzugefügt: k = {}, |c| = {:.4}",
            self.chain.len(),
            coefficient.frequency,
            coefficient.magnitude()
        );
        Ok(coefficient)
    }

    /// Zieht bis zu `count` Koeffizienten; bricht beim ersten Fehler ab.
    ///
    /// Bereits hinzugefügte Glieder bleiben erhalten.
    pub fn add_cycles<P>(&mut self, path: &P, count: usize) -> Result<usize>
    where
        P: ParametricPath + ?Sized,
    {
        for added in 0..count {
            if let Err(e) = self.add_cycle(path) {
                log::warn!("Abbruch nach {added} von {count} Epizykeln: {e}");
                return Err(e);
            }
        }
        Ok(count)
    }

    /// Schreibt die Uhr um `delta_ms` fort und berechnet alle Spitzen neu.
    pub fn tick(&mut self, delta_ms: f64) -> Result<()> {
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            return Err(EpicycleError::invalid(format!(
                "Frame-Zeit muss endlich und >= 0 sein (erhalten: {delta_ms})"
            )));
        }
        self.clock.advance(delta_ms, self.slowdown);
        self.refresh_tips();
        self.chain.record_trail();
        Ok(())
    }

    /// Leert die Kette, setzt Generator und Uhr zurück. Der Pfad bleibt unberührt.
    pub fn reset(&mut self) {
        self.chain.clear();
        self.series.reset();
        self.clock.reset();
        log::info!("Epizykel zurückgesetzt");
    }

    /// Glieder mit aktuellen Positionen; leer bei leerer Kette.
    pub fn chain_snapshot(&self) -> Vec<EpicycleSnapshot> {
        self.chain
            .nodes()
            .iter()
            .map(|node| EpicycleSnapshot {
                origin: node.origin(),
                tip: node.tip(),
                radius: node.radius() * self.scale,
                color: node.color(),
                frequency: node.frequency(),
            })
            .collect()
    }

    /// Spitze des letzten Glieds.
    pub fn tail_tip(&self) -> Result<Complex64> {
        self.chain
            .tail()
            .map(EpicycleNode::tip)
            .ok_or(EpicycleError::EmptyChain)
    }

    /// Spur der Kettenspitze (älteste zuerst); leer ohne Glieder.
    pub fn trail(&self) -> impl Iterator<Item = Complex64> + '_ {
        self.chain
            .tail()
            .and_then(EpicycleNode::trail)
            .into_iter()
            .flat_map(|trail: &VecDeque<Complex64>| trail.iter().copied())
    }

    /// Setzt die Anzeige-Skalierung.
    pub fn set_scale(&mut self, scale: f64) -> Result<()> {
        self.scale = ensure_positive("scale", scale)?;
        self.chain.clear_trail();
        self.refresh_tips();
        Ok(())
    }

    /// Multipliziert die Anzeige-Skalierung mit `factor`.
    pub fn scale_by(&mut self, factor: f64) -> Result<()> {
        let factor = ensure_positive("scale factor", factor)?;
        self.set_scale(self.scale * factor)
    }

    /// Setzt die Verlangsamung; eine abgeleitete Spurlänge wächst mit.
    pub fn set_slowdown(&mut self, slowdown: f64) -> Result<()> {
        self.slowdown = ensure_positive("slowdown", slowdown)?;
        self.chain
            .set_trail_capacity(trail_capacity(self.trail_length, self.slowdown));
        Ok(())
    }

    /// Setzt die Spurlänge in Frames (0 = abgeleitet).
    pub fn set_trail_length(&mut self, frames: usize) {
        self.trail_length = frames;
        self.chain
            .set_trail_capacity(trail_capacity(frames, self.slowdown));
    }

    /// Setzt den Fixpunkt der Kettenwurzel (Mitte des Epizykel-Bereichs).
    pub fn set_anchor(&mut self, anchor: Complex64) {
        if anchor != self.anchor {
            self.anchor = anchor;
            self.chain.clear_trail();
            self.refresh_tips();
        }
    }

    /// Setzt den Bezugspunkt des Pfads (Mitte des Editor-Bereichs).
    pub fn set_path_origin(&mut self, origin: Complex64) {
        if origin != self.path_origin {
            self.path_origin = origin;
            self.chain.clear_trail();
            self.refresh_tips();
        }
    }

    /// Setzt die Gradientenfarben und färbt die Kette neu ein.
    pub fn set_colors(&mut self, background: Rgba, highlight: Rgba) {
        self.background = background;
        self.highlight = highlight;
        self.chain.recolor(background, highlight);
    }

    /// Aktuelle Simulationszeit.
    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    /// Anzahl der Glieder.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Gibt `true` zurück, wenn keine Glieder existieren.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Aktuelle Anzeige-Skalierung.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Aktuelle Verlangsamung.
    pub fn slowdown(&self) -> f64 {
        self.slowdown
    }

    /// Fixpunkt der Kettenwurzel.
    pub fn anchor(&self) -> Complex64 {
        self.anchor
    }

    /// Frequenz des nächsten Terms.
    pub fn next_frequency(&self) -> i64 {
        self.series.next_frequency()
    }

    /// Read-only Zugriff auf die Kette.
    pub fn chain(&self) -> &EpicycleChain {
        &self.chain
    }

    /// Wurzelposition; gleicht eine Verschiebung des Pfad-Ursprungs seit dem Aufbau aus.
    fn root(&self) -> Complex64 {
        self.anchor + (self.basis_origin - self.path_origin) * self.scale
    }

    fn refresh_tips(&mut self) {
        let root = self.root();
        self.chain.update(self.clock.time(), root, self.scale);
    }
}

fn trail_capacity(frames: usize, slowdown: f64) -> usize {
    if frames > 0 {
        frames
    } else {
        (slowdown * NOMINAL_FPS).round() as usize
    }
}
