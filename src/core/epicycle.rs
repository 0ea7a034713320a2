//! Epizykel-Kette: jedes Glied dreht auf der Spitze seines Vorgängers.

use super::error::{EpicycleError, Result};
use super::gradient::{chain_color, Rgba};
use num_complex::Complex64;
use std::collections::VecDeque;
use std::f64::consts::TAU;

/// Ein rotierender Vektor der Kette.
#[derive(Debug, Clone)]
pub struct EpicycleNode {
    parent: Option<usize>,
    radius: f64,
    frequency: i64,
    phase: f64,
    color: Rgba,
    origin: Complex64,
    tip: Complex64,
    /// Spur der Spitze; nur am letzten Glied aktiv
    trail: Option<VecDeque<Complex64>>,
}

impl EpicycleNode {
    /// Index des Vorgängers (`None` für die Wurzel).
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Radius `|c_k|` (ohne Anzeige-Skalierung).
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Frequenz `k`.
    pub fn frequency(&self) -> i64 {
        self.frequency
    }

    /// Startphase `arg(c_k)`.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Anzeigefarbe aus dem Ketten-Gradienten.
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Drehpunkt beim letzten Update.
    pub fn origin(&self) -> Complex64 {
        self.origin
    }

    /// Spitze beim letzten Update.
    pub fn tip(&self) -> Complex64 {
        self.tip
    }

    /// Aufgezeichnete Spur (nur am letzten Glied).
    pub fn trail(&self) -> Option<&VecDeque<Complex64>> {
        self.trail.as_ref()
    }

    /// Versatz der Spitze gegenüber dem Drehpunkt.
    ///
    /// Winkel negiert, da die y-Achse nach unten zeigt.
    pub fn offset(&self, t: f64, scale: f64) -> Complex64 {
        let angle = TAU * self.frequency as f64 * t + self.phase;
        Complex64::from_polar(scale * self.radius, -angle)
    }
}

/// Einfache Kette ohne Verzweigung; Glied `i > 0` hängt an Glied `i - 1`.
#[derive(Debug, Clone, Default)]
pub struct EpicycleChain {
    nodes: Vec<EpicycleNode>,
    trail_capacity: usize,
}

impl EpicycleChain {
    /// Leere Kette mit Spurlänge `trail_capacity`.
    pub fn new(trail_capacity: usize) -> Self {
        Self {
            nodes: Vec::new(),
            trail_capacity,
        }
    }

    /// Alle Glieder von der Wurzel zur Spitze.
    pub fn nodes(&self) -> &[EpicycleNode] {
        &self.nodes
    }

    /// Anzahl der Glieder.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt `true` zurück, wenn die Kette leer ist.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Letztes Glied.
    pub fn tail(&self) -> Option<&EpicycleNode> {
        self.nodes.last()
    }

    /// Maximale Spurlänge.
    pub fn trail_capacity(&self) -> usize {
        self.trail_capacity
    }

    /// Ändert die Spurlänge; überzählige alte Punkte werden verworfen.
    pub fn set_trail_capacity(&mut self, capacity: usize) {
        self.trail_capacity = capacity;
        if let Some(trail) = self.nodes.last_mut().and_then(|n| n.trail.as_mut()) {
            while trail.len() > capacity {
                trail.pop_front();
            }
        }
    }

    /// Hängt ein Glied an die aktuelle Spitze; deren Spur wird abgeschaltet.
    pub fn push(&mut self, radius: f64, frequency: i64, phase: f64) -> usize {
        let parent = self.nodes.len().checked_sub(1);
        if let Some(previous) = self.nodes.last_mut() {
            previous.trail = None;
        }
        let origin = self.nodes.last().map(|n| n.tip).unwrap_or_default();
        self.nodes.push(EpicycleNode {
            parent,
            radius,
            frequency,
            phase,
            color: [1.0; 4],
            origin,
            tip: origin,
            trail: Some(VecDeque::new()),
        });
        self.nodes.len() - 1
    }

    /// Berechnet alle Spitzen für Zeit `t`, von der Wurzel zur Spitze.
    pub fn update(&mut self, t: f64, anchor: Complex64, scale: f64) {
        let mut origin = anchor;
        for node in &mut self.nodes {
            node.origin = origin;
            node.tip = origin + node.offset(t, scale);
            origin = node.tip;
        }
    }

    /// Hängt die aktuelle Spitze an die Spur des letzten Glieds.
    pub fn record_trail(&mut self) {
        let capacity = self.trail_capacity;
        let Some(node) = self.nodes.last_mut() else {
            return;
        };
        let tip = node.tip;
        if let Some(trail) = node.trail.as_mut() {
            if capacity == 0 {
                trail.clear();
                return;
            }
            trail.push_back(tip);
            while trail.len() > capacity {
                trail.pop_front();
            }
        }
    }

    /// Spitze der Kette für Zeit `t`, ohne den Zustand zu verändern.
    pub fn tip_at(&self, t: f64, anchor: Complex64, scale: f64) -> Result<Complex64> {
        if self.nodes.is_empty() {
            return Err(EpicycleError::EmptyChain);
        }
        Ok(self
            .nodes
            .iter()
            .fold(anchor, |origin, node| origin + node.offset(t, scale)))
    }

    /// Färbt die ganze Kette nach Position neu ein.
    pub fn recolor(&mut self, background: Rgba, highlight: Rgba) {
        let count = self.nodes.len();
        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.color = chain_color(background, highlight, i, count);
        }
    }

    /// Leert die Spur, ohne die Glieder zu entfernen.
    pub fn clear_trail(&mut self) {
        if let Some(trail) = self.nodes.last_mut().and_then(|n| n.trail.as_mut()) {
            trail.clear();
        }
    }

    /// Entfernt alle Glieder.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
