//! Lineare Farbverläufe für Kette und Spur.

/// RGBA-Farbe mit Komponenten in `[0, 1]`.
pub type Rgba = [f32; 4];

/// Lineare Interpolation zwischen zwei Farben; `factor` wird auf `[0, 1]` begrenzt.
pub fn lerp(from: Rgba, to: Rgba, factor: f32) -> Rgba {
    let f = factor.clamp(0.0, 1.0);
    std::array::from_fn(|i| from[i] + (to[i] - from[i]) * f)
}

/// Farbe des Kettenglieds `index` von `count`: heller zur Spitze hin.
pub fn chain_color(background: Rgba, highlight: Rgba, index: usize, count: usize) -> Rgba {
    if count == 0 {
        return background;
    }
    let l = (index + 1) as f32 / count as f32;
    lerp(background, highlight, 0.2 * (1.0 - l) + 0.8 * l)
}

/// Farbe des Spur-Abschnitts `index` von `count`: älteste Abschnitte verblassen.
pub fn trail_color(background: Rgba, pencil: Rgba, index: usize, count: usize) -> Rgba {
    if count == 0 {
        return pencil;
    }
    lerp(background, pencil, index as f32 / count as f32)
}
