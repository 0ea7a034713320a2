//! Fourier-Epizykel-Zeichner.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod svg;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{
    BezierPath, BezierSegment, EpicycleError, EpicycleManager, FourierCoefficient, FourierSeries,
    ParametricPath, PathBuilder,
};
pub use shared::{EpicycleOptions, RenderScene};
pub use svg::{load_svg_file, parse_svg};
