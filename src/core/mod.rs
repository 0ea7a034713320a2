//! Numerischer Kern: Integration, Bézier-Pfade, Fourier-Reihe und Epizykel.
//!
//! Keine UI-Typen; alle Punkte sind `Complex64` (Realteil = x, Imaginärteil = y).

pub mod bezier;
pub mod clock;
pub mod epicycle;
pub mod error;
pub mod fourier;
pub mod gradient;
pub mod integrate;
pub mod manager;
pub mod path;

pub use bezier::{BezierPath, BezierSegment, EditorPoint, PathBuilder, PointId, PointRole};
pub use clock::SimulationClock;
pub use epicycle::{EpicycleChain, EpicycleNode};
pub use error::{EpicycleError, Result};
pub use fourier::{partial_sum, FourierCoefficient, FourierSeries, DEFAULT_INTEGRATION_STEP};
pub use gradient::Rgba;
pub use integrate::{integrate, try_integrate};
pub use manager::{EpicycleManager, EpicycleSnapshot, ManagerConfig};
pub use path::{FnPath, ParametricPath, ScreenOriented};
