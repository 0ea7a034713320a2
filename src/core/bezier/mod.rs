//! Kubische Bézier-Pfade: Segment, Pfad und Editor-Modell.

pub mod builder;
pub mod path;
pub mod segment;

pub use builder::{EditorPoint, PathBuilder, PointId, PointRole};
pub use path::BezierPath;
pub use segment::BezierSegment;
