pub mod collision;
pub mod point;
pub mod polygon;
pub mod segment;

pub use collision::{collides, collides_inspect};
pub use point::Point;
pub use polygon::{GeometryError, Polygon};
pub use segment::{Orientation, orientation, segments_intersect};
