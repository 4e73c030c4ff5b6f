mod area;
mod centroid;
mod contains;
mod length;

pub use area::{ring_area, Area};
pub use centroid::Centroid;
pub use contains::{point_in_geometry, point_in_polygon, within};
pub use length::{line_length, Length};
