mod organize;
mod orientation;

pub use organize::{Organize, OrganizeParams, Organized};
pub use orientation::FixOrientation;
