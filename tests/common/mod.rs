#![allow(dead_code)]

use std::sync::Once;

use planar::geometry::{Geometry, Point, Ring};
use planar::operations::query::Area;

static INIT: Once = Once::new();

/// Installs a test subscriber honouring `RUST_LOG`, warnings by default.
pub fn init_tracing() {
    INIT.call_once(|| {
        let env_filter = tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}

pub fn ring(coords: &[(f64, f64)]) -> Ring {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Closed counter-clockwise axis-aligned rectangle.
pub fn rect(x0: f64, y0: f64, w: f64, h: f64) -> Ring {
    ring(&[(x0, y0), (x0 + w, y0), (x0 + w, y0 + h), (x0, y0 + h), (x0, y0)])
}

pub fn square(x0: f64, y0: f64, size: f64) -> Geometry {
    Geometry::Polygon(vec![rect(x0, y0, size, size)])
}

pub fn unit_square() -> Geometry {
    square(0.0, 0.0, 1.0)
}

#[allow(clippy::unwrap_used)]
pub fn area(g: &Geometry) -> f64 {
    Area::new(g).execute().unwrap()
}
