pub mod chart;
pub mod color;
pub mod config;
pub mod events;
pub mod feedback;
pub mod geometry;
#[cfg(feature = "render")]
pub mod render;
