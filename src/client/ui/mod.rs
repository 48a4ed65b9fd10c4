mod quiz;
mod render;
mod report;

pub use render::render;
