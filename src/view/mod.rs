pub mod input;
pub mod screen;

pub use input::{parse_dimension, DimensionInputs, Field};
pub use screen::VolumeView;
