// Adapters layer: concrete renderers the view writes results through.

pub mod render;

pub use render::{renderer_for, JsonRenderer, SharedWriter, TextRenderer};
