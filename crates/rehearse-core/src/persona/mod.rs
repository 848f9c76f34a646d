//! Persona domain module.
//!
//! - `model`: The prospect persona (`Persona`) and its system prompt
//! - `preset`: Built-in practice personas

mod model;
mod preset;

pub use model::Persona;
pub use preset::get_default_presets;
