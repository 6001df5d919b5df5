mod layout;
mod render;

pub use layout::{BoardLayout, HudLayout};
pub use render::Renderer;
