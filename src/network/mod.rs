pub mod forward;
pub mod network;
pub mod render;

pub use forward::ForwardPass;
pub use network::{Mlp, DEFAULT_HIDDEN_SIZE};
pub use render::render;
