pub mod core;
pub mod rendering;

pub use self::core::WindowConfig;
pub use rendering::{RenderConfig, ShaderFailurePolicy};
