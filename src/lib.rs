pub mod config;
pub mod render;
pub mod utils;

// Re-export commonly used types
pub use config::core::WindowConfig;
pub use config::rendering::{RenderConfig, ShaderFailurePolicy};
pub use render::quad::QuadMesh;
pub use render::shader::ShaderProgram;
pub use utils::error::RenderError;
pub use utils::file::load_entire_file;
