pub mod quad;
pub mod shader;

pub use quad::QuadMesh;
pub use shader::{ShaderProgram, ShaderStage};
