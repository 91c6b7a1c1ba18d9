/// What to do when a shader stage fails to compile or the program fails to
/// link. `LogAndContinue` keeps the window up with a possibly-unusable
/// program, which is the useful mode while iterating on shader source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderFailurePolicy {
    Strict,
    LogAndContinue,
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub clear_color: [f32; 4],
    pub vertex_shader_path: String,
    pub fragment_shader_path: String,
    pub shader_failure_policy: ShaderFailurePolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.2, 0.3, 0.3, 1.0],
            vertex_shader_path: "shaders/quad.vert".to_string(),
            fragment_shader_path: "shaders/quad.frag".to_string(),
            shader_failure_policy: ShaderFailurePolicy::LogAndContinue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_render_config() {
        let config = RenderConfig::default();
        assert_eq!(config.clear_color, [0.2, 0.3, 0.3, 1.0]);
        assert_eq!(config.shader_failure_policy, ShaderFailurePolicy::LogAndContinue);
    }
}
