/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// Colors are stored linear, so an sRGB target is needed for them to come
    /// out at the intended brightness.
    pub prefer_srgb: bool,

    /// FIFO is supported everywhere and is plenty for a static scene.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference. Falls back to the first supported mode.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// A handful of flat shapes does not need the discrete GPU.
    pub power_preference: wgpu::PowerPreference,

    /// Hint only; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::LowPower,
            desired_maximum_frame_latency: 2,
        }
    }
}
