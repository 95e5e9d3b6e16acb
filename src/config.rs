use std::path::PathBuf;

/// Fixed inputs of a probe run. The binary always uses the defaults.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub vertex_path: PathBuf,
    pub fragment_path: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            vertex_path: PathBuf::from("Shader.vert"),
            fragment_path: PathBuf::from("Shader.frag"),
            window_title: "Shader test".to_string(),
            window_size: [300.0, 200.0],
        }
    }
}

impl ProbeConfig {
    /// Reads both shader files from `dir` instead of the working directory.
    pub fn in_dir<P: AsRef<std::path::Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        ProbeConfig {
            vertex_path: dir.join("Shader.vert"),
            fragment_path: dir.join("Shader.frag"),
            ..Default::default()
        }
    }

    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: eframe::egui::ViewportBuilder::default()
                .with_title(self.window_title.clone())
                .with_inner_size(self.window_size),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        }
    }
}
