use eframe::egui;
use egui::mutex::Mutex;
use std::process::ExitCode;
use std::sync::Arc;

use shader_link_probe::{ProbeConfig, ProbeError};

type Outcome = Arc<Mutex<Option<Result<(), ProbeError>>>>;

/// Closes its window on the first frame. The probe itself already ran
/// while the app was being created.
struct CloseOnFirstFrame;

impl eframe::App for CloseOnFirstFrame {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

fn main() -> ExitCode {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let config = ProbeConfig::default();
    let outcome: Outcome = Arc::new(Mutex::new(None));

    let result = {
        let outcome = outcome.clone();
        let title = config.window_title.clone();
        let options = config.native_options();
        eframe::run_native(
            &title,
            options,
            Box::new(move |cc| {
                let result = match cc.gl.as_ref() {
                    Some(gl) => {
                        let mut out = std::io::stdout().lock();
                        shader_link_probe::run(&**gl, &config, &mut out)
                    }
                    None => Err(ProbeError::GraphicsInit(
                        "eframe did not provide a glow context".to_string(),
                    )),
                };
                *outcome.lock() = Some(result);
                Ok(Box::new(CloseOnFirstFrame))
            }),
        )
    };

    let recorded = outcome.lock().take();
    let result = match (result, recorded) {
        (Err(err), Some(recorded)) => {
            log::warn!("eframe reported an error after the probe ran: {err}");
            recorded
        }
        (Ok(()), Some(recorded)) => recorded,
        (Err(err), None) => Err(ProbeError::from_startup(err)),
        (Ok(()), None) => Err(ProbeError::WindowInit(
            "event loop ended before a context was created".to_string(),
        )),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
