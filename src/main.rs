//! Fourier-Epizykel-Zeichner.
//!
//! Links wird ein geschlossener Bézier-Pfad gezeichnet oder importiert,
//! rechts zeichnet eine Kette rotierender Vektoren ihn Term für Term nach.

use eframe::egui;
use fourier_epicycles::{ui, AppController, AppIntent, AppState, EpicycleOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Fourier-Epizykel v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EpicycleOptions::config_path();
        let epicycle_options = EpicycleOptions::load_from_file(&config_path);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(epicycle_options.window_size)
                .with_title("Fourier-Epizykel"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Fourier-Epizykel",
            options,
            Box::new(|_cc| Ok(Box::new(EpicycleApp::new(epicycle_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EpicycleApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EpicycleApp {
    fn new(options: EpicycleOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EpicycleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);

        // Animation läuft kontinuierlich
        ctx.request_repaint();
    }
}

impl EpicycleApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(
                    self.input
                        .collect_canvas_events(ui, &response, viewport_size),
                );

                let scene = self.controller.build_render_scene(&self.state);
                ui::render_canvas(ui.painter(), rect, &scene);
            });

        // Frame-Zeit zuletzt: Eingaben dieses Frames wirken vor dem Tick
        let dt_ms = f64::from(ctx.input(|i| i.unstable_dt)) * 1000.0;
        events.push(AppIntent::FrameAdvanced { dt_ms });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
