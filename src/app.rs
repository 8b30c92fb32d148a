use eframe::egui;

use crate::color;
use crate::config::AppConfig;
use crate::data::loader::spawn_load;
use crate::state::{AppState, LoadState};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BlayerApp {
    pub state: AppState,
}

impl BlayerApp {
    /// Start the one background load and show the loading state meanwhile.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        cc.egui_ctx.set_visuals(color::visuals());
        log::info!("Loading dataset from {}", config.dataset_path.display());
        let rx = spawn_load(config.dataset_path);
        Self {
            state: AppState::loading(rx, config.domain),
        }
    }
}

impl eframe::App for BlayerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if matches!(self.state.load, LoadState::Loading(_)) && !self.state.poll_load() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Right side panel: sliders ----
        egui::SidePanel::right("controls_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::controls_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::profile_plot(ui, &self.state);
        });
    }
}
