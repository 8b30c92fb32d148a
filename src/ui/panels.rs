use eframe::egui::{self, RichText, Ui};

use crate::color;
use crate::export::{export_curve, ExportFormat};
use crate::metrics::format_scientific;
use crate::state::{AppState, LoadState};

// ---------------------------------------------------------------------------
// Right side panel – parameter sliders and derived values
// ---------------------------------------------------------------------------

/// Render the simulation controls. Only shown once a dataset is ready.
pub fn controls_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Simulation Controls");
    ui.separator();

    let Some(snapshot) = state.snapshot() else {
        return;
    };
    let (mut nu_idx, mut u_idx) = snapshot.indices();
    let nu_max = snapshot.index.nu.len().saturating_sub(1);
    let u_max = snapshot.index.u_inf.len().saturating_sub(1);
    let selection = snapshot.selection;

    ui.add_space(8.0);
    ui.label("Kinematic Viscosity (ν)");
    ui.add(egui::Slider::new(&mut nu_idx, 0..=nu_max).show_value(false));
    ui.label(
        RichText::new(format!("Current ν: {} m²/s", format_scientific(selection.nu, 4)))
            .color(color::PURPLE.color32()),
    );

    ui.add_space(12.0);
    ui.label("Free Stream Velocity (U∞)");
    ui.add(egui::Slider::new(&mut u_idx, 0..=u_max).show_value(false));
    ui.label(
        RichText::new(format!("Current U∞: {:.4} m/s", selection.u_inf))
            .color(color::PURPLE.color32()),
    );

    ui.add_space(12.0);
    ui.separator();
    if let Some(view) = state.view() {
        ui.label(
            RichText::new(format!("Reynolds Number (Re): {}", view.reynolds))
                .color(color::GREEN.color32()),
        );
    }

    // Commit after drawing so the whole frame saw one selection.
    state.select(nu_idx, u_idx);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        let ready = matches!(state.load, LoadState::Ready { .. });
        ui.menu_button("File", |ui: &mut Ui| {
            for format in [ExportFormat::Svg, ExportFormat::Csv, ExportFormat::Json] {
                let label = format!("Export {}…", format.label());
                if ui.add_enabled(ready, egui::Button::new(label)).clicked() {
                    save_file_dialog(state, format);
                    ui.close_menu();
                }
            }
        });

        ui.separator();

        if let (Some(snapshot), Some(view)) = (state.snapshot(), state.view()) {
            ui.label(format!(
                "{} records loaded, {} points in curve",
                snapshot.dataset.len(),
                view.curve.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(color::RED.color32()));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn save_file_dialog(state: &mut AppState, format: ExportFormat) {
    let (Some(snapshot), Some(view)) = (state.snapshot(), state.view()) else {
        return;
    };
    let file = rfd::FileDialog::new()
        .set_title("Export boundary-layer curve")
        .add_filter(format.label(), &[format.extension()])
        .set_file_name(format!("boundary_layer.{}", format.extension()))
        .save_file();

    let Some(path) = file else {
        return;
    };
    let result = export_curve(&path, format, snapshot, view, &state.domain);
    state.status_message = match result {
        Ok(()) => None,
        Err(e) => {
            log::error!("Failed to export curve: {e:#}");
            Some(format!("Export failed: {e:#}"))
        }
    };
}
