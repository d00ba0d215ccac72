use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::export::export_records;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🌍 Filter Volcanoes");
    ui.separator();

    let Some(criteria) = state.criteria.clone() else {
        ui.label("No dataset loaded.");
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Country selector ----
            ui.strong("Select a country:");
            let mut chosen: Option<String> = None;
            egui::ComboBox::from_id_salt("country")
                .selected_text(criteria.country())
                .width(ui.available_width())
                .show_ui(ui, |ui: &mut Ui| {
                    for country in &state.countries {
                        if ui
                            .selectable_label(criteria.country() == country, country)
                            .clicked()
                        {
                            chosen = Some(country.clone());
                        }
                    }
                });
            if let Some(country) = chosen {
                state.set_country(&country);
            }
            ui.separator();

            // ---- Elevation window ----
            ui.strong("Elevation range (meters):");
            if let Some((min, max)) = state.elevation_limits {
                let mut lower = criteria.lower();
                let mut upper = criteria.upper();
                // Edits clamp, the initial window may lie outside the data.
                ui.add(
                    egui::Slider::new(&mut lower, min..=max)
                        .clamping(egui::SliderClamping::Edits)
                        .text("min"),
                );
                ui.add(
                    egui::Slider::new(&mut upper, min..=max)
                        .clamping(egui::SliderClamping::Edits)
                        .text("max"),
                );
                if lower != criteria.lower() {
                    state.set_lower(lower);
                } else if upper != criteria.upper() {
                    state.set_upper(upper);
                }
            }
            ui.separator();

            // ---- What the cleaning step produced ----
            if let Some(ds) = &state.dataset {
                egui::CollapsingHeader::new(RichText::new("Cleaned columns").strong())
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        for col in &ds.cleaned_columns {
                            ui.monospace(col);
                        }
                        if ds.dropped_rows > 0 {
                            ui.label(format!("{} incomplete rows dropped", ds.dropped_rows));
                        }
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = !state.view.is_empty();
            if ui
                .add_enabled(can_export, egui::Button::new("Export filtered view…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(name)) = (&state.dataset, &state.source_name) {
            ui.label(format!(
                "{name}: {} volcanoes loaded, {} visible",
                ds.dataset.len(),
                state.view.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open volcano dataset")
        .add_filter("CSV", &["csv"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export filtered volcanoes")
        .set_file_name("volcanoes.csv")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        match export_records(&path, &state.view.records) {
            Ok(()) => {
                log::info!("Exported {} volcanoes to {}", state.view.len(), path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export: {e:#}");
                state.status_message = Some(format!("Export failed: {e:#}"));
            }
        }
    }
}
