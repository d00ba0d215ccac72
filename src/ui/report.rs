use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{Elevation, Record, REQUIRED_COLUMNS};
use crate::data::summary::{
    extremes, feedback, map_center, map_markers, matching_names, row_summaries, top_n,
    type_breakdown, Feedback,
};
use crate::state::AppState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Central panel – every view of the filtered volcanoes
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let Some(criteria) = &state.criteria else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Please upload a CSV file to get started.  (File → Open…)");
        });
        return;
    };
    let records = &state.view.records;
    let config = &state.config;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(format!(
                "🌋 Volcanoes in {} between {}–{} meters",
                criteria.country(),
                criteria.lower(),
                criteria.upper()
            ));
            volcano_table(ui, records);
            ui.add_space(8.0);

            if let Some((lowest, highest)) = extremes(records) {
                ui.label(format!("🔻 Lowest elevation: {} meters", Elevation(lowest)));
                ui.label(format!("🔺 Highest elevation: {} meters", Elevation(highest)));
            }
            ui.label(format!("📝 Volcanoes matching filter: {}", matching_names(records)));

            if records.is_empty() {
                ui.add_space(8.0);
                ui.label(RichText::new("Nothing to chart for this selection.").italics());
            } else {
                ui.add_space(8.0);
                ui.heading("Volcano Type Distribution");
                plot::type_pie(ui, &type_breakdown(records, config.other_threshold));

                ui.add_space(8.0);
                ui.heading(format!("Top {} Tallest Volcanoes (in meters)", config.top_n));
                plot::tallest_bars(ui, &top_n(records, config.top_n));

                if let Some(center) = map_center(records) {
                    ui.add_space(8.0);
                    ui.heading("Map of Volcano Locations");
                    plot::volcano_map(
                        ui,
                        map_markers(records).collect(),
                        center,
                        config.map_span_degrees,
                    );
                }
            }

            ui.add_space(8.0);
            for line in row_summaries(records) {
                ui.label(line);
            }

            match feedback(records.len(), config) {
                Some(Feedback::Success(msg)) => {
                    ui.add_space(8.0);
                    ui.label(RichText::new(msg).strong().color(Color32::DARK_GREEN));
                }
                Some(Feedback::Warning(msg)) => {
                    ui.add_space(8.0);
                    ui.label(RichText::new(msg).strong().color(Color32::from_rgb(200, 120, 0)));
                }
                None => {}
            }
        });
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

fn volcano_table(ui: &mut Ui, records: &[Record]) {
    ui.push_id("volcano_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .max_scroll_height(260.0)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(70.0), REQUIRED_COLUMNS.len())
            .header(20.0, |mut header| {
                for label in REQUIRED_COLUMNS {
                    header.col(|ui: &mut Ui| {
                        ui.strong(label);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, records.len(), |mut row| {
                    let rec = &records[row.index()];
                    let cells = [
                        rec.name.clone().unwrap_or_default(),
                        rec.country.clone(),
                        rec.volcano_type.clone().unwrap_or_default(),
                        rec.latitude.to_string(),
                        rec.longitude.to_string(),
                        Elevation(rec.elevation).to_string(),
                    ];
                    for cell in cells {
                        row.col(|ui: &mut Ui| {
                            ui.label(cell);
                        });
                    }
                });
            });
    });
}
