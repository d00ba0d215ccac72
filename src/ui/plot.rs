use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::{ColorMap, BAR_COLOR, MARKER_COLOR};
use crate::data::model::{Elevation, Record};
use crate::data::summary::{MapMarker, TypeSlice};

const CHART_HEIGHT: f32 = 320.0;

/// Segments per full turn when approximating pie arcs.
const ARC_STEPS: f64 = 120.0;

// ---------------------------------------------------------------------------
// Pie chart (type distribution)
// ---------------------------------------------------------------------------

/// Pie chart of volcano types, starting at 12 o'clock and running
/// counter-clockwise, with percentage labels inside the slices.
pub fn type_pie(ui: &mut Ui, slices: &[TypeSlice]) {
    let colors = ColorMap::new(slices.iter().map(|s| s.label.as_str()));

    Plot::new("type_pie")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_x(false)
        .show_y(false)
        .show(ui, |plot_ui| {
            let mut start = FRAC_PI_2;
            for slice in slices {
                let sweep = slice.fraction * TAU;
                let color = colors.color_for(&slice.label);

                plot_ui.polygon(
                    Polygon::new(wedge(start, sweep))
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE))
                        .name(format!("{} ({})", slice.label, slice.count)),
                );

                let mid = start + sweep / 2.0;
                let at = if slice.fraction >= 1.0 {
                    PlotPoint::new(0.0, 0.0)
                } else {
                    PlotPoint::new(0.6 * mid.cos(), 0.6 * mid.sin())
                };
                plot_ui.text(
                    Text::new(at, format!("{:.1}%", slice.fraction * 100.0)).color(Color32::WHITE),
                );

                start += sweep;
            }
        });
}

/// Closed outline of a unit-circle wedge: centre, then the arc.
fn wedge(start: f64, sweep: f64) -> PlotPoints<'static> {
    let steps = ((sweep / TAU) * ARC_STEPS).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    if sweep < TAU {
        points.push([0.0, 0.0]);
    }
    for i in 0..=steps {
        let angle = start + sweep * i as f64 / steps as f64;
        points.push([angle.cos(), angle.sin()]);
    }
    PlotPoints::from(points)
}

// ---------------------------------------------------------------------------
// Bar chart (tallest volcanoes)
// ---------------------------------------------------------------------------

pub fn tallest_bars(ui: &mut Ui, top: &[&Record]) {
    let names: Vec<String> = top.iter().map(|r| r.display_name().to_string()).collect();

    let bars: Vec<Bar> = top
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Bar::new(i as f64, r.elevation)
                .name(format!("{}: {} m", r.display_name(), Elevation(r.elevation)))
                .fill(BAR_COLOR)
                .width(0.6)
        })
        .collect();

    Plot::new("tallest_bars")
        .height(CHART_HEIGHT)
        .x_axis_label("Volcano Name")
        .y_axis_label("Elevation (Meters)")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            names.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR));
        });
}

// ---------------------------------------------------------------------------
// Map (longitude/latitude scatter)
// ---------------------------------------------------------------------------

/// Volcano locations centred on `center` (lat, lon); hovering shows the
/// nearest volcano's tooltip.
pub fn volcano_map(ui: &mut Ui, markers: Vec<MapMarker>, center: (f64, f64), span: f64) {
    let (lat, lon) = center;
    let points: PlotPoints<'_> = markers.iter().map(|m| [m.longitude, m.latitude]).collect();
    let hover_radius = span * 0.05;

    Plot::new("volcano_map")
        .height(CHART_HEIGHT * 1.5)
        .data_aspect(1.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .include_x(lon - span / 2.0)
        .include_x(lon + span / 2.0)
        .include_y(lat - span / 2.0)
        .include_y(lat + span / 2.0)
        .label_formatter(move |_name, value| {
            nearest(&markers, value, hover_radius)
                .map(|m| m.tooltip.clone())
                .unwrap_or_else(|| format!("{:.2}°, {:.2}°", value.y, value.x))
        })
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(points)
                    .radius(5.0)
                    .filled(true)
                    .color(MARKER_COLOR)
                    .name("Volcanoes"),
            );
        });
}

fn nearest<'a>(markers: &'a [MapMarker], at: &PlotPoint, radius: f64) -> Option<&'a MapMarker> {
    let dist2 = |m: &MapMarker| (m.longitude - at.x).powi(2) + (m.latitude - at.y).powi(2);
    markers
        .iter()
        .min_by(|a, b| dist2(a).total_cmp(&dist2(b)))
        .filter(|m| dist2(m) <= radius * radius)
}
