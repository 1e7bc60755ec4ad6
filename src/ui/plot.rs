use std::f64::consts::TAU;
use std::ops::RangeInclusive;

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{
    uniform_grid_spacer, Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Legend,
    MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text,
};

use crate::config::{BAR_OFFSET, BAR_WIDTH, PIE_EXPLODE, PIE_EXPLODE_FROM};
use crate::state::AppState;

const MALE_COLOR: Color32 = Color32::from_rgb(31, 119, 180);
const FEMALE_COLOR: Color32 = Color32::from_rgb(255, 127, 14);

// ---------------------------------------------------------------------------
// Pie chart: laureates by birth country
// ---------------------------------------------------------------------------

/// Render the country pie in the central panel.
pub fn country_pie(ui: &mut Ui, state: &AppState) {
    ui.heading("Nobel laureates by country of birth");

    let slices = &state.charts.slices;
    let total = state.charts.slice_total();
    if total == 0 {
        empty_notice(ui);
        return;
    }

    Plot::new("country_pie")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            let mut start = 0.0;
            for (i, slice) in slices.iter().enumerate() {
                let sweep = TAU * slice.count as f64 / total as f64;
                let mid = start + sweep / 2.0;
                let offset = if i >= PIE_EXPLODE_FROM { PIE_EXPLODE } else { 0.0 };
                let center = [offset * mid.cos(), offset * mid.sin()];

                plot_ui.polygon(
                    Polygon::new(PlotPoints::new(wedge(center, start, sweep)))
                        .fill_color(state.slice_colors.color_for(&slice.label))
                        .stroke(Stroke::new(1.0, Color32::WHITE))
                        .name(&slice.label),
                );

                let at = |r: f64| {
                    PlotPoint::new(center[0] + r * mid.cos(), center[1] + r * mid.sin())
                };
                plot_ui.text(Text::new(at(1.12), slice.label.clone()));
                plot_ui.text(Text::new(
                    at(0.65),
                    format!("{:.2}%\n({})", slice.percent(total), slice.count),
                ));

                start += sweep;
            }
        });
}

/// Closed outline of a unit-radius wedge, counter-clockwise from `start`.
fn wedge(center: [f64; 2], start: f64, sweep: f64) -> Vec<[f64; 2]> {
    let steps = ((sweep / 0.02).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for k in 0..=steps {
        let a = start + sweep * k as f64 / steps as f64;
        points.push([center[0] + a.cos(), center[1] + a.sin()]);
    }
    points
}

// ---------------------------------------------------------------------------
// Grouped bar chart: gender per category
// ---------------------------------------------------------------------------

/// Render male and female counts side by side for each category.
pub fn gender_bars(ui: &mut Ui, state: &AppState) {
    ui.heading("The total count of male and female Nobel Prize winners in each category");

    let counts = &state.charts.gender_counts;
    if counts.categories.is_empty() {
        empty_notice(ui);
        return;
    }

    let series = |values: &[usize], shift: f64| -> Vec<Bar> {
        values
            .iter()
            .zip(&counts.categories)
            .enumerate()
            .map(|(i, (&n, category))| {
                Bar::new(i as f64 + shift, n as f64)
                    .width(BAR_WIDTH)
                    .name(category)
            })
            .collect()
    };
    let males = BarChart::new(series(&counts.male, -BAR_OFFSET))
        .name("Males")
        .color(MALE_COLOR);
    let females = BarChart::new(series(&counts.female, BAR_OFFSET))
        .name("Females")
        .color(FEMALE_COLOR);

    Plot::new("gender_bars")
        .legend(Legend::default())
        .x_axis_label("Category")
        .y_axis_label("Nobel Laureates Count")
        .x_axis_formatter(category_formatter(counts.categories.clone()))
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .include_y(0.0)
        .allow_drag(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(males);
            plot_ui.bar_chart(females);
        });
}

// ---------------------------------------------------------------------------
// Box plot: age at award per category
// ---------------------------------------------------------------------------

/// Render one box per category plus the all-categories box, with means.
pub fn age_box_plot(ui: &mut Ui, state: &AppState) {
    ui.heading("Age of obtaining the Nobel Prize in each category");

    let groups = &state.charts.age_boxes;
    if groups.len() <= 1 {
        empty_notice(ui);
        return;
    }
    let labels: Vec<String> = groups.iter().map(|(g, _)| g.label.clone()).collect();

    Plot::new("age_box_plot")
        .legend(Legend::default())
        .x_axis_label("Category")
        .y_axis_label("Age of obtaining the Nobel Prize")
        .x_axis_formatter(category_formatter(labels))
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .allow_drag(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (i, (group, stats)) in groups.iter().enumerate() {
                let Some(stats) = stats else { continue };
                let x = i as f64;
                let color = state.group_colors.color_for(&group.label);

                let elem = BoxElem::new(
                    x,
                    BoxSpread::new(
                        stats.lower_whisker,
                        stats.q1,
                        stats.median,
                        stats.q3,
                        stats.upper_whisker,
                    ),
                )
                .name(&group.label)
                .box_width(0.5)
                .whisker_width(0.25)
                .fill(color.gamma_multiply(0.4))
                .stroke(Stroke::new(1.5, color));
                plot_ui.box_plot(BoxPlot::new(vec![elem]).name(&group.label));

                plot_ui.points(
                    Points::new(PlotPoints::new(vec![[x, stats.mean]]))
                        .shape(MarkerShape::Diamond)
                        .radius(5.0)
                        .color(Color32::DARK_GREEN)
                        .name("Mean"),
                );

                if !stats.outliers.is_empty() {
                    let outliers = stats.outliers.iter().map(|&v| [x, v]).collect();
                    plot_ui.points(
                        Points::new(PlotPoints::new(outliers))
                            .shape(MarkerShape::Circle)
                            .filled(false)
                            .radius(3.0)
                            .color(color),
                    );
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Axis formatter that names integer positions after `labels`.
fn category_formatter(
    labels: Vec<String>,
) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String + 'static {
    move |mark: GridMark, _range: &RangeInclusive<f64>| {
        let pos = mark.value.round();
        if (mark.value - pos).abs() > 1e-6 || pos < 0.0 {
            return String::new();
        }
        labels.get(pos as usize).cloned().unwrap_or_default()
    }
}

fn empty_notice(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label("No laureates to chart.");
    });
}
