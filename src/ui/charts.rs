// src/ui/charts.rs
use std::f32::consts::TAU;

use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense, Shape, Stroke, Vec2};
use egui_plot::{Bar, BarChart, Plot, PlotPoint, Text};

use crate::view::theme::ThemeTokens;
use crate::view::{BarChartData, PieChartData, BAR_CHART_TITLE, PIE_CHART_TITLE};

pub fn show_bar_chart(ui: &mut egui::Ui, data: &BarChartData, tokens: &ThemeTokens) {
    ui.label(
        RichText::new(BAR_CHART_TITLE)
            .color(tokens.accent_primary)
            .size(18.0)
            .strong(),
    );
    ui.add_space(8.0);

    let bars: Vec<Bar> = data
        .categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            Bar::new(i as f64, category.value)
                .name(category.label)
                .width(0.6)
                .fill(category.color)
        })
        .collect();

    let max_value = data
        .categories
        .iter()
        .map(|c| c.value)
        .fold(0.0_f64, f64::max);
    let label_y = -max_value.max(1.0) * 0.07;

    Plot::new("parameter_averages")
        .height(300.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_background(false)
        .show_axes([false, true])
        .include_y(label_y * 2.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));

            // Category names under the bars; per-bar value overlays stay off.
            for (i, category) in data.categories.iter().enumerate() {
                plot_ui.text(Text::new(
                    PlotPoint::new(i as f64, label_y),
                    RichText::new(category.label).color(tokens.text).size(14.0),
                ));
                if data.show_value_labels {
                    plot_ui.text(Text::new(
                        PlotPoint::new(i as f64, category.value - label_y),
                        RichText::new(format!("{}", category.value)).color(tokens.text),
                    ));
                }
            }
        });
}

pub fn show_pie_chart(ui: &mut egui::Ui, data: &PieChartData, tokens: &ThemeTokens) {
    ui.label(
        RichText::new(PIE_CHART_TITLE)
            .color(tokens.accent_secondary)
            .size(18.0)
            .strong(),
    );
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        draw_pie(ui, data, tokens);
        ui.add_space(16.0);
        ui.vertical(|ui| {
            for slice in &data.slices {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, slice.color);
                    ui.label(RichText::new(&slice.label).color(tokens.text).size(14.0));
                });
            }
        });
    });
}

fn draw_pie(ui: &mut egui::Ui, data: &PieChartData, tokens: &ThemeTokens) {
    let (response, painter) = ui.allocate_painter(Vec2::splat(300.0), Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let radius = rect.width().min(rect.height()) * 0.45;

    // Start at 12 o'clock, sweep clockwise.
    let mut angle = -TAU / 4.0;
    for slice in &data.slices {
        let sweep = (slice.fraction as f32) * TAU;
        if sweep <= 0.0 {
            continue;
        }

        let steps = ((sweep / TAU) * 96.0).ceil().max(2.0) as usize;
        let step = sweep / steps as f32;
        for i in 0..steps {
            let a0 = angle + step * i as f32;
            let a1 = a0 + step;
            painter.add(Shape::convex_polygon(
                vec![
                    center,
                    center + Vec2::angled(a0) * radius,
                    center + Vec2::angled(a1) * radius,
                ],
                slice.color,
                Stroke::NONE,
            ));
        }

        let mid = angle + sweep / 2.0;
        painter.text(
            center + Vec2::angled(mid) * radius * 0.6,
            Align2::CENTER_CENTER,
            &slice.percent_label,
            FontId::proportional(14.0),
            Color32::WHITE,
        );
        angle += sweep;
    }

    // Zero-total distributions draw nothing above; keep an outline so the
    // chart area reads as an empty pie rather than a blank region.
    painter.circle_stroke(center, radius, Stroke::new(1.0, tokens.card_border));
}
