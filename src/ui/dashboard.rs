// src/ui/dashboard.rs
use eframe::egui::{self, Button, Frame, Grid, Margin, RichText, Rounding, Stroke};
use rfd::FileDialog;

use crate::state::AppState;
use crate::view::theme::{tokens, ThemeTokens};
use crate::view::{self, BreakdownRow, MetricCard, BREAKDOWN_TITLE, SUMMARY_TITLE};

pub fn show_dashboard_view(ui: &mut egui::Ui, state: &mut AppState) {
    let tokens = *tokens(state.theme);

    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(
            RichText::new("DATA UPLOAD & ANALYSIS")
                .color(tokens.text_secondary)
                .size(20.0),
        );
        ui.add_space(16.0);
        show_upload_card(ui, state, &tokens);
    });

    ui.add_space(24.0);

    if let Some(result) = state.upload.lifecycle.succeeded() {
        let cards = view::summary_cards(result);
        let rows = view::breakdown_rows(result);
        let bar = view::bar_chart(result);
        let pie = view::pie_chart(result);
        let total = result.total_equipment_count;

        ui.label(
            RichText::new(SUMMARY_TITLE)
                .color(tokens.accent_primary)
                .size(22.0)
                .strong(),
        );
        ui.add_space(12.0);
        show_summary_cards(ui, &cards, &tokens);
        ui.add_space(24.0);
        show_breakdown_table(ui, &rows, total, &tokens);
        ui.add_space(24.0);

        ui.columns(2, |columns| {
            card_frame(&tokens).show(&mut columns[0], |ui| {
                super::charts::show_bar_chart(ui, &bar, &tokens);
            });
            card_frame(&tokens).show(&mut columns[1], |ui| {
                super::charts::show_pie_chart(ui, &pie, &tokens);
            });
        });
    }
}

fn show_upload_card(ui: &mut egui::Ui, state: &mut AppState, tokens: &ThemeTokens) {
    card_frame(tokens).show(ui, |ui| {
        ui.set_width(520.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("DATA INGESTION")
                    .color(tokens.accent_primary)
                    .size(17.0)
                    .strong(),
            );
            ui.add_space(16.0);

            let picker_label = state
                .upload
                .selected_file
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|name| format!("📂 {}", name.to_string_lossy()))
                .unwrap_or_else(|| "📂 Select CSV Dataset".to_string());

            if ui
                .add_sized([480.0, 56.0], Button::new(RichText::new(picker_label).size(15.0)))
                .clicked()
            {
                // Advisory filter only; any picked file may be submitted.
                if let Some(path) = FileDialog::new()
                    .add_filter("CSV files", &["csv"])
                    .set_title("Select CSV Dataset")
                    .pick_file()
                {
                    state.upload.select_file(path);
                }
            }

            ui.add_space(12.0);

            let pending = state.upload.lifecycle.is_pending();
            let submit_label = if pending { "PROCESSING..." } else { "INITIALIZE ANALYTICS" };
            let submit = ui.add_enabled(
                !pending,
                Button::new(RichText::new(submit_label).size(15.0).strong())
                    .min_size([480.0, 44.0].into()),
            );
            if submit.clicked() {
                state.upload.submit(&state.client);
            }
            if pending {
                ui.add_space(8.0);
                ui.spinner();
            }

            if let Some(message) = state.upload.error_message() {
                ui.add_space(12.0);
                ui.label(RichText::new(message).color(tokens.error).size(14.0));
            }
        });
    });
}

fn show_summary_cards(ui: &mut egui::Ui, cards: &[MetricCard; 4], tokens: &ThemeTokens) {
    ui.columns(4, |columns| {
        for (column, card) in columns.iter_mut().zip(cards) {
            card_frame(tokens).show(column, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(card.label.to_uppercase())
                            .color(tokens.text_secondary)
                            .size(13.0),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(&card.value)
                            .color(tokens.accent_secondary)
                            .size(24.0)
                            .strong(),
                    );
                    if let Some(unit) = card.unit {
                        ui.label(RichText::new(unit).color(tokens.text_secondary).size(13.0));
                    }
                });
            });
        }
    });
}

fn show_breakdown_table(ui: &mut egui::Ui, rows: &[BreakdownRow], total: u64, tokens: &ThemeTokens) {
    card_frame(tokens).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(BREAKDOWN_TITLE)
                    .color(tokens.accent_primary)
                    .size(16.0)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{} ITEMS", total))
                        .color(tokens.accent_secondary)
                        .size(13.0),
                );
            });
        });
        ui.add_space(8.0);

        Grid::new("asset_breakdown")
            .num_columns(3)
            .spacing([32.0, 8.0])
            .striped(true)
            .show(ui, |ui| {
                for header in ["EQUIPMENT TYPE", "COUNT", "STATUS"] {
                    ui.label(RichText::new(header).color(tokens.accent_primary).strong());
                }
                ui.end_row();

                for row in rows {
                    ui.label(RichText::new(&row.equipment_type).color(tokens.text));
                    ui.label(RichText::new(row.count.to_string()).color(tokens.text));
                    ui.label(RichText::new(row.status).color(tokens.accent_primary));
                    ui.end_row();
                }
            });
    });
}

fn card_frame(tokens: &ThemeTokens) -> Frame {
    Frame::none()
        .fill(tokens.card_bg)
        .stroke(Stroke::new(1.0, tokens.card_border))
        .rounding(Rounding::same(12.0))
        .inner_margin(Margin::same(20.0))
}
