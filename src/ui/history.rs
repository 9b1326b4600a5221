// src/ui/history.rs
use eframe::egui::{self, Frame, Grid, Margin, RichText, Rounding, Stroke};

use crate::state::history::HISTORY_EMPTY_MESSAGE;
use crate::state::{AppState, RequestState};
use crate::view::theme::tokens;

pub fn show_history_view(ui: &mut egui::Ui, state: &mut AppState) {
    // One fetch per page entry; re-renders while pending are no-ops.
    let client = state.client.clone();
    state.history.activate(&client);

    let tokens = *tokens(state.theme);

    ui.add_space(8.0);
    ui.label(
        RichText::new("UPLOAD HISTORY")
            .color(tokens.accent_primary)
            .size(26.0)
            .strong(),
    );
    ui.label(
        RichText::new("Recent Datasets (Last 5)")
            .color(tokens.text_secondary)
            .size(15.0),
    );
    ui.add_space(16.0);

    Frame::none()
        .fill(tokens.card_bg)
        .stroke(Stroke::new(1.0, tokens.card_border))
        .rounding(Rounding::same(12.0))
        .inner_margin(Margin::same(24.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            match &state.history.lifecycle {
                RequestState::Idle | RequestState::Pending => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(24.0);
                        ui.spinner();
                        ui.label(
                            RichText::new("Loading history...")
                                .color(tokens.text_secondary)
                                .size(15.0),
                        );
                        ui.add_space(24.0);
                    });
                }
                RequestState::Failed(message) => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(24.0);
                        ui.label(
                            RichText::new(message).color(tokens.accent_secondary).size(15.0),
                        );
                        ui.add_space(24.0);
                    });
                }
                RequestState::Succeeded(records) if records.is_empty() => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(24.0);
                        ui.label(
                            RichText::new(HISTORY_EMPTY_MESSAGE)
                                .color(tokens.text_secondary)
                                .size(15.0),
                        );
                        ui.add_space(24.0);
                    });
                }
                RequestState::Succeeded(records) => {
                    Grid::new("history_table")
                        .num_columns(3)
                        .spacing([48.0, 10.0])
                        .striped(true)
                        .show(ui, |ui| {
                            for header in ["DATASET NAME", "UPLOAD DATE", "ID"] {
                                ui.label(
                                    RichText::new(header).color(tokens.accent_primary).strong(),
                                );
                            }
                            ui.end_row();

                            for record in records {
                                ui.label(
                                    RichText::new(format!("📄 {}", record.dataset_name))
                                        .color(tokens.text),
                                );
                                ui.label(
                                    RichText::new(record.uploaded_at_local()).color(tokens.text),
                                );
                                ui.label(
                                    RichText::new(format!("#{}", record.id))
                                        .color(tokens.text_secondary),
                                );
                                ui.end_row();
                            }
                        });
                }
            }
        });
}
