// src/ui/home.rs
use eframe::egui::{self, Frame, Margin, RichText, Rounding, Stroke};

use crate::view::theme::{tokens, Theme};

const INTRO: &str = "Welcome to the Chemical Equipment Data Visualizer. This tool is \
designed for chemical engineers and plant operators to analyze equipment performance metrics.";

const FEATURES: [(&str, &str); 4] = [
    (
        "Instant Analytics",
        "Upload your CSV logs and get immediate visualizations of Flowrate, Pressure, and Temperature.",
    ),
    (
        "Outlier Detection",
        "Quickly spot equipment operating outside of nominal parameters.",
    ),
    (
        "Type Distribution",
        "Understand your equipment inventory breakdown (Pumps, Exchangers, Tanks) at a glance.",
    ),
    (
        "History Tracking",
        "Review your 5 most recently uploaded datasets.",
    ),
];

pub fn show_home_view(ui: &mut egui::Ui, theme: Theme) {
    let tokens = tokens(theme);

    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        Frame::none()
            .fill(tokens.card_bg)
            .stroke(Stroke::new(1.0, tokens.card_border))
            .rounding(Rounding::same(16.0))
            .inner_margin(Margin::same(40.0))
            .show(ui, |ui| {
                ui.set_max_width(720.0);

                ui.horizontal(|ui| {
                    ui.add_space((ui.available_width() / 2.0 - 170.0).max(0.0));
                    ui.label(
                        RichText::new("CHEM")
                            .color(tokens.accent_primary)
                            .size(40.0)
                            .strong(),
                    );
                    ui.label(
                        RichText::new("VISUALIZER")
                            .color(tokens.accent_secondary)
                            .size(40.0)
                            .strong(),
                    );
                });
                ui.add_space(24.0);

                ui.label(RichText::new(INTRO).color(tokens.text).size(16.0));
                ui.add_space(20.0);

                ui.label(
                    RichText::new("Why use this tool?")
                        .color(tokens.accent_primary)
                        .size(20.0)
                        .strong(),
                );
                ui.add_space(8.0);
                for (title, description) in FEATURES {
                    ui.label(
                        RichText::new(format!("•  {title}: {description}"))
                            .color(tokens.text)
                            .size(14.0),
                    );
                    ui.add_space(4.0);
                }

                ui.add_space(20.0);
                Frame::none()
                    .stroke(Stroke::new(1.0, tokens.accent_primary))
                    .rounding(Rounding::same(8.0))
                    .inner_margin(Margin::same(14.0))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(
                                "Get Started: select \"Application\" in the sidebar and upload \
                                 your first dataset.",
                            )
                            .color(tokens.text)
                            .size(14.0),
                        );
                    });
            });
    });
}
