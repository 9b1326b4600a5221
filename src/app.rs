// src/app.rs
use std::time::Duration;

use eframe::egui::{self, Frame, Margin, RichText, Visuals};

use crate::settings::Settings;
use crate::state::{AppState, Page};
use crate::view::theme;

pub struct ChemVisualizerApp {
    state: AppState,
}

impl ChemVisualizerApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: AppState::new(settings),
        }
    }

    fn show_sidebar(&mut self, ctx: &egui::Context) {
        let tokens = *theme::tokens(self.state.theme);

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(200.0)
            .frame(Frame::none().fill(tokens.panel_bg).inner_margin(Margin::same(12.0)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("CHEM").color(tokens.accent_primary).size(19.0).strong());
                    ui.label(
                        RichText::new("VISUALIZER").color(tokens.accent_secondary).size(19.0).strong(),
                    );
                });
                ui.add_space(24.0);

                let pages = [
                    (Page::Home, "🏠  Home"),
                    (Page::Application, "📊  Application"),
                    (Page::History, "📜  History"),
                ];
                for (page, label) in pages {
                    let selected = self.state.page == page;
                    let text = RichText::new(label).size(15.0).color(if selected {
                        tokens.accent_primary
                    } else {
                        tokens.text_secondary
                    });
                    if ui.selectable_label(selected, text).clicked() {
                        self.state.set_page(page);
                    }
                    ui.add_space(4.0);
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    ui.add_space(12.0);
                    if ui.button(self.state.theme.toggle_label()).clicked() {
                        self.state.theme = self.state.theme.toggled();
                    }
                    ui.label(
                        RichText::new("ChemVisualizer v1.0").color(tokens.text_secondary).size(11.0),
                    );
                });
            });
    }
}

impl eframe::App for ChemVisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply responses that arrived since the last frame.
        self.state.upload.poll();
        self.state.history.poll();

        ctx.set_visuals(match self.state.theme {
            theme::Theme::Dark => Visuals::dark(),
            theme::Theme::Light => Visuals::light(),
        });

        self.show_sidebar(ctx);

        let tokens = *theme::tokens(self.state.theme);
        egui::CentralPanel::default()
            .frame(Frame::none().fill(tokens.window_bg).inner_margin(Margin::same(24.0)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let state = &mut self.state;
                    match state.page {
                        Page::Home => crate::ui::home::show_home_view(ui, state.theme),
                        Page::Application => crate::ui::dashboard::show_dashboard_view(ui, state),
                        Page::History => crate::ui::history::show_history_view(ui, state),
                    }
                });
            });

        if self.state.upload.lifecycle.is_pending() || self.state.history.lifecycle.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
