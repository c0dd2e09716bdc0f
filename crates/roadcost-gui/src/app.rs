//! Main application structure with tab navigation

use std::borrow::Cow;

use eframe::egui::{self, Color32, RichText};
use roadcost_app::config::Config;
use roadcost_app::repository::load_catalog;
use roadcost_domain::model::Catalog;

use crate::calculator_panel::CalculatorPanel;

/// Application tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Calculator,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Calculator => "Calculator",
        }
    }
}

/// Main application state
pub struct RoadCostApp {
    /// Currently selected tab
    current_tab: Tab,
    /// Calculator form state
    calculator_panel: CalculatorPanel,
    /// Application configuration
    config: Config,
    /// Reference tables, or the reason they could not be loaded
    catalog: Result<Cow<'static, Catalog>, String>,
}

impl RoadCostApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        let config = Config::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        });
        let catalog = load_catalog(&config).map_err(|e| e.to_string());

        Self {
            current_tab: Tab::default(),
            calculator_panel: CalculatorPanel::new(),
            config,
            catalog,
        }
    }

    /// Render the tab bar
    fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            for tab in [Tab::Home, Tab::Calculator] {
                let selected = self.current_tab == tab;
                if ui.selectable_label(selected, tab.label()).clicked() {
                    self.current_tab = tab;
                }
                ui.add_space(8.0);
            }
        });
    }

    fn render_home(&mut self, ui: &mut egui::Ui) {
        ui.add_space(24.0);
        ui.heading(RichText::new("Plan Your Journey.").size(32.0));
        ui.heading(
            RichText::new("Calculate Your Costs.")
                .size(32.0)
                .color(Color32::from_rgb(96, 165, 250)),
        );
        ui.add_space(12.0);
        ui.label(
            "Estimate the fuel cost of a road trip from your vehicle's mileage, \
             the route distance and the current fuel price.",
        );
        ui.add_space(16.0);
        if ui.button("Start Calculating").clicked() {
            self.current_tab = Tab::Calculator;
        }
    }
}

impl eframe::App for RoadCostApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel with tab bar
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_tab_bar(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.current_tab {
            Tab::Home => self.render_home(ui),
            Tab::Calculator => match self.catalog {
                Ok(ref catalog) => {
                    self.calculator_panel.ui(ui, catalog, &self.config.currency);
                }
                Err(ref reason) => {
                    ui.label(
                        RichText::new(format!("Reference data unavailable: {}", reason))
                            .color(Color32::from_rgb(220, 100, 100)),
                    );
                }
            },
        });
    }
}
