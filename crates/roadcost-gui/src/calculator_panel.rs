//! Fuel cost calculator panel

use std::collections::BTreeSet;

use eframe::egui::{self, Color32, RichText, Ui};
use roadcost_domain::model::Catalog;
use roadcost_domain::service::{TripForm, TripSummary};

const ACCENT_BLUE: Color32 = Color32::from_rgb(96, 165, 250);
const ACCENT_GREEN: Color32 = Color32::from_rgb(74, 222, 128);
const ERROR_RED: Color32 = Color32::from_rgb(248, 113, 113);

/// Panel wrapping the trip form
#[derive(Default)]
pub struct CalculatorPanel {
    form: TripForm,
}

/// City selector; returns the new selection when the user changed it
fn city_combo(
    ui: &mut Ui,
    id: &str,
    placeholder: &str,
    current: Option<&str>,
    cities: &BTreeSet<&str>,
) -> Option<String> {
    let mut selected = current.unwrap_or_default().to_string();
    egui::ComboBox::from_id_salt(id)
        .width(ui.available_width())
        .selected_text(current.unwrap_or(placeholder))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, String::new(), placeholder);
            for city in cities {
                ui.selectable_value(&mut selected, city.to_string(), *city);
            }
        });

    (selected != current.unwrap_or_default()).then_some(selected)
}

impl CalculatorPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ui(&mut self, ui: &mut Ui, catalog: &Catalog, currency: &str) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Fuel Cost Calculator");
            ui.label(RichText::new("Plan your road trips like a pro!").weak());
            ui.add_space(12.0);

            self.render_vehicle_selector(ui, catalog);
            self.render_vehicle_details(ui, catalog);
            ui.add_space(8.0);

            let cities = catalog.list_cities();
            ui.label("From Location");
            if let Some(city) = city_combo(
                ui,
                "from_city",
                "Select starting point...",
                self.form.from(),
                &cities,
            ) {
                self.form.select_from(catalog, city);
            }
            ui.label("To Location");
            if let Some(city) = city_combo(
                ui,
                "to_city",
                "Select destination...",
                self.form.to(),
                &cities,
            ) {
                self.form.select_to(catalog, city);
            }
            ui.add_space(8.0);

            ui.label(format!("Fuel Price ({}/litre)", currency));
            let mut price = self.form.price().to_string();
            if ui.text_edit_singleline(&mut price).changed() {
                self.form.set_price(price);
            }
            ui.add_space(8.0);

            if let Some(error) = self.form.error() {
                ui.label(RichText::new(error.to_string()).color(ERROR_RED));
                ui.add_space(4.0);
            }

            if ui.button("Calculate").clicked() {
                if let Err(e) = self.form.calculate(catalog) {
                    log::debug!("Calculation rejected: {:?}", e);
                }
            }

            if let Some(summary) = self.form.result() {
                ui.add_space(12.0);
                render_summary(ui, summary, currency);
            }
        });
    }

    fn render_vehicle_selector(&mut self, ui: &mut Ui, catalog: &Catalog) {
        let current = self.form.vehicle().unwrap_or_default();
        let mut selected = current.to_string();
        let selected_text = self
            .form
            .vehicle_details(catalog)
            .map(|v| v.option_label())
            .unwrap_or_else(|| "Choose a car...".to_string());

        ui.label("Select Your Vehicle");
        egui::ComboBox::from_id_salt("vehicle")
            .width(ui.available_width())
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, String::new(), "Choose a car...");
                for vehicle in catalog.vehicles() {
                    ui.selectable_value(&mut selected, vehicle.name.clone(), vehicle.option_label());
                }
            });

        if selected != current {
            self.form.select_vehicle(catalog, selected);
        }
    }

    fn render_vehicle_details(&self, ui: &mut Ui, catalog: &Catalog) {
        let Some(vehicle) = self.form.vehicle_details(catalog) else {
            return;
        };

        ui.add_space(8.0);
        ui.group(|ui| {
            ui.label(RichText::new("Vehicle Details").strong());
            egui::Grid::new("vehicle_details")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Fuel Type").weak());
                    ui.label(vehicle.fuel.as_str());
                    ui.end_row();

                    ui.label(RichText::new("Mileage").weak());
                    ui.label(format!("{} kmpl", vehicle.mileage_kmpl));
                    ui.end_row();

                    ui.label(RichText::new("Transmission").weak());
                    ui.label(vehicle.transmission.as_str());
                    ui.end_row();

                    ui.label(RichText::new("Engine").weak());
                    ui.label(vehicle.engine.as_str());
                    ui.end_row();
                });
        });
    }
}

fn render_summary(ui: &mut Ui, summary: &TripSummary, currency: &str) {
    ui.group(|ui| {
        ui.label(RichText::new("Trip Summary").strong());
        egui::Grid::new("trip_summary")
            .num_columns(2)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Distance").weak());
                ui.label(format!("{} km", summary.distance_km));
                ui.end_row();

                ui.label(RichText::new("Vehicle Mileage").weak());
                ui.label(format!("{} kmpl", summary.mileage_kmpl));
                ui.end_row();

                ui.label(RichText::new("Fuel Price").weak());
                ui.label(format!("{}{}/L", currency, summary.fuel_price));
                ui.end_row();
            });
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label("Fuel Required");
        ui.label(
            RichText::new(format!("{:.2} litres", summary.fuel_required_l))
                .size(22.0)
                .color(ACCENT_BLUE),
        );
    });
    ui.horizontal(|ui| {
        ui.label("Total Cost");
        ui.label(
            RichText::new(format!("{}{:.2}", currency, summary.total_cost))
                .size(22.0)
                .color(ACCENT_GREEN),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_panel_starts_empty() {
        let panel = CalculatorPanel::new();
        assert_eq!(panel.form.vehicle(), None);
        assert_eq!(panel.form.price(), "");
        assert!(panel.form.result().is_none());
        assert!(panel.form.error().is_none());
    }
}
