//! Application shell: owns the form state, the active policy table, and the
//! currently open help dialog.

use tracing::error;

use rent_core::{EstimateOutcome, Locale, RentIncreaseWorksheet};
use rent_data::PolicyTable;

use crate::i18n::Catalog;
use crate::models::EstimateFormState;
use crate::screens::{CalculatorScreen, HelpDialog};

pub struct EstimatorApp {
    locale: Locale,
    policy_table: PolicyTable,
    policy_year: i32,
    pub form: EstimateFormState,
    pub help: Option<HelpDialog>,
}

impl EstimatorApp {
    pub fn new(locale: Locale, policy_table: PolicyTable, policy_year: i32) -> Self {
        Self {
            locale,
            policy_table,
            policy_year,
            form: EstimateFormState::default(),
            help: None,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn catalog(&self) -> &'static Catalog {
        Catalog::for_locale(self.locale)
    }

    pub fn policy_year(&self) -> i32 {
        self.policy_year
    }

    fn set_locale(&mut self, locale: Locale) {
        if locale != self.locale {
            self.locale = locale;
            // Committed buffers carry the old decimal separator.
            self.form.refresh_displays(locale);
        }
    }

    /// The estimate for the current form under the active rule set,
    /// recomputed from scratch on every call.
    pub fn outcome(&self) -> EstimateOutcome {
        let Some(config) = self.policy_table.get(self.policy_year) else {
            return EstimateOutcome::NotComputable;
        };
        match RentIncreaseWorksheet::new(config) {
            Ok(worksheet) => worksheet.calculate(&self.form.to_estimate_form()),
            Err(err) => {
                error!(%err, year = self.policy_year, "active rule set failed validation");
                EstimateOutcome::NotComputable
            }
        }
    }
}

impl eframe::App for EstimatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let catalog = self.catalog();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(catalog.app_title).strong());
                ui.separator();

                ui.label(catalog.language_label);
                let mut locale = self.locale;
                egui::ComboBox::from_id_salt("language")
                    .width(60.0)
                    .selected_text(locale.as_str().to_uppercase())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut locale, Locale::En, "EN");
                        ui.selectable_value(&mut locale, Locale::Fr, "FR");
                    });
                self.set_locale(locale);

                ui.label(catalog.policy_year_label);
                let years: Vec<i32> = self.policy_table.years().collect();
                egui::ComboBox::from_id_salt("policy_year")
                    .width(70.0)
                    .selected_text(self.policy_year.to_string())
                    .show_ui(ui, |ui| {
                        for year in years {
                            ui.selectable_value(&mut self.policy_year, year, year.to_string());
                        }
                    });

                if ui.button(catalog.clear_label).clicked() {
                    self.form.clear();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                CalculatorScreen::show(self, ui);
            });
        });

        if let Some(dialog) = &mut self.help {
            if !dialog.show(ctx, catalog) {
                self.help = None;
            }
        }
    }
}
