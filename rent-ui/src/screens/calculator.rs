//! The estimator form and the live estimate panel.

use egui::{Color32, RichText, Ui};

use rent_core::{FieldFormat, HeatingSource, Locale};

use crate::app::EstimatorApp;
use crate::i18n::Catalog;
use crate::models::{AmountField, FieldError};
use crate::screens::{HelpDialog, HelpTopic};
use crate::widgets::amount_edit;

pub struct CalculatorScreen;

impl CalculatorScreen {
    /// Consistent section width across the form
    const GROUP_WIDTH: f32 = 560.0;
    /// Label column width for alignment
    const LABEL_WIDTH: f32 = 280.0;
    /// Numeric input field width
    const INPUT_WIDTH: f32 = 120.0;

    pub fn show(app: &mut EstimatorApp, ui: &mut Ui) {
        let catalog = app.catalog();
        let locale = app.locale();
        let group_width = ui.available_width().min(Self::GROUP_WIDTH);

        // Dwelling section
        let rent_error = app.form.rent_error();
        let dwellings_error = app.form.dwellings_error();
        Self::section(ui, group_width, catalog.section_dwelling, |ui| {
            Self::field_grid(ui, "dwelling_grid", |ui| {
                AmountRow {
                    id_salt: "rent",
                    label: catalog.rent_label,
                    help: Some(catalog.rent_help),
                    prefix: "$",
                    hint: "0.00",
                    format: FieldFormat::Amount,
                    required: true,
                    error: rent_error,
                    field: &mut app.form.rent,
                }
                .show(ui, catalog, locale);

                AmountRow {
                    id_salt: "dwellings",
                    label: catalog.dwellings_label,
                    help: Some(catalog.dwellings_help),
                    prefix: "",
                    hint: "",
                    format: FieldFormat::Integer,
                    required: true,
                    error: dwellings_error,
                    field: &mut app.form.dwellings,
                }
                .show(ui, catalog, locale);
            });

            ui.add_space(5.0);
            Self::heating_row(app, ui, catalog);
        });

        ui.add_space(10.0);

        // Municipal tax section
        let municipal_current_error = app.form.municipal_current_error();
        let municipal_previous_error = app.form.municipal_previous_error();
        Self::section(ui, group_width, catalog.section_municipal, |ui| {
            if ui.button(format!("?  {}", catalog.help_find)).clicked() {
                app.help = Some(HelpDialog::new(HelpTopic::MunicipalTax));
            }
            ui.add_space(5.0);

            Self::field_grid(ui, "municipal_grid", |ui| {
                AmountRow {
                    id_salt: "municipal_current",
                    label: catalog.municipal_current_label,
                    help: None,
                    prefix: "$",
                    hint: "0.00",
                    format: FieldFormat::Amount,
                    required: true,
                    error: municipal_current_error,
                    field: &mut app.form.municipal_current,
                }
                .show(ui, catalog, locale);

                AmountRow {
                    id_salt: "municipal_previous",
                    label: catalog.municipal_previous_label,
                    help: None,
                    prefix: "$",
                    hint: "0.00",
                    format: FieldFormat::Amount,
                    required: true,
                    error: municipal_previous_error,
                    field: &mut app.form.municipal_previous,
                }
                .show(ui, catalog, locale);
            });
        });

        ui.add_space(10.0);

        // School tax section
        let school_current_error = app.form.school_current_error();
        let school_previous_error = app.form.school_previous_error();
        Self::section(ui, group_width, catalog.section_school, |ui| {
            if ui.button(format!("?  {}", catalog.help_find)).clicked() {
                app.help = Some(HelpDialog::new(HelpTopic::SchoolTax));
            }
            ui.add_space(5.0);

            Self::field_grid(ui, "school_grid", |ui| {
                AmountRow {
                    id_salt: "school_current",
                    label: catalog.school_current_label,
                    help: None,
                    prefix: "$",
                    hint: "0.00",
                    format: FieldFormat::Amount,
                    required: true,
                    error: school_current_error,
                    field: &mut app.form.school_current,
                }
                .show(ui, catalog, locale);

                AmountRow {
                    id_salt: "school_previous",
                    label: catalog.school_previous_label,
                    help: None,
                    prefix: "$",
                    hint: "0.00",
                    format: FieldFormat::Amount,
                    required: true,
                    error: school_previous_error,
                    field: &mut app.form.school_previous,
                }
                .show(ui, catalog, locale);
            });
        });

        ui.add_space(10.0);

        // Major work section
        let work_building_error = app.form.work_building_error();
        let work_dwelling_error = app.form.work_dwelling_error();
        Self::section(ui, group_width, catalog.section_work, |ui| {
            Self::field_grid(ui, "work_grid", |ui| {
                AmountRow {
                    id_salt: "work_building",
                    label: catalog.work_building_label,
                    help: Some(catalog.work_building_help),
                    prefix: "$",
                    hint: "0.00",
                    format: FieldFormat::Amount,
                    required: false,
                    error: work_building_error,
                    field: &mut app.form.work_building,
                }
                .show(ui, catalog, locale);

                AmountRow {
                    id_salt: "work_dwelling",
                    label: catalog.work_dwelling_label,
                    help: Some(catalog.work_dwelling_help),
                    prefix: "$",
                    hint: "0.00",
                    format: FieldFormat::Amount,
                    required: false,
                    error: work_dwelling_error,
                    field: &mut app.form.work_dwelling,
                }
                .show(ui, catalog, locale);
            });
        });

        ui.add_space(20.0);

        // Estimate panel, recomputed from scratch every frame.
        let outcome = app.outcome();
        ui.heading(catalog.estimate_heading);
        ui.add_space(5.0);
        Self::section(ui, group_width, "", |ui| {
            ui.vertical_centered(|ui| match outcome.estimate() {
                Some(estimate) => {
                    let total = estimate.formatted_total(locale);
                    let amount = match locale {
                        Locale::En => format!("${total}"),
                        Locale::Fr => format!("{total} $"),
                    };
                    ui.label(RichText::new(amount).size(40.0).strong());
                    if estimate.is_non_positive() {
                        ui.add_space(5.0);
                        ui.colored_label(Color32::RED, catalog.non_positive_notice);
                    }
                }
                None => {
                    ui.label(RichText::new(catalog.need_finish).size(16.0));
                }
            });
        });

        ui.add_space(20.0);
    }

    fn heating_row(app: &mut EstimatorApp, ui: &mut Ui, catalog: &'static Catalog) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{} *", catalog.heat_label)).strong())
                .on_hover_text(catalog.heat_help);

            let before = app.form.heating;
            egui::ComboBox::from_id_salt("heating")
                .width(300.0)
                .selected_text(match app.form.heating {
                    Some(source) => catalog.heating_label(source),
                    None => catalog.heat_unselected,
                })
                .show_ui(ui, |ui| {
                    for source in HeatingSource::ALL {
                        ui.selectable_value(
                            &mut app.form.heating,
                            Some(source),
                            catalog.heating_label(source),
                        );
                    }
                });
            if app.form.heating != before {
                app.form.heating_touched = true;
            }
        });

        if app.form.heating_touched {
            if let Some(error) = app.form.heating_error() {
                ui.colored_label(Color32::RED, catalog.field_error_message(error));
            }
        }
    }

    fn section(ui: &mut Ui, width: f32, heading: &str, add_contents: impl FnOnce(&mut Ui)) {
        ui.allocate_ui(egui::vec2(width, 0.0), |ui| {
            ui.group(|ui| {
                ui.set_min_width(width - 20.0);
                if !heading.is_empty() {
                    ui.heading(heading);
                    ui.add_space(5.0);
                }
                add_contents(ui);
            });
        });
    }

    /// A grid for aligned field rows: label, prefix, input, error.
    fn field_grid(ui: &mut Ui, id: &str, add_contents: impl FnOnce(&mut Ui)) {
        egui::Grid::new(id)
            .num_columns(4)
            .spacing([10.0, 8.0])
            .min_col_width(0.0)
            .show(ui, add_contents);
    }
}

/// One form row: label, currency prefix, input widget, inline error.
struct AmountRow<'a> {
    id_salt: &'static str,
    label: &'static str,
    help: Option<&'static str>,
    prefix: &'static str,
    hint: &'static str,
    format: FieldFormat,
    required: bool,
    error: Option<FieldError>,
    field: &'a mut AmountField,
}

impl AmountRow<'_> {
    fn show(self, ui: &mut Ui, catalog: &'static Catalog, locale: Locale) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.set_min_width(CalculatorScreen::LABEL_WIDTH);
            let text = if self.required {
                RichText::new(format!("{} *", self.label)).strong()
            } else {
                RichText::new(self.label)
            };
            let label = ui.label(text);
            if let Some(help) = self.help {
                label.on_hover_text(help);
            }
        });

        ui.label(self.prefix);

        let show_error = self.field.touched && self.error.is_some();
        amount_edit(
            ui,
            self.id_salt,
            self.field,
            self.format,
            locale,
            self.hint,
            CalculatorScreen::INPUT_WIDTH,
            show_error,
        );

        if show_error {
            if let Some(error) = self.error {
                ui.colored_label(
                    Color32::RED,
                    RichText::new(catalog.field_error_message(error)).small(),
                );
            }
        } else {
            ui.label("");
        }

        ui.end_row();
    }
}
