//! Step-by-step help for finding the tax amounts on the official sites.

use egui::Context;

use crate::i18n::{Catalog, MUNICIPAL_LOOKUP_URL, SCHOOL_LOOKUP_URL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    MunicipalTax,
    SchoolTax,
}

/// A small slide deck shown in a window: one step at a time, with
/// back/next buttons and clickable dots.
#[derive(Debug)]
pub struct HelpDialog {
    topic: HelpTopic,
    slide: usize,
}

impl HelpDialog {
    pub fn new(topic: HelpTopic) -> Self {
        Self { topic, slide: 0 }
    }

    /// Renders the dialog. Returns `false` once the user has dismissed it.
    pub fn show(&mut self, ctx: &Context, catalog: &Catalog) -> bool {
        let (title, steps, url) = match self.topic {
            HelpTopic::MunicipalTax => (
                catalog.municipal_help_title,
                catalog.municipal_help_steps,
                MUNICIPAL_LOOKUP_URL,
            ),
            HelpTopic::SchoolTax => (
                catalog.school_help_title,
                catalog.school_help_steps,
                SCHOOL_LOOKUP_URL,
            ),
        };
        let last = steps.len() - 1;

        let mut open = true;
        let mut keep = true;

        egui::Window::new(title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.label(steps[self.slide]);
                if self.slide == 0 {
                    ui.add_space(4.0);
                    ui.hyperlink(url);
                }
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button(catalog.back).clicked() {
                        if self.slide > 0 {
                            self.slide -= 1;
                        } else {
                            keep = false;
                        }
                    }

                    for i in 0..steps.len() {
                        if ui.selectable_label(self.slide == i, "•").clicked() {
                            self.slide = i;
                        }
                    }

                    let forward = if self.slide < last {
                        catalog.next
                    } else {
                        catalog.done
                    };
                    if ui.button(forward).clicked() {
                        if self.slide < last {
                            self.slide += 1;
                        } else {
                            keep = false;
                        }
                    }
                });
            });

        open && keep
    }
}
