//! Static English and French string catalogs.
//!
//! Every user-visible string lives here, one field per string, so a missing
//! translation is a compile error rather than a runtime fallback.

use rent_core::{HeatingSource, Locale};

use crate::models::FieldError;

/// Montreal property assessment lookup, referenced from the municipal tax
/// help dialog. Same address in both languages.
pub const MUNICIPAL_LOOKUP_URL: &str =
    "https://servicesenligne2.ville.montreal.qc.ca/sel/evalweb/";

/// School tax lookup for the island of Montreal.
pub const SCHOOL_LOOKUP_URL: &str = "https://tfp.cgtsim.qc.ca/asp/tfp.aspx";

/// One language's worth of interface text.
#[derive(Debug)]
pub struct Catalog {
    pub app_title: &'static str,
    pub language_label: &'static str,
    pub policy_year_label: &'static str,
    pub clear_label: &'static str,

    pub section_dwelling: &'static str,
    pub section_municipal: &'static str,
    pub section_school: &'static str,
    pub section_work: &'static str,

    pub rent_label: &'static str,
    pub rent_help: &'static str,
    pub dwellings_label: &'static str,
    pub dwellings_help: &'static str,
    pub heat_label: &'static str,
    pub heat_help: &'static str,
    pub heat_unselected: &'static str,
    pub heat_tenant: &'static str,
    pub heat_electricity: &'static str,
    pub heat_gas: &'static str,
    pub heat_oil: &'static str,

    pub municipal_current_label: &'static str,
    pub municipal_previous_label: &'static str,
    pub school_current_label: &'static str,
    pub school_previous_label: &'static str,

    pub work_building_label: &'static str,
    pub work_building_help: &'static str,
    pub work_dwelling_label: &'static str,
    pub work_dwelling_help: &'static str,

    pub help_find: &'static str,
    pub estimate_heading: &'static str,
    pub need_finish: &'static str,
    pub non_positive_notice: &'static str,

    pub err_required: &'static str,
    pub err_amount: &'static str,
    pub err_range: &'static str,
    pub err_whole_number: &'static str,
    pub err_selection: &'static str,

    pub back: &'static str,
    pub next: &'static str,
    pub done: &'static str,

    pub municipal_help_title: &'static str,
    pub municipal_help_steps: &'static [&'static str],
    pub school_help_title: &'static str,
    pub school_help_steps: &'static [&'static str],
}

impl Catalog {
    pub fn for_locale(locale: Locale) -> &'static Catalog {
        match locale {
            Locale::En => &EN,
            Locale::Fr => &FR,
        }
    }

    pub fn heating_label(&self, source: HeatingSource) -> &'static str {
        match source {
            HeatingSource::Tenant => self.heat_tenant,
            HeatingSource::Electricity => self.heat_electricity,
            HeatingSource::Gas => self.heat_gas,
            HeatingSource::Oil => self.heat_oil,
        }
    }

    pub fn field_error_message(&self, error: FieldError) -> &'static str {
        match error {
            FieldError::Required => self.err_required,
            FieldError::InvalidAmount => self.err_amount,
            FieldError::OutOfRange => self.err_range,
            FieldError::NotWholeNumber => self.err_whole_number,
            FieldError::MissingSelection => self.err_selection,
        }
    }
}

static EN: Catalog = Catalog {
    app_title: "Rent Increase Estimator",
    language_label: "Language",
    policy_year_label: "Policy year",
    clear_label: "Clear form",

    section_dwelling: "Your dwelling",
    section_municipal: "Municipal taxes",
    section_school: "School taxes",
    section_work: "Major work",

    rent_label: "Monthly rent",
    rent_help: "The rent you currently pay each month, before any increase.",
    dwellings_label: "Dwellings in the building",
    dwellings_help: "Count every dwelling, occupied or not, including yours.",
    heat_label: "Who pays for heating?",
    heat_help: "Pick the arrangement written into your lease.",
    heat_unselected: "Select an option",
    heat_tenant: "I pay for heating myself",
    heat_electricity: "My landlord pays for electric heating",
    heat_gas: "My landlord pays for gas heating",
    heat_oil: "My landlord pays for oil heating",

    municipal_current_label: "Municipal taxes, current year",
    municipal_previous_label: "Municipal taxes, previous year",
    school_current_label: "School taxes, current year",
    school_previous_label: "School taxes, previous year",

    work_building_label: "Work done on the whole building",
    work_building_help: "Total cost of major work benefiting every dwelling.",
    work_dwelling_label: "Work done on your dwelling only",
    work_dwelling_help: "Cost of major work benefiting only your dwelling.",

    help_find: "Help me find this",
    estimate_heading: "Estimate",
    need_finish: "Finish filling out the form to see your estimate",
    non_positive_notice: "Your rent should not increase.",

    err_required: "This field is required",
    err_amount: "Please enter a valid amount",
    err_range: "Amount is out of range",
    err_whole_number: "Please enter a whole number",
    err_selection: "Please select an option",

    back: "Back",
    next: "Next",
    done: "Done",

    municipal_help_title: "Finding your municipal taxes",
    municipal_help_steps: &[
        "Look up the building on the city's property assessment site, or ask your landlord for the municipal tax bill.",
        "Search for the building's address. Make sure the listed unit count matches your building.",
        "Open the most recent tax account for the building.",
        "The amount for the whole building appears under \"total of the account\" for the current year.",
        "Repeat for the previous year's account to get both amounts.",
    ],
    school_help_title: "Finding the school taxes",
    school_help_steps: &[
        "Look up the building on the school tax management site, or ask your landlord for the school tax bill.",
        "Search by the building's address.",
        "Pick the entry whose owner and address match your building.",
        "Open the detailed account. If several lots are listed, use the one for your building.",
        "The current year's amount is the \"total invoiced\" line.",
        "The previous year's amount appears in the account history on the same page.",
    ],
};

static FR: Catalog = Catalog {
    app_title: "Estimateur de hausse de loyer",
    language_label: "Langue",
    policy_year_label: "Année de référence",
    clear_label: "Effacer le formulaire",

    section_dwelling: "Votre logement",
    section_municipal: "Taxes municipales",
    section_school: "Taxes scolaires",
    section_work: "Travaux majeurs",

    rent_label: "Loyer mensuel",
    rent_help: "Le loyer que vous payez actuellement chaque mois, avant toute hausse.",
    dwellings_label: "Logements dans l'immeuble",
    dwellings_help: "Comptez chaque logement, occupé ou non, y compris le vôtre.",
    heat_label: "Qui paie le chauffage ?",
    heat_help: "Choisissez l'entente inscrite à votre bail.",
    heat_unselected: "Choisissez une option",
    heat_tenant: "Je paie moi-même le chauffage",
    heat_electricity: "Mon propriétaire paie le chauffage électrique",
    heat_gas: "Mon propriétaire paie le chauffage au gaz",
    heat_oil: "Mon propriétaire paie le chauffage au mazout",

    municipal_current_label: "Taxes municipales, année courante",
    municipal_previous_label: "Taxes municipales, année précédente",
    school_current_label: "Taxes scolaires, année courante",
    school_previous_label: "Taxes scolaires, année précédente",

    work_building_label: "Travaux sur l'ensemble de l'immeuble",
    work_building_help: "Coût total des travaux majeurs profitant à tous les logements.",
    work_dwelling_label: "Travaux sur votre logement seulement",
    work_dwelling_help: "Coût des travaux majeurs profitant uniquement à votre logement.",

    help_find: "Aidez-moi à trouver ceci",
    estimate_heading: "Estimation",
    need_finish: "Remplissez le formulaire pour voir votre estimation",
    non_positive_notice: "Votre loyer ne devrait pas augmenter.",

    err_required: "Ce champ est requis",
    err_amount: "Veuillez entrer un montant valide",
    err_range: "Montant hors limites",
    err_whole_number: "Veuillez entrer un nombre entier",
    err_selection: "Veuillez choisir une option",

    back: "Retour",
    next: "Suivant",
    done: "Terminé",

    municipal_help_title: "Trouver vos taxes municipales",
    municipal_help_steps: &[
        "Consultez le rôle d'évaluation foncière de la ville, ou demandez le compte de taxes municipales à votre propriétaire.",
        "Cherchez l'adresse de l'immeuble. Vérifiez que le nombre de logements indiqué correspond à votre immeuble.",
        "Ouvrez le compte de taxes le plus récent de l'immeuble.",
        "Le montant pour tout l'immeuble figure sous « total du compte » pour l'année courante.",
        "Répétez avec le compte de l'année précédente pour obtenir les deux montants.",
    ],
    school_help_title: "Trouver les taxes scolaires",
    school_help_steps: &[
        "Consultez le site de gestion de la taxe scolaire, ou demandez le compte de taxes scolaires à votre propriétaire.",
        "Cherchez par l'adresse de l'immeuble.",
        "Choisissez l'inscription dont le propriétaire et l'adresse correspondent à votre immeuble.",
        "Ouvrez le compte détaillé. Si plusieurs lots sont listés, utilisez celui de votre immeuble.",
        "Le montant de l'année courante est la ligne « total facturé ».",
        "Le montant de l'année précédente figure dans l'historique du compte sur la même page.",
    ],
};

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalogs_differ_per_locale() {
        let en = Catalog::for_locale(Locale::En);
        let fr = Catalog::for_locale(Locale::Fr);

        assert_ne!(en.rent_label, fr.rent_label);
        assert_ne!(en.need_finish, fr.need_finish);
    }

    #[test]
    fn every_heating_source_has_a_label() {
        for locale in [Locale::En, Locale::Fr] {
            let catalog = Catalog::for_locale(locale);
            for source in HeatingSource::ALL {
                assert!(!catalog.heating_label(source).is_empty());
            }
        }
    }

    #[test]
    fn help_slide_decks_are_non_empty() {
        for locale in [Locale::En, Locale::Fr] {
            let catalog = Catalog::for_locale(locale);
            assert_eq!(catalog.municipal_help_steps.len(), 5);
            assert_eq!(catalog.school_help_steps.len(), 6);
        }
    }
}
