//! Static catalogs of selectable audience-filter values.
//!
//! Each `FilterCategory` either has a closed domain (a fixed list shown as
//! toggles in the dashboard) or an open one (free text typed by the user).
//! The lists here are the single source of truth for what a closed category
//! may contain; `FilterStore` refuses anything outside them.

use serde::{Deserialize, Serialize};

use crate::model::filter::FilterValue;

/// The value every enterprise-sized company falls under.
pub const ENTERPRISE_BRACKET: &str = "1000+";

/// Hierarchy value that lowers the expected response rate.
pub const C_LEVEL: &str = "C-Level";

pub const INDUSTRIES: &[&str] = &[
    "SaaS",
    "Fintech",
    "E-commerce",
    "Salud",
    "Educación",
    "Manufactura",
    "Logística",
    "Inmobiliaria",
    "Consultoría",
    "Marketing y Publicidad",
    "Telecomunicaciones",
    "Energía",
];

pub const COMPANY_SIZES: &[&str] = &["1-10", "11-50", "51-200", "201-1000", ENTERPRISE_BRACKET];

pub const HIERARCHY_LEVELS: &[&str] = &[
    C_LEVEL,
    "VP",
    "Director",
    "Gerente",
    "Jefe de Área",
    "Analista",
];

pub const FUNCTIONAL_ROLES: &[&str] = &[
    "Ventas",
    "Marketing",
    "Operaciones",
    "Finanzas",
    "Recursos Humanos",
    "Tecnología",
    "Producto",
    "Legal",
];

pub const COUNTRIES: &[&str] = &[
    "México",
    "Colombia",
    "Chile",
    "Argentina",
    "Perú",
    "España",
    "Estados Unidos",
    "Ecuador",
    "Uruguay",
];

pub const TECH_STACKS: &[&str] = &[
    "Salesforce",
    "HubSpot",
    "SAP",
    "Shopify",
    "AWS",
    "Google Cloud",
    "Microsoft Azure",
    "Zendesk",
    "Pipedrive",
];

pub const RECENT_ACTIVITIES: &[&str] = &[
    "Contratando",
    "Ronda de inversión",
    "Expansión internacional",
    "Nuevo producto",
    "Cambio de liderazgo",
];

pub const INTERACTIONS: &[&str] = &[
    "Visitó el sitio web",
    "Abrió un correo",
    "Descargó contenido",
    "Asistió a un webinar",
];

pub const ANNUAL_REVENUES: &[&str] = &[
    "< $1M",
    "$1M - $10M",
    "$10M - $50M",
    "$50M - $100M",
    "> $100M",
];

/// One facet of audience targeting.
///
/// Serialized in camelCase so persisted and downloaded documents keep the
/// keys the dashboard has always written (`companySizes`, `techStacks`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterCategory {
    Industries,
    CompanySizes,
    HierarchyLevels,
    FunctionalRoles,
    Countries,
    States,
    Cities,
    TechStacks,
    RecentActivities,
    Interactions,
    CustomTags,
    AnnualRevenues,
}

/// Value domain of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Closed(&'static [&'static str]),
    Open,
}

impl FilterCategory {
    /// All categories in the order the dashboard shows them.
    pub const ALL: [FilterCategory; 12] = [
        FilterCategory::Industries,
        FilterCategory::CompanySizes,
        FilterCategory::HierarchyLevels,
        FilterCategory::FunctionalRoles,
        FilterCategory::Countries,
        FilterCategory::States,
        FilterCategory::Cities,
        FilterCategory::TechStacks,
        FilterCategory::RecentActivities,
        FilterCategory::Interactions,
        FilterCategory::CustomTags,
        FilterCategory::AnnualRevenues,
    ];

    pub fn domain(self) -> Domain {
        match self {
            FilterCategory::Industries => Domain::Closed(INDUSTRIES),
            FilterCategory::CompanySizes => Domain::Closed(COMPANY_SIZES),
            FilterCategory::HierarchyLevels => Domain::Closed(HIERARCHY_LEVELS),
            FilterCategory::FunctionalRoles => Domain::Closed(FUNCTIONAL_ROLES),
            FilterCategory::Countries => Domain::Closed(COUNTRIES),
            FilterCategory::TechStacks => Domain::Closed(TECH_STACKS),
            FilterCategory::RecentActivities => Domain::Closed(RECENT_ACTIVITIES),
            FilterCategory::Interactions => Domain::Closed(INTERACTIONS),
            FilterCategory::AnnualRevenues => Domain::Closed(ANNUAL_REVENUES),
            FilterCategory::States | FilterCategory::Cities | FilterCategory::CustomTags => {
                Domain::Open
            }
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self.domain(), Domain::Open)
    }

    /// Whether `value` may be stored under this category.
    ///
    /// Closed categories only take plain values listed in their catalog.
    /// Open categories take any non-blank text, and only `CustomTags` takes
    /// the company/title tagged kinds.
    pub fn accepts(self, value: &FilterValue) -> bool {
        if value.text().trim().is_empty() {
            return false;
        }
        match (self.domain(), value) {
            (Domain::Closed(catalog), FilterValue::Plain(text)) => catalog.contains(&text.as_str()),
            (Domain::Closed(_), _) => false,
            (Domain::Open, FilterValue::Plain(_)) => true,
            (Domain::Open, _) => self == FilterCategory::CustomTags,
        }
    }

    /// Spanish label shown on the dashboard tab.
    pub fn label(self) -> &'static str {
        match self {
            FilterCategory::Industries => "Industrias",
            FilterCategory::CompanySizes => "Tamaño de empresa",
            FilterCategory::HierarchyLevels => "Nivel jerárquico",
            FilterCategory::FunctionalRoles => "Área funcional",
            FilterCategory::Countries => "Países",
            FilterCategory::States => "Estados / Regiones",
            FilterCategory::Cities => "Ciudades",
            FilterCategory::TechStacks => "Tecnologías",
            FilterCategory::RecentActivities => "Actividad reciente",
            FilterCategory::Interactions => "Interacciones",
            FilterCategory::CustomTags => "Etiquetas personalizadas",
            FilterCategory::AnnualRevenues => "Ingresos anuales",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_sizes_have_five_brackets_ending_in_enterprise() {
        assert_eq!(COMPANY_SIZES.len(), 5);
        assert_eq!(COMPANY_SIZES.last(), Some(&ENTERPRISE_BRACKET));
    }

    #[test]
    fn closed_categories_reject_values_outside_catalog() {
        let industries = FilterCategory::Industries;
        assert!(industries.accepts(&FilterValue::plain("SaaS")));
        assert!(!industries.accepts(&FilterValue::plain("Minería espacial")));
        assert!(!industries.accepts(&FilterValue::Company("SaaS".into())));
    }

    #[test]
    fn tagged_values_only_fit_custom_tags() {
        let company = FilterValue::Company("Acme".into());
        assert!(FilterCategory::CustomTags.accepts(&company));
        assert!(!FilterCategory::Cities.accepts(&company));
        assert!(FilterCategory::Cities.accepts(&FilterValue::plain("Bogotá")));
    }

    #[test]
    fn blank_values_are_never_accepted() {
        assert!(!FilterCategory::CustomTags.accepts(&FilterValue::plain("   ")));
        assert!(!FilterCategory::CustomTags.accepts(&FilterValue::Title(String::new())));
    }

    #[test]
    fn category_keys_serialize_in_camel_case() {
        let json = serde_json::to_string(&FilterCategory::CompanySizes).unwrap();
        assert_eq!(json, "\"companySizes\"");
    }
}
