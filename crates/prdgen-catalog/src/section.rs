//! Document section taxonomy
//!
//! Every catalog question is assigned to exactly one section heading. The
//! per-product ordering below decides how generated documents arrange
//! their sections; sections that collect no answered questions are omitted
//! at generation time.

use prdgen_core::ProductType;
use serde::{Deserialize, Serialize};

/// Closed set of document section headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Overview,
    Business,
    UserResearch,
    Features,
    Technical,
    Compliance,
    ProjectManagement,
}

impl Section {
    /// Human-readable heading for rendered documents
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Business => "Business Context",
            Self::UserResearch => "User Research",
            Self::Features => "Features",
            Self::Technical => "Technical Requirements",
            Self::Compliance => "Compliance",
            Self::ProjectManagement => "Project Management",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.heading())
    }
}

/// Ordered section headings for a product type
///
/// Exhaustive on purpose: adding a product type forces a decision here.
pub fn section_order(product_type: ProductType) -> &'static [Section] {
    use Section::*;

    match product_type {
        // Marketing-led products read business-first
        ProductType::LandingPage | ProductType::BusinessPlan | ProductType::Ecommerce => &[
            Overview,
            Business,
            Features,
            UserResearch,
            Technical,
            Compliance,
            ProjectManagement,
        ],

        // Regulated-by-construction products surface compliance early
        ProductType::Fintech | ProductType::Healthtech => &[
            Overview,
            Business,
            Compliance,
            UserResearch,
            Features,
            Technical,
            ProjectManagement,
        ],

        // Engineering-led products
        ProductType::MobileApp
        | ProductType::WebApp
        | ProductType::DesktopApp
        | ProductType::Saas
        | ProductType::Enterprise => &[
            Overview,
            Business,
            UserResearch,
            Features,
            Technical,
            Compliance,
            ProjectManagement,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_product_type_orders_all_sections() {
        let all = [
            ProductType::LandingPage,
            ProductType::MobileApp,
            ProductType::WebApp,
            ProductType::DesktopApp,
            ProductType::Saas,
            ProductType::Enterprise,
            ProductType::Ecommerce,
            ProductType::Fintech,
            ProductType::Healthtech,
            ProductType::BusinessPlan,
        ];

        for product in all {
            let order = section_order(product);
            assert_eq!(order.len(), 7, "{} misses a section", product);
            assert_eq!(order[0], Section::Overview);
        }
    }

    #[test]
    fn test_regulated_products_front_load_compliance() {
        let order = section_order(ProductType::Fintech);
        let compliance = order.iter().position(|s| *s == Section::Compliance).unwrap();
        let technical = order.iter().position(|s| *s == Section::Technical).unwrap();
        assert!(compliance < technical);
    }
}
