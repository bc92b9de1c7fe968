//! Built-in question catalog
//!
//! Registration order below is the stable interview order: the engine
//! offers applicable questions in exactly this sequence, so reordering
//! entries changes interview sequencing for every product type.

use prdgen_core::{Complexity, Industry, PrdError, ProductType, Result};

use crate::condition::Condition;
use crate::question::{AnswerKind, QuestionDefinition};
use crate::section::Section;

/// Immutable question registry, built once at process start
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<QuestionDefinition>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate question keys
    pub fn new(questions: Vec<QuestionDefinition>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for q in &questions {
            if !seen.insert(q.key.clone()) {
                return Err(PrdError::Other(format!(
                    "Duplicate question key in catalog: {}",
                    q.key
                )));
            }
        }
        Ok(Self { questions })
    }

    /// All definitions in registration order
    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    /// Look up a definition by key
    pub fn get(&self, key: &str) -> Option<&QuestionDefinition> {
        self.questions.iter().find(|q| q.key == key)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn choice(options: &[&str]) -> AnswerKind {
    AnswerKind::Choice {
        options: options.iter().map(|s| s.to_string()).collect(),
    }
}

fn multi(options: &[&str]) -> AnswerKind {
    AnswerKind::MultiChoice {
        options: options.iter().map(|s| s.to_string()).collect(),
    }
}

/// The standard prdgen interview catalog
pub fn builtin_catalog() -> Result<Catalog> {
    let mut questions = Vec::new();

    questions.extend(basic_questions());
    questions.extend(business_questions());
    questions.extend(technical_questions());
    questions.extend(user_research_questions());
    questions.extend(feature_questions());
    questions.extend(compliance_questions());
    questions.extend(project_management_questions());

    Catalog::new(questions)
}

/// Core questions asked for every product
fn basic_questions() -> Vec<QuestionDefinition> {
    vec![
        QuestionDefinition::new(
            "project_name",
            "What is the name of your project?",
            AnswerKind::Text,
            Section::Overview,
        )
        .with_help("Choose a clear, memorable name for your product"),
        QuestionDefinition::new(
            "problem_statement",
            "What problem does this product solve?",
            AnswerKind::Text,
            Section::Overview,
        )
        .with_help("Describe the core problem or pain point your product addresses"),
        QuestionDefinition::new(
            "target_audience",
            "Who is your primary target audience?",
            AnswerKind::Text,
            Section::Overview,
        )
        .with_help("Be specific about demographics, roles, or user characteristics"),
        QuestionDefinition::new(
            "value_proposition",
            "What unique value does your product provide?",
            AnswerKind::Text,
            Section::Overview,
        )
        .with_help("What makes your solution better than alternatives?"),
        QuestionDefinition::new(
            "key_features",
            "What are the 3-5 most important features?",
            AnswerKind::Text,
            Section::Features,
        )
        .with_help("List the core features that deliver your value proposition"),
    ]
}

/// Business questions; the detailed set is gated on complexity
fn business_questions() -> Vec<QuestionDefinition> {
    let detailed = Condition::ComplexityAtLeast(Complexity::Complex);

    vec![
        QuestionDefinition::new(
            "success_metrics",
            "How will you measure success?",
            AnswerKind::Text,
            Section::Business,
        )
        .with_help("Define specific, measurable success criteria"),
        QuestionDefinition::new(
            "timeline",
            "What is your target launch timeline?",
            choice(&[
                "2-4 weeks",
                "1-3 months",
                "3-6 months",
                "6-12 months",
                "12+ months",
            ]),
            Section::Business,
        ),
        QuestionDefinition::new(
            "business_model",
            "What is your business model?",
            choice(&[
                "Free",
                "One-time purchase",
                "Subscription",
                "Freemium",
                "Advertising",
                "Commission",
                "Other",
            ]),
            Section::Business,
        )
        .with_condition(detailed.clone()),
        QuestionDefinition::new(
            "revenue_goals",
            "What are your revenue goals for year 1?",
            AnswerKind::Text,
            Section::Business,
        )
        .with_help("Provide specific financial targets")
        .with_condition(detailed.clone()),
        QuestionDefinition::new(
            "competitors",
            "Who are your main competitors?",
            AnswerKind::Text,
            Section::Business,
        )
        .with_help("List 3-5 direct or indirect competitors")
        .with_condition(detailed.clone()),
        QuestionDefinition::new(
            "competitive_advantage",
            "What is your competitive advantage?",
            AnswerKind::Text,
            Section::Business,
        )
        .with_help("What makes you different from competitors?")
        .with_condition(detailed),
    ]
}

/// Technical questions keyed on product type
fn technical_questions() -> Vec<QuestionDefinition> {
    let landing = Condition::ProductIn(vec![ProductType::LandingPage]);
    let mobile = Condition::ProductIn(vec![ProductType::MobileApp]);
    let web = Condition::ProductIn(vec![ProductType::WebApp]);
    let saas = Condition::ProductIn(vec![ProductType::Saas]);

    vec![
        // Landing page
        QuestionDefinition::new(
            "hosting_preference",
            "Do you have a hosting preference?",
            choice(&[
                "Static hosting (Netlify/Vercel)",
                "WordPress",
                "Custom CMS",
                "No preference",
            ]),
            Section::Technical,
        )
        .with_condition(landing.clone()),
        QuestionDefinition::new(
            "design_requirements",
            "Do you have specific design requirements?",
            AnswerKind::Text,
            Section::Technical,
        )
        .with_help("Brand colors, style preferences, existing brand guidelines")
        .with_condition(landing),
        // Mobile app
        QuestionDefinition::new(
            "platforms",
            "Which platforms do you want to support?",
            multi(&["iOS", "Android"]),
            Section::Technical,
        )
        .with_condition(mobile.clone()),
        QuestionDefinition::new(
            "native_vs_cross_platform",
            "Do you prefer native or cross-platform development?",
            choice(&[
                "Native (separate iOS/Android apps)",
                "Cross-platform (React Native/Flutter)",
                "No preference",
            ]),
            Section::Technical,
        )
        .with_condition(mobile.clone()),
        QuestionDefinition::new(
            "offline_functionality",
            "Does the app need to work offline?",
            AnswerKind::Bool,
            Section::Technical,
        )
        .with_condition(mobile.clone()),
        QuestionDefinition::new(
            "push_notifications",
            "Do you need push notifications?",
            AnswerKind::Bool,
            Section::Technical,
        )
        .with_condition(mobile.clone()),
        QuestionDefinition::new(
            "device_features",
            "Which device features do you need?",
            multi(&[
                "Camera",
                "GPS/Location",
                "Microphone",
                "Accelerometer",
                "Biometric auth",
                "None",
            ]),
            Section::Technical,
        )
        .with_condition(mobile),
        // Web app
        QuestionDefinition::new(
            "user_authentication",
            "Do you need user accounts and authentication?",
            AnswerKind::Bool,
            Section::Technical,
        )
        .with_condition(web.clone()),
        QuestionDefinition::new(
            "database_requirements",
            "What type of data will you store?",
            AnswerKind::Text,
            Section::Technical,
        )
        .with_help("User profiles, content, transactions, etc.")
        .with_condition(web.clone()),
        QuestionDefinition::new(
            "third_party_integrations",
            "Do you need integrations with other services?",
            AnswerKind::Text,
            Section::Technical,
        )
        .with_help("Payment processors, email services, social media, etc.")
        .with_condition(web.clone()),
        QuestionDefinition::new(
            "expected_users",
            "How many users do you expect?",
            choice(&["<100", "100-1000", "1000-10000", "10000+", "Unknown"]),
            Section::Technical,
        )
        .with_condition(web.clone()),
        QuestionDefinition::new(
            "responsive_design",
            "Does it need to work well on mobile devices?",
            AnswerKind::Bool,
            Section::Technical,
        )
        .with_condition(web),
        // SaaS platform
        QuestionDefinition::new(
            "multi_tenancy",
            "Do you need multi-tenant architecture?",
            AnswerKind::Bool,
            Section::Technical,
        )
        .with_help("Multiple customers with isolated data")
        .with_condition(saas.clone()),
        QuestionDefinition::new(
            "subscription_tiers",
            "How many subscription tiers will you offer?",
            AnswerKind::Number,
            Section::Technical,
        )
        .with_condition(saas.clone()),
        QuestionDefinition::new(
            "api_requirements",
            "Do you need to provide APIs for customers?",
            AnswerKind::Bool,
            Section::Technical,
        )
        .with_condition(saas.clone()),
        QuestionDefinition::new(
            "admin_dashboard",
            "Do you need an admin dashboard?",
            AnswerKind::Bool,
            Section::Technical,
        )
        .with_condition(saas.clone()),
        QuestionDefinition::new(
            "analytics_requirements",
            "What analytics do you need to track?",
            AnswerKind::Text,
            Section::Technical,
        )
        .with_help("User behavior, feature usage, business metrics")
        .with_condition(saas),
    ]
}

/// User research questions, skipped for simple projects
fn user_research_questions() -> Vec<QuestionDefinition> {
    let standard = Condition::ComplexityAtLeast(Complexity::Moderate);

    vec![
        QuestionDefinition::new(
            "primary_users",
            "Describe your primary user personas",
            AnswerKind::Text,
            Section::UserResearch,
        )
        .with_help("Job titles, experience level, goals, pain points")
        .with_condition(standard.clone()),
        QuestionDefinition::new(
            "user_journey",
            "Describe the typical user journey",
            AnswerKind::Text,
            Section::UserResearch,
        )
        .with_help("How do users discover, evaluate, and use your product?")
        .with_condition(standard.clone()),
        QuestionDefinition::new(
            "user_research_done",
            "Have you conducted user research?",
            AnswerKind::Bool,
            Section::UserResearch,
        )
        .with_condition(standard.clone()),
        QuestionDefinition::new(
            "user_feedback",
            "What feedback have you received from potential users?",
            AnswerKind::Text,
            Section::UserResearch,
        )
        .with_condition(Condition::All(vec![
            standard,
            Condition::answer_is_true("user_research_done"),
        ]))
        .with_depends_on(vec!["user_research_done"]),
    ]
}

/// Product-specific feature questions
fn feature_questions() -> Vec<QuestionDefinition> {
    let ecommerce = Condition::ProductIn(vec![ProductType::Ecommerce]);
    let fintech = Condition::ProductIn(vec![ProductType::Fintech]);

    vec![
        QuestionDefinition::new(
            "payment_methods",
            "What payment methods do you want to support?",
            multi(&[
                "Credit/Debit Cards",
                "PayPal",
                "Apple Pay",
                "Google Pay",
                "Bank Transfer",
                "Cryptocurrency",
            ]),
            Section::Features,
        )
        .with_condition(ecommerce.clone()),
        QuestionDefinition::new(
            "inventory_management",
            "Do you need inventory management?",
            AnswerKind::Bool,
            Section::Features,
        )
        .with_condition(ecommerce.clone()),
        QuestionDefinition::new(
            "shipping_options",
            "What shipping options will you offer?",
            AnswerKind::Text,
            Section::Features,
        )
        .with_help("Standard, express, international, pickup, etc.")
        .with_condition(ecommerce),
        QuestionDefinition::new(
            "financial_data_types",
            "What types of financial data will you handle?",
            multi(&[
                "Bank accounts",
                "Transactions",
                "Investments",
                "Credit scores",
                "Insurance",
                "Taxes",
            ]),
            Section::Features,
        )
        .with_condition(fintech.clone()),
        QuestionDefinition::new(
            "regulatory_requirements",
            "Which financial regulations must you comply with?",
            multi(&["PCI DSS", "SOX", "KYC", "AML", "GDPR", "CCPA", "Other"]),
            Section::Compliance,
        )
        .with_condition(fintech),
    ]
}

/// Industry-specific compliance questions
fn compliance_questions() -> Vec<QuestionDefinition> {
    let healthcare = Condition::IndustryIn(vec![Industry::Healthcare]);
    let finance = Condition::IndustryIn(vec![Industry::Finance]);

    vec![
        QuestionDefinition::new(
            "hipaa_compliance",
            "Do you need HIPAA compliance?",
            AnswerKind::Bool,
            Section::Compliance,
        )
        .with_condition(healthcare.clone()),
        QuestionDefinition::new(
            "medical_data_types",
            "What types of medical data will you handle?",
            multi(&[
                "Patient records",
                "Lab results",
                "Imaging",
                "Prescriptions",
                "Billing",
                "None",
            ]),
            Section::Compliance,
        )
        .with_condition(healthcare),
        QuestionDefinition::new(
            "financial_regulations",
            "Which financial regulations apply?",
            multi(&["SOX", "PCI DSS", "FFIEC", "FINRA", "SEC", "Other"]),
            Section::Compliance,
        )
        .with_condition(finance.clone()),
        QuestionDefinition::new(
            "audit_requirements",
            "Do you need audit trail capabilities?",
            AnswerKind::Bool,
            Section::Compliance,
        )
        .with_condition(finance),
    ]
}

/// Team and planning questions for larger projects
fn project_management_questions() -> Vec<QuestionDefinition> {
    let detailed = Condition::ComplexityAtLeast(Complexity::Complex);

    vec![
        QuestionDefinition::new(
            "team_size",
            "How large is your development team?",
            AnswerKind::Number,
            Section::ProjectManagement,
        )
        .with_help("Number of developers, designers, etc.")
        .with_condition(detailed.clone()),
        QuestionDefinition::new(
            "budget_range",
            "What is your budget range?",
            choice(&[
                "Under $10k",
                "$10k-$50k",
                "$50k-$100k",
                "$100k-$500k",
                "$500k+",
                "Prefer not to say",
            ]),
            Section::ProjectManagement,
        )
        .with_condition(detailed.clone()),
        QuestionDefinition::new(
            "existing_systems",
            "Do you have existing systems to integrate with?",
            AnswerKind::Text,
            Section::ProjectManagement,
        )
        .with_help("CRM, ERP, databases, APIs, etc.")
        .with_condition(detailed.clone()),
        QuestionDefinition::new(
            "maintenance_plan",
            "Who will maintain the system after launch?",
            choice(&[
                "Internal team",
                "External contractor",
                "Hybrid approach",
                "To be determined",
            ]),
            Section::ProjectManagement,
        )
        .with_condition(detailed),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_builds() {
        let catalog = builtin_catalog().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get("project_name").is_some());
        assert!(catalog.get("no_such_key").is_none());
    }

    #[test]
    fn test_basic_questions_lead_the_catalog() {
        let catalog = builtin_catalog().unwrap();
        let keys: Vec<&str> = catalog
            .questions()
            .iter()
            .take(5)
            .map(|q| q.key.as_str())
            .collect();
        assert_eq!(
            keys,
            vec![
                "project_name",
                "problem_statement",
                "target_audience",
                "value_proposition",
                "key_features"
            ]
        );
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let q = QuestionDefinition::new("dup", "Prompt?", AnswerKind::Text, Section::Overview);
        let err = Catalog::new(vec![q.clone(), q]).unwrap_err();
        assert!(err.to_string().contains("dup"));
    }

    #[test]
    fn test_dependent_question_declares_its_gate() {
        let catalog = builtin_catalog().unwrap();
        let q = catalog.get("user_feedback").unwrap();
        assert_eq!(q.depends_on, vec!["user_research_done".to_string()]);
    }
}
