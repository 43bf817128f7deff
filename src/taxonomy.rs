//! Closed vocabularies used to tag frameworks.
//!
//! Every vocabulary serializes to the same snake_case token that `as_str`
//! returns, and parses back from it (case-insensitive, `-` or `_`).

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            /// Every member, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase().replace('-', "_");
                match normalized.as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(CatalogError::Validation {
                        message: format!("unknown {} '{}'", stringify!($name), s),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// Company lifecycle phase, declared in lifecycle order
    TemporalStage {
        PreFormation => "pre_formation",
        Formation => "formation",
        Validation => "validation",
        Traction => "traction",
        Growth => "growth",
        Scale => "scale",
        Maturity => "maturity",
    }
}

vocabulary! {
    /// Kind of business problem a framework addresses
    ProblemArchetype {
        CustomerDiscovery => "customer_discovery",
        ProductMarketFit => "product_market_fit",
        BusinessModelDesign => "business_model_design",
        GrowthMechanics => "growth_mechanics",
        UnitEconomicsOptimization => "unit_economics_optimization",
        CompetitiveStrategy => "competitive_strategy",
        MarketAnalysis => "market_analysis",
        PortfolioOptimization => "portfolio_optimization",
        InnovationManagement => "innovation_management",
        OperationalExcellence => "operational_excellence",
        OrganizationalDesign => "organizational_design",
        FinancialPlanning => "financial_planning",
        RiskManagement => "risk_management",
        TalentManagement => "talent_management",
        DigitalTransformation => "digital_transformation",
    }
}

vocabulary! {
    DecisionContext {
        Exploratory => "exploratory",
        Diagnostic => "diagnostic",
        Prescriptive => "prescriptive",
        Predictive => "predictive",
        Evaluative => "evaluative",
    }
}

vocabulary! {
    DataRequirement {
        QualitativeOnly => "qualitative_only",
        BasicQuantitative => "basic_quantitative",
        AdvancedMetrics => "advanced_metrics",
        MarketData => "market_data",
    }
}

vocabulary! {
    /// Implementation weight, lightest first
    ComplexityTier {
        PlugAndPlay => "plug_and_play",
        Simple => "simple",
        Moderate => "moderate",
        Complex => "complex",
        Enterprise => "enterprise",
    }
}

vocabulary! {
    OutcomeType {
        StrategicClarity => "strategic_clarity",
        TacticalActions => "tactical_actions",
        FinancialProjections => "financial_projections",
        OperationalImprovements => "operational_improvements",
        CustomerInsights => "customer_insights",
        CompetitiveAdvantage => "competitive_advantage",
        RiskMitigation => "risk_mitigation",
        InnovationPipeline => "innovation_pipeline",
        OrganizationalDesign => "organizational_design",
        GrowthStrategy => "growth_strategy",
    }
}

vocabulary! {
    IndustryContext {
        /// Applies regardless of industry
        Universal => "universal",
        B2bSaas => "b2b_saas",
        Marketplace => "marketplace",
        Fintech => "fintech",
        Healthtech => "healthtech",
        Edtech => "edtech",
        Ecommerce => "ecommerce",
        Retail => "retail",
        Manufacturing => "manufacturing",
        Services => "services",
        ConsumerGoods => "consumer_goods",
        Hardware => "hardware",
        Cleantech => "cleantech",
        Biotech => "biotech",
        EnterpriseSoftware => "enterprise_software",
    }
}

vocabulary! {
    RelationshipType {
        /// The declaring framework should precede the related ones
        Prerequisite => "prerequisite",
        Complementary => "complementary",
        Alternative => "alternative",
        /// The related frameworks are natural next steps
        Progressive => "progressive",
    }
}

vocabulary! {
    Severity {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

vocabulary! {
    TeamSizeBucket {
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}

impl TemporalStage {
    /// Zero-based position in the lifecycle
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    pub fn is_adjacent(&self, other: TemporalStage) -> bool {
        self.ordinal().abs_diff(other.ordinal()) == 1
    }
}

impl ComplexityTier {
    /// 1 (plug and play) through 5 (enterprise)
    pub fn level(&self) -> u8 {
        *self as u8 + 1
    }

    /// Heaviest tier a team of `team_size` people can realistically run.
    pub fn capacity_for_team_size(team_size: u32) -> Self {
        match team_size {
            0..10 => ComplexityTier::Simple,
            10..50 => ComplexityTier::Moderate,
            50..200 => ComplexityTier::Complex,
            _ => ComplexityTier::Enterprise,
        }
    }
}

impl TeamSizeBucket {
    pub fn for_team_size(team_size: u32) -> Self {
        match team_size {
            0..20 => TeamSizeBucket::Small,
            20..200 => TeamSizeBucket::Medium,
            _ => TeamSizeBucket::Large,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip_through_from_str() {
        for stage in TemporalStage::ALL {
            assert_eq!(stage.as_str().parse::<TemporalStage>().unwrap(), *stage);
        }
        for industry in IndustryContext::ALL {
            assert_eq!(
                industry.as_str().parse::<IndustryContext>().unwrap(),
                *industry
            );
        }
    }

    #[test]
    fn test_from_str_is_lenient_about_case_and_dashes() {
        assert_eq!(
            "Pre-Formation".parse::<TemporalStage>().unwrap(),
            TemporalStage::PreFormation
        );
        assert_eq!(
            " B2B_SAAS ".parse::<IndustryContext>().unwrap(),
            IndustryContext::B2bSaas
        );
        assert!("hyperscale".parse::<TemporalStage>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case_tokens() {
        let json = serde_json::to_string(&ComplexityTier::PlugAndPlay).unwrap();
        assert_eq!(json, "\"plug_and_play\"");
        let back: IndustryContext = serde_json::from_str("\"enterprise_software\"").unwrap();
        assert_eq!(back, IndustryContext::EnterpriseSoftware);
    }

    #[test]
    fn test_stage_order_and_adjacency() {
        assert!(TemporalStage::PreFormation < TemporalStage::Maturity);
        assert_eq!(TemporalStage::Validation.ordinal(), 2);
        assert!(TemporalStage::Growth.is_adjacent(TemporalStage::Scale));
        assert!(TemporalStage::Scale.is_adjacent(TemporalStage::Growth));
        assert!(!TemporalStage::Growth.is_adjacent(TemporalStage::Growth));
        assert!(!TemporalStage::Formation.is_adjacent(TemporalStage::Traction));
    }

    #[test]
    fn test_complexity_levels_and_capacity() {
        assert_eq!(ComplexityTier::PlugAndPlay.level(), 1);
        assert_eq!(ComplexityTier::Enterprise.level(), 5);
        assert_eq!(
            ComplexityTier::capacity_for_team_size(3),
            ComplexityTier::Simple
        );
        assert_eq!(
            ComplexityTier::capacity_for_team_size(49),
            ComplexityTier::Moderate
        );
        assert_eq!(
            ComplexityTier::capacity_for_team_size(50),
            ComplexityTier::Complex
        );
        assert_eq!(
            ComplexityTier::capacity_for_team_size(5000),
            ComplexityTier::Enterprise
        );
    }

    #[test]
    fn test_team_size_buckets() {
        assert_eq!(TeamSizeBucket::for_team_size(1), TeamSizeBucket::Small);
        assert_eq!(TeamSizeBucket::for_team_size(20), TeamSizeBucket::Medium);
        assert_eq!(TeamSizeBucket::for_team_size(200), TeamSizeBucket::Large);
    }
}
