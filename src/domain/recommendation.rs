//! Combines the two track totals into a single recommendation.

use serde::Serialize;
use std::fmt;

pub const FUNDAMENTAL_WEIGHT: f64 = 0.6;
pub const TECHNICAL_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Buy,
    #[serde(rename = "Hold/Neutral")]
    HoldNeutral,
    Watch,
    Sell,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Buy => write!(f, "Buy"),
            Category::HoldNeutral => write!(f, "Hold/Neutral"),
            Category::Watch => write!(f, "Watch"),
            Category::Sell => write!(f, "Sell"),
        }
    }
}

/// Recommendation buckets, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    ExceptionalBuy,
    GoodBuy,
    Neutral,
    PotentialReversal,
    CorrectionRisk,
    StrongSell,
}

impl Tier {
    pub const ALL: [Tier; 6] = [
        Tier::ExceptionalBuy,
        Tier::GoodBuy,
        Tier::Neutral,
        Tier::PotentialReversal,
        Tier::CorrectionRisk,
        Tier::StrongSell,
    ];

    /// Lowest weighted total admitted by this tier.
    pub fn threshold(self) -> f64 {
        match self {
            Tier::ExceptionalBuy => 4.0,
            Tier::GoodBuy => 3.5,
            Tier::Neutral => 3.0,
            Tier::PotentialReversal => 2.5,
            Tier::CorrectionRisk => 2.0,
            Tier::StrongSell => f64::NEG_INFINITY,
        }
    }

    pub fn category(self) -> Category {
        match self {
            Tier::ExceptionalBuy | Tier::GoodBuy => Category::Buy,
            Tier::Neutral => Category::HoldNeutral,
            Tier::PotentialReversal => Category::Watch,
            Tier::CorrectionRisk | Tier::StrongSell => Category::Sell,
        }
    }

    pub fn justification(self) -> &'static str {
        match self {
            Tier::ExceptionalBuy => {
                "Exceptional investment opportunity - solid fundamentals and favourable technical signals"
            }
            Tier::GoodBuy => "Good investment opportunity - attractive risk/reward profile",
            Tier::Neutral => "Neutral market situation - wait for more convincing signals",
            Tier::PotentialReversal => "Potential reversal - watch the upcoming publications",
            Tier::CorrectionRisk => "Risk of correction - unfavourable factors dominate",
            Tier::StrongSell => "Strong sell recommendation - significant risks identified",
        }
    }

    pub fn classify(weighted_total: f64) -> Tier {
        Self::ALL
            .into_iter()
            .find(|tier| weighted_total >= tier.threshold())
            .unwrap_or(Tier::StrongSell)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub weighted_total: f64,
    pub tier: Tier,
    pub category: Category,
    pub justification: &'static str,
}

/// Weighted total rounded to two decimals.
pub fn weighted_total(fundamental_total: f64, technical_total: f64) -> f64 {
    let raw = fundamental_total * FUNDAMENTAL_WEIGHT + technical_total * TECHNICAL_WEIGHT;
    (raw * 100.0).round() / 100.0
}

pub fn recommend(fundamental_total: f64, technical_total: f64) -> Recommendation {
    let weighted_total = weighted_total(fundamental_total, technical_total);
    let tier = Tier::classify(weighted_total);
    Recommendation {
        weighted_total,
        tier,
        category: tier.category(),
        justification: tier.justification(),
    }
}
