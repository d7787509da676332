//! Weighted composite financial health score.

use serde::{Deserialize, Serialize};

use crate::metrics::MetricSet;
use crate::snapshot::Snapshot;

const SAVINGS_WEIGHT: f64 = 0.30;
const EMERGENCY_WEIGHT: f64 = 0.25;
const BUDGET_WEIGHT: f64 = 0.20;
const CARD_WEIGHT: f64 = 0.15;
const GOAL_WEIGHT: f64 = 0.10;

/// A 20% savings rate and a 6-month fund both score a full 100.
const TARGET_SAVINGS_RATE: f64 = 20.0;
const TARGET_FUND_MONTHS: f64 = 6.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreComponentKind {
    Savings,
    EmergencyFund,
    BudgetAdherence,
    CardDebt,
    Goals,
}

/// One weighted input to the composite score, on a 0–100 scale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreComponent {
    pub kind: ScoreComponentKind,
    pub score: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HealthRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Composite health score with its component breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthScore {
    pub value: f64,
    pub rating: HealthRating,
    pub components: Vec<ScoreComponent>,
}

impl HealthScore {
    /// Components without underlying data (no budgets, no cards with a
    /// limit, no goals) are skipped and the remaining weights renormalized.
    pub fn compute(metrics: &MetricSet, snapshot: &Snapshot) -> Self {
        let mut components = vec![
            ScoreComponent {
                kind: ScoreComponentKind::Savings,
                score: (metrics.savings_rate / TARGET_SAVINGS_RATE * 100.0).clamp(0.0, 100.0),
                weight: SAVINGS_WEIGHT,
            },
            ScoreComponent {
                kind: ScoreComponentKind::EmergencyFund,
                score: (metrics.emergency_fund_months / TARGET_FUND_MONTHS * 100.0)
                    .clamp(0.0, 100.0),
                weight: EMERGENCY_WEIGHT,
            },
        ];
        if let Some(score) = budget_adherence(snapshot) {
            components.push(ScoreComponent {
                kind: ScoreComponentKind::BudgetAdherence,
                score,
                weight: BUDGET_WEIGHT,
            });
        }
        if let Some(score) = card_debt(snapshot) {
            components.push(ScoreComponent {
                kind: ScoreComponentKind::CardDebt,
                score,
                weight: CARD_WEIGHT,
            });
        }
        if let Some(score) = goal_progress(snapshot) {
            components.push(ScoreComponent {
                kind: ScoreComponentKind::Goals,
                score,
                weight: GOAL_WEIGHT,
            });
        }

        let total_weight: f64 = components.iter().map(|component| component.weight).sum();
        let value = components
            .iter()
            .map(|component| component.score * component.weight)
            .sum::<f64>()
            / total_weight;

        Self {
            value,
            rating: rating_for(value),
            components,
        }
    }
}

fn rating_for(value: f64) -> HealthRating {
    if value >= 80.0 {
        HealthRating::Excellent
    } else if value >= 60.0 {
        HealthRating::Good
    } else if value >= 40.0 {
        HealthRating::Fair
    } else {
        HealthRating::Poor
    }
}

/// Per applying budget: usage ≤80% scores 100, ≤100% scores 70, over scores 30.
fn budget_adherence(snapshot: &Snapshot) -> Option<f64> {
    let scores: Vec<f64> = snapshot
        .applying_budgets()
        .filter(|budget| budget.amount > 0.0)
        .map(|budget| {
            let usage = snapshot.budget_spent(budget) / budget.amount * 100.0;
            if usage <= 80.0 {
                100.0
            } else if usage <= 100.0 {
                70.0
            } else {
                30.0
            }
        })
        .collect();
    average(&scores)
}

fn card_debt(snapshot: &Snapshot) -> Option<f64> {
    let scores: Vec<f64> = snapshot
        .cards
        .iter()
        .filter(|card| card.is_active)
        .filter_map(|card| card.utilization_percent())
        .map(|utilization| (100.0 - utilization).clamp(0.0, 100.0))
        .collect();
    average(&scores)
}

fn goal_progress(snapshot: &Snapshot) -> Option<f64> {
    let scores: Vec<f64> = snapshot
        .goals
        .iter()
        .map(|goal| goal.progress_percent().min(100.0))
        .collect();
    average(&scores)
}

fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
