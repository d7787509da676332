//! Least-squares trend fitting and cashflow projection.

use serde::{Deserialize, Serialize};

use crate::time::MonthKey;

use super::MonthFlow;

/// Ordinary least squares slope over `(index, value)` pairs.
///
/// Degenerate inputs (no points, or a zero `n*Σx² − (Σx)²` denominator)
/// yield slope 0.
pub fn linear_slope(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let sum_x: f64 = (0..values.len()).map(|i| i as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values
        .iter()
        .enumerate()
        .map(|(i, value)| i as f64 * value)
        .sum();
    let sum_x2: f64 = (0..values.len()).map(|i| (i * i) as f64).sum();
    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator.abs() < f64::EPSILON {
        return 0.0;
    }
    (n * sum_xy - sum_x * sum_y) / denominator
}

/// Intercept of the least-squares line fitted by [`linear_slope`].
fn linear_intercept(values: &[f64], slope: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let sum_x: f64 = (0..values.len()).map(|i| i as f64).sum();
    let sum_y: f64 = values.iter().sum();
    (sum_y - slope * sum_x) / n
}

/// One extrapolated month of the projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectedMonth {
    pub month: MonthKey,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
    pub balance: f64,
}

/// Linear extrapolation of income and expense lines with an accumulated
/// projected balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CashflowProjection {
    pub months: Vec<ProjectedMonth>,
}

impl CashflowProjection {
    pub fn project(history: &[MonthFlow], starting_balance: f64, horizon: u32) -> Self {
        let last = match history.last() {
            Some(flow) => flow,
            None => return Self::default(),
        };
        let incomes: Vec<f64> = history.iter().map(|flow| flow.income).collect();
        let expenses: Vec<f64> = history.iter().map(|flow| flow.expenses).collect();
        let income_slope = linear_slope(&incomes);
        let expense_slope = linear_slope(&expenses);
        let income_intercept = linear_intercept(&incomes, income_slope);
        let expense_intercept = linear_intercept(&expenses, expense_slope);

        let mut months = Vec::with_capacity(horizon as usize);
        let mut balance = starting_balance;
        let mut month = last.month;
        for step in 1..=horizon {
            let index = (history.len() - 1 + step as usize) as f64;
            month = month.next();
            // Extrapolated flows are floored at zero; a negative projected
            // income or expense has no financial meaning.
            let income = (income_intercept + income_slope * index).max(0.0);
            let expense = (expense_intercept + expense_slope * index).max(0.0);
            let net = income - expense;
            balance += net;
            months.push(ProjectedMonth {
                month,
                income,
                expenses: expense,
                net,
                balance,
            });
        }
        Self { months }
    }
}
