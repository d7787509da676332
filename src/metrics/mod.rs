//! Derived financial metrics over a snapshot.

pub mod trend;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AdvisorConfig;
use crate::domain::Transaction;
use crate::snapshot::Snapshot;
use crate::time::MonthKey;

use self::trend::{linear_slope, CashflowProjection};

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthFlow {
    pub month: MonthKey,
    pub income: f64,
    pub expenses: f64,
}

impl MonthFlow {
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}

/// Months until the balance reaches zero at the current burn rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "months", rename_all = "snake_case")]
pub enum Runway {
    /// Net cash flow is non-negative; the balance never reaches zero.
    Infinite,
    Months(f64),
}

impl Runway {
    pub fn is_infinite(&self) -> bool {
        matches!(self, Runway::Infinite)
    }
}

/// Share of total expenses attributable to the largest expense category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryConcentration {
    pub category: String,
    pub share_percent: f64,
}

/// The aggregate measurements every rule evaluates against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricSet {
    pub income: f64,
    pub expenses: f64,
    pub previous_income: f64,
    pub previous_expenses: f64,
    pub total_balance: f64,
    pub savings_rate: f64,
    pub emergency_fund_months: f64,
    /// Month-over-month deltas; `None` when the previous month had no flow.
    pub income_change_percent: Option<f64>,
    pub expense_change_percent: Option<f64>,
    pub concentration: Option<CategoryConcentration>,
    /// Trailing window, oldest first, ending in the current month.
    pub monthly_flows: Vec<MonthFlow>,
    pub burn_rate: f64,
    pub average_income: f64,
    pub runway: Runway,
    pub income_slope: f64,
    pub expense_slope: f64,
    pub projection: CashflowProjection,
}

impl MetricSet {
    pub fn compute(snapshot: &Snapshot, config: &AdvisorConfig) -> Self {
        let (income, expenses) = sum_flows(snapshot.current_month_transactions());
        let (previous_income, previous_expenses) =
            sum_flows(snapshot.previous_month_transactions());
        let total_balance = snapshot.total_balance();

        let savings_rate = if income > 0.0 {
            (income - expenses) / income * 100.0
        } else {
            0.0
        };
        let emergency_fund_months = if expenses > 0.0 {
            total_balance / expenses
        } else {
            0.0
        };

        let monthly_flows = monthly_flows(snapshot, config.trailing_months.max(1));
        let months = monthly_flows.len() as f64;
        let burn_rate = monthly_flows.iter().map(|flow| flow.expenses).sum::<f64>() / months;
        let average_income = monthly_flows.iter().map(|flow| flow.income).sum::<f64>() / months;
        let runway = if average_income - burn_rate >= 0.0 || burn_rate <= 0.0 {
            Runway::Infinite
        } else {
            Runway::Months(total_balance / burn_rate)
        };

        let incomes: Vec<f64> = monthly_flows.iter().map(|flow| flow.income).collect();
        let expense_series: Vec<f64> = monthly_flows.iter().map(|flow| flow.expenses).collect();
        let income_slope = linear_slope(&incomes);
        let expense_slope = linear_slope(&expense_series);
        let projection =
            CashflowProjection::project(&monthly_flows, total_balance, config.projection_months);

        Self {
            income,
            expenses,
            previous_income,
            previous_expenses,
            total_balance,
            savings_rate,
            emergency_fund_months,
            income_change_percent: percent_change(previous_income, income),
            expense_change_percent: percent_change(previous_expenses, expenses),
            concentration: concentration(snapshot, expenses),
            monthly_flows,
            burn_rate,
            average_income,
            runway,
            income_slope,
            expense_slope,
            projection,
        }
    }
}

fn sum_flows<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> (f64, f64) {
    let mut income = 0.0;
    let mut expenses = 0.0;
    for txn in transactions {
        if txn.is_income() {
            income += txn.amount;
        } else {
            expenses += txn.amount;
        }
    }
    (income, expenses)
}

/// `(current - previous) / previous`, skipped when the previous value is zero.
fn percent_change(previous: f64, current: f64) -> Option<f64> {
    if previous > 0.0 {
        Some((current - previous) / previous * 100.0)
    } else {
        None
    }
}

fn concentration(snapshot: &Snapshot, total_expenses: f64) -> Option<CategoryConcentration> {
    if total_expenses <= 0.0 {
        return None;
    }
    let mut by_category: HashMap<Option<Uuid>, f64> = HashMap::new();
    for txn in snapshot.current_month_transactions() {
        if txn.is_expense() {
            *by_category.entry(txn.category_id).or_insert(0.0) += txn.amount;
        }
    }
    // Ties on the amount fall back to the category id so the winner does not
    // depend on map iteration order.
    let (category_id, amount) = by_category
        .into_iter()
        .max_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        })?;
    Some(CategoryConcentration {
        category: snapshot.category_name(category_id).to_string(),
        share_percent: amount / total_expenses * 100.0,
    })
}

fn monthly_flows(snapshot: &Snapshot, trailing_months: u32) -> Vec<MonthFlow> {
    let current = snapshot.current_window.key();
    (0..trailing_months)
        .rev()
        .map(|offset| {
            let month = current.minus_months(offset);
            let window = month.window();
            let (income, expenses) = sum_flows(
                snapshot
                    .transactions
                    .iter()
                    .filter(|txn| window.contains(txn.date)),
            );
            MonthFlow {
                month,
                income,
                expenses,
            }
        })
        .collect()
}
