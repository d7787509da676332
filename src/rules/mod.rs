//! The ordered rule table that turns metrics into ranked recommendations.

pub mod tips;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metrics::MetricSet;
use crate::snapshot::Snapshot;

/// Fixed rule priorities on a 0–100 scale, higher is more urgent.
///
/// These are behavioral constants carried over from the original rule table;
/// they are not derived from any formula and must not be "tidied up".
pub mod priority {
    pub const FIRST_STEPS: u8 = 100;
    pub const SPENDING_EXCEEDS_INCOME: u8 = 95;
    pub const EMERGENCY_FUND_CRITICAL: u8 = 92;
    pub const BUDGET_EXCEEDED: u8 = 88;
    pub const GOAL_AT_RISK: u8 = 87;
    pub const CARD_UTILIZATION_HIGH: u8 = 86;
    pub const LOW_SAVINGS_RATE: u8 = 85;
    pub const INCOME_DROPPING: u8 = 84;
    pub const EXPENSES_SPIKING: u8 = 82;
    pub const EMERGENCY_FUND_LOW: u8 = 80;
    pub const INVOICE_OVERDUE: u8 = 78;
    pub const BUDGET_NEAR_LIMIT: u8 = 76;
    pub const MODEST_SAVINGS_RATE: u8 = 73;
    pub const CATEGORY_CONCENTRATION: u8 = 70;
    pub const SUBSCRIPTION_LOAD_HIGH: u8 = 68;
    pub const CARD_UTILIZATION_ELEVATED: u8 = 66;
    pub const CARD_PAYMENT_DUE: u8 = 62;
    pub const SUBSCRIPTION_CHARGE_SOON: u8 = 55;
    pub const INVOICE_PENDING: u8 = 48;
    pub const INCOME_GROWING: u8 = 45;
    pub const GOAL_COMPLETED: u8 = 42;
    pub const STRONG_SAVINGS_RATE: u8 = 40;
    pub const EMERGENCY_FUND_SOLID: u8 = 35;
    pub const BUDGET_UNDERUSED: u8 = 30;
}

/// Urgency class surfaced alongside the numeric priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Urgent,
    Warning,
    Info,
    Positive,
}

/// Feed grouping for the presentation layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    Spending,
    Savings,
    EmergencyFund,
    Trends,
    Budgets,
    Goals,
    Subscriptions,
    Cards,
    Invoices,
    Education,
}

/// Closed set of recommendation kinds; adding a rule means adding a variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    FirstSteps,
    SpendingExceedsIncome,
    LowSavingsRate,
    ModestSavingsRate,
    StrongSavingsRate,
    EmergencyFundCritical,
    EmergencyFundLow,
    EmergencyFundSolid,
    ExpensesSpiking,
    IncomeDropping,
    IncomeGrowing,
    CategoryConcentration,
    BudgetExceeded,
    BudgetNearLimit,
    BudgetUnderused,
    GoalAtRisk,
    GoalCompleted,
    SubscriptionLoadHigh,
    SubscriptionChargeSoon,
    CardUtilizationHigh,
    CardUtilizationElevated,
    CardPaymentDue,
    InvoiceOverdue,
    InvoicePending,
    Tip,
}

impl RecommendationKind {
    /// Stable identifier slug used to build deterministic recommendation ids.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::FirstSteps => "first-steps",
            Self::SpendingExceedsIncome => "spending-exceeds-income",
            Self::LowSavingsRate => "low-savings-rate",
            Self::ModestSavingsRate => "modest-savings-rate",
            Self::StrongSavingsRate => "strong-savings-rate",
            Self::EmergencyFundCritical => "emergency-fund-critical",
            Self::EmergencyFundLow => "emergency-fund-low",
            Self::EmergencyFundSolid => "emergency-fund-solid",
            Self::ExpensesSpiking => "expenses-spiking",
            Self::IncomeDropping => "income-dropping",
            Self::IncomeGrowing => "income-growing",
            Self::CategoryConcentration => "category-concentration",
            Self::BudgetExceeded => "budget-exceeded",
            Self::BudgetNearLimit => "budget-near-limit",
            Self::BudgetUnderused => "budget-underused",
            Self::GoalAtRisk => "goal-at-risk",
            Self::GoalCompleted => "goal-completed",
            Self::SubscriptionLoadHigh => "subscription-load-high",
            Self::SubscriptionChargeSoon => "subscription-charge-soon",
            Self::CardUtilizationHigh => "card-utilization-high",
            Self::CardUtilizationElevated => "card-utilization-elevated",
            Self::CardPaymentDue => "card-payment-due",
            Self::InvoiceOverdue => "invoice-overdue",
            Self::InvoicePending => "invoice-pending",
            Self::Tip => "tip",
        }
    }
}

/// A single ranked recommendation produced by the rule table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Deterministic id: the kind slug, suffixed with the subject id for
    /// per-entity rules. Stable across evaluations of the same snapshot.
    pub id: String,
    pub kind: RecommendationKind,
    pub severity: Severity,
    pub area: Area,
    pub title: String,
    pub detail: String,
    pub priority: u8,
}

impl Recommendation {
    fn new(
        kind: RecommendationKind,
        severity: Severity,
        area: Area,
        title: impl Into<String>,
        detail: impl Into<String>,
        priority: u8,
    ) -> Self {
        Self {
            id: kind.slug().to_string(),
            kind,
            severity,
            area,
            title: title.into(),
            detail: detail.into(),
            priority,
        }
    }

    fn for_subject(
        kind: RecommendationKind,
        subject: Uuid,
        severity: Severity,
        area: Area,
        title: impl Into<String>,
        detail: impl Into<String>,
        priority: u8,
    ) -> Self {
        let mut rec = Self::new(kind, severity, area, title, detail, priority);
        rec.id = format!("{}:{}", kind.slug(), subject);
        rec
    }
}

fn money(value: f64) -> String {
    format!("${:.0}", value)
}

/// Runs the full rule table over one snapshot.
///
/// An empty transaction set short-circuits to a single onboarding
/// recommendation; otherwise every rule is independent and the generic tips
/// are appended at their fixed low priorities.
pub fn evaluate(snapshot: &Snapshot, metrics: &MetricSet) -> Vec<Recommendation> {
    if snapshot.transactions.is_empty() {
        return vec![first_steps()];
    }
    let mut out = Vec::new();
    savings_rules(metrics, &mut out);
    emergency_fund_rules(metrics, &mut out);
    trend_rules(metrics, &mut out);
    concentration_rule(metrics, &mut out);
    budget_rules(snapshot, &mut out);
    goal_rules(snapshot, &mut out);
    subscription_rules(snapshot, metrics, &mut out);
    card_rules(snapshot, &mut out);
    invoice_rules(snapshot, &mut out);
    out.extend(tips::all());
    out
}

fn first_steps() -> Recommendation {
    Recommendation::new(
        RecommendationKind::FirstSteps,
        Severity::Info,
        Area::Education,
        "Comienza a registrar tus movimientos",
        "Registra tus primeros ingresos y gastos para recibir métricas y \
         recomendaciones personalizadas.",
        priority::FIRST_STEPS,
    )
}

fn savings_rules(metrics: &MetricSet, out: &mut Vec<Recommendation>) {
    let rate = metrics.savings_rate;
    if rate < 0.0 {
        out.push(Recommendation::new(
            RecommendationKind::SpendingExceedsIncome,
            Severity::Urgent,
            Area::Spending,
            "Estás gastando más de lo que ganas",
            format!(
                "Este mes tus gastos ({}) superan tus ingresos ({}). Revisa tus \
                 gastos no esenciales cuanto antes.",
                money(metrics.expenses),
                money(metrics.income)
            ),
            priority::SPENDING_EXCEEDS_INCOME,
        ));
    } else if metrics.income > 0.0 && rate < 5.0 {
        out.push(Recommendation::new(
            RecommendationKind::LowSavingsRate,
            Severity::Warning,
            Area::Savings,
            "Tu tasa de ahorro es muy baja",
            format!(
                "Solo estás ahorrando el {:.1}% de tus ingresos. Intenta llevarla \
                 al menos al 10%.",
                rate
            ),
            priority::LOW_SAVINGS_RATE,
        ));
    } else if metrics.income > 0.0 && rate < 10.0 {
        out.push(Recommendation::new(
            RecommendationKind::ModestSavingsRate,
            Severity::Warning,
            Area::Savings,
            "Puedes ahorrar un poco más",
            format!(
                "Tu tasa de ahorro es del {:.1}%. Un pequeño ajuste en gastos \
                 variables puede llevarte al 10% o más.",
                rate
            ),
            priority::MODEST_SAVINGS_RATE,
        ));
    } else if rate >= 20.0 {
        out.push(Recommendation::new(
            RecommendationKind::StrongSavingsRate,
            Severity::Positive,
            Area::Savings,
            "Excelente tasa de ahorro",
            format!(
                "Estás ahorrando el {:.1}% de tus ingresos. Considera invertir el \
                 excedente para que trabaje por ti.",
                rate
            ),
            priority::STRONG_SAVINGS_RATE,
        ));
    }
}

fn emergency_fund_rules(metrics: &MetricSet, out: &mut Vec<Recommendation>) {
    let months = metrics.emergency_fund_months;
    if metrics.expenses <= 0.0 {
        return;
    }
    if months < 1.0 {
        out.push(Recommendation::new(
            RecommendationKind::EmergencyFundCritical,
            Severity::Urgent,
            Area::EmergencyFund,
            "No tienes fondo de emergencia",
            "Tu saldo cubre menos de un mes de gastos. Prioriza reunir al menos \
             un mes antes de cualquier otra meta.",
            priority::EMERGENCY_FUND_CRITICAL,
        ));
    } else if months < 3.0 {
        out.push(Recommendation::new(
            RecommendationKind::EmergencyFundLow,
            Severity::Warning,
            Area::EmergencyFund,
            "Tu fondo de emergencia es pequeño",
            format!(
                "Tu saldo cubre {:.1} meses de gastos. Lo recomendado son entre 3 \
                 y 6 meses.",
                months
            ),
            priority::EMERGENCY_FUND_LOW,
        ));
    } else if months >= 6.0 {
        out.push(Recommendation::new(
            RecommendationKind::EmergencyFundSolid,
            Severity::Positive,
            Area::EmergencyFund,
            "Fondo de emergencia sólido",
            format!(
                "Tu saldo cubre {:.1} meses de gastos. El excedente podría rendir \
                 más en una inversión de bajo riesgo.",
                months
            ),
            priority::EMERGENCY_FUND_SOLID,
        ));
    }
}

fn trend_rules(metrics: &MetricSet, out: &mut Vec<Recommendation>) {
    if let Some(change) = metrics.expense_change_percent {
        if change > 20.0 {
            out.push(Recommendation::new(
                RecommendationKind::ExpensesSpiking,
                Severity::Warning,
                Area::Trends,
                "Tus gastos están creciendo rápido",
                format!(
                    "Tus gastos subieron un {:.1}% frente al mes pasado. Revisa \
                     qué cambió antes de que se vuelva costumbre.",
                    change
                ),
                priority::EXPENSES_SPIKING,
            ));
        }
    }
    if let Some(change) = metrics.income_change_percent {
        if change < -20.0 {
            out.push(Recommendation::new(
                RecommendationKind::IncomeDropping,
                Severity::Warning,
                Area::Trends,
                "Tus ingresos cayeron este mes",
                format!(
                    "Tus ingresos bajaron un {:.1}% frente al mes pasado. Ajusta \
                     tu presupuesto a la nueva realidad.",
                    change.abs()
                ),
                priority::INCOME_DROPPING,
            ));
        } else if change > 20.0 {
            out.push(Recommendation::new(
                RecommendationKind::IncomeGrowing,
                Severity::Positive,
                Area::Trends,
                "Tus ingresos están creciendo",
                format!(
                    "Tus ingresos subieron un {:.1}% frente al mes pasado. Es un \
                     buen momento para aumentar tu ahorro automático.",
                    change
                ),
                priority::INCOME_GROWING,
            ));
        }
    }
}

fn concentration_rule(metrics: &MetricSet, out: &mut Vec<Recommendation>) {
    if let Some(concentration) = &metrics.concentration {
        if concentration.share_percent > 50.0 {
            out.push(Recommendation::new(
                RecommendationKind::CategoryConcentration,
                Severity::Warning,
                Area::Spending,
                "Más de la mitad de tu gasto está en una sola categoría",
                format!(
                    "\"{}\" concentra el {:.1}% de tus gastos del mes. Revisa si \
                     hay espacio para recortar ahí.",
                    concentration.category, concentration.share_percent
                ),
                priority::CATEGORY_CONCENTRATION,
            ));
        }
    }
}

fn budget_rules(snapshot: &Snapshot, out: &mut Vec<Recommendation>) {
    // Underuse only reads as a signal near the end of the month.
    let late_in_month = snapshot.reference.day() >= 25;
    for budget in snapshot.applying_budgets() {
        if budget.amount <= 0.0 {
            continue;
        }
        let spent = snapshot.budget_spent(budget);
        let usage = spent / budget.amount * 100.0;
        let category = snapshot.category_name(Some(budget.category_id));
        if usage > 100.0 {
            out.push(Recommendation::for_subject(
                RecommendationKind::BudgetExceeded,
                budget.id,
                Severity::Urgent,
                Area::Budgets,
                format!("Presupuesto de {} excedido", category),
                format!(
                    "Llevas {} gastados de un presupuesto de {} ({:.0}%).",
                    money(spent),
                    money(budget.amount),
                    usage
                ),
                priority::BUDGET_EXCEEDED,
            ));
        } else if usage > 90.0 {
            out.push(Recommendation::for_subject(
                RecommendationKind::BudgetNearLimit,
                budget.id,
                Severity::Warning,
                Area::Budgets,
                format!("Presupuesto de {} casi agotado", category),
                format!(
                    "Llevas {} gastados de un presupuesto de {} ({:.0}%). Queda \
                     poco margen para el resto del mes.",
                    money(spent),
                    money(budget.amount),
                    usage
                ),
                priority::BUDGET_NEAR_LIMIT,
            ));
        } else if late_in_month && usage < 50.0 {
            out.push(Recommendation::for_subject(
                RecommendationKind::BudgetUnderused,
                budget.id,
                Severity::Info,
                Area::Budgets,
                format!("Presupuesto de {} con amplio margen", category),
                format!(
                    "Cerca del fin de mes solo llevas el {:.0}% usado. Podrías \
                     reasignar parte de ese presupuesto a tus metas.",
                    usage
                ),
                priority::BUDGET_UNDERUSED,
            ));
        }
    }
}

fn goal_rules(snapshot: &Snapshot, out: &mut Vec<Recommendation>) {
    for goal in &snapshot.goals {
        if goal.is_complete() {
            out.push(Recommendation::for_subject(
                RecommendationKind::GoalCompleted,
                goal.id,
                Severity::Positive,
                Area::Goals,
                format!("Meta \"{}\" cumplida", goal.name),
                "Alcanzaste el 100% de esta meta. Márcala como completada y \
                 define la siguiente.",
                priority::GOAL_COMPLETED,
            ));
            continue;
        }
        let progress = goal.progress_percent();
        if let Some(target_date) = goal.target_date {
            let days_left = (target_date - snapshot.reference).num_days();
            if (0..=30).contains(&days_left) && progress < 80.0 {
                out.push(Recommendation::for_subject(
                    RecommendationKind::GoalAtRisk,
                    goal.id,
                    Severity::Urgent,
                    Area::Goals,
                    format!("Meta \"{}\" en riesgo", goal.name),
                    format!(
                        "Quedan {} días y llevas el {:.0}% del objetivo. Necesitas \
                         un aporte extraordinario o mover la fecha.",
                        days_left, progress
                    ),
                    priority::GOAL_AT_RISK,
                ));
            }
        }
    }
}

fn subscription_rules(snapshot: &Snapshot, metrics: &MetricSet, out: &mut Vec<Recommendation>) {
    let load: f64 = snapshot
        .subscriptions
        .iter()
        .filter(|sub| sub.is_active)
        .map(|sub| sub.amount)
        .sum();
    if metrics.income > 0.0 && load > metrics.income * 0.15 {
        out.push(Recommendation::new(
            RecommendationKind::SubscriptionLoadHigh,
            Severity::Warning,
            Area::Subscriptions,
            "Tus suscripciones pesan demasiado",
            format!(
                "Pagas {} al mes en suscripciones, más del 15% de tus ingresos. \
                 Cancela las que no uses.",
                money(load)
            ),
            priority::SUBSCRIPTION_LOAD_HIGH,
        ));
    }
    for sub in snapshot.subscriptions.iter().filter(|sub| sub.is_active) {
        if let Some(next_charge) = sub.next_charge {
            let days = (next_charge - snapshot.reference).num_days();
            if (0..=3).contains(&days) {
                out.push(Recommendation::for_subject(
                    RecommendationKind::SubscriptionChargeSoon,
                    sub.id,
                    Severity::Info,
                    Area::Subscriptions,
                    format!("Cobro próximo: {}", sub.name),
                    format!(
                        "Se cobrarán {} en {} días. Asegúrate de tener saldo \
                         disponible.",
                        money(sub.amount),
                        days
                    ),
                    priority::SUBSCRIPTION_CHARGE_SOON,
                ));
            }
        }
    }
}

fn card_rules(snapshot: &Snapshot, out: &mut Vec<Recommendation>) {
    for card in snapshot.cards.iter().filter(|card| card.is_active) {
        if let Some(utilization) = card.utilization_percent() {
            if utilization > 80.0 {
                out.push(Recommendation::for_subject(
                    RecommendationKind::CardUtilizationHigh,
                    card.id,
                    Severity::Urgent,
                    Area::Cards,
                    format!("Tarjeta {} al límite", card.name),
                    format!(
                        "Estás usando el {:.0}% del cupo. Por encima del 80% tu \
                         puntaje crediticio se resiente.",
                        utilization
                    ),
                    priority::CARD_UTILIZATION_HIGH,
                ));
            } else if utilization > 50.0 {
                out.push(Recommendation::for_subject(
                    RecommendationKind::CardUtilizationElevated,
                    card.id,
                    Severity::Warning,
                    Area::Cards,
                    format!("Uso elevado de la tarjeta {}", card.name),
                    format!(
                        "Estás usando el {:.0}% del cupo. Intenta mantenerlo por \
                         debajo del 50%.",
                        utilization
                    ),
                    priority::CARD_UTILIZATION_ELEVATED,
                ));
            }
        }
        if let Some(due_date) = card.due_date {
            let days = (due_date - snapshot.reference).num_days();
            if (0..=5).contains(&days) {
                out.push(Recommendation::for_subject(
                    RecommendationKind::CardPaymentDue,
                    card.id,
                    Severity::Info,
                    Area::Cards,
                    format!("Pago de {} próximo a vencer", card.name),
                    format!(
                        "El pago vence en {} días. Paga el total para evitar \
                         intereses.",
                        days
                    ),
                    priority::CARD_PAYMENT_DUE,
                ));
            }
        }
    }
}

fn invoice_rules(snapshot: &Snapshot, out: &mut Vec<Recommendation>) {
    let overdue: Vec<_> = snapshot
        .invoices
        .iter()
        .filter(|invoice| invoice.is_overdue(snapshot.reference))
        .collect();
    if !overdue.is_empty() {
        let total: f64 = overdue.iter().map(|invoice| invoice.amount).sum();
        out.push(Recommendation::new(
            RecommendationKind::InvoiceOverdue,
            Severity::Warning,
            Area::Invoices,
            "Tienes facturas vencidas por cobrar",
            format!(
                "{} factura(s) vencida(s) por un total de {}. Haz seguimiento a \
                 esos clientes.",
                overdue.len(),
                money(total)
            ),
            priority::INVOICE_OVERDUE,
        ));
    }
    let pending = snapshot
        .invoices
        .iter()
        .filter(|invoice| invoice.is_open() && !invoice.is_overdue(snapshot.reference))
        .count();
    if pending > 0 {
        out.push(Recommendation::new(
            RecommendationKind::InvoicePending,
            Severity::Info,
            Area::Invoices,
            "Facturas pendientes de cobro",
            format!(
                "Tienes {} factura(s) pendiente(s) dentro de plazo. Revisa sus \
                 fechas de vencimiento.",
                pending
            ),
            priority::INVOICE_PENDING,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdvisorConfig;
    use crate::domain::{Budget, Goal, Transaction, TransactionKind};
    use crate::time::{MonthKey, MonthWindow};
    use chrono::NaiveDate;

    fn snapshot_for(reference: NaiveDate) -> Snapshot {
        let current_window = MonthWindow::containing(reference);
        Snapshot {
            user: Uuid::new_v4(),
            reference,
            current_window,
            previous_window: current_window.previous(),
            transactions: Vec::new(),
            accounts: Vec::new(),
            budgets: Vec::new(),
            categories: Vec::new(),
            goals: Vec::new(),
            subscriptions: Vec::new(),
            invoices: Vec::new(),
            cards: Vec::new(),
        }
    }

    fn evaluate_snapshot(snapshot: &Snapshot) -> Vec<Recommendation> {
        let metrics = MetricSet::compute(snapshot, &AdvisorConfig::default());
        evaluate(snapshot, &metrics)
    }

    fn kinds(recs: &[Recommendation]) -> Vec<RecommendationKind> {
        recs.iter().map(|rec| rec.kind).collect()
    }

    #[test]
    fn empty_snapshot_yields_only_first_steps() {
        let snapshot = snapshot_for(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        let recs = evaluate_snapshot(&snapshot);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].kind, RecommendationKind::FirstSteps);
        assert_eq!(recs[0].priority, priority::FIRST_STEPS);
    }

    #[test]
    fn overspending_emits_the_urgent_rule_at_95() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let mut snapshot = snapshot_for(reference);
        let account = Uuid::new_v4();
        snapshot.transactions.push(Transaction::new(
            TransactionKind::Income,
            10_000_000.0,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            account,
        ));
        snapshot.transactions.push(Transaction::new(
            TransactionKind::Expense,
            10_500_000.0,
            NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
            account,
        ));
        let recs = evaluate_snapshot(&snapshot);
        let rec = recs
            .iter()
            .find(|rec| rec.kind == RecommendationKind::SpendingExceedsIncome)
            .expect("overspending rule fires");
        assert_eq!(rec.priority, 95);
        assert_eq!(rec.severity, Severity::Urgent);
    }

    #[test]
    fn budget_at_95_percent_warns_but_is_not_exceeded() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let mut snapshot = snapshot_for(reference);
        let category_id = Uuid::new_v4();
        let account = Uuid::new_v4();
        snapshot.transactions.push(Transaction::new(
            TransactionKind::Income,
            2_000_000.0,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            account,
        ));
        snapshot.transactions.push(
            Transaction::new(
                TransactionKind::Expense,
                475_000.0,
                NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
                account,
            )
            .with_category(category_id),
        );
        snapshot
            .budgets
            .push(Budget::new(category_id, 500_000.0, MonthKey::new(2024, 6).unwrap()));
        let recs = evaluate_snapshot(&snapshot);
        let near = recs
            .iter()
            .find(|rec| rec.kind == RecommendationKind::BudgetNearLimit)
            .expect("near-limit rule fires");
        assert_eq!(near.priority, 76);
        assert!(!kinds(&recs).contains(&RecommendationKind::BudgetExceeded));
    }

    #[test]
    fn goal_close_to_deadline_with_low_progress_is_at_risk() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut snapshot = snapshot_for(reference);
        snapshot.transactions.push(Transaction::new(
            TransactionKind::Income,
            1_000.0,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            Uuid::new_v4(),
        ));
        snapshot.goals.push(
            Goal::new("Viaje", 1_000_000.0)
                .with_progress(600_000.0)
                .with_target_date(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()),
        );
        let recs = evaluate_snapshot(&snapshot);
        let risk = recs
            .iter()
            .find(|rec| rec.kind == RecommendationKind::GoalAtRisk)
            .expect("goal-at-risk rule fires");
        assert_eq!(risk.priority, 87);
    }

    #[test]
    fn completed_goal_is_celebrated_not_risked() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut snapshot = snapshot_for(reference);
        snapshot.transactions.push(Transaction::new(
            TransactionKind::Income,
            1_000.0,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            Uuid::new_v4(),
        ));
        snapshot.goals.push(
            Goal::new("Fondo", 500.0)
                .with_progress(500.0)
                .with_target_date(NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()),
        );
        let recs = evaluate_snapshot(&snapshot);
        let all = kinds(&recs);
        assert!(all.contains(&RecommendationKind::GoalCompleted));
        assert!(!all.contains(&RecommendationKind::GoalAtRisk));
    }

    #[test]
    fn budget_underuse_only_fires_late_in_month() {
        let category_id = Uuid::new_v4();
        let account = Uuid::new_v4();
        let build = |day: u32| {
            let reference = NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
            let mut snapshot = snapshot_for(reference);
            snapshot.transactions.push(Transaction::new(
                TransactionKind::Income,
                1_000.0,
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                account,
            ));
            snapshot.transactions.push(
                Transaction::new(
                    TransactionKind::Expense,
                    100.0,
                    NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
                    account,
                )
                .with_category(category_id),
            );
            snapshot
                .budgets
                .push(Budget::new(category_id, 1_000.0, MonthKey::new(2024, 6).unwrap()));
            snapshot
        };
        let early = evaluate_snapshot(&build(10));
        assert!(!kinds(&early).contains(&RecommendationKind::BudgetUnderused));
        let late = evaluate_snapshot(&build(26));
        assert!(kinds(&late).contains(&RecommendationKind::BudgetUnderused));
    }

    #[test]
    fn tips_are_appended_for_any_non_empty_snapshot() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let mut snapshot = snapshot_for(reference);
        snapshot.transactions.push(Transaction::new(
            TransactionKind::Income,
            1_000.0,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            Uuid::new_v4(),
        ));
        let recs = evaluate_snapshot(&snapshot);
        let tip_count = recs
            .iter()
            .filter(|rec| rec.kind == RecommendationKind::Tip)
            .count();
        assert_eq!(tip_count, tips::all().len());
    }
}
