mod common;

use advisor_core::config::AdvisorConfig;
use advisor_core::domain::{
    Account, Budget, Card, Category, CategoryKind, Goal, Invoice, Subscription, Transaction,
    TransactionKind,
};
use advisor_core::engine::Advisor;
use advisor_core::errors::AdvisorError;
use advisor_core::rules::RecommendationKind;
use advisor_core::time::MonthKey;
use chrono::NaiveDate;
use uuid::Uuid;

use common::MemorySource;

const REFERENCE: (i32, u32, u32) = (2024, 6, 15);

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(REFERENCE.0, REFERENCE.1, REFERENCE.2).unwrap()
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

/// A deliberately messy fixture that trips many rules at once.
fn busy_source() -> MemorySource {
    let mut source = MemorySource::new();
    let account = Account::new("Corriente", 800_000.0);
    let account_id = account.id;
    source.accounts.push(account);

    let groceries = Category::new("Mercado", CategoryKind::Expense);
    let groceries_id = groceries.id;
    source.categories.push(groceries);

    source.transactions.push(Transaction::new(
        TransactionKind::Income,
        2_000_000.0,
        date(6, 1),
        account_id,
    ));
    source.transactions.push(
        Transaction::new(TransactionKind::Expense, 1_500_000.0, date(6, 5), account_id)
            .with_category(groceries_id),
    );
    source.transactions.push(Transaction::new(
        TransactionKind::Expense,
        480_000.0,
        date(6, 8),
        account_id,
    ));
    source.transactions.push(Transaction::new(
        TransactionKind::Income,
        2_600_000.0,
        date(5, 1),
        account_id,
    ));
    source.transactions.push(Transaction::new(
        TransactionKind::Expense,
        1_200_000.0,
        date(5, 10),
        account_id,
    ));

    source.budgets.push(Budget::new(
        groceries_id,
        1_400_000.0,
        MonthKey::new(2024, 6).unwrap(),
    ));
    source.goals.push(
        Goal::new("Vacaciones", 3_000_000.0)
            .with_progress(1_200_000.0)
            .with_target_date(date(7, 5)),
    );
    source.subscriptions.push(
        Subscription::new("Streaming", 400_000.0).with_next_charge(date(6, 17)),
    );
    source
        .cards
        .push(Card::new("Visa", 4_500_000.0, 5_000_000.0).with_due_date(date(6, 18)));
    source.invoices.push(
        Invoice::new("Cliente A", 900_000.0).with_due_date(date(6, 1)),
    );
    source.invoices.push(
        Invoice::new("Cliente B", 300_000.0).with_due_date(date(6, 28)),
    );
    source
}

#[test]
fn recommendations_are_sorted_by_priority_non_increasing() {
    let source = busy_source();
    let report = Advisor::with_defaults()
        .run(&source, Uuid::new_v4(), reference())
        .expect("run succeeds");
    assert!(report
        .recommendations
        .windows(2)
        .all(|pair| pair[0].priority >= pair[1].priority));
    // The busy fixture fires well beyond the tips alone.
    assert!(report.recommendations.len() > 20);
}

#[test]
fn empty_transactions_short_circuit_to_first_steps() {
    let mut source = MemorySource::new();
    // Other collections exist but without transactions nothing else fires.
    source.accounts.push(Account::new("Corriente", 100_000.0));
    let report = Advisor::with_defaults()
        .run(&source, Uuid::new_v4(), reference())
        .expect("run succeeds");
    assert_eq!(report.recommendations.len(), 1);
    assert_eq!(
        report.recommendations[0].kind,
        RecommendationKind::FirstSteps
    );
}

#[test]
fn busy_fixture_trips_the_expected_rules() {
    let source = busy_source();
    let report = Advisor::with_defaults()
        .run(&source, Uuid::new_v4(), reference())
        .expect("run succeeds");
    let kinds: Vec<RecommendationKind> =
        report.recommendations.iter().map(|rec| rec.kind).collect();
    assert!(kinds.contains(&RecommendationKind::BudgetExceeded));
    assert!(kinds.contains(&RecommendationKind::GoalAtRisk));
    assert!(kinds.contains(&RecommendationKind::CardUtilizationHigh));
    assert!(kinds.contains(&RecommendationKind::CardPaymentDue));
    assert!(kinds.contains(&RecommendationKind::SubscriptionLoadHigh));
    assert!(kinds.contains(&RecommendationKind::SubscriptionChargeSoon));
    assert!(kinds.contains(&RecommendationKind::InvoiceOverdue));
    assert!(kinds.contains(&RecommendationKind::InvoicePending));
    assert!(kinds.contains(&RecommendationKind::CategoryConcentration));
}

#[test]
fn evaluation_is_idempotent_on_an_unchanged_snapshot() {
    let source = busy_source();
    let advisor = Advisor::with_defaults();
    let user = Uuid::new_v4();
    let first = advisor.run(&source, user, reference()).expect("first run");
    let second = advisor.run(&source, user, reference()).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn tied_category_totals_do_not_break_idempotence() {
    let mut source = MemorySource::new();
    let account = Account::new("Corriente", 5_000.0);
    let account_id = account.id;
    source.accounts.push(account);
    let groceries = Category::new("Mercado", CategoryKind::Expense);
    let rent = Category::new("Arriendo", CategoryKind::Expense);
    let (groceries_id, rent_id) = (groceries.id, rent.id);
    source.categories.push(groceries);
    source.categories.push(rent);
    source.transactions.push(Transaction::new(
        TransactionKind::Income,
        1_000.0,
        date(6, 1),
        account_id,
    ));
    source.transactions.push(
        Transaction::new(TransactionKind::Expense, 400.0, date(6, 3), account_id)
            .with_category(groceries_id),
    );
    source.transactions.push(
        Transaction::new(TransactionKind::Expense, 400.0, date(6, 4), account_id)
            .with_category(rent_id),
    );

    let advisor = Advisor::with_defaults();
    let user = Uuid::new_v4();
    let baseline = advisor.run(&source, user, reference()).expect("baseline run");
    for _ in 0..200 {
        let report = advisor.run(&source, user, reference()).expect("repeat run");
        assert_eq!(report, baseline, "report changed on an unchanged snapshot");
    }
}

#[test]
fn grouped_output_preserves_priority_order() {
    let source = busy_source();
    let report = Advisor::with_defaults()
        .run(&source, Uuid::new_v4(), reference())
        .expect("run succeeds");
    let groups = report.grouped();
    let regrouped: usize = groups.iter().map(|group| group.items.len()).sum();
    assert_eq!(regrouped, report.recommendations.len());
    for group in &groups {
        assert!(group
            .items
            .windows(2)
            .all(|pair| pair[0].priority >= pair[1].priority));
    }
    // Group order follows each area's highest-priority member.
    let leads: Vec<u8> = groups
        .iter()
        .map(|group| group.items[0].priority)
        .collect();
    assert!(leads.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn failed_reads_propagate_as_source_errors() {
    let mut source = busy_source();
    source.fail_reads = true;
    let err = Advisor::with_defaults()
        .run(&source, Uuid::new_v4(), reference())
        .expect_err("read failure surfaces");
    assert!(matches!(err, AdvisorError::Source(_)));
}

#[test]
fn transaction_limit_bounds_the_fetch() {
    let mut source = MemorySource::new();
    let account = Account::new("Corriente", 10_000.0);
    let account_id = account.id;
    source.accounts.push(account);
    for day in 1..=14 {
        source.transactions.push(Transaction::new(
            TransactionKind::Expense,
            10.0,
            date(6, day),
            account_id,
        ));
    }
    let config = AdvisorConfig {
        transaction_limit: 5,
        ..AdvisorConfig::default()
    };
    let advisor = Advisor::new(config);
    let report = advisor
        .run(&source, Uuid::new_v4(), reference())
        .expect("run succeeds");
    // Only the five newest transactions (days 10..14) are aggregated.
    assert!((report.metrics.expenses - 50.0).abs() < 1e-9);
}
