//! Snapshot aggregation across the persistence boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AdvisorConfig;
use crate::domain::{
    find_by_id, Account, Budget, Card, Category, Goal, Invoice, NamedEntity, Subscription,
    Transaction,
};
use crate::errors::AdvisorResult;
use crate::time::MonthWindow;

/// Label resolved when a transaction references a missing category.
pub const FALLBACK_CATEGORY: &str = "Sin categoría";

/// Bounds applied when fetching transactions, newest first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionQuery {
    pub limit: usize,
}

impl TransactionQuery {
    pub fn recent(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self { limit: 200 }
    }
}

/// Read-only boundary to the persistence layer.
///
/// Implementations fetch per-user collections; `subscriptions` and `cards`
/// return active records only. An empty result set is valid and means zero —
/// only a failed read is an error.
pub trait SnapshotSource {
    fn transactions(&self, user: Uuid, query: TransactionQuery)
        -> AdvisorResult<Vec<Transaction>>;
    fn accounts(&self, user: Uuid) -> AdvisorResult<Vec<Account>>;
    fn budgets(&self, user: Uuid) -> AdvisorResult<Vec<Budget>>;
    fn categories(&self, user: Uuid) -> AdvisorResult<Vec<Category>>;
    fn goals(&self, user: Uuid) -> AdvisorResult<Vec<Goal>>;
    fn subscriptions(&self, user: Uuid) -> AdvisorResult<Vec<Subscription>>;
    fn invoices(&self, user: Uuid) -> AdvisorResult<Vec<Invoice>>;
    fn cards(&self, user: Uuid) -> AdvisorResult<Vec<Card>>;
}

/// A point-in-time view of one user's financial data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub user: Uuid,
    pub reference: NaiveDate,
    pub current_window: MonthWindow,
    pub previous_window: MonthWindow,
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>,
    pub budgets: Vec<Budget>,
    pub categories: Vec<Category>,
    pub goals: Vec<Goal>,
    pub subscriptions: Vec<Subscription>,
    pub invoices: Vec<Invoice>,
    pub cards: Vec<Card>,
}

impl Snapshot {
    /// Fetches every collection for the user and windows it around the
    /// reference date. Any failed read aborts the whole collection.
    pub fn collect(
        source: &dyn SnapshotSource,
        user: Uuid,
        reference: NaiveDate,
        config: &AdvisorConfig,
    ) -> AdvisorResult<Self> {
        let current_window = MonthWindow::containing(reference);
        let previous_window = current_window.previous();

        let transactions =
            source.transactions(user, TransactionQuery::recent(config.transaction_limit))?;
        let accounts = source.accounts(user)?;
        let budgets = source.budgets(user)?;
        let categories = source.categories(user)?;
        let goals = source.goals(user)?;
        let subscriptions = source.subscriptions(user)?;
        let invoices = source.invoices(user)?;
        let cards = source.cards(user)?;

        tracing::debug!(
            %user,
            transactions = transactions.len(),
            accounts = accounts.len(),
            budgets = budgets.len(),
            "snapshot collected"
        );

        Ok(Self {
            user,
            reference,
            current_window,
            previous_window,
            transactions,
            accounts,
            budgets,
            categories,
            goals,
            subscriptions,
            invoices,
            cards,
        })
    }

    pub fn current_month_transactions(&self) -> impl Iterator<Item = &Transaction> {
        let window = self.current_window;
        self.transactions
            .iter()
            .filter(move |txn| window.contains(txn.date))
    }

    pub fn previous_month_transactions(&self) -> impl Iterator<Item = &Transaction> {
        let window = self.previous_window;
        self.transactions
            .iter()
            .filter(move |txn| window.contains(txn.date))
    }

    /// Resolves a category name, degrading to the fallback label when the
    /// category was deleted or never set.
    pub fn category_name(&self, category_id: Option<Uuid>) -> &str {
        category_id
            .and_then(|id| find_by_id(&self.categories, id))
            .map(NamedEntity::name)
            .unwrap_or(FALLBACK_CATEGORY)
    }

    /// Sum of active account balances.
    pub fn total_balance(&self) -> f64 {
        self.accounts
            .iter()
            .filter(|account| account.is_active)
            .map(|account| account.balance)
            .sum()
    }

    /// Budgets governing spending on the reference date.
    pub fn applying_budgets(&self) -> impl Iterator<Item = &Budget> {
        let reference = self.reference;
        self.budgets
            .iter()
            .filter(move |budget| budget.applies_on(reference))
    }

    /// Current-month expense total attributed to the budget's category.
    pub fn budget_spent(&self, budget: &Budget) -> f64 {
        self.current_month_transactions()
            .filter(|txn| txn.is_expense() && txn.category_id == Some(budget.category_id))
            .map(|txn| txn.amount)
            .sum()
    }
}
