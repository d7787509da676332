use advisor_core::domain::{
    Account, Budget, Card, Category, Goal, Invoice, Subscription, Transaction,
};
use advisor_core::errors::{AdvisorError, AdvisorResult};
use advisor_core::snapshot::{SnapshotSource, TransactionQuery};
use uuid::Uuid;

/// In-memory snapshot source backing the integration tests.
#[derive(Default)]
pub struct MemorySource {
    pub fail_reads: bool,
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>,
    pub budgets: Vec<Budget>,
    pub categories: Vec<Category>,
    pub goals: Vec<Goal>,
    pub subscriptions: Vec<Subscription>,
    pub invoices: Vec<Invoice>,
    pub cards: Vec<Card>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> AdvisorResult<()> {
        if self.fail_reads {
            Err(AdvisorError::Source("simulated read failure".into()))
        } else {
            Ok(())
        }
    }
}

impl SnapshotSource for MemorySource {
    fn transactions(
        &self,
        _user: Uuid,
        query: TransactionQuery,
    ) -> AdvisorResult<Vec<Transaction>> {
        self.guard()?;
        let mut transactions = self.transactions.clone();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        transactions.truncate(query.limit);
        Ok(transactions)
    }

    fn accounts(&self, _user: Uuid) -> AdvisorResult<Vec<Account>> {
        self.guard()?;
        Ok(self.accounts.clone())
    }

    fn budgets(&self, _user: Uuid) -> AdvisorResult<Vec<Budget>> {
        self.guard()?;
        Ok(self.budgets.clone())
    }

    fn categories(&self, _user: Uuid) -> AdvisorResult<Vec<Category>> {
        self.guard()?;
        Ok(self.categories.clone())
    }

    fn goals(&self, _user: Uuid) -> AdvisorResult<Vec<Goal>> {
        self.guard()?;
        Ok(self.goals.clone())
    }

    fn subscriptions(&self, _user: Uuid) -> AdvisorResult<Vec<Subscription>> {
        self.guard()?;
        Ok(self
            .subscriptions
            .iter()
            .filter(|sub| sub.is_active)
            .cloned()
            .collect())
    }

    fn invoices(&self, _user: Uuid) -> AdvisorResult<Vec<Invoice>> {
        self.guard()?;
        Ok(self.invoices.clone())
    }

    fn cards(&self, _user: Uuid) -> AdvisorResult<Vec<Card>> {
        self.guard()?;
        Ok(self
            .cards
            .iter()
            .filter(|card| card.is_active)
            .cloned()
            .collect())
    }
}
