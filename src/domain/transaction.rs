use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// Direction of money movement for a single entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A dated movement of money, immutable once aggregated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub date: NaiveDate,
    pub category_id: Option<Uuid>,
    pub account_id: Uuid,
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount: f64, date: NaiveDate, account_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            date,
            category_id: None,
            account_id,
        }
    }

    /// Links the transaction to a category identifier.
    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind, TransactionKind::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.kind, TransactionKind::Expense)
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}
