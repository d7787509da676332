use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
}

/// A receivable issued to a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: Uuid,
    pub client: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub status: InvoiceStatus,
}

impl Invoice {
    pub fn new(client: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            client: client.into(),
            amount,
            due_date: None,
            status: InvoiceStatus::Pending,
        }
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_status(mut self, status: InvoiceStatus) -> Self {
        self.status = status;
        self
    }

    /// Overdue either by explicit status or by a pending invoice past its due date.
    pub fn is_overdue(&self, reference: NaiveDate) -> bool {
        match self.status {
            InvoiceStatus::Overdue => true,
            InvoiceStatus::Pending => self.due_date.map_or(false, |due| due < reference),
            InvoiceStatus::Paid => false,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.status, InvoiceStatus::Paid)
    }
}

impl Identifiable for Invoice {
    fn id(&self) -> Uuid {
        self.id
    }
}
