use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A credit card with a revolving balance against a limit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
    pub credit_limit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl Card {
    pub fn new(name: impl Into<String>, balance: f64, credit_limit: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance,
            credit_limit,
            due_date: None,
            is_active: true,
        }
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Balance as a share of the limit, or `None` when no limit is set.
    pub fn utilization_percent(&self) -> Option<f64> {
        if self.credit_limit > 0.0 {
            Some(self.balance / self.credit_limit * 100.0)
        } else {
            None
        }
    }
}

impl Identifiable for Card {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Card {
    fn name(&self) -> &str {
        &self.name
    }
}
