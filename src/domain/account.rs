use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A money-holding account; its balance is maintained by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
    pub is_active: bool,
}

impl Account {
    pub fn new(name: impl Into<String>, balance: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance,
            is_active: true,
        }
    }

    /// Marks the account inactive; inactive balances are excluded from totals.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}
