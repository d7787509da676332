use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;
use crate::time::MonthKey;

/// A per-category spending ceiling for one month, optionally time-bounded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub category_id: Uuid,
    pub amount: f64,
    pub month: MonthKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Budget {
    pub fn new(category_id: Uuid, amount: f64, month: MonthKey) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            amount,
            month,
            end_date: None,
        }
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Whether this budget governs spending on the given reference date.
    pub fn applies_on(&self, reference: NaiveDate) -> bool {
        self.month == MonthKey::of(reference)
            && self.end_date.map_or(true, |end| end >= reference)
    }
}

impl Identifiable for Budget {
    fn id(&self) -> Uuid {
        self.id
    }
}
