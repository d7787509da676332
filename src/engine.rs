//! Engine façade: collect a snapshot, evaluate the rules, rank the output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AdvisorConfig;
use crate::errors::AdvisorResult;
use crate::metrics::MetricSet;
use crate::rules::{self, Area, Recommendation};
use crate::score::HealthScore;
use crate::snapshot::{Snapshot, SnapshotSource};

/// Full engine output for one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvisorReport {
    pub user: Uuid,
    pub reference: NaiveDate,
    pub metrics: MetricSet,
    pub health: HealthScore,
    /// Sorted by priority descending; insertion order breaks ties.
    pub recommendations: Vec<Recommendation>,
}

/// Recommendations for one area, in priority order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationGroup {
    pub area: Area,
    pub items: Vec<Recommendation>,
}

impl AdvisorReport {
    /// Groups recommendations by area. Groups appear in the order their
    /// highest-priority member appears; items stay priority-sorted within.
    pub fn grouped(&self) -> Vec<RecommendationGroup> {
        let mut groups: Vec<RecommendationGroup> = Vec::new();
        for rec in &self.recommendations {
            match groups.iter_mut().find(|group| group.area == rec.area) {
                Some(group) => group.items.push(rec.clone()),
                None => groups.push(RecommendationGroup {
                    area: rec.area,
                    items: vec![rec.clone()],
                }),
            }
        }
        groups
    }
}

/// Entry point tying aggregation, metrics, rules, and scoring together.
pub struct Advisor {
    config: AdvisorConfig,
}

impl Advisor {
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(AdvisorConfig::default())
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Collects a snapshot from the source and evaluates it. A failed read
    /// aborts the run; there is no retry.
    pub fn run(
        &self,
        source: &dyn SnapshotSource,
        user: Uuid,
        reference: NaiveDate,
    ) -> AdvisorResult<AdvisorReport> {
        let snapshot = Snapshot::collect(source, user, reference, &self.config)?;
        Ok(self.evaluate(&snapshot))
    }

    /// Pure evaluation: the same snapshot always yields the same report.
    pub fn evaluate(&self, snapshot: &Snapshot) -> AdvisorReport {
        let metrics = MetricSet::compute(snapshot, &self.config);
        let health = HealthScore::compute(&metrics, snapshot);
        let mut recommendations = rules::evaluate(snapshot, &metrics);
        recommendations.sort_by(|a, b| b.priority.cmp(&a.priority));
        tracing::debug!(
            user = %snapshot.user,
            recommendations = recommendations.len(),
            score = health.value,
            "report evaluated"
        );
        AdvisorReport {
            user: snapshot.user,
            reference: snapshot.reference,
            metrics,
            health,
            recommendations,
        }
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::with_defaults()
    }
}
