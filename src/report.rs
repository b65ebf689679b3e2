//! Typed per-unit outcomes for the batch jobs.
//!
//! Every processed unit (catalog row, YAML entry, construct file) yields an
//! [`Outcome`] collected into a [`StageReport`]; a job aggregates its stage
//! reports into a [`JobReport`] and logs a summary at the end. Failures never
//! abort a job: a stage that cannot run at all is recorded as aborted and the
//! job moves on.

use log::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Existing,
    Skipped(String),
    Failed(String),
}

#[derive(Debug)]
pub struct StageReport {
    name: String,
    outcomes: Vec<(String, Outcome)>,
    aborted: Option<String>,
}

impl StageReport {
    pub fn new(name: impl Into<String>) -> Self {
        StageReport {
            name: name.into(),
            outcomes: Vec::new(),
            aborted: None,
        }
    }

    /// Records (and logs) the outcome of one processed unit.
    pub fn record(&mut self, key: impl Into<String>, outcome: Outcome) {
        let key = key.into();
        match &outcome {
            Outcome::Created => info!("created {}", key),
            Outcome::Existing => {}
            Outcome::Skipped(reason) => warn!("skipped {}: {}", key, reason),
            Outcome::Failed(reason) => error!("failed {}: {}", key, reason),
        }
        self.outcomes.push((key, outcome));
    }

    /// Marks the whole stage as aborted. Outcomes recorded before the abort
    /// are kept; nothing that was already persisted is rolled back.
    pub fn abort(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        error!("{} aborted: {}", self.name, reason);
        self.aborted = Some(reason);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aborted(&self) -> Option<&str> {
        self.aborted.as_deref()
    }

    pub fn outcomes(&self) -> &[(String, Outcome)] {
        &self.outcomes
    }

    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Created))
    }

    pub fn existing(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Existing))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    pub fn log_summary(&self) {
        match &self.aborted {
            Some(reason) => warn!(
                "{}: aborted ({}); {} created, {} existing, {} skipped, {} failed",
                self.name,
                reason,
                self.created(),
                self.existing(),
                self.skipped(),
                self.failed()
            ),
            None => info!(
                "{}: {} created, {} existing, {} skipped, {} failed",
                self.name,
                self.created(),
                self.existing(),
                self.skipped(),
                self.failed()
            ),
        }
    }

    fn count(&self, predicate: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| predicate(o)).count()
    }
}

#[derive(Debug, Default)]
pub struct JobReport {
    stages: Vec<StageReport>,
}

impl JobReport {
    pub fn push(&mut self, stage: StageReport) {
        self.stages.push(stage);
    }

    pub fn stages(&self) -> &[StageReport] {
        &self.stages
    }

    pub fn stage(&self, name: &str) -> Option<&StageReport> {
        self.stages.iter().find(|s| s.name() == name)
    }

    pub fn log_summary(&self) {
        for stage in &self.stages {
            stage.log_summary();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_outcomes_by_kind() {
        let mut report = StageReport::new("resources");
        report.record("resource a", Outcome::Created);
        report.record("resource b", Outcome::Existing);
        report.record("resource c", Outcome::Skipped("no url".to_string()));
        report.record("resource d", Outcome::Failed("constraint".to_string()));
        report.record("resource e", Outcome::Created);

        assert_eq!(report.created(), 2);
        assert_eq!(report.existing(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failed(), 1);
        assert!(report.aborted().is_none());
    }

    #[test]
    fn abort_keeps_recorded_outcomes() {
        let mut report = StageReport::new("ligands");
        report.record("ligand x", Outcome::Created);
        report.abort("pubchem resource missing");

        assert_eq!(report.created(), 1);
        assert_eq!(report.aborted(), Some("pubchem resource missing"));
    }

    #[test]
    fn job_report_finds_stage_by_name() {
        let mut job = JobReport::default();
        job.push(StageReport::new("resources"));
        job.push(StageReport::new("ligands"));

        assert!(job.stage("ligands").is_some());
        assert!(job.stage("news").is_none());
    }
}
