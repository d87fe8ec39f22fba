use keyspace_analysis_domain::{
    analytics::Aggregator,
    config::AnalysisConfig,
    grouping::KeyGrouper,
    model::{Report, ReportSet},
};
use keyspace_analysis_ports::{
    keyspace::{DatabaseCatalog, KeySource, SizeEstimator},
    progress::ProgressSink,
};
use keyspace_analysis_shared_kernel::{
    ApplicationError, ByteSize, DatabaseId, KeyCountHint, KeyspaceAnalysisError, Result,
};
use log::{debug, info, warn};

use crate::dto::AnalysisOutcome;

pub struct RunAnalysis<'a> {
    keys: &'a dyn KeySource,
    sizes: &'a dyn SizeEstimator,
    progress: Option<&'a dyn ProgressSink>,
}

impl<'a> RunAnalysis<'a> {
    pub fn new(keys: &'a dyn KeySource, sizes: &'a dyn SizeEstimator) -> Self {
        Self { keys, sizes, progress: None }
    }

    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Enumerates the store's databases, keeps the ones `config` selects and
    /// analyses each of them.
    pub fn execute(&self, config: &AnalysisConfig) -> Result<AnalysisOutcome> {
        let catalog = self.keys.databases().map_err(|e| ApplicationError::DatabaseEnumerationFailed {
            reason: e.to_string(),
            source: Some(Box::new(e)),
        })?;
        let selected: DatabaseCatalog = catalog.into_iter().filter(|(db, _)| config.selects(*db)).collect();
        if selected.is_empty() {
            warn!("no database to analyse");
        }
        Ok(self.run(&selected, &config.grouper()))
    }

    /// Runs one independent pass per database in `databases`.
    ///
    /// A database whose keys cannot be listed ends up with an empty report;
    /// a key whose size cannot be estimated is counted as zero bytes.
    pub fn run(&self, databases: &DatabaseCatalog, grouper: &KeyGrouper) -> AnalysisOutcome {
        let mut outcome = AnalysisOutcome::default();
        let mut reports = ReportSet::new();

        for (&db, &hint) in databases {
            if let Some(progress) = self.progress {
                progress.on_database(db, hint);
            }
            let (sorted, keys) = match self.analyse_database(db, hint, grouper, &mut outcome) {
                Ok(pass) => pass,
                Err(err) => {
                    warn!("{db}: listing keys failed, leaving the report empty: {err}");
                    outcome.failed_databases.push(db);
                    (Vec::new(), 0)
                }
            };
            if let Some(progress) = self.progress {
                progress.on_database_done(db, keys, sorted.len());
            }
            reports.insert(db, sorted);
        }

        if let Some(progress) = self.progress {
            progress.on_complete(reports.len());
        }
        outcome.reports = reports;
        outcome
    }

    fn analyse_database(
        &self,
        db: DatabaseId,
        hint: KeyCountHint,
        grouper: &KeyGrouper,
        outcome: &mut AnalysisOutcome,
    ) -> Result<(Vec<Report>, usize)> {
        let keys = self.keys.keys(db, hint)?;
        info!("{db}: {} keys listed (hint {})", keys.len(), hint.value());

        let mut aggregator = Aggregator::new(grouper);
        for key in &keys {
            let size = self.size_of(db, key).unwrap_or_else(|| {
                outcome.unavailable_estimates += 1;
                ByteSize::zero()
            });
            aggregator.accumulate(key, size);
        }
        Ok((aggregator.finish(), keys.len()))
    }

    fn size_of(&self, db: DatabaseId, key: &str) -> Option<ByteSize> {
        match self.sizes.estimate(db, key) {
            Ok(Some(size)) => Some(size),
            Ok(None) => {
                debug!("{db}: no size estimate for {key:?}");
                None
            }
            Err(err) => {
                log_estimate_failure(db, key, &err);
                None
            }
        }
    }
}

fn log_estimate_failure(db: DatabaseId, key: &str, err: &KeyspaceAnalysisError) {
    warn!("{db}: size estimate for {key:?} failed, counting 0 bytes: {err}");
}
