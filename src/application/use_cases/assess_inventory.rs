use crate::application::dto::{AssessmentRequest, AssessmentResponse, StorageEstimate};
use crate::config::EngineConfig;
use crate::ports::inbound::InventoryAssessmentPort;
use crate::ports::outbound::{CatalogReader, ProgressReporter};
use crate::shared::{Result, SizingError};
use crate::sizing::domain::{
    Catalog, InventoryTable, MatchSummary, Recommendation, ResolutionTier, RetentionBand,
};
use crate::sizing::policies::MatchPolicy;
use crate::sizing::services::{
    ChannelAggregator, ColumnIdentifier, ColumnSanitizer, FuzzyMatcher, StorageEstimator,
    UnitRecommender,
};

/// Number of reported pipeline stages
const STAGES: usize = 5;

/// Model and count column chosen for one table
struct ColumnLayout {
    model_column: usize,
    count_column: Option<usize>,
    excluded_columns: Vec<usize>,
}

/// AssessInventoryUseCase - Runs one inventory through the sizing pipeline
///
/// The catalog is read once at construction and shared read-only by every
/// run; each `execute` call is independent and returns a fresh response.
///
/// # Type Parameters
/// * `CR` - CatalogReader implementation
/// * `PR` - ProgressReporter implementation
pub struct AssessInventoryUseCase<CR, PR> {
    catalog_reader: CR,
    progress_reporter: PR,
    catalog: Catalog,
    config: EngineConfig,
    policy: MatchPolicy,
    estimator: StorageEstimator,
}

impl<CR, PR> AssessInventoryUseCase<CR, PR>
where
    CR: CatalogReader,
    PR: ProgressReporter,
{
    /// Creates the use case with the default engine configuration
    pub fn new(catalog_reader: CR, progress_reporter: PR) -> Result<Self> {
        Self::with_config(catalog_reader, progress_reporter, EngineConfig::default())
    }

    /// Creates the use case and loads the catalog
    ///
    /// # Errors
    /// - The catalog cannot be read or is malformed
    /// - The configuration holds an invalid threshold or storage profile
    pub fn with_config(
        catalog_reader: CR,
        progress_reporter: PR,
        config: EngineConfig,
    ) -> Result<Self> {
        crate::config::validate_config(&config)?;
        let policy = config.match_policy()?;
        let estimator = StorageEstimator::new(config.storage_profile());

        progress_reporter.report("📖 Loading compatibility catalog...");
        let catalog = catalog_reader.read_catalog()?;
        progress_reporter.report(&format!(
            "✅ Catalog loaded: {} camera model(s), {} gateway unit type(s)",
            catalog.cameras().len(),
            catalog.units().len()
        ));

        Ok(Self {
            catalog_reader,
            progress_reporter,
            catalog,
            config,
            policy,
            estimator,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Re-reads the catalog; the old one stays in place if loading fails
    pub fn reload_catalog(&mut self) -> Result<()> {
        self.catalog = self.catalog_reader.read_catalog()?;
        Ok(())
    }

    /// Executes the assessment
    ///
    /// # Arguments
    /// * `request` - Inventory table plus optional retention and model column
    ///
    /// # Returns
    /// Match results, channel demand, unit recommendations and storage
    /// estimates for both resolution tiers
    pub fn execute(&self, request: &AssessmentRequest) -> Result<AssessmentResponse> {
        let result = self.run_pipeline(request);
        if let Err(ref e) = result {
            self.progress_reporter.report_error(&format!("❌ {}", e));
        }
        result
    }

    fn run_pipeline(&self, request: &AssessmentRequest) -> Result<AssessmentResponse> {
        let table = &request.table;
        let retention_days = request
            .retention_days
            .unwrap_or_else(|| self.config.retention_days());
        // Fail before any matching work
        RetentionBand::from_days(retention_days)?;

        // Step 1: Locate model and count columns
        self.progress_reporter
            .report_progress(1, STAGES, Some("identifying columns"));
        let layout = self.identify_columns(table, request.model_column)?;

        // Step 2: Classify every distinct model value
        self.progress_reporter
            .report_progress(2, STAGES, Some("matching models"));
        let rows = table.inventory_rows(layout.model_column, layout.count_column);
        let matcher = FuzzyMatcher::new(&self.catalog, self.policy);
        let results = matcher.match_rows(&rows);
        let summary = MatchSummary::from_results(&results);

        // Step 3: Channel demand per resolution tier
        self.progress_reporter
            .report_progress(3, STAGES, Some("aggregating channels"));
        let demand = ChannelAggregator::aggregate(&results, &self.catalog);

        // Step 4: Gateway units per tier
        self.progress_reporter
            .report_progress(4, STAGES, Some("recommending units"));
        let recommendations = ResolutionTier::ALL
            .iter()
            .map(|&tier| UnitRecommender::recommend(tier, demand.get(tier), self.catalog.units()))
            .collect::<Result<Vec<_>>>()?;

        // Step 5: Storage per tier
        self.progress_reporter
            .report_progress(5, STAGES, Some("estimating storage"));
        let storage = self.estimate_storage(&recommendations, retention_days)?;

        self.progress_reporter.report_completion(&format!(
            "✅ {:.1}% of {} camera(s) supported; {} low-tier and {} high-tier channel(s)",
            summary.supported_fraction() * 100.0,
            summary.total_cameras(),
            demand.low,
            demand.high
        ));

        Ok(AssessmentResponse {
            model_column: layout.model_column,
            count_column: layout.count_column,
            excluded_columns: layout.excluded_columns,
            results,
            summary,
            demand,
            recommendations,
            storage,
            retention_days,
        })
    }

    fn identify_columns(
        &self,
        table: &InventoryTable,
        model_override: Option<usize>,
    ) -> Result<ColumnLayout> {
        let excluded_columns = if self.config.exclude_sensitive_columns() {
            ColumnSanitizer::sensitive_columns(table)
        } else {
            Vec::new()
        };

        let model_column = match model_override {
            Some(column) if column < table.column_count() => column,
            Some(column) => {
                log::warn!(
                    "Model column override {} is out of range ({} column(s))",
                    column,
                    table.column_count()
                );
                return Err(SizingError::NoModelColumnFound.into());
            }
            None => {
                let candidates: Vec<usize> = (0..table.column_count())
                    .filter(|column| !excluded_columns.contains(column))
                    .collect();
                ColumnIdentifier::new(&self.catalog)
                    .identify_model_column_among(table, &candidates)?
            }
        };

        let count_column = ColumnIdentifier::identify_count_column(table)
            .filter(|&column| column != model_column);

        self.progress_reporter.report(&format!(
            "🔍 Model column: {}{}",
            describe_column(table, model_column),
            count_column
                .map(|c| format!(", count column: {}", describe_column(table, c)))
                .unwrap_or_default()
        ));

        Ok(ColumnLayout {
            model_column,
            count_column,
            excluded_columns,
        })
    }

    fn estimate_storage(
        &self,
        recommendations: &[Recommendation],
        retention_days: u32,
    ) -> Result<Vec<StorageEstimate>> {
        recommendations
            .iter()
            .map(|recommendation| {
                let tier = recommendation.tier();
                let channels = recommendation.required_channels();
                let estimate = StorageEstimate {
                    tier,
                    channels,
                    required_tb: self.estimator.estimate_storage(channels, tier, retention_days)?,
                    provisioned_tb: recommendation.provisioned_storage_tb(),
                };
                if !estimate.is_sufficient() {
                    log::warn!(
                        "{} tier needs {:.2} TB for {} day(s), recommended units hold {:.2} TB",
                        tier,
                        estimate.required_tb,
                        retention_days,
                        estimate.provisioned_tb
                    );
                    self.progress_reporter.report(&format!(
                        "⚠️  {} tier storage short by {:.2} TB",
                        tier,
                        estimate.shortfall_tb()
                    ));
                }
                Ok(estimate)
            })
            .collect()
    }
}

impl<CR, PR> InventoryAssessmentPort for AssessInventoryUseCase<CR, PR>
where
    CR: CatalogReader,
    PR: ProgressReporter,
{
    fn assess(&self, request: &AssessmentRequest) -> Result<AssessmentResponse> {
        self.execute(request)
    }
}

fn describe_column(table: &InventoryTable, column: usize) -> String {
    match table.header(column) {
        Some(header) if !header.trim().is_empty() => format!("{} ('{}')", column, header),
        _ => column.to_string(),
    }
}
