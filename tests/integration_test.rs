/// Integration tests for the application layer
mod test_utilities;

use test_utilities::mocks::*;
use gateway_sizer::prelude::*;

fn camera(name: &str, resolution_mp: f64, channel_cost: u32) -> CatalogCamera {
    CatalogCamera::new(
        name.to_string(),
        "Acme".to_string(),
        "1.0.0".to_string(),
        String::new(),
        resolution_mp,
        channel_cost,
    )
    .unwrap()
}

fn unit(name: &str, storage_tb: f64, low: u32, high: u32) -> GatewayUnit {
    GatewayUnit::new(name.to_string(), storage_tb, low, high).unwrap()
}

fn x_units() -> Vec<GatewayUnit> {
    vec![unit("X1", 4.0, 1, 16), unit("X2", 8.0, 1, 32)]
}

fn sample_catalog() -> Catalog {
    Catalog::new(
        vec![
            camera("Dome-4MP", 4.0, 1),
            camera("Bullet 8MP", 8.0, 2),
            camera("P3245-LVE", 2.0, 1),
        ],
        x_units(),
    )
    .unwrap()
}

fn use_case() -> AssessInventoryUseCase<MockCatalogReader, MockProgressReporter> {
    AssessInventoryUseCase::new(
        MockCatalogReader::new(sample_catalog()),
        MockProgressReporter::new(),
    )
    .unwrap()
}

fn single_column(header: &str, values: &[&str]) -> InventoryTable {
    let rows: Vec<Vec<&str>> = values.iter().map(|v| vec![*v]).collect();
    InventoryTable::from_strings(&[header], &rows)
}

fn dome_and_unknown() -> InventoryTable {
    let mut values = vec!["dome 4mp "; 10];
    values.push("UnknownCam9000");
    single_column("Camera", &values)
}

fn sizing_error(err: &anyhow::Error) -> &SizingError {
    err.downcast_ref::<SizingError>()
        .expect("expected a SizingError")
}

#[test]
fn test_dome_scenario() {
    let response = use_case()
        .execute(&AssessmentRequest::new(dome_and_unknown()))
        .unwrap();

    assert_eq!(response.model_column, 0);
    assert_eq!(response.count_column, None);
    assert_eq!(response.results.len(), 2);

    let dome = &response.results[0];
    assert_eq!(dome.raw_input(), "dome 4mp ");
    assert_eq!(dome.tier(), MatchTier::Exact);
    assert_eq!(dome.count(), 10);
    assert_eq!(dome.matched_camera().unwrap().model_name(), "Dome-4MP");

    let unknown = &response.results[1];
    assert_eq!(unknown.raw_input(), "UnknownCam9000");
    assert_eq!(unknown.tier(), MatchTier::Unsupported);
    assert!(unknown.matched_camera().is_none());

    assert_eq!(response.demand, ChannelDemand::new(10, 0));
    assert_eq!(response.summary.unsupported.cameras, 1);
    assert!((response.summary.supported_fraction() - 10.0 / 11.0).abs() < 1e-12);
}

#[test]
fn test_recommendation_per_tier() {
    let table = InventoryTable::from_strings(
        &["Camera", "Quantity"],
        &[vec!["Dome-4MP", "20"], vec!["Bullet 8MP", "20"]],
    );
    let response = use_case().execute(&AssessmentRequest::new(table)).unwrap();
    assert_eq!(response.count_column, Some(1));
    assert_eq!(response.demand, ChannelDemand::new(20, 40));

    let low = response.recommendation(ResolutionTier::Low).unwrap();
    assert_eq!(low.unit_names(), vec!["X2"]);
    assert_eq!(low.excess_channels(), -19);
    assert_eq!(low.ceiling_excess(), 12);

    let high = response.recommendation(ResolutionTier::High).unwrap();
    assert_eq!(high.unit_names(), vec!["X1", "X2"]);
    assert_eq!(high.provisioned_ceiling(), 48);
}

#[test]
fn test_recommend_twenty_channels_on_x_units() {
    let rec = UnitRecommender::recommend(ResolutionTier::Low, 20, &x_units()).unwrap();
    assert_eq!(rec.unit_count(), 1);
    assert_eq!(rec.allocations()[0].unit.name(), "X2");
    assert_eq!(rec.excess_channels(), 1 - 20);
}

#[test]
fn test_recommend_zero_channels() {
    let rec = UnitRecommender::recommend(ResolutionTier::High, 0, &x_units()).unwrap();
    assert!(rec.is_empty());
    assert_eq!(rec.excess_channels(), 0);
}

#[test]
fn test_retention_45_days_uses_60_day_band() {
    let response = use_case()
        .execute(&AssessmentRequest::new(dome_and_unknown()).with_retention_days(45))
        .unwrap();
    assert_eq!(response.retention_days, 45);

    let low = response.storage_estimate(ResolutionTier::Low).unwrap();
    assert_eq!(low.channels, 10);
    let expected = 10.0 * StorageProfile::default().low[1] * 45.0 / 1000.0;
    assert!((low.required_tb - expected).abs() < 1e-12);
    assert_eq!(low.provisioned_tb, 4.0);

    let high = response.storage_estimate(ResolutionTier::High).unwrap();
    assert_eq!(high.required_tb, 0.0);
}

#[test]
fn test_pipeline_is_idempotent() {
    let use_case = use_case();
    let table = InventoryTable::from_strings(
        &["Site", "Camera", "Quantity"],
        &[
            vec!["HQ", "dome 4mp", "3"],
            vec!["HQ", "P3245-LVX", "2"],
            vec!["Annex", "8MP Bullet", "7"],
            vec!["Annex", "UnknownCam9000", "1"],
            vec!["Annex", "dome 4mp", "1"],
        ],
    );
    let request = AssessmentRequest::new(table).with_retention_days(75);

    let first = use_case.execute(&request).unwrap();
    let second = use_case.execute(&request).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn test_aggregate_is_additive() {
    let catalog = sample_catalog();
    let matcher = FuzzyMatcher::new(&catalog, MatchPolicy::default());
    let rows_a = vec![
        InventoryRow::new(Cell::parse("Dome-4MP"), Some(4)),
        InventoryRow::new(Cell::parse("Bullet 8MP"), Some(1)),
    ];
    let rows_b = vec![
        InventoryRow::new(Cell::parse("P3245-LVE"), Some(6)),
        InventoryRow::new(Cell::parse("UnknownCam9000"), Some(2)),
    ];
    let rows_union: Vec<InventoryRow> = rows_a.iter().chain(rows_b.iter()).cloned().collect();

    let demand_a = ChannelAggregator::aggregate(&matcher.match_rows(&rows_a), &catalog);
    let demand_b = ChannelAggregator::aggregate(&matcher.match_rows(&rows_b), &catalog);
    let demand_union = ChannelAggregator::aggregate(&matcher.match_rows(&rows_union), &catalog);

    assert_eq!(demand_union, demand_a + demand_b);
    assert_eq!(demand_union, ChannelDemand::new(10, 2));
}

#[test]
fn test_blank_and_numeric_cells_are_unsupported() {
    let catalog = sample_catalog();
    let matcher = FuzzyMatcher::new(&catalog, MatchPolicy::default());
    for raw in ["", "   ", "1234", "3.5"] {
        let classification = matcher.classify(&Cell::parse(raw));
        assert_eq!(classification.tier, MatchTier::Unsupported, "{:?}", raw);
        assert!(classification.camera.is_none());
    }
}

#[test]
fn test_invalid_quantities_count_once() {
    let table = InventoryTable::from_strings(
        &["Camera", "Count"],
        &[
            vec!["Dome-4MP", "3"],
            vec!["Dome-4MP", "two"],
            vec!["Dome-4MP", ""],
            vec!["Dome-4MP", "-4"],
            vec!["Dome-4MP", "1.5"],
        ],
    );
    let response = use_case().execute(&AssessmentRequest::new(table)).unwrap();
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].count(), 3 + 4);
}

#[test]
fn test_huge_quantities_do_not_abort() {
    let table = InventoryTable::from_strings(
        &["Camera", "Count"],
        &[
            vec!["Dome-4MP", "1000000000000"],
            vec!["Dome-4MP", "1e19"],
            vec!["Bullet 8MP", "1000000"],
        ],
    );
    let response = use_case().execute(&AssessmentRequest::new(table)).unwrap();
    assert_eq!(response.summary.total_cameras(), 2 + MAX_ROW_QUANTITY);
    assert_eq!(response.demand, ChannelDemand::new(2, 2 * MAX_ROW_QUANTITY));

    // 2,000,000 high channels fill 62,500 X2 units exactly
    let high = response.recommendation(ResolutionTier::High).unwrap();
    assert_eq!(high.unit_count(), 62_500);
    assert_eq!(high.ceiling_excess(), 0);
}

#[test]
fn test_explicit_model_column() {
    let table = InventoryTable::from_strings(
        &["Primary", "Replacement"],
        &[vec!["Dome-4MP", "Bullet 8MP"], vec!["Dome-4MP", "Bullet 8MP"]],
    );
    let response = use_case()
        .execute(&AssessmentRequest::new(table).with_model_column(1))
        .unwrap();
    assert_eq!(response.model_column, 1);
    assert_eq!(response.demand, ChannelDemand::new(0, 4));
}

#[test]
fn test_sensitive_columns_excluded() {
    let table = InventoryTable::from_strings(
        &["Device", "Address", "Camera"],
        &[
            vec!["Dome-4MP", "192.168.0.10", "Bullet 8MP"],
            vec!["Dome-4MP", "00:1A:2B:3C:4D:5E", "Bullet 8MP"],
        ],
    );
    let response = use_case().execute(&AssessmentRequest::new(table)).unwrap();
    assert_eq!(response.excluded_columns, vec![1]);
    assert_eq!(response.model_column, 0);
}

#[test]
fn test_no_model_column_found() {
    let table = InventoryTable::from_strings(&["Id", "Qty"], &[vec!["1", "4"], vec!["2", ""]]);
    let err = use_case().execute(&AssessmentRequest::new(table)).unwrap_err();
    assert!(matches!(sizing_error(&err), SizingError::NoModelColumnFound));
}

#[test]
fn test_unsupported_retention_period() {
    for days in [0, 91] {
        let err = use_case()
            .execute(&AssessmentRequest::new(dome_and_unknown()).with_retention_days(days))
            .unwrap_err();
        assert!(matches!(
            sizing_error(&err),
            SizingError::UnsupportedRetentionPeriod { days: d } if *d == days
        ));
    }
}

#[test]
fn test_no_unit_covers_demand() {
    let catalog = Catalog::new(vec![camera("Dome-4MP", 4.0, 1)], vec![]).unwrap();
    let use_case =
        AssessInventoryUseCase::new(MockCatalogReader::new(catalog), MockProgressReporter::new())
            .unwrap();
    let err = use_case
        .execute(&AssessmentRequest::new(dome_and_unknown()))
        .unwrap_err();
    assert!(matches!(
        sizing_error(&err),
        SizingError::NoUnitCoversDemand { channels: 10 }
    ));
}

#[test]
fn test_empty_unit_catalog_with_no_demand() {
    let catalog = Catalog::new(vec![camera("Dome-4MP", 4.0, 1)], vec![]).unwrap();
    let use_case =
        AssessInventoryUseCase::new(MockCatalogReader::new(catalog), MockProgressReporter::new())
            .unwrap();
    let table = single_column("Camera", &["Dome-4XP ZZZ", "UnknownCam9000"]);
    let response = use_case.execute(&AssessmentRequest::new(table)).unwrap();
    assert_eq!(response.demand.total(), 0);
    assert!(response.recommendations.iter().all(Recommendation::is_empty));
}

#[test]
fn test_malformed_catalog_is_fatal() {
    let result =
        AssessInventoryUseCase::new(MockCatalogReader::malformed(), MockProgressReporter::new());
    let err = result.err().expect("malformed catalog must be rejected");
    assert!(matches!(
        sizing_error(&err),
        SizingError::MalformedCatalogEntry { .. }
    ));
}

#[test]
fn test_catalog_reader_call_count() {
    let reader = MockCatalogReader::new(sample_catalog());
    assert_eq!(reader.read_count(), 0);
    let catalog = reader.read_catalog().unwrap();
    assert_eq!(reader.read_count(), 1);
    assert_eq!(catalog, sample_catalog());
}

#[test]
fn test_progress_reporting() {
    let reporter = MockProgressReporter::new();
    let use_case =
        AssessInventoryUseCase::new(MockCatalogReader::new(sample_catalog()), reporter.clone())
            .unwrap();
    use_case
        .execute(&AssessmentRequest::new(dome_and_unknown()))
        .unwrap();

    assert!(reporter.has_message_starting_with("📖 Loading compatibility catalog"));
    assert!(reporter.has_message_starting_with("Progress: 5/5 - estimating storage"));
    assert!(reporter.has_message_starting_with("Completed: ✅ 90.9% of 11 camera(s)"));
}

#[test]
fn test_errors_are_reported() {
    let reporter = MockProgressReporter::new();
    let use_case =
        AssessInventoryUseCase::new(MockCatalogReader::new(sample_catalog()), reporter.clone())
            .unwrap();
    let _ = use_case.execute(&AssessmentRequest::new(dome_and_unknown()).with_retention_days(0));
    assert!(reporter.has_message_starting_with("Error: ❌ Unsupported retention period"));
}

#[test]
fn test_use_case_through_inbound_port() {
    fn run(port: &dyn InventoryAssessmentPort, table: InventoryTable) -> AssessmentResponse {
        port.assess(&AssessmentRequest::new(table)).unwrap()
    }
    let response = run(&use_case(), dome_and_unknown());
    assert_eq!(response.demand.low, 10);
}
