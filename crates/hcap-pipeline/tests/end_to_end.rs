use std::fs;
use std::path::Path;

use hcap_core::columns::{raw_network, FEEDER_ID, MAX_HOSTING_CAPACITY, UTILITY_NAME};
use hcap_core::{has_column, DatasetKind, HcapError};
use hcap_io::{ingest, PipelineConfig, SourceSpec};
use hcap_pipeline::{
    build_views, query_der_by_feeder, query_feeders_with_capacity, run_pipeline,
    run_pipeline_traced, standardize, QueryResult,
};
use polars::prelude::{ChunkCompare, DataFrame, DataType};
use tempfile::tempdir;

fn write_source(
    dir: &Path,
    name: &str,
    network: &str,
    installed: &str,
    planned: &str,
) -> SourceSpec {
    let paths = [
        dir.join(format!("{name}_network.csv")),
        dir.join(format!("{name}_installed.csv")),
        dir.join(format!("{name}_planned.csv")),
    ];
    fs::write(&paths[0], network).unwrap();
    fs::write(&paths[1], installed).unwrap();
    fs::write(&paths[2], planned).unwrap();
    let [n, i, p] = paths;
    SourceSpec::new(name, n, i, p)
}

fn two_utility_config(dir: &Path) -> PipelineConfig {
    PipelineConfig::new(vec![
        write_source(
            dir,
            "utility1",
            "feeder_segment_id,hosting_capacity\nF1,150\n",
            "feeder_id,der_type,capacity_kw\nF1,solar,500\n",
            "feeder_id,der_type,capacity_kw\n",
        ),
        write_source(
            dir,
            "utility2",
            "feeder_segment_id,hosting_capacity\nF2,-5\n",
            "feeder_id,der_type,capacity_kw\n",
            "feeder_id,der_type,capacity_kw\nF1,storage,300\n",
        ),
    ])
}

fn text(frame: &DataFrame, column: &str) -> Vec<Option<String>> {
    frame
        .column(column)
        .unwrap()
        .cast(&DataType::Utf8)
        .unwrap()
        .utf8()
        .unwrap()
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect()
}

fn ids(result: &QueryResult) -> Vec<Option<String>> {
    result.text_values(FEEDER_ID).unwrap()
}

#[test]
fn capacity_scenario_from_two_utilities() {
    let dir = tempdir().unwrap();
    let config = two_utility_config(dir.path());

    let run = run_pipeline_traced(&config).unwrap();
    let network = &run.silver.network_data;
    assert_eq!(network.height(), 2);
    assert_eq!(
        text(network, FEEDER_ID),
        vec![Some("F1".into()), Some("F2".into())]
    );

    let feeders = &run.platinum.feeders_with_capacity;
    assert_eq!(feeders.height(), 1);
    assert_eq!(text(feeders, FEEDER_ID), vec![Some("F1".into())]);
    assert_eq!(text(feeders, UTILITY_NAME), vec![Some("utility1".into())]);

    let above_100 = query_feeders_with_capacity(100.0, &run.platinum).unwrap();
    assert_eq!(ids(&above_100), vec![Some("F1".into())]);
    let above_200 = query_feeders_with_capacity(200.0, &run.platinum).unwrap();
    assert!(above_200.is_empty());
}

#[test]
fn der_scenario_spans_installed_and_planned() {
    let dir = tempdir().unwrap();
    let views = run_pipeline(&two_utility_config(dir.path())).unwrap();

    let der = query_der_by_feeder("F1", &views).unwrap();
    assert_eq!(der.height(), 2);
    assert_eq!(
        der.text_values(UTILITY_NAME).unwrap(),
        vec![Some("utility1".into()), Some("utility2".into())]
    );
    assert!(query_der_by_feeder("feeder123", &views).unwrap().is_empty());
}

#[test]
fn silver_row_counts_add_up_and_renames_are_total() {
    let dir = tempdir().unwrap();
    let config = PipelineConfig::new(vec![
        write_source(
            dir.path(),
            "utility1",
            "feeder_segment_id,hosting_capacity,voltage_kv\nF1,150,12.47\nF3,80,12.47\nF5,,4.16\n",
            "feeder_id,der_type\nF1,solar\nF3,storage\n",
            "feeder_id,der_type\nF3,wind\n",
        ),
        write_source(
            dir.path(),
            "utility2",
            "feeder_segment_id,hosting_capacity,substation\n2001,250.5,SUB-A\n2002,0,SUB-B\n",
            "feeder_id,der_type\n2001,solar\n",
            "feeder_id,der_type,queue_position\n2002,storage,7\n",
        ),
    ]);

    let bronze = ingest(&config).unwrap();
    let expected: Vec<usize> = DatasetKind::ALL
        .iter()
        .map(|kind| bronze.row_count(*kind))
        .collect();
    let silver = standardize(bronze).unwrap();
    for (kind, rows) in DatasetKind::ALL.iter().zip(expected) {
        let table = silver.get(*kind);
        assert_eq!(table.height(), rows, "{kind}");
        assert_eq!(table.column(UTILITY_NAME).unwrap().null_count(), 0);
    }

    let network = &silver.network_data;
    assert!(!has_column(network, raw_network::FEEDER_SEGMENT_ID));
    assert!(!has_column(network, raw_network::HOSTING_CAPACITY));
    assert_eq!(
        text(network, FEEDER_ID),
        vec![
            Some("F1".into()),
            Some("F3".into()),
            Some("F5".into()),
            Some("2001".into()),
            Some("2002".into())
        ]
    );
    assert_eq!(network.column("voltage_kv").unwrap().null_count(), 2);
    assert_eq!(network.column("substation").unwrap().null_count(), 3);

    let views = build_views(&silver).unwrap();
    let capacity = network
        .column(MAX_HOSTING_CAPACITY)
        .unwrap()
        .cast(&DataType::Float64)
        .unwrap();
    let positive = capacity.f64().unwrap().gt(0.0);
    let expected_feeders = network.filter(&positive).unwrap();
    assert_eq!(
        text(&views.feeders_with_capacity, FEEDER_ID),
        text(&expected_feeders, FEEDER_ID)
    );
    for value in views
        .feeders_with_capacity
        .column(MAX_HOSTING_CAPACITY)
        .unwrap()
        .cast(&DataType::Float64)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
    {
        assert!(value.unwrap() > 0.0);
    }

    let der = query_der_by_feeder("2002", &views).unwrap();
    assert_eq!(
        der.text_values("queue_position").unwrap(),
        vec![Some("7".into())]
    );
}

#[test]
fn header_only_source_keeps_silver_column_types() {
    let dir = tempdir().unwrap();
    let populated = write_source(
        dir.path(),
        "utility1",
        "feeder_segment_id,hosting_capacity\nF1,150\nF3,80\n",
        "feeder_id,der_type,capacity_kw\nF1,solar,500\n",
        "feeder_id,der_type,capacity_kw\nF3,wind,1000\n",
    );
    let header_only = write_source(
        dir.path(),
        "utility2",
        "feeder_segment_id,hosting_capacity\n",
        "feeder_id,der_type,capacity_kw\n",
        "feeder_id,der_type,capacity_kw\n",
    );

    let alone = run_pipeline_traced(&PipelineConfig::new(vec![populated.clone()])).unwrap();
    let with_empty =
        run_pipeline_traced(&PipelineConfig::new(vec![header_only, populated])).unwrap();

    for (kind, column) in [
        (DatasetKind::NetworkData, MAX_HOSTING_CAPACITY),
        (DatasetKind::InstalledDer, "capacity_kw"),
        (DatasetKind::PlannedDer, "capacity_kw"),
    ] {
        let expected = alone.silver.get(kind).column(column).unwrap().dtype();
        let actual = with_empty.silver.get(kind).column(column).unwrap().dtype();
        assert!(expected.is_numeric(), "{kind}.{column}: {expected}");
        assert_eq!(actual, expected, "{kind}.{column}");
        assert_eq!(
            with_empty.silver.get(kind).height(),
            alone.silver.get(kind).height()
        );
    }

    let feeders = query_feeders_with_capacity(100.0, &with_empty.platinum).unwrap();
    assert_eq!(ids(&feeders), vec![Some("F1".into())]);
}

#[test]
fn configuration_error_precedes_file_access() {
    let dir = tempdir().unwrap();
    let config = PipelineConfig::new(vec![SourceSpec::named("utility1")
        .with_path(DatasetKind::NetworkData, dir.path().join("missing_network.csv"))
        .with_path(DatasetKind::PlannedDer, dir.path().join("missing_planned.csv"))]);

    let err = run_pipeline(&config).unwrap_err();
    assert!(matches!(err, HcapError::Config(_)));
    assert!(err.to_string().contains("installed"));
}

#[test]
fn missing_file_aborts_the_run() {
    let dir = tempdir().unwrap();
    let mut config = two_utility_config(dir.path());
    config.sources[1].network = Some(dir.path().join("gone.csv"));
    assert!(matches!(run_pipeline(&config), Err(HcapError::NotFound(_))));
}
