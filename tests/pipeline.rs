use std::collections::BTreeSet;
use std::io::Write;

use rusty_runway::data::aggregate::{
    counts_by_region, elevations_by_region, max_by_region, mean_by_region, type_breakdown,
    DashboardSummary,
};
use rusty_runway::data::domain::distinct_regions;
use rusty_runway::data::filter::{filter, FilterCriteria};
use rusty_runway::data::loader::{load_file, load_from_reader, load_or_empty};
use rusty_runway::data::model::{AirportDataset, AirportType, Region, ScheduledService};

const HEADER: &str = "id,ident,type,name,latitude_deg,longitude_deg,elevation_ft,iso_region,municipality,scheduled_service,continent";

fn load(rows: &[&str]) -> AirportDataset {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    load_from_reader(text.as_bytes()).unwrap()
}

/// Two Massachusetts airports and three in Vermont.
fn five_airports() -> AirportDataset {
    load(&[
        "10,KVT3,large_airport,Vermont Large,44.4,-73.1,300,US-VT,Burlington,yes,NA",
        "11,KMA1,large_airport,Mass One,42.3,-71.0,10,US-MA,Boston,yes,NA",
        "12,KVT1,small_airport,Vermont Small,44.0,-72.5,100,US-VT,Rutland,no,NA",
        "13,KMA2,large_airport,Mass Two,42.2,-71.1,30,US-MA,Quincy,yes,NA",
        "14,KVT2,medium_airport,Vermont Medium,44.2,-72.6,200,US-VT,Barre,yes,NA",
    ])
}

fn criteria(
    regions: &[Region],
    max_elevation_ft: f64,
    types: &[AirportType],
    scheduled: &[ScheduledService],
) -> FilterCriteria {
    FilterCriteria {
        regions: regions.iter().copied().collect(),
        max_elevation_ft,
        types: types.iter().copied().collect(),
        scheduled_service: scheduled.iter().copied().collect(),
    }
}

fn broad(dataset: &AirportDataset) -> FilterCriteria {
    FilterCriteria::select_all(dataset, 2500.0)
}

#[test]
fn massachusetts_large_scheduled_scenario() {
    let ds = five_airports();
    let c = criteria(
        &[Region::Massachusetts],
        50.0,
        &[AirportType::LargeAirport],
        &[ScheduledService::Yes],
    );
    let view = filter(&ds, &c);
    assert_eq!(view.ids(), vec![11, 13]);

    let counts = counts_by_region(&view, &[Region::Massachusetts, Region::Vermont]);
    assert_eq!(counts, vec![2, 0]);

    let means = mean_by_region(&elevations_by_region(&view));
    assert_eq!(means.get(&Region::Massachusetts), Some(&20.0));
    assert!(!means.contains_key(&Region::Vermont));
}

#[test]
fn non_positive_elevation_is_left_out_of_statistics() {
    let ds = load(&[
        "1,A,small_airport,Zero,42.0,-71.0,0,US-MA,A,no,NA",
        "2,B,small_airport,Negative,42.0,-71.0,-20,US-MA,B,no,NA",
        "3,C,small_airport,Real,42.0,-71.0,40,US-MA,C,no,NA",
    ]);
    let view = rusty_runway::FilteredView::all(&ds);
    let groups = elevations_by_region(&view);
    assert_eq!(groups[&Region::Massachusetts], vec![40.0]);
    assert_eq!(mean_by_region(&groups)[&Region::Massachusetts], 40.0);
    assert_eq!(max_by_region(&groups)[&Region::Massachusetts], 40.0);
}

#[test]
fn distinct_regions_of_empty_dataset_is_empty() {
    assert!(distinct_regions(&AirportDataset::default()).is_empty());
}

#[test]
fn loaded_records_stay_inside_allow_lists() {
    let ds = load(&[
        "1,A,small_airport,Keep,42.0,-71.0,10,US-MA,A,no,NA",
        "2,B,closed,Closed,42.0,-71.0,10,US-MA,B,no,NA",
        "3,C,small_airport,Elsewhere,40.0,-74.0,10,US-NJ,C,no,NA",
        "4,D,balloonport,Balloon,44.0,-72.0,10,US-VT,D,no,NA",
        "5,E,medium_airport,Keep too,44.0,-72.0,10,US-VT,E,yes,NA",
    ]);
    assert_eq!(ds.len(), 2);
    for record in ds.records() {
        assert!(Region::from_code(record.region.code()).is_some());
        assert!(AirportType::from_code(record.airport_type.code()).is_some());
    }
}

#[test]
fn filtering_is_idempotent() {
    let ds = five_airports();
    let c = criteria(
        &[Region::Vermont, Region::Massachusetts],
        250.0,
        &[AirportType::LargeAirport, AirportType::MediumAirport],
        &[ScheduledService::Yes],
    );
    let once = filter(&ds, &c);
    let twice = once.refine(&c);
    assert_eq!(once, twice);
}

#[test]
fn widening_a_criterion_never_drops_records() {
    let ds = five_airports();
    let narrow = criteria(
        &[Region::Vermont],
        250.0,
        &[AirportType::SmallAirport],
        &[ScheduledService::No],
    );
    let narrow_ids: BTreeSet<u64> = filter(&ds, &narrow).ids().into_iter().collect();

    let mut widened = Vec::new();
    let mut c = narrow.clone();
    c.regions.insert(Region::Massachusetts);
    widened.push(c);
    let mut c = narrow.clone();
    c.max_elevation_ft = 1000.0;
    widened.push(c);
    let mut c = narrow.clone();
    c.types.insert(AirportType::MediumAirport);
    widened.push(c);
    let mut c = narrow.clone();
    c.scheduled_service.insert(ScheduledService::Yes);
    widened.push(c);

    for wide in &widened {
        let wide_ids: BTreeSet<u64> = filter(&ds, wide).ids().into_iter().collect();
        assert!(narrow_ids.is_subset(&wide_ids), "{wide:?}");
    }
}

#[test]
fn counts_cover_view_when_all_regions_requested() {
    let ds = five_airports();
    let c = broad(&ds);
    let view = filter(&ds, &c);
    let regions: Vec<Region> = distinct_regions(&ds).into_iter().collect();
    let counts = counts_by_region(&view, &regions);
    assert_eq!(counts.iter().sum::<usize>(), view.len());
}

#[test]
fn type_breakdown_adds_up() {
    let ds = five_airports();
    let view = filter(&ds, &broad(&ds));
    let b = type_breakdown(&view);
    assert_eq!(b.total, 5);
    assert_eq!(b.total, b.large + b.medium + b.small);
    assert_eq!((b.large, b.medium, b.small), (3, 1, 1));
}

#[test]
fn missing_file_degrades_to_empty_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.csv");
    assert!(load_file(&path).is_err());

    let outcome = load_or_empty(&path);
    assert!(outcome.warning.is_some());
    let c = broad(&outcome.dataset);
    let view = filter(&outcome.dataset, &c);
    assert!(view.is_empty());
    let summary = DashboardSummary::from_view(&view, &[]);
    assert_eq!(summary.breakdown.total, 0);
}

#[test]
fn recomputation_is_reproducible() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "1,KBOS,large_airport,Logan,42.36,-71.0,20,US-MA,Boston,yes,NA").unwrap();
    writeln!(file, "2,KMHT,medium_airport,Manchester,42.93,-71.43,266,US-NH,Manchester,yes,NA").unwrap();
    let ds = load_file(file.path()).unwrap();

    let c = broad(&ds);
    let regions: Vec<Region> = distinct_regions(&ds).into_iter().collect();
    let first = DashboardSummary::from_view(&filter(&ds, &c), &regions);
    let second = DashboardSummary::from_view(&filter(&ds, &c), &regions);
    assert_eq!(first, second);
    assert_eq!(first.counts, vec![1, 1]);
}
