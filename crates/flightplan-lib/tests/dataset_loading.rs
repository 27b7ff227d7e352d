mod common;

use std::fs;

use common::fixtures_dir;
use flightplan_lib::{
    find_route, load_network, load_routes, save_routes, Criterion, Error, Route, RouteBook,
};

#[test]
fn fixture_dataset_loads_every_record() {
    let (network, report) = load_network(&fixtures_dir()).expect("fixture dataset loads");

    assert_eq!(report.airports, 7);
    assert_eq!(report.flights, 12);
    assert_eq!(report.rejected_flights, 0);
    assert_eq!(network.airport_count(), 7);
    assert_eq!(network.flight_count(), 12);

    let flight = network.flight_by_id(2).expect("flight 2");
    assert_eq!(flight.flight_number, "BA117");
    assert_eq!(flight.departure.format("%H:%M").to_string(), "10:30");
}

#[test]
fn missing_airport_file_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_network(dir.path()).unwrap_err();
    assert!(matches!(err, Error::DatasetNotFound { .. }));
}

#[test]
fn broken_rows_are_counted_not_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("airports.csv"),
        "id,iata,city,country,latitude,longitude\n1,VIE,Vienna,Austria,48.1,16.5\n2,LHR,London,UK,north,-0.4\n",
    )
    .expect("write airports");
    fs::write(
        dir.path().join("flights.csv"),
        "id,origin,destination,airline,flightNumber,duration,price,departureTime\n\
         1,VIE,LHR,Austrian,OS451,150,129.99,07:15\n\
         2,VIE,VIE,Austrian,OS1,10,1.00,7pm\n",
    )
    .expect("write flights");

    let (network, report) = load_network(dir.path()).expect("load");
    assert_eq!(report.airports, 1);
    assert_eq!(report.skipped_records, 2);
    // LHR never loaded, so flight 1 has no destination.
    assert_eq!(report.rejected_flights, 1);
    assert_eq!(network.flight_count(), 0);
}

#[test]
fn duplicate_flight_ids_keep_the_first_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("airports.csv"),
        "id,iata,city,country,latitude,longitude\n\
         1,VIE,Vienna,Austria,48.1,16.5\n\
         2,LHR,London,UK,51.5,-0.4\n\
         3,JFK,New York,USA,40.6,-73.8\n",
    )
    .expect("write airports");
    fs::write(
        dir.path().join("flights.csv"),
        "id,origin,destination,airline,flightNumber,duration,price,departureTime\n\
         1,VIE,LHR,Austrian,OS451,150,129.99,07:15\n\
         1,LHR,JFK,British Airways,BA117,480,450.00,10:30\n",
    )
    .expect("write flights");

    let (network, report) = load_network(dir.path()).expect("load");
    assert_eq!(report.flights, 1);
    assert_eq!(report.rejected_flights, 1);
    assert_eq!(network.flight_count(), 1);
    assert_eq!(network.flight_by_id(1).expect("flight 1").flight_number, "OS451");
    assert!(find_route(&network, "VIE", "JFK", Criterion::Cheapest).is_none());
}

#[test]
fn saved_routes_continue_numbering() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::copy(
        fixtures_dir().join("routes.csv"),
        dir.path().join("routes.csv"),
    )
    .expect("copy routes");

    let mut book = RouteBook::from_routes(load_routes(dir.path()).expect("load routes"));
    assert_eq!(book.len(), 2);

    let added = book
        .add(&Route::from_parts(0, vec![6, 7], 610, 489.0, 1))
        .clone();
    assert_eq!(added.id(), 3);

    save_routes(&dir.path().join("routes.csv"), book.routes()).expect("save");
    let reloaded = load_routes(dir.path()).expect("reload");
    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded[2], added);
}

#[test]
fn missing_routes_file_means_no_saved_routes() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(load_routes(dir.path()).expect("load").is_empty());
}
