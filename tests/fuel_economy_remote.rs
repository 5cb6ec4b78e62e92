use httpmock::prelude::*;
use rstest::{fixture, rstest};
use serde_json::json;
use std::time::Duration;
use trip_cost::sdk::util::rate_limit;
use trip_cost::sdk::vehicle::{FuelEconomyGovProvider, FuelEconomyProvider, LookupError, MenuItem};

#[fixture]
fn server() -> MockServer {
    MockServer::start()
}

fn provider(server: &MockServer) -> FuelEconomyGovProvider {
    FuelEconomyGovProvider::new(
        server.base_url(),
        Duration::from_secs(5),
        rate_limit::per_minute(1_000),
    )
    .expect("client")
}

#[rstest]
fn parses_a_menu_list(server: MockServer) {
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/vehicle/menu/make")
            .query_param("year", "2023");
        then.status(200).json_body(json!({
            "menuItem": [
                { "text": "Honda", "value": "Honda" },
                { "text": "Toyota", "value": "Toyota" }
            ]
        }));
    });

    let makes = provider(&server).makes("2023").unwrap();

    mock.assert();
    assert_eq!(
        makes,
        vec![MenuItem::new("Honda", "Honda"), MenuItem::new("Toyota", "Toyota")]
    );
}

#[rstest]
fn single_entry_menu_is_an_object(server: MockServer) {
    server.mock(|when, then| {
        when.method(GET)
            .path("/vehicle/menu/model")
            .query_param("year", "2023")
            .query_param("make", "Polestar");
        then.status(200)
            .json_body(json!({ "menuItem": { "text": "2", "value": "2" } }));
    });

    let models = provider(&server).models("2023", "Polestar").unwrap();
    assert_eq!(models, vec![MenuItem::new("2", "2")]);
}

#[rstest]
#[case("")]
#[case("null")]
fn empty_body_is_an_empty_menu(server: MockServer, #[case] body: &str) {
    server.mock(|when, then| {
        when.method(GET).path("/vehicle/menu/year");
        then.status(200).body(body);
    });

    assert!(provider(&server).years().unwrap().is_empty());
}

#[rstest]
fn combined_mpg_reads_the_first_option(server: MockServer) {
    let options = server.mock(|when, then| {
        when.method(GET)
            .path("/vehicle/menu/options")
            .query_param("year", "2023")
            .query_param("make", "Toyota")
            .query_param("model", "Camry");
        then.status(200).json_body(json!({
            "menuItem": [
                { "text": "Auto (AV-S8), 4 cyl, 2.5 L", "value": "46001" },
                { "text": "Auto (S8), 6 cyl, 3.5 L", "value": "46002" }
            ]
        }));
    });
    let vehicle = server.mock(|when, then| {
        when.method(GET).path("/vehicle/46001");
        then.status(200)
            .json_body(json!({ "id": "46001", "comb08": "32", "city08": "28" }));
    });

    let mpg = provider(&server).combined_mpg("2023", "Toyota", "Camry").unwrap();

    options.assert();
    vehicle.assert();
    assert_eq!(mpg, 32.0);
}

#[rstest]
fn model_without_options_is_an_error(server: MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/vehicle/menu/options");
        then.status(200).body("null");
    });

    let err = provider(&server)
        .combined_mpg("1984", "Nobody", "Nothing")
        .unwrap_err();
    assert!(matches!(err, LookupError::NoOptions { .. }), "{err}");
}

#[rstest]
fn server_errors_surface_the_status(server: MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/vehicle/menu/year");
        then.status(503).body("maintenance");
    });

    match provider(&server).years() {
        Err(LookupError::HttpStatus { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected an HTTP status error, got {other:?}"),
    }
}
