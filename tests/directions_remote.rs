use httpmock::prelude::*;
use rstest::{fixture, rstest};
use serde_json::json;
use std::time::Duration;
use trip_cost::sdk::routing::error::{GENERIC_MESSAGE, NO_ROUTE_MESSAGE, TOO_LONG_MESSAGE};
use trip_cost::sdk::routing::{
    DirectionsError, DirectionsProvider, DirectionsStatus, GoogleDirectionsProvider, RouteComposer,
};
use trip_cost::sdk::util::rate_limit;

const PATH: &str = "/maps/api/directions/json";

#[fixture]
fn server() -> MockServer {
    MockServer::start()
}

fn provider(server: &MockServer) -> GoogleDirectionsProvider {
    GoogleDirectionsProvider::new(
        "test-key".to_string(),
        server.url(PATH),
        Duration::from_secs(5),
        rate_limit::per_minute(1_000),
    )
    .expect("client")
}

fn composer(origin: &str, destination: &str, stops: &[&str]) -> RouteComposer {
    let mut composer = RouteComposer::new();
    composer.origin = origin.to_string();
    composer.destination = destination.to_string();
    for (i, stop) in stops.iter().enumerate() {
        composer.add_stop();
        composer.update_stop(i, *stop);
    }
    composer
}

#[rstest]
fn sends_waypoints_and_parses_legs(server: MockServer) {
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(PATH)
            .query_param("origin", "Los Angeles, CA")
            .query_param("destination", "San Francisco, CA")
            .query_param("waypoints", "Santa Barbara, CA|San Luis Obispo, CA")
            .query_param("mode", "driving")
            .query_param("alternatives", "true")
            .query_param("key", "test-key");
        then.status(200).json_body(json!({
            "status": "OK",
            "routes": [{
                "summary": "US-101 N",
                "legs": [
                    { "distance": { "text": "95 mi", "value": 153000 }, "duration": { "text": "2 h", "value": 7200 } },
                    { "distance": { "text": "94 mi", "value": 151000 } },
                    { "duration": { "text": "4 h", "value": 14400 } }
                ]
            }]
        }));
    });

    let request = composer(
        "Los Angeles, CA",
        "San Francisco, CA",
        &["Santa Barbara, CA", " ", "San Luis Obispo, CA"],
    )
    .request()
    .unwrap();
    let routes = provider(&server).directions(&request).unwrap();

    mock.assert();
    assert_eq!(routes.len(), 1);
    let route = &routes[0];
    assert_eq!(route.summary, "US-101 N");
    assert_eq!(route.legs.len(), 3);
    assert_eq!(route.legs[0].distance_meters, Some(153000.0));
    assert_eq!(route.legs[2].distance_meters, None);
    assert_eq!(route.total_duration_hours(), 6.0);
}

#[rstest]
fn zero_results_leaves_no_routes(server: MockServer) {
    server.mock(|when, then| {
        when.method(GET).path(PATH);
        then.status(200)
            .json_body(json!({ "status": "ZERO_RESULTS", "routes": [] }));
    });

    let mut composer = composer("Honolulu, HI", "Boston, MA", &[]);
    let request = composer.request().unwrap();
    let err = composer.submit(&request, &provider(&server)).unwrap_err();

    assert_eq!(err.status(), Some(DirectionsStatus::ZeroResults));
    assert_eq!(err.user_message(), NO_ROUTE_MESSAGE);
    assert!(composer.routes().is_empty());
    assert_eq!(composer.error(), Some(NO_ROUTE_MESSAGE));
}

#[rstest]
#[case("MAX_ROUTE_LENGTH_EXCEEDED", TOO_LONG_MESSAGE)]
#[case("REQUEST_DENIED", GENERIC_MESSAGE)]
#[case("BRAND_NEW_STATUS", GENERIC_MESSAGE)]
fn classifies_service_status(server: MockServer, #[case] status: &str, #[case] message: &str) {
    server.mock(|when, then| {
        when.method(GET).path(PATH);
        then.status(200).json_body(json!({
            "status": status,
            "error_message": "details from the service",
            "routes": []
        }));
    });

    let request = composer("A", "B", &[]).request().unwrap();
    let err = provider(&server).directions(&request).unwrap_err();
    assert_eq!(err.user_message(), message);
    assert!(err.to_string().contains("details from the service"), "{err}");
}

#[rstest]
fn http_failure_is_reported(server: MockServer) {
    server.mock(|when, then| {
        when.method(GET).path(PATH);
        then.status(500).body("boom");
    });

    let request = composer("A", "B", &[]).request().unwrap();
    let err = provider(&server).directions(&request).unwrap_err();
    assert!(matches!(err, DirectionsError::HttpStatus { status: 500, .. }));
    assert_eq!(err.user_message(), GENERIC_MESSAGE);
}
