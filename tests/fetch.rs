use http::{HeaderMap, StatusCode, header::ACCEPT};
use jsonfetch::{FetchClient, Fetcher, MockRegistry, MockRule};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use url::Url;

const SAMPLE_RESPONSE: &str = include_str!("fixtures/response.json");

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn endpoint() -> Url {
    Url::parse("https://example.com/").unwrap()
}

#[tokio::test]
async fn fetch_from_endpoint_round_trips_the_fixture() {
    init_logger();

    let registry = MockRegistry::new();
    registry.register(
        MockRule::new(endpoint())
            .set_status(StatusCode::OK)
            .set_payload(SAMPLE_RESPONSE.as_bytes().to_vec())
            .set_ignore_query(true),
    );

    let mut client = FetchClient::new(registry.build_session(), endpoint());
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, "application/json".parse().unwrap());
    client.set_headers(headers);

    let received = Arc::new(Mutex::new(None));
    client.on_success({
        let received = received.clone();
        move |json| *received.lock().unwrap() = json
    });
    client.on_failure(|_, _| panic!("the failure callback was not supposed to be called"));

    client.fetch().await.unwrap();

    let expected: Value = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
    assert_eq!(*received.lock().unwrap(), Some(expected));
}

#[tokio::test]
async fn failed_fetch_reports_status_and_message() {
    init_logger();

    let registry = MockRegistry::new();
    registry.register(
        MockRule::new(endpoint())
            .set_status(StatusCode::BAD_REQUEST)
            .set_error("Bad Request")
            .set_payload(SAMPLE_RESPONSE.as_bytes().to_vec())
            .set_ignore_query(true),
    );

    let mut client = FetchClient::new(registry.build_session(), endpoint());
    let received = Arc::new(Mutex::new(None));
    client.on_success(|_| panic!("the success callback was not supposed to be called"));
    client.on_failure({
        let received = received.clone();
        move |status, message| *received.lock().unwrap() = Some((status, message))
    });

    client.fetch().await.unwrap();

    assert_eq!(
        *received.lock().unwrap(),
        Some((Some(400), Some("Bad Request".to_string())))
    );
}

#[tokio::test]
async fn non_2xx_without_synthetic_error_reports_the_reason_phrase() {
    init_logger();

    let registry = MockRegistry::new();
    registry.register(
        MockRule::new(endpoint())
            .set_status(StatusCode::INTERNAL_SERVER_ERROR)
            .set_payload(b"{}".to_vec()),
    );

    let mut client = FetchClient::new(registry.build_session(), endpoint());
    let received = Arc::new(Mutex::new(None));
    client.on_failure({
        let received = received.clone();
        move |status, message| *received.lock().unwrap() = Some((status, message))
    });

    client.fetch().await.unwrap();

    assert_eq!(
        *received.lock().unwrap(),
        Some((Some(500), Some("Internal Server Error".to_string())))
    );
}

#[tokio::test]
async fn client_is_usable_through_the_fetcher_trait() {
    init_logger();

    let registry = MockRegistry::new();
    registry.register(MockRule::new(endpoint()).set_payload(b"{}".to_vec()));

    let mut client = FetchClient::new(registry.build_session(), endpoint());
    let received = Arc::new(Mutex::new(None));
    client.on_success({
        let received = received.clone();
        move |json| *received.lock().unwrap() = json
    });

    let fetcher: &dyn Fetcher = &client;
    fetcher.fetch().await.unwrap();

    assert_eq!(*received.lock().unwrap(), Some(Value::Object(Default::default())));
}

#[tokio::test]
async fn in_flight_fetches_are_independent() {
    init_logger();

    let registry = MockRegistry::new();
    registry.register(
        MockRule::new(endpoint())
            .set_payload(br#"{"key":"value"}"#.to_vec())
            .set_ignore_query(true),
    );

    let mut client = FetchClient::new(registry.build_session(), endpoint());
    let successes = Arc::new(Mutex::new(0));
    client.on_success({
        let successes = successes.clone();
        move |_| *successes.lock().unwrap() += 1
    });

    let first = client.fetch();
    let second = client.fetch();
    first.await.unwrap();
    second.await.unwrap();

    assert_eq!(*successes.lock().unwrap(), 2);
}
