//! CheckoutInitiator against a mock payments endpoint

use std::cell::RefCell;

use serde_json::json;
use unitgate_core::checkout::CHECKOUT_PATH;
use unitgate_core::config::BackendConfig;
use unitgate_core::{ApiClient, CheckoutInitiator, CheckoutInterval, UrlOpener};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn initiator_for(server: &MockServer) -> CheckoutInitiator {
    let api = ApiClient::new(&BackendConfig {
        url: server.uri(),
        timeout_secs: 5,
    })
    .unwrap();
    CheckoutInitiator::new(api)
}

/// Records every URL it is asked to open.
#[derive(Default)]
struct RecordingOpener {
    opened: RefCell<Vec<String>>,
    fail: bool,
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        if self.fail {
            Err(std::io::Error::other("no browser"))
        } else {
            Ok(())
        }
    }
}

#[tokio::test]
async fn yearly_checkout_returns_url_unmodified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHECKOUT_PATH))
        .and(query_param("plan", "yearly"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"checkout_url": "https://pay.example/abc"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let url = initiator_for(&server)
        .create_checkout(CheckoutInterval::Yearly)
        .await
        .unwrap();
    assert_eq!(url, "https://pay.example/abc");
}

#[tokio::test]
async fn failure_surfaces_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHECKOUT_PATH))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"detail": "Payments are down"})),
        )
        .mount(&server)
        .await;

    let err = initiator_for(&server)
        .create_checkout(CheckoutInterval::Monthly)
        .await
        .unwrap_err();
    assert_eq!(err.message, "Payments are down");
}

#[tokio::test]
async fn failure_without_detail_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHECKOUT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = initiator_for(&server)
        .create_checkout(CheckoutInterval::Monthly)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Checkout creation failed");
}

#[tokio::test]
async fn malformed_success_body_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHECKOUT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"url": "x"})))
        .mount(&server)
        .await;

    let err = initiator_for(&server)
        .create_checkout(CheckoutInterval::Monthly)
        .await
        .unwrap_err();
    assert!(err.message.starts_with("Checkout creation failed"));
}

#[tokio::test]
async fn initiate_hands_url_to_opener() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHECKOUT_PATH))
        .and(query_param("plan", "monthly"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"checkout_url": "https://pay.example/m"})),
        )
        .mount(&server)
        .await;

    let opener = RecordingOpener::default();
    let url = initiator_for(&server)
        .initiate(CheckoutInterval::Monthly, &opener)
        .await
        .unwrap();
    assert_eq!(url, "https://pay.example/m");
    assert_eq!(opener.opened.borrow().as_slice(), ["https://pay.example/m"]);
}

#[tokio::test]
async fn initiate_returns_url_when_opener_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHECKOUT_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"checkout_url": "https://pay.example/y"})),
        )
        .mount(&server)
        .await;

    let opener = RecordingOpener {
        fail: true,
        ..Default::default()
    };
    let url = initiator_for(&server)
        .initiate(CheckoutInterval::Yearly, &opener)
        .await
        .unwrap();
    assert_eq!(url, "https://pay.example/y");
}

#[tokio::test]
async fn failed_checkout_never_opens_browser() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHECKOUT_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let opener = RecordingOpener::default();
    let result = initiator_for(&server)
        .initiate(CheckoutInterval::Yearly, &opener)
        .await;
    assert!(result.is_err());
    assert!(opener.opened.borrow().is_empty());
}
