//! Integration tests for the HTTP trivia backend.
//!
//! A local `httpmock` server stands in for the Numbers API so these tests
//! never touch the real network.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use httpmock::prelude::*;
use numclass_facts::{
    FactError, FactProvider, NumbersApiBackend, TriviaBackend, TriviaConfig, FALLBACK_FACT,
};

fn config_for(server: &MockServer, category: &str) -> TriviaConfig {
    TriviaConfig {
        enabled: true,
        base_url: server.base_url(),
        category: category.to_owned(),
        timeout_ms: 2000,
    }
}

#[tokio::test]
async fn test_lookup_returns_body_text() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/42/math");
            then.status(200)
                .header("Content-Type", "text/plain")
                .body("42 is the 5th Catalan number.\n");
        })
        .await;

    let backend = TriviaBackend::NumbersApi(
        NumbersApiBackend::new(&config_for(&server, "math")).unwrap(),
    );
    let fact = backend.lookup(42).await.unwrap();

    mock.assert_async().await;
    assert_eq!(fact, "42 is the 5th Catalan number.");
}

#[tokio::test]
async fn test_lookup_without_category() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/12");
            then.status(200).body("12 is the number of months in a year.");
        })
        .await;

    let backend =
        TriviaBackend::NumbersApi(NumbersApiBackend::new(&config_for(&server, "")).unwrap());
    let fact = backend.lookup(12).await.unwrap();

    mock.assert_async().await;
    assert_eq!(fact, "12 is the number of months in a year.");
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/42/math");
            then.status(500).body("upstream exploded");
        })
        .await;

    let backend = TriviaBackend::NumbersApi(
        NumbersApiBackend::new(&config_for(&server, "math")).unwrap(),
    );
    let result = backend.lookup(42).await;

    assert!(matches!(result, Err(FactError::Status { status: 500 })));
}

#[tokio::test]
async fn test_empty_body_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/8/math");
            then.status(200).body("   ");
        })
        .await;

    let backend = TriviaBackend::NumbersApi(
        NumbersApiBackend::new(&config_for(&server, "math")).unwrap(),
    );
    let result = backend.lookup(8).await;

    assert!(matches!(result, Err(FactError::EmptyBody)));
}

#[tokio::test]
async fn test_provider_queries_magnitude_of_negative_input() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/42/math");
            then.status(200).body("42 is a pronic number.");
        })
        .await;

    let facts = FactProvider::from_config(&config_for(&server, "math")).unwrap();

    assert_eq!(facts.fun_fact(-42).await, "42 is a pronic number.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_provider_falls_back_on_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/42/math");
            then.status(404);
        })
        .await;

    let facts = FactProvider::from_config(&config_for(&server, "math")).unwrap();

    assert_eq!(facts.fun_fact(42).await, FALLBACK_FACT);
}

#[tokio::test]
async fn test_provider_falls_back_on_slow_upstream() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/42/math");
            then.status(200)
                .body("arrives far too late")
                .delay(Duration::from_secs(5));
        })
        .await;

    let config = TriviaConfig {
        timeout_ms: 200,
        ..config_for(&server, "math")
    };
    let facts = FactProvider::from_config(&config).unwrap();

    assert_eq!(facts.fun_fact(42).await, FALLBACK_FACT);
}

#[tokio::test]
async fn test_provider_falls_back_when_service_unreachable() {
    // Nothing listens on port 9 of the loopback interface.
    let config = TriviaConfig {
        enabled: true,
        base_url: String::from("http://127.0.0.1:9"),
        category: String::from("math"),
        timeout_ms: 500,
    };
    let facts = FactProvider::from_config(&config).unwrap();

    assert_eq!(facts.fun_fact(42).await, FALLBACK_FACT);
}

#[tokio::test]
async fn test_armstrong_numbers_never_reach_the_service() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).body("should not be used");
        })
        .await;

    let facts = FactProvider::from_config(&config_for(&server, "math")).unwrap();
    let fact = facts.fun_fact(371).await;

    assert_eq!(
        fact,
        "371 is an Armstrong number because 3^3 + 7^3 + 1^3 = 371"
    );
    mock.assert_hits_async(0).await;
}
