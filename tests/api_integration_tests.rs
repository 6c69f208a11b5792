mod common;

use common::StubServer;
use recipe_wizard::api_connection::{
    connection::ApiConnectionError,
    endpoints::{Provider, DEFAULT_MODEL},
};
use recipe_wizard::config::{AppConfig, OLLAMA_URL_ENV_VAR};
use recipe_wizard::recipe_generator::{
    generate_annotated_recipe, generate_recipe, EMPTY_RESPONSE_MESSAGE,
};

// Nothing listens on port 1 on a test machine
const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

#[tokio::test]
async fn test_successful_generate_call_posts_non_streaming_request() {
    let server = StubServer::respond_once(
        "200 OK",
        r#"{"model":"tinyllama","response":"2 cups milk","done":true,"eval_count":12}"#,
    )
    .await;
    let provider = Provider::ollama(server.base_url(), "tinyllama");

    let response = provider
        .call_generate(provider.generate_request("pancakes"))
        .await
        .expect("stub server should answer");
    assert_eq!(response.response.as_deref(), Some("2 cups milk"));
    assert_eq!(response.done, Some(true));
    assert_eq!(response.eval_count, Some(12));

    let captured = server.captured().await;
    assert_eq!(captured.request_line, "POST /api/generate HTTP/1.1");
    assert_eq!(captured.body["model"], "tinyllama");
    assert_eq!(captured.body["prompt"], "pancakes");
    assert_eq!(captured.body["stream"], false);
}

#[tokio::test]
async fn test_generated_recipe_is_annotated() {
    let server = StubServer::respond_once(
        "200 OK",
        r#"{"response":"Pancakes\n\n1 cup all-purpose flour, sifted\n2 cups milk\nMix well."}"#,
    )
    .await;
    let provider = Provider::ollama(server.base_url(), DEFAULT_MODEL);

    let recipe = generate_annotated_recipe(&provider, "pancakes", 20.0).await;
    assert_eq!(
        recipe,
        "Pancakes\n\n1 cup all-purpose flour (120.0g), sifted\n2 cups milk (484.0g)\nMix well."
    );

    let captured = server.captured().await;
    assert_eq!(
        captured.body["prompt"],
        "Generate a detailed recipe for pancakes. Include ingredients with measurements and step-by-step instructions."
    );
}

#[tokio::test]
async fn test_missing_response_field_gives_apology() {
    let server = StubServer::respond_once("200 OK", r#"{"model":"tinyllama","done":true}"#).await;
    let provider = Provider::ollama(server.base_url(), "tinyllama");

    assert_eq!(generate_recipe(&provider, "soup").await, EMPTY_RESPONSE_MESSAGE);
}

#[tokio::test]
async fn test_api_error_status_is_reported() {
    let server =
        StubServer::respond_once("404 Not Found", r#"{"error":"model 'tinyllama' not found"}"#).await;
    let provider = Provider::ollama(server.base_url(), "tinyllama");

    let result = provider.call_generate(provider.generate_request("soup")).await;
    match result {
        Err(ApiConnectionError::ApiError { status, error_body }) => {
            assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
            assert!(error_body.contains("not found"));
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_api_error_status_becomes_recipe_message() {
    let server = StubServer::respond_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let provider = Provider::ollama(server.base_url(), "tinyllama");

    assert_eq!(
        generate_recipe(&provider, "soup").await,
        "Error: 500. Make sure Ollama is running with the tinyllama model."
    );
}

#[tokio::test]
async fn test_malformed_body_is_a_serialization_error() {
    let server = StubServer::respond_once("200 OK", "this is not json").await;
    let provider = Provider::ollama(server.base_url(), "tinyllama");

    let result = provider.call_generate(provider.generate_request("soup")).await;
    assert!(
        matches!(result, Err(ApiConnectionError::SerializationError(_))),
        "Expected SerializationError, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    let provider = Provider::ollama(UNREACHABLE_URL, "tinyllama");
    let result = provider.call_generate(provider.generate_request("soup")).await;
    assert!(matches!(result, Err(ApiConnectionError::NetworkError(_))));

    let message = generate_recipe(&provider, "soup").await;
    assert!(message.starts_with("Error connecting to Ollama: "), "{message}");
}

#[tokio::test]
async fn test_invalid_base_url_never_leaves_the_process() {
    let provider = Provider::ollama("localhost:11434", "tinyllama");
    let result = provider.call_generate(provider.generate_request("soup")).await;
    assert!(matches!(result, Err(ApiConnectionError::InvalidBaseUrl(_))));
}

#[tokio::test]
#[ignore]
async fn test_live_ollama_generation() {
    if std::env::var(OLLAMA_URL_ENV_VAR).is_err() {
        println!("Skipping test_live_ollama_generation: {} not set.", OLLAMA_URL_ENV_VAR);
        return;
    }
    let config = AppConfig::from_env().expect("configuration should load");
    let recipe = generate_recipe(&config.provider(), "chocolate chip cookies").await;
    assert!(!recipe.starts_with("Error"), "generation failed: {recipe}");
    assert!(!recipe.trim().is_empty());
}
