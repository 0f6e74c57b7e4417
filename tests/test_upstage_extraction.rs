use serde_json::{json, Value};
use solarkit::domain::error::DomainError;
use solarkit::domain::ports::extraction_port::ExtractionProvider;
use solarkit::domain::values::extraction_mode::ExtractionMode;
use solarkit::infrastructure::extraction::upstage::UpstageExtractionProvider;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider(server: &MockServer) -> UpstageExtractionProvider {
    UpstageExtractionProvider::new(Some("test-key".into()), server.uri(), None)
}

fn chat_response(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

fn invoice_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "supplier": {"type": "string"},
            "total": {"type": "string"}
        }
    })
}

#[tokio::test]
async fn test_extract_parses_message_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "information-extract",
            "confidence": true,
            "mode": "standard",
            "response_format": {
                "type": "json_schema",
                "json_schema": {"name": "extraction_schema"}
            }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_response(r#"{"supplier": "ACME", "total": "12,000"}"#)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let data = provider(&server)
        .extract(b"\x89PNG", &invoice_schema(), ExtractionMode::Standard)
        .await
        .unwrap();

    assert_eq!(data["supplier"], "ACME");
    assert_eq!(data["total"], "12,000");
}

#[tokio::test]
async fn test_request_carries_base64_image_and_schema() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("{}")))
        .mount(&server)
        .await;

    provider(&server)
        .extract(b"abc", &invoice_schema(), ExtractionMode::Enhanced)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: Value = requests[0].body_json().unwrap();
    assert_eq!(body["mode"], "enhanced");
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(
        body["messages"][0]["content"][0]["image_url"]["url"],
        "data:application/octet-stream;base64,YWJj"
    );
    assert_eq!(body["response_format"]["json_schema"]["schema"], invoice_schema());
}

#[tokio::test]
async fn test_non_json_content_is_extraction_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("Sorry, I cannot read this.")))
        .mount(&server)
        .await;

    let err = provider(&server)
        .extract(b"abc", &invoice_schema(), ExtractionMode::Standard)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Extraction(_)));
}

#[tokio::test]
async fn test_missing_choices_is_extraction_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = provider(&server)
        .extract(b"abc", &invoice_schema(), ExtractionMode::Standard)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Extraction(_)));
}

#[tokio::test]
async fn test_http_error_is_extraction_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream failure"))
        .mount(&server)
        .await;

    let err = provider(&server)
        .extract(b"abc", &invoice_schema(), ExtractionMode::Standard)
        .await
        .unwrap_err();

    match err {
        DomainError::Extraction(msg) => assert!(msg.contains("500")),
        other => panic!("expected Extraction error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_key_is_configuration_error() {
    let server = MockServer::start().await;

    let err = UpstageExtractionProvider::new(None, server.uri(), None)
        .extract(b"abc", &invoice_schema(), ExtractionMode::Standard)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Configuration(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}
