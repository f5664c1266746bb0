//! Integration tests for the chat HTTP endpoint.

use axum::body::Body;
use paper_universe::chat::{
    FOLLOW_UP_IDEAS, GENERIC_FAILURE, MISSING_MESSAGE_REPLY, NEXT_STEPS, chat_router,
};
use tower::ServiceExt;

fn make_post_request(uri: &str, body: impl Into<Body>) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(request: axum::http::Request<Body>) -> (axum::http::StatusCode, serde_json::Value) {
    let resp = ServiceExt::<axum::http::Request<Body>>::oneshot(chat_router(), request)
        .await
        .unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), 100_000)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

async fn post_json(body: serde_json::Value) -> (axum::http::StatusCode, serde_json::Value) {
    send(make_post_request(
        "/api/chat",
        serde_json::to_string(&body).unwrap(),
    ))
    .await
}

// --- POST /api/chat ---

#[tokio::test]
async fn test_chat_with_paper_context() {
    let (status, json) = post_json(serde_json::json!({
        "message": "What are the implications?",
        "paper": {
            "title": "Bone Loss in Orbit",
            "summary": "Astronauts lose bone density.",
            "keywords": ["bone", "calcium", "exercise", "diet"],
            "authors": ["Dr. Ada Chen", "Dr. Li Park"],
            "source": "NASA Ames Research Center",
            "date": "2021"
        }
    }))
    .await;

    assert_eq!(status, 200);
    let reply = json["reply"].as_str().unwrap();
    assert!(reply.starts_with("Here is what I can derive from \"Bone Loss in Orbit\":"));
    assert!(reply.contains("• Overview: Astronauts lose bone density."));
    assert!(reply.contains("• Key insight: Dr. Ada Chen et al. highlight"));
    assert!(reply.contains(
        "You asked: \"What are the implications?\" (source: NASA Ames Research Center, 2021)."
    ));
    assert!(NEXT_STEPS.iter().any(|step| reply.contains(step)));
    assert!(FOLLOW_UP_IDEAS.iter().any(|idea| reply.contains(idea)));
}

#[tokio::test]
async fn test_chat_without_paper_uses_defaults() {
    let (status, json) = post_json(serde_json::json!({ "message": "  Summarize  " })).await;

    assert_eq!(status, 200);
    let reply = json["reply"].as_str().unwrap();
    assert!(reply.starts_with("Here is what I can derive from this paper:"));
    assert!(reply.contains("related to space biology."));
    assert!(reply.contains("the research team highlight"));
    assert!(reply.contains("You asked: \"Summarize\". Align"));
}

#[tokio::test]
async fn test_chat_null_paper_is_accepted() {
    let (status, json) =
        post_json(serde_json::json!({ "message": "Hello", "paper": null })).await;
    assert_eq!(status, 200);
    assert!(json["reply"].as_str().unwrap().contains("this paper"));
}

#[tokio::test]
async fn test_chat_missing_message_is_bad_request() {
    let (status, json) = post_json(serde_json::json!({ "paper": { "title": "X" } })).await;
    assert_eq!(status, 400);
    assert_eq!(json["reply"], MISSING_MESSAGE_REPLY);
}

#[tokio::test]
async fn test_chat_blank_or_non_string_message_is_bad_request() {
    for body in [
        serde_json::json!({ "message": "   " }),
        serde_json::json!({ "message": 42 }),
        serde_json::json!({ "message": null }),
    ] {
        let (status, json) = post_json(body).await;
        assert_eq!(status, 400);
        assert_eq!(json["reply"], MISSING_MESSAGE_REPLY);
    }
}

#[tokio::test]
async fn test_chat_malformed_json_is_server_error() {
    let (status, json) = send(make_post_request("/api/chat", "{not json")).await;
    assert_eq!(status, 500);
    assert_eq!(json["error"], GENERIC_FAILURE);
}

#[tokio::test]
async fn test_chat_wrong_paper_shape_is_server_error() {
    let (status, json) =
        post_json(serde_json::json!({ "message": "Hi", "paper": { "keywords": "bone" } })).await;
    assert_eq!(status, 500);
    assert_eq!(json["error"], GENERIC_FAILURE);
}

// --- GET /api/health ---

#[tokio::test]
async fn test_health_reports_ok() {
    let request = axum::http::Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(request).await;
    assert_eq!(status, 200);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_chat_rejects_get() {
    let request = axum::http::Request::builder()
        .uri("/api/chat")
        .body(Body::empty())
        .unwrap();
    let resp = ServiceExt::<axum::http::Request<Body>>::oneshot(chat_router(), request)
        .await
        .unwrap();
    assert_eq!(resp.status(), 405);
}
