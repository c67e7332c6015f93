use contact_relay::controller::payload::SubmissionPayload;
use contact_relay::transport::fetch::{FetchResponse, MockBackend, RequestMode};
use contact_relay::transport::sender::{DeliveryOutcome, Transport, indicates_success};

fn payload() -> SubmissionPayload {
    SubmissionPayload::from_fields(
        vec![("mensaje".to_string(), "hi".to_string())],
        "2025-06-01T10:00:00.000Z",
        "https://example.com/contact",
    )
}

fn transport(backend: &MockBackend) -> Transport {
    Transport::with_backend("https://relay.example/exec", Box::new(backend.clone()))
}

// =========================================================================
// Readable attempt
// =========================================================================

#[test]
fn readable_success_with_result_marker_returns_data() {
    let backend =
        MockBackend::new().with_response(FetchResponse::readable(200, Some(r#"{"result":"success","row":7}"#)));
    let outcome = transport(&backend).send(&payload());

    match outcome {
        DeliveryOutcome::Delivered { data, opaque } => {
            assert!(!opaque, "Readable success is not opaque");
            let data = data.expect("explicit success marker carries data");
            assert_eq!(data["row"], 7, "Parsed body is returned as-is");
        }
        other => panic!("Expected Delivered, got {:?}", other),
    }
    assert_eq!(
        backend.calls(),
        vec![RequestMode::Readable],
        "No fallback after a readable success"
    );
}

#[test]
fn readable_success_with_status_marker_returns_data() {
    let backend =
        MockBackend::new().with_response(FetchResponse::readable(200, Some(r#"{"status":"success"}"#)));
    let outcome = transport(&backend).send(&payload());

    assert!(
        matches!(outcome, DeliveryOutcome::Delivered { data: Some(_), .. }),
        "status == success is an accepted marker"
    );
}

#[test]
fn readable_2xx_without_marker_is_still_delivered() {
    // Parsed body that explicitly indicates failure: 2xx still wins
    let backend =
        MockBackend::new().with_response(FetchResponse::readable(200, Some(r#"{"result":"error"}"#)));
    let outcome = transport(&backend).send(&payload());

    match outcome {
        DeliveryOutcome::Delivered { data, opaque } => {
            assert!(data.is_none(), "No success marker, no data");
            assert!(!opaque);
        }
        other => panic!("Expected Delivered, got {:?}", other),
    }
    assert_eq!(backend.calls(), vec![RequestMode::Readable]);
}

#[test]
fn readable_2xx_with_unparseable_body_is_delivered() {
    let backend =
        MockBackend::new().with_response(FetchResponse::readable(200, Some("<html>ok</html>")));
    let outcome = transport(&backend).send(&payload());

    assert!(
        matches!(outcome, DeliveryOutcome::Delivered { data: None, opaque: false }),
        "Unparseable body under 2xx is tolerated"
    );
}

#[test]
fn readable_2xx_with_no_body_is_delivered() {
    let backend = MockBackend::new().with_response(FetchResponse::readable(204, None));
    let outcome = transport(&backend).send(&payload());

    assert!(matches!(
        outcome,
        DeliveryOutcome::Delivered { data: None, opaque: false }
    ));
}

// =========================================================================
// Opaque fallback
// =========================================================================

#[test]
fn non_2xx_status_falls_back_to_opaque() {
    let backend = MockBackend::new()
        .with_response(FetchResponse::readable(500, Some("boom")))
        .with_response(FetchResponse::opaque());
    let outcome = transport(&backend).send(&payload());

    match outcome {
        DeliveryOutcome::Delivered { data, opaque } => {
            assert!(opaque, "Fallback delivery is flagged opaque");
            assert!(data.is_none(), "Opaque responses carry no data");
        }
        other => panic!("Expected Delivered, got {:?}", other),
    }
    assert_eq!(
        backend.calls(),
        vec![RequestMode::Readable, RequestMode::Opaque],
        "Readable first, opaque second"
    );
}

#[test]
fn wire_failure_falls_back_to_opaque() {
    let backend = MockBackend::new()
        .with_error(RequestMode::Readable, "connection refused")
        .with_response(FetchResponse::opaque());
    let outcome = transport(&backend).send(&payload());

    assert!(outcome.is_delivered(), "Opaque fallback rescues a wire failure");
    assert_eq!(backend.calls(), vec![RequestMode::Readable, RequestMode::Opaque]);
}

#[test]
fn first_attempt_error_is_never_surfaced() {
    let backend = MockBackend::new()
        .with_error(RequestMode::Readable, "first boom")
        .with_response(FetchResponse::opaque());
    let outcome = transport(&backend).send(&payload());

    match outcome {
        DeliveryOutcome::Delivered { .. } => {}
        DeliveryOutcome::Failed { message } => {
            panic!("First error leaked into the outcome: {}", message)
        }
    }
}

#[test]
fn fallback_2xx_readable_response_counts_as_delivered() {
    // A fallback that somehow came back readable and ok is still success
    let backend = MockBackend::new()
        .with_response(FetchResponse::readable(403, None))
        .with_response(FetchResponse::readable(200, None));
    let outcome = transport(&backend).send(&payload());

    assert!(matches!(
        outcome,
        DeliveryOutcome::Delivered { opaque: true, .. }
    ));
}

#[test]
fn fallback_rejection_fails_with_status() {
    let backend = MockBackend::new()
        .with_response(FetchResponse::readable(500, None))
        .with_response(FetchResponse::readable(503, None));
    let outcome = transport(&backend).send(&payload());

    match outcome {
        DeliveryOutcome::Failed { message } => {
            assert!(message.contains("503"), "Got: {}", message)
        }
        other => panic!("Expected Failed, got {:?}", other),
    }
}

#[test]
fn both_attempts_failing_surfaces_second_message() {
    let backend = MockBackend::new()
        .with_error(RequestMode::Readable, "first boom")
        .with_error(RequestMode::Opaque, "Network error");
    let outcome = transport(&backend).send(&payload());

    match outcome {
        DeliveryOutcome::Failed { message } => {
            assert_eq!(message, "Network error", "Second error's raw message");
        }
        other => panic!("Expected Failed, got {:?}", other),
    }
}

#[test]
fn never_more_than_two_attempts() {
    let backend = MockBackend::new()
        .with_error(RequestMode::Readable, "a")
        .with_error(RequestMode::Opaque, "b")
        .with_response(FetchResponse::opaque());
    let _ = transport(&backend).send(&payload());

    assert_eq!(
        backend.calls(),
        vec![RequestMode::Readable, RequestMode::Opaque],
        "No retries beyond the one scripted fallback"
    );
}

// =========================================================================
// Success indicator
// =========================================================================

#[test]
fn indicates_success_recognizes_both_keys_only() {
    let yes_result: serde_json::Value = serde_json::json!({"result": "success"});
    let yes_status: serde_json::Value = serde_json::json!({"status": "success"});
    let no_marker: serde_json::Value = serde_json::json!({"outcome": "success"});
    let wrong_value: serde_json::Value = serde_json::json!({"result": "ok"});
    let non_string: serde_json::Value = serde_json::json!({"result": true});

    assert!(indicates_success(&yes_result));
    assert!(indicates_success(&yes_status));
    assert!(!indicates_success(&no_marker));
    assert!(!indicates_success(&wrong_value));
    assert!(!indicates_success(&non_string));
}
