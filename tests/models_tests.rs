//! Data model unit tests

use keybase_api::{ApiResponse, Query, QueryValue};
use serde_json::{json, Value};

#[test]
fn test_query_value_encoding() {
    let test_cases = vec![
        (QueryValue::from("alice"), "alice"),
        (QueryValue::from("William Woodruff".to_string()), "William Woodruff"),
        (QueryValue::from(5i64), "5"),
        (QueryValue::from(-3i64), "-3"),
        (QueryValue::from(true), "true"),
        (QueryValue::from(false), "false"),
        (QueryValue::from(vec!["alice"]), "alice"),
        (QueryValue::from(vec!["alice", "bob"]), "alice,bob"),
    ];

    for (value, expected) in test_cases {
        assert_eq!(value.encode(), expected);
    }
}

#[test]
fn test_query_builder_keeps_keys_unique() {
    let query = Query::new()
        .with("flatten", true)
        .with("github", "woodruffw")
        .with("flatten", false);

    assert_eq!(query.len(), 2);
    assert_eq!(query.get("flatten"), Some(&QueryValue::Bool(false)));
}

#[test]
fn test_query_to_pairs_encoding() {
    let query = Query::new()
        .with("usernames", vec!["alice", "bob"])
        .with("seqno", 5i64)
        .with("flatten", true);

    let pairs = query.to_pairs();
    assert!(pairs.contains(&("usernames".to_string(), "alice,bob".to_string())));
    assert!(pairs.contains(&("seqno".to_string(), "5".to_string())));
    assert!(pairs.contains(&("flatten".to_string(), "true".to_string())));
}

#[test]
fn test_empty_query_produces_no_pairs() {
    assert!(Query::new().to_pairs().is_empty());
}

#[test]
fn test_listify_wraps_scalars() {
    let mut query = Query::new().with("usernames", "alice");
    query.listify("usernames");
    assert_eq!(
        query.get("usernames"),
        Some(&QueryValue::List(vec!["alice".to_string()]))
    );

    let mut query = Query::new().with("usernames", vec!["alice", "bob"]);
    query.listify("usernames");
    assert_eq!(
        query.get("usernames"),
        Some(&QueryValue::List(vec!["alice".to_string(), "bob".to_string()]))
    );
}

#[test]
fn test_response_status_accessors() {
    let response = ApiResponse::new(json!({
        "status": { "code": 0, "name": "OK" }
    }));

    assert!(response.is_ok());
    assert_eq!(response.status_code(), Some(0));
    assert_eq!(response.status_name(), Some("OK"));
    assert_eq!(response.status_desc(), None);
}

#[test]
fn test_response_round_trips_through_serde() {
    let body = json!({
        "status": { "code": 0, "name": "OK" },
        "them": [{ "id": "abc123" }]
    });

    let response: ApiResponse = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(serde_json::to_value(&response).unwrap(), body);
}

#[test]
fn test_response_generic_access() {
    let response = ApiResponse::new(json!({
        "status": { "code": 0, "name": "OK" },
        "root": { "seqno": 100, "ctime": 1500000000 }
    }));

    assert_eq!(
        response.pointer("/root/seqno").and_then(Value::as_i64),
        Some(100)
    );
    assert!(response.get("root").is_some());
    assert!(response.get("missing").is_none());

    let inner = response.into_inner();
    assert_eq!(inner["root"]["ctime"], json!(1500000000));
}

#[test]
fn test_ensure_ok_identity_on_success() {
    let body = json!({
        "status": { "code": 0, "name": "OK" },
        "completions": [{ "total_score": 1.5 }]
    });
    let response = ApiResponse::new(body.clone());

    let unwrapped = response.ensure_ok().expect("status 0 must unwrap");
    assert_eq!(unwrapped.as_value(), &body);
}

#[test]
fn test_ensure_ok_error_carries_desc() {
    let response = ApiResponse::new(json!({
        "status": { "code": 100, "desc": "bad arguments", "name": "INPUT_ERROR" }
    }));

    let error = response.ensure_ok().unwrap_err();
    assert!(error.is_api());
    assert_eq!(error.api_message(), Some("bad arguments"));
}
