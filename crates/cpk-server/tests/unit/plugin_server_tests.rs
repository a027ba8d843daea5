//! Request routing tests

use crate::test_utils::server;
use cpk_server::PluginRequest;
use cpk_server::constants::{
    JSONRPC_INVALID_PARAMS, JSONRPC_INVALID_REQUEST, JSONRPC_METHOD_NOT_FOUND,
    JSONRPC_PARSE_ERROR, PLUGIN_REQUEST_CANCELLED,
};
use serde_json::json;
use tokio_util::sync::CancellationToken;

fn request(id: u64, method: &str, params: Option<serde_json::Value>) -> PluginRequest {
    PluginRequest {
        id,
        method: method.to_string(),
        params,
    }
}

#[tokio::test]
async fn test_list_rules() {
    let response = server()
        .handle_request(request(1, "list_rules", None), CancellationToken::new())
        .await;
    assert_eq!(response.id, Some(1));
    let result = response.result.unwrap();
    let ids: Vec<&str> = result["rules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["FILE_NAMED", "FILE_PARKED", "FILE_SLOW"]);
    assert_eq!(result["rules"][0]["default"], json!(true));
    assert_eq!(result["rules"][0]["type"], json!("LINT"));
    assert_eq!(result["categories"][0]["id"], json!("BASIC"));
}

#[tokio::test]
async fn test_list_categories() {
    let response = server()
        .handle_request(request(2, "list_categories", None), CancellationToken::new())
        .await;
    assert_eq!(
        response.result.unwrap()["categories"][0]["purpose"],
        json!("Basic checks.")
    );
}

#[tokio::test]
async fn test_check_runs_default_rules() {
    let params = json!({ "files": [{ "name": "a.proto" }, { "name": "dep.proto", "is_import": true }] });
    let response = server()
        .handle_request(request(3, "check", Some(params)), CancellationToken::new())
        .await;
    let result = response.result.unwrap();
    assert_eq!(result["annotations"].as_array().unwrap().len(), 1);
    assert_eq!(result["annotations"][0]["rule_id"], json!("FILE_NAMED"));
    assert_eq!(result["annotations"][0]["message"], json!("saw a.proto"));
}

#[tokio::test]
async fn test_check_without_params_is_empty() {
    let response = server()
        .handle_request(request(4, "check", None), CancellationToken::new())
        .await;
    assert!(!response.is_error());
    assert_eq!(response.result.unwrap()["annotations"], json!([]));
}

#[tokio::test]
async fn test_unknown_rule_is_invalid_params() {
    let params = json!({ "rule_ids": ["NOT_A_RULE"], "files": [] });
    let response = server()
        .handle_request(request(5, "check", Some(params)), CancellationToken::new())
        .await;
    let error = response.error.unwrap();
    assert_eq!(error.code, JSONRPC_INVALID_PARAMS);
    assert!(error.message.contains("NOT_A_RULE"));
}

#[tokio::test]
async fn test_malformed_check_params() {
    let params = json!({ "rule_ids": "FILE_NAMED" });
    let response = server()
        .handle_request(request(6, "check", Some(params)), CancellationToken::new())
        .await;
    assert_eq!(response.error.unwrap().code, JSONRPC_INVALID_PARAMS);
}

#[tokio::test]
async fn test_unknown_method() {
    let response = server()
        .handle_request(request(7, "shutdown", None), CancellationToken::new())
        .await;
    assert_eq!(response.id, Some(7));
    assert_eq!(response.error.unwrap().code, JSONRPC_METHOD_NOT_FOUND);
}

#[tokio::test]
async fn test_cancelled_check() {
    let token = CancellationToken::new();
    token.cancel();
    let params = json!({ "rule_ids": ["FILE_PARKED"] });
    let response = server()
        .handle_request(request(8, "check", Some(params)), token)
        .await;
    assert_eq!(response.error.unwrap().code, PLUGIN_REQUEST_CANCELLED);
}

#[tokio::test]
async fn test_parse_error_has_no_id() {
    let response = server()
        .handle_line("{not json", CancellationToken::new())
        .await;
    assert_eq!(response.id, None);
    assert_eq!(response.error.unwrap().code, JSONRPC_PARSE_ERROR);
}

#[tokio::test]
async fn test_invalid_request_keeps_id() {
    let response = server()
        .handle_line(r#"{"id": 9, "params": {}}"#, CancellationToken::new())
        .await;
    assert_eq!(response.id, Some(9));
    assert_eq!(response.error.unwrap().code, JSONRPC_INVALID_REQUEST);
}
