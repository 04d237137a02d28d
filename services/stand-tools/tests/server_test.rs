//! stdio 工具服务测试

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::{json, Value};
use stand_config::AppConfig;
use stand_tools::{ToolRegistry, ToolServer};

fn server() -> ToolServer {
    let mut config = AppConfig::default();
    config.sales.seed = Some(7);
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    let handler = storefront::build_handler(&config, today).unwrap();
    ToolServer::new(Arc::new(handler), ToolRegistry::new().unwrap())
}

async fn request(server: &ToolServer, id: u64, method: &str, params: Value) -> Value {
    let line = json!({ "jsonrpc": "2.0", "id": id, "method": method, "params": params });
    let response = server.handle_message(&line.to_string()).await.unwrap();
    serde_json::from_str(&response).unwrap()
}

async fn call(server: &ToolServer, name: &str, arguments: Value) -> (bool, Value) {
    let response = request(
        server,
        1,
        "tools/call",
        json!({ "name": name, "arguments": arguments }),
    )
    .await;
    let result = &response["result"];
    let text = result["content"][0]["text"].as_str().unwrap();
    (
        result["isError"].as_bool().unwrap(),
        serde_json::from_str(text).unwrap(),
    )
}

#[tokio::test]
async fn test_initialize_and_list() {
    let server = server();

    let response = request(&server, 1, "initialize", json!({})).await;
    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["serverInfo"]["name"], "nanobanana-stand");

    let response = request(&server, 2, "tools/list", json!({})).await;
    let tools = response["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 9);
    assert!(tools.iter().all(|t| t["inputSchema"].is_object()));
}

#[tokio::test]
async fn test_notification_has_no_response() {
    let server = server();
    let line = json!({ "jsonrpc": "2.0", "method": "notifications/initialized" });
    assert!(server.handle_message(&line.to_string()).await.is_none());
}

#[tokio::test]
async fn test_null_id_is_answered() {
    let server = server();
    let line = json!({ "jsonrpc": "2.0", "id": null, "method": "ping" });

    let response = server.handle_message(&line.to_string()).await.unwrap();
    let response: Value = serde_json::from_str(&response).unwrap();
    assert!(response["id"].is_null());
    assert_eq!(response["result"], json!({}));
}

#[tokio::test]
async fn test_parse_error_and_unknown_method() {
    let server = server();

    let response = server.handle_message("{not json").await.unwrap();
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], -32700);

    let response = request(&server, 3, "resources/list", json!({})).await;
    assert_eq!(response["error"]["code"], -32601);
}

#[tokio::test]
async fn test_greet() {
    let server = server();
    let (is_error, body) = call(&server, "greet", json!({ "name": "Buster" })).await;
    assert!(!is_error);
    assert_eq!(body["message"], "Hello, Buster!");
}

#[tokio::test]
async fn test_schema_violation_is_invalid_params() {
    let server = server();
    let response = request(
        &server,
        4,
        "tools/call",
        json!({ "name": "create-product", "arguments": { "name": "Golden Banana" } }),
    )
    .await;
    assert_eq!(response["error"]["code"], -32602);

    let response = request(
        &server,
        5,
        "tools/call",
        json!({ "name": "get-customer", "arguments": { "id": "seven" } }),
    )
    .await;
    assert_eq!(response["error"]["code"], -32602);
}

#[tokio::test]
async fn test_create_product_tool_then_duplicate() {
    let server = server();
    let args = json!({ "name": "Golden Banana", "price": 1.99, "category": "specialty" });

    let (is_error, body) = call(&server, "create-product", args.clone()).await;
    assert!(!is_error);
    assert_eq!(body["product"]["id"], "golden-banana");

    let (is_error, body) = call(&server, "create-product", args).await;
    assert!(is_error);
    assert_eq!(body["error"], "Product with this name already exists");

    let (_, body) = call(&server, "get-product", json!({ "id": "golden-banana" })).await;
    assert_eq!(body["product"]["totalQuantity"], 0);
}

#[tokio::test]
async fn test_customer_tools() {
    let server = server();

    let (_, body) = call(&server, "get-customers", json!({ "country": "usa", "limit": 2 })).await;
    assert_eq!(body["filtered"], 2);

    let (_, body) = call(&server, "get-customers", json!({ "limit": 0 })).await;
    assert_eq!(body["filtered"], 20);
    assert_eq!(body["total"], 20);

    let (is_error, body) = call(&server, "get-customer", json!({ "id": 9999 })).await;
    assert!(is_error);
    assert_eq!(body["error"], "Customer not found");

    let (is_error, body) = call(
        &server,
        "create-customer",
        json!({ "name": "Ann Veal", "email": "ann.veal@example.com" }),
    )
    .await;
    assert!(!is_error);
    assert_eq!(body["customer"]["country"], "USA");
}

#[tokio::test]
async fn test_onboard_customer_tool() {
    let server = server();
    let args = json!({
        "name": "Ann Veal",
        "email": "ann.veal@example.com",
        "phone": "555-0100",
        "address": "1 Harbor Rd",
        "city": "Newport Beach",
        "state": "CA",
        "zip": "92660",
        "country": "USA",
    });

    let (is_error, body) = call(&server, "onboard-customer", args.clone()).await;
    assert!(!is_error);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Customer \"Ann Veal\" has been successfully onboarded!");
    assert_eq!(body["summary"]["tier"], "Bronze (New Customer)");
    assert_eq!(body["summary"]["status"], "Active");

    let (is_error, body) = call(&server, "onboard-customer", args).await;
    assert!(is_error);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "A customer with this email already exists in the system."
    );
}

#[tokio::test]
async fn test_sales_report_tool() {
    let server = server();
    let (is_error, body) = call(
        &server,
        "create-sales-report",
        json!({ "type": "summary", "startDate": "2025-04" }),
    )
    .await;
    assert!(!is_error);
    assert_eq!(body["report"]["reportType"], "summary");
    assert_eq!(body["report"]["monthlySales"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_run_over_lines() {
    let server = server();
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"greet","arguments":{"name":"Gob"}}}"#,
        "\n",
    );

    let mut output = Vec::new();
    server.run(input.as_bytes(), &mut output).await.unwrap();

    let lines: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["id"], 1);
    assert_eq!(lines[1]["id"], 2);
}
