//! 共享测试工具和辅助函数

#![allow(dead_code)]

use dns_inventory_provider::{CloudflareProvider, Credentials, build_client};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_EMAIL: &str = "ops@example.com";
pub const TEST_KEY: &str = "0123456789abcdef";

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Provider pointed at the mock server.
pub fn mock_provider(server: &MockServer) -> CloudflareProvider {
    let client = build_client().unwrap_or_default();
    CloudflareProvider::with_base_url(client, Credentials::new(TEST_EMAIL, TEST_KEY), &server.uri())
}

/// Successful envelope around `result`.
pub fn success(result: Value) -> Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": result,
    })
}

/// Failed envelope with one error message.
pub fn failure(code: i64, message: &str) -> Value {
    json!({
        "success": false,
        "errors": [{ "code": code, "message": message }],
        "messages": [],
        "result": null,
    })
}

pub fn zone_json(id: &str, name: &str, status: &str) -> Value {
    json!({ "id": id, "name": name, "status": status, "paused": false, "type": "full" })
}

pub fn record_json(id: &str, record_type: &str, name: &str, content: &str, ttl: u32) -> Value {
    json!({
        "id": id,
        "type": record_type,
        "name": name,
        "content": content,
        "ttl": ttl,
        "proxied": false,
    })
}
