//! Agent-native JSON-RPC surface over stdio.
//!
//! Requests are newline-delimited JSON objects `{op, params, id}`; every
//! response is `{id, success, result?, error?}`. Write operations are
//! addressed by tool name, reads by `op: "read"` plus a resource URI. The
//! loop owns all boundary logging (it prints envelopes); the core never logs.

use crate::core::error::{FaultCode, OpFailure, VaultError};
use crate::core::repo::Repository;
use crate::server::{resources, tools};
use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};
use std::io::{self, BufRead, Write};

#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    pub op: String,
    #[serde(default)]
    pub params: JsonValue,
    #[serde(default = "default_request_id")]
    pub id: String,
}

pub fn default_request_id() -> String {
    ulid::Ulid::new().to_string()
}

#[derive(Debug, Serialize)]
pub struct RpcResponse {
    pub id: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

#[derive(Debug, Serialize)]
pub struct RpcError {
    pub code: String,
    pub message: String,
}

impl RpcResponse {
    fn ok(id: String, result: JsonValue) -> Self {
        RpcResponse { id, success: true, result: Some(result), error: None }
    }

    fn fail(id: String, code: &str, message: String) -> Self {
        RpcResponse {
            id,
            success: false,
            result: None,
            error: Some(RpcError { code: code.to_string(), message }),
        }
    }
}

/// Route one request to the tool/resource surface.
pub fn dispatch(repo: &Repository, req: &RpcRequest) -> RpcResponse {
    let id = req.id.clone();
    match req.op.as_str() {
        "capabilities" => RpcResponse::ok(
            id,
            json!({
                "tools": tools::catalog(),
                "resources": resources::catalog(),
            }),
        ),
        "read" => {
            let Some(uri) = req.params.get("uri").and_then(JsonValue::as_str) else {
                return RpcResponse::fail(
                    id,
                    FaultCode::Validation.as_str(),
                    "read requires a 'uri' parameter".to_string(),
                );
            };
            match resources::read(repo, uri, &req.params) {
                Some(Ok(result)) => RpcResponse::ok(id, result),
                Some(Err(failure)) => failure_response(id, failure),
                None => RpcResponse::fail(
                    id,
                    "unknown_resource",
                    format!("no resource template matches '{uri}'"),
                ),
            }
        }
        name => match tools::dispatch(repo, name, &req.params) {
            Some(Ok(result)) => RpcResponse::ok(id, result),
            Some(Err(failure)) => failure_response(id, failure),
            None => RpcResponse::fail(id, "unknown_op", format!("unknown operation '{name}'")),
        },
    }
}

fn failure_response(id: String, failure: OpFailure) -> RpcResponse {
    RpcResponse::fail(id, failure.code.as_str(), failure.to_string())
}

/// Blocking stdio loop: one request per line, one envelope per line.
pub fn serve(repo: &Repository) -> Result<(), VaultError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<RpcRequest>(&line) {
            Ok(req) => dispatch(repo, &req),
            Err(e) => RpcResponse::fail(
                default_request_id(),
                "bad_request",
                format!("malformed request: {e}"),
            ),
        };
        let mut out = stdout.lock();
        writeln!(out, "{}", serde_json::to_string(&response)?)?;
        out.flush()?;
    }
    Ok(())
}
