//! JSON-RPC 2.0 envelope handling.
//!
//! A response body carries either a `result` member or an `error` object
//! with an integer `code` and an optional `message`. Value extractors go
//! through [`parse_result`]; error extraction through [`parse_error_result`],
//! which always produces a typed error even for garbage input.

use std::fmt;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ParseError;
use crate::provider_error::ErrorKind;

/// Message attached to errors produced for unparseable responses.
pub const PARSING_ERROR_MESSAGE: &str = "Parsing error";

/// A server-reported (or parse-synthesized) error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RpcError<K> {
    pub kind: K,
    /// Server message; empty if the server sent none.
    pub message: String,
}

impl<K: ErrorKind> RpcError<K> {
    pub fn new(kind: K, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The generic error for a response that could not be understood.
    pub fn parsing_error() -> Self {
        Self::new(K::PARSING_ERROR, PARSING_ERROR_MESSAGE)
    }

    pub fn code(&self) -> i64 {
        self.kind.code()
    }
}

impl<K: ErrorKind> fmt::Display for RpcError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({}): {}", self.kind, self.code(), self.message)
    }
}

impl<K: ErrorKind> std::error::Error for RpcError<K> {}

/// Parse a body and return its `result` member.
pub fn parse_result(json: &str) -> Result<Value, ParseError> {
    let mut root = parse_object(json)?;
    root.remove("result").ok_or(ParseError::MissingResult)
}

/// Extract the error carried by a body.
///
/// Bodies that are not JSON, have no `error` object, or whose `error` has no
/// integer `code` all map to the kind's parsing error with
/// [`PARSING_ERROR_MESSAGE`].
pub fn parse_error_result<K: ErrorKind>(json: &str) -> RpcError<K> {
    let Ok(root) = parse_object(json) else {
        return RpcError::parsing_error();
    };
    let Some(error) = root.get("error").and_then(Value::as_object) else {
        debug!("rpc: response has no error object");
        return RpcError::parsing_error();
    };
    let Some(code) = error.get("code").and_then(Value::as_i64) else {
        debug!("rpc: error object has no integer code");
        return RpcError::parsing_error();
    };
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default();
    RpcError::new(K::from_code(code), message)
}

/// Run `parse` over the body; if it fails, report the body's error instead.
pub fn parse_or_error<T, K: ErrorKind>(
    json: &str,
    parse: impl FnOnce(&str) -> Result<T, ParseError>,
) -> Result<T, RpcError<K>> {
    parse(json).map_err(|_| parse_error_result(json))
}

fn parse_object(json: &str) -> Result<Map<String, Value>, ParseError> {
    let value: Value = serde_json::from_str(json).map_err(|e| {
        debug!(error = %e, "rpc: body is not json");
        ParseError::InvalidJson(e.to_string())
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ParseError::NotAnObject),
    }
}

/// The `result` member as a string.
pub(crate) fn result_str(json: &str) -> Result<String, ParseError> {
    match parse_result(json)? {
        Value::String(s) => Ok(s),
        _ => Err(ParseError::UnexpectedType {
            field: "result",
            expected: "string",
        }),
    }
}

/// The `result` member as an unsigned 64-bit integer.
pub(crate) fn result_u64(json: &str) -> Result<u64, ParseError> {
    as_u64(&parse_result(json)?, "result")
}

pub(crate) fn member<'a>(value: &'a Value, field: &'static str) -> Result<&'a Value, ParseError> {
    value.get(field).ok_or(ParseError::UnexpectedType {
        field,
        expected: "present",
    })
}

pub(crate) fn str_member<'a>(value: &'a Value, field: &'static str) -> Result<&'a str, ParseError> {
    member(value, field)?
        .as_str()
        .ok_or(ParseError::UnexpectedType {
            field,
            expected: "string",
        })
}

/// Integers only: floats and numeric strings are rejected, never truncated.
pub(crate) fn as_u64(value: &Value, field: &'static str) -> Result<u64, ParseError> {
    value.as_u64().ok_or(ParseError::UnexpectedType {
        field,
        expected: "unsigned integer",
    })
}
