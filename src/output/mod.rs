pub mod human;

use serde::Serialize;
use serde_json::{Value, json};

use crate::error::{StoreError, TotalOverflow};

/// Result envelope printed to stdout under `--json`.
pub fn success(command: &str, data: Value) -> Value {
    json!({
        "status": "ok",
        "command": command,
        "data": data,
        "error": null
    })
}

/// Failure envelope printed to stderr under `--json`.
pub fn error(command: &str, code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "command": command,
        "data": null,
        "error": {
            "code": code,
            "message": message
        }
    })
}

/// Stable error code for an operation failure, so scripts need not parse messages.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(store_err) = err.downcast_ref::<StoreError>() {
        return match store_err {
            StoreError::Parse { .. } => "invalid_store",
            StoreError::Read { .. } | StoreError::Write { .. } => "store_io",
            StoreError::Encode(_) => "encode_error",
        };
    }
    if err.downcast_ref::<TotalOverflow>().is_some() {
        return "calorie_overflow";
    }
    "general_error"
}

/// Print `data` wrapped in a success envelope on one line.
pub fn print_success(command: &str, data: impl Serialize) -> anyhow::Result<()> {
    let out = success(command, serde_json::to_value(data)?);
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}
