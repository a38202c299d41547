//! Language-agnostic call protocol
//!
//! A host language calls into the binding layer with a function name and its
//! arguments as a JSON array, and gets back one JSON object:
//!
//! ```text
//! {"value": <result>}     on success
//! {"error": "<message>"}  on failure
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BindingError, BindingResult};
use crate::scripting::{ScriptApi, ScriptValue};

/// Reply to a dispatched call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DispatchReply {
    Error { error: String },
    Value { value: ScriptValue },
}

impl DispatchReply {
    pub fn into_result(self) -> BindingResult<ScriptValue> {
        match self {
            DispatchReply::Value { value } => Ok(value),
            DispatchReply::Error { error } => Err(BindingError::Script(error)),
        }
    }
}

impl From<BindingResult<ScriptValue>> for DispatchReply {
    fn from(result: BindingResult<ScriptValue>) -> Self {
        match result {
            Ok(value) => DispatchReply::Value { value },
            Err(err) => DispatchReply::Error {
                error: err.to_string(),
            },
        }
    }
}

/// Calls `name` with JSON-encoded arguments and encodes the reply.
///
/// Panics raised while marshaling (a sequence shorter than its declared
/// count) are turned into an error reply and never reach the caller.
pub fn dispatch_json(api: &ScriptApi, name: &str, args_json: &str) -> String {
    let reply = match serde_json::from_str::<Vec<ScriptValue>>(args_json) {
        Ok(args) => {
            match panic::catch_unwind(AssertUnwindSafe(|| api.call(name, &args))) {
                Ok(result) => DispatchReply::from(result),
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    tracing::error!(target: "scripting", "{} panicked: {}", name, message);
                    DispatchReply::Error {
                        error: format!("{}: {}", name, message),
                    }
                }
            }
        }
        Err(e) => DispatchReply::Error {
            error: format!("{}: malformed arguments: {}", name, e),
        },
    };

    serde_json::to_string(&reply)
        .unwrap_or_else(|_| r#"{"error":"unserializable reply"}"#.to_string())
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "native call panicked".to_string()
    }
}

/// A scripting language hosting the GR/GR3 API
pub trait BindingAdapter {
    /// Name of the hosted language
    fn language(&self) -> &'static str;

    /// Registry the language's functions dispatch into
    fn api(&self) -> &ScriptApi;

    /// Runs a complete script.
    fn run_script(&self, source: &str) -> BindingResult<()>;

    /// Evaluates a single expression and converts its result.
    fn eval_value(&self, expression: &str) -> BindingResult<ScriptValue>;

    fn run_file(&self, path: &Path) -> BindingResult<()> {
        let source = std::fs::read_to_string(path).map_err(|source| BindingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(target: "scripting", "Running {} script {}", self.language(), path.display());
        self.run_script(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> ScriptApi {
        let mut api = ScriptApi::new();
        api.register_function("test.sum", |args| {
            Ok(ScriptValue::Float(args.iter().filter_map(ScriptValue::as_f64).sum()))
        });
        api.register_function("test.explode", |_| panic!("index out of bounds"));
        api
    }

    #[test]
    fn test_value_reply() {
        let reply = dispatch_json(&api(), "test.sum", "[1, 2.5]");
        assert_eq!(reply, r#"{"value":3.5}"#);
    }

    #[test]
    fn test_error_reply() {
        let reply = dispatch_json(&api(), "test.missing", "[]");
        let parsed: DispatchReply = serde_json::from_str(&reply).unwrap();
        assert_eq!(
            parsed,
            DispatchReply::Error {
                error: "Function 'test.missing' not found".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_arguments() {
        let reply = dispatch_json(&api(), "test.sum", "{not json");
        assert!(reply.contains("malformed arguments"));
    }

    #[test]
    fn test_panic_becomes_error_reply() {
        let reply = dispatch_json(&api(), "test.explode", "[]");
        let parsed: DispatchReply = serde_json::from_str(&reply).unwrap();
        match parsed.into_result() {
            Err(BindingError::Script(message)) => {
                assert!(message.contains("index out of bounds"))
            }
            other => panic!("Expected script error, got {:?}", other),
        }
    }

    #[test]
    fn test_null_value_reply_parses() {
        let parsed: DispatchReply = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert_eq!(parsed.into_result().unwrap(), ScriptValue::Null);
    }
}
