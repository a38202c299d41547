//! JavaScript binding adapter using rquickjs
//!
//! Exposes the registered API as `gr.*` / `gr3.*` objects inside a QuickJS
//! context. Every wrapper forwards through a single native function,
//! `__gr_dispatch(name, argsJson)`, and rethrows error replies as JS `Error`s.

use std::collections::BTreeMap;
use std::sync::Arc;

use rquickjs::{Context, Function, Runtime};

use super::protocol::{dispatch_json, BindingAdapter, DispatchReply};
use crate::error::{BindingError, BindingResult};
use crate::scripting::{ScriptApi, ScriptValue};

/// JSON replacer keeping NaN and the infinities, which `JSON.stringify`
/// would turn into `null`.
const TAG_NON_FINITE: &str =
    r#"(key, value) => (typeof value === "number" && !Number.isFinite(value) ? { $f: String(value) } : value)"#;

const PRELUDE: &str = r#"
(function (functions, constants, tag) {
  const dispatch = globalThis.__gr_dispatch;
  const log = globalThis.__gr_log;
  const plain = (value) => (ArrayBuffer.isView(value) ? Array.from(value) : value);
  const untag = (key, value) =>
    value !== null && typeof value === "object" && !Array.isArray(value) &&
    typeof value.$f === "string" && Object.keys(value).length === 1
      ? Number(value.$f)
      : value;
  const namespace = (name) => globalThis[name] || (globalThis[name] = {});

  for (const [ns, names] of Object.entries(functions)) {
    const target = namespace(ns);
    for (const name of names) {
      const full = ns + "." + name;
      target[name] = (...args) => {
        const reply = JSON.parse(dispatch(full, JSON.stringify(args.map(plain), tag)), untag);
        if ("error" in reply) {
          throw new Error(reply.error);
        }
        return reply.value;
      };
    }
  }

  for (const [ns, table] of Object.entries(constants)) {
    const target = namespace(ns);
    for (const [name, value] of Object.entries(table)) {
      Object.defineProperty(target, name, { value, enumerable: true });
    }
  }

  const join = (args) => args.map(String).join(" ");
  globalThis.console = {
    log: (...args) => log("info", join(args)),
    warn: (...args) => log("warn", join(args)),
    error: (...args) => log("error", join(args)),
  };
})
"#;

/// QuickJS host for the GR/GR3 API.
pub struct JsBindingAdapter {
    api: Arc<ScriptApi>,
    runtime: Runtime,
    context: Context,
}

impl JsBindingAdapter {
    pub fn new(api: ScriptApi) -> BindingResult<Self> {
        let runtime = Runtime::new().map_err(script_error)?;
        let context = Context::full(&runtime).map_err(script_error)?;
        let adapter = Self {
            api: Arc::new(api),
            runtime,
            context,
        };
        adapter.install()?;
        Ok(adapter)
    }

    fn install(&self) -> BindingResult<()> {
        let functions = serde_json::to_string(&function_table(&self.api))
            .map_err(|e| BindingError::Script(e.to_string()))?;
        let constants = serde_json::to_string(&constant_table(&self.api))
            .map_err(|e| BindingError::Script(e.to_string()))?;
        let api = Arc::clone(&self.api);

        self.context
            .with(|ctx| {
                let global = ctx.globals();
                global.set(
                    "__gr_dispatch",
                    Function::new(ctx.clone(), move |name: String, args: String| -> String {
                        dispatch_json(&api, &name, &args)
                    })?,
                )?;
                global.set(
                    "__gr_log",
                    Function::new(ctx.clone(), |level: String, message: String| {
                        match level.as_str() {
                            "warn" => tracing::warn!(target: "script.console", "{}", message),
                            "error" => tracing::error!(target: "script.console", "{}", message),
                            _ => tracing::info!(target: "script.console", "{}", message),
                        }
                    })?,
                )?;
                ctx.eval::<(), _>(format!(
                    "{}({}, {}, {});",
                    PRELUDE, functions, constants, TAG_NON_FINITE
                ))
            })
            .map_err(script_error)?;

        tracing::debug!(
            target: "scripting",
            "JavaScript context ready with {} functions",
            self.api.function_names().len()
        );
        Ok(())
    }

    /// Runs a garbage collection pass over the QuickJS heap.
    pub fn collect_garbage(&self) {
        self.runtime.run_gc();
    }

    fn eval_string(&self, code: String) -> BindingResult<Option<String>> {
        self.context
            .with(|ctx| ctx.eval::<Option<String>, _>(code))
            .map_err(script_error)
    }
}

impl BindingAdapter for JsBindingAdapter {
    fn language(&self) -> &'static str {
        "javascript"
    }

    fn api(&self) -> &ScriptApi {
        &self.api
    }

    /// Evaluates `source` at global scope. An uncaught exception is returned
    /// as [`BindingError::Script`] with its message and stack.
    fn run_script(&self, source: &str) -> BindingResult<()> {
        let code = format!(
            r#"(function () {{
  try {{
    (0, eval)({});
    return null;
  }} catch (e) {{
    return e instanceof Error && e.stack ? e.name + ": " + e.message + "\n" + e.stack : String(e);
  }}
}})()"#,
            js_string(source)?
        );
        match self.eval_string(code)? {
            None => Ok(()),
            Some(message) => {
                tracing::debug!(target: "scripting", "Script raised: {}", message);
                Err(BindingError::Script(message.trim_end().to_string()))
            }
        }
    }

    /// `undefined` converts to null, NaN and the infinities stay floats;
    /// other values JSON cannot carry are an error.
    fn eval_value(&self, expression: &str) -> BindingResult<ScriptValue> {
        let code = format!(
            r#"(function () {{
  try {{
    const value = (0, eval)({});
    return JSON.stringify({{ value: value === undefined ? null : value }}, {tag});
  }} catch (e) {{
    return JSON.stringify({{ error: e instanceof Error ? e.name + ": " + e.message : String(e) }});
  }}
}})()"#,
            js_string(expression)?,
            tag = TAG_NON_FINITE
        );
        let json = self
            .eval_string(code)?
            .ok_or_else(|| BindingError::Script("expression produced no result".to_string()))?;
        serde_json::from_str::<DispatchReply>(&json)
            .map_err(|e| BindingError::Script(format!("unsupported result {}: {}", json, e)))?
            .into_result()
    }
}

fn script_error(error: rquickjs::Error) -> BindingError {
    BindingError::Script(error.to_string())
}

/// Source text as a JS string literal.
fn js_string(source: &str) -> BindingResult<String> {
    serde_json::to_string(source).map_err(|e| BindingError::Script(e.to_string()))
}

/// `{"gr": ["polyline", ...], "gr3": [...]}`
fn function_table(api: &ScriptApi) -> BTreeMap<&str, Vec<&str>> {
    let mut table: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for full in api.function_names() {
        if let Some((namespace, name)) = full.split_once('.') {
            table.entry(namespace).or_default().push(name);
        }
    }
    table
}

fn constant_table(api: &ScriptApi) -> BTreeMap<&str, BTreeMap<&str, i32>> {
    api.namespaces()
        .map(|namespace| {
            let constants = api
                .constants(namespace)
                .iter()
                .map(|&(name, value)| (name, value))
                .collect();
            (namespace, constants)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> JsBindingAdapter {
        let mut api = ScriptApi::new();
        api.register_function("demo.scale", |args| {
            let factor = args.first().and_then(ScriptValue::as_f64).unwrap_or(1.0);
            Ok(ScriptValue::Float(factor * 2.0))
        });
        api.register_function("demo.fail", |_| Err(BindingError::argument("bad shape")));
        api.register_constants("demo", vec![("ANSWER", 42)]);
        JsBindingAdapter::new(api).unwrap()
    }

    #[test]
    fn test_function_table_groups_by_namespace() {
        let mut api = ScriptApi::new();
        api.register_function("gr.polyline", |_| Ok(ScriptValue::Null));
        api.register_function("gr3.init", |_| Ok(ScriptValue::Null));
        api.register_function("gr.text", |_| Ok(ScriptValue::Null));
        let table = function_table(&api);
        assert_eq!(table["gr"], vec!["polyline", "text"]);
        assert_eq!(table["gr3"], vec!["init"]);
    }

    #[test]
    fn test_call_and_constant() {
        let adapter = adapter();
        assert_eq!(adapter.eval_value("demo.scale(4)").unwrap(), ScriptValue::Int(8));
        assert_eq!(adapter.eval_value("demo.ANSWER").unwrap(), ScriptValue::Int(42));
    }

    #[test]
    fn test_error_reply_is_thrown() {
        let adapter = adapter();
        let caught = adapter
            .eval_value("(() => { try { demo.fail(); return 'no'; } catch (e) { return e.message; } })()")
            .unwrap();
        assert_eq!(
            caught,
            ScriptValue::String("Invalid arguments: bad shape".to_string())
        );
    }

    #[test]
    fn test_uncaught_exception_is_script_error() {
        let adapter = adapter();
        match adapter.run_script("throw new TypeError('broken');") {
            Err(BindingError::Script(message)) => assert!(message.starts_with("TypeError: broken")),
            other => panic!("Expected script error, got {:?}", other),
        }
    }

    #[test]
    fn test_globals_persist_between_scripts() {
        let adapter = adapter();
        adapter.run_script("var total = demo.scale(1.5);").unwrap();
        assert_eq!(adapter.eval_value("total").unwrap(), ScriptValue::Int(3));
        assert_eq!(adapter.eval_value("undefined").unwrap(), ScriptValue::Null);
    }

    #[test]
    fn test_non_finite_numbers_cross_both_ways() {
        let adapter = adapter();
        assert_eq!(
            adapter.eval_value("demo.scale(-Infinity)").unwrap(),
            ScriptValue::Float(f64::NEG_INFINITY)
        );
        assert_eq!(
            adapter.eval_value("Number.isNaN(demo.scale(NaN))").unwrap(),
            ScriptValue::Bool(true)
        );
        assert!(adapter.eval_value("0 / 0").unwrap().as_f64().unwrap().is_nan());
    }

    #[test]
    fn test_syntax_error_reported() {
        let adapter = adapter();
        assert!(matches!(
            adapter.run_script("let = ;"),
            Err(BindingError::Script(_))
        ));
    }
}
