use std::collections::{BTreeMap, HashMap};

use super::value::ScriptValue;
use crate::error::{BindingError, BindingResult};

type ScriptFunction = Box<dyn Fn(&[ScriptValue]) -> BindingResult<ScriptValue> + Send + Sync>;

/// 脚本API - 按名称分发到GR/GR3操作
///
/// 函数名形如 `gr.polyline`、`gr3.init`；常量按命名空间分组。
#[derive(Default)]
pub struct ScriptApi {
    registered_functions: HashMap<String, ScriptFunction>,
    constants: BTreeMap<String, Vec<(&'static str, i32)>>,
}

impl ScriptApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册函数，同名函数会被替换
    pub fn register_function<F>(&mut self, name: &str, func: F)
    where
        F: Fn(&[ScriptValue]) -> BindingResult<ScriptValue> + Send + Sync + 'static,
    {
        self.registered_functions
            .insert(name.to_string(), Box::new(func));
    }

    /// 注册命名空间下的常量表
    pub fn register_constants(&mut self, namespace: &str, table: Vec<(&'static str, i32)>) {
        self.constants
            .entry(namespace.to_string())
            .or_default()
            .extend(table);
    }

    /// 调用已注册的函数
    pub fn call(&self, name: &str, args: &[ScriptValue]) -> BindingResult<ScriptValue> {
        let func = self
            .registered_functions
            .get(name)
            .ok_or_else(|| BindingError::UnknownFunction(name.to_string()))?;
        tracing::trace!(target: "scripting", "{}({} args)", name, args.len());
        func(args)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registered_functions.contains_key(name)
    }

    /// 已注册函数名，按字典序
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.registered_functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// 命名空间下的常量
    pub fn constants(&self, namespace: &str) -> &[(&'static str, i32)] {
        self.constants.get(namespace).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 查找单个常量
    pub fn constant(&self, namespace: &str, name: &str) -> Option<i32> {
        self.constants(namespace)
            .iter()
            .find(|(constant, _)| *constant == name)
            .map(|(_, value)| *value)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.constants.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_api() {
        let mut api = ScriptApi::new();
        api.register_function("math.double", |args| {
            let x = args.first().and_then(ScriptValue::as_f64).unwrap_or(0.0);
            Ok(ScriptValue::Float(x * 2.0))
        });

        assert!(api.contains("math.double"));
        let result = api.call("math.double", &[ScriptValue::Int(4)]).unwrap();
        assert_eq!(result, ScriptValue::Float(8.0));
    }

    #[test]
    fn test_unknown_function() {
        let api = ScriptApi::new();
        let err = api.call("gr.nothing", &[]).unwrap_err();
        assert!(matches!(err, BindingError::UnknownFunction(name) if name == "gr.nothing"));
    }

    #[test]
    fn test_constants() {
        let mut api = ScriptApi::new();
        api.register_constants("gr", vec![("NOCLIP", 0), ("CLIP", 1)]);
        assert_eq!(api.constant("gr", "CLIP"), Some(1));
        assert_eq!(api.constant("gr3", "CLIP"), None);
        assert!(api.constants("missing").is_empty());
        assert_eq!(api.namespaces().collect::<Vec<_>>(), vec!["gr"]);
    }
}
