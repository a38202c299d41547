use serde::{Deserialize, Serialize};

use crate::error::{BindingError, BindingResult};

/// 脚本值 - 跨语言的通用数据类型
///
/// 以无标签JSON形式跨越JS边界：`null`、布尔、整数、浮点、字符串、数组。
/// JSON没有 NaN 和无穷大，这些浮点值编码为 `{"$f": "NaN"}`、
/// `{"$f": "Infinity"}` 或 `{"$f": "-Infinity"}`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(#[serde(with = "wire_float")] f64),
    String(String),
    Array(Vec<ScriptValue>),
}

impl ScriptValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ScriptValue::Null)
    }

    /// 数值（整数或浮点）
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScriptValue::Int(i) => Some(*i as f64),
            ScriptValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            ScriptValue::Null => "null",
            ScriptValue::Bool(_) => "bool",
            ScriptValue::Int(_) => "int",
            ScriptValue::Float(_) => "float",
            ScriptValue::String(_) => "string",
            ScriptValue::Array(_) => "array",
        }
    }
}

/// Float encoding that survives JSON for non-finite values.
mod wire_float {
    use serde::de::Error as _;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer};

    const TAG: &str = "$f";

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(f64),
        Tagged {
            #[serde(rename = "$f")]
            repr: String,
        },
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            return serializer.serialize_f64(*value);
        }
        let repr = if value.is_nan() {
            "NaN"
        } else if *value > 0.0 {
            "Infinity"
        } else {
            "-Infinity"
        };
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(TAG, repr)?;
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Wire::deserialize(deserializer)? {
            Wire::Number(value) => Ok(value),
            Wire::Tagged { repr } => match repr.as_str() {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::custom(format!("unknown float tag {:?}", other))),
            },
        }
    }
}

impl From<()> for ScriptValue {
    fn from(_: ()) -> Self {
        ScriptValue::Null
    }
}

impl From<bool> for ScriptValue {
    fn from(value: bool) -> Self {
        ScriptValue::Bool(value)
    }
}

impl From<i32> for ScriptValue {
    fn from(value: i32) -> Self {
        ScriptValue::Int(i64::from(value))
    }
}

impl From<f64> for ScriptValue {
    fn from(value: f64) -> Self {
        ScriptValue::Float(value)
    }
}

impl From<String> for ScriptValue {
    fn from(value: String) -> Self {
        ScriptValue::String(value)
    }
}

impl<const N: usize> From<[f64; N]> for ScriptValue {
    fn from(values: [f64; N]) -> Self {
        ScriptValue::Array(values.into_iter().map(ScriptValue::Float).collect())
    }
}

impl From<Vec<u8>> for ScriptValue {
    fn from(bytes: Vec<u8>) -> Self {
        ScriptValue::Array(
            bytes
                .into_iter()
                .map(|b| ScriptValue::Int(i64::from(b)))
                .collect(),
        )
    }
}

/// 脚本函数参数的类型化访问
///
/// 所有转换失败都报告为 [`BindingError::ArgumentShape`]，并带上函数名。
pub struct Args<'a> {
    function: &'a str,
    values: &'a [ScriptValue],
}

impl<'a> Args<'a> {
    /// 检查参数个数恰好为 `arity`
    pub fn new(function: &'a str, values: &'a [ScriptValue], arity: usize) -> BindingResult<Self> {
        if values.len() != arity {
            return Err(BindingError::argument(format!(
                "{}() takes exactly {} arguments ({} given)",
                function,
                arity,
                values.len()
            )));
        }
        Ok(Self { function, values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn get(&self, index: usize) -> BindingResult<&'a ScriptValue> {
        self.values.get(index).ok_or_else(|| {
            BindingError::argument(format!("{}(): missing argument {}", self.function, index))
        })
    }

    fn mismatch(&self, index: usize, expected: &str, found: &ScriptValue) -> BindingError {
        BindingError::argument(format!(
            "{}(): argument {} must be {}, got {}",
            self.function,
            index,
            expected,
            found.type_name()
        ))
    }

    pub fn float(&self, index: usize) -> BindingResult<f64> {
        let value = self.get(index)?;
        value
            .as_f64()
            .ok_or_else(|| self.mismatch(index, "a number", value))
    }

    /// 整数参数，按原生 `int` 宽度截断
    pub fn int(&self, index: usize) -> BindingResult<i32> {
        match self.get(index)? {
            ScriptValue::Int(i) => Ok(*i as i32),
            ScriptValue::Float(f) if f.fract() == 0.0 => Ok(*f as i32),
            ScriptValue::Bool(b) => Ok(i32::from(*b)),
            other => Err(self.mismatch(index, "an integer", other)),
        }
    }

    /// 元素个数（非负整数）
    pub fn count(&self, index: usize) -> BindingResult<usize> {
        let value = self.get(index)?;
        match value {
            ScriptValue::Int(i) if *i >= 0 => Ok(*i as usize),
            ScriptValue::Float(f) if *f >= 0.0 && f.fract() == 0.0 => Ok(*f as usize),
            other => Err(self.mismatch(index, "a non-negative count", other)),
        }
    }

    pub fn bool(&self, index: usize) -> BindingResult<bool> {
        match self.get(index)? {
            ScriptValue::Bool(b) => Ok(*b),
            ScriptValue::Int(i) => Ok(*i != 0),
            other => Err(self.mismatch(index, "a bool", other)),
        }
    }

    pub fn string(&self, index: usize) -> BindingResult<&'a str> {
        match self.get(index)? {
            ScriptValue::String(s) => Ok(s),
            other => Err(self.mismatch(index, "a string", other)),
        }
    }

    pub fn floats(&self, index: usize) -> BindingResult<Vec<f64>> {
        match self.get(index)? {
            ScriptValue::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_f64()
                        .ok_or_else(|| self.mismatch(index, "an array of numbers", item))
                })
                .collect(),
            other => Err(self.mismatch(index, "an array of numbers", other)),
        }
    }

    pub fn ints(&self, index: usize) -> BindingResult<Vec<i32>> {
        match self.get(index)? {
            ScriptValue::Array(items) => items
                .iter()
                .map(|item| match item {
                    ScriptValue::Int(i) => Ok(*i as i32),
                    ScriptValue::Float(f) if f.fract() == 0.0 => Ok(*f as i32),
                    other => Err(self.mismatch(index, "an array of integers", other)),
                })
                .collect(),
            other => Err(self.mismatch(index, "an array of integers", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shapes() {
        let value: ScriptValue = serde_json::from_str("[1, 2.5, null, \"x\", true]").unwrap();
        assert_eq!(
            value,
            ScriptValue::Array(vec![
                ScriptValue::Int(1),
                ScriptValue::Float(2.5),
                ScriptValue::Null,
                ScriptValue::String("x".to_string()),
                ScriptValue::Bool(true),
            ])
        );
        assert_eq!(serde_json::to_string(&ScriptValue::Null).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&ScriptValue::from([0.5, 1.0])).unwrap(),
            "[0.5,1.0]"
        );
    }

    #[test]
    fn test_non_finite_floats_are_tagged() {
        let value: ScriptValue =
            serde_json::from_str(r#"[0, {"$f": "NaN"}, {"$f": "-Infinity"}]"#).unwrap();
        let values = match value {
            ScriptValue::Array(values) => values,
            other => panic!("Expected array, got {:?}", other),
        };
        assert_eq!(values[0], ScriptValue::Int(0));
        assert!(values[1].as_f64().unwrap().is_nan());
        assert_eq!(values[2], ScriptValue::Float(f64::NEG_INFINITY));

        assert_eq!(
            serde_json::to_string(&ScriptValue::Float(f64::INFINITY)).unwrap(),
            r#"{"$f":"Infinity"}"#
        );
        assert!(serde_json::from_str::<ScriptValue>(r#"{"$f": "huge"}"#).is_err());
        assert!(serde_json::from_str::<ScriptValue>(r#"{"other": 1}"#).is_err());
    }

    #[test]
    fn test_arity_is_checked() {
        let values = [ScriptValue::Int(1)];
        let err = Args::new("gr.setlinetype", &values, 2).err().unwrap();
        assert!(matches!(err, BindingError::ArgumentShape(_)));
        assert!(err.to_string().contains("(1 given)"));
    }

    #[test]
    fn test_numeric_access() {
        let values = [
            ScriptValue::Int(3),
            ScriptValue::Float(0.5),
            ScriptValue::Array(vec![ScriptValue::Int(1), ScriptValue::Float(2.5)]),
        ];
        let args = Args::new("f", &values, 3).unwrap();
        assert_eq!(args.count(0).unwrap(), 3);
        assert_eq!(args.float(0).unwrap(), 3.0);
        assert_eq!(args.float(1).unwrap(), 0.5);
        assert!(args.int(1).is_err());
        assert_eq!(args.floats(2).unwrap(), vec![1.0, 2.5]);
        assert!(args.ints(2).is_err());
    }

    #[test]
    fn test_negative_count_rejected() {
        let values = [ScriptValue::Int(-1)];
        let args = Args::new("f", &values, 1).unwrap();
        assert!(args.count(0).is_err());
    }

    #[test]
    fn test_string_mismatch_message() {
        let values = [ScriptValue::Float(1.0)];
        let args = Args::new("gr.text", &values, 1).unwrap();
        let err = args.string(0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid arguments: gr.text(): argument 0 must be a string, got float"
        );
    }
}
