//! Interpolation variables

use serde_json::Value;
use std::collections::HashMap;

/// Variables injected into a phrasing during interpolation.
pub type Vars = HashMap<String, Value>;

/// Merge variable mappings left-to-right, later mappings overriding earlier
/// ones on key collision.
pub fn merge_vars<'a, I>(mappings: I) -> Vars
where
    I: IntoIterator<Item = &'a Vars>,
{
    let mut merged = Vars::new();
    for mapping in mappings {
        for (name, value) in mapping {
            merged.insert(name.clone(), value.clone());
        }
    }
    merged
}

/// Render a value the way it appears in a phrasing.
///
/// Strings are written raw, integral floats drop their fraction (`5.0` renders
/// as `5`), `null` renders as an empty string and composite values render as
/// compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                n.to_string()
            } else {
                n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
            }
        }
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Build a [`Vars`] map from `name => value` pairs.
///
/// ```rust
/// use lexicon_i18n::vars;
///
/// let vars = vars! { "Name" => "Bob", "Count" => 3 };
/// assert_eq!(vars.len(), 2);
/// ```
#[macro_export]
macro_rules! vars {
    () => {
        $crate::Vars::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut vars = $crate::Vars::new();
        $(
            vars.insert(::std::string::String::from($key), $crate::serde_json::Value::from($value));
        )+
        vars
    }};
}
