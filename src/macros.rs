/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Objects become [`Record`](crate::Record)s with fields in the order
/// written. Any other expression is converted with `Value::from`, so only
/// types with a `From` impl are accepted.
///
/// ```rust
/// use toon_encoder::{toon, Value};
///
/// let rows = toon!([[1, 2], [3, 4]]);
/// assert_eq!(rows.as_array().map(|r| r.len()), Some(2));
///
/// let user = toon!({"id": 1, "name": "Ada", "admin": false});
/// assert_eq!(user.as_object().and_then(|r| r.get("name")), Some(&Value::from("Ada")));
/// ```
///
/// Maps have no `Value` form and are rejected at compile time:
///
/// ```compile_fail
/// use std::collections::HashMap;
/// use toon_encoder::toon;
///
/// let mut map = HashMap::new();
/// map.insert("k", 1);
/// let value = toon!([map]);
/// ```
#[macro_export]
macro_rules! toon {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::toon!($elem)),*])
    };

    // Handle empty record
    ({}) => {
        $crate::Value::Object($crate::Record::new())
    };

    // Handle non-empty record
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert($key, $crate::toon!($value));
        )*
        $crate::Value::Object(record)
    }};

    // Any other expression
    ($s:expr) => {
        $crate::Value::from($s)
    };
}
