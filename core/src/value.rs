/// A scalar as it arrives from a tabular source, before normalization.
///
/// Callers hand records over with whatever dynamic types their source
/// produced; classification into a graph-writable value happens in
/// [`ScalarValue::classify`].
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawValue::Null,
            serde_json::Value::Bool(b) => RawValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => RawValue::Int(i),
                None => RawValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => RawValue::Text(s),
            // Arrays and objects carry over as their JSON text. A list
            // serializes to "[...]", which classifies as a raw list literal.
            other => RawValue::Text(other.to_string()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

/// A normalized scalar: absent values are never written to the graph,
/// present values have exactly one Cypher literal form.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Absent,
    Integer(i64),
    Float(f64),
    /// Pre-serialized list syntax, emitted verbatim and unquoted.
    /// The text is trusted as-is; it is not parsed or validated here.
    RawList(String),
    Text(String),
}

impl ScalarValue {
    /// Classify a raw scalar. Nulls, NaN and empty strings are absent;
    /// text beginning with `[` is a list-literal passthrough.
    pub fn classify(raw: &RawValue) -> ScalarValue {
        match raw {
            RawValue::Null => ScalarValue::Absent,
            RawValue::Bool(b) => ScalarValue::Text(b.to_string()),
            RawValue::Int(i) => ScalarValue::Integer(*i),
            RawValue::Float(f) if f.is_nan() => ScalarValue::Absent,
            RawValue::Float(f) => ScalarValue::Float(*f),
            RawValue::Text(s) if s.is_empty() => ScalarValue::Absent,
            RawValue::Text(s) if s.starts_with('[') => ScalarValue::RawList(s.clone()),
            RawValue::Text(s) => ScalarValue::Text(s.clone()),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ScalarValue::Absent)
    }

    /// Render the Cypher literal for a present value; `None` for absent.
    ///
    /// Numeric literals are wrapped in an explicit coercion so the stored
    /// property type never depends on driver-side guessing. List literals
    /// pass through unquoted; everything else is a single-quoted string
    /// with embedded quotes escaped.
    pub fn render_literal(&self) -> Option<String> {
        match self {
            ScalarValue::Absent => None,
            ScalarValue::Integer(i) => Some(format!("toInteger({i})")),
            ScalarValue::Float(f) => Some(format!("toFloat({f})")),
            ScalarValue::RawList(s) => Some(s.clone()),
            ScalarValue::Text(s) => Some(format!("'{}'", escape_text(s))),
        }
    }
}

/// Escape backslashes and single quotes so caller-supplied text cannot
/// terminate the surrounding literal early.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_nan_and_empty_string_classify_as_absent() {
        assert!(ScalarValue::classify(&RawValue::Null).is_absent());
        assert!(ScalarValue::classify(&RawValue::Float(f64::NAN)).is_absent());
        assert!(ScalarValue::classify(&RawValue::Text(String::new())).is_absent());
    }

    #[test]
    fn test_whole_and_fractional_numbers_keep_their_kind() {
        assert_eq!(
            ScalarValue::classify(&RawValue::Int(42)),
            ScalarValue::Integer(42)
        );
        assert_eq!(
            ScalarValue::classify(&RawValue::Float(2.5)),
            ScalarValue::Float(2.5)
        );
    }

    #[test]
    fn test_list_like_text_is_a_raw_passthrough() {
        let classified = ScalarValue::classify(&RawValue::Text("['a', 'b']".to_string()));
        assert_eq!(classified, ScalarValue::RawList("['a', 'b']".to_string()));
        assert_eq!(classified.render_literal().unwrap(), "['a', 'b']");
    }

    #[test]
    fn test_numeric_literals_are_unquoted_and_coerced() {
        assert_eq!(
            ScalarValue::Integer(30).render_literal().unwrap(),
            "toInteger(30)"
        );
        assert_eq!(
            ScalarValue::Float(1.75).render_literal().unwrap(),
            "toFloat(1.75)"
        );
    }

    #[test]
    fn test_text_literals_are_quoted_and_escaped() {
        assert_eq!(
            ScalarValue::Text("alice".to_string())
                .render_literal()
                .unwrap(),
            "'alice'"
        );
        assert_eq!(
            ScalarValue::Text("o'brien".to_string())
                .render_literal()
                .unwrap(),
            "'o\\'brien'"
        );
        assert_eq!(
            ScalarValue::Text("a\\b".to_string())
                .render_literal()
                .unwrap(),
            "'a\\\\b'"
        );
    }

    #[test]
    fn test_json_array_value_becomes_raw_list() {
        let raw = RawValue::from(serde_json::json!(["python", "go"]));
        let classified = ScalarValue::classify(&raw);
        assert_eq!(
            classified,
            ScalarValue::RawList("[\"python\",\"go\"]".to_string())
        );
    }

    #[test]
    fn test_absent_renders_no_literal() {
        assert_eq!(ScalarValue::Absent.render_literal(), None);
    }
}
