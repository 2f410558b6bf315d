//! Filter option sets and their compilation to query strings.
//!
//! Queries use the Appwrite JSON form:
//!
//! ```text
//! {"method":"equal","attribute":"status","values":["active"]}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single filter condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub value: Value,
}

impl Condition {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Filter operator kinds, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOp {
    Equals,
    NotEquals,
    LessThan,
    GreaterThan,
    Contains,
}

impl FilterOp {
    pub const ORDER: [FilterOp; 5] = [
        FilterOp::Equals,
        FilterOp::NotEquals,
        FilterOp::LessThan,
        FilterOp::GreaterThan,
        FilterOp::Contains,
    ];

    /// Appwrite query method this operator compiles to.
    pub fn method(&self) -> &'static str {
        match self {
            FilterOp::Equals => "equal",
            FilterOp::NotEquals => "notEqual",
            FilterOp::LessThan => "lessThan",
            FilterOp::GreaterThan => "greaterThan",
            FilterOp::Contains => "search",
        }
    }

    /// Query string for a single condition.
    ///
    /// An array value is used as the query values directly; anything else is
    /// wrapped in a one-element array. `search` takes a single needle, so its
    /// value is always wrapped.
    pub fn expression(&self, condition: &Condition) -> String {
        let values = match (self, &condition.value) {
            (FilterOp::Contains, value) => Value::Array(vec![value.clone()]),
            (_, Value::Array(_)) => condition.value.clone(),
            (_, other) => Value::Array(vec![other.clone()]),
        };
        query_string(self.method(), Some(&condition.field), Some(&values))
    }
}

/// Conditions grouped by operator kind.
///
/// Unknown keys are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryOptions {
    pub equals: Vec<Condition>,
    pub not_equals: Vec<Condition>,
    pub less_than: Vec<Condition>,
    pub greater_than: Vec<Condition>,
    pub contains: Vec<Condition>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equals(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.equals.push(Condition::new(field, value));
        self
    }

    pub fn not_equals(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.not_equals.push(Condition::new(field, value));
        self
    }

    pub fn less_than(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.less_than.push(Condition::new(field, value));
        self
    }

    pub fn greater_than(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.greater_than.push(Condition::new(field, value));
        self
    }

    pub fn contains(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.contains.push(Condition::new(field, value));
        self
    }

    pub fn conditions(&self, op: FilterOp) -> &[Condition] {
        match op {
            FilterOp::Equals => &self.equals,
            FilterOp::NotEquals => &self.not_equals,
            FilterOp::LessThan => &self.less_than,
            FilterOp::GreaterThan => &self.greater_than,
            FilterOp::Contains => &self.contains,
        }
    }

    /// Total number of conditions across all operators.
    pub fn len(&self) -> usize {
        FilterOp::ORDER.iter().map(|op| self.conditions(*op).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compile filter options into query strings.
///
/// Operators are emitted in the order equals, notEquals, lessThan,
/// greaterThan, contains. Duplicate and conflicting conditions are kept.
pub fn build_queries(options: &QueryOptions) -> Vec<String> {
    FilterOp::ORDER
        .iter()
        .flat_map(|op| {
            options
                .conditions(*op)
                .iter()
                .map(move |condition| op.expression(condition))
        })
        .collect()
}

/// Paging query limiting the number of returned documents.
pub fn limit(n: u64) -> String {
    query_string("limit", None, Some(&Value::Array(vec![n.into()])))
}

/// Paging query skipping the first `n` documents.
pub fn offset(n: u64) -> String {
    query_string("offset", None, Some(&Value::Array(vec![n.into()])))
}

// Keys are written by hand to keep method, attribute, values in that order.
fn query_string(method: &str, attribute: Option<&str>, values: Option<&Value>) -> String {
    let mut out = format!("{{\"method\":{}", Value::from(method));
    if let Some(attribute) = attribute {
        out.push_str(&format!(",\"attribute\":{}", Value::from(attribute)));
    }
    if let Some(values) = values {
        out.push_str(&format!(",\"values\":{}", values));
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_options_compile_to_nothing() {
        let options = QueryOptions::new();
        assert!(options.is_empty());
        assert!(build_queries(&options).is_empty());
    }

    #[test]
    fn test_single_equals() {
        let options = QueryOptions::new().equals("status", "active");
        assert_eq!(
            build_queries(&options),
            vec![r#"{"method":"equal","attribute":"status","values":["active"]}"#]
        );
    }

    #[test]
    fn test_operator_methods() {
        let options = QueryOptions::new()
            .contains("title", "rust")
            .greater_than("age", 18)
            .less_than("score", 9.5)
            .not_equals("deleted", true)
            .equals("status", "active");

        assert_eq!(
            build_queries(&options),
            vec![
                r#"{"method":"equal","attribute":"status","values":["active"]}"#,
                r#"{"method":"notEqual","attribute":"deleted","values":[true]}"#,
                r#"{"method":"lessThan","attribute":"score","values":[9.5]}"#,
                r#"{"method":"greaterThan","attribute":"age","values":[18]}"#,
                r#"{"method":"search","attribute":"title","values":["rust"]}"#,
            ]
        );
    }

    #[test]
    fn test_array_value_is_used_as_values() {
        let options = QueryOptions::new().equals("status", json!(["active", "pending"]));
        assert_eq!(
            build_queries(&options),
            vec![r#"{"method":"equal","attribute":"status","values":["active","pending"]}"#]
        );
    }

    #[test]
    fn test_contains_wraps_array_value() {
        let options = QueryOptions::new().contains("tags", json!(["a", "b"]));
        assert_eq!(
            build_queries(&options),
            vec![r#"{"method":"search","attribute":"tags","values":[["a","b"]]}"#]
        );
    }

    #[test]
    fn test_count_matches_conditions_and_keeps_duplicates() {
        let options = QueryOptions::new()
            .equals("a", 1)
            .equals("a", 1)
            .equals("a", 2)
            .less_than("b", 3)
            .greater_than("b", 4);

        assert_eq!(options.len(), 5);
        assert_eq!(build_queries(&options).len(), 5);
    }

    #[test]
    fn test_strings_are_escaped() {
        let options = QueryOptions::new().equals("name", "say \"hi\"");
        assert_eq!(
            build_queries(&options),
            vec![r#"{"method":"equal","attribute":"name","values":["say \"hi\""]}"#]
        );
    }

    #[test]
    fn test_deserialize_camel_case_and_ignore_unknown() {
        let options: QueryOptions = serde_json::from_str(
            r#"{"notEquals":[{"field":"x","value":1}],"between":[{"field":"y","value":2}]}"#,
        )
        .unwrap();

        assert_eq!(options.len(), 1);
        assert_eq!(
            build_queries(&options),
            vec![r#"{"method":"notEqual","attribute":"x","values":[1]}"#]
        );
    }

    #[test]
    fn test_paging_queries() {
        assert_eq!(limit(100), r#"{"method":"limit","values":[100]}"#);
        assert_eq!(offset(200), r#"{"method":"offset","values":[200]}"#);
    }
}
