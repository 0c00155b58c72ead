//! Declarative request validation.
//!
//! A [`RuleSet`] is a list of [`FieldRule`]s, each targeting one path
//! parameter or body field with an ordered list of checks. Evaluating a rule
//! set is a pure function from [`RequestInput`] to a list of [`Violation`]s:
//! every rule and every check runs, and each failing check contributes its
//! own violation.
//!
//! ```
//! use axum_helpers::validation::{body, param, RequestInput, RuleSet};
//! use serde_json::json;
//!
//! let rules = RuleSet::new()
//!     .rule(param("id").is_int().with_message("Id no valido"))
//!     .rule(body("name").not_empty().with_message("name is required"));
//!
//! let input = RequestInput::default()
//!     .with_param("id", "abc")
//!     .with_body(json!({ "name": "" }));
//!
//! let violations = rules.check(&input);
//! assert_eq!(violations.len(), 2);
//! assert_eq!(violations[0].field, "id");
//! ```

pub mod checks;
mod gate;

pub use gate::{InputErrors, gate};

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use utoipa::ToSchema;

/// Message used when a check has no explicit `with_message`.
pub const DEFAULT_MESSAGE: &str = "Invalid value";

/// Where a validated field is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Violation {
    #[schema(example = "price")]
    pub field: String,
    #[schema(example = "Precio no valido")]
    pub message: String,
    pub location: Location,
    /// The offending value, when one was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub value: Option<Value>,
}

/// The parts of a request a rule set can inspect.
#[derive(Debug, Clone, Default)]
pub struct RequestInput {
    pub params: HashMap<String, String>,
    pub body: Value,
}

impl RequestInput {
    pub fn new(params: HashMap<String, String>, body: Value) -> Self {
        Self { params, body }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    /// Raw path parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Body field, `None` when absent or when the body is not an object.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }

    fn lookup(&self, location: Location, name: &str) -> Option<Value> {
        match location {
            Location::Params => self.param(name).map(|v| Value::String(v.to_string())),
            Location::Body => self.field(name).cloned(),
        }
    }
}

/// A predicate applied to one field.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    Int,
    NotEmpty,
    Numeric,
    Boolean,
    Custom(fn(&Value) -> bool),
}

impl Check {
    pub fn passes(&self, value: Option<&Value>) -> bool {
        match self {
            Check::Int => checks::is_int(value),
            Check::NotEmpty => checks::not_empty(value),
            Check::Numeric => checks::is_numeric(value),
            Check::Boolean => checks::is_boolean(value),
            Check::Custom(predicate) => value.is_some_and(|v| predicate(v)),
        }
    }
}

/// Ordered checks against one field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    location: Location,
    field: &'static str,
    optional: bool,
    checks: Vec<(Check, &'static str)>,
}

/// Starts a rule on a path parameter.
pub fn param(field: &'static str) -> FieldRule {
    FieldRule::new(Location::Params, field)
}

/// Starts a rule on a JSON body field.
pub fn body(field: &'static str) -> FieldRule {
    FieldRule::new(Location::Body, field)
}

impl FieldRule {
    pub fn new(location: Location, field: &'static str) -> Self {
        Self {
            location,
            field,
            optional: false,
            checks: Vec::new(),
        }
    }

    /// Skip the whole rule when the field is absent.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn is_int(self) -> Self {
        self.check(Check::Int)
    }

    pub fn not_empty(self) -> Self {
        self.check(Check::NotEmpty)
    }

    pub fn is_numeric(self) -> Self {
        self.check(Check::Numeric)
    }

    pub fn is_boolean(self) -> Self {
        self.check(Check::Boolean)
    }

    pub fn custom(self, predicate: fn(&Value) -> bool) -> Self {
        self.check(Check::Custom(predicate))
    }

    /// Sets the message of the most recently added check.
    pub fn with_message(mut self, message: &'static str) -> Self {
        if let Some((_, current)) = self.checks.last_mut() {
            *current = message;
        }
        self
    }

    pub fn check(mut self, check: Check) -> Self {
        self.checks.push((check, DEFAULT_MESSAGE));
        self
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    fn evaluate(&self, input: &RequestInput, violations: &mut Vec<Violation>) {
        let value = input.lookup(self.location, self.field);
        if self.optional && value.is_none() {
            return;
        }

        for (check, message) in &self.checks {
            if !check.passes(value.as_ref()) {
                violations.push(Violation {
                    field: self.field.to_string(),
                    message: (*message).to_string(),
                    location: self.location,
                    value: value.clone(),
                });
            }
        }
    }
}

/// The rules declared for one route.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule, in declaration order, and collects all failures.
    pub fn check(&self, input: &RequestInput) -> Vec<Violation> {
        let mut violations = Vec::new();
        for rule in &self.rules {
            rule.evaluate(input, &mut violations);
        }
        violations
    }
}
