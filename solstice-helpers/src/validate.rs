//! Проверка обязательных параметров по декларативным правилам.
//!
//! Порядок проверок для каждого поля фиксирован: отсутствует → валидатор → тип.
//! Для поля записывается только первая сработавшая ошибка.

use itertools::Itertools;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

use crate::error::HelpersError;

/// Примитивный тип значения в терминах `typeof`: null, массивы и объекты — "object"
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Null | Value::Array(_) | Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ValueKind::String),
            "number" => Ok(ValueKind::Number),
            "boolean" => Ok(ValueKind::Boolean),
            "object" => Ok(ValueKind::Object),
            other => Err(format!("unknown value kind `{other}`")),
        }
    }
}

pub type Validator = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Правило для одного поля. Пустое правило — достаточно присутствия (в т.ч. null).
#[derive(Clone, Default, Deserialize)]
pub struct FieldRule {
    #[serde(default, rename = "type")]
    pub kind: Option<ValueKind>,
    #[serde(skip)]
    pub validator: Option<Validator>,
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("kind", &self.kind)
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Результат проверки одного поля
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldCheck {
    Ok,
    Missing,
    ValidatorFailed,
    WrongType { received: ValueKind },
}

impl FieldRule {
    pub fn present() -> Self {
        Self::default()
    }

    pub fn of_kind(kind: ValueKind) -> Self {
        Self {
            kind: Some(kind),
            validator: None,
        }
    }

    pub fn with_validator<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(f));
        self
    }

    /// `None` — ключа в параметрах нет
    pub fn check(&self, value: Option<&Value>) -> FieldCheck {
        let Some(value) = value else {
            return FieldCheck::Missing;
        };
        if let Some(validator) = &self.validator {
            if !validator(value) {
                return FieldCheck::ValidatorFailed;
            }
        }
        match self.kind {
            Some(kind) if ValueKind::of(value) != kind => FieldCheck::WrongType {
                received: ValueKind::of(value),
            },
            _ => FieldCheck::Ok,
        }
    }
}

/// Упорядоченный набор правил: поля проверяются в порядке объявления
#[derive(Clone, Debug, Default)]
pub struct Requirements {
    fields: Vec<(String, FieldRule)>,
}

impl Requirements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Повторное объявление поля заменяет правило, позиция сохраняется
    pub fn field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.insert(name, rule);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, rule: FieldRule) {
        let name = name.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = rule,
            None => self.fields.push((name, rule)),
        }
    }

    /// Подвесить валидатор к уже объявленному полю (правила из JSON валидаторов не несут)
    pub fn set_validator<F>(&mut self, name: &str, f: F) -> bool
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        match self.fields.iter_mut().find(|(k, _)| k == name) {
            Some((_, rule)) => {
                rule.validator = Some(Arc::new(f));
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.fields.iter().map(|(k, r)| (k.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'de> Deserialize<'de> for Requirements {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RequirementsVisitor;

        impl<'de> Visitor<'de> for RequirementsVisitor {
            type Value = Requirements;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field name to rule")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Requirements, A::Error> {
                let mut out = Requirements::new();
                while let Some((name, rule)) = map.next_entry::<String, FieldRule>()? {
                    out.insert(name, rule);
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(RequirementsVisitor)
    }
}

/// Нарушение одного правила; несёт только сообщение
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn from_check(key: &str, check: FieldCheck) -> Option<Self> {
        let message = match check {
            FieldCheck::Ok => return None,
            FieldCheck::Missing => format!("Missing param '{key}'"),
            FieldCheck::ValidatorFailed => format!("Failed validator function for param '{key}'"),
            FieldCheck::WrongType { received } => {
                format!("Incorrect type for param '{key}'. Received '{received}'")
            }
        };
        Some(Self::new(message))
    }
}

/// Все нарушения в порядке объявления правил; пустой вектор — параметры валидны
pub fn validate_required(required: &Requirements, params: &Map<String, Value>) -> Vec<ValidationError> {
    required
        .iter()
        .filter_map(|(key, rule)| ValidationError::from_check(key, rule.check(params.get(key))))
        .collect()
}

/// Как `validate_required`, но любое нарушение превращается в одну сводную ошибку
pub fn ensure_required(required: &Requirements, params: &Map<String, Value>) -> Result<(), HelpersError> {
    let errors = validate_required(required, params);
    if errors.is_empty() {
        return Ok(());
    }
    Err(HelpersError::Validation(
        errors.iter().map(ValidationError::message).join("\n"),
    ))
}
