//! Placeholder parameters and bound arguments

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::name::is_valid_identifier;
use crate::error::{DomainError, DomainResult};

/// Declares one positional parameter of a placeholder, e.g. `mode` in
/// `{{file_path:absolute}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    name: String,
    required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    allowed_values: Option<Vec<String>>,
}

impl ParameterSpec {
    /// Creates a required parameter.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidParameterName`] if the name is not a valid identifier.
    pub fn required(name: impl Into<String>) -> DomainResult<Self> {
        Self::new(name, true)
    }

    /// Creates an optional parameter.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidParameterName`] if the name is not a valid identifier.
    pub fn optional(name: impl Into<String>) -> DomainResult<Self> {
        Self::new(name, false)
    }

    fn new(name: impl Into<String>, required: bool) -> DomainResult<Self> {
        let name = name.into();
        if !is_valid_identifier(&name) {
            return Err(DomainError::InvalidParameterName(name));
        }
        Ok(Self {
            name,
            required,
            allowed_values: None,
        })
    }

    /// Restricts the parameter to a closed set of values.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyAllowedValues`] if `values` is empty.
    pub fn with_allowed_values<I, S>(mut self, values: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(DomainError::EmptyAllowedValues(self.name));
        }
        self.allowed_values = Some(values);
        Ok(self)
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether an argument must be supplied for this parameter.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the closed value set, if one is declared.
    #[must_use]
    pub fn allowed_values(&self) -> Option<&[String]> {
        self.allowed_values.as_deref()
    }

    /// Returns true if `value` is acceptable for this parameter.
    ///
    /// Allowed values match case-insensitively.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        self.canonical_value(value).is_some()
    }

    /// Returns the value to bind for `value`: the declared spelling of the
    /// matching allowed value, or `value` itself when the parameter is open.
    #[must_use]
    pub fn canonical_value<'a>(&'a self, value: &'a str) -> Option<&'a str> {
        match &self.allowed_values {
            None => Some(value),
            Some(values) => values
                .iter()
                .find(|allowed| allowed.eq_ignore_ascii_case(value))
                .map(String::as_str),
        }
    }
}

/// Checks that a parameter list declares each name only once.
///
/// # Errors
///
/// Returns [`DomainError::DuplicateParameter`] naming the first repeated parameter.
pub fn validate_parameters(placeholder: &str, parameters: &[ParameterSpec]) -> DomainResult<()> {
    for (index, parameter) in parameters.iter().enumerate() {
        if parameters[..index]
            .iter()
            .any(|earlier| earlier.name == parameter.name)
        {
            return Err(DomainError::DuplicateParameter {
                placeholder: placeholder.to_string(),
                parameter: parameter.name.clone(),
            });
        }
    }
    Ok(())
}

/// Positional argument slots extracted from one token, aligned with the
/// definition's parameter list. `None` marks an omitted optional group.
pub type ArgumentSlots = Vec<Option<String>>;

/// Arguments keyed by parameter name, after binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundArguments {
    values: BTreeMap<String, String>,
}

impl BoundArguments {
    /// Creates an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` to the named parameter.
    pub fn insert(&mut self, parameter: impl Into<String>, value: impl Into<String>) {
        self.values.insert(parameter.into(), value.into());
    }

    /// Returns the argument bound to `parameter`.
    #[must_use]
    pub fn get(&self, parameter: &str) -> Option<&str> {
        self.values.get(parameter).map(String::as_str)
    }

    /// Returns true if an argument is bound to `parameter`.
    #[must_use]
    pub fn contains(&self, parameter: &str) -> bool {
        self.values.contains_key(parameter)
    }

    /// Returns the number of bound arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no arguments are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(parameter, value)` pairs in parameter-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_required_parameter() {
        let param = ParameterSpec::required("mode").unwrap();
        assert_eq!(param.name(), "mode");
        assert!(param.is_required());
        assert!(param.allowed_values().is_none());
        assert!(param.accepts("anything"));
    }

    #[test]
    fn test_allowed_values() {
        let param = ParameterSpec::required("mode")
            .unwrap()
            .with_allowed_values(["absolute", "relative"])
            .unwrap();
        assert!(param.accepts("absolute"));
        assert!(param.accepts("Absolute"));
        assert!(!param.accepts("other"));
        assert_eq!(param.canonical_value("RELATIVE"), Some("relative"));
        assert_eq!(param.canonical_value("other"), None);
        assert_eq!(
            param.allowed_values(),
            Some(&["absolute".to_string(), "relative".to_string()][..])
        );
    }

    #[test]
    fn test_empty_allowed_values_rejected() {
        let result = ParameterSpec::optional("mode")
            .unwrap()
            .with_allowed_values(Vec::<String>::new());
        assert_eq!(result, Err(DomainError::EmptyAllowedValues("mode".to_string())));
    }

    #[test]
    fn test_invalid_parameter_name() {
        assert!(ParameterSpec::required("").is_err());
        assert!(ParameterSpec::optional("a:b").is_err());
    }

    #[test]
    fn test_duplicate_parameters() {
        let params = vec![
            ParameterSpec::required("mode").unwrap(),
            ParameterSpec::optional("mode").unwrap(),
        ];
        assert_eq!(
            validate_parameters("file_path", &params),
            Err(DomainError::DuplicateParameter {
                placeholder: "file_path".to_string(),
                parameter: "mode".to_string(),
            })
        );
        assert!(validate_parameters("file_path", &params[..1]).is_ok());
    }

    #[test]
    fn test_bound_arguments() {
        let mut args = BoundArguments::new();
        assert!(args.is_empty());
        args.insert("mode", "absolute");
        assert_eq!(args.get("mode"), Some("absolute"));
        assert!(args.contains("mode"));
        assert!(!args.contains("value"));
        assert_eq!(args.len(), 1);
        assert_eq!(args.iter().collect::<Vec<_>>(), vec![("mode", "absolute")]);
    }
}
