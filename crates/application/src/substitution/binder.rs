//! Argument extraction and binding

use regex::Captures;
use shellvars_domain::{ArgumentSlots, BoundArguments, ParameterSpec};

const ARGUMENT_SEPARATOR: char = ':';

/// Pulls positional argument slots out of a token match.
///
/// Group `i + 1` holds parameter `i` including its leading separator.
pub(crate) fn extract_slots(captures: &Captures<'_>, parameter_count: usize) -> ArgumentSlots {
    (1..=parameter_count)
        .map(|group| {
            captures.get(group).map(|m| {
                let text = m.as_str();
                text.strip_prefix(ARGUMENT_SEPARATOR)
                    .unwrap_or(text)
                    .to_string()
            })
        })
        .collect()
}

/// Binds positional slots to parameter names and validates them.
///
/// # Errors
///
/// Returns one message per missing required argument and per argument outside
/// its parameter's allowed values.
pub fn bind_arguments(
    placeholder: &str,
    parameters: &[ParameterSpec],
    slots: &[Option<String>],
) -> Result<BoundArguments, Vec<String>> {
    let mut bound = BoundArguments::new();
    let mut problems = Vec::new();

    for (index, parameter) in parameters.iter().enumerate() {
        match slots.get(index).and_then(Option::as_deref) {
            Some(value) => match parameter.canonical_value(value) {
                Some(canonical) => bound.insert(parameter.name(), canonical),
                None => problems.push(format!(
                    "{placeholder}: '{value}' is not a valid value for parameter '{}'. Allowed: {}",
                    parameter.name(),
                    parameter.allowed_values().unwrap_or_default().join(", ")
                )),
            },
            None if parameter.is_required() => problems.push(format!(
                "{placeholder}: missing required parameter '{}'",
                parameter.name()
            )),
            None => {}
        }
    }

    if problems.is_empty() {
        Ok(bound)
    } else {
        Err(problems)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mode() -> ParameterSpec {
        ParameterSpec::required("mode")
            .unwrap()
            .with_allowed_values(["absolute", "relative"])
            .unwrap()
    }

    #[test]
    fn test_binds_by_position() {
        let params = vec![mode(), ParameterSpec::optional("suffix").unwrap()];
        let bound = bind_arguments(
            "file_path",
            &params,
            &[Some("absolute".to_string()), Some(".bak".to_string())],
        )
        .unwrap();
        assert_eq!(bound.get("mode"), Some("absolute"));
        assert_eq!(bound.get("suffix"), Some(".bak"));
    }

    #[test]
    fn test_omitted_optional_is_unbound() {
        let params = vec![ParameterSpec::optional("suffix").unwrap()];
        let bound = bind_arguments("x", &params, &[None]).unwrap();
        assert!(bound.is_empty());
    }

    #[test]
    fn test_missing_required_reported() {
        let errors = bind_arguments("file_path", &[mode()], &[None]).unwrap_err();
        assert_eq!(errors, vec!["file_path: missing required parameter 'mode'"]);
    }

    #[test]
    fn test_disallowed_value_reported() {
        let errors =
            bind_arguments("file_path", &[mode()], &[Some("sideways".to_string())]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("'sideways'"));
        assert!(errors[0].contains("absolute, relative"));
    }

    #[test]
    fn test_allowed_values_match_any_case() {
        let bound =
            bind_arguments("file_path", &[mode()], &[Some("ABSOLUTE".to_string())]).unwrap();
        assert_eq!(bound.get("mode"), Some("absolute"));
    }

    #[test]
    fn test_open_parameter_keeps_argument_case() {
        let params = vec![ParameterSpec::required("value").unwrap()];
        let bound = bind_arguments("passthrough", &params, &[Some("MiXeD".to_string())]).unwrap();
        assert_eq!(bound.get("value"), Some("MiXeD"));
    }
}
