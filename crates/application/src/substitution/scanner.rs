//! Used-token scanner

use std::collections::BTreeMap;
use std::sync::Arc;

use shellvars_domain::PlaceholderName;

use crate::ports::PlaceholderDefinition;
use crate::registry::PlaceholderSet;

/// Reports which definitions have at least one token in any of `contents`.
///
/// Read-only: nothing is bound or resolved.
pub fn find_used<I, S>(
    contents: I,
    placeholders: &PlaceholderSet,
) -> BTreeMap<PlaceholderName, Arc<dyn PlaceholderDefinition>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let contents: Vec<S> = contents.into_iter().collect();
    placeholders
        .entries()
        .filter(|entry| {
            contents
                .iter()
                .any(|content| entry.pattern().is_match(content.as_ref()))
        })
        .map(|entry| (entry.name().clone(), Arc::clone(entry.definition())))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::substitution::fixtures::StaticDefinition;
    use pretty_assertions::assert_eq;

    fn catalogue() -> PlaceholderSet {
        PlaceholderSet::from_definitions([
            Arc::new(StaticDefinition::resolving("shell_command_content", "x"))
                as Arc<dyn PlaceholderDefinition>,
            Arc::new(StaticDefinition::resolving("file_content", "y")),
        ])
        .unwrap()
    }

    fn names(used: &BTreeMap<PlaceholderName, Arc<dyn PlaceholderDefinition>>) -> Vec<String> {
        used.keys().map(ToString::to_string).collect()
    }

    #[test]
    fn test_reports_only_present_definitions() {
        let used = find_used(["echo {{shell_command_content}}"], &catalogue());
        assert_eq!(names(&used), vec!["shell_command_content"]);
    }

    #[test]
    fn test_any_text_counts() {
        let used = find_used(
            vec!["{{!FILE_CONTENT}}".to_string(), "{{shell_command_content}}".to_string()],
            &catalogue(),
        );
        assert_eq!(names(&used), vec!["file_content", "shell_command_content"]);
    }

    #[test]
    fn test_nothing_used() {
        assert!(find_used(["plain", ""], &catalogue()).is_empty());
        assert!(find_used(Vec::<&str>::new(), &catalogue()).is_empty());
    }
}
