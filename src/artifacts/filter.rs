use crate::providers::types::ExclusionRules;

/// Decides which lines of a binary listing are real build artifacts.
///
/// Every check is a plain, case-sensitive prefix or suffix comparison.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactFilter<'a> {
    repo_name: &'a str,
    rules: &'a ExclusionRules,
}

impl<'a> ArtifactFilter<'a> {
    pub fn new(repo_name: &'a str, rules: &'a ExclusionRules) -> Self {
        Self {
            repo_name,
            rules,
        }
    }

    /// Whether an already-trimmed line names an artifact.
    pub fn accepts(&self, line: &str) -> bool {
        !self.is_repo_marker(line)
            && !self
                .rules
                .invalid_prefixes
                .iter()
                .any(|prefix| line.starts_with(prefix.as_str()))
            && !self
                .rules
                .invalid_extensions
                .iter()
                .any(|ext| line.ends_with(ext.as_str()))
    }

    /// Lazily filter `lines`, trimming each one and keeping source order.
    pub fn iter<I, S>(self, lines: I) -> impl Iterator<Item = String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines.into_iter().filter_map(move |line| {
            let line = line.as_ref().trim();
            self.accepts(line).then(|| line.to_string())
        })
    }

    /// `osc ls -b` prints the repository itself as `<repo>/`.
    fn is_repo_marker(&self, line: &str) -> bool {
        line.strip_suffix('/') == Some(self.repo_name)
    }
}

/// Keep the lines of `lines` that are genuine artifacts for `repo_name`.
pub fn filter_artifacts<S: AsRef<str>>(
    lines: &[S],
    repo_name: &str,
    rules: &ExclusionRules,
) -> Vec<String> {
    ArtifactFilter::new(repo_name, rules).iter(lines).collect()
}
