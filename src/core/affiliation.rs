use crate::domain::model::Recommendation;
use crate::utils::error::Result;
use regex::Regex;

/// Derives the unique institutions behind a ranked list, in first-seen order.
///
/// When nothing can be derived the configured default institutions are
/// returned instead, so the result is never empty as long as the defaults are not.
#[derive(Debug, Clone)]
pub struct AffiliationResolver {
    defaults: Vec<String>,
    suffix: Regex,
}

impl AffiliationResolver {
    pub fn new(defaults: Vec<String>) -> Result<Self> {
        let suffix = Regex::new(r"\(([^()]*)\)")?;
        Ok(Self { defaults, suffix })
    }

    pub fn defaults(&self) -> &[String] {
        &self.defaults
    }

    /// Extracts the institution from the last parenthesized group of a label.
    pub fn extract(&self, label: &str) -> Option<String> {
        self.suffix
            .captures_iter(label)
            .last()
            .and_then(|caps| caps.get(1))
            .map(|group| group.as_str().trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }

    /// Plain-string boundary: parses institutions back out of formatted labels.
    pub fn resolve<S: AsRef<str>>(&self, labels: &[S]) -> Vec<String> {
        self.collect(labels.iter().filter_map(|label| self.extract(label.as_ref())))
    }

    /// Structured path: reads the institution carried next to each label.
    pub fn resolve_recommendations(&self, recommendations: &[Recommendation]) -> Vec<String> {
        self.collect(
            recommendations
                .iter()
                .map(|recommendation| recommendation.institution_name.trim())
                .filter(|name| !name.is_empty())
                .map(str::to_string),
        )
    }

    fn collect<I: Iterator<Item = String>>(&self, names: I) -> Vec<String> {
        let mut institutions: Vec<String> = Vec::new();
        for name in names {
            if !institutions.contains(&name) {
                institutions.push(name);
            }
        }

        if institutions.is_empty() {
            tracing::debug!("No institution found, falling back to defaults");
            return self.defaults.clone();
        }

        institutions
    }
}
