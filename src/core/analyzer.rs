use crate::core::taxonomy::Taxonomy;
use crate::domain::model::{AnswerSheet, ScoreVector};

/// Turns free-text answers into a per-area score vector.
///
/// Every keyword found in an answer adds exactly one point to each area that
/// lists it, no matter how often the keyword repeats within that answer.
/// Points add up across answers.
pub struct AnswerAnalyzer<'a> {
    taxonomy: &'a Taxonomy,
}

impl<'a> AnswerAnalyzer<'a> {
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn analyze(&self, answers: &AnswerSheet) -> ScoreVector {
        let mut scores = self.taxonomy.zero_scores();

        for record in answers.records() {
            let Some(text) = record.usable_text() else {
                continue;
            };
            let text = text.to_lowercase();

            for entry in self.taxonomy.keyword_index() {
                if text.contains(entry.keyword.as_str()) {
                    for &area in &entry.areas {
                        scores.bump(area);
                    }
                }
            }
        }

        tracing::debug!(
            "Analyzed {} answers: {:?}",
            answers.len(),
            scores.to_map()
        );

        scores
    }
}
