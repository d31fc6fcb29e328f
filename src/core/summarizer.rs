use crate::core::taxonomy::Taxonomy;
use crate::domain::model::{AnalysisSummary, ScoreVector};

pub struct AnalysisSummarizer<'a> {
    taxonomy: &'a Taxonomy,
    top_n: usize,
}

impl<'a> AnalysisSummarizer<'a> {
    pub fn new(taxonomy: &'a Taxonomy, top_n: usize) -> Self {
        Self { taxonomy, top_n }
    }

    /// Display names of the best positive areas; ties keep taxonomy order.
    pub fn summarize(&self, scores: &ScoreVector, total_answers: usize) -> AnalysisSummary {
        let mut positive: Vec<(&str, u32)> = self
            .taxonomy
            .areas()
            .iter()
            .map(|area| (area.display_name.as_str(), scores.get(&area.id)))
            .filter(|(_, score)| *score > 0)
            .collect();

        positive.sort_by(|a, b| b.1.cmp(&a.1));

        AnalysisSummary {
            top_areas: positive
                .into_iter()
                .take(self.top_n)
                .map(|(name, _)| name.to_string())
                .collect(),
            total_answers,
            raw: scores.clone(),
        }
    }
}
