use crate::core::catalog::Catalog;
use crate::domain::model::{Program, RankedProgram, Recommendation, ScoreVector};

/// Orders catalog programs by weighted relevance to a score vector.
pub struct MatchRanker<'a> {
    catalog: &'a Catalog,
    weight: u32,
}

impl<'a> MatchRanker<'a> {
    pub fn new(catalog: &'a Catalog, weight: u32) -> Self {
        Self { catalog, weight }
    }

    /// Sum of `score * weight` over the program's area tags.
    pub fn match_score(&self, program: &Program, scores: &ScoreVector) -> u32 {
        program
            .area_tags
            .iter()
            .map(|area| scores.get(area).saturating_mul(self.weight))
            .fold(0u32, u32::saturating_add)
    }

    /// Returns `min(limit, catalog size)` programs, best first.
    ///
    /// The sort is stable, so equal scores keep catalog order and zero-score
    /// programs fill the tail in declaration order.
    pub fn rank(&self, scores: &ScoreVector, limit: usize) -> Vec<RankedProgram> {
        let mut ranked: Vec<RankedProgram> = self
            .catalog
            .programs()
            .iter()
            .map(|program| RankedProgram {
                match_score: self.match_score(program, scores),
                program: program.clone(),
            })
            .collect();

        ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        ranked.truncate(limit);

        if ranked.len() < limit {
            tracing::debug!(
                "Catalog holds {} programs, fewer than the {} requested",
                ranked.len(),
                limit
            );
        }

        ranked
    }
}

/// `"{name} ({institution})"`, except that names already containing `(` are
/// shown as-is without the institution suffix.
pub fn format_label(program: &Program) -> String {
    if program.name.contains('(') {
        program.name.clone()
    } else {
        format!("{} ({})", program.name, program.institution_name)
    }
}

pub fn to_recommendation(ranked: &RankedProgram) -> Recommendation {
    Recommendation {
        label: format_label(&ranked.program),
        program_name: ranked.program.name.clone(),
        institution_name: ranked.program.institution_name.clone(),
        match_score: ranked.match_score,
    }
}
