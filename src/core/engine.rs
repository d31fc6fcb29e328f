use crate::config::data::CatalogData;
use crate::config::EngineSettings;
use crate::core::affiliation::AffiliationResolver;
use crate::core::analyzer::AnswerAnalyzer;
use crate::core::catalog::Catalog;
use crate::core::ranker::{format_label, to_recommendation, MatchRanker};
use crate::core::summarizer::AnalysisSummarizer;
use crate::core::taxonomy::Taxonomy;
use crate::domain::model::{
    AnalysisSummary, AnswerSheet, Assessment, RankedProgram, Recommendation, ScoreVector,
};
use crate::utils::error::{EngineError, Result};
use crate::utils::validation::Validate;

/// Read-only recommendation engine built once at startup.
///
/// Construction is the only fallible step. Every operation afterwards is a pure
/// function of its arguments and the registries, so one engine can be shared
/// across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    taxonomy: Taxonomy,
    catalog: Catalog,
    settings: EngineSettings,
    resolver: AffiliationResolver,
}

impl RecommendationEngine {
    pub fn new(taxonomy: Taxonomy, catalog: Catalog, settings: EngineSettings) -> Result<Self> {
        settings.validate()?;

        if settings.limit > 0 {
            if taxonomy.is_empty() {
                return Err(EngineError::EmptyRegistryError {
                    registry: "taxonomy".to_string(),
                    limit: settings.limit,
                });
            }
            if catalog.is_empty() {
                return Err(EngineError::EmptyRegistryError {
                    registry: "catalog".to_string(),
                    limit: settings.limit,
                });
            }
        }

        if catalog.len() < settings.limit {
            tracing::warn!(
                "Catalog has {} programs; rankings will be shorter than the configured limit {}",
                catalog.len(),
                settings.limit
            );
        }

        let resolver = AffiliationResolver::new(settings.default_institutions.clone())?;

        Ok(Self {
            taxonomy,
            catalog,
            settings,
            resolver,
        })
    }

    pub fn from_data(data: CatalogData, settings: EngineSettings) -> Result<Self> {
        let (taxonomy, catalog) = data.into_registries()?;
        Self::new(taxonomy, catalog, settings)
    }

    pub fn with_builtin_data(settings: EngineSettings) -> Result<Self> {
        Self::from_data(CatalogData::builtin()?, settings)
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn resolver(&self) -> &AffiliationResolver {
        &self.resolver
    }

    pub fn analyze(&self, answers: &AnswerSheet) -> ScoreVector {
        AnswerAnalyzer::new(&self.taxonomy).analyze(answers)
    }

    /// Ranks with the configured limit.
    pub fn rank(&self, scores: &ScoreVector) -> Vec<RankedProgram> {
        self.rank_with_limit(scores, self.settings.limit)
    }

    pub fn rank_with_limit(&self, scores: &ScoreVector, limit: usize) -> Vec<RankedProgram> {
        MatchRanker::new(&self.catalog, self.settings.weight).rank(scores, limit)
    }

    pub fn labels(&self, ranked: &[RankedProgram]) -> Vec<String> {
        ranked.iter().map(|r| format_label(&r.program)).collect()
    }

    pub fn recommendations(&self, ranked: &[RankedProgram]) -> Vec<Recommendation> {
        ranked.iter().map(to_recommendation).collect()
    }

    pub fn resolve<S: AsRef<str>>(&self, labels: &[S]) -> Vec<String> {
        self.resolver.resolve(labels)
    }

    pub fn resolve_recommendations(&self, recommendations: &[Recommendation]) -> Vec<String> {
        self.resolver.resolve_recommendations(recommendations)
    }

    pub fn summarize(&self, scores: &ScoreVector, total_answers: usize) -> AnalysisSummary {
        AnalysisSummarizer::new(&self.taxonomy, self.settings.top_areas)
            .summarize(scores, total_answers)
    }

    /// answers → scores → {ranking → labels → institutions, summary}
    pub fn assess(&self, answers: &AnswerSheet) -> Assessment {
        let scores = self.analyze(answers);
        let ranked = self.rank(&scores);
        let recommendations = self.recommendations(&ranked);
        let institutions = self.resolve_recommendations(&recommendations);
        let summary = self.summarize(&scores, answers.len());

        tracing::debug!(
            "Assessment produced {} recommendations, top areas: {:?}",
            recommendations.len(),
            summary.top_areas
        );

        Assessment {
            recommendations,
            institutions,
            summary,
        }
    }
}
