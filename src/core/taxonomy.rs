use crate::domain::model::{normalize_keywords, InterestArea, ScoreVector};
use crate::utils::error::{EngineError, Result};
use crate::utils::validation::{first_duplicate, validate_registry_text};
use std::collections::HashMap;

/// A normalized keyword and every area (by declaration index) that lists it.
#[derive(Debug, Clone)]
pub(crate) struct KeywordEntry {
    pub keyword: String,
    pub areas: Vec<usize>,
}

/// Immutable registry of interest areas, validated once at load time.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    areas: Vec<InterestArea>,
    index: Vec<KeywordEntry>,
}

impl Taxonomy {
    /// Keywords are normalized here as well, so hand-built areas get set semantics too.
    pub fn new(areas: Vec<InterestArea>) -> Result<Self> {
        let areas: Vec<InterestArea> = areas
            .into_iter()
            .map(|mut area| {
                area.keywords = normalize_keywords(&area.keywords);
                area
            })
            .collect();

        for area in &areas {
            validate_registry_text("taxonomy", &area.id, "id", &area.id)?;
            validate_registry_text("taxonomy", &area.id, "display_name", &area.display_name)?;

            // 空字串會匹配任何答案
            if area.keywords.iter().any(|keyword| keyword.trim().is_empty()) {
                return Err(EngineError::InvalidRegistryEntryError {
                    registry: "taxonomy".to_string(),
                    id: area.id.clone(),
                    reason: "keywords cannot be empty".to_string(),
                });
            }
        }

        if let Some(id) = first_duplicate(areas.iter().map(|area| area.id.as_str())) {
            return Err(EngineError::DuplicateAreaError { id: id.to_string() });
        }

        let index = build_keyword_index(&areas);

        tracing::debug!(
            "Taxonomy built with {} areas and {} distinct keywords",
            areas.len(),
            index.len()
        );

        Ok(Self { areas, index })
    }

    pub fn areas(&self) -> &[InterestArea] {
        &self.areas
    }

    pub fn get(&self, area_id: &str) -> Option<&InterestArea> {
        self.areas.iter().find(|area| area.id == area_id)
    }

    pub fn contains(&self, area_id: &str) -> bool {
        self.get(area_id).is_some()
    }

    pub fn display_name(&self, area_id: &str) -> Option<&str> {
        self.get(area_id).map(|area| area.display_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn keyword_count(&self) -> usize {
        self.index.len()
    }

    pub fn zero_scores(&self) -> ScoreVector {
        ScoreVector::zeroed(self.areas.iter().map(|area| area.id.as_str()))
    }

    pub(crate) fn keyword_index(&self) -> &[KeywordEntry] {
        &self.index
    }
}

fn build_keyword_index(areas: &[InterestArea]) -> Vec<KeywordEntry> {
    let mut index: Vec<KeywordEntry> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (area_index, area) in areas.iter().enumerate() {
        for keyword in &area.keywords {
            match positions.get(keyword.as_str()) {
                Some(&position) => index[position].areas.push(area_index),
                None => {
                    positions.insert(keyword.as_str(), index.len());
                    index.push(KeywordEntry {
                        keyword: keyword.clone(),
                        areas: vec![area_index],
                    });
                }
            }
        }
    }

    index
}
