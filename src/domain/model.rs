use crate::utils::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named interest category and the keywords that signal it in free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestArea {
    pub id: String,
    pub display_name: String,
    pub keywords: Vec<String>,
}

impl InterestArea {
    /// Keywords are trimmed, lowercased and deduplicated, keeping first-seen order.
    pub fn new<I, S>(id: impl Into<String>, display_name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            keywords: normalize_keywords(keywords),
        }
    }
}

/// Trims, lowercases and deduplicates keywords, keeping first-seen order.
pub fn normalize_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for keyword in keywords {
        let keyword = keyword.as_ref().trim().to_lowercase();
        if !normalized.contains(&keyword) {
            normalized.push(keyword);
        }
    }
    normalized
}

/// Drops repeated area tags, keeping first-seen order.
pub fn dedup_tags<I, S>(area_tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut tags: Vec<String> = Vec::new();
    for tag in area_tags {
        let tag = tag.into();
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// An academic offering owned by one institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub name: String,
    pub institution_name: String,
    pub area_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl Program {
    pub fn new<I, S>(
        id: impl Into<String>,
        name: impl Into<String>,
        institution_name: impl Into<String>,
        area_tags: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            institution_name: institution_name.into(),
            area_tags: dedup_tags(area_tags),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn is_tagged(&self, area_id: &str) -> bool {
        self.area_tags.iter().any(|tag| tag == area_id)
    }
}

/// One free-text answer from a quiz submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: String,
    pub text: Option<String>,
}

impl AnswerRecord {
    /// Returns the answer text when it carries anything besides whitespace.
    pub fn usable_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.trim().is_empty())
    }
}

/// All answers of one submission, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    records: BTreeMap<String, AnswerRecord>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: impl Into<String>, text: Option<String>) {
        let question_id = question_id.into();
        self.records.insert(
            question_id.clone(),
            AnswerRecord { question_id, text },
        );
    }

    pub fn with_answer(mut self, question_id: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(question_id, Some(text.into()));
        self
    }

    /// 解析 `{"q1": "texto", "q2": null}` 形式的答案
    ///
    /// Non-string values are kept as answers without text.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| EngineError::InvalidConfigValueError {
                field: "answers".to_string(),
                value: value.to_string(),
                reason: "Answers must be a JSON object keyed by question id".to_string(),
            })?;

        let mut sheet = Self::new();
        for (question_id, answer) in object {
            let text = answer.as_str().map(str::to_string);
            sheet.insert(question_id.clone(), text);
        }
        Ok(sheet)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        Self::from_json(&value)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &AnswerRecord> {
        self.records.values()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaScore {
    pub area_id: String,
    pub score: u32,
}

/// Per-area tally, one entry per taxonomy area in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreVector {
    entries: Vec<AreaScore>,
}

impl ScoreVector {
    pub fn zeroed<'a, I>(area_ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            entries: area_ids
                .into_iter()
                .map(|area_id| AreaScore {
                    area_id: area_id.to_string(),
                    score: 0,
                })
                .collect(),
        }
    }

    pub fn get(&self, area_id: &str) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.area_id == area_id)
            .map(|entry| entry.score)
            .unwrap_or(0)
    }

    /// Overwrites the score of a known area. Unknown ids are ignored so the key set never changes.
    pub fn set(&mut self, area_id: &str, score: u32) -> bool {
        match self.entries.iter_mut().find(|entry| entry.area_id == area_id) {
            Some(entry) => {
                entry.score = score;
                true
            }
            None => false,
        }
    }

    pub(crate) fn bump(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.score = entry.score.saturating_add(1);
        }
    }

    pub fn entries(&self) -> &[AreaScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_all_zero(&self) -> bool {
        self.entries.iter().all(|entry| entry.score == 0)
    }

    pub fn to_map(&self) -> BTreeMap<String, u32> {
        self.entries
            .iter()
            .map(|entry| (entry.area_id.clone(), entry.score))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedProgram {
    pub program: Program,
    pub match_score: u32,
}

/// A ranked program with its display label and the structured fields it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub label: String,
    pub program_name: String,
    pub institution_name: String,
    pub match_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub top_areas: Vec<String>,
    pub total_answers: usize,
    pub raw: ScoreVector,
}

/// Full result of one quiz submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub recommendations: Vec<Recommendation>,
    pub institutions: Vec<String>,
    pub summary: AnalysisSummary,
}

impl Assessment {
    pub fn labels(&self) -> Vec<String> {
        self.recommendations
            .iter()
            .map(|recommendation| recommendation.label.clone())
            .collect()
    }
}
