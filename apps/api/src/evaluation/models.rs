use serde::{Deserialize, Serialize};

/// Scene descriptors for the picture being described.
/// Callers send either a single comma-separated string or a list of strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tags {
    One(String),
    Many(Vec<String>),
}

impl Tags {
    pub fn is_empty(&self) -> bool {
        match self {
            Tags::One(s) => s.trim().is_empty(),
            Tags::Many(v) => v.iter().all(|s| s.trim().is_empty()),
        }
    }

    /// Flattens the tags into a single comma-separated string for prompt
    /// synthesis. Blank entries are dropped.
    pub fn joined(&self) -> String {
        match self {
            Tags::One(s) => s.clone(),
            Tags::Many(v) => v
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Incoming evaluation request body.
///
/// All fields are deserialized leniently so that a missing field yields our
/// own 400 response instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct EvaluationRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub tags: Option<Tags>,
}

impl EvaluationRequest {
    /// Returns the three fields if all are present and non-empty.
    pub fn require_fields(&self) -> Option<(&str, &str, &Tags)> {
        let text = self.text.as_deref().filter(|s| !s.trim().is_empty())?;
        let theme = self.theme.as_deref().filter(|s| !s.trim().is_empty())?;
        let tags = self.tags.as_ref().filter(|t| !t.is_empty())?;
        Some((text, theme, tags))
    }
}

/// Pass mark on the 0–1000 scale. `passed` derives from this when the
/// upstream did not supply a boolean.
pub const PASS_SCORE: i64 = 600;

/// Canonical evaluation result returned to callers, independent of whatever
/// shape the upstream happened to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub score: i64,
    pub passed: bool,
    pub breakdown: String,
    pub explanation: String,
    pub grammar_issues: Vec<String>,
    pub better_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_deserialize_both_forms() {
        let one: Tags = serde_json::from_str("\"cat, mat, ball\"").unwrap();
        assert_eq!(one.joined(), "cat, mat, ball");

        let many: Tags = serde_json::from_str("[\"cat\", \"mat\", \"ball\"]").unwrap();
        assert_eq!(many.joined(), "cat, mat, ball");
    }

    #[test]
    fn test_joined_drops_blank_entries() {
        let tags = Tags::Many(vec![
            "cat".to_string(),
            "".to_string(),
            "  ".to_string(),
            "ball".to_string(),
        ]);
        assert_eq!(tags.joined(), "cat, ball");
    }

    #[test]
    fn test_tags_emptiness() {
        assert!(Tags::One("   ".to_string()).is_empty());
        assert!(Tags::Many(vec![]).is_empty());
        assert!(Tags::Many(vec!["".to_string()]).is_empty());
        assert!(!Tags::Many(vec!["cat".to_string()]).is_empty());
    }

    #[test]
    fn test_require_fields_rejects_missing_and_empty() {
        let req: EvaluationRequest = serde_json::from_str("{}").unwrap();
        assert!(req.require_fields().is_none());

        let req: EvaluationRequest =
            serde_json::from_str(r#"{"text":"", "theme":"t", "tags":"x"}"#).unwrap();
        assert!(req.require_fields().is_none());

        let req: EvaluationRequest =
            serde_json::from_str(r#"{"text":"a", "theme":"t", "tags":[]}"#).unwrap();
        assert!(req.require_fields().is_none());

        let req: EvaluationRequest =
            serde_json::from_str(r#"{"text":"a", "theme":"t", "tags":"x"}"#).unwrap();
        assert!(req.require_fields().is_some());
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = EvaluationResult {
            score: 700,
            passed: true,
            breakdown: "ok".to_string(),
            explanation: String::new(),
            grammar_issues: vec![],
            better_version: String::new(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("grammarIssues").is_some());
        assert!(json.get("betterVersion").is_some());
        assert!(json.get("grammar_issues").is_none());
    }
}
