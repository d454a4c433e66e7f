// All LLM prompt constants for the Evaluation module.

/// System prompt framing the grader persona — enforces JSON-only output.
pub const EXAMINER_SYSTEM: &str = "You are a strict but friendly language examiner. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Builds the grading prompt for one submission. `theme`, `tags` and `text`
/// are embedded verbatim; the expected output schema mirrors
/// `EvaluationResult`.
pub fn build_evaluation_prompt(theme: &str, tags: &str, text: &str) -> String {
    format!(
        r#"You are a writing examiner and grammar coach for English and German.

The student is playing an image description game.
They see a picture with this theme: "{theme}".
The image tags (objects / ideas in the scene) are: {tags}.

The student wrote this description:

"""{text}"""

First detect whether the description is written in English or German, and
grade it in that language.

Please:
1. Evaluate relevance to the theme and tags.
2. Evaluate richness of content (details, vocabulary).
3. Evaluate logical structure and coherence.
4. Evaluate grammar, vocabulary and style.
5. Give a total score from 0 to 1000 (integer).
   - Think of 600 as a clear pass, 800+ as very good, 900+ as excellent.

Return your result as a strict JSON object with the following fields:

{{
  "score": number,                   // integer 0-1000
  "passed": boolean,                 // true if score >= 600
  "breakdown": string,               // short explanation of 3-6 lines
  "explanation": string,             // more detailed explanation for the student
  "grammarIssues": string[],         // list each grammar or style problem in a short sentence
  "betterVersion": string            // your improved version of the student's description
}}

Do NOT include anything outside of the JSON. Do NOT use markdown."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_inputs_verbatim() {
        let prompt = build_evaluation_prompt(
            "A quiet afternoon",
            "cat, mat, ball",
            "A cat sits on a mat.",
        );
        assert!(prompt.contains("\"A quiet afternoon\""));
        assert!(prompt.contains("are: cat, mat, ball"));
        assert!(prompt.contains("\"\"\"A cat sits on a mat.\"\"\""));
        assert!(prompt.contains("\"grammarIssues\""));
    }
}
