pub const SYSTEM_PROMPT: &str = "\
You are a concise, accurate Japanese teacher and linguistic analyzer.
For the Japanese sentence you are given, produce a careful step-by-step explanation: kana reading, romaji, \
literal translation, natural translation(s), a morpheme-by-morpheme gloss, each grammar point with short \
examples, nuance and register (politeness, formality, offensiveness), common learner mistakes, possible \
paraphrases, and 2-5 practice exercises with answers.
Use plain language and do not speculate. When you claim something about usage or nuance, justify it in one sentence.
Answer with JSON that follows the requested schema. Keep examples short and focused on the sentence. \
Flag offensive or sensitive language in the nuance field. Exercises should be moderate to hard.";

const SCHEMA: &str = r#"{
  "original": string,
  "kana": string,
  "romaji": string,
  "literal_translation": string,
  "natural_translations": [string],
  "gloss_lines": { "surface": string, "reading": string, "gloss": string },
  "word_by_word": [ { "token": string, "reading": string, "pos": string, "meaning": string } ],
  "grammar_points": [ { "point": string, "explanation": string, "similar_examples": [string] } ],
  "nuance_and_register": string,
  "common_errors": [string],
  "paraphrases_and_alternatives": [string],
  "practice_exercises": [ { "task": string, "answer": string } ],
  "confidence": "low|medium|high"
}"#;

/// User message asking for an explanation of `sentence`
pub fn explain_prompt(sentence: &str) -> String {
    format!(
        "Analyze this Japanese sentence and output JSON strictly matching the schema.\n\n\
         Sentence: \"{sentence}\"\n\n\
         Schema fields required:\n{SCHEMA}\n\n\
         Do not include any extra fields. Keep each explanation short (1-3 sentences). \
         If you cannot analyze some item, set its value to null."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_sentence_and_schema() {
        let prompt = explain_prompt("雨が降る");
        assert!(prompt.contains("Sentence: \"雨が降る\""));
        assert!(prompt.contains("\"practice_exercises\""));
    }
}
