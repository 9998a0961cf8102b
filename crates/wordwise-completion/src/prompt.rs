pub const WORD_SYSTEM: &str = "You are a helpful English word assistant. Return only valid JSON.";

pub const SENTENCE_SYSTEM: &str =
    "You are a helpful English writing assistant. Only return valid JSON as instructed.";

pub fn word_prompt(word: &str) -> String {
    format!(
        "Explain the word \"{word}\" in simple English.\n\
         Give 1 simple sentence example, 2 synonyms, 2 antonyms, and 1 mini story (3 lines).\n\
         Return response as JSON with keys: meaning, example, synonyms, antonyms, story"
    )
}

pub fn sentence_prompt(sentence: &str) -> String {
    format!(
        "Rewrite this sentence in more expressive and natural English:\n\
         \"{sentence}\"\n\n\
         Return a JSON object with two fields:\n\
         - \"improved\": the improved sentence\n\
         - \"improvements\": an array listing what was improved (choose from: \"vocabulary\", \"grammar\", \"style\", \"clarity\", \"conciseness\", \"tone\", \"other\"). Only include fields that actually changed.\n\
         Do not include any explanation or notes. Only return valid JSON."
    )
}
