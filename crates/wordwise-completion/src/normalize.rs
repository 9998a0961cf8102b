use serde_json::{Map, Value};
use wordwise_types::record::{
    NO_EXAMPLE, NO_MEANING, NO_STORY, placeholder_antonyms, placeholder_synonyms,
};
use wordwise_types::{ImprovementKind, ImprovementRecord, WordRecord};

use crate::error::CompletionError;

/// Build a `WordRecord` from the model's message content.
///
/// The content must hold a JSON object; each field that is missing or of
/// the wrong type falls back to its placeholder. `word` is always `term`.
pub fn word_record_from_content(term: &str, content: &str) -> Result<WordRecord, CompletionError> {
    let object = parse_object(content)?;

    Ok(WordRecord {
        word: term.trim().to_string(),
        meaning: text_field(&object, "meaning").unwrap_or_else(|| NO_MEANING.to_string()),
        example: text_field(&object, "example").unwrap_or_else(|| NO_EXAMPLE.to_string()),
        synonyms: list_field(&object, "synonyms").unwrap_or_else(placeholder_synonyms),
        antonyms: list_field(&object, "antonyms").unwrap_or_else(placeholder_antonyms),
        story: text_field(&object, "story").unwrap_or_else(|| NO_STORY.to_string()),
    })
}

/// Build an `ImprovementRecord` from the model's message content.
///
/// `improved` is required and passed through verbatim.
pub fn improvement_from_content(content: &str) -> Result<ImprovementRecord, CompletionError> {
    let object = parse_object(content)?;

    let improved = match object.get("improved") {
        Some(Value::String(text)) if !text.trim().is_empty() => text.clone(),
        _ => {
            return Err(CompletionError::MalformedContent(
                "missing \"improved\" sentence".to_string(),
            ));
        }
    };

    let kinds: Vec<ImprovementKind> = match object.get("improvements") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(ImprovementKind::parse_lenient)
            .collect(),
        Some(Value::String(single)) => vec![ImprovementKind::parse_lenient(single)],
        _ => Vec::new(),
    };

    Ok(ImprovementRecord::new(improved, kinds))
}

fn parse_object(content: &str) -> Result<Map<String, Value>, CompletionError> {
    let text = strip_fences(content);

    let value = serde_json::from_str::<Value>(text).or_else(|err| {
        // Models sometimes wrap the object in prose despite the JSON mode
        match (text.find('{'), text.rfind('}')) {
            (Some(start), Some(end)) if start < end => {
                serde_json::from_str::<Value>(&text[start..=end])
            }
            _ => Err(err),
        }
    });

    match value {
        Ok(Value::Object(object)) => Ok(object),
        Ok(other) => Err(CompletionError::MalformedContent(format!(
            "expected a JSON object, got {}",
            kind_name(&other)
        ))),
        Err(e) => Err(CompletionError::MalformedContent(e.to_string())),
    }
}

fn strip_fences(raw: &str) -> &str {
    let text = raw.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest
        .strip_prefix("json")
        .or_else(|| rest.strip_prefix("JSON"))
        .unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn list_field(object: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let items: Vec<String> = object
        .get(key)?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    if items.is_empty() { None } else { Some(items) }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPHEMERAL: &str = r#"{"meaning":"lasting briefly","example":"...","synonyms":["fleeting","transient"],"antonyms":["permanent","lasting"],"story":"..."}"#;

    #[test]
    fn full_word_response() {
        let record = word_record_from_content("ephemeral", EPHEMERAL).unwrap();
        assert_eq!(
            record,
            WordRecord {
                word: "ephemeral".to_string(),
                meaning: "lasting briefly".to_string(),
                example: "...".to_string(),
                synonyms: vec!["fleeting".to_string(), "transient".to_string()],
                antonyms: vec!["permanent".to_string(), "lasting".to_string()],
                story: "...".to_string(),
            }
        );
    }

    #[test]
    fn word_is_the_search_term() {
        let content = r#"{"word":"Ephemeral!!","meaning":"short"}"#;
        let record = word_record_from_content("  ephemeral  ", content).unwrap();
        assert_eq!(record.word, "ephemeral");
    }

    #[test]
    fn missing_and_mistyped_fields_use_placeholders() {
        let content = r#"{"meaning":"short","synonyms":"fleeting","antonyms":[],"story":42}"#;
        let record = word_record_from_content("ephemeral", content).unwrap();

        assert_eq!(record.meaning, "short");
        assert_eq!(record.example, NO_EXAMPLE);
        assert_eq!(record.synonyms, placeholder_synonyms());
        assert_eq!(record.antonyms, placeholder_antonyms());
        assert_eq!(record.story, NO_STORY);
    }

    #[test]
    fn text_fields_are_kept_verbatim() {
        let content = r#"{"meaning":" lasting briefly ","example":"","story":"Line one.\nLine two.\n"}"#;
        let record = word_record_from_content("ephemeral", content).unwrap();

        assert_eq!(record.meaning, " lasting briefly ");
        assert_eq!(record.example, NO_EXAMPLE);
        assert_eq!(record.story, "Line one.\nLine two.\n");
    }

    #[test]
    fn fenced_and_wrapped_content() {
        let fenced = format!("```json\n{EPHEMERAL}\n```");
        let record = word_record_from_content("ephemeral", &fenced).unwrap();
        assert_eq!(record.meaning, "lasting briefly");

        let wrapped = format!("Here you go: {EPHEMERAL} Enjoy!");
        let record = word_record_from_content("ephemeral", &wrapped).unwrap();
        assert_eq!(record.synonyms, vec!["fleeting", "transient"]);
    }

    #[test]
    fn non_object_content_is_malformed() {
        assert!(matches!(
            word_record_from_content("word", "just some prose"),
            Err(CompletionError::MalformedContent(_))
        ));
        assert!(matches!(
            word_record_from_content("word", "[1, 2]"),
            Err(CompletionError::MalformedContent(_))
        ));
    }

    #[test]
    fn improvement_verbatim() {
        let content = r#"{"improved":"I want to go to school.","improvements":["grammar"]}"#;
        let record = improvement_from_content(content).unwrap();
        assert_eq!(record.improved, "I want to go to school.");
        assert_eq!(record.improvements, vec![ImprovementKind::Grammar]);
    }

    #[test]
    fn improvement_kinds_default_to_other() {
        let record = improvement_from_content(r#"{"improved":"Hello.","improvements":[]}"#).unwrap();
        assert_eq!(record.improvements, vec![ImprovementKind::Other]);

        let record = improvement_from_content(r#"{"improved":"Hello."}"#).unwrap();
        assert_eq!(record.improvements, vec![ImprovementKind::Other]);

        let record =
            improvement_from_content(r#"{"improved":"Hello.","improvements":["Style","Punctuation"]}"#)
                .unwrap();
        assert_eq!(
            record.improvements,
            vec![ImprovementKind::Style, ImprovementKind::Other]
        );
    }

    #[test]
    fn improvement_without_sentence_is_malformed() {
        assert!(matches!(
            improvement_from_content(r#"{"improvements":["grammar"]}"#),
            Err(CompletionError::MalformedContent(_))
        ));
    }
}
