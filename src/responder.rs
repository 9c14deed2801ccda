//! Canned answers for health queries.
//!
//! The prompt is lower-cased and scanned against an ordered keyword table.
//! Matching is plain substring containment, so "coldness" hits `cold`, and when
//! several keywords occur the entry declared first wins. Prompts that hit
//! nothing get the fallback disclaimer.
//!
//! Placeholder for real inference; nothing here understands language.

use crate::error::AppError;

/// One row of the keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordEntry {
    /// Lower-case substring to look for
    pub keyword: &'static str,
    /// Text returned verbatim on a match
    pub response: &'static str,
}

const HEADACHE_RESPONSE: &str = "Headaches can have many causes. If it's mild, try:\n\n\
1. Rest in a quiet, dark room\n\
2. Stay hydrated\n\
3. Apply a cold or warm compress\n\
4. Take over-the-counter pain relievers if needed\n\n\
⚠️ Seek immediate medical attention if you experience:\n\
- Sudden, severe headache\n\
- Headache with fever, stiff neck, or confusion\n\
- Headache after head injury";

const FEVER_RESPONSE: &str = "For a fever:\n\n\
1. Stay hydrated - drink plenty of fluids\n\
2. Rest and avoid strenuous activities\n\
3. Dress in light, comfortable clothing\n\
4. Take fever-reducing medications if appropriate\n\n\
⚠️ Seek medical care if:\n\
- Temperature above 103°F (39.4°C)\n\
- Fever lasts more than 3 days\n\
- Accompanied by severe symptoms";

const COLD_RESPONSE: &str = "For common cold symptoms:\n\n\
1. Get plenty of rest\n\
2. Stay hydrated with water, tea, or soup\n\
3. Use a humidifier\n\
4. Gargle with salt water for sore throat\n\
5. Use over-the-counter cold medicines if needed\n\n\
💡 Most colds resolve in 7-10 days. Contact a doctor if symptoms worsen or persist.";

/// Built-in table. Declaration order is match priority.
pub static KEYWORD_RESPONSES: [KeywordEntry; 3] = [
    KeywordEntry {
        keyword: "headache",
        response: HEADACHE_RESPONSE,
    },
    KeywordEntry {
        keyword: "fever",
        response: FEVER_RESPONSE,
    },
    KeywordEntry {
        keyword: "cold",
        response: COLD_RESPONSE,
    },
];

/// Returned when no keyword matches.
pub const FALLBACK_RESPONSE: &str = "Thank you for your question. I'm here to help with health-related queries.\n\n\
I can provide information about common symptoms like headaches, fever, colds, and more.\n\n\
⚠️ Remember: This is for informational purposes only. \
Always consult a qualified healthcare professional for medical advice.\n\n\
Could you describe your symptoms in more detail?";

/// True when the prompt holds nothing but separators.
///
/// Covers Unicode whitespace plus the ASCII information separators
/// U+001C..=U+001F, which clients commonly treat as whitespace too.
fn is_blank(prompt: &str) -> bool {
    prompt
        .trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
        .is_empty()
}

/// Ordered, read-only keyword table.
///
/// Holds only a static slice, so it is `Copy` and can be shared across any
/// number of concurrent requests without synchronization.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    entries: &'static [KeywordEntry],
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KeywordTable {
    /// The table the service ships with.
    pub fn builtin() -> Self {
        Self {
            entries: &KEYWORD_RESPONSES,
        }
    }

    /// A table over caller-supplied entries. Keywords are expected in lower case.
    pub const fn new(entries: &'static [KeywordEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [KeywordEntry] {
        self.entries
    }

    /// First entry whose keyword occurs anywhere in the lower-cased prompt.
    pub fn lookup(&self, prompt: &str) -> Option<&'static str> {
        let prompt = prompt.to_lowercase();
        self.entries
            .iter()
            .find(|entry| prompt.contains(entry.keyword))
            .map(|entry| entry.response)
    }

    /// Answer a query.
    ///
    /// A missing, empty, or whitespace-only prompt is an `InvalidInput` error.
    /// Any other prompt gets either a table response or [`FALLBACK_RESPONSE`].
    pub fn answer(&self, prompt: Option<&str>) -> Result<&'static str, AppError> {
        let prompt = match prompt {
            Some(p) if !is_blank(p) => p,
            _ => return Err(AppError::empty_prompt()),
        };

        Ok(self.lookup(prompt).unwrap_or(FALLBACK_RESPONSE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> KeywordTable {
        KeywordTable::builtin()
    }

    #[test]
    fn test_builtin_order() {
        let keywords: Vec<&str> = table().entries().iter().map(|e| e.keyword).collect();
        assert_eq!(keywords, vec!["headache", "fever", "cold"]);
    }

    #[test]
    fn test_literal_headache() {
        let answer = table().answer(Some("I have a headache")).unwrap();
        assert_eq!(answer, HEADACHE_RESPONSE);
        assert!(answer.starts_with("Headaches can have many causes."));
    }

    #[test]
    fn test_fallback_for_unmatched_prompt() {
        let answer = table().answer(Some("I feel dizzy")).unwrap();
        assert_eq!(answer, FALLBACK_RESPONSE);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(table().answer(Some("HEADACHE now")).unwrap(), HEADACHE_RESPONSE);
        assert_eq!(table().answer(Some("FeVeR since monday")).unwrap(), FEVER_RESPONSE);
    }

    #[test]
    fn test_substring_not_word_match() {
        assert_eq!(table().answer(Some("the coldness in my hands")).unwrap(), COLD_RESPONSE);
        assert_eq!(table().answer(Some("headaches every day")).unwrap(), HEADACHE_RESPONSE);
    }

    #[test]
    fn test_first_declared_wins() {
        // "fever" precedes "cold" regardless of where each sits in the prompt
        assert_eq!(table().answer(Some("a cold and a fever")).unwrap(), FEVER_RESPONSE);
        assert_eq!(table().answer(Some("fever then cold")).unwrap(), FEVER_RESPONSE);
        assert_eq!(
            table().answer(Some("cold, fever and a headache")).unwrap(),
            HEADACHE_RESPONSE
        );
    }

    #[test]
    fn test_empty_prompt_rejected() {
        for prompt in [
            None,
            Some(""),
            Some(" "),
            Some("\t\n  "),
            Some("\u{3000}"),
            Some("\u{1f}\u{1c}"),
            Some("\u{1d} \u{1e}"),
        ] {
            let err = table().answer(prompt).unwrap_err();
            assert_eq!(err.to_string(), "Prompt cannot be empty");
        }
    }

    #[test]
    fn test_separator_padded_prompt_accepted() {
        assert_eq!(table().answer(Some("\u{1f}fever\u{1c}")).unwrap(), FEVER_RESPONSE);
    }

    #[test]
    fn test_padded_prompt_accepted() {
        assert_eq!(table().answer(Some("  fever  ")).unwrap(), FEVER_RESPONSE);
    }

    #[test]
    fn test_nonsense_prompt_gets_fallback() {
        for prompt in ["?", "1234", "asdf qwer", "🙂"] {
            assert_eq!(table().answer(Some(prompt)).unwrap(), FALLBACK_RESPONSE);
        }
    }

    #[test]
    fn test_idempotent() {
        let first = table().answer(Some("I caught a cold")).unwrap();
        let second = table().answer(Some("I caught a cold")).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_custom_table_order() {
        static ENTRIES: [KeywordEntry; 2] = [
            KeywordEntry {
                keyword: "cold",
                response: "cold first",
            },
            KeywordEntry {
                keyword: "fever",
                response: "fever second",
            },
        ];
        let table = KeywordTable::new(&ENTRIES);
        assert_eq!(table.lookup("fever and cold"), Some("cold first"));
        assert_eq!(table.lookup("nothing"), None);
    }

    #[test]
    fn test_responses_preserve_text() {
        assert!(FEVER_RESPONSE.contains("Temperature above 103°F (39.4°C)"));
        assert!(COLD_RESPONSE.ends_with("Contact a doctor if symptoms worsen or persist."));
        assert!(FALLBACK_RESPONSE.contains(
            "⚠️ Remember: This is for informational purposes only. Always consult"
        ));
    }
}
