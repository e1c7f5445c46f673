/*!
 * Part-of-speech label dictionary.
 *
 * Maps a language code and a short POS code (as used by the WordNet
 * lexicons, e.g. "n" or "s") to a long category name and a description.
 * The built-in tables cover Latvian and English; additional tables can be
 * loaded from JSON in the same `{ lang: { code: { long, desc } } }` shape
 * the front-end uses.
 */

use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::PosTagError;
use crate::language_utils;

/// A single POS code with its human readable name and explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosEntry {
    pub code: String,
    pub long: String,
    pub desc: String,
}

impl PosEntry {
    pub fn new(code: impl Into<String>, long: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            long: long.into(),
            desc: desc.into(),
        }
    }
}

/// Entry body as it appears in the JSON file, keyed by its code
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    long: String,
    desc: String,
}

/// All POS entries of one language, in authored order.
/// Codes are unique within a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    language: String,
    entries: Vec<PosEntry>,
}

impl LanguageTable {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            entries: Vec::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Add an entry, replacing an existing one with the same code in place.
    /// Returns the replaced entry.
    pub fn insert(&mut self, entry: PosEntry) -> Option<PosEntry> {
        match self.entries.iter_mut().find(|e| e.code == entry.code) {
            Some(existing) => Some(std::mem::replace(existing, entry)),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn get(&self, code: &str) -> Option<&PosEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    pub fn entries(&self) -> &[PosEntry] {
        &self.entries
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn validate(&self) -> Result<(), PosTagError> {
        if self.language.trim().is_empty() {
            return Err(PosTagError::EmptyLanguage);
        }

        for entry in &self.entries {
            if entry.code.trim().is_empty() {
                return Err(PosTagError::EmptyCode {
                    language: self.language.clone(),
                });
            }
            for (field, value) in [("long", &entry.long), ("desc", &entry.desc)] {
                if value.trim().is_empty() {
                    return Err(PosTagError::EmptyField {
                        language: self.language.clone(),
                        code: entry.code.clone(),
                        field,
                    });
                }
            }
        }

        Ok(())
    }
}

/// POS tables for every known language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PosTags {
    tables: Vec<LanguageTable>,
}

static BUILTIN: Lazy<PosTags> = Lazy::new(|| {
    let tags = PosTags::from_tables(vec![latvian(), english()]);
    debug!("Built-in POS tables ready: {}", tags.languages().collect::<Vec<_>>().join(", "));
    tags
});

fn latvian() -> LanguageTable {
    let mut table = LanguageTable::new("lv");
    for (code, long, desc) in [
        ("p", "pronoun", "Persons or things standing in for nouns (e.g., es, tu – I, you)."),
        ("n", "noun", "Names of people, places, objects, concepts."),
        ("u", "NULL/unknown", "No clearly defined single POS; used for entries without a specific POS."),
        ("v", "verb", "Action or state words (infinitive, finite, participle forms)."),
        ("x", "other", "Residual categories: conjunctions, particles, interjections, residual extras."),
        ("a", "adjective", "Describing words (qualitative or relative: large, red, similar)."),
        ("r", "adverb", "Modifiers of verbs, adjectives, or other adverbs (e.g., ātri – quickly)."),
    ] {
        table.insert(PosEntry::new(code, long, desc));
    }
    table
}

fn english() -> LanguageTable {
    let mut table = LanguageTable::new("en");
    for (code, long, desc) in [
        ("n", "noun", "Entities: persons, places, things, or concepts."),
        ("v", "verb", "Denotes actions, occurrences, or states."),
        ("a", "adjective", "Descriptive words modifying nouns."),
        ("s", "adj satellite", "A type of adjective closely linked to a head adjective (e.g., \"afraid\" with \"fearful\")."),
        ("r", "adverb", "Modifies verbs, adjectives, or other adverbs."),
    ] {
        table.insert(PosEntry::new(code, long, desc));
    }
    table
}

impl PosTags {
    /// The Latvian and English tables shipped with the crate
    pub fn builtin() -> &'static PosTags {
        &BUILTIN
    }

    fn from_tables(tables: Vec<LanguageTable>) -> Self {
        let mut tags = Self::default();
        for table in tables {
            tags.insert_table(table);
        }
        tags
    }

    fn insert_table(&mut self, table: LanguageTable) {
        match self.tables.iter_mut().find(|t| t.language == table.language) {
            Some(existing) => {
                for entry in table.entries {
                    existing.insert(entry);
                }
            }
            None => self.tables.push(table),
        }
    }

    /// Parse tables from JSON shaped as `{ lang: { code: { long, desc } } }`.
    /// Keys are stored in lookup form: trimmed, lowercase, and language
    /// keys mapped to ISO 639-1 where one exists ("LAV" is stored as "lv").
    pub fn from_json_str(json: &str) -> Result<Self, PosTagError> {
        let root: Map<String, Value> = serde_json::from_str(json)?;
        let mut tags = Self::default();

        for (language, codes) in root {
            let codes: Map<String, Value> = serde_json::from_value(codes)?;
            let mut table = LanguageTable::new(language_key(&language));
            for (code, body) in codes {
                let raw: RawEntry = serde_json::from_value(body)?;
                table.insert(PosEntry::new(code.trim().to_lowercase(), raw.long, raw.desc));
            }
            table.validate()?;
            tags.insert_table(table);
        }

        debug!("Parsed POS tables for {} language(s)", tags.tables.len());
        Ok(tags)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, PosTagError> {
        let json = std::fs::read_to_string(path)?;
        let tags = Self::from_json_str(&json)?;
        debug!("Loaded POS tables from {:?}", path);
        Ok(tags)
    }

    /// Serialize back into the front-end JSON shape
    pub fn to_json_value(&self) -> Value {
        let mut root = Map::new();
        for table in &self.tables {
            let mut codes = Map::new();
            for entry in &table.entries {
                codes.insert(
                    entry.code.clone(),
                    serde_json::json!({ "long": entry.long, "desc": entry.desc }),
                );
            }
            root.insert(table.language.clone(), Value::Object(codes));
        }
        Value::Object(root)
    }

    /// Extend with the tables in `other`. Entries with an existing code
    /// replace the current entry; new languages are appended.
    pub fn merge(&mut self, other: PosTags) {
        for table in other.tables {
            self.insert_table(table);
        }
    }

    pub fn language(&self, language: &str) -> Option<&LanguageTable> {
        self.tables.iter().find(|t| t.language == language)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.language.as_str())
    }

    /// Exact-key lookup. `None` when the language or the code is unknown.
    pub fn lookup(&self, language: &str, code: &str) -> Option<&PosEntry> {
        self.language(language)?.get(code)
    }

    /// Lookup that tolerates case, surrounding whitespace and ISO 639-2
    /// language codes ("LAV", "eng").
    pub fn lookup_normalized(&self, language: &str, code: &str) -> Option<&PosEntry> {
        self.lookup(&language_key(language), &code.trim().to_lowercase())
    }

    /// Table for a language given in any supported code form
    pub fn language_normalized(&self, language: &str) -> Option<&LanguageTable> {
        self.language(&language_key(language))
    }
}

fn language_key(language: &str) -> String {
    language_utils::normalize_to_part1_or_part2t(language)
        .unwrap_or_else(|_| language.trim().to_lowercase())
}

/// Lookup in the built-in tables
pub fn lookup(language: &str, code: &str) -> Option<&'static PosEntry> {
    PosTags::builtin().lookup(language, code)
}
