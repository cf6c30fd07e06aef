//! Chinese script conversion
//!
//! Every source line passes through a [`TextConverter`] before it is
//! classified. The production converter is [`ChineseConverter`], which runs
//! the built-in `zhconv` tables for a target [`Variant`] and then an optional
//! user phrase dictionary. [`Passthrough`] leaves text untouched.
//!
//! The `zh-cn` target approximates OpenCC `tw2sp`: characters convert fully,
//! but regional IT vocabulary is only partly adapted (`程式碼` becomes
//! `程式码`, not `代码`; `記憶體` becomes `记忆体`, not `内存`). A phrase
//! dictionary fills those gaps, e.g. `程式码<TAB>代码`.
//!
//! A converter is built once at startup and handed to the outliner by
//! reference. Building is the only fallible step: once a converter exists,
//! `convert` cannot fail.

use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Error that can occur while building a converter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The phrase dictionary could not be read
    Io(String),
    /// A dictionary line is not a `source<TAB>target` pair
    MalformedEntry { line: usize, content: String },
    /// The dictionary holds no entries at all
    EmptyDictionary(String),
    /// The dictionary keys could not be compiled into a matcher
    InvalidPattern(String),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::Io(msg) => write!(f, "Cannot load conversion table: {}", msg),
            ConversionError::MalformedEntry { line, content } => {
                write!(f, "Malformed dictionary entry at line {}: '{}'", line, content)
            }
            ConversionError::EmptyDictionary(path) => {
                write!(f, "Conversion dictionary '{}' has no entries", path)
            }
            ConversionError::InvalidPattern(msg) => {
                write!(f, "Cannot compile conversion dictionary: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// Normalizes one line of text.
pub trait TextConverter {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Convert a single line
    fn convert(&self, text: &str) -> String;
}

/// Target script variant for the built-in tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Mainland simplified, with regional phrase adaptation.
    #[default]
    ZhCn,
    /// Simplified characters only.
    ZhHans,
    /// Taiwan traditional, with regional phrase adaptation.
    ZhTw,
    /// Traditional characters only.
    ZhHant,
    /// Hong Kong traditional.
    ZhHk,
    /// No conversion.
    #[serde(rename = "none")]
    Disabled,
}

impl Variant {
    pub const ALL: &'static [Variant] = &[
        Variant::ZhCn,
        Variant::ZhHans,
        Variant::ZhTw,
        Variant::ZhHant,
        Variant::ZhHk,
        Variant::Disabled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::ZhCn => "zh-cn",
            Variant::ZhHans => "zh-hans",
            Variant::ZhTw => "zh-tw",
            Variant::ZhHant => "zh-hant",
            Variant::ZhHk => "zh-hk",
            Variant::Disabled => "none",
        }
    }

    /// Parse a variant name, case-insensitively.
    pub fn parse(name: &str) -> Option<Variant> {
        let name = name.trim().to_ascii_lowercase();
        Variant::ALL.iter().copied().find(|v| v.as_str() == name)
    }

    fn table(self) -> Option<zhconv::Variant> {
        match self {
            Variant::ZhCn => Some(zhconv::Variant::ZhCN),
            Variant::ZhHans => Some(zhconv::Variant::ZhHans),
            Variant::ZhTw => Some(zhconv::Variant::ZhTW),
            Variant::ZhHant => Some(zhconv::Variant::ZhHant),
            Variant::ZhHk => Some(zhconv::Variant::ZhHK),
            Variant::Disabled => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl TextConverter for Passthrough {
    fn name(&self) -> &str {
        "none"
    }

    fn convert(&self, text: &str) -> String {
        text.to_string()
    }
}

/// User phrase table applied after the built-in conversion.
///
/// At each position the longest matching source phrase wins.
#[derive(Debug, Clone)]
pub struct PhraseDictionary {
    pattern: Regex,
    replacements: HashMap<String, String>,
}

impl PhraseDictionary {
    /// Load a dictionary file: one `source<TAB>target` pair per line, `#`
    /// comments and blank lines ignored.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConversionError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| ConversionError::Io(format!("{}: {}", path.display(), e)))?;
        Self::parse(&text).map_err(|e| match e {
            ConversionError::EmptyDictionary(_) => {
                ConversionError::EmptyDictionary(path.display().to_string())
            }
            other => other,
        })
    }

    /// Parse dictionary text.
    pub fn parse(text: &str) -> Result<Self, ConversionError> {
        let mut replacements = HashMap::new();

        for (idx, raw) in text.lines().enumerate() {
            let entry = raw.trim_end_matches('\r');
            if entry.trim().is_empty() || entry.trim_start().starts_with('#') {
                continue;
            }
            let (source, target) = entry
                .split_once('\t')
                .filter(|(source, _)| !source.is_empty())
                .ok_or_else(|| ConversionError::MalformedEntry {
                    line: idx + 1,
                    content: entry.to_string(),
                })?;
            // OpenCC lists alternatives separated by spaces; the first one wins.
            let target = target.split(' ').next().unwrap_or_default();
            replacements.insert(source.to_string(), target.to_string());
        }

        if replacements.is_empty() {
            return Err(ConversionError::EmptyDictionary("<inline>".to_string()));
        }

        let mut keys: Vec<&String> = replacements.keys().collect();
        // Alternation is leftmost-first, so longer phrases must come first.
        keys.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        let alternation = keys
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&alternation)
            .map_err(|e| ConversionError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            pattern,
            replacements,
        })
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &regex::Captures<'_>| {
                self.replacements
                    .get(&caps[0])
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

/// Converter backed by the built-in `zhconv` tables plus optional phrases.
#[derive(Debug, Clone)]
pub struct ChineseConverter {
    variant: Variant,
    phrases: Option<PhraseDictionary>,
}

impl ChineseConverter {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            phrases: None,
        }
    }

    /// Layer a phrase dictionary over the built-in tables.
    pub fn with_phrases(mut self, phrases: PhraseDictionary) -> Self {
        self.phrases = Some(phrases);
        self
    }
}

impl TextConverter for ChineseConverter {
    fn name(&self) -> &str {
        self.variant.as_str()
    }

    fn convert(&self, text: &str) -> String {
        let converted = match self.variant.table() {
            Some(table) => zhconv::zhconv(text, table),
            None => text.to_string(),
        };
        match &self.phrases {
            Some(phrases) => phrases.apply(&converted),
            None => converted,
        }
    }
}

/// Build the converter for a variant and optional dictionary path.
///
/// This is the startup step that may abort the run: a missing or malformed
/// dictionary is reported before any output is written.
pub fn build_converter(
    variant: Variant,
    dictionary: Option<&Path>,
) -> Result<Box<dyn TextConverter>, ConversionError> {
    let phrases = dictionary.map(PhraseDictionary::from_path).transpose()?;

    if variant == Variant::Disabled && phrases.is_none() {
        tracing::info!("text conversion disabled");
        return Ok(Box::new(Passthrough));
    }

    let mut converter = ChineseConverter::new(variant);
    if let Some(phrases) = phrases {
        tracing::info!(entries = phrases.len(), "loaded phrase dictionary");
        converter = converter.with_phrases(phrases);
    }
    tracing::info!(variant = %variant, "text converter ready");
    Ok(Box::new(converter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_passthrough_is_identity() {
        assert_eq!(Passthrough.convert("載入時區"), "載入時區");
        assert_eq!(Passthrough.name(), "none");
    }

    #[test]
    fn test_traditional_to_simplified() {
        let converter = ChineseConverter::new(Variant::ZhHans);
        assert_eq!(converter.convert("//Elapsed: 時間轉換"), "//Elapsed: 时间转换");
    }

    #[test]
    fn test_mainland_target_simplifies() {
        let converter = ChineseConverter::new(Variant::ZhCn);
        assert_eq!(converter.convert("時間"), "时间");
    }

    #[test]
    fn test_ascii_is_untouched() {
        let converter = ChineseConverter::new(Variant::ZhCn);
        let line = "func TimeZone(defaultZone int) (*time.Location, error) {";
        assert_eq!(converter.convert(line), line);
    }

    #[test]
    fn test_variant_none_keeps_text() {
        let converter = ChineseConverter::new(Variant::Disabled);
        assert_eq!(converter.convert("載入時區"), "載入時區");
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!(Variant::parse("zh-cn"), Some(Variant::ZhCn));
        assert_eq!(Variant::parse("ZH-TW"), Some(Variant::ZhTw));
        assert_eq!(Variant::parse(" none "), Some(Variant::Disabled));
        assert_eq!(Variant::parse("tw2sp"), None);
        assert_eq!(Variant::default(), Variant::ZhCn);
    }

    #[test]
    fn test_dictionary_longest_match_wins() {
        let dict = PhraseDictionary::parse("字\tX\n字串\t字符串\n# comment\n\n").unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.apply("時間字串與字"), "時間字符串與X");
    }

    #[test]
    fn test_dictionary_first_alternative_wins() {
        let dict = PhraseDictionary::parse("程式\t程序 程式\n").unwrap();
        assert_eq!(dict.apply("程式碼"), "程序碼");
    }

    #[test]
    fn test_dictionary_escapes_metacharacters() {
        let dict = PhraseDictionary::parse("a.b\tok\n").unwrap();
        assert_eq!(dict.apply("a.b axb"), "ok axb");
    }

    #[test]
    fn test_dictionary_malformed_entry() {
        let err = PhraseDictionary::parse("好\t好\nno tab here\n").unwrap_err();
        assert_eq!(
            err,
            ConversionError::MalformedEntry {
                line: 2,
                content: "no tab here".to_string()
            }
        );
    }

    #[test]
    fn test_dictionary_empty() {
        let err = PhraseDictionary::parse("# only comments\n").unwrap_err();
        assert!(matches!(err, ConversionError::EmptyDictionary(_)));
    }

    #[test]
    fn test_dictionary_applied_after_tables() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "时区\t时区(TZ)").unwrap();

        let converter = build_converter(Variant::ZhCn, Some(file.path())).unwrap();
        assert_eq!(converter.convert("時區"), "时区(TZ)");
    }

    #[test]
    fn test_dictionary_fills_regional_vocabulary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "程式码\t代码").unwrap();

        let converter = build_converter(Variant::ZhCn, Some(file.path())).unwrap();
        assert_eq!(converter.convert("程式碼"), "代码");
    }

    #[test]
    fn test_missing_dictionary_fails_to_build() {
        let err = build_converter(Variant::ZhCn, Some(Path::new("/nonexistent/phrases.txt")))
            .err()
            .unwrap();
        assert!(matches!(err, ConversionError::Io(_)));
        assert!(err.to_string().starts_with("Cannot load conversion table"));
    }

    #[test]
    fn test_disabled_conversion_builds_passthrough() {
        let converter = build_converter(Variant::Disabled, None).unwrap();
        assert_eq!(converter.name(), "none");
    }
}
