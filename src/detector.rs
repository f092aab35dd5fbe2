//! Language identification over whole documents.
//!
//! `LanguageIdentifier` is the classifier boundary: text in, ranked
//! per-language results out. `WhatlangIdentifier` implements it on top of the
//! `whatlang` trigram detector by classifying the document span by span and
//! aggregating by letter bytes.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;
use whatlang::{Detector, Script};

/// Default lower bound on span size handed to the detector, in bytes.
pub const DEFAULT_MIN_NUM_BYTES: usize = 0;

/// Default upper bound on span size handed to the detector, in bytes.
pub const DEFAULT_MAX_NUM_BYTES: usize = 1000;

/// Default number of ranked results requested per document.
pub const DEFAULT_MAX_RESULTS: usize = 1000;

/// Code reported for text that could not be attributed to any language.
pub const UNDETERMINED: &str = "und";

/// A language counts as reliable when at least this share of its bytes came
/// from reliable span detections.
const RELIABLE_SHARE_THRESHOLD: f64 = 0.75;

/// Languages with a separate catalog code when written in Latin script.
const LATIN_VARIANTS: &[&str] = &["bg", "el", "hi", "ja", "ru", "zh"];

/// One classifier output row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult {
    pub language_code: String,
    pub probability: f64,
    pub is_reliable: bool,
    pub proportion: f64,
}

impl DetectionResult {
    pub fn new(
        language_code: impl Into<String>,
        probability: f64,
        is_reliable: bool,
        proportion: f64,
    ) -> Self {
        Self {
            language_code: language_code.into(),
            probability,
            is_reliable,
            proportion,
        }
    }
}

/// A classifier that ranks the languages found in a document.
pub trait LanguageIdentifier {
    /// Return at most `max_results` languages ordered by descending
    /// proportion. Proportions sum to at most 1.0.
    fn find_top_languages(&self, text: &str, max_results: usize) -> Vec<DetectionResult>;
}

/// `whatlang`-backed identifier.
pub struct WhatlangIdentifier {
    detector: Detector,
    min_num_bytes: usize,
    max_num_bytes: usize,
}

impl WhatlangIdentifier {
    pub fn new(min_num_bytes: usize, max_num_bytes: usize) -> Self {
        tracing::info!(
            min_num_bytes,
            max_num_bytes,
            "Initializing whatlang language identifier"
        );
        Self {
            detector: Detector::new(),
            min_num_bytes,
            max_num_bytes,
        }
    }

    /// Classify one span, returning (code, confidence, reliable).
    ///
    /// Spans shorter than `min_num_bytes` raw UTF-8 bytes, whitespace and
    /// punctuation included, are not classified.
    fn classify_span(&self, span: &str) -> (String, f64, bool) {
        if span.len() < self.min_num_bytes {
            return (UNDETERMINED.to_string(), 0.0, false);
        }

        let sample = truncate_to_char_boundary(span, self.max_num_bytes);
        match self.detector.detect(sample) {
            Some(info) => {
                let code = catalog_code(info.lang().code(), info.script());
                (code, info.confidence(), info.is_reliable())
            }
            None => (UNDETERMINED.to_string(), 0.0, false),
        }
    }
}

impl Default for WhatlangIdentifier {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_NUM_BYTES, DEFAULT_MAX_NUM_BYTES)
    }
}

#[derive(Default)]
struct LanguageTally {
    bytes: usize,
    reliable_bytes: usize,
    weighted_confidence: f64,
}

impl LanguageIdentifier for WhatlangIdentifier {
    fn find_top_languages(&self, text: &str, max_results: usize) -> Vec<DetectionResult> {
        let mut tallies: HashMap<String, LanguageTally> = HashMap::new();
        let mut total_bytes = 0usize;

        for span in segment(text, self.max_num_bytes) {
            let letter_bytes = count_letter_bytes(span);
            if letter_bytes == 0 {
                continue;
            }

            let (code, confidence, reliable) = self.classify_span(span);
            debug!(%code, confidence, reliable, letter_bytes, "Classified span");

            let tally = tallies.entry(code).or_default();
            tally.bytes += letter_bytes;
            tally.weighted_confidence += confidence * letter_bytes as f64;
            if reliable {
                tally.reliable_bytes += letter_bytes;
            }
            total_bytes += letter_bytes;
        }

        if total_bytes == 0 {
            return Vec::new();
        }

        let mut results: Vec<DetectionResult> = tallies
            .into_iter()
            .map(|(code, tally)| {
                let bytes = tally.bytes as f64;
                DetectionResult {
                    language_code: code,
                    probability: tally.weighted_confidence / bytes,
                    is_reliable: tally.reliable_bytes as f64 / bytes >= RELIABLE_SHARE_THRESHOLD,
                    proportion: bytes / total_bytes as f64,
                }
            })
            .collect();

        results.sort_by(|a, b| {
            b.proportion
                .total_cmp(&a.proportion)
                .then(b.probability.total_cmp(&a.probability))
                .then_with(|| a.language_code.cmp(&b.language_code))
        });
        results.truncate(max_results);
        results
    }
}

/// Map a whatlang ISO 639-3 code onto the catalog's code set.
///
/// Codes without a counterpart are returned unchanged so that the catalog
/// lookup reports them.
pub fn catalog_code(iso639_3: &str, script: Script) -> String {
    let base = match iso639_3 {
        "afr" => "af",
        "aka" => "ak",
        "amh" => "am",
        "ara" => "ar",
        "aze" => "az",
        "bel" => "be",
        "ben" => "bn",
        "bul" => "bg",
        "cat" => "ca",
        "ces" => "cs",
        "cmn" => "zh",
        "dan" => "da",
        "deu" => "de",
        "ell" => "el",
        "eng" => "en",
        "epo" => "eo",
        "est" => "et",
        "fin" => "fi",
        "fra" => "fr",
        "guj" => "gu",
        "heb" => "iw",
        "hin" => "hi",
        "hrv" => "hr",
        "hun" => "hu",
        "hye" => "hy",
        "ind" => "id",
        "ita" => "it",
        "jav" => "jv",
        "jpn" => "ja",
        "kan" => "kn",
        "kat" => "ka",
        "khm" => "km",
        "kor" => "ko",
        "lat" => "la",
        "lav" => "lv",
        "lit" => "lt",
        "mal" => "ml",
        "mar" => "mr",
        "mkd" => "mk",
        "mya" => "my",
        "nep" => "ne",
        "nld" => "nl",
        "nob" => "no",
        "ori" => "or",
        "pan" => "pa",
        "pes" => "fa",
        "pol" => "pl",
        "por" => "pt",
        "ron" => "ro",
        "rus" => "ru",
        "sin" => "si",
        "slk" => "sk",
        "slv" => "sl",
        "sna" => "sn",
        "spa" => "es",
        "srp" => "sr",
        "swe" => "sv",
        "tam" => "ta",
        "tel" => "te",
        "tgl" => "fil",
        "tha" => "th",
        "tuk" => "tk",
        "tur" => "tr",
        "ukr" => "uk",
        "urd" => "ur",
        "uzb" => "uz",
        "vie" => "vi",
        "yid" => "yi",
        "zul" => "zu",
        other => return other.to_string(),
    };

    if script == Script::Latin && LATIN_VARIANTS.contains(&base) {
        format!("{base}-Latn")
    } else {
        base.to_string()
    }
}

/// Split text into classification spans.
///
/// A span is cut wherever the script of the letters changes. Consecutive
/// lines in the same script stay together until the span reaches
/// `max_bytes`, after which it is closed at the last line break seen. A
/// single line longer than `max_bytes` is never split.
pub fn segment(text: &str, max_bytes: usize) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut last_break: Option<usize> = None;
    let mut current: Option<Script> = None;

    for (idx, ch) in text.char_indices() {
        if ch == '\n' {
            last_break = Some(idx);
            continue;
        }

        if idx - start >= max_bytes {
            if let Some(brk) = last_break.filter(|&brk| brk > start) {
                spans.push(&text[start..brk]);
                start = brk;
            }
        }

        if !ch.is_alphabetic() {
            continue;
        }
        let Some(script) = script_group(ch) else {
            continue;
        };
        match current {
            Some(prev) if prev != script => {
                spans.push(&text[start..idx]);
                start = idx;
                current = Some(script);
            }
            Some(_) => {}
            None => current = Some(script),
        }
    }
    spans.push(&text[start..]);

    spans
        .into_iter()
        .map(str::trim)
        .filter(|span| !span.is_empty())
        .collect()
}

/// Script of a single letter, with the Japanese kana folded into Han so that
/// mixed Japanese text stays in one span.
fn script_group(ch: char) -> Option<Script> {
    let mut buf = [0u8; 4];
    match whatlang::detect_script(ch.encode_utf8(&mut buf))? {
        Script::Hiragana | Script::Katakana => Some(Script::Mandarin),
        script => Some(script),
    }
}

fn letters_regex() -> &'static Regex {
    static LETTERS: OnceLock<Regex> = OnceLock::new();
    LETTERS.get_or_init(|| Regex::new(r"[\p{L}\p{M}]+").expect("letter pattern is valid"))
}

/// Bytes of the span that belong to letters (marks included).
pub fn count_letter_bytes(span: &str) -> usize {
    letters_regex().find_iter(span).map(|m| m.len()).sum()
}

fn truncate_to_char_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
