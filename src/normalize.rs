//! Unicode-aware text cleaning and character classification.
//!
//! Operates on Unicode scalar values, never on bytes. Case folding comes
//! from `str::to_lowercase`; accent stripping is NFD decomposition with
//! combining marks dropped (`unicode-normalization`).

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Cleans raw text and normalizes individual words according to its flags.
///
/// # Examples
///
/// ```
/// use palabra::TextNormalizer;
///
/// let normalizer = TextNormalizer::new(true, true);
/// assert_eq!(normalizer.clean("a\tb\u{200b}c"), "a bc");
/// assert_eq!(normalizer.normalize_word("Caf\u{00e9}"), "cafe");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextNormalizer {
    /// Fold case in `normalize_word`.
    do_lower_case: bool,
    /// Strip combining marks in `normalize_word` (only with lowercasing).
    strip_accents: bool,
}

impl TextNormalizer {
    /// Create a normalizer with explicit flags.
    #[must_use]
    pub fn new(do_lower_case: bool, strip_accents: bool) -> Self {
        Self {
            do_lower_case,
            strip_accents,
        }
    }

    /// Replace every Unicode whitespace scalar with a single ASCII space
    /// and drop control characters without substitution. All other scalars
    /// pass through unchanged.
    #[must_use]
    pub fn clean(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        for cp in text.chars() {
            if cp == '\u{0}' || cp == '\u{fffd}' || is_control(cp) {
                continue;
            }
            if is_whitespace(cp) {
                output.push(' ');
            } else {
                output.push(cp);
            }
        }
        output
    }

    /// Per-word normalization: case folding and accent stripping as
    /// configured. Accents are stripped only when lowercasing is on,
    /// matching the BERT reference tokenizer.
    #[must_use]
    pub fn normalize_word(&self, word: &str) -> String {
        if !self.do_lower_case {
            return word.to_string();
        }
        let lowered = word.to_lowercase();
        if self.strip_accents {
            Self::strip_accents(&lowered)
        } else {
            lowered
        }
    }

    /// Decompose precomposed characters (NFD) and remove combining marks.
    #[must_use]
    pub fn strip_accents(text: &str) -> String {
        text.nfd().filter(|c| !is_combining_mark(*c)).collect()
    }
}

/// Full Unicode whitespace property (space, tab, newline, carriage return,
/// and the other separator categories).
#[must_use]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Control and format characters that `TextNormalizer::clean` drops.
///
/// Covers the C0/C1 control blocks plus the zero-width and bidi format
/// characters. Tab, newline and carriage return count as whitespace, not
/// control.
#[must_use]
pub fn is_control(c: char) -> bool {
    if c == '\t' || c == '\n' || c == '\r' {
        return false;
    }
    if c.is_control() {
        return true;
    }
    // Common format characters (category Cf): soft hyphen, zero-width
    // spaces and joiners, bidi marks and embeddings, word joiner,
    // invisible operators, interlinear annotation, BOM.
    matches!(c,
        '\u{00ad}'
        | '\u{200b}'..='\u{200f}'
        | '\u{202a}'..='\u{202e}'
        | '\u{2060}'..='\u{2064}'
        | '\u{206a}'..='\u{206f}'
        | '\u{feff}'
        | '\u{fff9}'..='\u{fffb}')
}

/// Punctuation and symbol classification used for word splitting.
///
/// ASCII punctuation and symbol ranges, plus the non-ASCII punctuation and
/// symbol blocks that matter for mixed-script input: CJK and fullwidth
/// punctuation must split words the same way their ASCII counterparts do.
#[must_use]
pub fn is_punctuation(c: char) -> bool {
    let cp = c as u32;
    // ASCII: ! " # $ % & ' ( ) * + , - . /  : ; < = > ? @  [ \ ] ^ _ `  { | } ~
    if (0x21..=0x2f).contains(&cp)
        || (0x3a..=0x40).contains(&cp)
        || (0x5b..=0x60).contains(&cp)
        || (0x7b..=0x7e).contains(&cp)
    {
        return true;
    }
    if c.is_ascii() {
        return false;
    }

    matches!(cp,
        0x00a1..=0x00bf                     // Latin-1 punctuation and signs
        | 0x00d7 | 0x00f7                   // multiplication / division sign
        | 0x2010..=0x2027                   // dashes, quotes, daggers, ellipsis
        | 0x2030..=0x205e                   // per mille .. general punctuation tail
        | 0x20a0..=0x20cf                   // currency symbols
        | 0x2190..=0x2bff                   // arrows, mathematical and misc symbols
        | 0x2e00..=0x2e7f                   // supplemental punctuation
        | 0x3001..=0x303f                   // CJK symbols and punctuation
        | 0xfe10..=0xfe1f                   // vertical forms
        | 0xfe30..=0xfe4f                   // CJK compatibility forms
        | 0xfe50..=0xfe6f                   // small form variants
        | 0xff01..=0xff0f                   // fullwidth punctuation
        | 0xff1a..=0xff20
        | 0xff3b..=0xff40
        | 0xff5b..=0xff65)
}
