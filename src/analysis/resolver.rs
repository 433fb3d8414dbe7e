//! Language resolution.
//!
//! Scores every supported language by its weighted per-line signals and
//! reconciles the winner with the caller's hint. The hint wins ties and is
//! returned verbatim when no language clears the confidence floor.

use crate::languages::{profile, Language};

/// Default minimum score a language needs before it can override the hint.
pub const DEFAULT_MIN_CONFIDENCE: u32 = 4;

/// Outcome of resolving a snippet's language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub language: Language,
    pub hint: Language,
    /// Score per language, in [`Language::ALL`] order.
    pub scores: Vec<(Language, u32)>,
}

impl Resolution {
    /// Whether detection disagreed with the hint.
    pub fn overrides_hint(&self) -> bool {
        self.language != self.hint
    }

    pub fn score_of(&self, language: Language) -> u32 {
        self.scores
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, score)| *score)
            .unwrap_or(0)
    }
}

/// Resolve the language of `code`, using the default confidence floor.
pub fn resolve(code: &str, hint: Language) -> Language {
    resolve_with(code, hint, DEFAULT_MIN_CONFIDENCE).language
}

/// Resolve the language of `code` and report every candidate's score.
pub fn resolve_with(code: &str, hint: Language, min_confidence: u32) -> Resolution {
    let scores: Vec<(Language, u32)> = Language::ALL
        .iter()
        .map(|&lang| (lang, score(code, lang)))
        .collect();

    let best = scores.iter().map(|(_, s)| *s).max().unwrap_or(0);

    let language = if best < min_confidence {
        hint
    } else if scores.iter().any(|(lang, s)| *lang == hint && *s == best) {
        hint
    } else {
        scores
            .iter()
            .find(|(_, s)| *s == best)
            .map(|(lang, _)| *lang)
            .unwrap_or(hint)
    };

    tracing::debug!(
        hint = %hint,
        detected = %language,
        best,
        ?scores,
        "resolved language"
    );

    Resolution {
        language,
        hint,
        scores,
    }
}

/// Sum of signal weights over every line each signal matches.
fn score(code: &str, language: Language) -> u32 {
    let signals = &profile(language).signals;
    code.lines()
        .map(|line| {
            signals
                .iter()
                .filter(|signal| signal.regex.is_match(line))
                .map(|signal| signal.weight)
                .sum::<u32>()
        })
        .sum()
}
