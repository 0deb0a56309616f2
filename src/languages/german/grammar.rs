/*!
 * German validators and classifiers.
 *
 * Everything here is a pure function over already validated text: adjective
 * comparison checks, noun concreteness, verb action type, phrase category and
 * negation position. Domain models call these while building their search
 * contexts; none of them fail, they answer yes or no.
 */

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::languages::german::models::negation::NegationType;

static IRREGULAR_COMPARATIVES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            ("gut", "besser"),
            ("viel", "mehr"),
            ("gern", "lieber"),
            ("hoch", "höher"),
            ("nah", "näher"),
        ])
    });

static IRREGULAR_SUPERLATIVES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            ("gut", "am besten"),
            ("viel", "am meisten"),
            ("gern", "am liebsten"),
            ("hoch", "am höchsten"),
            ("nah", "am nächsten"),
        ])
    });

const UMLAUTS: [(char, char); 3] = [('a', 'ä'), ('o', 'ö'), ('u', 'ü')];

const ABSTRACT_SUFFIXES: [&str; 5] = ["heit", "keit", "ung", "ion", "schaft"];
const ABSTRACT_NOUNS: [&str; 7] = ["Liebe", "Angst", "Hoffnung", "Glaube", "Zeit", "Glück", "Mut"];
const CONCRETE_SUFFIXES: [&str; 2] = ["chen", "zeug"];

const CONCRETE_QUALITIES: &[&str] = &[
    "red", "blue", "green", "yellow", "black", "white", "brown", "gray", "big", "small", "tall",
    "short", "long", "wide", "narrow", "hot", "cold", "warm", "cool", "wet", "dry", "round",
    "square", "flat", "curved", "straight", "soft", "hard", "smooth", "rough", "sharp", "blunt",
];

/// Base form without a trailing "e", as comparison endings attach to it
fn comparison_base(word: &str) -> &str {
    word.trim_end_matches('e')
}

/// `stem` equals `base` directly or after umlauting a, o or u.
///
/// Both a single substituted vowel ("Kasse" style stems) and every occurrence
/// of that vowel are accepted.
fn matches_with_umlaut(base: &str, stem: &str) -> bool {
    if base == stem {
        return true;
    }
    UMLAUTS.iter().any(|&(plain, umlaut)| {
        if base.replace(plain, &umlaut.to_string()) == stem {
            return true;
        }
        base.char_indices().any(|(index, c)| {
            c == plain && {
                let mut candidate = String::with_capacity(base.len() + 1);
                candidate.push_str(&base[..index]);
                candidate.push(umlaut);
                candidate.push_str(&base[index + c.len_utf8()..]);
                candidate == stem
            }
        })
    })
}

/// Comparative is the irregular form, or base + "er" with optional umlaut
pub fn is_valid_comparative(word: &str, comparative: &str) -> bool {
    if let Some(expected) = IRREGULAR_COMPARATIVES.get(word) {
        return comparative == *expected;
    }
    match comparative.strip_suffix("er") {
        Some(stem) => matches_with_umlaut(comparison_base(word), stem),
        None => false,
    }
}

/// Superlative is empty, the irregular form, or "am " + base + "(e)sten"
pub fn is_valid_superlative(word: &str, superlative: &str) -> bool {
    if superlative.is_empty() {
        return true;
    }
    if let Some(expected) = IRREGULAR_SUPERLATIVES.get(word) {
        return superlative == *expected;
    }
    let Some(stem) = superlative
        .strip_prefix("am ")
        .and_then(|rest| rest.strip_suffix("sten"))
    else {
        return false;
    };
    let stem = stem.strip_suffix('e').unwrap_or(stem);
    matches_with_umlaut(comparison_base(word), stem)
}

/// English gloss names a physical, directly visible quality
pub fn is_concrete_quality(english: &str) -> bool {
    let english = english.trim().to_lowercase();
    CONCRETE_QUALITIES
        .iter()
        .any(|quality| english.contains(quality))
}

/// Whether a noun names something that can be photographed
pub fn is_concrete_noun(noun: &str) -> bool {
    let is_abstract = ABSTRACT_SUFFIXES.iter().any(|suffix| noun.ends_with(suffix))
        || ABSTRACT_NOUNS.contains(&noun);
    // Abstract suffix wins unless a concrete suffix also matches; unknown nouns are concrete
    !is_abstract || CONCRETE_SUFFIXES.iter().any(|suffix| noun.ends_with(suffix))
}

/// Broad semantic class of a verb, from its English gloss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbActionType {
    Motion,
    Work,
    Communication,
    State,
    Action,
}

const MOTION_VERBS: &[&str] = &[
    "go", "come", "walk", "run", "drive", "travel", "move", "leave", "arrive", "return", "follow",
    "lead", "jump", "climb", "fall",
];
const WORK_VERBS: &[&str] = &[
    "work", "study", "learn", "teach", "write", "read", "cook", "clean", "build", "make", "create",
    "fix", "help", "serve", "sell", "buy",
];
const COMMUNICATION_VERBS: &[&str] = &[
    "speak", "talk", "say", "tell", "ask", "answer", "call", "listen", "explain", "discuss",
    "argue", "agree", "disagree",
];
const STATE_VERBS: &[&str] = &[
    "be", "have", "feel", "think", "believe", "know", "understand", "remember", "forget", "hope",
    "want", "need", "like", "love", "hate",
];

/// Checked in this order; the first group sharing a word wins
const VERB_CONCEPTS: [(VerbActionType, &[&str]); 4] = [
    (VerbActionType::Motion, MOTION_VERBS),
    (VerbActionType::Work, WORK_VERBS),
    (VerbActionType::Communication, COMMUNICATION_VERBS),
    (VerbActionType::State, STATE_VERBS),
];

impl VerbActionType {
    /// First concept group sharing a word with the gloss, in priority order
    pub fn classify(english: &str) -> Self {
        let english = english.to_lowercase();
        let words: Vec<&str> = english.split_whitespace().collect();
        VERB_CONCEPTS
            .iter()
            .find(|(_, verbs)| words.iter().any(|word| verbs.contains(word)))
            .map(|(kind, _)| *kind)
            .unwrap_or(Self::Action)
    }

    pub fn visual_strategy(self) -> &'static str {
        match self {
            Self::Motion => {
                "Focus on movement and direction. Show people or objects in motion, \
                 emphasizing movement from one place to another."
            }
            Self::Work => {
                "Focus on people actively performing the task or activity. Show clear \
                 action shots with visible tools or environment."
            }
            Self::Communication => {
                "Focus on social interaction and communication. Show people engaged in \
                 conversation or expressing."
            }
            Self::State => {
                "Use contextual scenes that imply the mental or emotional state. Show \
                 situations where this feeling would be evident."
            }
            Self::Action => {
                "Focus on the physical action being performed. Show people actively \
                 engaged in the activity with clear visual demonstration of concept."
            }
        }
    }
}

const GREETING_MARKERS: [&str; 4] = ["guten", "hallo", "hi", "greeting"];
const FAREWELL_MARKERS: [&str; 5] = ["auf wiedersehen", "tschüss", "bis", "goodbye", "bye"];

fn mentions_any(phrase: &str, context: &str, markers: &[&str]) -> bool {
    let phrase = phrase.to_lowercase();
    let context = context.to_lowercase();
    markers
        .iter()
        .any(|marker| phrase.contains(marker) || context.contains(marker))
}

pub fn is_greeting(phrase: &str, context: &str) -> bool {
    mentions_any(phrase, context, &GREETING_MARKERS)
}

pub fn is_farewell(phrase: &str, context: &str) -> bool {
    mentions_any(phrase, context, &FAREWELL_MARKERS)
}

/// Communicative situation a phrase belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseCategory {
    Greeting,
    Farewell,
    Formal,
    Informal,
    General,
}

impl PhraseCategory {
    /// Greeting and farewell markers win over register markers in the context
    pub fn classify(phrase: &str, context: &str) -> Self {
        if is_greeting(phrase, context) {
            return Self::Greeting;
        }
        if is_farewell(phrase, context) {
            return Self::Farewell;
        }
        let context = context.to_lowercase();
        if ["polite", "formal"].iter().any(|m| context.contains(m)) {
            Self::Formal
        } else if ["informal", "casual"].iter().any(|m| context.contains(m)) {
            Self::Informal
        } else {
            Self::General
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Farewell => "farewell",
            Self::Formal => "formal",
            Self::Informal => "informal",
            Self::General => "general",
        }
    }

    pub fn visual_strategy(self) -> &'static str {
        match self {
            Self::Greeting => {
                "Focus on meeting and greeting scenarios. Show people encountering each \
                 other for the first time in the day, waving, shaking hands, or \
                 acknowledging each other in appropriate social contexts."
            }
            Self::Farewell => {
                "Focus on parting and departure scenarios. Show people saying goodbye, \
                 waving farewell, leaving situations, or concluding interactions with \
                 appropriate emotional tone."
            }
            Self::Formal => {
                "Focus on formal or professional contexts. Show business settings, \
                 official interactions, respectful exchanges, or situations requiring \
                 polite and proper German communication."
            }
            Self::Informal => {
                "Focus on casual, friendly interactions. Show relaxed social settings, \
                 friends talking, informal gatherings, or everyday conversation scenarios \
                 with comfortable, approachable atmosphere."
            }
            Self::General => {
                "Focus on the communicative situation implied by the phrase. Show people \
                 engaged in conversation or interaction that would naturally lead to \
                 using this expression in German."
            }
        }
    }
}

impl fmt::Display for PhraseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower-cased words of a sentence with trailing punctuation removed
fn sentence_tokens(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(|token| {
            token
                .trim_end_matches(|c: char| matches!(c, '.' | '!' | '?' | ',' | ';' | ':'))
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Whether `negation` sits where a negation of its kind may stand in `example`
pub fn is_valid_negation_position(negation: &str, kind: NegationType, example: &str) -> bool {
    let words = sentence_tokens(example);
    let parts = sentence_tokens(negation);
    let Some(first) = parts.first() else {
        return false;
    };
    let Some(position) = words.iter().position(|word| word == first) else {
        return false;
    };
    if words.get(position..position + parts.len()) != Some(&parts[..]) {
        return false;
    }

    let len = words.len();
    match kind {
        NegationType::General => position > 0,
        NegationType::Article => position + 1 < len,
        NegationType::Pronoun | NegationType::Intensifier => true,
        NegationType::Temporal => position + 1 < len,
        NegationType::Spatial => position > 0,
        NegationType::Correlative => position + 2 < len,
    }
}
