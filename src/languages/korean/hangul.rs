//! Hangul phonology used for particle and counter derivation

/// First precomposed syllable (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// Last precomposed syllable (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;
/// Final consonant slots per syllable, including "none"
const JONGSEONG_COUNT: u32 = 28;

/// Possessive marker attached unconditionally
pub const POSSESSIVE_SUFFIX: &str = "의";

/// Default counter for nouns without a specific one
pub const GENERAL_COUNTER: &str = "개";

/// Semantic categories a Korean noun may belong to
pub const SEMANTIC_CATEGORIES: &[&str] =
    &["person", "object", "place", "abstract", "animal", "food"];

/// Counters common enough that anything else is worth a warning
pub const COMMON_COUNTERS: &[(&str, &str)] = &[
    ("개", "general objects"),
    ("명", "people (neutral)"),
    ("분", "people (honorific)"),
    ("마리", "animals"),
    ("장", "flat objects"),
    ("권", "books"),
    ("대", "vehicles/machines"),
    ("병", "bottles"),
    ("잔", "cups/glasses"),
    ("그루", "trees"),
];

/// Whether the last syllable of `word` carries a final consonant (받침)
///
/// Characters outside the precomposed syllable block count as open syllables.
pub fn has_final_consonant(word: &str) -> bool {
    let Some(last) = word.chars().last() else {
        return false;
    };
    let code = last as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return false;
    }
    (code - HANGUL_SYLLABLE_BASE) % JONGSEONG_COUNT != 0
}

/// Case particles whose form depends on the preceding syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Particle {
    /// 은/는
    Topic,
    /// 이/가
    Subject,
    /// 을/를
    Object,
}

impl Particle {
    /// Suffix for a word with or without a final consonant
    pub fn suffix(self, after_consonant: bool) -> &'static str {
        match (self, after_consonant) {
            (Self::Topic, true) => "은",
            (Self::Topic, false) => "는",
            (Self::Subject, true) => "이",
            (Self::Subject, false) => "가",
            (Self::Object, true) => "을",
            (Self::Object, false) => "를",
        }
    }

    /// Both allomorphs, e.g. "은/는"
    pub fn label(self) -> &'static str {
        match self {
            Self::Topic => "은/는",
            Self::Subject => "이/가",
            Self::Object => "을/를",
        }
    }

    /// `word` followed by the matching particle
    pub fn attach(self, word: &str) -> String {
        format!("{}{}", word, self.suffix(has_final_consonant(word)))
    }
}

/// Particle-marked forms of one noun
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParticleForms {
    pub topic: String,
    pub subject: String,
    pub object: String,
    pub possessive: String,
}

impl ParticleForms {
    pub fn derive(word: &str) -> Self {
        Self {
            topic: Particle::Topic.attach(word),
            subject: Particle::Subject.attach(word),
            object: Particle::Object.attach(word),
            possessive: format!("{}{}", word, POSSESSIVE_SUFFIX),
        }
    }

    /// Fill any empty form from the derived one
    pub fn fill_missing(mut self, word: &str) -> Self {
        let derived = Self::derive(word);
        for (slot, value) in [
            (&mut self.topic, derived.topic),
            (&mut self.subject, derived.subject),
            (&mut self.object, derived.object),
            (&mut self.possessive, derived.possessive),
        ] {
            if slot.is_empty() {
                *slot = value;
            }
        }
        self
    }

    /// "topic, subject, object" for pronunciation drills
    pub fn spoken(&self) -> String {
        format!("{}, {}, {}", self.topic, self.subject, self.object)
    }
}

/// Counting phrase such as "사과 세 개"
///
/// Objects are counted with 세 (three), everything else with 다섯 (five).
pub fn counter_example(word: &str, counter: &str, category: &str) -> String {
    let number = if category == "object" { "세" } else { "다섯" };
    format!("{} {} {}", word, number, counter)
}

pub fn is_common_counter(counter: &str) -> bool {
    COMMON_COUNTERS.iter().any(|(known, _)| *known == counter)
}
