/*!
 * German article domain model.
 *
 * Articles are learnt as declension patterns, so the model reads out the
 * full nominative to genitive row and keeps one audio segment per case
 * example. Cloze markup in the examples is stripped before use.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{
    AudioSegments, ImageSearchStrategy, LanguageDomainModel, push_segment, require_fields,
};
use crate::errors::ValidationError;
use crate::languages::german::records::unified_article::{ARTIKEL_TYPEN, GESCHLECHTER};
use crate::languages::german::records::{
    ArticleRecord, UnifiedArticleRecord, article::german_gender,
};
use crate::providers::ImageQueryGenerator;
use crate::records::fields::ensure_allowed;

const MODEL: &str = "Article";

/// Anki cloze deletion, `{{c1::der}}`
static CLOZE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{c\d+::(.*?)\}\}").unwrap());

/// Replace every cloze deletion with its answer text
pub fn extract_clean_text_from_cloze(text: &str) -> String {
    CLOZE_PATTERN.replace_all(text, "$1").trim().to_string()
}

/// Inputs for [`Article::new`], in German grammar terminology
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFields {
    pub artikel_typ: String,
    pub geschlecht: String,
    pub nominativ: String,
    pub akkusativ: String,
    pub dativ: String,
    pub genitiv: String,
    pub beispiel_nom: String,
    pub beispiel_akk: String,
    pub beispiel_dat: String,
    pub beispiel_gen: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub artikel_typ: String,
    pub geschlecht: String,
    pub nominativ: String,
    pub akkusativ: String,
    pub dativ: String,
    pub genitiv: String,
    pub beispiel_nom: String,
    pub beispiel_akk: String,
    pub beispiel_dat: String,
    pub beispiel_gen: String,
}

impl Article {
    pub fn new(fields: ArticleFields) -> Result<Self, ValidationError> {
        require_fields(
            MODEL,
            &[
                ("artikel_typ", fields.artikel_typ.as_str()),
                ("geschlecht", fields.geschlecht.as_str()),
                ("nominativ", fields.nominativ.as_str()),
                ("beispiel_nom", fields.beispiel_nom.as_str()),
            ],
        )?;
        ensure_allowed(MODEL, "artikel_typ", &fields.artikel_typ, ARTIKEL_TYPEN)?;
        ensure_allowed(MODEL, "geschlecht", &fields.geschlecht, GESCHLECHTER)?;

        Ok(Self {
            artikel_typ: fields.artikel_typ,
            geschlecht: fields.geschlecht,
            nominativ: fields.nominativ,
            akkusativ: fields.akkusativ,
            dativ: fields.dativ,
            genitiv: fields.genitiv,
            beispiel_nom: extract_clean_text_from_cloze(&fields.beispiel_nom),
            beispiel_akk: extract_clean_text_from_cloze(&fields.beispiel_akk),
            beispiel_dat: extract_clean_text_from_cloze(&fields.beispiel_dat),
            beispiel_gen: extract_clean_text_from_cloze(&fields.beispiel_gen),
        })
    }

    /// Definite, indefinite and negative rows translated to German terms
    pub fn from_record(record: &ArticleRecord) -> Result<Self, ValidationError> {
        Self::new(ArticleFields {
            artikel_typ: record.kind.artikel_typ().to_string(),
            geschlecht: german_gender(&record.gender).to_string(),
            nominativ: record.nominative.clone(),
            akkusativ: record.accusative.clone(),
            dativ: record.dative.clone(),
            genitiv: record.genitive.clone(),
            beispiel_nom: record.example_nom.clone(),
            beispiel_akk: record.example_acc.clone(),
            beispiel_dat: record.example_dat.clone(),
            beispiel_gen: record.example_gen.clone(),
        })
    }

    pub fn from_unified(record: &UnifiedArticleRecord) -> Result<Self, ValidationError> {
        Self::new(ArticleFields {
            artikel_typ: record.artikel_typ.clone(),
            geschlecht: record.geschlecht.clone(),
            nominativ: record.nominativ.clone(),
            akkusativ: record.akkusativ.clone(),
            dativ: record.dativ.clone(),
            genitiv: record.genitiv.clone(),
            beispiel_nom: record.beispiel_nom.clone(),
            beispiel_akk: record.beispiel_akk.clone(),
            beispiel_dat: record.beispiel_dat.clone(),
            beispiel_gen: record.beispiel_gen.clone(),
        })
    }

    fn build_search_context(&self) -> String {
        [
            "German article learning visualization".to_string(),
            format!("Gender: {} ({})", self.geschlecht, self.nominativ),
            format!("Article type: {}", self.artikel_typ),
            "Focus on educational context for German language learning".to_string(),
            format!("Example context: {}", self.beispiel_nom),
        ]
        .join(". ")
    }
}

impl LanguageDomainModel for Article {
    /// "bestimmt Artikel, maskulin:. Nominativ: der. ..." followed by the example
    fn combined_audio_text(&self) -> String {
        let mut parts = vec![format!("{} Artikel, {}:", self.artikel_typ, self.geschlecht)];
        for (case, form) in [
            ("Nominativ", &self.nominativ),
            ("Akkusativ", &self.akkusativ),
            ("Dativ", &self.dativ),
            ("Genitiv", &self.genitiv),
        ] {
            if !form.is_empty() {
                parts.push(format!("{}: {}", case, form));
            }
        }
        parts.push(format!("Beispiel: {}", self.beispiel_nom));
        parts.join(". ")
    }

    fn audio_segments(&self) -> AudioSegments {
        let pattern = [&self.nominativ, &self.akkusativ, &self.dativ, &self.genitiv]
            .into_iter()
            .filter(|form| !form.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        let mut segments = AudioSegments::new();
        push_segment(&mut segments, "word_audio", &self.combined_audio_text());
        push_segment(&mut segments, "pattern_audio", &pattern);
        push_segment(&mut segments, "example_nom_audio", &self.beispiel_nom);
        push_segment(&mut segments, "example_akk_audio", &self.beispiel_akk);
        push_segment(&mut segments, "example_dat_audio", &self.beispiel_dat);
        push_segment(&mut segments, "example_gen_audio", &self.beispiel_gen);
        segments
    }

    fn primary_word(&self) -> String {
        format!("{}_{}", self.geschlecht, self.artikel_typ)
    }

    fn image_search_strategy<'a>(
        &self,
        service: &'a dyn ImageQueryGenerator,
    ) -> ImageSearchStrategy<'a> {
        ImageSearchStrategy::new("article", &self.nominativ, self.build_search_context(), service)
    }
}
