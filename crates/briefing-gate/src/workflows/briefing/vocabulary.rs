use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// One reportable term and the spellings that count as a mention of it.
pub(crate) struct VocabularyEntry {
    pub(crate) label: &'static str,
    pub(crate) aliases: &'static [&'static str],
}

const fn entry(label: &'static str, aliases: &'static [&'static str]) -> VocabularyEntry {
    VocabularyEntry { label, aliases }
}

pub(crate) const SPORTS: &[VocabularyEntry] = &[
    entry("padel", &["padel"]),
    entry("hockey", &["hockey"]),
    entry("basket", &["basket"]),
    entry("running", &["running", "course à pied", "jogging"]),
    entry("football", &["football", "foot ball"]),
    entry("tennis", &["tennis"]),
    entry("cyclisme", &["cyclisme", "cycling", "vélo"]),
];

pub(crate) const OBJECTIVES: &[VocabularyEntry] = &[
    entry("awareness", &["notoriété", "awareness", "visibilité"]),
    entry("consideration", &["considération", "consideration"]),
    entry("engagement", &["engagement"]),
    entry("conversion", &["conversion", "ventes", "sales"]),
    entry("traffic", &["trafic", "traffic", "drive to store"]),
    entry("brand image", &["image de marque", "brand image"]),
];

pub(crate) const LANGUAGES: &[VocabularyEntry] = &[
    entry("french", &["français", "francais", "french"]),
    entry("dutch", &["néerlandais", "neerlandais", "nederlands", "dutch"]),
    entry("english", &["anglais", "english"]),
    entry("german", &["allemand", "german", "deutsch"]),
];

pub(crate) const MEDIA_CHANNELS: &[VocabularyEntry] = &[
    entry("tv", &["télévision", "television", "tv", "spot tv"]),
    entry("radio", &["radio"]),
    entry("digital", &["digital", "online", "display"]),
    entry("social", &["réseaux sociaux", "social media", "instagram", "tiktok", "facebook"]),
    entry("video", &["vidéo", "video", "youtube"]),
    entry("print", &["presse", "print", "magazine"]),
    entry("out of home", &["affichage", "out of home", "OOH", "DOOH"]),
];

pub(crate) const EXCLUSIONS: &[VocabularyEntry] = &[
    entry("alcohol", &["alcool", "alcohol"]),
    entry("tobacco", &["tabac", "tobacco"]),
    entry("gambling", &["jeux d'argent", "paris sportifs", "gambling", "betting"]),
    entry("competitors", &["concurrents", "concurrence", "competitors"]),
    entry("politics", &["politique", "political"]),
];

pub(crate) const PREFERENCES: &[VocabularyEntry] = &[
    entry("sponsoring", &["sponsoring", "sponsorship"]),
    entry("branded content", &["branded content", "contenu de marque"]),
    entry("activation", &["activation"]),
    entry("influencers", &["influenceurs", "influencers", "ambassadeurs"]),
    entry("live events", &["événement", "evenement", "event"]),
    entry("exclusivity", &["exclusivité", "exclusivity"]),
];

/// Case-insensitive matcher compiled from one vocabulary. Aliases match whole
/// words, with an optional plural `s`.
pub(crate) struct CompiledVocabulary {
    terms: Vec<(&'static str, Regex)>,
}

impl CompiledVocabulary {
    fn compile(entries: &[VocabularyEntry]) -> Self {
        let terms = entries
            .iter()
            .map(|entry| {
                let alternation = entry
                    .aliases
                    .iter()
                    .map(|alias| regex::escape(alias))
                    .collect::<Vec<_>>()
                    .join("|");
                let pattern = RegexBuilder::new(&format!(r"\b(?:{alternation})s?\b"))
                    .case_insensitive(true)
                    .build()
                    .expect("vocabulary aliases are escaped literals");
                (entry.label, pattern)
            })
            .collect();
        Self { terms }
    }

    /// Labels of every entry mentioned in `text`, or `None` when none are.
    pub(crate) fn find_all(&self, text: &str) -> Option<BTreeSet<String>> {
        let found: BTreeSet<String> = self
            .terms
            .iter()
            .filter(|(_, pattern)| pattern.is_match(text))
            .map(|(label, _)| (*label).to_string())
            .collect();

        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    }
}

pub(crate) struct Vocabularies {
    pub(crate) sports: CompiledVocabulary,
    pub(crate) objectives: CompiledVocabulary,
    pub(crate) languages: CompiledVocabulary,
    pub(crate) media_channels: CompiledVocabulary,
    pub(crate) exclusions: CompiledVocabulary,
    pub(crate) preferences: CompiledVocabulary,
}

static VOCABULARIES: OnceLock<Vocabularies> = OnceLock::new();

pub(crate) fn vocabularies() -> &'static Vocabularies {
    VOCABULARIES.get_or_init(|| Vocabularies {
        sports: CompiledVocabulary::compile(SPORTS),
        objectives: CompiledVocabulary::compile(OBJECTIVES),
        languages: CompiledVocabulary::compile(LANGUAGES),
        media_channels: CompiledVocabulary::compile(MEDIA_CHANNELS),
        exclusions: CompiledVocabulary::compile(EXCLUSIONS),
        preferences: CompiledVocabulary::compile(PREFERENCES),
    })
}
