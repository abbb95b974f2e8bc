use super::domain::{BriefingField, Urgency};
use super::normalizer::clean_value;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Compiled program budget; the bounded note captures are the largest patterns.
const PATTERN_SIZE_LIMIT: usize = 32 * 1024 * 1024;

const NAME_VALUE: &str = r"\p{L}[\p{L}\p{M}'’.\- \t]*";
const ORGANISATION_VALUE: &str = r"[\p{L}\d][\p{L}\p{M}\d&'’.\-– \t]*";
const LINE_VALUE: &str = r"[^\n]+";
const NOTE_VALUE: &str = r"[^\n.]{50,400}";

/// One candidate in a field's ordered rule list. Uses the first capture group
/// when the pattern defines one, the whole match otherwise.
pub(crate) struct FieldRule {
    pattern: Regex,
}

impl FieldRule {
    fn new(pattern: &str) -> Self {
        Self {
            pattern: compile(pattern),
        }
    }

    fn apply(&self, text: &str) -> Option<String> {
        let captures = self.pattern.captures(text)?;
        let raw = if self.pattern.captures_len() > 1 {
            captures.get(1).or_else(|| captures.get(0))?
        } else {
            captures.get(0)?
        };
        clean_value(raw.as_str())
    }
}

pub(crate) fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
        .expect("static extraction pattern compiles")
}

/// A colon, or a dash set off by whitespace so hyphenated words like
/// `e-mail` are not read as separators.
const SEPARATOR: &str = r"(?:[ \t]*:|[ \t]+[-–][ \t])";

/// `label [qualifiers] : value`, value bounded by `value_class`.
fn labeled(label: &str, value_class: &str) -> String {
    format!(r"\b(?:{label})\b[^:\n]{{0,40}}?{SEPARATOR}[ \t]*({value_class})")
}

/// Like [`labeled`], but the name must fill the rest of the line or stop at
/// `,`, `;` or `(`; `brief@agence.be` is not a name.
fn labeled_name(label: &str) -> String {
    format!(r"{}[ \t]*(?:\n|$|[,;(])", labeled(label, NAME_VALUE))
}

/// `label [qualifiers][:] text`, where the separator is optional.
fn note_label(label: &str) -> String {
    format!(r"\b(?:{label})(?:[^:\n.]{{0,40}}?{SEPARATOR})?[ \t]*({NOTE_VALUE})")
}

fn field_rule_table() -> Vec<(BriefingField, Vec<String>)> {
    vec![
        (
            BriefingField::ResponsiblePerson,
            vec![
                r"karolien\s+van\s+gaever".to_string(),
                labeled_name("responsable"),
                labeled_name(r"account\s+manager"),
                labeled_name("contact"),
            ],
        ),
        (
            BriefingField::MediaAgency,
            vec![
                r"group\s*m\s*[-–]?\s*essence\s*mediacom".to_string(),
                labeled("agence", ORGANISATION_VALUE),
                labeled("agency", ORGANISATION_VALUE),
            ],
        ),
        (
            BriefingField::AdvertiserGroup,
            vec![
                r"coca[\s-]?cola".to_string(),
                labeled(r"groupe\s+annonceur", ORGANISATION_VALUE),
                labeled("annonceur", ORGANISATION_VALUE),
                labeled("advertiser", ORGANISATION_VALUE),
            ],
        ),
        (
            BriefingField::BrandOrProduct,
            vec![
                r"powerade".to_string(),
                labeled("marque", ORGANISATION_VALUE),
                labeled("produit", ORGANISATION_VALUE),
                labeled("brand", ORGANISATION_VALUE),
                labeled("product", ORGANISATION_VALUE),
            ],
        ),
        (
            BriefingField::TargetPersona,
            vec![
                r"18[-\s]*54\s*[-–]?\s*sportifs".to_string(),
                labeled("cible", LINE_VALUE),
                labeled("persona", LINE_VALUE),
                labeled(r"target(?:\s+audience)?", LINE_VALUE),
            ],
        ),
        (
            BriefingField::KeyMessages,
            vec![
                r"choi(?:si|ssi)ssez\s+powerade\s+quand\s+vous\s+faites\s+du\s+sport".to_string(),
                labeled(r"messages?\s+cl[eé]s?", LINE_VALUE),
                labeled(r"key\s+messages?", LINE_VALUE),
                labeled("communiquer", LINE_VALUE),
            ],
        ),
        (
            BriefingField::Notes,
            vec![
                note_label(r"int[ée]ress[ée]e?s?\s+par"),
                note_label(r"interested\s+in"),
                note_label(r"compl[ée]ments?"),
                note_label(r"additional\s+information"),
                note_label(r"notes?\b"),
                note_label(r"divers\b"),
            ],
        ),
    ]
}

/// Ordered rule lists per text field, specific entities before generic labels.
pub(crate) struct FieldCatalog {
    rules: HashMap<BriefingField, Vec<FieldRule>>,
}

impl FieldCatalog {
    fn build() -> Self {
        let rules = field_rule_table()
            .into_iter()
            .map(|(field, patterns)| {
                let compiled = patterns.iter().map(|pattern| FieldRule::new(pattern));
                (field, compiled.collect())
            })
            .collect();
        Self { rules }
    }

    /// First rule that yields a non-empty value wins.
    pub(crate) fn extract(&self, field: BriefingField, text: &str) -> Option<String> {
        self.rules
            .get(&field)?
            .iter()
            .find_map(|rule| rule.apply(text))
    }
}

static FIELD_CATALOG: OnceLock<FieldCatalog> = OnceLock::new();

pub(crate) fn field_catalog() -> &'static FieldCatalog {
    FIELD_CATALOG.get_or_init(FieldCatalog::build)
}

static URGENCY_RULES: OnceLock<Vec<(Regex, Urgency)>> = OnceLock::new();

/// Negated phrasings come first because they contain the word "urgent".
fn urgency_rules() -> &'static [(Regex, Urgency)] {
    URGENCY_RULES.get_or_init(|| {
        const RULES: &[(&str, Urgency)] = &[
            (r"\b(?:pas|non)[\s-]+urgent", Urgency::Low),
            (r"\b(?:not\s+urgent|low\s+priority|priorit[ée]\s+basse)\b", Urgency::Low),
            (r"\burgen(?:t|te|ce|cy)\b", Urgency::High),
            (r"\b(?:asap|d[èe]s\s+que\s+possible|high\s+priority|priorit[ée]\s+haute)\b", Urgency::High),
            (r"\b(?:priorit[ée]\s+moyenne|medium\s+priority|normal\s+priority)\b", Urgency::Medium),
        ];
        RULES
            .iter()
            .map(|(pattern, urgency)| (compile(pattern), *urgency))
            .collect()
    })
}

pub(crate) fn detect_urgency(text: &str) -> Option<Urgency> {
    urgency_rules()
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, urgency)| *urgency)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(field: BriefingField, text: &str) -> Option<String> {
        field_catalog().extract(field, text)
    }

    #[test]
    fn known_entity_wins_over_labeled_value() {
        let text = "Annonceur : Groupe Exemple\nLe groupe Coca-Cola souhaite communiquer.";
        assert_eq!(
            extract(BriefingField::AdvertiserGroup, text).as_deref(),
            Some("Coca-Cola")
        );
    }

    #[test]
    fn labeled_value_is_used_when_no_entity_matches() {
        let text = "Responsable commercial : Jean Dupont\nAgence média : Havas Media\n";
        assert_eq!(
            extract(BriefingField::ResponsiblePerson, text).as_deref(),
            Some("Jean Dupont")
        );
        assert_eq!(
            extract(BriefingField::MediaAgency, text).as_deref(),
            Some("Havas Media")
        );
    }

    #[test]
    fn hyphen_inside_a_label_is_not_a_separator() {
        let text = "Contact e-mail : brief@agence.be\nTéléphone : 02 123 45 67";
        assert!(extract(BriefingField::ResponsiblePerson, text).is_none());
    }

    #[test]
    fn spaced_dash_still_separates_label_and_value() {
        let text = "Contact - Marie Lambert, planning stratégique";
        assert_eq!(
            extract(BriefingField::ResponsiblePerson, text).as_deref(),
            Some("Marie Lambert")
        );
        assert_eq!(
            extract(BriefingField::MediaAgency, "Agence – Havas Media").as_deref(),
            Some("Havas Media")
        );
    }

    #[test]
    fn more_specific_label_precedes_generic_one() {
        let text = "Groupe annonceur : Danone\nAnnonceur : Evian";
        assert_eq!(
            extract(BriefingField::AdvertiserGroup, text).as_deref(),
            Some("Danone")
        );
    }

    #[test]
    fn persona_literal_is_returned_as_written() {
        let text = "Cible: adultes\nCœur de cible 18-54 sportifs urbains";
        assert_eq!(
            extract(BriefingField::TargetPersona, text).as_deref(),
            Some("18-54 sportifs")
        );
    }

    #[test]
    fn notes_require_a_minimum_length() {
        let short = "Notes : trop court.";
        assert!(extract(BriefingField::Notes, short).is_none());

        let text = "Intéressé par une activation terrain autour des clubs de padel en Wallonie. Merci";
        assert_eq!(
            extract(BriefingField::Notes, text).as_deref(),
            Some("une activation terrain autour des clubs de padel en Wallonie")
        );
    }

    #[test]
    fn notes_skip_label_qualifiers_before_separator() {
        let text = "Complément d'information : le client souhaite une présence forte sur les réseaux sociaux\n";
        assert_eq!(
            extract(BriefingField::Notes, text).as_deref(),
            Some("le client souhaite une présence forte sur les réseaux sociaux")
        );
    }

    #[test]
    fn unmatched_field_is_absent() {
        assert!(extract(BriefingField::KeyMessages, "rien de pertinent").is_none());
    }

    #[test]
    fn urgency_prefers_negated_phrasing() {
        assert_eq!(detect_urgency("Ce dossier n'est pas urgent."), Some(Urgency::Low));
        assert_eq!(detect_urgency("Réponse urgente attendue"), Some(Urgency::High));
        assert_eq!(detect_urgency("Priorité moyenne"), Some(Urgency::Medium));
        assert_eq!(detect_urgency("Aucune mention"), None);
    }
}
