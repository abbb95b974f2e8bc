use super::domain::{BudgetRange, Money};
use super::patterns::compile;
use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::sync::OnceLock;
use tracing::debug;

/// How the digits captured by a budget pattern turn into amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BudgetShape {
    /// `20-25K`: two bare figures scaled by a thousand.
    KiloRange,
    /// `20.000 - 25.000` or `budget 20000-25000`: two figures written in full.
    GroupedRange,
    /// `budget: 15k`: one bare figure scaled by a thousand.
    KiloSingle,
    /// `15.000 €` or `budget : 15 000`: one figure written in full.
    GroupedSingle,
}

/// Thousands grouped by `.`, `,`, a space or a no-break space.
const GROUPED_FIGURE: &str = r"\d{1,3}(?:[.,\x20\t\u{a0}\u{202f}]\d{3})+";
const CURRENCY: &str = r"(?:€|eur\b|euros\b)";
/// Budget label followed by up to 40 non-digit characters on the same line.
const BUDGET_LABEL: &str = r"\bbudget[^\d\n]{0,40}";

static BUDGET_RULES: OnceLock<Vec<(Regex, BudgetShape)>> = OnceLock::new();

fn budget_rules() -> &'static [(Regex, BudgetShape)] {
    BUDGET_RULES.get_or_init(|| {
        // Bare four-plus digit figures only count next to a budget label.
        let labeled_figure = format!(r"{GROUPED_FIGURE}|\d{{4,9}}");
        let rules = [
            (
                r"\b(\d{1,3})[ \t]*[-–][ \t]*(\d{1,3})[ \t]*k\b".to_string(),
                BudgetShape::KiloRange,
            ),
            (
                format!(
                    r"\b({GROUPED_FIGURE})[ \t]*{CURRENCY}?[ \t]*[-–][ \t]*({GROUPED_FIGURE})\b"
                ),
                BudgetShape::GroupedRange,
            ),
            (
                format!(
                    r"{BUDGET_LABEL}({labeled_figure})[ \t]*{CURRENCY}?[ \t]*[-–][ \t]*({labeled_figure})\b"
                ),
                BudgetShape::GroupedRange,
            ),
            (
                format!(r"{BUDGET_LABEL}(\d{{1,3}})[ \t]*k\b"),
                BudgetShape::KiloSingle,
            ),
            (
                format!(r"{BUDGET_LABEL}({labeled_figure})\b"),
                BudgetShape::GroupedSingle,
            ),
            (
                format!(r"\b({GROUPED_FIGURE})[ \t]*{CURRENCY}"),
                BudgetShape::GroupedSingle,
            ),
        ];
        rules
            .iter()
            .map(|(pattern, shape)| (compile(pattern), *shape))
            .collect()
    })
}

fn parse_figure(raw: &str) -> Option<Money> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<Money>().ok()
}

fn amounts(captures: &Captures<'_>, shape: BudgetShape) -> Option<BudgetRange> {
    let figure = |index: usize| captures.get(index).and_then(|m| parse_figure(m.as_str()));

    match shape {
        BudgetShape::KiloRange => {
            let low = figure(1)?.checked_mul(1000)?;
            let high = figure(2)?.checked_mul(1000)?;
            Some(BudgetRange::new(low, high))
        }
        BudgetShape::GroupedRange => Some(BudgetRange::new(figure(1)?, figure(2)?)),
        BudgetShape::KiloSingle => Some(BudgetRange::single(figure(1)?.checked_mul(1000)?)),
        BudgetShape::GroupedSingle => Some(BudgetRange::single(figure(1)?)),
    }
}

/// First budget pattern that matches decides the budget; a token that cannot be
/// turned into amounts leaves the budget absent.
pub(crate) fn parse_budget(text: &str) -> Option<BudgetRange> {
    let (captures, shape) = budget_rules()
        .iter()
        .find_map(|(pattern, shape)| pattern.captures(text).map(|caps| (caps, *shape)))?;

    let budget = amounts(&captures, shape);
    if budget.is_none() {
        debug!(
            token = captures.get(0).map(|m| m.as_str()).unwrap_or_default(),
            ?shape,
            "malformed budget token ignored"
        );
    }
    budget
}

/// Which occurrence of a date token a field is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateRole {
    /// First token in the document.
    Deadline,
    /// Last token, only when the document carries more than one.
    CampaignEnd,
}

static DATE_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

/// Slash-delimited tokens are preferred over dash-delimited ones.
fn date_patterns() -> &'static [Regex] {
    DATE_PATTERNS.get_or_init(|| {
        [
            r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b",
            r"\b(\d{1,2})-(\d{1,2})-(\d{4})\b",
        ]
        .iter()
        .map(|pattern| compile(pattern))
        .collect()
    })
}

fn calendar_date(captures: &Captures<'_>) -> Option<NaiveDate> {
    let part = |index: usize| captures.get(index)?.as_str().parse::<u32>().ok();
    let day = part(1)?;
    let month = part(2)?;
    let year = i32::try_from(part(3)?).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

pub(crate) fn parse_date(text: &str, role: DateRole) -> Option<NaiveDate> {
    let tokens: Vec<Captures<'_>> = date_patterns()
        .iter()
        .map(|pattern| pattern.captures_iter(text).collect::<Vec<_>>())
        .find(|tokens| !tokens.is_empty())?;

    let token = match role {
        DateRole::Deadline => tokens.first()?,
        DateRole::CampaignEnd if tokens.len() > 1 => tokens.last()?,
        DateRole::CampaignEnd => return None,
    };

    let date = calendar_date(token);
    if date.is_none() {
        debug!(
            token = token.get(0).map(|m| m.as_str()).unwrap_or_default(),
            ?role,
            "malformed date token ignored"
        );
    }
    date
}
