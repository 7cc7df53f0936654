use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of UI archetypes the catalog can render.
///
/// Serialized kebab-case (`landing-page`, `dashboard`, `form`, `card`),
/// which is also the wire form used by design descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    /// Hero section plus feature grid. The fallback when nothing matches.
    #[default]
    LandingPage,
    Dashboard,
    Form,
    Card,
}

impl TemplateKind {
    /// Every kind, in classifier evaluation order (default last).
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Dashboard,
        TemplateKind::Form,
        TemplateKind::Card,
        TemplateKind::LandingPage,
    ];

    /// Kebab-case name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::LandingPage => "landing-page",
            TemplateKind::Dashboard => "dashboard",
            TemplateKind::Form => "form",
            TemplateKind::Card => "card",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse failure for a kind name.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown template kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for TemplateKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landing-page" => Ok(TemplateKind::LandingPage),
            "dashboard" => Ok(TemplateKind::Dashboard),
            "form" => Ok(TemplateKind::Form),
            "card" => Ok(TemplateKind::Card),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// Keyword groups in evaluation order. First group with a hit wins.
const KEYWORD_GROUPS: [(&[&str], TemplateKind); 3] = [
    (&["dashboard", "metric", "activity"], TemplateKind::Dashboard),
    (&["form", "contact", "input"], TemplateKind::Form),
    (&["card", "product", "price"], TemplateKind::Card),
];

/// Pick the best-matching template kind for a code string.
///
/// Pure keyword scan over the lower-cased source: groups are tested in a
/// fixed order, the first hit wins, and anything unmatched (including the
/// empty string) falls back to [`TemplateKind::LandingPage`]. Matching is
/// plain substring search with no word boundaries ("platform" contains
/// "form"), which is part of the contract, not an oversight.
pub fn classify(code: &str) -> TemplateKind {
    let code = code.to_lowercase();
    for (keywords, kind) in KEYWORD_GROUPS {
        if keywords.iter().any(|keyword| code.contains(keyword)) {
            return kind;
        }
    }
    TemplateKind::default()
}
