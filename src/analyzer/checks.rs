// src/analyzer/checks.rs
// =============================================================================
// The named checks a run can select, and how a selection is parsed.
//
// Canonical order: basic, wordcount, links, images, security, performance,
// then the opt-in robots and sitemap lookups. Checks always run and are
// reported in this order, whatever order the user typed them in.
// =============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Check {
    Basic,
    #[serde(rename = "wordcount")]
    WordCount,
    Links,
    Images,
    Security,
    Performance,
    Robots,
    Sitemap,
}

impl Check {
    /// Every check, in canonical order.
    pub const ALL: [Check; 8] = [
        Check::Basic,
        Check::WordCount,
        Check::Links,
        Check::Images,
        Check::Security,
        Check::Performance,
        Check::Robots,
        Check::Sitemap,
    ];

    /// What runs when nothing is selected. robots and sitemap are opt-in.
    pub const DEFAULT: [Check; 6] = [
        Check::Basic,
        Check::WordCount,
        Check::Links,
        Check::Images,
        Check::Security,
        Check::Performance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Check::Basic => "basic",
            Check::WordCount => "wordcount",
            Check::Links => "links",
            Check::Images => "images",
            Check::Security => "security",
            Check::Performance => "performance",
            Check::Robots => "robots",
            Check::Sitemap => "sitemap",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCheck(pub String);

impl FromStr for Check {
    type Err = UnknownCheck;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Check::ALL
            .into_iter()
            .find(|check| check.name() == name)
            .ok_or(UnknownCheck(name))
    }
}

// Turns user input into the checks to run
//
// Each entry may itself be comma-separated ("basic,links"). Names are
// trimmed and case-insensitive; unknown names are dropped silently. If no
// names are given at all, the default set runs.
//
// Examples:
//   []                        -> basic, wordcount, links, images, security, performance
//   ["links"]                 -> links
//   ["Links, BASIC", "links"] -> basic, links
//   ["bogus"]                 -> (nothing)
pub fn select_checks<S: AsRef<str>>(requested: &[S]) -> Vec<Check> {
    let names: Vec<&str> = requested
        .iter()
        .flat_map(|entry| entry.as_ref().split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        return Check::DEFAULT.to_vec();
    }

    let mut selected: Vec<Check> = names.iter().filter_map(|name| name.parse().ok()).collect();
    selected.sort();
    selected.dedup();
    selected
}
