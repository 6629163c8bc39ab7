/// Problem classifier: ordered substring rules over the keyword and description.
///
/// Trigger sets overlap ("noise" appears under motor and under noise), so the rule
/// order below is part of the contract: the first rule with any trigger contained in
/// either lower-cased input wins.
use regex::Regex;
use tracing::debug;

use crate::model::ProblemCategory;

pub struct Rule {
    pub category: ProblemCategory,
    pub triggers: &'static [&'static str],
}

/// Rules in priority order, highest first. `General` is the fall-through.
pub static RULES: &[Rule] = &[
    Rule {
        category: ProblemCategory::Battery,
        triggers: &[
            "battery",
            "batteries",
            "battery life",
            "dead battery",
            "replace battery",
            "battery replacement",
            "swap battery",
            "change battery",
        ],
    },
    Rule {
        category: ProblemCategory::Charging,
        triggers: &[
            "charging",
            "charger",
            "won't charge",
            "not charging",
            "charge indicator",
            "charging problems",
            "charging issues",
            "charge port",
        ],
    },
    Rule {
        category: ProblemCategory::ErrorCodes,
        triggers: &["error", "error code", "error codes", "flashing", "beeping"],
    },
    Rule {
        category: ProblemCategory::Suction,
        triggers: &[
            "suction",
            "losing suction",
            "low suction",
            "no suction",
            "weak suction",
            "suction power",
            "poor suction",
            "suction problems",
        ],
    },
    Rule {
        category: ProblemCategory::Power,
        triggers: &[
            "not working",
            "won't turn on",
            "won't start",
            "won't power",
            "power issues",
            "dead",
            "no power",
            "won't work",
            "not starting",
        ],
    },
    Rule {
        category: ProblemCategory::Brush,
        triggers: &[
            "brush",
            "brush roll",
            "brushroll",
            "brush not spinning",
            "roller",
            "rotating brush",
            "spinning brush",
        ],
    },
    Rule {
        category: ProblemCategory::Filter,
        triggers: &[
            "filter",
            "filters",
            "filter cleaning",
            "clogged filter",
            "filter replacement",
            "change filter",
            "dirty filter",
        ],
    },
    Rule {
        category: ProblemCategory::Attachment,
        triggers: &[
            "attachment",
            "attachments",
            "tools",
            "accessories",
            "wand",
            "hose",
            "attachment issues",
            "loose attachment",
            "broken attachment",
        ],
    },
    Rule {
        category: ProblemCategory::Motor,
        triggers: &[
            "motor",
            "motor replacement",
            "burnt motor",
            "motor noise",
            "loud noise",
            "grinding noise",
            "screaming",
        ],
    },
    Rule {
        category: ProblemCategory::Belt,
        triggers: &[
            "belt",
            "belt replacement",
            "broken belt",
            "drive belt",
            "belt slip",
            "loose belt",
        ],
    },
    Rule {
        category: ProblemCategory::Connectivity,
        triggers: &[
            "wifi",
            "wi-fi",
            "connecting",
            "connection",
            "network",
            "app",
            "connection lost",
            "won't connect",
        ],
    },
    Rule {
        category: ProblemCategory::Leak,
        triggers: &["leaking", "leak", "spitting", "spraying"],
    },
    Rule {
        category: ProblemCategory::Pulsing,
        triggers: &["pulsing", "pulse", "surging"],
    },
    Rule {
        category: ProblemCategory::Noise,
        triggers: &["noise", "noisy", "loud", "sound"],
    },
    Rule {
        category: ProblemCategory::Heating,
        triggers: &["heating", "heat", "hot water", "steam"],
    },
    Rule {
        category: ProblemCategory::Mapping,
        triggers: &["mapping", "map", "navigation", "lost", "stuck"],
    },
];

/// Classify a keyword and its parsed description into a category.
pub fn classify(keyword: &str, description: &str) -> ProblemCategory {
    let keyword = keyword.to_lowercase();
    let description = description.to_lowercase();

    let category = RULES
        .iter()
        .find(|rule| {
            rule.triggers
                .iter()
                .any(|t| keyword.contains(t) || description.contains(t))
        })
        .map(|rule| rule.category)
        .unwrap_or(ProblemCategory::General);

    debug!(%category, "classified keyword");
    category
}

/// Pull an error code such as "15" or "E4" out of a keyword like "Roomba error 15".
pub fn extract_error_code(keyword: &str) -> Option<String> {
    let error_code_re =
        Regex::new(r"(?i)\berror(?:\s+code)?\s+([a-z]?\d{1,4}[a-z]?)\b").expect("valid regex");
    error_code_re
        .captures(keyword)
        .map(|caps| caps[1].to_uppercase())
}
