/// SEO keyword expansion: base variants plus one long-tail table picked by the
/// problem description.
use std::collections::HashSet;

use crate::error::CoreError;
use crate::template::{render, Vars};

const BASE: &[&str] = &[
    "{model} repair",
    "{model} troubleshooting",
    "{model} parts",
    "how to fix {model}",
    "{model} manual",
    "{model} guide",
];

const FALLBACK: &[&str] = &[
    "where to buy {model} parts",
    "{model} replacement parts",
    "{model} not working",
    "fix {model} problems",
];

struct LongTail {
    triggers: &'static [&'static str],
    keywords: &'static [&'static str],
}

/// Checked in order; the first table with a trigger in the description is used.
static LONG_TAIL: &[LongTail] = &[
    LongTail {
        triggers: &["battery"],
        keywords: &[
            "{model} battery replacement",
            "{model} battery not holding charge",
            "replace {model} battery",
            "{model} battery life",
            "where to buy {model} battery",
            "{model} dead battery",
            "how long does {model} battery last",
            "{model} battery cost",
            "{model} won't hold charge",
            "{model} battery indicator",
        ],
    },
    LongTail {
        triggers: &["charging"],
        keywords: &[
            "{model} not charging",
            "{model} charger problems",
            "{model} won't charge",
            "{model} charging light flashing",
            "replace {model} charger",
            "{model} charging dock issues",
            "{model} battery not charging",
            "fix {model} charging problems",
            "{model} charge indicator",
            "{model} charging slowly",
        ],
    },
    LongTail {
        triggers: &["error", "codes"],
        keywords: &[
            "{model} error codes",
            "{model} error code list",
            "{model} flashing red light",
            "{model} beeping",
            "{model} error codes manual",
            "troubleshoot {model} error codes",
            "{model} error codes repair",
            "what does {model} error code mean",
            "{model} error codes not working",
            "fix {model} error codes",
        ],
    },
    LongTail {
        triggers: &["attachment"],
        keywords: &[
            "{model} attachment not working",
            "{model} accessories problems",
            "{model} tools not fitting",
            "{model} attachment falls off",
            "replace {model} attachment",
            "{model} wand problems",
            "{model} hose replacement",
            "where to buy {model} attachments",
            "{model} attachment compatibility",
            "fix {model} attachment issues",
        ],
    },
    LongTail {
        triggers: &["motor"],
        keywords: &[
            "{model} motor replacement",
            "{model} motor noise",
            "{model} motor burning smell",
            "{model} motor not spinning",
            "replace {model} motor",
            "{model} motor repair cost",
            "how to replace {model} motor",
            "{model} motor problems",
            "{model} motor failure",
            "fix {model} motor",
        ],
    },
    LongTail {
        triggers: &["belt"],
        keywords: &[
            "{model} belt replacement",
            "{model} broken belt",
            "{model} belt slipping",
            "replace {model} belt",
            "where to buy {model} belt",
            "how to change {model} belt",
            "{model} belt problems",
            "fix {model} belt",
            "{model} belt size",
            "{model} drive belt",
        ],
    },
    LongTail {
        triggers: &["leak"],
        keywords: &[
            "{model} leaking water",
            "{model} leaking dirty water",
            "{model} water tank leaking",
            "fix {model} leak",
            "{model} leaking from bottom",
            "{model} seal replacement",
            "where is {model} leaking from",
            "{model} tank cap problems",
            "repair {model} water leak",
            "stop {model} leaking",
        ],
    },
    LongTail {
        triggers: &["pulsing"],
        keywords: &[
            "{model} pulsing",
            "{model} suction pulsating",
            "{model} revving up and down",
            "fix {model} pulsing",
            "{model} not constant suction",
            "{model} surging",
            "why does {model} pulse",
            "{model} pulsing and stopping",
            "troubleshoot {model} pulsing",
            "stop {model} from pulsing",
        ],
    },
    LongTail {
        triggers: &["noise"],
        keywords: &[
            "{model} making loud noise",
            "{model} rattling noise",
            "{model} whistling sound",
            "{model} high pitched noise",
            "fix {model} noise",
            "{model} strange sounds",
            "{model} clicking noise",
            "{model} grinding noise",
            "why is {model} so loud",
            "reduce {model} noise",
        ],
    },
    LongTail {
        triggers: &["heating"],
        keywords: &[
            "{model} overheating",
            "{model} getting hot",
            "{model} burning smell",
            "fix {model} overheating",
            "{model} shuts off when hot",
            "{model} thermal protection",
            "{model} too hot to touch",
            "{model} heat issues",
            "prevent {model} overheating",
            "{model} temperature warning",
        ],
    },
    LongTail {
        triggers: &["mapping"],
        keywords: &[
            "{model} mapping problems",
            "{model} not mapping house",
            "{model} lost map",
            "{model} navigation issues",
            "reset {model} map",
            "{model} not cleaning in straight lines",
            "{model} mapping errors",
            "fix {model} navigation",
            "{model} can't find home",
            "{model} cleaning pattern problems",
        ],
    },
    LongTail {
        triggers: &["connectivity"],
        keywords: &[
            "{model} not connecting to wifi",
            "{model} app not working",
            "{model} bluetooth problems",
            "{model} offline",
            "fix {model} connection",
            "{model} can't connect to phone",
            "{model} network issues",
            "{model} app connection failed",
            "troubleshoot {model} connectivity",
            "reconnect {model} to wifi",
        ],
    },
    LongTail {
        triggers: &["brushroll"],
        keywords: &[
            "{model} brush roll not spinning",
            "{model} brush roll replacement",
            "{model} brush bar stuck",
            "clean {model} brush roll",
            "{model} bristles worn",
            "replace {model} brush roll",
            "{model} brush roll removal",
            "fix {model} brush roll",
            "{model} roller not turning",
            "install {model} brush roll",
        ],
    },
    LongTail {
        triggers: &["filter"],
        keywords: &[
            "{model} filter replacement",
            "{model} filter cleaning",
            "{model} hepa filter",
            "where to buy {model} filters",
            "clean {model} filter",
            "{model} filter indicator",
            "{model} pre-filter",
            "{model} post-filter",
            "change {model} filter",
            "{model} filter washable",
        ],
    },
    LongTail {
        triggers: &["suction"],
        keywords: &[
            "{model} lost suction",
            "{model} no suction",
            "{model} weak suction",
            "fix {model} suction",
            "{model} not picking up dirt",
            "restore {model} suction",
            "{model} suction power low",
            "{model} poor suction",
            "improve {model} suction",
            "{model} suction problems",
        ],
    },
    LongTail {
        triggers: &["power"],
        keywords: &[
            "{model} won't turn on",
            "{model} not working",
            "{model} no power",
            "{model} dead",
            "fix {model} power",
            "{model} won't start",
            "{model} power issues",
            "{model} not responding",
            "repair {model} power",
            "{model} startup problems",
        ],
    },
];

fn long_tail_for(description: &str) -> &'static [&'static str] {
    let description = description.to_lowercase();
    LONG_TAIL
        .iter()
        .find(|table| table.triggers.iter().any(|t| description.contains(t)))
        .map(|table| table.keywords)
        .unwrap_or(FALLBACK)
}

/// Expand `keyword` into SEO variants for `display_model` (brand included).
///
/// The original keyword is always first and no entry repeats.
pub fn generate_seo_keywords(
    keyword: &str,
    display_model: &str,
    description: &str,
) -> Result<Vec<String>, CoreError> {
    let vars = Vars::new().with("model", display_model);
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    let rendered = BASE
        .iter()
        .chain(long_tail_for(description))
        .map(|t| render(t, &vars));
    for candidate in std::iter::once(Ok(keyword.to_string())).chain(rendered) {
        let candidate = candidate?;
        if seen.insert(candidate.clone()) {
            out.push(candidate);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_keywords_then_long_tail() {
        let kws = generate_seo_keywords("Miele C1 attachment issues", "Miele C1", "attachment issues")
            .unwrap();
        assert_eq!(kws[0], "Miele C1 attachment issues");
        assert_eq!(kws[1], "Miele C1 repair");
        assert_eq!(kws[6], "Miele C1 guide");
        assert_eq!(kws[7], "Miele C1 attachment not working");
        assert_eq!(kws.len(), 17);
    }

    #[test]
    fn test_deduplicates_preserving_order() {
        // "Shark Navigator not working" is both the keyword and a power long-tail entry.
        let kws = generate_seo_keywords(
            "Shark Navigator not working",
            "Shark Navigator",
            "no power",
        )
        .unwrap();
        assert_eq!(kws[0], "Shark Navigator not working");
        let unique: HashSet<_> = kws.iter().collect();
        assert_eq!(unique.len(), kws.len());
        assert_eq!(kws.len(), 16);
    }

    #[test]
    fn test_fallback_list() {
        let kws = generate_seo_keywords("Dyson V8", "Dyson Vacuum", "").unwrap();
        assert_eq!(kws.len(), 11);
        assert_eq!(kws[7], "where to buy Dyson Vacuum parts");
        assert_eq!(kws[10], "fix Dyson Vacuum problems");
    }

    #[test]
    fn test_error_split_trigger() {
        let kws = generate_seo_keywords("Roomba 980 error 15", "Roomba 980", "error 15").unwrap();
        assert!(kws.contains(&"Roomba 980 error code list".to_string()));
    }

    #[test]
    fn test_first_matching_table_wins() {
        // battery is checked before charging
        let kws = generate_seo_keywords("x", "Dyson V10", "battery charging").unwrap();
        assert_eq!(kws[7], "Dyson V10 battery replacement");
    }

    #[test]
    fn test_no_brand_doubling() {
        let kws = generate_seo_keywords("Shark Apex suction", "Shark Apex", "suction").unwrap();
        assert!(kws.iter().all(|k| !k.contains("Shark Shark")));
    }
}
