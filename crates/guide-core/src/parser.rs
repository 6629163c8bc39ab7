/// Keyword parser: splits a search phrase into brand, model code and problem text.
///
/// The first token is the brand. Tokens after it are scanned left to right against the
/// brand's pattern list; at each position the first pattern that matches wins, its span
/// becomes the model and everything after the span becomes the problem description.
/// Brands without a table entry, or keywords where nothing matches, get the brand's
/// placeholder model and the whole tail as the description.
use tracing::debug;

use crate::error::CoreError;
use crate::model::ParsedModel;

/// One way a brand's model can appear in the token stream.
#[derive(Debug, Clone, Copy)]
pub enum ModelPattern {
    /// Exact token sequence, rendered as `label`.
    /// `Phrase { tokens: &["Little", "Green"], label: "Little Green" }`
    Phrase {
        tokens: &'static [&'static str],
        label: &'static str,
    },
    /// `head` followed by one of `tails`, rendered as "head tail".
    Pair {
        head: &'static str,
        tails: &'static [&'static str],
    },
    /// `head` followed by any token, rendered as "head next" (e.g. "iFloor 3").
    Series { head: &'static str },
    /// A bare integer in `min..=max` (e.g. Roomba 690).
    Number { min: u32, max: u32 },
}

/// Known model patterns for one brand.
#[derive(Debug)]
pub struct BrandModels {
    pub brand: &'static str,
    pub fallback: &'static str,
    pub patterns: &'static [ModelPattern],
}

/// Model label used for brands missing from `BRAND_MODELS`.
pub const DEFAULT_MODEL: &str = "Vacuum";

const fn token(t: &'static [&'static str; 1]) -> ModelPattern {
    ModelPattern::Phrase {
        tokens: t,
        label: t[0],
    }
}

const DYSON_V: &[&str] = &["V7", "V8", "V10", "V11", "V12", "V15"];

pub static BRAND_MODELS: &[BrandModels] = &[
    BrandModels {
        brand: "Dyson",
        fallback: "Vacuum",
        patterns: &[
            token(&["V7"]),
            token(&["V8"]),
            token(&["V10"]),
            token(&["V11"]),
            token(&["V12"]),
            token(&["V15"]),
            token(&["V7+"]),
            token(&["V8+"]),
            token(&["V10+"]),
            ModelPattern::Pair { head: "Cyclone", tails: DYSON_V },
            token(&["Cyclone"]),
            ModelPattern::Pair { head: "Digital", tails: DYSON_V },
            token(&["Digital"]),
        ],
    },
    BrandModels {
        brand: "Shark",
        fallback: "Vacuum",
        patterns: &[
            token(&["Navigator"]),
            token(&["Rocket"]),
            token(&["Apex"]),
            token(&["Ion"]),
            token(&["Vertex"]),
            token(&["Rotator"]),
            token(&["Stratos"]),
        ],
    },
    BrandModels {
        brand: "Bissell",
        fallback: "Cleaner",
        patterns: &[
            ModelPattern::Phrase { tokens: &["Little", "Green"], label: "Little Green" },
            ModelPattern::Phrase {
                tokens: &["Pet", "Hair", "Eraser"],
                label: "Pet Hair Eraser",
            },
            ModelPattern::Phrase { tokens: &["Pet", "Hair"], label: "Pet Hair Eraser" },
            token(&["Crosswave"]),
            token(&["Little"]),
            token(&["ProHeat"]),
            token(&["SpotClean"]),
            token(&["Pet"]),
        ],
    },
    BrandModels {
        brand: "Roomba",
        fallback: "Robot Vacuum",
        patterns: &[
            ModelPattern::Series { head: "i" },
            ModelPattern::Series { head: "e" },
            ModelPattern::Series { head: "s" },
            ModelPattern::Series { head: "j" },
            ModelPattern::Number { min: 500, max: 1000 },
        ],
    },
    BrandModels {
        brand: "Samsung",
        fallback: "Vacuum",
        patterns: &[
            ModelPattern::Pair {
                head: "Jet",
                tails: &["70", "75", "90", "Stick", "Cordless"],
            },
            token(&["Jet"]),
        ],
    },
    BrandModels {
        brand: "Miele",
        fallback: "Vacuum",
        patterns: &[
            token(&["C1"]),
            token(&["C2"]),
            token(&["C3"]),
            token(&["Complete"]),
            token(&["Classic"]),
            token(&["Full"]),
        ],
    },
    BrandModels {
        brand: "Tineco",
        fallback: "Cleaner",
        patterns: &[
            ModelPattern::Series { head: "iFloor" },
            token(&["Dry"]),
            token(&["Wet"]),
            token(&["Smart"]),
        ],
    },
    BrandModels {
        brand: "Roborock",
        fallback: "Vacuum",
        patterns: &[
            token(&["S4"]),
            token(&["S5"]),
            token(&["S6"]),
            token(&["S7"]),
            token(&["S8"]),
            token(&["Q5"]),
            token(&["Q7"]),
            token(&["E4"]),
        ],
    },
    BrandModels {
        brand: "Ecovacs",
        fallback: "Vacuum",
        patterns: &[
            token(&["Deebot"]),
            token(&["Ozmo"]),
            token(&["N79"]),
            token(&["S5"]),
            token(&["S6"]),
            token(&["S7"]),
        ],
    },
    BrandModels {
        brand: "Eufy",
        fallback: "Vacuum",
        patterns: &[
            token(&["RoboVac"]),
            token(&["HomeVac"]),
            token(&["11S"]),
            token(&["30C"]),
            token(&["G30"]),
        ],
    },
    BrandModels {
        brand: "Hoover",
        fallback: "Vacuum",
        patterns: &[
            token(&["WindTunnel"]),
            token(&["PowerDrive"]),
            token(&["React"]),
            token(&["ONE"]),
            token(&["Legacy"]),
        ],
    },
];

/// Look up the pattern table for a brand (exact, case-sensitive).
pub fn brand_models(brand: &str) -> Option<&'static BrandModels> {
    BRAND_MODELS.iter().find(|b| b.brand == brand)
}

/// Parse a keyword into brand, model code and problem description.
///
/// Empty or whitespace-only input is rejected.
pub fn parse(keyword: &str) -> Result<ParsedModel, CoreError> {
    let tokens: Vec<&str> = keyword.split_whitespace().collect();
    let Some((&brand, rest)) = tokens.split_first() else {
        return Err(CoreError::InvalidInput(
            "keyword must contain at least one word".to_string(),
        ));
    };

    let (model, description) = match brand_models(brand) {
        Some(table) => match find_model(table.patterns, rest) {
            Some((model, consumed)) => (model, rest[consumed..].join(" ")),
            None => (table.fallback.to_string(), rest.join(" ")),
        },
        None => (DEFAULT_MODEL.to_string(), rest.join(" ")),
    };

    let problem_description = if description.is_empty() {
        keyword.to_string()
    } else {
        description
    };

    debug!(brand, model = %model, problem = %problem_description, "parsed keyword");

    Ok(ParsedModel {
        brand: brand.to_string(),
        model,
        problem_description,
    })
}

/// Scan `tokens` for the first position where any pattern matches.
///
/// Returns the model label and how many tokens (from the start of `tokens`) the
/// model span ends at.
fn find_model(patterns: &[ModelPattern], tokens: &[&str]) -> Option<(String, usize)> {
    (0..tokens.len()).find_map(|pos| {
        patterns
            .iter()
            .find_map(|p| match_at(p, &tokens[pos..]))
            .map(|(label, len)| (label, pos + len))
    })
}

fn match_at(pattern: &ModelPattern, tokens: &[&str]) -> Option<(String, usize)> {
    match *pattern {
        ModelPattern::Phrase { tokens: expected, label } => {
            (tokens.len() >= expected.len() && tokens[..expected.len()] == *expected)
                .then(|| (label.to_string(), expected.len()))
        }
        ModelPattern::Pair { head, tails } => match tokens {
            [first, second, ..] if *first == head && tails.contains(second) => {
                Some((format!("{first} {second}"), 2))
            }
            _ => None,
        },
        ModelPattern::Series { head } => match tokens {
            [first, second, ..] if *first == head => Some((format!("{first} {second}"), 2)),
            _ => None,
        },
        ModelPattern::Number { min, max } => {
            let first = tokens.first()?;
            if !first.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let n: u32 = first.parse().ok()?;
            (min..=max).contains(&n).then(|| (first.to_string(), 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(keyword: &str) -> (String, String, String) {
        let p = parse(keyword).unwrap();
        (p.brand, p.model, p.problem_description)
    }

    #[test]
    fn test_miele_model_excludes_brand() {
        let (brand, model, desc) = parsed("Miele C1 attachment issues");
        assert_eq!(brand, "Miele");
        assert_eq!(model, "C1");
        assert_eq!(desc, "attachment issues");
    }

    #[test]
    fn test_dyson_single_token() {
        assert_eq!(
            parsed("Dyson V8 battery replacement"),
            ("Dyson".into(), "V8".into(), "battery replacement".into())
        );
    }

    #[test]
    fn test_dyson_cyclone_pair() {
        assert_eq!(
            parsed("Dyson Cyclone V10 losing suction"),
            ("Dyson".into(), "Cyclone V10".into(), "losing suction".into())
        );
        assert_eq!(
            parsed("Dyson Cyclone losing suction"),
            ("Dyson".into(), "Cyclone".into(), "losing suction".into())
        );
    }

    #[test]
    fn test_dyson_fallback() {
        assert_eq!(
            parsed("Dyson battery"),
            ("Dyson".into(), "Vacuum".into(), "battery".into())
        );
    }

    #[test]
    fn test_bissell_two_token_model() {
        assert_eq!(
            parsed("Bissell Little Green mold"),
            ("Bissell".into(), "Little Green".into(), "mold".into())
        );
        assert_eq!(
            parsed("Bissell Pet Hair Eraser error codes"),
            ("Bissell".into(), "Pet Hair Eraser".into(), "error codes".into())
        );
        assert_eq!(
            parsed("Bissell Little leak"),
            ("Bissell".into(), "Little".into(), "leak".into())
        );
    }

    #[test]
    fn test_samsung_jet_pair() {
        assert_eq!(
            parsed("Samsung Jet 90 battery life"),
            ("Samsung".into(), "Jet 90".into(), "battery life".into())
        );
        assert_eq!(
            parsed("Samsung Jet"),
            ("Samsung".into(), "Jet".into(), "Samsung Jet".into())
        );
    }

    #[test]
    fn test_roomba_series_and_number() {
        assert_eq!(
            parsed("Roomba i 7 stuck"),
            ("Roomba".into(), "i 7".into(), "stuck".into())
        );
        assert_eq!(
            parsed("Roomba 690 not charging"),
            ("Roomba".into(), "690".into(), "not charging".into())
        );
        assert_eq!(
            parsed("Roomba error 15"),
            ("Roomba".into(), "Robot Vacuum".into(), "error 15".into())
        );
    }

    #[test]
    fn test_tineco_series_needs_following_token() {
        assert_eq!(
            parsed("Tineco iFloor 3 error codes"),
            ("Tineco".into(), "iFloor 3".into(), "error codes".into())
        );
        assert_eq!(
            parsed("Tineco leaking iFloor"),
            ("Tineco".into(), "Cleaner".into(), "leaking iFloor".into())
        );
    }

    #[test]
    fn test_unknown_brand() {
        assert_eq!(
            parsed("Electrolux Pure making noise"),
            ("Electrolux".into(), "Vacuum".into(), "Pure making noise".into())
        );
    }

    #[test]
    fn test_empty_description_defaults_to_keyword() {
        assert_eq!(
            parsed("Shark Navigator"),
            ("Shark".into(), "Navigator".into(), "Shark Navigator".into())
        );
        assert_eq!(
            parsed("Electrolux"),
            ("Electrolux".into(), "Vacuum".into(), "Electrolux".into())
        );
    }

    #[test]
    fn test_empty_keyword_rejected() {
        assert!(matches!(parse(""), Err(CoreError::InvalidInput(_))));
        assert!(matches!(parse("   \t "), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_is_deterministic() {
        let a = parse("Shark Rocket brush not spinning").unwrap();
        let b = parse("Shark Rocket brush not spinning").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_model_never_starts_with_brand() {
        let keywords = [
            "Dyson V8 battery replacement",
            "Shark Navigator not working",
            "Bissell Crosswave not spraying",
            "Roomba not connecting to WiFi",
            "Roborock S7 mapping issues",
            "Hoover WindTunnel belt replacement",
            "Samsung Jet 90 battery life",
        ];
        for kw in keywords {
            let p = parse(kw).unwrap();
            assert!(
                !p.model.split_whitespace().any(|t| t == p.brand),
                "model {:?} repeats brand for {kw:?}",
                p.model
            );
        }
    }
}
