/// Mines vacuum-related search terms out of saved Google Trends daily-trends pages.
use std::path::Path;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::AppError;

const MAX_LINKS: usize = 50;
const MAX_TERM_LEN: usize = 100;

const VACUUM_WORDS: &[&str] = &[
    "vacuum",
    "dyson",
    "shark",
    "hoover",
    "bissell",
    "roomba",
    "robot",
    "cleaner",
    "suction",
    "carpet",
    "floor",
    "miele",
    "samsung",
    "tineco",
    "lg",
    "electrolux",
    "battery",
    "charging",
    "repair",
    "parts",
    "filter",
];

/// Extract relevant terms from one page, in first-seen order.
pub fn extract_terms(html: &str) -> Vec<String> {
    let explore_re = Regex::new(r#"/trends/explore\?q=([^"&]+)"#).expect("valid regex");
    let relevant_re = Regex::new(&format!(r"\b(?:{})\b", VACUUM_WORDS.join("|"))).expect("valid regex");

    let mut terms: Vec<String> = Vec::new();
    for caps in explore_re.captures_iter(html).take(MAX_LINKS) {
        let Some(term) = decode_term(&caps[1]) else {
            continue;
        };
        if term.is_empty() || term.chars().count() >= MAX_TERM_LEN {
            continue;
        }
        if !relevant_re.is_match(&term.to_lowercase()) {
            debug!(term = %term, "trend not vacuum related");
            continue;
        }
        if !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}

/// Read every snapshot and merge their terms. Unreadable files are logged and skipped.
pub fn load_terms(paths: &[impl AsRef<Path>]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for path in paths {
        let path: &Path = path.as_ref();
        match read_snapshot(path) {
            Ok(html) => {
                let found = extract_terms(&html);
                info!(path = %path.display(), terms = found.len(), "mined trends snapshot");
                for term in found {
                    if !terms.contains(&term) {
                        terms.push(term);
                    }
                }
            }
            Err(e) => warn!(error = %e, "skipping trends snapshot"),
        }
    }
    terms
}

fn read_snapshot(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))
}

fn decode_term(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).ok()?;
    Some(title_case(decoded.trim()))
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_alpha = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_is_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(ch);
            prev_is_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(q: &str) -> String {
        format!(r#"<a href="/trends/explore?q={q}&date=now+7-d&geo=US">x</a>"#)
    }

    #[test]
    fn test_extract_decodes_and_titles() {
        let html = format!(
            "{}{}",
            link("dyson+v8+battery"),
            link("shark%20navigator%20not%20working")
        );
        assert_eq!(
            extract_terms(&html),
            vec!["Dyson V8 Battery", "Shark Navigator Not Working"]
        );
    }

    #[test]
    fn test_irrelevant_and_partial_words_dropped() {
        // "lg" must be a whole word; "algebra" does not count.
        let html = format!(
            "{}{}{}",
            link("super+bowl"),
            link("algebra+homework"),
            link("lg+cordzero+repair")
        );
        assert_eq!(extract_terms(&html), vec!["Lg Cordzero Repair"]);
    }

    #[test]
    fn test_duplicates_removed() {
        let html = format!("{}{}", link("roomba+stuck"), link("Roomba+Stuck"));
        assert_eq!(extract_terms(&html), vec!["Roomba Stuck"]);
    }

    #[test]
    fn test_only_first_fifty_links() {
        let mut html = String::new();
        for _ in 0..50 {
            html.push_str(&link("weather"));
        }
        html.push_str(&link("dyson+v15"));
        assert!(extract_terms(&html).is_empty());
    }

    #[test]
    fn test_overlong_term_dropped() {
        let long = format!("vacuum+{}", "a".repeat(120));
        assert!(extract_terms(&link(&long)).is_empty());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("dyson v15 DETECT"), "Dyson V15 Detect");
        assert_eq!(title_case("roomba i7+"), "Roomba I7+");
    }

    #[test]
    fn test_load_terms_skips_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("us.html");
        std::fs::write(&good, link("bissell+crosswave+leaking")).unwrap();
        let missing = dir.path().join("missing.html");

        let terms = load_terms(&[missing, good]);
        assert_eq!(terms, vec!["Bissell Crosswave Leaking"]);
    }
}
