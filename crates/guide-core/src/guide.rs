/// Guide assembly: keyword in, complete output record out.
use std::collections::HashSet;

use chrono::{Local, NaiveDateTime};
use rand::Rng;
use tracing::info;

use crate::classifier::{classify, extract_error_code};
use crate::content::render_problem;
use crate::error::CoreError;
use crate::model::{Guide, TrendingSource};
use crate::parser::parse;
use crate::seo::generate_seo_keywords;

const BASE_SCORE: u8 = 50;
const SHORT_KEYWORD_BONUS: u8 = 20;
const HIGH_TRAFFIC_BONUS: u8 = 15;
const HIGH_TRAFFIC_WORDS: &[&str] = &["battery", "charging", "not working", "troubleshooting"];

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Something that already knows which slugs have been written.
pub trait SlugRegistry {
    fn contains(&self, slug: &str) -> bool;
}

impl<F> SlugRegistry for F
where
    F: Fn(&str) -> bool,
{
    fn contains(&self, slug: &str) -> bool {
        self(slug)
    }
}

impl SlugRegistry for HashSet<String> {
    fn contains(&self, slug: &str) -> bool {
        HashSet::contains(self, slug)
    }
}

/// Build a guide stamped with the current local time.
pub fn assemble<R: Rng + ?Sized>(
    keyword: &str,
    source: TrendingSource,
    rng: &mut R,
) -> Result<Guide, CoreError> {
    assemble_at(keyword, source, rng, Local::now().naive_local())
}

/// Build a guide stamped with `now`.
pub fn assemble_at<R: Rng + ?Sized>(
    keyword: &str,
    source: TrendingSource,
    rng: &mut R,
    now: NaiveDateTime,
) -> Result<Guide, CoreError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(CoreError::InvalidInput("keyword is empty".to_string()));
    }

    let parsed = parse(keyword)?;
    let category = classify(keyword, &parsed.problem_description);
    let error_code = extract_error_code(keyword);
    let display = parsed.display_name();

    let problem = render_problem(
        category,
        &parsed,
        keyword,
        error_code.as_deref(),
        source,
        rng,
    )?;
    let seo_keywords = generate_seo_keywords(keyword, &display, &parsed.problem_description)?;

    let guide = Guide {
        manual_pdf: manual_pdf(&parsed.brand, &parsed.model),
        brand: parsed.brand,
        model: display,
        model_code: parsed.model,
        problem_description: parsed.problem_description,
        seo_keywords,
        auto_generated: true,
        generated_date: now.format(DATE_FORMAT).to_string(),
        source_keyword: keyword.to_string(),
        problem_type: category,
        trending_score: trending_score(keyword),
        trending_source: source,
        problems: vec![problem],
    };

    info!(
        keyword = %keyword,
        model = %guide.model,
        category = %category,
        score = guide.trending_score,
        "assembled guide"
    );
    Ok(guide)
}

/// Popularity estimate in 0..=100 from keyword shape alone.
pub fn trending_score(keyword: &str) -> u8 {
    let mut score = BASE_SCORE;
    if keyword.split_whitespace().count() <= 3 {
        score += SHORT_KEYWORD_BONUS;
    }
    let lower = keyword.to_lowercase();
    if HIGH_TRAFFIC_WORDS.iter().any(|w| lower.contains(w)) {
        score += HIGH_TRAFFIC_BONUS;
    }
    score.min(100)
}

/// File-name stem for a guide, e.g. "dyson-v15" or "dyson-v8plus".
///
/// Only `[a-z0-9-]` survives, so the stem is always a single path component.
pub fn slug(brand: &str, model_code: &str) -> String {
    [slug_part(brand), slug_part(model_code)]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn slug_part(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.to_lowercase().replace('+', "plus").chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

/// Manual file name advertised in the record.
pub fn manual_pdf(brand: &str, model_code: &str) -> String {
    format!(
        "{}-{}.pdf",
        brand.to_lowercase(),
        model_code.to_lowercase().replace(' ', "-").replace('+', "plus")
    )
}

impl Guide {
    pub fn slug(&self) -> String {
        slug(&self.brand, &self.model_code)
    }

    /// True when `registry` has not seen this guide's slug yet.
    pub fn is_new(&self, registry: &(impl SlugRegistry + ?Sized)) -> bool {
        !registry.contains(&self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProblemCategory;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_micro_opt(9, 26, 53, 589_793)
            .unwrap()
    }

    #[test]
    fn test_assemble_shark_navigator_not_working() {
        let mut rng = StdRng::seed_from_u64(0);
        let guide = assemble_at(
            "Shark Navigator not working",
            TrendingSource::Database,
            &mut rng,
            fixed_now(),
        )
        .unwrap();

        assert_eq!(guide.problem_type, ProblemCategory::Power);
        assert_eq!(guide.problems[0].id, "power-issues");
        assert_eq!(guide.model, "Shark Navigator");
        assert_eq!(guide.model_code, "Navigator");
        assert_eq!(guide.seo_keywords[0], "Shark Navigator not working");
        assert_eq!(guide.manual_pdf, "shark-navigator.pdf");
        assert_eq!(guide.generated_date, "2025-03-14T09:26:53.589793");
        assert_eq!(guide.trending_source, TrendingSource::Database);
        assert_eq!(guide.problems[0].trending_source, TrendingSource::Database);
        assert!(guide.auto_generated);
        // four tokens, so only the "not working" bonus applies
        assert_eq!(guide.trending_score, 65);
    }

    #[test]
    fn test_json_field_order() {
        let mut rng = StdRng::seed_from_u64(0);
        let guide = assemble_at("Miele C1 attachment issues", TrendingSource::Manual, &mut rng, fixed_now())
            .unwrap();
        let json = guide.to_json().unwrap();
        let keys = [
            "\"brand\"",
            "\"model\"",
            "\"model_code\"",
            "\"problem_description\"",
            "\"manual_pdf\"",
            "\"seo_keywords\"",
            "\"auto_generated\"",
            "\"generated_date\"",
            "\"source_keyword\"",
            "\"problem_type\"",
            "\"trending_score\"",
            "\"trending_source\"",
            "\"problems\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
        assert!(json.contains("\"problem_type\": \"attachment\""));
        assert!(json.contains("\"type\": \"tech_expert\""));
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            assemble("   ", TrendingSource::Manual, &mut rng),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_seeded_assembly_is_reproducible() {
        let a = assemble_at(
            "Dyson V8 brush not spinning",
            TrendingSource::GoogleTrends,
            &mut StdRng::seed_from_u64(9),
            fixed_now(),
        )
        .unwrap();
        let b = assemble_at(
            "Dyson V8 brush not spinning",
            TrendingSource::GoogleTrends,
            &mut StdRng::seed_from_u64(9),
            fixed_now(),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_error_code_flows_into_cta() {
        let mut rng = StdRng::seed_from_u64(0);
        let guide = assemble_at("Roomba 980 error 15", TrendingSource::Manual, &mut rng, fixed_now())
            .unwrap();
        assert_eq!(guide.problem_type, ProblemCategory::ErrorCodes);
        assert_eq!(
            guide.problems[0].dynamic_cta.text,
            "🔧 Decoding Error 15? We Have the Solution"
        );
    }

    #[test]
    fn test_trending_score() {
        assert_eq!(trending_score("Dyson battery"), 85);
        assert_eq!(trending_score("Shark Navigator troubleshooting"), 85);
        assert_eq!(trending_score("Shark Navigator not working"), 65);
        assert_eq!(trending_score("Dyson V8 filter"), 70);
        assert_eq!(trending_score("Dyson V15 Detect not charging properly"), 65);
        assert_eq!(trending_score("Shark Apex vacuum brush roll replacement guide"), 50);
    }

    #[test]
    fn test_slug_and_manual() {
        assert_eq!(slug("Dyson", "V8+"), "dyson-v8plus");
        assert_eq!(slug("Bissell", "Pet Hair Eraser"), "bissell-pet-hair-eraser");
        assert_eq!(slug("Roomba", "i/7"), "roomba-i-7");
        assert_eq!(slug("Dyson", "Vacuum"), "dyson-vacuum");
        assert_eq!(manual_pdf("Miele", "C1"), "miele-c1.pdf");
        assert_eq!(manual_pdf("Dyson", "V10+"), "dyson-v10plus.pdf");
    }

    #[test]
    fn test_slug_is_single_path_component() {
        assert_eq!(slug("../../Vacuum", "Vacuum"), "vacuum-vacuum");
        assert_eq!(slug("..", "C1"), "c1");
        assert_eq!(slug("Shark\\Ion", "a//b..c"), "shark-ion-a-b-c");
        assert_eq!(slug("Eufy", "  --11S--  "), "eufy-11s");

        let mut rng = StdRng::seed_from_u64(0);
        let guide = assemble_at("../../Vacuum Broken", TrendingSource::GoogleTrends, &mut rng, fixed_now())
            .unwrap();
        let s = guide.slug();
        assert!(!s.contains('/') && !s.contains('\\') && !s.contains(".."), "{s}");
        assert_eq!(s, "vacuum-vacuum");
    }

    #[test]
    fn test_is_new_with_registries() {
        let mut rng = StdRng::seed_from_u64(0);
        let guide = assemble_at("Dyson V8 battery", TrendingSource::Database, &mut rng, fixed_now())
            .unwrap();

        let mut seen: HashSet<String> = HashSet::new();
        assert!(guide.is_new(&seen));
        seen.insert("dyson-v8".to_string());
        assert!(!guide.is_new(&seen));

        let never = |_: &str| false;
        assert!(guide.is_new(&never));
    }

    #[test]
    fn test_every_category_assembles() {
        let keywords = [
            "Dyson V8 battery",
            "Dyson V15 not charging",
            "Dyson V10 filter cleaning",
            "Shark Navigator not working",
            "Dyson V8 brush not spinning",
            "Shark Apex losing suction",
            "Roomba i7 wifi",
            "Roomba 980 error 15",
            "Miele C1 attachment issues",
            "Shark Rocket motor replacement",
            "Hoover WindTunnel belt replacement",
            "Bissell SpotClean leaking",
            "Dyson V12 pulsing",
            "Hoover React noisy",
            "Bissell ProHeat not heating",
            "Roborock S7 lost map",
            "Bissell Little Green mold",
        ];
        let mut rng = StdRng::seed_from_u64(5);
        let categories: HashSet<ProblemCategory> = keywords
            .iter()
            .map(|kw| {
                assemble_at(kw, TrendingSource::Database, &mut rng, fixed_now())
                    .unwrap()
                    .problem_type
            })
            .collect();
        assert_eq!(categories.len(), ProblemCategory::ALL.len());
    }
}
