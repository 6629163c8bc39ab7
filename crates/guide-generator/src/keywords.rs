/// Daily keyword selection: trending terms first, topped up from a fixed database.
use guide_core::model::TrendingSource;

/// High-traffic phrases used when trends come up short.
pub const TRENDING_KEYWORDS: &[&str] = &[
    "Dyson V8 battery replacement",
    "Dyson V15 not charging",
    "Dyson V12 pulsing",
    "Dyson V7 motor replacement",
    "Dyson V10 filter cleaning",
    "Shark Navigator not working",
    "Shark Rocket brush not spinning",
    "Shark Apex losing suction",
    "Shark Ion battery replacement",
    "Shark Vertex troubleshooting",
    "Bissell Crosswave not spraying",
    "Bissell Little Green mold",
    "Bissell ProHeat not heating",
    "Bissell SpotClean leaking",
    "Bissell Pet Hair Eraser error codes",
    "Roomba not connecting to WiFi",
    "Roomba error 15",
    "Roborock S7 mapping issues",
    "Ecovacs Deebot not charging",
    "Eufy RoboVac stuck",
    "Hoover WindTunnel belt replacement",
    "Miele C1 attachment issues",
    "Tineco iFloor 3 error codes",
    "Samsung Jet 90 battery life",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedKeyword {
    pub keyword: String,
    pub source: TrendingSource,
}

/// Pick today's `count` keywords.
///
/// Trending terms keep their order and are labelled `google_trends`. Any shortfall is
/// filled from `TRENDING_KEYWORDS`, starting at a rotation offset derived from
/// `day_of_year` and skipping phrases already chosen.
pub fn plan_daily(trending: Vec<String>, day_of_year: u32, count: usize) -> Vec<PlannedKeyword> {
    let mut plan: Vec<PlannedKeyword> = trending
        .into_iter()
        .take(count)
        .map(|keyword| PlannedKeyword {
            keyword,
            source: TrendingSource::GoogleTrends,
        })
        .collect();

    let len = TRENDING_KEYWORDS.len();
    let start = (day_of_year as usize * 3) % len;
    for offset in 0..len {
        if plan.len() >= count {
            break;
        }
        let candidate = TRENDING_KEYWORDS[(start + offset) % len];
        if plan.iter().any(|p| p.keyword == candidate) {
            continue;
        }
        plan.push(PlannedKeyword {
            keyword: candidate.to_string(),
            source: TrendingSource::Database,
        });
    }
    plan
}

/// Keywords passed on the command line, used as-is.
pub fn plan_manual(args: impl IntoIterator<Item = String>) -> Vec<PlannedKeyword> {
    args.into_iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .map(|keyword| PlannedKeyword {
            keyword,
            source: TrendingSource::Manual,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_rotation() {
        // day 1 starts at index 3
        let plan = plan_daily(Vec::new(), 1, 3);
        let keywords: Vec<&str> = plan.iter().map(|p| p.keyword.as_str()).collect();
        assert_eq!(
            keywords,
            vec![
                "Dyson V7 motor replacement",
                "Dyson V10 filter cleaning",
                "Shark Navigator not working"
            ]
        );
        assert!(plan.iter().all(|p| p.source == TrendingSource::Database));
    }

    #[test]
    fn test_rotation_wraps() {
        // (8 * 3) % 24 == 0, (23 * 3) % 24 == 21
        assert_eq!(plan_daily(Vec::new(), 8, 1)[0].keyword, TRENDING_KEYWORDS[0]);
        let plan = plan_daily(Vec::new(), 23, 4);
        assert_eq!(plan[2].keyword, TRENDING_KEYWORDS[23]);
        assert_eq!(plan[3].keyword, TRENDING_KEYWORDS[0]);
    }

    #[test]
    fn test_trends_first_then_database() {
        let plan = plan_daily(vec!["Dyson V15 Detect Battery".to_string()], 1, 3);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].source, TrendingSource::GoogleTrends);
        assert_eq!(plan[1].source, TrendingSource::Database);
        assert_eq!(plan[1].keyword, "Dyson V7 motor replacement");
    }

    #[test]
    fn test_trend_duplicate_of_database_skipped() {
        let plan = plan_daily(vec!["Dyson V7 motor replacement".to_string()], 1, 2);
        assert_eq!(plan[0].source, TrendingSource::GoogleTrends);
        assert_eq!(plan[1].keyword, "Dyson V10 filter cleaning");
    }

    #[test]
    fn test_trends_truncated_to_count() {
        let trending: Vec<String> = (0..5).map(|i| format!("Robot vacuum {i}")).collect();
        let plan = plan_daily(trending, 100, 3);
        assert_eq!(plan.len(), 3);
        assert!(plan.iter().all(|p| p.source == TrendingSource::GoogleTrends));
    }

    #[test]
    fn test_manual_keywords() {
        let plan = plan_manual(vec!["  Dyson V8 battery ".to_string(), " ".to_string()]);
        assert_eq!(
            plan,
            vec![PlannedKeyword {
                keyword: "Dyson V8 battery".to_string(),
                source: TrendingSource::Manual,
            }]
        );
    }
}
