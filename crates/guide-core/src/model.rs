use std::fmt;

use serde::{Deserialize, Serialize};

/// Brand, model code and free-text problem split out of a search keyword.
///
/// `model` never repeats the brand, so `display_name()` is always `"{brand} {model}"`
/// with no duplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedModel {
    /// First token of the keyword, verbatim, e.g. "Dyson"
    pub brand: String,
    /// Model code without the brand, e.g. "V8", "Little Green", or a placeholder
    /// such as "Vacuum" when nothing in the brand table matched
    pub model: String,
    /// Remaining words after the model span, or the whole keyword when nothing remains
    pub problem_description: String,
}

impl ParsedModel {
    /// Brand and model joined for display, e.g. "Miele C1".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

/// Closed set of problem categories a keyword can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemCategory {
    Battery,
    Charging,
    Filter,
    Power,
    Brush,
    Suction,
    Connectivity,
    ErrorCodes,
    Attachment,
    Motor,
    Belt,
    Leak,
    Pulsing,
    Noise,
    Heating,
    Mapping,
    General,
}

impl ProblemCategory {
    pub const ALL: [ProblemCategory; 17] = [
        ProblemCategory::Battery,
        ProblemCategory::Charging,
        ProblemCategory::Filter,
        ProblemCategory::Power,
        ProblemCategory::Brush,
        ProblemCategory::Suction,
        ProblemCategory::Connectivity,
        ProblemCategory::ErrorCodes,
        ProblemCategory::Attachment,
        ProblemCategory::Motor,
        ProblemCategory::Belt,
        ProblemCategory::Leak,
        ProblemCategory::Pulsing,
        ProblemCategory::Noise,
        ProblemCategory::Heating,
        ProblemCategory::Mapping,
        ProblemCategory::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProblemCategory::Battery => "battery",
            ProblemCategory::Charging => "charging",
            ProblemCategory::Filter => "filter",
            ProblemCategory::Power => "power",
            ProblemCategory::Brush => "brush",
            ProblemCategory::Suction => "suction",
            ProblemCategory::Connectivity => "connectivity",
            ProblemCategory::ErrorCodes => "error_codes",
            ProblemCategory::Attachment => "attachment",
            ProblemCategory::Motor => "motor",
            ProblemCategory::Belt => "belt",
            ProblemCategory::Leak => "leak",
            ProblemCategory::Pulsing => "pulsing",
            ProblemCategory::Noise => "noise",
            ProblemCategory::Heating => "heating",
            ProblemCategory::Mapping => "mapping",
            ProblemCategory::General => "general",
        }
    }
}

impl fmt::Display for ProblemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provenance tag copied into the record. Nothing in the core branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendingSource {
    GoogleTrends,
    Database,
    Manual,
}

impl TrendingSource {
    pub fn as_str(self) -> &'static str {
        match self {
            TrendingSource::GoogleTrends => "google_trends",
            TrendingSource::Database => "database",
            TrendingSource::Manual => "manual",
        }
    }
}

impl fmt::Display for TrendingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredPart {
    pub name: String,
    pub search_query: String,
}

/// Voice snippet attached to a problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Persona id, e.g. "tech_expert"
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub tone: String,
    pub opening: String,
    pub phrases: Vec<String>,
}

/// Call-to-action block rendered next to a problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicCta {
    pub urgency: String,
    pub text: String,
    pub subtext: String,
    pub color: String,
    pub icon: String,
    pub pain_point: String,
}

/// One filled problem template with persona and CTA attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub possible_causes: Vec<String>,
    pub solution_steps: Vec<String>,
    pub required_parts: Vec<RequiredPart>,
    pub persona: Persona,
    pub dynamic_cta: DynamicCta,
    pub trending_source: TrendingSource,
}

/// Output record consumed by the site generator.
///
/// Field order here is the field order of the JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    pub brand: String,
    /// Display name, brand included, e.g. "Miele C1"
    pub model: String,
    /// Model code without the brand, e.g. "C1"
    pub model_code: String,
    pub problem_description: String,
    pub manual_pdf: String,
    pub seo_keywords: Vec<String>,
    pub auto_generated: bool,
    pub generated_date: String,
    pub source_keyword: String,
    pub problem_type: ProblemCategory,
    pub trending_score: u8,
    pub trending_source: TrendingSource,
    pub problems: Vec<Problem>,
}

impl Guide {
    /// Serialize as the pretty-printed JSON document written to disk.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
