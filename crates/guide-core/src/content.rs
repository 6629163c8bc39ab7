/// Fills a category template for one parsed model and attaches voice and CTA.
use rand::Rng;
use tracing::debug;

use crate::cta::build_cta;
use crate::error::CoreError;
use crate::model::{ParsedModel, Problem, ProblemCategory, RequiredPart, TrendingSource};
use crate::persona::build_persona;
use crate::problems::problem_template;
use crate::template::{render, Vars};

/// Render the problem entry for `category`.
///
/// `keyword` is the original search phrase; the general template uses it to decide
/// whether the parsed description is worth quoting back.
pub fn render_problem<R: Rng + ?Sized>(
    category: ProblemCategory,
    parsed: &ParsedModel,
    keyword: &str,
    error_code: Option<&str>,
    source: TrendingSource,
    rng: &mut R,
) -> Result<Problem, CoreError> {
    let template = problem_template(category);
    let model_display = parsed.display_name();
    let display_desc = display_description(parsed, keyword, &model_display);
    let vars = Vars::new()
        .with("model", &model_display)
        .with("brand", &parsed.brand)
        .with("display_desc", &display_desc);

    let render_all = |lines: &[&str]| -> Result<Vec<String>, CoreError> {
        lines.iter().map(|line| render(line, &vars)).collect()
    };

    let required_parts = template
        .required_parts
        .iter()
        .map(|part| {
            Ok(RequiredPart {
                name: render(part.name, &vars)?,
                search_query: render(part.search_query, &vars)?,
            })
        })
        .collect::<Result<Vec<_>, CoreError>>()?;

    let problem = Problem {
        id: template.id.to_string(),
        title: render(template.title, &vars)?,
        description: render(template.description, &vars)?,
        possible_causes: render_all(template.possible_causes)?,
        solution_steps: render_all(template.solution_steps)?,
        required_parts,
        persona: build_persona(category, parsed, rng)?,
        dynamic_cta: build_cta(category, &model_display, error_code)?,
        trending_source: source,
    };

    debug!(id = %problem.id, model = %model_display, "rendered problem");
    Ok(problem)
}

fn display_description(parsed: &ParsedModel, keyword: &str, display: &str) -> String {
    let desc = parsed.problem_description.trim();
    if desc.is_empty() || desc == keyword.trim() {
        format!("issues with your {display}")
    } else {
        format!("{desc} on your {display}")
    }
}
