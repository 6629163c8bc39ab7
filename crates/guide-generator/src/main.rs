mod config;
mod error;
mod keywords;
mod store;
mod trends;

use chrono::{Datelike, Local};
use guide_core::guide::assemble;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use error::AppError;
use keywords::PlannedKeyword;
use store::GuideStore;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting guide generator");

    let config = Config::from_env()?;
    info!(
        data_dir = %config.data_dir.display(),
        daily_count = config.daily_count,
        seeded = config.seed.is_some(),
        snapshots = config.trends_html.len(),
        "configuration loaded"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let plan = if args.is_empty() {
        let trending = trends::load_terms(&config.trends_html);
        info!(terms = trending.len(), "trending terms collected");
        keywords::plan_daily(trending, Local::now().ordinal(), config.daily_count)
    } else {
        keywords::plan_manual(args)
    };

    for (i, planned) in plan.iter().enumerate() {
        info!(
            index = i + 1,
            keyword = %planned.keyword,
            source = %planned.source,
            "planned keyword"
        );
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let store = GuideStore::new(config.data_dir.clone())?;

    let mut generated = 0usize;
    let mut skipped = 0usize;
    for planned in &plan {
        match generate_one(&store, planned, &mut rng) {
            Ok(true) => generated += 1,
            Ok(false) => skipped += 1,
            Err(e) => {
                warn!(keyword = %planned.keyword, error = %e, "failed to generate guide");
                skipped += 1;
            }
        }
    }

    info!(generated, skipped, total = plan.len(), "run complete");
    Ok(())
}

fn generate_one(
    store: &GuideStore,
    planned: &PlannedKeyword,
    rng: &mut StdRng,
) -> Result<bool, AppError> {
    let guide = assemble(&planned.keyword, planned.source, rng)?;
    store.save(&guide)
}
