use crate::cmd::assess::parse_layout;
use crate::reports;
use clap::Args;
use keygauge::assessment::Assessment;
use keygauge::config::AssessConfig;
use keygauge::error::KgResult;
use keygauge::layouts::all_layouts;
use rayon::prelude::*;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Corpus text file to stream through the trackers.
    #[arg(short, long)]
    pub corpus: String,

    /// Known layouts to compare, comma separated. Defaults to all of them.
    #[arg(short, long, value_delimiter = ',')]
    pub layouts: Vec<String>,

    /// Also write the flattened results to a CSV file.
    #[arg(long)]
    pub csv: Option<String>,

    #[arg(long)]
    pub config_file: Option<String>,

    #[command(flatten)]
    pub config: AssessConfig,
}

pub fn run(args: CompareArgs) -> KgResult<()> {
    let config = super::resolve_config(&args.config_file, args.config.clone())?;

    let selected = if args.layouts.is_empty() {
        all_layouts()
    } else {
        args.layouts
            .iter()
            .map(|n| parse_layout(n))
            .collect::<KgResult<Vec<_>>>()?
    };

    info!("📊 Comparing {} layouts", selected.len());

    // Assessments are independent, so each worker streams the corpus itself.
    let outcomes: Vec<KgResult<(String, Assessment)>> = selected
        .par_iter()
        .map(|known| {
            let mut assessment =
                Assessment::from_layout(known.layout()?).with_config(config.clone());
            assessment.run_on_path(&args.corpus)?;
            Ok((known.to_string(), assessment))
        })
        .collect();

    let mut results = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        results.push(outcome?);
    }

    reports::comparison(&results);

    if let Some(path) = &args.csv {
        reports::write_csv(path, &results)?;
        info!("💾 Wrote CSV: {}", path);
    }

    Ok(())
}
