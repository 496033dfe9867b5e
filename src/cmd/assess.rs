use crate::reports;
use clap::Args;
use keygauge::assessment::Assessment;
use keygauge::config::AssessConfig;
use keygauge::error::{KeyGaugeError, KgResult};
use keygauge::layout::Layout;
use keygauge::layouts::{all_layouts, ortho_split_spec, KnownLayout};
use std::str::FromStr;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AssessArgs {
    /// Corpus text file to stream through the trackers.
    #[arg(short, long)]
    pub corpus: String,

    /// Known layouts to assess, comma separated.
    #[arg(short, long, value_delimiter = ',', default_value = "qwerty")]
    pub layouts: Vec<String>,

    /// Custom placement string for the ortho split shape, assessed as
    /// "custom". Spaces mark the hand gap.
    #[arg(long)]
    pub placement: Option<String>,

    /// Emit reports as JSON instead of text.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long)]
    pub config_file: Option<String>,

    #[command(flatten)]
    pub config: AssessConfig,
}

pub fn parse_layout(name: &str) -> KgResult<KnownLayout> {
    KnownLayout::from_str(name).map_err(|_| {
        let known: Vec<String> = all_layouts().iter().map(|l| l.to_string()).collect();
        KeyGaugeError::Config(format!(
            "unknown layout '{}', expected one of: {}",
            name,
            known.join(", ")
        ))
    })
}

pub fn run(args: AssessArgs) -> KgResult<()> {
    let config = super::resolve_config(&args.config_file, args.config.clone())?;

    let mut targets: Vec<(String, Layout)> = Vec::new();
    for name in &args.layouts {
        let known = parse_layout(name)?;
        targets.push((known.to_string(), known.layout()?));
    }
    if let Some(placement) = &args.placement {
        targets.push(("custom".to_string(), Layout::new(&ortho_split_spec(), placement)?));
    }

    for (name, layout) in targets {
        info!("📊 Assessing layout: {}", name);
        let mut assessment = Assessment::from_layout(layout).with_config(config.clone());
        assessment.run_on_path(&args.corpus)?;

        reports::print_layout_grid(&name, assessment.layout());
        if args.json {
            println!("{}", serde_json::to_string_pretty(assessment.results())?);
        } else {
            println!("{}", assessment.full_report());
        }
    }

    Ok(())
}
