//! Tournament pool generator.
//!
//! Loads an entry roster, filters it down to one bracket category and prints
//! seeded bout sheets for pools of 4 or 8.

mod config;
mod roster_file;
mod sheet;

use anyhow::{Context, Result};
use config::{CliConfig, CliOverrides, OutputFormat};
use kumite_pools::{
    AgeBand, BeltTier, Gender, PartitionOutcome, PartitionSession, Randomizer,
    RosterFilter, SeededRandomizer, ThreadRandomizer,
};
use log::{info, warn};
use pico_args::Arguments;

const HELP: &str = "\
Generate seeded tournament pools from an entry roster

USAGE:
  kp_cli [OPTIONS]

OPTIONS:
  --roster PATH         Roster JSON file  [default: env KP_ROSTER]
  --size N              Bout sheet size, 4 or 8  [default: env KP_POOL_SIZE or 4]
  --gender G            Male | Female
  --age BAND            \"Under 6 years\", \"6 years\" .. \"13 years\", \"Under 16 years\",
                        \"Under 18 years\", \"Under 21 years\", \"Seniors\"
  --min-weight KG       Minimum weight (inclusive)
  --max-weight KG       Maximum weight (inclusive)
  --belt TIER           Beginner | Intermediate | Advanced
  --seed N              Fixed shuffle seed  [default: env KP_SEED or random]
  --regenerate N        Regenerate all pools N times before printing
  --reshuffle LABEL     Reshuffle one sub-pool (repeatable)

FLAGS:
  --json                Print JSON instead of text sheets
  -h, --help            Print help information

ENVIRONMENT:
  KP_ROSTER             Roster JSON file
  KP_POOL_SIZE          Bout sheet size
  KP_SEED               Shuffle seed
  KP_OUTPUT             text | json
  RUST_LOG              Log level (e.g. info)
";

struct Args {
    overrides: CliOverrides,
    filter: RosterFilter,
    regenerate: usize,
    reshuffle: Vec<String>,
}

fn parse_args() -> Result<Args> {
    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = CliOverrides {
        roster: pargs.opt_value_from_str("--roster")?,
        pool_size: pargs.opt_value_from_str("--size")?,
        seed: pargs.opt_value_from_str("--seed")?,
        json: pargs.contains("--json"),
    };

    let min_weight: Option<String> = pargs.opt_value_from_str("--min-weight")?;
    let max_weight: Option<String> = pargs.opt_value_from_str("--max-weight")?;
    let filter = RosterFilter {
        gender: pargs.opt_value_from_str::<_, Gender>("--gender")?,
        age_band: pargs.opt_value_from_str::<_, AgeBand>("--age")?,
        min_weight: min_weight
            .map(|w| RosterFilter::parse_weight(&w))
            .transpose()?
            .flatten(),
        max_weight: max_weight
            .map(|w| RosterFilter::parse_weight(&w))
            .transpose()?
            .flatten(),
        belt_tier: pargs.opt_value_from_str::<_, BeltTier>("--belt")?,
    };

    let regenerate = pargs.opt_value_from_str("--regenerate")?.unwrap_or(0);
    let reshuffle = pargs.values_from_str("--reshuffle")?;

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("Unexpected arguments: {remaining:?}");
    }

    Ok(Args {
        overrides,
        filter,
        regenerate,
        reshuffle,
    })
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let args = parse_args()?;

    env_logger::builder().format_target(false).init();

    let config = CliConfig::from_env(args.overrides.clone())?;
    config.validate()?;

    match config.seed {
        Some(seed) => {
            info!("Using shuffle seed {seed}");
            run(&config, &args, PartitionSession::new(SeededRandomizer::new(seed)))
        }
        None => run(&config, &args, PartitionSession::new(ThreadRandomizer::new())),
    }
}

fn run<R: Randomizer>(
    config: &CliConfig,
    args: &Args,
    mut session: PartitionSession<R>,
) -> Result<()> {
    let table = roster_file::load_roster(&config.roster_path)?;
    let fields = table.column_map().resolved_fields();
    let roster = table.competitors().context("Roster has no name column")?;
    info!(
        "Loaded {} competitors from {}",
        roster.len(),
        config.roster_path.display()
    );

    let competitors = args.filter.apply(&roster);
    info!(
        "Category {} selects {} of {} competitors",
        args.filter.key(),
        competitors.len(),
        roster.len()
    );

    session.subscribe(|event, pools| info!("{event} ({} pool(s))", pools.len()));
    session.set_competitors(competitors);

    if session.generate(config.target_size.into())? == PartitionOutcome::EmptyInput {
        warn!("No competitors match the selected category");
        println!("No competitors match the selected category.");
        return Ok(());
    }

    for _ in 0..args.regenerate {
        session.regenerate_all()?;
    }
    for label in &args.reshuffle {
        session
            .reshuffle_sub_pool(label)
            .with_context(|| format!("Cannot reshuffle {label}"))?;
    }

    match config.output {
        OutputFormat::Text => {
            print!("{}", sheet::render_text(session.pools(), &fields));
        }
        OutputFormat::Json => {
            let doc = sheet::render_json(session.pools());
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }

    Ok(())
}
