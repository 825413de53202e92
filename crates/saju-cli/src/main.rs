mod config;
mod server;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use rmcp::{ServiceExt, transport::stdio};
use saju_calendar::SexagenaryCalendar;
use saju_core::{
    BirthInput, CivilDate, Direction, FortunePeriod, PillarPosition, PropertyFeatures, SajuEngine,
    SajuProfile,
};
use serde::Serialize;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "saju", about = "Saju birth-chart engine CLI and MCP server")]
struct Cli {
    /// Config file (default: $SAJU_CONFIG, then ~/.saju/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    date: String,

    /// Birth time, HH:MM in 24-hour form; omit if unknown
    #[arg(long)]
    time: Option<String>,

    /// Read --date as a lunar calendar date
    #[arg(long)]
    lunar: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl BirthArgs {
    fn input(&self) -> Result<BirthInput> {
        BirthInput::parse(&self.date, self.time.as_deref(), self.lunar)
            .context("invalid birth date or time")
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server on stdio transport
    Serve,

    /// Show the four pillars and their classifications
    Profile {
        #[command(flatten)]
        birth: BirthArgs,
    },

    /// Fortune for a day, month or year
    Fortune {
        #[command(flatten)]
        birth: BirthArgs,

        /// daily, monthly or yearly
        #[arg(long, default_value = "daily")]
        period: String,

        /// Date the period is taken from, YYYY-MM-DD (default: today at the
        /// configured utc_offset_hours, UTC when unset)
        #[arg(long)]
        on: Option<String>,
    },

    /// Health advice for the lacking element
    Health {
        #[command(flatten)]
        birth: BirthArgs,
    },

    /// Score a property against the chart
    Score {
        #[command(flatten)]
        birth: BirthArgs,

        /// Facing, e.g. south, NE, 남향
        #[arg(long)]
        direction: Option<String>,

        /// Floor number
        #[arg(long, allow_negative_numbers = true)]
        floor: Option<i32>,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn open_engine(cli: &Cli) -> Result<SajuEngine<SexagenaryCalendar>> {
    let config = Config::resolve(cli.config.as_deref())?;
    config.engine()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Serve => cmd_serve(&cli).await,
        Commands::Profile { birth } => cmd_profile(&cli, birth),
        Commands::Fortune { birth, period, on } => cmd_fortune(&cli, birth, period, on.as_deref()),
        Commands::Health { birth } => cmd_health(&cli, birth),
        Commands::Score {
            birth,
            direction,
            floor,
        } => cmd_score(&cli, birth, direction.as_deref(), *floor),
    }
}

async fn cmd_serve(cli: &Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    let server = server::SajuServer::new(config.engine()?, config.utc_offset_minutes());
    tracing::info!("starting MCP server");

    // a client that hangs up before the handshake is not a server failure
    let service = match server.serve(stdio()).await {
        Ok(service) => service,
        Err(e) => {
            tracing::warn!("MCP session ended before initialization: {e}");
            return Ok(());
        }
    };

    tokio::select! {
        res = service.waiting() => {
            res.context("MCP server failed")?;
            tracing::info!("client disconnected");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted; shutting down");
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Profile header shared by every text report.
fn print_chart(profile: &SajuProfile) {
    let pillars = profile.pillars();
    println!("birth:      {}", profile.birth_date());
    match profile.birth_time() {
        Some(t) => println!("time:       {t}"),
        None => println!("time:       unknown"),
    }
    if profile.calendar_degraded() {
        println!("note:       lunar date not in the lunar table; read as solar");
    } else if profile.is_lunar() {
        println!("solar:      {}", profile.solar_date());
    }
    let hanja: Vec<String> = pillars.iter().map(|(_, p)| p.hanja()).collect();
    println!("pillars:    {pillars} ({})", hanja.join(" "));
    let dm = profile.day_master();
    println!(
        "day master: {dm} ({}, {})",
        dm.element().label(),
        dm.polarity().label()
    );
}

fn cmd_profile(cli: &Cli, birth: &BirthArgs) -> Result<()> {
    let engine = open_engine(cli)?;
    let profile = engine.profile(&birth.input()?);
    if birth.json {
        return print_json(&profile);
    }

    print_chart(&profile);
    let counts = profile.element_counts();
    let tally: Vec<String> = saju_core::Element::ALL
        .iter()
        .map(|e| format!("{}={:.1}", e.label(), counts.get(*e)))
        .collect();
    println!("elements:   {}", tally.join(" "));
    println!("dominant:   {}", profile.dominant_element().label());
    println!("lacking:    {}", profile.lacking_element().label());

    let gods = profile.ten_gods();
    println!(
        "ten gods:   year {}/{}  month {}/{}  day -/{}  hour {}/{}",
        gods.year_stem.label(),
        gods.year_branch.label(),
        gods.month_stem.label(),
        gods.month_branch.label(),
        gods.day_branch.label(),
        gods.hour_stem.label(),
        gods.hour_branch.label(),
    );

    let stages = profile.stages();
    let stage_line: Vec<String> = PillarPosition::ALL
        .iter()
        .map(|pos| {
            let stage = match pos {
                PillarPosition::Year => stages.year,
                PillarPosition::Month => stages.month,
                PillarPosition::Day => stages.day,
                PillarPosition::Hour => stages.hour,
            };
            format!("{} {}", pos.label(), stage.label())
        })
        .collect();
    println!("stages:     {}", stage_line.join("  "));

    if profile.spirits().is_empty() {
        println!("spirits:    none");
    } else {
        let names: Vec<&str> = profile.spirits().as_slice().iter().map(|s| s.label()).collect();
        println!("spirits:    {}", names.join(", "));
    }
    Ok(())
}

fn cmd_fortune(cli: &Cli, birth: &BirthArgs, period: &str, on: Option<&str>) -> Result<()> {
    let period = FortunePeriod::from_str_lossy(period)
        .ok_or_else(|| anyhow!("period must be daily, monthly or yearly, got '{period}'"))?;
    let config = Config::resolve(cli.config.as_deref())?;
    let on = match on {
        Some(s) => s.parse::<CivilDate>().context("invalid --on date")?,
        None => config.today(),
    };

    let engine = config.engine()?;
    let profile = engine.profile(&birth.input()?);
    let fortune = engine.fortune(&profile, period, on);
    if birth.json {
        return print_json(&fortune);
    }

    println!("{}", fortune.date);
    println!("{} ({}/100)", fortune.title, fortune.score);
    println!("ten god:    {}", fortune.ten_god.label());
    println!("{}", fortune.content);
    Ok(())
}

fn cmd_health(cli: &Cli, birth: &BirthArgs) -> Result<()> {
    let engine = open_engine(cli)?;
    let profile = engine.profile(&birth.input()?);
    let advice = engine.health(&profile);
    if birth.json {
        return print_json(&advice);
    }

    println!("lacking:    {}", advice.element.label());
    println!("organs:     {}", advice.organ);
    println!("advice:     {}", advice.advice);
    println!("food:       {}", advice.food);
    Ok(())
}

fn cmd_score(
    cli: &Cli,
    birth: &BirthArgs,
    direction: Option<&str>,
    floor: Option<i32>,
) -> Result<()> {
    let direction = direction
        .map(str::parse::<Direction>)
        .transpose()
        .context("invalid --direction")?;

    let engine = open_engine(cli)?;
    let profile = engine.profile(&birth.input()?);
    let report = engine.score(&profile, &PropertyFeatures { direction, floor });
    if birth.json {
        return print_json(&report);
    }

    println!("score:      {}/100", report.score);
    println!("{}", report.comment);
    match report.lucky_direction {
        Some(d) => println!("lucky:      {} ({d})", d.label()),
        None => println!("lucky:      centre (earth)"),
    }
    println!("investment: {}", report.details.investment);
    println!("styling:    {}", report.details.styling);
    println!("location:   {}", report.details.location);
    Ok(())
}
