use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use lol_merge::{merge, merge_all, MergeError, MergeSummary};
use lol_names::{NameLookup, NameTable};
use lol_types::{MatchRecord, Player, Side};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::cli::*;
use crate::config::CliConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = CliConfig::resolve(cli.config.as_deref())?;
    debug!(?config, "loaded configuration");
    match cli.command {
        Command::Merge(args) => cmd_merge(args, &config, cli.format),
        Command::Check(args) => cmd_check(args, cli.format),
        Command::Show(args) => cmd_show(args, &config, cli.format),
    }
}

fn read_record(path: &Path) -> anyhow::Result<MatchRecord> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to decode {}", path.display()))
}

fn encode_record(record: &MatchRecord, pretty: bool) -> anyhow::Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    };
    Ok(text)
}

/// Fold-merge the records in `paths`, left to right.
fn merge_files(paths: &[PathBuf]) -> anyhow::Result<(MatchRecord, MergeSummary)> {
    let records = paths
        .iter()
        .map(|path| read_record(path))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let (merged, summary) = merge_all(&records)
        .with_context(|| format!("failed to merge {} files", records.len()))?
        .context("no input files")?;
    info!(files = records.len(), players = merged.player_count(), "merged");
    Ok((merged, summary))
}

fn cmd_merge(args: MergeArgs, config: &CliConfig, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let (merged, summary) = merge_files(&args.files)?;
    let text = encode_record(&merged, config.pretty_or(args.pretty))?;
    match &args.output {
        Some(path) => fs::write(path, text + "\n")
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{text}"),
    }

    match format {
        OutputFormat::Json => eprintln!("{}", serde_json::to_string(&summary)?),
        OutputFormat::Text => {
            eprintln!("{} Merged {} files", "✓".green().bold(), args.files.len());
            eprintln!(
                "  Scalars: {} ({} agreed, {} one-sided)",
                summary.scalars_total(),
                summary.scalars_agreed,
                summary.scalars_one_sided
            );
            eprintln!(
                "  Elements: {} matched, {} carried over",
                summary.elements_matched, summary.elements_carried
            );
            eprintln!("  Events: {}", summary.events_combined);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Machine-readable outcome of a merge attempt.
fn check_report(result: &Result<MatchRecord, MergeError>) -> Value {
    match result {
        Ok(_) => json!({ "clean": true }),
        Err(MergeError::Conflict { path, left, right }) => json!({
            "clean": false,
            "kind": "conflict",
            "path": path,
            "left": left,
            "right": right,
        }),
        Err(MergeError::Correspondence { path, reason }) => json!({
            "clean": false,
            "kind": "correspondence",
            "path": path,
            "reason": reason,
        }),
    }
}

fn cmd_check(args: CheckArgs, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let base = read_record(&args.base)?;
    let incoming = read_record(&args.incoming)?;
    let result = merge(&base, &incoming);

    match format {
        OutputFormat::Json => println!("{}", check_report(&result)),
        OutputFormat::Text => match &result {
            Ok(_) => println!("{} Records merge cleanly", "✓".green().bold()),
            Err(MergeError::Conflict { path, left, right }) => {
                println!("{} Conflict at {}", "✗".red().bold(), path.yellow());
                println!("  {}: {}", args.base.display(), left);
                println!("  {}: {}", args.incoming.display(), right);
            }
            Err(MergeError::Correspondence { path, reason }) => {
                println!("{} Ambiguous correspondence at {}", "✗".red().bold(), path.yellow());
                println!("  {reason}");
            }
        },
    }

    Ok(if result.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Overview {
    game_id: Option<i64>,
    patch: Option<String>,
    duration: Option<f64>,
    winner: Option<Side>,
    teams: Vec<TeamOverview>,
    events: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TeamOverview {
    side: Side,
    bans: Vec<String>,
    players: Vec<PlayerOverview>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayerOverview {
    champion: String,
    name: Option<String>,
    role: Option<String>,
    kills: Option<u32>,
    deaths: Option<u32>,
    assists: Option<u32>,
    gold: Option<u32>,
    snapshots: usize,
}

fn player_overview(player: &Player, names: &impl NameLookup) -> PlayerOverview {
    let stats = &player.end_of_game_stats;
    PlayerOverview {
        champion: player
            .champion_id
            .map(|id| names.champion_name(id))
            .unwrap_or_else(|| "?".to_string()),
        name: player.in_game_name.clone(),
        role: player.role.clone(),
        kills: stats.kills,
        deaths: stats.deaths,
        assists: stats.assists,
        gold: stats.gold,
        snapshots: player.snapshots.len(),
    }
}

fn overview(record: &MatchRecord, names: &impl NameLookup) -> Overview {
    let teams = record
        .teams
        .iter()
        .map(|(side, team)| TeamOverview {
            side,
            bans: team.bans.iter().map(|id| names.champion_name(*id)).collect(),
            players: team.players.iter().map(|p| player_overview(p, names)).collect(),
        })
        .collect();
    Overview {
        game_id: record.sources.riot_lol_api.game_id,
        patch: record.patch.clone(),
        duration: record.duration,
        winner: record.winner,
        teams,
        events: record.events.len(),
    }
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

fn render_overview(overview: &Overview) -> String {
    let mut out = String::new();
    let title = match overview.game_id {
        Some(id) => format!("Game {id}"),
        None => "Game".to_string(),
    };
    out.push_str(&format!(
        "{}  patch {}  duration {}  winner {}\n",
        title.bold(),
        or_dash(overview.patch.as_deref()),
        overview.duration.map(format_duration).unwrap_or_else(|| "-".into()),
        or_dash(overview.winner)
    ));
    for team in &overview.teams {
        let heading = match team.side {
            Side::Blue => team.side.as_str().blue().bold(),
            Side::Red => team.side.as_str().red().bold(),
        };
        out.push_str(&format!("{heading}\n"));
        if !team.bans.is_empty() {
            out.push_str(&format!("  bans: {}\n", team.bans.join(", ")));
        }
        for p in &team.players {
            out.push_str(&format!(
                "  {:<14} {:<16} {}/{}/{}  gold {}  snapshots {}\n",
                p.champion,
                p.name.as_deref().unwrap_or("-"),
                or_dash(p.kills),
                or_dash(p.deaths),
                or_dash(p.assists),
                or_dash(p.gold),
                p.snapshots
            ));
        }
    }
    out.push_str(&format!("events: {}\n", overview.events));
    out
}

fn cmd_show(args: ShowArgs, config: &CliConfig, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let record = read_record(&args.file)?;
    let names = match config.names_or(args.names) {
        Some(path) => NameTable::load(&path)?,
        None => NameTable::new(),
    };
    let overview = overview(&record, &names);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&overview)?),
        OutputFormat::Text => print!("{}", render_overview(&overview)),
    }
    Ok(ExitCode::SUCCESS)
}
