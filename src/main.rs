use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use fcfs_schedule::gantt::{GanttChart, Palette};
use fcfs_schedule::models::{Process, ScheduleResult};
use fcfs_schedule::scheduler::{FcfsScheduler, ScheduleKpi, ScheduleRequest};
use fcfs_schedule::validation::validate_input;

/// Compute an FCFS schedule for a JSON list of processes.
#[derive(Parser)]
#[command(name = "fcfs", version)]
struct Args {
    /// JSON file with `[{"id", "arrival", "burst"}, ...]` or a request
    /// object `{"processes": [...], "origin": t}`. Reads stdin when absent.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Time the CPU becomes available; overrides the request's origin.
    #[arg(long)]
    origin: Option<i64>,

    /// Characters per time unit in the Gantt chart.
    #[arg(long, default_value_t = 2)]
    scale: usize,

    /// Print the schedule as JSON instead of tables.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logger_builder(args.verbose, Env::default()).init();

    let raw = read_input(args.input.as_ref())?;
    let mut request = parse_request(&raw)?;
    if let Some(origin) = args.origin {
        request = request.with_origin(origin);
    }

    if let Err(errors) = validate_input(&request.processes) {
        for e in &errors {
            warn!("{e}");
        }
        return Err(anyhow!("{} invalid process(es) in input", errors.len()));
    }
    info!("scheduling {} process(es)", request.processes.len());

    let result = FcfsScheduler::new().schedule_request(&request)?;
    let kpi = ScheduleKpi::calculate(&result);

    if args.json {
        let chart = GanttChart::from_result(&result, &Palette::default());
        let out = serde_json::json!({
            "schedule": result,
            "kpi": kpi,
            "gantt": chart.segments,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_table(&result);
    println!();
    let chart = GanttChart::from_result(&result, &Palette::default()).with_scale(args.scale);
    println!("{chart}");
    println!();
    print_metrics(&kpi);
    Ok(())
}

/// Info by default, Debug with `-v`; the `env` filter (RUST_LOG) is
/// applied last so it overrides both.
fn logger_builder(verbose: bool, env: Env<'_>) -> env_logger::Builder {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_env(env);
    builder
}

/// Accepts a bare process list or a request object.
fn parse_request(raw: &str) -> Result<ScheduleRequest> {
    if raw.trim_start().starts_with('[') {
        let processes: Vec<Process> =
            serde_json::from_str(raw).context("invalid process list")?;
        Ok(ScheduleRequest::new(processes))
    } else {
        serde_json::from_str(raw).context("invalid schedule request")
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print_table(result: &ScheduleResult) {
    println!(
        "{:<10} {:>8} {:>6} {:>6} {:>8} {:>7} {:>11}",
        "ID", "Arrival", "Burst", "Start", "Waiting", "Finish", "Turnaround"
    );
    for p in result {
        println!(
            "{:<10} {:>8} {:>6} {:>6} {:>8} {:>7} {:>11}",
            p.id(),
            p.arrival(),
            p.burst(),
            p.start,
            p.waiting,
            p.finish,
            p.turnaround
        );
    }
}

fn print_metrics(kpi: &ScheduleKpi) {
    println!("Average waiting time:    {:.2}", kpi.average_waiting);
    println!("Average turnaround time: {:.2}", kpi.average_turnaround);
    println!("Makespan:                {}", kpi.makespan);
    println!("CPU idle time:           {}", kpi.idle_time);
    println!("CPU utilization:         {:.1}%", kpi.utilization * 100.0);
    println!("Throughput:              {:.3} processes/unit", kpi.throughput);
}
