//! Command line front end: solve, verify, benchmark and generate CVRP instances.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_cvrp::bench::{benchmark, BenchmarkReport};
use u_cvrp::evaluation::{total_cost, verify};
use u_cvrp::io;
use u_cvrp::models::Problem;
use u_cvrp::solve;

#[derive(Parser, Debug)]
#[command(about, version, author)]
struct Args {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a problem file and write its routes.
    Solve {
        /// Problem CSV: depot line `x,y,capacity`, then `x,y,demand` per customer.
        #[arg(short, long)]
        input: PathBuf,
        /// Solution CSV to write; routes go to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Draw the problem as SVG.
        #[arg(long)]
        svg_problem: Option<PathBuf>,
        /// Draw the solution as SVG.
        #[arg(long)]
        svg_solution: Option<PathBuf>,
        /// Print the summary as JSON (to stderr when routes go to stdout).
        #[arg(long)]
        json: bool,
    },
    /// Check a solution file against its problem.
    Verify {
        /// Problem CSV.
        #[arg(short, long)]
        problem: PathBuf,
        /// Solution CSV, one route per line.
        #[arg(short, long)]
        solution: PathBuf,
    },
    /// Time repeated solves of one or more problem files.
    Bench {
        /// Problem CSV files.
        #[arg(short, long, num_args = 1.., required = true)]
        input: Vec<PathBuf>,
        /// Solves per problem.
        #[arg(short = 'n', long, default_value_t = 50)]
        iterations: usize,
        /// Print the reports as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Write a random problem file.
    Generate {
        /// Number of customers.
        #[arg(short = 'n', long)]
        size: usize,
        /// Vehicle capacity.
        #[arg(short, long, default_value_t = 100)]
        capacity: i32,
        /// Random seed.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Problem CSV to write.
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Serialize)]
struct SolveSummary<'a> {
    problem: &'a str,
    size: usize,
    routes: usize,
    cost: f64,
    feasible: bool,
    violations: Vec<String>,
}

#[derive(Serialize)]
struct NamedReport<'a> {
    problem: &'a str,
    #[serde(flatten)]
    report: &'a BenchmarkReport,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "u_cvrp=debug" } else { "u_cvrp=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Solve {
            input,
            output,
            svg_problem,
            svg_solution,
            json,
        } => {
            let problem = load_problem(&input)?;
            let outcome = solve(&problem);

            match &output {
                Some(path) => {
                    let file = create(path)?;
                    io::write_solution(BufWriter::new(file), &outcome.solution)
                        .with_context(|| format!("cannot write solution to {}", path.display()))?;
                    info!(path = %path.display(), "wrote solution");
                }
                None => io::write_solution(std::io::stdout().lock(), &outcome.solution)
                    .context("cannot write solution to stdout")?,
            }
            if let Some(path) = &svg_problem {
                write_text(path, &io::render_problem_svg(&problem))?;
            }
            if let Some(path) = &svg_solution {
                write_text(path, &io::render_solution_svg(&problem, &outcome.solution))?;
            }

            // Routes own stdout when no output file is given.
            let mut report: Box<dyn Write> = if output.is_some() {
                Box::new(std::io::stdout().lock())
            } else {
                Box::new(std::io::stderr().lock())
            };
            let name = display_name(&input);
            let summary = SolveSummary {
                problem: &name,
                size: problem.size(),
                routes: outcome.solution.num_routes(),
                cost: outcome.cost,
                feasible: outcome.is_feasible(),
                violations: outcome.verification.violations().iter().map(|v| v.to_string()).collect(),
            };
            if json {
                writeln!(report, "{}", serde_json::to_string_pretty(&summary)?)?;
            } else {
                writeln!(report, "Problem\tSize\tRoutes\tCost\tFeasible")?;
                writeln!(
                    report,
                    "{}\t{}\t{}\t{:.6}\t{}",
                    summary.problem, summary.size, summary.routes, summary.cost, summary.feasible
                )?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify { problem, solution } => {
            let problem_data = load_problem(&problem)?;
            let file = open(&solution)?;
            let solution_data = io::read_solution(BufReader::new(file), &problem_data)
                .with_context(|| format!("cannot read solution {}", solution.display()))?;

            let report = verify(&solution_data, &problem_data);
            let cost = total_cost(&solution_data, &problem_data.depot());
            for v in report.violations() {
                println!("FAIL {v}");
            }
            println!(
                "{} routes={} cost={cost:.6}",
                if report.is_ok() { "OK" } else { "INFEASIBLE" },
                solution_data.num_routes()
            );
            Ok(if report.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Command::Bench {
            input,
            iterations,
            json,
        } => {
            let mut reports = Vec::with_capacity(input.len());
            for path in &input {
                let problem = load_problem(path)?;
                reports.push((display_name(path), benchmark(&problem, iterations)));
            }

            if json {
                let named: Vec<NamedReport<'_>> = reports
                    .iter()
                    .map(|(name, report)| NamedReport { problem: name, report })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&named)?);
            } else {
                println!("Problem\tSize\tCost\tBaseline\tMean ms\tMin ms\tMax ms");
                for (name, r) in &reports {
                    println!(
                        "{name}\t{}\t{:.6}\t{:.6}\t{:.3}\t{:.3}\t{:.3}",
                        r.size, r.outcome.cost, r.baseline_cost, r.mean_ms, r.min_ms, r.max_ms
                    );
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Generate {
            size,
            capacity,
            seed,
            output,
        } => {
            let problem = io::generate_problem(size, capacity, seed)?;
            let file = create(&output)?;
            io::write_problem(BufWriter::new(file), &problem)
                .with_context(|| format!("cannot write problem to {}", output.display()))?;
            info!(path = %output.display(), size, capacity, seed, "generated problem");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_problem(path: &Path) -> Result<Problem> {
    let file = open(path)?;
    io::read_problem(BufReader::new(file)).with_context(|| format!("cannot read problem {}", path.display()))
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("cannot open {}", path.display()))
}

fn create(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("cannot create {}", path.display()))
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    let mut file = create(path)?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("cannot write {}", path.display()))
}

fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
