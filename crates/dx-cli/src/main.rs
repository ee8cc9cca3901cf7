//! discretia CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use dx_core::{DistributionParameters, HypergeometricParams, PoissonParams};
use dx_viz::{BarChartArtifact, FrameRecorder, JsonLinesTarget, Session};
use dx_viz_render::config::{VizConfig, resolve_config};
use std::path::{Path, PathBuf};

mod session_spec;
mod svg_target;

use svg_target::SvgDirTarget;

const SESSION_RESULT_V0: &str = "discretia_session_result_v0";

#[derive(Parser)]
#[command(name = "discretia")]
#[command(about = "discretia - Hypergeometric and Poisson distributions, explained")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct StyleArgs {
    /// Built-in theme (discretia, minimal, classroom)
    #[arg(long)]
    theme: Option<String>,

    /// YAML file with styling overrides
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Hypergeometric bar chart artifact (sampling without replacement)
    Hyper {
        /// Population size N
        #[arg(short = 'N', long, default_value = "52")]
        population: u64,

        /// Successes in the population K (capped at N)
        #[arg(short = 'K', long, default_value = "13")]
        successes: u64,

        /// Sample size n (capped at N)
        #[arg(short = 'n', long, default_value = "5")]
        draws: u64,

        /// Output file for the artifact (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also render the chart to this SVG file.
        #[arg(long)]
        svg: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Poisson bar chart artifact (event counts at a fixed rate)
    Poisson {
        /// Average rate λ
        #[arg(short, long, default_value = "4")]
        rate: f64,

        /// Output file for the artifact (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also render the chart to this SVG file.
        #[arg(long)]
        svg: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Render a bar chart artifact JSON to SVG
    Render {
        /// Input artifact (output of `hyper` / `poisson`)
        #[arg(short, long)]
        input: PathBuf,

        /// Output SVG file
        #[arg(short, long)]
        output: PathBuf,

        /// Artifact kind
        #[arg(long, default_value = "bar")]
        kind: String,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Replay a session script of slider changes
    Session {
        /// Session script (YAML or JSON, schema_version: discretia_session_v0)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the session result (pretty JSON). Defaults to stdout.
        #[arg(short, long, conflicts_with = "jsonl")]
        output: Option<PathBuf>,

        /// Stream one artifact per line to stdout instead of a single result document.
        #[arg(long)]
        jsonl: bool,

        /// Also write one SVG per frame into this directory.
        #[arg(long)]
        svg_dir: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Multiple-choice quizzes
    Quiz {
        #[command(subcommand)]
        command: QuizCommands,
    },

    /// Print version information
    Version,
}

#[derive(Subcommand)]
enum QuizCommands {
    /// List quizzes
    List,

    /// Show every question of one quiz
    Show {
        /// Quiz id (e.g., quiz-hyper)
        id: String,
    },

    /// Check one answer and reveal the solution
    Check {
        /// Quiz id (e.g., quiz-hyper)
        id: String,

        /// Question index (0-based)
        #[arg(long)]
        question: usize,

        /// Chosen option index (0-based)
        #[arg(long)]
        option: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Hyper { population, successes, draws, output, svg, style } => {
            let params = HypergeometricParams::new(population, successes, draws);
            cmd_chart(params.into(), output.as_ref(), svg.as_deref(), &style)
        }
        Commands::Poisson { rate, output, svg, style } => {
            let params = PoissonParams::new(rate)?;
            cmd_chart(params.into(), output.as_ref(), svg.as_deref(), &style)
        }
        Commands::Render { input, output, kind, style } => {
            cmd_render(&input, &output, &kind, &style)
        }
        Commands::Session { input, output, jsonl, svg_dir, style } => {
            cmd_session(&input, output.as_ref(), jsonl, svg_dir.as_deref(), &style)
        }
        Commands::Quiz { command } => match command {
            QuizCommands::List => cmd_quiz_list(),
            QuizCommands::Show { id } => cmd_quiz_show(&id),
            QuizCommands::Check { id, question, option } => cmd_quiz_check(&id, question, option),
        },
        Commands::Version => {
            println!("discretia {}", dx_core::VERSION);
            Ok(())
        }
    }
}

fn cmd_chart(
    params: DistributionParameters,
    output: Option<&PathBuf>,
    svg: Option<&Path>,
    style: &StyleArgs,
) -> Result<()> {
    if let DistributionParameters::Hypergeometric(p) = params {
        if !p.is_consistent() {
            tracing::info!(
                population = p.population,
                successes = p.successes,
                draws = p.draws,
                "K or n exceed N; capping at N"
            );
        }
    }

    let artifact = BarChartArtifact::compute(&params);
    tracing::info!(
        distribution = %artifact.distribution,
        points = artifact.labels.len(),
        "artifact computed"
    );

    if let Some(path) = svg {
        let config = load_viz_config(style)?;
        let svg = dx_viz_render::plots::bar::render(&artifact, &config)?;
        dx_viz_render::output::svg::save_svg(&svg, path)?;
        tracing::info!(path = %path.display(), "svg written");
    }

    write_json(output, serde_json::to_value(&artifact)?)
}

fn cmd_render(input: &Path, output: &Path, kind: &str, style: &StyleArgs) -> Result<()> {
    if !dx_viz_render::KINDS.contains(&kind) {
        anyhow::bail!("unknown kind: {kind} (expected one of {:?})", dx_viz_render::KINDS);
    }
    let config = load_viz_config(style)?;
    tracing::info!(path = %input.display(), "reading artifact");
    let json = std::fs::read_to_string(input)?;
    dx_viz_render::render_to_file(&json, kind, output, &config)?;
    tracing::info!(path = %output.display(), "svg written");
    Ok(())
}

fn cmd_session(
    input: &Path,
    output: Option<&PathBuf>,
    jsonl: bool,
    svg_dir: Option<&Path>,
    style: &StyleArgs,
) -> Result<()> {
    tracing::info!(path = %input.display(), "loading session script");
    let script = session_spec::read_session_spec(input)?;
    tracing::info!(events = script.events.len(), "session script loaded");

    let svg_target = match svg_dir {
        Some(dir) => Some(SvgDirTarget::new(dir, load_viz_config(style)?)?),
        None => None,
    };

    if jsonl {
        let stdout = std::io::stdout();
        let target = (JsonLinesTarget::new(stdout.lock()), svg_target);
        let mut session = Session::new(script.initial, target)?;
        let frames = session.run(script.events)?;
        let (lines, _) = session.into_target();
        lines.finish()?;
        tracing::info!(frames, "session complete");
        return Ok(());
    }

    let mut session = Session::new(script.initial, (FrameRecorder::new(), svg_target))?;
    let frames = session.run(script.events)?;
    let final_state = session.state();
    let (recorder, svg_target) = session.into_target();
    tracing::info!(frames, "session complete");

    let artifacts: Vec<BarChartArtifact> =
        recorder.frames.iter().map(BarChartArtifact::from_frame).collect();
    let svg_files: Vec<String> = svg_target
        .as_ref()
        .map(|t| t.written().iter().map(|p| p.display().to_string()).collect())
        .unwrap_or_default();

    let output_json = serde_json::json!({
        "schema_version": SESSION_RESULT_V0,
        "frames": frames,
        "final_state": final_state,
        "artifacts": artifacts,
        "svg_files": svg_files,
    });
    write_json(output, output_json)
}

fn cmd_quiz_list() -> Result<()> {
    let quizzes: Vec<serde_json::Value> = dx_viz::QUIZZES
        .iter()
        .map(|q| {
            serde_json::json!({
                "id": q.id,
                "title": q.title,
                "questions": q.questions.len(),
            })
        })
        .collect();
    write_json(None, serde_json::Value::Array(quizzes))
}

fn cmd_quiz_show(id: &str) -> Result<()> {
    let quiz =
        dx_viz::quiz::quiz(id).ok_or_else(|| anyhow::anyhow!("unknown quiz id: {id}"))?;
    write_json(None, serde_json::to_value(quiz)?)
}

fn cmd_quiz_check(id: &str, question: usize, option: usize) -> Result<()> {
    let outcome = dx_viz::check_answer(id, question, option)?;
    tracing::info!(quiz = id, question, correct = outcome.correct, "answer checked");
    write_json(None, serde_json::to_value(&outcome)?)
}

fn load_viz_config(style: &StyleArgs) -> Result<VizConfig> {
    let yaml = match &style.config {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => None,
    };
    Ok(resolve_config(style.theme.as_deref(), yaml.as_deref())?)
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
