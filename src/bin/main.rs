use clap::{Args, Parser, Subcommand};
use crossterm::style::Stylize;
use personality_core::corpus::{default_corpus, load_corpus};
use personality_core::evaluation::{evaluate, train_test_split};
use personality_core::report::{format_prediction, save_report};
use personality_core::{IoLayerError, LabeledExample, PipelineConfig, TrainedModel};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "personality_cli")]
#[command(about = "Predict a personality trait from résumé text")]
#[command(version)]
struct Cli {
    /// Log filter, e.g. `debug` or `personality_core=info` (defaults to RUST_LOG, then `warn`)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ModelArgs {
    /// JSON corpus of {"text", "label"} objects (built-in corpus if omitted)
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// JSON pipeline config
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the most likely trait for a plain-text résumé
    Predict {
        document: PathBuf,

        #[command(flatten)]
        model: ModelArgs,

        /// Also write the result to this text file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Print the probability of every trait
    Probabilities {
        document: PathBuf,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Train on a seeded split of the corpus and report held-out accuracy
    Evaluate {
        #[command(flatten)]
        model: ModelArgs,

        #[arg(long, default_value = "0.2")]
        test_ratio: f64,

        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(command: Commands) -> Result<(), IoLayerError> {
    match command {
        Commands::Predict { document, model, save } => {
            let trained = train(&model)?;
            let prediction = trained.predict(&read_document(&document)?)?;
            let text = format_prediction(&prediction);
            if std::io::stdout().is_terminal() {
                println!("Predicted Personality: {}", prediction.label.as_str().bold().green());
                println!("Confidence: {}%", prediction.confidence_display());
            } else {
                println!("{text}");
            }
            if let Some(path) = save {
                save_report(&prediction, &path)?;
                eprintln!("Result saved to '{}'", path.display());
            }
        }
        Commands::Probabilities { document, model } => {
            let trained = train(&model)?;
            for (label, p) in trained.predict_proba(&read_document(&document)?)? {
                println!("{label:<20} {:>6.2}%", p * 100.0);
            }
        }
        Commands::Evaluate { model, test_ratio, seed } => {
            let examples = corpus(&model)?;
            let (train_set, test_set) = train_test_split(&examples, test_ratio, seed);
            let trained = TrainedModel::fit(&train_set, &config(&model)?)?;
            let eval = evaluate(&trained, &test_set)?;
            println!(
                "Accuracy: {:.2}% ({}/{} held-out examples, {} used for training)",
                eval.accuracy() * 100.0,
                eval.correct,
                eval.total,
                train_set.len()
            );
        }
    }
    Ok(())
}

fn corpus(args: &ModelArgs) -> Result<Vec<LabeledExample>, IoLayerError> {
    match &args.corpus {
        Some(path) => load_corpus(path),
        None => Ok(default_corpus()),
    }
}

fn config(args: &ModelArgs) -> Result<PipelineConfig, IoLayerError> {
    match &args.config {
        Some(path) => PipelineConfig::from_json_file(path),
        None => Ok(PipelineConfig::default()),
    }
}

fn train(args: &ModelArgs) -> Result<TrainedModel, IoLayerError> {
    Ok(TrainedModel::fit(&corpus(args)?, &config(args)?)?)
}

fn read_document(path: &Path) -> Result<String, IoLayerError> {
    std::fs::read_to_string(path)
        .map_err(|source| IoLayerError::Io { path: path.display().to_string(), source })
}
