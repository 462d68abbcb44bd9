use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recite::cli::output::{print_report, print_threshold_summary, OutputFormat, TextStyle};
use recite::cli::{failing_attempts, score_attempts};
use recite::config::Overrides;
use recite::input::TextLoader;
use recite::{Config, Language};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "recite")]
#[command(version, about = "Score a recitation transcript against its reference text", long_about = None)]
struct Cli {
    /// Reference text file ('-' for stdin)
    #[arg(value_name = "REFERENCE", required_unless_present = "completion")]
    reference: Option<String>,

    /// Recognized transcript files, one per attempt ('-' for stdin)
    #[arg(value_name = "RECOGNIZED", required_unless_present = "completion")]
    recognized: Vec<String>,

    /// Treat REFERENCE and RECOGNIZED as literal text instead of file paths
    #[arg(long)]
    inline: bool,

    /// Language rules: latin, turkish or arabic
    #[arg(short, long, env = "RECITE_LANGUAGE")]
    language: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Show the recognized word instead of the reference word where both exist
    #[arg(long)]
    show_recognized: bool,

    /// Exit with code 1 if any attempt scores below this ratio (0.0 - 1.0)
    #[arg(long, value_name = "RATIO")]
    fail_under: Option<f64>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recite", &mut io::stdout());
        return Ok(());
    }

    if let Some(ratio) = cli.fail_under {
        if !(0.0..=1.0).contains(&ratio) {
            anyhow::bail!("--fail-under must be between 0.0 and 1.0, got {}", ratio);
        }
    }

    let config = Config::load(Overrides {
        language: cli.language.clone(),
        format: cli.format,
        min_accuracy: cli.fail_under,
        show_recognized: cli.show_recognized,
        no_color: cli.no_color,
    })?;

    let Some(reference_arg) = cli.reference.as_deref() else {
        anyhow::bail!("No reference specified. Use --help for usage information.");
    };
    if cli.recognized.is_empty() {
        anyhow::bail!("No recognized text specified. Use --help for usage information.");
    }

    let mut loader = TextLoader::new(cli.inline);
    let reference = loader.load(reference_arg)?;
    let recognized = cli
        .recognized
        .iter()
        .map(|arg| loader.load(arg))
        .collect::<Result<Vec<_>, _>>()?;

    let language = Language::from_tag(&config.language);
    let attempts = score_attempts(&reference.text, &recognized, language);

    let style = TextStyle {
        colored: config.color,
        show_reference: config.show_reference,
    };
    print_report(&reference.source, &attempts, language, config.format, style)?;

    if let Some(min_accuracy) = config.min_accuracy {
        let failing = failing_attempts(&attempts, min_accuracy);
        if config.format == OutputFormat::Text {
            print_threshold_summary(failing, attempts.len(), min_accuracy, config.color);
        }
        if failing > 0 {
            std::process::exit(1);
        }
    }

    Ok(())
}
