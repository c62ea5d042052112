use log::error;
use std::env;
use std::fs;
use std::io::{self, Read};
use typescribe::{
    assess_submission, compare_words, render_typed_comparison, ComparisonResult, Error, Language,
    PassageCatalog, Submission,
};

struct CliArgs {
    reference_path: Option<String>,
    language: Language,
    typed_keystrokes: Option<usize>,
    duration_secs: Option<f64>,
}

fn parse_args(args: &[String]) -> Result<CliArgs, Error> {
    let mut cli_args = CliArgs {
        reference_path: None,
        language: Language::English,
        typed_keystrokes: None,
        duration_secs: None,
    };

    let mut args_iter = args.iter();

    while let Some(arg) = args_iter.next() {
        let mut value_for = |flag: &str| {
            args_iter
                .next()
                .cloned()
                .ok_or_else(|| Error::ParserError(format!("missing value for {}", flag)))
        };

        match arg.as_str() {
            "--reference" => cli_args.reference_path = Some(value_for(arg.as_str())?),
            "--language" => cli_args.language = Language::from_name(&value_for(arg.as_str())?),
            "--keystrokes" => {
                let value = value_for(arg.as_str())?;
                cli_args.typed_keystrokes = Some(value.parse().map_err(|_| {
                    Error::ParserError(format!("invalid keystroke count: {}", value))
                })?);
            }
            "--duration" => {
                let value = value_for(arg.as_str())?;
                cli_args.duration_secs = Some(value.parse().map_err(|_| {
                    Error::ParserError(format!("invalid duration: {}", value))
                })?);
            }
            other => return Err(Error::ParserError(format!("unknown argument: {}", other))),
        }
    }

    Ok(cli_args)
}

fn load_reference_text(cli_args: &CliArgs) -> Result<String, Error> {
    match &cli_args.reference_path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let catalog = PassageCatalog::load_embedded()?;
            catalog
                .get(cli_args.language)
                .map(|passage| passage.content.clone())
                .ok_or_else(|| {
                    Error::MissingPassage(format!("no sample passage for {}", cli_args.language))
                })
        }
    }
}

fn print_comparison(comparison: &ComparisonResult) {
    let stats = &comparison.stats;

    println!("{}", render_typed_comparison(&comparison.typed_comparison));
    println!();
    println!("Total words:   {}", stats.total_words);
    println!("Typed words:   {}", stats.typed_word_count());
    println!("Correct words: {}", stats.correct_words);
    println!("Wrong words:   {}", stats.wrong_words);
    println!("Skipped words: {}", stats.skipped_words);
    println!("Extra words:   {}", stats.extra_words);
    println!("Full mistakes: {}", stats.total_errors);
    println!("Accuracy:      {}%", stats.accuracy);
}

fn run() -> Result<(), Error> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cli_args = parse_args(&args)?;

    let original_text = load_reference_text(&cli_args)?;

    // Read the typed text from stdin
    let mut typed_text = String::new();
    io::stdin().read_to_string(&mut typed_text)?;

    match (cli_args.typed_keystrokes, cli_args.duration_secs) {
        (Some(typed_keystrokes), Some(duration_secs)) => {
            let assessment = assess_submission(&Submission {
                original_text,
                typed_text,
                language: cli_args.language,
                typed_keystrokes,
                duration_secs,
            })?;

            print_comparison(&assessment.comparison);
            println!("Gross speed:   {:.2} WPM", assessment.speed.gross_wpm);
            println!("Net speed:     {:.2} WPM", assessment.speed.net_wpm);
            println!("Level:         {}", assessment.performance_level);
            println!("Status:        {}", assessment.verdict);

            for failure in &assessment.verdict.failures {
                println!("  - {}", failure);
            }
        }
        (None, None) => print_comparison(&compare_words(&original_text, &typed_text)),
        _ => {
            return Err(Error::ParserError(
                "--keystrokes and --duration must be given together".to_string(),
            ))
        }
    }

    Ok(())
}

fn main() {
    // Initialize the logger
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
