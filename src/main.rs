use std::path::PathBuf;

use clap::Parser;
use textquiz::{Quiz, QuizError, parse_questions, read_file, read_stdin};

/// Interactive terminal quiz over a loosely formatted plain-text
/// question document.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Quiz text file; omit or pass "-" to read pasted text from stdin
    input: Option<PathBuf>,

    /// Print the parsed questions as JSON instead of starting the quiz
    #[arg(long)]
    dump_json: bool,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let text = match &args.input {
        Some(path) if path.as_os_str() != "-" => read_file(path)?,
        _ => read_stdin()?,
    };

    if args.dump_json {
        let questions = parse_questions(&text);
        if questions.is_empty() {
            return Err(QuizError::NoQuestions.into());
        }
        println!("{}", serde_json::to_string_pretty(&questions)?);
        return Ok(());
    }

    Quiz::from_text(&text)?.run()?;
    Ok(())
}
