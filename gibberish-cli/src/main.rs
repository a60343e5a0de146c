mod command;

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use gibberish_core::io::load_settings;
use gibberish_core::{GenerationSettings, Generator, LanguageModel, Session};

use crate::command::Command;

/// Generates pronounceable gibberish from a list of real words.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Corpus file, one word per line
    #[arg(default_value = "English dictionary.txt")]
    corpus: PathBuf,

    /// TOML file overriding generation settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of words in the sentence vocabulary
    #[arg(long)]
    vocabulary_size: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn,gibberish_core=info")).init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => GenerationSettings::default(),
    };
    if let Some(size) = args.vocabulary_size {
        settings.vocabulary_size = size;
    }

    let words = gibberish_core::io::read_words(&args.corpus)?;
    let model = LanguageModel::from_words(words)?;
    let generator = Generator::new(model, settings)?;

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut session = Session::new(generator, rng);

    println!();
    println!("Press enter to generate a new word.");
    println!("Type p and press enter to generate a paragraph.");
    println!("Type s and press enter to generate a sentence.");
    println!("Type v and press enter to generate a new vocabulary.");
    println!("Type a number and press enter to generate that many words.");

    for line in io::stdin().lock().lines() {
        let line = line?;
        let Some(command) = Command::parse(line.trim_end_matches('\r')) else {
            log::debug!("Ignoring input {:?}", line);
            continue;
        };
        if let Err(e) = run(&mut session, command) {
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}

/// Executes one command and prints its output.
fn run(session: &mut Session<StdRng>, command: Command) -> gibberish_core::Result<()> {
    match command {
        Command::Word => println!("{}", session.word()?),
        Command::Words(count) => println!("{}", session.words(count)?),
        Command::Sentence => {
            ensure_vocabulary(session)?;
            println!("{}", session.sentence()?);
        }
        Command::Paragraph => {
            ensure_vocabulary(session)?;
            println!("{}", session.paragraph()?);
        }
        Command::RebuildVocabulary => {
            println!("Generating vocabulary…");
            session.rebuild_vocabulary()?;
            println!("Done.\n");
        }
    }
    Ok(())
}

/// Builds the vocabulary up front so the wait is announced.
fn ensure_vocabulary(session: &mut Session<StdRng>) -> gibberish_core::Result<()> {
    if !session.has_vocabulary() {
        println!("Generating vocabulary…");
        session.rebuild_vocabulary()?;
        println!("Done.\n");
    }
    Ok(())
}
