use anyhow::{bail, Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use std::fs::File;
use std::io::Read;
use wordule::{Dictionary, Feedback, GuessRecord, Session, Status, Word};


#[derive(Parser)]
#[clap(about = "wordle solving thingy")]
struct Args {
    /// Words already guessed, in order
    #[clap(short, long, multiple_values = true)]
    words: Vec<String>,

    /// Feedback for each guessed word, `o` for green, `?` for orange, `x` for grey
    #[clap(short, long, alias = "colors", multiple_values = true)]
    colours: Vec<String>,

    /// Number of suggested words to show
    #[clap(short, long, default_value = "10")]
    max_words: usize,

    /// Path to a dictionary file
    #[clap(long, default_value = "/usr/share/dict/words")]
    dict: String,

    /// If present prints score for the word and exit
    #[clap(long)]
    score_word: Option<String>,

    /// Rank suggestions by how evenly their feedback splits the candidates instead of by letter
    /// frequency
    #[clap(long)]
    entropy: bool,

    /// Print diagnostics to stderr
    #[clap(short, long)]
    verbose: bool,
}


fn load_dictionary(args: &Args) -> Result<Dictionary> {
    let mut file = File::open(&args.dict).context("opening words file")?;
    let mut buf = String::new();
    file.read_to_string(&mut buf).context("reading words file")?;
    let dictionary = Dictionary::parse(&buf).with_context(|| format!("parsing {}", args.dict))?;
    if args.verbose {
        eprintln!(
            "loaded {} words from {}, skipped {} lines",
            dictionary.len(),
            args.dict,
            dictionary.skipped(),
        );
    }
    Ok(dictionary)
}

fn print_suggestions(session: &Session, args: &Args) -> Result<()> {
    println!("guesses ({} possible):", session.candidates().len());
    if args.entropy {
        for (word, bits) in session.entropy_suggestions(args.max_words)? {
            println!("  {word}      {bits:.3}");
        }
    } else {
        for (word, score) in session.suggestions(args.max_words)? {
            println!("  {word}      {score}");
        }
    }
    Ok(())
}

fn apply_logged(
    session: &mut Session,
    record: GuessRecord,
    verbose: bool,
) -> wordule::Result<Status> {
    let before = session.candidates().len();
    let status = session.apply(record)?;
    if verbose {
        eprintln!(
            "{record}: eliminated {} words ({before} -> {})",
            before - session.candidates().len(),
            session.candidates().len(),
        );
    }
    Ok(status)
}

fn run_direct(args: &Args, dictionary: &Dictionary) -> Result<()> {
    if args.words.len() != args.colours.len() {
        return Err(wordule::Error::MismatchedRecords {
            words: args.words.len(),
            feedbacks: args.colours.len(),
        }.into());
    }

    let mut session = Session::new(dictionary);
    for (word, colours) in args.words.iter().zip(&args.colours) {
        let record = GuessRecord::parse(word, colours)?;
        apply_logged(&mut session, record, args.verbose)?;
    }
    match session.status() {
        Status::Solved(word) => {
            println!("found match: {word}");
            Ok(())
        }
        Status::Narrowed(_) => print_suggestions(&session, args),
    }
}

/// Reads a line, `None` once the user interrupts or closes the input
fn prompt(rl: &mut rustyline::Editor<()>, prompt: &str) -> Result<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => Ok(Some(line.trim().to_owned())),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err).context("readline"),
    }
}

fn run_interactive(args: &Args, dictionary: &Dictionary) -> Result<()> {
    eprintln!("wordule: wordle solving thingy");
    eprintln!("1. pick a word from the suggested words and write the picked word");
    eprintln!("2. tell wordule what the answer was, for each letter in the guessed word write:");
    eprintln!("  `x` for grey (no match in word)");
    eprintln!("  `?` for orange (match somewhere in the word)");
    eprintln!("  `o` for green (exact match)");
    eprintln!("3. repeat");
    let mut rl = rustyline::Editor::<()>::new();

    let mut session = Session::new(dictionary);
    print_suggestions(&session, args)?;

    // guess loop
    loop {
        // pick word
        let picked = loop {
            let line = match prompt(&mut rl, "picked> ")? {
                Some(line) => line,
                None => return Ok(()),
            };
            if line.bytes().all(|ch| [b'o', b'x', b'?'].contains(&ch)) && !line.is_empty() {
                eprintln!("only contains feedback symbols, we want picked guess not pattern");
                continue
            }
            match line.parse::<Word>() {
                Ok(word) => break word,
                Err(err) => eprintln!("{err}"),
            }
        };

        // parse wordle response
        let status = loop {
            let line = match prompt(&mut rl, "response> ")? {
                Some(line) => line,
                None => return Ok(()),
            };
            let parsed = line
                .parse::<Feedback>()
                .and_then(|feedback| GuessRecord::new(picked, feedback));
            let record = match parsed {
                Ok(record) => record,
                Err(err) => {
                    eprintln!("{err}");
                    continue
                }
            };
            match apply_logged(&mut session, record, args.verbose) {
                Ok(status) => break status,
                // nothing was applied, let the user fix the response
                Err(err) => eprintln!("{err}"),
            }
        };

        match status {
            Status::Solved(word) => {
                println!("found match: {word}");
                return Ok(());
            }
            Status::Narrowed(_) => print_suggestions(&session, args)?,
        }
    }
}


fn main() -> Result<()> {
    let args = Args::parse();
    let dictionary = load_dictionary(&args)?;

    if let Some(score_word) = &args.score_word {
        let word: Word = score_word.parse()?;
        if args.entropy {
            let bits = wordule::ranker::entropy(&word, dictionary.words());
            println!("  {word}      {bits:.3}");
        } else {
            let score = wordule::ranker::Scoring::new(dictionary.words());
            println!("  {word}      {}", score.word_score(&word));
        }
        return Ok(());
    }

    if args.max_words == 0 {
        bail!("max words must be positive");
    }

    if args.words.is_empty() && args.colours.is_empty() {
        run_interactive(&args, &dictionary)
    } else {
        run_direct(&args, &dictionary)
    }
}
