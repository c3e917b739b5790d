use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use twords::config::Config;
use twords::corpus::read_corpus;
use twords::frequency::background::BackgroundTable;
use twords::frequency::ranking::RankedTable;
use twords::output::{table_to_json, terminal};
use twords::text::clean::{clean_corpus, drop_containing, keep_containing, CleanOptions};
use twords::text::stopwords::StopWords;
use twords::Session;

/// Twords: word-frequency analysis of tweet corpora.
///
/// Compares how often words appear in a corpus of tweets with how often they
/// appear in a large background corpus, surfacing over- and under-represented
/// terms.
#[derive(Parser)]
#[command(name = "twords", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the most common words in a corpus against background rates
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Number of most common words to consider (default: TWORDS_TOP_N or 50)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Compare a fixed list of words against background rates
    Words {
        #[command(flatten)]
        input: InputArgs,

        /// Words to compare, in output order
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Print the default stop-word list
    StopWords,
}

#[derive(Args)]
struct InputArgs {
    /// Corpus file, one tweet per line
    #[arg(long)]
    corpus: PathBuf,

    /// Background CSV with word, occurrences, frequency columns
    #[arg(long)]
    background: Option<PathBuf>,

    /// Term used to collect the corpus; excluded from output (repeatable)
    #[arg(long = "search-term")]
    search_terms: Vec<String>,

    /// Extra stop word (repeatable)
    #[arg(long = "stop-word")]
    stop_words: Vec<String>,

    /// Clean tweets first: lowercase, strip URLs, drop duplicate texts
    #[arg(long)]
    clean: bool,

    /// Keep only tweets containing at least one of these terms (repeatable)
    #[arg(long = "keep-containing")]
    keep_containing: Vec<String>,

    /// Drop tweets containing this term, e.g. "rt @" for retweets (repeatable)
    #[arg(long = "drop-containing")]
    drop_containing: Vec<String>,

    /// Emit the table as JSON instead of a terminal table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output stays clean on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("twords=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { input, top } => {
            let config = Config::load()?;
            let top_n = top.unwrap_or(config.top_n);
            let session = open_session(&config, &input)?;

            let table = session.word_freq_table(top_n)?;
            emit(&input, &format!("Top {top_n} words"), &table)?;
        }

        Commands::Words { input, words } => {
            let config = Config::load()?;
            let session = open_session(&config, &input)?;

            let table = session.word_vector_table(&words)?;
            emit(&input, "Word vector", &table)?;
        }

        Commands::StopWords => {
            let config = Config::load()?;
            let mut stop = StopWords::english_defaults();
            if !config.extra_stop_words.is_empty() {
                stop.add_all(&config.extra_stop_words)?;
            }
            terminal::display_stop_words(stop.iter());
        }
    }

    Ok(())
}

/// Load background and corpus, then build a session with search terms and
/// extra stop words from config and flags.
fn open_session(config: &Config, input: &InputArgs) -> Result<Session> {
    let background = match &input.background {
        Some(path) => BackgroundTable::load(path),
        None => {
            config.require_background()?;
            BackgroundTable::load(&config.background_path)
        }
    }
    .context("Failed to load background table")?;

    let mut documents = read_corpus(&input.corpus)
        .with_context(|| format!("Failed to read corpus {}", input.corpus.display()))?;
    let (mut keep_terms, mut drop_terms) = (input.keep_containing.clone(), input.drop_containing.clone());
    if input.clean {
        let options = CleanOptions::default();
        documents = clean_corpus(documents, &options);
        keep_terms = options.fold_terms(&keep_terms);
        drop_terms = options.fold_terms(&drop_terms);
    }
    if !keep_terms.is_empty() {
        documents = keep_containing(documents, &keep_terms);
    }
    if !drop_terms.is_empty() {
        documents = drop_containing(documents, &drop_terms);
    }

    let mut session = Session::new(background);

    let search_terms: Vec<&String> = config.search_terms.iter().chain(&input.search_terms).collect();
    if !search_terms.is_empty() {
        session.add_search_terms(search_terms)?;
    }

    let stop_words: Vec<&String> = config.extra_stop_words.iter().chain(&input.stop_words).collect();
    if !stop_words.is_empty() {
        session.add_stop_words(stop_words)?;
    }

    session.set_corpus(documents);

    if session.distribution().is_empty() {
        warn!("Corpus produced no words after stop-word filtering");
    }
    info!(
        words = session.distribution().total(),
        distinct = session.distribution().distinct(),
        "Session ready"
    );

    Ok(session)
}

fn emit(input: &InputArgs, title: &str, table: &RankedTable) -> Result<()> {
    if input.json {
        println!("{}", table_to_json(table)?);
    } else {
        terminal::display_ranked_table(title, table);
    }
    Ok(())
}
