use std::env;
use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use docqa_core::config::{resolve_with_base, Config};
use docqa_core::corpus::DirectoryLoader;
use docqa_text::{Retriever, Tokenizer, UnicodeSentenceSegmenter};

fn parse_args() -> String {
    let mut args = env::args().skip(1);
    match (args.next(), args.next()) {
        (Some(corpus), None) => corpus,
        _ => {
            eprintln!("Usage: docqa corpus");
            std::process::exit(1);
        }
    }
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("docqa=warn,docqa_core=warn,docqa_text=warn"))?;
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
    Ok(())
}

fn read_query() -> anyhow::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Query: ")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("Failed to read query")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() -> anyhow::Result<()> {
    let corpus_arg = parse_args();
    init_tracing()?;
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.settings()?;

    let retriever = Retriever::new(
        DirectoryLoader::with_options(settings.corpus),
        UnicodeSentenceSegmenter::english(),
        Tokenizer::english(),
        settings.retrieval,
    );
    let corpus_dir = resolve_with_base(&env::current_dir()?, &corpus_arg);
    let documents = retriever
        .load(&corpus_dir)
        .with_context(|| format!("Failed to load corpus {}", corpus_dir.display()))?;

    let query = read_query()?;
    if retriever.query(&query).is_empty() {
        return Ok(());
    }
    let answers = retriever.answer_documents(&documents, &query);

    let mut stdout = io::stdout().lock();
    for answer in answers {
        writeln!(stdout, "{}", answer)?;
    }
    Ok(())
}
