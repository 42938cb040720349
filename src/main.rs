//! # Awful Text Metrics
//!
//! A batch pipeline that scrapes a list of article URLs and scores each
//! article's text for sentiment and readability, writing one row per URL.
//!
//! ## Features
//!
//! - Reads `(URL_ID, URL)` rows from a CSV input table
//! - Extracts title and body text with configurable CSS selector fallbacks
//! - Saves every article's text to `extracted_text_files/<URL_ID>.txt`
//! - Scores positive/negative words, polarity, subjectivity, Gunning fog,
//!   sentence and word lengths, complex words, syllables, personal pronouns
//! - Writes the report as CSV or JSON
//!
//! ## Usage
//!
//! ```sh
//! awful_text_metrics -i Input.csv -o output.csv
//! ```
//!
//! ## Architecture
//!
//! The application follows a linear pipeline:
//! 1. **Setup**: Resolve settings, load lexicons, read the input table
//! 2. **Fetching**: Download and extract each article (one at a time)
//! 3. **Scoring**: Normalize the text and compute the metric tuple
//! 4. **Output**: Write the report, one row per input URL in input order

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod inputs;
mod lexicon;
mod metrics;
mod models;
mod normalize;
mod outputs;
mod pipeline;
mod scrapers;
mod syllables;
mod utils;

use cli::Cli;
use config::Settings;
use lexicon::Lexicon;
use models::Report;
use normalize::RuleTokenizer;
use outputs::raw_text::RawTextDir;
use pipeline::Pipeline;
use scrapers::HttpFetcher;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("text_metrics starting up");

    // Parse CLI and layer it over the config file
    let args = Cli::parse();
    let settings = Settings::resolve(&args)?;
    debug!(?settings, "Resolved settings");

    // ---- Lexicons and input are fatal if unreadable ----
    let lexicon = Lexicon::load(&settings.lexicon_paths())?;
    let inputs = inputs::read_inputs(&settings.input)?;

    if let Err(e) = ensure_writable_dir(&settings.text_dir).await {
        error!(
            path = %settings.text_dir.display(),
            error = %e,
            "Text directory is not writable (fix perms or choose a different path)"
        );
        return Err(e.into());
    }

    let fetcher = HttpFetcher::new(
        &settings.title_selectors,
        &settings.body_selectors,
        &settings.user_agent,
        settings.timeout(),
    )?;
    info!(
        timeout_secs = settings.timeout_secs,
        title_selectors = settings.title_selectors.len(),
        body_selectors = settings.body_selectors.len(),
        "HTTP fetcher ready"
    );

    // ---- Fetch and score ----
    let texts = RawTextDir::new(&settings.text_dir);
    let pipeline = Pipeline {
        fetcher: &fetcher,
        tokenizer: &RuleTokenizer,
        lexicon: &lexicon,
        texts: &texts,
    };
    let rows = pipeline.run(&inputs).await?;
    let report = Report::new(rows);

    // ---- Output ----
    if let Err(e) = outputs::write_report(&report, &settings.output, settings.format).await {
        error!(path = %settings.output.display(), error = %e, "Failed writing report");
        return Err(e.into());
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        articles = report.articles.len(),
        failed = report.failed_count(),
        output = %settings.output.display(),
        "Execution complete"
    );

    Ok(())
}
