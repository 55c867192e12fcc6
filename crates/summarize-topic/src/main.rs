use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use shared::document::FETCH_ERROR_MESSAGE;
use shared::{
    gmail_compose_url, open_in_browser, save_summary_text, Block, Config, SummarizerClient,
    SummaryDocument, Topic,
};
use std::fs;
use std::io::{self as stdio, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "summarize-topic")]
#[command(about = "Fetch and summarize top news articles for a topic")]
struct Args {
    /// Topic to summarize (prompts interactively if omitted)
    #[arg(short, long)]
    topic: Option<String>,

    /// Summarizer backend base URL (overrides SUMMARIZER_BACKEND_URL)
    #[arg(short, long)]
    backend: Option<String>,

    /// Directory for exported files (defaults to Documents)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Save summary.txt after a successful fetch
    #[arg(short, long)]
    download: bool,

    /// Print and open a Gmail compose link after a successful fetch
    #[arg(short, long)]
    email: bool,

    /// Save an HTML rendition to this path after a successful fetch
    #[arg(long)]
    html: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match args.backend.as_deref() {
        Some(backend) => Config::with_backend(backend)?,
        None => Config::from_env()?,
    };

    println!("🌐 Backend: {}", config.backend_url);

    let client = SummarizerClient::new(config.backend_url.clone())?;
    let mut document = SummaryDocument::new();

    match args.topic.clone() {
        Some(raw_topic) => run_once(&client, &mut document, &raw_topic, &args).await,
        None => run_session(&client, &mut document, &args).await,
    }
}

async fn run_once(
    client: &SummarizerClient,
    document: &mut SummaryDocument,
    raw_topic: &str,
    args: &Args,
) -> Result<()> {
    if !fetch_and_render(client, document, raw_topic).await {
        return Ok(());
    }

    if let Some(path) = &args.html {
        if document.exports_enabled() {
            fs::write(path, document.to_html())
                .with_context(|| format!("Failed to write HTML file: {}", path.display()))?;
            println!("✓ HTML saved to: {}", path.display());
        }
    }

    if args.download {
        export_download(document, args.output.as_deref())?;
    }

    if args.email {
        export_email(document);
    }

    Ok(())
}

async fn run_session(
    client: &SummarizerClient,
    document: &mut SummaryDocument,
    args: &Args,
) -> Result<()> {
    loop {
        let input = match read_input("\nEnter a topic (or 'q' to quit): ")? {
            Some(input) => input,
            None => return Ok(()),
        };

        if input == "q" || input == "quit" {
            return Ok(());
        }

        if !fetch_and_render(client, document, &input).await {
            continue;
        }

        loop {
            let menu = if document.exports_enabled() {
                "[d]ownload, [e]mail, [n]ew topic, [q]uit: "
            } else {
                "[n]ew topic, [q]uit: "
            };

            let command = match read_input(menu)? {
                Some(command) => command,
                None => return Ok(()),
            };

            match command.as_str() {
                "d" => export_download(document, args.output.as_deref())?,
                "e" => export_email(document),
                "n" => break,
                "q" => return Ok(()),
                "" => {}
                other => println!("Unknown command: {}", other),
            }
        }
    }
}

/// One request cycle: clear the document, validate, fetch, render. Returns
/// false when the input was empty and no request was issued.
async fn fetch_and_render(
    client: &SummarizerClient,
    document: &mut SummaryDocument,
    raw_topic: &str,
) -> bool {
    // The document is wiped before validation, so stale output never
    // survives a resubmission
    let generation = document.begin_request();

    let topic = match Topic::parse(raw_topic) {
        Some(topic) => topic,
        None => {
            eprintln!("⚠ Please enter a topic.");
            return false;
        }
    };

    println!("⏳ Fetching and summarizing top articles for \"{}\"...", topic);

    match client.summarize(&topic).await {
        Ok(response) => {
            document.apply_response(generation, &response);
            print_document(document);
            println!(
                "✓ Summarized {} articles (prepared {})",
                response.article_summaries.len(),
                Local::now().format("%-d-%b-%Y %-I:%M%p")
            );
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            document.apply_error(generation, FETCH_ERROR_MESSAGE);
            print_document(document);
        }
    }

    true
}

fn print_document(document: &SummaryDocument) {
    println!();
    for section in [document.articles(), document.consolidated()] {
        if let Some(heading) = &section.heading {
            println!("{}\n", heading);
        }
        for block in &section.blocks {
            match block {
                Block::Title {
                    number,
                    title,
                    link,
                } => {
                    println!("{}. {}", number, title);
                    println!("   {}", link);
                }
                Block::Text(text) => println!("{}\n", text),
            }
        }
    }
}

fn export_download(document: &SummaryDocument, output: Option<&Path>) -> Result<()> {
    if !document.exports_enabled() {
        println!("Nothing to export yet. Fetch a summary first.");
        return Ok(());
    }

    let path = save_summary_text(&document.all_summary_text(), output)?;
    println!("✓ Summary saved to: {}", path.display());
    Ok(())
}

fn export_email(document: &SummaryDocument) {
    if !document.exports_enabled() {
        println!("Nothing to export yet. Fetch a summary first.");
        return;
    }

    let url = gmail_compose_url(&document.all_summary_text());
    println!("✉ Compose link:\n{}", url);

    if let Err(e) = open_in_browser(&url) {
        eprintln!("  Could not open browser: {:#}", e);
    }
}

fn read_input(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    stdio::stdout().flush()?;

    let mut input = String::new();
    if stdio::stdin().read_line(&mut input)? == 0 {
        // EOF ends the session
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
