//! # chatvibe CLI
//!
//! Command-line front end for the chatvibe library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use chatvibe::ChatvibeError;
use chatvibe::cli::Args;
use chatvibe::core::{OutputConfig, Report, StopWords};
use chatvibe::format::{OutputFormat, write_json_value, write_to_format};
use chatvibe::parsers::{ChatParser, WhatsAppParser};
use chatvibe::sentiment::{Sentiment, VaderScorer, tag};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.log_level());

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so the summary on stdout stays readable.
/// `RUST_LOG` overrides the `-v` level.
fn init_logging(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact(),
    );

    if let Err(e) = subscriber.try_init() {
        eprintln!("⚠️  Logging disabled: {}", e);
    }
}

fn run(args: &Args) -> Result<(), ChatvibeError> {
    let total_start = Instant::now();
    let sender = args.sender_filter();
    let analysis = args.analysis_config();
    let records_format = args
        .records
        .as_deref()
        .map(OutputFormat::from_path)
        .transpose()?;

    println!("💬 chatvibe v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Report:  {}", args.output);
    println!("👤 User:    {}", sender);
    if let Some(ref records) = args.records {
        println!("📄 Records: {}", records);
    }
    println!();

    // Step 1: Parse
    let parser = WhatsAppParser::with_config(args.whatsapp_config());
    println!("⏳ Parsing {}...", parser.name());
    let parse_start = Instant::now();
    let messages = parser.parse(Path::new(&args.input))?;
    println!(
        "   Found {} messages ({:.2}s)",
        messages.len(),
        parse_start.elapsed().as_secs_f64()
    );
    if messages.is_empty() {
        println!("⚠️  No timestamped messages found, the report will be empty");
    }

    // Step 2: Tag
    println!("🎭 Scoring sentiment...");
    let tag_start = Instant::now();
    let records = tag(messages, &VaderScorer::new())?;
    println!("   Tagged in {:.2}s", tag_start.elapsed().as_secs_f64());

    // Step 3: Aggregate
    let stop_words = match args.stop_words {
        Some(ref path) => StopWords::load(path, analysis.stop_word_match)?,
        None => StopWords::empty(),
    };
    let report = Report::build(&records, &sender, &stop_words, &analysis);
    if !sender.is_overall() && report.total_messages == 0 {
        println!("⚠️  No messages from '{}'", sender);
    }

    // Step 4: Write
    println!("💾 Writing report...");
    write_json_value(&report, &args.output)?;

    if let (Some(path), Some(format)) = (&args.records, records_format) {
        let mut output_config = OutputConfig::new();
        if args.scores {
            output_config = output_config.with_scores();
        }
        if args.calendar {
            output_config = output_config.with_calendar();
        }
        println!("💾 Writing {} records...", format);
        write_to_format(&records, path, format, &output_config)?;
    }

    println!();
    println!("✅ Done! Report saved to {}", args.output);

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Participants: {}", report.participants.len().saturating_sub(1));
    println!("   Messages:     {}", report.total_messages);
    for label in Sentiment::all() {
        let count = report.section(label).map_or(0, |s| s.messages);
        println!("   {:<13} {}", format!("{}:", label), count);
    }

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
