//! # chatclean CLI
//!
//! Command-line interface for chatclean library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatclean::cli::Args;
use chatclean::core::{DatasetStats, clean_file};
use chatclean::CleanError;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(&args);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Priority: `--verbose` > `RUST_LOG` env var > default (warn).
fn init_tracing(args: &Args) {
    let filter = if args.verbose {
        EnvFilter::new("chatclean=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), CleanError> {
    let start = Instant::now();

    println!("🧹 chatclean v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", args.output);
    println!();

    let stats = clean_file(&args.input, &args.output, &args.output_config())?;

    println!("✅ Done! ({:.2}s)", start.elapsed().as_secs_f64());
    println!("📁 Saved to: {}", args.output);
    print_summary(&stats);

    Ok(())
}

fn print_summary(stats: &DatasetStats) {
    println!("💬 Messages:     {}", stats.messages);
    println!("👥 Participants: {}", stats.participants);
    println!("↪️  Replies:      {}", stats.replies);
    println!(
        "😀 Reactions:    {} ({} with user info)",
        stats.reactions, stats.reactions_with_users
    );

    if stats.has_sample() {
        println!();
        println!("Sample reactions:");
        for reaction in &stats.sample {
            println!("  {}", reaction);
        }
    }
}
