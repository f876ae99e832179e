/*!
 * Command-line interface for lf
 */

use std::io;
use std::process;

use clap::Parser;

use lf::config::{Args, Config};
use lf::scanner::Scanner;
use lf::writer::ListingWriter;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Create configuration
    let config = Config::from_args(args);

    if let Err(e) = run(config) {
        eprintln!("lf: {}", e);
        process::exit(1);
    }
}

fn run(config: Config) -> lf::Result<()> {
    // Validate configuration
    config.validate()?;

    // Scan directory
    let scanner = Scanner::new(config.clone());
    let listing = scanner.scan()?;

    // Print one line per entry
    let writer = ListingWriter::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writer.write(&listing, &mut out)?;

    Ok(())
}
