use anyhow::Result;
use clap::{error::ErrorKind, Parser};
use std::path::PathBuf;
use tally_core::{scan_file, Error, Keyword};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// File to scan
    filename: PathBuf,
    /// Literal substring to look for in each line
    keyword: String,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            println!("Usage: tally <filename> <keyword>");
            return Ok(());
        }
        Err(err) => err.exit(),
    };

    let report = match scan_file(&args.filename, &Keyword::new(&args.keyword)) {
        Ok(report) => report,
        Err(Error::NotFound(path)) => {
            println!("Error: File '{}' not found.", path.display());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!("The amount of '{}': {}", args.keyword, report.matching_lines);
    println!(
        "{:.6} seconds to find all items",
        report.elapsed.as_secs_f64()
    );

    Ok(())
}
