use anyhow::{Context, Result};
use rand::seq::IndexedRandom;
use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::PathBuf,
};

const NUM_LINES: usize = 100_000_000;
const OUTPUT_PATH: &str = "test.log";

// Generated lines carry a constant stand-in for a real date/time.
const TIMESTAMP_PLACEHOLDER: &str = "20XX-XX-XX XX:XX:XX";

const MESSAGES: [&str; 5] = [
    "INFO: User logged in",
    "INFO: Page rendered successfully",
    "WARN: Response time slow",
    "ERROR: Database connection failed",
    "ERROR: NullPointerException",
];

/// What to generate and where to put it.
struct GenConfig {
    line_count: usize,
    output_path: PathBuf,
    messages: Vec<String>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            line_count: NUM_LINES,
            output_path: PathBuf::from(OUTPUT_PATH),
            messages: MESSAGES.iter().map(|msg| msg.to_string()).collect(),
        }
    }
}

fn generate(config: &GenConfig) -> Result<()> {
    let mut rng = rand::rng();

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&config.output_path)?;
    let mut writer = BufWriter::new(file);

    for _ in 0..config.line_count {
        let msg = config
            .messages
            .choose(&mut rng)
            .context("message set is empty")?;
        writeln!(writer, "{TIMESTAMP_PLACEHOLDER} {msg}")?;
    }
    writer.flush()?;

    Ok(())
}

fn main() -> Result<()> {
    let config = GenConfig::default();

    println!("Generating {} lines...", config.line_count);
    generate(&config)?;
    println!("Done!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn config(line_count: usize, path: PathBuf) -> GenConfig {
        GenConfig {
            line_count,
            output_path: path,
            ..GenConfig::default()
        }
    }

    #[test]
    fn writes_exactly_the_requested_number_of_lines() -> Result<()> {
        let dir = tempfile::tempdir()?;

        for count in [0, 1, 100] {
            let path = dir.path().join(format!("out_{count}.log"));
            generate(&config(count, path.clone()))?;

            let contents = std::fs::read_to_string(&path)?;
            assert_eq!(contents.lines().count(), count);
        }
        Ok(())
    }

    #[test]
    fn every_line_is_a_placeholder_timestamp_and_a_known_message() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.log");
        generate(&config(200, path.clone()))?;

        for line in std::fs::read_to_string(&path)?.lines() {
            let msg = line
                .strip_prefix(TIMESTAMP_PLACEHOLDER)
                .and_then(|rest| rest.strip_prefix(' '))
                .unwrap_or_else(|| panic!("malformed line: {line:?}"));
            assert!(MESSAGES.contains(&msg), "unknown message: {msg:?}");
        }
        Ok(())
    }

    #[test]
    fn regenerating_truncates_the_previous_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.log");

        generate(&config(10, path.clone()))?;
        generate(&config(3, path.clone()))?;

        let contents = std::fs::read_to_string(&path)?;
        assert_eq!(contents.lines().count(), 3);
        Ok(())
    }
}
