use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use roll::cipher::Roller;
use roll::record::BlockReader;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[clap(version)]
pub struct Args {
    /// Input file, read from standard input when omitted
    #[clap(short, long, env)]
    input: Option<PathBuf>,
}

fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().pretty().compact())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match args.input {
        Some(path) => run(BufReader::new(File::open(path)?)),
        None => run(io::stdin().lock()),
    }
}

fn run(reader: impl BufRead) -> eyre::Result<()> {
    for record in BlockReader::new(reader) {
        let record = record?;

        tracing::debug!(
            len = record.plaintext.len(),
            commands = record.commands.len(),
            "Rotating block"
        );

        let roller = Roller::new(record.commands)?;
        println!("{}", roller.roll(&record.plaintext));
    }

    Ok(())
}
