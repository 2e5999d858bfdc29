//! Adds the demo recordings to a deck written by `create_presentation`.
//!
//! ```sh
//! insert_videos Turnero_ZS_Presentacion.pptx --videos-dir videos_demo
//! ```

use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use turnero_deck::videos::{
    DEFAULT_INPUT, DEFAULT_SUFFIX, DEFAULT_VIDEOS_DIR, InsertConfig, VIDEO_SLOTS, VideoInserter,
};

/// Insert the demo videos, or placeholders for them, into the deck
#[derive(Parser, Debug)]
#[command(name = "insert_videos", version)]
struct Args {
    /// Deck to read; it is never modified
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory holding the recordings
    #[arg(long, value_name = "DIR", default_value = DEFAULT_VIDEOS_DIR)]
    videos_dir: PathBuf,

    /// Appended to the input file name to name the output
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    suffix: String,
}

impl From<Args> for InsertConfig {
    fn from(args: Args) -> Self {
        InsertConfig {
            input: args.input,
            videos_dir: args.videos_dir,
            suffix: args.suffix,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("{}", "=".repeat(60));
    println!("Script para Insertar Videos en PowerPoint");
    println!("{}", "=".repeat(60));

    let report = VideoInserter::new(Args::parse().into(), VIDEO_SLOTS).run()?;

    println!();
    println!("{}", report);
    println!();
    println!("¡Hecho! Abre la presentación en PowerPoint para revisar.");
    Ok(())
}
