//! Writes the Turnero ZS demo deck.
//!
//! ```sh
//! create_presentation --output Turnero_ZS_Presentacion.pptx
//! ```

use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use turnero_deck::deck::{DECK, DEFAULT_OUTPUT, DeckBuilder, DeckConfig};
use turnero_deck::videos::VIDEO_SLOTS;

/// Build the Turnero ZS demo presentation
#[derive(Parser, Debug)]
#[command(name = "create_presentation", version)]
struct Args {
    /// File to write; an existing file is overwritten
    #[arg(short, long, value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

impl From<Args> for DeckConfig {
    fn from(args: Args) -> Self {
        DeckConfig {
            output: args.output,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let builder = DeckBuilder::new(Args::parse().into());
    let slides = builder.save(DECK)?;

    println!(
        "[OK] Presentacion creada exitosamente: {}",
        builder.config().output.display()
    );
    println!("[INFO] Total de slides: {}", slides);
    println!("[INFO] Videos necesarios: {}", VIDEO_SLOTS.len());
    println!("[INFO] Duracion total de videos: 7-8 minutos");
    Ok(())
}
