//! Binary for the fairy-tale narrator bot.

use anyhow::{Context, Result};
use clap::Parser;
use narrator_bot::{
    build_narrator, describe, load_config, narrate_to_file, run_bot, Cli, Commands,
    NarrationConfig,
};
use std::io::Read;
use tts_client::EnvTtsConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Narrate { text, output } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read text from stdin")?;
                    buf
                }
            };

            let tts = EnvTtsConfig::from_env()?;
            tts.validate()?;
            let narration = NarrationConfig::from_env()?;
            narration.validate()?;

            let narrator = build_narrator(&tts, &narration);
            let header = narrate_to_file(&narrator, &text, &output).await?;
            println!("Wrote {} ({})", output.display(), describe(&header));
            Ok(())
        }
    }
}
