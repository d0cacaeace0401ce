//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "narrator")]
#[command(about = "Fairy-tale narrator bot: Telegram text in, Gemini TTS voice out", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    /// Uses a webhook when WEBHOOK_URL or RENDER_EXTERNAL_HOSTNAME is set, otherwise long polling.
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Narrate text to a WAV file without Telegram (text from --text or stdin).
    Narrate {
        #[arg(short, long)]
        text: Option<String>,
        #[arg(short, long, default_value = "narration.wav")]
        output: PathBuf,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_token() {
        let cli = Cli::try_parse_from(["narrator", "run", "--token", "abc"]).unwrap();
        match cli.command {
            Commands::Run { token } => assert_eq!(token.as_deref(), Some("abc")),
            Commands::Narrate { .. } => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_narrate_defaults_output() {
        let cli = Cli::try_parse_from(["narrator", "narrate", "-t", "Once upon a time"]).unwrap();
        match cli.command {
            Commands::Narrate { text, output } => {
                assert_eq!(text.as_deref(), Some("Once upon a time"));
                assert_eq!(output, PathBuf::from("narration.wav"));
            }
            Commands::Run { .. } => panic!("expected narrate"),
        }
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["narrator", "serve"]).is_err());
    }
}
