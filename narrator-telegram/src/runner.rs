//! Update runners: convert teloxide messages to core::Message and pass them to the HandlerChain.
//! Long polling ([`run_repl`]) for local use, webhook ([`run_webhook`]) for hosted deployments.

use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use narrator_core::ToCoreMessage;
use std::net::SocketAddr;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;
use super::config::WebhookConfig;

/// Logs which bot account is connected. Failure here is not fatal; the runner reports real errors.
async fn log_identity(bot: &teloxide::Bot) {
    match bot.get_me().await {
        Ok(me) => info!(
            username = %me.user.username.as_deref().unwrap_or("unknown"),
            "Connected to Telegram"
        ),
        Err(e) => error!(error = %e, "get_me failed"),
    }
}

/// Converts one update and runs the chain in a spawned task so the dispatcher is never blocked
/// by a slow narration. Non-text updates are ignored.
fn dispatch(chain: &HandlerChain, msg: &teloxide::types::Message) {
    let core_msg = TelegramMessageWrapper(msg).to_core();

    if msg.text().is_none() {
        info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            "Received non-text message, ignoring"
        );
        return;
    }

    let chain = chain.clone();
    tokio::spawn(async move {
        info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            message_id = %core_msg.id,
            "step: processing message (handler chain started)"
        );
        if let Err(e) = chain.handle(&core_msg).await {
            error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
        }
    });
}

/// Long-polls Telegram until the process is stopped (Ctrl+C).
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    log_identity(&bot).await;
    info!("Starting long polling");

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();
        async move {
            dispatch(&chain, &msg);
            Ok(())
        }
    })
    .await;

    Ok(())
}

/// Registers `webhook.url` with Telegram (dropping updates queued while the bot was down) and
/// serves it on `0.0.0.0:{port}` until the process is stopped.
#[instrument(skip(bot, handler_chain), fields(port = webhook.port))]
pub async fn run_webhook(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    webhook: WebhookConfig,
) -> Result<()> {
    log_identity(&bot).await;

    let addr = SocketAddr::from(([0, 0, 0, 0], webhook.port));
    let url = reqwest::Url::parse(&webhook.url)
        .with_context(|| format!("Invalid webhook URL: {}", webhook.url))?;
    let options = webhooks::Options::new(addr, url).drop_pending_updates();

    let listener = webhooks::axum(bot.clone(), options)
        .await
        .context("Failed to register webhook")?;
    info!(addr = %addr, "Webhook registered, listening for updates");

    teloxide::repl_with_listener(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let chain = handler_chain.clone();
            async move {
                dispatch(&chain, &msg);
                Ok(())
            }
        },
        listener,
    )
    .await;

    Ok(())
}
