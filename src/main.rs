use clap::Parser;
use cedricia_client::config::cli::Command;
use cedricia_client::core::SlotSource;
use cedricia_client::utils::logger;
use cedricia_client::{
    confirm_delete, format_phone, Cli, ClientConfig, FlashDismisser, FlashTiming, Page,
    SlotsClient, TerminalPrompt,
};
use std::path::Path;
use std::process::ExitCode;

fn load_config(path: Option<&Path>) -> anyhow::Result<ClientConfig> {
    match path {
        Some(path) => Ok(ClientConfig::from_file(path)?),
        None => Ok(ClientConfig::default()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logger::init_logger(cli.log_format, cli.verbose);

    match cli.command {
        Command::FormatPhone { inputs } => {
            for input in inputs {
                println!("{}", format_phone(&input));
            }
        }

        Command::Slots {
            date,
            base_url,
            config,
            strict,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(base_url) = base_url {
                config.base_url = base_url;
            }
            tracing::debug!("Slots config: {:?}", config);

            let client = SlotsClient::from_config(&config)?;
            let slots = if strict {
                match client.fetch(&date).await {
                    Ok(slots) => slots.available_slots,
                    Err(e) => {
                        eprintln!("❌ {}", e);
                        return Ok(ExitCode::from(2));
                    }
                }
            } else {
                client.check_available_slots(&date).await
            };

            if slots.is_empty() {
                println!("Aucun créneau disponible le {}", date);
            }
            for slot in slots {
                println!("{}", slot);
            }
        }

        Command::ConfirmDelete { message } => {
            let prompt = TerminalPrompt::stdio();
            if !confirm_delete(&prompt, message.as_deref()) {
                return Ok(ExitCode::FAILURE);
            }
        }

        Command::FlashDemo { config, messages } => {
            let config = load_config(config.as_deref())?;
            let page = Page::new();
            for text in &messages {
                page.append("div", &[("class", "alert alert-info")], text);
            }

            let dismisser = FlashDismisser::new(FlashTiming::from(&config.flash));
            tracing::info!(
                "Showing {} message(s) for {:?}",
                messages.len(),
                dismisser.timing().dismiss_after
            );
            for handle in dismisser.dismiss_all(&page) {
                handle.await?;
            }
            tracing::info!("{} element(s) left on the page", page.len());
        }
    }

    Ok(ExitCode::SUCCESS)
}
