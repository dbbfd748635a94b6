use pamfax_client::prelude::*;
use pamfax_client::utils::config::get_env_or_default;
/// Composes a fax with a cover page and sends it to one recipient
///
/// Credentials are read from the environment or a `.env` file:
/// - PAMFAX_USERNAME, PAMFAX_PASSWORD
/// - PAMFAX_API_KEY, PAMFAX_API_SECRET
/// - PAMFAX_BASE_URL (use the sandbox while testing)
///
/// The recipient is taken from the first argument or PAMFAX_DEMO_RECIPIENT.
/// Press Ctrl+C while waiting to abort.
///
/// Run with: cargo run --bin send_fax -- +4930123456
use tracing::{error, info, warn};

fn ensure_success(step: &str, response: &ApiResponse) -> Result<(), AppError> {
    match response.result() {
        Some(result) if result.is_success() => Ok(()),
        Some(result) => Err(AppError::UnexpectedResponse(format!(
            "{step} failed: {} ({})",
            result.message, result.code
        ))),
        None => Err(AppError::UnexpectedResponse(format!(
            "{step} returned no result"
        ))),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let recipient = std::env::args().nth(1).unwrap_or_else(|| {
        get_env_or_default("PAMFAX_DEMO_RECIPIENT", String::from("+4930123456789"))
    });

    info!("Login with PamFax credentials...");
    let config = Config::new();
    let polling = config.polling.clone();
    let client = PamFax::new(config).await?;
    info!("✓ Logged in at {}", client.config().rest_api.base_url);

    info!("Creating a fax with cover...");
    ensure_success("Create", &client.create(None, None, None).await?)?;

    let covers = client.list_available_covers(Some(true)).await?;
    ensure_success("ListAvailableCovers", &covers)?;
    let template_id = covers
        .as_json()
        .and_then(|doc| doc["Covers"]["content"][0]["id"].as_u64())
        .and_then(|id| u32::try_from(id).ok());
    match template_id {
        Some(id) => {
            let response = client
                .set_cover(id, Some("My test fax with PamFax using Rust"))
                .await?;
            ensure_success("SetCover", &response)?;
        }
        None => warn!("No cover template available, sending without cover"),
    }

    info!("Adding recipient {}...", recipient);
    ensure_success(
        "AddRecipient",
        &client.add_recipient(&recipient, None).await?,
    )?;

    info!("Waiting until fax is ready to send...");
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    match client.wait_until_ready_to_send(&polling, &cancel).await {
        Ok(state) => info!(
            "Fax is {}",
            fax_container_state(&state).unwrap_or("ready_to_send")
        ),
        Err(AppError::Cancelled) => {
            warn!("Interrupted, discarding the fax");
            client.remove_all_files().await?;
            return Ok(());
        }
        Err(e) => {
            error!("Fax never became ready: {e}");
            return Err(e.into());
        }
    }

    info!("Fax setup done, sending...");
    ensure_success("Send", &client.send(None, None, None).await?)?;
    info!("✓ Fax sent");

    Ok(())
}
