use pamfax_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = PamFax::new(Config::new()).await?;

    let settings = client.get_current_settings().await?.into_json()?;
    info!(
        "Current settings: {}",
        serde_json::to_string_pretty(&settings)?
    );

    let price = client.get_page_price("+4930123456789", None).await?;
    info!("Page price result: {:?}", price.result());

    client.logout().await?;
    Ok(())
}
