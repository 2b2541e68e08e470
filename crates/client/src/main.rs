//! Stockwatch Client - prints a dashboard of the engine's inventory.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stockwatch_client::presentation::{low_stock_rows, NO_LOW_STOCK_MESSAGE};
use stockwatch_client::{
    AlertMode, ClientConfig, HttpApiClient, InventoryService, InventoryStore, TracingNotifier,
};
use stockwatch_domain::category_breakdown;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockwatch_client=info,stockwatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Connecting to Stockwatch Engine");

    let api = Arc::new(HttpApiClient::new(&config));
    let mut store = InventoryStore::new(
        InventoryService::new(api),
        Arc::new(TracingNotifier),
        AlertMode::EdgeTriggered,
    );
    store.refresh().await?;

    let state = store.state();
    let summary = state.summary();
    println!("Total items:        {}", summary.total_quantity);
    println!("Unique products:    {}", summary.unique_products);
    println!("Active categories:  {}", summary.active_categories);
    println!("Low stock items:    {}", summary.low_stock_count);
    println!("Avg per category:   {}", summary.average_per_category);

    println!();
    for (category, total) in category_breakdown(state.items()) {
        println!("{:<12} {}", category.as_str(), total);
    }

    println!();
    let rows = low_stock_rows(state.items());
    if rows.is_empty() {
        println!("{NO_LOW_STOCK_MESSAGE}");
    }
    for row in rows {
        println!(
            "{:<24} {:>5} / {:<5} {:>3}% of threshold",
            row.item.name.as_str(),
            row.item.quantity,
            row.item.threshold.value(),
            row.percentage
        );
    }

    Ok(())
}
