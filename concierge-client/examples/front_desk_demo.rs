//! Front desk walkthrough against a running API
//!
//! ```bash
//! API_URL=http://localhost:8080 cargo run --example front_desk_demo
//! ```

use anyhow::Result;
use concierge_client::{ClientConfig, HttpClient, Session};
use shared::request::ListQuery;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,concierge_client=debug".into()),
        )
        .init();

    let base_url = std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080".into());
    let session = Session::new();
    let client = HttpClient::new(&ClientConfig::new(base_url), session);

    let login = client.login("reception@example.com", "password").await?;
    tracing::info!(user = %login.user.name, role = ?login.user.role, "logged in");

    // Pending bookings wait for a decision.
    let pending = client.bookings(&ListQuery::default()).await?;
    tracing::info!(count = pending.items.len(), "bookings on the desk");

    for booking in &pending.items {
        tracing::info!(
            id = %booking.id,
            status = booking.status.as_str(),
            nights = booking.nights(),
            total = %booking.total_amount,
            "booking"
        );
    }

    if let Some(booking) = pending.items.first() {
        // Preview the cancellation fee before offering it to the guest.
        match client.cancellation_quote(&booking.id, None).await {
            Ok(quote) => tracing::info!(
                holdback = %quote.holdback,
                refund = %quote.refund,
                "cancellation quote"
            ),
            Err(err) => tracing::warn!(message = %err.user_message(), "no quote available"),
        }
    }

    client.logout();
    Ok(())
}
