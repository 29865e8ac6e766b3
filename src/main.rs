use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use whirlwind::client::{NewUser, UserClient, delete_confirmation};
use whirlwind::error::Result;
use whirlwind::settings::Settings;
use whirlwind::tour;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = Settings::load()?;
    info!(?settings, "starting the tour");

    let lines = tour::run(Duration::from_millis(settings.resolve_delay_ms)).await?;
    for line in &lines {
        println!("{line}");
    }

    // Inert by default; flip exercise_network in whirlwind.json to run the
    // CRUD calls against the demo API.
    if settings.exercise_network {
        exercise_network(&settings).await;
    }

    Ok(())
}

async fn exercise_network(settings: &Settings) {
    let client = UserClient::new(&settings.api_base_url);

    match client.list_users().await {
        Ok(users) => println!("{}", serde_json::to_string(&users).unwrap_or_default()),
        Err(e) => warn!(error = %e, "listing users failed"),
    }

    let john = NewUser { name: "John Doe".into(), email: "john@example.com".into() };
    match client.create_user(&john).await {
        Ok(created) => println!("{}", serde_json::to_string(&created).unwrap_or_default()),
        Err(e) => warn!(error = %e, "creating a user failed"),
    }

    let jane = NewUser { name: "Jane Doe".into(), email: "jane@example.com".into() };
    match client.update_user(1, &jane).await {
        Ok(updated) => println!("{}", serde_json::to_string(&updated).unwrap_or_default()),
        Err(e) => warn!(error = %e, "updating a user failed"),
    }

    match client.delete_user(1).await {
        Ok(true) => println!("{}", delete_confirmation(1)),
        Ok(false) => warn!("delete was not confirmed"),
        Err(e) => warn!(error = %e, "deleting a user failed"),
    }
}
