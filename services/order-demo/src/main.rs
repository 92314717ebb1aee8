use anyhow::Context;
use halyard::prelude::*;

use order_demo::{app, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config)?;

    let state = AppState::new(&config);
    let router = app(state);

    Server::new(config).serve(router).await?;

    Ok(())
}
