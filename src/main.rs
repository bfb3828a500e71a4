use std::net::TcpListener;

use anyhow::Context;
use env_logger::Env;
use leadlens::{
    configuration::get_configuration,
    startup::{run, AppContext},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration.")?;

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)?;
    let context = AppContext::build(&configuration)?;

    log::info!("Server is running on {}", address);
    run(listener, context)?.await?;

    Ok(())
}
