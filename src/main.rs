use std::sync::Arc;

use tracing::info;
use vibelist::{
    config::Config,
    http::ApiService,
    ui::app::App,
    util::{hook::set_panic_hook, log::initialize_logging},
};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> color_eyre::Result<()> {
    let config = setup()?;

    let api = ApiService::new(&config.backend_url)?;
    info!(endpoint = api.endpoint(), "starting");

    let mut app = App::new(Arc::new(api));
    app.run().await
}

fn setup() -> color_eyre::Result<Config> {
    color_eyre::install()?;
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    set_panic_hook();
    initialize_logging(&config)?;
    Ok(config)
}
