use std::process::ExitCode;

use checkout_loader::{
    checkout::{CheckoutLoader, LoadPolicy, LogRenderer},
    config::Endpoints,
    stores::http::HttpJsonStore,
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    telemetry::init();

    let endpoints = Endpoints::from_env()?;
    let store = HttpJsonStore::from_endpoints(&endpoints)?;
    let loader = CheckoutLoader::from_endpoints(store, &endpoints);

    // the failure itself was already logged by the loader
    let page = loader
        .load_page(LoadPolicy::AwaitWithRecovery, &mut LogRenderer)
        .await;

    Ok(if page.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
