use env_logger::Env;
use readers::{configuration::get_configuration, services::HttpTransport, startup::run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration()?.pipeline_config()?;
    let transport = HttpTransport::new()?;

    let result = run(&transport, &configuration).await;
    match result.success {
        true => log::info!("Readers successfully updated"),
        false => log::warn!(
            "Failed to update readers: {}",
            result.message.as_deref().unwrap_or("unknown error")
        ),
    }

    Ok(())
}
