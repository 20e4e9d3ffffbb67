use catalog_feed_export::app::{command_from_cli, Application};
use catalog_feed_export::error::Error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Diagnostics go to stderr so stdout stays a clean record stream.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    Application::new().run(command_from_cli()).await
}
