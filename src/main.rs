use whois_relay::cli::Cli;
use whois_relay::{config, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let config = config::load(&cli)?;

    logging::init(&config)?;
    config.print_summary();

    server::run(config).await
}
