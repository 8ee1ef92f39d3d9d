use timetable_server::{ServerConfig, start_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig::with_defaults();
    start_server(config).await
}
