use std::env;
use std::path::Path;

use advisory_crm::fixtures::load_clients_from_path;
use advisory_crm::models::config::ServerConfig;
use advisory_crm::repository::InMemoryRepository;
use config::Config;
use dotenvy::dotenv;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let server_config = match settings.and_then(|s| s.try_deserialize::<ServerConfig>()) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let repo = match &server_config.fixtures_path {
        Some(path) => load_clients_from_path(Path::new(path)).and_then(InMemoryRepository::new),
        None => InMemoryRepository::with_default_fixture(),
    };

    let repo = match repo {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Failed to load client book: {err}");
            std::process::exit(1);
        }
    };

    advisory_crm::run(server_config, repo).await
}
