use portfolio_service::config::{MongoConfig, PortfolioConfig};
use portfolio_service::services::PortfolioDb;
use portfolio_service::startup::Application;
use service_core::config::Config as CoreConfig;

pub struct TestApp {
    pub address: String,
    pub db: PortfolioDb,
}

/// URI for a store that is not there: unroutable port with short driver
/// timeouts so failing requests return quickly.
pub fn unreachable_uri() -> String {
    "mongodb://127.0.0.1:9/?serverSelectionTimeoutMS=200&connectTimeoutMS=200".to_string()
}

impl TestApp {
    pub async fn spawn() -> Self {
        let uri = std::env::var("TEST_MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        Self::spawn_with_uri(uri).await
    }

    /// Spawn the backend on a random port against a throwaway database.
    pub async fn spawn_with_uri(uri: String) -> Self {
        let config = PortfolioConfig {
            common: CoreConfig { port: 0 },
            mongodb: MongoConfig {
                uri,
                database: format!("portfolio_test_{}", uuid::Uuid::new_v4()),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the root endpoint
        let client = reqwest::Client::new();
        let root_url = format!("{}/", address);
        for _ in 0..50 {
            if client.get(&root_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, db }
    }
}
