use std::io::{BufReader, stdin, stdout};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marketplace_cli::{
    config::AppConfig,
    console,
    db::create_pool,
    services::{AccountService, CatalogService},
    store::{PgProductStore, PgUserStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,marketplace_cli=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let pool = create_pool(&config.database_url).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let accounts = AccountService::new(PgUserStore::new(pool.clone()));
    let catalog = CatalogService::new(PgProductStore::new(pool));

    let mut input = BufReader::new(stdin());
    let mut output = stdout();
    console::run(&accounts, &catalog, &mut input, &mut output).await?;

    Ok(())
}
