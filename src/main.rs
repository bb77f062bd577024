use anyhow::Result;
use tracing::info;

use dictionary_languages::config::Config;
use dictionary_languages::datasource::{self, LanguageQuery};
use dictionary_languages::providers::{HttpDictionaryMembership, HttpLanguageCatalog};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dictionary_languages=info".parse()?),
        )
        .init();

    // Load configuration from environment
    let config = Config::from_env()?;

    info!(
        "Resolving language options for dictionary {}",
        config.dictionary_path
    );

    let client = reqwest::Client::new();
    let catalog = HttpLanguageCatalog::new(client.clone(), &config.catalog_url);
    let membership = HttpDictionaryMembership::new(client, &config.dictionary_service_url);

    let mut query = LanguageQuery::new(&config.dictionary_path)
        .hide_non_dictionary_languages(config.hide_non_dictionary_languages)
        .emit_text_fields(config.emit_text_fields);
    if let Some(locale) = &config.locale {
        query = query.with_locale(locale);
    }

    let items = datasource::fetch_language_options(&catalog, &membership, &query).await?;

    println!("{}", serde_json::to_string_pretty(&items)?);

    info!("Resolved {} language options", items.len());
    Ok(())
}
