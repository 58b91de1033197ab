//! Contact resolver - command line entry point
//!
//! Resolves spoken names against a JSON address book and prints the
//! candidate recipients as JSON. Phone numbers never appear in the output,
//! only tokens.

use anyhow::{Context, Result};
use clap::Parser;
use contact_resolver::{
    Config, ContactsProvider, JsonFileContactsProvider, MatchQuery, MatchType, RecipientResolver,
};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "contact-resolver", version, about = "Resolve names to recipient tokens")]
struct Args {
    /// Names to look up, as heard in the request
    #[arg(required = true)]
    names: Vec<String>,

    /// Allow partial matches when no name matches exactly
    #[arg(long)]
    partial: bool,

    /// Only offer numbers with this label
    #[arg(long)]
    label: Option<String>,

    /// JSON address book (overrides CONTACTS_FILE)
    #[arg(long, value_name = "PATH")]
    contacts: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr; stdout carries only the JSON result
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let contacts_file = match args.contacts {
        Some(path) => path,
        None => config.require_contacts_file()?,
    };
    info!(path = %contacts_file.display(), "Using address book");

    let hint = if args.partial {
        MatchType::Partial
    } else {
        MatchType::Exact
    };
    let mut query = MatchQuery::new(args.names, hint)?;
    if let Some(label) = args.label {
        query = query.with_label(label);
    }

    let provider =
        Arc::new(JsonFileContactsProvider::new(contacts_file)) as Arc<dyn ContactsProvider>;
    let resolver = RecipientResolver::start(provider, &config).await;

    let result = match resolver.handle().search(query).await {
        Ok(result) => result,
        Err(e) => {
            error!("Search failed: {}", e);
            resolver.shutdown().await;
            return Err(e.into());
        }
    };

    let output = json!({
        "match_type": result.match_type,
        "recipients": result.recipients(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    resolver.shutdown().await;
    Ok(())
}
