use clap::{Parser, Subcommand};
use outline_core::{
    config::{fetch_timeout_from_env_value, wiki_base_url_from_env_value},
    constants::DEFAULT_WIKI_BASE_URL,
    topic_url, CoreConfig, OutlineService,
};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "outline")]
#[command(about = "Markdown outlines of country encyclopedia articles")]
struct Cli {
    /// Base address topics are appended to
    #[arg(long, global = true, env = "OUTLINE_WIKI_BASE_URL")]
    base_url: Option<String>,
    /// Fetch timeout in whole seconds
    #[arg(long, global = true, env = "OUTLINE_FETCH_TIMEOUT_SECS")]
    timeout_secs: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the markdown outline for a country
    Show {
        /// Country name, e.g. "United Kingdom"
        country: String,
        /// Print the same JSON object the REST API returns
        #[arg(long)]
        json: bool,
    },
    /// Print the address that would be fetched for a country
    Url {
        /// Country name
        country: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let base_url = wiki_base_url_from_env_value(cli.base_url);

    match cli.command {
        Commands::Show { country, json } => {
            let timeout = fetch_timeout_from_env_value(cli.timeout_secs)?;
            let cfg = Arc::new(CoreConfig::new(base_url, timeout)?);
            let outline = OutlineService::new(cfg).outline(&country).await?;

            if json {
                let res = api_shared::OutlineRes {
                    country: outline.topic,
                    markdown_outline: outline.markdown,
                };
                println!("{}", serde_json::to_string_pretty(&res)?);
            } else {
                println!("{}", outline.markdown);
            }
        }
        Commands::Url { country } => {
            println!("{}", topic_url(&base_url, &country));
        }
    }

    Ok(())
}
