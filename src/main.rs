use clap::{Parser, ValueEnum};
use cmore_search::{
    Client, DEFAULT_BASE_URL, Hit, Locale, Query, RequestId, RequestOption, SearchResponse,
};
use std::process;
use std::time::Duration;

/// Query the C More search service and list the hits
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Search parameters as key=value pairs, e.g. q=idol
    #[arg(value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// Base URL of the search service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Application name sent as the `client` parameter
    #[arg(long)]
    app_name: Option<String>,

    /// Comma separated list of fields to request
    #[arg(long)]
    fields: Option<String>,

    /// Value for the X-Request-Id header
    #[arg(long)]
    request_id: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Locale used for titles in the listing
    #[arg(long, value_enum, default_value_t = LocaleArg::Sv)]
    locale: LocaleArg,

    /// Print the hits as JSON instead of a listing
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LocaleArg {
    Da,
    Fi,
    Nb,
    Sv,
}

impl From<LocaleArg> for Locale {
    fn from(value: LocaleArg) -> Self {
        match value {
            LocaleArg::Da => Locale::Da,
            LocaleArg::Fi => Locale::Fi,
            LocaleArg::Nb => Locale::Nb,
            LocaleArg::Sv => Locale::Sv,
        }
    }
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

/// Formats a single hit as one listing line
fn describe_hit(hit: &Hit, locale: Locale) -> String {
    let title = hit.titles().get(locale).unwrap_or("<untitled>");
    match hit {
        Hit::Asset(asset) => format!(
            "[{}] {} - {}",
            asset.kind,
            asset.video_id.as_deref().unwrap_or("?"),
            title
        ),
        Hit::Series(series) => format!(
            "[series] {} - {} ({} season(s))",
            series.id.as_deref().unwrap_or("?"),
            title,
            series.seasons.len()
        ),
    }
}

fn print_response(response: &SearchResponse, cli: &Cli) {
    if cli.json {
        match serde_json::to_string_pretty(&response.hits) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: could not serialize hits: {}", e),
        }
        return;
    }

    println!(
        "{} of {} hit(s) from {}\n",
        response.hits.len(),
        response.total_hits,
        response.meta.request_url
    );

    for (index, hit) in response.hits.iter().enumerate() {
        println!("{:>3}. {}", index + 1, describe_hit(hit, cli.locale.into()));
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let mut builder = Client::builder()
        .base_url(cli.base_url.as_str())
        .timeout(Duration::from_secs(cli.timeout));

    if let Some(app_name) = &cli.app_name {
        builder = builder.app_name(app_name.as_str());
    }

    let client = match builder.build() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut query: Query = cli.params.iter().cloned().collect();
    if let Some(fields) = &cli.fields {
        query.set("fields", fields.as_str());
    }

    let request_id = cli.request_id.clone().map(RequestId::new);
    let options: Vec<&dyn RequestOption> = request_id
        .iter()
        .map(|id| id as &dyn RequestOption)
        .collect();

    match client.search(query, &options) {
        Ok(response) => print_response(&response, &cli),
        Err(failure) => {
            if let Some(response) = &failure.response {
                eprintln!("Search failed with HTTP {}", response.meta.status);
                if !response.hits.is_empty() {
                    eprintln!("Hits decoded before the failure:");
                    print_response(response, &cli);
                }
            }
            eprintln!("\nError during search: {}", failure);
            process::exit(1);
        }
    }
}
