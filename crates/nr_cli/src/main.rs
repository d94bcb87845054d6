use clap::Parser;
use nr_scraper::logging::init_logging;
use nr_scraper::{handle_command, ExtractorConfig, FetchArgs, HttpExtractor};
use nr_web::{create_app, AppState};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_unit = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if let Ok(num) = current_number.parse::<u64>() {
                let unit = match c {
                    's' => 1,
                    'm' => 60,
                    'h' => 3600,
                    'd' => 86400,
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                };
                total_seconds = num
                    .checked_mul(unit)
                    .and_then(|secs| total_seconds.checked_add(secs))
                    .ok_or_else(|| "Duration too large".to_string())?;
                current_number.clear();
                has_unit = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        // A trailing bare number counts as seconds
        if !current_number.is_empty() {
            match current_number.parse::<u64>() {
                Ok(num) => {
                    total_seconds = total_seconds
                        .checked_add(num)
                        .ok_or_else(|| "Duration too large".to_string())?;
                    has_unit = true;
                }
                Err(_) => return Err("Invalid number in duration".to_string()),
            }
        }

        if !has_unit {
            return Err("Duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Distraction-free reading pages for news articles", long_about = None)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. info, nr_scraper=debug)
    #[arg(long, env = "NR_LOG", default_value = "info", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the article reading pages
    Serve {
        #[arg(long, env = "NR_HOST", default_value = "127.0.0.1")]
        host: String,
        #[arg(long, env = "NR_PORT", default_value_t = 3000)]
        port: u16,
        /// Timeout for fetching article pages (e.g. 10s, 1m30s). Unset leaves it to the HTTP client default.
        #[arg(long, env = "NR_FETCH_TIMEOUT")]
        fetch_timeout: Option<HumanDuration>,
    },
    /// Fetch a single article and print the extracted content
    Fetch {
        #[command(flatten)]
        args: FetchArgs,
        /// Timeout for fetching the article page (e.g. 10s, 1m30s)
        #[arg(long, env = "NR_FETCH_TIMEOUT")]
        fetch_timeout: Option<HumanDuration>,
    },
}

fn extractor_config(fetch_timeout: Option<HumanDuration>) -> ExtractorConfig {
    ExtractorConfig {
        timeout: fetch_timeout.map(|d| d.0),
    }
}

async fn serve(host: &str, port: u16, config: ExtractorConfig) -> anyhow::Result<()> {
    match config.timeout {
        Some(timeout) => info!("⏱️ Article fetch timeout set to {}s", timeout.as_secs()),
        None => info!("⏱️ No article fetch timeout configured, using the HTTP client default"),
    }

    let extractor = HttpExtractor::new(config)?;
    let app = create_app(AppState {
        extractor: Arc::new(extractor),
    });

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!("🗞️ Serving article pages on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Serve { host, port, fetch_timeout } => {
            serve(&host, port, extractor_config(fetch_timeout)).await?;
        }
        Commands::Fetch { args, fetch_timeout } => {
            info!("🦗 Fetching single URL: {}", args.url);
            let extractor = HttpExtractor::new(extractor_config(fetch_timeout))?;
            let mut stdout = std::io::stdout();
            handle_command(args, &extractor, &mut stdout).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_duration() {
        assert_eq!("30s".parse::<HumanDuration>().unwrap().0, Duration::from_secs(30));
        assert_eq!("1m30s".parse::<HumanDuration>().unwrap().0, Duration::from_secs(90));
        assert_eq!("1h15m30s".parse::<HumanDuration>().unwrap().0, Duration::from_secs(4530));
        assert_eq!("1d".parse::<HumanDuration>().unwrap().0, Duration::from_secs(86400));
        assert_eq!("45".parse::<HumanDuration>().unwrap().0, Duration::from_secs(45));
        assert!("".parse::<HumanDuration>().is_err());
        assert!("10x".parse::<HumanDuration>().is_err());
        assert!("s".parse::<HumanDuration>().is_err());
        assert!("999999999999999999d".parse::<HumanDuration>().is_err());
        assert!("18446744073709551615s1s".parse::<HumanDuration>().is_err());
        assert!("18446744073709551615s 1".parse::<HumanDuration>().is_err());
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["nr", "serve", "--port", "8080", "--fetch-timeout", "10s"]).unwrap();
        match cli.command {
            Commands::Serve { host, port, fetch_timeout } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 8080);
                assert_eq!(fetch_timeout, Some(HumanDuration(Duration::from_secs(10))));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_fetch() {
        let cli = Cli::try_parse_from(["nr", "--log-level", "debug", "fetch", "https://news.example/a"]).unwrap();
        assert_eq!(cli.log_level, "debug");
        match cli.command {
            Commands::Fetch { args, fetch_timeout } => {
                assert_eq!(args.url, "https://news.example/a");
                assert_eq!(extractor_config(fetch_timeout).timeout, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
