use clap::{Parser, Subcommand};
use hydra_likes::constants::{ENV_ENTRYPOINT, ENV_TIMEOUT_SECS, ENV_TOKEN};
use hydra_likes::utils::runtime::create_runtime;
use hydra_likes::{Config, HydraProvider, LikeService, LikeToggle, ProviderResponse};
use serde::Serialize;
use std::process::ExitCode;

const APP_NAME: &str = "hydra-likes";
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Like / unlike resources on a hydra REST backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API entrypoint (falls back to HYDRA_ENTRYPOINT)
    #[arg(long)]
    entrypoint: Option<String>,

    /// Bearer token (falls back to HYDRA_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// HTTP timeout in seconds (falls back to HYDRA_TIMEOUT_SECS)
    #[arg(long)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Like a target
    Like { resource: String, target: String },
    /// Delete a like by its identifier
    Unlike { like_id: String },
    /// First page of likes on a target (envelope carries the total)
    Likes { resource: String, target: String },
    /// Identifier of the like a user put on a target, or null
    Mine {
        resource: String,
        target: String,
        username: String,
    },
    /// Like if not liked yet, unlike otherwise
    Toggle {
        resource: String,
        target: String,
        username: String,
    },
}

fn main() -> ExitCode {
    // Set RUST_LOG=debug for verbose output, RUST_LOG=info for normal logs
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::debug!("[Main] Starting {} v{}", APP_NAME, APP_VERSION);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("[Main] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env_with(|key| match key {
        ENV_ENTRYPOINT => cli.entrypoint.clone(),
        ENV_TOKEN => cli.token.clone(),
        ENV_TIMEOUT_SECS => cli.timeout.map(|t| t.to_string()),
        _ => None,
    })?;

    let service = LikeService::new(HydraProvider::new(&config)?);
    let rt = create_runtime()?;

    rt.block_on(execute(&service, cli.command))
}

async fn execute(
    service: &LikeService<HydraProvider>,
    command: Command,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Like { resource, target } => {
            print_json(&service.create_like(&resource, &target).await?)
        }
        Command::Unlike { like_id } => print_json(&service.delete_like(&like_id).await?),
        Command::Likes { resource, target } => {
            let page = service.get_likes(&resource, &target).await?;
            if let Some(total) = page.total() {
                log::info!("[Main] {} has {} like(s)", target, total);
            }
            print_json(&page)
        }
        Command::Mine {
            resource,
            target,
            username,
        } => print_json(
            &service
                .get_like_id_owned_by_current_user(&resource, &target, &username)
                .await?,
        ),
        Command::Toggle {
            resource,
            target,
            username,
        } => {
            let toggle = service.toggle_like(&resource, &target, &username).await?;
            print_json(&ToggleReport::from(&toggle))
        }
    }
}

/// Serializable view of a toggle, for printing
#[derive(Debug, Serialize)]
struct ToggleReport<'a> {
    liked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    like_id: Option<&'a str>,
    response: &'a ProviderResponse,
}

impl<'a> From<&'a LikeToggle> for ToggleReport<'a> {
    fn from(toggle: &'a LikeToggle) -> Self {
        match toggle {
            LikeToggle::Liked(response) => ToggleReport {
                liked: true,
                like_id: None,
                response,
            },
            LikeToggle::Unliked { like_id, response } => ToggleReport {
                liked: false,
                like_id: Some(like_id.as_str()),
                response,
            },
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
