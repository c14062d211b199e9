use std::{sync::Arc, net::{SocketAddr, IpAddr, Ipv4Addr}, str::FromStr};
use clap::{Parser, Subcommand};
use handlebars::Handlebars;
use reqwest::Client;
use tracing_subscriber::EnvFilter;

pub mod console;
pub mod controllers;
pub mod errors;
pub mod mappers;
pub mod models;
pub mod screens;
pub mod services;
pub mod validators;
pub mod views;

#[cfg(test)]
pub mod test_support;

use services::github_user_service::{FetchStrategy, FetcherConfig, GitHubUserService, DEFAULT_API_BASE};


// Command line interface
#[derive(Parser, Debug)]
#[clap(name="smol-github-profile", about="Look up a GitHub profile and its repositories!")]
struct Opt {
    #[clap(short = 'l', long = "log", default_value = "info", global = true)]
    log_level: String,

    #[clap(long = "api-base", default_value = DEFAULT_API_BASE, global = true)]
    api_base: String,

    /// Request the profile and its repositories at the same time
    #[clap(long = "parallel", global = true)]
    parallel: bool,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prompt for a username and show the profile in the terminal
    View {
        #[clap(short = 'u', long = "user")]
        user: Option<String>,
    },
    /// Serve the input and profile screens as web pages
    Serve {
        #[clap(short = 'a', long = "addr", default_value = "::1")]
        addr: String,

        #[clap(short = 'p', long = "port", default_value = "8080")]
        port: u16,
    },
}

pub struct AppState {
    registry: Handlebars<'static>,
    github_user_service: Arc<GitHubUserService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Fetch console arguments
    let opt = Opt::parse();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", format!("{},hyper=info,mio=info", opt.log_level));
    }
    // Console logging goes to stderr so it never interleaves with the screens
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let strategy = if opt.parallel {
        FetchStrategy::Parallel
    } else {
        FetchStrategy::Sequential
    };
    let github_user_service = Arc::new(GitHubUserService::new(
        Client::new(),
        FetcherConfig { api_base: opt.api_base, strategy },
    ));

    match opt.command.unwrap_or(Command::View { user: None }) {
        Command::View { user } => console::run(github_user_service, user).await,
        Command::Serve { addr, port } => {
            let app_state = Arc::new(AppState {
                registry: views::html_registry()?,
                github_user_service,
            });
            let app = controllers::router(app_state);

            let sock_addr = SocketAddr::from((
                IpAddr::from_str(addr.as_str()).unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
                port
            ));
            log::info!("Now listening on http://{}", sock_addr);

            axum::Server::try_bind(&sock_addr)?
                .serve(app.into_make_service())
                .await?;
            Ok(())
        }
    }
}
