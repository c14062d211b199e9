//! Terminal rendition of the two screens: a username prompt, then the
//! profile screen until it settles or the user hits Ctrl-C.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use handlebars::Handlebars;

use crate::mappers::profile_mapper;
use crate::models::username::Username;
use crate::screens::input_screen::InputScreen;
use crate::screens::profile_screen::{Activation, ProfileScreen};
use crate::services::github_user_service::GitHubUserService;
use crate::views::{self, InputViewModel};


/// Reads lines until one leaves a non-empty buffer. `None` on end of input.
pub fn read_username<R: BufRead, W: Write>(
    registry: &Handlebars<'_>,
    input: R,
    out: &mut W,
) -> anyhow::Result<Option<Username>> {
    let mut screen = InputScreen::new();
    write!(out, "{}", registry.render("input", &InputViewModel { has_attempt: false })?)?;
    out.flush()?;

    for line in input.lines() {
        let line = line.context("Failed to read username")?;
        screen.edit(line.trim_end_matches('\r'));
        if let Some(username) = screen.proceed() {
            return Ok(Some(username));
        }
        write!(out, "{}", registry.render("input", &InputViewModel { has_attempt: true })?)?;
        out.flush()?;
    }
    Ok(None)
}

/// Shows the profile screen for `username` until its fetch settles.
/// `dismiss_on` is raced against the fetch and dismisses the screen if it
/// finishes first.
pub async fn show_profile<W, F>(
    registry: &Handlebars<'_>,
    service: Arc<GitHubUserService>,
    username: Username,
    out: &mut W,
    dismiss_on: F,
) -> anyhow::Result<Activation>
where
    W: Write,
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let mut screen = ProfileScreen::new(username);
    let loading = profile_mapper::to_view_model(screen.username(), &screen.outcome());
    write!(out, "{}", views::render_profile(registry, &loading)?)?;
    out.flush()?;

    screen.activate(service);
    let dismiss = screen.dismiss_handle();
    let watcher = tokio::spawn(async move {
        tokio::select! {
            _ = dismiss_on => dismiss.cancel(),
            _ = dismiss.cancelled() => {}
        }
    });

    let activation = screen.settled().await.unwrap_or(Activation::Cancelled);
    watcher.abort();

    match &activation {
        Activation::Completed(outcome) => {
            let vm = profile_mapper::to_view_model(screen.username(), outcome);
            write!(out, "{}", views::render_profile(registry, &vm)?)?;
        }
        Activation::Cancelled => writeln!(out, "Dismissed.")?,
    }
    out.flush()?;
    Ok(activation)
}

pub async fn run(
    service: Arc<GitHubUserService>,
    user: Option<String>,
) -> anyhow::Result<()> {
    let registry = views::text_registry()?;
    let mut stdout = std::io::stdout();

    let username = match user {
        Some(raw) => {
            let mut screen = InputScreen::new();
            screen.edit(&raw);
            screen.proceed().context("The username must not be empty")?
        }
        None => {
            let stdin = std::io::stdin();
            match read_username(&registry, stdin.lock(), &mut stdout)? {
                Some(username) => username,
                None => return Ok(()),
            }
        }
    };

    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };
    show_profile(&registry, service, username, &mut stdout, ctrl_c).await?;
    Ok(())
}
