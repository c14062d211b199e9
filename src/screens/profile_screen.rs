use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::errors::FetchError;
use crate::models::fetch_outcome::FetchOutcome;
use crate::models::username::Username;
use crate::services::github_user_service::GitHubUserService;


/// How the single fetch task of a profile screen ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Completed(FetchOutcome),
    /// The screen went away first. The outcome stays `Loading`.
    Cancelled,
}

/// Renders from one `FetchOutcome`, fetched at most once per screen.
///
/// The fetch task is bound to the screen: `dismiss` or dropping the screen
/// cancels it.
pub struct ProfileScreen {
    username: Username,
    outcome_tx: Arc<watch::Sender<FetchOutcome>>,
    outcome: watch::Receiver<FetchOutcome>,
    shutdown: CancellationToken,
    task: Option<JoinHandle<Activation>>,
    activated: bool,
    activation: Option<Activation>,
}

impl ProfileScreen {
    pub fn new(username: Username) -> Self {
        let (outcome_tx, outcome) = watch::channel(FetchOutcome::Loading);
        ProfileScreen {
            username,
            outcome_tx: Arc::new(outcome_tx),
            outcome,
            shutdown: CancellationToken::new(),
            task: None,
            activated: false,
            activation: None,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Starts the fetch. Only the first call does anything.
    pub fn activate(&mut self, service: Arc<GitHubUserService>) -> bool {
        if self.activated {
            return false;
        }
        self.activated = true;

        let span = tracing::info_span!("profile_screen", username = %self.username);
        let username = self.username.clone();
        let fetch = async move { service.fetch_profile(&username).await };
        self.task = Some(tokio::spawn(
            run_fetch(
                fetch,
                self.username.clone(),
                self.outcome_tx.clone(),
                self.shutdown.clone(),
            )
            .instrument(span),
        ));
        true
    }

    pub fn outcome(&self) -> FetchOutcome {
        self.outcome.borrow().clone()
    }

    /// Token that dismisses this screen when cancelled.
    pub fn dismiss_handle(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub fn dismiss(&self) {
        self.shutdown.cancel();
    }

    /// Waits for the fetch task to end. `None` if the screen was never
    /// activated.
    pub async fn settled(&mut self) -> Option<Activation> {
        if let Some(task) = self.task.take() {
            let activation = match task.await {
                Ok(activation) => activation,
                Err(e) if e.is_panic() => {
                    log::error!("Profile screen task panicked: {}", e);
                    let failed = FetchOutcome::Failed(FetchError::Unexpected);
                    commit(&self.outcome_tx, failed.clone());
                    Activation::Completed(failed)
                }
                Err(_) => Activation::Cancelled,
            };
            self.activation = Some(activation);
        }
        self.activation.clone()
    }
}

impl Drop for ProfileScreen {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Races `fetch` against dismissal. The fetch runs in its own task so a
/// panic inside it ends as `Failed(Unexpected)`.
async fn run_fetch<F>(
    fetch: F,
    username: Username,
    outcome: Arc<watch::Sender<FetchOutcome>>,
    shutdown: CancellationToken,
) -> Activation
where
    F: Future<Output = FetchOutcome> + Send + 'static,
{
    let mut fetch = tokio::spawn(fetch.in_current_span());

    tokio::select! {
        _ = shutdown.cancelled() => {
            fetch.abort();
            log::info!("Profile screen dismissed mid-fetch, username: {}", username);
            Activation::Cancelled
        }
        joined = &mut fetch => {
            let next = match joined {
                Ok(next) => next,
                Err(e) => {
                    log::error!("Profile fetch failed to finish, username: {}: {}", username, e);
                    FetchOutcome::Failed(FetchError::Unexpected)
                }
            };
            commit(&outcome, next.clone());
            Activation::Completed(next)
        }
    }
}

/// Stores `next` if the current outcome is still `Loading`.
fn commit(outcome: &watch::Sender<FetchOutcome>, next: FetchOutcome) -> bool {
    outcome.send_if_modified(|current| {
        if current.is_terminal() || next.is_loading() {
            return false;
        }
        *current = next;
        true
    })
}
