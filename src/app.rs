//! Main application module.
//!
//! The `App` wires the HTTP client, router and store together. Side effects
//! raised by the client (notifications, the 401 redirect) arrive as
//! [`Action`]s on the store's channel and are applied between loads.

use crate::api::{FileTokenStore, HttpClient, ReqwestTransport, TokenStore, Transport};
use crate::config::Config;
use crate::error::Result;
use crate::models::{PageQuery, RankingSort};
use crate::router::{Navigation, Router, View};
use crate::state::{Action, NotificationLevel, Store};

use std::sync::Arc;
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Application store.
    store: Store,
    /// Route table and current location.
    router: Router,
    /// Backend client.
    client: HttpClient,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Configuration.
    config: Config,
}

impl App {
    /// Create an application talking to the configured backend.
    pub fn new(config: Config) -> Result<Self> {
        let tokens = match &config.api.token_path {
            Some(path) => FileTokenStore::new(path.clone()),
            None => FileTokenStore::open_default()?,
        };
        Self::with_parts(config, Arc::new(ReqwestTransport::new()), Arc::new(tokens))
    }

    /// Create an application over an explicit transport and token store.
    pub fn with_parts(
        config: Config,
        transport: Arc<dyn Transport>,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<Self> {
        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        // Create store
        let store = Store::with_config(action_tx, &config.ui);
        let dispatcher = Arc::new(store.dispatcher());

        let client = HttpClient::builder()
            .config(config.api.clone())
            .transport(transport)
            .token_store(tokens)
            .notifier(dispatcher.clone())
            .navigator(dispatcher)
            .build()?;

        Ok(Self {
            store,
            router: Router::new(),
            client,
            action_rx,
            config,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Open `path`, load its view and apply every resulting action.
    pub async fn run(&mut self, path: &str) -> Result<()> {
        tracing::info!(base_url = self.client.base_url(), "Starting dashboard client");

        self.navigate(path);
        self.load_current_view().await;
        self.drain_actions();

        if let Some(notification) = &self.store.app.notification {
            tracing::debug!(level = ?notification.level, "Last notification: {}", notification.message);
        }
        Ok(())
    }

    /// Push a route through the router and record it in the store.
    pub fn navigate(&mut self, path: &str) -> Navigation {
        let nav = self.router.push(path);
        self.store.reduce(Action::RouteChanged {
            path: nav.to.clone(),
            title: nav.title.clone(),
        });
        tracing::info!(path = %nav.to, "{}", nav.title);
        nav
    }

    /// Apply queued actions without waiting for new ones.
    pub fn drain_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.handle_action(action);
        }
    }

    /// Handle an action.
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Navigate(path) => {
                self.navigate(&path);
            }
            Action::ShowNotification(notification) => {
                match notification.level {
                    NotificationLevel::Error => tracing::error!("{}", notification.message),
                    NotificationLevel::Warning => tracing::warn!("{}", notification.message),
                    NotificationLevel::Info | NotificationLevel::Success => {
                        tracing::info!("{}", notification.message)
                    }
                }
                self.store.reduce(Action::ShowNotification(notification));
            }
            other => self.store.reduce(other),
        }
    }

    /// Fetch the data shown by the current route's view.
    pub async fn load_current_view(&mut self) {
        let Some(route) = self.router.current_route() else {
            tracing::info!(path = self.router.current_path(), "No view for route");
            return;
        };

        self.store.reduce(Action::SetLoading(true));
        let result = self.load_view(route.view).await;
        self.store.reduce(Action::SetLoading(false));

        // The client has already notified the user.
        if let Err(e) = result {
            tracing::warn!(view = route.name, "Failed to load view: {}", e);
        }
    }

    async fn load_view(&self, view: View) -> Result<()> {
        let api = &self.client;
        match view {
            View::Home => {
                let data = api.dashboard().index().await?;
                match &data.latest {
                    Some(latest) => tracing::info!(
                        issue = %latest.issue,
                        front = ?latest.front_balls(),
                        back = ?latest.back_balls(),
                        "Latest draw"
                    ),
                    None => tracing::info!("No draws recorded yet"),
                }
                tracing::info!(
                    total = data.stats.total_count,
                    next_issue = data.stats.next_issue.as_deref().unwrap_or("-"),
                    recent = data.recent_results.len(),
                    "Dashboard loaded"
                );
            }
            View::Prediction => {
                let prediction = api.prediction();
                let (methods, recent) =
                    futures::join!(prediction.methods(), prediction.recent(None));
                let (methods, recent) = (methods?, recent?);
                tracing::info!(methods = methods.len(), recent = recent.len(), "Predictions loaded");
            }
            View::PredictionHistory => {
                let page = api.prediction().list(PageQuery::default()).await?;
                tracing::info!(total = page.total, page = page.current, "Prediction history loaded");
            }
            View::Analysis => {
                let analysis = api.analysis();
                let (odd_even, sums, consecutive) = futures::join!(
                    analysis.odd_even_stats(),
                    analysis.sum_stats(),
                    analysis.consecutive_stats()
                );
                let (odd_even, sums, consecutive) = (odd_even?, sums?, consecutive?);
                tracing::info!(
                    ?odd_even,
                    ?sums,
                    ?consecutive,
                    "Distribution stats loaded"
                );
            }
            View::Frequency => {
                let analysis = api.analysis();
                let (front, back) =
                    futures::join!(analysis.front_frequency(None), analysis.back_frequency(None));
                let (front, back) = (front?, back?);
                tracing::info!(front = front.len(), back = back.len(), "Frequency loaded");
            }
            View::Missing => {
                let analysis = api.analysis();
                let (front, back) =
                    futures::join!(analysis.front_missing(), analysis.back_missing());
                let (front, back) = (front?, back?);
                tracing::info!(front = front.len(), back = back.len(), "Missing values loaded");
            }
            View::Trend => {
                let trend = api.analysis().trend(None).await?;
                tracing::info!(points = trend.len(), "Trend loaded");
            }
            View::Association => {
                let rules = api.analysis().association_rules(None).await?;
                tracing::info!(rules = rules.len(), "Association rules loaded");
            }
            View::Verification => {
                let verification = api.verification();
                let (ranking, pending) = futures::join!(
                    verification.accuracy_ranking(RankingSort::default(), None),
                    verification.unverified_issues()
                );
                let (ranking, pending) = (ranking?, pending?);
                if let Some(best) = ranking.first() {
                    tracing::info!(method = %best.method_name, score = ?best.composite_score, "Top method");
                }
                tracing::info!(methods = ranking.len(), unverified = pending.len(), "Verification loaded");
            }
            View::Learning => {
                let weights = api.learning().weights().await?;
                for weight in &weights {
                    tracing::debug!(method = %weight.method_name, weight = %weight.weight, "Method weight");
                }
                tracing::info!(methods = weights.len(), "Weights loaded");
            }
            View::Lottery => {
                let page = api.lottery().list(PageQuery::default()).await?;
                tracing::info!(total = page.total, pages = page.pages, "Draw data loaded");
            }
        }
        Ok(())
    }
}
