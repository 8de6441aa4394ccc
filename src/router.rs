//! Client-side route table.
//!
//! Paths map to [`View`] identifiers with a title and icon. Navigation
//! runs a single `before_each` guard that sets the page title and always
//! lets the navigation complete; auth redirects happen in the HTTP client.
//!
//! ## Routes
//!
//! - `/` - Home dashboard
//! - `/prediction`, `/prediction/history` - Generate and review predictions
//! - `/analysis`, `/analysis/{frequency,missing,trend,association}` - Statistics
//! - `/verification` - Accuracy and backtests
//! - `/learning` - Method weights
//! - `/lottery` - Draw data management

/// Fixed suffix appended to every page title.
pub const TITLE_SUFFIX: &str = "Super Lotto Analysis & Prediction System";

/// View rendered for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Prediction,
    PredictionHistory,
    Analysis,
    Frequency,
    Missing,
    Trend,
    Association,
    Verification,
    Learning,
    Lottery,
}

/// Metadata consumed by the guard and navigation menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    pub title: &'static str,
    pub icon: &'static str,
}

/// One row of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub meta: RouteMeta,
}

const fn route(
    path: &'static str,
    name: &'static str,
    view: View,
    title: &'static str,
    icon: &'static str,
) -> RouteEntry {
    RouteEntry {
        path,
        name,
        view,
        meta: RouteMeta { title, icon },
    }
}

/// Route table, in menu order.
pub static ROUTES: [RouteEntry; 11] = [
    route("/", "Home", View::Home, "Home", "DataLine"),
    route("/prediction", "Prediction", View::Prediction, "Smart Prediction", "MagicStick"),
    route(
        "/prediction/history",
        "PredictionHistory",
        View::PredictionHistory,
        "Prediction History",
        "Clock",
    ),
    route("/analysis", "Analysis", View::Analysis, "Data Analysis", "TrendCharts"),
    route(
        "/analysis/frequency",
        "Frequency",
        View::Frequency,
        "Frequency Statistics",
        "Histogram",
    ),
    route("/analysis/missing", "Missing", View::Missing, "Missing Analysis", "Minus"),
    route("/analysis/trend", "Trend", View::Trend, "Trend Analysis", "Line"),
    route(
        "/analysis/association",
        "Association",
        View::Association,
        "Association Analysis",
        "Connection",
    ),
    route("/verification", "Verification", View::Verification, "Verification Center", "Check"),
    route("/learning", "Learning", View::Learning, "Model Learning", "Setting"),
    route("/lottery", "Lottery", View::Lottery, "Data Management", "Folder"),
];

/// Strip query and fragment from a path.
fn strip_query_frag(s: &str) -> &str {
    match s.find(['?', '#']) {
        Some(i) => &s[..i],
        None => s,
    }
}

/// Normalize a path: no query/fragment, leading slash, no trailing slash.
fn normalize(path: &str) -> String {
    let trimmed = strip_query_frag(path.trim()).trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Title produced by the guard for a (possibly unmatched) route.
pub fn page_title(route: Option<&RouteEntry>) -> String {
    let title = route.map(|r| r.meta.title).unwrap_or("");
    format!("{title} - {TITLE_SUFFIX}")
}

/// Result of a completed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub from: String,
    pub to: String,
    pub route: Option<&'static RouteEntry>,
    pub title: String,
}

/// Router holding the current location.
#[derive(Debug, Clone)]
pub struct Router {
    routes: &'static [RouteEntry],
    current: String,
    title: String,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self::with_routes(&ROUTES)
    }

    pub fn with_routes(routes: &'static [RouteEntry]) -> Self {
        Self {
            routes,
            current: "/".to_string(),
            title: String::new(),
        }
    }

    pub fn routes(&self) -> &'static [RouteEntry] {
        self.routes
    }

    /// Match a path against the table.
    pub fn resolve(&self, path: &str) -> Option<&'static RouteEntry> {
        let path = normalize(path);
        self.routes.iter().find(|r| r.path == path)
    }

    /// Look up a route by name.
    pub fn by_name(&self, name: &str) -> Option<&'static RouteEntry> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn current_path(&self) -> &str {
        &self.current
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn current_route(&self) -> Option<&'static RouteEntry> {
        self.resolve(&self.current)
    }

    /// Navigate to `path`. Never rejected.
    pub fn push(&mut self, path: &str) -> Navigation {
        let to = normalize(path);
        let route = self.resolve(&to);
        let title = self.before_each(route);

        let from = std::mem::replace(&mut self.current, to.clone());
        tracing::debug!(%from, %to, matched = route.is_some(), "Navigated");

        Navigation {
            from,
            to,
            route,
            title,
        }
    }

    fn before_each(&mut self, to: Option<&RouteEntry>) -> String {
        self.title = page_title(to);
        self.title.clone()
    }
}
