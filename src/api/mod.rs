//! Backend API integration.
//!
//! [`HttpClient`] is the single point of egress: it injects the bearer
//! token, unwraps the `{code, msg, data}` envelope and maps failures to
//! user notifications. Endpoint groups hang off the client as thin
//! borrowing views:
//!
//! ```no_run
//! # async fn demo(client: dlt_dashboard::HttpClient) -> dlt_dashboard::Result<()> {
//! let latest = client.lottery().latest().await?;
//! let picks = client.analysis().hot_numbers(None).await?;
//! # Ok(())
//! # }
//! ```

mod analysis;
mod client;
mod dashboard;
mod feedback;
mod learning;
mod lottery;
mod prediction;
mod token;
mod transport;
mod verification;

#[cfg(test)]
pub(crate) mod testing;

pub use analysis::{AnalysisApi, CombinedStats};
pub use client::{
    DEFAULT_FAILURE_MESSAGE, HttpClient, HttpClientBuilder, LOGIN_PATH, RequestOptions,
    status_message,
};
pub use dashboard::DashboardApi;
pub use feedback::{LogFeedback, Navigator, Notifier};
pub use learning::LearningApi;
pub use lottery::LotteryApi;
pub use prediction::PredictionApi;
pub use token::{FileTokenStore, MemoryTokenStore, TOKEN_KEY, TokenStore};
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};
pub use verification::VerificationApi;
