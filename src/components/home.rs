use std::sync::Arc;

use tracing::{error, info};

use super::Signal;
use crate::api::ApiService;

/// Landing page with the backend health check
pub struct HomeComponent {
    api: Arc<dyn ApiService>,
    msg: Signal<String>,
}

impl HomeComponent {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            msg: Signal::default(),
        }
    }

    /// Runs the health check. A failed call is only logged; the message
    /// keeps whatever it showed before.
    pub async fn check(&self) {
        match self.api.get_health().await {
            Ok(health) => {
                info!("Health check answered: {}", health.status);
                self.msg.set(format!("Backend sagt: {}", health.status));
            }
            Err(e) => error!("Health check failed: {}", e),
        }
    }

    pub fn msg(&self) -> String {
        self.msg.get()
    }

    pub fn render(&self) -> String {
        let mut out = String::from("SoupMate\n[Health Check]\n");
        let msg = self.msg();
        if !msg.is_empty() {
            out.push_str(&msg);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::FakeApi;

    #[tokio::test]
    async fn test_health_ok_sets_message() {
        let api = Arc::new(FakeApi::new(Ok("ok"), Ok("")));
        let home = HomeComponent::new(api.clone());
        assert_eq!(home.msg(), "");

        home.check().await;

        assert_eq!(home.msg(), "Backend sagt: ok");
        assert_eq!(api.health_calls(), 1);
    }

    #[tokio::test]
    async fn test_health_failure_leaves_message() {
        let home = HomeComponent::new(Arc::new(FakeApi::new(Err(503), Ok(""))));
        home.check().await;
        assert_eq!(home.msg(), "");
    }

    #[tokio::test]
    async fn test_failure_after_success_keeps_old_message() {
        let api = Arc::new(FakeApi::new(Ok("ok"), Ok("")));
        let home = HomeComponent::new(api.clone());
        home.check().await;
        assert_eq!(home.msg(), "Backend sagt: ok");

        api.set_health(Err(500));
        home.check().await;

        assert_eq!(api.health_calls(), 2);
        assert_eq!(home.msg(), "Backend sagt: ok");
    }

    #[tokio::test]
    async fn test_render_hides_empty_message() {
        let home = HomeComponent::new(Arc::new(FakeApi::new(Ok("ok"), Ok(""))));
        assert_eq!(home.render(), "SoupMate\n[Health Check]\n");

        home.check().await;
        assert_eq!(home.render(), "SoupMate\n[Health Check]\nBackend sagt: ok\n");
    }
}
