use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::net::TcpListener;

use crate::{
    ai::{ClassifierAdapter, GatedClassifier, InferenceClient, ZeroShotClassifier},
    config::AppConfig,
    infrastructure::{directories::ResolvedPaths, shutdown::Shutdown},
    pipeline::{ClassificationPipeline, CommentAnalyzer},
    web::{self, AppState},
    youtube::{CommentSource, YouTubeClient},
};

pub struct CommentTriageApp {
    _paths: ResolvedPaths,
    config: Arc<AppConfig>,
    state: Arc<AppState>,
    shutdown: Shutdown,
}

impl CommentTriageApp {
    /// Builds every long-lived handle once; requests only ever borrow them.
    pub fn initialize(config: AppConfig, paths: ResolvedPaths, shutdown: Shutdown) -> Result<Self> {
        let config = Arc::new(config);

        let http_client = Client::builder()
            .user_agent(format!("comment-triage/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        let youtube: Arc<dyn CommentSource> = Arc::new(
            YouTubeClient::new(http_client.clone(), &config.youtube)
                .context("invalid YOUTUBE_API_BASE_URL")?,
        );

        let inference = InferenceClient::new(http_client, &config.classifier);
        tracing::info!(
            target: "classifier",
            endpoint = inference.endpoint(),
            max_concurrency = config.classifier.max_concurrency,
            "zero-shot classifier configured"
        );
        let oracle: Arc<dyn ZeroShotClassifier> = Arc::new(GatedClassifier::new(
            Arc::new(inference),
            config.classifier.max_concurrency,
        ));

        let pipeline = ClassificationPipeline::new(ClassifierAdapter::new(oracle));
        let analyzer = CommentAnalyzer::new(youtube, pipeline, config.youtube.comment_limit);
        let state = Arc::new(AppState { analyzer });

        Ok(Self {
            _paths: paths,
            config,
            state,
            shutdown,
        })
    }

    pub async fn run(self) -> Result<()> {
        let CommentTriageApp {
            _paths: _,
            config,
            state,
            shutdown,
        } = self;

        let addr = format!("{}:{}", config.server.host, config.server.port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        tracing::info!(target: "web", %addr, "comment triage server listening");

        let stop = shutdown.subscribe();
        axum::serve(listener, web::router(state))
            .with_graceful_shutdown(async move {
                stop.notified().await;
                tracing::info!(target: "web", "shutdown requested; draining in-flight requests");
            })
            .await
            .context("server error")?;

        tracing::info!("server stopped");
        Ok(())
    }
}
