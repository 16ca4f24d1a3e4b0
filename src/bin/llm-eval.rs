#[path = "llm-eval/app.rs"]
mod app;
#[path = "llm-eval/args.rs"]
mod args;
#[path = "llm-eval/config/mod.rs"]
mod config;
#[path = "llm-eval/logging.rs"]
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
