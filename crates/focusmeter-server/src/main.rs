use clap::Parser;
use focusmeter_core::config::ScoringWeights;
use focusmeter_core::scorer::FocusScorer;
use focusmeter_server::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
struct Args {
    #[arg(long, env = "PORT", default_value_t = 5001)]
    port: u16,

    #[command(flatten)]
    weights: ScoringWeights,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    info!("🧠 FocusMeter ML service is initializing...");

    let state = Arc::new(AppState::new(FocusScorer::new(args.weights)));
    let app = focusmeter_server::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("🚀 FocusMeter listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
