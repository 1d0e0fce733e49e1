mod common;
use candela::{Candela, ChartFrame, LogSurface, Timeframe};
use candela_core::ChartSurface;
use common::get_source;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,candela=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    // 1. Create a source (mock unless CANDELA_BASE_URL points at a backend).
    let source = get_source();

    // 2. Build the session factory.
    let candela = Candela::builder().with_source(source).build()?;

    // 3. Subscribe to one-minute candles; the first fetch fires immediately.
    let mut sub = candela.subscribe(Timeframe::M1);

    // 4. Render a handful of frames, then shut the poller down.
    let mut surface = LogSurface::default();
    for _ in 0..5 {
        match sub.next_frame().await {
            Some(ChartFrame::Ready { series, viewport }) => surface.render(&series, &viewport),
            Some(ChartFrame::Loading) => surface.render_loading(),
            None => break,
        }
    }
    sub.stop().await;

    Ok(())
}
