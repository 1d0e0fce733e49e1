mod common;
use candela::{Candela, DepthScale, LogSurface, Timeframe, drive};
use candela_core::ChartSurface;
use common::get_source;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    let candela = Candela::builder()
        .with_source(get_source())
        .poll_interval(std::time::Duration::from_millis(500))
        .build()?;

    let mut surface = LogSurface::default();

    // A couple of wheel gestures adjust the cosmetic depth scale; the surface
    // is the only consumer.
    let mut scale = DepthScale::new();
    scale.zoom_in();
    scale.zoom_in();
    surface.set_depth_scale(scale.factor());

    // Watch one-minute candles briefly.
    let mut sub = candela.subscribe(Timeframe::M1);
    let _ = tokio::time::timeout(
        std::time::Duration::from_secs(2),
        drive(&mut sub, &mut surface),
    )
    .await;

    // The selector emits "15m": the old poller stops before the new one starts.
    let mut sub = candela.switch(sub, Timeframe::M15).await;
    let _ = tokio::time::timeout(
        std::time::Duration::from_secs(2),
        drive(&mut sub, &mut surface),
    )
    .await;

    sub.stop().await;
    Ok(())
}
