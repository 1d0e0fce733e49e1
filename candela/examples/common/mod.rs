use candela_core::HistorySource;
use std::sync::Arc;

#[must_use]
pub fn get_source() -> Arc<dyn HistorySource> {
    match std::env::var("CANDELA_BASE_URL") {
        Ok(base) => Arc::new(
            candela_footprint::FootprintConnector::from_base_url(&base)
                .expect("CANDELA_BASE_URL must be a valid absolute url"),
        ),
        Err(_) => {
            println!("--- (Using Mock Source; set CANDELA_BASE_URL for a live backend) ---");
            Arc::new(candela_mock::MockSource::new())
        }
    }
}
