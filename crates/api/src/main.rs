//! GoalFuel bootstrap
//!
//! Loads configuration, initializes tracing and the application context,
//! then prints today's hydration state. A UI shell embedding this crate
//! calls into `commands` instead.

use goalfuel_app::{commands, utils, AppContext};
use goalfuel_core::next_reminder;
use chrono::Local;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = goalfuel_infra::AppConfig::load()?;
    utils::logging::init_tracing(&config.log_filter);

    let ctx = AppContext::new(config)?;

    let slots = commands::hydration::load_schedule(&ctx).await;
    let (consumed, goal) = commands::hydration::daily_progress(&ctx, &slots).await;

    println!("Hydration today: {consumed:.1} / {goal:.1} L over {} slots", slots.len());
    match next_reminder(&slots, Local::now()) {
        Some(time) => println!("Next intake at {}", time.format("%H:%M")),
        None => println!("No more intakes scheduled today"),
    }

    Ok(())
}
