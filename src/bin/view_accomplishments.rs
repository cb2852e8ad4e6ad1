// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily accomplishment report for one user.
//!
//! ```text
//! cargo run --bin view_accomplishments -- <userId> [YYYY-MM-DD]
//! ```
//!
//! Without a date, today's accomplishments (local timezone) are shown.

use chrono::{Local, NaiveDate};
use uplift_api::db::FirestoreDb;
use uplift_api::time_utils::local_day_bounds;

const USAGE: &str = "Usage: view_accomplishments <userId> [YYYY-MM-DD]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().compact().init();

    let mut args = std::env::args().skip(1);
    let user_id = match args.next() {
        Some(id) => id,
        None => {
            eprintln!("Error: User ID is a required argument.");
            println!("{USAGE}");
            return Ok(());
        }
    };

    let date = match args.next() {
        Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                eprintln!("Error: Invalid date format \"{raw}\". Please use YYYY-MM-DD.");
                println!("{USAGE}");
                return Ok(());
            }
        },
        None => Local::now().date_naive(),
    };

    let Some((start, end)) = local_day_bounds(date) else {
        eprintln!("Error: No local midnight exists for {date}.");
        return Ok(());
    };

    dotenvy::dotenv().ok();
    let project_id =
        std::env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string());

    println!("Fetching accomplishments for user \"{user_id}\" on {date}...");

    let db = FirestoreDb::new(&project_id).await?;
    let accomplishments = db.accomplishments_for_range(&user_id, start, end).await?;

    if accomplishments.is_empty() {
        println!("No accomplishments found for this day.");
        return Ok(());
    }

    println!("\n--- Accomplishments ---");
    for record in &accomplishments {
        let local_time = record.timestamp.with_timezone(&Local).format("%H:%M:%S");
        println!("- {} (at {})", record.activity, local_time);
    }
    println!("-----------------------\n");

    Ok(())
}
