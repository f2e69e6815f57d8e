//! Flight listing.

use crate::app::App;
use crate::output::{self, OutputFormat};
use anyhow::{bail, Result};
use chrono::{DateTime, Local, TimeZone};
use flexjet_api::Flight;
use flexjet_services::{AuthenticationService, FlightService};
use tracing::warn;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// List the signed-in user's flights in server order.
///
/// An authentication failure means the stored token is no longer accepted,
/// so it is removed before reporting.
pub async fn flights(app: &App, format: &OutputFormat) -> Result<()> {
    let flights = match app.flights.fetch_flights().await {
        Ok(flights) => flights,
        Err(e) => {
            if e.is_authentication_error() {
                if let Err(clear_err) = app.auth.sign_out().await {
                    warn!(error = %clear_err, "Failed to clear rejected token");
                }
            }
            bail!(e.user_facing_message());
        }
    };

    match format {
        OutputFormat::Json => output::print_json(&flights)?,
        OutputFormat::Text => {
            if flights.is_empty() {
                println!("No flights found.");
                return Ok(());
            }
            let now = Local::now();
            for flight in &flights {
                output::print_heading(&flight_title(flight, &now));
                for (label, value) in flight_rows(flight) {
                    output::print_row(label, &value);
                }
            }
        }
    }

    Ok(())
}

/// `LAS -> JFK  (Las Vegas to New York)`, tagged when it departs later today.
fn flight_title<Tz: TimeZone>(flight: &Flight, now: &DateTime<Tz>) -> String {
    let title = format!(
        "{} -> {}  ({} to {})",
        flight.origin_iata,
        flight.destination_iata,
        flight.origin_city(),
        flight.destination_city()
    );
    if flight.is_today(now) {
        format!("{}  [today]", title)
    } else {
        title
    }
}

fn flight_rows(flight: &Flight) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Trip", flight.trip_number.clone())];
    if let Some(number) = &flight.flight_number {
        rows.push(("Flight", number.clone()));
    }
    rows.push(("Tail", flight.tail_number.clone()));
    rows.push(("Departs", flight.departure.format(TIME_FORMAT).to_string()));
    rows.push(("Arrives", flight.arrival.format(TIME_FORMAT).to_string()));
    rows.push(("Duration", flight.formatted_duration()));
    rows.push(("Price", flight.formatted_price()));
    rows
}
