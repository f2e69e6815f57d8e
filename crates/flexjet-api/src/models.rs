//! Wire models.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST api/signIn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

/// Successful sign-in response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    pub token: String,
}

/// Error body the API returns on failure statuses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// A booked flight as returned by `GET api/flights`.
///
/// Timestamps are ISO-8601 with or without fractional seconds; `price` is in
/// cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub trip_number: String,
    #[serde(default)]
    pub flight_number: Option<String>,
    pub tail_number: String,
    pub origin: String,
    pub origin_iata: String,
    pub destination: String,
    pub destination_iata: String,
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    pub price: i64,
}

impl Flight {
    /// City part of `origin`, e.g. `Los Angeles` for `Los Angeles (LAX)`.
    pub fn origin_city(&self) -> &str {
        city_name(&self.origin)
    }

    pub fn destination_city(&self) -> &str {
        city_name(&self.destination)
    }

    /// True if the flight has not departed yet and leaves on the same
    /// calendar day as `now`, in `now`'s time zone.
    pub fn is_today<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        let departure = self.departure.with_timezone(&now.timezone());
        departure.date_naive() == now.date_naive() && self.departure >= now.with_timezone(&Utc)
    }

    pub fn price_in_dollars(&self) -> f64 {
        self.price as f64 / 100.0
    }

    /// Price as US currency, e.g. `$1,080.00`.
    pub fn formatted_price(&self) -> String {
        let cents = self.price.unsigned_abs();
        let sign = if self.price < 0 { "-" } else { "" };
        format!(
            "{}${}.{:02}",
            sign,
            group_thousands(cents / 100),
            cents % 100
        )
    }

    pub fn duration(&self) -> TimeDelta {
        self.arrival - self.departure
    }

    /// Duration as `"{h}h {m}m"`, truncating seconds.
    pub fn formatted_duration(&self) -> String {
        let seconds = self.duration().num_seconds();
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    }
}

/// Text before the first `(`, trimmed. Locations without one are returned whole.
fn city_name(location: &str) -> &str {
    match location.find('(') {
        Some(paren) => location[..paren].trim(),
        None => location,
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn flight_json(departure: &str, arrival: &str) -> String {
        format!(
            r#"{{
                "id": "FL001",
                "tripNumber": "1234567",
                "flightNumber": "UA890",
                "tailNumber": "N987UA",
                "origin": "Las Vegas (LAS)",
                "originIata": "LAS",
                "destination": "New York (JFK)",
                "destinationIata": "JFK",
                "departure": "{}",
                "arrival": "{}",
                "price": 10800
            }}"#,
            departure, arrival
        )
    }

    fn sample() -> Flight {
        serde_json::from_str(&flight_json(
            "2026-01-08T09:20:00.000Z",
            "2026-01-08T12:20:00.000Z",
        ))
        .unwrap()
    }

    #[test]
    fn decodes_camel_case_fields() {
        let flight = sample();
        assert_eq!(flight.id, "FL001");
        assert_eq!(flight.trip_number, "1234567");
        assert_eq!(flight.flight_number.as_deref(), Some("UA890"));
        assert_eq!(flight.origin_iata, "LAS");
        assert_eq!(flight.destination_iata, "JFK");
        assert_eq!(flight.price, 10800);
        assert_eq!(
            flight.departure,
            Utc.with_ymd_and_hms(2026, 1, 8, 9, 20, 0).unwrap()
        );
        assert_eq!(
            flight.arrival,
            Utc.with_ymd_and_hms(2026, 1, 8, 12, 20, 0).unwrap()
        );
    }

    #[test]
    fn fractional_and_whole_second_timestamps_are_equal() {
        let with_millis: Flight = serde_json::from_str(&flight_json(
            "2026-01-08T09:20:00.000Z",
            "2026-01-08T12:20:00.000Z",
        ))
        .unwrap();
        let without_millis: Flight = serde_json::from_str(&flight_json(
            "2026-01-08T09:20:00Z",
            "2026-01-08T12:20:00Z",
        ))
        .unwrap();

        assert_eq!(with_millis.departure, without_millis.departure);
        assert_eq!(with_millis.arrival, without_millis.arrival);
        assert_eq!(with_millis, without_millis);
    }

    #[test]
    fn offset_timestamps_normalize_to_utc() {
        let flight: Flight = serde_json::from_str(&flight_json(
            "2026-01-08T04:20:00-05:00",
            "2026-01-08T12:20:00Z",
        ))
        .unwrap();
        assert_eq!(
            flight.departure,
            Utc.with_ymd_and_hms(2026, 1, 8, 9, 20, 0).unwrap()
        );
    }

    #[test]
    fn flight_number_is_optional() {
        let json = r#"{
            "id": "FL002",
            "tripNumber": "7654321",
            "tailNumber": "N123FJ",
            "origin": "Teterboro (TEB)",
            "originIata": "TEB",
            "destination": "Palm Beach (PBI)",
            "destinationIata": "PBI",
            "departure": "2026-02-01T15:00:00Z",
            "arrival": "2026-02-01T17:45:00Z",
            "price": 250000
        }"#;
        let flight: Flight = serde_json::from_str(json).unwrap();
        assert!(flight.flight_number.is_none());
    }

    #[test]
    fn missing_required_field_fails() {
        let json = r#"{"id": "FL003", "price": 1}"#;
        assert!(serde_json::from_str::<Flight>(json).is_err());
    }

    #[test]
    fn price_helpers() {
        let mut flight = sample();
        assert_eq!(flight.price_in_dollars(), 108.0);
        assert_eq!(flight.formatted_price(), "$108.00");

        flight.price = 123_456_789;
        assert_eq!(flight.formatted_price(), "$1,234,567.89");

        flight.price = 5;
        assert_eq!(flight.formatted_price(), "$0.05");

        flight.price = 100_000;
        assert_eq!(flight.formatted_price(), "$1,000.00");
    }

    #[test]
    fn duration_helpers() {
        let mut flight = sample();
        assert_eq!(flight.duration(), TimeDelta::hours(3));
        assert_eq!(flight.formatted_duration(), "3h 0m");

        flight.arrival = flight.departure + TimeDelta::minutes(165) + TimeDelta::seconds(59);
        assert_eq!(flight.formatted_duration(), "2h 45m");
    }

    #[test]
    fn city_names_drop_airport_code() {
        let mut flight = sample();
        assert_eq!(flight.origin_city(), "Las Vegas");
        assert_eq!(flight.destination_city(), "New York");

        flight.origin = "  Los Angeles  (LAX)".to_string();
        flight.destination = "New York   (JFK)".to_string();
        assert_eq!(flight.origin_city(), "Los Angeles");
        assert_eq!(flight.destination_city(), "New York");
    }

    #[test]
    fn city_names_without_code_are_returned_whole() {
        let mut flight = sample();
        flight.origin = "Los Angeles".to_string();
        flight.destination = "New York".to_string();
        assert_eq!(flight.origin_city(), "Los Angeles");
        assert_eq!(flight.destination_city(), "New York");
    }

    #[test]
    fn is_today_only_for_upcoming_departures_today() {
        let now = Utc.with_ymd_and_hms(2026, 1, 8, 10, 0, 0).unwrap();
        let mut flight = sample();

        flight.departure = now + TimeDelta::hours(1);
        assert!(flight.is_today(&now));

        flight.departure = now;
        assert!(flight.is_today(&now));

        flight.departure = now - TimeDelta::hours(1);
        assert!(!flight.is_today(&now));

        flight.departure = now + TimeDelta::days(1);
        assert!(!flight.is_today(&now));

        flight.departure = now - TimeDelta::days(1);
        assert!(!flight.is_today(&now));
    }

    #[test]
    fn is_today_uses_the_callers_calendar_day() {
        let eastern = chrono::FixedOffset::west_opt(5 * 3600).unwrap();
        // 22:00 on Jan 8 in UTC-5 is already Jan 9 in UTC
        let now = eastern.with_ymd_and_hms(2026, 1, 8, 22, 0, 0).unwrap();
        let mut flight = sample();

        flight.departure = Utc.with_ymd_and_hms(2026, 1, 9, 4, 30, 0).unwrap();
        assert!(flight.is_today(&now));

        flight.departure = Utc.with_ymd_and_hms(2026, 1, 9, 6, 0, 0).unwrap();
        assert!(!flight.is_today(&now));
    }

    #[test]
    fn sign_in_request_serializes_credentials() {
        let request = SignInRequest {
            username: "pilot".to_string(),
            password: "p@ss".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({"username": "pilot", "password": "p@ss"}));
    }
}
