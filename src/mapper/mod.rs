//! Conversions between transport values and stored records.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::America::Sao_Paulo;

use crate::db::StoreError;
use crate::models::*;

/// Route ids always arrive as text
pub fn parse_id(raw: &str) -> Result<i64, StoreError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| StoreError::InvalidKey(format!("id must be an integer, got {raw:?}")))
}

pub fn parse_price_bound(raw: &str) -> Result<f64, StoreError> {
    match raw.trim().parse::<f64>() {
        Ok(bound) if bound.is_finite() => Ok(bound),
        _ => Err(StoreError::InvalidKey(format!("price bound must be a number, got {raw:?}"))),
    }
}

pub fn parse_transport(raw: &str) -> Result<Transport, StoreError> {
    Transport::from_name(raw)
        .ok_or_else(|| StoreError::InvalidKey(format!("unknown transport mode {raw:?}")))
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (the date part is kept).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Year used for computed ages, taken in Brazilian local time
pub fn current_year() -> i32 {
    Utc::now().with_timezone(&Sao_Paulo).year()
}

pub fn age_in(birth_date: NaiveDate, year: i32) -> i32 {
    year - birth_date.year()
}

impl PlayerClubRow {
    /// Convert the join row to the listing format, adding `idade`
    pub fn to_listing(self, year: i32) -> PlayerListing {
        let idade = age_in(self.birth_date, year);

        PlayerListing {
            time: Club {
                id: self.club_id,
                name: self.club_name,
                state: self.club_state,
            },
            player: Player {
                id: self.id,
                name: self.name,
                birth_date: self.birth_date,
                salary: self.salary,
                nationality: self.nationality,
                club_id: self.club_id,
                position: self.position,
            },
            idade,
        }
    }
}

pub fn trip_summary(aggregate: TripAggregate) -> TripSummary {
    TripSummary {
        preco: aggregate.avg_price,
        duracao: aggregate.avg_duration,
    }
}
