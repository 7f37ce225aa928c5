//! Wire types and conversion to internal state types.

use crate::error::{Error, Result};
use crate::state::{Event, EventId, Order, OrderId};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Code the backend puts in `Envelope::code` on success.
pub const SUCCESS_CODE: i64 = 200;

/// The `{ code, data, msg }` wrapper around every JSON response.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    pub data: Option<T>,
    pub msg: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful only with code 200 and a non-null `data`.
    pub fn into_result(self) -> Result<T> {
        match self.data {
            Some(data) if self.code == SUCCESS_CODE => Ok(data),
            _ => Err(Error::api(self.code, self.msg)),
        }
    }
}

/// A booking as the API serializes it.
#[derive(Debug, Deserialize)]
pub struct BookingDto {
    pub id: u64,
    pub event_id: u64,
    pub booking_date: String,
    pub number_of_tickets: u32,
    pub total_amount: Decimal,
    pub booking_status: bool,
}

/// An event as the API serializes it. Fields this client does not show are ignored.
#[derive(Debug, Deserialize)]
pub struct EventDto {
    pub id: u64,
    pub name: String,
}

/// Body of the partial update that cancels a booking.
#[derive(Debug, Serialize)]
pub struct BookingStatusPatch {
    pub booking_status: bool,
}

/// Converts API responses to internal state types.
pub struct DataConverter;

impl DataConverter {
    /// Convert a wire booking to our internal Order type.
    pub fn convert_order(dto: BookingDto) -> Result<Order> {
        Ok(Order {
            id: OrderId(dto.id),
            event_id: EventId(dto.event_id),
            booking_date: Self::parse_booking_date(&dto.booking_date)?,
            number_of_tickets: dto.number_of_tickets,
            total_amount: dto.total_amount,
            booking_status: dto.booking_status,
        })
    }

    /// Convert every booking, failing on the first malformed one.
    pub fn convert_orders(dtos: Vec<BookingDto>) -> Result<Vec<Order>> {
        dtos.into_iter().map(Self::convert_order).collect()
    }

    /// Convert a wire event to our internal Event type.
    pub fn convert_event(dto: EventDto) -> Event {
        Event {
            id: EventId(dto.id),
            name: dto.name,
        }
    }

    /// Accepts a plain date, an RFC 3339 timestamp, or a naive timestamp.
    pub fn parse_booking_date(raw: &str) -> Result<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
            })
            .map_err(|_| Error::invalid_input(format!("unrecognized booking date: {raw}")))
    }
}
