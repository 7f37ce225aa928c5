//! Booking API integration.
//!
//! This module provides a high-level interface to the booking backend,
//! handling the response envelope, authentication headers and data conversion.

mod client;
mod converter;

#[cfg(test)]
pub use client::MockBookingApi;
pub use client::{ApiClient, ApiClientBuilder, BookingApi};
pub use converter::{
    BookingDto, BookingStatusPatch, DataConverter, Envelope, EventDto, SUCCESS_CODE,
};
