//! # BookPro Core
//!
//! Domain types and pure business logic for the BookPro marketplace:
//! profiles, professionals, services, time slots, bookings, and reviews,
//! together with the slot generation and dashboard aggregation routines
//! that the API crate exposes over HTTP.
//!
//! Everything in this crate is free of I/O. Persistence lives in
//! `bookpro-db`, the HTTP surface in `bookpro-api`.

pub mod errors;
pub mod models;
pub mod slots;
pub mod stats;
