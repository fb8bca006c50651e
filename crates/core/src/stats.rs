//! Dashboard summary counts, recomputed from the full booking history.
//!
//! Pure aggregation: the caller fetches a professional's bookings and
//! services, and this module derives the distinct-client count plus the
//! booking count and revenue for the calendar month containing `now`.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{booking::Booking, service::Service};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_clients: usize,
    pub monthly_bookings: usize,
    pub monthly_revenue: f64,
}

/// Derives summary counts from a booking history.
///
/// A booking is "monthly" when it was created on or after the first day of
/// `now`'s month; there is no upper bound, so future-dated creations count.
/// Revenue sums the referenced service's price per monthly booking; a
/// booking whose service cannot be resolved contributes zero.
pub fn aggregate(bookings: &[Booking], services: &[Service], now: DateTime<Utc>) -> DashboardStats {
    let total_clients = bookings
        .iter()
        .map(|booking| booking.user_id)
        .collect::<HashSet<_>>()
        .len();

    let monthly: Vec<&Booking> = bookings
        .iter()
        .filter(|booking| {
            let created = booking.created_at;
            (created.year(), created.month()) >= (now.year(), now.month())
        })
        .collect();

    let monthly_revenue = monthly
        .iter()
        .map(|booking| {
            services
                .iter()
                .find(|service| service.id == booking.service_id)
                .map(|service| service.price)
                .unwrap_or(0.0)
        })
        .sum();

    DashboardStats {
        total_clients,
        monthly_bookings: monthly.len(),
        monthly_revenue,
    }
}
