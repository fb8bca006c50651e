use bookpro_api::middleware::error_handling::AppError;
use bookpro_core::{
    errors::BookingError,
    models::{
        booking::{Booking, BookingStatus},
        service::Service,
    },
    stats::{self, DashboardStats},
};
use chrono::{DateTime, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::test_utils::{booking_fixture, professional_fixture, service_fixture, TestContext};

// Test wrapper that replays the handler decision logic against mock
// repositories instead of a live database

async fn test_stats_wrapper(
    ctx: &mut TestContext,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<DashboardStats, AppError> {
    let professional = ctx
        .professional_repo
        .get_professional_by_user_id(user_id)
        .await?
        .ok_or_else(|| {
            AppError(BookingError::NotFound(
                "Professional profile not found".to_string(),
            ))
        })?;

    let db_bookings = ctx
        .booking_repo
        .get_bookings_by_professional_id(professional.id)
        .await?;

    let db_services = ctx
        .service_repo
        .get_services_by_professional_id(professional.id)
        .await?;

    let bookings = db_bookings
        .into_iter()
        .map(|booking| {
            let status = booking
                .status
                .parse::<BookingStatus>()
                .map_err(|e| AppError(BookingError::Internal(e.into())))?;

            Ok(Booking {
                id: booking.id,
                user_id: booking.user_id,
                professional_id: booking.professional_id,
                service_id: booking.service_id,
                time_slot_id: booking.time_slot_id,
                status,
                notes: booking.notes,
                created_at: booking.created_at,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let services: Vec<Service> = db_services
        .into_iter()
        .map(|service| Service {
            id: service.id,
            professional_id: service.professional_id,
            name: service.name,
            description: service.description,
            duration: service.duration,
            price: service.price,
            created_at: service.created_at,
        })
        .collect();

    Ok(stats::aggregate(&bookings, &services, now))
}

#[tokio::test]
async fn test_stats_over_booking_history() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let professional_id = Uuid::new_v4();
    let service_id = Uuid::new_v4();
    let client_id = Uuid::new_v4();
    // Fixtures stamp bookings with the current time, so "this month" is now
    let now = Utc::now();

    ctx.professional_repo
        .expect_get_professional_by_user_id()
        .with(predicate::eq(user_id))
        .returning(move |uid| Ok(Some(professional_fixture(professional_id, uid))));

    // Two bookings by the same client, both created this month
    ctx.booking_repo
        .expect_get_bookings_by_professional_id()
        .with(predicate::eq(professional_id))
        .returning(move |professional_id| {
            Ok(vec![
                booking_fixture(
                    Uuid::new_v4(),
                    client_id,
                    professional_id,
                    service_id,
                    Uuid::new_v4(),
                    "confirmed",
                ),
                booking_fixture(
                    Uuid::new_v4(),
                    client_id,
                    professional_id,
                    service_id,
                    Uuid::new_v4(),
                    "completed",
                ),
            ])
        });

    ctx.service_repo
        .expect_get_services_by_professional_id()
        .with(predicate::eq(professional_id))
        .returning(move |professional_id| {
            Ok(vec![service_fixture(service_id, professional_id, 50.0)])
        });

    let result = test_stats_wrapper(&mut ctx, user_id, now).await;

    let stats = result.expect("stats should succeed");
    assert_eq!(stats.total_clients, 1);
    assert_eq!(stats.monthly_bookings, 2);
    assert_eq!(stats.monthly_revenue, 100.0);
}

#[tokio::test]
async fn test_stats_without_professional_profile() {
    let mut ctx = TestContext::new();

    ctx.professional_repo
        .expect_get_professional_by_user_id()
        .returning(|_| Ok(None));

    ctx.booking_repo
        .expect_get_bookings_by_professional_id()
        .times(0);

    let result = test_stats_wrapper(&mut ctx, Uuid::new_v4(), Utc::now()).await;

    match result.unwrap_err().0 {
        BookingError::NotFound(_) => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}
