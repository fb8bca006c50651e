use bookpro_api::middleware::error_handling::AppError;
use bookpro_core::{
    errors::BookingError,
    models::booking::{
        BookingStatus, CreateBookingRequest, CreateBookingResponse, UpdateBookingResponse,
    },
};
use mockall::predicate;
use uuid::Uuid;

use crate::test_utils::{booking_fixture, service_fixture, time_slot_fixture, TestContext};

// Test wrappers that replay the handler decision logic against mock
// repositories instead of a live database

async fn test_reserve_wrapper(
    ctx: &mut TestContext,
    user_id: Uuid,
    request: &CreateBookingRequest,
) -> Result<CreateBookingResponse, AppError> {
    let service = ctx
        .service_repo
        .get_service_by_id(request.service_id)
        .await?
        .filter(|service| service.professional_id == request.professional_id)
        .ok_or_else(|| {
            AppError(BookingError::NotFound(format!(
                "Service with ID {} not found for this professional",
                request.service_id
            )))
        })?;

    let slot = ctx
        .time_slot_repo
        .get_time_slot_by_id(request.time_slot_id)
        .await?
        .filter(|slot| slot.professional_id == request.professional_id)
        .ok_or_else(|| {
            AppError(BookingError::NotFound(format!(
                "Time slot with ID {} not found for this professional",
                request.time_slot_id
            )))
        })?;

    if !slot.is_available {
        return Err(AppError(BookingError::Conflict(
            "Time slot is no longer available".to_string(),
        )));
    }

    let booking = ctx
        .booking_repo
        .create_booking(user_id, request.professional_id, service.id, slot.id, None)
        .await?
        .ok_or_else(|| {
            AppError(BookingError::Conflict(
                "Time slot is no longer available".to_string(),
            ))
        })?;

    let status = booking
        .status
        .parse::<BookingStatus>()
        .map_err(|e| AppError(BookingError::Internal(e.into())))?;

    Ok(CreateBookingResponse {
        id: booking.id,
        status,
        created_at: booking.created_at,
    })
}

async fn test_cancel_wrapper(
    ctx: &mut TestContext,
    user_id: Uuid,
    booking_id: Uuid,
) -> Result<UpdateBookingResponse, AppError> {
    let booking = ctx
        .booking_repo
        .get_booking_by_id(booking_id)
        .await?
        .ok_or_else(|| {
            AppError(BookingError::NotFound(format!(
                "Booking with ID {} not found",
                booking_id
            )))
        })?;

    if booking.user_id != user_id {
        return Err(AppError(BookingError::Authorization(
            "Booking belongs to another client".to_string(),
        )));
    }

    let updated = ctx
        .booking_repo
        .update_booking_status(booking_id, "cancelled")
        .await?
        .ok_or_else(|| {
            AppError(BookingError::NotFound(format!(
                "Booking with ID {} not found",
                booking_id
            )))
        })?;

    let status = updated
        .status
        .parse::<BookingStatus>()
        .map_err(|e| AppError(BookingError::Internal(e.into())))?;

    Ok(UpdateBookingResponse {
        id: updated.id,
        status,
    })
}

#[tokio::test]
async fn test_reserve_success() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let professional_id = Uuid::new_v4();
    let service_id = Uuid::new_v4();
    let time_slot_id = Uuid::new_v4();
    let booking_id = Uuid::new_v4();

    ctx.service_repo
        .expect_get_service_by_id()
        .with(predicate::eq(service_id))
        .returning(move |id| Ok(Some(service_fixture(id, professional_id, 50.0))));

    ctx.time_slot_repo
        .expect_get_time_slot_by_id()
        .with(predicate::eq(time_slot_id))
        .returning(move |id| Ok(Some(time_slot_fixture(id, professional_id, true))));

    ctx.booking_repo
        .expect_create_booking()
        .with(
            predicate::eq(user_id),
            predicate::eq(professional_id),
            predicate::eq(service_id),
            predicate::eq(time_slot_id),
            predicate::always(),
        )
        .times(1)
        .returning(move |user_id, professional_id, service_id, time_slot_id, _| {
            Ok(Some(booking_fixture(
                booking_id,
                user_id,
                professional_id,
                service_id,
                time_slot_id,
                "confirmed",
            )))
        });

    let request = CreateBookingRequest {
        professional_id,
        service_id,
        time_slot_id,
        notes: None,
    };

    let result = test_reserve_wrapper(&mut ctx, user_id, &request).await;

    let response = result.expect("reservation should succeed");
    assert_eq!(response.id, booking_id);
    assert_eq!(response.status, BookingStatus::Confirmed);
}

#[tokio::test]
async fn test_reserve_unavailable_slot_is_rejected() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let professional_id = Uuid::new_v4();
    let service_id = Uuid::new_v4();
    let time_slot_id = Uuid::new_v4();

    ctx.service_repo
        .expect_get_service_by_id()
        .returning(move |id| Ok(Some(service_fixture(id, professional_id, 50.0))));

    // Slot exists but has already been consumed
    ctx.time_slot_repo
        .expect_get_time_slot_by_id()
        .returning(move |id| Ok(Some(time_slot_fixture(id, professional_id, false))));

    // The reservation must never reach the booking repository
    ctx.booking_repo.expect_create_booking().times(0);

    let request = CreateBookingRequest {
        professional_id,
        service_id,
        time_slot_id,
        notes: None,
    };

    let result = test_reserve_wrapper(&mut ctx, user_id, &request).await;

    match result.unwrap_err().0 {
        BookingError::Conflict(_) => {}
        e => panic!("Expected Conflict error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_reserve_lost_race_is_conflict() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let professional_id = Uuid::new_v4();
    let service_id = Uuid::new_v4();
    let time_slot_id = Uuid::new_v4();

    ctx.service_repo
        .expect_get_service_by_id()
        .returning(move |id| Ok(Some(service_fixture(id, professional_id, 50.0))));

    ctx.time_slot_repo
        .expect_get_time_slot_by_id()
        .returning(move |id| Ok(Some(time_slot_fixture(id, professional_id, true))));

    // Another client wins the conditional update between the availability
    // check and the reservation
    ctx.booking_repo
        .expect_create_booking()
        .times(1)
        .returning(|_, _, _, _, _| Ok(None));

    let request = CreateBookingRequest {
        professional_id,
        service_id,
        time_slot_id,
        notes: None,
    };

    let result = test_reserve_wrapper(&mut ctx, user_id, &request).await;

    match result.unwrap_err().0 {
        BookingError::Conflict(_) => {}
        e => panic!("Expected Conflict error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_reserve_service_of_other_professional_not_found() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let professional_id = Uuid::new_v4();
    let other_professional_id = Uuid::new_v4();
    let service_id = Uuid::new_v4();
    let time_slot_id = Uuid::new_v4();

    ctx.service_repo
        .expect_get_service_by_id()
        .returning(move |id| Ok(Some(service_fixture(id, other_professional_id, 50.0))));

    ctx.booking_repo.expect_create_booking().times(0);

    let request = CreateBookingRequest {
        professional_id,
        service_id,
        time_slot_id,
        notes: None,
    };

    let result = test_reserve_wrapper(&mut ctx, user_id, &request).await;

    match result.unwrap_err().0 {
        BookingError::NotFound(_) => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_reserve_missing_slot_not_found() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let professional_id = Uuid::new_v4();
    let service_id = Uuid::new_v4();
    let time_slot_id = Uuid::new_v4();

    ctx.service_repo
        .expect_get_service_by_id()
        .returning(move |id| Ok(Some(service_fixture(id, professional_id, 50.0))));

    ctx.time_slot_repo
        .expect_get_time_slot_by_id()
        .returning(|_| Ok(None));

    ctx.booking_repo.expect_create_booking().times(0);

    let request = CreateBookingRequest {
        professional_id,
        service_id,
        time_slot_id,
        notes: None,
    };

    let result = test_reserve_wrapper(&mut ctx, user_id, &request).await;

    match result.unwrap_err().0 {
        BookingError::NotFound(_) => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_cancel_success() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let booking_id = Uuid::new_v4();
    let professional_id = Uuid::new_v4();
    let service_id = Uuid::new_v4();
    let time_slot_id = Uuid::new_v4();

    ctx.booking_repo
        .expect_get_booking_by_id()
        .with(predicate::eq(booking_id))
        .returning(move |id| {
            Ok(Some(booking_fixture(
                id,
                user_id,
                professional_id,
                service_id,
                time_slot_id,
                "confirmed",
            )))
        });

    ctx.booking_repo
        .expect_update_booking_status()
        .with(predicate::eq(booking_id), predicate::eq("cancelled"))
        .times(1)
        .returning(move |id, status| {
            Ok(Some(booking_fixture(
                id,
                user_id,
                professional_id,
                service_id,
                time_slot_id,
                status,
            )))
        });

    let result = test_cancel_wrapper(&mut ctx, user_id, booking_id).await;

    let response = result.expect("cancellation should succeed");
    assert_eq!(response.id, booking_id);
    assert_eq!(response.status, BookingStatus::Cancelled);
}

#[tokio::test]
async fn test_cancel_foreign_booking_is_forbidden() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let other_user_id = Uuid::new_v4();
    let booking_id = Uuid::new_v4();

    ctx.booking_repo
        .expect_get_booking_by_id()
        .returning(move |id| {
            Ok(Some(booking_fixture(
                id,
                other_user_id,
                Uuid::new_v4(),
                Uuid::new_v4(),
                Uuid::new_v4(),
                "confirmed",
            )))
        });

    ctx.booking_repo.expect_update_booking_status().times(0);

    let result = test_cancel_wrapper(&mut ctx, user_id, booking_id).await;

    match result.unwrap_err().0 {
        BookingError::Authorization(_) => {}
        e => panic!("Expected Authorization error, got: {:?}", e),
    }
}
