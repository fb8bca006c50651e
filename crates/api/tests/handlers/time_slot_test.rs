use bookpro_api::middleware::error_handling::AppError;
use bookpro_core::{
    errors::BookingError,
    models::time_slot::{
        GenerateTimeSlotsRequest, GenerateTimeSlotsResponse, ListTimeSlotsResponse,
        TimeSlotResponse,
    },
    slots,
};
use chrono::{NaiveDate, NaiveTime};
use mockall::predicate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::test_utils::{professional_fixture, time_slot_fixture, TestContext};

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 20).expect("valid date")
}

// Test wrappers that replay the handler decision logic against mock
// repositories instead of a live database

async fn test_generate_wrapper(
    ctx: &mut TestContext,
    user_id: Uuid,
    request: &GenerateTimeSlotsRequest,
) -> Result<GenerateTimeSlotsResponse, AppError> {
    let professional = ctx
        .professional_repo
        .get_professional_by_user_id(user_id)
        .await?
        .ok_or_else(|| {
            AppError(BookingError::NotFound(
                "Professional profile not found".to_string(),
            ))
        })?;

    let windows =
        slots::generate_slots(request.start_time, request.end_time, request.slot_duration)?;

    if windows.is_empty() {
        return Ok(GenerateTimeSlotsResponse { created: 0 });
    }

    let starts: Vec<_> = windows.iter().map(|w| w.start).collect();
    let ends: Vec<_> = windows.iter().map(|w| w.end).collect();

    let created = ctx
        .time_slot_repo
        .create_time_slots(professional.id, request.date, starts, ends)
        .await?;

    Ok(GenerateTimeSlotsResponse {
        created: created as usize,
    })
}

async fn test_list_wrapper(
    ctx: &mut TestContext,
    professional_id: Uuid,
    date: NaiveDate,
) -> Result<ListTimeSlotsResponse, AppError> {
    let professional = ctx
        .professional_repo
        .get_professional_by_id(professional_id)
        .await?
        .ok_or_else(|| {
            AppError(BookingError::NotFound(format!(
                "Professional with ID {} not found",
                professional_id
            )))
        })?;

    let time_slots = ctx
        .time_slot_repo
        .get_time_slots_by_date(professional.id, date)
        .await?;

    Ok(ListTimeSlotsResponse {
        date,
        slots: time_slots
            .into_iter()
            .map(|slot| TimeSlotResponse {
                id: slot.id,
                start_time: slot.start_time,
                end_time: slot.end_time,
                is_available: slot.is_available,
            })
            .collect(),
    })
}

#[tokio::test]
async fn test_generate_persists_expected_slots() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let professional_id = Uuid::new_v4();

    ctx.professional_repo
        .expect_get_professional_by_user_id()
        .with(predicate::eq(user_id))
        .returning(move |uid| Ok(Some(professional_fixture(professional_id, uid))));

    ctx.time_slot_repo
        .expect_create_time_slots()
        .with(
            predicate::eq(professional_id),
            predicate::eq(date()),
            predicate::eq(vec![time(9, 0), time(9, 30)]),
            predicate::eq(vec![time(9, 30), time(10, 0)]),
        )
        .times(1)
        .returning(|_, _, starts, _| Ok(starts.len() as u64));

    let request = GenerateTimeSlotsRequest {
        date: date(),
        start_time: time(9, 0),
        end_time: time(10, 0),
        slot_duration: 30,
    };

    let result = test_generate_wrapper(&mut ctx, user_id, &request).await;

    let response = result.expect("generation should succeed");
    assert_eq!(response.created, 2);
}

#[tokio::test]
async fn test_generate_without_professional_profile() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();

    ctx.professional_repo
        .expect_get_professional_by_user_id()
        .returning(|_| Ok(None));

    ctx.time_slot_repo.expect_create_time_slots().times(0);

    let request = GenerateTimeSlotsRequest {
        date: date(),
        start_time: time(9, 0),
        end_time: time(17, 0),
        slot_duration: 30,
    };

    let result = test_generate_wrapper(&mut ctx, user_id, &request).await;

    match result.unwrap_err().0 {
        BookingError::NotFound(_) => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_generate_rejects_zero_duration() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let professional_id = Uuid::new_v4();

    ctx.professional_repo
        .expect_get_professional_by_user_id()
        .returning(move |uid| Ok(Some(professional_fixture(professional_id, uid))));

    ctx.time_slot_repo.expect_create_time_slots().times(0);

    let request = GenerateTimeSlotsRequest {
        date: date(),
        start_time: time(9, 0),
        end_time: time(17, 0),
        slot_duration: 0,
    };

    let result = test_generate_wrapper(&mut ctx, user_id, &request).await;

    match result.unwrap_err().0 {
        BookingError::Validation(_) => {}
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_generate_short_window_creates_nothing() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let professional_id = Uuid::new_v4();

    ctx.professional_repo
        .expect_get_professional_by_user_id()
        .returning(move |uid| Ok(Some(professional_fixture(professional_id, uid))));

    // Nothing to persist, so the repository must not be touched
    ctx.time_slot_repo.expect_create_time_slots().times(0);

    let request = GenerateTimeSlotsRequest {
        date: date(),
        start_time: time(9, 0),
        end_time: time(9, 20),
        slot_duration: 30,
    };

    let result = test_generate_wrapper(&mut ctx, user_id, &request).await;

    let response = result.expect("short window is not an error");
    assert_eq!(response.created, 0);
}

#[tokio::test]
async fn test_list_reflects_reserved_slot() {
    let mut ctx = TestContext::new();
    let professional_id = Uuid::new_v4();
    let open_slot_id = Uuid::new_v4();
    let taken_slot_id = Uuid::new_v4();

    ctx.professional_repo
        .expect_get_professional_by_id()
        .with(predicate::eq(professional_id))
        .returning(move |id| Ok(Some(professional_fixture(id, Uuid::new_v4()))));

    ctx.time_slot_repo
        .expect_get_time_slots_by_date()
        .with(predicate::eq(professional_id), predicate::eq(date()))
        .returning(move |professional_id, _| {
            Ok(vec![
                time_slot_fixture(open_slot_id, professional_id, true),
                time_slot_fixture(taken_slot_id, professional_id, false),
            ])
        });

    let result = test_list_wrapper(&mut ctx, professional_id, date()).await;

    let response = result.expect("listing should succeed");
    assert_eq!(response.slots.len(), 2);
    assert!(response.slots[0].is_available);
    assert!(!response.slots[1].is_available);
}

#[tokio::test]
async fn test_list_unknown_professional_not_found() {
    let mut ctx = TestContext::new();

    ctx.professional_repo
        .expect_get_professional_by_id()
        .returning(|_| Ok(None));

    let result = test_list_wrapper(&mut ctx, Uuid::new_v4(), date()).await;

    match result.unwrap_err().0 {
        BookingError::NotFound(_) => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}
