use chrono::{NaiveDate, NaiveTime};
use mockall::mock;
use uuid::Uuid;

use crate::models::{
    DbBooking, DbBookingSummary, DbProfessional, DbProfessionalSummary, DbProfile, DbService,
    DbSession, DbTimeSlot,
};

// Mock repositories for testing
mock! {
    pub ProfileRepo {
        pub async fn create_profile(
            &self,
            email: &'static str,
            password_hash: &'static str,
            full_name: &'static str,
            role: &'static str,
        ) -> eyre::Result<DbProfile>;

        pub async fn get_profile_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbProfile>>;

        pub async fn get_profile_by_email(
            &self,
            email: &'static str,
        ) -> eyre::Result<Option<DbProfile>>;

        pub async fn verify_credentials(
            &self,
            email: &'static str,
            password: &'static str,
        ) -> eyre::Result<Option<DbProfile>>;
    }
}

mock! {
    pub SessionRepo {
        pub async fn create_session(
            &self,
            user_id: Uuid,
            token: &'static str,
        ) -> eyre::Result<DbSession>;

        pub async fn get_profile_by_token(
            &self,
            token: &'static str,
        ) -> eyre::Result<Option<DbProfile>>;

        pub async fn delete_session(
            &self,
            token: &'static str,
        ) -> eyre::Result<()>;
    }
}

mock! {
    pub ProfessionalRepo {
        pub async fn get_professional_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbProfessional>>;

        pub async fn get_professional_by_user_id(
            &self,
            user_id: Uuid,
        ) -> eyre::Result<Option<DbProfessional>>;

        pub async fn search_professionals(
            &self,
            term: Option<&'static str>,
            category: Option<&'static str>,
            location: Option<&'static str>,
            min_price: Option<f64>,
            max_price: Option<f64>,
        ) -> eyre::Result<Vec<DbProfessionalSummary>>;
    }
}

mock! {
    pub ServiceRepo {
        pub async fn create_service(
            &self,
            professional_id: Uuid,
            name: &'static str,
            description: &'static str,
            duration: i32,
            price: f64,
        ) -> eyre::Result<DbService>;

        pub async fn get_service_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbService>>;

        pub async fn get_services_by_professional_id(
            &self,
            professional_id: Uuid,
        ) -> eyre::Result<Vec<DbService>>;

        pub async fn delete_service(
            &self,
            id: Uuid,
        ) -> eyre::Result<()>;
    }
}

mock! {
    pub TimeSlotRepo {
        pub async fn create_time_slots(
            &self,
            professional_id: Uuid,
            date: NaiveDate,
            starts: Vec<NaiveTime>,
            ends: Vec<NaiveTime>,
        ) -> eyre::Result<u64>;

        pub async fn get_time_slots_by_date(
            &self,
            professional_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbTimeSlot>>;

        pub async fn get_time_slot_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbTimeSlot>>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn create_booking(
            &self,
            user_id: Uuid,
            professional_id: Uuid,
            service_id: Uuid,
            time_slot_id: Uuid,
            notes: Option<&'static str>,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn get_booking_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn get_bookings_by_professional_id(
            &self,
            professional_id: Uuid,
        ) -> eyre::Result<Vec<DbBooking>>;

        pub async fn get_booking_summaries_by_user_id(
            &self,
            user_id: Uuid,
        ) -> eyre::Result<Vec<DbBookingSummary>>;

        pub async fn update_booking_status(
            &self,
            id: Uuid,
            status: &'static str,
        ) -> eyre::Result<Option<DbBooking>>;
    }
}
