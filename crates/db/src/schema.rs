use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create profiles table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            email VARCHAR(255) NOT NULL UNIQUE,
            password_hash VARCHAR(255) NOT NULL,
            full_name VARCHAR(255) NOT NULL,
            role VARCHAR(32) NOT NULL CHECK (role IN ('user', 'professional')),
            location VARCHAR(255) NULL,
            phone VARCHAR(64) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create sessions table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            token VARCHAR(255) PRIMARY KEY,
            user_id UUID NOT NULL REFERENCES profiles(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            expires_at TIMESTAMP WITH TIME ZONE NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create professionals table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS professionals (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL UNIQUE REFERENCES profiles(id),
            specialty VARCHAR(255) NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            education TEXT[] NOT NULL DEFAULT '{}',
            price_per_hour DOUBLE PRECISION NOT NULL CHECK (price_per_hour >= 0),
            categories TEXT[] NOT NULL DEFAULT '{}',
            rating DOUBLE PRECISION NULL,
            reviews_count INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            professional_id UUID NOT NULL REFERENCES professionals(id),
            name VARCHAR(255) NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            duration INTEGER NOT NULL CHECK (duration > 0),
            price DOUBLE PRECISION NOT NULL CHECK (price >= 0),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create time_slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS time_slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            professional_id UUID NOT NULL REFERENCES professionals(id),
            date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            is_available BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time),
            CONSTRAINT unique_slot_start UNIQUE (professional_id, date, start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES profiles(id),
            professional_id UUID NOT NULL REFERENCES professionals(id),
            service_id UUID NOT NULL REFERENCES services(id),
            time_slot_id UUID NOT NULL REFERENCES time_slots(id),
            status VARCHAR(32) NOT NULL DEFAULT 'confirmed'
                CHECK (status IN ('confirmed', 'pending', 'cancelled', 'completed')),
            notes TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create reviews table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES profiles(id),
            professional_id UUID NOT NULL REFERENCES professionals(id),
            booking_id UUID NOT NULL REFERENCES bookings(id),
            rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
            comment TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_sessions_user_id ON sessions(user_id);
        CREATE INDEX IF NOT EXISTS idx_professionals_user_id ON professionals(user_id);
        CREATE INDEX IF NOT EXISTS idx_services_professional_id ON services(professional_id);
        CREATE INDEX IF NOT EXISTS idx_time_slots_professional_id ON time_slots(professional_id);
        CREATE INDEX IF NOT EXISTS idx_time_slots_date ON time_slots(date);
        CREATE INDEX IF NOT EXISTS idx_bookings_user_id ON bookings(user_id);
        CREATE INDEX IF NOT EXISTS idx_bookings_professional_id ON bookings(professional_id);
        CREATE INDEX IF NOT EXISTS idx_bookings_time_slot_id ON bookings(time_slot_id);
        CREATE INDEX IF NOT EXISTS idx_reviews_professional_id ON reviews(professional_id);
        CREATE INDEX IF NOT EXISTS idx_reviews_booking_id ON reviews(booking_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
