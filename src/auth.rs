use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use uuid::Uuid;

use crate::{error::AppError, models::driver::Driver, state::AppState};

pub async fn register_driver(
    state: &AppState,
    driver_id: &str,
    full_name: &str,
    email: &str,
    password: &str,
) -> Result<Driver, AppError> {
    let id_taken: Option<i64> = sqlx::query_scalar("SELECT id FROM drivers WHERE driver_id = ?")
        .bind(driver_id)
        .fetch_optional(&state.db)
        .await?;
    if id_taken.is_some() {
        return Err(AppError::BadRequest("Driver ID already exists".into()));
    }

    let email_taken: Option<i64> = sqlx::query_scalar("SELECT id FROM drivers WHERE email = ?")
        .bind(email)
        .fetch_optional(&state.db)
        .await?;
    if email_taken.is_some() {
        return Err(AppError::BadRequest("Email already exists".into()));
    }

    let password_hash = hash_password(password)?;
    let uuid = Uuid::new_v4().to_string();
    sqlx::query(
        "INSERT INTO drivers (uuid, driver_id, full_name, email, password_hash) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&uuid)
    .bind(driver_id)
    .bind(full_name)
    .bind(email)
    .bind(&password_hash)
    .execute(&state.db)
    .await?;

    let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE driver_id = ?")
        .bind(driver_id)
        .fetch_one(&state.db)
        .await?;
    Ok(driver)
}

pub async fn authenticate_driver(
    state: &AppState,
    driver_id: &str,
    password: &str,
) -> Result<Driver, AppError> {
    let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE driver_id = ?")
        .bind(driver_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::Unauthorized)?;

    verify_password(password, &driver.password_hash)?;
    Ok(driver)
}

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| AppError::Other(anyhow::anyhow!("password hashing failed: {err}")))?;
    Ok(hash.to_string())
}

fn verify_password(password: &str, stored: &str) -> Result<(), AppError> {
    let parsed = PasswordHash::new(stored).map_err(|_| AppError::Unauthorized)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AppError::Unauthorized)
}
