//! Entity repositories: one contract per entity, each backed by a single
//! parameterized statement per operation.
//!
//! Absence is distinguished from failure throughout: lookups, deletes and
//! updates return `Ok(None)` when no row matches, and `Err` only for
//! constraint violations or storage failures.

use anyhow::Result;
use uuid::Uuid;

use crate::models::{Diagnosis, Gender, NewDiagnosis, Patient, Role, User};

pub mod diagnosis;
pub mod patient;
pub mod user;

pub use diagnosis::SqliteDiagnosisRepository;
pub use patient::SqlitePatientRepository;
pub use user::SqliteUserRepository;

pub trait UserRepository {
    /// Persists a new user. Fails if the username or phone number is taken.
    fn create(&self, user: &User) -> Result<()>;
    /// Removes a user, returning the deleted row, or `None` if the id is
    /// unknown.
    fn delete(&self, id: Uuid) -> Result<Option<User>>;
    /// Replaces the user's mutable fields and refreshes `updated_at`,
    /// returning the post-update row, or `None` if the id is unknown.
    fn update(&self, user: &User) -> Result<Option<User>>;
    fn get_by_id(&self, id: Uuid) -> Result<Option<User>>;
    fn get_by_username(&self, username: &str) -> Result<Option<User>>;
    fn get_by_phone_number(&self, phone_number: &str) -> Result<Option<User>>;
    /// All users; empty on an empty table, never an error.
    fn list_all(&self) -> Result<Vec<User>>;
    fn list_by_role(&self, role: Role) -> Result<Vec<User>>;
    /// The stored username and password hash for an id.
    fn get_username_and_password(&self, id: Uuid) -> Result<Option<(String, String)>>;
}

pub trait PatientRepository {
    /// Persists a new patient. Fails if the phone number is taken or the
    /// age is negative (rejected by the storage check as well).
    fn create(&self, patient: &Patient) -> Result<()>;
    fn delete(&self, id: Uuid) -> Result<Option<Patient>>;
    fn update(&self, patient: &Patient) -> Result<Option<Patient>>;
    fn get_by_id(&self, id: Uuid) -> Result<Option<Patient>>;
    fn get_by_phone_number(&self, phone_number: &str) -> Result<Option<Patient>>;
    fn list_all(&self) -> Result<Vec<Patient>>;
    /// Case-insensitive substring match on the patient name.
    fn search_by_name(&self, name: &str) -> Result<Vec<Patient>>;
}

pub trait DiagnosisRepository {
    /// Inserts a diagnosis with a storage-assigned id and creation
    /// timestamp, returning the stored row. The referenced patient and
    /// doctor must exist.
    fn create(&self, diagnosis: &NewDiagnosis) -> Result<Diagnosis>;
    fn delete(&self, id: i64) -> Result<Option<Diagnosis>>;
    fn update(&self, diagnosis: &Diagnosis) -> Result<Option<Diagnosis>>;
    /// All diagnoses for a patient in insertion order; empty if none exist.
    fn get_by_patient_id(&self, patient_id: Uuid) -> Result<Vec<Diagnosis>>;
}

// Enum columns are read back through these helpers; an out-of-range TEXT
// value surfaces as a column-level error.
pub(crate) fn role_from_column(index: usize, value: &str) -> rusqlite::Result<Role> {
    Role::parse(value).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(
            index,
            String::from("invalid role value"),
            rusqlite::types::Type::Text,
        )
    })
}

pub(crate) fn gender_from_column(index: usize, value: &str) -> rusqlite::Result<Gender> {
    Gender::parse(value).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(
            index,
            String::from("invalid gender value"),
            rusqlite::types::Type::Text,
        )
    })
}
