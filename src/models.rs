//! Data models for clinicore.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Role a clinic user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Doctor,
    Receptionist,
}

impl Role {
    /// The TEXT rendering stored in the `users.role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Doctor => "doctor",
            Role::Receptionist => "receptionist",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "doctor" => Some(Role::Doctor),
            "receptionist" => Some(Role::Receptionist),
            _ => None,
        }
    }
}

/// Patient gender as recorded at the front desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Other
    }
}

impl Gender {
    /// The TEXT rendering stored in the `patient.gender` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Gender> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// A clinic user: a doctor or a receptionist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The user's unique ID.
    pub id: Uuid,
    /// The user's full name.
    pub name: String,
    pub role: Role,
    /// Login name, unique across all users.
    pub username: String,
    /// bcrypt hash of the password, never the plaintext.
    #[serde(skip_serializing)]
    pub password: String,
    /// Contact number, unique across all users.
    pub phone_number: String,
}

/// Registration input: a user as submitted, before the password is hashed
/// and an id is assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub role: Role,
    pub username: String,
    pub password: String,
    pub phone_number: String,
}

/// A patient on the clinic's books.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// The patient's unique ID.
    pub id: Uuid,
    /// The patient's full name.
    pub name: String,
    /// The patient's age in years, never negative.
    pub age: i64,
    pub gender: Gender,
    /// Contact number, unique across all patients.
    pub phone_number: String,
}

/// A diagnosis recorded for a patient by a doctor.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosis {
    /// Sequential id assigned by storage.
    pub id: i64,
    pub patient_id: Uuid,
    /// Cleared when the diagnosing doctor's account is removed.
    pub doctor_id: Option<Uuid>,
    pub description: String,
    pub created_at: OffsetDateTime,
}

/// Create input for a diagnosis; the id and creation timestamp are assigned
/// by storage.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDiagnosis {
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub description: String,
}
