//! SQLite-backed implementation of the patient repository.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

use super::{gender_from_column, PatientRepository};
use crate::models::Patient;

pub struct SqlitePatientRepository<'c> {
    conn: &'c Connection,
}

impl<'c> SqlitePatientRepository<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

fn map_patient(row: &Row) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        gender: gender_from_column(3, &row.get::<_, String>(3)?)?,
        phone_number: row.get(4)?,
    })
}

impl PatientRepository for SqlitePatientRepository<'_> {
    fn create(&self, patient: &Patient) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO patient (id, name, age, gender, phone_number)
                 VALUES (?, ?, ?, ?, ?)",
                params![
                    patient.id,
                    patient.name,
                    patient.age,
                    patient.gender.as_str(),
                    patient.phone_number,
                ],
            )
            .context("failed to create patient")?;
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<Option<Patient>> {
        self.conn
            .query_row(
                "DELETE FROM patient WHERE id = ?
                 RETURNING id, name, age, gender, phone_number",
                params![id],
                map_patient,
            )
            .optional()
            .context("failed to delete patient")
    }

    fn update(&self, patient: &Patient) -> Result<Option<Patient>> {
        self.conn
            .query_row(
                "UPDATE patient
                 SET name = ?, age = ?, gender = ?, phone_number = ?,
                     updated_at = datetime('now')
                 WHERE id = ?
                 RETURNING id, name, age, gender, phone_number",
                params![
                    patient.name,
                    patient.age,
                    patient.gender.as_str(),
                    patient.phone_number,
                    patient.id,
                ],
                map_patient,
            )
            .optional()
            .context("failed to update patient")
    }

    fn get_by_id(&self, id: Uuid) -> Result<Option<Patient>> {
        self.conn
            .query_row(
                "SELECT id, name, age, gender, phone_number
                 FROM patient WHERE id = ?",
                params![id],
                map_patient,
            )
            .optional()
            .context("failed to get patient by id")
    }

    fn get_by_phone_number(&self, phone_number: &str) -> Result<Option<Patient>> {
        self.conn
            .query_row(
                "SELECT id, name, age, gender, phone_number
                 FROM patient WHERE phone_number = ?",
                params![phone_number],
                map_patient,
            )
            .optional()
            .context("failed to get patient by phone number")
    }

    fn list_all(&self) -> Result<Vec<Patient>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, age, gender, phone_number FROM patient")?;
        let patients = stmt
            .query_map([], map_patient)
            .context("failed to list patients")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("failed to scan patient row")?;
        Ok(patients)
    }

    fn search_by_name(&self, name: &str) -> Result<Vec<Patient>> {
        // LIKE is case-insensitive over ASCII in SQLite.
        let mut stmt = self.conn.prepare(
            "SELECT id, name, age, gender, phone_number
             FROM patient WHERE name LIKE '%' || ? || '%'",
        )?;
        let patients = stmt
            .query_map(params![name], map_patient)
            .context("failed to search patients by name")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("failed to scan patient row")?;
        Ok(patients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::Gender;

    fn sample_patient(name: &str, phone_number: &str) -> Patient {
        Patient {
            id: Uuid::new_v4(),
            name: name.into(),
            age: 34,
            gender: Gender::Female,
            phone_number: phone_number.into(),
        }
    }

    #[test]
    fn create_then_get_by_id_round_trips() {
        let db = Database::open_in_memory().unwrap();
        let repo = SqlitePatientRepository::new(db.connection());

        let patient = sample_patient("Ana Smith", "555-0200");
        repo.create(&patient).unwrap();

        assert_eq!(repo.get_by_id(patient.id).unwrap(), Some(patient));
    }

    #[test]
    fn negative_age_is_rejected_by_storage() {
        let db = Database::open_in_memory().unwrap();
        let repo = SqlitePatientRepository::new(db.connection());

        let mut patient = sample_patient("Ana Smith", "555-0200");
        patient.age = -1;
        assert!(repo.create(&patient).is_err());

        // Zero is the boundary and must be accepted.
        patient.age = 0;
        repo.create(&patient).unwrap();
        assert_eq!(repo.get_by_id(patient.id).unwrap(), Some(patient));
    }

    #[test]
    fn duplicate_phone_number_is_rejected() {
        let db = Database::open_in_memory().unwrap();
        let repo = SqlitePatientRepository::new(db.connection());

        repo.create(&sample_patient("Ana Smith", "555-0200")).unwrap();
        assert!(repo.create(&sample_patient("Ben Okoye", "555-0200")).is_err());
    }

    #[test]
    fn name_search_matches_substring_case_insensitively() {
        let db = Database::open_in_memory().unwrap();
        let repo = SqlitePatientRepository::new(db.connection());

        let patient = sample_patient("Ana Smith", "555-0200");
        repo.create(&patient).unwrap();
        repo.create(&sample_patient("Ben Okoye", "555-0201")).unwrap();

        assert_eq!(repo.search_by_name("ana").unwrap(), vec![patient.clone()]);
        assert_eq!(repo.search_by_name("SMITH").unwrap(), vec![patient]);
        assert!(repo.search_by_name("zz").unwrap().is_empty());
    }

    #[test]
    fn delete_returns_row_then_none() {
        let db = Database::open_in_memory().unwrap();
        let repo = SqlitePatientRepository::new(db.connection());

        let patient = sample_patient("Ana Smith", "555-0200");
        repo.create(&patient).unwrap();

        assert_eq!(repo.delete(patient.id).unwrap(), Some(patient.clone()));
        assert_eq!(repo.delete(patient.id).unwrap(), None);
    }

    #[test]
    fn update_returns_post_update_row() {
        let db = Database::open_in_memory().unwrap();
        let repo = SqlitePatientRepository::new(db.connection());

        let mut patient = sample_patient("Ana Smith", "555-0200");
        repo.create(&patient).unwrap();

        patient.age = 35;
        patient.gender = Gender::Other;
        assert_eq!(repo.update(&patient).unwrap(), Some(patient.clone()));
        assert_eq!(repo.get_by_id(patient.id).unwrap(), Some(patient));
    }

    #[test]
    fn update_of_unknown_id_returns_none() {
        let db = Database::open_in_memory().unwrap();
        let repo = SqlitePatientRepository::new(db.connection());

        let patient = sample_patient("Ana Smith", "555-0200");
        assert_eq!(repo.update(&patient).unwrap(), None);
    }

    #[test]
    fn list_all_never_fails_on_empty_table() {
        let db = Database::open_in_memory().unwrap();
        let repo = SqlitePatientRepository::new(db.connection());

        assert!(repo.list_all().unwrap().is_empty());
        assert_eq!(repo.get_by_phone_number("555-0200").unwrap(), None);
    }
}
