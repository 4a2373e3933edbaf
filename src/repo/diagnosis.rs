//! SQLite-backed implementation of the diagnosis repository.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use time::OffsetDateTime;
use uuid::Uuid;

use super::DiagnosisRepository;
use crate::models::{Diagnosis, NewDiagnosis};

pub struct SqliteDiagnosisRepository<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteDiagnosisRepository<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

fn map_diagnosis(row: &Row) -> rusqlite::Result<Diagnosis> {
    Ok(Diagnosis {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        doctor_id: row.get(2)?,
        description: row.get(3)?,
        created_at: row.get(4)?,
    })
}

impl DiagnosisRepository for SqliteDiagnosisRepository<'_> {
    fn create(&self, diagnosis: &NewDiagnosis) -> Result<Diagnosis> {
        // created_at is assigned here rather than left to the column
        // DEFAULT; foreign keys reject unknown patient/doctor ids.
        self.conn
            .query_row(
                "INSERT INTO diagnosis (patient_id, doctor_id, description, created_at)
                 VALUES (?, ?, ?, ?)
                 RETURNING id, patient_id, doctor_id, description, created_at",
                params![
                    diagnosis.patient_id,
                    diagnosis.doctor_id,
                    diagnosis.description,
                    OffsetDateTime::now_utc(),
                ],
                map_diagnosis,
            )
            .context("failed to create diagnosis")
    }

    fn delete(&self, id: i64) -> Result<Option<Diagnosis>> {
        self.conn
            .query_row(
                "DELETE FROM diagnosis WHERE id = ?
                 RETURNING id, patient_id, doctor_id, description, created_at",
                params![id],
                map_diagnosis,
            )
            .optional()
            .context("failed to delete diagnosis")
    }

    fn update(&self, diagnosis: &Diagnosis) -> Result<Option<Diagnosis>> {
        self.conn
            .query_row(
                "UPDATE diagnosis
                 SET patient_id = ?, doctor_id = ?, description = ?
                 WHERE id = ?
                 RETURNING id, patient_id, doctor_id, description, created_at",
                params![
                    diagnosis.patient_id,
                    diagnosis.doctor_id,
                    diagnosis.description,
                    diagnosis.id,
                ],
                map_diagnosis,
            )
            .optional()
            .context("failed to update diagnosis")
    }

    fn get_by_patient_id(&self, patient_id: Uuid) -> Result<Vec<Diagnosis>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, patient_id, doctor_id, description, created_at
             FROM diagnosis WHERE patient_id = ?",
        )?;
        let diagnoses = stmt
            .query_map(params![patient_id], map_diagnosis)
            .context("failed to get diagnoses by patient id")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("failed to scan diagnosis row")?;
        Ok(diagnoses)
    }
}
