#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::{App, http::StatusCode, test};
use application_intake::api::{self, ApiSettings, application::NewApplication};
use application_intake::db::{ApplicationStore, models::ApplicationRow};
use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;

pub const BOUNDARY: &str = "----intake-test-boundary";

/// Where the in-memory store should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePoint {
    Insert,
    Increment,
    Ping,
}

#[derive(Default)]
struct State {
    applications: Vec<ApplicationRow>,
    users: HashMap<String, i32>,
    next_id: i64,
    failure: Option<FailurePoint>,
}

/// Store double keeping rows in memory, with optional failure injection.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn with_users(user_ids: &[&str]) -> Arc<Self> {
        let store = Self::default();
        {
            let mut state = store.state.lock().unwrap();
            for id in user_ids {
                state.users.insert(id.to_string(), 0);
            }
        }
        Arc::new(store)
    }

    pub fn fail_on(&self, point: FailurePoint) {
        self.state.lock().unwrap().failure = Some(point);
    }

    pub fn applications(&self) -> Vec<ApplicationRow> {
        self.state.lock().unwrap().applications.clone()
    }

    pub fn applied_jobs_count(&self, user_id: &str) -> Option<i32> {
        self.state.lock().unwrap().users.get(user_id).copied()
    }

    fn injected(&self, point: FailurePoint) -> Result<(), sqlx::Error> {
        if self.state.lock().unwrap().failure == Some(point) {
            return Err(sqlx::Error::Protocol(format!("simulated {:?} failure", point)));
        }
        Ok(())
    }
}

#[async_trait]
impl ApplicationStore for InMemoryStore {
    async fn insert_application(
        &self,
        application: &NewApplication,
    ) -> Result<ApplicationRow, sqlx::Error> {
        self.injected(FailurePoint::Insert)?;

        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let row = ApplicationRow {
            id: state.next_id,
            user_id: application.user_id.clone(),
            job_id: application.job_id.clone(),
            name: application.name.clone(),
            email: application.email.clone(),
            phone: application.phone.clone(),
            cover_letter: application.cover_letter.clone(),
            experience: application.experience.clone(),
            additional_notes: application.additional_notes.clone(),
            applied_at: Utc::now(),
        };
        state.applications.push(row.clone());
        Ok(row)
    }

    async fn increment_applied_jobs(&self, user_id: &str) -> Result<u64, sqlx::Error> {
        self.injected(FailurePoint::Increment)?;

        let mut state = self.state.lock().unwrap();
        match state.users.get_mut(user_id) {
            Some(count) => {
                *count += 1;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.injected(FailurePoint::Ping)
    }
}

pub const TEST_PAYLOAD_LIMIT: usize = 64 * 1024;

pub fn settings(expose_database_errors: bool) -> ApiSettings {
    ApiSettings {
        max_payload_size: TEST_PAYLOAD_LIMIT,
        expose_database_errors,
    }
}

pub fn settings_with_limit(max_payload_size: usize) -> ApiSettings {
    ApiSettings {
        max_payload_size,
        expose_database_errors: true,
    }
}

/// Run one request against a fresh app over `store` and decode the JSON body
pub async fn send<T: DeserializeOwned>(
    store: &Arc<InMemoryStore>,
    settings: ApiSettings,
    request: test::TestRequest,
) -> (StatusCode, T) {
    let app = test::init_service(App::new().configure(api::configure(store.clone(), settings))).await;
    let response = test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = test::read_body_json(response).await;
    (status, body)
}

/// Build a multipart/form-data body from plain text fields
pub fn multipart_body(fields: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
            BOUNDARY, name, value
        ));
    }
    body.push_str(&format!("--{}--\r\n", BOUNDARY));
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}
