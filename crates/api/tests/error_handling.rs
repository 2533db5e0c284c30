//! Tests for storage-fault handling across every endpoint.
//!
//! The service used here fails every call with a storage error whose text
//! must never reach the client.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::{body_bytes, delete, get, post_json, put_json};
use hippo_core::error::{CoreError, CoreResult};
use hippo_core::medication::{Form, Medication};
use hippo_core::service::MedicationService;
use hippo_core::types::MedicationId;
use serde_json::json;

const SECRET: &str = "password authentication failed for user hippo";

struct BrokenStorage;

#[async_trait]
impl MedicationService for BrokenStorage {
    async fn create(&self, _medication: Medication) -> CoreResult<Medication> {
        Err(CoreError::Storage(SECRET.into()))
    }

    async fn list(&self) -> CoreResult<Vec<Medication>> {
        Err(CoreError::Storage(SECRET.into()))
    }

    async fn get(&self, _id: MedicationId) -> CoreResult<Medication> {
        Err(CoreError::Storage(SECRET.into()))
    }

    async fn update(&self, _medication: Medication) -> CoreResult<Medication> {
        Err(CoreError::Storage(SECRET.into()))
    }

    async fn delete(&self, _id: MedicationId) -> CoreResult<()> {
        Err(CoreError::Storage(SECRET.into()))
    }
}

/// Reads succeed; every write fails.
struct ReadOnlyStorage;

#[async_trait]
impl MedicationService for ReadOnlyStorage {
    async fn create(&self, _medication: Medication) -> CoreResult<Medication> {
        Err(CoreError::Storage(SECRET.into()))
    }

    async fn list(&self) -> CoreResult<Vec<Medication>> {
        Ok(Vec::new())
    }

    async fn get(&self, id: MedicationId) -> CoreResult<Medication> {
        Ok(Medication {
            id,
            ..Medication::unsaved("Aspirin", 500, Form::Tablet)
        })
    }

    async fn update(&self, _medication: Medication) -> CoreResult<Medication> {
        Err(CoreError::Storage(SECRET.into()))
    }

    async fn delete(&self, _id: MedicationId) -> CoreResult<()> {
        Err(CoreError::Storage(SECRET.into()))
    }
}

async fn assert_internal(response: axum::response::Response, message: &str) {
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(!text.contains("password"), "cause leaked: {text}");
    let body: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert_eq!(body["detail_code"], "");
    assert_eq!(body["message"], message);
}

#[tokio::test]
async fn storage_faults_map_to_500_without_leaking_cause() {
    let app = common::build_test_app_with(Arc::new(BrokenStorage));
    let id = MedicationId::new_v4();
    let payload = json!({"name": "Aspirin", "dosage": 500, "form": "tablet"});

    assert_internal(get(&app, "/medication/").await, "unable to list medications").await;
    assert_internal(
        get(&app, &format!("/medication/{id}")).await,
        "unable to get medication",
    )
    .await;
    assert_internal(
        post_json(&app, "/medication/", payload.clone()).await,
        "unable to create medication",
    )
    .await;
    assert_internal(
        put_json(&app, &format!("/medication/{id}"), payload).await,
        "unable to get medication",
    )
    .await;
    assert_internal(
        delete(&app, &format!("/medication/{id}")).await,
        "unable to delete medication",
    )
    .await;
}

#[tokio::test]
async fn bad_id_is_rejected_before_reaching_storage() {
    let app = common::build_test_app_with(Arc::new(BrokenStorage));
    let response = get(&app, "/medication/nope").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_fault_after_existence_check_maps_to_500() {
    let app = common::build_test_app_with(Arc::new(ReadOnlyStorage));
    let id = MedicationId::new_v4();

    assert_internal(
        put_json(
            &app,
            &format!("/medication/{id}"),
            json!({"name": "Aspirin", "dosage": 750, "form": "capsule"}),
        )
        .await,
        "unable to update medication",
    )
    .await;
}

#[tokio::test]
async fn update_with_unknown_form_maps_to_500_before_storage() {
    let app = common::build_test_app_with(Arc::new(ReadOnlyStorage));
    let id = MedicationId::new_v4();

    assert_internal(
        put_json(
            &app,
            &format!("/medication/{id}"),
            json!({"name": "Aspirin", "dosage": 750, "form": "powder"}),
        )
        .await,
        "can't convert to service model",
    )
    .await;
}
