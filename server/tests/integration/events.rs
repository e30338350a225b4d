//! HTTP-level exercises of the scenarios in spec.md §8, run against a
//! real Postgres-backed store — `core::lifecycle`'s own test module
//! covers the same scenarios against an in-memory store; these confirm
//! routing, auth resolution and the SQL store agree with it.
use crate::helpers::TestApi;
use pavex::http::StatusCode;
use serde_json::json;

async fn seed_component(api: &TestApi, name: &str) -> i64 {
    let admin = api.token_for("admin-1", &["sd_admins"]);
    let response = api
        .post_json(
            "/v2/components",
            Some(&admin),
            &json!({ "name": name, "attributes": [{ "name": "region", "value": "EU-NL" }] }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json::<serde_json::Value>().await.unwrap()["id"]
        .as_i64()
        .unwrap()
}

/// Scenario 1: creator opens a maintenance, operator reviews it, admin
/// completes it — each transition bumps `version` by one.
#[tokio::test]
async fn creator_operator_admin_maintenance_workflow() {
    let api = TestApi::spawn().await;
    let component_id = seed_component(&api, "API Gateway").await;
    let creator = api.token_for("creator-1", &["sd_creators"]);
    let operator = api.token_for("operator-1", &["sd_operators"]);
    let admin = api.token_for("admin-1", &["sd_admins"]);

    let create = api
        .post_json(
            "/v2/events",
            Some(&creator),
            &json!({
                "type": "maintenance",
                "title": "Gateway upgrade",
                "description": "Rolling upgrade of the gateway fleet",
                "impact": 0,
                "components": [component_id],
                "start_date": "2026-08-01T00:00:00Z",
                "end_date": "2026-08-01T02:00:00Z",
                "system": false,
            }),
        )
        .await;
    assert_eq!(create.status(), StatusCode::OK);
    let created: Vec<serde_json::Value> = create.json().await.unwrap();
    let event_id = created[0]["incident_id"].as_i64().unwrap();

    let get = api.get(&format!("/v2/events/{event_id}"), Some(&creator)).await;
    let event: serde_json::Value = get.json().await.unwrap();
    assert_eq!(event["status"], "pending review");
    assert_eq!(event["version"], 1);

    let reviewed = api
        .patch_json(
            &format!("/v2/events/{event_id}"),
            Some(&operator),
            &json!({
                "status": "reviewed",
                "message": "Looks good",
                "update_date": "2026-07-31T10:00:00Z",
                "version": 1,
            }),
        )
        .await;
    assert_eq!(reviewed.status(), StatusCode::OK);
    let reviewed_event: serde_json::Value = reviewed.json().await.unwrap();
    assert_eq!(reviewed_event["status"], "reviewed");
    assert_eq!(reviewed_event["version"], 2);

    let planned = api
        .patch_json(
            &format!("/v2/events/{event_id}"),
            Some(&admin),
            &json!({
                "status": "planned",
                "message": "Scheduled for the maintenance window",
                "update_date": "2026-07-31T11:00:00Z",
                "version": 2,
            }),
        )
        .await;
    assert_eq!(planned.status(), StatusCode::OK);
    let planned_event: serde_json::Value = planned.json().await.unwrap();
    assert_eq!(planned_event["version"], 3);

    let in_progress = api
        .patch_json(
            &format!("/v2/events/{event_id}"),
            Some(&admin),
            &json!({
                "status": "in progress",
                "message": "Upgrade started",
                "update_date": "2026-08-01T00:00:00Z",
                "version": 3,
            }),
        )
        .await;
    assert_eq!(in_progress.status(), StatusCode::OK);
    let in_progress_event: serde_json::Value = in_progress.json().await.unwrap();
    assert_eq!(in_progress_event["version"], 4);

    let completed = api
        .patch_json(
            &format!("/v2/events/{event_id}"),
            Some(&admin),
            &json!({
                "status": "completed",
                "message": "Upgrade finished",
                "update_date": "2026-08-01T02:05:00Z",
                "version": 4,
            }),
        )
        .await;
    assert_eq!(completed.status(), StatusCode::OK);
    let final_event: serde_json::Value = completed.json().await.unwrap();
    assert_eq!(final_event["status"], "completed");
    assert_eq!(final_event["version"], 5);
}

/// Scenario 2: only the owning creator (or an operator/admin) may amend
/// a maintenance still in `pending review` without moving it forward;
/// a non-owning creator is forbidden even from a same-status edit, and
/// an admin may patch any event regardless of ownership or status.
#[tokio::test]
async fn non_owning_creator_is_forbidden_admin_can_override() {
    let api = TestApi::spawn().await;
    let component_id = seed_component(&api, "Billing Service").await;
    let owner = api.token_for("owner-1", &["sd_creators"]);
    let other = api.token_for("other-1", &["sd_creators"]);
    let admin = api.token_for("admin-1", &["sd_admins"]);

    let create = api
        .post_json(
            "/v2/events",
            Some(&owner),
            &json!({
                "type": "maintenance",
                "title": "Billing maintenance",
                "description": "Planned maintenance",
                "impact": 0,
                "components": [component_id],
                "start_date": "2026-08-02T00:00:00Z",
                "end_date": "2026-08-02T01:00:00Z",
                "system": false,
            }),
        )
        .await;
    let created: Vec<serde_json::Value> = create.json().await.unwrap();
    let event_id = created[0]["incident_id"].as_i64().unwrap();

    let denied = api
        .patch_json(
            &format!("/v2/events/{event_id}"),
            Some(&other),
            &json!({
                "status": "pending review",
                "message": "not mine to touch",
                "description": "Edited by someone else",
                "update_date": "2026-08-01T12:00:00Z",
                "version": 1,
            }),
        )
        .await;
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);

    let owner_edit = api
        .patch_json(
            &format!("/v2/events/{event_id}"),
            Some(&owner),
            &json!({
                "status": "pending review",
                "message": "added more detail",
                "description": "Billing maintenance, now with a maintenance window",
                "update_date": "2026-08-01T12:02:00Z",
                "version": 1,
            }),
        )
        .await;
    assert_eq!(owner_edit.status(), StatusCode::OK);

    let overridden = api
        .patch_json(
            &format!("/v2/events/{event_id}"),
            Some(&admin),
            &json!({
                "status": "reviewed",
                "message": "admin override",
                "update_date": "2026-08-01T12:05:00Z",
                "version": 2,
            }),
        )
        .await;
    assert_eq!(overridden.status(), StatusCode::OK);
}

/// Scenario 3: patching with a stale `version` is rejected with a
/// conflict, not silently applied.
#[tokio::test]
async fn stale_version_is_a_conflict() {
    let api = TestApi::spawn().await;
    let component_id = seed_component(&api, "Search Index").await;
    let creator = api.token_for("creator-2", &["sd_creators"]);

    let create = api
        .post_json(
            "/v2/events",
            Some(&creator),
            &json!({
                "type": "maintenance",
                "title": "Index rebuild",
                "description": "Rebuilding the search index",
                "impact": 0,
                "components": [component_id],
                "start_date": "2026-08-03T00:00:00Z",
                "end_date": "2026-08-03T03:00:00Z",
                "system": false,
            }),
        )
        .await;
    let created: Vec<serde_json::Value> = create.json().await.unwrap();
    let event_id = created[0]["incident_id"].as_i64().unwrap();

    let conflict = api
        .patch_json(
            &format!("/v2/events/{event_id}"),
            Some(&creator),
            &json!({
                "status": "pending review",
                "message": "stale patch",
                "update_date": "2026-08-02T12:00:00Z",
                "version": 0,
            }),
        )
        .await;
    assert_eq!(conflict.status(), StatusCode::CONFLICT);
}

/// Scenario 6: reporting a second, equal-or-lower-impact incident
/// against a component already covered by an open one is rejected as a
/// duplicate via the legacy v1 endpoint.
#[tokio::test]
async fn v1_component_status_rejects_duplicate_incident() {
    let api = TestApi::spawn().await;
    let admin = api.token_for("admin-1", &["sd_admins"]);
    let operator = api.token_for("operator-1", &["sd_operators"]);

    let create = api
        .post_json(
            "/v2/components",
            Some(&admin),
            &json!({ "name": "Edge Cache", "attributes": [{ "name": "region", "value": "US-EAST" }] }),
        )
        .await;
    assert_eq!(create.status(), StatusCode::CREATED);

    let first = api
        .post_json(
            "/v1/component_status",
            Some(&operator),
            &json!({
                "name": "Edge Cache",
                "attributes": [{ "name": "region", "value": "US-EAST" }],
                "impact": 1,
                "text": "Elevated latency",
            }),
        )
        .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let duplicate = api
        .post_json(
            "/v1/component_status",
            Some(&operator),
            &json!({
                "name": "Edge Cache",
                "attributes": [{ "name": "region", "value": "US-EAST" }],
                "impact": 1,
                "text": "Still degraded",
            }),
        )
        .await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
}

/// Anonymous callers never see a maintenance still in `pending review`.
#[tokio::test]
async fn anonymous_caller_cannot_see_pending_review_maintenance() {
    let api = TestApi::spawn().await;
    let component_id = seed_component(&api, "Notifications").await;
    let creator = api.token_for("creator-3", &["sd_creators"]);

    let create = api
        .post_json(
            "/v2/events",
            Some(&creator),
            &json!({
                "type": "maintenance",
                "title": "Notifications maintenance",
                "description": "Planned maintenance",
                "impact": 0,
                "components": [component_id],
                "start_date": "2026-08-04T00:00:00Z",
                "end_date": "2026-08-04T01:00:00Z",
                "system": false,
            }),
        )
        .await;
    let created: Vec<serde_json::Value> = create.json().await.unwrap();
    let event_id = created[0]["incident_id"].as_i64().unwrap();

    let anon = api.get(&format!("/v2/events/{event_id}"), None).await;
    assert_eq!(anon.status(), StatusCode::NOT_FOUND);

    let as_creator = api.get(&format!("/v2/events/{event_id}"), Some(&creator)).await;
    assert_eq!(as_creator.status(), StatusCode::OK);
}
