#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use chrono::NaiveDate;
use serde_json::json;

fn shift_json(id: i64, weekday_name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employee_id": 4,
        "employee_name": "Ruza Sertic",
        "object_id": 9,
        "object_name": "Praxis Dr. Weber",
        "start_time": "06:00",
        "end_time": "10:00",
        "planned_hours": 4.0,
        "status": "normal",
        "replacement_for": null,
        "weekday": weekday_name
    })
}

#[tokio::test]
async fn login_posts_credentials_without_token() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/auth/login");
        then.status(200).json_body(json!({
            "access_token": "jwt",
            "token_type": "bearer",
            "user_name": "Drazen Sertic",
            "personal_nr": "D100",
            "role": "admin"
        }));
    });

    let client = ApiClient::new_with_base_url(server.url("/api/v1"));
    let response = client
        .login(&LoginRequest {
            email: "drazen@seda24.de".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.role, Role::Admin);
    let request = server.last_request(POST, "/api/v1/auth/login").unwrap();
    assert!(request.authorization.is_none());
    assert_eq!(
        request.body,
        Some(json!({ "email": "drazen@seda24.de", "password": "secret" }))
    );
}

#[tokio::test]
async fn login_401_is_invalid_credentials_and_keeps_session() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/auth/login");
        then.status(401)
            .json_body(json!({ "detail": "Incorrect email or password" }));
    });

    let client = signed_in_client(&server);
    let err = client
        .login(&LoginRequest {
            email: "x@seda24.de".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidCredentials);
    assert!(client.session().token().is_some());
}

#[tokio::test]
async fn authorized_calls_carry_bearer_token() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/employees/my-category");
        then.status(200).json_body(json!({
            "id": 4,
            "name": "Ruza Sertic",
            "personal_nr": "D002",
            "tracking_mode": "B",
            "gps_required": false
        }));
    });

    let client = signed_in_client(&server);
    let category = client.get_my_category().await.unwrap();

    assert_eq!(category.tracking_mode, TrackingMode::OneTap);
    let request = server
        .last_request(GET, "/api/v1/employees/my-category")
        .unwrap();
    assert_eq!(request.authorization.as_deref(), Some("Bearer test-token"));
}

#[tokio::test]
async fn unauthorized_response_clears_session() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/time-entries/current");
        then.status(401)
            .json_body(json!({ "detail": "Could not validate credentials" }));
    });

    let client = signed_in_client(&server);
    let err = client.get_current_entry().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::SessionExpired);
    assert!(client.session().token().is_none());
    assert!(client.session().load().is_none());
}

#[tokio::test]
async fn calls_without_session_are_not_sent() {
    let server = MockServer::start_async().await;
    let client = ApiClient::new_with_base_url(server.url("/api/v1"));

    let err = client.get_current_break().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::SessionExpired);
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn time_entry_and_break_endpoints_succeed() {
    let server = MockServer::start_async().await;
    let entry = json!({
        "id": 11,
        "employee_id": 4,
        "object_id": 9,
        "check_in": "2025-07-01T06:00:00",
        "check_out": null
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/time-entries/check-in");
        then.status(200).json_body(entry.clone());
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/time-entries/check-out");
        then.status(200).json_body(json!({
            "id": 11,
            "object_id": 9,
            "check_in": "2025-07-01T06:00:00",
            "check_out": "2025-07-01T10:00:00"
        }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/time-entries/switch-object");
        then.status(200).json_body(json!({
            "id": 12,
            "object_id": 10,
            "check_in": "2025-07-01T08:00:00"
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/time-entries/my-objects-today");
        then.status(200).json_body(json!([{
            "id": 9,
            "name": "Praxis Dr. Weber",
            "address": "Hauptstr. 1",
            "planned_hours": 4.0,
            "start_time": "06:00",
            "end_time": "10:00",
            "is_scheduled_today": true
        }]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/time-entries/has-work-today");
        then.status(200)
            .json_body(json!({ "has_work": true, "category": "C", "auto_checked_in": false }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/breaks/start");
        then.status(200).json_body(json!({
            "id": 5,
            "time_entry_id": 11,
            "start_time": "2025-07-01T07:00:00",
            "end_time": null,
            "is_paid": false,
            "duration_minutes": null
        }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/breaks/end");
        then.status(200).json_body(json!({
            "id": 5,
            "time_entry_id": 11,
            "start_time": "2025-07-01T07:00:00",
            "end_time": "2025-07-01T07:15:00",
            "is_paid": false,
            "duration_minutes": 15
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/breaks/current");
        then.status(200).json_body(json!({ "active_break": null }));
    });

    let client = signed_in_client(&server);
    let checked_in = client
        .check_in(&CheckInRequest {
            object_id: 9,
            notes: "Arbeitsbeginn".into(),
        })
        .await
        .unwrap();
    assert_eq!(checked_in.id, 11);
    assert_eq!(
        server
            .last_request(POST, "/api/v1/time-entries/check-in")
            .unwrap()
            .body,
        Some(json!({ "object_id": 9, "notes": "Arbeitsbeginn" }))
    );

    let started = client.start_break(Some(11)).await.unwrap();
    assert_eq!(started.id, 5);
    assert_eq!(
        server.last_request(POST, "/api/v1/breaks/start").unwrap().body,
        Some(json!({ "time_entry_id": 11, "is_paid": false }))
    );

    let ended = client.end_break(5).await.unwrap();
    assert_eq!(ended.duration_minutes, Some(15));
    assert_eq!(
        server.last_request(POST, "/api/v1/breaks/end").unwrap().body,
        Some(json!({ "break_id": 5 }))
    );

    assert!(client.get_current_break().await.unwrap().active_break.is_none());

    let switched = client
        .switch_object(&CheckInRequest {
            object_id: 10,
            notes: "Objektwechsel".into(),
        })
        .await
        .unwrap();
    assert_eq!(switched.object_id, 10);

    let objects = client.get_my_objects_today().await.unwrap();
    assert_eq!(objects[0].planned_hours, Some(4.0));
    assert!(client.has_work_today().await.unwrap().has_work);

    let checked_out = client.check_out().await.unwrap();
    assert!(checked_out.check_out.is_some());
}

#[tokio::test]
async fn check_out_without_open_entry_surfaces_backend_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/time-entries/check-out");
        then.status(400)
            .json_body(json!({ "detail": "Kein aktiver Check-in" }));
    });

    let client = signed_in_client(&server);
    let err = client.check_out().await.unwrap_err();
    assert_eq!(err.error, "Kein aktiver Check-in");
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(client.session().token().is_some());
}

#[tokio::test]
async fn was_present_distinguishes_already_booked() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/time-entries/war-anwesend");
        then.status(400).json_body(json!({
            "detail": "Du hast heute bereits Stunden für dieses Objekt gebucht"
        }));
    });

    let client = signed_in_client(&server);
    let err = client
        .was_present(&WasPresentRequest {
            object_id: 9,
            service_type: ServiceType::Unterhaltsreinigung,
        })
        .await
        .unwrap_err();

    assert!(err.is_already_booked());
    assert_eq!(server.hits(POST, "/api/v1/time-entries/war-anwesend"), 1);
    assert_eq!(
        server
            .last_request(POST, "/api/v1/time-entries/war-anwesend")
            .unwrap()
            .body,
        Some(json!({ "object_id": 9, "service_type": "Unterhaltsreinigung" }))
    );
}

#[tokio::test]
async fn reports_read_totals_and_history_shapes() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/reports/my/week");
        then.status(200).json_body(json!({
            "total_hours": 21.5,
            "week_start": "2025-03-03",
            "week_end": "2025-03-09",
            "entries": []
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/reports/my/history");
        then.status(200).json_body(json!([
            { "date": "2025-03-04", "object_name": "Praxis", "total_hours": 2.0 }
        ]));
    });

    let client = signed_in_client(&server);
    let week = client.get_my_hours(ReportPeriod::Week).await.unwrap();
    assert_eq!(week.total_hours, 21.5);

    let history = client
        .get_my_history(&[("days", "14".to_string())])
        .await
        .unwrap();
    assert_eq!(history.entries.len(), 1);
    assert_eq!(
        server
            .last_request(GET, "/api/v1/reports/my/history")
            .unwrap()
            .query
            .as_deref(),
        Some("days=14")
    );
}

#[tokio::test]
async fn schedule_endpoints_send_expected_payloads() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/admin/schedules/week");
        then.status(200).json_body(json!({
            "week_start": "2025-03-03",
            "week_number": 10,
            "year": 2025,
            "days": [{
                "date": "2025-03-03",
                "weekday": "Montag",
                "weekday_index": 0,
                "schedules": [shift_json(1, "Montag")]
            }],
            "employees": [{ "id": 4, "name": "Ruza Sertic", "personal_nr": "D002", "category": "B" }],
            "objects": [{ "id": 9, "name": "Praxis Dr. Weber", "customer_name": "Weber" }]
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/admin/schedules/conflicts");
        then.status(200).json_body(json!({
            "status": "warning",
            "conflict_count": 1,
            "conflicts": [{
                "type": "zeitüberschneidung",
                "employee": "Ruza Sertic",
                "weekday": "Montag",
                "shift1": "06:00-10:00",
                "shift2": "09:00-12:00"
            }]
        }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/admin/schedules/quick-assign");
        then.status(200).json_body(json!({ "status": "ok" }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/admin/schedules/bulk-update");
        then.status(200).json_body(json!({ "updated": 1 }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/admin/schedules/copy-week");
        then.status(200).json_body(json!({ "copied": 3 }));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/admin/schedules/1");
        then.status(200).json_body(json!({ "status": "deleted" }));
    });

    let client = signed_in_client(&server);
    let week = client.get_week_schedule(-1).await.unwrap();
    assert_eq!(week.days[0].schedules[0].status, ShiftStatus::Normal);
    assert_eq!(
        server
            .last_request(GET, "/api/v1/admin/schedules/week")
            .unwrap()
            .query
            .as_deref(),
        Some("week_offset=-1")
    );

    let conflicts = client.get_schedule_conflicts(-1).await.unwrap();
    assert_eq!(conflicts.conflicts[0].kind, "zeitüberschneidung");

    client
        .quick_assign_shift(&QuickAssignRequest {
            employee_id: 4,
            object_id: 9,
            weekday: 2,
            start_time: "06:00".into(),
            end_time: "10:00".into(),
            status: ShiftStatus::Normal,
        })
        .await
        .unwrap();
    let body = server
        .last_request(POST, "/api/v1/admin/schedules/quick-assign")
        .unwrap()
        .body
        .unwrap();
    assert_eq!(body["status"], json!("normal"));
    assert_eq!(body["weekday"], json!(2));

    client
        .bulk_update_shifts(&[ShiftUpdate {
            id: 1,
            employee_id: 4,
            object_id: 9,
            weekday: 3,
            start_time: "07:00".into(),
            end_time: "11:00".into(),
            planned_hours: 4.0,
            status: ShiftStatus::Sick,
        }])
        .await
        .unwrap();
    let body = server
        .last_request(POST, "/api/v1/admin/schedules/bulk-update")
        .unwrap()
        .body
        .unwrap();
    assert!(body.is_array());
    assert_eq!(body[0]["status"], json!("krank"));
    assert_eq!(body[0]["planned_hours"], json!(4.0));

    client
        .copy_week(&CopyWeekRequest {
            source_week: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            target_week: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        })
        .await
        .unwrap();
    assert_eq!(
        server
            .last_request(POST, "/api/v1/admin/schedules/copy-week")
            .unwrap()
            .body,
        Some(json!({ "source_week": "2025-03-03", "target_week": "2025-03-10" }))
    );

    client.delete_shift(1).await.unwrap();
    assert_eq!(server.hits(DELETE, "/api/v1/admin/schedules/1"), 1);
}

#[tokio::test]
async fn admin_and_hours_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/admin/dashboard/stats");
        then.status(200).json_body(json!({
            "active_employees": 3,
            "paused_employees": 0,
            "offline_employees": 9,
            "total_employees": 12,
            "total_hours_today": 14.5
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/admin/live-status");
        then.status(200).json_body(json!([]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/admin/employees-with-categories");
        then.status(200).json_body(json!([
            { "id": 4, "personal_nr": "D002", "name": "Ruza Sertic", "tracking_mode": "B", "category": "B" }
        ]));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/v1/admin/update-category");
        then.status(200)
            .json_body(json!({ "status": "ok", "message": "Kategorie auf A gesetzt" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/admin/customers");
        then.status(200).json_body(json!([
            { "id": 2, "name": "Praxis Dr. Weber", "address": "Hauptstr. 1", "billing_type": "pauschale", "is_active": true }
        ]));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/admin/customers/2");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/hours-management/special-rules");
        then.status(200).json_body(json!([{
            "id": 1,
            "employee_id": 4,
            "employee_name": "Ruza Sertic",
            "customer_id": 2,
            "customer_name": "Praxis Dr. Weber",
            "standard_hours": 3.0,
            "special_hours": 2.5,
            "note": null,
            "active": true
        }]));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/v1/hours-management/customer-hours");
        then.status(200).json_body(json!({ "status": "ok" }));
    });

    let client = signed_in_client(&server);
    let stats = client.get_dashboard_stats().await.unwrap();
    assert_eq!(stats.total_employees, 12);
    assert!(client.get_live_status().await.unwrap().is_empty());
    assert_eq!(
        client.get_employees_with_categories().await.unwrap()[0].tracking_mode,
        TrackingMode::OneTap
    );

    client
        .update_category(&UpdateCategoryRequest {
            employee_id: 4,
            tracking_mode: TrackingMode::Automatic,
            gps_required: false,
        })
        .await
        .unwrap();
    assert_eq!(
        server
            .last_request(PUT, "/api/v1/admin/update-category")
            .unwrap()
            .body,
        Some(json!({ "employee_id": 4, "tracking_mode": "A", "gps_required": false }))
    );

    assert_eq!(client.list_customers().await.unwrap()[0].id, 2);
    client.delete_customer(2).await.unwrap();

    let rules = client.list_special_rules().await.unwrap();
    assert_eq!(rules[0].special_hours, 2.5);

    client
        .update_customer_hours(&CustomerHoursUpdate {
            customer_id: 2,
            default_hours: 3.5,
        })
        .await
        .unwrap();
    assert_eq!(
        server
            .last_request(PUT, "/api/v1/hours-management/customer-hours")
            .unwrap()
            .body,
        Some(json!({ "customer_id": 2, "default_hours": 3.5 }))
    );
}

#[tokio::test]
async fn server_errors_are_transient() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/admin/customers");
        then.status(500).json_body(json!({ "detail": "Internal Server Error" }));
    });

    let client = signed_in_client(&server);
    let err = client.list_customers().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transient);
    assert_eq!(err.code, "SERVER_ERROR");
}
