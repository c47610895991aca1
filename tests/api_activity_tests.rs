// SPDX-License-Identifier: MIT

//! Router-level tests: activity CRUD, duplication, agenda, calendar grid,
//! and the holiday overlay, all against the in-memory store and the
//! fallback holiday calendar (no network).

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn create_body(title: &str, start: &str, end: &str) -> Value {
    json!({
        "title": title,
        "start_time": start,
        "end_time": end,
        "description": "",
        "label": "RO 1",
        "location": "Kantor",
        "created_by": "humas@example.com"
    })
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = common::create_test_app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_activity_crud_round_trip() {
    let (app, _) = common::create_test_app();

    // create
    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/api/activities",
            create_body("Rapat bulanan", "2025-03-10T09:00:00", "2025-03-10T11:00:00"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["title"], "Rapat bulanan");
    assert_eq!(created["label"], "RO 1");

    // list
    let (status, listed) = send(&app, get("/api/activities")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["total"], 1);

    // get
    let (status, fetched) = send(&app, get(&format!("/api/activities/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], id.as_str());

    // partial update: move the end time, leave the rest alone
    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/activities/{}", id),
            json!({ "end_time": "2025-03-10T12:30:00" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["end_time"], "2025-03-10T12:30:00");
    assert_eq!(updated["title"], "Rapat bulanan");

    // delete
    let (status, _) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/activities/{}", id))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, get(&format!("/api/activities/{}", id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_rejects_invalid_payloads() {
    let (app, _) = common::create_test_app();

    // end before start
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/activities",
            create_body("Salah waktu", "2025-03-10T11:00:00", "2025-03-10T09:00:00"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    // empty title
    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/api/activities",
            create_body("", "2025-03-10T09:00:00", "2025-03-10T11:00:00"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_rejects_inverted_merge() {
    let (app, _) = common::create_test_app();

    let (_, created) = send(
        &app,
        json_request(
            "POST",
            "/api/activities",
            create_body("Rapat", "2025-03-10T09:00:00", "2025-03-10T11:00:00"),
        ),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    // moving start past the existing end must fail
    let (status, _) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/activities/{}", id),
            json!({ "start_time": "2025-03-10T12:00:00" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_copies_onto_target_day() {
    let (app, _) = common::create_test_app();

    let (_, created) = send(
        &app,
        json_request(
            "POST",
            "/api/activities",
            create_body("Siaran pers", "2025-03-10T14:00:00", "2025-03-10T16:00:00"),
        ),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, copy) = send(
        &app,
        json_request(
            "POST",
            &format!("/api/activities/{}/duplicate", id),
            json!({ "date": "2025-04-02" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(copy["id"], created["id"]);
    assert_eq!(copy["title"], "Siaran pers");
    assert_eq!(copy["start_time"], "2025-04-02T14:00:00");
    assert_eq!(copy["end_time"], "2025-04-02T16:00:00");

    let (_, listed) = send(&app, get("/api/activities")).await;
    assert_eq!(listed["total"], 2);
}

#[tokio::test]
async fn test_list_filters_and_sorts() {
    let (app, _) = common::create_test_app();

    let mut b1 = create_body("Zebra", "2025-03-12T09:00:00", "2025-03-12T10:00:00");
    b1["label"] = json!("RO 2");
    let mut b2 = create_body("Alpha", "2025-03-10T09:00:00", "2025-03-10T10:00:00");
    b2["label"] = json!("RO 2");
    b2["location"] = json!("Luar Kota");
    let b3 = create_body("Beta", "2025-03-11T09:00:00", "2025-03-11T10:00:00");

    for body in [b1, b2, b3] {
        let (status, _) = send(&app, json_request("POST", "/api/activities", body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // default sort: start_time ascending
    let (_, listed) = send(&app, get("/api/activities")).await;
    let titles: Vec<&str> = listed["activities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Alpha", "Beta", "Zebra"]);

    // filter by label
    let (_, listed) = send(&app, get("/api/activities?label=RO%202")).await;
    assert_eq!(listed["total"], 2);

    // filter by location
    let (_, listed) = send(&app, get("/api/activities?location=Luar%20Kota")).await;
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["activities"][0]["title"], "Alpha");

    // sort by title descending
    let (_, listed) = send(&app, get("/api/activities?sort=title&order=desc")).await;
    let titles: Vec<&str> = listed["activities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Zebra", "Beta", "Alpha"]);
}

#[tokio::test]
async fn test_list_searches_title_location_and_label() {
    let (app, _) = common::create_test_app();

    let b1 = create_body("Rapat koordinasi", "2025-03-10T09:00:00", "2025-03-10T10:00:00");
    let mut b2 = create_body("Siaran pers", "2025-03-11T09:00:00", "2025-03-11T10:00:00");
    b2["location"] = json!("Luar Kota");
    let mut b3 = create_body("Wawancara", "2025-03-12T09:00:00", "2025-03-12T10:00:00");
    b3["label"] = json!("RO 3");

    for body in [b1, b2, b3] {
        let (status, _) = send(&app, json_request("POST", "/api/activities", body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // title substring, case-insensitive
    let (_, listed) = send(&app, get("/api/activities?q=KOORDIN")).await;
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["activities"][0]["title"], "Rapat koordinasi");

    // location display name
    let (_, listed) = send(&app, get("/api/activities?q=luar")).await;
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["activities"][0]["title"], "Siaran pers");

    // label display name; "ro" matches every label so this narrows by digit
    let (_, listed) = send(&app, get("/api/activities?q=ro%203")).await;
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["activities"][0]["title"], "Wawancara");

    // no match
    let (_, listed) = send(&app, get("/api/activities?q=anggaran")).await;
    assert_eq!(listed["total"], 0);

    // blank term is a no-op filter
    let (_, listed) = send(&app, get("/api/activities?q=%20%20")).await;
    assert_eq!(listed["total"], 3);
}

#[tokio::test]
async fn test_agenda_buckets_and_sorts_by_start_time() {
    let (app, _) = common::create_test_app();

    // spanning event over 10-12, plus a same-day morning event on the 11th
    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/api/activities",
            create_body("Kunjungan daerah", "2025-03-10T13:00:00", "2025-03-12T11:00:00"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, _) = send(
        &app,
        json_request(
            "POST",
            "/api/activities",
            create_body("Briefing pagi", "2025-03-11T08:00:00", "2025-03-11T09:00:00"),
        ),
    )
    .await;

    let (status, agenda) = send(&app, get("/api/agenda/2025-03-11")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(agenda["heading"], "Selasa, 11 Maret 2025");
    assert_eq!(agenda["total"], 2);

    // sorted by start_time: the spanning event started a day earlier
    assert_eq!(agenda["activities"][0]["title"], "Kunjungan daerah");
    assert_eq!(agenda["activities"][1]["title"], "Briefing pagi");
    assert_eq!(agenda["activities"][1]["start_label"], "08:00");
    assert_eq!(agenda["activities"][1]["duration_label"], "1 jam");

    // the span ends on the 12th, so nothing on the 13th
    let (_, empty) = send(&app, get("/api/agenda/2025-03-13")).await;
    assert_eq!(empty["total"], 0);
}

#[tokio::test]
async fn test_calendar_month_grid_shape_and_bands() {
    let (app, _) = common::create_test_app();

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/api/activities",
            create_body("Pameran", "2025-03-10T09:00:00", "2025-03-13T17:00:00"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, month) = send(&app, get("/api/calendar/2025/3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(month["title"], "Maret 2025");

    let weeks = month["weeks"].as_array().unwrap();
    assert!(!weeks.is_empty());
    for week in weeks {
        assert_eq!(week.as_array().unwrap().len(), 7);
    }

    // March 2025 starts on a Saturday; grid pads back to Monday Feb 24
    let first_cell = &weeks[0][0];
    assert_eq!(first_cell["date"], "2025-02-24");
    assert_eq!(first_cell["in_month"], false);

    let cell = |date: &str| -> Value {
        weeks
            .iter()
            .flat_map(|w| w.as_array().unwrap())
            .find(|c| c["date"] == date)
            .cloned()
            .unwrap_or_else(|| panic!("no cell for {}", date))
    };

    assert_eq!(cell("2025-03-10")["band"]["start"], true);
    assert_eq!(cell("2025-03-10")["has_activities"], true);
    assert_eq!(cell("2025-03-11")["band"]["middle"], true);
    assert_eq!(cell("2025-03-12")["band"]["middle"], true);
    assert_eq!(cell("2025-03-13")["band"]["end"], true);
    assert_eq!(cell("2025-03-14")["has_activities"], false);
    assert_eq!(cell("2025-03-10")["labels"][0], "RO 1");

    // weekend and holiday decoration from the fallback table
    assert_eq!(cell("2025-03-08")["is_weekend"], true);
    assert_eq!(cell("2025-03-31")["is_holiday"], true);
    assert_eq!(cell("2025-03-31")["holiday_name"], "Hari Idul Fitri");
}

#[tokio::test]
async fn test_calendar_rejects_bad_month() {
    let (app, _) = common::create_test_app();
    let (status, _) = send(&app, get("/api/calendar/2025/13")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_holidays_endpoint_serves_fallback_sorted() {
    let (app, _) = common::create_test_app();

    let (status, body) = send(&app, get("/api/holidays")).await;
    assert_eq!(status, StatusCode::OK);

    let holidays = body["holidays"].as_array().unwrap();
    assert!(!holidays.is_empty());
    assert_eq!(body["total"], holidays.len());

    let dates: Vec<&str> = holidays
        .iter()
        .map(|h| h["date"].as_str().unwrap())
        .collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    assert!(dates.contains(&"2025-08-17"));
}
