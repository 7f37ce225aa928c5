//! ApiClient against a local HTTP server speaking the booking envelope.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, patch},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use ticketdesk::Error;
use ticketdesk::api::{ApiClient, ApiClientBuilder, BookingApi};
use ticketdesk::state::{EventId, OrderId};
use tokio::net::TcpListener;
use tokio_test::{assert_err, assert_ok};

#[derive(Clone, Default)]
struct Recorded {
    auth: Arc<Mutex<Vec<Option<String>>>>,
    patches: Arc<Mutex<Vec<(u64, Value)>>>,
    deletes: Arc<Mutex<Vec<u64>>>,
}

async fn list_bookings(State(rec): State<Recorded>, headers: HeaderMap) -> Json<Value> {
    let auth = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    rec.auth.lock().unwrap().push(auth);

    Json(json!({
        "code": 200,
        "msg": "ok",
        "data": [
            {
                "id": 11,
                "event_id": 3,
                "booking_date": "2024-10-02",
                "number_of_tickets": 2,
                "total_amount": "45.50",
                "booking_status": true
            },
            {
                "id": 12,
                "event_id": 5,
                "booking_date": "2024-11-20T18:30:00Z",
                "number_of_tickets": 1,
                "total_amount": "20.00",
                "booking_status": false
            }
        ]
    }))
}

async fn get_event(Path(id): Path<u64>) -> (StatusCode, Json<Value>) {
    if id == 404 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "code": 404, "msg": "Event not found", "data": null })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "code": 200,
            "data": { "id": id, "name": format!("Event {id}"), "venue": "Hall A" }
        })),
    )
}

async fn patch_booking(
    State(rec): State<Recorded>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    rec.patches.lock().unwrap().push((id, body));
    if id == 13 {
        return Json(json!({ "code": 400, "msg": "Booking already cancelled", "data": null }));
    }
    Json(json!({ "code": 200, "msg": "updated", "data": { "id": id, "booking_status": false } }))
}

async fn delete_booking(State(rec): State<Recorded>, Path(id): Path<u64>) -> StatusCode {
    rec.deletes.lock().unwrap().push(id);
    if id == 99 {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::NO_CONTENT
    }
}

fn routes(prefix: &str, rec: Recorded) -> Router {
    Router::new()
        .route(&format!("{prefix}/api/events/venue-booking/"), get(list_bookings))
        .route(
            &format!("{prefix}/api/events/venue-booking/:id/"),
            patch(patch_booking).delete(delete_booking),
        )
        .route(&format!("{prefix}/api/events/event/:id/"), get(get_event))
        .with_state(rec)
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn client(prefix: &str, rec: Recorded) -> ApiClient {
    let base = serve(routes(prefix, rec)).await;
    ApiClientBuilder::new()
        .base_url(format!("{base}{prefix}"))
        .auth_token("secret-token")
        .build()
        .unwrap()
}

#[tokio::test]
async fn lists_bookings_with_bearer_token() {
    let rec = Recorded::default();
    let api = client("", rec.clone()).await;

    let orders = assert_ok!(api.list_bookings().await);

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, OrderId(11));
    assert_eq!(orders[0].event_id, EventId(3));
    assert_eq!(orders[0].total_amount.to_string(), "45.50");
    assert!(orders[0].is_confirmed());
    assert_eq!(orders[1].booking_date.to_string(), "2024-11-20");
    assert!(!orders[1].is_confirmed());

    let auth = rec.auth.lock().unwrap().clone();
    assert_eq!(auth, vec![Some("Bearer secret-token".to_string())]);
}

#[tokio::test]
async fn base_path_is_preserved() {
    let api = client("/backend", Recorded::default()).await;

    let orders = assert_ok!(api.list_bookings().await);
    assert_eq!(orders.len(), 2);
}

#[tokio::test]
async fn fetches_event_and_reports_missing_one() {
    let api = client("", Recorded::default()).await;

    let event = assert_ok!(api.get_event(EventId(3)).await);
    assert_eq!(event.id, EventId(3));
    assert_eq!(event.name, "Event 3");

    let err = assert_err!(api.get_event(EventId(404)).await);
    assert!(matches!(err, Error::Api { code: 404, .. }));
    assert_eq!(err.server_message(), Some("Event not found"));
}

#[tokio::test]
async fn cancel_sends_status_patch() {
    let rec = Recorded::default();
    let api = client("", rec.clone()).await;

    assert_ok!(api.cancel_booking(OrderId(11)).await);

    let patches = rec.patches.lock().unwrap().clone();
    assert_eq!(patches, vec![(11, json!({ "booking_status": false }))]);
}

#[tokio::test]
async fn cancel_rejected_in_envelope_surfaces_server_message() {
    let api = client("", Recorded::default()).await;

    let err = assert_err!(api.cancel_booking(OrderId(13)).await);
    assert!(matches!(err, Error::Api { code: 400, .. }));
    assert_eq!(err.server_message(), Some("Booking already cancelled"));
}

#[tokio::test]
async fn delete_accepts_empty_success_and_rejects_server_error() {
    let rec = Recorded::default();
    let api = client("", rec.clone()).await;

    assert_ok!(api.delete_booking(OrderId(12)).await);

    let err = assert_err!(api.delete_booking(OrderId(99)).await);
    assert!(matches!(err, Error::Status(status) if status.as_u16() == 500));

    assert_eq!(*rec.deletes.lock().unwrap(), vec![12, 99]);
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = ApiClientBuilder::new()
        .base_url(format!("http://{addr}"))
        .build()
        .unwrap();

    let err = assert_err!(api.list_bookings().await);
    assert!(matches!(err, Error::Http(_)));
}
