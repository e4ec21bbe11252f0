use rentdesk::api::{
    ApiError, HttpBackend, NewCar, RentalBackend, ReturnRentalRequest, StartRentalRequest,
};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn car_json(id: &str, available: bool) -> serde_json::Value {
    json!({
        "_id": id,
        "make": "Toyota",
        "model": "Corolla",
        "year": 2020,
        "plate_number": format!("PLATE-{id}"),
        "daily_rate": 50.0,
        "available": available,
    })
}

fn invoice_json() -> serde_json::Value {
    json!({
        "_id": "inv-1",
        "rental_id": "r1",
        "car_id": "c1",
        "customer_name": "Ada",
        "daily_rate": 50,
        "days": 3,
        "subtotal": 150,
        "tax_rate": 0.1,
        "tax_amount": 15,
        "total": 165,
        "start_date": "2024-03-01T10:00:00",
        "end_date": "2024-03-04T10:00:00",
    })
}

// ============================================================================
// Reads
// ============================================================================

#[tokio::test]
async fn test_list_cars() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cars"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([car_json("c1", true), car_json("c2", false)])),
        )
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let cars = assert_ok!(backend.list_cars().await);

    assert_eq!(cars.len(), 2);
    assert_eq!(cars[0].id, "c1");
    assert!(!cars[1].available);
}

#[tokio::test]
async fn test_list_active_rentals_and_invoices() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rentals/active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "_id": "r1",
            "car_id": "c1",
            "customer_name": "Ada",
            "start_date": "2024-03-01T10:00:00",
        }])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/invoices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([invoice_json()])))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());

    let rentals = assert_ok!(backend.list_active_rentals().await);
    assert_eq!(rentals[0].customer_name, "Ada");

    let invoices = assert_ok!(backend.list_invoices().await);
    assert_eq!(invoices[0].total, 165.0);
}

#[tokio::test]
async fn test_list_with_error_status_is_an_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/invoices"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let err = assert_err!(backend.list_invoices().await);
    assert_eq!(
        err,
        ApiError::Api {
            status: 500,
            detail: None
        }
    );
}

#[tokio::test]
async fn test_malformed_success_body_is_parse_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cars"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cars": []})))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let err = assert_err!(backend.list_cars().await);
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Nothing listens on port 9 on a test machine
    let backend = HttpBackend::new("http://127.0.0.1:9");
    let err = assert_err!(backend.list_cars().await);
    assert!(matches!(err, ApiError::Network(_)));
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn test_add_car_sends_payload() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/cars"))
        .and(body_json(json!({
            "make": "Toyota",
            "model": "Corolla",
            "year": 2020,
            "plate_number": "PLATE-c1",
            "daily_rate": 50.0,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(car_json("c1", true)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let car = NewCar {
        make: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: Some(2020),
        plate_number: "PLATE-c1".to_string(),
        daily_rate: Some(50.0),
    };

    let created = assert_ok!(backend.add_car(&car).await);
    assert_eq!(created.id, "c1");
}

#[tokio::test]
async fn test_add_car_error_carries_detail() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/cars"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Plate number exists"})),
        )
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let car = NewCar {
        make: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: None,
        plate_number: "DUP".to_string(),
        daily_rate: None,
    };

    let err = assert_err!(backend.add_car(&car).await);
    assert_eq!(err.user_message(), "Plate number exists");
}

#[tokio::test]
async fn test_start_rental() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rentals/start"))
        .and(body_json(json!({"car_id": "c1", "customer_name": "Ada"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "r1",
            "car_id": "c1",
            "customer_name": "Ada",
            "start_date": "2024-03-01T10:00:00",
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let request = StartRentalRequest {
        car_id: "c1".to_string(),
        customer_name: "Ada".to_string(),
    };

    let rental = assert_ok!(backend.start_rental(&request).await);
    assert_eq!(rental.id, "r1");
}

#[tokio::test]
async fn test_start_rental_error_without_body_uses_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rentals/start"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let request = StartRentalRequest {
        car_id: "c1".to_string(),
        customer_name: "Ada".to_string(),
    };

    let err = assert_err!(backend.start_rental(&request).await);
    assert_eq!(err.user_message(), "Failed (409)");
}

#[tokio::test]
async fn test_return_rental_unwraps_invoice() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rentals/r1/return"))
        .and(body_json(json!({"tax_rate": 0.1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"invoice": invoice_json()})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let invoice = assert_ok!(
        backend
            .return_rental("r1", &ReturnRentalRequest { tax_rate: 0.1 })
            .await
    );

    assert_eq!(invoice.id, "inv-1");
    assert_eq!(invoice.subtotal, 150.0);
    assert_eq!(invoice.tax_amount, 15.0);
    assert_eq!(invoice.total, 165.0);
}

#[tokio::test]
async fn test_decimal_strings_from_backend_are_accepted() {
    let mock_server = MockServer::start().await;
    let mut car = car_json("c1", true);
    car["daily_rate"] = json!("50.00");
    let mut invoice = invoice_json();
    invoice["subtotal"] = json!("150.00");
    invoice["total"] = json!("165.00");
    Mock::given(method("GET"))
        .and(path("/api/cars"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([car])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/invoices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([invoice])))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());

    let cars = assert_ok!(backend.list_cars().await);
    assert_eq!(cars[0].daily_rate, 50.0);

    let invoices = assert_ok!(backend.list_invoices().await);
    assert_eq!(invoices[0].subtotal, 150.0);
    assert_eq!(invoices[0].total, 165.0);
}

#[tokio::test]
async fn test_parse_error_names_the_offending_field() {
    let mock_server = MockServer::start().await;
    let mut car = car_json("c1", true);
    car.as_object_mut().unwrap().remove("plate_number");
    Mock::given(method("GET"))
        .and(path("/api/cars"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([car])))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let err = assert_err!(backend.list_cars().await);
    match err {
        ApiError::Parse(message) => assert!(message.contains("plate_number"), "{message}"),
        other => panic!("expected parse error, got {other:?}"),
    }
}
