//! Wire types exchanged with the rental backend.
//!
//! The backend stores records in MongoDB and exposes their identity as `_id`.
//! `id` is accepted too so the client works against either spelling.

use serde::{Deserialize, Deserializer, Serialize, de};

/// A rentable vehicle record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Car {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i64,
    pub plate_number: String,
    #[serde(deserialize_with = "decimal")]
    pub daily_rate: f64,
    pub available: bool,
}

/// A lease of a car to a named customer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Rental {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub car_id: String,
    pub customer_name: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Billing record produced when a rental is returned.
///
/// Every monetary figure comes from the backend; the client never derives one.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Invoice {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub rental_id: Option<String>,
    #[serde(default)]
    pub car_id: Option<String>,
    pub customer_name: String,
    #[serde(deserialize_with = "decimal")]
    pub daily_rate: f64,
    pub days: i64,
    #[serde(deserialize_with = "decimal")]
    pub subtotal: f64,
    #[serde(deserialize_with = "decimal")]
    pub tax_rate: f64,
    #[serde(deserialize_with = "decimal")]
    pub tax_amount: f64,
    #[serde(deserialize_with = "decimal")]
    pub total: f64,
    pub start_date: String,
    pub end_date: String,
}

/// Money and rate fields arrive either as JSON numbers or as decimal strings
/// (`"50.00"`), depending on how the backend serializes its decimal type.
fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Number(f64),
        Text(String),
    }

    match Decimal::deserialize(deserializer)? {
        Decimal::Number(n) => Ok(n),
        Decimal::Text(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| de::Error::custom(format!("invalid decimal: {text:?}"))),
    }
}

/// Body of `POST /api/cars`.
///
/// Numeric fields are `None` when the form text could not be coerced; they
/// serialize as `null` and the backend rejects them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCar {
    pub make: String,
    pub model: String,
    pub year: Option<i64>,
    pub plate_number: String,
    pub daily_rate: Option<f64>,
}

/// Body of `POST /api/rentals/start`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartRentalRequest {
    pub car_id: String,
    pub customer_name: String,
}

/// Body of `POST /api/rentals/{id}/return`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnRentalRequest {
    pub tax_rate: f64,
}

/// Success body of `POST /api/rentals/{id}/return`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReturnRentalResponse {
    pub invoice: Invoice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_deserializes_mongo_id() {
        let json = r#"{
            "_id": "65a1",
            "make": "Toyota",
            "model": "Corolla",
            "year": 2020,
            "plate_number": "ABC-123",
            "daily_rate": 49.5,
            "available": true
        }"#;
        let car: Car = serde_json::from_str(json).unwrap();
        assert_eq!(car.id, "65a1");
        assert_eq!(car.year, 2020);
        assert!(car.available);
    }

    #[test]
    fn test_rental_accepts_plain_id_and_missing_end_date() {
        let json = r#"{
            "id": "r1",
            "car_id": "c1",
            "customer_name": "Ada",
            "start_date": "2024-03-01T10:00:00"
        }"#;
        let rental: Rental = serde_json::from_str(json).unwrap();
        assert_eq!(rental.id, "r1");
        assert!(rental.end_date.is_none());
    }

    #[test]
    fn test_new_car_serializes_invalid_numbers_as_null() {
        let car = NewCar {
            make: "Ford".to_string(),
            model: "Focus".to_string(),
            year: None,
            plate_number: "X1".to_string(),
            daily_rate: Some(30.0),
        };
        let value = serde_json::to_value(&car).unwrap();
        assert!(value["year"].is_null());
        assert_eq!(value["daily_rate"], 30.0);
    }

    #[test]
    fn test_return_response_unwraps_invoice() {
        let json = r#"{"invoice": {
            "_id": "i1",
            "customer_name": "Ada",
            "daily_rate": 50,
            "days": 3,
            "subtotal": 150,
            "tax_rate": 0.1,
            "tax_amount": 15,
            "total": 165,
            "start_date": "2024-03-01T10:00:00",
            "end_date": "2024-03-04T10:00:00"
        }}"#;
        let response: ReturnRentalResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.invoice.total, 165.0);
        assert_eq!(response.invoice.days, 3);
        assert!(response.invoice.rental_id.is_none());
    }

    #[test]
    fn test_money_fields_accept_decimal_strings() {
        let json = r#"{
            "_id": "c1",
            "make": "Toyota",
            "model": "Corolla",
            "year": 2020,
            "plate_number": "ABC-123",
            "daily_rate": "50.00",
            "available": true
        }"#;
        let car: Car = serde_json::from_str(json).unwrap();
        assert_eq!(car.daily_rate, 50.0);

        let json = r#"{
            "_id": "i1",
            "customer_name": "Ada",
            "daily_rate": "50.00",
            "days": 3,
            "subtotal": "150.00",
            "tax_rate": "0.10",
            "tax_amount": 15,
            "total": "165.00",
            "start_date": "2024-03-01T10:00:00",
            "end_date": "2024-03-04T10:00:00"
        }"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.subtotal, 150.0);
        assert_eq!(invoice.tax_rate, 0.1);
        assert_eq!(invoice.total, 165.0);
    }

    #[test]
    fn test_non_numeric_money_string_is_rejected() {
        let json = r#"{
            "_id": "c1",
            "make": "Toyota",
            "model": "Corolla",
            "year": 2020,
            "plate_number": "ABC-123",
            "daily_rate": "fifty",
            "available": true
        }"#;
        let err = serde_json::from_str::<Car>(json).unwrap_err();
        assert!(err.to_string().contains("invalid decimal"));
    }
}
