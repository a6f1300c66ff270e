//! Integration tests for the event and measurement API clients.

use cumulocity_api::api::events::EventFilter;
use cumulocity_api::api::measurements::MeasurementFilter;
use cumulocity_api::api::CumulocityClient;
use cumulocity_api::models::{Event, Measurement, Source};
use cumulocity_api::{BaseUrl, Credentials, CumulocityConfig, Password, TenantId, Username};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CumulocityClient {
    let config = CumulocityConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .credentials(Credentials::basic(
            TenantId::new("t12345").unwrap(),
            Username::new("admin").unwrap(),
            Password::new("s3cret").unwrap(),
        ))
        .build()
        .unwrap();
    CumulocityClient::new(&config)
}

#[tokio::test]
async fn events_list_filters_by_type_and_source() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/event/events"))
        .and(query_param("type", "c8y_DoorOpened"))
        .and(query_param("source", "4711"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": [
                {
                    "id": "777",
                    "type": "c8y_DoorOpened",
                    "text": "Door opened",
                    "source": {"id": "4711"},
                }
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = EventFilter {
        event_type: Some("c8y_DoorOpened".to_string()),
        source: Some("4711".to_string()),
        ..EventFilter::default()
    };

    let collection = client_for(&server).events().list(&filter).await.unwrap();
    assert_eq!(collection.events.len(), 1);
    assert_eq!(collection.events[0].text.as_deref(), Some("Door opened"));
}

#[tokio::test]
async fn events_create_and_delete() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/event/events"))
        .and(body_json(json!({
            "type": "c8y_DoorOpened",
            "text": "Door opened",
            "source": {"id": "4711"},
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "777",
            "type": "c8y_DoorOpened",
            "text": "Door opened",
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/event/events/777"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let event = Event {
        event_type: Some("c8y_DoorOpened".to_string()),
        text: Some("Door opened".to_string()),
        source: Some(Source::by_id("4711")),
        ..Event::default()
    };

    let client = client_for(&server);
    let created = client.events().create(&event).await.unwrap();
    assert_eq!(created.id.as_deref(), Some("777"));

    client.events().delete("777").await.unwrap();
}

#[tokio::test]
async fn measurements_create_preserves_value_fragments() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/measurement/measurements"))
        .and(body_json(json!({
            "type": "c8y_TemperatureMeasurement",
            "time": "2024-03-01T10:00:00+00:00",
            "source": {"id": "4711"},
            "c8y_Temperature": {"T": {"value": 21.5, "unit": "C"}},
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "8801",
            "type": "c8y_TemperatureMeasurement",
            "c8y_Temperature": {"T": {"value": 21.5, "unit": "C"}},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut measurement = Measurement {
        measurement_type: Some("c8y_TemperatureMeasurement".to_string()),
        time: Some("2024-03-01T10:00:00+00:00".parse().unwrap()),
        source: Some(Source::by_id("4711")),
        ..Measurement::default()
    };
    measurement.fragments.insert(
        "c8y_Temperature".to_string(),
        json!({"T": {"value": 21.5, "unit": "C"}}),
    );

    let created = client_for(&server)
        .measurements()
        .create(&measurement)
        .await
        .unwrap();
    assert_eq!(
        created.fragments["c8y_Temperature"]["T"]["value"],
        json!(21.5)
    );
}

#[tokio::test]
async fn measurements_create_many_uses_collection_media_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/measurement/measurements"))
        .and(header(
            "Content-Type",
            "application/vnd.com.nsn.cumulocity.measurementCollection+json",
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "measurements": [{"id": "1"}, {"id": "2"}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let measurements = vec![
        Measurement {
            measurement_type: Some("c8y_TemperatureMeasurement".to_string()),
            source: Some(Source::by_id("4711")),
            ..Measurement::default()
        },
        Measurement {
            measurement_type: Some("c8y_TemperatureMeasurement".to_string()),
            source: Some(Source::by_id("4712")),
            ..Measurement::default()
        },
    ];

    let collection = client_for(&server)
        .measurements()
        .create_many(&measurements)
        .await
        .unwrap();
    assert_eq!(collection.measurements.len(), 2);
}

#[tokio::test]
async fn measurements_delete_all_by_fragment() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/measurement/measurements"))
        .and(query_param("source", "4711"))
        .and(query_param("dateTo", "2024-01-01T00:00:00Z"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let filter = MeasurementFilter {
        source: Some("4711".to_string()),
        date_to: Some("2024-01-01T00:00:00Z".to_string()),
        ..MeasurementFilter::default()
    };

    client_for(&server)
        .measurements()
        .delete_all(&filter)
        .await
        .unwrap();
}
