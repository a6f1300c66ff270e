//! Integration tests for the inventory API client.

use cumulocity_api::api::managed_objects::ManagedObjectFilter;
use cumulocity_api::api::{CumulocityClient, PagingParams};
use cumulocity_api::models::ManagedObject;
use cumulocity_api::{BaseUrl, Credentials, CumulocityConfig, Password, TenantId, Username};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
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
async fn list_selects_objects_by_ids() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/inventory/managedObjects"))
        .and(query_param("ids", "100,200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "managedObjects": [
                {"id": "100", "name": "pump-a"},
                {"id": "200", "name": "pump-b"},
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = ManagedObjectFilter {
        ids: Some(vec!["100".to_string(), "200".to_string()]),
        ..ManagedObjectFilter::default()
    };

    let collection = client_for(&server)
        .managed_objects()
        .list(&filter)
        .await
        .unwrap();
    assert_eq!(collection.managed_objects.len(), 2);
}

#[tokio::test]
async fn get_preserves_device_fragments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/inventory/managedObjects/4711"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "4711",
            "name": "pump-a",
            "type": "c8y_Linux",
            "c8y_IsDevice": {},
            "c8y_Hardware": {"model": "RPi 4", "serialNumber": "X99"},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let object = client_for(&server)
        .managed_objects()
        .get("4711")
        .await
        .unwrap();
    assert_eq!(object.name.as_deref(), Some("pump-a"));
    assert!(object.fragments.contains_key("c8y_IsDevice"));
    assert_eq!(object.fragments["c8y_Hardware"]["model"], json!("RPi 4"));
}

#[tokio::test]
async fn create_strips_server_managed_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/inventory/managedObjects"))
        .and(body_json(json!({
            "name": "pump-c",
            "type": "c8y_Linux",
            "c8y_IsDevice": {},
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "300",
            "name": "pump-c",
            "type": "c8y_Linux",
            "owner": "device_pump-c",
            "c8y_IsDevice": {},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut object = ManagedObject {
        id: Some("stripped".to_string()),
        owner: Some("stripped".to_string()),
        name: Some("pump-c".to_string()),
        object_type: Some("c8y_Linux".to_string()),
        ..ManagedObject::default()
    };
    object
        .fragments
        .insert("c8y_IsDevice".to_string(), json!({}));

    let created = client_for(&server)
        .managed_objects()
        .create(&object)
        .await
        .unwrap();
    assert_eq!(created.id.as_deref(), Some("300"));
    assert_eq!(created.owner.as_deref(), Some("device_pump-c"));
}

#[tokio::test]
async fn delete_with_cascade_sets_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/inventory/managedObjects/4711"))
        .and(query_param("cascade", "true"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .managed_objects()
        .delete("4711", true)
        .await
        .unwrap();
}

#[tokio::test]
async fn child_devices_are_paged_references() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/inventory/managedObjects/4711/childDevices"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "references": [
                {"managedObject": {"id": "4712", "name": "sensor-1"}},
                {"managedObject": {"id": "4713", "name": "sensor-2"}},
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let references = client_for(&server)
        .managed_objects()
        .child_devices("4711", &PagingParams::with_page_size(10))
        .await
        .unwrap();

    assert_eq!(references.references.len(), 2);
    let first = references.references[0].managed_object.as_ref().unwrap();
    assert_eq!(first.id.as_deref(), Some("4712"));
}

#[tokio::test]
async fn assign_child_asset_posts_reference_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/inventory/managedObjects/100/childAssets"))
        .and(body_json(json!({"managedObject": {"id": "200"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "managedObject": {"id": "200", "name": "pump-b"},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reference = client_for(&server)
        .managed_objects()
        .assign_child_asset("100", "200")
        .await
        .unwrap();
    assert_eq!(
        reference.managed_object.unwrap().id.as_deref(),
        Some("200")
    );
}

#[tokio::test]
async fn unassign_child_device_deletes_reference() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/inventory/managedObjects/4711/childDevices/4712"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .managed_objects()
        .unassign_child_device("4711", "4712")
        .await
        .unwrap();
}
