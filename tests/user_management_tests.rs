//! Integration tests for the user, group, and role API clients.

use cumulocity_api::api::users::UserFilter;
use cumulocity_api::api::{CumulocityClient, PagingParams};
use cumulocity_api::models::{Group, User};
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
async fn users_are_listed_under_tenant_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/t12345/users"))
        .and(query_param("username", "jdoe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{"id": "jdoe", "userName": "jdoe", "enabled": true}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = UserFilter {
        username: Some("jdoe".to_string()),
        ..UserFilter::default()
    };

    let collection = client_for(&server)
        .users()
        .list("t12345", &filter)
        .await
        .unwrap();
    assert_eq!(collection.users.len(), 1);
    assert_eq!(collection.users[0].user_name.as_deref(), Some("jdoe"));
}

#[tokio::test]
async fn user_create_sends_password_but_strips_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/t12345/users"))
        .and(body_json(json!({
            "userName": "jdoe",
            "password": "initial-secret",
            "email": "jane@example.com",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "jdoe",
            "userName": "jdoe",
            "email": "jane@example.com",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = User {
        id: Some("stripped".to_string()),
        user_name: Some("jdoe".to_string()),
        password: Some("initial-secret".to_string()),
        email: Some("jane@example.com".to_string()),
        ..User::default()
    };

    let created = client_for(&server)
        .users()
        .create("t12345", &user)
        .await
        .unwrap();
    assert_eq!(created.id.as_deref(), Some("jdoe"));
    assert!(created.password.is_none());
}

#[tokio::test]
async fn current_user_includes_effective_roles() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/currentUser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "admin",
            "userName": "admin",
            "effectiveRoles": [
                {"id": "ROLE_ALARM_ADMIN", "name": "ROLE_ALARM_ADMIN"},
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let current = client_for(&server).users().current().await.unwrap();
    let roles = current.effective_roles.unwrap();
    assert_eq!(roles[0].id.as_deref(), Some("ROLE_ALARM_ADMIN"));
}

#[tokio::test]
async fn group_lookup_by_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/t12345/groupByName/operators"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "name": "operators",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let group = client_for(&server)
        .groups()
        .get_by_name("t12345", "operators")
        .await
        .unwrap();
    assert_eq!(group.id, Some(12));
}

#[tokio::test]
async fn group_create_sends_name_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/t12345/groups"))
        .and(body_json(json!({"name": "operators"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 12,
            "name": "operators",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .groups()
        .create("t12345", &Group::named("operators"))
        .await
        .unwrap();
    assert_eq!(created.id, Some(12));
}

#[tokio::test]
async fn add_user_to_group_posts_user_reference() {
    let server = MockServer::start().await;

    let user_self_url = format!("{}/user/t12345/users/jdoe", server.uri());

    Mock::given(method("POST"))
        .and(path("/user/t12345/groups/12/users"))
        .and(header(
            "Content-Type",
            "application/vnd.com.nsn.cumulocity.userReference+json",
        ))
        .and(body_json(json!({"user": {"self": user_self_url}})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .groups()
        .add_user("t12345", 12, &user_self_url)
        .await
        .unwrap();
}

#[tokio::test]
async fn roles_are_listed_and_assigned() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "roles": [{"id": "ROLE_ALARM_READ", "name": "ROLE_ALARM_READ"}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let role_self_url = format!("{}/user/roles/ROLE_ALARM_READ", server.uri());

    Mock::given(method("POST"))
        .and(path("/user/t12345/users/jdoe/roles"))
        .and(body_json(json!({"role": {"self": role_self_url}})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let roles = client.groups().roles(&PagingParams::default()).await.unwrap();
    assert_eq!(roles.roles.len(), 1);

    client
        .groups()
        .assign_role_to_user("t12345", "jdoe", &role_self_url)
        .await
        .unwrap();
}
