use super::*;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Clone)]
struct FakeApi {
    list_status: StatusCode,
    list_body: String,
    create_status: StatusCode,
    posted: Arc<Mutex<Vec<Value>>>,
}

impl FakeApi {
    fn listing(list_body: impl Into<String>) -> Self {
        Self {
            list_status: StatusCode::OK,
            list_body: list_body.into(),
            create_status: StatusCode::CREATED,
            posted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn with_list_status(mut self, status: StatusCode) -> Self {
        self.list_status = status;
        self
    }

    fn with_create_status(mut self, status: StatusCode) -> Self {
        self.create_status = status;
        self
    }
}

async fn list_employees(State(api): State<FakeApi>) -> (StatusCode, String) {
    (api.list_status, api.list_body.clone())
}

async fn create_employee(State(api): State<FakeApi>, Json(body): Json<Value>) -> (StatusCode, String) {
    api.posted.lock().await.push(body);
    (api.create_status, "{\"ignored\":true}".to_string())
}

async fn spawn_fake_api(api: FakeApi) -> std::io::Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .with_state(api);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

#[tokio::test]
async fn fetch_all_returns_records_in_server_order() {
    let body = json!([
        { "emp_id": "E1", "emp_name": "Alice", "emp_status": "Active", "emp_net_pay": 5000 },
        { "emp_id": "E2", "emp_name": "Bob", "emp_status": "Inactive" }
    ]);
    let base = spawn_fake_api(FakeApi::listing(body.to_string()))
        .await
        .expect("spawn fake api");

    let records = HttpEmployeeGateway::new(base).fetch_all().await.expect("fetch");
    let ids: Vec<&str> = records.iter().map(EmployeeRecord::id).collect();
    assert_eq!(ids, vec!["E1", "E2"]);
    assert_eq!(records[0].net_pay(), 5000.0);
}

#[tokio::test]
async fn trailing_slash_in_base_is_ignored() {
    let base = spawn_fake_api(FakeApi::listing("[]")).await.expect("spawn fake api");
    let gateway = HttpEmployeeGateway::new(format!("{base}/"));
    assert_eq!(gateway.api_base(), base);
    assert!(gateway.fetch_all().await.expect("fetch").is_empty());
}

#[tokio::test]
async fn non_array_body_degrades_to_empty_list() {
    let base = spawn_fake_api(FakeApi::listing("{}")).await.expect("spawn fake api");
    let records = HttpEmployeeGateway::new(base).fetch_all().await.expect("fetch");
    assert!(records.is_empty());
}

#[tokio::test]
async fn error_status_on_fetch_is_reported() {
    let base = spawn_fake_api(
        FakeApi::listing("[]").with_list_status(StatusCode::INTERNAL_SERVER_ERROR),
    )
    .await
    .expect("spawn fake api");

    let err = HttpEmployeeGateway::new(base)
        .fetch_all()
        .await
        .expect_err("500 must fail");
    assert_eq!(err, RemoteError::Status { status: 500 });
    assert!(err.is_http_status());
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let base = spawn_fake_api(FakeApi::listing("[{not json"))
        .await
        .expect("spawn fake api");
    let err = HttpEmployeeGateway::new(base)
        .fetch_all()
        .await
        .expect_err("garbage must fail");
    assert!(matches!(err, RemoteError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_api_is_a_transport_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let gateway = HttpEmployeeGateway::new(format!("http://{addr}"));
    let err = gateway.fetch_all().await.expect_err("closed port must fail");
    assert!(matches!(err, RemoteError::Transport(_)), "got {err:?}");
    assert!(!err.is_http_status());

    let err = gateway
        .create(&EmployeeForm::default())
        .await
        .expect_err("closed port must fail");
    assert!(matches!(err, RemoteError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn create_posts_the_form_as_a_json_object_of_strings() {
    let api = FakeApi::listing("[]");
    let posted = api.posted.clone();
    let base = spawn_fake_api(api).await.expect("spawn fake api");

    let form = EmployeeForm {
        emp_id: "E7".into(),
        emp_name: "Grace".into(),
        emp_dept: "Finance".into(),
        emp_phone: "12345".into(),
        emp_salary: "90000".into(),
        emp_net_pay: "81000".into(),
        emp_status: "Active".into(),
    };
    HttpEmployeeGateway::new(base)
        .create(&form)
        .await
        .expect("create");

    let posted = posted.lock().await;
    assert_eq!(posted.len(), 1);
    assert_eq!(
        posted[0],
        json!({
            "emp_id": "E7",
            "emp_name": "Grace",
            "emp_dept": "Finance",
            "emp_phone": "12345",
            "emp_salary": "90000",
            "emp_net_pay": "81000",
            "emp_status": "Active"
        })
    );
}

#[tokio::test]
async fn create_error_status_is_reported() {
    let base = spawn_fake_api(
        FakeApi::listing("[]").with_create_status(StatusCode::INTERNAL_SERVER_ERROR),
    )
    .await
    .expect("spawn fake api");

    let err = HttpEmployeeGateway::new(base)
        .create(&EmployeeForm::default())
        .await
        .expect_err("500 must fail");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn load_or_empty_swallows_failures() {
    let base = spawn_fake_api(
        FakeApi::listing("[{\"emp_id\":\"E1\"}]").with_list_status(StatusCode::SERVICE_UNAVAILABLE),
    )
    .await
    .expect("spawn fake api");
    assert!(load_or_empty(&HttpEmployeeGateway::new(base)).await.is_empty());
}

#[test]
fn non_array_values_yield_no_records() {
    for body in [json!(null), json!("text"), json!(3), json!({ "employees": [] })] {
        assert!(records_from_body(body).is_empty());
    }
}

#[test]
fn array_elements_that_are_not_objects_still_count() {
    let records = records_from_body(json!([{ "emp_id": "E1" }, 5]));
    assert_eq!(records.len(), 2);
    assert_eq!(records[1], EmployeeRecord::default());
}
