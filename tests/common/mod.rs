#![allow(dead_code)]

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::test::TestRequest;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};

use proje_frontend::config::AppConfig;
use proje_frontend::{routes, AppState};

pub const MANAGER_ROLES: &str = r#"[{"authority":"PROJE_YONETICISI"}]"#;
pub const STAFF_ROLES: &str = r#"[{"authority":"CALISAN"}]"#;

/// One request received by the mock backend.
#[derive(Debug, Clone)]
pub struct Call {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub body: String,
}

/// Knobs for the mock backend. Everything succeeds by default.
#[derive(Debug, Clone)]
pub struct Behaviour {
    /// Records per resource served by `list` and `all`.
    pub total: usize,
    pub list_status: Option<u16>,
    pub write_status: Option<u16>,
    pub write_body: Option<String>,
    pub delete_status: Option<u16>,
    pub assign_status: Option<u16>,
    pub my_projects_status: Option<u16>,
    /// Applied to every response.
    pub delay: Option<Duration>,
}

impl Default for Behaviour {
    fn default() -> Self {
        Self {
            total: 13,
            list_status: None,
            write_status: None,
            write_body: None,
            delete_status: None,
            assign_status: None,
            my_projects_status: None,
            delay: None,
        }
    }
}

struct Shared {
    behaviour: Behaviour,
    calls: Arc<Mutex<Vec<Call>>>,
}

/// An actix-web server on `127.0.0.1:0` playing the remote API.
pub struct Backend {
    pub base_url: String,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl Backend {
    pub async fn start(behaviour: Behaviour) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let shared = web::Data::new(Shared {
            behaviour,
            calls: calls.clone(),
        });
        let server = HttpServer::new(move || {
            App::new()
                .app_data(shared.clone())
                .default_service(web::to(dispatch))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        Self {
            base_url: format!("http://{}", addr),
            calls,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, method: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == method)
            .collect()
    }
}

/// A base URL nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// The front-end wired exactly like `main.rs`, pointed at `base_url`.
pub fn app(
    base_url: &str,
    timeout: Duration,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let config = AppConfig {
        api_base_url: base_url.to_string(),
        request_timeout: timeout,
        ..AppConfig::default()
    };
    let state = web::Data::new(AppState::new(config).unwrap());
    App::new()
        .app_data(state)
        .configure(routes::routes::configure)
}

pub fn session_cookies(token: &str, username: &str, roles: &str) -> Vec<Cookie<'static>> {
    vec![
        Cookie::new("token", token.to_string()),
        Cookie::new("username", username.to_string()),
        Cookie::new("role", roles.to_string()),
    ]
}

pub fn manager_cookies() -> Vec<Cookie<'static>> {
    session_cookies("t1", "admin", MANAGER_ROLES)
}

pub fn staff_cookies() -> Vec<Cookie<'static>> {
    session_cookies("t2", "ayse", STAFF_ROLES)
}

pub fn with_cookies(mut req: TestRequest, cookies: &[Cookie<'static>]) -> TestRequest {
    for cookie in cookies {
        req = req.cookie(cookie.clone());
    }
    req
}

/// Unsigned-by-us token in the shape the backend issues.
pub fn jwt(claims: Value) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"backend-only-secret"),
    )
    .unwrap()
}

pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub fn response_cookie<B>(resp: &ServiceResponse<B>, name: &str) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == name)
        .map(|c| c.into_owned())
}

/// Asserts a 303 to the login screen that wipes the stored session.
pub fn assert_signed_out<B>(resp: &ServiceResponse<B>) {
    assert_eq!(resp.status(), actix_web::http::StatusCode::SEE_OTHER);
    assert_eq!(location(resp).as_deref(), Some("/login"));
    for key in ["token", "username", "role"] {
        let cookie = response_cookie(resp, key).unwrap();
        assert_eq!(cookie.value(), "", "{key} should be removed");
    }
    let notice = response_cookie(resp, "notice").unwrap();
    assert!(notice.value().contains("Oturum süreniz doldu"));
}

/// Cookies a browser would keep after this response.
pub fn kept_cookies<B>(resp: &ServiceResponse<B>) -> Vec<Cookie<'static>> {
    resp.response()
        .cookies()
        .filter(|c| !c.value().is_empty())
        .map(|c| Cookie::new(c.name().to_string(), c.value().to_string()))
        .collect()
}

async fn dispatch(req: HttpRequest, body: web::Bytes, shared: web::Data<Shared>) -> HttpResponse {
    let call = Call {
        method: req.method().to_string(),
        path: req.path().to_string(),
        query: req.query_string().to_string(),
        authorization: req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).to_string(),
    };
    shared.calls.lock().unwrap().push(call.clone());

    let behaviour = &shared.behaviour;
    if let Some(delay) = behaviour.delay {
        tokio::time::sleep(delay).await;
    }

    let segments: Vec<&str> = call.path.trim_start_matches('/').split('/').collect();
    match (call.method.as_str(), segments.as_slice()) {
        ("POST", ["api", "auth", "login"]) => login(&call.body),
        ("GET", ["api", "project", "my_project"]) => match behaviour.my_projects_status {
            Some(status) => status_only(status),
            None => HttpResponse::Ok().json(vec![
                project(1, "Depo Otomasyonu"),
                project(2, "Mobil Uygulama"),
            ]),
        },
        ("GET", ["api", resource, "list"]) => {
            if let Some(status) = behaviour.list_status {
                return status_only(status);
            }
            let params = web::Query::<HashMap<String, usize>>::from_query(&call.query)
                .map(|q| q.into_inner())
                .unwrap_or_default();
            let page = params.get("page").copied().unwrap_or(0);
            let size = params.get("size").copied().unwrap_or(5).max(1);
            let total_pages = behaviour.total.div_ceil(size);
            let content: Vec<Value> = (page * size..((page + 1) * size).min(behaviour.total))
                .map(|i| record(resource, i as i64 + 1))
                .collect();
            HttpResponse::Ok().json(json!({
                "content": content,
                "totalPages": total_pages,
                "number": page,
                "size": size,
            }))
        }
        ("GET", ["api", resource, "all"]) => {
            let all: Vec<Value> = (1..=behaviour.total as i64)
                .map(|id| record(resource, id))
                .collect();
            HttpResponse::Ok().json(all)
        }
        ("POST", ["api", _, "create"]) | ("PUT", ["api", _, "update", _]) => {
            match behaviour.write_status {
                Some(status) => with_body(status, behaviour.write_body.clone()),
                None => HttpResponse::Ok().json(json!({ "ok": true })),
            }
        }
        ("DELETE", ["api", _, "delete", _]) => match behaviour.delete_status {
            Some(status) => status_only(status),
            None => HttpResponse::Ok().finish(),
        },
        ("POST", ["api", "worker", _, "project", _]) => match behaviour.assign_status {
            Some(status) => status_only(status),
            None => HttpResponse::Ok().body("Çalışan projeye atandı"),
        },
        _ => HttpResponse::NotFound().finish(),
    }
}

fn login(body: &str) -> HttpResponse {
    let credentials: Value = serde_json::from_str(body).unwrap_or(Value::Null);
    let pair = (
        credentials["username"].as_str().unwrap_or_default(),
        credentials["password"].as_str().unwrap_or_default(),
    );
    match pair {
        ("admin", "123") => HttpResponse::Ok().json(json!({
            "role": [{ "authority": "PROJE_YONETICISI" }],
            "token": "t1",
        })),
        ("ayse", "456") => HttpResponse::Ok().json(json!({
            "role": [{ "authority": "CALISAN" }],
            "token": "t2",
        })),
        ("misafir", "789") => HttpResponse::Ok().json(json!({
            "role": [{ "authority": "MISAFIR" }],
            "token": "t3",
        })),
        _ => status_only(401),
    }
}

fn record(resource: &str, id: i64) -> Value {
    match resource {
        "worker" => json!({
            "worker_id": id,
            "name": format!("Çalışan {id}"),
            "age": 30,
            "gender": "Erkek",
            "worker_email": format!("calisan{id}@firma.com"),
        }),
        _ => project(id, &format!("Proje {id}")),
    }
}

fn project(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "Açıklama",
        "project_status": "Planlama",
        "workers": [{
            "worker_id": 100 + id,
            "name": "Ali",
            "age": 30,
            "gender": "Erkek",
            "worker_email": "ali@firma.com",
        }],
    })
}

fn status_only(status: u16) -> HttpResponse {
    with_body(status, None)
}

fn with_body(status: u16, body: Option<String>) -> HttpResponse {
    let status = actix_web::http::StatusCode::from_u16(status).unwrap();
    let mut builder = HttpResponse::build(status);
    match body {
        Some(body) => builder.content_type("application/json").body(body),
        None => builder.finish(),
    }
}
