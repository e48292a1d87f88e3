mod common;

use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::test;
use chrono::Utc;
use serde_json::json;

use common::{Backend, Behaviour};

const TIMEOUT: Duration = Duration::from_secs(5);

async fn body_of<B: actix_web::body::MessageBody>(resp: actix_web::dev::ServiceResponse<B>) -> String {
    String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
}

#[actix_web::test]
async fn middle_page_renders_five_items_with_both_directions() {
    let backend = Backend::start(Behaviour::default()).await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    let req = common::with_cookies(
        test::TestRequest::get().uri("/workers?page=1&expanded=true"),
        &common::manager_cookies(),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_of(resp).await;
    assert_eq!(body.matches(r#"<li class="item""#).count(), 5);
    assert!(body.contains(r#"<span aria-current="page">2</span>"#));
    assert!(body.contains(r#"rel="prev""#));
    assert!(body.contains(r#"rel="next""#));
    assert!(body.contains("Sayfa 2 / 3"));
    assert!(body.contains("Çalışan 6"));
    assert!(!body.contains("Çalışan 11"));
}

#[actix_web::test]
async fn search_narrows_only_the_fetched_page() {
    let backend = Backend::start(Behaviour::default()).await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    let req = common::with_cookies(
        test::TestRequest::get().uri("/projects?page=0&expanded=true&q=PROJE%2012"),
        &common::manager_cookies(),
    )
    .to_request();
    let body = body_of(test::call_service(&app, req).await).await;
    assert_eq!(body.matches(r#"<li class="item""#).count(), 0);
    assert!(body.contains("Aradığınız kriterlere uygun proje bulunmamaktadır."));
    assert_eq!(backend.calls().len(), 1);
}

#[actix_web::test]
async fn page_past_the_end_falls_back_to_the_last_page() {
    let backend = Backend::start(Behaviour {
        total: 10,
        ..Behaviour::default()
    })
    .await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    let req = common::with_cookies(
        test::TestRequest::get().uri("/projects?page=2&expanded=true"),
        &common::manager_cookies(),
    )
    .to_request();
    let body = body_of(test::call_service(&app, req).await).await;
    let queries: Vec<String> = backend.calls().into_iter().map(|c| c.query).collect();
    assert_eq!(queries, vec!["page=2&size=5", "page=1&size=5"]);
    assert_eq!(body.matches(r#"<li class="item""#).count(), 5);
    assert!(body.contains("Sayfa 2 / 2"));
}

#[actix_web::test]
async fn rejected_token_ends_the_session() {
    let backend = Backend::start(Behaviour {
        list_status: Some(401),
        ..Behaviour::default()
    })
    .await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    let req = common::with_cookies(test::TestRequest::get().uri("/projects"), &common::manager_cookies())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&resp).as_deref(), Some("/login"));
    assert_eq!(common::response_cookie(&resp, "token").unwrap().value(), "");
    assert_eq!(common::response_cookie(&resp, "role").unwrap().value(), "");
    let notice = common::response_cookie(&resp, "notice").unwrap();
    assert!(notice.value().contains("Oturum süreniz doldu"));
}

#[actix_web::test]
async fn rejected_create_ends_the_session_without_refetching() {
    let backend = Backend::start(Behaviour {
        write_status: Some(403),
        ..Behaviour::default()
    })
    .await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    let req = common::with_cookies(
        test::TestRequest::post().uri("/projects?expanded=true").set_form([
            ("name", "Depo"),
            ("description", "Raf sistemi"),
            ("project_status", "Planlama"),
        ]),
        &common::manager_cookies(),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    common::assert_signed_out(&resp);

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "/api/project/create");
}

#[actix_web::test]
async fn rejected_update_ends_the_session_with_the_form_open() {
    let backend = Backend::start(Behaviour {
        write_status: Some(401),
        ..Behaviour::default()
    })
    .await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    let req = common::with_cookies(
        test::TestRequest::post().uri("/workers/4?page=0&expanded=true&edit=4").set_form([
            ("name", "Çalışan 4"),
            ("age", "45"),
            ("gender", "Erkek"),
            ("worker_email", "calisan4@firma.com"),
        ]),
        &common::manager_cookies(),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    common::assert_signed_out(&resp);

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "PUT");
}

#[actix_web::test]
async fn rejected_delete_ends_the_session() {
    let backend = Backend::start(Behaviour {
        delete_status: Some(401),
        ..Behaviour::default()
    })
    .await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    let req = common::with_cookies(
        test::TestRequest::post()
            .uri("/projects/3/delete?page=0&expanded=true")
            .set_form([("confirm", "yes")]),
        &common::manager_cookies(),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    common::assert_signed_out(&resp);

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "DELETE");
}

#[actix_web::test]
async fn list_failure_shows_a_banner() {
    let backend = Backend::start(Behaviour {
        list_status: Some(500),
        ..Behaviour::default()
    })
    .await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    let req = common::with_cookies(
        test::TestRequest::get().uri("/workers?expanded=true"),
        &common::manager_cookies(),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert!(common::response_cookie(&resp, "token").is_none());
    let body = body_of(resp).await;
    assert!(body.contains(r#"class="error-banner""#));
    assert!(body.contains("Çalışanlar alınamadı. (500)"));
}

#[actix_web::test]
async fn short_project_name_is_rejected_without_a_post() {
    let backend = Backend::start(Behaviour::default()).await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    let req = common::with_cookies(
        test::TestRequest::post()
            .uri("/projects?expanded=true")
            .set_form([("name", "ab"), ("description", "Raf"), ("project_status", "Test")]),
        &common::manager_cookies(),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_of(resp).await;
    assert!(body.contains("Proje adı en az 3 karakter olmalıdır."));
    assert!(body.contains(r#"value="ab""#));

    assert!(backend.calls_to("POST").is_empty());
    assert_eq!(backend.calls_to("GET").len(), 1);
}

#[actix_web::test]
async fn out_of_range_age_is_rejected_without_a_post() {
    let backend = Backend::start(Behaviour::default()).await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    for age in ["17", "101"] {
        let req = common::with_cookies(
            test::TestRequest::post().uri("/workers").set_form([
                ("name", "Zeynep"),
                ("age", age),
                ("gender", "Kadın"),
                ("worker_email", "zeynep@firma.com"),
            ]),
            &common::manager_cookies(),
        )
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
    assert!(backend.calls_to("POST").is_empty());
}

#[actix_web::test]
async fn valid_create_posts_and_redirects_expanded() {
    let backend = Backend::start(Behaviour::default()).await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    let req = common::with_cookies(
        test::TestRequest::post().uri("/projects?page=1").set_form([
            ("name", " Depo "),
            ("description", "Raf sistemi"),
            ("project_status", "Planlama"),
        ]),
        &common::manager_cookies(),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&resp).as_deref(), Some("/projects?page=1&expanded=true"));
    assert!(common::response_cookie(&resp, "notice")
        .unwrap()
        .value()
        .contains("Proje başarıyla eklendi!"));

    let posts = backend.calls_to("POST");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].path, "/api/project/create");
    let sent: serde_json::Value = serde_json::from_str(&posts[0].body).unwrap();
    assert_eq!(
        sent,
        json!({ "name": "Depo", "description": "Raf sistemi", "project_status": "Planlama" })
    );
}

#[actix_web::test]
async fn update_uses_put_and_closes_the_form() {
    let backend = Backend::start(Behaviour::default()).await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    let req = common::with_cookies(
        test::TestRequest::post().uri("/workers/4?page=0&edit=4").set_form([
            ("name", "Çalışan 4"),
            ("age", "45"),
            ("gender", "Erkek"),
            ("worker_email", "calisan4@firma.com"),
        ]),
        &common::manager_cookies(),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(common::location(&resp).as_deref(), Some("/workers?page=0&expanded=true"));

    let puts = backend.calls_to("PUT");
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].path, "/api/worker/update/4");
    assert!(puts[0].body.contains(r#""age":45"#));
}

#[actix_web::test]
async fn server_rejection_keeps_the_typed_values() {
    let backend = Backend::start(Behaviour {
        write_status: Some(409),
        write_body: Some(r#"{"message":"Bu e-mail zaten kayıtlı!"}"#.to_string()),
        ..Behaviour::default()
    })
    .await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    let req = common::with_cookies(
        test::TestRequest::post().uri("/workers").set_form([
            ("name", "Zeynep"),
            ("age", "29"),
            ("gender", "Kadın"),
            ("worker_email", "zeynep@firma.com"),
        ]),
        &common::manager_cookies(),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_of(resp).await;
    assert!(body.contains("Bu e-mail zaten kayıtlı!"));
    assert!(body.contains(r#"value="zeynep@firma.com""#));
}

#[actix_web::test]
async fn declined_delete_issues_no_call_and_returns_to_the_same_state() {
    let backend = Backend::start(Behaviour::default()).await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    let state = "/workers?page=1&q=firma&expanded=true&edit=7";
    let req = common::with_cookies(
        test::TestRequest::post()
            .uri("/workers/7/delete?page=1&q=firma&expanded=true&edit=7")
            .set_form([("confirm", "no")]),
        &common::manager_cookies(),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&resp).as_deref(), Some(state));
    assert!(backend.calls().is_empty());
}

#[actix_web::test]
async fn confirmed_delete_drops_the_matching_edit() {
    let backend = Backend::start(Behaviour::default()).await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    let req = common::with_cookies(
        test::TestRequest::get().uri("/projects/3/delete?page=0&expanded=true&edit=3"),
        &common::manager_cookies(),
    )
    .to_request();
    let body = body_of(test::call_service(&app, req).await).await;
    assert!(body.contains("Bu projeyi silmek istediğinize emin misiniz?"));
    assert!(backend.calls().is_empty());

    let req = common::with_cookies(
        test::TestRequest::post()
            .uri("/projects/3/delete?page=0&expanded=true&edit=3")
            .set_form([("confirm", "yes")]),
        &common::manager_cookies(),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(common::location(&resp).as_deref(), Some("/projects?page=0&expanded=true"));

    let deletes = backend.calls_to("DELETE");
    assert_eq!(deletes.len(), 1);
    assert_eq!(deletes[0].path, "/api/project/delete/3");
}

#[actix_web::test]
async fn deleting_a_missing_record_reports_not_found() {
    let backend = Backend::start(Behaviour {
        delete_status: Some(404),
        ..Behaviour::default()
    })
    .await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    let req = common::with_cookies(
        test::TestRequest::post()
            .uri("/workers/99/delete")
            .set_form([("confirm", "yes")]),
        &common::manager_cookies(),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(common::location(&resp).as_deref(), Some("/workers"));
    assert!(common::response_cookie(&resp, "notice")
        .unwrap()
        .value()
        .contains("Silinecek çalışan bulunamadı."));
}

#[actix_web::test]
async fn narrower_token_is_denied_in_place_without_fetching() {
    let backend = Backend::start(Behaviour::default()).await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    let token = common::jwt(json!({ "sub": "ayse", "roles": ["CALISAN"] }));
    let cookies = common::session_cookies(&token, "ayse", common::MANAGER_ROLES);
    let req = common::with_cookies(test::TestRequest::get().uri("/workers"), &cookies).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(common::location(&resp).is_none());
    let body = body_of(resp).await;
    assert!(body.contains("Erişim Reddedildi"));
    assert!(body.contains("Giriş Sayfasına Dön"));
    assert!(backend.calls().is_empty());
}

#[actix_web::test]
async fn staff_cache_never_reaches_manager_screens() {
    let backend = Backend::start(Behaviour::default()).await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    for path in ["/projects", "/workers", "/project-assignment", "/admin-dashboard"] {
        let req = common::with_cookies(test::TestRequest::get().uri(path), &common::staff_cookies())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(common::location(&resp).as_deref(), Some("/login"), "{path}");
    }
    assert!(backend.calls().is_empty());
}

#[actix_web::test]
async fn expired_token_clears_the_session() {
    let backend = Backend::start(Behaviour::default()).await;
    let app = test::init_service(common::app(&backend.base_url, TIMEOUT)).await;

    let token = common::jwt(json!({
        "sub": "admin",
        "roles": ["PROJE_YONETICISI"],
        "exp": Utc::now().timestamp() - 600,
    }));
    let cookies = common::session_cookies(&token, "admin", common::MANAGER_ROLES);
    let req = common::with_cookies(test::TestRequest::get().uri("/projects"), &cookies).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(common::location(&resp).as_deref(), Some("/login"));
    assert_eq!(common::response_cookie(&resp, "token").unwrap().value(), "");
    assert!(backend.calls().is_empty());
}

#[actix_web::test]
async fn corrupt_role_cookie_is_purged() {
    let app = test::init_service(common::app(&common::unreachable_base_url(), TIMEOUT)).await;

    let cookies = common::session_cookies("t1", "admin", "undefined");
    let req = common::with_cookies(test::TestRequest::get().uri("/projects"), &cookies).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(common::location(&resp).as_deref(), Some("/login"));
    assert_eq!(common::response_cookie(&resp, "role").unwrap().value(), "");
    assert!(common::response_cookie(&resp, "token").is_none());
}
