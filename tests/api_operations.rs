mod common;

use common::{client, fixture, ScriptedExecutor};
use hh_api::{ApiRequestError, EmployerSearchParams, HhError, SearchParams};
use serde_json::json;
use tracing_test::traced_test;

#[tokio::test]
async fn search_vacancies_end_to_end() {
    let executor = ScriptedExecutor::ok(fixture("vacancy_list.json"));
    let params = SearchParams::builder()
        .text("backend")
        .per_page(2)
        .page(0)
        .build()
        .unwrap();

    let list = client(&executor).search_vacancies(&params).await.unwrap();

    assert_eq!(list.found, 57);
    assert_eq!(list.items.len(), 2);

    let requests = executor.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, reqwest::Method::GET);
    assert_eq!(requests[0].path, "/vacancies");
    assert_eq!(requests[0].query, "?text=backend&per_page=2&page=0");
    assert_eq!(
        requests[0].url().unwrap().as_str(),
        "https://api.hh.ru/vacancies?text=backend&per_page=2&page=0"
    );
}

#[tokio::test]
async fn requests_carry_auth_and_user_agent_headers() {
    let executor = ScriptedExecutor::ok(fixture("me.json"));
    client(&executor).fetch_identity().await.unwrap();

    let request = &executor.requests()[0];
    assert_eq!(request.path, "/me");
    assert_eq!(request.query, "");
    assert_eq!(request.headers["authorization"], "Bearer test-token");
    assert!(request.headers.contains_key("hh-user-agent"));
    assert!(request.headers.contains_key("user-agent"));
}

#[tokio::test]
async fn forbidden_status_becomes_request_error() {
    let executor = ScriptedExecutor::new(403, "Forbidden", json!({"errors": [{"type": "forbidden"}]}));

    let err = client(&executor).fetch_identity().await.unwrap_err();

    match err {
        HhError::Request(ApiRequestError {
            status,
            reason,
            description,
        }) => {
            assert_eq!(status, 403);
            assert_eq!(reason, "Forbidden");
            assert_eq!(description, None);
        }
        other => panic!("expected request error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_description_is_kept() {
    let executor = ScriptedExecutor::new(
        400,
        "Bad Request",
        json!({"description": "Bad Argument", "errors": [{"type": "bad_argument", "value": "area"}]}),
    );
    let params = SearchParams::builder().area("nowhere").build().unwrap();

    let err = client(&executor).search_vacancies(&params).await.unwrap_err();
    assert!(matches!(
        err,
        HhError::Request(ApiRequestError { status: 400, ref description, .. })
            if description.as_deref() == Some("Bad Argument")
    ));
}

#[tokio::test]
async fn schema_failure_is_distinct_from_request_failure() {
    let executor = ScriptedExecutor::ok(json!({"items": [], "found": "many"}));

    let err = client(&executor)
        .search_vacancies(&SearchParams::default())
        .await
        .unwrap_err();

    match err {
        HhError::Schema(err) => {
            assert_eq!(err.record, "ShortVacancyList");
            assert_eq!(err.field, "found");
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_params_send_bare_question_mark() {
    let executor = ScriptedExecutor::ok(fixture("vacancy_list.json"));
    client(&executor)
        .search_vacancies(&SearchParams::default())
        .await
        .unwrap();
    assert_eq!(executor.requests()[0].query, "?");
}

#[tokio::test]
async fn fetch_vacancy_uses_item_path() {
    let executor = ScriptedExecutor::ok(fixture("vacancy.json"));

    let vacancy = client(&executor).fetch_vacancy("93353083").await.unwrap();

    assert_eq!(vacancy.id(), "93353083");
    assert_eq!(executor.requests()[0].path, "/vacancies/93353083");
}

#[tokio::test]
async fn fetch_vacancy_not_found() {
    let executor = ScriptedExecutor::new(404, "Not Found", serde_json::Value::Null);

    let err = client(&executor).fetch_vacancy("1").await.unwrap_err();
    assert!(matches!(err, HhError::Request(ApiRequestError { status: 404, .. })));
}

#[tokio::test]
async fn vacancy_items_are_truncated_to_limit() {
    let executor = ScriptedExecutor::ok(fixture("vacancy_list.json"));
    let params = SearchParams::builder().per_page(2).build().unwrap();

    let items = client(&executor).search_vacancy_items(&params, 1).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "93353083");
    assert_eq!(executor.requests().len(), 1);
}

#[tokio::test]
#[traced_test]
async fn vacancy_items_do_not_fetch_more_pages() {
    let executor = ScriptedExecutor::ok(fixture("vacancy_list.json"));
    let params = SearchParams::builder().per_page(2).build().unwrap();

    let items = client(&executor).search_vacancy_items(&params, 50).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(executor.requests().len(), 1);
    assert!(logs_contain("later pages are not fetched"));
}

#[tokio::test]
async fn employer_operations() {
    let executor = ScriptedExecutor::ok(fixture("employer.json"));
    let employer = client(&executor).fetch_employer("1740").await.unwrap();
    assert_eq!(employer.name(), "Яндекс");
    assert_eq!(executor.requests()[0].path, "/employers/1740");

    let executor = ScriptedExecutor::ok(json!({
        "items": [fixture("employer.json")],
        "found": 1,
        "pages": 1,
        "per_page": 20,
        "page": 0
    }));
    let params = EmployerSearchParams::builder()
        .text("yandex")
        .only_with_vacancies(true)
        .build()
        .unwrap();
    let list = client(&executor).search_employers(&params).await.unwrap();
    assert_eq!(list.found, 1);
    assert_eq!(executor.requests()[0].path, "/employers");
    assert_eq!(executor.requests()[0].query, "?text=yandex&only_with_vacancies=true");
}
