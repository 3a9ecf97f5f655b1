mod common;

use common::fixture;
use hh_api::{
    ApiRequestError, ClientConfig, HhClient, HhError, HttpExecutor, HttpRequest, ReqwestExecutor,
    SearchParams, TransportError,
};
use reqwest::header::HeaderMap;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> HhClient {
    let config = ClientConfig::new("wire-token")
        .with_base_url(&server.uri())
        .unwrap()
        .with_user_agent("hh-api-tests/1.0 (tests@example.com)");
    HhClient::with_reqwest(config).unwrap()
}

#[tokio::test]
async fn search_hits_vacancies_with_repeated_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vacancies"))
        .and(query_param("text", "rust developer"))
        .and(query_param("area", "2"))
        .and(header("authorization", "Bearer wire-token"))
        .and(header("hh-user-agent", "hh-api-tests/1.0 (tests@example.com)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture("vacancy_list.json")))
        .expect(1)
        .mount(&server)
        .await;

    let params = SearchParams::builder()
        .text("rust developer")
        .area(["1", "2"])
        .build()
        .unwrap();
    let list = client_for(&server).await.search_vacancies(&params).await.unwrap();

    assert_eq!(list.found, 57);
}

#[tokio::test]
async fn non_json_error_body_still_yields_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(403).set_body_string("<html>forbidden</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_identity().await.unwrap_err();

    assert!(matches!(
        err,
        HhError::Request(ApiRequestError { status: 403, ref reason, description: None })
            if reason == "Forbidden"
    ));
}

#[tokio::test]
async fn vacancy_fetch_over_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vacancies/93353083"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture("vacancy.json")))
        .mount(&server)
        .await;

    let vacancy = client_for(&server).await.fetch_vacancy("93353083").await.unwrap();
    assert_eq!(vacancy.details.key_skills.len(), 3);
}

#[tokio::test]
async fn undecodable_success_body_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let base = Url::parse(&server.uri()).unwrap();
    let executor = ReqwestExecutor::new().unwrap();
    let result = executor
        .execute(HttpRequest::get(&base, "/me", "", HeaderMap::new()))
        .await;

    assert!(matches!(result, Err(TransportError::Decode(_))));
}
