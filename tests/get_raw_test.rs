//! Raw lookups against a mock Domain Reputation API.

mod support;

use domain_reputation::prelude::*;
use support::*;
use wiremock::matchers::{any, method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ctx() -> RequestContext {
    RequestContext::background()
}

#[tokio::test]
async fn successful_request() {
    let server = mock_api().await;
    let client = client_for(&format!("{}{PATH_OK}", server.uri()));

    let envelope = client
        .get_raw(&ctx(), DOMAIN, &[QueryOption::output_format("JSON")])
        .await
        .expect("raw lookup");

    assert_eq!(envelope.status, 200);
    assert!(!envelope.body.is_empty());
    assert_eq!(envelope.text(), RESPONSE);
}

#[tokio::test]
async fn non_200_status_is_a_status_error() {
    let server = mock_api().await;
    let client = client_for(&format!("{}{PATH_500}", server.uri()));

    let err = client.get_raw(&ctx(), DOMAIN, &[]).await.unwrap_err();

    assert!(matches!(err, Error::Status { code: 500, .. }), "unexpected error: {err:?}");
    assert_eq!(err.to_string(), "API failed with status code: 500");
    assert_eq!(err.response().unwrap().body, UNPARSABLE.as_bytes());
    assert!(err.is_retryable());
}

#[tokio::test]
async fn complete_but_cut_body_is_returned_as_is() {
    let server = mock_api().await;
    let client = client_for(&format!("{}{PATH_PARTIAL}", server.uri()));

    let envelope = client.get_raw(&ctx(), DOMAIN, &[]).await.expect("raw lookup");

    assert_eq!(envelope.body, cut_response().as_bytes());
}

#[tokio::test]
async fn body_shorter_than_declared_length_is_a_read_error() {
    let base = short_body_server(cut_response(), RESPONSE.len()).await;
    let client = client_for(&base);

    let err = client.get_raw(&ctx(), DOMAIN, &[]).await.unwrap_err();

    assert!(matches!(err, Error::Read { .. }), "unexpected error: {err:?}");
    assert_eq!(err.to_string(), "cannot read response: unexpected EOF");
    let partial = err.response().expect("partial envelope");
    assert_eq!(partial.status, 200);
    assert!(partial.body.len() < RESPONSE.len());
}

#[tokio::test]
async fn unparsable_response_is_returned_as_is() {
    let server = mock_api().await;
    let client = client_for(&format!("{}{PATH_UNPARSABLE}", server.uri()));

    let envelope = client.get_raw(&ctx(), DOMAIN, &[]).await.expect("raw lookup");

    assert_eq!(envelope.body, UNPARSABLE.as_bytes());
}

#[tokio::test]
async fn service_error_is_classified_by_status() {
    let server = mock_api().await;
    let client = client_for(&format!("{}{PATH_ERROR}", server.uri()));

    let err = client.get_raw(&ctx(), DOMAIN, &[]).await.unwrap_err();

    assert_eq!(err.to_string(), "API failed with status code: 499");
    assert_eq!(err.response().unwrap().body, ERROR_RESPONSE.as_bytes());
    assert!(err.as_api_error().is_none());
}

#[tokio::test]
async fn invalid_argument_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(499))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    let err = client.get_raw(&ctx(), "", &[]).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        r#"invalid argument: "domainName" can not be empty"#
    );
}

#[tokio::test]
async fn caller_options_are_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("outputFormat", "XML"))
        .and(query_param("mode", "full"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<DomainReputation/>"))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    let envelope = client
        .get_raw(
            &ctx(),
            DOMAIN,
            &[QueryOption::mode(Mode::Full), QueryOption::output_format("xml")],
        )
        .await
        .expect("raw lookup");

    assert_eq!(envelope.text(), "<DomainReputation/>");
}
