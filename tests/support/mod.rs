//! Test fixtures: a mock Domain Reputation API and a server that cuts bodies short

#![allow(dead_code)]

use domain_reputation::DomainReputationClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "at_LoremIpsumDolorSitAmetConsect";
pub const DOMAIN: &str = "whoisxmlapi.com";

pub const RESPONSE: &str = r#"{"mode":"fast","reputationScore":98.58,"testResults":[{"test":"SSL vulnerabilities","testCode":88,
"warnings":[{"warningDescription":"HTTP Strict Transport Security not set","warningCode":6015},
{"warningDescription":"TLSA record not configured or configured wrong","warningCode":6019},
{"warningDescription":"OCSP stapling not configured","warningCode":6006}]}]}"#;

pub const UNPARSABLE: &str = r#"<?xml version="1.0" encoding="utf-8"?><>"#;

pub const ERROR_RESPONSE: &str = r#"{"code":499,"messages":"Test error message."}"#;

pub const PATH_OK: &str = "/DomainReputation/ok";
pub const PATH_ERROR: &str = "/DomainReputation/error";
pub const PATH_500: &str = "/DomainReputation/500";
pub const PATH_PARTIAL: &str = "/DomainReputation/partial";
pub const PATH_UNPARSABLE: &str = "/DomainReputation/unparsable";

/// The JSON body with its last ten bytes removed.
pub fn cut_response() -> &'static str {
    &RESPONSE[..RESPONSE.len() - 10]
}

/// Mock API answering each scenario on its own path.
pub async fn mock_api() -> MockServer {
    let server = MockServer::start().await;

    let routes: [(&str, u16, &str); 5] = [
        (PATH_OK, 200, RESPONSE),
        (PATH_ERROR, 499, ERROR_RESPONSE),
        (PATH_500, 500, UNPARSABLE),
        (PATH_PARTIAL, 200, cut_response()),
        (PATH_UNPARSABLE, 200, UNPARSABLE),
    ];
    for (route, status, body) in routes {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
    }

    server
}

/// Client pointed at `base_url`.
pub fn client_for(base_url: &str) -> DomainReputationClient {
    DomainReputationClient::builder()
        .api_key(API_KEY)
        .base_url(base_url)
        .build()
        .expect("client")
}

/// Serve one `200 OK` per connection that declares `declared` bytes but sends
/// only `body`, then closes the connection. Returns the base URL.
pub async fn short_body_server(body: &'static str, declared: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let head = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {declared}\r\nConnection: close\r\n\r\n"
                );
                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.write_all(body.as_bytes()).await;
                let _ = socket.flush().await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}/DomainReputation/partial2")
}
