use httpmock::MockServer;

use crate::http_client::reqwest::ReqwestHttpClient;
use crate::http_client::{ClientConfig, HttpClient};
use crate::Request;

#[test]
fn execute() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/USER456/mentions")
            .query_param("access_token", "TOKEN123")
            .header_exists("user-agent");
        then.status(200).body(r#"{"data": []}"#);
    });

    let request = Request {
        url: server.url("/USER456/mentions?access_token=TOKEN123"),
    };
    let client = ReqwestHttpClient::create(ClientConfig::default()).unwrap();
    let res = client.execute(&request).unwrap();

    mock.assert();
    assert_eq!(res.status_code, 200);
    assert_eq!(res.status, "200 OK");
    assert_eq!(res.body, r#"{"data": []}"#);
}

#[test]
fn error_status_is_still_a_response() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/USER456/mentions");
        then.status(500).body("boom");
    });

    let request = Request {
        url: server.url("/USER456/mentions?access_token=TOKEN123"),
    };
    let client = ReqwestHttpClient::create(ClientConfig::new(false)).unwrap();
    let res = client.execute(&request).unwrap();

    assert_eq!(mock.hits(), 1);
    assert_eq!(res.status_code, 500);
    assert_eq!(res.body, "boom");
}

#[test]
fn unknown_status_keeps_only_the_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/USER456/mentions");
        then.status(499);
    });

    let request = Request {
        url: server.url("/USER456/mentions?access_token=TOKEN123"),
    };
    let client = ReqwestHttpClient::create(ClientConfig::default()).unwrap();
    let res = client.execute(&request).unwrap();

    assert_eq!(res.status_code, 499);
    assert_eq!(res.status, "499");
}

#[test]
fn connection_failure_does_not_leak_token() {
    let request = Request {
        url: "http://127.0.0.1:1/USER456/mentions?access_token=TOKEN123".to_string(),
    };
    let client = ReqwestHttpClient::create(ClientConfig::default()).unwrap();

    let err = client.execute(&request).unwrap_err();
    let detail = format!("{:#}", err);

    assert!(detail.starts_with("Failed requesting http://127.0.0.1:1/USER456/mentions"));
    assert!(!detail.contains("TOKEN123"));
}
