use std::thread;

use tiny_http::{Header, Response, Server};

use defi_scan::config::LlamaConfig;
use defi_scan::errors::RemoteFetchError;
use defi_scan::llama::{DEFAULT_HISTORY_START, LlamaClient};

/// Spawn a throwaway HTTP server answering every request with the same
/// canned response. The thread exits when the server is dropped with the
/// test process.
fn canned_server(status: u16, body: &'static str) -> String {
    let server = Server::http("127.0.0.1:0").expect("binding test server");
    let addr = server.server_addr().to_ip().expect("tcp listener");
    thread::spawn(move || {
        for request in server.incoming_requests() {
            let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                .expect("static header");
            let response = Response::from_string(body)
                .with_status_code(status)
                .with_header(header);
            let _ = request.respond(response);
        }
    });
    format!("http://{addr}")
}

fn client(base_url: String) -> LlamaClient {
    LlamaClient::new(&LlamaConfig { base_url }).expect("building client")
}

// ── fetch all protocols ──────────────────────────────────────────────

const PROTOCOLS_BODY: &str = r#"[
  {"slug":"uniswap-v3","name":"Uniswap V3","tvl":3500000000.0,"logo":"https://icons.llama.fi/uniswap.png","category":"Dexes","chains":["Ethereum","Arbitrum"],"chainTvls":{"Ethereum":3000000000.0,"Arbitrum":500000000.0}},
  {"slug":"liquity","name":"Liquity","tvl":600000000.0,"logo":null,"category":"CDP","chains":["Ethereum"],"chainTvls":{"Ethereum":600000000.0}}
]"#;

#[tokio::test]
async fn all_protocols_decodes_in_api_order() {
    let client = client(canned_server(200, PROTOCOLS_BODY));

    let protocols = client.all_protocols().await.expect("fetching protocols");

    assert_eq!(protocols.len(), 2);
    assert_eq!(protocols[0].slug, "uniswap-v3");
    assert_eq!(protocols[1].slug, "liquity");
    assert_eq!(protocols[0].chain_tvls["Arbitrum"], 500_000_000.0);
    assert_eq!(protocols[0].category.as_deref(), Some("Dexes"));
    assert!(protocols[1].logo.is_none());
}

#[tokio::test]
async fn non_success_status_is_a_typed_error_carrying_the_url() {
    let client = client(canned_server(500, "{}"));

    let err = client.all_protocols().await.unwrap_err();

    match &err {
        RemoteFetchError::Status { status, url } => {
            assert_eq!(*status, 500);
            assert!(url.ends_with("/protocols"), "unexpected url {url}");
        }
        other => panic!("expected a status error, got {other}"),
    }
}

#[tokio::test]
async fn undecodable_body_is_a_typed_error() {
    let client = client(canned_server(200, "not json"));

    let err = client.all_protocols().await.unwrap_err();
    assert!(matches!(&err, RemoteFetchError::Decode { .. }), "got {err}");
}

// ── historical chain TVL ─────────────────────────────────────────────

const HISTORY_BODY: &str = r#"[
  {"date":1700000000,"tvl":10.0},
  {"date":1700086400,"tvl":11.0},
  {"date":1700172800,"tvl":12.0}
]"#;

#[tokio::test]
async fn history_keeps_points_strictly_after_the_bound() {
    let client = client(canned_server(200, HISTORY_BODY));

    let points = client
        .historical_chain_tvl(Some(1_700_086_400))
        .await
        .expect("fetching history");

    // The point equal to the bound is excluded.
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].date, 1_700_172_800);
}

const EPOCH_EDGE_BODY: &str = r#"[
  {"date":1577833200,"tvl":1.0},
  {"date":1577919600,"tvl":2.0}
]"#;

#[tokio::test]
async fn history_defaults_to_the_2020_epoch() {
    let client = client(canned_server(200, EPOCH_EDGE_BODY));

    let points = client
        .historical_chain_tvl(None)
        .await
        .expect("fetching history");

    assert_eq!(points.len(), 1);
    assert!(points[0].date > DEFAULT_HISTORY_START);
}

#[tokio::test]
async fn history_past_the_newest_point_is_empty_not_an_error() {
    let client = client(canned_server(200, HISTORY_BODY));

    let points = client
        .historical_chain_tvl(Some(2_000_000_000))
        .await
        .expect("fetching history");

    assert!(points.is_empty());
}

// ── single-protocol TVL ──────────────────────────────────────────────

#[tokio::test]
async fn protocol_tvl_reads_the_aggregate_figure() {
    let body = r#"{"id":"2196","name":"Uniswap V3","tvl":3500000000.0,"category":"Dexes"}"#;
    let client = client(canned_server(200, body));

    let tvl = client.protocol_tvl("uniswap-v3").await.expect("fetching tvl");
    assert_eq!(tvl, 3_500_000_000.0);
}

#[tokio::test]
async fn unknown_slug_is_a_status_error() {
    let client = client(canned_server(404, r#"{"message":"protocol not found"}"#));

    let err = client.protocol_tvl("definitely-not-real").await.unwrap_err();

    match &err {
        RemoteFetchError::Status { status, url } => {
            assert_eq!(*status, 404);
            assert!(url.ends_with("/protocol/definitely-not-real"));
        }
        other => panic!("expected a status error, got {other}"),
    }
}

#[tokio::test]
async fn null_tvl_reads_as_zero() {
    let client = client(canned_server(200, r#"{"name":"Odd","tvl":null}"#));

    let tvl = client.protocol_tvl("odd").await.expect("fetching tvl");
    assert_eq!(tvl, 0.0);
}
