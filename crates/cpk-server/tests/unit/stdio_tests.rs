//! JSON-lines transport tests

use crate::test_utils::server;
use cpk_server::PluginResponse;
use cpk_server::constants::PLUGIN_REQUEST_CANCELLED;
use cpk_server::transport::serve_lines;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;

fn parse_output(output: &str) -> Vec<PluginResponse> {
    output
        .lines()
        .map(|line| serde_json::from_str(line).expect("one response per line"))
        .collect()
}

async fn serve(input: &'static str) -> Vec<PluginResponse> {
    let (writer, mut output) = tokio::io::duplex(1 << 20);
    let collector = tokio::spawn(async move {
        let mut text = String::new();
        output.read_to_string(&mut text).await.unwrap();
        text
    });
    serve_lines(server(), input.as_bytes(), writer, CancellationToken::new())
        .await
        .unwrap();
    parse_output(&collector.await.unwrap())
}

#[tokio::test]
async fn test_one_response_per_request() {
    let responses = serve(concat!(
        r#"{"id":1,"method":"list_rules"}"#,
        "\n\n",
        r#"{"id":2,"method":"list_categories"}"#,
        "\n",
        "garbage\n",
    ))
    .await;

    assert_eq!(responses.len(), 3);
    let mut ids: Vec<Option<u64>> = responses.iter().map(|r| r.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![None, Some(1), Some(2)]);
}

#[tokio::test]
async fn test_slow_check_does_not_block_listing() {
    let responses = serve(concat!(
        r#"{"id":1,"method":"check","params":{"rule_ids":["FILE_SLOW"],"files":[{"name":"a.proto"}]}}"#,
        "\n",
        r#"{"id":2,"method":"list_categories"}"#,
        "\n",
    ))
    .await;

    let ids: Vec<Option<u64>> = responses.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![Some(2), Some(1)]);
    let check = responses[1].result.as_ref().unwrap();
    assert_eq!(check["annotations"][0]["message"], "saw a.proto");
}

#[tokio::test]
async fn test_empty_input_writes_nothing() {
    assert!(serve("").await.is_empty());
}

#[tokio::test]
async fn test_shutdown_cancels_in_flight_requests() {
    let (mut client, server_side) = tokio::io::duplex(1 << 16);
    let (writer, mut output) = tokio::io::duplex(1 << 20);
    let shutdown = CancellationToken::new();

    let serving = tokio::spawn(serve_lines(
        server(),
        BufReader::new(server_side),
        writer,
        shutdown.clone(),
    ));
    client
        .write_all(b"{\"id\":5,\"method\":\"check\",\"params\":{\"rule_ids\":[\"FILE_PARKED\"]}}\n")
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    shutdown.cancel();

    tokio::time::timeout(Duration::from_secs(5), serving)
        .await
        .expect("serve should stop after shutdown")
        .unwrap()
        .unwrap();
    drop(client);

    let mut text = String::new();
    output.read_to_string(&mut text).await.unwrap();
    let responses = parse_output(&text);
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].id, Some(5));
    assert_eq!(
        responses[0].error.as_ref().unwrap().code,
        PLUGIN_REQUEST_CANCELLED
    );
}
