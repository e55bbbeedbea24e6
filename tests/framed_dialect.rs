//! Integration tests for the framed (`OK <len>` envelope) dialect.

mod common;

use cmdsrv_proto::{Dialect, Reply};
use common::TestServer;

#[tokio::test]
async fn test_version_envelope() {
    let server = TestServer::spawn(Dialect::Framed)
        .await
        .expect("Failed to spawn test server");
    let mut client = server.connect().await.expect("Failed to connect");

    let reply = client.request("version").await.expect("No version reply");
    assert_eq!(reply, Reply::Ok("version: 1.0".into()));
}

#[tokio::test]
async fn test_help_lists_sorted_names() {
    let server = TestServer::spawn(Dialect::Framed).await.unwrap();
    let mut client = server.connect().await.unwrap();

    let reply = client.request("help").await.unwrap();
    assert_eq!(reply.items(), vec!["add", "echo", "help", "quit", "version"]);
}

#[tokio::test]
async fn test_echo_and_add_are_framed() {
    let server = TestServer::spawn(Dialect::Framed).await.unwrap();
    let mut client = server.connect().await.unwrap();

    let reply = client.request("echo hello world").await.unwrap();
    assert_eq!(reply.items(), vec!["hello", "world"]);

    let reply = client.request("add 2 x 4").await.unwrap();
    assert_eq!(reply, Reply::Ok("6".into()));
}

#[tokio::test]
async fn test_unknown_command() {
    let server = TestServer::spawn(Dialect::Framed).await.unwrap();
    let mut client = server.connect().await.unwrap();

    assert_eq!(client.request("foo").await.unwrap(), Reply::UnknownCommand);
    // Plain-dialect names are unknown here.
    assert_eq!(client.request("command-list").await.unwrap(), Reply::UnknownCommand);
    assert_eq!(client.request("exit").await.unwrap(), Reply::UnknownCommand);

    // Still open.
    assert_eq!(
        client.request("version").await.unwrap(),
        Reply::Ok("version: 1.0".into())
    );
}

#[tokio::test]
async fn test_quit_closes_without_reply() {
    let server = TestServer::spawn(Dialect::Framed).await.unwrap();
    let mut client = server.connect().await.unwrap();

    client.send("quit").await.unwrap();
    client.expect_closed().await.expect("connection should close");
}
