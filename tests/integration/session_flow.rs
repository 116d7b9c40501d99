use crate::helpers::{lines, test_app};
use cordial::app::connect::{FeedEvent, LinkState, spawn_poller};
use cordial::daemon::client::DaemonClient;
use cordial::daemon::server;
use cordial::feed::Feed;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Daemon on an ephemeral loopback port, plus a client pointed at it.
async fn start_daemon() -> (DaemonClient, CancellationToken, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap().to_string();
    let shutdown = CancellationToken::new();
    let server_shutdown = shutdown.clone();
    let task = tokio::spawn(async move {
        server::serve(listener, server_shutdown).await.unwrap();
    });
    (DaemonClient::new(address), shutdown, task)
}

#[tokio::test]
async fn publish_poll_acknowledge_round_trip() {
    let (client, _shutdown, task) = start_daemon().await;

    client.publish(Feed::Servers, lines(&["rust-lang", "tokio"])).await.unwrap();
    let updates = client.poll(&BTreeMap::new()).await.unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].feed, Feed::Servers);
    assert_eq!(updates[0].lines, lines(&["rust-lang", "tokio"]));

    // Acknowledged revisions stay quiet until the next mutation.
    let seen = BTreeMap::from([(Feed::Servers, updates[0].revision)]);
    assert!(client.poll(&seen).await.unwrap().is_empty());

    client.append(Feed::Servers, lines(&["ratatui"])).await.unwrap();
    let updates = client.poll(&seen).await.unwrap();
    assert_eq!(updates[0].lines, lines(&["rust-lang", "tokio", "ratatui"]));

    assert!(client.ping().await.is_ok());
    client.shutdown().await.unwrap();
    task.await.unwrap();
}

#[tokio::test]
async fn unreachable_daemon_is_a_plain_error() {
    // Nothing listens on the loopback discard port.
    let client = DaemonClient::new("127.0.0.1:9");
    assert!(client.poll(&BTreeMap::new()).await.is_err());
}

#[tokio::test]
async fn malformed_request_line_gets_an_error_response() {
    use tokio::io::{AsyncBufReadExt as _, AsyncWriteExt as _, BufReader};

    let (client, _shutdown, task) = start_daemon().await;
    let stream = tokio::net::TcpStream::connect(client.address()).await.unwrap();
    let (read, mut write) = stream.into_split();
    write.write_all(b"this is not json\n").await.unwrap();
    let mut reply = String::new();
    BufReader::new(read).read_line(&mut reply).await.unwrap();
    assert!(reply.contains("malformed request"));

    client.shutdown().await.unwrap();
    task.await.unwrap();
}

#[tokio::test]
async fn poller_carries_updates_into_the_panes() {
    let (client, _shutdown, task) = start_daemon().await;
    client.publish(Feed::History, lines(&["alice: hi", "bob: hello"])).await.unwrap();

    let mut app = test_app();
    let (events_tx, mut events_rx) = tokio::sync::mpsc::unbounded_channel();
    let poller = spawn_poller(client.clone(), events_tx);

    // First poll delivers the update, then the link-up notice.
    let mut saw_update = false;
    let mut saw_online = false;
    while !(saw_update && saw_online) {
        let event = tokio::time::timeout(Duration::from_secs(5), events_rx.recv())
            .await
            .expect("poller went quiet")
            .expect("poller hung up");
        match &event {
            FeedEvent::Update(snapshot) if snapshot.feed == Feed::History => saw_update = true,
            FeedEvent::Link(LinkState::Online) => saw_online = true,
            _ => {}
        }
        app.apply_feed(event);
    }

    assert_eq!(app.link, LinkState::Online);
    let window = app.screen.window_for_feed_mut(Feed::History).unwrap();
    let first_line: Vec<&str> = window.wrap().take(1).collect();
    assert_eq!(first_line, ["alice: hi"]);

    poller.abort();
    client.shutdown().await.unwrap();
    task.await.unwrap();
}
