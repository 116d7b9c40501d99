use cordial::app::App;
use cordial::config::Config;
use cordial::feed::Feed;
use pretty_assertions::assert_eq;

#[test]
fn layout_override_reshapes_the_screen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
        daemon_address = "127.0.0.1:7777"

        [[layout.columns]]
        width_percent = 50.0
        windows = [{ height_percent = 100.0, title = "Servers", feed = "servers" }]

        [[layout.columns]]
        width_percent = 100.0
        windows = [
            { height_percent = 30.0, title = "Channels", feed = "channels" },
            { height_percent = 100.0, title = "History", feed = "history" },
        ]
        "#,
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.daemon_address(), "127.0.0.1:7777");

    let mut app = App::new(&config.layout(), 80, 30).unwrap();
    let columns = app.screen.columns();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].cols().end, 40);
    assert_eq!(columns[1].windows().len(), 2);
    assert_eq!(columns[1].windows()[0].rows().end, 9);
    assert!(app.screen.window_for_feed_mut(Feed::History).is_some());
    assert!(app.screen.window_for_feed_mut(Feed::DirectMessages).is_none());
}

#[test]
fn rejected_layout_never_builds_a_screen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
        [[layout.columns]]
        width_percent = 140.0
        windows = [{ height_percent = 100.0, title = "Too wide" }]
        "#,
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert!(App::new(&config.layout(), 80, 24).is_err());
}
