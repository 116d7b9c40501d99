use crate::helpers::{lines, test_app};
use cordial::app::connect::FeedEvent;
use cordial::daemon::wire::FeedSnapshot;
use cordial::feed::Feed;
use cordial::layout::{ColumnSpec, LayoutSpec, PaneSpec, Screen};
use pretty_assertions::assert_eq;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

fn pane(height_percent: f64, title: &str) -> PaneSpec {
    PaneSpec { height_percent, title: title.to_owned(), feed: None }
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (buf.area.x..buf.area.right())
        .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_owned()))
        .collect()
}

// Column partitioning

#[test]
fn three_columns_at_cumulative_quarter_widths() {
    let layout = LayoutSpec {
        columns: vec![
            ColumnSpec { width_percent: 25.0, windows: vec![pane(100.0, "left")] },
            ColumnSpec { width_percent: 75.0, windows: vec![pane(100.0, "middle")] },
            ColumnSpec { width_percent: 100.0, windows: vec![pane(100.0, "right")] },
        ],
    };
    let screen = Screen::new(&layout, 100, 24).unwrap();
    let bounds: Vec<(u16, u16)> =
        screen.columns().iter().map(|c| (c.cols().start, c.cols().end)).collect();
    assert_eq!(bounds, [(0, 25), (25, 75), (75, 100)]);
}

#[test]
fn resize_storm_keeps_the_tiling_invariants() {
    let mut app = test_app();
    for (width, height) in [(10u16, 5u16), (200, 60), (1, 1), (80, 24), (0, 0), (137, 43)] {
        app.screen.resize(width, height);
        let columns = app.screen.columns();
        assert_eq!(columns[0].cols().start, 0);
        for pair in columns.windows(2) {
            assert_eq!(pair[0].cols().end, pair[1].cols().start, "{width}x{height}");
        }
        for column in columns {
            let windows = column.windows();
            assert_eq!(windows[0].rows().start, 0);
            for pair in windows.windows(2) {
                assert_eq!(pair[0].rows().end, pair[1].rows().start, "{width}x{height}");
            }
        }
    }
}

// Wrapping through a real pane

#[test]
fn feed_lines_wrap_at_the_interior_width() {
    let layout = LayoutSpec {
        columns: vec![ColumnSpec {
            width_percent: 100.0,
            windows: vec![PaneSpec {
                height_percent: 100.0,
                title: "History".to_owned(),
                feed: Some(Feed::History),
            }],
        }],
    };
    // Interior width: 5 - 2 = 3.
    let mut screen = Screen::new(&layout, 5, 10).unwrap();
    let window = screen.window_for_feed_mut(Feed::History).unwrap();
    window.set_source(lines(&["abcdef"]));
    let wrapped: Vec<&str> = window.wrap().collect();
    assert_eq!(wrapped, ["abc", "def"]);
}

// Rendering

#[test]
fn empty_pane_renders_frame_and_title_only() {
    let layout = LayoutSpec {
        columns: vec![ColumnSpec { width_percent: 100.0, windows: vec![pane(100.0, "Log")] }],
    };
    let screen = Screen::new(&layout, 8, 4).unwrap();
    let mut buf = Buffer::empty(Rect::new(0, 0, 8, 4));
    screen.render(&mut buf);
    assert_eq!(row_text(&buf, 0), "┌Log───┐");
    assert_eq!(row_text(&buf, 1), "│      │");
    assert_eq!(row_text(&buf, 2), "│      │");
    assert_eq!(row_text(&buf, 3), "└──────┘");
}

#[test]
fn default_layout_renders_adjacent_borders() {
    let mut app = test_app();
    app.screen.resize(100, 30);
    let mut buf = Buffer::empty(Rect::new(0, 0, 100, 30));
    app.screen.render(&mut buf);
    let top = row_text(&buf, 0);
    // Column boundaries: [0,20) [20,40) [40,100).
    assert_eq!(top.chars().next().unwrap(), '┌');
    assert_eq!(top.chars().nth(19).unwrap(), '┐');
    assert_eq!(top.chars().nth(20).unwrap(), '┌');
    assert_eq!(top.chars().nth(99).unwrap(), '┐');
    // The left column splits at 50% of 30 rows.
    let split = row_text(&buf, 15);
    assert_eq!(split.chars().next().unwrap(), '┌');
}

// Scroll policy end to end

#[test]
fn overshooting_scroll_is_rejected_through_the_app() {
    let mut app = test_app();
    // The focused pane ends at 50% of 6 rows: a one-line viewport.
    app.screen.resize(40, 6);
    app.apply_feed(FeedEvent::Update(FeedSnapshot {
        feed: Feed::DirectMessages,
        revision: 1,
        lines: lines(&["a", "b", "c", "d", "e"]),
    }));
    let window = app.focused_window_mut().unwrap();
    assert_eq!(window.visible(), 0..1);
    window.scroll(10);
    assert_eq!(window.visible(), 0..1);
    window.scroll(4);
    assert_eq!(window.visible(), 4..5);
}
