use cordial::app::App;

/// Build a minimal `App` over the stock layout for integration testing.
/// No daemon connection, no terminal -- just state.
pub fn test_app() -> App {
    App::test_default()
}

/// Owned lines from string literals.
pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}
