use super::*;

#[test]
fn extract_host_strips_scheme_and_query() {
    assert_eq!(
        extract_host("https://www.gesher-theatre.co.il/he/company/a/calendar/?Month=1&Year=2026"),
        "www.gesher-theatre.co.il"
    );
}

#[test]
fn extract_host_keeps_plain_http_host() {
    assert_eq!(extract_host("http://localhost:8080/page"), "localhost");
}

#[test]
fn extract_host_fallback_no_scheme() {
    assert_eq!(extract_host("gesher-theatre.co.il"), "gesher-theatre.co.il");
}

#[test]
fn client_builds_with_custom_user_agent() {
    assert!(CalendarClient::new(5, "gesher-watch-test/0.1").is_ok());
}
