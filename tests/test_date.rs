use std::time::{Duration, SystemTime, UNIX_EPOCH};

use mpweb::http::date::{format_http_date, is_greater_than, parse_http_date};

#[test]
fn test_format_fixed_timestamp() {
    // 2026-10-05T14:03:09Z
    let ts = UNIX_EPOCH + Duration::from_secs(1_791_208_989);

    assert_eq!(format_http_date(Some(ts)), "Mon, 05 Oct 2026 14:03:09 GMT");
}

#[test]
fn test_format_epoch() {
    assert_eq!(format_http_date(Some(UNIX_EPOCH)), "Thu, 01 Jan 1970 00:00:00 GMT");
}

#[test]
fn test_format_now_parses_back() {
    let now = format_http_date(None);

    assert!(now.ends_with(" GMT"));
    assert!(parse_http_date(&now).is_ok());
}

#[test]
fn test_format_truncates_to_seconds() {
    let ts = UNIX_EPOCH + Duration::from_millis(1_500);

    assert_eq!(format_http_date(Some(ts)), "Thu, 01 Jan 1970 00:00:01 GMT");
}

#[test]
fn test_is_greater_than_is_strict() {
    let earlier = "Sun, 04 Oct 2026 10:00:00 GMT";
    let later = "Mon, 05 Oct 2026 14:03:09 GMT";

    assert!(is_greater_than(later, earlier).unwrap());
    assert!(!is_greater_than(earlier, later).unwrap());
    assert!(!is_greater_than(later, later).unwrap());
}

#[test]
fn test_is_greater_than_compares_across_years() {
    assert!(is_greater_than(
        "Fri, 01 Jan 2027 00:00:00 GMT",
        "Thu, 31 Dec 2026 23:59:59 GMT"
    )
    .unwrap());
}

#[test]
fn test_is_greater_than_rejects_malformed_dates() {
    let good = "Mon, 05 Oct 2026 14:03:09 GMT";

    assert!(is_greater_than("yesterday", good).is_err());
    assert!(is_greater_than(good, "2026-10-05T14:03:09Z").is_err());
}

#[test]
fn test_format_round_trips_through_parse() {
    let ts = SystemTime::now();
    let formatted = format_http_date(Some(ts));
    let reparsed = parse_http_date(&formatted).unwrap();

    assert_eq!(reparsed.format("%a, %d %b %Y %H:%M:%S GMT").to_string(), formatted);
}
