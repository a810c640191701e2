use super::scan;

#[test]
fn offset_date_times() {
    assert_eq!(scan(b"1979-05-27T07:32:00Z"), Some(20));
    assert_eq!(scan(b"1979-05-27T00:32:00-07:00"), Some(25));
    assert_eq!(scan(b"1979-05-27T00:32:00+01:30"), Some(25));
    assert_eq!(scan(b"1979-05-27T00:32:00.999999Z"), Some(27));
}

#[test]
fn local_date_times() {
    assert_eq!(scan(b"1979-05-27T07:32:00"), Some(19));
    assert_eq!(scan(b"1979-05-27 07:32:00"), Some(19));
    assert_eq!(scan(b"1979-05-27 07:32:00.5"), Some(21));
}

#[test]
fn local_dates_and_times() {
    assert_eq!(scan(b"1979-05-27"), Some(10));
    assert_eq!(scan(b"07:32:00"), Some(8));
    assert_eq!(scan(b"07:32:00.123456"), Some(15));
}

#[test]
fn space_separator_needs_a_time() {
    // a space followed by something else stays a local date
    assert_eq!(scan(b"1979-05-27 # note"), Some(10));
    assert_eq!(scan(b"1979-05-27 later"), Some(10));
    // a dangling T consumes only the date; the caller rejects the leftover
    assert_eq!(scan(b"1979-05-27T"), Some(10));
}

#[test]
fn malformed_fractions_are_left_behind() {
    // no digits after the dot
    assert_eq!(scan(b"07:32:00."), Some(8));
    // more than six digits
    assert_eq!(scan(b"07:32:00.1234567"), Some(8));
}

#[test]
fn shape_violations() {
    assert_eq!(scan(b"79-05-27"), None);
    assert_eq!(scan(b"1979-5-27"), None);
    assert_eq!(scan(b"1979-05-2"), None);
    assert_eq!(scan(b"07:3:00"), None);
    assert_eq!(scan(b"0732:00"), None);
    assert_eq!(scan(b"hello"), None);
    assert_eq!(scan(b""), None);
}

#[test]
fn malformed_offsets_are_left_behind() {
    // a bare sign is not an offset
    assert_eq!(scan(b"1979-05-27T07:32:00+"), Some(19));
    assert_eq!(scan(b"1979-05-27T07:32:00+07"), Some(19));
    // lowercase z is not an offset
    assert_eq!(scan(b"1979-05-27T07:32:00z"), Some(19));
}

#[test]
fn no_calendar_validation() {
    assert_eq!(scan(b"2021-02-31"), Some(10));
    assert_eq!(scan(b"9999-99-99"), Some(10));
    assert_eq!(scan(b"00:00:99"), Some(8));
}
