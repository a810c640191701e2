use super::Span;

#[test]
fn construction() {
    let s = Span::new(2, 7);
    assert_eq!(s.start, 2);
    assert_eq!(s.end, 7);
    assert!(!s.is_empty());
    assert!(Span::default().is_empty());
}

#[test]
fn range_conversions() {
    let s = Span::new(1, 4);
    let r: std::ops::Range<u32> = s.into();
    assert_eq!(r, 1..4);
    let r: std::ops::Range<usize> = s.into();
    assert_eq!(r, 1..4);
    let pair: (u32, u32) = s.into();
    assert_eq!(pair, (1, 4));
    let pair: (usize, usize) = s.into();
    assert_eq!(pair, (1, 4));

    assert_eq!(Span::from(3u32..9u32), Span::new(3, 9));
}
