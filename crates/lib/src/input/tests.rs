use super::{ErrorKind, IStr, W};

#[test]
fn test_words_and_integers() {
    let mut input = IStr::from_static(b"  R   42\t");
    let (W(word), n) = input.next::<(W<&str>, u32)>().unwrap();
    assert_eq!(word, "R");
    assert_eq!(n, 42);
    assert!(input.try_next::<W<&str>>().unwrap().is_none());
}

#[test]
fn test_lines() {
    let mut input = IStr::from_static(b"1 2\n3 4\r\n5 6\n\n");
    let mut lines = Vec::new();

    while let Some(line) = input.try_line::<(u32, u32)>().unwrap() {
        lines.push(line);
    }

    assert_eq!(lines, [(1, 2), (3, 4), (5, 6)]);
    assert!(input.finish().is_ok());
}

#[test]
fn test_not_integer() {
    let mut input = IStr::from_static(b"U x");
    let error = input.next::<(W<&str>, u32)>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger("x")));
}

#[test]
fn test_missing_tuple_element() {
    let mut input = IStr::from_static(b"U\n");
    let error = input.try_line::<(W<&str>, u32)>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedInteger));
}

#[test]
fn test_trailing_input() {
    let mut input = IStr::from_static(b"1 2 3\n");
    let error = input.try_line::<(u32, u32)>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::TrailingInput));

    let mut input = IStr::from_static(b"1 2\n\n3 4\n");
    assert_eq!(input.try_line::<(u32, u32)>().unwrap(), Some((1, 2)));
    assert_eq!(input.try_line::<(u32, u32)>().unwrap(), None);
    let error = input.finish().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::TrailingInput));
}
