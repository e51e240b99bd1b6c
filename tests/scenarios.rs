use unique_chars::{is_unique, is_unique_str, ASCII_SIZE};

#[test]
fn harness_samples() {
    assert!(is_unique_str("bar"));
    assert!(!is_unique_str("foobar"));
    assert!(is_unique_str(""));
    assert!(!is_unique_str(&".".repeat(ASCII_SIZE + 1)));
}

#[test]
fn single_characters_are_unique() {
    for code in 0..ASCII_SIZE as u8 {
        assert!(is_unique(&[code]), "code {code}");
    }
}

#[test]
fn full_alphabet_is_unique() {
    let alphabet: Vec<u8> = (0..ASCII_SIZE as u8).collect();
    assert!(is_unique(&alphabet));
    let reversed: Vec<u8> = alphabet.iter().rev().copied().collect();
    assert!(is_unique(&reversed));
}

#[test]
fn full_alphabet_plus_one_is_not_unique() {
    let mut s: Vec<u8> = (0..ASCII_SIZE as u8).collect();
    s.push(b'a');
    assert!(!is_unique(&s));
}

#[test]
fn repeat_at_either_end() {
    assert!(!is_unique(b"abca"));
    assert!(!is_unique(b"aabc"));
    assert!(!is_unique(b"abcc"));
    assert!(!is_unique(&[0, 0]));
    assert!(!is_unique(&[127, 1, 127]));
}

#[test]
fn case_and_punctuation_are_distinct_codes() {
    assert!(is_unique_str("aA"));
    assert!(is_unique_str("The"));
    assert!(is_unique_str("!@#$%^&*()"));
    assert!(!is_unique_str("hello, world"));
}

#[test]
fn repeated_calls_agree() {
    for s in ["bar", "foobar", "", "xyzzy"] {
        assert_eq!(is_unique_str(s), is_unique_str(s));
    }
}
