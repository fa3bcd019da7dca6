use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_bareword_is_unquoted() {
    assert_eq!(quote("lorem"), "lorem");
    assert_eq!(quote("/usr/local/bin"), "/usr/local/bin");
    assert_eq!(quote("/a:/b"), "/a:/b");
    assert_eq!(quote("a-b_c.d@e+f%g,h!"), "a-b_c.d@e+f%g,h!");
}

#[test]
fn test_empty_string_is_quoted() {
    assert_eq!(quote(""), "''");
}

#[test]
fn test_leading_tilde_is_quoted() {
    assert_eq!(quote("~user"), "'~user'");
    assert_eq!(quote("a~b"), "a~b");
}

#[test]
fn test_single_quote_doubles_embedded_quote() {
    assert_eq!(quote("lorem ipsum"), "'lorem ipsum'");
    assert_eq!(quote("it's"), "'it''s'");
    assert_eq!(quote("[&]"), "'[&]'");
}

#[test]
fn test_control_characters_use_double_quotes() {
    assert_eq!(quote("a\nb"), "\"a\\nb\"");
    assert_eq!(quote("tab\there"), "\"tab\\there\"");
    assert_eq!(quote("nul\0"), "\"nul\\x00\"");
    assert_eq!(quote("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
}

#[test]
fn test_non_ascii_control_uses_unicode_escape() {
    assert_eq!(quote("\u{85}"), "\"\\u0085\"");
    assert_eq!(quote("a\u{9f}b"), "\"a\\u009fb\"");
    // Non-control non-ASCII text stays bare.
    assert_eq!(quote("café"), "café");
}
