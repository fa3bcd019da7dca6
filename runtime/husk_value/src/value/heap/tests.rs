use super::*;
use crate::{Descriptor, StructValue, Value};
use pretty_assertions::assert_eq;

#[test]
fn test_string_payload_derefs_to_str() {
    let Value::Str(h) = Value::string("/usr/bin") else {
        panic!("expected a string value");
    };
    assert_eq!(h.as_str(), "/usr/bin");
    assert_eq!(AsRef::<String>::as_ref(&h), "/usr/bin");
}

#[test]
fn test_cloned_list_shares_payload() {
    let list = Value::string_list(["/a", "/b"]);
    let copy = list.clone();
    let (Value::List(a), Value::List(b)) = (&list, &copy) else {
        panic!("expected list values");
    };
    assert!(Heap::ptr_eq(a, b));
    assert!(list.ptr_eq(&copy));
}

#[test]
fn test_assoc_shares_untouched_payloads() {
    let d = Descriptor::new(["name", "paths"]).unwrap();
    let paths = Value::string_list(["/a", "/b"]);
    let s = StructValue::new(d, vec![Value::string("lorem"), paths.clone()]).unwrap();

    let updated = s.assoc(&Value::string("name"), Value::string("ipsum")).unwrap();
    // The replaced field is a new payload; the other one is the same list.
    assert!(!updated.fields()[0].ptr_eq(&s.fields()[0]));
    assert!(updated.fields()[1].ptr_eq(&paths));
    assert!(s.fields()[1].ptr_eq(&paths));
}

#[test]
fn test_separate_payloads_compare_by_contents() {
    let a = Value::string_list(["/a"]);
    let b = Value::string_list(["/a"]);
    assert_eq!(a, b);
    assert!(!a.ptr_eq(&b));
    assert_ne!(a, Value::string_list(["/b"]));
}
