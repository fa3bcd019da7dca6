use super::*;
use pretty_assertions::assert_eq;

fn row() -> StructValue {
    let d = Descriptor::new(["name", "size"]).unwrap();
    StructValue::new(d, vec![Value::string("a.txt"), Value::string("12")]).unwrap()
}

#[test]
fn test_factory_methods() {
    let s = Value::string("hello");
    assert_eq!(s.as_str(), Some("hello"));

    let list = Value::string_list(["/a", "/b"]);
    assert_eq!(list.as_list().map(<[Value]>::len), Some(2));
    assert_eq!(list.type_name(), "list");

    assert_eq!(Value::from(true).type_name(), "bool");
    assert_eq!(Value::from(row()).type_name(), "struct");
}

#[test]
fn test_value_equality() {
    assert!(Value::string("x").equals(&Value::string("x")));
    assert!(!Value::string("x").equals(&Value::string("y")));
    assert_ne!(Value::Bool(true), Value::string("$true"));
    assert_eq!(
        Value::string_list(["a", "b"]),
        Value::list(vec![Value::string("a"), Value::string("b")])
    );
    assert_ne!(Value::string_list(["a", "b"]), Value::string_list(["b", "a"]));
}

#[test]
fn test_iterate_only_lists() {
    let list = Value::string_list(["a", "b"]);
    let items: Vec<_> = list.iterate().unwrap().filter_map(Value::as_str).collect();
    assert_eq!(items, vec!["a", "b"]);

    assert!(Value::string("ab").iterate().is_none());
    assert!(Value::Bool(false).iterate().is_none());
    assert!(Value::map(BTreeMap::new()).iterate().is_none());
}

#[test]
fn test_ptr_eq() {
    let a = Value::string("x");
    let b = a.clone();
    assert!(a.ptr_eq(&b));
    assert!(!a.ptr_eq(&Value::string("x")));
    assert!(!Value::Bool(true).ptr_eq(&Value::Bool(true)));
}

#[test]
fn test_repr() {
    assert_eq!(Value::Bool(true).repr(), "$true");
    assert_eq!(Value::string("lorem").repr(), "lorem");
    assert_eq!(Value::string("lorem ipsum").repr(), "'lorem ipsum'");
    assert_eq!(Value::list(vec![]).repr(), "[]");
    assert_eq!(Value::string_list(["/a", "b c"]).repr(), "[/a 'b c']");

    let mut entries = BTreeMap::new();
    entries.insert("z".to_string(), Value::string("1"));
    entries.insert("a".to_string(), Value::string_list(["x"]));
    assert_eq!(Value::map(entries).repr(), "[&a=[x] &z=1]");
    assert_eq!(Value::map(BTreeMap::new()).repr(), "[&]");
}

#[test]
fn test_to_text_and_display() {
    assert_eq!(Value::string("lorem ipsum").to_text(), "lorem ipsum");
    assert_eq!(Value::string_list(["a"]).to_text(), "[a]");
    assert_eq!(format!("{}", Value::string("it's")), "it's");
    assert_eq!(format!("{:?}", Value::string("it's")), "'it''s'");
}

#[test]
fn test_index_one_dispatch() {
    let s = Value::from(row());
    assert_eq!(s.index_one(&Value::string("name")), Ok(Value::string("a.txt")));

    let mut entries = BTreeMap::new();
    entries.insert("k".to_string(), Value::string("v"));
    let m = Value::map(entries);
    assert_eq!(m.index_one(&Value::string("k")), Ok(Value::string("v")));
    assert_eq!(
        m.index_one(&Value::string("missing")),
        Err(ValueError::NoSuchKey {
            key: "missing".to_string()
        })
    );

    assert_eq!(
        Value::string_list(["a"]).index_one(&Value::string("0")),
        Err(ValueError::NotIndexable { type_name: "list" })
    );
}

#[test]
fn test_json() {
    let mut entries = BTreeMap::new();
    entries.insert("b".to_string(), Value::Bool(false));
    entries.insert("a".to_string(), Value::string_list(["x", "y"]));
    assert_eq!(
        Value::map(entries).to_json().unwrap(),
        r#"{"a":["x","y"],"b":false}"#
    );
    assert_eq!(
        Value::list(vec![Value::from(row())]).to_json().unwrap(),
        r#"[{"name":"a.txt","size":"12"}]"#
    );
}
