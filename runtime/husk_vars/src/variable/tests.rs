use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_cell_get_set() {
    let cell = Cell::new(Value::string("a"));
    assert_eq!(cell.get().unwrap(), Value::string("a"));
    cell.set(Value::string_list(["b"])).unwrap();
    assert_eq!(cell.get().unwrap(), Value::string_list(["b"]));
}

#[test]
fn test_read_only_rejects_set() {
    let ro = ReadOnly::new(Value::Bool(true));
    assert!(matches!(
        ro.set(Value::Bool(false)),
        Err(VarError::ReadOnlyAssignment)
    ));
    assert_eq!(ro.get().unwrap(), Value::Bool(true));
}

#[test]
fn test_var_ref_dispatch() {
    let r = VarRef::new(Cell::new(Value::string("x")));
    let alias = r.clone();
    alias.set(Value::string("y")).unwrap();
    assert_eq!(r.get().unwrap(), Value::string("y"));
    assert!(r.same(&alias));
    assert!(!r.same(&VarRef::new(Cell::new(Value::string("y")))));
}
