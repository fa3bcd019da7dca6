use super::*;
use crate::env::MemoryEnv;
use crate::store::MemoryStore;
use crate::variable::{Cell, ReadOnly};
use pretty_assertions::assert_eq;

fn sandbox() -> (Bindings, MemoryEnv) {
    let env = MemoryEnv::new().with("PATH", "/a:/b");
    let config = RuntimeConfig::default().with_separator(':');
    (Bindings::with_env(&config, &env), env)
}

#[test]
fn test_default_config_binds_paths() {
    let (bindings, _env) = sandbox();
    assert_eq!(
        bindings.get("paths").unwrap(),
        Value::string_list(["/a", "/b"])
    );
}

#[test]
fn test_assign_paths_writes_env() {
    let (bindings, env) = sandbox();
    bindings
        .assign("paths", Value::string_list(["/x", "/y"]))
        .unwrap();
    assert_eq!(env.get("PATH").unwrap(), "/x:/y");
}

#[test]
fn test_extra_env_list() {
    let env = MemoryEnv::new().with("MANPATH", "/m1:/m2");
    let config = RuntimeConfig::default()
        .with_separator(':')
        .with_env_list("manpaths", "MANPATH");
    let bindings = Bindings::with_env(&config, &env);
    assert_eq!(
        bindings.get("manpaths").unwrap(),
        Value::string_list(["/m1", "/m2"])
    );
}

#[test]
fn test_undefined_variable() {
    let (bindings, _env) = sandbox();
    assert!(matches!(
        bindings.get("nope"),
        Err(VarError::UndefinedVariable { ref name }) if name == "nope"
    ));
    assert!(matches!(
        bindings.assign("nope", Value::Bool(true)),
        Err(VarError::UndefinedVariable { .. })
    ));
}

#[test]
fn test_define_and_rebind() {
    let (mut bindings, _env) = sandbox();
    bindings.define("x", Cell::new(Value::string("1")));
    bindings.assign("x", Value::string("2")).unwrap();
    assert_eq!(bindings.get("x").unwrap(), Value::string("2"));

    bindings.define("x", ReadOnly::new(Value::string("fixed")));
    assert!(matches!(
        bindings.assign("x", Value::string("3")),
        Err(VarError::ReadOnlyAssignment)
    ));
    assert_eq!(bindings.get("x").unwrap(), Value::string("fixed"));
}

#[test]
fn test_resolve_returns_bound_handle() {
    let (mut bindings, _env) = sandbox();
    let cell = VarRef::new(Cell::new(Value::Bool(true)));
    bindings.bind("flag", cell.clone());
    let resolved = bindings.resolve("flag").unwrap();
    assert!(resolved.same(&cell));
}

#[test]
fn test_shared_namespace_without_store() {
    let (bindings, _env) = sandbox();
    assert!(bindings.resolve("shared:x").is_some());
    assert!(matches!(
        bindings.get("shared:x"),
        Err(VarError::RemoteUnavailable)
    ));
}

#[test]
fn test_shared_namespace_with_store() {
    let store = MemoryStore::new();
    let (bindings, _env) = sandbox();
    let bindings = bindings.with_store(StoreClient::new(store.clone()));
    bindings
        .assign("shared:greeting", Value::string("hello"))
        .unwrap();
    assert_eq!(
        bindings.get("shared:greeting").unwrap(),
        Value::string("hello")
    );
    assert_eq!(
        crate::store::SharedStore::shared_var(&store, "greeting"),
        Ok("hello".to_string())
    );
}
