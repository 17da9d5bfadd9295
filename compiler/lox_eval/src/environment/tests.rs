use super::*;
use pretty_assertions::assert_eq;

#[test]
fn define_then_lookup() {
    let mut env = Environment::new();
    assert!(env.values.is_empty());

    env.define("x", Value::Number(1.0));
    assert_eq!(env.lookup("x"), Some(&Value::Number(1.0)));
    assert_eq!(env.values.len(), 1);
}

#[test]
fn lookup_missing_is_none() {
    let env = Environment::new();
    assert_eq!(env.lookup("y"), None);
}

#[test]
fn redefine_overwrites() {
    let mut env = Environment::new();
    env.define("x", Value::Number(1.0));
    env.define(String::from("x"), Value::from("two"));
    assert_eq!(env.lookup("x"), Some(&Value::from("two")));
    assert_eq!(env.values.len(), 1);
}

#[test]
fn names_are_case_sensitive() {
    let mut env = Environment::new();
    env.define("name", Value::Nil);
    assert_eq!(env.lookup("Name"), None);
}
