use super::*;
use pretty_assertions::assert_eq;

fn name(raw: u32) -> Name {
    Name::from_raw(raw)
}

#[test]
fn define_and_get_in_current_frame() {
    let mut env = Environment::new();
    env.define(name(1), Value::Number(1.0));
    assert_eq!(env.get(name(1)), Some(Value::Number(1.0)));
    assert_eq!(env.get(name(2)), None);
}

#[test]
fn redefinition_overwrites() {
    let mut env = Environment::new();
    env.define(name(1), Value::Number(1.0));
    env.define(name(1), Value::string("two"));
    assert_eq!(env.get(name(1)), Some(Value::string("two")));
}

#[test]
fn get_walks_the_chain() {
    let mut env = Environment::new();
    env.define(name(1), Value::Number(1.0));
    let child = ScopeRef::new(Scope::with_parent(env.current().clone()));
    let previous = env.swap_current(child);
    assert_eq!(env.get(name(1)), Some(Value::Number(1.0)));
    env.swap_current(previous);
}

#[test]
fn get_at_walks_exactly_distance_links() {
    let mut env = Environment::new();
    env.define(name(1), Value::Number(0.0));
    let child = ScopeRef::new(Scope::with_parent(env.current().clone()));
    env.swap_current(child);
    env.define(name(1), Value::Number(1.0));

    // Distance 0 sees the shadowing inner binding, distance 1 the outer.
    assert_eq!(env.get_at(0, name(1)), Some(Value::Number(1.0)));
    assert_eq!(env.get_at(1, name(1)), Some(Value::Number(0.0)));
}

#[test]
fn assign_never_creates_a_binding() {
    let mut env = Environment::new();
    assert!(!env.assign(name(1), Value::Number(1.0)));
    env.define(name(1), Value::Number(1.0));
    assert!(env.assign(name(1), Value::Number(2.0)));
    assert_eq!(env.get(name(1)), Some(Value::Number(2.0)));
}

#[test]
fn assign_at_writes_the_ancestor_frame() {
    let mut env = Environment::new();
    env.define(name(1), Value::Number(0.0));
    let child = ScopeRef::new(Scope::with_parent(env.current().clone()));
    env.swap_current(child);
    env.define(name(1), Value::Number(1.0));

    assert!(env.assign_at(1, name(1), Value::Number(9.0)));
    assert_eq!(env.get_at(1, name(1)), Some(Value::Number(9.0)));
    // Inner binding untouched.
    assert_eq!(env.get_at(0, name(1)), Some(Value::Number(1.0)));
}

#[test]
fn global_path_reads_global_frame_only() {
    let mut env = Environment::new();
    env.define_global(name(1), Value::Number(1.0));
    let child = ScopeRef::new(Scope::with_parent(env.current().clone()));
    env.swap_current(child);
    env.define(name(2), Value::Number(2.0));

    assert_eq!(env.get_global(name(1)), Some(Value::Number(1.0)));
    // A local binding is invisible to the global path.
    assert_eq!(env.get_global(name(2)), None);
}

#[test]
fn frames_are_shared_not_copied() {
    // A captured frame sees mutations made after the capture.
    let mut env = Environment::new();
    env.define(name(1), Value::Number(1.0));
    let captured = env.current().clone();
    env.assign(name(1), Value::Number(2.0));
    assert_eq!(captured.borrow().get(name(1)), Some(Value::Number(2.0)));
}

#[test]
fn scope_ref_identity() {
    let a = ScopeRef::new(Scope::new());
    let b = a.clone();
    let c = ScopeRef::new(Scope::new());
    assert!(a.ptr_eq(&b));
    assert!(!a.ptr_eq(&c));
}
