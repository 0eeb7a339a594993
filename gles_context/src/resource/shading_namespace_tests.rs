use super::*;
use slotmap::SlotMap;

fn keys() -> (ShaderKey, ProgramKey) {
    let mut shaders: SlotMap<ShaderKey, ()> = SlotMap::with_key();
    let mut programs: SlotMap<ProgramKey, ()> = SlotMap::with_key();
    (shaders.insert(()), programs.insert(()))
}

// ============================================================================
// Registration tests
// ============================================================================

#[test]
fn test_push_returns_non_zero_handles() {
    let (shader, program) = keys();
    let mut ns = ShadingNamespace::new();
    let a = ns.push(ShadingObject::Shader(shader));
    let b = ns.push(ShadingObject::Program(program));
    assert_eq!(a, 1);
    assert_eq!(b, 2);
    assert_eq!(ns.len(), 2);
    assert_eq!(ns.count(), 3);
}

#[test]
fn test_erase_removes_entry_and_recycles_handle() {
    let (shader, program) = keys();
    let mut ns = ShadingNamespace::new();
    let a = ns.push(ShadingObject::Shader(shader));

    assert_eq!(ns.erase(a), Some(ShadingObject::Shader(shader)));
    assert!(!ns.exists(a));
    assert!(ns.is_empty());
    assert_eq!(ns.erase(a), None);

    assert_eq!(ns.push(ShadingObject::Program(program)), a);
}

#[test]
fn test_is_kind() {
    let (shader, program) = keys();
    let mut ns = ShadingNamespace::new();
    let s = ns.push(ShadingObject::Shader(shader));
    let p = ns.push(ShadingObject::Program(program));

    assert!(ns.is_kind(s, ShadingObjectKind::Shader));
    assert!(!ns.is_kind(s, ShadingObjectKind::Program));
    assert!(ns.is_kind(p, ShadingObjectKind::Program));
    assert!(!ns.is_kind(0, ShadingObjectKind::Shader));
    assert!(!ns.is_kind(99, ShadingObjectKind::Shader));
}

// ============================================================================
// Resolution tests
// ============================================================================

#[test]
fn test_resolve_matching_kind() {
    let (shader, _) = keys();
    let mut ns = ShadingNamespace::new();
    let s = ns.push(ShadingObject::Shader(shader));
    assert_eq!(ns.resolve(s, ShadingObjectKind::Shader), Ok(ShadingObject::Shader(shader)));
}

#[test]
fn test_resolve_zero_is_invalid_value() {
    let ns = ShadingNamespace::new();
    assert_eq!(ns.resolve(0, ShadingObjectKind::Shader), Err(Error::InvalidValue));
}

#[test]
fn test_resolve_out_of_range_is_invalid_value() {
    let (shader, _) = keys();
    let mut ns = ShadingNamespace::new();
    ns.push(ShadingObject::Shader(shader));
    assert_eq!(ns.resolve(2, ShadingObjectKind::Shader), Err(Error::InvalidValue));
    assert_eq!(ns.resolve(GLuint::MAX, ShadingObjectKind::Program), Err(Error::InvalidValue));
}

#[test]
fn test_resolve_erased_is_invalid_value() {
    let (shader, _) = keys();
    let mut ns = ShadingNamespace::new();
    let s = ns.push(ShadingObject::Shader(shader));
    ns.push(ShadingObject::Shader(shader));
    ns.erase(s);
    assert_eq!(ns.resolve(s, ShadingObjectKind::Shader), Err(Error::InvalidValue));
}

#[test]
fn test_resolve_wrong_kind_is_invalid_operation() {
    let (shader, program) = keys();
    let mut ns = ShadingNamespace::new();
    let s = ns.push(ShadingObject::Shader(shader));
    let p = ns.push(ShadingObject::Program(program));

    assert_eq!(ns.resolve(p, ShadingObjectKind::Shader), Err(Error::InvalidOperation));
    assert_eq!(ns.resolve(s, ShadingObjectKind::Program), Err(Error::InvalidOperation));
}
