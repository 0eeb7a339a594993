use super::*;

// ============================================================================
// Basic allocation tests
// ============================================================================

#[test]
fn test_sequential_alloc_starts_at_one() {
    let mut alloc = HandleAllocator::new();
    assert_eq!(alloc.alloc(), 1);
    assert_eq!(alloc.alloc(), 2);
    assert_eq!(alloc.alloc(), 3);
}

#[test]
fn test_new_is_empty() {
    let alloc = HandleAllocator::new();
    assert!(alloc.is_empty());
    assert_eq!(alloc.len(), 0);
    assert_eq!(alloc.high_water_mark(), 1);
}

#[test]
fn test_default_is_empty() {
    let alloc = HandleAllocator::default();
    assert!(alloc.is_empty());
}

// ============================================================================
// Free and recycle tests
// ============================================================================

#[test]
fn test_free_and_recycle() {
    let mut alloc = HandleAllocator::new();
    let a = alloc.alloc(); // 1
    let b = alloc.alloc(); // 2
    alloc.free(a);
    assert_eq!(alloc.alloc(), 1);
    assert_eq!(b, 2);
}

#[test]
fn test_free_multiple_recycle_lifo() {
    let mut alloc = HandleAllocator::new();
    let a = alloc.alloc(); // 1
    let _b = alloc.alloc(); // 2
    let c = alloc.alloc(); // 3
    alloc.free(a);
    alloc.free(c);

    assert_eq!(alloc.alloc(), 3);
    assert_eq!(alloc.alloc(), 1);
    assert_eq!(alloc.alloc(), 4);
}

// ============================================================================
// len() and high_water_mark() tests
// ============================================================================

#[test]
fn test_high_water_mark_never_decreases() {
    let mut alloc = HandleAllocator::new();
    alloc.alloc(); // 1
    alloc.alloc(); // 2
    assert_eq!(alloc.high_water_mark(), 3);

    alloc.free(1);
    alloc.free(2);
    assert_eq!(alloc.high_water_mark(), 3);
    assert!(alloc.is_empty());

    alloc.alloc(); // 2 (recycled)
    alloc.alloc(); // 1 (recycled)
    assert_eq!(alloc.high_water_mark(), 3);

    alloc.alloc(); // 3 (fresh)
    assert_eq!(alloc.high_water_mark(), 4);
    assert_eq!(alloc.len(), 3);
}

#[test]
fn test_zero_is_never_handed_out() {
    let mut alloc = HandleAllocator::new();
    let ids: Vec<GLuint> = (0..32).map(|_| alloc.alloc()).collect();
    for &id in &ids {
        alloc.free(id);
    }
    for _ in 0..64 {
        assert_ne!(alloc.alloc(), 0);
    }
}
