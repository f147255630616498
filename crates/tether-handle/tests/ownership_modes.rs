//! The same code path driven through both ownership modes.

use std::cell::Cell;
use std::ptr::NonNull;

use tether_handle::{Managed, NativeResource, Ownership, Shared, Unique};

thread_local! {
    static RELEASED: Cell<usize> = const { Cell::new(0) };
}

struct Buffer {
    _bytes: Vec<u8>,
}

impl NativeResource for Buffer {
    const KIND: &'static str = "buffer";

    unsafe fn release(ptr: NonNull<Self>) {
        drop(unsafe { Box::from_raw(ptr.as_ptr()) });
        RELEASED.with(|count| count.set(count.get() + 1));
    }
}

fn released() -> usize {
    RELEASED.with(Cell::get)
}

fn new_buffer() -> *mut Buffer {
    Box::into_raw(Box::new(Buffer {
        _bytes: vec![0; 16],
    }))
}

/// Load, reload, borrow and drop through one generic interface.
fn exercise<O: Ownership>() -> usize {
    let before = released();

    let mut handle = unsafe { Managed::<Buffer, O>::from_raw(new_buffer()) };
    assert!(handle.is_valid());
    assert!(handle.is_owner());

    unsafe { handle.acquire(new_buffer()) };
    assert_eq!(released() - before, 1);

    let borrowed = unsafe { handle.alias() };
    assert!(borrowed.ptr_eq(&handle));
    drop(borrowed);
    assert_eq!(released() - before, 1);

    let moved = handle.take();
    assert!(handle.is_null());
    drop(handle);
    assert_eq!(released() - before, 1);

    drop(moved);
    released() - before
}

#[test]
fn test_unique_mode_contract() {
    assert_eq!(exercise::<Unique>(), 2);
}

#[test]
fn test_shared_mode_contract() {
    assert_eq!(exercise::<Shared>(), 2);
}

#[test]
fn test_shared_clones_release_once() {
    let before = released();
    let first = unsafe { Managed::<Buffer, Shared>::from_raw(new_buffer()) };
    let clones: Vec<_> = (0..4).map(|_| first.clone()).collect();
    assert_eq!(first.ref_count(), 5);

    drop(first);
    assert_eq!(released() - before, 0);
    assert!(clones.iter().all(Managed::is_valid));

    drop(clones);
    assert_eq!(released() - before, 1);
}
