use std::fmt;
use std::ptr::NonNull;
use std::rc::Rc;

use crate::NativeResource;

mod sealed {
    pub trait Sealed {}
}

/// Compile-time choice of how a [`Managed`](crate::Managed) handle owns its
/// pointer. Implemented by [`Unique`] and [`Shared`] only.
pub trait Ownership: sealed::Sealed + 'static {
    /// The owning cell stored inside the handle.
    type Owner<T: NativeResource>: Owner<T>;

    /// Name used in log and debug output.
    const NAME: &'static str;
}

/// An owning cell for a native pointer.
pub trait Owner<T: NativeResource> {
    /// Take ownership of `ptr`.
    ///
    /// # Safety
    ///
    /// The caller hands over ownership: `ptr` must be live, must not be owned
    /// by anything else, and will be released through [`NativeResource::release`].
    unsafe fn acquire(ptr: NonNull<T>) -> Self;

    fn as_non_null(&self) -> NonNull<T>;

    /// Number of owners currently keeping the pointer alive.
    fn ref_count(&self) -> usize;
}

/// Exactly one owner; moving hands ownership over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unique {}

/// Reference-counted ownership; the last owner releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shared {}

impl sealed::Sealed for Unique {}
impl sealed::Sealed for Shared {}

impl Ownership for Unique {
    type Owner<T: NativeResource> = UniqueOwner<T>;
    const NAME: &'static str = "unique";
}

impl Ownership for Shared {
    type Owner<T: NativeResource> = SharedOwner<T>;
    const NAME: &'static str = "shared";
}

/// Sole owner of a native pointer. Releases it when dropped.
pub struct UniqueOwner<T: NativeResource> {
    ptr: NonNull<T>,
}

impl<T: NativeResource> UniqueOwner<T> {
    /// Give up ownership without releasing.
    pub(crate) fn into_raw(self) -> NonNull<T> {
        let ptr = self.ptr;
        std::mem::forget(self);
        ptr
    }
}

impl<T: NativeResource> Owner<T> for UniqueOwner<T> {
    unsafe fn acquire(ptr: NonNull<T>) -> Self {
        tracing::trace!(kind = T::KIND, ?ptr, "acquired native resource");
        Self { ptr }
    }

    fn as_non_null(&self) -> NonNull<T> {
        self.ptr
    }

    fn ref_count(&self) -> usize {
        1
    }
}

impl<T: NativeResource> Drop for UniqueOwner<T> {
    fn drop(&mut self) {
        tracing::trace!(kind = T::KIND, ptr = ?self.ptr, "releasing native resource");
        // SAFETY: `acquire` transferred ownership of `ptr` to this owner, and
        // drop runs once.
        unsafe { T::release(self.ptr) }
    }
}

impl<T: NativeResource> fmt::Debug for UniqueOwner<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueOwner")
            .field("kind", &T::KIND)
            .field("ptr", &self.ptr)
            .finish()
    }
}

/// One of possibly many owners of a native pointer.
pub struct SharedOwner<T: NativeResource> {
    inner: Rc<UniqueOwner<T>>,
}

impl<T: NativeResource> Owner<T> for SharedOwner<T> {
    unsafe fn acquire(ptr: NonNull<T>) -> Self {
        // SAFETY: forwarded from the caller.
        let owner = unsafe { UniqueOwner::acquire(ptr) };
        Self::from(owner)
    }

    fn as_non_null(&self) -> NonNull<T> {
        self.inner.ptr
    }

    fn ref_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl<T: NativeResource> From<UniqueOwner<T>> for SharedOwner<T> {
    fn from(owner: UniqueOwner<T>) -> Self {
        Self {
            inner: Rc::new(owner),
        }
    }
}

impl<T: NativeResource> Clone for SharedOwner<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: NativeResource> fmt::Debug for SharedOwner<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedOwner")
            .field("kind", &T::KIND)
            .field("ptr", &self.inner.ptr)
            .field("owners", &Rc::strong_count(&self.inner))
            .finish()
    }
}
