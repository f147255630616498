use std::fmt;
use std::ptr::{self, NonNull};

use crate::ownership::{Owner, Ownership, Shared, SharedOwner, Unique};
use crate::NativeResource;

/// A handle that owns zero or one native pointer of type `T`.
///
/// The pointer is released through [`NativeResource::release`] at most once:
/// when the owning handle is dropped, [`reset`](Self::reset) or reassigned
/// with [`acquire`](Self::acquire) (unique mode), or when the last owning
/// clone goes away (shared mode). Aliases never release.
///
/// An empty handle is a valid value. It stands for "not loaded" or "creation
/// failed upstream" and is checked with [`is_valid`](Self::is_valid).
pub struct Managed<T: NativeResource, O: Ownership = Unique> {
    slot: Slot<T, O::Owner<T>>,
}

enum Slot<T, C> {
    Empty,
    Owned(C),
    /// Non-owning view of a pointer owned elsewhere.
    Alias(NonNull<T>),
}

impl<T: NativeResource, O: Ownership> Managed<T, O> {
    /// A handle holding nothing.
    pub fn empty() -> Self {
        Self { slot: Slot::Empty }
    }

    /// Take ownership of `raw`. A null pointer gives an empty handle.
    ///
    /// # Safety
    ///
    /// A non-null `raw` must point to a live resource of kind `T` that nothing
    /// else owns or will release.
    pub unsafe fn from_raw(raw: *mut T) -> Self {
        match NonNull::new(raw) {
            Some(ptr) => Self {
                // SAFETY: forwarded from the caller.
                slot: Slot::Owned(unsafe { <O::Owner<T> as Owner<T>>::acquire(ptr) }),
            },
            None => Self::empty(),
        }
    }

    /// Release what this handle owns, then take ownership of `raw`.
    ///
    /// # Safety
    ///
    /// Same contract as [`from_raw`](Self::from_raw). In particular `raw` must
    /// not be the pointer this handle (or any of its shared clones) already
    /// owns.
    pub unsafe fn acquire(&mut self, raw: *mut T) -> &mut Self {
        self.reset();
        // SAFETY: forwarded from the caller.
        *self = unsafe { Self::from_raw(raw) };
        self
    }

    /// Release what this handle owns and leave it empty.
    pub fn reset(&mut self) {
        self.slot = Slot::Empty;
    }

    /// Move the contents out, leaving this handle empty.
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::empty())
    }

    /// A second handle for the same pointer that never releases it.
    ///
    /// # Safety
    ///
    /// The alias must not be used after the owning handle has released the
    /// pointer.
    pub unsafe fn alias(&self) -> Self {
        match self.as_non_null() {
            Some(ptr) => Self {
                slot: Slot::Alias(ptr),
            },
            None => Self::empty(),
        }
    }

    /// The raw pointer, null when empty. Ownership is not affected.
    pub fn as_ptr(&self) -> *mut T {
        self.as_non_null().map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    pub fn as_non_null(&self) -> Option<NonNull<T>> {
        match &self.slot {
            Slot::Empty => None,
            Slot::Owned(owner) => Some(owner.as_non_null()),
            Slot::Alias(ptr) => Some(*ptr),
        }
    }

    /// True when a non-null pointer is held.
    pub fn is_valid(&self) -> bool {
        !matches!(self.slot, Slot::Empty)
    }

    pub fn is_null(&self) -> bool {
        !self.is_valid()
    }

    /// True when dropping this handle may release the pointer.
    pub fn is_owner(&self) -> bool {
        matches!(self.slot, Slot::Owned(_))
    }

    pub fn is_alias(&self) -> bool {
        matches!(self.slot, Slot::Alias(_))
    }

    /// Owners keeping the pointer alive; 0 for empty handles and aliases.
    pub fn ref_count(&self) -> usize {
        match &self.slot {
            Slot::Owned(owner) => owner.ref_count(),
            Slot::Empty | Slot::Alias(_) => 0,
        }
    }

    /// Whether both handles refer to the same native pointer.
    pub fn ptr_eq<P: Ownership>(&self, other: &Managed<T, P>) -> bool {
        self.as_ptr() == other.as_ptr()
    }
}

impl<T: NativeResource> Managed<T, Unique> {
    /// Turn this owner into the first reference of a shared handle.
    pub fn into_shared(self) -> Managed<T, Shared> {
        let Managed { slot } = self;
        let slot = match slot {
            Slot::Empty => Slot::Empty,
            Slot::Owned(owner) => Slot::Owned(SharedOwner::from(owner)),
            Slot::Alias(ptr) => Slot::Alias(ptr),
        };
        Managed { slot }
    }

    /// Give up ownership without releasing and return the raw pointer.
    ///
    /// For an alias the pointer is returned but was never owned.
    pub fn into_raw(self) -> *mut T {
        let Managed { slot } = self;
        match slot {
            Slot::Empty => ptr::null_mut(),
            Slot::Owned(owner) => owner.into_raw().as_ptr(),
            Slot::Alias(ptr) => ptr.as_ptr(),
        }
    }
}

impl<T: NativeResource> Clone for Managed<T, Shared> {
    fn clone(&self) -> Self {
        let slot = match &self.slot {
            Slot::Empty => Slot::Empty,
            Slot::Owned(owner) => Slot::Owned(owner.clone()),
            Slot::Alias(ptr) => Slot::Alias(*ptr),
        };
        Self { slot }
    }
}

impl<T: NativeResource> From<Managed<T, Unique>> for Managed<T, Shared> {
    fn from(handle: Managed<T, Unique>) -> Self {
        handle.into_shared()
    }
}

impl<T: NativeResource, O: Ownership> Default for Managed<T, O> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: NativeResource, O: Ownership> fmt::Debug for Managed<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.slot {
            Slot::Empty => "empty",
            Slot::Owned(_) => "owned",
            Slot::Alias(_) => "alias",
        };
        f.debug_struct("Managed")
            .field("kind", &T::KIND)
            .field("mode", &O::NAME)
            .field("state", &state)
            .field("ptr", &self.as_ptr())
            .finish()
    }
}
