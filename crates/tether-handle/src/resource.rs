use std::ptr::NonNull;

/// A native resource type that is freed through a platform function.
///
/// Implemented for the pointee type of a raw handle (`SDL_Texture`,
/// `TTF_Font`, ...), pairing it with its free function.
pub trait NativeResource {
    /// Short name used in log output, e.g. `"texture"`.
    const KIND: &'static str;

    /// Free the resource behind `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a live resource of this kind owned by the caller.
    /// It must not be used again after this call.
    unsafe fn release(ptr: NonNull<Self>);
}
