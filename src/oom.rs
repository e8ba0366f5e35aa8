//! Process-wide allocation-failure handling.
//!
//! Growth operations return no `Result`. When a chunk allocation fails or
//! a size computation overflows, the handler installed here is invoked
//! instead; it must diverge.

use core::{
    mem,
    ptr,
    sync::atomic::{AtomicPtr, Ordering},
};

#[cfg(feature = "std")]
use core::sync::atomic::AtomicI32;

static ALLOC_FAILED_HANDLER: AtomicPtr<()> = AtomicPtr::new(ptr::null_mut());

#[cfg(feature = "std")]
static EXIT_FAILURE_CODE: AtomicI32 = AtomicI32::new(1);

/// Replaces the allocation-failure handler for the whole process.
///
/// The handler must not return. A handler that panics is the supported way
/// to recover: the failing operation leaves its stack untouched, so after
/// catching the unwind the stack is usable again.
///
/// Install the handler before any stack may hit an allocation failure;
/// replacing it concurrently with failing operations picks one of the two
/// handlers, not a mix.
pub fn set_alloc_failed_handler(handler: fn() -> !) {
    ALLOC_FAILED_HANDLER.store(handler as *mut (), Ordering::Release);
}

/// Sets the exit status used by the default allocation-failure handler.
#[cfg(feature = "std")]
pub fn set_alloc_failed_exit_code(code: i32) {
    EXIT_FAILURE_CODE.store(code, Ordering::Release);
}

#[cold]
#[inline(never)]
pub(crate) fn alloc_failed() -> ! {
    let raw = ALLOC_FAILED_HANDLER.load(Ordering::Acquire);
    if !raw.is_null() {
        // Safety: only `set_alloc_failed_handler` stores a non-null value
        // here, and it always stores a `fn() -> !`.
        let handler: fn() -> ! = unsafe { mem::transmute(raw) };
        handler();
    }
    print_and_abort()
}

#[cfg(feature = "std")]
fn print_and_abort() -> ! {
    eprintln!("memory exhausted");
    std::process::exit(EXIT_FAILURE_CODE.load(Ordering::Acquire))
}

#[cfg(not(feature = "std"))]
fn print_and_abort() -> ! {
    panic!("memory exhausted")
}
