use std::{
    any::Any,
    ffi::c_void,
    panic::{catch_unwind, AssertUnwindSafe},
};

/// Signature of the native progress callback. `true` continues the import, `false` cancels it.
pub type ProgressCallback = unsafe extern "C" fn(percentage: f32, user_data: *mut c_void) -> bool;

pub(crate) struct ProgressContext<'a> {
    callback: Box<dyn FnMut(f32) -> bool + 'a>,
    /// Set when the callback panicked. The import is cancelled and the callback is not called
    /// again.
    panic: Option<Box<dyn Any + Send + 'static>>,
}

/// Owns the boxed [`ProgressContext`] handed to native code as an opaque token.
pub(crate) struct ProgressToken<'a> {
    context: *mut ProgressContext<'a>,
}

impl<'a> ProgressToken<'a> {
    pub(crate) fn new<F>(callback: F) -> ProgressToken<'a>
    where
        F: FnMut(f32) -> bool + 'a,
    {
        let context = Box::new(ProgressContext {
            callback: Box::new(callback),
            panic: None,
        });
        ProgressToken {
            context: Box::into_raw(context),
        }
    }

    pub(crate) fn user_data(&self) -> *mut c_void {
        self.context as *mut c_void
    }

    /// The payload of a panic raised by the callback, to be resumed once native code has
    /// returned.
    pub(crate) fn take_panic(&mut self) -> Option<Box<dyn Any + Send + 'static>> {
        unsafe { (*self.context).panic.take() }
    }
}

impl<'a> Drop for ProgressToken<'a> {
    fn drop(&mut self) {
        let _ = unsafe { Box::from_raw(self.context) };
    }
}

/// Forwards a native progress report to the closure behind `user_data`.
///
/// # Safety
///
/// `user_data` must be null or come from [`ProgressToken::user_data`] of a token that is still
/// alive.
pub(crate) unsafe extern "C" fn progress_trampoline(
    percentage: f32,
    user_data: *mut c_void,
) -> bool {
    let Some(context) = (unsafe { user_data.cast::<ProgressContext<'_>>().as_mut() }) else {
        return true;
    };
    let percentage = if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 1.0)
    };
    if context.panic.is_some() {
        return false;
    }
    let callback = &mut context.callback;
    match catch_unwind(AssertUnwindSafe(|| callback(percentage))) {
        Ok(should_continue) => should_continue,
        Err(payload) => {
            log::warn!("Progress callback panicked, cancel the import");
            context.panic = Some(payload);
            false
        }
    }
}
