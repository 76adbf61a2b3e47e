use crate::error::{with_last_error_mut, AdvisoryErrorCode, DefaultFfiError, FfiError};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::slice;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl FfiError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl FfiError) -> AdvisoryErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = AdvisoryErrorCode::Ok;
    });
}

/// Record the outcome of an FFI body and return its code.
pub(crate) fn finish(result: Result<(), DefaultFfiError>) -> AdvisoryErrorCode {
    match result {
        Ok(()) => {
            clear_last_error();
            AdvisoryErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Borrow a caller-owned array; a zero length accepts a null pointer.
///
/// # Safety
/// When `len > 0`, `ptr` must point to `len` initialised values that outlive the borrow.
pub(crate) unsafe fn slice_arg<'a, T>(
    ptr: *const T,
    len: usize,
    name: &str,
) -> Result<&'a [T], DefaultFfiError> {
    if len == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(DefaultFfiError::null_pointer(name));
    }
    Ok(unsafe { slice::from_raw_parts(ptr, len) })
}

/// Borrow a caller-owned, null-terminated UTF-8 string.
///
/// # Safety
/// `ptr` must be null or point to a null-terminated string that outlives the borrow.
pub(crate) unsafe fn str_arg<'a>(
    ptr: *const c_char,
    name: &str,
) -> Result<&'a str, DefaultFfiError> {
    if ptr.is_null() {
        return Err(DefaultFfiError::null_pointer(name));
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| DefaultFfiError::invalid_utf8(name))
}

/// Write through an out-pointer.
///
/// # Safety
/// `ptr` must be null or valid for writes of `T`.
pub(crate) unsafe fn write_out<T>(
    ptr: *mut T,
    value: T,
    name: &str,
) -> Result<(), DefaultFfiError> {
    if ptr.is_null() {
        return Err(DefaultFfiError::null_pointer(name));
    }
    unsafe { ptr.write(value) };
    Ok(())
}

/// Hand a Rust string to C; the caller frees it with `fire_advisory_string_free`.
pub(crate) fn into_c_string(text: String, name: &str) -> Result<*mut c_char, DefaultFfiError> {
    CString::new(text)
        .map(CString::into_raw)
        .map_err(|_| DefaultFfiError::invalid_parameter(name, "text contains an interior nul byte"))
}
