use fire_advisory_core::AdvisoryError;
use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

/// An error that can cross the C boundary as a code plus a message.
pub(crate) trait FfiError {
    /// Code returned to the caller
    fn code(&self) -> AdvisoryErrorCode;

    /// Text exposed through `fire_advisory_get_last_error`
    fn msg(&self) -> &str;
}

/// Argument errors raised by the advisory entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultFfiError {
    code: AdvisoryErrorCode,
    msg: String,
}

impl DefaultFfiError {
    /// A required pointer argument (e.g. `"out_summary"`) was null.
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: AdvisoryErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// A string argument held bytes that are not UTF-8.
    pub fn invalid_utf8(param_name: &str) -> Self {
        Self {
            code: AdvisoryErrorCode::InvalidUtf8,
            msg: format!("Parameter '{param_name}' is not valid UTF-8"),
        }
    }

    /// An argument (e.g. `"windows[2].start_time"`) was out of range or malformed.
    pub fn invalid_parameter(param_name: &str, message: &str) -> Self {
        Self {
            code: AdvisoryErrorCode::InvalidParameter,
            msg: format!("Parameter {param_name}: {message}"),
        }
    }

    /// Wrap a core validation error for a named parameter.
    pub fn from_core(param_name: &str, error: &AdvisoryError) -> Self {
        Self::invalid_parameter(param_name, &error.to_string())
    }
}

impl FfiError for DefaultFfiError {
    fn code(&self) -> AdvisoryErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// Status code of every fallible advisory entry point; zero means success.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryErrorCode {
    /// No error.
    Ok = 0,

    /// A required pointer was null.
    NullPointer = 1,

    /// A string argument was not valid UTF-8.
    InvalidUtf8 = 2,

    /// Invalid parameter passed to function (hour outside [0, 24), unknown threshold id, ...).
    InvalidParameter = 3,
}

impl From<DefaultFfiError> for AdvisoryErrorCode {
    fn from(error: DefaultFfiError) -> Self {
        error.code
    }
}

thread_local! {
    /// Message and code of the last failed call on this thread. Holding the
    /// `CString` here keeps pointers handed to C valid until the next call.
    static LAST_ERROR: RefCell<(Option<CString>, AdvisoryErrorCode)> =
        const { RefCell::new((None, AdvisoryErrorCode::Ok)) };
}

/// Borrow the last error of this thread.
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, AdvisoryErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Mutably borrow the last error of this thread.
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, AdvisoryErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Message of the last failed call on this thread, or null after a success.
///
/// The string is owned by the library and stays valid until the next advisory
/// call on the same thread. Do not pass it to `fire_advisory_string_free`.
///
/// ```cpp
/// AdvisoryCriticalHoursSummary summary;
/// bool found = false;
/// AdvisoryErrorCode err = fire_advisory_critical_hours(windows, len, &summary, &found);
/// if (err != AdvisoryErrorCode::Ok) {
///     printf("Aggregation failed: %s\n", fire_advisory_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn fire_advisory_get_last_error() -> *const c_char {
    with_last_error(|(message, _)| message.as_deref().map_or(ptr::null(), CStr::as_ptr))
}

/// Code of the last call on this thread; `Ok` after a success.
#[no_mangle]
pub extern "C" fn fire_advisory_get_last_error_code() -> AdvisoryErrorCode {
    with_last_error(|&(_, code)| code)
}
