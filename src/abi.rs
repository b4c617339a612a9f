//! Purpose: C ABI bridge for bindings (libmaybelite).
//! Exports: C-callable constructor/query/unwrap functions and buffer/error helpers.
//! Role: Stable ABI surface for non-Rust bindings in v0.
//! Invariants: JSON bytes in/out; opaque handles; explicit free functions.
//! Invariants: Error kinds map 1:1 with core error kinds.
//! Notes: Combinator callbacks (filter/map over C function pointers) are not part of v0.
#![allow(non_camel_case_types)]

use serde_json::Value;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use crate::coerce;
use crate::core::error::{error_kind_code, Error, ErrorKind};
use crate::core::maybe::Maybe;

#[repr(C)]
pub struct mblt_maybe {
    maybe: Maybe<Value>,
}

#[repr(C)]
pub struct mblt_buf {
    pub data: *mut u8,
    pub len: usize,
}

#[repr(C)]
pub struct mblt_error {
    kind: i32,
    message: *mut c_char,
}

/// Checked constructor over a JSON document. A `null` document is the
/// absence sentinel and yields the nothing handle.
#[unsafe(no_mangle)]
pub extern "C" fn mblt_wrap_json(
    json_bytes: *const u8,
    len: usize,
    out_maybe: *mut *mut mblt_maybe,
    out_err: *mut *mut mblt_error,
) -> i32 {
    let value = match parse_json_bytes(json_bytes, len) {
        Ok(value) => value,
        Err(err) => return fail(out_err, err),
    };
    write_maybe(out_maybe, coerce::wrap(value), out_err)
}

/// Unchecked constructor: wraps whatever the document decodes to, including
/// `null`.
#[unsafe(no_mangle)]
pub extern "C" fn mblt_just_json(
    json_bytes: *const u8,
    len: usize,
    out_maybe: *mut *mut mblt_maybe,
    out_err: *mut *mut mblt_error,
) -> i32 {
    let value = match parse_json_bytes(json_bytes, len) {
        Ok(value) => value,
        Err(err) => return fail(out_err, err),
    };
    write_maybe(out_maybe, coerce::just(value), out_err)
}

#[unsafe(no_mangle)]
pub extern "C" fn mblt_nothing(
    out_maybe: *mut *mut mblt_maybe,
    out_err: *mut *mut mblt_error,
) -> i32 {
    write_maybe(out_maybe, coerce::NOTHING, out_err)
}

#[unsafe(no_mangle)]
pub extern "C" fn mblt_of_string_json(
    json_bytes: *const u8,
    len: usize,
    out_maybe: *mut *mut mblt_maybe,
    out_err: *mut *mut mblt_error,
) -> i32 {
    let value = match parse_json_bytes(json_bytes, len) {
        Ok(value) => value,
        Err(err) => return fail(out_err, err),
    };
    let maybe = coerce::of_string(value).map(Value::String);
    write_maybe(out_maybe, maybe, out_err)
}

#[unsafe(no_mangle)]
pub extern "C" fn mblt_of_number_json(
    json_bytes: *const u8,
    len: usize,
    out_maybe: *mut *mut mblt_maybe,
    out_err: *mut *mut mblt_error,
) -> i32 {
    let value = match parse_json_bytes(json_bytes, len) {
        Ok(value) => value,
        Err(err) => return fail(out_err, err),
    };
    // `of_number` only ever yields finite floats, so re-encoding cannot fail.
    let maybe = coerce::of_number(value).map(|n| serde_json::Number::from_f64(n).map(Value::Number));
    write_maybe(out_maybe, maybe, out_err)
}

#[unsafe(no_mangle)]
pub extern "C" fn mblt_of_object_json(
    json_bytes: *const u8,
    len: usize,
    out_maybe: *mut *mut mblt_maybe,
    out_err: *mut *mut mblt_error,
) -> i32 {
    let value = match parse_json_bytes(json_bytes, len) {
        Ok(value) => value,
        Err(err) => return fail(out_err, err),
    };
    write_maybe(out_maybe, coerce::of_object(value), out_err)
}

/// Returns 1 for a held value, 0 for nothing or a null handle.
#[unsafe(no_mangle)]
pub extern "C" fn mblt_is_just(maybe: *const mblt_maybe) -> i32 {
    if maybe.is_null() {
        return 0;
    }
    let handle = unsafe { &*maybe };
    if handle.maybe.is_just() { 1 } else { 0 }
}

/// Display rendering: held strings come back unquoted, other held values as
/// compact JSON, nothing as an empty buffer.
#[unsafe(no_mangle)]
pub extern "C" fn mblt_to_string(
    maybe: *const mblt_maybe,
    out_buf: *mut mblt_buf,
    out_err: *mut *mut mblt_error,
) -> i32 {
    let handle = match borrow_maybe(maybe, out_err) {
        Ok(handle) => handle,
        Err(code) => return code,
    };
    let rendered = coerce::to_display_string(&handle.maybe);
    match write_buf(out_buf, rendered.into_bytes()) {
        Ok(()) => 0,
        Err(err) => fail(out_err, err),
    }
}

/// Unwrap. Fails with the `Empty` kind when the handle holds nothing; this is
/// the only non-usage failure in the ABI.
#[unsafe(no_mangle)]
pub extern "C" fn mblt_get_json(
    maybe: *const mblt_maybe,
    out_buf: *mut mblt_buf,
    out_err: *mut *mut mblt_error,
) -> i32 {
    let handle = match borrow_maybe(maybe, out_err) {
        Ok(handle) => handle,
        Err(code) => return code,
    };
    let value = match handle.maybe.clone().get() {
        Ok(value) => value,
        Err(err) => return fail(out_err, err),
    };
    match encode_value(&value).and_then(|bytes| write_buf(out_buf, bytes)) {
        Ok(()) => 0,
        Err(err) => fail(out_err, err),
    }
}

/// Unwrap with a fallback document. The fallback goes through `wrap`, so a
/// `null` fallback leaves nothing in place and the emitted document is `null`.
#[unsafe(no_mangle)]
pub extern "C" fn mblt_get_or_json(
    maybe: *const mblt_maybe,
    fallback_bytes: *const u8,
    fallback_len: usize,
    out_buf: *mut mblt_buf,
    out_err: *mut *mut mblt_error,
) -> i32 {
    let handle = match borrow_maybe(maybe, out_err) {
        Ok(handle) => handle,
        Err(code) => return code,
    };
    let fallback = match parse_json_bytes(fallback_bytes, fallback_len) {
        Ok(value) => value,
        Err(err) => return fail(out_err, err),
    };
    let resolved = handle.maybe.clone().or(coerce::wrap(fallback));
    let bytes = match resolved {
        Maybe::Just(value) => match encode_value(&value) {
            Ok(bytes) => bytes,
            Err(err) => return fail(out_err, err),
        },
        Maybe::Nothing => b"null".to_vec(),
    };
    match write_buf(out_buf, bytes) {
        Ok(()) => 0,
        Err(err) => fail(out_err, err),
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn mblt_maybe_free(maybe: *mut mblt_maybe) {
    if maybe.is_null() {
        return;
    }
    unsafe {
        drop(Box::from_raw(maybe));
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn mblt_buf_free(buf: *mut mblt_buf) {
    if buf.is_null() {
        return;
    }
    unsafe {
        let buf = &mut *buf;
        if !buf.data.is_null() {
            drop(Box::from_raw(ptr::slice_from_raw_parts_mut(
                buf.data, buf.len,
            )));
            buf.data = ptr::null_mut();
            buf.len = 0;
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn mblt_error_kind(err: *const mblt_error) -> i32 {
    if err.is_null() {
        return 0;
    }
    unsafe { (*err).kind }
}

#[unsafe(no_mangle)]
pub extern "C" fn mblt_error_message(err: *const mblt_error) -> *const c_char {
    if err.is_null() {
        return ptr::null();
    }
    unsafe { (*err).message }
}

#[unsafe(no_mangle)]
pub extern "C" fn mblt_error_free(err: *mut mblt_error) {
    if err.is_null() {
        return;
    }
    unsafe {
        let err = Box::from_raw(err);
        if !err.message.is_null() {
            drop(CString::from_raw(err.message));
        }
    }
}

fn write_maybe(
    out_maybe: *mut *mut mblt_maybe,
    maybe: Maybe<Value>,
    out_err: *mut *mut mblt_error,
) -> i32 {
    if out_maybe.is_null() {
        return fail(
            out_err,
            Error::new(ErrorKind::Usage).with_message("out_maybe is null"),
        );
    }
    let handle = Box::new(mblt_maybe { maybe });
    unsafe {
        *out_maybe = Box::into_raw(handle);
    }
    0
}

fn borrow_maybe<'a>(
    maybe: *const mblt_maybe,
    out_err: *mut *mut mblt_error,
) -> Result<&'a mblt_maybe, i32> {
    if maybe.is_null() {
        return Err(fail(
            out_err,
            Error::new(ErrorKind::Usage).with_message("maybe is null"),
        ));
    }
    unsafe { Ok(&*maybe) }
}

fn parse_json_bytes(bytes: *const u8, len: usize) -> Result<Value, Error> {
    if bytes.is_null() {
        return Err(Error::new(ErrorKind::Usage).with_message("json_bytes is null"));
    }
    let slice = unsafe { std::slice::from_raw_parts(bytes, len) };
    let text = std::str::from_utf8(slice).map_err(|err| {
        Error::new(ErrorKind::Usage)
            .with_message("invalid json utf-8")
            .with_source(err)
    })?;
    crate::json::parse::from_str(text).map_err(|err| {
        Error::new(ErrorKind::Usage)
            .with_message("invalid json")
            .with_source(err)
    })
}

fn encode_value(value: &Value) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(value).map_err(|err| {
        Error::new(ErrorKind::Usage)
            .with_message("failed to serialize value")
            .with_source(err)
    })
}

fn write_buf(out_buf: *mut mblt_buf, bytes: Vec<u8>) -> Result<(), Error> {
    if out_buf.is_null() {
        return Err(Error::new(ErrorKind::Usage).with_message("out_buf is null"));
    }
    unsafe {
        let buf = &mut *out_buf;
        let mut data = bytes.into_boxed_slice();
        buf.len = data.len();
        buf.data = data.as_mut_ptr();
        std::mem::forget(data);
    }
    Ok(())
}

fn fail(out_err: *mut *mut mblt_error, err: Error) -> i32 {
    if out_err.is_null() {
        return -1;
    }
    let error = Box::new(mblt_error {
        kind: error_kind_code(err.kind()),
        message: to_c_string(err.message().unwrap_or("")),
    });
    unsafe {
        *out_err = Box::into_raw(error);
    }
    -1
}

fn to_c_string(input: &str) -> *mut c_char {
    CString::new(input)
        .map(|s| s.into_raw())
        .unwrap_or(ptr::null_mut())
}
