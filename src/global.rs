//! Accessors over the real process environment with default settings.
//!
//! These read `std::env` on every call. Variables should be set (directly or
//! through [`load_dotenv`] / [`load_vault`](crate::load_vault)) before other
//! threads start reading.

use std::sync::LazyLock;

use crate::accessor::Env;
use crate::error::EnvError;
use crate::source::ProcessEnv;

static PROCESS: LazyLock<Env<ProcessEnv>> = LazyLock::new(Env::default);

/// The shared process-environment accessor behind the free functions.
pub fn process_env() -> &'static Env<ProcessEnv> {
    &PROCESS
}

/// Resolved string, or `""`.
pub fn get_string(key: &str) -> String {
    PROCESS.get_string(key)
}

pub fn get_string_or_default(key: &str, default: &str) -> String {
    PROCESS.get_string_or(key, default)
}

pub fn get_string_or_error(key: &str) -> Result<String, EnvError> {
    PROCESS.try_get_string(key)
}

#[track_caller]
pub fn get_string_or_panic(key: &str) -> String {
    PROCESS.must_get_string(key)
}

/// Base-10 integer, or `0`.
pub fn get_int(key: &str) -> i64 {
    PROCESS.get_int(key)
}

pub fn get_int_or_default(key: &str, default: i64) -> i64 {
    PROCESS.get_int_or(key, default)
}

pub fn get_int_or_error(key: &str) -> Result<i64, EnvError> {
    PROCESS.try_get_int(key)
}

#[track_caller]
pub fn get_int_or_panic(key: &str) -> i64 {
    PROCESS.must_get_int(key)
}

/// Float, or `0.0`. Always `f64`; other widths via [`Env::get`].
pub fn get_float(key: &str) -> f64 {
    PROCESS.get_float(key)
}

pub fn get_float_or_default(key: &str, default: f64) -> f64 {
    PROCESS.get_float_or(key, default)
}

pub fn get_float_or_error(key: &str) -> Result<f64, EnvError> {
    PROCESS.try_get_float(key)
}

#[track_caller]
pub fn get_float_or_panic(key: &str) -> f64 {
    PROCESS.must_get_float(key)
}

/// Classified boolean, or `false`. See [`classify`](crate::classify).
pub fn get_bool(key: &str) -> bool {
    PROCESS.get_bool(key)
}

pub fn get_bool_or_default(key: &str, default: bool) -> bool {
    PROCESS.get_bool_or(key, default)
}

pub fn get_bool_or_error(key: &str) -> Result<bool, EnvError> {
    PROCESS.try_get_bool(key)
}

#[track_caller]
pub fn get_bool_or_panic(key: &str) -> bool {
    PROCESS.must_get_bool(key)
}

/// `yes` in any case or a standard spelling, else `default`.
pub fn get_bool_lenient(key: &str, default: bool) -> bool {
    PROCESS.get_bool_lenient(key, default)
}

/// Load `.env` from the working directory, then each of `paths` (later
/// files win), without replacing variables that are already set.
#[cfg(feature = "dotenv")]
pub fn load_dotenv<P: AsRef<std::path::Path>>(
    paths: &[P],
) -> Result<crate::dotenv::LoadReport, EnvError> {
    crate::dotenv::DotEnvLoader::new().files(paths).load()
}
