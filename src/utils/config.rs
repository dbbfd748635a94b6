/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads and parses an environment variable, falling back to `default`
///
/// Surrounding whitespace is ignored. A value that does not parse is logged
/// and replaced by the default, as is a missing one.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    let Ok(raw) = env::var(env_var) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(e) => {
            error!("Ignoring {}={:?}: {:?}", env_var, raw, e);
            default
        }
    }
}

/// Gets an environment variable and parses it, returning None if not found, empty or invalid
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// Parsed value if found and valid, None otherwise
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) if val.trim().is_empty() => None,
        Ok(val) => val.trim().parse::<T>().ok(),
        Err(_) => None,
    }
}

/// Reads a string variable that the client cannot work without
///
/// Missing variables are reported with `error!` and replaced by an empty
/// string, so the failure surfaces at login with the server's message
/// instead of at configuration time.
pub fn get_required_env(env_var: &str) -> String {
    match get_env_or_none::<String>(env_var) {
        Some(value) => value,
        None => {
            error!("{} not found in environment variables or .env file", env_var);
            String::new()
        }
    }
}
