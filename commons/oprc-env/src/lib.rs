//! Typed access to environment variables.
//!
//! Each accessor looks a variable up and converts it into a string, boolean,
//! signed integer or float. An unset variable, an empty one and one that does
//! not parse are reported as distinct [`EnvErrorKind`]s. The `*_or`
//! variants swallow all three and return the caller's fallback instead.
//!
//! ```
//! use oprc_env::{EnvErrorKind, get_i32, get_string, get_string_or};
//!
//! unsafe {
//!     std::env::set_var("OPRC_ENV_DOC_NAME", "hello");
//!     std::env::set_var("OPRC_ENV_DOC_PORT", "8080");
//! }
//!
//! assert_eq!(get_string("OPRC_ENV_DOC_NAME").unwrap(), "hello");
//! assert_eq!(get_i32("OPRC_ENV_DOC_PORT").unwrap(), 8080);
//!
//! let err = get_string("OPRC_ENV_DOC_UNSET").unwrap_err();
//! assert_eq!(err.kind(), EnvErrorKind::Undefined);
//! assert_eq!(get_string_or("OPRC_ENV_DOC_UNSET", "fallback"), "fallback");
//! ```
//!
//! Lookups go through an [`EnvSource`], so the same accessors work against an
//! isolated [`MapEnv`]:
//!
//! ```
//! use oprc_env::{Env, MapEnv};
//!
//! let env = Env::new(MapEnv::from_pairs([("OAAS_RETRIES", "3")])).with_prefix("OAAS_");
//! assert_eq!(env.get_i8("RETRIES").unwrap(), 3);
//! assert_eq!(env.get_f64_or("RATIO", 2.5), 2.5);
//! ```

pub mod error;
pub mod fallback;
pub mod parse;
pub mod reader;
pub mod source;

pub use error::*;
pub use fallback::*;
pub use parse::*;
pub use reader::*;
pub use source::*;
