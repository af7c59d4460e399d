pub use crate::{assert_error, get_cached_app, request::*, response::*, uuid, App};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use http::{header, StatusCode};
pub use serde_json::{json, Value};
pub use serial_test::{self, parallel, serial};
pub use trivia_backend::error;
