//! Per-resource façades over the API client.
//!
//! Each façade is a thin, declarative binding of HTTP verbs and fixed path
//! templates to typed payloads. There is no logic here beyond path
//! interpolation: a not-found id, for example, surfaces only as the
//! backend's response.

pub mod items;
pub mod session;
pub mod users;

pub use items::{Item, ItemApi, ItemCreate};
pub use session::{SessionApi, TokenResponse};
pub use users::{Role, User, UserApi, UserCreate, UserUpdate};
