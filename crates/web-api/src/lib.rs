//! Web API 层。
//!
//! 提供 Axum 路由，将 HTTP 请求委托给应用层的接收层。

mod error;
mod routes;
mod state;

pub use error::{ApiError, ErrorBody};
pub use routes::{router, FOLLOWING_CREATED_MESSAGE, STATUS_MESSAGE};
pub use state::AppState;
