mod active_operation;
mod explorer_session;
mod session_config;

pub use active_operation::ActiveOperation;
pub use explorer_session::ExplorerSession;
pub use session_config::SessionConfig;
