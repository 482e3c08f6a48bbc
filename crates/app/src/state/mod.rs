pub mod search;
pub mod session;

pub use search::{use_search, SearchFilter, SearchState};
pub use session::{use_session, Session, SessionState};
