// Application state
// State machines owned by pages through signals

pub mod search_session;
