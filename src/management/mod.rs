mod auth;
mod store;
mod tracks;

pub use auth::TOKEN_FILE;
pub use auth::TokenManager;
pub use store::StoreError;
pub use tracks::TRACK_FILE;
pub use tracks::TrackFileManager;
