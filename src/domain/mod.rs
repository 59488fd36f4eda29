pub mod error;
pub mod settings;

pub use error::AppError;
pub use settings::{GitHubAppCredentials, LaunchSettings, parse_branches, repository_lines};
