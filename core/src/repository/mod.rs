pub mod cache;
pub mod file;
pub mod traits;

pub use cache::ContributionCache;
pub use file::FileArtifactRepository;
pub use traits::{ArtifactRepository, ContributionSource};
