//! Filesystem access for the fork checkout

mod repo;

pub use repo::{Repo, RepoError};
