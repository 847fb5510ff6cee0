//! Repository traits (ports)

mod repositories;

pub use repositories::{
    LoginBlocker, LoginFinder, LoginGetter, LoginRepository, LoginSaver, RepoResult,
};
