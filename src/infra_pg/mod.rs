mod credential_repo_pg;
pub use credential_repo_pg::*;

mod pool;
pub use pool::*;
