//! One function per maintenance command. These are deliberately thin:
//! connect, query, print. Anything reusable lives behind the ports in
//! `application_port` / `domain_port`.

mod ident;
pub use ident::*;

mod db_ping;
pub use db_ping::*;

mod db_schema;
pub use db_schema::*;

mod db_constraints;
pub use db_constraints::*;

mod db_encoding;
pub use db_encoding::*;

mod db_latest;
pub use db_latest::*;

mod db_add_column;
pub use db_add_column::*;

mod db_stamp_revision;
pub use db_stamp_revision::*;

mod credential_check;
pub use credential_check::*;
