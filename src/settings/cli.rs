use super::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "parlance", about = "Operations toolkit for the transcription backend")]
pub struct Cli {
    #[arg(long)]
    pub settings: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Database probe, diagnostics and ad-hoc schema fixes
    #[command(subcommand)]
    Db(DbCommand),
    /// Stored-credential debugging
    #[command(subcommand)]
    Credential(CredentialCommand),
    /// Smoke checks against the transcription/user HTTP API
    #[command(subcommand)]
    Api(ApiCommand),
}

#[derive(Subcommand, Debug)]
pub enum DbCommand {
    /// Connectivity probe: SELECT 1, server version, round-trip time
    Ping,
    /// Column layout of a table
    Schema {
        #[arg(long)]
        table: String,
    },
    /// Constraints defined on a table
    Constraints {
        #[arg(long)]
        table: String,
    },
    /// Server/client encoding and database collation
    Encoding,
    /// Newest rows of a table, rendered as JSON
    Latest {
        #[arg(long)]
        table: String,
        #[arg(long, default_value = "created_at")]
        order_by: String,
        #[arg(long, default_value_t = 5)]
        limit: i64,
    },
    /// Ad-hoc migration: ALTER TABLE .. ADD COLUMN IF NOT EXISTS
    AddColumn {
        #[arg(long)]
        table: String,
        #[arg(long)]
        column: String,
        #[arg(long)]
        sql_type: String,
    },
    /// Repair the migration tool's single-row version table
    StampRevision {
        #[arg(long)]
        revision: String,
        #[arg(long, default_value = "alembic_version")]
        table: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CredentialCommand {
    /// Verify a candidate password against the hash stored for an email
    Check {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Produce a fresh stored-hash string for a password
    Hash {
        #[arg(long)]
        password: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ApiCommand {
    /// GET /health
    Health,
    /// POST /api/v1/users
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// POST /api/v1/auth/login
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Upload an audio file to POST /api/v1/transcriptions
    Transcribe {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        token: Option<String>,
    },
    /// GET /api/v1/transcriptions/{id}
    Transcription {
        #[arg(long)]
        id: String,
        #[arg(long)]
        token: Option<String>,
    },
}
