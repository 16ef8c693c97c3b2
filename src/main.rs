use parlance::infra_pg;
use parlance::logger::*;
use parlance::ops;
use parlance::settings::*;
use parlance::smoke;
use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    let logger_config = LogConfig {
        filter: project_settings.log.filter.clone(),
    };
    logger.reload_from_config(&logger_config)?;

    match cli.command {
        Command::Db(command) => {
            let pool = infra_pg::connect(&project_settings.database).await?;
            let result = run_db_command(&pool, command).await;
            pool.close().await;
            result?;
        }
        Command::Credential(command) => match command {
            CredentialCommand::Check { email, password } => {
                let pool = infra_pg::connect(&project_settings.database).await?;
                let result =
                    ops::check_credential(&pool, &project_settings.hasher, &email, &password).await;
                pool.close().await;
                result?;
            }
            CredentialCommand::Hash { password } => {
                ops::hash_credential(&project_settings.hasher, &password).await?;
            }
        },
        Command::Api(command) => {
            let client = smoke::ApiClient::new(&project_settings.api)?;
            match command {
                ApiCommand::Health => smoke::health(&client).await?,
                ApiCommand::Signup { email, password } => {
                    smoke::signup(&client, &email, &password).await?
                }
                ApiCommand::Login { email, password } => {
                    smoke::login(&client, &email, &password).await?
                }
                ApiCommand::Transcribe {
                    file,
                    language,
                    token,
                } => smoke::transcribe(&client, &file, language.as_deref(), token.as_deref()).await?,
                ApiCommand::Transcription { id, token } => {
                    smoke::transcription(&client, &id, token.as_deref()).await?
                }
            }
        }
    }

    Ok(())
}

async fn run_db_command(pool: &PgPool, command: DbCommand) -> anyhow::Result<()> {
    match command {
        DbCommand::Ping => ops::ping(pool).await,
        DbCommand::Schema { table } => ops::schema(pool, &table).await,
        DbCommand::Constraints { table } => ops::constraints(pool, &table).await,
        DbCommand::Encoding => ops::encoding(pool).await,
        DbCommand::Latest {
            table,
            order_by,
            limit,
        } => ops::latest(pool, &table, &order_by, limit).await,
        DbCommand::AddColumn {
            table,
            column,
            sql_type,
        } => ops::add_column(pool, &table, &column, &sql_type).await,
        DbCommand::StampRevision { revision, table } => {
            ops::stamp_revision(pool, &table, &revision).await
        }
    }
}
