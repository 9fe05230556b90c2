use backend::config::db::{DbKind, DbOwner, RuntimeEnv};
use backend::infra::db::connect_db;
use clap::{Parser, ValueEnum};
use migration::{migrate, MigrationCommand};

#[derive(Clone, Copy, ValueEnum)]
enum Env {
    Prod,
    Test,
}

impl From<Env> for RuntimeEnv {
    fn from(env: Env) -> Self {
        match env {
            Env::Prod => RuntimeEnv::Prod,
            Env::Test => RuntimeEnv::Test,
        }
    }
}

/// In-memory stores are rebuilt on every start, so only persistent ones are offered.
#[derive(Clone, Copy, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

impl From<Db> for DbKind {
    fn from(db: Db) -> Self {
        match db {
            Db::Postgres => DbKind::Postgres,
            Db::SqliteFile => DbKind::SqliteFile,
        }
    }
}

fn parse_command(raw: &str) -> Result<MigrationCommand, String> {
    raw.parse()
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Pub golf database migration tool")]
struct Args {
    /// up | down | fresh | reset | refresh | status
    #[arg(value_parser = parse_command)]
    command: MigrationCommand,

    /// Runtime environment
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,

    /// Database type
    #[arg(short, long, value_enum, default_value = "postgres")]
    db: Db,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,migration_cli=info,backend=info,sqlx=warn")
        .init();

    let args = Args::parse();
    let env = RuntimeEnv::from(args.env);
    let kind = DbKind::from(args.db);

    let conn = match connect_db(kind, env, DbOwner::Owner).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("❌ Could not connect to {kind}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, args.command).await {
        eprintln!("❌ Migration failed: {e}");
        std::process::exit(1);
    }
}
