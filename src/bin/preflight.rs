use movie_rpc::infra::{self, Config, StorageBackend};
use movie_rpc::PostgresMovieStore;
use movie_rpc::MovieStore;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Requires either DATABASE_URL or DB_HOST, DB_PORT, DB_NAME, DB_USER, DB_PASSWORD.\n\
         Connects, creates the movies table if missing and reports the row count.\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    // Force-read config (nice error messages if malformed)
    let config = Config::from_env()?;
    let db = &config.database;

    println!("> Preflight:");
    println!("  database={}", db.redacted_target());
    println!("  listen={}", config.bind_addr());
    if config.storage == StorageBackend::Memory {
        println!("  STORAGE_BACKEND=memory: the server will not use PostgreSQL.");
    }

    let store = PostgresMovieStore::connect(db.connect_options()?, 1, db.acquire_timeout)
        .await
        .map_err(|source| infra::StartupError::Connect {
            target: db.redacted_target(),
            source,
        })?;
    println!("  Database connection successful.");

    store
        .ensure_schema()
        .await
        .map_err(infra::StartupError::Schema)?;
    println!("  Table `movies` is present.");

    let rows = store.count().await?;
    println!("  Stored movies: {}", rows);

    println!("> Preflight OK.");
    Ok(())
}
