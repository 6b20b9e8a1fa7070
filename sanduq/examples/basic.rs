//! Basic example of the Sanduq container.

use std::sync::Arc;

use sanduq::prelude::*;
use tracing::{info, info_span};

// === Services ===

trait Logger: Send + Sync {
    fn log(&self, msg: &str);
}

struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, msg: &str) {
        println!("[LOG] {msg}");
    }
}

struct Config {
    database_url: String,
}

struct Database {
    url: String,
    logger: Arc<dyn Logger>,
}

impl Injectable for Database {
    fn construct(deps: &Dependencies) -> Result<Self> {
        let config: Arc<Config> = deps.arg(0)?;
        let logger: Arc<Arc<dyn Logger>> = deps.arg(1)?;
        Ok(Database {
            url: config.database_url.clone(),
            logger: (*logger).clone(),
        })
    }
}

impl Database {
    fn query(&self, sql: &str) -> String {
        self.logger.log(&format!("Executing: {sql}"));
        format!("Results from {}", self.url)
    }
}

struct UserRepository {
    db: Arc<Database>,
}

impl Injectable for UserRepository {
    fn construct(deps: &Dependencies) -> Result<Self> {
        Ok(UserRepository { db: deps.arg(0)? })
    }
}

impl UserRepository {
    fn find_user(&self, id: u64) -> String {
        self.db.query(&format!("SELECT * FROM users WHERE id = {id}"))
    }
}

struct UserController {
    repo: Arc<UserRepository>,
}

impl Injectable for UserController {
    fn construct(deps: &Dependencies) -> Result<Self> {
        Ok(UserController { repo: deps.arg(0)? })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("sanduq_container=debug")
        .init();

    let startup = info_span!("startup").entered();
    let container = Container::new();

    // Metadata can be declared apart from the bindings...
    container
        .register::<Database>()
        .inject(0, "Config")
        .inject(1, "Logger");

    container.bind("Config").to_constant_value(Config {
        database_url: "postgres://localhost/myapp".to_string(),
    });
    container
        .bind("Logger")
        .to_constant_value(Arc::new(ConsoleLogger) as Arc<dyn Logger>);
    container.bind("Database").to::<Database>().in_singleton_scope();

    // ...or next to them.
    container
        .bind("UserRepository")
        .to::<UserRepository>()
        .inject(0, "Database")
        .in_singleton_scope();
    container
        .bind("UserController")
        .to::<UserController>()
        .inject(0, "UserRepository")
        .in_transient_scope();

    container.validate()?;
    info!(services = container.id(), "Container wired");
    drop(startup);

    let first = container.get_as::<UserController>("UserController")?;
    let second = container.get_as::<UserController>("UserController")?;

    println!("{}", first.repo.find_user(42));
    println!(
        "controllers shared: {}, repository shared: {}",
        Arc::ptr_eq(&first, &second),
        Arc::ptr_eq(&first.repo, &second.repo)
    );

    for info in container.bindings() {
        println!("{info:?}");
    }

    match container.get("UserRepo") {
        Err(err) => println!("\n{err}"),
        Ok(_) => println!("\nUserRepo resolved unexpectedly"),
    }

    Ok(())
}
