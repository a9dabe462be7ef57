use clap::Args;
use pharmacy_app::{context::AppContext, seed};

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to initialize app context: {error}"))?;

    let result = seed::seed(&app.db).await;

    app.db.close().await;

    let summary = result.map_err(|error| format!("failed to seed database: {error}"))?;

    println!("categories: {}", summary.categories);
    println!("products: {}", summary.products);
    println!("users: {}", summary.users);
    println!("coupons: {}", summary.coupons);
    println!("demo login: {} / {}", seed::DEMO_EMAIL, seed::DEMO_PASSWORD);

    Ok(())
}
