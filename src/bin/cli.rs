use clap::{Parser, Subcommand};
use tutorial_api::{
    config::ServerConfig,
    db,
    models::{Tutorial, TutorialRequest},
    repositories::SqliteTutorialRepository,
    services::TutorialService,
};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "tutorial-cli")]
#[command(about = "CLI tool for managing tutorials", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tutorials
    List {
        /// Only show tutorials whose title contains this text
        #[arg(short, long)]
        title: Option<String>,
    },

    /// List published tutorials
    Published,

    /// Show a single tutorial
    Show {
        #[arg(short, long)]
        id: i64,
    },

    /// Create a new (unpublished) tutorial
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Mark a tutorial as published
    Publish {
        #[arg(short, long)]
        id: i64,
    },

    /// Mark a tutorial as unpublished
    Unpublish {
        #[arg(short, long)]
        id: i64,
    },

    /// Delete a tutorial
    Delete {
        #[arg(short, long)]
        id: i64,
    },

    /// Delete every tutorial
    Purge,
}

fn print_tutorial(tutorial: &Tutorial) {
    println!(
        "{:<5} {:<40} {:<10} {}",
        tutorial.id,
        tutorial.title,
        if tutorial.published { "Yes" } else { "No" },
        tutorial.description
    );
}

fn print_tutorials(tutorials: &[Tutorial]) {
    if tutorials.is_empty() {
        println!("No tutorials found.");
        return;
    }

    println!(
        "{:<5} {:<40} {:<10} {}",
        "ID", "Title", "Published", "Description"
    );
    println!("{}", "-".repeat(75));
    for tutorial in tutorials {
        print_tutorial(tutorial);
    }
}

async fn set_published(
    service: &TutorialService,
    id: i64,
    published: bool,
) -> Result<Tutorial, Box<dyn std::error::Error>> {
    let current = service.get_tutorial(id).await?;
    let request = TutorialRequest {
        title: current.title,
        description: current.description,
        published,
    };

    Ok(service.update_tutorial(id, request).await?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::from_env()?;

    // Connect to database
    let pool = db::create_pool(&config).await?;

    // Run migrations
    db::run_migrations(&pool).await?;

    // Initialize services
    let repository = Arc::new(SqliteTutorialRepository::new(pool));
    let service = TutorialService::new(repository);

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::List { title } => {
            let tutorials = service.list_tutorials(title.as_deref()).await?;
            print_tutorials(&tutorials);
        }
        Commands::Published => {
            let tutorials = service.list_published().await?;
            print_tutorials(&tutorials);
        }
        Commands::Show { id } => match service.get_tutorial(id).await {
            Ok(tutorial) => print_tutorial(&tutorial),
            Err(e) => {
                eprintln!("❌ Tutorial {}: {}", id, e);
                std::process::exit(1);
            }
        },
        Commands::Create { title, description } => {
            let request = TutorialRequest {
                title,
                description,
                published: false,
            };
            let tutorial = service.create_tutorial(request).await?;
            println!("✅ Tutorial created with ID {}", tutorial.id);
        }
        Commands::Publish { id } => {
            let tutorial = set_published(&service, id, true).await?;
            println!("✅ Tutorial {} published", tutorial.id);
        }
        Commands::Unpublish { id } => {
            let tutorial = set_published(&service, id, false).await?;
            println!("✅ Tutorial {} unpublished", tutorial.id);
        }
        Commands::Delete { id } => {
            service.delete_tutorial(id).await?;
            println!("✅ Tutorial {} deleted", id);
        }
        Commands::Purge => {
            service.delete_all_tutorials().await?;
            println!("✅ All tutorials deleted");
        }
    }

    Ok(())
}
