use clap::Parser;
use showcase_cache::SystemClock;
use showcase_core::{
    gallery, Category, Config, GalleryFilter, GitHubSource, Project, ProjectCatalog,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "showcase")]
#[command(version, about = "Portfolio projects derived from a GitHub account", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "SHOWCASE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the GitHub account
    #[arg(long, global = true, env = "SHOWCASE_GITHUB_USER")]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List projects, optionally narrowed down
    List {
        /// Frontend, Backend, DevOps or "Full Stack"
        #[arg(long)]
        category: Option<Category>,
        /// Only featured projects
        #[arg(long)]
        featured: bool,
        /// Exact tag label, e.g. "React"
        #[arg(long)]
        tag: Option<String>,
        /// Substring of the title or a tag
        #[arg(long)]
        search: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one project
    Show {
        /// Project slug
        slug: String,
        #[arg(long)]
        json: bool,
    },
    /// Tags across all projects, most used first
    Tags,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "showcase=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(user) = cli.user {
        config.github.username = user;
    }

    let source = Arc::new(GitHubSource::new(&config.github)?);
    let catalog = ProjectCatalog::from_config(source, Arc::new(SystemClock), &config)?;

    match cli.command {
        Some(Commands::List {
            category,
            featured,
            tag,
            search,
            json,
        }) => {
            let projects = catalog.all_projects().await;
            let filter = GalleryFilter {
                category,
                featured_only: featured,
                tag,
                search,
            };
            let hits = filter.apply(&projects);
            tracing::info!("{} of {} projects match", hits.len(), projects.len());

            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                for project in hits {
                    print_row(project);
                }
            }
        }
        Some(Commands::Show { slug, json }) => match catalog.project_by_slug(&slug).await {
            Some(project) if json => println!("{}", serde_json::to_string_pretty(&project)?),
            Some(project) => print_detail(&project),
            None => {
                eprintln!("Project not found: {}", slug);
                std::process::exit(1);
            }
        },
        Some(Commands::Tags) => {
            let projects = catalog.all_projects().await;
            for (tag, count) in gallery::tag_counts(&projects) {
                println!("{:>4}  {}", count, tag);
            }
        }
        None => {
            println!("No command specified. Try --help");
        }
    }

    Ok(())
}

fn print_row(project: &Project) {
    let star = if project.featured { "*" } else { " " };
    println!(
        "{} {:<32} {:<11} {}",
        star,
        project.slug,
        project.category.label(),
        project.tags.join(", ")
    );
}

fn print_detail(project: &Project) {
    println!("{}", project.title);
    println!("{}", "=".repeat(project.title.chars().count()));
    println!("Category: {}", project.category);
    if !project.tags.is_empty() {
        println!("Tags:     {}", project.tags.join(", "));
    }
    if let Some(url) = &project.repo_url {
        println!("Repo:     {}", url);
    }
    if let Some(url) = &project.demo_url {
        println!("Demo:     {}", url);
    }
    for metric in project.metrics.iter().flatten() {
        println!("{:<9} {}", format!("{}:", metric.label), metric.value);
    }
    if let Some(used_by) = &project.used_by {
        println!();
        for line in used_by {
            println!("- {}", line);
        }
    }
    println!();
    println!("{}", project.full_description.trim());
}
