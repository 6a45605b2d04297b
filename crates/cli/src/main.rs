use clap::{Parser, Subcommand};

use bookshelf_client::{
    AlertSink, ApiClient, ClientConfig, DetailView, ListView, Navigator, Route,
};
use bookshelf_types::{BookPatch, NewBook};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "Book catalog CLI")]
struct Cli {
    /// API base URL (overrides BOOKSHELF_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all books
    List,
    /// Show one book
    Show {
        /// Book id
        id: String,
    },
    /// Add a book
    Add {
        /// Book title
        title: String,
        /// Book author
        author: String,
    },
    /// Update a book's title and author
    Update {
        /// Book id
        id: String,
        /// New title
        title: String,
        /// New author
        author: String,
    },
    /// Delete a book
    Delete {
        /// Book id
        id: String,
    },
}

/// The terminal stands in for the browser shell: navigation transitions
/// are printed, alerts go to stderr.
struct Shell;

impl Navigator for Shell {
    fn push(&self, route: Route) {
        println!("-> {}", route.path());
    }
}

impl AlertSink for Shell {
    fn alert(&self, message: &str) {
        eprintln!("! {message}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match cli.api_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env(),
    };
    let api = ApiClient::new(config);
    let shell = Shell;

    match cli.command {
        Some(Commands::List) | None => {
            let view = ListView::mount(&api).await?;
            if view.books().is_empty() {
                println!("No books found.");
            } else {
                print!("{}", view.render());
            }
        }
        Some(Commands::Show { id }) => {
            let view = DetailView::mount(&api, id).await?;
            print!("{}", view.render());
        }
        Some(Commands::Add { title, author }) => {
            let book = api.create_book(&NewBook { title, author }).await?;
            println!("Added book {}: {} by {}", book.id, book.title, book.author);
        }
        Some(Commands::Update { id, title, author }) => {
            let book = api.update_book(&id, &BookPatch { title, author }).await?;
            println!(
                "Updated book {}: {} by {}",
                book.id, book.title, book.author
            );
        }
        Some(Commands::Delete { id }) => {
            let view = DetailView::new(id);
            view.delete(&api, &shell, &shell).await;
        }
    }

    Ok(())
}
