use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use uatrack::{PageviewOptions, SessionControl, Tracker, TrackerConfig};

#[derive(Parser)]
#[command(name = "uatrack")]
#[command(about = "Send a single analytics hit from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum SessionArg {
    Start,
    End,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a pageview hit
    Pageview {
        /// Document path, e.g. /home
        path: String,
        /// Document title
        title: String,
        /// Client identifier (cid)
        customer_id: String,
        #[arg(long)]
        user_id: Option<String>,
        /// Mark the hit as a session boundary
        #[arg(long, value_enum)]
        session: Option<SessionArg>,
    },
    /// Send a custom event hit
    Event {
        category: String,
        action: String,
        /// Client identifier (cid)
        customer_id: String,
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        value: Option<i64>,
        #[arg(long)]
        user_id: Option<String>,
    },
    /// Send an exception hit
    Exception {
        description: String,
        /// Client identifier (cid)
        customer_id: String,
        #[arg(long)]
        fatal: bool,
        #[arg(long)]
        user_id: Option<String>,
    },
    /// Send a user timing hit
    Timing {
        category: String,
        variable_name: String,
        /// Measured time in milliseconds
        time_ms: i64,
        /// Client identifier (cid)
        customer_id: String,
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        user_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = TrackerConfig::from_env()?;
    let tracker = Tracker::new(config)?;

    match cli.command {
        Commands::Pageview {
            path,
            title,
            customer_id,
            user_id,
            session,
        } => {
            let opts = PageviewOptions {
                user_id,
                session: match session {
                    Some(SessionArg::Start) => SessionControl::Start,
                    Some(SessionArg::End) => SessionControl::End,
                    None => SessionControl::None,
                },
                ..Default::default()
            };
            tracker.pageview(&path, &title, &customer_id, &opts).await?;
            println!("✓ Sent pageview for '{}'", path);
        }
        Commands::Event {
            category,
            action,
            customer_id,
            label,
            value,
            user_id,
        } => {
            tracker
                .event(
                    &category,
                    &action,
                    label.as_deref(),
                    value,
                    &customer_id,
                    user_id.as_deref(),
                )
                .await?;
            println!("✓ Sent event '{}/{}'", category, action);
        }
        Commands::Exception {
            description,
            customer_id,
            fatal,
            user_id,
        } => {
            tracker
                .exception(&description, fatal, &customer_id, user_id.as_deref())
                .await?;
            println!("✓ Sent exception '{}'", description);
        }
        Commands::Timing {
            category,
            variable_name,
            time_ms,
            customer_id,
            label,
            user_id,
        } => {
            tracker
                .timing(
                    &category,
                    &variable_name,
                    label.as_deref(),
                    time_ms,
                    &customer_id,
                    user_id.as_deref(),
                )
                .await?;
            println!("✓ Sent timing '{}/{}' ({} ms)", category, variable_name, time_ms);
        }
    }

    Ok(())
}
