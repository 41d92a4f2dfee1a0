use clap::{Parser, Subcommand};
use serde::Serialize;

use gerrit_groups::{
    ApiError, Config, GerritClient, GerritGroups, GroupInput, Groups, ListGroupsOption,
};

#[derive(Parser)]
#[command(author, version, about = "List, query, show and create Gerrit groups", long_about = None)]
struct Cli {
    /// Base URL of the Gerrit server
    #[arg(long, env = "GERRIT_URL")]
    url: String,
    #[arg(long, env = "GERRIT_USERNAME")]
    username: Option<String>,
    /// HTTP password of the user
    #[arg(long, env = "GERRIT_PASSWORD", hide_env_values = true)]
    password: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List groups
    List {
        /// Only groups that own the project, repeatable
        #[arg(short, long)]
        project: Vec<String>,
        /// Only the group with this UUID, repeatable
        #[arg(short, long)]
        group: Vec<String>,
        #[arg(long)]
        visible_to_all: bool,
        /// Only groups the user is a member of
        #[arg(short, long)]
        user: Option<String>,
        /// Only groups the caller owns
        #[arg(long)]
        owned: bool,
        #[arg(short = 'n', long, default_value_t = 0)]
        limit: u32,
        #[arg(short = 'S', long, default_value_t = 0)]
        start: u32,
        /// Only groups whose name contains this substring
        #[arg(short = 'm', long = "match")]
        substring: Option<String>,
        #[arg(long)]
        suggest: Option<String>,
        /// MEMBERS or INCLUDES, repeatable
        #[arg(short = 'o', long = "option")]
        options: Vec<ListGroupsOption>,
    },
    /// Query groups, e.g. `inname:test`
    Query {
        query: String,
        #[arg(short = 'n', long, default_value_t = 0)]
        limit: u32,
        #[arg(short = 'S', long, default_value_t = 0)]
        start: u32,
        #[arg(short = 'o', long = "option")]
        options: Vec<ListGroupsOption>,
    },
    /// Show a single group by name or UUID
    Show { id: String },
    /// Create a group
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        visible_to_all: bool,
    },
}

fn main() -> gerrit_groups::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
    let cli = Cli::parse();

    let mut config = Config::new(cli.url);
    config.username = cli.username;
    config.password = cli.password;
    let client = GerritClient::new(&config)?;
    match config.credentials() {
        Some((user, _)) => log::info!("Connecting to {} as {}", config.url, user),
        None => log::info!("Connecting to {} anonymously", config.url),
    }
    let groups = GerritGroups::new(client);

    match cli.command {
        Commands::List {
            project,
            group,
            visible_to_all,
            user,
            owned,
            limit,
            start,
            substring,
            suggest,
            options,
        } => {
            let mut request = groups.list()?;
            request
                .add_options(options)
                .with_visible_to_all(visible_to_all)
                .with_owned(owned)
                .with_limit(limit)
                .with_start(start);
            for project in project {
                request.with_project(project);
            }
            for uuid in group {
                request.add_group(uuid);
            }
            if let Some(user) = user {
                request.with_user(user);
            }
            if let Some(substring) = substring {
                request.with_substring(substring);
            }
            if let Some(suggest) = suggest {
                request.with_suggest(suggest);
            }
            let result = request.get()?;
            log::info!("Listed {} groups", result.len());
            print_json(&result)
        }
        Commands::Query {
            query,
            limit,
            start,
            options,
        } => {
            let result = groups
                .query_with(&query)?
                .with_limit(limit)
                .with_start(start)
                .with_options(options)
                .get()?;
            log::info!("Query {} matched {} groups", query, result.len());
            print_json(&result)
        }
        Commands::Show { id } => print_json(groups.id(&id)?.info()),
        Commands::Create {
            name,
            description,
            visible_to_all,
        } => {
            let input = GroupInput {
                description,
                visible_to_all: visible_to_all.then_some(true),
                ..GroupInput::named(name)
            };
            let group = groups.create_from(input)?;
            log::info!("Created group {}", group.id());
            print_json(group.info())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> gerrit_groups::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(ApiError::from)?;
    println!("{json}");
    Ok(())
}
