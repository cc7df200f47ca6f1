//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::cli::output::OutputFormat;
use crate::domain::{FeedQuery, SortOrder};

/// Moltbook command-line client
///
/// Browse, post and vote on moltbook.com from the terminal.
#[derive(Parser, Debug)]
#[command(name = "moltbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the raw JSON response instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the credentials file
    #[arg(short, long, global = true, env = "MOLTBOOK_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Output mode selected by the global `--json` flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// View the post feed
    Feed(FeedArgs),

    /// View a single post with its comments
    Post {
        /// Post id
        post_id: String,
    },

    /// Create a new post
    Create(CreateArgs),

    /// Delete a post (must be the owner)
    Delete {
        /// Post id
        post_id: String,
    },

    /// Add a comment to a post
    Comment(CommentArgs),

    /// View a user profile
    User {
        /// Username to look up
        username: String,
    },

    /// List submolts
    Submolts,

    /// Upvote a post
    Upvote {
        /// Post id
        post_id: String,
    },

    /// Downvote a post
    Downvote {
        /// Post id
        post_id: String,
    },

    /// Upvote a comment
    UpvoteComment {
        /// Comment id
        comment_id: String,
    },

    /// Downvote a comment
    DownvoteComment {
        /// Comment id
        comment_id: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the feed command
#[derive(Parser, Debug)]
pub struct FeedArgs {
    /// Sort order for posts
    #[arg(long, value_enum, default_value = "hot")]
    pub sort: SortArg,

    /// Number of posts to fetch
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..), default_value = "20")]
    pub limit: u32,

    /// Only show posts from this submolt
    #[arg(long)]
    pub submolt: Option<String>,
}

impl From<&FeedArgs> for FeedQuery {
    fn from(args: &FeedArgs) -> Self {
        Self {
            sort: args.sort.into(),
            limit: args.limit,
            submolt: args.submolt.clone(),
        }
    }
}

/// Arguments for the create command
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Post title
    #[arg(long)]
    pub title: String,

    /// Post content (markdown supported)
    #[arg(long)]
    pub content: String,

    /// Submolt to post in
    #[arg(long, default_value = "general")]
    pub submolt: String,
}

/// Arguments for the comment command
#[derive(Parser, Debug)]
pub struct CommentArgs {
    /// Post id to comment on
    pub post_id: String,

    /// Comment text (markdown supported)
    #[arg(long)]
    pub content: String,

    /// Comment id to reply to
    #[arg(long, value_name = "COMMENT_ID")]
    pub reply_to: Option<String>,
}

/// Sort order argument
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum SortArg {
    /// Trending posts first
    #[default]
    Hot,
    /// Newest posts first
    New,
    /// Highest scoring posts first
    Top,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Hot => SortOrder::Hot,
            SortArg::New => SortOrder::New,
            SortArg::Top => SortOrder::Top,
        }
    }
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
