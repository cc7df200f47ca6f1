//! moltbook - command-line client for moltbook.com
//!
//! Browse the feed, read and create posts and comments, vote, and look up
//! users and submolts from the terminal.

use clap::Parser;
use moltbook::cli::args::{generate_completions, Cli, Commands};
use moltbook::cli::output::{error_payload, OutputFormat};
use moltbook::commands::{
    run_comment, run_create, run_delete, run_feed, run_post, run_submolts, run_user,
    run_vote_comment, run_vote_post,
};
use moltbook::domain::VoteDirection;
use moltbook::error::{AppError, CredentialError};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e, cli.output_format());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let credentials = cli.credentials.as_deref();
    let format = cli.output_format();

    match &cli.command {
        Commands::Feed(args) => run_feed(args, credentials, format),

        Commands::Post { post_id } => run_post(post_id, credentials, format),

        Commands::Create(args) => run_create(args, credentials, format),

        Commands::Delete { post_id } => run_delete(post_id, credentials, format),

        Commands::Comment(args) => run_comment(args, credentials, format),

        Commands::User { username } => run_user(username, credentials, format),

        Commands::Submolts => run_submolts(credentials, format),

        Commands::Upvote { post_id } => {
            run_vote_post(post_id, VoteDirection::Up, credentials, format)
        }

        Commands::Downvote { post_id } => {
            run_vote_post(post_id, VoteDirection::Down, credentials, format)
        }

        Commands::UpvoteComment { comment_id } => {
            run_vote_comment(comment_id, VoteDirection::Up, credentials, format)
        }

        Commands::DownvoteComment { comment_id } => {
            run_vote_comment(comment_id, VoteDirection::Down, credentials, format)
        }

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError, format: OutputFormat) {
    if format == OutputFormat::Json {
        let payload = error_payload(err);
        let json = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string());
        eprintln!("{}", json);
        return;
    }

    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Credentials(CredentialError::NotFound { searched }) => {
            eprintln!();
            eprintln!("Hint: Create a credentials file containing your API key.");
            eprintln!("      Searched locations:");
            for path in searched {
                eprintln!("        {}", path.display());
            }
        }
        AppError::Api(moltbook::error::ApiError::RateLimited {
            hint,
            retry_after_minutes,
            ..
        }) => {
            if let Some(hint) = hint {
                eprintln!("Hint: {}", hint);
            }
            eprintln!("Retry in: {} minutes", retry_after_minutes);
        }
        AppError::Api(moltbook::error::ApiError::Validation {
            hint: Some(hint), ..
        }) => {
            eprintln!("Hint: {}", hint);
        }
        AppError::Api(moltbook::error::ApiError::NotFound { hint: Some(hint) }) => {
            eprintln!("Hint: {}", hint);
        }
        AppError::Api(moltbook::error::ApiError::Unknown { body, .. }) if !body.is_empty() => {
            eprintln!();
            eprintln!("Response body:");
            eprintln!("{}", body);
        }
        _ => {}
    }
}
