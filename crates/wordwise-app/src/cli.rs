use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Look up words and polish sentences with an LLM", long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Args {
    /// Profile name (defaults to main)
    #[arg(short, long, value_name = "PROFILE", global = true)]
    pub profile: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Interactive session when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Explain a word: meaning, example, synonyms, antonyms and a short story
    Lookup {
        #[arg(value_name = "WORD")]
        word: String,

        /// Add the result to favorites
        #[arg(short, long)]
        save: bool,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rewrite a sentence in more natural English
    Improve {
        #[arg(value_name = "SENTENCE", required = true, num_args = 1..)]
        sentence: Vec<String>,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,

        /// Copy the improved sentence to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Print the pronunciation practice deck
    Practice,

    /// Manage saved words
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Interactive session
    Session,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FavoritesAction {
    /// List saved words
    List {
        #[arg(long)]
        json: bool,
    },

    /// Remove a saved word
    Remove {
        #[arg(value_name = "WORD")]
        word: String,
    },

    /// Remove every saved word
    Clear,
}
