use clap::{
    crate_authors,
    crate_description,
    crate_name,
    crate_version,
    Args,
    Parser,
};

// `Options` is a structup definition to provide clean command-line args for the indexer.
#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Replay a decoded-event stream and project it into entity state.
    Run(RunOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    /// Path to the decoded-event stream, one JSON event record per line, in
    /// delivery order.
    #[arg(long = "events")]
    #[arg(env = "SPACE_INDEXER_EVENTS")]
    #[arg(default_value = "events.jsonl")]
    pub events: String,

    /// Print the final entity state as pretty JSON on stdout after the
    /// replay finishes.
    #[arg(long = "dump")]
    pub dump: bool,
}
