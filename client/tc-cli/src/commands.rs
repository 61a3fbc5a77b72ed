use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the temp ID valid right now, or null
    Current,

    /// Print the most recently stored temp ID, or null
    Latest,

    /// Print stored temp IDs, most recent first
    List {
        /// Only temp IDs that have not expired
        #[arg(long)]
        valid: bool,
    },

    /// Fetch a batch of temp IDs now
    Refill,

    /// Fetch temp IDs unless some are already stored, retrying failures
    Ensure,

    /// Delete every stored temp ID
    Reset,
}
