use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ForgeSiteDiary
/// Daily site diary for construction jobs, backed by SQLite
#[derive(Parser)]
#[command(
    name = "forgesitediary",
    version = env!("CARGO_PKG_VERSION"),
    about = "A site diary CLI: log daily entries per job and carry open work into the next day",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register a new job
    JobAdd {
        /// Job number (unique, e.g. J-1042)
        number: String,

        /// Job name
        name: String,

        #[arg(long = "contractor", help = "Main contractor")]
        contractor: Option<String>,

        #[arg(long = "site", help = "Site address")]
        site: Option<String>,

        #[arg(
            long = "stage",
            help = "Stage: prestart, in_progress, snagging, complete"
        )]
        stage: Option<String>,
    },

    /// List jobs
    Jobs {
        #[arg(long = "all", help = "Include inactive jobs")]
        all: bool,
    },

    /// Open a day entry (creating it and carrying open items over if needed)
    Entry {
        /// Job number or id
        job: String,

        #[arg(long = "date", help = "Entry date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "weather")]
        weather: Option<String>,

        #[arg(long = "labour", help = "Labour summary")]
        labour: Option<String>,

        #[arg(long = "materials", help = "Materials summary")]
        materials: Option<String>,

        #[arg(long = "issues", help = "Issues summary")]
        issues: Option<String>,
    },

    /// Add an item to a job's day entry
    ItemAdd {
        /// Job number or id
        job: String,

        /// Item title
        title: String,

        #[arg(
            long = "type",
            default_value = "task",
            help = "Item type: task, material, issue, delay, email"
        )]
        item_type: String,

        #[arg(long = "priority", help = "critical, high, normal, low")]
        priority: Option<String>,

        #[arg(long = "status", help = "Initial status (default depends on type)")]
        status: Option<String>,

        #[arg(long = "date", help = "Entry date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "due", help = "Due date (YYYY-MM-DD)")]
        due: Option<String>,

        #[arg(long = "order-by", help = "Order-by date for materials (YYYY-MM-DD)")]
        order_by: Option<String>,

        #[arg(long = "on-site", help = "Required on site date for materials (YYYY-MM-DD)")]
        on_site: Option<String>,

        #[arg(long = "follow-up", help = "Follow-up due date for emails (YYYY-MM-DD)")]
        follow_up: Option<String>,

        #[arg(long = "details")]
        details: Option<String>,

        #[arg(long = "assigned", help = "Person responsible")]
        assigned: Option<String>,
    },

    /// Change the status of an item
    Status {
        /// Item id or unique id prefix
        item: String,

        /// New status
        status: String,
    },

    /// Delete an item
    Del {
        /// Item id or unique id prefix
        item: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List the items of a day entry
    List {
        /// Job number or id
        job: String,

        #[arg(long = "date", help = "Entry date (YYYY-MM-DD, default latest entry)")]
        date: Option<String>,

        #[arg(long = "open", help = "Show only items that are not closed")]
        open: bool,
    },

    /// Carry open items from one day entry into another
    Rollover {
        /// Job number or id
        job: String,

        #[arg(long = "from", help = "Source entry date (YYYY-MM-DD)")]
        from: String,

        #[arg(long = "to", help = "Target entry date (YYYY-MM-DD)")]
        to: String,

        #[arg(long = "dry-run", help = "Show what would be carried without saving")]
        dry_run: bool,
    },

    /// Show where an item was carried from
    Lineage {
        /// Item id or unique id prefix
        item: String,
    },

    /// Show critical / high / overdue / ordered counters
    Priority {
        #[arg(long = "job", help = "Restrict to one job")]
        job: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long = "yes", short = 'y', help = "Overwrite without asking")]
        yes: bool,
    },

    /// Export diary items
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "job", help = "Restrict to one job")]
        job: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
