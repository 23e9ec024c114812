use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::resource::ResourceKind;
use crate::i18n::Locale;

#[derive(Parser, Debug)]
#[command(name = "printfleet")]
#[command(about = "Tables, print queues and task distribution for a 3D-printer fleet")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured language (en, ru)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Override the configured backend URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page of a table
    Table(TableArgs),

    /// Keep a table on screen and reload it periodically
    Watch {
        kind: ResourceKind,

        #[arg(long, default_value = "30")]
        every: u64,

        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Show every printer's queue
    Queue {
        #[arg(long)]
        watch: bool,
    },

    /// Add a model run to a printer's queue
    Enqueue {
        #[arg(long)]
        printer: String,

        #[arg(long)]
        model: String,

        #[arg(long, default_value = "1")]
        quantity: String,

        /// 0 = Normal, 1 = High, 2 = Urgent
        #[arg(long, default_value = "")]
        priority: String,
    },

    /// Split a job across suitable printers
    Distribute {
        #[arg(long)]
        material: String,

        #[arg(long)]
        accuracy: String,

        #[arg(long)]
        quantity: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    pub kind: ResourceKind,

    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    /// Column to sort by on the server
    #[arg(long)]
    pub sort: Option<String>,

    #[arg(long, requires = "sort")]
    pub desc: bool,

    #[arg(long, default_value = "1")]
    pub page: usize,

    #[arg(long)]
    pub page_size: Option<usize>,

    /// Read records from a JSON array file instead of the backend
    #[arg(long)]
    pub fixture: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_arguments_parse() {
        let cli = Cli::try_parse_from([
            "printfleet",
            "--locale",
            "ru",
            "table",
            "printers",
            "--status",
            "idle",
            "--sort",
            "name",
            "--desc",
            "--page",
            "2",
        ])
        .expect("parse");

        assert_eq!(cli.locale, Some(Locale::RuRU));
        let Commands::Table(args) = cli.command else {
            panic!("expected table command");
        };
        assert_eq!(args.kind, ResourceKind::Printers);
        assert_eq!(args.status.as_deref(), Some("idle"));
        assert!(args.desc);
        assert_eq!(args.page, 2);
    }

    #[test]
    fn desc_requires_sort() {
        assert!(Cli::try_parse_from(["printfleet", "table", "models", "--desc"]).is_err());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(Cli::try_parse_from(["printfleet", "watch", "spools"]).is_err());
    }
}
