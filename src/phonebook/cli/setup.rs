use clap::{Args, Parser, Subcommand};
use phonebook::model::{Field, RecordFields, SearchCriteria};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook", bin_name = "phonebook", version)]
#[command(about = "Console contact directory backed by a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the per-user directory instead of the current one
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Store file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (default)
    #[command(display_order = 1)]
    Shell,

    /// List records page by page
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only this page (1-based)
        #[arg(short, long)]
        page: Option<usize>,
    },

    /// Add a record
    #[command(alias = "n", display_order = 3)]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Overwrite every field of the record at POSITION (omitted fields become blank)
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// Position of the record in the current list (1-based)
        position: usize,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete the record at POSITION
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Position of the record in the current list (1-based)
        position: usize,
    },

    /// Find records whose fields match exactly (omitted fields are ignored)
    #[command(alias = "s", display_order = 6)]
    Search {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Get or set configuration
    #[command(display_order = 7)]
    Config {
        /// Configuration key (data-file, page-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create an empty store if none exists
    #[command(display_order = 8)]
    Init,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Surname (Фамилия)
    #[arg(long)]
    pub surname: Option<String>,

    /// First name (Имя)
    #[arg(long, visible_alias = "first-name")]
    pub name: Option<String>,

    /// Patronym (Отчество)
    #[arg(long)]
    pub patronym: Option<String>,

    /// Organization (Организация)
    #[arg(long, visible_alias = "org")]
    pub organization: Option<String>,

    /// Work phone (Рабочий_телефон)
    #[arg(long)]
    pub work_phone: Option<String>,

    /// Mobile phone (Сотовый_телефон)
    #[arg(long)]
    pub mobile_phone: Option<String>,
}

impl From<FieldArgs> for RecordFields {
    fn from(args: FieldArgs) -> Self {
        RecordFields::default()
            .with(Field::Surname, args.surname.unwrap_or_default())
            .with(Field::FirstName, args.name.unwrap_or_default())
            .with(Field::Patronym, args.patronym.unwrap_or_default())
            .with(Field::Organization, args.organization.unwrap_or_default())
            .with(Field::WorkPhone, args.work_phone.unwrap_or_default())
            .with(Field::MobilePhone, args.mobile_phone.unwrap_or_default())
    }
}

impl From<FieldArgs> for SearchCriteria {
    fn from(args: FieldArgs) -> Self {
        SearchCriteria::from(RecordFields::from(args))
    }
}
