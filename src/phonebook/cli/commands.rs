use super::render::{print_messages, render_pages, render_records, render_text_list};
use super::session::Session;
use super::setup::{Cli, Commands, FieldArgs};
use clap::Parser;
use phonebook::api::{ConfigAction, DirectoryApi};
use phonebook::error::Result;
use phonebook::init::{initialize, resolve_paths};
use phonebook::logging::{init_logging, Verbosity};
use phonebook::model::{RecordFields, Scope, SearchCriteria};
use phonebook::store::fs::FileStore;
use std::io;
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: DirectoryApi<FileStore>,
    scope: Scope,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flag(cli.verbose));

    let use_color = !cli.no_color && console::colors_enabled();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let init = initialize(resolve_paths(&cwd), cli.global, cli.file.as_deref())?;
    debug!(scope = ?init.scope, store = %init.api.store().path().display(), "context ready");

    let mut ctx = AppContext {
        api: init.api,
        scope: init.scope,
        use_color,
    };

    // Load warnings concern the store; config and init don't read it.
    let touches_store = !matches!(
        cli.command,
        Some(Commands::Config { .. }) | Some(Commands::Init)
    );
    if touches_store {
        print_messages(&init.load_result.messages, ctx.use_color);
    }

    match cli.command {
        None | Some(Commands::Shell) => return handle_shell(&mut ctx),
        Some(Commands::List { page }) => handle_list(&ctx, page)?,
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields)?,
        Some(Commands::Edit { position, fields }) => handle_edit(&mut ctx, position, fields)?,
        Some(Commands::Delete { position }) => handle_delete(&mut ctx, position)?,
        Some(Commands::Search { fields }) => handle_search(&ctx, fields)?,
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value)?,
        Some(Commands::Init) => handle_init(&mut ctx)?,
    }

    // One-shot commands write the store only if they changed it.
    if ctx.api.is_dirty() {
        save(&mut ctx)?;
    }
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut ctx.api, stdin.lock(), stdout.lock(), ctx.use_color).run()
}

fn handle_list(ctx: &AppContext, page: Option<usize>) -> Result<()> {
    let result = ctx.api.list(page)?;
    print!("{}", render_pages(&result.pages, ctx.use_color));
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: FieldArgs) -> Result<()> {
    let result = ctx.api.add_record(RecordFields::from(fields))?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, position: usize, fields: FieldArgs) -> Result<()> {
    let result = ctx
        .api
        .update_record(position, RecordFields::from(fields))?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, position: usize) -> Result<()> {
    let result = ctx.api.delete_record(position)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_search(ctx: &AppContext, fields: FieldArgs) -> Result<()> {
    let result = ctx.api.search(&SearchCriteria::from(fields))?;
    print!("{}", render_records(&result.listed_records, ctx.use_color));
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn save(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.close()?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(ctx.scope, action)?;
    let mut lines = Vec::new();
    if let (Some(config), None) = (&result.config, &key) {
        for (k, v) in config.list_all() {
            lines.push(format!("{} = {}", k, v));
        }
    }
    if key.is_none() {
        print!(
            "{}",
            render_text_list(&lines, "No configuration values.", ctx.use_color)
        );
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}
