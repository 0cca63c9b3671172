//! Dispatch from parsed arguments to the gateway.
//!
//! Handlers call one `CatalogApi` method, then either print the envelope as JSON
//! (`--json`) or render it. A failed envelope always ends in exit code 1.

use super::render::{
    print_failure, print_messages, render_order_list, render_shop_detail, render_shop_list,
};
use super::setup::{Cli, Commands, OrderArgs, OrderCommands, ShopArgs, ShopCommands};
use brewlog::api::{CatalogApi, ConfigAction, Envelope};
use brewlog::commands::ShopDetail;
use brewlog::error::{BrewError, Result};
use brewlog::input::{OrderInput, ShopInput};
use brewlog::store::fs::FileStore;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "BREWLOG_LOG";
const DATE_FORMAT: &str = "%Y-%m-%d";

struct AppContext {
    api: CatalogApi<FileStore>,
    json: bool,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Shops) => handle_list_shops(&ctx),
        Some(Commands::Shop { action }) => match action {
            ShopCommands::Add(args) => handle_add_shop(&mut ctx, args),
            ShopCommands::View { id } => handle_view_shop(&ctx, &id),
            ShopCommands::Delete { id, yes } => handle_delete_shop(&mut ctx, &id, yes),
        },
        Some(Commands::Order { action }) => match action {
            OrderCommands::Add(args) => handle_add_order(&mut ctx, args),
            OrderCommands::Delete { id, shop } => handle_delete_order(&mut ctx, &id, shop),
        },
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "brewlog=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    // A second init (tests driving run() twice) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    debug!(data_dir = %data_dir.display(), "using data dir");

    let store = FileStore::new(data_dir.clone());

    Ok(AppContext {
        api: CatalogApi::new(store, data_dir),
        json: cli.json,
    })
}

/// `--data-dir` (or `BREWLOG_HOME`, which clap folds into the same flag), then
/// the platform data directory.
fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    ProjectDirs::from("com", "brewlog", "brewlog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BrewError::Config("could not determine a data directory".to_string()))
}

/// Prints the envelope as pretty JSON, or hands the data to `render` on success
/// and the error to stderr on failure.
fn finish<T: Serialize>(
    ctx: &AppContext,
    envelope: &Envelope<T>,
    render: impl FnOnce(&T),
) -> Result<ExitCode> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(envelope)?);
    } else {
        match (&envelope.data, envelope.success) {
            (Some(data), true) => render(data),
            _ => print_failure(envelope.error_message()),
        }
    }
    Ok(exit_code(envelope))
}

fn exit_code<T>(envelope: &Envelope<T>) -> ExitCode {
    if envelope.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn handle_list_shops(ctx: &AppContext) -> Result<ExitCode> {
    let config = ctx.api.load_config()?;
    let envelope = ctx.api.list_shops(config.shop_order);
    finish(ctx, &envelope, |shops| print!("{}", render_shop_list(shops)))
}

fn handle_add_shop(ctx: &mut AppContext, args: ShopArgs) -> Result<ExitCode> {
    let input = ShopInput::from(args);
    let envelope = ctx.api.create_shop(&input);
    finish(ctx, &envelope, |shop| {
        println!("{} {}", "Added shop:".green(), shop.name.bold());
        println!("{}", shop.id.to_string().dimmed());
    })
}

fn handle_view_shop(ctx: &AppContext, id: &str) -> Result<ExitCode> {
    let envelope = ctx.api.get_shop(id);
    finish(ctx, &envelope, |detail| print!("{}", render_shop_detail(detail)))
}

fn handle_delete_shop(ctx: &mut AppContext, id: &str, yes: bool) -> Result<ExitCode> {
    if !yes && !ctx.json {
        let prompt = "Delete this coffee shop and all of its orders? [y/N] ";
        if !confirm(prompt, std::io::stdin().lock())? {
            println!("Aborted.");
            return Ok(ExitCode::SUCCESS);
        }
    }

    let envelope = ctx.api.delete_shop(id);
    finish(ctx, &envelope, |shop| {
        println!("{} {}", "Deleted shop:".yellow(), shop.name);
    })
}

/// Asks a yes/no question. End of input counts as no.
fn confirm(prompt: &str, mut input: impl BufRead) -> Result<bool> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        println!();
        return Ok(false);
    }
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn handle_add_order(ctx: &mut AppContext, args: OrderArgs) -> Result<ExitCode> {
    let mut input = OrderInput::from(args);
    if input.date_tried.is_none() && ctx.api.load_config()?.default_date_today {
        input.date_tried = Some(today());
    }

    let envelope = ctx.api.create_order(&input);
    finish(ctx, &envelope, |order| {
        println!("{} {}", "Added order:".green(), order.coffee_name.bold());
        println!("{}", order.id.to_string().dimmed());
    })
}

fn today() -> String {
    chrono::Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Deletes an order. With `--shop`, the shop's order list is loaded first and,
/// once the delete succeeds, re-rendered with the deleted entry dropped locally.
fn handle_delete_order(
    ctx: &mut AppContext,
    id: &str,
    shop: Option<String>,
) -> Result<ExitCode> {
    let held = match shop {
        Some(shop_id) => {
            let detail = ctx.api.get_shop(&shop_id);
            if !detail.is_success() {
                return finish(ctx, &detail, |_| {});
            }
            detail.data
        }
        None => None,
    };

    let envelope = ctx.api.delete_order(id);
    if !envelope.is_success() || ctx.json {
        return finish(ctx, &envelope, |_| {});
    }

    let code = finish(ctx, &envelope, |order| {
        println!("{} {}", "Deleted order:".yellow(), order.coffee_name);
    })?;

    if let (Some(detail), Some(deleted)) = (held, envelope.data.as_ref()) {
        let remaining = without_order(detail, &deleted.id.to_string());
        println!();
        print!("{}", render_order_list(&remaining.orders));
    }
    Ok(code)
}

/// Drops one order from a held detail without going back to the store.
fn without_order(mut detail: ShopDetail, order_id: &str) -> ShopDetail {
    detail.orders.retain(|o| o.id.to_string() != order_id);
    detail
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<ExitCode> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let setting = matches!(action, ConfigAction::Set(..));
    let result = ctx.api.config(action)?;

    if let (Some(config), false) = (&result.config, setting) {
        if ctx.json {
            println!("{}", serde_json::to_string_pretty(config)?);
        } else {
            for (key, value) in config.entries() {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);

    let failed = result
        .messages
        .iter()
        .any(|m| m.level == brewlog::api::MessageLevel::Error);
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
