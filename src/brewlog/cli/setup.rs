use brewlog::input::{LooseValue, OrderInput, ShopInput, VibeInput};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "brewlog", bin_name = "brewlog", version)]
#[command(about = "Keep track of coffee shops and the coffees you try there", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the catalog (defaults to the platform data dir)
    #[arg(long, global = true, env = "BREWLOG_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print the raw result envelope as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all coffee shops
    #[command(alias = "ls")]
    Shops,

    /// Add, view or delete a coffee shop
    Shop {
        #[command(subcommand)]
        action: ShopCommands,
    },

    /// Add or delete a coffee order
    Order {
        #[command(subcommand)]
        action: OrderCommands,
    },

    /// Show or change configuration
    Config {
        /// Config key (default-date-today, shop-order)
        key: Option<String>,

        /// New value for the key
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ShopCommands {
    /// Add a new coffee shop
    #[command(alias = "new")]
    Add(ShopArgs),

    /// Show a shop and the orders tried there
    #[command(alias = "v")]
    View {
        /// Shop id
        id: String,
    },

    /// Delete a shop and all of its orders
    #[command(alias = "rm")]
    Delete {
        /// Shop id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrderCommands {
    /// Record a coffee tried at a shop
    #[command(alias = "new")]
    Add(OrderArgs),

    /// Delete an order
    #[command(alias = "rm")]
    Delete {
        /// Order id
        id: String,

        /// Shop the order belongs to; shows the shop's updated order list
        #[arg(long, value_name = "SHOP_ID")]
        shop: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ShopArgs {
    /// Shop name
    #[arg(short, long)]
    pub name: String,

    #[arg(short, long)]
    pub address: Option<String>,

    /// Seating availability: lots, moderate or limited
    #[arg(short, long)]
    pub seating: Option<String>,

    /// Vibe tags, comma separated (e.g. "cozy, quiet, modern")
    #[arg(long)]
    pub vibe: Option<String>,

    /// Mark the shop as good for working
    #[arg(short, long)]
    pub work: bool,

    /// Link to a photo of the shop
    #[arg(short, long)]
    pub photo: Option<String>,
}

impl From<ShopArgs> for ShopInput {
    fn from(args: ShopArgs) -> Self {
        ShopInput {
            name: Some(args.name),
            address: args.address,
            seating_level: args.seating,
            vibe: args.vibe.map(VibeInput::Text),
            good_for_work: args.work.then_some(LooseValue::Bool(true)),
            photo_url: args.photo,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct OrderArgs {
    /// Id of the shop
    #[arg(long)]
    pub shop: String,

    /// Name of the coffee
    #[arg(short, long)]
    pub coffee: String,

    /// Roast strength: light, medium or dark
    #[arg(short, long)]
    pub strength: Option<String>,

    #[arg(long)]
    pub price: Option<String>,

    /// Rating from 1 to 5
    #[arg(short, long)]
    pub rating: Option<String>,

    /// Tasting notes
    #[arg(short, long)]
    pub notes: Option<String>,

    /// Link to a photo of the coffee
    #[arg(short, long)]
    pub photo: Option<String>,

    /// Date tried (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
}

impl From<OrderArgs> for OrderInput {
    fn from(args: OrderArgs) -> Self {
        OrderInput {
            shop_id: Some(args.shop),
            coffee_name: Some(args.coffee),
            strength_level: args.strength,
            price: args.price.map(Into::into),
            rating: args.rating.map(Into::into),
            tasting_notes: args.notes,
            photo_url: args.photo,
            date_tried: args.date,
        }
    }
}
