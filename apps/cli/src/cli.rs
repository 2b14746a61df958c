use clap::{Parser, Subcommand, ValueEnum};
use storefront_core::notifications::NotificationFilter;
use storefront_core::store::UserRole;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront cart and notifications")]
pub struct Cli {
    /// Backend base URL (overrides STOREFRONT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Bearer token of the signed-in user (overrides STOREFRONT_ACCESS_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Role of the signed-in user
    #[arg(long, value_enum, default_value_t = RoleArg::Customer, global = true)]
    pub role: RoleArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Customer,
    ProfessionalBuyer,
}

impl From<RoleArg> for UserRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Customer => UserRole::Customer,
            RoleArg::ProfessionalBuyer => UserRole::ProfessionalBuyer,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Cart sidebar operations
    #[command(subcommand)]
    Cart(CartCommand),

    /// Notification center operations
    #[command(subcommand)]
    Notifications(NotificationCommand),
}

#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Show items and summary
    Show,
    /// Set the quantity of an item
    SetQuantity { item_id: String, quantity: u32 },
    /// Remove an item
    Remove { item_id: String },
    /// Move an item to the saved-for-later list
    SaveForLater { item_id: String },
    /// Move a saved item back into the cart
    MoveToCart { item_id: String },
    /// Make another cart active
    Switch { cart_id: String },
    /// List available carts
    List,
    /// Go to checkout
    Checkout,
}

#[derive(Debug, Subcommand)]
pub enum NotificationCommand {
    /// List notifications
    List {
        #[arg(long, value_parser = parse_filter, default_value = "all")]
        filter: NotificationFilter,
        /// Only unread notifications
        #[arg(long)]
        unread: bool,
    },
    /// Mark a notification read and follow its link
    Open { notification_id: String },
    /// Mark every notification read
    ReadAll,
}

fn parse_filter(raw: &str) -> Result<NotificationFilter, String> {
    raw.parse::<NotificationFilter>().map_err(|e| e.to_string())
}
