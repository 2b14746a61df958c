use std::sync::Arc;

use anyhow::Context;
use storefront_api_client::HttpStorefrontClient;
use storefront_core::cart::CartSidebar;
use storefront_core::navigation::{Navigator, Route};
use storefront_core::notifications::NotificationCenter;
use storefront_core::optimistic::MutationOutcome;
use storefront_core::store::{AppState, AuthState, Store};
use storefront_core::StorefrontConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::{CartCommand, Cli, Command, NotificationCommand};
use crate::render;

pub fn init_tracing() {
    let log_format =
        std::env::var("STOREFRONT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// The terminal has no router; requested routes are reported instead.
struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: &Route) {
        tracing::info!("Navigate to {}", route);
        println!("-> {}", route);
    }
}

pub async fn run(cli: Cli, config: StorefrontConfig) -> anyhow::Result<()> {
    let client = Arc::new(
        HttpStorefrontClient::from_config(&config).context("Failed to build HTTP client")?,
    );

    let mut initial = AppState::default();
    if config.access_token.is_some() {
        initial.auth = AuthState::signed_in("current", cli.role.into());
    }
    let store = Store::new(initial);
    let navigator: Arc<dyn Navigator> = Arc::new(LoggingNavigator);

    match cli.command {
        Command::Cart(command) => {
            let sidebar = CartSidebar::new(
                client.clone(),
                store.clone(),
                navigator.clone(),
                config.pricing,
            );
            run_cart(&sidebar, command).await
        }
        Command::Notifications(command) => {
            let center = NotificationCenter::new(client.clone(), store.clone(), navigator);
            run_notifications(&center, &store, command).await
        }
    }
}

async fn run_cart(sidebar: &CartSidebar, command: CartCommand) -> anyhow::Result<()> {
    sidebar.open().await.context("Failed to load cart")?;

    let outcome = match command {
        CartCommand::Show => None,
        CartCommand::SetQuantity { item_id, quantity } => {
            Some(sidebar.set_quantity(&item_id, quantity).await)
        }
        CartCommand::Remove { item_id } => Some(sidebar.remove_item(&item_id).await),
        CartCommand::SaveForLater { item_id } => Some(sidebar.save_for_later(&item_id).await),
        CartCommand::MoveToCart { item_id } => Some(sidebar.move_to_cart(&item_id).await),
        CartCommand::Switch { cart_id } => Some(sidebar.switch_cart(&cart_id).await),
        CartCommand::List => {
            let carts = sidebar.load_available_carts().await?;
            print!(
                "{}",
                render::carts(&carts, sidebar.active_cart_id().as_deref())
            );
            return Ok(());
        }
        CartCommand::Checkout => {
            if !sidebar.checkout() {
                anyhow::bail!("Cart has no items to check out");
            }
            return Ok(());
        }
    };

    if let Some(outcome) = outcome {
        match outcome {
            MutationOutcome::Confirmed => tracing::info!("Cart updated"),
            MutationOutcome::Rejected => anyhow::bail!("Change rejected"),
            MutationOutcome::RolledBack => anyhow::bail!("Server rejected the change"),
        }
    }

    print!("{}", render::cart(&sidebar.snapshot()));
    Ok(())
}

async fn run_notifications(
    center: &NotificationCenter,
    store: &Store,
    command: NotificationCommand,
) -> anyhow::Result<()> {
    if !store.select(|s| s.auth.is_authenticated) {
        anyhow::bail!("Notifications require an access token");
    }
    center.on_mount().await.context("Failed to fetch notifications")?;

    match command {
        NotificationCommand::List { filter, unread } => {
            center.set_filter(filter);
            let mut list = center.visible();
            if unread {
                list.retain(|n| !n.is_read);
            }
            if let Some(banner) = center.banner() {
                println!("[!] {}: {}", banner.title, banner.message);
            }
            print!("{}", render::notifications(&list, center.badge()));
        }
        NotificationCommand::Open { notification_id } => {
            if center.open_notification(&notification_id).await.is_none() {
                println!("Marked {} read", notification_id);
            }
        }
        NotificationCommand::ReadAll => {
            center.mark_all_read().await;
            println!("All notifications marked read");
        }
    }
    Ok(())
}
