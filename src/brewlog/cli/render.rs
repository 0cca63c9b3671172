//! # Rendering Module
//!
//! Turns shops and orders into terminal text. Every `render_*` function returns
//! a `String` so output can be tested without a terminal; `print_*` helpers are
//! the only functions here that write.
//!
//! Colors come from `colored`, which turns itself off when stdout is not a tty.

use brewlog::api::{CmdMessage, MessageLevel};
use brewlog::commands::ShopDetail;
use brewlog::model::{Order, Shop};
use chrono::{DateTime, NaiveDate, Utc};
use colored::Colorize;
use rust_decimal::Decimal;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
pub const WORK_MARKER: &str = "⌨";
const STAR_FULL: char = '★';
const STAR_EMPTY: char = '☆';

fn count_label(n: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { plural })
}

/// Renders the home list: a count header, then one block per shop.
pub fn render_shop_list(shops: &[Shop]) -> String {
    if shops.is_empty() {
        return format!(
            "{}\n{}\n",
            "No coffee shops yet.".dimmed(),
            "Add one with: brewlog shop add --name \"Shop name\"".dimmed()
        );
    }

    let mut out = format!(
        "{}\n",
        format!("{} tracked", count_label(shops.len(), "shop", "shops")).bold()
    );
    for shop in shops {
        out.push('\n');
        out.push_str(&render_shop_line(shop));
    }
    out
}

fn render_shop_line(shop: &Shop) -> String {
    let marker = if shop.good_for_work {
        format!("{} ", WORK_MARKER)
    } else {
        "  ".to_string()
    };
    let time_ago = format_time_ago(shop.created_at);
    let available = LINE_WIDTH.saturating_sub(marker.width() + TIME_WIDTH);
    let name = truncate_to_width(&shop.name, available);
    let padding = available.saturating_sub(name.width());

    let mut out = format!(
        "{}{}{}{}\n",
        marker.green(),
        name.bold(),
        " ".repeat(padding),
        time_ago.dimmed()
    );
    out.push_str(&format!("  {}\n", shop.id.to_string().dimmed()));

    let mut facts = Vec::new();
    if let Some(address) = &shop.address {
        facts.push(address.clone());
    }
    if let Some(seating) = shop.seating_level {
        facts.push(format!("{} seating", seating));
    }
    if !facts.is_empty() {
        out.push_str(&format!("  {}\n", facts.join(" · ")));
    }
    if !shop.vibe.is_empty() {
        out.push_str(&format!("  {}\n", render_tags(&shop.vibe).cyan()));
    }
    out
}

fn render_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the detail screen of one shop and its orders.
pub fn render_shop_detail(detail: &ShopDetail) -> String {
    let shop = &detail.shop;
    let mut out = format!("{}\n", shop.name.bold());
    out.push_str(&format!("{}\n", shop.id.to_string().dimmed()));

    if let Some(address) = &shop.address {
        out.push_str(&format!("Address:  {}\n", address));
    }
    if let Some(seating) = shop.seating_level {
        out.push_str(&format!("Seating:  {}\n", seating));
    }
    if shop.good_for_work {
        out.push_str(&format!("{}\n", format!("{} Good for work", WORK_MARKER).green()));
    }
    if !shop.vibe.is_empty() {
        out.push_str(&format!("Vibe:     {}\n", render_tags(&shop.vibe).cyan()));
    }
    if let Some(photo) = &shop.photo_url {
        out.push_str(&format!("Photo:    {}\n", photo.underline()));
    }

    out.push('\n');
    out.push_str(&render_order_list(&detail.orders));
    out
}

pub fn render_order_list(orders: &[Order]) -> String {
    if orders.is_empty() {
        return format!("{}\n", "No orders yet.".dimmed());
    }

    let mut out = format!(
        "{}\n",
        format!("{} tracked", count_label(orders.len(), "order", "orders")).bold()
    );
    for order in orders {
        out.push('\n');
        out.push_str(&render_order(order));
    }
    out
}

fn render_order(order: &Order) -> String {
    let mut head = vec![order.coffee_name.bold().to_string()];
    if let Some(strength) = order.strength_level {
        head.push(format!("({})", strength).yellow().to_string());
    }
    if let Some(price) = order.price {
        head.push(format_price(price));
    }
    let mut out = format!("  {}\n", head.join(" "));
    out.push_str(&format!("    {}\n", order.id.to_string().dimmed()));

    let mut facts = Vec::new();
    if let Some(rating) = order.rating {
        facts.push(format_rating(rating));
    }
    if let Some(date) = order.date_tried {
        facts.push(format_date(date));
    }
    if !facts.is_empty() {
        out.push_str(&format!("    {}\n", facts.join("  ")));
    }
    if let Some(notes) = &order.tasting_notes {
        out.push_str(&format!("    {}\n", notes.italic()));
    }
    out
}

pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", price.round_dp(2))
}

pub fn format_rating(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    let mut stars = String::with_capacity(15);
    stars.extend(std::iter::repeat_n(STAR_FULL, filled));
    stars.extend(std::iter::repeat_n(STAR_EMPTY, 5 - filled));
    stars
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

/// Writes a failed operation's message to stderr.
pub fn print_failure(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewlog::model::{SeatingLevel, StrengthLevel};
    use uuid::Uuid;

    fn plain() {
        colored::control::set_override(false);
    }

    fn shop(name: &str) -> Shop {
        Shop {
            id: Uuid::new_v4(),
            name: name.to_string(),
            address: Some("123 Main St".into()),
            seating_level: Some(SeatingLevel::Lots),
            vibe: vec!["cozy".into(), "quiet".into()],
            good_for_work: true,
            photo_url: None,
            created_at: Utc::now(),
        }
    }

    fn order(shop: &Shop, coffee: &str) -> Order {
        Order {
            id: Uuid::new_v4(),
            shop_id: shop.id,
            coffee_name: coffee.to_string(),
            strength_level: Some(StrengthLevel::Medium),
            price: Some(Decimal::new(55, 1)),
            rating: Some(4),
            tasting_notes: Some("Smooth and creamy".into()),
            photo_url: None,
            date_tried: NaiveDate::from_ymd_opt(2024, 3, 9),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_list_shows_hint() {
        plain();
        let out = render_shop_list(&[]);
        assert!(out.contains("No coffee shops yet."));
        assert!(out.contains("brewlog shop add"));
    }

    #[test]
    fn list_header_pluralizes() {
        plain();
        assert!(render_shop_list(&[shop("A")]).starts_with("1 shop tracked"));
        assert!(render_shop_list(&[shop("A"), shop("B")]).starts_with("2 shops tracked"));
    }

    #[test]
    fn list_shows_shop_facts() {
        plain();
        let s = shop("Brew & Bean");
        let out = render_shop_list(std::slice::from_ref(&s));
        assert!(out.contains("Brew & Bean"));
        assert!(out.contains(&s.id.to_string()));
        assert!(out.contains("123 Main St · lots seating"));
        assert!(out.contains("#cozy #quiet"));
        assert!(out.contains(WORK_MARKER));
    }

    #[test]
    fn detail_lists_orders() {
        plain();
        let s = shop("Brew & Bean");
        let detail = ShopDetail {
            orders: vec![order(&s, "Vanilla Latte")],
            shop: s,
        };
        let out = render_shop_detail(&detail);
        assert!(out.contains("1 order tracked"));
        assert!(out.contains("Vanilla Latte (medium) $5.50"));
        assert!(out.contains("★★★★☆"));
        assert!(out.contains("Mar 9, 2024"));
        assert!(out.contains("Smooth and creamy"));
    }

    #[test]
    fn detail_without_orders() {
        plain();
        let detail = ShopDetail {
            shop: shop("A"),
            orders: vec![],
        };
        assert!(render_shop_detail(&detail).contains("No orders yet."));
    }

    #[test]
    fn price_has_two_decimals() {
        assert_eq!(format_price(Decimal::ZERO), "$0.00");
        assert_eq!(format_price(Decimal::new(4, 0)), "$4.00");
        assert_eq!(format_price(Decimal::new(3456, 3)), "$3.46");
    }

    #[test]
    fn rating_stars() {
        assert_eq!(format_rating(1), "★☆☆☆☆");
        assert_eq!(format_rating(5), "★★★★★");
    }

    #[test]
    fn truncates_long_names() {
        let out = truncate_to_width("a very long shop name", 10);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 10);
    }
}
