//! Entry point for the Velour storefront.

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use velour_storefront::bridge;
use velour_storefront::components::App;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "velour-storefront")]
#[command(about = "Velour single-page storefront")]
struct Args {
    /// Route path to open at launch, e.g. /collection or /collection/midnight-rose
    #[arg(long, default_value = "/")]
    route: String,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,

    /// Tracing filter directives, e.g. velour_nav=debug
    #[arg(long, default_value = "velour_storefront=info,velour_nav=info")]
    log_filter: String,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter.as_str())
        .init();

    tracing::info!(route = %args.route, "starting Velour storefront");

    bridge::set_start_route(args.route);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("VELOUR")
                        .with_inner_size(LogicalSize::new(args.width, args.height)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Cormorant+Garamond:wght@400;500;600;700&family=Inter:wght@300;400;500&display=swap" rel="stylesheet">
                    <style>{}</style>
                    "#,
                    STYLES_CSS
                )),
        )
        .launch(App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_to_home_at_info() {
        let args = Args::try_parse_from(["velour-storefront"]).unwrap();
        assert_eq!(args.route, "/");
        assert_eq!(args.width, 1280.0);
        assert_eq!(args.height, 860.0);
        assert_eq!(args.log_filter, "velour_storefront=info,velour_nav=info");
    }

    #[test]
    fn test_args_accept_route_and_filter_overrides() {
        let args = Args::try_parse_from([
            "velour-storefront",
            "--route",
            "/cart",
            "--log-filter",
            "velour_nav=debug",
        ])
        .unwrap();
        assert_eq!(args.route, "/cart");
        assert_eq!(args.log_filter, "velour_nav=debug");
    }
}
