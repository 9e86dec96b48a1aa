use std::path::PathBuf;

use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["pizzabox"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_store_command() {
    let cli = Cli::try_parse_from([
        "pizzabox",
        "store",
        "--street",
        "111 SW 5th Ave",
        "--postal-code",
        "97204",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Store {
            street,
            postal_code,
        }) => {
            assert_eq!(street, "111 SW 5th Ave");
            assert_eq!(postal_code, "97204");
        }
        other => panic!("expected Store, got: {other:?}"),
    }
}

#[test]
fn store_requires_postal_code() {
    assert!(Cli::try_parse_from(["pizzabox", "store", "--street", "111 SW 5th Ave"]).is_err());
}

#[test]
fn parses_menu_command() {
    let cli = Cli::try_parse_from(["pizzabox", "menu", "--store-id", "7229"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Menu { ref store_id }) if store_id == "7229"
    ));
}

#[test]
fn price_collects_repeated_products() {
    let cli = Cli::try_parse_from([
        "pizzabox",
        "price",
        "--street",
        "111 SW 5th Ave",
        "--postal-code",
        "97204",
        "--product",
        "14SCREEN",
        "--product",
        "2LCOKE",
        "--fifty-percent-coupon",
    ])
    .unwrap();

    match cli.command {
        Some(Commands::Price {
            order_file,
            products,
            fifty_percent_coupon,
            ..
        }) => {
            assert!(order_file.is_none());
            assert_eq!(products, vec!["14SCREEN", "2LCOKE"]);
            assert!(fifty_percent_coupon);
        }
        other => panic!("expected Price, got: {other:?}"),
    }
}

#[test]
fn price_accepts_order_file_alone() {
    let cli = Cli::try_parse_from(["pizzabox", "price", "--order-file", "order.yaml"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Price {
            order_file: Some(ref path),
            street: None,
            fifty_percent_coupon: false,
            ..
        }) if *path == PathBuf::from("order.yaml")
    ));
}

#[test]
fn price_without_order_file_requires_address_and_product() {
    assert!(Cli::try_parse_from(["pizzabox", "price", "--street", "111 SW 5th Ave"]).is_err());
    assert!(Cli::try_parse_from([
        "pizzabox",
        "price",
        "--street",
        "111 SW 5th Ave",
        "--postal-code",
        "97204"
    ])
    .is_err());
}

#[test]
fn price_order_file_conflicts_with_flags() {
    let result = Cli::try_parse_from([
        "pizzabox",
        "price",
        "--order-file",
        "order.yaml",
        "--product",
        "14SCREEN",
    ]);
    assert!(result.is_err());
}

#[test]
fn place_defaults_to_unconfirmed() {
    let cli = Cli::try_parse_from(["pizzabox", "place", "--order-file", "order.yaml"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Place { confirm: false, .. })
    ));

    let cli = Cli::try_parse_from(["pizzabox", "place", "--order-file", "order.yaml", "--confirm"])
        .unwrap();
    assert!(matches!(cli.command, Some(Commands::Place { confirm: true, .. })));
}

#[test]
fn parses_track_command() {
    let cli = Cli::try_parse_from(["pizzabox", "track", "--phone", "5035550100"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Track { ref phone }) if phone == "5035550100"
    ));
}

fn app_config() -> pizzabox_core::AppConfig {
    pizzabox_core::AppConfig {
        log_level: "info".to_string(),
        request_timeout_secs: 10,
        user_agent: "pizzabox-test/0.1".to_string(),
        order_base_url: None,
        tracker_base_url: None,
        referer_url: None,
    }
}

#[test]
fn build_client_defaults_to_production_endpoints() {
    let client = commands::build_client(&app_config()).expect("client should build");
    assert_eq!(
        client.endpoints(),
        &pizzabox_client::Endpoints::production().unwrap()
    );
}

#[test]
fn build_client_applies_url_overrides() {
    let config = pizzabox_core::AppConfig {
        order_base_url: Some("http://127.0.0.1:8080".to_string()),
        referer_url: Some("http://127.0.0.1:8080/order/".to_string()),
        ..app_config()
    };
    let client = commands::build_client(&config).expect("client should build");
    let expected = pizzabox_client::Endpoints::new(
        "http://127.0.0.1:8080",
        pizzabox_client::endpoints::DEFAULT_TRACKER_BASE_URL,
        "http://127.0.0.1:8080/order/",
    )
    .unwrap();
    assert_eq!(client.endpoints(), &expected);
}
