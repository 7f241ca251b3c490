//! End-to-end navigation flows through the reducer.
//!
//! Each test drives [`NavState`] the way the storefront does: webview events
//! in, page commands out, derived accessors read between steps.

use velour_nav::{
    NavEvent, NavState, Page, PageCommand, RouteMatch, View, Viewport, parse_path,
};

fn desktop() -> NavState {
    NavState::new(Viewport::new(1024.0, 800.0))
}

fn goto(state: &mut NavState, path: &str) -> Vec<PageCommand> {
    state.apply(NavEvent::LocationChanged {
        path: path.to_string(),
    })
}

#[test]
fn test_every_routing_rule_round_trips_through_the_reducer() {
    let cases = [
        ("/", View::Home),
        ("/collection", View::Collection),
        (
            "/collection/midnight-rose",
            View::Product {
                slug: "midnight-rose".to_string(),
            },
        ),
        (
            "/product/noir-atlas",
            View::Product {
                slug: "noir-atlas".to_string(),
            },
        ),
        ("/cart", View::Cart),
        ("/checkout", View::Checkout),
        ("/checkout/thank-you", View::ThankYou),
        ("/account", View::Account),
        ("/account/orders", View::AccountOrders),
        ("/account/details", View::AccountDetails),
    ];

    for (path, expected) in cases {
        let mut state = desktop();
        goto(&mut state, path);
        assert_eq!(state.view(), &expected, "path {path}");
    }
}

#[test]
fn test_slug_rule_wins_over_bare_collection() {
    // `/collection/{slug}` must resolve before the exact `/collection` rule.
    assert_eq!(
        parse_path("/collection/midnight-rose"),
        RouteMatch::View(View::Product {
            slug: "midnight-rose".to_string()
        })
    );
    assert_eq!(
        parse_path("/collection"),
        RouteMatch::View(View::Collection)
    );
}

#[test]
fn test_back_traversal_restores_the_previous_view() {
    let mut state = desktop();

    // Forward navigation to the cart pushes an entry.
    let commands = state.apply(NavEvent::NavigateTo(Page::Cart));
    assert!(commands.contains(&PageCommand::PushHistory {
        path: "/cart".to_string()
    }));
    assert_eq!(state.view(), &View::Cart);

    // The host fires popstate with the prior path; no push this time.
    let commands = goto(&mut state, "/");
    assert_eq!(state.view(), &View::Home);
    assert!(commands.is_empty());
}

#[test]
fn test_named_pages_push_paths_the_router_does_not_parse() {
    // About, thank-you and the account subpages push flat kebab-case paths.
    // Those entries re-resolve only through the slugless rules, so a reload
    // or traversal onto them keeps the current view instead.
    for page in [Page::About, Page::ThankYou, Page::AccountOrders, Page::AccountDetails] {
        let mut state = desktop();
        let commands = state.apply(NavEvent::NavigateTo(page));
        let PageCommand::PushHistory { path } = &commands[0] else {
            panic!("expected a history push for {page}");
        };
        assert_eq!(parse_path(path), RouteMatch::NotFound, "path {path}");
    }

    // By contrast the canonical thank-you location does parse.
    assert_eq!(
        parse_path("/checkout/thank-you"),
        RouteMatch::View(View::ThankYou)
    );
}

#[test]
fn test_scroll_progress_against_the_docking_threshold() {
    let mut state = desktop();

    // Viewport 1024x800, desktop factor 0.4: threshold 320px.
    state.apply(NavEvent::Scrolled { offset: 0.0 });
    assert_eq!(state.scroll_progress(), 0.0);
    state.apply(NavEvent::Scrolled { offset: 160.0 });
    assert_eq!(state.scroll_progress(), 0.5);
    state.apply(NavEvent::Scrolled { offset: 500.0 });
    assert_eq!(state.scroll_progress(), 1.0);
}

#[test]
fn test_docking_state_matches_progress_and_view() {
    let mut state = desktop();
    assert!(!state.is_docked());

    state.apply(NavEvent::Scrolled { offset: 320.0 });
    assert!(state.is_docked());
    assert_eq!(state.scroll_progress(), 1.0);

    // Off home the wordmark docks regardless of scroll.
    let mut away = desktop();
    away.apply(NavEvent::NavigateTo(Page::Checkout));
    assert!(away.is_docked());
    assert_eq!(away.scroll_progress(), 0.0);
}

#[test]
fn test_docked_scale_for_a_desktop_viewport() {
    let state = desktop();
    // 40px target over a 163.84px hero glyph.
    assert!((state.docked_scale() - 0.244140625).abs() < 1e-12);
}

#[test]
fn test_events_from_torn_down_listeners_are_inert() {
    let mut state = desktop();
    state.apply(NavEvent::NavigateTo(Page::Collection));

    // A scroll and an observer batch race past the teardown; both land after
    // the transition and must not disturb the new view's state.
    state.apply(NavEvent::Scrolled { offset: 480.0 });
    state.apply(NavEvent::SectionsCentered {
        hits: vec![velour_nav::SectionHit {
            theme: "dark".to_string(),
            center_offset: 5.0,
        }],
    });

    assert_eq!(state.scroll_progress(), 0.0);
    assert_eq!(state.theme(), velour_nav::SectionTheme::Light);
    assert!(state.is_docked());
}

#[test]
fn test_product_arrival_from_history_is_instant() {
    let mut state = desktop();
    let commands = goto(&mut state, "/collection/midnight-rose");
    assert_eq!(commands, vec![PageCommand::ScrollToTop { smooth: false }]);

    // Non-product traversals leave the scroll position to the page.
    let commands = goto(&mut state, "/collection");
    assert!(commands.is_empty());
}

#[test]
fn test_logo_frame_travels_with_progress() {
    let mut state = desktop();

    let resting = state.logo_frame();
    assert_eq!(resting.transform, "translateY(calc(-0vh + 0rem)) scale(1)");
    assert_eq!(resting.color, "white");

    state.apply(NavEvent::Scrolled { offset: 320.0 });
    let docked = state.logo_frame();
    assert!(docked.transform.starts_with("translateY(calc(-50vh + 2.2rem))"));
    assert_eq!(docked.text_shadow, "none");
}
