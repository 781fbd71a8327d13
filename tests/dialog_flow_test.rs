//! Dialog lifecycle tests
//!
//! Drives the controller through its request channel by hand: every request
//! the controller sends is read back from the channel and answered with a
//! crafted response, so ordering and staleness can be controlled exactly.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use dampick::api::{Asset, Locale};
use dampick::app::{ContentState, DialogController};
use dampick::config::{Config, DialogConfig};
use dampick::host::DialogHost;
use dampick::model::{DialogError, DialogPhase};
use dampick::services::{FetchKind, FetchRequest, FetchResponse};

fn valid_config() -> Config {
    let mut config = Config::default();
    config.space_id = "space".to_string();
    config.delivery_api_token = "token".to_string();
    config.default_locale = "en-US".to_string();
    config
}

fn setup(config: Config) -> (DialogController, mpsc::UnboundedReceiver<FetchRequest>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let controller = DialogController::new(Arc::new(DialogConfig::from_config(config)), tx);
    (controller, rx)
}

fn locale(code: &str, name: &str) -> Locale {
    Locale {
        code: code.to_string(),
        name: name.to_string(),
        default: code == "en-US",
    }
}

/// Answer the pending locale request and return the asset request that follows
fn answer_locales(
    controller: &mut DialogController,
    rx: &mut mpsc::UnboundedReceiver<FetchRequest>,
    locales: Vec<Locale>,
) -> Option<FetchRequest> {
    let request = rx.try_recv().expect("locale request");
    assert_eq!(request.kind, FetchKind::Locales);
    assert!(controller.handle_fetch_response(FetchResponse::Locales {
        generation: request.generation,
        result: Ok(locales),
    }));
    rx.try_recv().ok()
}

fn answer_assets(controller: &mut DialogController, request: &FetchRequest, assets: Vec<Asset>) -> bool {
    let FetchKind::Assets { locale } = &request.kind else {
        panic!("expected an asset request, got {:?}", request.kind);
    };
    controller.handle_fetch_response(FetchResponse::Assets {
        generation: request.generation,
        locale: locale.clone(),
        result: Ok(assets),
    })
}

/// Host that records what it was handed
#[derive(Default)]
struct RecordingHost {
    closed_with: Option<Vec<Asset>>,
}

impl DialogHost for RecordingHost {
    fn close(&mut self, selection: Vec<Asset>) -> Result<()> {
        self.closed_with = Some(selection);
        Ok(())
    }
}

fn ids(assets: &[Asset]) -> Vec<&str> {
    assets.iter().map(Asset::id).collect()
}

#[test]
fn test_locales_gate_the_asset_fetch() {
    let (mut controller, mut rx) = setup(valid_config());
    controller.mount();

    assert_eq!(controller.phase(), &DialogPhase::LoadingLocales);
    let locale_request = rx.try_recv().unwrap();
    assert_eq!(locale_request.kind, FetchKind::Locales);
    // No asset request before locales arrive
    assert!(rx.try_recv().is_err());

    controller.handle_fetch_response(FetchResponse::Locales {
        generation: locale_request.generation,
        result: Ok(vec![locale("en-US", "English")]),
    });

    let asset_request = rx.try_recv().unwrap();
    assert_eq!(asset_request.kind, FetchKind::Assets { locale: "en-US".to_string() });
    assert_eq!(controller.phase(), &DialogPhase::LoadingAssets);
    assert_eq!(controller.content(), ContentState::Loading);
}

#[test]
fn test_missing_parameters_send_no_request() {
    let mut config = valid_config();
    config.delivery_api_token = "   ".to_string();
    let (mut controller, mut rx) = setup(config);
    controller.mount();

    assert!(rx.try_recv().is_err());
    match controller.phase() {
        DialogPhase::Error(DialogError::Configuration(e)) => {
            assert!(e.to_string().contains("delivery_api_token"));
        }
        other => panic!("expected configuration error, got {:?}", other),
    }
    // Not retryable either
    assert!(!controller.retry());
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_space_without_locales_shows_no_locales() {
    let (mut controller, mut rx) = setup(valid_config());
    controller.mount();

    let next = answer_locales(&mut controller, &mut rx, Vec::new());
    assert!(next.is_none(), "no asset fetch without locales");
    assert_eq!(controller.phase(), &DialogPhase::Ready);
    assert_eq!(controller.content(), ContentState::NoLocales);
}

#[test]
fn test_only_assets_with_file_urls_become_cards() {
    let (mut controller, mut rx) = setup(valid_config());
    controller.mount();
    let request = answer_locales(&mut controller, &mut rx, vec![locale("en-US", "English")]).unwrap();

    answer_assets(
        &mut controller,
        &request,
        vec![
            Asset::new("a", "Alpha", Some("//img/a.png")),
            Asset::new("b", "Beta", None),
            Asset::new("c", "Gamma", Some("//img/c.png")),
        ],
    );

    match controller.content() {
        ContentState::Cards(view) => {
            let ids: Vec<_> = view.items.iter().map(|a| a.id()).collect();
            assert_eq!(ids, vec!["a", "c"]);
            assert_eq!(view.renderable, 2);
        }
        other => panic!("expected cards, got {:?}", other),
    }
}

#[test]
fn test_no_renderable_assets_is_distinct_from_no_matches() {
    let (mut controller, mut rx) = setup(valid_config());
    controller.mount();
    let request = answer_locales(&mut controller, &mut rx, vec![locale("en-US", "English")]).unwrap();
    answer_assets(&mut controller, &request, vec![Asset::new("a", "Alpha", None)]);
    assert_eq!(controller.content(), ContentState::NoAssets);

    let (mut controller, mut rx) = setup(valid_config());
    controller.mount();
    let request = answer_locales(&mut controller, &mut rx, vec![locale("en-US", "English")]).unwrap();
    answer_assets(&mut controller, &request, vec![Asset::new("a", "Alpha", Some("//img/a"))]);
    controller.set_search("zzz");
    assert_eq!(controller.content(), ContentState::NoMatches);
}

#[test]
fn test_search_filters_case_insensitively_and_resets_page() {
    let (mut controller, mut rx) = setup(valid_config());
    controller.mount();
    let request = answer_locales(&mut controller, &mut rx, vec![locale("en-US", "English")]).unwrap();

    let assets = (0..50)
        .map(|i| {
            let title = match i {
                3 => "Company Logo".to_string(),
                17 => "logo-dark".to_string(),
                42 => "Footer LOGO".to_string(),
                _ => format!("Photo {}", i),
            };
            Asset::new(format!("asset-{}", i), title, Some("//img/x.png"))
        })
        .collect();
    answer_assets(&mut controller, &request, assets);

    assert!(controller.next_page());
    assert!(controller.next_page());
    assert_eq!(controller.model.view.page_index(), 2);

    controller.set_search("logo");

    let view = controller.current_view();
    assert_eq!(view.page_index, 0);
    assert_eq!(view.matched, 3);
    assert_eq!(view.page_count, 1);
    let ids: Vec<_> = view.items.iter().map(|a| a.id()).collect();
    assert_eq!(ids, vec!["asset-3", "asset-17", "asset-42"]);
}

#[test]
fn test_page_size_change_resets_page() {
    let (mut controller, mut rx) = setup(valid_config());
    controller.mount();
    let request = answer_locales(&mut controller, &mut rx, vec![locale("en-US", "English")]).unwrap();
    let assets = (0..30)
        .map(|i| Asset::new(format!("{}", i), format!("Asset {}", i), Some("//img")))
        .collect();
    answer_assets(&mut controller, &request, assets);

    assert_eq!(controller.current_view().page_count, 3);
    assert!(controller.next_page());
    assert!(controller.next_page());
    assert!(!controller.next_page(), "already on the last page");

    controller.cycle_page_size();
    let view = controller.current_view();
    assert_eq!(view.page_index, 0);
    assert_eq!(view.items.len(), 24);
    assert_eq!(view.page_count, 2);
}

#[test]
fn test_save_returns_selection_in_pick_order() {
    let (mut controller, mut rx) = setup(valid_config());
    controller.mount();
    let request = answer_locales(&mut controller, &mut rx, vec![locale("en-US", "English")]).unwrap();
    answer_assets(
        &mut controller,
        &request,
        vec![
            Asset::new("a", "Alpha", Some("//img/a")),
            Asset::new("b", "Beta", Some("//img/b")),
            Asset::new("c", "Gamma", Some("//img/c")),
        ],
    );

    assert_eq!(controller.toggle_selection("c"), Some(true));
    assert_eq!(controller.toggle_selection("a"), Some(true));
    assert_eq!(controller.toggle_selection("b"), Some(true));
    assert_eq!(controller.toggle_selection("a"), Some(false));
    assert_eq!(controller.toggle_selection("missing"), None);

    let saved = controller.save();
    assert_eq!(ids(&saved), vec!["c", "b"]);

    let mut host = RecordingHost::default();
    controller.close(&mut host).unwrap();
    let closed = host.closed_with.unwrap();
    assert_eq!(ids(&closed), vec!["c", "b"]);
}

#[test]
fn test_cancel_hands_back_an_empty_list() {
    let (mut controller, mut rx) = setup(valid_config());
    controller.mount();
    let request = answer_locales(&mut controller, &mut rx, vec![locale("en-US", "English")]).unwrap();
    answer_assets(&mut controller, &request, vec![Asset::new("a", "Alpha", Some("//img/a"))]);
    controller.toggle_selection("a");

    controller.cancel();
    assert!(controller.should_quit());

    let mut host = RecordingHost::default();
    controller.close(&mut host).unwrap();
    assert_eq!(host.closed_with, Some(Vec::new()));
}

#[test]
fn test_closing_without_a_decision_is_an_empty_list() {
    let (mut controller, _rx) = setup(valid_config());
    controller.mount();

    let mut host = RecordingHost::default();
    controller.close(&mut host).unwrap();
    assert_eq!(host.closed_with, Some(Vec::new()));
}

#[test]
fn test_stale_response_for_previous_locale_is_ignored() {
    let (mut controller, mut rx) = setup(valid_config());
    controller.mount();
    let first = answer_locales(
        &mut controller,
        &mut rx,
        vec![locale("en-US", "English"), locale("de-DE", "German")],
    )
    .unwrap();

    // Switch before the en-US response arrives
    assert!(controller.select_locale("de-DE"));
    let second = rx.try_recv().unwrap();
    assert_eq!(second.kind, FetchKind::Assets { locale: "de-DE".to_string() });

    assert!(answer_assets(&mut controller, &second, vec![Asset::new("de", "Bild", Some("//img/de"))]));
    // The late en-US response must not overwrite the de-DE collection
    assert!(!answer_assets(&mut controller, &first, vec![Asset::new("en", "Picture", Some("//img/en"))]));

    assert_eq!(ids(&controller.model.catalog.assets), vec!["de"]);
    assert_eq!(controller.model.catalog.selected_locale, "de-DE");
}

#[test]
fn test_responses_after_dispose_are_dropped() {
    let (mut controller, mut rx) = setup(valid_config());
    controller.mount();
    let request = answer_locales(&mut controller, &mut rx, vec![locale("en-US", "English")]).unwrap();

    controller.dispose();
    assert!(controller.is_disposed());
    assert!(!answer_assets(&mut controller, &request, vec![Asset::new("a", "Alpha", Some("//img/a"))]));
    assert!(controller.model.catalog.assets.is_empty());
}
