//! Locale switching
//!
//! Changing the locale refetches the asset collection. The search string is
//! kept; page and cursor start over; picked assets stay picked.

use std::sync::Arc;

use tokio::sync::mpsc;

use dampick::api::{Asset, Locale};
use dampick::app::DialogController;
use dampick::config::{Config, DialogConfig};
use dampick::logic::layout::Direction;
use dampick::model::DialogPhase;
use dampick::services::{FetchKind, FetchRequest, FetchResponse};

fn loaded_controller() -> (DialogController, mpsc::UnboundedReceiver<FetchRequest>) {
    let mut config = Config::default();
    config.space_id = "space".to_string();
    config.delivery_api_token = "token".to_string();
    config.default_locale = "en-US".to_string();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut controller = DialogController::new(Arc::new(DialogConfig::from_config(config)), tx);
    controller.mount();

    let request = rx.try_recv().unwrap();
    controller.handle_fetch_response(FetchResponse::Locales {
        generation: request.generation,
        result: Ok(vec![
            Locale { code: "en-US".to_string(), name: "English".to_string(), default: true },
            Locale { code: "fr-FR".to_string(), name: "French".to_string(), default: false },
        ]),
    });

    let request = rx.try_recv().unwrap();
    let assets = (0..30)
        .map(|i| Asset::new(format!("en-{}", i), format!("Picture {}", i), Some("//img/en")))
        .collect();
    controller.handle_fetch_response(FetchResponse::Assets {
        generation: request.generation,
        locale: "en-US".to_string(),
        result: Ok(assets),
    });

    (controller, rx)
}

#[test]
fn test_locale_change_keeps_search_and_resets_page() {
    let (mut controller, mut rx) = loaded_controller();
    controller.set_search("picture");
    assert!(controller.next_page());
    controller.move_cursor(Direction::Right);
    assert_eq!(controller.model.ui.cursor, 1);

    assert!(controller.select_locale("fr-FR"));

    assert_eq!(controller.model.view.search(), "picture");
    assert_eq!(controller.model.view.page_index(), 0);
    assert_eq!(controller.model.ui.cursor, 0);
    assert_eq!(controller.phase(), &DialogPhase::LoadingAssets);
    assert!(controller.model.catalog.assets.is_empty());

    let request = rx.try_recv().unwrap();
    assert_eq!(request.kind, FetchKind::Assets { locale: "fr-FR".to_string() });
}

#[test]
fn test_reselecting_active_locale_is_a_no_op() {
    let (mut controller, mut rx) = loaded_controller();
    assert!(!controller.select_locale("en-US"));
    assert!(rx.try_recv().is_err());
    assert_eq!(controller.phase(), &DialogPhase::Ready);
}

#[test]
fn test_selection_survives_locale_change() {
    let (mut controller, mut rx) = loaded_controller();
    controller.toggle_selection("en-2");

    controller.select_locale("fr-FR");
    let request = rx.try_recv().unwrap();
    controller.handle_fetch_response(FetchResponse::Assets {
        generation: request.generation,
        locale: "fr-FR".to_string(),
        result: Ok(vec![Asset::new("fr-1", "Image", Some("//img/fr"))]),
    });
    controller.toggle_selection("fr-1");

    let saved = controller.save();
    let ids: Vec<_> = saved.iter().map(Asset::id).collect();
    assert_eq!(ids, vec!["en-2", "fr-1"]);
}

#[test]
fn test_locale_picker_opens_on_active_locale() {
    let (mut controller, _rx) = loaded_controller();
    assert!(controller.open_locale_picker());
    assert_eq!(controller.model.ui.locale_picker.as_ref().unwrap().selected_index, 0);

    controller.locale_picker_down();
    controller.locale_picker_down();
    assert_eq!(controller.model.ui.locale_picker.as_ref().unwrap().selected_index, 1);

    controller.close_locale_picker();
    assert!(controller.model.ui.locale_picker.is_none());
    assert_eq!(controller.model.catalog.selected_locale, "en-US");
}
