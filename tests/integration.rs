// SPDX-License-Identifier: MPL-2.0
//! Cross-module flows: feed file → reel, config → i18n, and the delete flow
//! driven through the viewer component against a live reel.

use chrono::{TimeZone, Utc};
use iced_reel::config::{self, ApiConfig, Config, GeneralConfig};
use iced_reel::feed::{self, Photo, PhotoReel, RemoveOutcome};
use iced_reel::i18n::fluent::I18n;
use iced_reel::ui::viewer::component;
use iced_reel::ui::viewer::subcomponents::delete_menu;
use tempfile::tempdir;

fn sample_photo(id: &str) -> Photo {
    Photo {
        id: id.to_string(),
        image_url: format!("https://photos.example/{id}.jpg"),
        activity: "running".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 7, 17, 9, 30, 0).unwrap(),
    }
}

fn sample_reel(ids: &[&str], index: usize) -> PhotoReel {
    PhotoReel::new(ids.iter().map(|id| sample_photo(id)).collect(), index)
}

#[test]
fn feed_file_round_trips_into_a_clamped_reel() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("feed.json");

    let raw = r#"[
        {"id": "a", "imageUrl": "https://photos.example/a.jpg", "activity": "running", "createdAt": "2024-07-17T09:30:00Z"},
        {"id": "b", "imageUrl": "https://photos.example/b.jpg", "activity": "surfing", "createdAt": "2024-08-02T17:05:00Z"}
    ]"#;
    std::fs::write(&path, raw).expect("failed to write feed");

    let photos = feed::load_feed(&path).expect("feed should load");
    assert_eq!(photos.len(), 2);
    assert_eq!(photos[1].activity, "surfing");

    // An out-of-range requested index clamps to the last photo.
    let reel = PhotoReel::new(photos, 10);
    assert_eq!(reel.current_index(), 1);
}

#[test]
fn malformed_feed_file_is_an_error() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("feed.json");
    std::fs::write(&path, "{ not a feed").expect("failed to write feed");

    assert!(feed::load_feed(&path).is_err());
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        api: ApiConfig::default(),
    };
    config::save_to_path(&initial, &path).expect("failed to write initial config");

    let loaded = config::load_from_path(&path).expect("failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        api: ApiConfig::default(),
    };
    config::save_to_path(&french, &path).expect("failed to write french config");

    let loaded = config::load_from_path(&path).expect("failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // 3. A CLI override beats the config file
    let i18n_cli = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n_cli.current_locale().to_string(), "en-US");
}

#[test]
fn successful_delete_flow_shrinks_reel_and_resets_flags() {
    let mut reel = sample_reel(&["a", "b", "c"], 2);
    let mut viewer = component::State::new(reel.len(), reel.current_index());

    // idle → confirm-pending
    viewer.update(component::Message::DeleteMenu(
        delete_menu::Message::OverflowPressed,
    ));
    assert!(viewer.is_delete_menu_visible());

    // delete tap asks for the native confirmation
    let (effect, _) = viewer.update(component::Message::DeleteMenu(
        delete_menu::Message::DeletePressed,
    ));
    assert_eq!(effect, component::Effect::RequestDeleteConfirmation);
    let pending_id = reel.current().expect("reel is non-empty").id.clone();

    // confirm → in-flight, request goes out
    let (effect, _) = viewer.update(component::Message::DeleteMenu(
        delete_menu::Message::DialogConfirmed,
    ));
    assert_eq!(effect, component::Effect::DeleteConfirmed);
    assert!(viewer.is_delete_in_flight());

    // the request resolves successfully
    viewer.update(component::Message::DeleteMenu(
        delete_menu::Message::Completed,
    ));
    let outcome = reel.remove(&pending_id).expect("photo exists");
    assert_eq!(outcome, RemoveOutcome::Remaining { index: 1 });
    let _ = viewer.apply_removal(reel.len(), 1);

    assert!(!viewer.is_delete_menu_visible());
    assert!(!viewer.is_delete_in_flight());
    assert_eq!(viewer.current_page(), 1);
    assert_eq!(reel.len(), 2);
}

#[test]
fn deleting_the_only_photo_empties_the_reel() {
    let mut reel = sample_reel(&["solo"], 0);
    // The screen exits on this outcome instead of repositioning.
    assert_eq!(reel.remove("solo"), Some(RemoveOutcome::Emptied));
    assert!(reel.is_empty());
}

#[test]
fn failed_delete_leaves_reel_unchanged_and_resets_flags() {
    let mut reel = sample_reel(&["a", "b"], 0);
    let mut viewer = component::State::new(reel.len(), reel.current_index());

    viewer.update(component::Message::DeleteMenu(
        delete_menu::Message::OverflowPressed,
    ));
    viewer.update(component::Message::DeleteMenu(
        delete_menu::Message::DialogConfirmed,
    ));
    assert!(viewer.is_delete_in_flight());

    // The request fails: no removal, but flags still reset.
    viewer.update(component::Message::DeleteMenu(
        delete_menu::Message::Completed,
    ));

    assert_eq!(reel.len(), 2);
    assert_eq!(reel.current_index(), 0);
    assert!(!viewer.is_delete_menu_visible());
    assert!(!viewer.is_delete_in_flight());
}

#[test]
fn cancelling_the_dialog_returns_to_idle_without_a_request() {
    let mut viewer = component::State::new(2, 0);

    viewer.update(component::Message::DeleteMenu(
        delete_menu::Message::OverflowPressed,
    ));
    viewer.update(component::Message::DeleteMenu(
        delete_menu::Message::DialogCancelled,
    ));

    assert!(!viewer.is_delete_menu_visible());
    assert!(!viewer.is_delete_in_flight());
}

#[test]
fn scrolling_to_a_new_page_collapses_the_delete_menu() {
    use iced::widget::scrollable::AbsoluteOffset;
    use iced::{Point, Rectangle, Size};

    let mut viewer = component::State::new(3, 0);
    viewer.update(component::Message::DeleteMenu(
        delete_menu::Message::OverflowPressed,
    ));
    assert!(viewer.is_delete_menu_visible());

    let (effect, _) = viewer.update(component::Message::ViewportChanged {
        bounds: Rectangle::new(Point::ORIGIN, Size::new(450.0, 800.0)),
        offset: AbsoluteOffset { x: 0.0, y: 650.0 },
    });

    assert_eq!(effect, component::Effect::PageSettled { page: 1 });
    assert!(!viewer.is_delete_menu_visible());
    assert!(viewer.is_animating(), "the overlay fade should replay");
}

#[test]
fn initial_state_matches_requested_index() {
    let reel = sample_reel(&["a", "b", "c", "d"], 2);
    let mut viewer = component::State::new(reel.len(), reel.current_index());

    assert_eq!(viewer.current_page(), 2);
    assert!(!viewer.is_animating());

    // The startup snap replays the first fade-in.
    let _task = viewer.initial_snap();
    assert!(viewer.is_animating());
}
