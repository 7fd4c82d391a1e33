//! Site-wide flows: forms over the injectable submitter, menu, observers.

#![allow(clippy::unwrap_used)]

use url::Url;

use atelier_core::ElementId;
use atelier_integration_tests::RecordingSubmitter;
use atelier_storefront::components::hover::ProductCard;
use atelier_storefront::config::SiteConfig;
use atelier_storefront::error::StorefrontError;
use atelier_storefront::forms::FormData;
use atelier_storefront::site::{Site, SiteContext};

fn context() -> SiteContext {
    SiteContext {
        header_height: 80.0,
        reveal_elements: vec![
            ElementId::new("about-section"),
            ElementId::new("gallery-grid"),
        ],
        lazy_images: vec![(
            ElementId::new("grid-img-1"),
            Url::parse("https://images.example.com/grid/1.jpg").unwrap(),
        )],
        product_cards: vec![ProductCard {
            primary: Some(Url::parse("https://images.example.com/card-front.jpg").unwrap()),
            secondary: Some(Url::parse("https://images.example.com/card-back.jpg").unwrap()),
        }],
        hero_lines: vec!["Sacred Hearts".to_owned(), "Contemporary votive art".to_owned()],
    }
}

/// Site plus a handle on the shared recorder (the submitter clones share
/// their submission log).
fn attached_site() -> (Site<RecordingSubmitter>, RecordingSubmitter) {
    let submitter = RecordingSubmitter::new();
    let mut site = Site::new(&SiteConfig::default(), context(), submitter.clone());
    site.attach();
    (site, submitter)
}

fn contact_data() -> FormData {
    FormData::from([
        ("name".to_owned(), "Ada".to_owned()),
        ("surname".to_owned(), "Rossi".to_owned()),
        ("email".to_owned(), "Ada.Rossi@Example.com".to_owned()),
        ("message".to_owned(), "I would love a studio visit.".to_owned()),
    ])
}

fn commission_data() -> FormData {
    FormData::from([
        ("fullname".to_owned(), "Ada Rossi".to_owned()),
        ("email".to_owned(), "ada@example.com".to_owned()),
        ("address".to_owned(), "Via dei Serragli 1, Firenze".to_owned()),
        ("size".to_owned(), "60x80cm".to_owned()),
        ("description".to_owned(), "A portrait in the votive style.".to_owned()),
    ])
}

#[tokio::test]
async fn contact_submission_records_normalized_email() {
    let (mut site, submitter) = attached_site();

    site.submit_contact(&contact_data()).await.unwrap();

    assert!(site.contact.success_visible());
    let submissions = submitter.submissions();
    assert_eq!(submissions.len(), 1);
    let form = submissions.first().unwrap();
    assert_eq!(form.form, "contact");
    assert_eq!(
        form.fields.get("email").map(String::as_str),
        Some("ada.rossi@example.com")
    );

    site.contact.dismiss_success();
    assert!(!site.contact.success_visible());
}

#[tokio::test]
async fn invalid_contact_data_is_blocked_before_submission() {
    let (mut site, submitter) = attached_site();

    let mut data = contact_data();
    data.insert("email".to_owned(), "not-an-email".to_owned());

    let err = site.submit_contact(&data).await.unwrap_err();
    assert!(matches!(err, StorefrontError::Validation(_)));
    assert_eq!(err.to_string(), "Validation error: Please enter a valid email address.");
    assert!(submitter.submissions().is_empty());
    assert!(!site.contact.success_visible());
}

#[tokio::test]
async fn missing_fields_are_blocked_with_alert_text() {
    let (mut site, _submitter) = attached_site();

    let mut data = contact_data();
    data.insert("message".to_owned(), "   ".to_owned());

    let err = site.submit_contact(&data).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation error: Please fill in all required fields."
    );
}

#[tokio::test]
async fn commission_submission_resets_file_label() {
    let (mut site, _submitter) = attached_site();

    site.commission_files.set_files(["reference.jpg", "sketch.png"]);
    assert_eq!(site.commission_files.label(), "reference.jpg, sketch.png");

    site.submit_commission(&commission_data()).await.unwrap();

    assert!(site.commission.success_visible());
    assert_eq!(site.commission_files.label(), "Add file");
}

#[tokio::test]
async fn failing_endpoint_keeps_entered_state() {
    let mut site = Site::new(
        &SiteConfig::default(),
        context(),
        RecordingSubmitter::failing(),
    );
    site.attach();
    site.commission_files.set_files(["reference.jpg"]);

    let err = site.submit_commission(&commission_data()).await.unwrap_err();
    assert!(matches!(err, StorefrontError::Submit(_)));

    // The form was not reset; the user can retry
    assert_eq!(site.commission_files.label(), "reference.jpg");
    assert!(!site.commission.success_visible());
}

#[test]
fn menu_closes_when_viewport_grows() {
    let (mut site, _submitter) = attached_site();

    site.menu.toggle();
    assert!(site.menu.scroll_locked());

    site.on_resize(1280.0);
    assert!(!site.menu.is_open());
    assert!(!site.menu.scroll_locked());
}

#[test]
fn header_scrolled_treatment_site_wide() {
    let (mut site, _submitter) = attached_site();

    site.on_scroll(60.0);
    assert!(site.header.is_scrolled());

    site.on_scroll(10.0);
    assert!(!site.header.is_scrolled());
}

#[test]
fn observers_fire_once_per_element() {
    let (mut site, _submitter) = attached_site();
    let about = ElementId::new("about-section");
    let img = ElementId::new("grid-img-1");

    assert_eq!(site.reveal.on_intersect(&about), Some("fade-in"));
    assert_eq!(site.reveal.on_intersect(&about), None);

    let src = site.lazy_images.on_intersect(&img).unwrap();
    assert_eq!(src.as_str(), "https://images.example.com/grid/1.jpg");
    assert!(site.lazy_images.on_intersect(&img).is_none());
}

#[test]
fn hover_preload_lists_secondary_images() {
    let (site, _submitter) = attached_site();
    let urls = site.hover.preload_urls();
    assert_eq!(urls.len(), 1);
    assert_eq!(
        urls.first().map(|u| u.as_str()),
        Some("https://images.example.com/card-back.jpg")
    );
}

#[test]
fn hero_text_is_staggered_and_armed() {
    let (site, _submitter) = attached_site();

    assert!(site.hero.is_armed());
    let headline = site.hero.lines().first().unwrap();
    assert_eq!(headline.len(), "Sacred Hearts".len());
    assert_eq!(headline.first().map(|c| c.ch), Some('S'));
    assert_eq!(headline.last().map(|c| c.index), Some(12));
}

#[test]
fn smooth_scroll_lands_anchors_below_header() {
    let (site, _submitter) = attached_site();
    assert_eq!(site.smooth_scroll.resolve("#commissions", Some(500.0)), Some(420.0));
    assert_eq!(site.smooth_scroll.resolve("#", Some(500.0)), None);
    assert!((site.smooth_scroll.scroll_padding() - 80.0).abs() < f64::EPSILON);
}
