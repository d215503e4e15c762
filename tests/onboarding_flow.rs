//! End-to-end onboarding flow tests.
//!
//! Drives the controller through the whole wizard against the in-memory
//! adapters, the way a host app would.

use std::sync::Arc;

use palco_onboarding::adapters::geolocation::ScriptedGeolocation;
use palco_onboarding::adapters::photo::CannedPhotoPicker;
use palco_onboarding::adapters::profile::InMemoryProfileApi;
use palco_onboarding::adapters::taxonomy::StaticCatalog;
use palco_onboarding::application::{
    DisciplineOptions, LocationOutcome, OnboardingController,
};
use palco_onboarding::domain::foundation::{CategoryId, ErrorCode, UserId};
use palco_onboarding::domain::location::MEDELLIN;
use palco_onboarding::domain::onboarding::{OnboardingStep, SubmissionStatus};
use palco_onboarding::ports::{Locale, ProfileApiError, TaxonomyProvider};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn controller(geo: ScriptedGeolocation, api: Arc<InMemoryProfileApi>) -> OnboardingController {
    OnboardingController::new(
        UserId::new("artist-42").unwrap(),
        Arc::new(geo),
        Arc::new(CannedPhotoPicker::returning("file:///cache/profile.jpg")),
        api,
    )
}

#[tokio::test]
async fn full_wizard_run_creates_a_profile() {
    init_tracing();
    let api = Arc::new(InMemoryProfileApi::new());
    let catalog = Arc::new(StaticCatalog::with_defaults());
    let mut ctrl = controller(ScriptedGeolocation::granted_in("Itagüí"), api.clone());

    // Step 1: identity.
    assert_eq!(ctrl.session().step(), OnboardingStep::Identity);
    assert!(!ctrl.session().can_continue());
    ctrl.set_display_name("Ana María");
    ctrl.set_username("anamaria");
    ctrl.pick_photo().await.unwrap();
    assert!(ctrl.session().can_continue());
    ctrl.continue_to_next_step().unwrap();

    // Step 2: category, chosen from the catalog.
    let music = catalog
        .category_by_id(&CategoryId::new("music").unwrap())
        .unwrap();
    ctrl.select_category(music.id.clone());
    ctrl.continue_to_next_step().unwrap();

    // Step 3: discipline, chosen from the localized options.
    let options = DisciplineOptions::new(catalog.clone())
        .for_category(&music.id, Locale::Es)
        .unwrap();
    let dj = options.iter().find(|o| o.label == "DJ").unwrap();
    ctrl.select_discipline(dj.id.clone());
    ctrl.continue_to_next_step().unwrap();

    // Step 4: GPS resolution inside coverage, then submit.
    assert_eq!(ctrl.detect_location().await, LocationOutcome::Covered);
    assert_eq!(ctrl.session().city(), Some(MEDELLIN));

    let profile_id = ctrl.submit().await.unwrap();
    assert_eq!(ctrl.session().submission(), SubmissionStatus::Succeeded);
    assert!(ctrl.session().is_submitting(), "handoff keeps the loading state");

    let submitted = api.submitted().await;
    assert_eq!(submitted.len(), 1);
    let profile = &submitted[0];
    assert_eq!(profile.user_id.as_str(), "artist-42");
    assert_eq!(profile.display_name, "Ana María");
    assert_eq!(profile.username, "anamaria");
    assert_eq!(profile.category.as_str(), "music");
    assert_eq!(profile.discipline.as_str(), "dj");
    assert_eq!(profile.city, MEDELLIN);
    assert!(profile.photo.is_some());
    let _ = profile_id;
}

#[tokio::test]
async fn back_navigation_preserves_everything() {
    init_tracing();
    let api = Arc::new(InMemoryProfileApi::new());
    let mut ctrl = controller(ScriptedGeolocation::granted_in("Medellín"), api);

    ctrl.set_display_name("Ana");
    ctrl.set_username("ana");
    ctrl.continue_to_next_step().unwrap();
    ctrl.select_category(CategoryId::new("performance").unwrap());
    ctrl.continue_to_next_step().unwrap();

    ctrl.go_to_previous_step();
    ctrl.go_to_previous_step();
    assert_eq!(ctrl.session().step(), OnboardingStep::Identity);
    // Back at the start but nothing was cleared.
    assert_eq!(ctrl.session().display_name(), "Ana");
    assert_eq!(ctrl.session().category().unwrap().as_str(), "performance");

    // Going back from the first step stays put.
    assert_eq!(ctrl.go_to_previous_step(), OnboardingStep::Identity);
}

#[tokio::test]
async fn gps_denial_falls_back_to_manual_entry() {
    init_tracing();
    let api = Arc::new(InMemoryProfileApi::new());
    let mut ctrl = controller(ScriptedGeolocation::denied(), api);

    ctrl.set_display_name("Ana");
    ctrl.set_username("ana");
    ctrl.continue_to_next_step().unwrap();
    ctrl.select_category(CategoryId::new("music").unwrap());
    ctrl.continue_to_next_step().unwrap();
    ctrl.select_discipline(
        palco_onboarding::domain::foundation::DisciplineId::new("singer").unwrap(),
    );
    ctrl.continue_to_next_step().unwrap();

    assert_eq!(ctrl.detect_location().await, LocationOutcome::PermissionDenied);
    assert!(!ctrl.session().can_continue());

    assert_eq!(ctrl.resolve_manual_city("Copacabana"), LocationOutcome::Covered);
    assert!(ctrl.session().gate_passes(OnboardingStep::Location));
    ctrl.submit().await.unwrap();
}

#[tokio::test]
async fn out_of_coverage_user_can_opt_in() {
    init_tracing();
    let api = Arc::new(InMemoryProfileApi::new());
    let mut ctrl = controller(ScriptedGeolocation::granted_in("Bogotá"), api.clone());

    ctrl.set_display_name("Ana");
    ctrl.set_username("ana");
    ctrl.continue_to_next_step().unwrap();
    ctrl.select_category(CategoryId::new("visual_arts").unwrap());
    ctrl.continue_to_next_step().unwrap();
    ctrl.select_discipline(
        palco_onboarding::domain::foundation::DisciplineId::new("painter").unwrap(),
    );
    ctrl.continue_to_next_step().unwrap();

    match ctrl.detect_location().await {
        LocationOutcome::NoCoverage { detected } => assert_eq!(detected, "Bogotá"),
        other => panic!("expected NoCoverage, got {:?}", other),
    }
    assert!(ctrl.session().city().is_none());

    ctrl.register_in_medellin_anyway().unwrap();
    ctrl.submit().await.unwrap();
    assert_eq!(api.submitted().await[0].city, MEDELLIN);
}

#[tokio::test]
async fn failed_submission_surfaces_the_cause_and_allows_retry() {
    init_tracing();
    let api = Arc::new(InMemoryProfileApi::fail_once(ProfileApiError::Unavailable(
        "deploy in progress".into(),
    )));
    let mut ctrl = controller(ScriptedGeolocation::granted_in("Medellín"), api.clone());

    ctrl.set_display_name("Ana");
    ctrl.set_username("ana");
    ctrl.continue_to_next_step().unwrap();
    ctrl.select_category(CategoryId::new("music").unwrap());
    ctrl.continue_to_next_step().unwrap();
    ctrl.select_discipline(
        palco_onboarding::domain::foundation::DisciplineId::new("band").unwrap(),
    );
    ctrl.continue_to_next_step().unwrap();
    ctrl.resolve_manual_city("Envigado, Antioquia");

    let err = ctrl.submit().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::SubmissionFailed);
    assert!(err.message().contains("deploy in progress"));
    assert!(!ctrl.session().is_submitting());

    // Same action, second press: fields were preserved, the retry succeeds.
    ctrl.submit().await.unwrap();
    assert_eq!(api.submission_count().await, 2);
}
