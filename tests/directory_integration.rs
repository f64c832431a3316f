//! Integration tests for the user directory.
//!
//! These tests drive the directory through its public API only:
//! 1. The Ana scenario from creation to report
//! 2. The two-user demonstration run
//! 3. Notification wiring through the fan-out and console adapters

use std::sync::Arc;

use user_directory::adapters::{ConsoleNotifier, FanoutNotifier, InMemoryNotifier, SimulatedMailer};
use user_directory::application::{ActivityOutcome, UserDirectory};
use user_directory::domain::foundation::UserId;
use user_directory::domain::user::{DirectoryEvent, Theme, User};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn directory() -> (UserDirectory, Arc<InMemoryNotifier>, Arc<SimulatedMailer>) {
    let notifier = Arc::new(InMemoryNotifier::new());
    let mailer = Arc::new(SimulatedMailer::new());
    let directory = UserDirectory::new(notifier.clone(), mailer.clone());
    (directory, notifier, mailer)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn ana_end_to_end() {
    let (mut directory, notifier, mailer) = directory();

    let ana = directory.create_user(UserId::new(1), "Ana", "ana@email.com", 22);

    let config = directory.configure_user(&ana);
    assert_eq!(config.theme, Theme::Dark);

    let profile = directory.create_profile(&ana);
    assert_eq!(profile.access_count(), 1);

    let outcome = directory.record_activity(ana.id());
    assert_eq!(
        outcome,
        ActivityOutcome::Processed {
            name: "Ana".to_string(),
            access_count: Some(2),
        }
    );
    assert!(outcome.to_string().contains("Ana"));
    assert_eq!(directory.profile(ana.id()).unwrap().access_count(), 2);

    let report = directory.generate_report(UserId::new(1));
    assert!(report.contains("Ana"));
    assert!(report.contains("dark"));
    assert!(report.contains("Accesos: 2"));

    assert_eq!(mailer.sent_to(), vec!["ana@email.com".to_string()]);
    assert_eq!(
        notifier.kinds(),
        vec![
            "user.created",
            "user.configured",
            "user.welcome_email_sent",
            "profile.created",
            "activity.processed",
        ]
    );
}

#[test]
fn demonstration_run_produces_expected_output() {
    let (mut directory, _notifier, mailer) = directory();

    let ana = directory.create_user(UserId::new(1), "Ana", "ana@email.com", 22);
    let luis = directory.create_user(UserId::new(2), "Luis", "luis@email.com", 30);
    directory.configure_user(&ana);
    directory.configure_user(&luis);
    directory.create_profile(&ana);
    directory.create_profile(&luis);

    assert_eq!(
        directory.generate_report(UserId::new(1)),
        "Usuario: Ana\nEmail: ana@email.com\nEdad: 22\nTema: dark\nAccesos: 1"
    );
    assert_eq!(
        directory.process_activity(UserId::new(1)),
        "Actividad procesada para Ana"
    );
    assert_eq!(
        directory.summary().to_string(),
        "Total usuarios: 2, Configurados: 2"
    );
    assert_eq!(mailer.sent_count(), 2);
    assert_eq!(directory.configuration(luis.id()).unwrap().theme, Theme::Light);
}

#[test]
fn sentinels_for_missing_and_inactive_users() {
    let (mut directory, _notifier, _mailer) = directory();
    directory.add_user(User::new(UserId::new(7), "Eva", "eva@email.com", 41).deactivated());

    assert_eq!(directory.generate_report(UserId::new(8)), "Usuario no encontrado");
    assert_eq!(directory.process_activity(UserId::new(8)), "Usuario no existe");
    assert_eq!(directory.process_activity(UserId::new(7)), "Usuario inactivo");

    let report = directory.generate_report(UserId::new(7));
    assert!(report.contains("Tema: Sin configurar"));
    assert!(report.contains("Accesos: 0"));
}

#[test]
fn summary_after_two_users_one_configured() {
    let (mut directory, _notifier, _mailer) = directory();
    let ana = directory.create_user(UserId::new(1), "Ana", "ana@email.com", 22);
    directory.create_user(UserId::new(2), "Luis", "luis@email.com", 30);
    directory.configure_user(&ana);

    let summary = directory.summary();
    assert_eq!(summary.total_users, 2);
    assert_eq!(summary.configured_users, 1);
}

#[test]
fn fanout_delivers_to_recorder_and_console() {
    let recorder = Arc::new(InMemoryNotifier::new());
    let console = Arc::new(ConsoleNotifier::new(Vec::<u8>::new()));
    let fanout = FanoutNotifier::new()
        .with(recorder.clone())
        .with(console.clone());
    let mut directory = UserDirectory::new(Arc::new(fanout), Arc::new(SimulatedMailer::new()));

    let ana = directory.create_user(UserId::new(1), "Ana", "ana@email.com", 22);
    directory.create_profile(&ana);

    assert_eq!(
        recorder.events().last(),
        Some(&DirectoryEvent::ProfileCreated {
            user_id: UserId::new(1),
            name: "Ana".to_string(),
        })
    );

    drop(directory);
    let console = Arc::try_unwrap(console).ok().expect("console notifier still shared");
    let output = String::from_utf8(console.into_inner()).unwrap();
    assert_eq!(
        output,
        "Usuario creado: Ana\nEmail enviado a: ana@email.com\nPerfil creado para: Ana\n"
    );
}
