//! Demonstration run of the user directory.
//!
//! Creates two users, configures them, gives them profiles, then prints a
//! report, an activity result and the directory summary.

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use user_directory::adapters::{ConsoleNotifier, FanoutNotifier, SimulatedMailer, TracingNotifier};
use user_directory::application::UserDirectory;
use user_directory::config::{AppConfig, LoggingConfig};
use user_directory::domain::foundation::UserId;

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    let mut notifier = FanoutNotifier::new().with(Arc::new(TracingNotifier::new()));
    if config.notifications.console {
        notifier = notifier.with(Arc::new(ConsoleNotifier::stdout()));
    }

    let mut directory = UserDirectory::with_settings(
        config.directory.settings(),
        Arc::new(notifier),
        Arc::new(SimulatedMailer::new()),
    );
    info!("User directory ready");

    let ana = directory.create_user(UserId::new(1), "Ana", "ana@email.com", 22);
    let luis = directory.create_user(UserId::new(2), "Luis", "luis@email.com", 30);

    directory.configure_user(&ana);
    directory.configure_user(&luis);

    directory.create_profile(&ana);
    directory.create_profile(&luis);

    println!("\n--- REPORTES ---");
    println!("{}", directory.generate_report(UserId::new(1)));

    println!("\n--- ACTIVIDADES ---");
    println!("{}", directory.process_activity(UserId::new(1)));

    println!("\n--- ESTADISTICAS ---");
    println!("{}", directory.summary());
}
