mod annotations;
mod config;
mod constants;
mod editor;
mod map;
mod paths;
mod poi;
pub mod theme;
mod ui;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

/// Mark the start of a run in an existing log file
#[cfg(debug_assertions)]
fn write_session_header(log_file: &std::path::Path) {
    use std::io::Write;

    let Ok(mut file) = std::fs::OpenOptions::new().append(true).open(log_file) else {
        return;
    };
    let rule = "-".repeat(72);
    let started = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let _ = writeln!(file, "\n{rule}\nhuntmap started {started}\n{rule}");
}

/// Debug builds log to stdout and to `logs/huntmap.log`.
///
/// The returned guard flushes the file writer on drop, so `main` holds it
/// until the app exits. `RUST_LOG` overrides the default filter.
#[cfg(debug_assertions)]
fn setup_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let logs_dir = paths::logs_dir();
    if let Err(e) = std::fs::create_dir_all(&logs_dir) {
        eprintln!("Logging to stdout only, cannot create {:?}: {}", logs_dir, e);
        return None;
    }
    write_session_header(&logs_dir.join(paths::LOG_FILE_NAME));

    let appender = tracing_appender::rolling::never(&logs_dir, paths::LOG_FILE_NAME);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,huntmap=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    Some(guard)
}

#[cfg(not(debug_assertions))]
fn setup_logging() -> Option<()> {
    None
}

fn main() {
    if let Err(e) = paths::ensure_directories() {
        eprintln!("Cannot create huntmap directories: {}", e);
    }
    let _log_guard = setup_logging();

    App::new()
        .insert_resource(ClearColor(theme::MAP_BACKGROUND))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Hunt Map".into(),
                resolution: (DEFAULT_WINDOW_WIDTH as u32, DEFAULT_WINDOW_HEIGHT as u32).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins(config::ConfigPlugin)
        .add_plugins(map::MapPlugin)
        .add_plugins(annotations::AnnotationPlugin)
        .add_plugins(editor::EditorPlugin)
        .add_plugins(poi::PoiPlugin)
        .add_plugins(ui::UiPlugin)
        .run();
}
