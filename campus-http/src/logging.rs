// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fs::OpenOptions;
use std::io;

use campus_bridge::{Logging, LoggingRotation};
use file_rotate::compression::Compression;
use file_rotate::{ContentLimit, FileRotate, TimeFrequency, suffix::AppendCount};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt;
use tracing_subscriber::{EnvFilter, Registry, prelude::*};

/// Keeps the non-blocking writers flushing. Drop it only on shutdown.
pub struct LoggingHandle {
    _guards: Vec<WorkerGuard>,
}

fn content_limit(rotation: LoggingRotation, max_size: usize) -> ContentLimit {
    match rotation {
        LoggingRotation::Size => ContentLimit::Bytes(max_size),
        LoggingRotation::Hourly => ContentLimit::Time(TimeFrequency::Hourly),
        LoggingRotation::Daily => ContentLimit::Time(TimeFrequency::Daily),
        LoggingRotation::Weekly => ContentLimit::Time(TimeFrequency::Weekly),
        LoggingRotation::Monthly => ContentLimit::Time(TimeFrequency::Monthly),
        LoggingRotation::Yearly => ContentLimit::Time(TimeFrequency::Yearly),
        LoggingRotation::Never => ContentLimit::None,
    }
}

pub fn init_logging(cfg: &Logging) -> Option<LoggingHandle> {
    if !cfg.logs() {
        return None;
    }

    let mut guards: Vec<WorkerGuard> = Vec::new();

    let env_filter = if let Ok(env_filter) = EnvFilter::try_from_default_env() {
        env_filter
    } else {
        EnvFilter::new(&cfg.level)
    };

    let stdout_layer = cfg.output.stdout.then(|| {
        let (stdout_nb, guard) = NonBlocking::new(io::stdout());
        guards.push(guard);

        fmt::layer()
            .with_target(true)
            .with_ansi(true)
            .with_writer(stdout_nb)
    });

    let file_layer = cfg.output.file.then(|| {
        std::fs::create_dir_all(&cfg.file_path).ok();

        let mut opts = OpenOptions::new();
        opts.read(true).write(true).create(true).append(true);

        let full = format!("{}/campus.log", cfg.file_path);
        let fr = FileRotate::new(
            &full,
            AppendCount::new(cfg.max_files),
            content_limit(cfg.rotation, cfg.max_size),
            Compression::None,
            Some(opts),
        );

        let (file_nb, guard) = NonBlocking::new(fr);
        guards.push(guard);

        fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(file_nb)
    });

    let subscriber = Registry::default()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer);

    // If a subscriber is running (e.g. tests)
    if subscriber.try_init().is_err() {
        return None;
    }

    Some(LoggingHandle { _guards: guards })
}
