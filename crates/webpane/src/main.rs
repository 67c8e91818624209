//! Binary entrypoint for the webpane harness.
//!
//! Wires the full input pipeline: a scripted event source standing in for
//! the remote display session, the translation event loop on a dedicated
//! thread, and the UI run loop on the main thread driving a headless
//! logging browser host. The process exits when the script quits (or
//! ends) and the last view has closed.

use std::{
    io::{self, BufReader},
    process,
    sync::Arc,
};

use clap::Parser;
use tracing::error;
use webpane_dispatch::{LifeTracker, UiRunLoop, ViewClient, ViewProxy};
use webpane_engine::EventLoop;

/// Command-line surface.
mod cli;
/// Headless logging browser host.
mod headless;
/// Logging setup and CLI log flags.
mod logs;
/// Line-oriented event script source.
mod script;

use crate::{cli::Cli, headless::HeadlessHost, script::ScriptSource};

fn main() {
    let cli = Cli::parse();
    logs::init(&cli.log);

    let frame = cli.frame.unwrap_or_default();

    // The main thread is the UI execution context; everything that touches
    // the view goes through this loop.
    let (runloop, ui) = UiRunLoop::new();
    let life = Arc::new(LifeTracker::new(ui.clone()));
    let client = ViewClient::new(life);
    let host = HeadlessHost::create(&cli.url, frame, client);
    let proxy = ViewProxy::new(ui, &host);

    // Dedicated event thread blocking on the script stream.
    let source = ScriptSource::new(BufReader::new(io::stdin()));
    let events = match EventLoop::new(source, proxy).spawn() {
        Ok(handle) => handle,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    runloop.run();

    if events.join().is_err() {
        error!("event_thread_panicked");
        process::exit(1);
    }
}
