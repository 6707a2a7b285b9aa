//! Capture of `tracing` output
//!
//! The first capture installs a global `tracing_subscriber` registry whose
//! only layer is reloadable. Capturing swaps in an undecorated fmt layer (no
//! time, target or colors; the level token is kept for the classifier) that
//! writes each event through a `StreamAdapter` attributed to the event's
//! call site. Restoring swaps in a default fmt layer on stdout.
//!
//! TRACE events are dropped while captured: there is no level below Debug.
//! `RUST_LOG` narrows what reaches the layer (default `debug`).

use super::StreamAdapter;
use crate::error::{LogError, Result};
use crate::pipeline::SourceLocation;
use crate::Logger;
use parking_lot::Mutex;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::writer::{MakeWriter, OptionalWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;
type Handle = reload::Handle<BoxedLayer, Registry>;

static HANDLE: Mutex<Option<Handle>> = Mutex::new(None);

/// Route `tracing` events into `logger`
pub fn capture_into(logger: &'static Logger) -> Result<()> {
    reload(capture_layer(logger))
}

/// Send `tracing` events back to stdout with default formatting
pub fn restore() -> Result<()> {
    reload(default_layer())
}

fn reload(layer: BoxedLayer) -> Result<()> {
    let mut slot = HANDLE.lock();
    if let Some(handle) = slot.as_ref() {
        return handle
            .reload(layer)
            .map_err(|e| LogError::CaptureUnavailable {
                reason: e.to_string(),
            });
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (layer, handle) = reload::Layer::new(layer);
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()
        .map_err(|e| LogError::CaptureUnavailable {
            reason: e.to_string(),
        })?;
    *slot = Some(handle);
    Ok(())
}

fn capture_layer(logger: &'static Logger) -> BoxedLayer {
    fmt::layer()
        .without_time()
        .with_target(false)
        .with_ansi(false)
        .with_writer(CaptureWriter { logger })
        .boxed()
}

fn default_layer() -> BoxedLayer {
    fmt::layer().with_writer(std::io::stdout).boxed()
}

/// Hands the fmt layer one adapter per event
#[derive(Debug, Clone, Copy)]
struct CaptureWriter {
    logger: &'static Logger,
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = OptionalWriter<StreamAdapter<'static>>;

    fn make_writer(&'a self) -> Self::Writer {
        OptionalWriter::some(StreamAdapter::at(self.logger, SourceLocation::unknown()))
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        if *meta.level() == Level::TRACE {
            return OptionalWriter::none();
        }
        let location = match (meta.file(), meta.line()) {
            (Some(file), Some(line)) => SourceLocation::new(file.to_string(), line),
            _ => SourceLocation::unknown(),
        };
        OptionalWriter::some(StreamAdapter::at(self.logger, location))
    }
}
