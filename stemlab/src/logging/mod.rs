//! # Logging
//!
//! `tracing` setup for the binary. Library code only emits events; the
//! subscriber is installed once by [`init`].
//!
//! | Variable | Default | Effect |
//! |---|---|---|
//! | `RUST_LOG` / `STEMLAB_LOG_LEVEL` | `stemlab=info,warn` | `EnvFilter` directives |
//! | `STEMLAB_LOG_DIR` | `logs` | directory of the daily-rolling log file |
//! | `STEMLAB_LOG_FORMAT` | `text` | `json` for one JSON object per line |
//! | `STEMLAB_LOG_STDERR` | off | `1` mirrors events to stderr |

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::init;
