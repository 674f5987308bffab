// SPDX-License-Identifier: MPL-2.0
use popup_notifications::app::{self, Flags};
use popup_notifications::config::Position;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();

    let position = args
        .opt_value_from_str::<_, Position>("--position")
        .unwrap_or_else(|err| {
            tracing::error!(%err, "ignoring --position");
            None
        });
    let config_path = args
        .opt_value_from_str::<_, PathBuf>("--config")
        .unwrap_or_else(|err| {
            tracing::error!(%err, "ignoring --config");
            None
        });

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "unused arguments");
    }

    app::run(Flags {
        position,
        config_path,
    })
}
