// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{TracingConfig, WriterArg, rolling_file_appender_impl};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Initializes the global subscriber with the provided [`TracingConfig`]. Returns
/// `Ok(false)` when the writer is [`WriterArg::None`] and nothing was installed.
///
/// # Errors
///
/// Fails if the log file can't be created, or if a global subscriber is already set.
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> miette::Result<bool> {
    let Some(layers) = try_create_layers(&tracing_config)? else {
        return Ok(false);
    };
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|err| miette::miette!("Failed to set the global subscriber: {err}"))?;
    Ok(true)
}

/// Returns the layers. This does not initialize the tracing system.
///
/// For example, once you have the layers, you can run the following:
/// `try_create_layers(..).map(|layers| tracing_subscriber::registry().with(layers).init());`
///
/// # Errors
///
/// Fails if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    let level_filter = tracing_config.get_level_filter();

    let Some(writer_layer) = try_create_writer_layer(tracing_config)? else {
        return Ok(None);
    };

    // The level filter goes first so that layers without their own filter are covered.
    let layers: Vec<Box<DynLayer<tracing_subscriber::Registry>>> =
        vec![Box::new(level_filter), writer_layer];

    Ok(Some(layers))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Fails if the log file can't be created.
pub fn try_create_writer_layer<S>(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let level_filter = tracing_config.get_level_filter();
    let fmt_layer = tracing_subscriber::fmt::layer().compact().with_target(false);

    Ok(match tracing_config.writer {
        WriterArg::Stdout => Some(Box::new(
            fmt_layer.with_writer(std::io::stdout).with_filter(level_filter),
        )),
        WriterArg::Stderr => Some(Box::new(
            fmt_layer.with_writer(std::io::stderr).with_filter(level_filter),
        )),
        WriterArg::File => {
            let file =
                rolling_file_appender_impl::try_create(&tracing_config.log_file_path)?;
            Some(Box::new(
                fmt_layer
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        WriterArg::None => None,
    })
}
