pub fn setup_logger(verbose: bool) -> Result<(), fern::InitError> {
    let crate_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message,
            ))
        })
        .level(log::LevelFilter::Warn)
        .level_for("findz_core", crate_level)
        .level_for("findz_frontend", crate_level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
