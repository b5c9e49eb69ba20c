use log::Level;

/// Routes the crate's trace records to stderr.
///
/// Safe to call from every test; only the first call installs the
/// logger.
pub fn init_logging() {
    let _ = simple_logger::init_with_level(Level::Trace);
}
