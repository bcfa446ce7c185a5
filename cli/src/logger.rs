/// Intercept messages using the `log` crate and print them to STDERR. STDOUT is reserved for the
/// V/E output, so diagnostics never mix into it.
pub fn setup() {
    use env_logger::{Builder, Env};
    Builder::from_env(Env::default().default_filter_or("info")).init();
}
