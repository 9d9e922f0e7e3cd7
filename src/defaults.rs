//! Central place for the default paths and log filter.
//! Update these and the CLI picks them up.

pub struct Defaults;

impl Defaults {
    /* Input */
    pub const KEYPAIR_PATH: &'static str = "target/deploy/auto_savings-keypair.json";

    /* Output */
    pub const OUTPUT_PATH: &'static str = "program_id.txt";

    /* Logging (overridden by RUST_LOG) */
    pub const LOG_FILTER: &'static str = "warn";
}
