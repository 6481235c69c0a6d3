// SPDX-License-Identifier: MPL-2.0
use iced_herald::app::{self, Flags};

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("iced_herald: {err}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

/// Parses CLI flags. Unknown theme or severity labels are rejected here,
/// before any window opens.
fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    Ok(Flags {
        theme: args.opt_value_from_str("--theme")?,
        severity: args.opt_value_from_str("--severity")?,
        note: args.opt_value_from_str("--note")?,
    })
}
