// SPDX-License-Identifier: MPL-2.0
use iconforge::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        data_dir: args.opt_value_from_str("--data-dir").unwrap_or_default(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_default(),
    };

    app::run(flags)
}
