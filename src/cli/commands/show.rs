use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::text::{TextOptions, render_sheet};
use crate::ui::messages::header;
use std::io::{self, IsTerminal};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        input,
        day,
        no_color,
    } = cmd
    {
        let trip = Core::load(input, day.as_deref())?;
        let color = cfg.color && !*no_color && io::stdout().is_terminal();

        let opts = TextOptions {
            width: cfg.timeline_width,
            color,
            show_totals: cfg.show_totals,
        };

        header(
            format!(
                "Trip: {} day(s), {} stop(s)",
                trip.plan.eld_logs.len(),
                trip.plan.stop_count()
            ),
            color,
        );

        for sheet in &trip.sheets {
            println!();
            println!("{}", render_sheet(sheet, &opts));
        }
    }
    Ok(())
}
