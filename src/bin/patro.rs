extern crate patro as lib;

use chrono::Weekday;
use flexi_logger::{FileSpec, Logger};
use itertools::Itertools;
use lib::calendar::Calendar;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "patro",
    about = "Patro - A Bikram-Sambat month calendar."
)]
pub struct Args {
    #[structopt(name = "DATE", help = "date to show as Y/M/D (default: today)")]
    pub date: Option<String>,

    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(long = "next", default_value = "0", help = "months to move forward")]
    pub next: u32,

    #[structopt(long = "prev", default_value = "0", help = "months to move back")]
    pub prev: u32,

    #[structopt(short = "l", long = "lang", help = "language: english or nepali")]
    pub lang: Option<String>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

fn render(calendar: &Calendar) -> lib::Result<String> {
    let lang = calendar.language();
    let mut out = format!(
        "{} {}\n",
        calendar.month_name(),
        lang.render_number(calendar.year() as u32)
    );

    out += &WEEK.iter().map(|&w| format!("{:>6}", lang.weekday_short(w))).join("");
    out.push('\n');

    for week in calendar.weeks()? {
        let row = week
            .iter()
            .map(|cell| match cell {
                Some(day) => {
                    let marker = if calendar.is_today(day) {
                        '*'
                    } else if day.has_event() {
                        '+'
                    } else {
                        ' '
                    };
                    format!("{:>5}{}", lang.render_number(day.day_num()), marker)
                }
                None => " ".repeat(6),
            })
            .join("");
        out += &row;
        out.push('\n');
    }

    for (day, event) in calendar.events() {
        out += &format!("\n{:>3}: {}", lang.render_number(day), event);
    }

    Ok(out)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    let mut calendar = Calendar::new(args.date)?;

    let language = match &args.lang {
        Some(name) => lib::lang::language_from_name(name)?,
        None => config.language()?,
    };
    calendar.set_language(language);

    for _ in 0..args.next {
        calendar.next_month()?;
    }
    for _ in 0..args.prev {
        calendar.prev_month()?;
    }

    calendar.set_events_with(|cal| config.apply_events(cal))?;

    println!("{}", render(&calendar)?);

    Ok(())
}
