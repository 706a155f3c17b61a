use clap::Parser;
use visiondesk::config::Config;

pub fn main() -> iced::Result {
    visiondesk::app::run(Config::parse())
}
