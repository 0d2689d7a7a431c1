mod parse_bad;
mod snapshot_events;
mod utils;
