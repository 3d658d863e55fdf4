pub mod time_format;
pub mod normalizer;
pub mod classifier;
pub mod range_label;
pub mod today;
pub mod conversion;
pub mod summarizer;

pub use classifier::{is_homogeneous, shared_hours};
pub use conversion::{entries_to_weekly, weekly_to_entries};
pub use normalizer::{normalize_entries, validate_day_index};
pub use range_label::{build_range_label, contiguous_run, day_abbreviation, DAY_ABBREVIATIONS};
pub use summarizer::{summarize_schedule, ScheduleSummarizer};
pub use time_format::{format_time, parse_time_of_day};
pub use today::{label_for_day, resolve_today_label, today_index};
