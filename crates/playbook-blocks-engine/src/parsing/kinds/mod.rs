pub mod alert;
pub mod email;
pub mod list;
pub mod terminal;

pub use alert::{AlertContent, Callout, PagerAlert, parse_callout, parse_pager, split_alert};
pub use email::{EmailPreview, HeaderField, ParsedEmail, parse_email};
pub use list::{ListStyle, MarkerSet, ParsedList, extract_items, parse_list};
pub use terminal::{ClassifiedLine, LineRole, TerminalSession, classify_session, parse_terminal};
