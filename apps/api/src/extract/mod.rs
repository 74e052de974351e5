// Text-to-structure extraction for raw generation output.
// Every extractor is total: malformed input degrades to fewer items or the
// cleaned raw text, never to an error.

pub mod list;
pub mod normalize;
pub mod pairs;
pub mod range;

pub use list::extract_list;
pub use normalize::clean_text;
pub use pairs::extract_pairs;
pub use range::extract_range;
