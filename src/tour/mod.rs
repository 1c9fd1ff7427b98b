mod path;
mod search;

pub use path::TourPath;
pub use search::TourSearch;
