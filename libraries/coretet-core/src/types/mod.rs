mod filter;
mod ids;
mod track;
mod view;

pub use filter::{BpmRange, DateFilter, FilterState, RatingFilter};
pub use ids::{PlaylistId, TrackId};
pub use track::{validate_lineage, Lineage, Rating, Track, TrackRecord};
pub use view::{
    ManualPositions, PreferenceUpdate, SortColumn, SortDirection, ViewContext, ViewMode,
    ViewPreference,
};
