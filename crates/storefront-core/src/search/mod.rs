//! Search module.
//!
//! Filters, facet aggregation, sorting and autocomplete over a catalog
//! snapshot. Everything here is a pure function of its inputs.

mod facets;
mod filter;
mod pipeline;
mod query;
mod results;
mod sort;
mod suggest;

pub(crate) use query::{parse_flag, parse_pairs};

pub use facets::{aggregate, sort_sizes, AvailableFilters, ColorOption, FilterGroup, FilterOption};
pub use filter::{Filter, MatchContext};
pub use pipeline::execute;
pub use query::{PriceBounds, SearchQuery, SearchRequest, SortDirection, SortField, SortSpec, SuggestQuery};
pub use results::{PriceRange, SearchReply, SearchResponse, SuggestionResponse};
pub use sort::sort_products;
pub use suggest::suggest;
