//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Stateless components receive everything as props (`TitleBar`,
//! `Skeleton`); stateful ones split into a persistent `*State` struct that
//! lives in `TuiState` plus a transient render wrapper created each frame
//! with borrowed state (`SearchBar`, `CountryList`, `DetailView`). Each
//! file co-locates its state, events, rendering, and tests.

pub mod country_list;
pub mod detail;
pub mod search_bar;
pub mod skeleton;
pub mod title_bar;

pub use country_list::{CountryList, CountryListState};
pub use detail::{DetailState, DetailView};
pub use search_bar::{SearchBar, SearchBarState, SearchEvent};
pub use skeleton::{Skeleton, SkeletonKind};
pub use title_bar::TitleBar;
