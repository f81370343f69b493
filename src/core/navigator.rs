//! Directory navigation state.
//!
//! [`NavigationState`] is the pure path/history model. [`Navigator`] adds the
//! listing being shown and request generations, so that only the answer to
//! the most recent fetch is ever applied.

use crate::core::error::ContentError;
use crate::models::DirectoryListing;

// =============================================================================
// Path + history
// =============================================================================

/// Current directory and back-history. `""` is the repository root.
///
/// After any transition the top of `history` differs from `current_path`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    current_path: String,
    history: Vec<String>,
}

/// One clickable breadcrumb segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    /// Path this segment navigates to.
    pub path: String,
    /// Segment index, as accepted by [`NavigationState::jump_to_breadcrumb`].
    pub index: usize,
}

/// Breadcrumb row item after collapsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BreadcrumbItem {
    Crumb(Breadcrumb),
    Ellipsis,
}

fn normalize(path: &str) -> String {
    path.split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn is_root(&self) -> bool {
        self.current_path.is_empty()
    }

    /// Whether "back" would do anything.
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty() || !self.is_root()
    }

    fn move_to(&mut self, path: String) -> bool {
        if path == self.current_path {
            return false;
        }
        let previous = std::mem::replace(&mut self.current_path, path);
        self.history.push(previous);
        true
    }

    /// Open a subdirectory (or any path).
    pub fn enter(&mut self, entry_path: &str) -> bool {
        self.move_to(normalize(entry_path))
    }

    /// Return to the previous directory, or to the root when there is no history.
    pub fn go_back(&mut self) -> bool {
        if let Some(previous) = self.history.pop() {
            self.current_path = previous;
            true
        } else if !self.is_root() {
            self.current_path.clear();
            true
        } else {
            false
        }
    }

    pub fn go_to_root(&mut self) -> bool {
        self.move_to(String::new())
    }

    /// Jump to the directory named by breadcrumb segment `index`.
    pub fn jump_to_breadcrumb(&mut self, index: usize) -> bool {
        let segments: Vec<&str> = self.segments().collect();
        if index >= segments.len() {
            return false;
        }
        let target = segments[..=index].join("/");
        self.move_to(target)
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        self.current_path.split('/').filter(|s| !s.is_empty())
    }

    /// One breadcrumb per path segment. Empty at the root.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let mut path = String::new();
        self.segments()
            .enumerate()
            .map(|(index, segment)| {
                if !path.is_empty() {
                    path.push('/');
                }
                path.push_str(segment);
                Breadcrumb {
                    label: segment.to_string(),
                    path: path.clone(),
                    index,
                }
            })
            .collect()
    }

    /// Breadcrumbs for narrow viewports: first, ellipsis, last two when
    /// there are more than `max` segments.
    pub fn collapsed_breadcrumbs(&self, max: usize) -> Vec<BreadcrumbItem> {
        let crumbs = self.breadcrumbs();
        if crumbs.len() <= max.max(3) {
            return crumbs.into_iter().map(BreadcrumbItem::Crumb).collect();
        }

        let tail = crumbs.len() - 2;
        let mut items = Vec::with_capacity(4);
        let mut iter = crumbs.into_iter();
        if let Some(first) = iter.next() {
            items.push(BreadcrumbItem::Crumb(first));
        }
        items.push(BreadcrumbItem::Ellipsis);
        items.extend(iter.skip(tail - 1).map(BreadcrumbItem::Crumb));
        items
    }
}

// =============================================================================
// Request generations
// =============================================================================

/// Monotonic fetch tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// Issues generations and remembers the latest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestTracker {
    latest: Generation,
}

impl RequestTracker {
    pub fn issue(&mut self) -> Generation {
        self.latest = Generation(self.latest.0 + 1);
        self.latest
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.latest
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// What the listing pane shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListingState {
    #[default]
    Loading,
    Loaded(DirectoryListing),
    Failed(ContentError),
}

/// A fetch the view should perform: list `path`, then hand the result back
/// to [`Navigator::apply`] together with this ticket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: Generation,
    pub path: String,
}

/// Navigation state plus the listing for the current path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    state: NavigationState,
    tracker: RequestTracker,
    listing: ListingState,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_path(&self) -> &str {
        self.state.current_path()
    }

    pub fn listing(&self) -> &ListingState {
        &self.listing
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.listing, ListingState::Loading)
    }

    /// (Re-)load the current path with a fresh generation.
    pub fn refresh(&mut self) -> FetchTicket {
        self.listing = ListingState::Loading;
        FetchTicket {
            generation: self.tracker.issue(),
            path: self.state.current_path().to_string(),
        }
    }

    /// Start over at the root, e.g. for another repository. Generations keep
    /// counting, so a listing still in flight for the old tree is discarded.
    pub fn reset(&mut self) -> FetchTicket {
        self.state = NavigationState::new();
        self.refresh()
    }

    fn after(&mut self, changed: bool) -> Option<FetchTicket> {
        changed.then(|| self.refresh())
    }

    pub fn enter(&mut self, entry_path: &str) -> Option<FetchTicket> {
        let changed = self.state.enter(entry_path);
        self.after(changed)
    }

    pub fn go_back(&mut self) -> Option<FetchTicket> {
        let changed = self.state.go_back();
        self.after(changed)
    }

    pub fn go_to_root(&mut self) -> Option<FetchTicket> {
        let changed = self.state.go_to_root();
        self.after(changed)
    }

    pub fn jump_to_breadcrumb(&mut self, index: usize) -> Option<FetchTicket> {
        let changed = self.state.jump_to_breadcrumb(index);
        self.after(changed)
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) when a
    /// newer fetch has been issued since `ticket`.
    pub fn apply(
        &mut self,
        ticket: &FetchTicket,
        result: Result<DirectoryListing, ContentError>,
    ) -> bool {
        if !self.tracker.is_current(ticket.generation) {
            tracing::warn!(path = %ticket.path, "discarding stale directory listing");
            return false;
        }
        self.listing = match result {
            Ok(listing) => ListingState::Loaded(listing),
            Err(err) => ListingState::Failed(err),
        };
        true
    }
}
