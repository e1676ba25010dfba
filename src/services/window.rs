//! Page window selection for navigation controls.
//!
//! Given the current page, the page count, and how many concrete page links may
//! be shown, picks the run of page numbers to display and decorates it with
//! first/last jump links and truncation markers:
//!
//! ```text
//! « 1 … 3 4 5 [6] 7 8 9 … 42 »
//! ```
//!
//! Placement follows an ordered decision list. With `half = ceil(visible / 2)`:
//! 1. more than `half` pages on both sides: a run centered on the current page,
//! 2. more than `half` pages on the left only: a run anchored to the last page,
//! 3. more than `half` pages on the right only: a run anchored to page 1,
//! 4. otherwise every page.
//!
//! The order matters when a span equals `half` exactly.

/// Concrete page links shown when the caller does not ask for a size.
pub const DEFAULT_VISIBLE: i64 = 8;

/// One slot of a decorated window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEntry {
    /// A page from the selected run.
    Page(i64),
    /// Jump link to page 1, shown when the run starts later.
    First,
    /// Jump link to the last page, shown when the run ends earlier.
    Last(i64),
    /// Truncation marker. `target` is the hidden page next to the run.
    Gap { target: i64 },
}

/// Decorated window plus previous/next targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Window {
    pub entries: Vec<WindowEntry>,
    pub prev: Option<i64>,
    pub next: Option<i64>,
}

/// Pick the run of page numbers to show, in ascending order.
///
/// `visible` below 1 is treated as 1. A size too small to produce any page
/// (1 or 2 when anchored to the start) yields just the current page.
pub fn select(current: i64, pages: i64, visible: i64) -> Vec<i64> {
    let visible = visible.max(1);
    let half = (visible + 1) / 2;
    let left = current - 1;
    let right = pages - current;

    let run: Vec<i64> = if left > half && right > half {
        (current - half + 1..(current + half).min(pages)).collect()
    } else if left > half {
        ((pages - half - 2).max(1)..=pages).collect()
    } else if right > half {
        (1..=(visible - 2).min(pages)).collect()
    } else {
        (1..=pages).collect()
    };

    if run.is_empty() {
        tracing::trace!(current, pages, visible, "Window too small, showing current page only");
        return vec![current];
    }

    run
}

/// Select the run and add jump links, truncation markers and prev/next targets.
///
/// Expects `1 <= current <= pages`; returns an empty window when `pages < 1`.
pub fn build(current: i64, pages: i64, visible: i64) -> Window {
    if pages < 1 {
        return Window::default();
    }

    let run = select(current, pages, visible);
    let (Some(&first), Some(&last)) = (run.first(), run.last()) else {
        return Window::default();
    };

    let mut entries = Vec::with_capacity(run.len() + 4);

    if first > 1 {
        entries.push(WindowEntry::First);
        if first != 2 {
            entries.push(WindowEntry::Gap { target: first - 1 });
        }
    }

    entries.extend(run.iter().map(|&page| WindowEntry::Page(page)));

    if last < pages {
        // Runs of one page have no second-to-last entry; probe the last one instead.
        let probe = run.iter().rev().nth(1).copied().unwrap_or(last);
        if probe != pages - 1 {
            entries.push(WindowEntry::Gap { target: last + 1 });
        }
        entries.push(WindowEntry::Last(pages));
    }

    Window {
        entries,
        prev: (current > 1).then_some(current - 1),
        next: (current < pages).then_some(current + 1),
    }
}
