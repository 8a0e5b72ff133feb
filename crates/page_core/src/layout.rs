/// Widths below this use the stacked two-row navigation menu.
pub const NARROW_BREAKPOINT: i32 = 768;
/// Top offset reserved for the stacked two-row menu.
pub const STACKED_TOP_OFFSET: u32 = 100;
/// Top offset reserved for the single-row expanded menu.
pub const EXPANDED_TOP_OFFSET: u32 = 50;
/// Border/scrollbar allowance subtracted from the viewport height.
pub const BORDER_ALLOWANCE: i64 = 1;

/// Raw window dimension readings.
///
/// The inner readings may be zero or negative in embedding contexts that do
/// not report them; the screen readings are the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub inner_width: i32,
    pub inner_height: i32,
    pub screen_width: i32,
    pub screen_height: i32,
}

impl Viewport {
    /// Viewport whose inner and screen readings agree.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            inner_width: width,
            inner_height: height,
            screen_width: width,
            screen_height: height,
        }
    }

    pub fn with_screen(mut self, screen_width: i32, screen_height: i32) -> Self {
        self.screen_width = screen_width;
        self.screen_height = screen_height;
        self
    }

    /// Effective width: inner width if positive, else screen width.
    pub fn width(&self) -> i32 {
        first_positive(self.inner_width, self.screen_width)
    }

    /// Effective height: inner height if positive, else screen height.
    pub fn height(&self) -> i32 {
        first_positive(self.inner_height, self.screen_height)
    }
}

fn first_positive(primary: i32, fallback: i32) -> i32 {
    if primary > 0 {
        primary
    } else {
        fallback
    }
}

/// Layout derived from one viewport reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub navbar_collapsed: bool,
    pub top_offset: u32,
    /// `None` when the candidate height does not exceed the top offset and
    /// the content area must be left untouched.
    pub content_min_height: Option<u32>,
}

pub fn compute_layout(viewport: Viewport) -> Layout {
    let (navbar_collapsed, top_offset) = if viewport.width() < NARROW_BREAKPOINT {
        (true, STACKED_TOP_OFFSET)
    } else {
        (false, EXPANDED_TOP_OFFSET)
    };

    let candidate =
        (i64::from(viewport.height()) - BORDER_ALLOWANCE - i64::from(top_offset)).max(1);
    let content_min_height = u32::try_from(candidate)
        .ok()
        .filter(|height| *height > top_offset);

    Layout {
        navbar_collapsed,
        top_offset,
        content_min_height,
    }
}
