use strum::Display;

/// Widest viewport (px) at which the card strip pages one card at a time.
pub(crate) const PAGING_BREAKPOINT_PX: f64 = 900.0;

/// Minimum horizontal travel (px) for a touch to count as a swipe.
pub(crate) const SWIPE_THRESHOLD_PX: i32 = 50;

/// How the description is laid out across cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub(crate) enum CardLayout {
    /// Verse card plus one description card.
    Single,
    /// Verse card plus the description split over two cards.
    #[default]
    Split,
}

impl CardLayout {
    pub fn card_count(self) -> usize {
        match self {
            CardLayout::Single => 2,
            CardLayout::Split => 3,
        }
    }
}

/// Saturating position over a fixed number of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CardNav {
    index: usize,
    count: usize,
}

impl CardNav {
    pub fn new(count: usize) -> Self {
        Self {
            index: 0,
            count: count.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn last_index(&self) -> usize {
        self.count - 1
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == self.last_index()
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn next(&mut self) {
        if self.index < self.last_index() {
            self.index += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    /// Indicator markers, `true` for the active card.
    pub fn markers(&self) -> Vec<bool> {
        (0..self.count).map(|i| i == self.index).collect()
    }

    /// Horizontal strip offset in percent. Wide viewports show every card
    /// side by side, so the strip never moves there.
    pub fn offset_percent(&self, viewport_width: f64) -> i64 {
        if viewport_width <= PAGING_BREAKPOINT_PX {
            -100 * self.index as i64
        } else {
            0
        }
    }

    pub fn apply(&mut self, swipe: Swipe) {
        match swipe {
            Swipe::Left => self.next(),
            Swipe::Right => self.previous(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum Swipe {
    /// Finger moved left; advance.
    Left,
    /// Finger moved right; go back.
    Right,
}

impl Swipe {
    pub fn classify(start_x: i32, end_x: i32) -> Option<Self> {
        let delta = start_x - end_x;
        if delta > SWIPE_THRESHOLD_PX {
            Some(Swipe::Left)
        } else if -delta > SWIPE_THRESHOLD_PX {
            Some(Swipe::Right)
        } else {
            None
        }
    }
}
